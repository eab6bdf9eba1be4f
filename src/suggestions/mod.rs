/// Static advisory suggestions keyed by detected crop issue
const PEST_DAMAGE: &[&str] = &[
    "1. Inspect crops regularly for early pest detection",
    "2. Consider using organic pesticides or neem-based solutions",
    "3. Implement integrated pest management (IPM) practices",
    "4. Remove affected plants to prevent spread",
    "5. Consult local agricultural officers for region-specific advice",
];

const WATER_STRESS: &[&str] = &[
    "1. Increase irrigation frequency immediately",
    "2. Check soil moisture levels regularly",
    "3. Consider drip irrigation for efficient water use",
    "4. Apply mulch to retain soil moisture",
    "5. Monitor weather forecasts for rainfall predictions",
];

const NUTRIENT_DEFICIENCY: &[&str] = &[
    "1. Conduct soil testing to identify specific deficiencies",
    "2. Apply balanced NPK fertilizers as recommended",
    "3. Consider organic compost or manure application",
    "4. Monitor leaf color and growth patterns",
    "5. Maintain proper pH levels in soil",
];

const HEALTHY_CROP: &[&str] = &[
    "1. Continue current farming practices",
    "2. Maintain regular monitoring schedule",
    "3. Ensure adequate water and nutrients",
    "4. Plan for timely harvesting",
    "5. Keep records for future reference",
];

const GENERIC: &[&str] = &[
    "1. Monitor crops regularly for any changes",
    "2. Maintain good agricultural practices",
    "3. Consult with agricultural experts if issues persist",
];

/// Look up the fixed advisory list for an issue label.
///
/// Total over any input: labels without a dedicated list get the generic
/// fallback.
pub fn suggestions_for(issue: &str) -> &'static [&'static str] {
    match issue {
        "Pest Damage Detected" => PEST_DAMAGE,
        "Water Stress/Dryness" => WATER_STRESS,
        "Nutrient Deficiency" => NUTRIENT_DEFICIENCY,
        "Healthy Crop" => HEALTHY_CROP,
        _ => GENERIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CropIssue;

    #[test]
    fn test_lookup_is_total_over_all_labels() {
        for issue in CropIssue::ALL {
            assert!(!suggestions_for(issue.as_str()).is_empty());
        }
    }

    #[test]
    fn test_unknown_label_gets_generic_fallback() {
        let suggestions = suggestions_for("Alien Infestation");
        assert_eq!(suggestions.len(), 3);
        assert_eq!(suggestions, GENERIC);
    }

    #[test]
    fn test_known_labels_get_dedicated_lists() {
        assert_eq!(suggestions_for("Pest Damage Detected").len(), 5);
        assert!(suggestions_for("Water Stress/Dryness")[0].contains("irrigation"));
    }
}
