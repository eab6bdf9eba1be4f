/// Utility functions

/// Round to one decimal place
pub fn round1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Round to two decimal places
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.35), 12.4);
        assert_eq!(round1(-0.05), -0.1);
    }

    #[test]
    fn test_round1_integral_is_unchanged() {
        assert_eq!(round1(25.0), 25.0);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.825), 0.83);
        assert_eq!(round2(99.999), 100.0);
    }
}
