/// Image metric extraction and heuristic crop classification
use image::imageops::FilterType;

use crate::domain::{AnalysisMetrics, AnalysisResult, CropIssue, ImageSample, Severity};
use crate::errors::{ApiError, ApiResult};
use crate::utils::round2;

/// All uploads are normalized to this square size before analysis.
const NORMALIZED_SIZE: u32 = 512;

/// Decode raw upload bytes and normalize to a 512x512 RGB pixel grid.
///
/// `resize_exact` with the Triangle filter is deterministic for identical
/// input bytes.
pub fn extract_sample(bytes: &[u8]) -> ApiResult<ImageSample> {
    let decoded = image::load_from_memory(bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
    let rgb = decoded
        .resize_exact(NORMALIZED_SIZE, NORMALIZED_SIZE, FilterType::Triangle)
        .to_rgb8();

    let pixels = rgb.pixels().map(|p| [p[0], p[1], p[2]]).collect();
    Ok(ImageSample {
        width: rgb.width(),
        height: rgb.height(),
        pixels,
    })
}

/// Channel statistics a classification rule is evaluated against.
#[derive(Debug, Clone, Copy)]
struct ChannelStats {
    avg_r: f64,
    avg_g: f64,
    avg_b: f64,
    brightness: f64,
}

/// One entry of the ordered decision table.
struct Rule {
    applies: fn(&ChannelStats) -> bool,
    issue: CropIssue,
    confidence: f64,
    severity: Severity,
}

/// Ordered decision table; the first matching rule wins. Evaluation order
/// is load-bearing: a dark all-green image is water stress, not healthy.
const RULES: &[Rule] = &[
    Rule {
        applies: |s| s.brightness < 80.0,
        issue: CropIssue::WaterStress,
        confidence: 0.82,
        severity: Severity::High,
    },
    Rule {
        applies: |s| s.avg_g > s.avg_r && s.avg_g > s.avg_b,
        issue: CropIssue::HealthyCrop,
        confidence: 0.92,
        severity: Severity::None,
    },
    Rule {
        applies: |s| s.avg_r > s.avg_g,
        issue: CropIssue::PestDamage,
        confidence: 0.78,
        severity: Severity::Medium,
    },
];

/// Result when no rule matches.
const FALLBACK: Rule = Rule {
    applies: |_| true,
    issue: CropIssue::NutrientDeficiency,
    confidence: 0.75,
    severity: Severity::Medium,
};

/// Classify a normalized image sample.
///
/// Pure decision table over channel averages, reproduced verbatim from the
/// deployed heuristic; not a learned model.
pub fn classify(sample: &ImageSample) -> AnalysisResult {
    let (issue, confidence, severity, brightness) = match sample.channel_averages() {
        Some((avg_r, avg_g, avg_b)) => {
            let brightness = (avg_r + avg_g + avg_b) / 3.0;
            let stats = ChannelStats {
                avg_r,
                avg_g,
                avg_b,
                brightness,
            };
            let rule = RULES
                .iter()
                .find(|r| (r.applies)(&stats))
                .unwrap_or(&FALLBACK);
            (rule.issue, rule.confidence, rule.severity, brightness)
        }
        // Empty pixel grid: nothing to measure, report a benign default.
        None => (CropIssue::HealthyCrop, 0.85, Severity::None, 100.0),
    };

    AnalysisResult {
        primary_issue: issue,
        confidence,
        severity,
        metrics: AnalysisMetrics {
            brightness: round2(brightness),
            image_size: format!("{}x{}", sample.width, sample.height),
            total_pixels: sample.width as u64 * sample.height as u64,
        },
        secondary_observations: secondary_observations(brightness),
    }
}

fn secondary_observations(brightness: f64) -> Vec<String> {
    let mut observations = Vec::new();
    if brightness < 100.0 {
        observations.push("Low brightness may indicate water stress or disease".to_string());
    } else {
        observations.push("Good brightness levels detected".to_string());
    }
    observations.push("Consider regular monitoring for optimal crop health".to_string());
    observations
}
