//! Prediction result returned for one classified image.

use crate::core::constants::CONFIDENCE_DECIMALS;
use serde::{Serialize, Serializer};

/// Outcome of classifying one image.
///
/// `confidence` keeps full precision; it is rounded to four decimals only
/// when the result is serialized or explicitly asked for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionResult {
    pub class_id: usize,
    #[serde(serialize_with = "serialize_rounded")]
    pub confidence: f64,
    pub class_name: String,
}

impl PredictionResult {
    pub fn new(class_id: usize, confidence: f64, class_name: impl Into<String>) -> Self {
        Self {
            class_id,
            confidence,
            class_name: class_name.into(),
        }
    }

    /// Confidence rounded half away from zero to four decimals.
    pub fn rounded_confidence(&self) -> f64 {
        round_confidence(self.confidence)
    }
}

/// Rounds a probability to the reported precision.
pub fn round_confidence(value: f64) -> f64 {
    let factor = 10f64.powi(CONFIDENCE_DECIMALS);
    (value * factor).round() / factor
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_confidence(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_confidence() {
        assert_eq!(round_confidence(1.0 / 30.0), 0.0333);
        assert_eq!(round_confidence(1.0 / 6.0), 0.1667);
        assert_eq!(round_confidence(0.999_99), 1.0);
        assert_eq!(round_confidence(0.0), 0.0);
    }

    #[test]
    fn test_serializes_exact_field_set() {
        let result = PredictionResult::new(4, 0.987_654_3, "Navicula");
        let json = serde_json::to_value(&result).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert_eq!(json["class_id"], 4);
        assert_eq!(json["confidence"], 0.9877);
        assert_eq!(json["class_name"], "Navicula");
    }

    #[test]
    fn test_full_precision_is_kept_in_memory() {
        let result = PredictionResult::new(0, 0.123_456, "Class_0");
        assert_eq!(result.confidence, 0.123_456);
        assert_eq!(result.rounded_confidence(), 0.1235);
    }
}
