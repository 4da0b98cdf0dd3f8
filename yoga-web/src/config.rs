//! Match calibration - tunable constants for scoring and sequence mode
//!
//! All values are empirical. JS may override any subset with a JSON
//! document; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::error::{PoseError, Result};
use crate::pose::{DEFAULT_ANGLE_SIGMA, DEFAULT_VISIBILITY_THRESHOLD, DEFAULT_ZERO_MATCH_DISTANCE};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Average normalized joint distance that maps to a 0% match
    pub zero_match_distance: f32,
    /// Best-match confidence below this is reported as "unknown"
    pub confidence_gate: f32,
    /// Score needed to complete the current pose of a sequence
    pub advance_threshold: u8,
    /// Delay between completing a pose and moving to the next (milliseconds)
    pub settle_delay_ms: f64,
    /// Landmarks at or below this visibility are hidden from the overlay
    pub visibility_threshold: f32,
    /// Spread of the angle-error score curve (degrees)
    pub angle_sigma: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            zero_match_distance: DEFAULT_ZERO_MATCH_DISTANCE,
            confidence_gate: 50.0,
            advance_threshold: 85,
            settle_delay_ms: 1500.0,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            angle_sigma: DEFAULT_ANGLE_SIGMA,
        }
    }
}

impl MatchConfig {
    /// Parse a (possibly partial) JSON config and check its ranges
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(PoseError::Config)?;
        config.validate()?;
        Ok(config)
    }

    /// Every field must lie in its usable range
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (
                self.zero_match_distance.is_finite() && self.zero_match_distance > 0.0,
                "zero_match_distance must be a positive number",
            ),
            (
                (0.0..=100.0).contains(&self.confidence_gate),
                "confidence_gate must be within 0-100",
            ),
            (
                self.advance_threshold <= 100,
                "advance_threshold must be within 0-100",
            ),
            (
                self.settle_delay_ms.is_finite() && self.settle_delay_ms >= 0.0,
                "settle_delay_ms must be a non-negative number",
            ),
            (
                (0.0..=1.0).contains(&self.visibility_threshold),
                "visibility_threshold must be within 0-1",
            ),
            (
                self.angle_sigma.is_finite() && self.angle_sigma > 0.0,
                "angle_sigma must be a positive number",
            ),
        ];

        match checks.into_iter().find(|(ok, _)| !ok) {
            Some((_, reason)) => Err(PoseError::InvalidConfig(reason)),
            None => Ok(()),
        }
    }

    pub fn to_json(&self) -> String {
        // Plain numeric struct, serialization cannot fail
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = MatchConfig::from_json(r#"{ "advance_threshold": 90 }"#).unwrap();
        assert_eq!(config.advance_threshold, 90);
        assert_eq!(config.zero_match_distance, 0.5);
        assert_eq!(config.confidence_gate, 50.0);
        assert_eq!(config.settle_delay_ms, 1500.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = MatchConfig::from_json("{}").unwrap();
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_malformed_json_is_config_error() {
        let err = MatchConfig::from_json("{ advance_threshold: }").unwrap_err();
        assert!(matches!(err, PoseError::Config(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let config = MatchConfig {
            settle_delay_ms: 500.0,
            ..MatchConfig::default()
        };
        let parsed = MatchConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_default_is_valid() {
        assert!(MatchConfig::default().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        let cases = [
            r#"{ "zero_match_distance": -0.5 }"#,
            r#"{ "zero_match_distance": 0.0 }"#,
            r#"{ "confidence_gate": 150.0 }"#,
            r#"{ "confidence_gate": -1.0 }"#,
            r#"{ "advance_threshold": 101 }"#,
            r#"{ "settle_delay_ms": -10.0 }"#,
            r#"{ "visibility_threshold": 1.5 }"#,
            r#"{ "angle_sigma": 0.0 }"#,
            r#"{ "angle_sigma": -25.0 }"#,
        ];
        for json in cases {
            let err = MatchConfig::from_json(json).unwrap_err();
            assert!(matches!(err, PoseError::InvalidConfig(_)), "{json}");
        }
    }

    #[test]
    fn test_rejection_names_the_field() {
        let err = MatchConfig::from_json(r#"{ "zero_match_distance": -0.5 }"#).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid match config: zero_match_distance must be a positive number"
        );
    }

    #[test]
    fn test_non_finite_values_rejected() {
        let config = MatchConfig {
            zero_match_distance: f32::INFINITY,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MatchConfig {
            settle_delay_ms: f64::NAN,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
