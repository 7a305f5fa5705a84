//! The trained regression artifact: loading, validation, inference.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::features::FEATURE_COUNT;

#[derive(Deserialize)]
struct ArtifactJson {
    feature_names: Vec<String>,
    model: ModelSpec,
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum ModelSpec {
    LinearRegression { weights: Vec<f64>, intercept: f64 },
}

/// The loaded model handle. Immutable for the process lifetime; its single
/// operation maps an ordered feature vector to a scalar score.
#[derive(Debug)]
pub struct RegressionModel {
    weights: [f64; FEATURE_COUNT],
    intercept: f64,
}

impl RegressionModel {
    pub fn new(weights: [f64; FEATURE_COUNT], intercept: f64) -> Self {
        Self { weights, intercept }
    }

    /// Read and validate the serialized artifact.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read model artifact at {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("invalid model artifact at {}", path.display()))
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let artifact: ArtifactJson =
            serde_json::from_str(raw).context("malformed artifact JSON")?;
        if artifact.feature_names.len() != FEATURE_COUNT {
            bail!(
                "artifact lists {} features, expected {}",
                artifact.feature_names.len(),
                FEATURE_COUNT
            );
        }
        let ModelSpec::LinearRegression { weights, intercept } = artifact.model;
        let weights: [f64; FEATURE_COUNT] = weights.try_into().map_err(|w: Vec<f64>| {
            anyhow::anyhow!("artifact has {} weights, expected {}", w.len(), FEATURE_COUNT)
        })?;
        Ok(Self::new(weights, intercept))
    }

    /// Deterministic score for one ordered vector.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> f64 {
        let mut sum = self.intercept;
        for (weight, value) in self.weights.iter().zip(features) {
            sum += weight * value;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(count: usize) -> String {
        let quoted: Vec<String> = (0..count).map(|i| format!("\"f{i}\"")).collect();
        quoted.join(", ")
    }

    #[test]
    fn predict_is_dot_product_plus_intercept() {
        let mut weights = [0.0; FEATURE_COUNT];
        weights[0] = 0.5;
        weights[4] = 0.3;
        let model = RegressionModel::new(weights, 0.1);

        let mut features = [0.0; FEATURE_COUNT];
        features[0] = 2.0;
        features[4] = 3.0;
        // 0.5*2 + 0.3*3 + 0.1 = 2.0
        assert!((model.predict(&features) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn zero_weights_predict_the_intercept() {
        let model = RegressionModel::new([0.0; FEATURE_COUNT], 0.42);
        let features = [7.0; FEATURE_COUNT];
        assert!((model.predict(&features) - 0.42).abs() < 1e-9);
    }

    #[test]
    fn artifact_parses_with_matching_dimensions() {
        let raw = format!(
            r#"{{
                "feature_names": [{}],
                "model": {{
                    "kind": "linear_regression",
                    "weights": [0.1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                    "intercept": 0.25
                }}
            }}"#,
            names(FEATURE_COUNT)
        );
        let model = RegressionModel::from_json(&raw).unwrap();
        let mut features = [0.0; FEATURE_COUNT];
        features[0] = 1.0;
        assert!((model.predict(&features) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn artifact_with_wrong_feature_count_is_rejected() {
        let raw = format!(
            r#"{{
                "feature_names": [{}],
                "model": {{
                    "kind": "linear_regression",
                    "weights": [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
                    "intercept": 0.0
                }}
            }}"#,
            names(FEATURE_COUNT + 1)
        );
        let err = RegressionModel::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("14 features"));
    }

    #[test]
    fn artifact_with_short_weight_vector_is_rejected() {
        let raw = format!(
            r#"{{
                "feature_names": [{}],
                "model": {{
                    "kind": "linear_regression",
                    "weights": [0.1, 0.2],
                    "intercept": 0.0
                }}
            }}"#,
            names(FEATURE_COUNT)
        );
        let err = RegressionModel::from_json(&raw).unwrap_err();
        assert!(err.to_string().contains("2 weights"));
    }

    #[test]
    fn garbage_artifact_is_rejected() {
        assert!(RegressionModel::from_json("not json").is_err());
    }
}
