//! Prediction service: owns the model handle for the process lifetime and
//! turns raw scores into labeled results.

use std::sync::Arc;

use thiserror::Error;

use crate::features::FEATURE_COUNT;
use crate::model::RegressionModel;

/// Returned when prediction is attempted before a model was loaded.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("prediction model is not loaded")]
pub struct ServiceUnready;

/// Productivity bucket for a predicted score. Boundaries belong to the
/// higher bucket: exactly 0.5 is Medium, exactly 0.75 is HighlyProductive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductivityLabel {
    Low,
    Medium,
    HighlyProductive,
}

impl ProductivityLabel {
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            Self::HighlyProductive
        } else if score >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn sentence(self) -> &'static str {
        match self {
            Self::HighlyProductive => "The employee is Highly Productive.",
            Self::Medium => "The employee has Medium Productivity.",
            Self::Low => "The employee has Low Productivity.",
        }
    }
}

/// Round a raw model output to the three decimals surfaced to the user.
pub fn round3(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Score rounded to three decimals.
    pub score: f64,
    pub label: ProductivityLabel,
}

/// Holds the model handle loaded at startup. A service that starts unready
/// stays unready; there is no reload path.
pub struct PredictionService {
    model: Option<Arc<RegressionModel>>,
}

impl PredictionService {
    pub fn ready(model: RegressionModel) -> Self {
        Self {
            model: Some(Arc::new(model)),
        }
    }

    pub fn unready() -> Self {
        Self { model: None }
    }

    pub fn is_ready(&self) -> bool {
        self.model.is_some()
    }

    /// Score one vector. Rounding happens before labeling, so the label
    /// always matches the score the user sees.
    pub fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<Prediction, ServiceUnready> {
        let model = self.model.as_ref().ok_or(ServiceUnready)?;
        let score = round3(model.predict(features));
        Ok(Prediction {
            score,
            label: ProductivityLabel::from_score(score),
        })
    }
}
