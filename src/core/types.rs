use serde::{Deserialize, Serialize};

/// One numeric observation, optionally tagged with a category label
/// (for example a battery brand).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Observation {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    #[must_use]
    pub fn labeled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    #[must_use]
    pub fn label_or_empty(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}

impl From<f64> for Observation {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Extracts the raw values of a slice of observations, preserving order.
#[must_use]
pub fn observation_values(observations: &[Observation]) -> Vec<f64> {
    observations.iter().map(|observation| observation.value).collect()
}
