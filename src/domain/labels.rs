use serde::{Deserialize, Serialize};

/// Cosmetic names for the four half-axes of the priority plane
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLabels {
    pub x_positive: String,
    pub x_negative: String,
    pub y_positive: String,
    pub y_negative: String,
}

impl Default for AxisLabels {
    fn default() -> Self {
        Self {
            x_positive: "Urgent".to_string(),
            x_negative: "Not urgent".to_string(),
            y_positive: "Important".to_string(),
            y_negative: "Not important".to_string(),
        }
    }
}
