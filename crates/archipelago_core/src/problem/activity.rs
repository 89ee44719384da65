use serde::Serialize;

/// Time unit shared by edge weights, activity durations and search budgets.
pub type TravelTime = f64;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Activity {
    label: String,
    duration: TravelTime,
}

impl Activity {
    pub fn new(label: impl Into<String>, duration: TravelTime) -> Self {
        Self {
            label: label.into(),
            duration,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn duration(&self) -> TravelTime {
        self.duration
    }
}
