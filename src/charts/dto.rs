use serde::Deserialize;
use uuid::Uuid;

pub const DEFAULT_GOAL: &str = "Maintenance";
pub const DEFAULT_TARGET_CALORIES: i64 = 2000;
pub const DEFAULT_DURATION_DAYS: i64 = 30;

#[derive(Debug, Deserialize)]
pub struct GenerateChartRequest {
    pub patient_id: Uuid,
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default = "default_target_calories")]
    pub target_calories: i64,
    #[serde(default = "default_duration")]
    pub duration: i64,
}

impl GenerateChartRequest {
    /// Non-positive targets fall back to the 2000 kcal default.
    pub fn effective_target(&self) -> i64 {
        if self.target_calories > 0 {
            self.target_calories
        } else {
            DEFAULT_TARGET_CALORIES
        }
    }

    pub fn effective_duration(&self) -> i64 {
        if self.duration > 0 {
            self.duration
        } else {
            DEFAULT_DURATION_DAYS
        }
    }
}

fn default_goal() -> String {
    DEFAULT_GOAL.into()
}
fn default_target_calories() -> i64 {
    DEFAULT_TARGET_CALORIES
}
fn default_duration() -> i64 {
    DEFAULT_DURATION_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_apply_when_fields_are_absent() {
        let req: GenerateChartRequest = serde_json::from_str(
            r#"{"patient_id": "7f2c1a90-5b7e-4a52-9a75-2d8f3f1f9f00"}"#,
        )
        .unwrap();
        assert_eq!(req.goal, "Maintenance");
        assert_eq!(req.effective_target(), 2000);
        assert_eq!(req.effective_duration(), 30);
    }

    #[test]
    fn invalid_target_falls_back_to_default() {
        let req: GenerateChartRequest = serde_json::from_str(
            r#"{"patient_id": "7f2c1a90-5b7e-4a52-9a75-2d8f3f1f9f00", "target_calories": -100}"#,
        )
        .unwrap();
        assert_eq!(req.effective_target(), 2000);
    }
}
