use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    #[serde(default)]
    pub prakriti: String,
    #[serde(default = "default_diet")]
    pub diet: String,
    #[serde(default = "default_meal_frequency")]
    pub meal_frequency: i32,
    #[serde(default = "default_water_intake")]
    pub water_intake: f64,
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
    #[serde(default = "default_bowel_movement")]
    pub bowel_movement: String,
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: i32,
    #[serde(default = "default_stress_level")]
    pub stress_level: String,
    #[serde(default)]
    pub medical_history: String,
    #[serde(default)]
    pub current_medications: String,
    #[serde(default)]
    pub allergies: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub exercise_frequency: String,
}

fn default_diet() -> String {
    "Vegetarian".into()
}
fn default_meal_frequency() -> i32 {
    3
}
fn default_water_intake() -> f64 {
    2.5
}
fn default_activity_level() -> String {
    "Moderate".into()
}
fn default_bowel_movement() -> String {
    "Regular".into()
}
fn default_sleep_hours() -> i32 {
    7
}
fn default_stress_level() -> String {
    "Medium".into()
}

#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}
fn default_limit() -> i64 {
    50
}

/// BMI from height in cm and weight in kg, rounded to one decimal.
pub fn compute_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    match (height_cm, weight_kg) {
        (Some(h), Some(w)) if h > 0.0 => {
            let height_m = h / 100.0;
            Some((w / (height_m * height_m) * 10.0).round() / 10.0)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bmi_rounds_to_one_decimal() {
        assert_eq!(compute_bmi(Some(170.0), Some(65.0)), Some(22.5));
        assert_eq!(compute_bmi(Some(180.0), Some(80.0)), Some(24.7));
    }

    #[test]
    fn bmi_requires_both_measurements() {
        assert_eq!(compute_bmi(Some(170.0), None), None);
        assert_eq!(compute_bmi(None, Some(65.0)), None);
        assert_eq!(compute_bmi(Some(0.0), Some(65.0)), None);
    }

    #[test]
    fn create_request_fills_lifestyle_defaults() {
        let req: CreatePatientRequest =
            serde_json::from_str(r#"{"name": "Asha", "age": 34, "gender": "Female"}"#).unwrap();
        assert_eq!(req.diet, "Vegetarian");
        assert_eq!(req.meal_frequency, 3);
        assert_eq!(req.water_intake, 2.5);
        assert_eq!(req.activity_level, "Moderate");
        assert_eq!(req.sleep_hours, 7);
        assert_eq!(req.stress_level, "Medium");
        assert!(req.prakriti.is_empty());
    }
}
