use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chart::Constitution;

#[derive(Debug, Deserialize)]
pub struct CreateAssessmentRequest {
    pub patient_id: Option<Uuid>,
    #[serde(default = "default_assessment_type")]
    pub assessment_type: String,
    #[serde(default)]
    pub responses: serde_json::Value,
    pub primary_dosha: String,
    #[serde(default)]
    pub dosha_scores: serde_json::Value,
    #[serde(default)]
    pub confidence: f64,
}

fn default_assessment_type() -> String {
    "comprehensive".into()
}

/// Static advice sets attached to an assessment, keyed by primary dosha.
#[derive(Debug, Serialize)]
pub struct DoshaRecommendations {
    pub diet: &'static [&'static str],
    pub lifestyle: &'static [&'static str],
    pub herbs: &'static [&'static str],
}

pub fn recommendations_for(primary_dosha: &str) -> DoshaRecommendations {
    match Constitution::from_prakriti(primary_dosha) {
        Constitution::Vata => DoshaRecommendations {
            diet: &["Warm, cooked foods", "Sweet, sour, salty tastes", "Regular meals"],
            lifestyle: &["Regular routine", "Gentle exercise", "Meditation", "Warm environment"],
            herbs: &["Ashwagandha", "Brahmi", "Jatamansi"],
        },
        Constitution::Pitta => DoshaRecommendations {
            diet: &["Cool, fresh foods", "Sweet, bitter, astringent tastes", "Avoid spicy foods"],
            lifestyle: &["Moderate exercise", "Cool environment", "Avoid overwork"],
            herbs: &["Amla", "Neem", "Shatavari"],
        },
        Constitution::Kapha => DoshaRecommendations {
            diet: &["Light, warm foods", "Pungent, bitter, astringent tastes", "Avoid heavy foods"],
            lifestyle: &["Vigorous exercise", "Stimulating activities", "Warm environment"],
            herbs: &["Trikatu", "Guggul", "Turmeric"],
        },
    }
}
