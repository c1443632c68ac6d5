use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DoshaAssessment {
    pub id: Uuid,
    pub patient_id: Option<Uuid>,
    pub assessment_type: String,
    pub responses: serde_json::Value,
    pub primary_dosha: String,
    pub dosha_scores: serde_json::Value,
    pub confidence: f64,
    pub recommendations: serde_json::Value,
    pub created_at: OffsetDateTime,
}

impl DoshaAssessment {
    pub async fn list(db: &PgPool) -> anyhow::Result<Vec<DoshaAssessment>> {
        let rows = sqlx::query_as::<_, DoshaAssessment>(
            r#"
            SELECT id, patient_id, assessment_type, responses, primary_dosha,
                   dosha_scores, confidence, recommendations, created_at
            FROM dosha_assessments
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &PgPool,
        patient_id: Option<Uuid>,
        assessment_type: &str,
        responses: serde_json::Value,
        primary_dosha: &str,
        dosha_scores: serde_json::Value,
        confidence: f64,
        recommendations: serde_json::Value,
    ) -> anyhow::Result<DoshaAssessment> {
        let row = sqlx::query_as::<_, DoshaAssessment>(
            r#"
            INSERT INTO dosha_assessments
                (patient_id, assessment_type, responses, primary_dosha,
                 dosha_scores, confidence, recommendations)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, patient_id, assessment_type, responses, primary_dosha,
                      dosha_scores, confidence, recommendations, created_at
            "#,
        )
        .bind(patient_id)
        .bind(assessment_type)
        .bind(responses)
        .bind(primary_dosha)
        .bind(dosha_scores)
        .bind(confidence)
        .bind(recommendations)
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
