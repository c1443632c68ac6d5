use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub bmi: Option<f64>,
    pub prakriti: String,
    pub diet: String,
    pub meal_frequency: i32,
    pub water_intake: f64,
    pub activity_level: String,
    pub bowel_movement: String,
    pub sleep_hours: i32,
    pub stress_level: String,
    pub medical_history: String,
    pub current_medications: String,
    pub allergies: String,
    pub occupation: String,
    pub exercise_frequency: String,
    pub last_visit: Date,
    pub created_at: OffsetDateTime,
}

const COLUMNS: &str = r#"id, name, age, gender, phone, email, height, weight, bmi, prakriti,
    diet, meal_frequency, water_intake, activity_level, bowel_movement, sleep_hours,
    stress_level, medical_history, current_medications, allergies, occupation,
    exercise_frequency, last_visit, created_at"#;

impl Patient {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> anyhow::Result<Vec<Patient>> {
        let sql = format!(
            "SELECT {COLUMNS} FROM patients ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Patient>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(db)
            .await?;
        Ok(rows)
    }

    pub async fn find(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Patient>> {
        let sql = format!("SELECT {COLUMNS} FROM patients WHERE id = $1");
        let row = sqlx::query_as::<_, Patient>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?;
        Ok(row)
    }

    pub async fn create(db: &PgPool, new: NewPatient) -> anyhow::Result<Patient> {
        let sql = format!(
            r#"
            INSERT INTO patients
                (name, age, gender, phone, email, height, weight, bmi, prakriti, diet,
                 meal_frequency, water_intake, activity_level, bowel_movement, sleep_hours,
                 stress_level, medical_history, current_medications, allergies, occupation,
                 exercise_frequency)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
            RETURNING {COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, Patient>(&sql)
            .bind(new.name)
            .bind(new.age)
            .bind(new.gender)
            .bind(new.phone)
            .bind(new.email)
            .bind(new.height)
            .bind(new.weight)
            .bind(new.bmi)
            .bind(new.prakriti)
            .bind(new.diet)
            .bind(new.meal_frequency)
            .bind(new.water_intake)
            .bind(new.activity_level)
            .bind(new.bowel_movement)
            .bind(new.sleep_hours)
            .bind(new.stress_level)
            .bind(new.medical_history)
            .bind(new.current_medications)
            .bind(new.allergies)
            .bind(new.occupation)
            .bind(new.exercise_frequency)
            .fetch_one(db)
            .await?;
        Ok(row)
    }
}

#[derive(Debug, Clone)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub bmi: Option<f64>,
    pub prakriti: String,
    pub diet: String,
    pub meal_frequency: i32,
    pub water_intake: f64,
    pub activity_level: String,
    pub bowel_movement: String,
    pub sleep_hours: i32,
    pub stress_level: String,
    pub medical_history: String,
    pub current_medications: String,
    pub allergies: String,
    pub occupation: String,
    pub exercise_frequency: String,
}
