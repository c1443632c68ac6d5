//! Chart assembly: walk the day template, run the selector per slot, and
//! attach the constitution and seasonal advice lists.

use serde::{Deserialize, Serialize};
use time::Date;

use super::catalog::Catalog;
use super::constitution::Constitution;
use super::selector::{select_foods, SelectedFood, SelectionLimits};
use super::slots::plan_slots;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    pub name: String,
    pub time: String,
    pub items: Vec<SelectedFood>,
    pub total_calories: i64,
}

/// The generated chart payload, persisted as-is on the DietChart record.
/// Field names follow the established camelCase wire shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietChartData {
    pub patient_name: String,
    pub constitution: String,
    pub goal: String,
    pub calories: i64,
    pub duration: i64,
    pub date: String,
    pub meals: Vec<PlannedMeal>,
    pub guidelines: Vec<String>,
    pub seasonal_recommendations: Vec<String>,
    pub do_not_eat: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ChartInputs<'a> {
    pub patient_name: &'a str,
    pub prakriti: &'a str,
    pub goal: &'a str,
    pub target_calories: i64,
    pub duration: i64,
    pub generated_on: Date,
}

/// Generate a full diet chart. Deterministic for a given catalog snapshot,
/// inputs, and generation date; never fails on catalog gaps (the fallback
/// table guarantees every slot is populated).
pub fn generate_chart(
    catalog: &dyn Catalog,
    inputs: &ChartInputs<'_>,
    limits: SelectionLimits,
) -> DietChartData {
    let constitution = Constitution::from_prakriti(inputs.prakriti);
    let target = inputs.target_calories as f64;

    let meals = plan_slots()
        .iter()
        .map(|slot| {
            let items = select_foods(
                catalog,
                constitution,
                slot.name,
                slot.calories_for(target),
                limits,
            );
            let total_calories = items.iter().map(|i| i.calories).sum();
            PlannedMeal {
                name: slot.name.to_string(),
                time: slot.time.to_string(),
                items,
                total_calories,
            }
        })
        .collect();

    let profile = constitution.profile();
    DietChartData {
        patient_name: inputs.patient_name.to_string(),
        constitution: constitution.as_str().to_string(),
        goal: inputs.goal.to_string(),
        calories: inputs.target_calories,
        duration: inputs.duration,
        date: format_date(inputs.generated_on),
        meals,
        guidelines: profile.guidelines.iter().map(|s| s.to_string()).collect(),
        seasonal_recommendations: seasonal_recommendations(inputs.generated_on.month() as u8)
            .iter()
            .map(|s| s.to_string())
            .collect(),
        do_not_eat: profile.avoid.iter().map(|s| s.to_string()).collect(),
    }
}

fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Calendar-month seasonal advice: Winter Dec-Feb, Spring Mar-May,
/// Summer Jun-Aug, Monsoon otherwise.
pub fn seasonal_recommendations(month: u8) -> &'static [&'static str] {
    match month {
        12 | 1 | 2 => &["Warming foods", "Hot beverages", "Cooked grains", "Healthy fats"],
        3..=5 => &["Light foods", "Detox drinks", "Fresh vegetables", "Minimal oils"],
        6..=8 => &["Cooling foods", "Fresh fruits", "Coconut water", "Light meals"],
        _ => &["Warm foods", "Digestive spices", "Avoid raw foods", "Herbal teas"],
    }
}
