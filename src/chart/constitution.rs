//! Constitution resolution and food compatibility scoring.
//!
//! Each constitution carries a data-driven profile: the virya/guna labels it
//! tolerates, its dietary guidelines, and the foods it should avoid. The
//! scorer is a pure function over catalog data.

use crate::foods::FoodItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constitution {
    Vata,
    Pitta,
    Kapha,
}

/// Per-constitution rule table: compatibility predicates plus the static
/// guideline and avoidance text attached to generated charts.
pub struct ConstitutionProfile {
    pub virya: &'static [&'static str],
    pub guna: &'static [&'static str],
    pub guidelines: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

static VATA_PROFILE: ConstitutionProfile = ConstitutionProfile {
    virya: &["hot", "warm"],
    guna: &["heavy", "moist"],
    guidelines: &[
        "Eat warm, cooked foods",
        "Include sweet, sour, and salty tastes",
        "Avoid cold, raw foods",
        "Maintain regular meal times",
        "Include healthy fats and oils",
    ],
    avoid: &[
        "Cold foods",
        "Raw vegetables",
        "Excess bitter taste",
        "Dry foods",
    ],
};

static PITTA_PROFILE: ConstitutionProfile = ConstitutionProfile {
    virya: &["cold", "cool"],
    guna: &["light", "cooling"],
    guidelines: &[
        "Eat cooling, calming foods",
        "Include sweet, bitter, and astringent tastes",
        "Avoid spicy, hot foods",
        "Eat at regular intervals",
        "Include fresh fruits and vegetables",
    ],
    avoid: &["Spicy foods", "Hot beverages", "Sour foods", "Fried foods"],
};

static KAPHA_PROFILE: ConstitutionProfile = ConstitutionProfile {
    virya: &["hot", "warm"],
    guna: &["light", "dry"],
    guidelines: &[
        "Eat light, warm foods",
        "Include pungent, bitter, and astringent tastes",
        "Avoid heavy, oily foods",
        "Eat smaller portions",
        "Include plenty of vegetables and spices",
    ],
    avoid: &["Heavy foods", "Oily foods", "Sweet foods", "Cold drinks"],
};

impl Constitution {
    /// Resolve a patient's free-text prakriti. Case-insensitive substring
    /// match; dual types resolve to the first dosha named; anything
    /// unrecognized (or blank) defaults to Vata.
    pub fn from_prakriti(prakriti: &str) -> Self {
        let p = prakriti.to_lowercase();
        [
            ("vata", Constitution::Vata),
            ("pitta", Constitution::Pitta),
            ("kapha", Constitution::Kapha),
        ]
        .into_iter()
        .filter_map(|(needle, c)| p.find(needle).map(|pos| (pos, c)))
        .min_by_key(|(pos, _)| *pos)
        .map(|(_, c)| c)
        .unwrap_or(Constitution::Vata)
    }

    pub fn profile(self) -> &'static ConstitutionProfile {
        match self {
            Constitution::Vata => &VATA_PROFILE,
            Constitution::Pitta => &PITTA_PROFILE,
            Constitution::Kapha => &KAPHA_PROFILE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Constitution::Vata => "Vata",
            Constitution::Pitta => "Pitta",
            Constitution::Kapha => "Kapha",
        }
    }

    /// The food's effect indicator for this dosha ("↑", "↓" or "=").
    pub fn effect_of(self, food: &FoodItem) -> &str {
        match self {
            Constitution::Vata => &food.vata_effect,
            Constitution::Pitta => &food.pitta_effect,
            Constitution::Kapha => &food.kapha_effect,
        }
    }
}

fn matches_any(value: &str, labels: &[&str]) -> bool {
    labels.iter().any(|l| value.eq_ignore_ascii_case(l))
}

/// Catalog rows may carry the "↓" glyph or the word, depending on how they
/// were entered.
fn is_decreasing(effect: &str) -> bool {
    let e = effect.trim();
    e == "↓" || e.eq_ignore_ascii_case("decrease")
}

/// True iff the food's virya and guna jointly satisfy the constitution's
/// profile.
pub fn is_compatible(food: &FoodItem, constitution: Constitution) -> bool {
    let profile = constitution.profile();
    matches_any(&food.virya, profile.virya) && matches_any(&food.guna, profile.guna)
}

/// Additive preference score: +2 for a virya match, +2 for a guna match,
/// +3 if the food decreases the patient's dominant dosha.
pub fn compatibility_score(food: &FoodItem, constitution: Constitution) -> i32 {
    let profile = constitution.profile();
    let mut score = 0;
    if matches_any(&food.virya, profile.virya) {
        score += 2;
    }
    if matches_any(&food.guna, profile.guna) {
        score += 2;
    }
    if is_decreasing(constitution.effect_of(food)) {
        score += 3;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::catalog::test_support::food;

    #[test]
    fn prakriti_resolution_defaults_to_vata() {
        assert_eq!(Constitution::from_prakriti(""), Constitution::Vata);
        assert_eq!(Constitution::from_prakriti("unknown"), Constitution::Vata);
        assert_eq!(Constitution::from_prakriti("Tridoshic"), Constitution::Vata);
    }

    #[test]
    fn prakriti_resolution_is_case_insensitive() {
        assert_eq!(Constitution::from_prakriti("PITTA"), Constitution::Pitta);
        assert_eq!(Constitution::from_prakriti("kapha dominant"), Constitution::Kapha);
    }

    #[test]
    fn dual_prakriti_resolves_to_first_named_dosha() {
        assert_eq!(Constitution::from_prakriti("Pitta-Vata"), Constitution::Pitta);
        assert_eq!(Constitution::from_prakriti("Vata-Pitta"), Constitution::Vata);
        assert_eq!(Constitution::from_prakriti("Kapha-Pitta"), Constitution::Kapha);
    }

    #[test]
    fn vata_wants_warm_and_heavy() {
        let warm_heavy = food("Oatmeal", "Grains", 150.0, "Hot", "Heavy", ["↓", "=", "↑"]);
        let cold_light = food("Salad", "Vegetables", 30.0, "Cold", "Light", ["↑", "↓", "↓"]);
        assert!(is_compatible(&warm_heavy, Constitution::Vata));
        assert!(!is_compatible(&cold_light, Constitution::Vata));
    }

    #[test]
    fn pitta_wants_cool_and_light() {
        let cool_light = food("Cucumber", "Vegetables", 16.0, "Cold", "Light", ["↑", "↓", "↓"]);
        let hot_heavy = food("Chili Paneer", "Dairy", 300.0, "Hot", "Heavy", ["↓", "↑", "↑"]);
        assert!(is_compatible(&cool_light, Constitution::Pitta));
        assert!(!is_compatible(&hot_heavy, Constitution::Pitta));
    }

    #[test]
    fn kapha_wants_warm_and_light() {
        let warm_light = food("Ginger Tea", "Beverages", 10.0, "Hot", "Light", ["↓", "↑", "↓"]);
        assert!(is_compatible(&warm_light, Constitution::Kapha));
        let warm_heavy = food("Ghee Rice", "Grains", 250.0, "Hot", "Heavy", ["↓", "=", "↑"]);
        assert!(!is_compatible(&warm_heavy, Constitution::Kapha));
    }

    #[test]
    fn full_match_scores_at_least_four() {
        let f = food("Oatmeal", "Grains", 150.0, "Warm", "Moist", ["=", "=", "="]);
        assert_eq!(compatibility_score(&f, Constitution::Vata), 4);
    }

    #[test]
    fn dosha_decreasing_effect_adds_exactly_three() {
        let neutral = food("Oatmeal", "Grains", 150.0, "Warm", "Moist", ["=", "=", "="]);
        let pacifying = food("Oatmeal", "Grains", 150.0, "Warm", "Moist", ["↓", "=", "="]);
        assert_eq!(
            compatibility_score(&pacifying, Constitution::Vata)
                - compatibility_score(&neutral, Constitution::Vata),
            3
        );
    }

    #[test]
    fn word_form_effect_indicator_also_counts() {
        let f = food("Amla", "Fruits", 45.0, "Cold", "Light", ["=", "decrease", "="]);
        assert_eq!(compatibility_score(&f, Constitution::Pitta), 7);
    }

    #[test]
    fn scorer_is_pure() {
        let f = food("Oatmeal", "Grains", 150.0, "Hot", "Heavy", ["↓", "=", "↑"]);
        let first = (
            is_compatible(&f, Constitution::Vata),
            compatibility_score(&f, Constitution::Vata),
        );
        let second = (
            is_compatible(&f, Constitution::Vata),
            compatibility_score(&f, Constitution::Vata),
        );
        assert_eq!(first, second);
    }
}
