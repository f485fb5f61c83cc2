use serde::{Deserialize, Serialize};

use crate::error::GuidanceError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = GuidanceError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(GuidanceError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Pre-pregnancy body-mass category.
    BmiCategory {
        Underweight => "underweight",
        Normal => "normal",
        Overweight => "overweight",
        Obese => "obese",
    }
);

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        Self::Underweight,
        Self::Normal,
        Self::Overweight,
        Self::Obese,
    ];

    /// Clinical label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Baixo peso pré-gestacional",
            Self::Normal => "Eutrofia pré-gestacional",
            Self::Overweight => "Sobrepeso pré-gestacional",
            Self::Obese => "Obesidade pré-gestacional",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Underweight => "Baixo peso",
            Self::Normal => "Eutrofia",
            Self::Overweight => "Sobrepeso",
            Self::Obese => "Obesidade",
        }
    }

    /// Resolve a stored classification: code, full label or short label.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL.into_iter().find(|c| {
            trimmed == c.as_str() || trimmed == c.label() || trimmed == c.short_label()
        })
    }

    /// Underweight gains strictly from zero; the other categories tolerate
    /// an initial loss window in trimester 1.
    pub fn tolerates_initial_loss(&self) -> bool {
        !matches!(self, Self::Underweight)
    }
}

str_enum!(
    /// Output locale. Controls the decimal separator of rendered kilogram
    /// values and the trimester labels.
    Locale {
        PtBr => "pt-BR",
        EnUs => "en-US",
    }
);

impl Default for Locale {
    fn default() -> Self {
        Self::PtBr
    }
}

impl Locale {
    pub fn decimal_separator(&self) -> char {
        match self {
            Self::PtBr => ',',
            Self::EnUs => '.',
        }
    }
}

str_enum!(
    /// Gestational trimester, derived from the gestational week.
    Trimester {
        First => "first",
        Second => "second",
        Third => "third",
    }
);

impl Trimester {
    pub fn number(&self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    pub fn label(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::PtBr, Self::First) => "Primeiro trimestre",
            (Locale::PtBr, Self::Second) => "Segundo trimestre",
            (Locale::PtBr, Self::Third) => "Terceiro trimestre",
            (Locale::EnUs, Self::First) => "First trimester",
            (Locale::EnUs, Self::Second) => "Second trimester",
            (Locale::EnUs, Self::Third) => "Third trimester",
        }
    }
}

str_enum!(
    /// Outcome of the weight-gain status decision procedure.
    WeightGainStatus {
        Loss => "loss",
        LossAcceptable => "loss_acceptable",
        LossExcessive => "loss_excessive",
        Below => "below",
        BelowSevere => "below_severe",
        Adequate => "adequate",
        Above => "above",
        MaxReached => "max_reached",
        MaxReachedNext => "max_reached_next",
        TotalMaxReached => "total_max_reached",
    }
);

str_enum!(
    /// Severity/kind tag of an advisory item.
    AdvisoryType {
        Normal => "normal",
        Critical => "critical",
        Clinical => "clinical",
        Recommendation => "recommendation",
        Warning => "warning",
        Success => "success",
        Investigate => "investigate",
        Info => "info",
    }
);

str_enum!(
    /// Who may see an advisory item.
    Audience {
        Patient => "patient",
        Professional => "professional",
        Both => "both",
    }
);

impl Audience {
    pub fn visible_to_patient(&self) -> bool {
        matches!(self, Self::Patient | Self::Both)
    }

    pub fn visible_to_professional(&self) -> bool {
        matches!(self, Self::Professional | Self::Both)
    }
}

str_enum!(
    /// Tri-state questionnaire answer.
    YesNoUnknown {
        Yes => "yes",
        No => "no",
        Unknown => "unknown",
    }
);

impl YesNoUnknown {
    /// Parse a questionnaire option ("Sim" / "Não" / "Não sei") or the code.
    pub fn from_answer(text: &str) -> Option<Self> {
        match text.trim() {
            "Sim" | "sim" | "yes" => Some(Self::Yes),
            "Não" | "não" | "Nao" | "no" => Some(Self::No),
            "Não sei" | "não sei" | "Nao sei" | "unknown" => Some(Self::Unknown),
            _ => None,
        }
    }
}

str_enum!(
    /// Food-group frequency questions, keyed by their questionnaire topic id.
    FoodGroup {
        FruitsVegetables => "fruits_vegetables",
        DairyProducts => "dairy_products",
        WholeGrains => "whole_grains",
        MeatPoultryEggs => "meat_poultry_eggs",
        PlantProteins => "plant_proteins",
        ProcessedFoods => "processed_foods",
    }
);

impl FoodGroup {
    /// Questionnaire order.
    pub const ALL: [FoodGroup; 6] = [
        Self::FruitsVegetables,
        Self::DairyProducts,
        Self::WholeGrains,
        Self::MeatPoultryEggs,
        Self::PlantProteins,
        Self::ProcessedFoods,
    ];

    /// The answer that counts as a good habit. "Yes" for every group except
    /// ultra-processed foods.
    pub fn healthy_answer(&self) -> bool {
        !matches!(self, Self::ProcessedFoods)
    }
}

str_enum!(
    /// Declared dietary pattern. Free text from the form is mapped to one of
    /// these codes once, at the boundary.
    DietPattern {
        NoRestriction => "no_restriction",
        Pescatarian => "pescatarian",
        OvoLactoVegetarian => "ovo_lacto_vegetarian",
        LactoVegetarian => "lacto_vegetarian",
        Flexitarian => "flexitarian",
        Vegan => "vegan",
        LactoseFree => "lactose_free",
        GlutenFree => "gluten_free",
        Other => "other",
    }
);

/// Canonical option text → diet pattern.
const DIET_OPTION_TEXTS: &[(&str, DietPattern)] = &[
    ("Não", DietPattern::NoRestriction),
    (
        "Pescetariana (consome peixes, laticínios e ovos, mas não consome carnes e aves)",
        DietPattern::Pescatarian,
    ),
    (
        "Ovolactovegetariana (consome laticínios e ovos, mas não consome carnes, peixes e aves)",
        DietPattern::OvoLactoVegetarian,
    ),
    (
        "Lactovegetariana (consome laticínios, mas não consome carnes, peixes, aves e ovos)",
        DietPattern::LactoVegetarian,
    ),
    (
        "Flexitariana (consome principalmente alimentos de origem vegetal, mas ainda consome produtos de origem animal)",
        DietPattern::Flexitarian,
    ),
    (
        "Vegana (não consome nenhum alimento de origem animal)",
        DietPattern::Vegan,
    ),
    ("Isenta de lactose", DietPattern::LactoseFree),
    ("Isenta de glúten", DietPattern::GlutenFree),
    (
        "Outros (alergias, intolerâncias ou preferências)",
        DietPattern::Other,
    ),
];

impl DietPattern {
    /// Numeric form code used by the questionnaire.
    pub fn code(&self) -> u8 {
        match self {
            Self::NoRestriction => 1,
            Self::Pescatarian => 2,
            Self::OvoLactoVegetarian => 3,
            Self::LactoVegetarian => 4,
            Self::Flexitarian => 5,
            Self::Vegan => 6,
            Self::LactoseFree => 7,
            Self::GlutenFree => 8,
            Self::Other => 9,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        DIET_OPTION_TEXTS
            .iter()
            .map(|(_, d)| *d)
            .find(|d| d.code() == code)
    }

    /// Map a raw answer (option text, numeric code or enum code) to a pattern.
    /// Unrecognized text falls back to `NoRestriction`.
    pub fn from_answer(text: &str) -> Self {
        let trimmed = text.trim();
        if let Some((_, pattern)) = DIET_OPTION_TEXTS.iter().find(|(t, _)| *t == trimmed) {
            return *pattern;
        }
        if let Ok(code) = trimmed.parse::<u8>() {
            if let Some(pattern) = Self::from_code(code) {
                return pattern;
            }
        }
        if let Ok(pattern) = trimmed.parse::<Self>() {
            return pattern;
        }
        tracing::warn!(answer = trimmed, "Unrecognized dietary pattern, treating as no restriction");
        Self::NoRestriction
    }

    /// Diets that exclude fish entirely.
    pub fn is_vegetarian(&self) -> bool {
        matches!(
            self,
            Self::OvoLactoVegetarian | Self::LactoVegetarian | Self::Vegan
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_enum_round_trips_through_from_str() {
        for status in [
            WeightGainStatus::Loss,
            WeightGainStatus::BelowSevere,
            WeightGainStatus::TotalMaxReached,
        ] {
            assert_eq!(status.as_str().parse::<WeightGainStatus>().unwrap(), status);
        }
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "heavy".parse::<BmiCategory>().unwrap_err();
        assert!(matches!(err, GuidanceError::InvalidEnum { .. }));
        assert!(err.to_string().contains("BmiCategory"));
    }

    #[test]
    fn serde_uses_snake_case_codes() {
        let json = serde_json::to_string(&WeightGainStatus::MaxReachedNext).unwrap();
        assert_eq!(json, "\"max_reached_next\"");
        let back: Audience = serde_json::from_str("\"professional\"").unwrap();
        assert_eq!(back, Audience::Professional);
    }

    #[test]
    fn category_from_label_accepts_all_forms() {
        assert_eq!(
            BmiCategory::from_label("Eutrofia pré-gestacional"),
            Some(BmiCategory::Normal)
        );
        assert_eq!(BmiCategory::from_label("Obesidade"), Some(BmiCategory::Obese));
        assert_eq!(BmiCategory::from_label("underweight"), Some(BmiCategory::Underweight));
        assert_eq!(BmiCategory::from_label("Magreza"), None);
    }

    #[test]
    fn trimester_numbers() {
        assert_eq!(Trimester::Second.number(), 2);
        assert_eq!(Trimester::from_number(3), Some(Trimester::Third));
        assert_eq!(Trimester::from_number(0), None);
    }

    #[test]
    fn trimester_labels_follow_locale() {
        assert_eq!(Trimester::First.label(Locale::PtBr), "Primeiro trimestre");
        assert_eq!(Trimester::Third.label(Locale::EnUs), "Third trimester");
    }

    #[test]
    fn locale_parses_tags() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!(Locale::default(), Locale::PtBr);
        assert_eq!(Locale::PtBr.decimal_separator(), ',');
        assert_eq!(Locale::EnUs.decimal_separator(), '.');
    }

    #[test]
    fn audience_visibility() {
        assert!(Audience::Both.visible_to_patient());
        assert!(Audience::Both.visible_to_professional());
        assert!(!Audience::Professional.visible_to_patient());
        assert!(!Audience::Patient.visible_to_professional());
    }

    #[test]
    fn yes_no_unknown_parses_form_options() {
        assert_eq!(YesNoUnknown::from_answer("Sim"), Some(YesNoUnknown::Yes));
        assert_eq!(YesNoUnknown::from_answer(" Não "), Some(YesNoUnknown::No));
        assert_eq!(YesNoUnknown::from_answer("Não sei"), Some(YesNoUnknown::Unknown));
        assert_eq!(YesNoUnknown::from_answer("talvez"), None);
    }

    #[test]
    fn diet_pattern_maps_option_text() {
        assert_eq!(
            DietPattern::from_answer("Vegana (não consome nenhum alimento de origem animal)"),
            DietPattern::Vegan
        );
        assert_eq!(
            DietPattern::from_answer("  Isenta de glúten "),
            DietPattern::GlutenFree
        );
    }

    #[test]
    fn diet_pattern_maps_codes() {
        assert_eq!(DietPattern::from_answer("4"), DietPattern::LactoVegetarian);
        assert_eq!(DietPattern::from_answer("flexitarian"), DietPattern::Flexitarian);
        assert_eq!(DietPattern::from_code(9), Some(DietPattern::Other));
        assert_eq!(DietPattern::from_code(0), None);
    }

    #[test]
    fn diet_pattern_unknown_text_is_no_restriction() {
        assert_eq!(DietPattern::from_answer("Paleo"), DietPattern::NoRestriction);
    }

    #[test]
    fn processed_foods_answer_is_inverted() {
        assert!(FoodGroup::DairyProducts.healthy_answer());
        assert!(!FoodGroup::ProcessedFoods.healthy_answer());
        assert_eq!(FoodGroup::ALL.len(), 6);
    }

    #[test]
    fn vegetarian_diets() {
        assert!(DietPattern::Vegan.is_vegetarian());
        assert!(DietPattern::LactoVegetarian.is_vegetarian());
        assert!(DietPattern::OvoLactoVegetarian.is_vegetarian());
        assert!(!DietPattern::Pescatarian.is_vegetarian());
        assert!(!DietPattern::Flexitarian.is_vegetarian());
    }
}
