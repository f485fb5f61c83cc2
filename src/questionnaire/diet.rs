//! Dietary pattern, fish intake and food-group frequency rules.

use crate::models::advisory::AdvisoryItem;
use crate::models::enums::{AdvisoryType, Audience, DietPattern, FoodGroup};
use crate::models::questionnaire::QuestionnaireAnswers;

use super::content::{
    clinical_title, food_group_content, FISH, FISH_VEGETARIAN_BODY, FISH_VEGETARIAN_PROFESSIONAL,
    FOOD_RECALL_NOTE,
};
use super::{FeedbackRule, RuleContext};

// ─── Dietary pattern ─────────────────────────────────────────────────────────

fn patient(id: &str, advisory_type: AdvisoryType, priority: u8, title: &str, message: &str) -> AdvisoryItem {
    AdvisoryItem::new(id, advisory_type, Audience::Patient, priority, title, message)
}

fn professional(id: &str, advisory_type: AdvisoryType, priority: u8, title: &str, message: &str) -> AdvisoryItem {
    AdvisoryItem::new(id, advisory_type, Audience::Professional, priority, title, message)
}

/// Vegetarian diets produce a patient item plus a professional-only
/// supplementation alert. `description` is only read for `Other`.
pub fn diet_feedback(pattern: Option<DietPattern>, description: Option<&str>) -> Vec<AdvisoryItem> {
    let Some(pattern) = pattern else {
        return Vec::new();
    };

    match pattern {
        DietPattern::NoRestriction => vec![patient(
            "diet_none",
            AdvisoryType::Success,
            1,
            "DIETA SEM RESTRIÇÕES",
            "Dieta sem restrições alimentares específicas. É recomendada uma alimentação saudável e equilibrada.",
        )],
        DietPattern::Vegan => vec![
            patient(
                "diet_vegan_patient",
                AdvisoryType::Warning,
                10,
                "DIETA VEGANA",
                "Dieta vegana requer atenção ao ferro, vitamina B12, proteínas, cálcio e ômega 3. É recomendado o uso de bebidas vegetais enriquecidas com cálcio ou suplementação desse mineral e o consumo adequado de leguminosas + cereais.",
            ),
            professional(
                "diet_vegan_professional",
                AdvisoryType::Clinical,
                10,
                "ALERTA CLÍNICO: DIETA VEGANA",
                "Suplemente vitamina B12 e considere suplementar DHA.",
            ),
        ],
        DietPattern::Pescatarian => vec![patient(
            "diet_pescetarian",
            AdvisoryType::Success,
            3,
            "DIETA PESCETARIANA",
            "Dieta pescetariana bem planejada atende às necessidades nutricionais na gestação. Rico em ômega-3 pelo consumo de peixes. É importante ter atenção aos níveis de ferro.",
        )],
        DietPattern::Flexitarian => vec![patient(
            "diet_flexitarian",
            AdvisoryType::Success,
            3,
            "DIETA FLEXITARIANA",
            "Dieta flexitariana bem planejada atende às necessidades nutricionais na gestação. Requer atenção ao ferro e proteínas.",
        )],
        DietPattern::OvoLactoVegetarian => vec![
            patient(
                "diet_ovolacto_patient",
                AdvisoryType::Warning,
                6,
                "DIETA OVOLACTOVEGETARIANA",
                "Dieta ovolactovegetariana requer atenção ao ferro e ômega-3. É recomendado um consumo adequado de ovos e laticínios.",
            ),
            professional(
                "diet_ovolacto_professional",
                AdvisoryType::Clinical,
                8,
                "ALERTA CLÍNICO: DIETA OVOLACTOVEGETARIANA",
                "Considere suplementação de DHA.",
            ),
        ],
        DietPattern::LactoVegetarian => vec![
            patient(
                "diet_lacto_patient",
                AdvisoryType::Warning,
                6,
                "DIETA LACTOVEGETARIANA",
                "Dieta lactovegetariana requer monitoramento de ferro, ômega-3, vitamina B12 e proteínas. É recomendado um consumo adequado de leguminosas + cereais e laticínios.",
            ),
            professional(
                "diet_lacto_professional",
                AdvisoryType::Clinical,
                8,
                "ALERTA CLÍNICO: DIETA LACTOVEGETARIANA",
                "Considere suplementação de DHA e de vitamina B12.",
            ),
        ],
        DietPattern::LactoseFree => vec![patient(
            "diet_lactose_free",
            AdvisoryType::Success,
            3,
            "ISENTA DE LACTOSE",
            "É recomendada uma alimentação saudável e equilibrada com consumo de laticínios zero lactose ou bebidas vegetais enriquecidas com cálcio.",
        )],
        DietPattern::GlutenFree => vec![patient(
            "diet_gluten_free",
            AdvisoryType::Warning,
            5,
            "ISENTA DE GLÚTEN",
            "Dieta sem glúten requer monitoramento de fibras e vitaminas do complexo B. Oriente consumo de cereais integrais sem glúten (arroz, quinoa, aveia sem contaminação).",
        )],
        DietPattern::Other => {
            let described = description
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or("Não especificada");
            vec![professional(
                "diet_others",
                AdvisoryType::Recommendation,
                8,
                "DIETA COM RESTRIÇÕES ESPECÍFICAS",
                &format!(
                    "Restrição informada: \"{described}\".\n\
                     Investigar a adequação nutricional individualmente e monitorar possíveis deficiências baseadas na restrição relatada."
                ),
            )]
        }
    }
}

pub struct DietPatternRule;

impl FeedbackRule for DietPatternRule {
    fn name(&self) -> &'static str {
        "dietary_pattern"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        diet_feedback(answers.dietary_pattern, answers.dietary_pattern_desc.as_deref())
    }
}

// ─── Fish ────────────────────────────────────────────────────────────────────

/// Weekly fish intake. A vegetarian diet excludes fish by choice, so "no"
/// becomes a recommendation with algae-based DHA guidance instead of a
/// critical point.
pub fn fish_feedback(eats_fish: Option<bool>, diet: Option<DietPattern>) -> Vec<AdvisoryItem> {
    match eats_fish {
        None => Vec::new(),
        Some(true) => vec![patient(
            "fish_consumption_ok",
            AdvisoryType::Success,
            1,
            FISH.positive.title,
            FISH.positive.body,
        )
        .with_patient_message(FISH.positive.body)],
        Some(false) => {
            let vegetarian = diet.is_some_and(|d| d.is_vegetarian());
            let (advisory_type, body, prof_text) = if vegetarian {
                (AdvisoryType::Recommendation, FISH_VEGETARIAN_BODY, FISH_VEGETARIAN_PROFESSIONAL)
            } else {
                (
                    AdvisoryType::Critical,
                    FISH.negative.body,
                    FISH.professional.unwrap_or_default(),
                )
            };
            vec![
                patient("fish_consumption_low", advisory_type, 8, FISH.negative.title, body)
                    .with_patient_message(body),
                professional(
                    "fish_consumption_prof",
                    AdvisoryType::Clinical,
                    8,
                    &clinical_title(FISH.negative.title),
                    prof_text,
                ),
            ]
        }
    }
}

pub struct FishConsumptionRule;

impl FeedbackRule for FishConsumptionRule {
    fn name(&self) -> &'static str {
        "fish_consumption"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        fish_feedback(answers.fish_consumption, answers.dietary_pattern)
    }
}

// ─── Food groups ─────────────────────────────────────────────────────────────

pub fn food_group_feedback(group: FoodGroup, answer: Option<bool>) -> Vec<AdvisoryItem> {
    let Some(answer) = answer else {
        return Vec::new();
    };
    let key = group.as_str();
    let content = food_group_content(group);

    if answer == group.healthy_answer() {
        return vec![patient(
            &format!("{key}_ok"),
            AdvisoryType::Success,
            1,
            content.positive.title,
            content.positive.body,
        )
        .with_patient_message(content.positive.body)];
    }

    let mut low = patient(
        &format!("{key}_critical"),
        AdvisoryType::Critical,
        8,
        content.negative.title,
        content.negative.body,
    )
    .with_patient_message(content.negative.body);
    if group != FoodGroup::ProcessedFoods {
        low = low.with_note(FOOD_RECALL_NOTE);
    }

    let mut items = vec![low];
    if let Some(text) = content.professional {
        items.push(professional(
            &format!("{key}_prof"),
            AdvisoryType::Clinical,
            8,
            &clinical_title(content.negative.title),
            text,
        ));
    }
    items
}

pub struct DietQualityRule;

impl FeedbackRule for DietQualityRule {
    fn name(&self) -> &'static str {
        "diet_quality"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        FoodGroup::ALL
            .into_iter()
            .flat_map(|g| food_group_feedback(g, answers.food_group(g)))
            .collect()
    }
}
