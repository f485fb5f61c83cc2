use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::{DietPattern, FoodGroup, YesNoUnknown};

/// Typed questionnaire answers. `None` means unanswered; every rule emits
/// nothing for an unanswered topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireAnswers {
    pub dietary_pattern: Option<DietPattern>,
    pub dietary_pattern_desc: Option<String>,
    pub fruits_vegetables: Option<bool>,
    pub dairy_products: Option<bool>,
    pub whole_grains: Option<bool>,
    pub meat_poultry_eggs: Option<bool>,
    pub plant_proteins: Option<bool>,
    pub fish_consumption: Option<bool>,
    pub processed_foods: Option<bool>,
    pub folic_acid_supplement: Option<YesNoUnknown>,
    pub iron_supplement: Option<YesNoUnknown>,
    pub calcium_supplement: Option<YesNoUnknown>,
    pub sun_exposure: Option<YesNoUnknown>,
    pub anemia_test: Option<YesNoUnknown>,
    pub physical_activity: Option<YesNoUnknown>,
    pub coffee_tea_consumption: Option<bool>,
    pub substances_use: Option<bool>,
}

impl QuestionnaireAnswers {
    pub fn food_group(&self, group: FoodGroup) -> Option<bool> {
        match group {
            FoodGroup::FruitsVegetables => self.fruits_vegetables,
            FoodGroup::DairyProducts => self.dairy_products,
            FoodGroup::WholeGrains => self.whole_grains,
            FoodGroup::MeatPoultryEggs => self.meat_poultry_eggs,
            FoodGroup::PlantProteins => self.plant_proteins,
            FoodGroup::ProcessedFoods => self.processed_foods,
        }
    }

    pub fn set_food_group(&mut self, group: FoodGroup, answer: Option<bool>) {
        let slot = match group {
            FoodGroup::FruitsVegetables => &mut self.fruits_vegetables,
            FoodGroup::DairyProducts => &mut self.dairy_products,
            FoodGroup::WholeGrains => &mut self.whole_grains,
            FoodGroup::MeatPoultryEggs => &mut self.meat_poultry_eggs,
            FoodGroup::PlantProteins => &mut self.plant_proteins,
            FoodGroup::ProcessedFoods => &mut self.processed_foods,
        };
        *slot = answer;
    }

    /// Convert the raw topic-id → answer map coming from the form. Values
    /// that cannot be interpreted are logged and treated as unanswered.
    pub fn from_answer_map(map: &HashMap<String, Value>) -> Self {
        let mut answers = Self {
            dietary_pattern: diet_answer(map.get("dietary_pattern")),
            dietary_pattern_desc: text_answer(map.get("dietary_pattern_desc")),
            fish_consumption: bool_answer("fish_consumption", map.get("fish_consumption")),
            folic_acid_supplement: tri_answer(
                "folic_acid_supplement",
                map.get("folic_acid_supplement"),
            ),
            iron_supplement: tri_answer("iron_supplement", map.get("iron_supplement")),
            calcium_supplement: tri_answer("calcium_supplement", map.get("calcium_supplement")),
            sun_exposure: tri_answer("sun_exposure", map.get("sun_exposure")),
            anemia_test: tri_answer("anemia_test", map.get("anemia_test")),
            physical_activity: tri_answer("physical_activity", map.get("physical_activity")),
            coffee_tea_consumption: bool_answer(
                "coffee_tea_consumption",
                map.get("coffee_tea_consumption"),
            ),
            substances_use: bool_answer("substances_use", map.get("substances_use")),
            ..Self::default()
        };
        for group in FoodGroup::ALL {
            let key = group.as_str();
            answers.set_food_group(group, bool_answer(key, map.get(key)));
        }
        answers
    }
}

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

fn bool_answer(topic: &str, value: Option<&Value>) -> Option<bool> {
    if is_blank(value) {
        return None;
    }
    let parsed = match value {
        Some(Value::Bool(b)) => Some(*b),
        Some(Value::String(s)) => match YesNoUnknown::from_answer(s) {
            Some(YesNoUnknown::Yes) => Some(true),
            Some(YesNoUnknown::No) => Some(false),
            _ if s.trim().eq_ignore_ascii_case("true") => Some(true),
            _ if s.trim().eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        },
        _ => None,
    };
    if parsed.is_none() {
        tracing::warn!(topic, value = ?value, "Unrecognized yes/no answer, treating as unanswered");
    }
    parsed
}

fn tri_answer(topic: &str, value: Option<&Value>) -> Option<YesNoUnknown> {
    if is_blank(value) {
        return None;
    }
    let parsed = match value {
        Some(Value::Bool(true)) => Some(YesNoUnknown::Yes),
        Some(Value::Bool(false)) => Some(YesNoUnknown::No),
        Some(Value::String(s)) => YesNoUnknown::from_answer(s),
        _ => None,
    };
    if parsed.is_none() {
        tracing::warn!(topic, value = ?value, "Unrecognized answer, treating as unanswered");
    }
    parsed
}

fn diet_answer(value: Option<&Value>) -> Option<DietPattern> {
    if is_blank(value) {
        return None;
    }
    match value {
        Some(Value::String(s)) => Some(DietPattern::from_answer(s)),
        Some(Value::Number(n)) => {
            let code = n.as_u64().and_then(|c| u8::try_from(c).ok());
            let pattern = code.and_then(DietPattern::from_code);
            if pattern.is_none() {
                tracing::warn!(value = %n, "Unknown dietary pattern code, treating as no restriction");
            }
            Some(pattern.unwrap_or(DietPattern::NoRestriction))
        }
        other => {
            tracing::warn!(value = ?other, "Unrecognized dietary pattern answer, treating as unanswered");
            None
        }
    }
}

fn text_answer(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
