//! Sun exposure, physical activity, caffeine and substance-use rules.

use crate::models::advisory::AdvisoryItem;
use crate::models::enums::{AdvisoryType, Audience, YesNoUnknown};
use crate::models::questionnaire::QuestionnaireAnswers;

use super::content::{
    COFFEE_TEA, INVESTIGATE_MESSAGE_UPPER, PHYSICAL_ACTIVITY, SUBSTANCES, SUN_EXPOSURE_LOW,
};
use super::{FeedbackRule, RuleContext};

/// Adequate sun exposure produces nothing.
pub fn sun_exposure_feedback(answer: Option<YesNoUnknown>) -> Vec<AdvisoryItem> {
    match answer {
        Some(YesNoUnknown::No) => vec![AdvisoryItem::new(
            "sun_exposure_low",
            AdvisoryType::Warning,
            Audience::Both,
            7,
            SUN_EXPOSURE_LOW.title,
            SUN_EXPOSURE_LOW.body,
        )],
        Some(YesNoUnknown::Unknown) => vec![AdvisoryItem::new(
            "sun_exposure_investigate",
            AdvisoryType::Clinical,
            Audience::Professional,
            5,
            "EXPOSIÇÃO SOLAR - INVESTIGAR",
            INVESTIGATE_MESSAGE_UPPER,
        )],
        Some(YesNoUnknown::Yes) | None => Vec::new(),
    }
}

pub fn physical_activity_feedback(answer: Option<YesNoUnknown>) -> Vec<AdvisoryItem> {
    match answer {
        Some(YesNoUnknown::No) => vec![AdvisoryItem::new(
            "physical_activity_low",
            AdvisoryType::Critical,
            Audience::Both,
            6,
            PHYSICAL_ACTIVITY.negative.title,
            PHYSICAL_ACTIVITY.negative.body,
        )],
        Some(YesNoUnknown::Yes) => vec![AdvisoryItem::new(
            "physical_activity_ok",
            AdvisoryType::Success,
            Audience::Patient,
            1,
            PHYSICAL_ACTIVITY.positive.title,
            PHYSICAL_ACTIVITY.positive.body,
        )],
        Some(YesNoUnknown::Unknown) => vec![AdvisoryItem::new(
            "physical_activity_investigate",
            AdvisoryType::Clinical,
            Audience::Professional,
            5,
            "ATIVIDADE FÍSICA - INVESTIGAR",
            INVESTIGATE_MESSAGE_UPPER,
        )],
        None => Vec::new(),
    }
}

/// Informational either way; consuming raises the priority.
pub fn coffee_tea_feedback(consumes: Option<bool>) -> Vec<AdvisoryItem> {
    match consumes {
        Some(true) => vec![AdvisoryItem::new(
            "coffee_tea",
            AdvisoryType::Info,
            Audience::Patient,
            4,
            COFFEE_TEA.positive.title,
            COFFEE_TEA.positive.body,
        )],
        Some(false) => vec![AdvisoryItem::new(
            "coffee_tea_none",
            AdvisoryType::Info,
            Audience::Patient,
            1,
            COFFEE_TEA.negative.title,
            COFFEE_TEA.negative.body,
        )],
        None => Vec::new(),
    }
}

pub fn substance_use_feedback(uses: Option<bool>) -> Vec<AdvisoryItem> {
    match uses {
        Some(true) => vec![AdvisoryItem::new(
            "substance_use",
            AdvisoryType::Critical,
            Audience::Both,
            10,
            SUBSTANCES.negative.title,
            SUBSTANCES.negative.body,
        )],
        Some(false) => vec![AdvisoryItem::new(
            "substance_use_ok",
            AdvisoryType::Success,
            Audience::Patient,
            1,
            SUBSTANCES.positive.title,
            SUBSTANCES.positive.body,
        )],
        None => Vec::new(),
    }
}

pub struct SunExposureRule;

impl FeedbackRule for SunExposureRule {
    fn name(&self) -> &'static str {
        "sun_exposure"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        sun_exposure_feedback(answers.sun_exposure)
    }
}

pub struct PhysicalActivityRule;

impl FeedbackRule for PhysicalActivityRule {
    fn name(&self) -> &'static str {
        "physical_activity"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        physical_activity_feedback(answers.physical_activity)
    }
}

pub struct CoffeeTeaRule;

impl FeedbackRule for CoffeeTeaRule {
    fn name(&self) -> &'static str {
        "coffee_tea_consumption"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        coffee_tea_feedback(answers.coffee_tea_consumption)
    }
}

pub struct SubstanceUseRule;

impl FeedbackRule for SubstanceUseRule {
    fn name(&self) -> &'static str {
        "substances_use"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        substance_use_feedback(answers.substances_use)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_exposure_branches() {
        assert!(sun_exposure_feedback(Some(YesNoUnknown::Yes)).is_empty());
        assert!(sun_exposure_feedback(None).is_empty());

        let low = sun_exposure_feedback(Some(YesNoUnknown::No));
        assert_eq!(low[0].id, "sun_exposure_low");
        assert_eq!(low[0].audience, Audience::Both);
        assert!(low[0].message.contains("vitamina D"));

        let unknown = sun_exposure_feedback(Some(YesNoUnknown::Unknown));
        assert_eq!(unknown[0].audience, Audience::Professional);
        assert_eq!(unknown[0].advisory_type, AdvisoryType::Clinical);
    }

    #[test]
    fn inactivity_is_critical_and_shared() {
        let items = physical_activity_feedback(Some(YesNoUnknown::No));
        assert_eq!(items[0].id, "physical_activity_low");
        assert!(items[0].is_critical());
        assert_eq!(items[0].audience, Audience::Both);
        assert!(items[0].message.contains("sedentária"));
    }

    #[test]
    fn activity_other_answers() {
        let ok = physical_activity_feedback(Some(YesNoUnknown::Yes));
        assert_eq!(ok[0].id, "physical_activity_ok");
        assert_eq!(ok[0].audience, Audience::Patient);

        let unknown = physical_activity_feedback(Some(YesNoUnknown::Unknown));
        assert_eq!(unknown[0].id, "physical_activity_investigate");
        assert_eq!(unknown[0].message, INVESTIGATE_MESSAGE_UPPER);

        assert!(physical_activity_feedback(None).is_empty());
    }

    #[test]
    fn coffee_tea_is_always_info() {
        let yes = coffee_tea_feedback(Some(true));
        let no = coffee_tea_feedback(Some(false));
        assert_eq!((yes[0].id.as_str(), yes[0].priority), ("coffee_tea", 4));
        assert_eq!((no[0].id.as_str(), no[0].priority), ("coffee_tea_none", 1));
        assert!(yes.iter().chain(&no).all(|i| i.advisory_type == AdvisoryType::Info));
        assert!(coffee_tea_feedback(None).is_empty());
    }

    #[test]
    fn substance_use() {
        let uses = substance_use_feedback(Some(true));
        assert_eq!(uses[0].id, "substance_use");
        assert!(uses[0].is_critical());
        assert_eq!(uses[0].audience, Audience::Both);
        assert_eq!(uses[0].priority, 10);

        let clean = substance_use_feedback(Some(false));
        assert_eq!(clean[0].id, "substance_use_ok");
        assert_eq!(clean[0].advisory_type, AdvisoryType::Success);

        assert!(substance_use_feedback(None).is_empty());
    }
}
