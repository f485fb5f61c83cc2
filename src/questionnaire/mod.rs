//! Questionnaire feedback rules.
//!
//! Every topic of the nutrition questionnaire is an independent
//! `FeedbackRule`. Rules are pure and total: an unanswered topic yields no
//! items, and no rule can fail. The `FeedbackAggregator` runs them in the
//! questionnaire's order and concatenates the results.

pub mod content;
pub mod diet;
pub mod exams;
pub mod lifestyle;
pub mod supplements;

use serde::{Deserialize, Serialize};

use crate::gestation::trimester_for_week;
use crate::models::advisory::AdvisoryItem;
use crate::models::enums::Trimester;
use crate::models::questionnaire::QuestionnaireAnswers;

// ─── Context ─────────────────────────────────────────────────────────────────

/// Pregnancy facts some rules branch on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleContext {
    pub gestational_week: Option<u32>,
    pub trimester: Option<Trimester>,
}

impl RuleContext {
    pub fn for_week(week: Option<u32>) -> Self {
        Self {
            gestational_week: week,
            trimester: week.and_then(trimester_for_week),
        }
    }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// One per questionnaire topic. Self-contained, independently testable.
pub trait FeedbackRule: Send + Sync {
    /// Topic name used in logs.
    fn name(&self) -> &'static str;

    fn evaluate(&self, answers: &QuestionnaireAnswers, ctx: &RuleContext) -> Vec<AdvisoryItem>;
}

// ─── Aggregator ──────────────────────────────────────────────────────────────

pub struct FeedbackAggregator {
    rules: Vec<Box<dyn FeedbackRule>>,
}

impl Default for FeedbackAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedbackAggregator {
    /// All built-in rules in questionnaire order.
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(diet::DietPatternRule),
                Box::new(diet::FishConsumptionRule),
                Box::new(diet::DietQualityRule),
                Box::new(supplements::FolicAcidRule),
                Box::new(supplements::IronRule),
                Box::new(supplements::CalciumRule),
                Box::new(lifestyle::SunExposureRule),
                Box::new(exams::AnemiaTestRule),
                Box::new(lifestyle::PhysicalActivityRule),
                Box::new(lifestyle::CoffeeTeaRule),
                Box::new(lifestyle::SubstanceUseRule),
            ],
        }
    }

    pub fn with_rules(rules: Vec<Box<dyn FeedbackRule>>) -> Self {
        Self { rules }
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn collect(&self, answers: &QuestionnaireAnswers, ctx: &RuleContext) -> Vec<AdvisoryItem> {
        let mut items = Vec::new();
        for rule in &self.rules {
            let mut produced = rule.evaluate(answers, ctx);
            if !produced.is_empty() {
                tracing::debug!(rule = rule.name(), count = produced.len(), "Feedback rule fired");
            }
            items.append(&mut produced);
        }
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{AdvisoryType, Audience, DietPattern, YesNoUnknown};

    fn ids(items: &[AdvisoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn empty_questionnaire_yields_nothing() {
        let items = FeedbackAggregator::new()
            .collect(&QuestionnaireAnswers::default(), &RuleContext::default());
        assert!(items.is_empty());
    }

    #[test]
    fn rules_run_in_questionnaire_order() {
        assert_eq!(
            FeedbackAggregator::new().rule_names(),
            vec![
                "dietary_pattern",
                "fish_consumption",
                "diet_quality",
                "folic_acid_supplement",
                "iron_supplement",
                "calcium_supplement",
                "sun_exposure",
                "anemia_test",
                "physical_activity",
                "coffee_tea_consumption",
                "substances_use",
            ]
        );
    }

    #[test]
    fn items_are_concatenated_in_rule_order() {
        let answers = QuestionnaireAnswers {
            dietary_pattern: Some(DietPattern::NoRestriction),
            fish_consumption: Some(true),
            fruits_vegetables: Some(true),
            iron_supplement: Some(YesNoUnknown::No),
            anemia_test: Some(YesNoUnknown::Yes),
            substances_use: Some(false),
            ..Default::default()
        };
        let items = FeedbackAggregator::new().collect(&answers, &RuleContext::for_week(Some(20)));
        assert_eq!(
            ids(&items),
            vec![
                "diet_none",
                "fish_consumption_ok",
                "fruits_vegetables_ok",
                "iron_prescribe",
                "anemia_test_review",
                "substance_use_ok",
            ]
        );
    }

    struct FixedRule;

    impl FeedbackRule for FixedRule {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn evaluate(&self, _: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
            vec![AdvisoryItem::new(
                "fixed",
                AdvisoryType::Info,
                Audience::Both,
                1,
                "t",
                "m",
            )]
        }
    }

    #[test]
    fn custom_rule_set() {
        let agg = FeedbackAggregator::with_rules(vec![Box::new(FixedRule), Box::new(FixedRule)]);
        let items = agg.collect(&QuestionnaireAnswers::default(), &RuleContext::default());
        assert_eq!(ids(&items), vec!["fixed", "fixed"]);
    }

    #[test]
    fn context_derives_trimester() {
        assert_eq!(RuleContext::for_week(Some(10)).trimester, Some(Trimester::First));
        assert_eq!(RuleContext::for_week(Some(30)).trimester, Some(Trimester::Third));
        assert_eq!(RuleContext::for_week(Some(0)).trimester, None);
        assert_eq!(RuleContext::for_week(None), RuleContext::default());
    }
}
