//! Folic acid, iron and calcium supplementation rules.
//!
//! All three share one shape: "yes" asks to check the dose, "no" asks for a
//! prescription (a critical point), "don't know" sends the professional to
//! investigate.

use crate::models::advisory::AdvisoryItem;
use crate::models::enums::{AdvisoryType, Audience, Trimester, YesNoUnknown};
use crate::models::questionnaire::QuestionnaireAnswers;

use super::content::{
    TopicContent, CALCIUM, FOLIC_ACID, FOLIC_ACID_LATE_NOTE, INVESTIGATE_MESSAGE, IRON,
};
use super::{FeedbackRule, RuleContext};

struct Supplement {
    key: &'static str,
    content: &'static TopicContent,
    check_type: AdvisoryType,
    investigate_title: &'static str,
    investigate_priority: u8,
}

const FOLIC: Supplement = Supplement {
    key: "folic_acid",
    content: &FOLIC_ACID,
    check_type: AdvisoryType::Warning,
    investigate_title: "Ácido Fólico - Investigar",
    investigate_priority: 9,
};

const IRON_SUPPLEMENT: Supplement = Supplement {
    key: "iron",
    content: &IRON,
    check_type: AdvisoryType::Info,
    investigate_title: "Ferro - Investigar",
    investigate_priority: 8,
};

const CALCIUM_SUPPLEMENT: Supplement = Supplement {
    key: "calcium",
    content: &CALCIUM,
    check_type: AdvisoryType::Info,
    investigate_title: "Cálcio - Investigar",
    investigate_priority: 6,
};

fn supplement_feedback(supplement: &Supplement, answer: Option<YesNoUnknown>) -> Vec<AdvisoryItem> {
    let Some(answer) = answer else {
        return Vec::new();
    };
    let key = supplement.key;
    let item = match answer {
        YesNoUnknown::Yes => {
            let c = supplement.content.positive;
            AdvisoryItem::new(
                format!("{key}_check"),
                supplement.check_type,
                Audience::Patient,
                5,
                c.title,
                c.body,
            )
            .with_patient_message(c.body)
        }
        YesNoUnknown::No => {
            let c = supplement.content.negative;
            AdvisoryItem::new(
                format!("{key}_prescribe"),
                AdvisoryType::Critical,
                Audience::Patient,
                10,
                c.title,
                c.body,
            )
            .with_patient_message(c.body)
        }
        YesNoUnknown::Unknown => AdvisoryItem::new(
            format!("{key}_investigate"),
            AdvisoryType::Investigate,
            Audience::Professional,
            supplement.investigate_priority,
            supplement.investigate_title,
            INVESTIGATE_MESSAGE,
        ),
    };
    vec![item]
}

/// Past the first trimester the patient-facing items carry a note to review
/// whether supplementation should continue.
pub fn folic_acid_feedback(answer: Option<YesNoUnknown>, trimester: Option<Trimester>) -> Vec<AdvisoryItem> {
    let mut items = supplement_feedback(&FOLIC, answer);
    if matches!(trimester, Some(Trimester::Second | Trimester::Third)) {
        for item in items.iter_mut().filter(|i| i.audience.visible_to_patient()) {
            item.note = Some(FOLIC_ACID_LATE_NOTE.to_string());
        }
    }
    items
}

pub fn iron_feedback(answer: Option<YesNoUnknown>) -> Vec<AdvisoryItem> {
    supplement_feedback(&IRON_SUPPLEMENT, answer)
}

pub fn calcium_feedback(answer: Option<YesNoUnknown>) -> Vec<AdvisoryItem> {
    supplement_feedback(&CALCIUM_SUPPLEMENT, answer)
}

pub struct FolicAcidRule;

impl FeedbackRule for FolicAcidRule {
    fn name(&self) -> &'static str {
        "folic_acid_supplement"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, ctx: &RuleContext) -> Vec<AdvisoryItem> {
        folic_acid_feedback(answers.folic_acid_supplement, ctx.trimester)
    }
}

pub struct IronRule;

impl FeedbackRule for IronRule {
    fn name(&self) -> &'static str {
        "iron_supplement"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        iron_feedback(answers.iron_supplement)
    }
}

pub struct CalciumRule;

impl FeedbackRule for CalciumRule {
    fn name(&self) -> &'static str {
        "calcium_supplement"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        calcium_feedback(answers.calcium_supplement)
    }
}
