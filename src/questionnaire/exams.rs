use crate::models::advisory::AdvisoryItem;
use crate::models::enums::{AdvisoryType, Audience, YesNoUnknown};
use crate::models::questionnaire::QuestionnaireAnswers;

use super::{FeedbackRule, RuleContext};

/// Lab values the professional records when an anemia test was done.
pub const ANEMIA_INPUT_FIELDS: [&str; 4] = ["hemoglobina", "hematocrito", "ferritina", "data_exame"];

/// Both outcomes are professional-only. A test on file asks for its values;
/// anything else asks for the test to be ordered.
pub fn anemia_test_feedback(answer: Option<YesNoUnknown>) -> Vec<AdvisoryItem> {
    match answer {
        Some(YesNoUnknown::Yes) => vec![AdvisoryItem::new(
            "anemia_test_review",
            AdvisoryType::Normal,
            Audience::Professional,
            7,
            "Exame de Anemia - Registrar Valores",
            "VALORES SÉRICOS REGISTRADOS. Avalie hemograma para presença de anemia.",
        )
        .requiring_input(&ANEMIA_INPUT_FIELDS)],
        Some(YesNoUnknown::No | YesNoUnknown::Unknown) => vec![AdvisoryItem::new(
            "anemia_test_request",
            AdvisoryType::Recommendation,
            Audience::Professional,
            9,
            "SOLICITAR EXAMES",
            "SOLICITE EXAMES.",
        )],
        None => Vec::new(),
    }
}

pub struct AnemiaTestRule;

impl FeedbackRule for AnemiaTestRule {
    fn name(&self) -> &'static str {
        "anemia_test"
    }

    fn evaluate(&self, answers: &QuestionnaireAnswers, _: &RuleContext) -> Vec<AdvisoryItem> {
        anemia_test_feedback(answers.anemia_test)
    }
}
