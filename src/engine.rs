//! Whole-evaluation orchestration.
//!
//! One call takes a patient's measurements and questionnaire answers and
//! produces the full report: anthropometry, gestational age, the weight-gain
//! assessment with its narrative, and the partitioned advisory lists. The
//! engine holds only read-only tables, so a single instance can serve
//! concurrent callers.

use std::collections::HashMap;
use std::path::Path;
use std::time::Instant;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::anthropometry::{classify_bmi, cumulative_gain};
use crate::config::EngineConfig;
use crate::error::GuidanceError;
use crate::gestation::{age_in_years, compute_gestational_age, days_between, today, GestationalAge};
use crate::models::advisory::AdvisoryItem;
use crate::models::enums::{Locale, WeightGainStatus};
use crate::models::patient::{CalculatedData, PatientMeasurements};
use crate::models::questionnaire::QuestionnaireAnswers;
use crate::questionnaire::{FeedbackAggregator, RuleContext};
use crate::summary::summarize;
use crate::weight_gain::{self, ExpectedGainRange, RemainingTargets, TemplateTable};

// ─── Request / report ────────────────────────────────────────────────────────

/// Wire form of an evaluation: measurements plus the raw topic-id → answer
/// map from the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationRequest {
    pub measurements: PatientMeasurements,
    pub answers: HashMap<String, Value>,
    /// Date the evaluation refers to; today when absent.
    pub reference_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub evaluation_id: Uuid,
    pub locale: Locale,
    pub calculated_data: CalculatedData,
    pub bmi_label: Option<&'static str>,
    pub trimester_label: Option<&'static str>,
    pub expected_gain_range: Option<ExpectedGainRange>,
    pub status: Option<WeightGainStatus>,
    pub narrative_message: Option<String>,
    pub remaining_targets: Option<RemainingTargets>,
    pub professional_alerts: Vec<AdvisoryItem>,
    pub patient_guidelines: Vec<AdvisoryItem>,
    pub all_advisories: Vec<AdvisoryItem>,
    pub critical_point_count: usize,
    /// Present when a last menstrual date was supplied.
    pub gestational_age: Option<GestationalAge>,
    pub maternal_age: Option<u32>,
    pub processing_time_ms: u64,
}

impl EvaluationRequest {
    /// Read a JSON request file.
    pub fn load(path: &Path) -> Result<Self, GuidanceError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| GuidanceError::InputRead(path.display().to_string(), e.to_string()))?;
        Ok(serde_json::from_str(&raw)?)
    }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

pub trait GuidanceEngine {
    /// Evaluate typed answers against a fixed reference date.
    fn evaluate(
        &self,
        measurements: &PatientMeasurements,
        answers: &QuestionnaireAnswers,
        reference_date: NaiveDate,
    ) -> EvaluationReport;

    /// Evaluate a wire request. Raw answers are converted once here.
    fn evaluate_request(&self, request: &EvaluationRequest) -> EvaluationReport {
        let answers = QuestionnaireAnswers::from_answer_map(&request.answers);
        let reference = request.reference_date.unwrap_or_else(today);
        self.evaluate(&request.measurements, &answers, reference)
    }
}

// ─── Default engine ──────────────────────────────────────────────────────────

pub struct DefaultGuidanceEngine {
    config: EngineConfig,
    templates: TemplateTable,
    aggregator: FeedbackAggregator,
}

impl DefaultGuidanceEngine {
    /// Build with the compiled-in templates, refusing to start if the table
    /// misses a required entry.
    pub fn new(config: EngineConfig) -> Result<Self, GuidanceError> {
        Self::with_templates(config, TemplateTable::builtin().clone())
    }

    pub fn with_templates(config: EngineConfig, templates: TemplateTable) -> Result<Self, GuidanceError> {
        templates.validate()?;
        tracing::debug!(templates = templates.len(), locale = %config.locale, "Guidance engine ready");
        Ok(Self {
            config,
            templates,
            aggregator: FeedbackAggregator::new(),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

/// The last menstrual date wins over a typed week, including a same-day
/// date (week 0). Only an inverted date, whose gestational age is unknown,
/// falls back to the typed week.
fn resolve_week(measurements: &PatientMeasurements, reference: NaiveDate) -> (Option<u32>, Option<GestationalAge>) {
    let lmp = measurements.last_menstrual_date;
    let age = lmp.map(|lmp| compute_gestational_age(lmp, reference));
    let from_dates = lmp
        .filter(|lmp| days_between(*lmp, reference) >= 0)
        .and(age)
        .map(|a| a.rounded_weeks);
    (from_dates.or(measurements.gestational_week), age)
}

impl GuidanceEngine for DefaultGuidanceEngine {
    fn evaluate(
        &self,
        measurements: &PatientMeasurements,
        answers: &QuestionnaireAnswers,
        reference_date: NaiveDate,
    ) -> EvaluationReport {
        let start = Instant::now();
        let locale = self.config.locale;

        let bmi = classify_bmi(measurements.pre_gestational_weight_kg, measurements.height);
        let category = bmi.map(|b| b.category);
        let gain = cumulative_gain(measurements.current_weight_kg, measurements.pre_gestational_weight_kg);
        let (week, gestational_age) = resolve_week(measurements, reference_date);
        let ctx = RuleContext::for_week(week);
        let trimester = ctx.trimester;

        let assessment = match (category, week, gain) {
            (Some(category), Some(week), Some(gain)) => {
                weight_gain::assess(&self.templates, category, week, gain, locale)
            }
            _ => None,
        };
        let expected_gain_range = match (category, week) {
            (Some(category), Some(week)) if week >= 1 => Some(weight_gain::expected_gain(category, week)),
            _ => None,
        };

        let all_advisories = self.aggregator.collect(answers, &ctx);
        let summary = summarize(&all_advisories);

        let calculated_data = CalculatedData {
            bmi: bmi.map(|b| b.bmi),
            bmi_category: category,
            cumulative_gain: gain,
            gestational_week: week,
            trimester,
            risk_score: summary.critical_point_count,
            critical_point_count: summary.critical_point_count,
        };
        let maternal_age = measurements
            .birth_date
            .and_then(|birth| age_in_years(birth, reference_date));

        let (status, narrative_message, remaining_targets) = match assessment {
            Some(a) => (Some(a.status), Some(a.narrative), Some(a.remaining)),
            None => (None, None, None),
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            category = category.map(|c| c.as_str()),
            week,
            trimester = trimester.map(|t| t.number()),
            status = status.map(|s| s.as_str()),
            advisories = all_advisories.len(),
            professional = summary.professional_alerts.len(),
            patient = summary.patient_guidelines.len(),
            critical = summary.critical_point_count,
            processing_ms = processing_time_ms,
            "Prenatal evaluation complete"
        );

        EvaluationReport {
            evaluation_id: Uuid::new_v4(),
            locale,
            calculated_data,
            bmi_label: category.map(|c| c.label()),
            trimester_label: trimester.map(|t| t.label(locale)),
            expected_gain_range,
            status,
            narrative_message,
            remaining_targets,
            professional_alerts: summary.professional_alerts,
            patient_guidelines: summary.patient_guidelines,
            critical_point_count: summary.critical_point_count,
            all_advisories,
            gestational_age,
            maternal_age,
            processing_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::{BmiCategory, Trimester};
    use crate::weight_gain::templates::Template;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn engine() -> DefaultGuidanceEngine {
        DefaultGuidanceEngine::new(EngineConfig::default()).unwrap()
    }

    fn measurements(pre: f64, height: f64, current: f64, week: u32) -> PatientMeasurements {
        PatientMeasurements {
            pre_gestational_weight_kg: Some(pre),
            height: Some(height),
            current_weight_kg: Some(current),
            gestational_week: Some(week),
            ..Default::default()
        }
    }

    #[test]
    fn refuses_incomplete_template_table() {
        let mut table = TemplateTable::default();
        table.insert(
            (BmiCategory::Normal, Trimester::First, WeightGainStatus::Adequate),
            Template { id: "x", body: "y" },
        );
        let result = DefaultGuidanceEngine::with_templates(EngineConfig::default(), table);
        assert!(matches!(result, Err(GuidanceError::MissingTemplate { .. })));
    }

    #[test]
    fn full_evaluation() {
        // BMI 60 / 1.65² = 22.04, Normal
        let m = measurements(60.0, 1.65, 62.0, 20);
        let report = engine().evaluate(&m, &QuestionnaireAnswers::default(), date(2024, 6, 1));
        let c = &report.calculated_data;
        assert_eq!(c.bmi, Some(22.04));
        assert_eq!(c.bmi_category, Some(BmiCategory::Normal));
        assert_eq!(c.cumulative_gain, Some(2.0));
        assert_eq!(c.trimester, Some(Trimester::Second));
        assert_eq!(report.status, Some(WeightGainStatus::Adequate));
        assert!(report.narrative_message.unwrap().contains("semana 20"));
        assert_eq!(report.bmi_label, Some("Eutrofia pré-gestacional"));
        assert_eq!(report.trimester_label, Some("Segundo trimestre"));
        assert!(report.expected_gain_range.is_some());
    }

    #[test]
    fn missing_weights_skip_assessment() {
        let m = PatientMeasurements {
            height: Some(1.60),
            gestational_week: Some(12),
            ..Default::default()
        };
        let report = engine().evaluate(&m, &QuestionnaireAnswers::default(), date(2024, 6, 1));
        assert!(report.calculated_data.bmi.is_none());
        assert!(report.status.is_none());
        assert!(report.narrative_message.is_none());
        assert!(report.expected_gain_range.is_none());
        assert_eq!(report.calculated_data.trimester, Some(Trimester::First));
    }

    #[test]
    fn last_menstrual_date_takes_precedence() {
        let mut m = measurements(60.0, 1.65, 61.0, 30);
        // 136 days = 19 weeks + 3 days, rounds down
        m.last_menstrual_date = Some(date(2024, 1, 17));
        let report = engine().evaluate(&m, &QuestionnaireAnswers::default(), date(2024, 6, 1));
        assert_eq!(report.calculated_data.gestational_week, Some(19));
        let ga = report.gestational_age.unwrap();
        assert_eq!((ga.weeks, ga.day_remainder), (19, 3));
    }

    #[test]
    fn inverted_dates_fall_back_to_typed_week() {
        let mut m = measurements(60.0, 1.65, 61.0, 22);
        m.last_menstrual_date = Some(date(2024, 7, 1));
        let report = engine().evaluate(&m, &QuestionnaireAnswers::default(), date(2024, 6, 1));
        assert_eq!(report.calculated_data.gestational_week, Some(22));
        assert_eq!(report.gestational_age, Some(GestationalAge::default()));
    }

    #[test]
    fn same_day_last_menstrual_date_is_week_zero() {
        let mut m = measurements(60.0, 1.65, 61.0, 30);
        m.last_menstrual_date = Some(date(2024, 6, 1));
        let report = engine().evaluate(&m, &QuestionnaireAnswers::default(), date(2024, 6, 1));
        assert_eq!(report.calculated_data.gestational_week, Some(0));
        assert_eq!(report.calculated_data.trimester, None);
        assert_eq!(report.gestational_age, Some(GestationalAge::default()));
        assert!(report.status.is_none());
        assert!(report.narrative_message.is_none());
        assert!(report.expected_gain_range.is_none());
    }

    #[test]
    fn maternal_age_from_birth_date() {
        let mut m = measurements(60.0, 1.65, 61.0, 22);
        m.birth_date = Some(date(1994, 6, 2));
        let report = engine().evaluate(&m, &QuestionnaireAnswers::default(), date(2024, 6, 1));
        assert_eq!(report.maternal_age, Some(29));
    }

    #[test]
    fn raw_request_answers_are_converted() {
        let request: EvaluationRequest = serde_json::from_value(serde_json::json!({
            "measurements": {
                "pre_gestational_weight_kg": 70.0,
                "height": 160,
                "current_weight_kg": 71.0,
                "gestational_week": 12
            },
            "answers": {
                "substances_use": "Sim",
                "physical_activity": "Não"
            },
            "reference_date": "2024-06-01"
        }))
        .unwrap();
        let report = engine().evaluate_request(&request);
        assert_eq!(report.calculated_data.bmi_category, Some(BmiCategory::Overweight));
        assert_eq!(report.critical_point_count, 2);
        assert_eq!(report.calculated_data.risk_score, 2);
        assert_eq!(report.status, Some(WeightGainStatus::Above));
    }

    #[test]
    fn request_loads_from_file() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"measurements": {{"gestational_week": 8}}, "answers": {{"anemia_test": "Sim"}}}}"#
        )
        .unwrap();
        let request = EvaluationRequest::load(file.path()).unwrap();
        assert_eq!(request.measurements.gestational_week, Some(8));
        assert!(request.reference_date.is_none());

        let dir = tempfile::tempdir().unwrap();
        let err = EvaluationRequest::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, GuidanceError::InputRead(..)));
    }

    #[test]
    fn invalid_week_keeps_advisories() {
        let request: EvaluationRequest = serde_json::from_value(serde_json::json!({
            "measurements": { "gestational_week": -2 },
            "answers": { "substances_use": "Sim" },
            "reference_date": "2024-06-01"
        }))
        .unwrap();
        let report = engine().evaluate_request(&request);
        assert_eq!(report.calculated_data.gestational_week, None);
        assert!(report.status.is_none());
        assert_eq!(report.critical_point_count, 1);
    }

    #[test]
    fn report_serializes_status_codes() {
        let m = measurements(60.0, 1.65, 59.0, 10);
        let report = engine().evaluate(&m, &QuestionnaireAnswers::default(), date(2024, 6, 1));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "loss_acceptable");
        assert_eq!(json["calculated_data"]["trimester"], "first");
        assert_eq!(json["locale"], "pt-BR");
    }

    #[test]
    fn english_locale_formats_narrative() {
        let config = EngineConfig {
            locale: Locale::EnUs,
            ..Default::default()
        };
        let engine = DefaultGuidanceEngine::new(config).unwrap();
        let m = measurements(60.0, 1.65, 62.5, 20);
        let report = engine.evaluate(&m, &QuestionnaireAnswers::default(), date(2024, 6, 1));
        assert!(report.narrative_message.unwrap().contains("2.5 kg"));
        assert_eq!(report.trimester_label, Some("Second trimester"));
    }
}
