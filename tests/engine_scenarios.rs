//! Whole-evaluation scenarios through the public API.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::{json, Value};

use prenatal_guidance::config::EngineConfig;
use prenatal_guidance::gestation::compute_gestational_age;
use prenatal_guidance::models::enums::{Audience, AdvisoryType, BmiCategory, Trimester, WeightGainStatus};
use prenatal_guidance::models::patient::PatientMeasurements;
use prenatal_guidance::models::questionnaire::QuestionnaireAnswers;
use prenatal_guidance::weight_gain::{classify_status, expected_gain, limits_for, render_message};
use prenatal_guidance::{DefaultGuidanceEngine, EvaluationRequest, GuidanceEngine};

const EPSILON: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn engine() -> DefaultGuidanceEngine {
    DefaultGuidanceEngine::new(EngineConfig::default()).unwrap()
}

/// Pre-pregnancy weights chosen at height 1.60 m to land in each category.
fn pre_weight(category: BmiCategory) -> f64 {
    match category {
        BmiCategory::Underweight => 45.0,
        BmiCategory::Normal => 58.0,
        BmiCategory::Overweight => 70.0,
        BmiCategory::Obese => 85.0,
    }
}

fn measurements(category: BmiCategory, week: u32, gain: f64) -> PatientMeasurements {
    let pre = pre_weight(category);
    PatientMeasurements {
        pre_gestational_weight_kg: Some(pre),
        height: Some(1.60),
        current_weight_kg: Some(pre + gain),
        gestational_week: Some(week),
        ..Default::default()
    }
}

fn evaluate(category: BmiCategory, week: u32, gain: f64) -> prenatal_guidance::EvaluationReport {
    let report = engine().evaluate(
        &measurements(category, week, gain),
        &QuestionnaireAnswers::default(),
        reference(),
    );
    assert_eq!(report.calculated_data.bmi_category, Some(category));
    report
}

fn request(answers: Value) -> EvaluationRequest {
    let answers: HashMap<String, Value> = serde_json::from_value(answers).unwrap();
    EvaluationRequest {
        measurements: measurements(BmiCategory::Normal, 20, 3.0),
        answers,
        reference_date: Some(reference()),
    }
}

#[test]
fn normal_first_trimester_loss_window() {
    let acceptable = evaluate(BmiCategory::Normal, 10, -1.0);
    assert_eq!(acceptable.status, Some(WeightGainStatus::LossAcceptable));
    assert!(acceptable.narrative_message.unwrap().contains("-1,0 kg"));

    let excessive = evaluate(BmiCategory::Normal, 10, -2.0);
    assert_eq!(excessive.status, Some(WeightGainStatus::LossExcessive));
}

#[test]
fn underweight_third_trimester_severely_below() {
    let report = evaluate(BmiCategory::Underweight, 30, 4.0);
    assert_eq!(report.calculated_data.trimester, Some(Trimester::Third));
    assert_eq!(report.status, Some(WeightGainStatus::BelowSevere));
}

#[test]
fn obese_first_trimester_any_gain_is_above() {
    let report = evaluate(BmiCategory::Obese, 12, 0.3);
    assert_eq!(report.status, Some(WeightGainStatus::Above));
}

#[test]
fn total_cap_reached_cites_weekly_rate() {
    for category in BmiCategory::ALL {
        let limits = limits_for(category);
        for week in [6, 20, 35] {
            let report = evaluate(category, week, limits.total_max + 0.5);
            assert_eq!(report.status, Some(WeightGainStatus::TotalMaxReached));
            let narrative = report.narrative_message.unwrap();
            let rate = format!("{} gramas", limits.weekly_rate_grams);
            assert!(narrative.contains(&rate), "{category} week {week}: {narrative}");
        }
    }
}

#[test]
fn total_cap_wins_over_trimester() {
    for category in BmiCategory::ALL {
        let cap = limits_for(category).total_max;
        for trimester in [Trimester::First, Trimester::Second, Trimester::Third] {
            assert_eq!(
                classify_status(category, trimester, cap, 30),
                WeightGainStatus::TotalMaxReached
            );
        }
    }
}

#[test]
fn expected_max_never_decreases() {
    for category in BmiCategory::ALL {
        let mut previous = expected_gain(category, 0);
        for week in 1..=40 {
            let current = expected_gain(category, week);
            assert!(current.max + EPSILON >= previous.max, "{category} week {week}");
            if week > 13 {
                assert!(current.min + EPSILON >= previous.min, "{category} week {week}");
            }
            previous = current;
        }
    }
}

#[test]
fn expected_range_hits_landmarks() {
    let at_term = expected_gain(BmiCategory::Normal, 40);
    assert!(approx(at_term.min, 8.0));
    assert!(approx(at_term.max, 12.0));
}

#[test]
fn classification_and_rendering_are_repeatable() {
    for category in BmiCategory::ALL {
        for (week, gain) in [(8, -0.4), (20, 3.3), (33, 7.9)] {
            let first = evaluate(category, week, gain);
            let second = evaluate(category, week, gain);
            assert_eq!(first.status, second.status);
            assert_eq!(first.narrative_message, second.narrative_message);
            assert_eq!(first.all_advisories, second.all_advisories);
            assert_ne!(first.evaluation_id, second.evaluation_id);

            let trimester = first.calculated_data.trimester.unwrap();
            let status = first.status.unwrap();
            assert_eq!(
                render_message(category, trimester, status, week, gain, Default::default()),
                render_message(category, trimester, status, week, gain, Default::default())
            );
        }
    }
}

#[test]
fn gestational_age_rounding() {
    let lmp = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for weeks in [4i64, 12, 27, 39] {
        let three = compute_gestational_age(lmp, lmp + chrono::Days::new((weeks * 7 + 3) as u64));
        assert_eq!(three.rounded_weeks as i64, weeks);
        let four = compute_gestational_age(lmp, lmp + chrono::Days::new((weeks * 7 + 4) as u64));
        assert_eq!(four.rounded_weeks as i64, weeks + 1);
    }
}

#[test]
fn professional_items_never_reach_patients() {
    let all_no = request(json!({
        "dietary_pattern": "3",
        "fruits_vegetables": "Não",
        "dairy_products": "Não",
        "whole_grains": "Não",
        "meat_poultry_eggs": "Não",
        "plant_proteins": "Não",
        "fish_consumption": "Não",
        "processed_foods": "Sim",
        "folic_acid_supplement": "Não sei",
        "iron_supplement": "Não sei",
        "calcium_supplement": "Não sei",
        "sun_exposure": "Não sei",
        "anemia_test": "Sim",
        "physical_activity": "Não sei",
        "coffee_tea_consumption": "Sim",
        "substances_use": "Sim"
    }));
    let all_yes = request(json!({
        "dietary_pattern": "1",
        "fruits_vegetables": true,
        "fish_consumption": true,
        "folic_acid_supplement": "Sim",
        "anemia_test": "Não",
        "substances_use": false
    }));

    for request in [all_no, all_yes, EvaluationRequest::default()] {
        let report = engine().evaluate_request(&request);
        assert!(report
            .patient_guidelines
            .iter()
            .all(|i| i.audience != Audience::Professional));
        assert!(report
            .professional_alerts
            .iter()
            .all(|i| i.audience != Audience::Patient));
        let both = report
            .all_advisories
            .iter()
            .filter(|i| i.audience == Audience::Both)
            .count();
        assert_eq!(
            report.patient_guidelines.len() + report.professional_alerts.len(),
            report.all_advisories.len() + both
        );
    }
}

#[test]
fn critical_count_matches_bad_answers() {
    let report = engine().evaluate_request(&request(json!({
        "fruits_vegetables": "Não",
        "dairy_products": "Não",
        "whole_grains": "Não",
        "substances_use": "Sim"
    })));
    assert_eq!(report.critical_point_count, 4);
    assert_eq!(report.calculated_data.risk_score, 4);
    let critical = report
        .all_advisories
        .iter()
        .filter(|i| i.advisory_type == AdvisoryType::Critical)
        .count();
    assert_eq!(critical, 4);
}

#[test]
fn missing_measurements_keep_advisories() {
    let report = engine().evaluate_request(&EvaluationRequest {
        answers: serde_json::from_value(json!({ "iron_supplement": "Não" })).unwrap(),
        reference_date: Some(reference()),
        ..Default::default()
    });
    assert!(report.calculated_data.bmi.is_none());
    assert!(report.status.is_none());
    assert!(report.narrative_message.is_none());
    assert_eq!(report.critical_point_count, 1);
}

#[test]
fn report_wire_shape() {
    let report = engine().evaluate_request(&request(json!({ "anemia_test": "Sim" })));
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["status"], "adequate");
    assert_eq!(json["calculated_data"]["bmi_category"], "normal");
    assert_eq!(json["professional_alerts"][0]["requires_input"], true);
    assert!(json["patient_guidelines"].as_array().unwrap().is_empty());
    assert!(json["evaluation_id"].is_string());
}
