//! End-to-end assessments through the public API.

use pretty_assertions::assert_eq;

use smartrisk::adapters::smart2::Smart2Model;
use smartrisk::adapters::treatment::{AdditiveTreatmentModel, EffectSizes};
use smartrisk::domain::{RiskClassifier, Sex, StatinIntensity};
use smartrisk::{
    AssessmentResult, PatientProfile, RiskAssessmentEngine, RiskTier, TherapyPlan,
};

fn scenario_a_profile() -> PatientProfile {
    PatientProfile {
        age: 65,
        sex: Sex::Male,
        has_diabetes: false,
        is_smoker: false,
        egfr: 60.0,
        vascular_bed_count: 0,
        ldl: 3.0,
        sbp: 140.0,
    }
}

fn scenario_b_profile() -> PatientProfile {
    PatientProfile {
        age: 80,
        sex: Sex::Male,
        has_diabetes: true,
        is_smoker: true,
        egfr: 25.0,
        vascular_bed_count: 3,
        ldl: 5.0,
        sbp: 180.0,
    }
}

fn full_plan() -> TherapyPlan {
    TherapyPlan {
        statin_intensity: StatinIntensity::High,
        ezetimibe: true,
        pcsk9_inhibitor: true,
        sbp_target_below_130: true,
    }
}

fn recommendations(tier: RiskTier) -> Vec<String> {
    tier.recommendations().iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_scenario_a_low_baseline() {
    let engine = RiskAssessmentEngine::new();
    let plan = TherapyPlan {
        statin_intensity: StatinIntensity::High,
        ezetimibe: true,
        pcsk9_inhibitor: false,
        sbp_target_below_130: false,
    };

    let result = engine
        .assess(&scenario_a_profile(), &plan)
        .expect("Scenario A is valid");

    assert_eq!(
        result,
        AssessmentResult {
            baseline_risk_percent: 0.5,
            relative_risk_reduction_percent: 41.0,
            projected_risk_percent: 0.3,
            risk_tier: RiskTier::Moderate,
            recommendations: recommendations(RiskTier::Moderate),
        }
    );
}

#[test]
fn test_scenario_b_tiered_on_projected_risk() {
    let engine = RiskAssessmentEngine::new();

    let untreated = engine
        .assess(&scenario_b_profile(), &TherapyPlan::default())
        .expect("Scenario B is valid");
    assert_eq!(untreated.baseline_risk_percent, 37.4);
    assert_eq!(untreated.risk_tier, RiskTier::VeryHigh);

    let treated = engine
        .assess(&scenario_b_profile(), &full_plan())
        .expect("Scenario B is valid");
    assert_eq!(treated.baseline_risk_percent, 37.4);
    assert_eq!(treated.relative_risk_reduction_percent, 71.0);
    assert_eq!(treated.projected_risk_percent, 10.8);
    assert_eq!(treated.risk_tier, RiskTier::Moderate);
    assert_eq!(treated.recommendations, recommendations(RiskTier::Moderate));
}

#[test]
fn test_tier_boundaries() {
    let classifier = RiskClassifier::default();
    for (risk, tier) in [
        (30.0, RiskTier::High),
        (30.1, RiskTier::VeryHigh),
        (20.0, RiskTier::Moderate),
        (20.1, RiskTier::High),
        (0.0, RiskTier::Moderate),
        (100.0, RiskTier::VeryHigh),
    ] {
        assert_eq!(classifier.classify(risk).tier, tier, "risk {risk}");
    }
}

#[test]
fn test_pcsk9_requires_ldl_threshold() {
    let engine = RiskAssessmentEngine::new();
    let plan = TherapyPlan {
        pcsk9_inhibitor: true,
        ..TherapyPlan::default()
    };

    let low = PatientProfile {
        ldl: 1.5,
        ..scenario_b_profile()
    };
    let at_threshold = PatientProfile {
        ldl: 1.8,
        ..scenario_b_profile()
    };

    let result = engine.assess(&low, &plan).expect("Valid");
    assert_eq!(result.relative_risk_reduction_percent, 0.0);
    assert_eq!(result.projected_risk_percent, result.baseline_risk_percent);

    let result = engine.assess(&at_threshold, &plan).expect("Valid");
    assert_eq!(result.relative_risk_reduction_percent, 15.0);
}

#[test]
fn test_validation_bounds() {
    let engine = RiskAssessmentEngine::new();
    let plan = TherapyPlan::default();

    let too_young = PatientProfile {
        age: 25,
        ..scenario_a_profile()
    };
    let err = engine.assess(&too_young, &plan).expect_err("Age 25 rejected");
    assert!(err.has_field("age"));

    let high_ldl = PatientProfile {
        ldl: 7.0,
        ..scenario_a_profile()
    };
    let err = engine.assess(&high_ldl, &plan).expect_err("LDL 7.0 rejected");
    assert!(err.has_field("ldl"));

    let edges = PatientProfile {
        age: 30,
        ldl: 6.0,
        ..scenario_a_profile()
    };
    assert!(engine.assess(&edges, &plan).is_ok());
}

#[test]
fn test_validation_reports_every_field() {
    let engine = RiskAssessmentEngine::new();
    let profile = PatientProfile {
        age: 95,
        egfr: 5.0,
        vascular_bed_count: 4,
        sbp: f64::NAN,
        ..scenario_a_profile()
    };

    let err = engine
        .assess(&profile, &TherapyPlan::default())
        .expect_err("Should reject");
    for field in ["age", "egfr", "vascular_bed_count", "sbp"] {
        assert!(err.has_field(field), "missing {field}");
    }
    assert!(!err.has_field("ldl"));
}

#[test]
fn test_rrr_clamped_with_inflated_effects() {
    let effects = EffectSizes {
        statin_high: 60.0,
        ezetimibe: 20.0,
        pcsk9_inhibitor: 30.0,
        sbp_target: 25.0,
        ..EffectSizes::default()
    };
    let engine =
        RiskAssessmentEngine::with_models(Smart2Model::new(), AdditiveTreatmentModel::with_effects(effects));

    let result = engine
        .assess(&scenario_b_profile(), &full_plan())
        .expect("Valid");

    assert_eq!(result.relative_risk_reduction_percent, 100.0);
    assert_eq!(result.projected_risk_percent, 0.0);
    assert_eq!(result.risk_tier, RiskTier::Moderate);
}

#[test]
fn test_assessment_is_deterministic() {
    let engine = RiskAssessmentEngine::new();
    let first = engine
        .assess(&scenario_b_profile(), &full_plan())
        .expect("Valid");
    let second = engine
        .assess(&scenario_b_profile(), &full_plan())
        .expect("Valid");

    assert_eq!(
        first.projected_risk_percent.to_bits(),
        second.projected_risk_percent.to_bits()
    );
    assert_eq!(first, second);
}

#[test]
fn test_engine_shared_across_threads() {
    let engine = RiskAssessmentEngine::new();
    let expected = engine
        .assess(&scenario_b_profile(), &full_plan())
        .expect("Valid");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| engine.assess(&scenario_b_profile(), &full_plan())))
            .collect();
        for handle in handles {
            let result = handle.join().expect("Thread panicked").expect("Valid");
            assert_eq!(result, expected);
        }
    });
}

#[test]
fn test_unknown_enum_rejected_in_json() {
    let json = r#"{"age":65,"sex":"unknown","has_diabetes":false,"is_smoker":false,
        "egfr":60.0,"vascular_bed_count":0,"ldl":3.0,"sbp":140.0}"#;
    let err = serde_json::from_str::<PatientProfile>(json).expect_err("Should reject");
    assert!(err.to_string().contains("sex"));

    let json = r#"{"statin_intensity":"maximal","ezetimibe":false,
        "pcsk9_inhibitor":false,"sbp_target_below_130":false}"#;
    let err = serde_json::from_str::<TherapyPlan>(json).expect_err("Should reject");
    assert!(err.to_string().contains("statin_intensity"));
}

#[test]
fn test_result_serializes_for_reporting() {
    let result = RiskAssessmentEngine::new()
        .assess(&scenario_b_profile(), &full_plan())
        .expect("Valid");
    let value = serde_json::to_value(&result).expect("Should serialize");

    assert_eq!(value["baseline_risk_percent"], 37.4);
    assert_eq!(value["projected_risk_percent"], 10.8);
    assert_eq!(value["risk_tier"], "Moderate");
    assert_eq!(value["recommendations"].as_array().map(Vec::len), Some(3));
}
