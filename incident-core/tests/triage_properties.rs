use incident_core::mock;
use incident_core::triage::{analyze, priority_for_score, AnalysisInput, WeatherData, MAX_SCORE};

fn stormy() -> WeatherData {
    WeatherData {
        temperature: 55.0,
        humidity: 95.0,
        wind_speed: 40.0,
        precipitation: 12.0,
        conditions: "Storm".into(),
    }
}

fn samples() -> Vec<AnalysisInput> {
    let descriptions = [
        "",
        "fire",
        "critical severe major multiple trapped urgent gas explosion",
        "Flash flood, several cars under water",
        "minor collision at the intersection",
        "chemical smell near the school",
        "someone fainted, possible medical issue",
    ];
    let mut inputs = Vec::new();
    for description in descriptions {
        inputs.push(AnalysisInput::new(description));
        inputs.push(AnalysisInput {
            weather: Some(stormy()),
            hour_of_day: Some(2),
            population_density: Some(5000.0),
            ..AnalysisInput::new(description)
        });
        inputs.push(AnalysisInput {
            weather: Some(WeatherData::clear_day()),
            hour_of_day: Some(14),
            population_density: Some(1500.0),
            ..AnalysisInput::new(description)
        });
    }
    inputs.extend(
        mock::incidents(chrono::Utc::now())
            .into_iter()
            .map(|i| AnalysisInput::new(i.description)),
    );
    inputs
}

#[test]
fn same_input_same_result() {
    for input in samples() {
        assert_eq!(analyze(&input), analyze(&input.clone()));
    }
}

#[test]
fn score_stays_in_range() {
    for input in samples() {
        let result = analyze(&input);
        assert!(result.emergency_score <= MAX_SCORE, "{:?}", input.description);
        assert!((1..=5).contains(&result.priority_level));
    }
}

#[test]
fn tier_never_rises_with_score() {
    let tiers: Vec<u8> = (0..=MAX_SCORE).map(priority_for_score).collect();
    assert!(tiers.windows(2).all(|w| w[1] <= w[0]));
    assert_eq!(tiers[0], 5);
    assert_eq!(tiers[MAX_SCORE as usize], 1);
}

#[test]
fn fire_with_critical_reaches_top_tier() {
    let result = analyze(&AnalysisInput::new("critical fire on the third floor"));
    assert_eq!(result.emergency_score, 90);
    assert_eq!(result.priority_level, 1);
    assert_eq!(result.rescue_personnel_required, 15 + 90 / 20);
}

#[test]
fn every_context_bonus_saturates() {
    let input = AnalysisInput {
        weather: Some(stormy()),
        hour_of_day: Some(23),
        population_density: Some(2000.0),
        ..AnalysisInput::new("major chemical spill, multiple people trapped")
    };
    let result = analyze(&input);
    assert_eq!(result.emergency_score, MAX_SCORE);
    assert!(result
        .risk_factors
        .iter()
        .any(|r| r == "Nighttime operations"));
    assert_eq!(
        result.weather_impact,
        "Heavy precipitation may slow response and create additional hazards"
    );
}

#[test]
fn result_serializes_in_camel_case() {
    let result = analyze(&AnalysisInput::new("smoke in the stairwell"));
    let json = serde_json::to_value(&result).expect("serialize");
    assert_eq!(json["category"], serde_json::json!("fire"));
    assert!(json.get("emergencyScore").is_some());
    assert!(json.get("rescuePersonnelRequired").is_some());
}
