//! Keyword-driven emergency scoring.
//!
//! A single pass over the lowercased description picks a category, then
//! additive bonuses for severity words, weather, night hours and population
//! density are applied. The result is clamped to 0..=100 and mapped onto a
//! priority tier and canned narrative text.

use crate::model::AiAnalysis;
use serde::{Deserialize, Serialize};

pub const MAX_SCORE: u32 = 100;

const SEVERITY_WORDS: [&str; 6] = ["critical", "severe", "major", "multiple", "trapped", "urgent"];
const SEVERITY_WORD_BONUS: u32 = 10;

const HIGH_WIND_THRESHOLD: f64 = 25.0;
const HEAVY_PRECIPITATION_THRESHOLD: f64 = 5.0;
const DENSE_POPULATION_THRESHOLD: f64 = 1000.0;

const CALM_WEATHER: &str = "No significant weather impact on response operations";
const HIGH_WIND_IMPACT: &str = "High winds may complicate response operations and spread hazards";
const PRECIPITATION_IMPACT: &str =
    "Heavy precipitation may slow response and create additional hazards";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmergencyCategory {
    Fire,
    Flood,
    Medical,
    Hazmat,
    Accident,
    General,
}

impl EmergencyCategory {
    /// Categories in match order; the first hit wins.
    const DETECTION_ORDER: [(EmergencyCategory, [&'static str; 3]); 5] = [
        (EmergencyCategory::Fire, ["fire", "explosion", "smoke"]),
        (EmergencyCategory::Flood, ["flood", "water", "drowning"]),
        (EmergencyCategory::Medical, ["medical", "poisoning", "illness"]),
        (EmergencyCategory::Hazmat, ["gas", "chemical", "hazmat"]),
        (EmergencyCategory::Accident, ["accident", "collision", "crash"]),
    ];

    pub fn detect(description_lower: &str) -> Self {
        Self::DETECTION_ORDER
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| description_lower.contains(k)))
            .map(|(category, _)| *category)
            .unwrap_or(EmergencyCategory::General)
    }

    pub fn base_score(&self) -> u32 {
        match self {
            EmergencyCategory::Fire => 80,
            EmergencyCategory::Flood => 70,
            EmergencyCategory::Medical => 60,
            EmergencyCategory::Hazmat => 85,
            EmergencyCategory::Accident => 45,
            EmergencyCategory::General => 30,
        }
    }

    pub fn base_personnel(&self) -> u32 {
        match self {
            EmergencyCategory::Fire => 15,
            EmergencyCategory::Flood => 12,
            EmergencyCategory::Medical => 8,
            EmergencyCategory::Hazmat => 20,
            EmergencyCategory::Accident => 6,
            EmergencyCategory::General => 5,
        }
    }

    pub fn risk_factors(&self) -> &'static [&'static str] {
        match self {
            EmergencyCategory::Fire => &["Fire spread risk", "Smoke inhalation", "Structural damage"],
            EmergencyCategory::Flood => &["Swift water", "Electrical hazards", "Contamination"],
            EmergencyCategory::Medical => {
                &["Disease spread", "Multiple casualties", "Public health risk"]
            }
            EmergencyCategory::Hazmat => {
                &["Toxic exposure", "Explosion risk", "Environmental contamination"]
            }
            EmergencyCategory::Accident => {
                &["Traffic disruption", "Secondary accidents", "Injury severity unknown"]
            }
            EmergencyCategory::General => &[],
        }
    }

    pub fn recommended_actions(&self) -> &'static [&'static str] {
        match self {
            EmergencyCategory::Fire => &[
                "Deploy fire suppression teams",
                "Establish evacuation perimeter",
                "Medical standby for smoke inhalation",
            ],
            EmergencyCategory::Flood => &[
                "Deploy swift water rescue teams",
                "Evacuate affected areas",
                "Establish shelter locations",
            ],
            EmergencyCategory::Medical => &[
                "Deploy multiple ambulances",
                "Set up triage area",
                "Contact hospitals for capacity",
            ],
            EmergencyCategory::Hazmat => &[
                "Establish containment zone",
                "Deploy hazmat teams",
                "Begin evacuation procedures",
            ],
            EmergencyCategory::Accident | EmergencyCategory::General => &[
                "Assess situation",
                "Deploy appropriate response teams",
                "Secure area",
            ],
        }
    }

    pub fn resources_needed(&self) -> &'static [&'static str] {
        match self {
            EmergencyCategory::Fire => &[
                "Fire trucks",
                "Ladder units",
                "Ambulances",
                "Police for traffic control",
            ],
            EmergencyCategory::Flood => &[
                "Boats",
                "Water rescue equipment",
                "Pumping equipment",
                "Shelters",
            ],
            EmergencyCategory::Medical => &[
                "Ambulances",
                "Medical personnel",
                "Medical supplies",
                "Transport vehicles",
            ],
            EmergencyCategory::Hazmat => &[
                "Hazmat units",
                "Decontamination equipment",
                "Protective gear",
                "Evacuation vehicles",
            ],
            EmergencyCategory::Accident | EmergencyCategory::General => &[
                "First responders",
                "Assessment team",
                "Basic emergency equipment",
            ],
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub precipitation: f64,
    pub conditions: String,
}

impl WeatherData {
    /// Conditions assumed by the report wizard when no live feed is wired.
    pub fn clear_day() -> Self {
        Self {
            temperature: 72.0,
            humidity: 65.0,
            wind_speed: 12.0,
            precipitation: 0.0,
            conditions: "Clear".into(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather: Option<WeatherData>,
    /// Local hour 0..=23; anything larger is ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour_of_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population_density: Option<f64>,
}

impl AnalysisInput {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub category: EmergencyCategory,
    pub emergency_score: u32,
    pub rescue_personnel_required: u32,
    pub estimated_severity: String,
    pub risk_factors: Vec<String>,
    pub weather_impact: String,
    pub priority_level: u8,
    pub recommended_actions: Vec<String>,
    pub estimated_duration: String,
    pub resources_needed: Vec<String>,
}

impl AnalysisResult {
    /// The subset stored on an [`crate::model::Incident`].
    pub fn to_ai_analysis(&self) -> AiAnalysis {
        AiAnalysis {
            emergency_score: self.emergency_score,
            rescue_personnel_required: self.rescue_personnel_required,
            estimated_severity: self.estimated_severity.clone(),
            risk_factors: self.risk_factors.clone(),
            weather_impact: self.weather_impact.clone(),
            priority_level: self.priority_level,
        }
    }
}

pub fn analyze(input: &AnalysisInput) -> AnalysisResult {
    let description = input.description.to_lowercase();
    let category = EmergencyCategory::detect(&description);

    let mut score = category.base_score();
    let mut personnel = category.base_personnel();
    let mut risk_factors: Vec<String> = category
        .risk_factors()
        .iter()
        .map(ToString::to_string)
        .collect();

    let severity_bonus = SEVERITY_WORDS
        .iter()
        .filter(|word| description.contains(*word))
        .count() as u32
        * SEVERITY_WORD_BONUS;

    let mut weather_impact = CALM_WEATHER;
    if let Some(weather) = input.weather.as_ref() {
        if weather.wind_speed > HIGH_WIND_THRESHOLD {
            score += 10;
            weather_impact = HIGH_WIND_IMPACT;
            risk_factors.push("High wind conditions".into());
        }
        if weather.precipitation > HEAVY_PRECIPITATION_THRESHOLD {
            score += 5;
            weather_impact = PRECIPITATION_IMPACT;
            risk_factors.push("Weather-related delays".into());
        }
    }

    if input.hour_of_day.is_some_and(is_night_hour) {
        score += 5;
        personnel += 2;
        risk_factors.push("Nighttime operations".into());
    }

    if input
        .population_density
        .is_some_and(|density| density > DENSE_POPULATION_THRESHOLD)
    {
        score += 15;
        personnel += 5;
        risk_factors.push("High population density area".into());
    }

    let emergency_score = (score + severity_bonus).min(MAX_SCORE);

    AnalysisResult {
        category,
        emergency_score,
        rescue_personnel_required: personnel + emergency_score / 20,
        estimated_severity: severity_narrative(emergency_score).to_string(),
        risk_factors,
        weather_impact: weather_impact.to_string(),
        priority_level: priority_for_score(emergency_score),
        recommended_actions: to_owned_list(category.recommended_actions()),
        estimated_duration: estimated_duration(emergency_score).to_string(),
        resources_needed: to_owned_list(category.resources_needed()),
    }
}

/// Hours outside 0..=23 are never night.
pub fn is_night_hour(hour: u32) -> bool {
    matches!(hour, 0..=6 | 22..=23)
}

/// 1 is the most urgent tier, 5 the least.
pub fn priority_for_score(score: u32) -> u8 {
    match score {
        s if s >= 90 => 1,
        s if s >= 70 => 2,
        s if s >= 50 => 3,
        s if s >= 30 => 4,
        _ => 5,
    }
}

pub fn severity_narrative(score: u32) -> &'static str {
    match score {
        s if s >= 90 => "Life-threatening emergency requiring immediate massive response",
        s if s >= 70 => "Major incident requiring significant emergency response",
        s if s >= 50 => "Moderate emergency requiring standard response protocol",
        s if s >= 30 => "Minor incident requiring basic emergency response",
        _ => "Low-priority incident requiring monitoring",
    }
}

pub fn estimated_duration(score: u32) -> &'static str {
    match score {
        s if s >= 90 => "6-12 hours or more",
        s if s >= 80 => "4-8 hours",
        _ => "2-4 hours",
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_with_critical_reaches_top_tier() {
        let result = analyze(&AnalysisInput::new("Critical fire on the third floor"));
        assert_eq!(result.category, EmergencyCategory::Fire);
        assert_eq!(result.emergency_score, 90);
        assert_eq!(result.priority_level, 1);
        assert_eq!(result.rescue_personnel_required, 15 + 90 / 20);
        assert_eq!(result.estimated_duration, "6-12 hours or more");
        assert_eq!(result.weather_impact, CALM_WEATHER);
    }

    #[test]
    fn category_order_prefers_fire_over_hazmat() {
        assert_eq!(
            EmergencyCategory::detect("gas explosion downtown"),
            EmergencyCategory::Fire
        );
        assert_eq!(
            EmergencyCategory::detect("chemical spill at plant"),
            EmergencyCategory::Hazmat
        );
        assert_eq!(
            EmergencyCategory::detect("lost dog in the park"),
            EmergencyCategory::General
        );
    }

    #[test]
    fn accident_uses_general_recommendations() {
        let result = analyze(&AnalysisInput::new("two car collision"));
        assert_eq!(result.category, EmergencyCategory::Accident);
        assert_eq!(result.emergency_score, 45);
        assert_eq!(result.priority_level, 4);
        assert_eq!(result.recommended_actions[0], "Assess situation");
        assert_eq!(result.risk_factors[0], "Traffic disruption");
    }

    #[test]
    fn weather_bonuses_stack_and_last_impact_wins() {
        let mut input = AnalysisInput::new("flooding in the basement");
        input.weather = Some(WeatherData {
            wind_speed: 30.0,
            precipitation: 8.0,
            ..WeatherData::clear_day()
        });
        let result = analyze(&input);
        assert_eq!(result.emergency_score, 70 + 10 + 5);
        assert_eq!(result.weather_impact, PRECIPITATION_IMPACT);
        assert!(result.risk_factors.iter().any(|r| r == "High wind conditions"));
        assert!(result.risk_factors.iter().any(|r| r == "Weather-related delays"));
    }

    #[test]
    fn night_and_density_add_personnel() {
        let mut input = AnalysisInput::new("someone needs help");
        input.hour_of_day = Some(23);
        input.population_density = Some(1500.0);
        let result = analyze(&input);
        assert_eq!(result.emergency_score, 30 + 5 + 15);
        assert_eq!(result.rescue_personnel_required, 5 + 2 + 5 + 50 / 20);
        assert_eq!(
            result.risk_factors,
            vec!["Nighttime operations", "High population density area"]
        );
    }

    #[test]
    fn score_is_clamped() {
        let mut input = AnalysisInput::new(
            "critical severe major hazmat chemical leak, multiple people trapped, urgent",
        );
        input.hour_of_day = Some(2);
        input.population_density = Some(5000.0);
        let result = analyze(&input);
        assert_eq!(result.emergency_score, MAX_SCORE);
        assert_eq!(result.rescue_personnel_required, 20 + 2 + 5 + 5);
    }

    #[test]
    fn night_window_edges() {
        assert!(is_night_hour(22));
        assert!(is_night_hour(0));
        assert!(is_night_hour(6));
        assert!(!is_night_hour(7));
        assert!(!is_night_hour(21));
        assert!(!is_night_hour(24));
        assert!(!is_night_hour(30));
    }

    #[test]
    fn out_of_range_hour_adds_nothing() {
        let input: AnalysisInput =
            serde_json::from_str(r#"{"description":"someone needs help","hourOfDay":30}"#)
                .expect("decode");
        assert_eq!(input.hour_of_day, Some(30));
        let result = analyze(&input);
        assert_eq!(result.emergency_score, 30);
        assert!(result.risk_factors.iter().all(|r| r != "Nighttime operations"));
    }

    #[test]
    fn thresholds_map_to_tiers() {
        assert_eq!(priority_for_score(100), 1);
        assert_eq!(priority_for_score(89), 2);
        assert_eq!(priority_for_score(70), 2);
        assert_eq!(priority_for_score(69), 3);
        assert_eq!(priority_for_score(30), 4);
        assert_eq!(priority_for_score(29), 5);
        assert_eq!(estimated_duration(85), "4-8 hours");
    }
}
