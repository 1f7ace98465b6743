use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Critical,
        Severity::High,
        Severity::Medium,
        Severity::Low,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    /// Case-insensitive parse; the backend sends title case, mock data lowercase.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "high" => Some(Severity::High),
            "medium" => Some(Severity::Medium),
            "low" => Some(Severity::Low),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::from_label(s).ok_or_else(|| CoreError::UnknownValue {
            field: "severity",
            value: s.to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncidentStatus {
    Active,
    Responding,
    Resolved,
}

impl IncidentStatus {
    pub const ALL: [IncidentStatus; 3] = [
        IncidentStatus::Active,
        IncidentStatus::Responding,
        IncidentStatus::Resolved,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IncidentStatus::Active => "active",
            IncidentStatus::Responding => "responding",
            IncidentStatus::Resolved => "resolved",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IncidentStatus::Active => "Active",
            IncidentStatus::Responding => "Responding",
            IncidentStatus::Resolved => "Resolved",
        }
    }

    /// Maps backend workflow labels ("In Progress", "Completed", ...) onto the
    /// three display states.
    pub fn from_label(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" | "submitted" | "sumitted" => Some(IncidentStatus::Active),
            "responding" | "in progress" | "en route" | "on scene" => {
                Some(IncidentStatus::Responding)
            }
            "resolved" | "completed" | "closed" => Some(IncidentStatus::Resolved),
            _ => None,
        }
    }

    /// Counted by the dashboard as "active".
    pub fn is_open(&self) -> bool {
        matches!(self, IncidentStatus::Active | IncidentStatus::Responding)
    }
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IncidentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IncidentStatus::from_label(s).ok_or_else(|| CoreError::UnknownValue {
            field: "status",
            value: s.to_string(),
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// `"lat, lng"` with six decimals, the format written into the report
    /// location field.
    pub fn to_location_string(&self) -> String {
        format!("{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    pub emergency_score: u32,
    pub rescue_personnel_required: u32,
    pub estimated_severity: String,
    pub risk_factors: Vec<String>,
    pub weather_impact: String,
    pub priority_level: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub severity: Severity,
    pub location: String,
    pub coordinates: Coordinates,
    pub description: String,
    pub reported_by: String,
    pub timestamp: DateTime<Utc>,
    pub status: IncidentStatus,
    pub ai_analysis: AiAnalysis,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video: Vec<String>,
}

impl Incident {
    /// Location up to the first comma, used in compact table rows.
    pub fn short_location(&self) -> &str {
        short_location(&self.location)
    }
}

pub fn short_location(location: &str) -> &str {
    location.split(',').next().unwrap_or(location).trim()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamType {
    Medical,
    Fire,
    Police,
    Rescue,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamType::Medical => "medical",
            TeamType::Fire => "fire",
            TeamType::Police => "police",
            TeamType::Rescue => "rescue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamStatus {
    Available,
    Deployed,
    Busy,
}

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamStatus::Available => "available",
            TeamStatus::Deployed => "deployed",
            TeamStatus::Busy => "busy",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResponseTeam {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TeamType,
    pub status: TeamStatus,
    pub location: Coordinates,
    pub contact: String,
    pub specialties: Vec<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Audio,
    Video,
    Image,
    Location,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub from: String,
    pub to: String,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub is_emergency: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Authority,
    Rescuer,
    Citizen,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: UserRole,
    pub contact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Coordinates>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_parses_backend_title_case() {
        assert_eq!(Severity::from_label("Critical"), Some(Severity::Critical));
        assert_eq!(Severity::from_label(" medium "), Some(Severity::Medium));
        assert_eq!(Severity::from_label("extreme"), None);
        let err = "extreme".parse::<Severity>().expect_err("unknown severity");
        assert_eq!(err.to_string(), "unknown severity value: extreme");
    }

    #[test]
    fn status_maps_workflow_labels() {
        assert_eq!(
            IncidentStatus::from_label("In Progress"),
            Some(IncidentStatus::Responding)
        );
        assert_eq!(
            IncidentStatus::from_label("Completed"),
            Some(IncidentStatus::Resolved)
        );
        assert!(IncidentStatus::Active.is_open());
        assert!(!IncidentStatus::Resolved.is_open());
    }

    #[test]
    fn incident_serializes_with_display_field_names() {
        let incident = Incident {
            id: "INC9".into(),
            kind: "Gas Leak".into(),
            severity: Severity::High,
            location: "Oak Street, Block 400".into(),
            coordinates: Coordinates::new(40.739, -73.9889),
            description: "leak".into(),
            reported_by: "Inspector".into(),
            timestamp: DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp"),
            status: IncidentStatus::Responding,
            ai_analysis: AiAnalysis::default(),
            images: Vec::new(),
            audio: Vec::new(),
            video: Vec::new(),
        };

        let v = serde_json::to_value(&incident).expect("serialize");
        assert_eq!(v.get("type"), Some(&serde_json::json!("Gas Leak")));
        assert_eq!(v.get("severity"), Some(&serde_json::json!("high")));
        assert_eq!(v.get("reportedBy"), Some(&serde_json::json!("Inspector")));
        assert!(v.get("images").is_none());
        assert_eq!(incident.short_location(), "Oak Street");
    }

    #[test]
    fn coordinates_format_six_decimals() {
        let c = Coordinates::new(28.6139, 77.209);
        assert_eq!(c.to_location_string(), "28.613900, 77.209000");
    }
}
