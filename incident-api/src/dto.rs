use crate::envelope::ApiEnvelope;
use crate::error::ApiError;
use crate::loose;
use chrono::{DateTime, SecondsFormat, Utc};
use incident_core::filters::IncidentFilter;
use incident_core::model::{IncidentStatus, Severity};
use serde::{Deserialize, Serialize};

pub const LOGIN_OK: u16 = 200;
pub const REGISTER_OK: u16 = 201;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginBody {
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub user_id: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterBody {
    #[serde(default, deserialize_with = "loose::text")]
    pub user_id: Option<String>,
}

/// Identity persisted after a successful login or registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    pub user_id: Option<String>,
}

impl LoginRequest {
    /// Interprets the login response. The display name falls back to the
    /// local part of the email.
    pub fn session(
        &self,
        http_ok: bool,
        envelope: ApiEnvelope<LoginBody>,
    ) -> Result<Session, ApiError> {
        let body = envelope.require(http_ok, LOGIN_OK)?.body.unwrap_or_default();
        let username = body
            .user_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| email_local_part(&self.email).to_string());
        Ok(Session {
            username,
            user_id: body.user_id,
        })
    }
}

impl RegisterRequest {
    pub fn session(
        &self,
        http_ok: bool,
        envelope: ApiEnvelope<RegisterBody>,
    ) -> Result<Session, ApiError> {
        let body = envelope
            .require(http_ok, REGISTER_OK)?
            .body
            .unwrap_or_default();
        Ok(Session {
            username: self.user_name.clone(),
            user_id: body.user_id,
        })
    }
}

fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardReport {
    #[serde(default, deserialize_with = "loose::text")]
    pub active_incidents: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub response_teams: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub people_assisted: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub avg_response: Option<String>,
}

impl DashboardReport {
    /// Card values in display order, average response suffixed with minutes.
    pub fn card_values(&self) -> [Option<String>; 4] {
        [
            self.active_incidents.clone(),
            self.response_teams.clone(),
            self.people_assisted.clone(),
            self.avg_response.as_ref().map(|m| format!("{m} min")),
        ]
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentIncidentsBody {
    #[serde(default)]
    pub recent_incidents: Vec<RecentIncident>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentIncident {
    #[serde(default, deserialize_with = "loose::text")]
    pub incident_id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub incident_name: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub severity_level: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub elapsed_time: Option<String>,
}

impl RecentIncident {
    pub fn headline(&self) -> String {
        format!(
            "{} at {}",
            self.incident_name.as_deref().unwrap_or_default(),
            self.location.as_deref().unwrap_or_default()
        )
    }

    pub fn subtitle(&self) -> String {
        format!(
            "Severity: {} | {} min ago",
            self.severity_level.as_deref().unwrap_or_default(),
            self.elapsed_time.as_deref().unwrap_or_default()
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AllIncidentsBody {
    #[serde(default)]
    pub incidents: Vec<IncidentRecord>,
}

/// One row of `/api/allincidents`. Columns come straight from the database
/// so every value is optional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    #[serde(default, deserialize_with = "loose::text")]
    pub incident_id: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub incident_name: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub severity_level: Option<String>,
    /// Minutes since the report was created.
    #[serde(default, deserialize_with = "loose::text")]
    pub time: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub ai_score: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub personnel: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "loose::text")]
    pub priority: Option<String>,
    #[serde(default)]
    pub risk_factors: Option<serde_json::Value>,
    #[serde(default, deserialize_with = "loose::text")]
    pub reported_by: Option<String>,
}

impl IncidentRecord {
    pub fn id(&self) -> &str {
        self.incident_id.as_deref().unwrap_or_default()
    }

    pub fn name(&self) -> &str {
        self.incident_name.as_deref().unwrap_or_default()
    }

    pub fn severity(&self) -> Option<Severity> {
        self.severity_level.as_deref().and_then(Severity::from_label)
    }

    pub fn status(&self) -> Option<IncidentStatus> {
        self.status.as_deref().and_then(IncidentStatus::from_label)
    }

    pub fn score(&self) -> Option<u32> {
        self.ai_score
            .as_deref()
            .and_then(|s| s.parse::<f64>().ok())
            .map(|s| s.clamp(0.0, 100.0).round() as u32)
    }

    pub fn risk_factor_list(&self) -> Vec<String> {
        loose::list(self.risk_factors.as_ref())
    }

    /// `"12.5 min ago"`, or empty when the backend sent no time.
    pub fn elapsed_label(&self) -> String {
        self.time
            .as_deref()
            .map(|t| format!("{t} min ago"))
            .unwrap_or_default()
    }

    pub fn matches(&self, filter: &IncidentFilter) -> bool {
        filter.matches_fields(
            self.severity(),
            self.status(),
            &[
                self.name(),
                self.location.as_deref().unwrap_or_default(),
                self.description.as_deref().unwrap_or_default(),
            ],
        )
    }
}

/// Ids from the backend compare as text, so `7` matches `"7"`.
pub fn find_incident<'a>(records: &'a [IncidentRecord], id: &str) -> Option<&'a IncidentRecord> {
    records.iter().find(|r| r.id() == id)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupItem {
    #[serde(default, deserialize_with = "loose::text")]
    pub id: Option<String>,
    #[serde(default)]
    pub value: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncidentTypesBody {
    #[serde(default)]
    pub emergency_types: Vec<LookupItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityLevelsBody {
    #[serde(default)]
    pub severity_levels: Vec<LookupItem>,
}

/// Id of the entry whose display value was picked, or empty.
pub fn lookup_id(items: &[LookupItem], value: &str) -> String {
    items
        .iter()
        .find(|i| i.value == value)
        .and_then(|i| i.id.clone())
        .unwrap_or_default()
}

pub const SECTION_ID: u32 = 1;
pub const SECTION_NAME: &str = "section1";
pub const ANONYMOUS_USER_ID: &str = "1";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponseRequest {
    pub prompt: String,
    pub section_id: u32,
    pub section_name: String,
    pub prompt_given_at: String,
    pub user_id: String,
}

impl GenerateResponseRequest {
    pub fn new(prompt: &str, user_id: Option<&str>, now: DateTime<Utc>) -> Self {
        Self {
            prompt: prompt.to_string(),
            section_id: SECTION_ID,
            section_name: SECTION_NAME.to_string(),
            prompt_given_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            user_id: user_id
                .filter(|u| !u.is_empty())
                .unwrap_or(ANONYMOUS_USER_ID)
                .to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponseBody {
    #[serde(default)]
    pub response: Option<String>,
}

pub const DEFAULT_ESTIMATED_SEVERITY: &str = "medium";

/// Emergency reports carry a reporter-picked severity; public issues do not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportKind {
    #[default]
    Emergency,
    Public,
}

impl ReportKind {
    pub fn asks_severity(&self) -> bool {
        matches!(self, ReportKind::Emergency)
    }
}

/// Text fields of the multipart report submission. Attachments are appended
/// by the caller under [`attachment_field`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitReport {
    pub description: String,
    pub location: String,
    pub reporter_id: Option<String>,
    pub reporter_name: String,
    pub reporter_contact_number: String,
    pub emergency_type: String,
    pub emergency_type_id: String,
    pub estimated_severity: String,
    pub severity_id: String,
}

impl SubmitReport {
    /// Drops the severity pick for kinds that do not ask for one, so the
    /// submission falls back to the default severity with no id.
    pub fn for_kind(mut self, kind: ReportKind) -> Self {
        if !kind.asks_severity() {
            self.estimated_severity.clear();
            self.severity_id.clear();
        }
        self
    }

    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let severity = if self.estimated_severity.trim().is_empty() {
            DEFAULT_ESTIMATED_SEVERITY.to_string()
        } else {
            self.estimated_severity.clone()
        };
        vec![
            ("description", self.description.clone()),
            ("location", self.location.clone()),
            ("reporterId", self.reporter_id.clone().unwrap_or_default()),
            ("reporterName", self.reporter_name.clone()),
            ("reporterContactNumber", self.reporter_contact_number.clone()),
            ("emergencyType", self.emergency_type.clone()),
            ("emergencyTypeId", self.emergency_type_id.clone()),
            ("estimatedSeverity", severity),
            ("severityId", self.severity_id.clone()),
        ]
    }
}

/// Multipart field for an attachment by MIME prefix; other types are dropped.
pub fn attachment_field(mime: &str) -> Option<&'static str> {
    if mime.starts_with("image/") {
        Some("images")
    } else if mime.starts_with("video/") {
        Some("video")
    } else if mime.starts_with("audio/") {
        Some("audio")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn envelope<T: for<'de> Deserialize<'de>>(v: serde_json::Value) -> ApiEnvelope<T> {
        serde_json::from_value(v).expect("envelope")
    }

    #[test]
    fn login_uses_backend_name_or_email_prefix() {
        let req = LoginRequest {
            email: "asha@example.org".into(),
            password: "secret1".into(),
        };
        let named = envelope(json!({
            "status_code": 200,
            "body": { "user_name": "Asha", "user_id": 17 }
        }));
        let s = req.session(true, named).expect("session");
        assert_eq!(s.username, "Asha");
        assert_eq!(s.user_id.as_deref(), Some("17"));

        let anonymous = envelope(json!({ "status_code": 200, "body": { "user_id": "u-9" } }));
        assert_eq!(req.session(true, anonymous).expect("session").username, "asha");
    }

    #[test]
    fn login_failure_surfaces_message() {
        let req = LoginRequest {
            email: "a@b.c".into(),
            password: "secret1".into(),
        };
        let env = envelope(json!({ "status_code": 401, "message": "Invalid credentials" }));
        let err = req.session(false, env).expect_err("rejected");
        assert_eq!(err.server_message(), Some("Invalid credentials"));
    }

    #[test]
    fn register_requires_created() {
        let req = RegisterRequest {
            user_name: "ravi".into(),
            email: "ravi@example.org".into(),
            password: "secret1".into(),
        };
        let created = envelope(json!({ "status_code": 201, "body": { "user_id": 5 } }));
        let s = req.session(true, created).expect("session");
        assert_eq!(s.username, "ravi");
        assert_eq!(s.user_id.as_deref(), Some("5"));

        let ok_but_not_created = envelope(json!({ "status_code": 200 }));
        assert!(req.session(true, ok_but_not_created).is_err());
    }

    #[test]
    fn incident_rows_tolerate_mixed_types() {
        let env: ApiEnvelope<AllIncidentsBody> = envelope(json!({
            "status_code": 200,
            "body": { "incidents": [{
                "incident_id": 7,
                "incident_name": "Building Fire",
                "location": "MG Road",
                "severity_level": "Critical",
                "time": 12.5,
                "status": "In Progress",
                "ai_score": 91,
                "personnel": 20,
                "description": "smoke on floor 3",
                "priority": 1,
                "risk_factors": ["Smoke", "Collapse"],
                "reported_by": null
            }]}
        }));
        let rows = env.body.expect("body").incidents;
        let row = find_incident(&rows, "7").expect("row 7");
        assert_eq!(row.severity(), Some(Severity::Critical));
        assert_eq!(row.status(), Some(IncidentStatus::Responding));
        assert_eq!(row.score(), Some(91));
        assert_eq!(row.elapsed_label(), "12.5 min ago");
        assert_eq!(row.risk_factor_list(), vec!["Smoke", "Collapse"]);
        assert_eq!(row.reported_by, None);

        let filter = IncidentFilter::from_selections("critical", "responding", "FLOOR");
        assert!(row.matches(&filter));
        let other = IncidentFilter::from_selections("low", "all", "");
        assert!(!row.matches(&other));
    }

    #[test]
    fn dashboard_cards_append_minutes() {
        let report: DashboardReport = serde_json::from_value(json!({
            "active_incidents": 4,
            "response_teams": 9,
            "people_assisted": null,
            "avg_response": 12.75
        }))
        .expect("report");
        assert_eq!(
            report.card_values(),
            [
                Some("4".to_string()),
                Some("9".to_string()),
                None,
                Some("12.75 min".to_string())
            ]
        );
    }

    #[test]
    fn lookup_matches_display_value() {
        let body: IncidentTypesBody = serde_json::from_value(json!({
            "emergency_types": [{ "id": 1, "value": "Fire" }, { "id": 2, "value": "Flood" }]
        }))
        .expect("types");
        assert_eq!(lookup_id(&body.emergency_types, "Flood"), "2");
        assert_eq!(lookup_id(&body.emergency_types, "Quake"), "");
    }

    #[test]
    fn generate_request_shape() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp");
        let req = GenerateResponseRequest::new("what now?", None, now);
        let v = serde_json::to_value(&req).expect("encode");
        assert_eq!(
            v,
            json!({
                "prompt": "what now?",
                "section_id": 1,
                "section_name": "section1",
                "prompt_given_at": "2023-11-14T22:13:20.000Z",
                "user_id": "1"
            })
        );
    }

    #[test]
    fn submit_fields_default_severity() {
        let report = SubmitReport {
            description: "flooded underpass".into(),
            location: "28.613900, 77.209000".into(),
            reporter_name: "Asha".into(),
            ..SubmitReport::default()
        };
        let fields = report.form_fields();
        assert_eq!(fields.len(), 9);
        assert!(fields.contains(&("estimatedSeverity", "medium".to_string())));
        assert!(fields.contains(&("reporterId", String::new())));
    }

    #[test]
    fn public_reports_submit_without_severity() {
        let picked = SubmitReport {
            description: "broken streetlight".into(),
            location: "Sector 5".into(),
            estimated_severity: "High".into(),
            severity_id: "3".into(),
            ..SubmitReport::default()
        };

        let emergency = picked.clone().for_kind(ReportKind::Emergency).form_fields();
        assert!(emergency.contains(&("estimatedSeverity", "High".to_string())));
        assert!(emergency.contains(&("severityId", "3".to_string())));

        let public = picked.for_kind(ReportKind::Public).form_fields();
        assert!(public.contains(&("estimatedSeverity", "medium".to_string())));
        assert!(public.contains(&("severityId", String::new())));
        assert!(!ReportKind::Public.asks_severity());
    }

    #[test]
    fn attachments_route_by_mime_prefix() {
        assert_eq!(attachment_field("image/png"), Some("images"));
        assert_eq!(attachment_field("video/mp4"), Some("video"));
        assert_eq!(attachment_field("audio/ogg"), Some("audio"));
        assert_eq!(attachment_field("application/pdf"), None);
    }
}
