pub const LOGIN: &str = "/api/login";
pub const REGISTER: &str = "/api/register";
pub const DASHBOARD_REPORT: &str = "/api/dashboardreport";
pub const RECENT_INCIDENTS: &str = "/api/recentincidents";
pub const ALL_INCIDENTS: &str = "/api/allincidents";
pub const INCIDENT_TYPES: &str = "/api/incidenttypes";
pub const SEVERITY_LEVELS: &str = "/api/severitylevels";
/// Served by the intake service, see [`crate::ApiConfig::submit_base_url`].
pub const SUBMIT_REQUEST: &str = "/api/submitrequest";
pub const GENERATE_RESPONSE: &str = "/api/generate-response";
