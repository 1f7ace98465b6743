mod assistant;
mod communications;
mod dashboard;
mod home;
mod incident_detail;
mod incidents;
mod login;
mod map_view;
mod not_found;
mod report;

pub use assistant::AiAssistant;
pub use communications::Communications;
pub use dashboard::Dashboard;
pub use home::Home;
pub use incident_detail::IncidentDetail;
pub use incidents::Incidents;
pub use login::Login;
pub use map_view::MapView;
pub use not_found::NotFound;
pub use report::Report;

/// Badge class for a backend severity label.
pub(crate) fn severity_class(label: Option<&str>) -> &'static str {
    use incident_core::model::Severity;
    match label.and_then(Severity::from_label) {
        Some(Severity::Critical) => "sev-critical",
        Some(Severity::High) => "sev-high",
        Some(Severity::Medium) => "sev-medium",
        Some(Severity::Low) => "sev-low",
        None => "",
    }
}

pub(crate) fn status_class(label: Option<&str>) -> &'static str {
    use incident_core::model::IncidentStatus;
    match label.and_then(IncidentStatus::from_label) {
        Some(IncidentStatus::Active) => "status-active",
        Some(IncidentStatus::Responding) => "status-responding",
        Some(IncidentStatus::Resolved) => "status-resolved",
        None => "",
    }
}
