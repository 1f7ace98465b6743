use crate::model::{Incident, IncidentStatus, Severity};
use chrono::{DateTime, Utc};

/// Severity/status dropdowns plus the free-text search box.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IncidentFilter {
    pub severity: Option<Severity>,
    pub status: Option<IncidentStatus>,
    pub search: String,
}

impl IncidentFilter {
    /// Builds a filter from dropdown values where `"all"` means no constraint.
    pub fn from_selections(severity: &str, status: &str, search: &str) -> Self {
        Self {
            severity: Severity::from_label(severity),
            status: IncidentStatus::from_label(status),
            search: search.to_string(),
        }
    }

    pub fn matches(&self, incident: &Incident) -> bool {
        self.matches_fields(
            Some(incident.severity),
            Some(incident.status),
            &[
                incident.kind.as_str(),
                incident.location.as_str(),
                incident.description.as_str(),
            ],
        )
    }

    /// Field-level form so records that are not [`Incident`]s (API rows) can
    /// share the same rules. `None` severity/status never match a set filter.
    pub fn matches_fields(
        &self,
        severity: Option<Severity>,
        status: Option<IncidentStatus>,
        searchable: &[&str],
    ) -> bool {
        if let Some(wanted) = self.severity {
            if severity != Some(wanted) {
                return false;
            }
        }
        if let Some(wanted) = self.status {
            if status != Some(wanted) {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        needle.is_empty()
            || searchable
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }

    pub fn apply<'a>(&self, incidents: &'a [Incident]) -> Vec<&'a Incident> {
        incidents.iter().filter(|i| self.matches(i)).collect()
    }
}

/// `"15m ago"`, `"3h ago"`, `"2d ago"`. Future timestamps read as `"0m ago"`.
pub fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    format_minutes_ago((now - timestamp).num_minutes().max(0))
}

pub fn format_minutes_ago(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{minutes}m ago");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    Critical,
    Elevated,
    Moderate,
    Low,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Critical,
            s if s >= 60 => ScoreBand::Elevated,
            s if s >= 40 => ScoreBand::Moderate,
            _ => ScoreBand::Low,
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Critical => "text-primary",
            ScoreBand::Elevated => "text-warning",
            ScoreBand::Moderate => "text-secondary",
            ScoreBand::Low => "text-success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::Duration;

    #[test]
    fn all_selection_keeps_everything() {
        let incidents = mock::incidents(Utc::now());
        let filter = IncidentFilter::from_selections("all", "all", "");
        assert_eq!(filter.apply(&incidents).len(), incidents.len());
    }

    #[test]
    fn severity_and_status_combine() {
        let incidents = mock::incidents(Utc::now());
        let filter = IncidentFilter::from_selections("high", "responding", "");
        let ids: Vec<&str> = filter.apply(&incidents).iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["INC002", "INC005"]);
    }

    #[test]
    fn search_is_case_insensitive_over_text_fields() {
        let incidents = mock::incidents(Utc::now());
        let by_location = IncidentFilter::from_selections("all", "all", "HIGHWAY");
        assert_eq!(by_location.apply(&incidents)[0].id, "INC003");

        let by_description = IncidentFilter::from_selections("all", "all", "poisoning");
        assert_eq!(by_description.apply(&incidents)[0].id, "INC004");

        let none = IncidentFilter::from_selections("all", "all", "earthquake");
        assert!(none.apply(&incidents).is_empty());
    }

    #[test]
    fn unknown_row_severity_never_matches_set_filter() {
        let filter = IncidentFilter::from_selections("critical", "all", "");
        assert!(!filter.matches_fields(None, None, &["anything"]));
        assert!(IncidentFilter::default().matches_fields(None, None, &[]));
    }

    #[test]
    fn time_ago_buckets() {
        let now = Utc::now();
        assert_eq!(format_time_ago(now - Duration::minutes(15), now), "15m ago");
        assert_eq!(format_time_ago(now - Duration::minutes(125), now), "2h ago");
        assert_eq!(format_time_ago(now - Duration::hours(50), now), "2d ago");
        assert_eq!(format_time_ago(now + Duration::minutes(5), now), "0m ago");
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::for_score(95).css_class(), "text-primary");
        assert_eq!(ScoreBand::for_score(60), ScoreBand::Elevated);
        assert_eq!(ScoreBand::for_score(40), ScoreBand::Moderate);
        assert_eq!(ScoreBand::for_score(10), ScoreBand::Low);
    }
}
