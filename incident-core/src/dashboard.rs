use crate::model::{Incident, ResponseTeam, TeamStatus};
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const PLACEHOLDER: &str = "-";

pub const STAT_LABELS: [&str; 4] = [
    "Active Incidents",
    "Response Teams",
    "People Assisted",
    "Avg Response",
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

/// The four headline cards. `None` (backend unreachable or undecodable)
/// renders every value as `"-"`; a missing single value does the same.
pub fn stat_cards(values: Option<[Option<String>; 4]>) -> Vec<StatCard> {
    let values = values.unwrap_or_default();
    STAT_LABELS
        .into_iter()
        .zip(values)
        .map(|(label, value)| StatCard {
            label,
            value: value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
        })
        .collect()
}

/// Aggregates over a local dataset, used when no backend is involved.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub active_incidents: usize,
    pub response_teams: usize,
    pub available_teams: usize,
    pub people_assisted: u32,
    /// Mean minutes since report across open incidents.
    pub avg_response_minutes: Option<i64>,
}

impl DashboardSummary {
    pub fn from_dataset(incidents: &[Incident], teams: &[ResponseTeam], now: DateTime<Utc>) -> Self {
        let open: Vec<&Incident> = incidents.iter().filter(|i| i.status.is_open()).collect();
        let avg_response_minutes = if open.is_empty() {
            None
        } else {
            let total: i64 = open
                .iter()
                .map(|i| (now - i.timestamp).num_minutes().max(0))
                .sum();
            Some(total / open.len() as i64)
        };

        Self {
            active_incidents: open.len(),
            response_teams: teams.len(),
            available_teams: teams
                .iter()
                .filter(|t| t.status == TeamStatus::Available)
                .count(),
            people_assisted: incidents
                .iter()
                .map(|i| i.ai_analysis.rescue_personnel_required)
                .sum(),
            avg_response_minutes,
        }
    }

    pub fn cards(&self) -> Vec<StatCard> {
        stat_cards(Some([
            Some(self.active_incidents.to_string()),
            Some(self.response_teams.to_string()),
            Some(self.people_assisted.to_string()),
            self.avg_response_minutes.map(|m| format!("{m} min")),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    #[test]
    fn unreachable_backend_shows_placeholders() {
        let cards = stat_cards(None);
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.value == PLACEHOLDER));
        assert_eq!(cards[3].label, "Avg Response");
    }

    #[test]
    fn blank_value_falls_back_per_card() {
        let cards = stat_cards(Some([
            Some("12".into()),
            Some(" ".into()),
            None,
            Some("8 min".into()),
        ]));
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["12", "-", "-", "8 min"]);
    }

    #[test]
    fn summary_over_mock_dataset() {
        let now = Utc::now();
        let summary =
            DashboardSummary::from_dataset(&mock::incidents(now), &mock::response_teams(), now);
        assert_eq!(summary.active_incidents, 5);
        assert_eq!(summary.response_teams, 5);
        assert_eq!(summary.available_teams, 2);
        assert_eq!(summary.people_assisted, 25 + 15 + 8 + 12 + 18);
        // 15, 45, 25, 35, 55 minutes old
        assert_eq!(summary.avg_response_minutes, Some(35));
        assert_eq!(summary.cards()[3].value, "35 min");
    }

    #[test]
    fn empty_dataset_has_no_average() {
        let summary = DashboardSummary::from_dataset(&[], &[], Utc::now());
        assert_eq!(summary.avg_response_minutes, None);
        assert_eq!(summary.cards()[3].value, PLACEHOLDER);
    }
}
