//! Layout for the simulated map. Markers are placed on a fixed percentage grid
//! by list index rather than projected from coordinates.

use crate::model::{Incident, ResponseTeam, Severity, TeamStatus, TeamType};

/// Static coverage figure shown under the map.
pub const COVERAGE_LABEL: &str = "87%";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapLayer {
    #[default]
    All,
    Incidents,
    Teams,
    Hazards,
    Evacuation,
}

impl MapLayer {
    pub const ALL: [MapLayer; 5] = [
        MapLayer::All,
        MapLayer::Incidents,
        MapLayer::Teams,
        MapLayer::Hazards,
        MapLayer::Evacuation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapLayer::All => "all",
            MapLayer::Incidents => "incidents",
            MapLayer::Teams => "teams",
            MapLayer::Hazards => "hazards",
            MapLayer::Evacuation => "evacuation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapLayer::All => "All Elements",
            MapLayer::Incidents => "Incidents Only",
            MapLayer::Teams => "Response Teams",
            MapLayer::Hazards => "Hazard Zones",
            MapLayer::Evacuation => "Evacuation Routes",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == value)
    }

    pub fn shows_incidents(&self) -> bool {
        matches!(self, MapLayer::All | MapLayer::Incidents)
    }

    pub fn shows_teams(&self) -> bool {
        matches!(self, MapLayer::All | MapLayer::Teams)
    }

    pub fn shows_hazards(&self) -> bool {
        matches!(self, MapLayer::All | MapLayer::Hazards)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MapStyle {
    #[default]
    Roadmap,
    Satellite,
    Terrain,
}

impl MapStyle {
    pub const ALL: [MapStyle; 3] = [MapStyle::Roadmap, MapStyle::Satellite, MapStyle::Terrain];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::Roadmap => "roadmap",
            MapStyle::Satellite => "satellite",
            MapStyle::Terrain => "terrain",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MapStyle::Roadmap => "Roadmap",
            MapStyle::Satellite => "Satellite",
            MapStyle::Terrain => "Terrain",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Position in percent of the map canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerPosition {
    pub left: f64,
    pub top: f64,
}

impl MarkerPosition {
    pub fn css(&self) -> String {
        format!("left: {}%; top: {}%;", self.left, self.top)
    }
}

pub fn incident_marker(index: usize) -> MarkerPosition {
    MarkerPosition {
        left: 20.0 + 15.0 * index as f64,
        top: 25.0 + 12.0 * index as f64,
    }
}

pub fn team_marker(index: usize) -> MarkerPosition {
    MarkerPosition {
        left: 30.0 + 18.0 * index as f64,
        top: 60.0 + 10.0 * (index % 2) as f64,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HazardZone {
    pub position: MarkerPosition,
    pub diameter_px: u32,
    pub css_class: &'static str,
}

pub fn hazard_zones() -> Vec<HazardZone> {
    vec![
        HazardZone {
            position: MarkerPosition { left: 18.0, top: 23.0 },
            diameter_px: 120,
            css_class: "border-primary",
        },
        HazardZone {
            position: MarkerPosition { left: 45.0, top: 35.0 },
            diameter_px: 80,
            css_class: "border-warning",
        },
    ]
}

pub fn severity_marker_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Critical => "bg-primary border-primary",
        Severity::High => "bg-warning border-warning",
        Severity::Medium => "bg-secondary border-secondary",
        Severity::Low => "bg-success border-success",
    }
}

pub fn team_status_class(status: TeamStatus) -> &'static str {
    match status {
        TeamStatus::Available => "bg-success border-success",
        TeamStatus::Deployed => "bg-warning border-warning",
        TeamStatus::Busy => "bg-primary border-primary",
    }
}

/// Short glyph for an incident marker, keyed off the free-text type.
pub fn incident_glyph(kind: &str) -> &'static str {
    let kind = kind.to_lowercase();
    if kind.contains("fire") {
        "🔥"
    } else if kind.contains("medical") {
        "✚"
    } else if kind.contains("police") {
        "🛡"
    } else {
        "📍"
    }
}

pub fn team_glyph(kind: TeamType) -> &'static str {
    match kind {
        TeamType::Fire => "🔥",
        TeamType::Medical => "✚",
        TeamType::Police => "🛡",
        TeamType::Rescue => "👥",
    }
}

/// Toggle semantics of a marker click: selecting the open marker closes it.
pub fn toggle_selection(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(id) if id == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

/// Aggregates shown under the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapStats {
    pub incidents: usize,
    pub teams: usize,
    pub deployed: usize,
}

impl MapStats {
    pub fn compute(incidents: &[Incident], teams: &[ResponseTeam]) -> Self {
        Self {
            incidents: incidents.len(),
            teams: teams.len(),
            deployed: teams
                .iter()
                .filter(|t| t.status == TeamStatus::Deployed)
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use chrono::Utc;

    #[test]
    fn marker_grid_follows_index() {
        assert_eq!(incident_marker(0), MarkerPosition { left: 20.0, top: 25.0 });
        assert_eq!(incident_marker(2), MarkerPosition { left: 50.0, top: 49.0 });
        assert_eq!(team_marker(1), MarkerPosition { left: 48.0, top: 70.0 });
        assert_eq!(team_marker(2), MarkerPosition { left: 66.0, top: 60.0 });
        assert_eq!(team_marker(0).css(), "left: 30%; top: 60%;");
    }

    #[test]
    fn layers_gate_marker_groups() {
        assert!(MapLayer::All.shows_incidents() && MapLayer::All.shows_teams());
        assert!(!MapLayer::Teams.shows_incidents());
        assert!(!MapLayer::Incidents.shows_hazards());
        assert_eq!(MapLayer::parse("evacuation"), Some(MapLayer::Evacuation));
        assert_eq!(MapStyle::parse("terrain"), Some(MapStyle::Terrain));
        assert_eq!(MapStyle::parse("hybrid"), None);
    }

    #[test]
    fn selection_toggles() {
        assert_eq!(toggle_selection(None, "INC001"), Some("INC001".into()));
        assert_eq!(toggle_selection(Some("INC001"), "INC001"), None);
        assert_eq!(toggle_selection(Some("INC001"), "INC002"), Some("INC002".into()));
    }

    #[test]
    fn stats_count_deployed_teams() {
        let stats = MapStats::compute(&mock::incidents(Utc::now()), &mock::response_teams());
        assert_eq!(stats, MapStats { incidents: 5, teams: 5, deployed: 3 });
    }

    #[test]
    fn glyphs_match_on_type_text() {
        assert_eq!(incident_glyph("Building Fire"), "🔥");
        assert_eq!(incident_glyph("Gas Leak"), "📍");
    }
}
