//! Bundled demo dataset.
//!
//! Timestamps are relative to the `now` passed in so "time ago" labels stay
//! stable across runs.

use crate::model::{
    AiAnalysis, Coordinates, Incident, IncidentStatus, Message, MessageType, ResponseTeam,
    Severity, TeamStatus, TeamType,
};
use chrono::{DateTime, Duration, Utc};

pub fn incidents(now: DateTime<Utc>) -> Vec<Incident> {
    vec![
        Incident {
            id: "INC001".into(),
            kind: "Building Fire".into(),
            severity: Severity::Critical,
            location: "Downtown Business District, 5th Avenue".into(),
            coordinates: Coordinates::new(40.7589, -73.9851),
            description: "Multi-story office building engulfed in flames. Multiple people trapped on upper floors. Heavy smoke visible from several blocks away.".into(),
            reported_by: "John Martinez - Building Security".into(),
            timestamp: now - Duration::minutes(15),
            status: IncidentStatus::Active,
            ai_analysis: analysis(
                95,
                25,
                "Life-threatening emergency requiring immediate response",
                &["High occupancy building", "Structural collapse risk", "Toxic smoke", "Limited evacuation routes"],
                "Strong winds may spread fire to adjacent buildings",
                1,
            ),
            images: vec!["/api/placeholder/400/300".into(), "/api/placeholder/400/300".into()],
            audio: Vec::new(),
            video: Vec::new(),
        },
        Incident {
            id: "INC002".into(),
            kind: "Flash Flood".into(),
            severity: Severity::High,
            location: "Riverside Park & Surrounding Neighborhoods".into(),
            coordinates: Coordinates::new(40.7829, -73.9654),
            description: "Rapid water level rise due to heavy rainfall. Several vehicles stranded, people trapped in lower levels of buildings.".into(),
            reported_by: "Emergency Weather Service".into(),
            timestamp: now - Duration::minutes(45),
            status: IncidentStatus::Responding,
            ai_analysis: analysis(
                78,
                15,
                "Major flooding event with significant rescue needs",
                &["Electrical hazards", "Swift water", "Contaminated water", "Infrastructure damage"],
                "Continued heavy rainfall expected for next 2 hours",
                2,
            ),
            images: Vec::new(),
            audio: Vec::new(),
            video: Vec::new(),
        },
        Incident {
            id: "INC003".into(),
            kind: "Traffic Accident".into(),
            severity: Severity::Medium,
            location: "Highway 101, Exit 42".into(),
            coordinates: Coordinates::new(40.7505, -73.9934),
            description: "Multi-vehicle collision blocking two lanes. Minor injuries reported, emergency services on scene.".into(),
            reported_by: "Highway Patrol Unit 7".into(),
            timestamp: now - Duration::minutes(25),
            status: IncidentStatus::Responding,
            ai_analysis: analysis(
                45,
                8,
                "Standard traffic incident with manageable response needs",
                &["Traffic congestion", "Secondary collisions", "Fuel spill risk"],
                "Clear conditions, no weather impact",
                3,
            ),
            images: Vec::new(),
            audio: Vec::new(),
            video: Vec::new(),
        },
        Incident {
            id: "INC004".into(),
            kind: "Medical Emergency".into(),
            severity: Severity::High,
            location: "Central Mall, Food Court Area".into(),
            coordinates: Coordinates::new(40.7614, -73.9776),
            description: "Mass food poisoning incident. 12 people showing severe symptoms, requiring immediate medical attention.".into(),
            reported_by: "Mall Security - Lisa Chen".into(),
            timestamp: now - Duration::minutes(35),
            status: IncidentStatus::Active,
            ai_analysis: analysis(
                72,
                12,
                "Public health emergency requiring multiple ambulances",
                &["Potential contamination source", "Public panic", "Additional victims possible"],
                "No weather impact on response",
                2,
            ),
            images: Vec::new(),
            audio: Vec::new(),
            video: Vec::new(),
        },
        Incident {
            id: "INC005".into(),
            kind: "Gas Leak".into(),
            severity: Severity::High,
            location: "Residential Area - Oak Street Block 400".into(),
            coordinates: Coordinates::new(40.7390, -73.9889),
            description: "Major natural gas leak detected in residential neighborhood. Evacuation of 3-block radius initiated.".into(),
            reported_by: "Utility Company Inspector".into(),
            timestamp: now - Duration::minutes(55),
            status: IncidentStatus::Responding,
            ai_analysis: analysis(
                84,
                18,
                "Hazardous material incident with explosion risk",
                &["Explosion hazard", "Toxic exposure", "Large evacuation zone", "Utility infrastructure damage"],
                "Light winds help disperse gas, reducing concentration",
                1,
            ),
            images: Vec::new(),
            audio: Vec::new(),
            video: Vec::new(),
        },
    ]
}

pub fn response_teams() -> Vec<ResponseTeam> {
    vec![
        team(
            "TEAM001",
            "Fire Department Station 12",
            TeamType::Fire,
            TeamStatus::Deployed,
            Coordinates::new(40.7580, -73.9855),
            "+1-555-FIRE-012",
            &["High-rise rescue", "Hazmat response", "Technical rescue"],
        ),
        team(
            "TEAM002",
            "Emergency Medical Unit Alpha",
            TeamType::Medical,
            TeamStatus::Available,
            Coordinates::new(40.7614, -73.9776),
            "+1-555-MED-ALPHA",
            &["Mass casualty", "Trauma response", "Pediatric care"],
        ),
        team(
            "TEAM003",
            "Police Tactical Unit 5",
            TeamType::Police,
            TeamStatus::Available,
            Coordinates::new(40.7505, -73.9934),
            "+1-555-POLICE-05",
            &["Traffic control", "Crowd management", "Investigation"],
        ),
        team(
            "TEAM004",
            "Swift Water Rescue Team",
            TeamType::Rescue,
            TeamStatus::Deployed,
            Coordinates::new(40.7829, -73.9654),
            "+1-555-WATER-RES",
            &["Water rescue", "Boat operations", "Dive operations"],
        ),
        team(
            "TEAM005",
            "Hazmat Response Unit",
            TeamType::Rescue,
            TeamStatus::Deployed,
            Coordinates::new(40.7390, -73.9889),
            "+1-555-HAZMAT-01",
            &["Chemical response", "Gas leaks", "Decontamination"],
        ),
    ]
}

pub fn messages(now: DateTime<Utc>) -> Vec<Message> {
    vec![
        message(
            "MSG001",
            "Command Center",
            "All Units",
            "CRITICAL: Building fire at 5th Avenue requires immediate response. All available fire units respond.",
            now - Duration::minutes(10),
            true,
        ),
        message(
            "MSG002",
            "Fire Chief",
            "Command Center",
            "ETA 3 minutes to building fire. Requesting ladder truck and additional medical support.",
            now - Duration::minutes(8),
            false,
        ),
        message(
            "MSG003",
            "Citizen Reporter",
            "Emergency Services",
            "Water level rising rapidly in basement parking garage. Several cars trapped, people need help getting out.",
            now - Duration::minutes(30),
            true,
        ),
        message(
            "MSG004",
            "Medical Team Alpha",
            "Hospital Central",
            "Transporting 3 patients from food poisoning incident. Severe dehydration, need prep for IV fluids.",
            now - Duration::minutes(20),
            false,
        ),
        message(
            "MSG005",
            "Police Unit 5",
            "Traffic Control",
            "Highway 101 incident cleared. Reopening lanes 2 and 3. One vehicle being towed.",
            now - Duration::minutes(5),
            false,
        ),
    ]
}

/// A row in the home page's "my activities" panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub id: u32,
    pub kind: &'static str,
    pub title: &'static str,
    pub status: &'static str,
    pub timestamp: &'static str,
    pub role: &'static str,
}

/// A unit assigned to one of the user's incidents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocatedResource {
    pub id: u32,
    pub name: &'static str,
    pub designation: &'static str,
    pub incident: &'static str,
    pub status: &'static str,
}

pub fn my_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: "Report",
            title: "Fire Emergency at MG Road",
            status: "Active",
            timestamp: "2 hours ago",
            role: "Reporter",
        },
        Activity {
            id: 2,
            kind: "Rescue",
            title: "Medical Emergency - Sector 5",
            status: "Completed",
            timestamp: "1 day ago",
            role: "Responder",
        },
    ]
}

pub fn allocated_resources() -> Vec<AllocatedResource> {
    vec![
        AllocatedResource {
            id: 1,
            name: "Fire Brigade Unit A",
            designation: "Fire & Rescue Team",
            incident: "Fire Emergency at MG Road",
            status: "En Route",
        },
        AllocatedResource {
            id: 2,
            name: "Ambulance 108",
            designation: "Medical Response Unit",
            incident: "Medical Emergency - Sector 5",
            status: "Completed",
        },
    ]
}

/// Static resource pool shown on the dashboard: (resource, units available).
pub fn resource_pool() -> Vec<(&'static str, u32)> {
    ["Ambulance", "Fire Truck", "Police Unit", "Rescue Team"]
        .into_iter()
        .zip((2..=5).rev())
        .collect()
}

fn analysis(
    score: u32,
    personnel: u32,
    severity: &str,
    risks: &[&str],
    weather: &str,
    priority: u8,
) -> AiAnalysis {
    AiAnalysis {
        emergency_score: score,
        rescue_personnel_required: personnel,
        estimated_severity: severity.into(),
        risk_factors: risks.iter().map(ToString::to_string).collect(),
        weather_impact: weather.into(),
        priority_level: priority,
    }
}

fn team(
    id: &str,
    name: &str,
    kind: TeamType,
    status: TeamStatus,
    location: Coordinates,
    contact: &str,
    specialties: &[&str],
) -> ResponseTeam {
    ResponseTeam {
        id: id.into(),
        name: name.into(),
        kind,
        status,
        location,
        contact: contact.into(),
        specialties: specialties.iter().map(ToString::to_string).collect(),
    }
}

fn message(
    id: &str,
    from: &str,
    to: &str,
    content: &str,
    timestamp: DateTime<Utc>,
    is_emergency: bool,
) -> Message {
    Message {
        id: id.into(),
        from: from.into(),
        to: to.into(),
        content: content.into(),
        kind: MessageType::Text,
        timestamp,
        is_emergency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_ids_are_unique() {
        let now = Utc::now();
        let mut ids: Vec<String> = incidents(now).into_iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(response_teams().len(), 5);
        assert_eq!(messages(now).len(), 5);
    }

    #[test]
    fn timestamps_are_relative_to_now() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).expect("timestamp");
        let first = &incidents(now)[0];
        assert_eq!((now - first.timestamp).num_minutes(), 15);
    }

    #[test]
    fn resource_pool_counts_down() {
        assert_eq!(
            resource_pool(),
            vec![("Ambulance", 5), ("Fire Truck", 4), ("Police Unit", 3), ("Rescue Team", 2)]
        );
    }
}
