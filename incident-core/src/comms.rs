use crate::model::{Message, MessageType};
use chrono::{DateTime, Utc};

pub const CURRENT_USER: &str = "Current User";
pub const DEFAULT_CHANNEL: &str = "all-units";

const EMERGENCY_MARKERS: [&str; 2] = ["emergency", "urgent"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Online,
    Busy,
    Offline,
}

impl Presence {
    pub fn css_class(&self) -> &'static str {
        match self {
            Presence::Online => "bg-success",
            Presence::Busy => "bg-warning",
            Presence::Offline => "bg-muted",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Busy => "busy",
            Presence::Offline => "offline",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmergencyContact {
    pub name: &'static str,
    pub role: &'static str,
    pub presence: Presence,
    pub phone: &'static str,
}

pub fn channels() -> Vec<Channel> {
    vec![
        Channel {
            id: "all-units",
            name: "All Units",
            description: "General emergency communications",
        },
        Channel {
            id: "fire-dept",
            name: "Fire Department",
            description: "Fire and rescue operations",
        },
        Channel {
            id: "medical",
            name: "Medical Teams",
            description: "Medical emergency response",
        },
        Channel {
            id: "police",
            name: "Police Units",
            description: "Police and security operations",
        },
        Channel {
            id: "command",
            name: "Command Center",
            description: "Command and coordination",
        },
        Channel {
            id: "citizens",
            name: "Citizen Reports",
            description: "Public emergency reports",
        },
    ]
}

pub fn emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            name: "Fire Chief Johnson",
            role: "Fire Department",
            presence: Presence::Online,
            phone: "+1-555-FIRE-001",
        },
        EmergencyContact {
            name: "Dr. Sarah Chen",
            role: "Medical Director",
            presence: Presence::Busy,
            phone: "+1-555-MED-001",
        },
        EmergencyContact {
            name: "Captain Rodriguez",
            role: "Police Chief",
            presence: Presence::Online,
            phone: "+1-555-POLICE-001",
        },
        EmergencyContact {
            name: "Command Center",
            role: "Operations",
            presence: Presence::Online,
            phone: "+1-555-COMMAND",
        },
        EmergencyContact {
            name: "Emergency Dispatch",
            role: "Dispatch",
            presence: Presence::Online,
            phone: "+1-555-911-DISP",
        },
    ]
}

pub fn find_channel(id: &str) -> Option<Channel> {
    channels().into_iter().find(|c| c.id == id)
}

pub fn is_emergency_text(content: &str) -> bool {
    let lower = content.to_lowercase();
    EMERGENCY_MARKERS.iter().any(|m| lower.contains(m))
}

/// Builds an outgoing text message; `None` for blank input. `seq` is the
/// length of the list the message will join and keeps ids unique within a
/// millisecond.
pub fn compose(
    channel_id: &str,
    content: &str,
    now: DateTime<Utc>,
    seq: usize,
) -> Option<Message> {
    if content.trim().is_empty() {
        return None;
    }
    Some(Message {
        id: format!("MSG{}-{seq}", now.timestamp_millis()),
        from: CURRENT_USER.into(),
        to: channel_id.into(),
        content: content.to_string(),
        kind: MessageType::Text,
        timestamp: now,
        is_emergency: is_emergency_text(content),
    })
}

/// Messages addressed to or sent from a channel. Seeded traffic is addressed
/// by display name, composed traffic by id, so both are accepted.
pub fn messages_for_channel<'a>(messages: &'a [Message], channel_id: &str) -> Vec<&'a Message> {
    let name = find_channel(channel_id).map(|c| c.name);
    let on_channel = |party: &str| party == channel_id || Some(party) == name;
    messages
        .iter()
        .filter(|m| on_channel(&m.from) || on_channel(&m.to))
        .collect()
}
