use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The three attendance categories. RSVP rows store the role as free text,
/// so unknown strings are representable right up to the aggregation step.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Base,
    Flyer,
    Hybrid,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Base, Role::Flyer, Role::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Base => "Base",
            Role::Flyer => "Flyer",
            Role::Hybrid => "Hybrid",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub struct UnknownRole;

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Base" => Ok(Role::Base),
            "Flyer" => Ok(Role::Flyer),
            "Hybrid" => Ok(Role::Hybrid),
            _ => Err(UnknownRole),
        }
    }
}

/// Fixed-shape tally over the three valid roles. Never grows extra keys.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoleCounts {
    #[serde(rename = "Base")]
    pub base: u32,
    #[serde(rename = "Flyer")]
    pub flyer: u32,
    #[serde(rename = "Hybrid")]
    pub hybrid: u32,
}

impl RoleCounts {
    pub fn increment(&mut self, role: Role) {
        match role {
            Role::Base => self.base += 1,
            Role::Flyer => self.flyer += 1,
            Role::Hybrid => self.hybrid += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.base + self.flyer + self.hybrid
    }
}

/// One user's attendance record for one event. At most one per
/// `(event_id, user_id)` pair, enforced by the storage layer.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Rsvp {
    pub event_id: String,
    pub user_id: String,
    pub role: String,
    pub show_name: bool,
    pub is_teaching: bool,
}

/// The narrow RSVP-plus-profile row the visibility resolver consumes.
/// The persistence adapter is responsible for shaping its join output
/// into exactly this record.
#[derive(Debug, Deserialize, Clone)]
pub struct AttendeeRow {
    pub user_id: String,
    pub user_name: String,
    pub role: String,
    pub show_name: bool,
    pub is_teaching: bool,
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
    pub youtube_url: Option<String>,
    pub show_facebook: bool,
    pub show_instagram: bool,
    pub show_website: bool,
    pub show_youtube: bool,
}
