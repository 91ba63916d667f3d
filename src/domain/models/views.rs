//! JSON-serializable view models handed to rendering code and the
//! calendar-export formatter. Rebuilt per request from fresh rows,
//! never cached.

use serde::{Deserialize, Serialize};

use crate::domain::models::event::{EventCost, RecurrenceRule};
use crate::domain::models::location::Location;
use crate::domain::models::rsvp::{Role, RoleCounts};

/// One concrete `(start, end)` instant pair of an event series.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub date_time: String,
    pub end_date_time: String,
}

#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// One attendee as a given viewer is entitled to see them. `hidden` is a
/// display annotation: it marks entries whose owner opted out of the public
/// list but who are visible to this viewer anyway (self or admin).
#[derive(Debug, Serialize, Clone)]
pub struct AttendeeView {
    pub user_id: String,
    pub name: String,
    pub role: String,
    pub hidden: bool,
    pub is_teaching: bool,
    pub social_links: SocialLinks,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct CurrentRsvp {
    pub role: Role,
    pub show_name: bool,
}

#[derive(Debug, Serialize, Clone)]
pub struct EventSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_time: String,
    pub end_date_time: String,
    pub location: Location,
    pub attendee_count: usize,
    pub role_counts: RoleCounts,
    pub teacher_count: usize,
    pub recurrence: Option<RecurrenceRule>,
    pub next_occurrence: Option<Occurrence>,
    pub date_added: String,
    pub last_updated: String,
}

#[derive(Debug, Serialize, Clone)]
pub struct EventDetail {
    #[serde(flatten)]
    pub summary: EventSummary,
    pub skill_level: Option<String>,
    pub prerequisites: Option<String>,
    pub cost: Option<EventCost>,
    pub attendance_cap: Option<u32>,
    pub recurrence_summary: Option<String>,
    pub visible_attendees: Vec<AttendeeView>,
    pub current_user_rsvp: Option<CurrentRsvp>,
}

// ── Location hierarchy (country → city → venue) ────────────────────

#[derive(Debug, Serialize, Clone)]
pub struct VenueGroup {
    pub venue: String,
    pub latitude: f64,
    pub longitude: f64,
    pub events: Vec<EventSummary>,
    pub event_count: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct CityGroup {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
    pub venues: Vec<VenueGroup>,
    pub event_count: usize,
}

#[derive(Debug, Serialize, Clone)]
pub struct CountryGroup {
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub cities: Vec<CityGroup>,
    pub event_count: usize,
}

pub type LocationHierarchy = Vec<CountryGroup>;
