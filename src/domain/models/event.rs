use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{SecondsFormat, Utc};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
}

impl EventStatus {
    /// Events created by an admin skip the moderation queue.
    pub fn initial(created_by_admin: bool) -> Self {
        if created_by_admin {
            EventStatus::Approved
        } else {
            EventStatus::Pending
        }
    }

    /// Only approved events appear in public listings.
    pub fn is_publicly_listed(&self) -> bool {
        matches!(self, EventStatus::Approved)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceFrequency {
    None,
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecurrenceRule {
    pub frequency: RecurrenceFrequency,
    /// ISO-8601, inclusive. Always present for repeating events in practice,
    /// but the recurrence engine does not assume it.
    pub end_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventCost {
    pub amount: f64,
    pub concession: Option<f64>,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date_time: String,     // ISO-8601 UTC
    pub end_date_time: String, // ISO-8601 UTC
    pub location_id: String,
    pub recurrence: Option<RecurrenceRule>,
    pub status: EventStatus,
    pub skill_level: Option<String>,
    pub prerequisites: Option<String>,
    pub cost: Option<EventCost>,
    pub attendance_cap: Option<u32>,
    pub created_by: String,
    pub date_added: String,
    pub last_updated: String,
}

pub struct NewEventParams {
    pub title: String,
    pub description: String,
    pub date_time: String,
    pub end_date_time: String,
    pub location_id: String,
    pub recurrence: Option<RecurrenceRule>,
    pub skill_level: Option<String>,
    pub prerequisites: Option<String>,
    pub cost: Option<EventCost>,
    pub attendance_cap: Option<u32>,
    pub created_by: String,
    pub created_by_admin: bool,
}

impl Event {
    pub fn new(params: NewEventParams) -> Self {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        Self {
            id: Uuid::new_v4().to_string(),
            title: params.title,
            description: params.description,
            date_time: params.date_time,
            end_date_time: params.end_date_time,
            location_id: params.location_id,
            recurrence: params.recurrence,
            status: EventStatus::initial(params.created_by_admin),
            skill_level: params.skill_level,
            prerequisites: params.prerequisites,
            cost: params.cost,
            attendance_cap: params.attendance_cap,
            created_by: params.created_by,
            date_added: now.clone(),
            last_updated: now,
        }
    }
}
