#![allow(dead_code)]

use acro_events_core::models::event::{Event, EventStatus, RecurrenceRule};
use acro_events_core::models::location::Location;
use acro_events_core::models::rsvp::{AttendeeRow, Rsvp};
use acro_events_core::models::views::EventSummary;
use acro_events_core::models::rsvp::RoleCounts;

pub fn make_location(name: &str, city: &str, country: &str, lat: f64, lng: f64) -> Location {
    Location {
        id: format!("loc-{}-{}-{}", country, city, name),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        latitude: lat,
        longitude: lng,
        what3names: None,
        how_to_find: None,
        created_by: "u-admin".to_string(),
    }
}

pub fn make_event(id: &str, date_time: &str, end_date_time: &str, location_id: &str) -> Event {
    Event {
        id: id.to_string(),
        title: "Morning Jam".to_string(),
        description: "Open-level acro jam".to_string(),
        date_time: date_time.to_string(),
        end_date_time: end_date_time.to_string(),
        location_id: location_id.to_string(),
        recurrence: None,
        status: EventStatus::Approved,
        skill_level: None,
        prerequisites: None,
        cost: None,
        attendance_cap: None,
        created_by: "u1".to_string(),
        date_added: "2026-01-01T00:00:00Z".to_string(),
        last_updated: "2026-01-01T00:00:00Z".to_string(),
    }
}

pub fn make_recurring_event(
    id: &str,
    date_time: &str,
    end_date_time: &str,
    rule: RecurrenceRule,
) -> Event {
    let mut event = make_event(id, date_time, end_date_time, "loc-1");
    event.recurrence = Some(rule);
    event
}

pub fn make_rsvp(event_id: &str, user_id: &str, role: &str) -> Rsvp {
    Rsvp {
        event_id: event_id.to_string(),
        user_id: user_id.to_string(),
        role: role.to_string(),
        show_name: true,
        is_teaching: false,
    }
}

pub fn make_attendee_row(user_id: &str, name: &str, role: &str, show_name: bool) -> AttendeeRow {
    AttendeeRow {
        user_id: user_id.to_string(),
        user_name: name.to_string(),
        role: role.to_string(),
        show_name,
        is_teaching: false,
        facebook_url: None,
        instagram_url: None,
        website_url: None,
        youtube_url: None,
        show_facebook: false,
        show_instagram: false,
        show_website: false,
        show_youtube: false,
    }
}

pub fn make_summary(
    id: &str,
    date_time: &str,
    venue: &str,
    city: &str,
    country: &str,
    lat: f64,
    lng: f64,
) -> EventSummary {
    EventSummary {
        id: id.to_string(),
        title: "Test Event".to_string(),
        description: "desc".to_string(),
        date_time: date_time.to_string(),
        end_date_time: "2026-03-01T12:00:00Z".to_string(),
        location: make_location(venue, city, country, lat, lng),
        attendee_count: 0,
        role_counts: RoleCounts::default(),
        teacher_count: 0,
        recurrence: None,
        next_occurrence: None,
        date_added: "2026-01-01T00:00:00Z".to_string(),
        last_updated: "2026-01-01T00:00:00Z".to_string(),
    }
}
