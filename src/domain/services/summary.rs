use chrono::{DateTime, Utc};

use crate::domain::models::event::Event;
use crate::domain::models::location::Location;
use crate::domain::models::rsvp::{AttendeeRow, RoleCounts, Rsvp};
use crate::domain::models::views::{EventDetail, EventSummary};
use crate::domain::services::recurrence::{compute_next_occurrence, format_recurrence_summary};
use crate::domain::services::roles::{aggregate_roles, teaching_count};
use crate::domain::services::visibility::{current_user_rsvp, resolve_visible_attendees, Viewer};

/// Assemble the listing view model for one event from its fetched rows.
///
/// An event whose occurrences have all elapsed still produces a summary;
/// `next_occurrence` is simply `None` and the caller decides whether to
/// list it. Status gating (approved-only listings) is also the caller's
/// concern — this function sees rows the persistence layer already chose
/// to fetch.
pub fn build_event_summary(
    event: &Event,
    location: &Location,
    rsvps: &[Rsvp],
    reference: DateTime<Utc>,
) -> EventSummary {
    let role_counts = aggregate_roles(rsvps.iter().map(|r| r.role.as_str()));
    assemble_summary(
        event,
        location,
        role_counts,
        rsvps.len(),
        teaching_count(rsvps),
        reference,
    )
}

/// Assemble the detail view model: the summary fields plus the attendee
/// list the viewer is entitled to see and the viewer's own RSVP.
pub fn build_event_detail(
    event: &Event,
    location: &Location,
    rows: &[AttendeeRow],
    viewer: &Viewer,
    reference: DateTime<Utc>,
) -> EventDetail {
    let role_counts = aggregate_roles(rows.iter().map(|r| r.role.as_str()));
    let teacher_count = rows.iter().filter(|r| r.is_teaching).count();
    let summary = assemble_summary(event, location, role_counts, rows.len(), teacher_count, reference);

    EventDetail {
        summary,
        skill_level: event.skill_level.clone(),
        prerequisites: event.prerequisites.clone(),
        cost: event.cost.clone(),
        attendance_cap: event.attendance_cap,
        recurrence_summary: format_recurrence_summary(event.recurrence.as_ref()),
        visible_attendees: resolve_visible_attendees(rows, viewer),
        current_user_rsvp: current_user_rsvp(rows, viewer),
    }
}

fn assemble_summary(
    event: &Event,
    location: &Location,
    role_counts: RoleCounts,
    attendee_count: usize,
    teacher_count: usize,
    reference: DateTime<Utc>,
) -> EventSummary {
    EventSummary {
        id: event.id.clone(),
        title: event.title.clone(),
        description: event.description.clone(),
        date_time: event.date_time.clone(),
        end_date_time: event.end_date_time.clone(),
        location: location.clone(),
        attendee_count,
        role_counts,
        teacher_count,
        recurrence: event.recurrence.clone(),
        next_occurrence: compute_next_occurrence(
            &event.date_time,
            &event.end_date_time,
            event.recurrence.as_ref(),
            reference,
        ),
        date_added: event.date_added.clone(),
        last_updated: event.last_updated.clone(),
    }
}

/// Whether an event was added or touched after the given instant,
/// typically the viewer's previous login. Unparseable inputs never
/// count as fresh.
pub fn is_event_fresh(date_added: &str, last_updated: &str, since: Option<&str>) -> bool {
    let since = match since.and_then(parse_ts) {
        Some(ts) => ts,
        None => return false,
    };
    let added = parse_ts(date_added);
    let updated = parse_ts(last_updated);
    added.is_some_and(|ts| ts > since) || updated.is_some_and(|ts| ts > since)
}

fn parse_ts(value: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_when_added_after_last_login() {
        assert!(is_event_fresh(
            "2026-02-01T00:00:00Z",
            "2026-02-01T00:00:00Z",
            Some("2026-01-15T00:00:00Z"),
        ));
    }

    #[test]
    fn test_fresh_when_updated_after_last_login() {
        assert!(is_event_fresh(
            "2026-01-01T00:00:00Z",
            "2026-02-01T00:00:00Z",
            Some("2026-01-15T00:00:00Z"),
        ));
    }

    #[test]
    fn test_stale_when_untouched_since_last_login() {
        assert!(!is_event_fresh(
            "2026-01-01T00:00:00Z",
            "2026-01-01T00:00:00Z",
            Some("2026-01-15T00:00:00Z"),
        ));
    }

    #[test]
    fn test_never_fresh_without_a_reference_instant() {
        assert!(!is_event_fresh("2026-02-01T00:00:00Z", "2026-02-01T00:00:00Z", None));
        assert!(!is_event_fresh(
            "2026-02-01T00:00:00Z",
            "2026-02-01T00:00:00Z",
            Some("not a date"),
        ));
    }
}
