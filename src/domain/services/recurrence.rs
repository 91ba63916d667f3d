use chrono::{DateTime, Duration, Months, SecondsFormat, Utc};
use tracing::warn;

use crate::domain::models::event::{RecurrenceFrequency, RecurrenceRule};
use crate::domain::models::views::Occurrence;

/// Ceiling on the monthly rolling loop. Far beyond any plausible series
/// (160+ years of monthly recurrence); hitting it is reported as "no
/// upcoming occurrence" rather than an error.
const MAX_ITERATIONS: u32 = 2000;

/// Compute the next occurrence of an event on or after `reference`, or
/// `None` when the event (and any recurrence) has fully elapsed.
///
/// A reference exactly equal to an occurrence's start still counts as
/// upcoming, and a rule `end_date` exactly equal to a computed start is
/// still inside the series; only a start strictly after the end date
/// invalidates it.
///
/// Unparseable `start`/`end` yield `None`. An unparseable `end_date` is
/// treated as no end constraint.
pub fn compute_next_occurrence(
    start: &str,
    end: &str,
    rule: Option<&RecurrenceRule>,
    reference: DateTime<Utc>,
) -> Option<Occurrence> {
    let start = parse_instant(start)?;
    let end = parse_instant(end)?;

    let frequency = match rule {
        None => RecurrenceFrequency::None,
        Some(r) => r.frequency,
    };

    if frequency == RecurrenceFrequency::None {
        if start >= reference {
            return Some(to_occurrence(start, end));
        }
        return None;
    }

    let limit = rule
        .and_then(|r| r.end_date.as_deref())
        .and_then(parse_instant);

    let (current_start, current_end) = match frequency {
        RecurrenceFrequency::None => unreachable!(),
        RecurrenceFrequency::Daily => advance_by_step(start, end, reference, Duration::days(1)),
        RecurrenceFrequency::Weekly => advance_by_step(start, end, reference, Duration::days(7)),
        RecurrenceFrequency::Monthly => advance_by_month(start, end, reference, limit)?,
    };

    // A series can expire exactly at the boundary: the first on-or-after
    // occurrence may already sit past the rule's end date.
    if let Some(limit) = limit {
        if current_start > limit {
            return None;
        }
    }

    Some(to_occurrence(current_start, current_end))
}

/// Daily and weekly steps have a fixed width, so the number of elapsed
/// periods is plain integer arithmetic and the occurrence is reached in
/// one jump. No iteration, no ceiling.
fn advance_by_step(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    reference: DateTime<Utc>,
    step: Duration,
) -> (DateTime<Utc>, DateTime<Utc>) {
    if start >= reference {
        return (start, end);
    }
    let elapsed_ms = (reference - start).num_milliseconds();
    let step_ms = step.num_milliseconds();
    let periods = (elapsed_ms + step_ms - 1) / step_ms;
    let jump = Duration::milliseconds(step_ms * periods);
    (start + jump, end + jump)
}

/// Calendar months have no fixed width, so the monthly frequency still
/// rolls one step at a time under a hard ceiling. Month-end overflow
/// follows chrono's native clamping (Jan 31 + 1 month = Feb 28/29).
fn advance_by_month(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    reference: DateTime<Utc>,
    limit: Option<DateTime<Utc>>,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let mut current_start = start;
    let mut current_end = end;
    let mut iterations = 0u32;

    while current_start < reference {
        if let Some(limit) = limit {
            if current_start > limit {
                return None;
            }
        }
        iterations += 1;
        if iterations > MAX_ITERATIONS {
            warn!(
                start = %start,
                reference = %reference,
                "monthly recurrence exceeded the iteration ceiling"
            );
            return None;
        }
        current_start = current_start.checked_add_months(Months::new(1))?;
        current_end = current_end.checked_add_months(Months::new(1))?;
    }

    Some((current_start, current_end))
}

/// Short human-readable cadence label, e.g. "Repeats weekly until 30 Jun
/// 2026". `None` for one-off events.
pub fn format_recurrence_summary(rule: Option<&RecurrenceRule>) -> Option<String> {
    let rule = rule?;
    let label = match rule.frequency {
        RecurrenceFrequency::None => return None,
        RecurrenceFrequency::Daily => "Repeats daily",
        RecurrenceFrequency::Weekly => "Repeats weekly",
        RecurrenceFrequency::Monthly => "Repeats monthly",
    };

    match rule.end_date.as_deref().and_then(parse_instant) {
        Some(end) => Some(format!("{} until {}", label, end.format("%-d %b %Y"))),
        None => Some(label.to_string()),
    }
}

fn parse_instant(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn to_occurrence(start: DateTime<Utc>, end: DateTime<Utc>) -> Occurrence {
    Occurrence {
        date_time: start.to_rfc3339_opts(SecondsFormat::Secs, true),
        end_date_time: end.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}
