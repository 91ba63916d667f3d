use tracing::warn;

use crate::domain::models::rsvp::{Role, RoleCounts, Rsvp};

/// Tally RSVP role strings into a zero-initialised `RoleCounts`.
///
/// Rows whose role is not one of the three known values contribute to no
/// bucket. That means a renamed or malformed role value disappears from the
/// totals without failing the call, so each skipped row is logged; callers
/// comparing `counts.total()` against the row count will see the gap.
pub fn aggregate_roles<'a, I>(roles: I) -> RoleCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = RoleCounts::default();
    for raw in roles {
        match raw.parse::<Role>() {
            Ok(role) => counts.increment(role),
            Err(_) => warn!(role = raw, "skipping RSVP with unrecognized role"),
        }
    }
    counts
}

/// Number of attendees who marked themselves as teaching.
pub fn teaching_count(rsvps: &[Rsvp]) -> usize {
    rsvps.iter().filter(|r| r.is_teaching).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rsvp(role: &str, is_teaching: bool) -> Rsvp {
        Rsvp {
            event_id: "e1".to_string(),
            user_id: "u1".to_string(),
            role: role.to_string(),
            show_name: true,
            is_teaching,
        }
    }

    #[test]
    fn test_counts_each_role() {
        let roles = ["Base", "Base", "Flyer", "Hybrid", "Hybrid"];
        let counts = aggregate_roles(roles);
        assert_eq!(counts.base, 2);
        assert_eq!(counts.flyer, 1);
        assert_eq!(counts.hybrid, 2);
        assert_eq!(counts.total(), 5);
    }

    #[test]
    fn test_empty_input_is_all_zeroes() {
        let counts = aggregate_roles([]);
        assert_eq!(counts, RoleCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_unknown_roles_are_skipped() {
        let counts = aggregate_roles(["Base", "Spectator", ""]);
        assert_eq!(counts.base, 1);
        assert_eq!(counts.total(), 1);
    }

    #[test]
    fn test_total_conserved_for_valid_input() {
        let roles = vec!["Flyer"; 17];
        assert_eq!(aggregate_roles(roles.iter().copied()).total(), 17);
    }

    #[test]
    fn test_teaching_count() {
        let rsvps = vec![
            rsvp("Base", true),
            rsvp("Flyer", false),
            rsvp("Hybrid", true),
        ];
        assert_eq!(teaching_count(&rsvps), 2);
        assert_eq!(teaching_count(&[]), 0);
    }
}
