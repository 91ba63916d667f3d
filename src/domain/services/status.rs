use crate::domain::models::event::EventStatus;
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Approve,
    Reject,
}

/// Apply an admin moderation decision to an event's status.
///
/// Both transitions are admin-only, one-way, and valid only from
/// `Pending` — there is no un-approve path.
pub fn apply_moderation(
    current: EventStatus,
    action: ModerationAction,
    is_admin: bool,
) -> Result<EventStatus, AppError> {
    if !is_admin {
        return Err(AppError::Forbidden(
            "only admins can moderate events".to_string(),
        ));
    }

    match current {
        EventStatus::Pending => Ok(match action {
            ModerationAction::Approve => EventStatus::Approved,
            ModerationAction::Reject => EventStatus::Rejected,
        }),
        EventStatus::Approved | EventStatus::Rejected => Err(AppError::Conflict(
            "event has already been moderated".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_approves_pending_event() {
        let status = apply_moderation(EventStatus::Pending, ModerationAction::Approve, true);
        assert_eq!(status.unwrap(), EventStatus::Approved);
    }

    #[test]
    fn test_admin_rejects_pending_event() {
        let status = apply_moderation(EventStatus::Pending, ModerationAction::Reject, true);
        assert_eq!(status.unwrap(), EventStatus::Rejected);
    }

    #[test]
    fn test_non_admin_is_forbidden() {
        let result = apply_moderation(EventStatus::Pending, ModerationAction::Approve, false);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
    }

    #[test]
    fn test_moderation_is_one_way() {
        for decided in [EventStatus::Approved, EventStatus::Rejected] {
            for action in [ModerationAction::Approve, ModerationAction::Reject] {
                let result = apply_moderation(decided, action, true);
                assert!(matches!(result, Err(AppError::Conflict(_))));
            }
        }
    }

    #[test]
    fn test_only_approved_events_are_listed() {
        assert!(EventStatus::Approved.is_publicly_listed());
        assert!(!EventStatus::Pending.is_publicly_listed());
        assert!(!EventStatus::Rejected.is_publicly_listed());
    }

    #[test]
    fn test_initial_status_depends_on_author() {
        assert_eq!(EventStatus::initial(true), EventStatus::Approved);
        assert_eq!(EventStatus::initial(false), EventStatus::Pending);
    }
}
