use crate::domain::models::rsvp::AttendeeRow;
use crate::domain::models::views::{AttendeeView, CurrentRsvp, SocialLinks};

/// The identity a request is resolved against, dispatched once per call so
/// the admin / self / stranger matrix stays exhaustive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Member(String),
    Admin(String),
}

impl Viewer {
    pub fn from_session(user_id: Option<&str>, is_admin: bool) -> Self {
        match user_id {
            None => Viewer::Anonymous,
            Some(id) if is_admin => Viewer::Admin(id.to_string()),
            Some(id) => Viewer::Member(id.to_string()),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        match self {
            Viewer::Anonymous => None,
            Viewer::Member(id) | Viewer::Admin(id) => Some(id),
        }
    }
}

/// Produce the attendee list a viewer is entitled to see.
///
/// - Anonymous viewers get nothing, regardless of `show_name`.
/// - Members see attendees who opted in, plus their own entry even when
///   they hid it from others.
/// - Admins see every row.
///
/// `hidden` marks entries whose owner set `show_name = false`; it is a
/// display annotation, not a redaction (the name is always populated on
/// rows that are returned at all).
pub fn resolve_visible_attendees(rows: &[AttendeeRow], viewer: &Viewer) -> Vec<AttendeeView> {
    match viewer {
        Viewer::Anonymous => Vec::new(),
        Viewer::Admin(_) => rows.iter().map(to_view).collect(),
        Viewer::Member(viewer_id) => rows
            .iter()
            .filter(|row| row.show_name || row.user_id == *viewer_id)
            .map(to_view)
            .collect(),
    }
}

/// The viewer's own `(role, show_name)` pair, if they have RSVP'd.
pub fn current_user_rsvp(rows: &[AttendeeRow], viewer: &Viewer) -> Option<CurrentRsvp> {
    let viewer_id = viewer.user_id()?;
    let row = rows.iter().find(|r| r.user_id == viewer_id)?;
    Some(CurrentRsvp {
        role: row.role.parse().ok()?,
        show_name: row.show_name,
    })
}

fn to_view(row: &AttendeeRow) -> AttendeeView {
    AttendeeView {
        user_id: row.user_id.clone(),
        name: row.user_name.clone(),
        role: row.role.clone(),
        hidden: !row.show_name,
        is_teaching: row.is_teaching,
        social_links: project_social_links(row),
    }
}

/// An attendee's links are governed by their own show flags alone; the
/// viewer's identity never widens or narrows this projection.
fn project_social_links(row: &AttendeeRow) -> SocialLinks {
    let pick = |shown: bool, url: &Option<String>| {
        if shown {
            url.clone()
        } else {
            None
        }
    };
    SocialLinks {
        facebook: pick(row.show_facebook, &row.facebook_url),
        instagram: pick(row.show_instagram, &row.instagram_url),
        website: pick(row.show_website, &row.website_url),
        youtube: pick(row.show_youtube, &row.youtube_url),
    }
}
