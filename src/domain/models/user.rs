use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub is_teacher_approved: bool,
    pub teacher_requested_at: Option<String>,
    pub teacher_approved_by: Option<String>,
    // RSVP-form defaults
    pub default_role: Option<String>,
    pub default_show_name: Option<bool>,
    // Social links, each paired with its own opt-in flag
    pub facebook_url: Option<String>,
    pub instagram_url: Option<String>,
    pub website_url: Option<String>,
    pub youtube_url: Option<String>,
    pub show_facebook: bool,
    pub show_instagram: bool,
    pub show_website: bool,
    pub show_youtube: bool,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            is_admin: false,
            is_teacher_approved: false,
            teacher_requested_at: None,
            teacher_approved_by: None,
            default_role: None,
            default_show_name: None,
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_users_have_everything_opted_out() {
        let user = User::new("Alice".to_string(), "alice@example.com".to_string());
        assert!(!user.is_admin);
        assert!(!user.is_teacher_approved);
        assert!(!user.show_facebook && !user.show_instagram);
        assert!(user.default_role.is_none());
    }
}
