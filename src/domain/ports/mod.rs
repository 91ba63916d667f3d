use crate::domain::models::{
    event::{Event, EventStatus},
    location::Location,
    rsvp::{AttendeeRow, Rsvp},
    user::User,
};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    /// Approved events only, ordered by start time.
    async fn list_approved(&self) -> Result<Vec<Event>, AppError>;
    /// All events regardless of status, for the admin review screen.
    async fn list_all(&self) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn update_status(&self, id: &str, status: EventStatus) -> Result<(), AppError>;
}

#[async_trait]
pub trait RsvpRepository: Send + Sync {
    /// Last write wins per `(event_id, user_id)`; the uniqueness constraint
    /// lives in the storage layer.
    async fn upsert(&self, rsvp: &Rsvp) -> Result<(), AppError>;
    async fn delete(&self, event_id: &str, user_id: &str) -> Result<bool, AppError>;
    async fn list_by_event(&self, event_id: &str) -> Result<Vec<Rsvp>, AppError>;
    /// RSVP rows joined with the owning user's profile fields, shaped into
    /// the narrow record the visibility resolver consumes.
    async fn list_attendee_rows(&self, event_id: &str) -> Result<Vec<AttendeeRow>, AppError>;
}

#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn create(&self, location: &Location) -> Result<Location, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, AppError>;
    async fn search(&self, query: &str) -> Result<Vec<Location>, AppError>;
    async fn list_all(&self) -> Result<Vec<Location>, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
    async fn update(&self, user: &User) -> Result<User, AppError>;
}
