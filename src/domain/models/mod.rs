pub mod event;
pub mod location;
pub mod rsvp;
pub mod user;
pub mod views;
