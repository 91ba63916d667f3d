pub mod format;
pub mod geo;
pub mod hierarchy;
pub mod recurrence;
pub mod roles;
pub mod status;
pub mod summary;
pub mod visibility;
