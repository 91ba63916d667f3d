pub mod domain;
pub mod error;

pub use domain::models;
pub use domain::ports;
pub use domain::services;
