//! Application layer: configuration and wiring.
//!
//! The container turns a [`SessionConfig`] into a chooser and a session, so
//! front ends never construct strategies themselves.

pub mod config;
pub mod container;

pub use config::SessionConfig;
pub use container::App;
