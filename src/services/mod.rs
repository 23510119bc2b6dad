//! Services module
//!
//! This module contains the platform seam and the admin check built on it

pub mod auth;
pub mod platform;

pub use auth::is_admin;
pub use platform::ChatPlatform;
