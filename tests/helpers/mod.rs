//! Test helpers module
//!
//! This module provides utilities and helpers for testing the GroupKeeper
//! application: a recording platform double, a mock Bot API server, log
//! capture and test data builders.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod test_data;

pub use log_capture::*;
pub use recording_platform::*;
pub use telegram_mock::*;
pub use test_data::*;
