//! # Canteen Poll Bot
//!
//! A Telegram bot for a school class group chat.
//!
//! ## Features
//! - Class timetables per profile and weekday
//! - Cloakroom / canteen duty roster
//! - Daily "who eats tomorrow" poll with a live-updating results message
//! - Per-chat JSON persistence that survives restarts and expires daily

/// Telegram commands, menus and update handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Static timetables and duty roster
pub mod content;
/// Daily canteen poll: state, storage, results and lifecycle
pub mod poll;
/// Background services like the health endpoint
pub mod services;
/// Utility functions for dates, logging and input normalization
pub mod utils;
