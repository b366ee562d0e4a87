//! Event Handling Module
//!
//! Turns raw terminal events into controller operations on [`crate::app::App`].
//!
//! # Module Organization
//!
//! - **`keys`**: Keyboard input processing and filter shortcuts
//!

pub mod keys;
