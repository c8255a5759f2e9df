//! EVO-A UI Components
//!
//! Small Dioxus building blocks shared by every view of the desktop app.
//! Components are theme-aware through [`evoa_core::ThemeMode`] props; they
//! never read global state themselves.
//!
//! ## Design Notes
//!
//! - **Brand (#7c3aed)**: primary actions, active tabs, liked state
//! - **Dark surfaces (#000000)** and **light surfaces (#ffffff)** swap via
//!   `--dark` / `--light` class modifiers
//! - Pills and rounded cards throughout, matching the feed look

pub mod components;

pub use components::*;
