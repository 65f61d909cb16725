//! A splash-then-tabs terminal application shell.
//!
//! [`navigation`] holds the toolkit-independent state machine; everything
//! else is the terminal shell around it.

pub mod app;
pub mod config;
pub mod designsystem;
pub mod logging;
pub mod navigation;
pub mod ui;
