//! Episcope Control - CLI client library
//!
//! Command handlers and terminal rendering for the outbreak-risk
//! dashboard session.

pub mod commands;
pub mod display;
