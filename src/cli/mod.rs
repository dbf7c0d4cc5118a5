//! CLI infrastructure for the noughts engine
//!
//! This module provides the command-line front end: an interactive game,
//! single-position analysis and whole-game verification.

pub mod commands;
pub mod output;
