//! Trust Me Bro - terminal client for a novelty URL shortener
//!
//! This library provides the client side of the service: the API client,
//! session handling, the dashboard controller, the login/register forms
//! and the "miner" redirect page, plus CLI and TUI front ends.
//!
//! # Features
//! - **cli**: Command-line interface (default)
//! - **tui**: Terminal user interface (default)
//! - **full**: All features enabled
//!
//! # Architecture
//! - `client`: `ShortenerApi` trait and the HTTP implementation
//! - `session`: Bearer token context and its persistence
//! - `dashboard`: Links/users state, polling, copy acknowledgment
//! - `auth`: Login and registration forms
//! - `miner`: Redirect simulation state machine
//! - `views`: Presentation models (truncation, dates, wide/narrow)
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `runtime`: Startup wiring and execution modes
//! - `system`: Logging

pub mod auth;
pub mod cli;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod errors;
pub mod interfaces;
pub mod miner;
pub mod models;
pub mod navigator;
pub mod router;
pub mod runtime;
pub mod session;
pub mod system;
pub mod utils;
pub mod views;
