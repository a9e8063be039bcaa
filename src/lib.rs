//! # Leyden - Battery Status Bridge Service
//!
//! A Rust implementation of the battery status bridge, answering a single
//! query - "what is the device's current battery state?" - by reading the
//! platform's battery snapshot and relaying a handful of derived booleans
//! and labels to callers over an HTTP request boundary.
//!
//! ## Features
//!
//! - **Pure Core**: Battery interpretation is a pure, total function with no
//!   framework dependency
//! - **Platform Telemetry**: Linux power-supply class reader with graceful
//!   sentinel degradation
//! - **Method Channel**: The original `getBatteryStatus` request surface,
//!   unknown methods rejected as not implemented
//! - **Web Interface**: JSON API over axum
//! - **Configuration**: YAML-based configuration with validation
//!
//! ## Architecture
//!
//! The application follows a modular architecture with clear separation of concerns:
//!
//! - `battery`: Raw telemetry shapes and the status interpretation function
//! - `telemetry`: Telemetry sources (sysfs, static)
//! - `bridge`: Method-channel dispatch
//! - `web`: HTTP server and JSON API
//! - `config`: Configuration management and validation
//! - `logging`: Structured logging and tracing
//! - `error`: Error types and handling

pub mod battery;
pub mod bridge;
pub mod config;
pub mod error;
pub mod logging;
pub mod telemetry;
pub mod web;

// Re-export commonly used types
pub use battery::{DerivedBatteryStatus, RawBatteryTelemetry, interpret};
pub use config::Config;
pub use error::{LeydenError, Result};
