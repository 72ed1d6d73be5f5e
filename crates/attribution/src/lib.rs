//! Adlytics Attribution Crate
//!
//! This crate provides an HTTP client for the attribution partner's
//! reporting API, used by the Adlytics core to load real campaign and
//! in-app event data.
//!
//! # Overview
//!
//! The attribution crate supports:
//! - Aggregated performance reports (impressions, clicks, installs, cost, revenue)
//! - In-app event reports (purchase, subscription, registration, retention)
//! - Bearer token authentication with a configurable request timeout
//! - Typed errors with a retry classification
//!
//! # Core Types
//!
//! - [`AttributionClient`] - The reporting API client
//! - [`PerformanceRow`] - One grouped row of the performance report
//! - [`EventRow`] - One grouped row of the in-app events report
//! - [`errors::AttributionError`] - Error enum for all partner API operations

pub mod client;
pub mod errors;
pub mod models;

// Re-export the client
pub use client::AttributionClient;

// Re-export all public types from models
pub use models::{EventRow, EventsReport, PerformanceReport, PerformanceRow};
