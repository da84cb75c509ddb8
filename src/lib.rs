//! depradar - dependency upgrade risk radar library
//!
//! This library provides the core functionality for classifying npm
//! dependency upgrades:
//! - Loose semantic-version parsing and delta classification
//! - Registry and GitHub release lookups
//! - Keyword-based risk scoring
//! - Sorted, filterable result sets

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod orchestrator;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod registry;
pub mod snapshot;
