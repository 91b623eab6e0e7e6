//! # SolidGO Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components shared by every
//! command: configuration, error management, and templating.
//!
//! ## Architecture
//!
//! - `config`: Layered configuration and project layout resolution
//! - `error`: Error types and the crate-wide `Result` alias
//! - `templating`: Tera-based rendering of new files
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config; // For locating project files
//! use crate::core::error::{Result, ScaffoldError}; // For error handling
//! use crate::core::templating; // For rendering new files
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
