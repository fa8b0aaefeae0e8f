//! Lens module
//!
//! This module provides high-level "lens" abstractions that combine business logic
//! with output formatting. Lenses are reusable from the CLI or as a library.
//!
//! # Feature Requirements
//!
//! The lens layer requires the `display` feature (table output through `tabled`).
//!
//! # Architecture
//!
//! Each lens module exports:
//! - A **Lens struct** (e.g., `FlightLens`) - the main entry point for all operations
//! - **Args structs** - input arguments for lens methods
//! - **Output types** - return types and formatting helpers

pub mod flights;
pub mod utils;
