//! # Metalens Architecture
//!
//! Metalens is a **UI-agnostic metadata inspection library**. The binary is a thin
//! console client; everything with actual policy lives behind the library API and
//! can be driven by any frontend.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, prompts for paths, prints the report   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade: catalog + provider → Report                 │
//! │  - Generic over the metadata backend                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Report Pipeline (report/)                                  │
//! │  - collect → order → format → render                        │
//! │  - Pure policy: precedence, fallback chain, layout          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Provider Layer (provider/)                                 │
//! │  - Abstract MetadataProvider trait                          │
//! │  - FsProvider (production), InMemoryProvider (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, report pipeline, providers), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Report`, `Result<...>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! Per-property faults never cross layer boundaries either: a property whose
//! value cannot be resolved is simply absent from the report, and a property
//! whose value cannot be formatted falls back to its canonical text or, failing
//! that, a literal placeholder. Only resolving the object handle itself can
//! fail the run.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for inspections
//! - [`catalog`]: The canonical-name catalog (embedded or loaded from disk)
//! - [`model`]: Core data types (`PropertyName`, `PropertyValue`, `PropertyRecord`)
//! - [`provider`]: Metadata backend abstraction and implementations
//! - [`report`]: The collect → order → format → render pipeline
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod report;
