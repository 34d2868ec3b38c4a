//! courtdoc CLI - Command-line interface library
//!
//! This library provides the CLI functionality for courtdoc:
//! - Export: compose a case file into a combined filing PDF
//! - Exhibit: export one exhibit section on its own
//! - Plan: print the composed fragment sequence without rendering
//!
//! # Binary Usage
//!
//! ```bash
//! # Combined filing
//! courtdoc export case.json --output refund-application.pdf
//!
//! # One exhibit section
//! courtdoc exhibit case.json --label A
//!
//! # Inspect the fragment plan
//! courtdoc plan case.json --format json
//! ```

pub mod app;
pub mod intake;

// Re-export main entry point and types
pub use app::{exhibit_command, export_command, plan_command};
pub use app::{run_cli, OutputFormat};
