//! Experiment Executor
//!
//! Runs the simulation and turns the sample table into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! SimulationConfig
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Validate, draw samples
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Aggregates + per-column statistics
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```

mod execution;
mod formatting;
mod report;

pub use execution::execute;
pub use formatting::format_human_output;
pub use report::build_report;
