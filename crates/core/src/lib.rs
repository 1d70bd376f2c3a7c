//! Dosing Line Core Library
//!
//! Engineering calculations for industrial container-dosing lines. Converts machine
//! throughput and transfer geometry into line speed, derives the dwell window a
//! moving container spends under a dosing valve, and sizes valve trigger time,
//! dosed volume and valve count against a target fill.
//!
//! ## Layers
//!
//! - [`core_types::units`]: strongly-typed quantities (`Length`, `Time`, `Speed`,
//!   `Volume`, `FlowRate`) that only combine in dimensionally valid ways
//! - [`dosing`]: pure formula functions built on those quantities, plus the
//!   [`DosingScenario`] chain that evaluates a whole line at once
//!
//! ## Example
//!
//! ```
//! use dosing_core::dosing::{compute_line_speed_from_pitch, compute_max_dwell_time_with_safety_factor};
//! use dosing_core::Length;
//!
//! let speed = compute_line_speed_from_pitch(32_000.0, Length::millimeter(108.0));
//! assert!((speed.in_mm_per_s() - 960.0).abs() < 1e-9);
//!
//! let dwell = compute_max_dwell_time_with_safety_factor(Length::millimeter(21.0), speed, 0.75);
//! assert!((dwell.in_ms() - 16.40625).abs() < 1e-9);
//! ```

// Core types and utilities
pub mod core_types;

// Dosing formulas and scenario evaluation
pub mod dosing;

// Re-export core types
pub use core_types::{FlowRate, Length, Speed, Time, Volume};

// Re-export scenario types
pub use dosing::{DosingReport, DosingScenario, LineGeometry};
