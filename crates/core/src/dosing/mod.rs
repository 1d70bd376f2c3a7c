//! Dosing line formulas
//!
//! Stateless functions over [`crate::core_types::units`]. Every call is independent
//! and deterministic; division by a zero-magnitude quantity yields infinity or NaN
//! per IEEE-754 and is never intercepted here.

pub mod dwell;
pub mod line_speed;
pub mod plan;
pub mod valve;

pub use dwell::{
    compute_max_dwell_time, compute_max_dwell_time_with_safety_factor,
    DEFAULT_OPENING_SAFETY_FACTOR,
};
pub use line_speed::{
    compute_line_speed_from_circumference, compute_line_speed_from_pitch,
    compute_line_speed_from_radius, LineGeometry, SECONDS_PER_HOUR,
};
pub use plan::{DosingReport, DosingScenario};
pub use valve::{
    compute_required_valve_count, compute_valve_dosing_volume, compute_valve_trigger_time,
};
