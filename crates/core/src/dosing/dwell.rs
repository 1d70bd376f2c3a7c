//! Maximum dwell time under a dosing valve
//!
//! The dwell time is the interval during which a moving container's opening is
//! positioned under the valve and can receive liquid.
//!
//! # Formula
//! ```text
//! t_dwell = (d × k) / v
//! ```
//!
//! Where:
//! - **d** = Container opening diameter (mm)
//! - **k** = Opening safety factor, typically < 1.0 to absorb alignment tolerance
//! - **v** = Line speed (mm/s)

use crate::core_types::units::{Length, Speed, Time};

/// Safety factor applied when none is given (full opening usable)
pub const DEFAULT_OPENING_SAFETY_FACTOR: f64 = 1.0;

/// Maximum dwell time using the full container opening
pub fn compute_max_dwell_time(container_opening: Length, line_speed: Speed) -> Time {
    compute_max_dwell_time_with_safety_factor(
        container_opening,
        line_speed,
        DEFAULT_OPENING_SAFETY_FACTOR,
    )
}

/// Maximum dwell time with the usable opening shrunk by `opening_safety_factor`
///
/// A zero line speed yields an infinite dwell time.
///
/// # Example
/// ```
/// use dosing_core::dosing::compute_max_dwell_time_with_safety_factor;
/// use dosing_core::{Length, Speed};
///
/// let dwell = compute_max_dwell_time_with_safety_factor(
///     Length::millimeter(21.0),
///     Speed::millimeter_per_second(960.0),
///     0.75,
/// );
/// assert!((dwell.in_ms() - 16.40625).abs() < 1e-9);
/// ```
pub fn compute_max_dwell_time_with_safety_factor(
    container_opening: Length,
    line_speed: Speed,
    opening_safety_factor: f64,
) -> Time {
    (container_opening * opening_safety_factor) / line_speed
}
