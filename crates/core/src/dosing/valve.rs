//! Dosing valve response and sizing
//!
//! Valves follow a linear response: while open they deliver a steady flow
//! (gain), and every actuation adds a fixed residual volume from the opening and
//! closing transients (offset).
//!
//! # Formula
//! ```text
//! V = g × t + V₀
//! t = (V - V₀) / g
//! N = ⌈V_target / V_valve⌉
//! ```
//!
//! Where:
//! - **V** = Dosed volume per actuation (mL)
//! - **g** = Valve gain (mL/ms)
//! - **t** = Trigger time, how long the valve is commanded open (ms)
//! - **V₀** = Valve offset (mL)
//! - **N** = Number of valve stations needed for the target fill

use crate::core_types::units::{FlowRate, Time, Volume};

/// Volume dispensed by one actuation of `trigger_time`
pub fn compute_valve_dosing_volume(
    trigger_time: Time,
    valve_gain: FlowRate,
    valve_offset: Volume,
) -> Volume {
    valve_gain * trigger_time + valve_offset
}

/// Trigger time needed to dispense `dosing_volume`, inverse of
/// [`compute_valve_dosing_volume`]
///
/// The result is not checked against the dwell window; callers must keep it at or
/// below the maximum dwell time for the dose to be achievable at their line speed.
pub fn compute_valve_trigger_time(
    dosing_volume: Volume,
    valve_gain: FlowRate,
    valve_offset: Volume,
) -> Time {
    (dosing_volume - valve_offset) / valve_gain
}

/// Number of valve stations needed to reach `target_volume`
///
/// Rounds up: a station delivering only part of its share still counts as one.
///
/// `max_volume_per_valve` should be positive and finite. Otherwise the ratio is
/// NaN or infinite and the float to integer cast saturates (NaN and negative
/// ratios give 0, +inf gives `u32::MAX`).
///
/// # Example
/// ```
/// use dosing_core::dosing::compute_required_valve_count;
/// use dosing_core::Volume;
///
/// let count = compute_required_valve_count(Volume::milliliter(5.0), Volume::milliliter(2.0));
/// assert_eq!(count, 3);
/// ```
pub fn compute_required_valve_count(target_volume: Volume, max_volume_per_valve: Volume) -> u32 {
    (target_volume / max_volume_per_valve).ceil() as u32
}
