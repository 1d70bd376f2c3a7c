//! Conveyor line speed from machine throughput
//!
//! A dosing line runs at a throughput given in units (containers) per hour. The
//! linear speed of the containers follows from the spacing between them, either
//! measured directly on the conveyor (pitch) or derived from the transfer star
//! that indexes them.
//!
//! # Formula
//! ```text
//! v = UPH × p / 3600
//! p = C / n = 2πr / n          (transfer star)
//! ```
//!
//! Where:
//! - **v** = Line speed (mm/s)
//! - **UPH** = Throughput (containers/hour)
//! - **p** = Container pitch, center to center (mm)
//! - **C**, **r** = Transfer star circumference, radius (mm)
//! - **n** = Number of pockets on the transfer star

use crate::core_types::units::{Length, Speed};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Seconds per hour, converts a per-hour throughput to per-second
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Line speed from throughput and conveyor pitch
///
/// # Arguments
/// * `uph` - Throughput in containers per hour
/// * `pitch` - Center-to-center spacing of containers on the conveyor
///
/// # Example
/// ```
/// use dosing_core::dosing::compute_line_speed_from_pitch;
/// use dosing_core::Length;
///
/// let speed = compute_line_speed_from_pitch(32_000.0, Length::millimeter(108.0));
/// assert!((speed.in_mm_per_s() - 960.0).abs() < 1e-9);
/// ```
pub fn compute_line_speed_from_pitch(uph: f64, pitch: Length) -> Speed {
    Speed::millimeter_per_second(uph * pitch.in_mm() / SECONDS_PER_HOUR)
}

/// Line speed from throughput and transfer star radius
///
/// The star circumference `2πr` is shared evenly between its pockets, which gives
/// the effective pitch per container. Agrees with
/// [`compute_line_speed_from_circumference`] for `C = 2πr`.
pub fn compute_line_speed_from_radius(
    uph: f64,
    transfer_star_radius: Length,
    number_of_pockets: u32,
) -> Speed {
    let circumference = transfer_star_radius * (2.0 * PI);
    compute_line_speed_from_circumference(uph, circumference, number_of_pockets)
}

/// Line speed from throughput and transfer star circumference
///
/// Zero pockets yields an infinite (or NaN) speed.
pub fn compute_line_speed_from_circumference(
    uph: f64,
    transfer_star_circumference: Length,
    number_of_pockets: u32,
) -> Speed {
    Speed::millimeter_per_second(
        uph * transfer_star_circumference.in_mm() / f64::from(number_of_pockets) / SECONDS_PER_HOUR,
    )
}

/// How container spacing on a line is described
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineGeometry {
    /// Straight conveyor with a known container pitch
    Pitch(Length),
    /// Transfer star given by its radius
    TransferStarRadius {
        /// Pitch radius of the star
        radius: Length,
        /// Number of evenly spaced pockets
        pockets: u32,
    },
    /// Transfer star given by its circumference
    TransferStarCircumference {
        /// Pitch circumference of the star
        circumference: Length,
        /// Number of evenly spaced pockets
        pockets: u32,
    },
}

impl LineGeometry {
    /// Line speed at the given throughput (containers per hour)
    pub fn line_speed(self, uph: f64) -> Speed {
        match self {
            LineGeometry::Pitch(pitch) => compute_line_speed_from_pitch(uph, pitch),
            LineGeometry::TransferStarRadius { radius, pockets } => {
                compute_line_speed_from_radius(uph, radius, pockets)
            }
            LineGeometry::TransferStarCircumference {
                circumference,
                pockets,
            } => compute_line_speed_from_circumference(uph, circumference, pockets),
        }
    }
}
