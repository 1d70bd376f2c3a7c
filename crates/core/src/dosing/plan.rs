//! End-to-end evaluation of a dosing line
//!
//! Chains the line-speed, dwell and valve formulas the way a line is sized in
//! practice: the dwell window minus a settle margin is the longest a valve may be
//! triggered, which fixes the volume one valve can dispense per container and
//! therefore how many valve stations the target fill needs.

use crate::core_types::units::{FlowRate, Length, Speed, Time, Volume};
use crate::dosing::dwell::compute_max_dwell_time_with_safety_factor;
use crate::dosing::line_speed::LineGeometry;
use crate::dosing::valve::{
    compute_required_valve_count, compute_valve_dosing_volume, compute_valve_trigger_time,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Inputs describing one dosing line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosingScenario {
    /// Throughput in containers per hour
    pub uph: f64,
    /// Container spacing on the line
    pub geometry: LineGeometry,
    /// Diameter of the container mouth
    pub container_opening: Length,
    /// Fraction of the opening that is usable (1.0 = full opening)
    pub opening_safety_factor: f64,
    /// Time reserved inside the dwell window for valve settling
    pub valve_settle_margin: Time,
    /// Steady-state valve flow rate
    pub valve_gain: FlowRate,
    /// Residual volume per valve actuation
    pub valve_offset: Volume,
    /// Fill volume each container must receive
    pub target_volume: Volume,
}

/// Results of evaluating a [`DosingScenario`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DosingReport {
    /// Linear speed of the containers
    pub line_speed: Speed,
    /// Time the container opening stays under the valve
    pub max_dwell_time: Time,
    /// Longest usable trigger time (dwell minus settle margin)
    pub trigger_time: Time,
    /// Volume one valve dispenses with `trigger_time`
    pub volume_per_valve: Volume,
    /// Valve stations needed for the target fill
    pub required_valve_count: u32,
    /// Fill volume the plan was sized for
    pub target_volume: Volume,
    /// Valve calibration the plan was sized with
    pub valve_gain: FlowRate,
    /// Valve calibration the plan was sized with
    pub valve_offset: Volume,
}

impl DosingScenario {
    /// Reference filler: 32 000 containers/h at 108 mm pitch, 21 mm openings,
    /// 1.8 mL fill
    pub fn reference_line() -> Self {
        Self {
            uph: 32_000.0,
            geometry: LineGeometry::Pitch(Length::millimeter(108.0)),
            container_opening: Length::millimeter(21.0),
            opening_safety_factor: 0.75,
            valve_settle_margin: Time::millisecond(10.0),
            valve_gain: FlowRate::milliliter_per_millisecond(0.07867),
            valve_offset: Volume::milliliter(0.01335),
            target_volume: Volume::milliliter(1.8),
        }
    }

    /// Run the full formula chain for this line
    pub fn evaluate(&self) -> DosingReport {
        let line_speed = self.geometry.line_speed(self.uph);
        debug!(
            "Line speed {} at {} UPH ({:?})",
            line_speed, self.uph, self.geometry
        );

        let max_dwell_time = compute_max_dwell_time_with_safety_factor(
            self.container_opening,
            line_speed,
            self.opening_safety_factor,
        );
        debug!(
            "Max dwell time {} for {} opening (safety factor {})",
            max_dwell_time, self.container_opening, self.opening_safety_factor
        );

        let trigger_time = max_dwell_time - self.valve_settle_margin;
        if trigger_time.in_ms() <= 0.0 {
            warn!(
                "Dwell time {} does not cover settle margin {}, valves cannot be triggered",
                max_dwell_time, self.valve_settle_margin
            );
        }

        let volume_per_valve =
            compute_valve_dosing_volume(trigger_time, self.valve_gain, self.valve_offset);
        debug!(
            "Trigger time {} dispenses {} per valve",
            trigger_time, volume_per_valve
        );

        let ratio = self.target_volume / volume_per_valve;
        if !ratio.is_finite() || ratio < 0.0 {
            warn!(
                "Target {} over {} per valve gives ratio {}, valve count saturates",
                self.target_volume, volume_per_valve, ratio
            );
        }
        let required_valve_count =
            compute_required_valve_count(self.target_volume, volume_per_valve);
        debug!("Required valve count {}", required_valve_count);

        DosingReport {
            line_speed,
            max_dwell_time,
            trigger_time,
            volume_per_valve,
            required_valve_count,
            target_volume: self.target_volume,
            valve_gain: self.valve_gain,
            valve_offset: self.valve_offset,
        }
    }
}

impl DosingReport {
    /// Trigger time each valve needs when the target fill is split evenly over
    /// `required_valve_count` stations
    ///
    /// Never exceeds `trigger_time` for a feasible plan. Zero valves yields an
    /// infinite per-valve share.
    pub fn required_trigger_time(&self) -> Time {
        let share = self.target_volume / f64::from(self.required_valve_count);
        compute_valve_trigger_time(share, self.valve_gain, self.valve_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_line_report() {
        let report = DosingScenario::reference_line().evaluate();
        assert!((report.line_speed.in_mm_per_s() - 960.0).abs() < 1e-9);
        assert!((report.max_dwell_time.in_ms() - 16.40625).abs() < 1e-9);
        assert!((report.trigger_time.in_ms() - 6.40625).abs() < 1e-9);
        assert!((report.volume_per_valve.in_ml() - 0.517329).abs() < 1e-5);
        assert_eq!(report.required_valve_count, 4);
    }

    #[test]
    fn test_required_trigger_time_fits_window() {
        let report = DosingScenario::reference_line().evaluate();
        let needed = report.required_trigger_time();
        // 1.8 mL over 4 valves = 0.45 mL each
        assert!((needed.in_ms() - (0.45 - 0.01335) / 0.07867).abs() < 1e-9);
        assert!(needed <= report.trigger_time);
    }

    #[test]
    fn test_transfer_star_geometry_matches_pitch() {
        let pitch = DosingScenario::reference_line();
        let star = DosingScenario {
            geometry: LineGeometry::TransferStarCircumference {
                circumference: Length::millimeter(108.0 * 24.0),
                pockets: 24,
            },
            ..pitch
        };
        let a = pitch.evaluate();
        let b = star.evaluate();
        assert!((a.line_speed.in_mm_per_s() - b.line_speed.in_mm_per_s()).abs() < 1e-9);
        assert_eq!(a.required_valve_count, b.required_valve_count);
    }

    #[test]
    fn test_margin_longer_than_dwell() {
        let scenario = DosingScenario {
            valve_settle_margin: Time::millisecond(20.0),
            ..DosingScenario::reference_line()
        };
        let report = scenario.evaluate();
        assert!(report.trigger_time.in_ms() < 0.0);
        // Negative trigger time dispenses less than the offset
        assert!(report.volume_per_valve < scenario.valve_offset);
    }
}
