//! Semantic unit types for type-safe physical quantity handling
//!
//! This module provides newtype wrappers for the quantities of a container-dosing
//! line to prevent accidental mixing of incompatible units (e.g., a pitch in
//! millimeters with a trigger time in milliseconds).
//!
//! # Design Philosophy
//! - Every type stores one `f64` in a fixed canonical unit, so no unit tag is carried
//! - Alternate units exist only as named constructors and accessors
//! - Only dimensionally meaningful operators are implemented (Add, Sub, Mul, Div)
//! - Comparison follows IEEE-754: NaN is unordered, so there is no `Ord`
//! - No range validation: negative and non-finite values propagate arithmetically
//! - Serde support for serialization (a quantity serializes as its canonical magnitude)
//!
//! | Type       | Canonical unit | Alternate units      |
//! |------------|----------------|----------------------|
//! | [`Length`]   | mm             | inch                 |
//! | [`Time`]     | ms             | s                    |
//! | [`Speed`]    | mm/s           |                      |
//! | [`Volume`]   | mL             | US fluid ounce       |
//! | [`FlowRate`] | mL/ms          | mL/s (accessor only) |
//!
//! # Usage
//! ```
//! use dosing_core::core_types::units::{FlowRate, Length, Speed, Time, Volume};
//!
//! let opening = Length::millimeter(21.0);
//! let speed = Speed::millimeter_per_second(960.0);
//! let dwell: Time = opening / speed;
//! assert!((dwell.in_ms() - 21.875).abs() < 1e-9);
//!
//! let dosed: Volume = FlowRate::milliliter_per_millisecond(0.1) * Time::millisecond(5.0);
//! assert!((dosed.in_ml() - 0.5).abs() < 1e-12);
//! ```
//!
//! Mixing dimensions does not compile:
//! ```compile_fail
//! use dosing_core::core_types::units::{Length, Time};
//!
//! let _ = Length::millimeter(1.0) + Time::millisecond(1.0);
//! ```
//!
//! ```compile_fail
//! use dosing_core::core_types::units::Volume;
//!
//! let _ = Volume::milliliter(1.0) * Volume::milliliter(2.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// LENGTH
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Length(f64);

impl Length {
    /// Millimeters per inch (exact by definition)
    const MM_PER_INCH: f64 = 25.4;

    /// Create a length from millimeters
    #[inline]
    #[must_use]
    pub const fn millimeter(value: f64) -> Self {
        Length(value)
    }

    /// Create a length from inches
    #[inline]
    #[must_use]
    pub fn inch(value: f64) -> Self {
        Length(value * Self::MM_PER_INCH)
    }

    /// Magnitude in millimeters
    #[inline]
    #[must_use]
    pub fn in_mm(self) -> f64 {
        self.0
    }

    /// Magnitude in inches
    #[inline]
    #[must_use]
    pub fn in_inch(self) -> f64 {
        self.0 / Self::MM_PER_INCH
    }
}

impl Add for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;
    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Mul<Length> for f64 {
    type Output = Length;
    fn mul(self, rhs: Length) -> Length {
        Length(self * rhs.0)
    }
}

impl Div<f64> for Length {
    type Output = Length;
    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

// Cross-type operation: distance / velocity = time
impl Div<Speed> for Length {
    type Output = Time;
    fn div(self, rhs: Speed) -> Time {
        Time::second(self.0 / rhs.0)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mm", self.0)
    }
}

// ============================================================================
// TIME
// ============================================================================

/// Time in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Time(f64);

impl Time {
    /// Milliseconds per second
    const MS_PER_SECOND: f64 = 1000.0;

    /// Create a time from milliseconds
    #[inline]
    #[must_use]
    pub const fn millisecond(value: f64) -> Self {
        Time(value)
    }

    /// Create a time from seconds
    #[inline]
    #[must_use]
    pub fn second(value: f64) -> Self {
        Time(value * Self::MS_PER_SECOND)
    }

    /// Magnitude in milliseconds
    #[inline]
    #[must_use]
    pub fn in_ms(self) -> f64 {
        self.0
    }

    /// Magnitude in seconds
    #[inline]
    #[must_use]
    pub fn in_second(self) -> f64 {
        self.0 / Self::MS_PER_SECOND
    }
}

impl Add for Time {
    type Output = Time;
    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;
    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;
    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

impl Mul<Time> for f64 {
    type Output = Time;
    fn mul(self, rhs: Time) -> Time {
        Time(self * rhs.0)
    }
}

impl Div<f64> for Time {
    type Output = Time;
    fn div(self, rhs: f64) -> Time {
        Time(self.0 / rhs)
    }
}

// Cross-type operation: time * velocity = distance
impl Mul<Speed> for Time {
    type Output = Length;
    fn mul(self, rhs: Speed) -> Length {
        rhs * self
    }
}

// Cross-type operation: time * flow rate = volume
impl Mul<FlowRate> for Time {
    type Output = Volume;
    fn mul(self, rhs: FlowRate) -> Volume {
        rhs * self
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} ms", self.0)
    }
}

// ============================================================================
// SPEED
// ============================================================================

/// Conveyor speed in millimeters per second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Speed(f64);

impl Speed {
    /// Create a speed from millimeters per second
    #[inline]
    #[must_use]
    pub const fn millimeter_per_second(value: f64) -> Self {
        Speed(value)
    }

    /// Magnitude in millimeters per second
    #[inline]
    #[must_use]
    pub fn in_mm_per_s(self) -> f64 {
        self.0
    }
}

impl Add for Speed {
    type Output = Speed;
    fn add(self, rhs: Speed) -> Speed {
        Speed(self.0 + rhs.0)
    }
}

impl Sub for Speed {
    type Output = Speed;
    fn sub(self, rhs: Speed) -> Speed {
        Speed(self.0 - rhs.0)
    }
}

impl Mul<f64> for Speed {
    type Output = Speed;
    fn mul(self, rhs: f64) -> Speed {
        Speed(self.0 * rhs)
    }
}

impl Mul<Speed> for f64 {
    type Output = Speed;
    fn mul(self, rhs: Speed) -> Speed {
        Speed(self * rhs.0)
    }
}

impl Div<f64> for Speed {
    type Output = Speed;
    fn div(self, rhs: f64) -> Speed {
        Speed(self.0 / rhs)
    }
}

// Cross-type operation: velocity * time = distance
impl Mul<Time> for Speed {
    type Output = Length;
    fn mul(self, rhs: Time) -> Length {
        Length(self.0 * rhs.in_second())
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} mm/s", self.0)
    }
}

// ============================================================================
// VOLUME
// ============================================================================

/// Liquid volume in milliliters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Volume(f64);

impl Volume {
    /// Milliliters per US fluid ounce
    const ML_PER_FLUID_OUNCE_US: f64 = 29.5735;

    /// Create a volume from milliliters
    #[inline]
    #[must_use]
    pub const fn milliliter(value: f64) -> Self {
        Volume(value)
    }

    /// Create a volume from US fluid ounces
    #[inline]
    #[must_use]
    pub fn fluid_ounce_us(value: f64) -> Self {
        Volume(value * Self::ML_PER_FLUID_OUNCE_US)
    }

    /// Magnitude in milliliters
    #[inline]
    #[must_use]
    pub fn in_ml(self) -> f64 {
        self.0
    }

    /// Magnitude in US fluid ounces
    #[inline]
    #[must_use]
    pub fn in_fluid_ounce_us(self) -> f64 {
        self.0 / Self::ML_PER_FLUID_OUNCE_US
    }
}

impl Add for Volume {
    type Output = Volume;
    fn add(self, rhs: Volume) -> Volume {
        Volume(self.0 + rhs.0)
    }
}

impl Sub for Volume {
    type Output = Volume;
    fn sub(self, rhs: Volume) -> Volume {
        Volume(self.0 - rhs.0)
    }
}

impl Mul<f64> for Volume {
    type Output = Volume;
    fn mul(self, rhs: f64) -> Volume {
        Volume(self.0 * rhs)
    }
}

impl Mul<Volume> for f64 {
    type Output = Volume;
    fn mul(self, rhs: Volume) -> Volume {
        Volume(self * rhs.0)
    }
}

impl Div<f64> for Volume {
    type Output = Volume;
    fn div(self, rhs: f64) -> Volume {
        Volume(self.0 / rhs)
    }
}

// Same-dimension ratio is dimensionless
impl Div<Volume> for Volume {
    type Output = f64;
    fn div(self, rhs: Volume) -> f64 {
        self.0 / rhs.0
    }
}

// Cross-type operation: volume / flow rate = time
impl Div<FlowRate> for Volume {
    type Output = Time;
    fn div(self, rhs: FlowRate) -> Time {
        Time(self.0 / rhs.0)
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3} mL", self.0)
    }
}

// ============================================================================
// FLOW RATE
// ============================================================================

/// Valve flow rate in milliliters per millisecond
///
/// Valve calibration curves are expressed per millisecond of trigger time,
/// hence the unusual canonical unit.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct FlowRate(f64);

impl FlowRate {
    /// Milliseconds per second
    const MS_PER_SECOND: f64 = 1000.0;

    /// Create a flow rate from milliliters per millisecond
    #[inline]
    #[must_use]
    pub const fn milliliter_per_millisecond(value: f64) -> Self {
        FlowRate(value)
    }

    /// Magnitude in milliliters per millisecond
    #[inline]
    #[must_use]
    pub fn in_ml_per_ms(self) -> f64 {
        self.0
    }

    /// Magnitude in milliliters per second
    #[inline]
    #[must_use]
    pub fn in_ml_per_s(self) -> f64 {
        self.0 * Self::MS_PER_SECOND
    }
}

impl Add for FlowRate {
    type Output = FlowRate;
    fn add(self, rhs: FlowRate) -> FlowRate {
        FlowRate(self.0 + rhs.0)
    }
}

impl Sub for FlowRate {
    type Output = FlowRate;
    fn sub(self, rhs: FlowRate) -> FlowRate {
        FlowRate(self.0 - rhs.0)
    }
}

impl Mul<f64> for FlowRate {
    type Output = FlowRate;
    fn mul(self, rhs: f64) -> FlowRate {
        FlowRate(self.0 * rhs)
    }
}

impl Mul<FlowRate> for f64 {
    type Output = FlowRate;
    fn mul(self, rhs: FlowRate) -> FlowRate {
        FlowRate(self * rhs.0)
    }
}

impl Div<f64> for FlowRate {
    type Output = FlowRate;
    fn div(self, rhs: f64) -> FlowRate {
        FlowRate(self.0 / rhs)
    }
}

// Cross-type operation: flow rate * time = volume
impl Mul<Time> for FlowRate {
    type Output = Volume;
    fn mul(self, rhs: Time) -> Volume {
        Volume(self.0 * rhs.0)
    }
}

impl fmt::Display for FlowRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5} mL/ms", self.0)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_inch_to_millimeter() {
        let l = Length::inch(2.0);
        assert!((l.in_mm() - 50.8).abs() < 1e-12);
        assert!((l.in_inch() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_millimeter_to_inch() {
        let l = Length::millimeter(127.0);
        assert!((l.in_inch() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_seconds_to_milliseconds() {
        let t = Time::second(1.5);
        assert!((t.in_ms() - 1500.0).abs() < 1e-12);
        assert!((Time::millisecond(250.0).in_second() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_fluid_ounce_to_milliliter() {
        let v = Volume::fluid_ounce_us(2.0);
        assert!((v.in_ml() - 59.147).abs() < 1e-9);
        assert!((Volume::milliliter(29.5735).in_fluid_ounce_us() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_flow_rate_per_second() {
        let g = FlowRate::milliliter_per_millisecond(0.07867);
        assert!((g.in_ml_per_s() - 78.67).abs() < 1e-9);
    }

    #[test]
    fn test_distance_divided_by_velocity_equals_time() {
        let distance = Length::millimeter(100.0);
        let velocity = Speed::millimeter_per_second(50.0);
        let time: Time = distance / velocity;
        assert!((time.in_ms() - 2000.0).abs() < 1e-9);
    }

    #[test]
    fn test_velocity_times_time_equals_distance() {
        let velocity = Speed::millimeter_per_second(960.0);
        let time = Time::millisecond(500.0);
        let distance: Length = velocity * time;
        assert!((distance.in_mm() - 480.0).abs() < 1e-9);
    }

    #[test]
    fn test_time_times_velocity_equals_distance() {
        let time = Time::second(2.0);
        let velocity = Speed::millimeter_per_second(10.0);
        let distance: Length = time * velocity;
        assert!((distance.in_mm() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_flow_rate_times_time_equals_volume() {
        let gain = FlowRate::milliliter_per_millisecond(0.5);
        let time = Time::millisecond(4.0);
        let forward: Volume = gain * time;
        let backward: Volume = time * gain;
        assert!((forward.in_ml() - 2.0).abs() < 1e-12);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_volume_divided_by_flow_rate_equals_time() {
        let volume = Volume::milliliter(3.0);
        let gain = FlowRate::milliliter_per_millisecond(0.5);
        let time: Time = volume / gain;
        assert!((time.in_ms() - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_volume_ratio_is_dimensionless() {
        let ratio: f64 = Volume::milliliter(5.0) / Volume::milliliter(2.0);
        assert!((ratio - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_same_type_arithmetic() {
        let a = Length::millimeter(10.0);
        let b = Length::millimeter(4.0);
        assert_eq!((a + b).in_mm(), 14.0);
        assert_eq!((a - b).in_mm(), 6.0);
        assert_eq!((a * 3.0).in_mm(), 30.0);
        assert_eq!((3.0 * a).in_mm(), 30.0);
        assert_eq!((a / 4.0).in_mm(), 2.5);

        let dwell = Time::millisecond(16.40625);
        let margin = Time::millisecond(10.0);
        assert!(((dwell - margin).in_ms() - 6.40625).abs() < 1e-12);

        let offset = Volume::milliliter(0.01);
        assert!(((Volume::milliliter(0.5) + offset).in_ml() - 0.51).abs() < 1e-12);

        let gain = FlowRate::milliliter_per_millisecond(0.2);
        assert!(((gain * 0.5).in_ml_per_ms() - 0.1).abs() < 1e-12);
        assert!(((Speed::millimeter_per_second(10.0) / 4.0).in_mm_per_s() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_ordering_by_canonical_magnitude() {
        assert!(Length::inch(1.0) > Length::millimeter(25.0));
        assert!(Time::second(0.01) < Time::millisecond(11.0));
        assert!(Volume::fluid_ounce_us(1.0) > Volume::milliliter(29.0));
        assert!(Speed::millimeter_per_second(1.0) < Speed::millimeter_per_second(2.0));
        assert!(
            FlowRate::milliliter_per_millisecond(0.1) > FlowRate::milliliter_per_millisecond(0.05)
        );
    }

    #[test]
    fn test_nan_is_unordered() {
        let nan = Time::millisecond(f64::NAN);
        let one = Time::millisecond(1.0);
        assert_eq!(nan.partial_cmp(&one), None);
        assert_ne!(nan, Time::millisecond(f64::NAN));
    }

    #[test]
    fn test_division_by_zero_speed_is_infinite() {
        let time = Length::millimeter(21.0) / Speed::millimeter_per_second(0.0);
        assert!(time.in_ms().is_infinite());
    }

    #[test]
    fn test_negative_values_propagate() {
        let l = Length::millimeter(-5.0) + Length::millimeter(2.0);
        assert_eq!(l.in_mm(), -3.0);
    }

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Volume::default().in_ml(), 0.0);
        assert_eq!(Time::default(), Time::millisecond(0.0));
    }

    #[test]
    fn test_display_units() {
        assert_eq!(Length::millimeter(108.0).to_string(), "108.00 mm");
        assert_eq!(Time::millisecond(16.40625).to_string(), "16.41 ms");
        assert_eq!(Speed::millimeter_per_second(960.0).to_string(), "960.00 mm/s");
        assert_eq!(Volume::milliliter(0.51733).to_string(), "0.517 mL");
        assert_eq!(
            FlowRate::milliliter_per_millisecond(0.07867).to_string(),
            "0.07867 mL/ms"
        );
    }

    #[test]
    fn test_quantities_are_thread_safe() {
        assert_send_sync::<Length>();
        assert_send_sync::<Time>();
        assert_send_sync::<Speed>();
        assert_send_sync::<Volume>();
        assert_send_sync::<FlowRate>();
    }
}
