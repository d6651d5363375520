//! Type-safe time units for light curve simulation
//!
//! Observation windows are specified in hours, exposures in seconds, the
//! spacecraft orbit in minutes and light curve timestamps in days. This module
//! wraps the `uom` time quantity so those conversions happen in one place.

use uom::si::time::{day, hour, minute, second};

/// Type alias for durations with convenient methods
pub type Time = uom::si::f64::Time;

/// Extension trait for time conversions used in observation planning
pub trait TimeExt {
    /// Create a duration from seconds (exposure times)
    fn from_seconds(s: f64) -> Self;

    /// Get duration in seconds
    fn as_seconds(&self) -> f64;

    /// Create a duration from minutes (spacecraft orbits)
    fn from_minutes(min: f64) -> Self;

    /// Get duration in minutes
    fn as_minutes(&self) -> f64;

    /// Create a duration from hours (observing windows)
    fn from_hours(h: f64) -> Self;

    /// Get duration in hours
    fn as_hours(&self) -> f64;

    /// Create a duration from days (orbital periods, timestamps)
    fn from_days(d: f64) -> Self;

    /// Get duration in days
    fn as_days(&self) -> f64;
}

impl TimeExt for Time {
    fn from_seconds(s: f64) -> Self {
        Time::new::<second>(s)
    }

    fn as_seconds(&self) -> f64 {
        self.get::<second>()
    }

    fn from_minutes(min: f64) -> Self {
        Time::new::<minute>(min)
    }

    fn as_minutes(&self) -> f64 {
        self.get::<minute>()
    }

    fn from_hours(h: f64) -> Self {
        Time::new::<hour>(h)
    }

    fn as_hours(&self) -> f64 {
        self.get::<hour>()
    }

    fn from_days(d: f64) -> Self {
        Time::new::<day>(d)
    }

    fn as_days(&self) -> f64 {
        self.get::<day>()
    }
}
