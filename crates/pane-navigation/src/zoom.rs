//! Zoom policy
//!
//! Each zoom step moves the factor by `step`, rounded to two decimals so
//! repeated steps do not drift, and clamped to `[min, max]`.

use serde::{Deserialize, Serialize};

use crate::error::NavigationError;
use crate::Result;

const DEFAULT_FACTOR: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomPolicy {
    pub step: f64,
    pub min: f64,
    pub max: f64,
}

impl ZoomPolicy {
    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.min.is_finite() && self.max.is_finite()) {
            return Err(NavigationError::InvalidZoomPolicy(
                "values must be finite".to_string(),
            ));
        }
        if self.step <= 0.0 {
            return Err(NavigationError::InvalidZoomPolicy(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.min <= 0.0 || self.min > self.max {
            return Err(NavigationError::InvalidZoomPolicy(format!(
                "bounds must satisfy 0 < min <= max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }

    pub fn zoom_in(&self, current: f64) -> f64 {
        self.clamp(current + self.step)
    }

    pub fn zoom_out(&self, current: f64) -> f64 {
        self.clamp(current - self.step)
    }

    pub fn reset(&self) -> f64 {
        self.clamp(DEFAULT_FACTOR)
    }

    pub fn clamp(&self, factor: f64) -> f64 {
        ((factor * 100.0).round() / 100.0).clamp(self.min, self.max)
    }
}

impl Default for ZoomPolicy {
    fn default() -> Self {
        Self {
            step: 0.1,
            min: 0.25,
            max: 5.0,
        }
    }
}
