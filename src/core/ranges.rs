//! Bounded ranges for every input control.
//!
//! Each numeric input the estimator accepts has a closed range and a step.
//! Input boundaries (TUI sliders, CLI flags, config files) clamp into the
//! range; only interactive stepping snaps onto the step grid.

use serde::Serialize;

/// Positions this close to a grid index count as on the grid.
const GRID_TOLERANCE: f64 = 1e-6;

/// Closed floating-point range with a fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
    /// Decimal places needed to print any value on the step grid
    pub decimals: usize,
}

impl RangeSpec {
    pub const fn new(min: f64, max: f64, step: f64, default: f64, decimals: usize) -> Self {
        Self {
            min,
            max,
            step,
            default,
            decimals,
        }
    }

    /// Clamp a value into the range. NaN maps to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.default;
        }
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Number of steps between `min` and `max`.
    pub fn step_count(&self) -> i64 {
        ((self.max - self.min) / self.step).round() as i64
    }

    /// Value of the grid point at `index`, with the index clamped to the grid.
    pub fn value_at(&self, index: i64) -> f64 {
        let index = index.clamp(0, self.step_count());
        round_to(self.min + index as f64 * self.step, self.decimals)
    }

    /// Move `delta` grid steps away from `value`, stopping at the bounds.
    ///
    /// An off-grid value first lands on the neighbouring grid point in the
    /// direction of travel, so one step never skips a grid point.
    pub fn step_by(&self, value: f64, delta: i64) -> f64 {
        let position = (self.clamp(value) - self.min) / self.step;
        let index = if (position - position.round()).abs() < GRID_TOLERANCE || delta == 0 {
            position.round() as i64 + delta
        } else if delta > 0 {
            position.floor() as i64 + delta
        } else {
            position.ceil() as i64 + delta
        };
        self.value_at(index)
    }

    /// Position of `value` in the range as a fraction in [0, 1].
    pub fn fraction(&self, value: f64) -> f64 {
        (self.clamp(value) - self.min) / (self.max - self.min)
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }
}

/// Closed integer range with a fixed step, used by the prototype controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntRangeSpec {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl IntRangeSpec {
    pub const fn new(min: u32, max: u32, step: u32, default: u32) -> Self {
        Self {
            min,
            max,
            step,
            default,
        }
    }

    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Move `delta` steps away from `value`. The result is snapped to the
    /// step grid anchored at `min` and stays inside the range. An off-grid
    /// value lands on the neighbouring grid point in the direction of travel.
    pub fn step_by(&self, value: u32, delta: i64) -> u32 {
        let steps = i64::from((self.max - self.min) / self.step);
        let offset = i64::from(self.clamp(value) - self.min);
        let step = i64::from(self.step);
        let base = match delta.signum() {
            1 => offset / step,
            -1 => (offset + step - 1) / step,
            _ => (offset + step / 2) / step,
        };
        let index = (base + delta).clamp(0, steps);
        self.min + (index * step) as u32
    }

    pub fn fraction(&self, value: u32) -> f64 {
        f64::from(self.clamp(value) - self.min) / f64::from(self.max - self.min)
    }
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
