use serde::{Deserialize, Serialize};

/// Position on the layout canvas, in percent of its width and height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    /// Create a new position
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Closed range of percentages
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub min: f64,
    pub max: f64,
}

impl Band {
    /// Create a new band
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Point at `t` of the way across the band, `t` in `[0, 1]`
    pub fn lerp(self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }

    pub fn center(self) -> f64 {
        self.lerp(0.5)
    }

    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// Seeded periodic offset, `amplitude * wave(seed * frequency)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Jitter {
    pub amplitude: f64,
    pub frequency: f64,
}

impl Jitter {
    pub const fn new(amplitude: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            frequency,
        }
    }

    /// Sine-shaped offset for the given seed, zero without a seed
    pub fn sin(self, seed: Option<f64>) -> f64 {
        seed.map_or(0.0, |s| self.amplitude * (s * self.frequency).sin())
    }

    /// Cosine-shaped offset for the given seed, zero without a seed
    pub fn cos(self, seed: Option<f64>) -> f64 {
        seed.map_or(0.0, |s| self.amplitude * (s * self.frequency).cos())
    }
}
