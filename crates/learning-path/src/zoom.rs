use serde::{Deserialize, Serialize};

/// Scale factor of the map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zoom {
    level: f32,
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            level: 1.0,
            step: 0.2,
            min: 0.5,
            max: 2.0,
        }
    }
}

impl Zoom {
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn zoom_in(&mut self) -> f32 {
        self.level = (self.level + self.step).min(self.max);
        self.level
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.level = (self.level - self.step).max(self.min);
        self.level
    }

    pub fn reset(&mut self) {
        self.level = 1.0;
    }
}
