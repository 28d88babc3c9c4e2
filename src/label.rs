use std::fmt::Write;

use crate::estimator::{Reading, Tier};

const FPS_SUFFIX: &str = " FPS";

const GREEN: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

pub fn color_for(tier: Tier) -> [f32; 4] {
    match tier {
        Tier::Normal => GREEN,
        Tier::Warning => YELLOW,
        Tier::Critical => RED,
    }
}

/// Display text for the HUD counter. The string buffer is reused across
/// updates so a steady reading stream does not allocate.
pub struct FpsLabel {
    text: String,
    color: [f32; 4],
}

impl FpsLabel {
    pub fn new() -> Self {
        Self {
            text: String::with_capacity(16),
            color: GREEN,
        }
    }

    pub fn update(&mut self, reading: &Reading) {
        self.text.clear();
        let _ = write!(self.text, "{:.2}", reading.fps);
        self.text.push_str(FPS_SUFFIX);
        self.color = color_for(reading.tier);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> [f32; 4] {
        self.color
    }
}

impl Default for FpsLabel {
    fn default() -> Self {
        Self::new()
    }
}
