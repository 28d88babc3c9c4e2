//! Smoothed FPS readout for a render loop: feed it per-frame deltas, get back
//! a windowed average plus a severity tier and a ready-to-draw label.

pub mod config;
pub mod estimator;
pub mod label;

pub use config::HudConfig;
pub use estimator::{FrameRateEstimator, Reading, Tier};
pub use label::FpsLabel;
