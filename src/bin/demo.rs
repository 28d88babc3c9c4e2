use std::thread;
use std::time::{Duration, Instant};

use fps_hud::{FpsLabel, FrameRateEstimator, HudConfig};
use log::info;

const FRAME_BUDGET: Duration = Duration::from_millis(16);
const RUN_SECONDS: u64 = 10;

fn main() {
    env_logger::init();

    let config = HudConfig::load();
    let mut estimator = FrameRateEstimator::new(config.update_interval);
    let mut label = FpsLabel::new();

    let start = Instant::now();
    let mut last_frame = start;

    while start.elapsed() < Duration::from_secs(RUN_SECONDS) {
        thread::sleep(FRAME_BUDGET);

        let now = Instant::now();
        let delta = (now - last_frame).as_secs_f32();
        last_frame = now;

        if let Some(reading) = estimator.record_sample(delta, 1.0) {
            label.update(&reading);
            info!("{} ({:?})", label.text(), reading.tier);
        }
    }
}
