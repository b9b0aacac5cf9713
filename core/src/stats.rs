// Frame timing aggregated over a fixed sample window.

use std::fmt;

pub const MIN_SAMPLE_WINDOW: f32 = 0.1;
pub const MAX_SAMPLE_WINDOW: f32 = 5.0;
pub const DEFAULT_SAMPLE_WINDOW: f32 = 2.0;

/// How a [`FrameReport`] is presented.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMetric {
    #[default]
    FrameRate,
    FrameDuration,
}

impl DisplayMetric {
    /// The other metric, showing the same numbers.
    pub fn toggled(self) -> Self {
        match self {
            DisplayMetric::FrameRate => DisplayMetric::FrameDuration,
            DisplayMetric::FrameDuration => DisplayMetric::FrameRate,
        }
    }
}

/// Summary of one closed sample window. Durations are in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub frames: u32,
    pub best: f32,
    pub average: f32,
    pub worst: f32,
}

impl FrameReport {
    /// Frames per second as (best, average, worst).
    pub fn fps(&self) -> (f32, f32, f32) {
        (1.0 / self.best, 1.0 / self.average, 1.0 / self.worst)
    }

    pub fn format(&self, metric: DisplayMetric) -> String {
        match metric {
            DisplayMetric::FrameRate => {
                let (best, average, worst) = self.fps();
                format!("FPS {best:.0} / {average:.0} / {worst:.0}")
            }
            DisplayMetric::FrameDuration => format!(
                "MS {:.1} / {:.1} / {:.1}",
                1000.0 * self.best,
                1000.0 * self.average,
                1000.0 * self.worst
            ),
        }
    }
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DisplayMetric::FrameDuration))
    }
}

/// Accumulates frame durations until `window` seconds have passed.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window: f32,
    total: f32,
    frames: u32,
    best: f32,
    worst: f32,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLE_WINDOW)
    }
}

impl FrameStats {
    /// `window` is clamped to `[0.1, 5]` seconds.
    pub fn new(window: f32) -> Self {
        Self {
            window: window.clamp(MIN_SAMPLE_WINDOW, MAX_SAMPLE_WINDOW),
            total: 0.0,
            frames: 0,
            best: f32::MAX,
            worst: f32::MIN,
        }
    }

    pub fn window(&self) -> f32 {
        self.window
    }

    /// Add one frame. Returns the report when this frame closes the window.
    pub fn record(&mut self, dt: f32) -> Option<FrameReport> {
        self.total += dt;
        self.frames += 1;
        self.best = self.best.min(dt);
        self.worst = self.worst.max(dt);
        if self.total < self.window {
            return None;
        }
        let report = FrameReport {
            frames: self.frames,
            best: self.best,
            average: self.total / self.frames as f32,
            worst: self.worst,
        };
        *self = Self::new(self.window);
        Some(report)
    }
}
