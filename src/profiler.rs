// profiler.rs
// Per-section frame timings, compiled into the hot path only with the `profiling` feature

use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Cumulative time per named section since the last report.
#[derive(Debug, Default)]
pub struct Profiler {
    sections: HashMap<&'static str, Duration>,
    frames: usize,
}

impl Profiler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, section: &'static str, elapsed: Duration) {
        *self.sections.entry(section).or_default() += elapsed;
    }

    pub fn total(&self, section: &str) -> Option<Duration> {
        self.sections.get(section).copied()
    }

    /// Count a finished frame. Every `every` frames, log the sections slowest first and start
    /// over; returns the logged report.
    pub fn end_frame(&mut self, every: usize) -> Option<Vec<(&'static str, Duration)>> {
        self.frames += 1;
        if self.frames < every {
            return None;
        }
        let mut report: Vec<_> = self.sections.drain().collect();
        report.sort_by(|a, b| b.1.cmp(&a.1));
        for (section, spent) in &report {
            tracing::info!("{section:<20} {spent:?} over {} frames", self.frames);
        }
        self.frames = 0;
        Some(report)
    }
}

/// Times one scope; reports to the global profiler on drop.
pub struct ProfilerGuard {
    section: &'static str,
    started: Instant,
}

pub fn start(section: &'static str) -> ProfilerGuard {
    ProfilerGuard {
        section,
        started: Instant::now(),
    }
}

#[cfg(feature = "profiling")]
impl Drop for ProfilerGuard {
    fn drop(&mut self) {
        crate::PROFILER
            .lock()
            .record(self.section, self.started.elapsed());
    }
}

/// Time the rest of the enclosing scope under `$name`. Expands to nothing without the
/// `profiling` feature.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _guard = $crate::profiler::start($name);
    };
}
