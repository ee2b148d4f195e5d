mod comparison;
mod monitor;

// Re-exports.
pub use comparison::ExecutionComparison;
pub use monitor::{LineKind, LogError, MonitorLog};

/// The three metrics sampled by the profiler, each plotted on its own
/// figure against the sample ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    CpuUsage,
    MemoryUsage,
    WallClockTime,
}

impl Metric {
    pub fn all() -> [Metric; 3] {
        [Self::CpuUsage, Self::MemoryUsage, Self::WallClockTime]
    }
}
