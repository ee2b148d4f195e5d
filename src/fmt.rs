use crate::db::Metric;

/// Which of the two timing series a comparison chart line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingMode {
    Parallel,
    Serial,
}

pub struct PlotFmt;

impl PlotFmt {
    pub fn label(metric: Metric) -> &'static str {
        match metric {
            Metric::CpuUsage => "CPU Usage (%)",
            Metric::MemoryUsage => "Memory Usage (KB)",
            Metric::WallClockTime => "Wall Clock Time (seconds)",
        }
    }

    pub fn title(metric: Metric) -> &'static str {
        match metric {
            Metric::CpuUsage => "CPU Usage Over Samples",
            Metric::MemoryUsage => "Memory Usage Over Samples",
            Metric::WallClockTime => "Wall Clock Time Over Samples",
        }
    }

    pub fn color(metric: Metric) -> &'static str {
        match metric {
            Metric::CpuUsage => "tab:blue",
            Metric::MemoryUsage => "orange",
            Metric::WallClockTime => "green",
        }
    }

    pub fn file_name(metric: Metric) -> &'static str {
        match metric {
            Metric::CpuUsage => "cpu_usage.pdf",
            Metric::MemoryUsage => "memory_usage.pdf",
            Metric::WallClockTime => "wall_clock_time.pdf",
        }
    }

    pub fn timing_name(mode: TimingMode) -> &'static str {
        match mode {
            TimingMode::Parallel => "Parallel Time",
            TimingMode::Serial => "Serial Time",
        }
    }

    pub fn timing_color(mode: TimingMode) -> &'static str {
        match mode {
            TimingMode::Parallel => "b",
            TimingMode::Serial => "r",
        }
    }

    // Same marker on every line.
    pub fn marker() -> &'static str {
        "o"
    }
}
