use crate::db::Metric;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    #[error("monitor log {path:?} not found")]
    FileNotFound { path: PathBuf },
    #[error("failed to read monitor log")]
    Io(#[from] std::io::Error),
    #[error("malformed log line {line_number}: {line:?}")]
    MalformedLogLine { line_number: usize, line: String },
    #[error("unbalanced monitor log: {samples} samples but {cpu} cpu, {memory} memory and {wall_clock} wall-clock entries")]
    UnbalancedLog {
        samples: usize,
        cpu: usize,
        memory: usize,
        wall_clock: usize,
    },
}

/// The kind of a recognized monitor-log line. The profiler emits one block
/// per sample:
/// ```text
/// Sample 1:
/// CPU Usage: 12.50%
/// Memory Usage: 2048 KB
/// Wall Clock Time: 0.003000 seconds
/// ```
/// interleaved with hotspot details and separator lines, which are not
/// recognized and thus skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Sample,
    CpuUsage,
    MemoryUsage,
    WallClockTime,
}

impl LineKind {
    pub fn classify(line: &str) -> Option<Self> {
        // longer prefixes first so that a shorter prefix never shadows them
        if line.starts_with("Wall Clock Time") {
            Some(Self::WallClockTime)
        } else if line.starts_with("Memory Usage") {
            Some(Self::MemoryUsage)
        } else if line.starts_with("CPU Usage") {
            Some(Self::CpuUsage)
        } else if line.starts_with("Sample") {
            Some(Self::Sample)
        } else {
            None
        }
    }

    /// Index of the value token, counting whitespace-delimited tokens.
    fn value_index(self) -> usize {
        match self {
            Self::Sample => 1,
            Self::CpuUsage | Self::MemoryUsage => 2,
            Self::WallClockTime => 3,
        }
    }

    /// Unit character glued to the value token, if any.
    fn unit_suffix(self) -> Option<char> {
        match self {
            Self::Sample => Some(':'),
            Self::CpuUsage => Some('%'),
            Self::MemoryUsage | Self::WallClockTime => None,
        }
    }
}

#[derive(Clone, Default, PartialEq)]
pub struct MonitorLog {
    sample_ids: Vec<u64>,
    // percent
    cpu_usage: Vec<f64>,
    // kilobytes
    memory_usage: Vec<u64>,
    // seconds
    wall_clock: Vec<f64>,
}

impl MonitorLog {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LogError> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LogError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                LogError::Io(e)
            }
        })?;
        let log = Self::parse(&input)?;
        tracing::debug!(
            "parsed {} samples from {}",
            log.sample_count(),
            path.display()
        );
        Ok(log)
    }

    /// Parses the full log, fail-fast: the first malformed recognized line
    /// aborts the parse. Unrecognized lines are skipped.
    pub fn parse(input: &str) -> Result<Self, LogError> {
        let mut log = Self::default();
        for (index, line) in input.lines().enumerate() {
            log.push_line(index + 1, line)?;
        }
        log.check_balanced()?;
        Ok(log)
    }

    fn push_line(
        &mut self,
        line_number: usize,
        line: &str,
    ) -> Result<(), LogError> {
        let kind = match LineKind::classify(line) {
            Some(kind) => kind,
            None => {
                // hotspot details, separators, blank lines
                tracing::trace!("skipping line {}: {:?}", line_number, line);
                return Ok(());
            }
        };

        let malformed = || LogError::MalformedLogLine {
            line_number,
            line: line.to_owned(),
        };

        let token = line
            .split_whitespace()
            .nth(kind.value_index())
            .ok_or_else(malformed)?;
        let token = match kind.unit_suffix() {
            Some(suffix) => token.strip_suffix(suffix).ok_or_else(malformed)?,
            None => token,
        };

        match kind {
            LineKind::Sample => {
                self.sample_ids.push(token.parse().map_err(|_| malformed())?)
            }
            LineKind::CpuUsage => {
                self.cpu_usage.push(token.parse().map_err(|_| malformed())?)
            }
            LineKind::MemoryUsage => self
                .memory_usage
                .push(token.parse().map_err(|_| malformed())?),
            LineKind::WallClockTime => {
                self.wall_clock.push(token.parse().map_err(|_| malformed())?)
            }
        }
        Ok(())
    }

    // A log with an unequal number of each record kind would silently
    // misalign downstream charts, so reject it here.
    fn check_balanced(&self) -> Result<(), LogError> {
        let samples = self.sample_ids.len();
        let cpu = self.cpu_usage.len();
        let memory = self.memory_usage.len();
        let wall_clock = self.wall_clock.len();
        if cpu != samples || memory != samples || wall_clock != samples {
            return Err(LogError::UnbalancedLog {
                samples,
                cpu,
                memory,
                wall_clock,
            });
        }
        Ok(())
    }

    pub fn sample_count(&self) -> usize {
        self.sample_ids.len()
    }

    pub fn sample_ids(&self) -> &[u64] {
        &self.sample_ids
    }

    pub fn cpu_usage(&self) -> &[f64] {
        &self.cpu_usage
    }

    pub fn memory_usage(&self) -> &[u64] {
        &self.memory_usage
    }

    pub fn wall_clock(&self) -> &[f64] {
        &self.wall_clock
    }

    /// (x, y) vectors for `metric`, y widened to f64 for the charting
    /// surface.
    pub fn series(&self, metric: Metric) -> (Vec<u64>, Vec<f64>) {
        let x = self.sample_ids.clone();
        let y = match metric {
            Metric::CpuUsage => self.cpu_usage.clone(),
            Metric::MemoryUsage => {
                self.memory_usage.iter().map(|&kb| kb as f64).collect()
            }
            Metric::WallClockTime => self.wall_clock.clone(),
        };
        (x, y)
    }
}

impl fmt::Debug for MonitorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "samples: {}", self.sample_count())?;
        let (mean, stddev) = mean_stddev(&self.cpu_usage);
        writeln!(f, "cpu: {:.2}% stddev={:.2}", mean, stddev)?;
        let memory: Vec<_> =
            self.memory_usage.iter().map(|&kb| kb as f64).collect();
        let (mean, stddev) = mean_stddev(&memory);
        writeln!(f, "mem: {}KB stddev={}", mean.round(), stddev.round())?;
        let (mean, stddev) = mean_stddev(&self.wall_clock);
        writeln!(f, "wall clock: {:.6}s stddev={:.6}", mean, stddev)?;
        Ok(())
    }
}

fn mean_stddev(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let count = values.len() as f64;
    let mean = values.iter().sum::<f64>() / count;
    let variance = values
        .iter()
        .map(|value| {
            let diff = value - mean;
            diff * diff
        })
        .sum::<f64>()
        / count;
    (mean, variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINGLE_BLOCK: &str = "Sample 1:
CPU Usage: 12.5%
Memory Usage: 2048
Wall Clock Time: 0.003
";

    #[test]
    fn parse_single_block() {
        let log = MonitorLog::parse(SINGLE_BLOCK).expect("parse should work");
        assert_eq!(log.sample_ids(), &[1]);
        assert_eq!(log.cpu_usage(), &[12.5]);
        assert_eq!(log.memory_usage(), &[2048]);
        assert_eq!(log.wall_clock(), &[0.003]);
    }

    #[test]
    fn parse_profiler_output() {
        // one block exactly as the profiler writes it, units included
        let input = "Sample 3:
CPU Usage: 87.25%
Memory Usage: 10240 KB
Wall Clock Time: 30.000123 seconds
Hotspots:
  consume: Total Time=1.234567, Calls=10, Avg Time=0.123457
------------------------
";
        let log = MonitorLog::parse(input).expect("parse should work");
        assert_eq!(log.sample_ids(), &[3]);
        assert_eq!(log.cpu_usage(), &[87.25]);
        assert_eq!(log.memory_usage(), &[10240]);
        assert_eq!(log.wall_clock(), &[30.000123]);
    }

    #[test]
    fn unrecognized_lines_do_not_shift_alignment() {
        let input = "
# periodic profiler output
Sample 1:
CPU Usage: 10.0%
Memory Usage: 1024
Wall Clock Time: 10.0
Hotspots:
------------------------

Sample 2:
CPU Usage: 20.0%
Memory Usage: 2048
Wall Clock Time: 20.0
------------------------
";
        let log = MonitorLog::parse(input).expect("parse should work");
        assert_eq!(log.sample_ids(), &[1, 2]);
        assert_eq!(log.cpu_usage(), &[10.0, 20.0]);
        assert_eq!(log.memory_usage(), &[1024, 2048]);
        assert_eq!(log.wall_clock(), &[10.0, 20.0]);
    }

    #[test]
    fn parse_is_idempotent() {
        let first = MonitorLog::parse(SINGLE_BLOCK).expect("parse should work");
        let second =
            MonitorLog::parse(SINGLE_BLOCK).expect("parse should work");
        assert_eq!(first, second);
    }

    #[test]
    fn non_numeric_value_is_malformed() {
        let err = MonitorLog::parse("CPU Usage: abc%\n")
            .expect_err("parse should fail");
        assert!(matches!(
            err,
            LogError::MalformedLogLine { line_number: 1, .. }
        ));
    }

    #[test]
    fn missing_unit_suffix_is_malformed() {
        // the profiler always writes the '%'; a bare number means the line
        // was truncated
        let err = MonitorLog::parse("CPU Usage: 12.5\n")
            .expect_err("parse should fail");
        assert!(matches!(err, LogError::MalformedLogLine { .. }));
    }

    #[test]
    fn missing_value_token_is_malformed() {
        for input in ["Sample\n", "CPU Usage:\n", "Wall Clock Time:\n"] {
            let err =
                MonitorLog::parse(input).expect_err("parse should fail");
            assert!(matches!(err, LogError::MalformedLogLine { .. }));
        }
    }

    #[test]
    fn unbalanced_log_is_rejected() {
        // a sample header without its metrics
        let input = "Sample 1:
CPU Usage: 12.5%
Memory Usage: 2048
Wall Clock Time: 0.003
Sample 2:
";
        let err = MonitorLog::parse(input).expect_err("parse should fail");
        assert!(matches!(
            err,
            LogError::UnbalancedLog {
                samples: 2,
                cpu: 1,
                memory: 1,
                wall_clock: 1,
            }
        ));
    }

    #[test]
    fn missing_file_is_reported() {
        let err = MonitorLog::from_file("does_not_exist.txt")
            .expect_err("open should fail");
        assert!(matches!(err, LogError::FileNotFound { .. }));
    }

    #[test]
    fn series_widens_to_f64() {
        let log = MonitorLog::parse(SINGLE_BLOCK).expect("parse should work");
        let (x, y) = log.series(Metric::MemoryUsage);
        assert_eq!(x, vec![1]);
        assert_eq!(y, vec![2048.0]);
    }
}
