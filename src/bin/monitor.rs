use color_eyre::eyre::WrapErr;
use color_eyre::Report;
use monitor_plot::{Metric, MonitorLog, PlotFmt};

// file where the profiler writes its samples
const LOG_PATH: &str = "performance_log.txt";

// if set, plots are saved there as PDFs; otherwise each one is shown in an
// interactive window
const PLOT_DIR: Option<&str> = None;

fn main() -> Result<(), Report> {
    // init logging
    tracing_subscriber::fmt::init();

    let log = MonitorLog::from_file(LOG_PATH)?;
    tracing::info!("parsed {} samples from {}", log.sample_count(), LOG_PATH);
    tracing::debug!("summary:\n{:?}", log);

    if let Some(plot_dir) = PLOT_DIR {
        std::fs::create_dir_all(plot_dir).wrap_err("create plot dir")?;
    }

    for metric in Metric::all() {
        let output_file = PLOT_DIR
            .map(|plot_dir| format!("{}/{}", plot_dir, PlotFmt::file_name(metric)));
        monitor_plot::metric_plot(&log, metric, output_file.as_deref())?;
    }
    Ok(())
}
