mod db;
mod fmt;
#[cfg(feature = "pyo3")]
mod plot;

// Re-exports.
pub use db::{ExecutionComparison, LineKind, LogError, Metric, MonitorLog};
pub use fmt::{PlotFmt, TimingMode};

#[cfg(feature = "pyo3")]
use crate::plot::pyplot::PyPlot;
#[cfg(feature = "pyo3")]
use color_eyre::Report;
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

/// Plots one metric of the monitor log over its sample ids. The figure is
/// saved as a PDF when `output_file` is set and shown in an interactive
/// window otherwise.
#[cfg(feature = "pyo3")]
pub fn metric_plot(
    log: &MonitorLog,
    metric: Metric,
    output_file: Option<&str>,
) -> Result<(), Report> {
    let gil = Python::acquire_gil();
    let py = gil.python();
    let plt = pytry!(py, PyPlot::new(py));

    let kwargs = pytry!(py, pydict!(py, ("figsize", (10.0, 6.0))));
    let (fig, ax) = pytry!(py, plt.subplots(Some(kwargs)));

    let (x, y) = log.series(metric);
    let kwargs = pytry!(
        py,
        pydict!(
            py,
            ("label", PlotFmt::label(metric)),
            ("marker", PlotFmt::marker()),
            ("color", PlotFmt::color(metric)),
        )
    );
    pytry!(py, ax.plot(x, y, None, Some(kwargs)));

    pytry!(py, ax.set_xlabel("Sample"));
    pytry!(py, ax.set_ylabel(PlotFmt::label(metric)));
    pytry!(py, ax.set_title(PlotFmt::title(metric)));
    pytry!(py, ax.legend(None));
    pytry!(py, ax.grid(true));

    match output_file {
        Some(path) => {
            let kwargs = pytry!(py, pydict!(py, ("format", "pdf")));
            pytry!(py, plt.savefig(path, Some(kwargs)));
        }
        None => pytry!(py, plt.show()),
    }
    pytry!(py, plt.close(fig));
    Ok(())
}

/// Plots both timing series of an execution comparison on a single figure,
/// program names on the x axis. Save-or-show as in `metric_plot`.
#[cfg(feature = "pyo3")]
pub fn comparison_plot(
    comparison: &ExecutionComparison,
    output_file: Option<&str>,
) -> Result<(), Report> {
    let gil = Python::acquire_gil();
    let py = gil.python();
    let plt = pytry!(py, PyPlot::new(py));

    let kwargs = pytry!(py, pydict!(py, ("figsize", (10.0, 5.0))));
    let (fig, ax) = pytry!(py, plt.subplots(Some(kwargs)));

    let series = [
        (TimingMode::Parallel, comparison.parallel()),
        (TimingMode::Serial, comparison.serial()),
    ];
    for (mode, times) in series {
        let kwargs = pytry!(
            py,
            pydict!(
                py,
                ("label", PlotFmt::timing_name(mode)),
                ("marker", PlotFmt::marker()),
                ("color", PlotFmt::timing_color(mode)),
            )
        );
        pytry!(
            py,
            ax.plot(
                comparison.programs().to_vec(),
                times.to_vec(),
                None,
                Some(kwargs)
            )
        );
    }

    pytry!(py, ax.set_xlabel("Programs"));
    pytry!(py, ax.set_ylabel("Time (seconds)"));
    pytry!(py, ax.set_title("Execution Time: Parallel vs. Serial"));
    pytry!(py, ax.legend(None));
    pytry!(py, ax.grid(true));
    pytry!(py, plt.tight_layout());

    match output_file {
        Some(path) => {
            let kwargs = pytry!(py, pydict!(py, ("format", "pdf")));
            pytry!(py, plt.savefig(path, Some(kwargs)));
        }
        None => pytry!(py, plt.show()),
    }
    pytry!(py, plt.close(fig));
    Ok(())
}
