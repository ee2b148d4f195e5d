use color_eyre::Report;
use monitor_plot::ExecutionComparison;

// measured execution times of the performance-count programs, in seconds
const PROGRAMS: [&str; 4] = [
    "performancecount1",
    "performancecount2",
    "performancecount3",
    "performancecount4",
];
const TIME_PARALLEL: [f64; 4] = [0.195539, 0.011052, 0.011645, 0.005701];
const TIME_SERIAL: [f64; 4] = [0.019484, 0.019520, 0.019743, 0.020019];

// if set, the plot is saved there as a PDF; otherwise it is shown in an
// interactive window
const OUTPUT_FILE: Option<&str> = None;

fn main() -> Result<(), Report> {
    // init logging
    tracing_subscriber::fmt::init();

    let comparison = ExecutionComparison::new(
        PROGRAMS.iter().map(|program| program.to_string()).collect(),
        TIME_PARALLEL.to_vec(),
        TIME_SERIAL.to_vec(),
    );
    tracing::info!("plotting {} programs", comparison.program_count());

    monitor_plot::comparison_plot(&comparison, OUTPUT_FILE)?;
    Ok(())
}
