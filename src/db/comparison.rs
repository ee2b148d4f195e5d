/// Execution times of the same set of programs in parallel and serial
/// mode, one entry per program. Plain input data for the comparison chart,
/// passed in explicitly so that the chart logic stays testable.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionComparison {
    programs: Vec<String>,
    // seconds
    parallel: Vec<f64>,
    serial: Vec<f64>,
}

impl ExecutionComparison {
    pub fn new(
        programs: Vec<String>,
        parallel: Vec<f64>,
        serial: Vec<f64>,
    ) -> Self {
        assert_eq!(
            programs.len(),
            parallel.len(),
            "one parallel time per program"
        );
        assert_eq!(
            programs.len(),
            serial.len(),
            "one serial time per program"
        );
        Self {
            programs,
            parallel,
            serial,
        }
    }

    pub fn program_count(&self) -> usize {
        self.programs.len()
    }

    pub fn programs(&self) -> &[String] {
        &self.programs
    }

    pub fn parallel(&self) -> &[f64] {
        &self.parallel
    }

    pub fn serial(&self) -> &[f64] {
        &self.serial
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn performance_counts() -> ExecutionComparison {
        let programs = (1..=4)
            .map(|i| format!("performancecount{}", i))
            .collect();
        let parallel = vec![0.195539, 0.011052, 0.011645, 0.005701];
        let serial = vec![0.019484, 0.019520, 0.019743, 0.020019];
        ExecutionComparison::new(programs, parallel, serial)
    }

    #[test]
    fn four_programs_four_points_each() {
        let comparison = performance_counts();
        assert_eq!(comparison.program_count(), 4);
        assert_eq!(
            comparison.programs(),
            &[
                "performancecount1",
                "performancecount2",
                "performancecount3",
                "performancecount4"
            ]
        );
        assert_eq!(
            comparison.parallel(),
            &[0.195539, 0.011052, 0.011645, 0.005701]
        );
        assert_eq!(
            comparison.serial(),
            &[0.019484, 0.019520, 0.019743, 0.020019]
        );
    }

    #[test]
    #[should_panic(expected = "one serial time per program")]
    fn mismatched_series_are_rejected() {
        ExecutionComparison::new(
            vec![String::from("performancecount1")],
            vec![0.195539],
            vec![],
        );
    }
}
