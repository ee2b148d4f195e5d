use crate::plot::axes::Axes;
use crate::plot::figure::Figure;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyTuple};

pub struct PyPlot<'p> {
    plt: &'p PyModule,
}

impl<'p> PyPlot<'p> {
    pub fn new(py: Python<'p>) -> PyResult<Self> {
        let plt = PyModule::import(py, "matplotlib.pyplot")?;
        Ok(Self { plt })
    }

    pub fn subplots(
        &self,
        kwargs: Option<&PyDict>,
    ) -> PyResult<(Figure<'_>, Axes<'_>)> {
        let result = self.plt.getattr("subplots")?.call((), kwargs)?;
        let tuple = result.downcast::<PyTuple>()?;
        let fig = Figure::new(tuple.get_item(0)?);
        let ax = Axes::new(tuple.get_item(1)?);
        Ok((fig, ax))
    }

    pub fn tight_layout(&self) -> PyResult<()> {
        self.plt.getattr("tight_layout")?.call0()?;
        Ok(())
    }

    pub fn savefig(&self, path: &str, kwargs: Option<&PyDict>) -> PyResult<()> {
        self.plt.getattr("savefig")?.call((path,), kwargs)?;
        Ok(())
    }

    /// Blocks until the interactive window is closed.
    pub fn show(&self) -> PyResult<()> {
        self.plt.getattr("show")?.call0()?;
        Ok(())
    }

    pub fn close(&self, figure: Figure<'_>) -> PyResult<()> {
        self.plt.getattr("close")?.call1((figure.fig(),))?;
        Ok(())
    }
}
