pub mod axes;
pub mod figure;
pub mod pyplot;

// Unwraps a `PyResult`, printing the Python traceback and bailing with a
// `color_eyre::Report` on error.
#[macro_export]
macro_rules! pytry {
    ($py:expr, $e:expr) => {{
        match $e {
            Ok(value) => value,
            Err(error) => {
                error.print($py);
                color_eyre::eyre::bail!("python error");
            }
        }
    }};
}

// Builds a `PyDict` from `(key, value)` pairs.
#[macro_export]
macro_rules! pydict {
    ($py:expr $(, ($key:expr, $value:expr))* $(,)?) => {{
        (|| {
            let dict = pyo3::types::PyDict::new($py);
            $(
                dict.set_item($key, $value)?;
            )*
            pyo3::PyResult::Ok(dict)
        })()
    }};
}
