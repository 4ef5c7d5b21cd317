//! Configuration types for the critical path engine.

use pyo3::prelude::*;

/// Configuration for a critical path computation.
#[pyclass]
#[derive(Clone, Debug, Default)]
pub struct CriticalPathConfig {
    /// Verbosity level: 0=silent, 1=summary, 2=graph, 3=debug.
    #[pyo3(get, set)]
    pub verbosity: u8,
}

#[pymethods]
impl CriticalPathConfig {
    #[new]
    #[pyo3(signature = (verbosity=None))]
    fn new(verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!("CriticalPathConfig(verbosity={})", self.verbosity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_silent() {
        let config = CriticalPathConfig::default();
        assert_eq!(config.verbosity, crate::logging::VERBOSITY_SILENT);
    }
}
