//! Verbosity-gated diagnostics on stderr.
//!
//! `CriticalPathConfig::verbosity` selects how much is printed. Each level
//! includes everything below it:
//!
//! | level | prints |
//! |-------|--------|
//! | 0 | nothing |
//! | 1 | length and size of each pass, cycles |
//! | 2 | discarded edges, edges whose kind or lag is not applied, duplicate tasks |
//! | 3 | per-task distances, each step of path reconstruction |
//!
//! The message arguments are only evaluated when the level is enabled.

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_SUMMARY: u8 = 1;
pub const VERBOSITY_GRAPH: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

#[macro_export]
macro_rules! log_summary {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_SUMMARY {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_graph {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_GRAPH {
            eprintln!($($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::logging::VERBOSITY_DEBUG {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn counted(calls: &Cell<u32>) -> u32 {
        calls.set(calls.get() + 1);
        calls.get()
    }

    #[test]
    fn test_disabled_levels_skip_arguments() {
        let calls = Cell::new(0);
        log_summary!(VERBOSITY_SILENT, "{}", counted(&calls));
        log_graph!(VERBOSITY_SUMMARY, "{}", counted(&calls));
        log_debug!(VERBOSITY_GRAPH, "{}", counted(&calls));
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_enabled_levels_include_lower_ones() {
        let calls = Cell::new(0);
        log_summary!(VERBOSITY_DEBUG, "{}", counted(&calls));
        log_graph!(VERBOSITY_DEBUG, "{}", counted(&calls));
        log_debug!(VERBOSITY_DEBUG, "{}", counted(&calls));
        assert_eq!(calls.get(), 3);
    }
}
