//! The resolved coverage settings record and its fixed defaults.

use serde::Serialize;

/// Report format produced when the host configures none.
pub const DEFAULT_REPORT_FORMAT: &str = "json";

/// Filter that keeps the collector's own assemblies out of instrumentation.
///
/// Always the first exclude filter, whether or not the host supplied any.
pub const DEFAULT_EXCLUDE_FILTER: &str = "[linecov.*]*";

/// Fully resolved settings for one coverage collection run.
///
/// Every field is fixed when [`resolve`](crate::resolver::SettingsResolver::resolve)
/// assembles the record; nothing updates it afterwards. Guarantees held by
/// construction:
///
/// - `test_module` is never empty (resolution fails instead).
/// - `report_formats` has at least one entry.
/// - `exclude_filters` starts with [`DEFAULT_EXCLUDE_FILTER`]; host-supplied
///   filters follow in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageSettings {
    /// Path of the module to instrument. Exactly one per run.
    pub test_module: String,
    /// Coverage report serializations to produce downstream.
    pub report_formats: Vec<String>,
    pub include_filters: Vec<String>,
    pub include_directories: Vec<String>,
    pub exclude_filters: Vec<String>,
    pub exclude_source_files: Vec<String>,
    pub exclude_attributes: Vec<String>,
    /// Existing coverage file to merge results into, verbatim as configured.
    pub merge_with: Option<String>,
    pub use_source_link: bool,
    pub single_hit: bool,
    pub include_test_assembly: bool,
    pub skip_auto_props: bool,
    pub does_not_return_attributes: Vec<String>,
    pub deterministic_report: bool,
    pub instrument_modules_without_local_sources: bool,
}
