//! Resolution of host configuration into [`CoverageSettings`].

use thiserror::Error;
use tracing::debug;

use crate::coerce::{parse_flag, split_list};
use crate::node::ConfigNode;
use crate::record::{CoverageSettings, DEFAULT_EXCLUDE_FILTER, DEFAULT_REPORT_FORMAT};

/// Resolution failed because the host supplied no test module.
///
/// This is the resolver's only hard failure: without a module there is
/// nothing to instrument. The message names the owning collector so
/// operators can locate the responsible component; hosts surface it
/// verbatim and abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{tool}: no test module supplied, nothing to instrument")]
pub struct NoTestModulesError {
    /// Name of the collector/tool that owns this resolver.
    pub tool: String,
}

/// Turns a configuration tree plus candidate test modules into one
/// immutable [`CoverageSettings`] record.
///
/// Validation is deliberately asymmetric: the test module is checked
/// strictly (a missing module makes the run meaningless), while every
/// optional field silently falls back to its default on absent or
/// malformed input. Coverage collection usually runs unattended, where a
/// crash costs far more than a defaulted setting.
#[derive(Debug, Clone)]
pub struct SettingsResolver {
    tool_name: String,
}

impl SettingsResolver {
    /// Create a resolver owned by the named collector/tool.
    ///
    /// The name only appears in diagnostics and in the hard-failure
    /// message; it never affects resolution.
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
        }
    }

    /// Resolve settings for one collection run.
    ///
    /// `root` absent means every optional field keeps its default; the
    /// report-format and exclude-filter defaults apply either way. Multiple
    /// test modules are accepted for forward compatibility, but only the
    /// first is instrumented — downstream supports a single module per run.
    pub fn resolve(
        &self,
        root: Option<&ConfigNode>,
        test_modules: &[String],
    ) -> Result<CoverageSettings, NoTestModulesError> {
        // Fail fast before touching any optional field.
        let test_module = test_modules
            .first()
            .ok_or_else(|| NoTestModulesError {
                tool: self.tool_name.clone(),
            })?
            .clone();

        let report_formats = match split_list(text_of(root, "Format")) {
            Some(formats) if !formats.is_empty() => formats,
            // An element resolving to zero tokens behaves like an absent one.
            _ => vec![DEFAULT_REPORT_FORMAT.to_string()],
        };

        let mut exclude_filters = vec![DEFAULT_EXCLUDE_FILTER.to_string()];
        exclude_filters.extend(list_of(root, "Exclude"));

        let settings = CoverageSettings {
            test_module,
            report_formats,
            include_filters: list_of(root, "Include"),
            include_directories: list_of(root, "IncludeDirectory"),
            exclude_filters,
            exclude_source_files: list_of(root, "ExcludeByFile"),
            exclude_attributes: list_of(root, "ExcludeByAttribute"),
            merge_with: text_of(root, "MergeWith").map(str::to_string),
            use_source_link: flag_of(root, "UseSourceLink"),
            single_hit: flag_of(root, "SingleHit"),
            include_test_assembly: flag_of(root, "IncludeTestAssembly"),
            skip_auto_props: flag_of(root, "SkipAutoProps"),
            does_not_return_attributes: list_of(root, "DoesNotReturnAttribute"),
            deterministic_report: flag_of(root, "DeterministicReport"),
            instrument_modules_without_local_sources: flag_of(
                root,
                "InstrumentModulesWithoutLocalSources",
            ),
        };

        // Observational only; must never affect the resolution outcome.
        debug!(tool = %self.tool_name, settings = ?settings, "resolved coverage settings");

        Ok(settings)
    }
}

/// Raw text of the named child element, if present.
fn text_of<'a>(root: Option<&'a ConfigNode>, name: &str) -> Option<&'a str> {
    root.and_then(|node| node.child(name)).and_then(ConfigNode::text)
}

/// Normalized token list of the named child element; absent resolves empty.
fn list_of(root: Option<&ConfigNode>, name: &str) -> Vec<String> {
    split_list(text_of(root, name)).unwrap_or_default()
}

/// Lenient boolean of the named child element; absent resolves `false`.
fn flag_of(root: Option<&ConfigNode>, name: &str) -> bool {
    parse_flag(text_of(root, name))
}
