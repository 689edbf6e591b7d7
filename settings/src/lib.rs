//! Settings resolution for the linecov coverage collector.
//!
//! This crate turns a loosely structured configuration tree plus the host's
//! list of candidate test modules into one validated, immutable
//! [`record::CoverageSettings`] record that drives the downstream
//! instrumentation and report pipeline. The architecture enforces a strict
//! separation:
//!
//! - **[`coerce`]**: Pure text coercion (token normalization, lenient
//!   boolean parsing). No I/O, fully testable in isolation.
//! - **[`node`]**: The configuration tree the resolver reads. Lookup is an
//!   explicit capability (`child` by exact name), so the resolver never
//!   depends on how the host serialized its configuration.
//! - **[`resolver`]**: The single entry point, [`resolver::SettingsResolver`].
//!   Validates test-module input, extracts each field with its own
//!   defaulting rule, assembles the record.
//!
//! Resolution is synchronous and side-effect-free apart from one optional
//! debug-level diagnostic line; invocations share no state and may run
//! concurrently.

pub mod coerce;
pub mod logging;
pub mod node;
pub mod record;
pub mod resolver;
