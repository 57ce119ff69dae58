//! Charset-name → codec-factory resolution.
//!
//! A [`Registry`] owns a priority-ordered set of [`CodecFactory`]
//! registrations, a default factory, and a per-charset resolution cache.
//! Registries are plain values and any number can coexist; a process-wide
//! instance is available through [`global`] for call sites that just want
//! the built-ins.
//!
//! [`CodecFactory`]: recode_codec::CodecFactory

/// Ambient process-wide registry.
pub mod global;
/// Factory registration records and probe ordering.
pub mod record;
/// The registry proper.
pub mod registry;

pub use global::global;
pub use record::{DEFAULT_ORDER, FactoryRecord};
pub use registry::Registry;
