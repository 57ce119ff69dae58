//! Ambient process-wide registry seeded with the built-in factories.

use std::sync::{Arc, OnceLock};

use recode_codec::{Utf8Factory, Utf16LeFactory};

use crate::record::DEFAULT_ORDER;
use crate::registry::Registry;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Returns the process-wide registry.
///
/// First access seeds the built-ins: UTF-8 (marked as the default codec) and
/// UTF-16LE, each under its canonical name. Call sites that need isolation,
/// tests above all, should construct a [`Registry`] of their own instead of
/// mutating this one.
pub fn global() -> &'static Registry {
	GLOBAL.get_or_init(|| {
		let registry = Registry::new();
		registry.register_with("UTF-8", Arc::new(Utf8Factory), DEFAULT_ORDER, true);
		registry.register("UTF-16LE", Arc::new(Utf16LeFactory));
		registry
	})
}
