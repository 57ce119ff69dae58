use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use recode_codec::CodecFactory;

/// Probe order assigned by [`Registry::register`](crate::Registry::register)
/// when none is given.
pub const DEFAULT_ORDER: i32 = 100;

/// One registered factory: lookup name, probe order, registration sequence.
///
/// Owned exclusively by the [`Registry`](crate::Registry); callers observe
/// records only through its accessors.
pub struct FactoryRecord {
	pub(crate) name: String,
	pub(crate) factory: Arc<dyn CodecFactory>,
	pub(crate) order: i32,
	pub(crate) seq: u64,
}

impl FactoryRecord {
	/// The name the factory was registered under.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Probe order; lower is probed first.
	pub fn order(&self) -> i32 {
		self.order
	}

	/// The factory itself.
	pub fn factory(&self) -> &Arc<dyn CodecFactory> {
		&self.factory
	}
}

impl fmt::Debug for FactoryRecord {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FactoryRecord")
			.field("name", &self.name)
			.field("order", &self.order)
			.field("seq", &self.seq)
			.finish_non_exhaustive()
	}
}

/// Probe order: ascending `order`; at equal order the most recent
/// registration (higher `seq`) comes first.
pub(crate) fn probe_order(a: &FactoryRecord, b: &FactoryRecord) -> Ordering {
	a.order.cmp(&b.order).then_with(|| b.seq.cmp(&a.seq))
}
