//! Charset-name resolution over priority-ordered factory records.
//!
//! # Invariants
//!
//! - The record list stays sorted by `(order ascending, seq descending)`:
//!   lower order probes first, and at equal order the most recent
//!   registration wins.
//! - The resolution cache never outlives a mutation; register and unregister
//!   both clear it entirely, since a priority change can change which
//!   factory wins a previously cached charset.
//! - State operations are total: absence is a `None` result, never a panic.

use std::sync::Arc;

use parking_lot::Mutex;
use recode_codec::{Codec, CodecFactory};
use rustc_hash::FxHashMap as HashMap;

use crate::record::{DEFAULT_ORDER, FactoryRecord, probe_order};


#[derive(Default)]
struct Inner {
	/// All records, sorted by [`probe_order`].
	records: Vec<Arc<FactoryRecord>>,
	/// Registration-name index for O(1) unregistration.
	by_name: HashMap<String, Arc<FactoryRecord>>,
	/// Charset-name → winning record memoization. Keys are case-sensitive,
	/// exactly as supplied by callers; case folding is the factories'
	/// business.
	cache: HashMap<String, Arc<FactoryRecord>>,
	/// Factory used when no charset is requested.
	default: Option<Arc<dyn CodecFactory>>,
	next_seq: u64,
}

impl Inner {
	fn remove_record(&mut self, name: &str) -> bool {
		let Some(record) = self.by_name.remove(name) else {
			return false;
		};
		self.records.retain(|r| !Arc::ptr_eq(r, &record));
		true
	}
}

/// Priority-ordered registry of charset codec factories.
///
/// Mutation re-sorts the record list and flushes the cache; repeated
/// resolution of one charset is O(1). All mutable state sits behind a single
/// mutex because resolution writes the cache.
pub struct Registry {
	inner: Mutex<Inner>,
}

impl Registry {
	/// Creates an empty registry: no factories, no default.
	pub fn new() -> Self {
		Self {
			inner: Mutex::new(Inner::default()),
		}
	}

	/// Registers `factory` under `name` at [`DEFAULT_ORDER`], not as default.
	pub fn register(&self, name: impl Into<String>, factory: Arc<dyn CodecFactory>) {
		self.register_with(name, factory, DEFAULT_ORDER, false);
	}

	/// Registers `factory` under `name`, replacing any record with the same
	/// name.
	///
	/// `order` decides probe priority (lower first); at equal order the most
	/// recent registration wins. `as_default` additionally makes this the
	/// factory used when no charset is requested, replacing any previous
	/// default. Always clears the resolution cache. Never fails.
	pub fn register_with(
		&self,
		name: impl Into<String>,
		factory: Arc<dyn CodecFactory>,
		order: i32,
		as_default: bool,
	) {
		let name = name.into();
		let mut inner = self.inner.lock();
		inner.remove_record(&name);
		let seq = inner.next_seq;
		inner.next_seq += 1;
		let record = Arc::new(FactoryRecord {
			name: name.clone(),
			factory: Arc::clone(&factory),
			order,
			seq,
		});
		inner.by_name.insert(name.clone(), Arc::clone(&record));
		inner.records.push(record);
		inner.records.sort_by(|a, b| probe_order(a, b));
		if as_default {
			inner.default = Some(factory);
		}
		inner.cache.clear();
		tracing::debug!(name = %name, order, as_default, "registered codec factory");
	}

	/// Removes the record registered under `name`; no-op when absent.
	///
	/// Clears the resolution cache on removal. The default-factory reference
	/// is left untouched even when it points at the removed factory; register
	/// a replacement with `as_default` to swap it.
	pub fn unregister(&self, name: &str) {
		let mut inner = self.inner.lock();
		if inner.remove_record(name) {
			inner.cache.clear();
			tracing::debug!(name = %name, "unregistered codec factory");
		}
	}

	/// Resolves the factory responsible for `charset`.
	///
	/// `None` requests the default factory; asking for it before any
	/// `as_default` registration is a configuration error and yields `None`
	/// (with an error-level trace). For a named charset, a cached record is
	/// returned directly; otherwise the ordered list is probed with
	/// [`CodecFactory::available`] and the first match is cached. An
	/// unsupported charset yields `None`.
	pub fn resolve(&self, charset: Option<&str>) -> Option<Arc<dyn CodecFactory>> {
		let mut inner = self.inner.lock();
		let Some(charset) = charset else {
			if inner.default.is_none() {
				tracing::error!("default codec requested before a default factory was registered");
			}
			return inner.default.clone();
		};
		if let Some(record) = inner.cache.get(charset) {
			return Some(Arc::clone(&record.factory));
		}
		let record = inner
			.records
			.iter()
			.find(|record| record.factory.available(charset))
			.cloned()?;
		let factory = Arc::clone(&record.factory);
		inner.cache.insert(charset.to_owned(), record);
		Some(factory)
	}

	/// Resolves and instantiates a codec for `charset` in one step.
	pub fn create(&self, charset: Option<&str>) -> Option<Arc<dyn Codec>> {
		self.resolve(charset).map(|factory| factory.create(charset))
	}

	/// Looks up a factory by registration name; `None` requests the default.
	pub fn get_factory(&self, name: Option<&str>) -> Option<Arc<dyn CodecFactory>> {
		let inner = self.inner.lock();
		match name {
			Some(name) => inner
				.by_name
				.get(name)
				.map(|record| Arc::clone(&record.factory)),
			None => inner.default.clone(),
		}
	}

	/// Registered factory names, in probe order.
	pub fn factory_names(&self) -> Vec<String> {
		self.inner
			.lock()
			.records
			.iter()
			.map(|record| record.name.clone())
			.collect()
	}

	/// Number of registered factories.
	pub fn len(&self) -> usize {
		self.inner.lock().records.len()
	}

	/// Whether no factory is registered.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl Default for Registry {
	fn default() -> Self {
		Self::new()
	}
}
