//! Catch-all factory backed by the host converter.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use recode_codec::{Codec, CodecFactory};
use recode_registry::Registry;
use rustc_hash::FxHashMap as HashMap;

use crate::codec::HostCodec;
use crate::scratch::Scratch;

/// Name the fallback registers under.
pub const FACTORY_NAME: &str = "fileio";

/// Probe order of the fallback. Catch-all factories must sit past 1000 so
/// every charset-specific factory is probed first.
pub const FALLBACK_ORDER: i32 = 1001;

/// File name of the default scratch file, under the system temp directory.
const SCRATCH_FILE: &str = ".recode-scratch.tmp";

/// Charset assumed when a codec is requested without one.
const DEFAULT_CHARSET: &str = "UTF-8";

/// Factory producing [`HostCodec`]s for any charset name.
///
/// Codecs are cached per charset and share the factory's single scratch
/// file. `available` is true for every name, so instances belong at
/// [`FALLBACK_ORDER`] in a registry.
pub struct HostCodecFactory {
	scratch: Arc<Scratch>,
	cache: Mutex<HashMap<String, Arc<HostCodec>>>,
}

impl HostCodecFactory {
	/// Creates a factory with the scratch file in the system temp directory.
	pub fn new() -> Self {
		Self::with_scratch_path(env::temp_dir().join(SCRATCH_FILE))
	}

	/// Creates a factory using `path` as its scratch file.
	pub fn with_scratch_path(path: PathBuf) -> Self {
		Self {
			scratch: Scratch::new(path),
			cache: Mutex::new(HashMap::default()),
		}
	}

	/// The scratch file location in use.
	pub fn scratch_path(&self) -> &Path {
		self.scratch.path()
	}

	/// Returns the cached codec for `charset`, creating it on first request.
	///
	/// `None` falls back to UTF-8, for callers that registered this factory
	/// as their default.
	pub fn codec_for(&self, charset: Option<&str>) -> Arc<HostCodec> {
		let charset = charset.unwrap_or(DEFAULT_CHARSET);
		let mut cache = self.cache.lock();
		let codec = cache.entry(charset.to_owned()).or_insert_with(|| {
			Arc::new(HostCodec::new(charset.to_owned(), Arc::clone(&self.scratch)))
		});
		Arc::clone(codec)
	}
}

impl Default for HostCodecFactory {
	fn default() -> Self {
		Self::new()
	}
}

impl CodecFactory for HostCodecFactory {
	fn create(&self, charset: Option<&str>) -> Arc<dyn Codec> {
		self.codec_for(charset)
	}

	fn available(&self, _charset: &str) -> bool {
		true
	}
}

/// Registers the host fallback into `registry` as the lowest-priority
/// catch-all, under [`FACTORY_NAME`].
pub fn register_fallback(registry: &Registry) {
	registry.register_with(
		FACTORY_NAME,
		Arc::new(HostCodecFactory::new()),
		FALLBACK_ORDER,
		false,
	);
}
