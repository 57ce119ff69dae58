//! The codec and factory contracts.

use std::sync::Arc;

use crate::error::CodecError;

/// Bidirectional converter between a Unicode string and a byte sequence.
///
/// Implementations view the string as its sequence of UTF-16 code units, the
/// unit the built-in algorithms are defined over. Encode and decode are pure:
/// no observable side effects beyond appending to a caller-supplied buffer.
pub trait Codec: Send + Sync {
	/// Encodes `text` and appends the resulting bytes to `buf`.
	///
	/// Prior contents of `buf` are left untouched.
	fn encode_into(&self, text: &str, buf: &mut Vec<u8>) -> Result<(), CodecError>;

	/// Encodes `text` into a fresh buffer.
	fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
		let mut buf = Vec::new();
		self.encode_into(text, &mut buf)?;
		Ok(buf)
	}

	/// Decodes `bytes` into a string.
	///
	/// Behavior on malformed input is implementation-defined; the built-in
	/// codecs decode best-effort rather than fail (see their module docs).
	fn decode(&self, bytes: &[u8]) -> Result<String, CodecError>;
}

/// Produces [`Codec`] instances and declares which charset names it supports.
pub trait CodecFactory: Send + Sync {
	/// Returns a codec for `charset`.
	///
	/// `None` means the caller requested no particular charset; factories
	/// serving a single charset ignore the argument. Creation must be
	/// idempotent: implementations are expected to hand out a shared
	/// instance per charset rather than allocate per call.
	fn create(&self, charset: Option<&str>) -> Arc<dyn Codec>;

	/// Tests whether this factory's codec supports `charset`.
	///
	/// Pure predicate; must not mutate any registry state. A factory that
	/// claims every charset (a catch-all) must be registered at order 1000
	/// or above so charset-specific factories are probed first.
	fn available(&self, charset: &str) -> bool;
}
