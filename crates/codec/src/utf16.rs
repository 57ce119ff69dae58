//! UTF-16LE codec.
//!
//! Two bytes per code unit, low byte first. The encoder never writes a
//! byte-order mark; the decoder skips a little-endian one (`FF FE`) and
//! silently drops a trailing odd byte.

use std::sync::{Arc, LazyLock};

use crate::error::CodecError;
use crate::traits::{Codec, CodecFactory};

/// Names accepted by [`Utf16LeFactory::available`], compared case-insensitively.
const ALIASES: &[&str] = &["utf-16le", "utf-16", "utf16le", "utf16", "unicode"];

/// Little-endian byte-order mark.
const BOM: [u8; 2] = [0xFF, 0xFE];

/// The UTF-16LE codec. Stateless; share via [`Utf16LeFactory`].
pub struct Utf16LeCodec;

impl Codec for Utf16LeCodec {
	fn encode_into(&self, text: &str, buf: &mut Vec<u8>) -> Result<(), CodecError> {
		for unit in text.encode_utf16() {
			buf.push(unit as u8);
			buf.push((unit >> 8) as u8);
		}
		Ok(())
	}

	fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
		let rest = bytes.strip_prefix(&BOM).unwrap_or(bytes);
		// chunks_exact ignores the remainder, dropping a trailing odd byte.
		let units: Vec<u16> = rest
			.chunks_exact(2)
			.map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
			.collect();
		Ok(String::from_utf16_lossy(&units))
	}
}

static INSTANCE: LazyLock<Arc<Utf16LeCodec>> = LazyLock::new(|| Arc::new(Utf16LeCodec));

/// Factory handing out the shared [`Utf16LeCodec`] instance.
pub struct Utf16LeFactory;

impl CodecFactory for Utf16LeFactory {
	fn create(&self, _charset: Option<&str>) -> Arc<dyn Codec> {
		INSTANCE.clone()
	}

	fn available(&self, charset: &str) -> bool {
		ALIASES.iter().any(|alias| alias.eq_ignore_ascii_case(charset))
	}
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;

	use super::*;

	#[test]
	fn test_little_endian_order() {
		assert_eq!(Utf16LeCodec.encode("A").unwrap(), [0x41, 0x00]);
	}

	#[test]
	fn test_ascii_roundtrip() {
		let encoded = Utf16LeCodec.encode("hello").unwrap();
		assert_eq!(Utf16LeCodec.decode(&encoded).unwrap(), "hello");
	}

	#[test]
	fn test_bom_skipped_on_decode() {
		assert_eq!(Utf16LeCodec.decode(&[0xFF, 0xFE, 0x41, 0x00]).unwrap(), "A");
	}

	#[test]
	fn test_bom_not_written_on_encode() {
		assert_eq!(Utf16LeCodec.encode("A").unwrap(), [0x41, 0x00]);
	}

	#[test]
	fn test_multibyte_units() {
		// U+3042 HIRAGANA A.
		assert_eq!(Utf16LeCodec.encode("\u{3042}").unwrap(), [0x42, 0x30]);
		assert_eq!(Utf16LeCodec.decode(&[0x42, 0x30]).unwrap(), "\u{3042}");
	}

	#[test]
	fn test_surrogate_pair_roundtrip() {
		let encoded = Utf16LeCodec.encode("\u{1F496}").unwrap();
		assert_eq!(encoded, [0x3D, 0xD8, 0x96, 0xDC]);
		assert_eq!(Utf16LeCodec.decode(&encoded).unwrap(), "\u{1F496}");
	}

	#[test]
	fn test_trailing_odd_byte_dropped() {
		assert_eq!(Utf16LeCodec.decode(&[0x41, 0x00, 0x42]).unwrap(), "A");
	}

	#[test]
	fn test_buffer_append_preserves_prefix() {
		let mut buf = vec![0xFF];
		Utf16LeCodec.encode_into("A", &mut buf).unwrap();
		assert_eq!(buf, [0xFF, 0x41, 0x00]);
	}

	#[test]
	fn test_empty_input() {
		assert_eq!(Utf16LeCodec.encode("").unwrap(), Vec::<u8>::new());
		assert_eq!(Utf16LeCodec.decode(&[]).unwrap(), "");
	}

	#[test]
	fn test_factory_aliases() {
		for name in ["utf-16", "UTF16", "utf-16le", "Utf16Le", "UNICODE"] {
			assert!(Utf16LeFactory.available(name), "expected {name} to match");
		}
		assert!(!Utf16LeFactory.available("utf-8"));
		assert!(!Utf16LeFactory.available("utf-16be"));
	}

	#[test]
	fn test_factory_returns_shared_instance() {
		let a = Utf16LeFactory.create(Some("unicode"));
		let b = Utf16LeFactory.create(None);
		assert!(Arc::ptr_eq(&a, &b));
	}

	proptest! {
		/// ASCII round-trip: decode(encode(s)) == s for printable ASCII.
		#[test]
		fn prop_ascii_roundtrip(text in "[ -~]*") {
			let encoded = Utf16LeCodec.encode(&text).unwrap();
			prop_assert_eq!(Utf16LeCodec.decode(&encoded).unwrap(), text);
		}
	}
}
