//! UTF-8 codec operating on UTF-16 code units.
//!
//! # Invariants
//!
//! - The encoder walks code units, not decoded codepoints: a surrogate pair
//!   becomes two independent 3-byte sequences (CESU-8 style), never one
//!   4-byte sequence.
//! - The decoder assembles 2-byte (`C0..=DF` lead) and 3-byte (`E0..=EF`
//!   lead) sequences only. Any other byte, 4-byte `F0..=F7` leads included,
//!   passes through as a literal Latin-1 code unit.

use std::sync::{Arc, LazyLock};

use crate::error::CodecError;
use crate::traits::{Codec, CodecFactory};

/// Names accepted by [`Utf8Factory::available`], compared case-insensitively.
const ALIASES: &[&str] = &["utf-8", "utf8"];

/// UTF-8 byte-order mark, skipped on decode, never written on encode.
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// The UTF-8 codec. Stateless; share via [`Utf8Factory`].
pub struct Utf8Codec;

impl Codec for Utf8Codec {
	fn encode_into(&self, text: &str, buf: &mut Vec<u8>) -> Result<(), CodecError> {
		for unit in text.encode_utf16() {
			if unit < 0x80 {
				buf.push(unit as u8);
			} else if unit > 0x07FF {
				buf.push(0xE0 | ((unit >> 12) & 0x0F) as u8);
				buf.push(0x80 | ((unit >> 6) & 0x3F) as u8);
				buf.push(0x80 | (unit & 0x3F) as u8);
			} else {
				buf.push(0xC0 | (unit >> 6) as u8);
				buf.push(0x80 | (unit & 0x3F) as u8);
			}
		}
		Ok(())
	}

	fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
		let rest = bytes.strip_prefix(&BOM).unwrap_or(bytes);
		let mut units: Vec<u16> = Vec::with_capacity(rest.len());
		let mut i = 0;
		while i < rest.len() {
			let lead = rest[i];
			match lead {
				0xC0..=0xDF if is_continuation(rest.get(i + 1)) => {
					units.push((u16::from(lead & 0x1F) << 6) | u16::from(rest[i + 1] & 0x3F));
					i += 2;
				}
				0xE0..=0xEF if is_continuation(rest.get(i + 1)) && is_continuation(rest.get(i + 2)) => {
					units.push(
						(u16::from(lead & 0x0F) << 12)
							| (u16::from(rest[i + 1] & 0x3F) << 6)
							| u16::from(rest[i + 2] & 0x3F),
					);
					i += 3;
				}
				// ASCII, unrecognized leads, orphan continuations, truncated
				// sequences: one literal Latin-1 unit.
				_ => {
					units.push(u16::from(lead));
					i += 1;
				}
			}
		}
		Ok(String::from_utf16_lossy(&units))
	}
}

fn is_continuation(byte: Option<&u8>) -> bool {
	matches!(byte, Some(0x80..=0xBF))
}

static INSTANCE: LazyLock<Arc<Utf8Codec>> = LazyLock::new(|| Arc::new(Utf8Codec));

/// Factory handing out the shared [`Utf8Codec`] instance.
pub struct Utf8Factory;

impl CodecFactory for Utf8Factory {
	fn create(&self, _charset: Option<&str>) -> Arc<dyn Codec> {
		INSTANCE.clone()
	}

	fn available(&self, charset: &str) -> bool {
		ALIASES.iter().any(|alias| alias.eq_ignore_ascii_case(charset))
	}
}
