//! Codec delegating conversion to the host converter.

use std::fs;
use std::io::ErrorKind;
use std::process::Command;
use std::sync::Arc;

use recode_codec::{Codec, CodecError};

use crate::scratch::Scratch;

/// Name of the host converter executable.
const CONVERTER: &str = "iconv";

/// Charset of the native string side handed to the converter.
const NATIVE_CHARSET: &str = "UTF-8";

/// Codec for an arbitrary charset, backed by the host converter.
///
/// Conversion round-trips through the owning factory's scratch file: input
/// is written there, the converter reads it, and its stdout is the result.
/// Every use schedules the debounced scratch deletion, failures included;
/// the file handle itself is closed before any error propagates.
pub struct HostCodec {
	charset: String,
	scratch: Arc<Scratch>,
}

impl HostCodec {
	pub(crate) fn new(charset: String, scratch: Arc<Scratch>) -> Self {
		Self { charset, scratch }
	}

	/// The charset this codec converts to and from.
	pub fn charset(&self) -> &str {
		&self.charset
	}

	fn convert(&self, input: &[u8], from: &str, to: &str) -> Result<Vec<u8>, CodecError> {
		self.scratch.schedule_cleanup();
		fs::write(self.scratch.path(), input)?;
		let output = Command::new(CONVERTER)
			.arg("-f")
			.arg(from)
			.arg("-t")
			.arg(to)
			.arg(self.scratch.path())
			.output()
			.map_err(|err| {
				if err.kind() == ErrorKind::NotFound {
					CodecError::Host(format!("{CONVERTER} is not available on PATH"))
				} else {
					CodecError::Io(err)
				}
			})?;
		if !output.status.success() {
			let stderr = String::from_utf8_lossy(&output.stderr);
			return Err(CodecError::Host(format!(
				"{CONVERTER} failed converting {from} to {to}: {}",
				stderr.trim()
			)));
		}
		tracing::debug!(from, to, input_len = input.len(), output_len = output.stdout.len(), "host conversion");
		Ok(output.stdout)
	}
}

impl Codec for HostCodec {
	fn encode_into(&self, text: &str, buf: &mut Vec<u8>) -> Result<(), CodecError> {
		let bytes = self.convert(text.as_bytes(), NATIVE_CHARSET, &self.charset)?;
		buf.extend_from_slice(&bytes);
		Ok(())
	}

	fn decode(&self, bytes: &[u8]) -> Result<String, CodecError> {
		let out = self.convert(bytes, &self.charset, NATIVE_CHARSET)?;
		String::from_utf8(out)
			.map_err(|err| CodecError::Host(format!("{CONVERTER} produced invalid UTF-8: {err}")))
	}
}
