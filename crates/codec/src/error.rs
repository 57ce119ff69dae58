use thiserror::Error;

/// Errors surfaced through the [`Codec`](crate::Codec) contract.
///
/// The built-in codecs are pure byte/char transformations and never construct
/// these; the variants exist so implementations that delegate to the host
/// environment can propagate their failures through the same trait.
#[derive(Debug, Error)]
pub enum CodecError {
	/// File or pipe I/O toward the host converter failed.
	#[error("I/O error: {0}")]
	Io(#[from] std::io::Error),
	/// The host converter is missing, exited with an error, or produced
	/// output the codec cannot use.
	#[error("host converter failed: {0}")]
	Host(String),
}
