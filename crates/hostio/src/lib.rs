//! Host-backed fallback codec.
//!
//! The built-in codecs cover UTF-8 and UTF-16LE; everything else is
//! delegated to the host environment's converter (`iconv`) by round-tripping
//! data through a reusable scratch file. [`HostCodecFactory`] claims every
//! charset name, so it registers at the bottom of the probe order
//! ([`FALLBACK_ORDER`]) where it only catches names no specific factory
//! supports.

/// The codec delegating to the host converter.
pub mod codec;
/// The catch-all factory and registry hookup.
pub mod factory;
mod scratch;

pub use codec::HostCodec;
pub use factory::{FACTORY_NAME, FALLBACK_ORDER, HostCodecFactory, register_fallback};
