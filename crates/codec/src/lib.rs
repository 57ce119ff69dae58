//! Charset codec contracts and the built-in UTF-8/UTF-16LE codecs.
//!
//! A [`Codec`] converts between a Unicode string and a byte sequence; a
//! [`CodecFactory`] produces codecs for charset names and reports which names
//! it supports. Factories are meant to be registered into a resolution
//! registry (see the `recode-registry` crate), but the contracts here carry
//! no registry dependency.

/// Shared codec error type.
pub mod error;
/// Codec and factory contracts.
pub mod traits;
/// UTF-16LE codec and factory.
pub mod utf16;
/// UTF-8 codec and factory.
pub mod utf8;

pub use error::CodecError;
pub use traits::{Codec, CodecFactory};
pub use utf16::{Utf16LeCodec, Utf16LeFactory};
pub use utf8::{Utf8Codec, Utf8Factory};
