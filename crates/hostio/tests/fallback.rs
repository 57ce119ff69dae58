//! End-to-end coverage of the host fallback against a real registry.

use std::process::Command;
use std::sync::Arc;
use std::time::{Duration, Instant};

use recode_codec::{Codec, CodecError, CodecFactory, Utf8Factory, Utf16LeCodec, Utf16LeFactory};
use recode_hostio::{FACTORY_NAME, HostCodecFactory, register_fallback};
use recode_registry::Registry;

fn converter_available() -> bool {
	Command::new("iconv")
		.args(["-f", "UTF-8", "-t", "UTF-16LE"])
		.output()
		.is_ok_and(|output| output.status.success())
}

fn seeded_registry() -> Registry {
	let registry = Registry::new();
	registry.register_with("UTF-8", Arc::new(Utf8Factory), 100, true);
	registry.register("UTF-16LE", Arc::new(Utf16LeFactory));
	register_fallback(&registry);
	registry
}

#[test]
fn fallback_catches_only_unclaimed_charsets() {
	let registry = seeded_registry();

	// Built-ins keep winning their own aliases.
	let resolved = registry.resolve(Some("utf-8")).expect("utf-8 resolves");
	let builtin: Arc<dyn CodecFactory> = registry.get_factory(Some("UTF-8")).unwrap();
	assert!(Arc::ptr_eq(&resolved, &builtin));

	// Anything else lands on the fallback.
	let resolved = registry.resolve(Some("KOI8-R")).expect("fallback resolves");
	let fallback = registry.get_factory(Some(FACTORY_NAME)).unwrap();
	assert!(Arc::ptr_eq(&resolved, &fallback));
}

#[test]
fn fallback_registry_create_yields_host_codec() {
	let registry = seeded_registry();
	assert!(registry.create(Some("IBM437")).is_some());
}

#[test]
fn host_conversion_roundtrip_matches_builtin() {
	if !converter_available() {
		eprintln!("skipping: iconv not on PATH");
		return;
	}
	let dir = tempfile::tempdir().unwrap();
	let factory = HostCodecFactory::with_scratch_path(dir.path().join("work.tmp"));
	let codec = factory.codec_for(Some("UTF-16LE"));

	let encoded = codec.encode("hello").unwrap();
	assert_eq!(encoded, Utf16LeCodec.encode("hello").unwrap());
	assert_eq!(codec.decode(&encoded).unwrap(), "hello");
}

#[test]
fn host_encode_appends_to_buffer() {
	if !converter_available() {
		eprintln!("skipping: iconv not on PATH");
		return;
	}
	let dir = tempfile::tempdir().unwrap();
	let factory = HostCodecFactory::with_scratch_path(dir.path().join("work.tmp"));
	let codec = factory.codec_for(Some("UTF-8"));

	let mut buf = vec![0x01];
	codec.encode_into("A", &mut buf).unwrap();
	assert_eq!(buf, [0x01, 0x41]);
}

#[test]
fn unknown_charset_surfaces_host_error() {
	if !converter_available() {
		eprintln!("skipping: iconv not on PATH");
		return;
	}
	let dir = tempfile::tempdir().unwrap();
	let factory = HostCodecFactory::with_scratch_path(dir.path().join("work.tmp"));
	let codec = factory.codec_for(Some("definitely-not-a-charset"));

	let err = codec.encode("hi").unwrap_err();
	assert!(matches!(err, CodecError::Host(_)), "unexpected error: {err}");
}

#[test]
fn scratch_file_is_deleted_after_debounce() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("work.tmp");
	let factory = HostCodecFactory::with_scratch_path(path.clone());
	let codec = factory.codec_for(Some("UTF-8"));

	// The conversion may fail without the host converter; the scratch file
	// is written and its deferred deletion armed either way.
	let _ = codec.encode("hello");

	let deadline = Instant::now() + Duration::from_secs(5);
	while path.exists() && Instant::now() < deadline {
		std::thread::sleep(Duration::from_millis(20));
	}
	assert!(!path.exists(), "scratch file should be gone after the debounce delay");
}
