//! Reusable scratch file with debounced deletion.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use std::{fs, thread};

/// Delay between a use of the scratch file and its deletion.
const CLEANUP_DELAY: Duration = Duration::from_millis(100);

/// One reusable scratch file shared by every codec of a factory.
///
/// Each use arms a deferred deletion; arming is debounced so at most one
/// timer is pending at a time. The next use recreates the file
/// transparently.
pub(crate) struct Scratch {
	path: PathBuf,
	cleanup_armed: AtomicBool,
}

impl Scratch {
	pub(crate) fn new(path: PathBuf) -> Arc<Self> {
		Arc::new(Self {
			path,
			cleanup_armed: AtomicBool::new(false),
		})
	}

	pub(crate) fn path(&self) -> &Path {
		&self.path
	}

	/// Arms the deferred deletion timer unless one is already pending.
	pub(crate) fn schedule_cleanup(self: &Arc<Self>) {
		if self.cleanup_armed.swap(true, Ordering::SeqCst) {
			return;
		}
		let scratch = Arc::clone(self);
		thread::spawn(move || {
			thread::sleep(CLEANUP_DELAY);
			scratch.cleanup_armed.store(false, Ordering::SeqCst);
			match fs::remove_file(&scratch.path) {
				Ok(()) => {
					tracing::debug!(path = %scratch.path.display(), "removed scratch file");
				}
				Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
				Err(err) => {
					tracing::warn!(path = %scratch.path.display(), %err, "failed to remove scratch file");
				}
			}
		});
	}
}
