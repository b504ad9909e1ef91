//! The fail-soft boundary.
//!
//! Slider operations propagate errors with `?` up to here and no further.
//! Every entry point the page can reach (initialization, listener and
//! timer callbacks, handle methods) runs inside [`fail_soft`], which logs
//! the failure and returns `None`. Nothing is rolled back: whatever the
//! operation changed before failing stays changed.

use crate::error::Result;

/// Runs `op`, logging and swallowing its error.
pub fn fail_soft<T>(context: &'static str, op: impl FnOnce() -> Result<T>) -> Option<T> {
	match op() {
		Ok(value) => Some(value),
		Err(err) => {
			tracing::error!(context, error = %err, "slider operation failed");
			None
		}
	}
}
