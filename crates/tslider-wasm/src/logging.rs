//! Console logging.
//!
//! Installs a `tracing-subscriber` fmt subscriber whose writer hands each
//! formatted event to the `console` method matching its level. Timestamps
//! are off: `wasm32-unknown-unknown` has no system clock.
//!
//! | Level | WASM | Non-WASM |
//! |-------|------|----------|
//! | `ERROR` | `console.error` | `eprintln!` |
//! | `WARN` | `console.warn` | `eprintln!` |
//! | `INFO` | `console.info` | `eprintln!` |
//! | `DEBUG`, `TRACE` | `console.debug` | `eprintln!` |

use std::io;
use std::sync::Once;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console function an event is written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
	Error,
	Warn,
	Info,
	Debug,
}

impl ConsoleMethod {
	pub fn for_level(level: &Level) -> Self {
		match *level {
			Level::ERROR => Self::Error,
			Level::WARN => Self::Warn,
			Level::INFO => Self::Info,
			_ => Self::Debug,
		}
	}
}

/// [`MakeWriter`] producing one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

/// Buffers one formatted event and emits it on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
	method: ConsoleMethod,
	buffer: Vec<u8>,
}

impl ConsoleWriter {
	pub fn new(method: ConsoleMethod) -> Self {
		Self {
			method,
			buffer: Vec::new(),
		}
	}

	/// Buffered text without the trailing newline the formatter adds.
	pub fn message(&self) -> String {
		String::from_utf8_lossy(&self.buffer).trim_end().to_string()
	}
}

impl io::Write for ConsoleWriter {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		self.buffer.extend_from_slice(buf);
		Ok(buf.len())
	}

	fn flush(&mut self) -> io::Result<()> {
		Ok(())
	}
}

impl Drop for ConsoleWriter {
	fn drop(&mut self) {
		let message = self.message();
		if !message.is_empty() {
			emit(self.method, &message);
		}
	}
}

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
	type Writer = ConsoleWriter;

	fn make_writer(&'a self) -> Self::Writer {
		ConsoleWriter::new(ConsoleMethod::Info)
	}

	fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
		ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
	}
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, message: &str) {
	let message = wasm_bindgen::JsValue::from_str(message);
	match method {
		ConsoleMethod::Error => web_sys::console::error_1(&message),
		ConsoleMethod::Warn => web_sys::console::warn_1(&message),
		ConsoleMethod::Info => web_sys::console::info_1(&message),
		ConsoleMethod::Debug => web_sys::console::debug_1(&message),
	}
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(method: ConsoleMethod, message: &str) {
	eprintln!("[{method:?}] {message}");
}

/// Installs the console subscriber and, with the `console_error_panic_hook`
/// feature, the panic hook. Later calls do nothing.
pub fn init() {
	static INIT: Once = Once::new();
	INIT.call_once(|| {
		#[cfg(feature = "console_error_panic_hook")]
		console_error_panic_hook::set_once();

		let max_level = if cfg!(debug_assertions) {
			Level::DEBUG
		} else {
			Level::WARN
		};
		let installed = tracing_subscriber::fmt()
			.with_writer(ConsoleMakeWriter)
			.with_max_level(max_level)
			.with_ansi(false)
			.without_time()
			.try_init();
		if installed.is_err() {
			tracing::debug!("a global tracing subscriber is already installed");
		}
	});
}
