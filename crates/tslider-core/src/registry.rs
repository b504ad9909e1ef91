//! Process-wide slider registry.
//!
//! The registry is the single owner of the host and of every mounted
//! slider. It carries an explicit lifecycle:
//!
//! ```text
//! Uninitialized --bootstrap(v > 0)--> Initialized(v) --bootstrap(w > v)--> Initialized(w)
//! ```
//!
//! A bootstrap with a version at or below the stored one is a no-op, so a
//! library loaded twice does not wipe the sliders of the first load. A
//! higher version replaces the library data and starts over with an empty
//! slider list. Sliders mounted before the upgrade are no longer listed but
//! keep running: their listeners, timers and handles still reach them.
//!
//! All page-facing entry points run inside [`fail_soft`]: they never
//! return errors, they log them.

use serde_json::{Value, json};

use crate::config::SliderOptions;
use crate::dispatch::fail_soft;
use crate::error::{Result, SliderError};
use crate::host::{EventOutcome, Host, ListenerKey, PointerInput, SliderId, TimerKey};
use crate::slider::Slider;
use crate::style::STYLESHEET;

/// Name under which the library data is mirrored on the page.
pub const GLOBAL_KEY: &str = "expLibraryData";

/// Version bootstrapped by the browser bindings at load.
pub const LIBRARY_VERSION: u32 = 1;

/// Library data used when the loader supplies none.
pub fn default_library_data() -> Value {
	json!({ "data": {}, "logs": [], "tmp": {} })
}

/// Registry lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
	Uninitialized,
	Initialized { version: u32 },
}

/// Owns the host and all sliders created through it.
#[derive(Debug)]
pub struct Registry<H: Host> {
	host: H,
	lifecycle: Lifecycle,
	data: Value,
	sliders: Vec<Slider<H::Node>>,
	unlisted: Vec<Slider<H::Node>>,
	next_serial: u64,
}

impl<H: Host> Registry<H> {
	pub fn new(host: H) -> Self {
		Self {
			host,
			lifecycle: Lifecycle::Uninitialized,
			data: default_library_data(),
			sliders: Vec::new(),
			unlisted: Vec::new(),
			next_serial: 0,
		}
	}

	pub fn host(&self) -> &H {
		&self.host
	}

	pub fn lifecycle(&self) -> Lifecycle {
		self.lifecycle
	}

	/// Stored version; `0` before the first bootstrap.
	pub fn version(&self) -> u32 {
		match self.lifecycle {
			Lifecycle::Uninitialized => 0,
			Lifecycle::Initialized { version } => version,
		}
	}

	/// Library data object.
	pub fn data(&self) -> &Value {
		&self.data
	}

	/// Initializes or upgrades the registry.
	///
	/// Returns `false` without touching anything when `version` is not
	/// strictly greater than the stored one. Otherwise merges `initial`
	/// into the data object (top-level keys overwrite), stores the
	/// version, unlists existing sliders and injects the stylesheet.
	pub fn bootstrap(&mut self, initial: Value, version: u32) -> bool {
		let stored = self.version();
		if stored >= version {
			tracing::warn!(stored, requested = version, "slider library already bootstrapped");
			return false;
		}

		match (&mut self.data, initial) {
			(Value::Object(data), Value::Object(initial)) => data.extend(initial),
			(data, initial) => *data = initial,
		}
		self.lifecycle = Lifecycle::Initialized { version };
		self.unlisted.append(&mut self.sliders);

		let host = &self.host;
		fail_soft("injecting stylesheet", || Ok(host.inject_stylesheet(STYLESHEET)?));
		tracing::debug!(version, "slider library bootstrapped");
		true
	}

	/// Returns to `Uninitialized`, stopping and dropping every slider.
	pub fn reset(&mut self) {
		for mut slider in self.sliders.drain(..).chain(self.unlisted.drain(..)) {
			slider.stop_autoplay(&self.host);
		}
		self.lifecycle = Lifecycle::Uninitialized;
		self.data = default_library_data();
	}

	/// Mounts a slider on the element matching `selector`.
	///
	/// Returns `None` and logs when mounting fails; nothing is registered
	/// in that case.
	pub fn initialize_slider(
		&mut self,
		selector: &str,
		options: SliderOptions<H::Node>,
	) -> Option<SliderId> {
		fail_soft("initializing slider", || {
			let Lifecycle::Initialized { version } = self.lifecycle else {
				return Err(SliderError::NotBootstrapped);
			};
			let id = SliderId {
				generation: version,
				serial: self.next_serial,
			};
			self.next_serial += 1;
			let slider = Slider::mount(&self.host, id, selector, options)?;
			self.sliders.push(slider);
			Ok(id)
		})
	}

	/// Routes a native listener callback to its slider.
	pub fn dispatch(&mut self, key: ListenerKey, input: PointerInput<H::Node>) -> EventOutcome {
		let outcome = key.binding.outcome();
		self.run(key.slider, "handling slider event", |slider, host| {
			slider.handle(host, key.binding, input)
		});
		outcome
	}

	/// Routes a timer callback to its slider.
	pub fn fire(&mut self, key: TimerKey) {
		self.run(key.slider, "running slider timer", |slider, host| {
			slider.fire(host, key.task)
		});
	}

	/// Control surface for one slider.
	pub fn handle(&mut self, id: SliderId) -> Option<SliderHandle<'_, H>> {
		if !self.contains(id) {
			return None;
		}
		Some(SliderHandle { registry: self, id })
	}

	/// Ids of all listed sliders, in creation order.
	pub fn ids(&self) -> Vec<SliderId> {
		self.sliders.iter().map(Slider::id).collect()
	}

	/// Any live slider, listed or mounted before the last upgrade.
	pub fn slider(&self, id: SliderId) -> Option<&Slider<H::Node>> {
		self.sliders
			.iter()
			.chain(&self.unlisted)
			.find(|slider| slider.id() == id)
	}

	/// Whether `id` is in the current slider list.
	pub fn is_listed(&self, id: SliderId) -> bool {
		self.sliders.iter().any(|slider| slider.id() == id)
	}

	pub fn len(&self) -> usize {
		self.sliders.len()
	}

	pub fn is_empty(&self) -> bool {
		self.sliders.is_empty()
	}

	fn contains(&self, id: SliderId) -> bool {
		self.slider(id).is_some()
	}

	fn run<T>(
		&mut self,
		id: SliderId,
		context: &'static str,
		op: impl FnOnce(&mut Slider<H::Node>, &H) -> Result<T>,
	) -> Option<T> {
		let Self {
			host,
			sliders,
			unlisted,
			..
		} = self;
		let Some(slider) = sliders
			.iter_mut()
			.chain(unlisted.iter_mut())
			.find(|slider| slider.id() == id)
		else {
			tracing::debug!(slider = %id, context, "ignoring callback for unknown slider");
			return None;
		};
		fail_soft(context, || op(slider, host))
	}
}

/// Borrowed control surface of one registered slider.
pub struct SliderHandle<'a, H: Host> {
	registry: &'a mut Registry<H>,
	id: SliderId,
}

impl<H: Host> SliderHandle<'_, H> {
	pub fn id(&self) -> SliderId {
		self.id
	}

	/// The slider's container element.
	pub fn container(&self) -> Option<&H::Node> {
		self.registry.slider(self.id).map(Slider::container)
	}

	pub fn current_index(&self) -> Option<usize> {
		self.registry.slider(self.id).map(Slider::current_index)
	}

	pub fn next(&mut self) {
		self.registry
			.run(self.id, "navigating to slide", |slider, host| slider.next(host));
	}

	pub fn prev(&mut self) {
		self.registry
			.run(self.id, "navigating to slide", |slider, host| slider.prev(host));
	}

	pub fn go_to(&mut self, index: i64) {
		self.registry.run(self.id, "navigating to slide", |slider, host| {
			slider.go_to(host, index)
		});
	}

	/// Tears the slider down. The handle stays usable.
	pub fn destroy(&mut self) {
		self.registry
			.run(self.id, "destroying slider", |slider, host| slider.destroy(host));
	}
}
