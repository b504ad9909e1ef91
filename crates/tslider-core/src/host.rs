//! Host abstraction: the DOM and timer operations a slider needs.
//!
//! The controller never talks to a browser directly. A host hands it
//! opaque node handles, records listener and timer registrations under
//! the keys below, and later routes native events and timer callbacks
//! back through [`crate::Registry::dispatch`] and [`crate::Registry::fire`].
//!
//! Two hosts exist: the `web-sys` one in `tslider-wasm` and the
//! in-memory [`crate::testing::MockHost`].

use std::fmt;

/// Failure reported by a host operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{operation} failed: {reason}")]
pub struct DomError {
	/// The host operation that failed.
	pub operation: &'static str,
	/// Host-provided description.
	pub reason: String,
}

impl DomError {
	/// Creates a new host error.
	pub fn new(operation: &'static str, reason: impl Into<String>) -> Self {
		Self {
			operation,
			reason: reason.into(),
		}
	}
}

/// Identifies one slider across its lifetime.
///
/// `generation` is the registry version the slider was created under, so
/// ids handed out before a version bump never reach newer sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SliderId {
	/// Registry version at creation.
	pub generation: u32,
	/// Monotonic creation counter.
	pub serial: u64,
}

impl fmt::Display for SliderId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "slider#{}@v{}", self.serial, self.generation)
	}
}

/// Native events the widget listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DomEvent {
	MouseDown,
	MouseMove,
	MouseUp,
	MouseLeave,
	MouseEnter,
	TouchStart,
	TouchMove,
	TouchEnd,
	Click,
}

impl DomEvent {
	/// DOM event name, as passed to `addEventListener`.
	pub fn name(self) -> &'static str {
		match self {
			Self::MouseDown => "mousedown",
			Self::MouseMove => "mousemove",
			Self::MouseUp => "mouseup",
			Self::MouseLeave => "mouseleave",
			Self::MouseEnter => "mouseenter",
			Self::TouchStart => "touchstart",
			Self::TouchMove => "touchmove",
			Self::TouchEnd => "touchend",
			Self::Click => "click",
		}
	}

	/// Passive listener flag. Only `touchstart` is registered passive;
	/// `touchmove` must stay cancellable.
	pub fn passive(self) -> Option<bool> {
		match self {
			Self::TouchStart => Some(true),
			Self::TouchMove => Some(false),
			_ => None,
		}
	}

	/// Whether the event bubbles to ancestors.
	pub fn bubbles(self) -> bool {
		!matches!(self, Self::MouseEnter | Self::MouseLeave)
	}
}

/// The slider handler a native listener is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
	DragStart,
	DragMove,
	DragEnd,
	HoverEnter,
	HoverLeave,
	PrevButton,
	NextButton,
	DotClick,
}

impl Binding {
	/// What the host should do with the native event after dispatch.
	pub fn outcome(self) -> EventOutcome {
		match self {
			Self::PrevButton | Self::NextButton => EventOutcome::PreventDefault,
			_ => EventOutcome::Continue,
		}
	}
}

/// Routing key stored with every listener registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerKey {
	pub slider: SliderId,
	pub binding: Binding,
}

/// Timer callbacks a slider schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTask {
	/// Repeating autoplay advance.
	AutoplayTick,
	/// One-shot resume after user interaction.
	ResumeAutoplay,
}

/// Routing key stored with every timer registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
	pub slider: SliderId,
	pub task: TimerTask,
}

/// Host-issued timer handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Native event data the slider cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerInput<N> {
	/// `clientX` of the mouse, or of the first touch point.
	pub client_x: Option<f64>,
	/// The element the event was dispatched to.
	pub target: Option<N>,
}

impl<N> PointerInput<N> {
	/// Input with no position and no target (hover, touchend).
	pub fn empty() -> Self {
		Self {
			client_x: None,
			target: None,
		}
	}

	/// Input carrying a pointer position.
	pub fn at(client_x: f64) -> Self {
		Self {
			client_x: Some(client_x),
			target: None,
		}
	}

	/// Input carrying an event target.
	pub fn on(target: N) -> Self {
		Self {
			client_x: None,
			target: Some(target),
		}
	}
}

/// Post-dispatch instruction for the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
	Continue,
	PreventDefault,
}

/// DOM operations.
///
/// Methods take `&self`; hosts keep their bookkeeping behind interior
/// mutability because listener and timer callbacks re-enter through the
/// registry, never through the host.
pub trait Dom {
	/// Element handle. Cloning must be cheap and must not copy the element.
	type Node: Clone + PartialEq + fmt::Debug;

	/// `document.querySelector`.
	fn query(&self, selector: &str) -> Option<Self::Node>;
	/// `root.querySelector`.
	fn query_within(&self, root: &Self::Node, selector: &str) -> Option<Self::Node>;
	/// `root.querySelectorAll`, in document order.
	fn query_all_within(&self, root: &Self::Node, selector: &str) -> Vec<Self::Node>;
	fn create_element(&self, tag: &str) -> Result<Self::Node, DomError>;
	fn append_child(&self, parent: &Self::Node, child: &Self::Node) -> Result<(), DomError>;
	fn set_class_name(&self, node: &Self::Node, class_name: &str) -> Result<(), DomError>;
	fn set_text(&self, node: &Self::Node, text: &str) -> Result<(), DomError>;
	/// Sets one inline style property.
	fn set_style(&self, node: &Self::Node, property: &str, value: &str) -> Result<(), DomError>;
	/// `classList.toggle(class, force)`.
	fn toggle_class(&self, node: &Self::Node, class: &str, force: bool) -> Result<(), DomError>;
	fn has_class(&self, node: &Self::Node, class: &str) -> bool;
	/// Writes `dataset[key]`.
	fn set_data(&self, node: &Self::Node, key: &str, value: &str) -> Result<(), DomError>;
	/// Reads `dataset[key]`.
	fn data(&self, node: &Self::Node, key: &str) -> Option<String>;
	/// Rendered width in CSS pixels.
	fn offset_width(&self, node: &Self::Node) -> f64;
	/// Removes every child (`innerHTML = ""`).
	fn clear_children(&self, node: &Self::Node) -> Result<(), DomError>;
	/// Registers a native listener that routes to `key`.
	fn listen(&self, node: &Self::Node, event: DomEvent, key: ListenerKey) -> Result<(), DomError>;
	/// Removes a listener registered with the same triple. Unknown
	/// registrations are ignored.
	fn unlisten(&self, node: &Self::Node, event: DomEvent, key: ListenerKey)
	-> Result<(), DomError>;
	/// Appends a `<style>` element to the document head.
	fn inject_stylesheet(&self, css: &str) -> Result<(), DomError>;
}

/// Timer operations.
pub trait Scheduler {
	/// Schedules `key` every `period_ms`.
	fn set_interval(&self, period_ms: u32, key: TimerKey) -> Result<TimerId, DomError>;
	/// Schedules `key` once after `delay_ms`.
	fn set_timeout(&self, delay_ms: u32, key: TimerKey) -> Result<TimerId, DomError>;
	/// Cancels a pending timer. Unknown ids are ignored.
	fn clear(&self, id: TimerId);
}

/// Everything a slider needs from its environment.
pub trait Host: Dom + Scheduler {}

impl<T: Dom + Scheduler> Host for T {}
