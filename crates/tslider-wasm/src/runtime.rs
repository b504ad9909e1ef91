//! Per-thread registry and native callback delivery.
//!
//! The browser runs everything on one thread, so the registry lives in a
//! `thread_local!`. Every entry point borrows it with `try_borrow_mut`: a
//! callback that arrives while the registry is already borrowed is logged
//! and dropped instead of panicking.

use std::cell::RefCell;

use tslider_core::{EventOutcome, ListenerKey, PointerInput, Registry, TimerKey};
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, TouchEvent};

use crate::host::WebHost;

thread_local! {
	static REGISTRY: RefCell<Option<Registry<WebHost>>> = const { RefCell::new(None) };
}

/// Runs `f` against the registry, creating it on first use.
///
/// Returns `None` when the registry is busy or no document is available.
pub fn with_registry<T>(f: impl FnOnce(&mut Registry<WebHost>) -> T) -> Option<T> {
	REGISTRY.with(|cell| {
		let Ok(mut slot) = cell.try_borrow_mut() else {
			tracing::warn!("slider registry busy; dropping re-entrant call");
			return None;
		};
		if slot.is_none() {
			match WebHost::new() {
				Ok(host) => *slot = Some(Registry::new(host)),
				Err(err) => {
					tracing::error!(error = %err, "cannot create slider host");
					return None;
				}
			}
		}
		slot.as_mut().map(f)
	})
}

/// Horizontal pointer position of a mouse event or of the first active
/// touch of a touch event.
fn client_x(event: &Event) -> Option<f64> {
	if event.type_().starts_with("touch") {
		let touch = event.unchecked_ref::<TouchEvent>().touches().get(0)?;
		return Some(f64::from(touch.client_x()));
	}
	event
		.dyn_ref::<MouseEvent>()
		.map(|mouse| f64::from(mouse.client_x()))
}

pub(crate) fn deliver_event(key: ListenerKey, event: Event) {
	let input = PointerInput {
		client_x: client_x(&event),
		target: event.target().and_then(|target| target.dyn_into::<Element>().ok()),
	};
	let outcome = with_registry(|registry| registry.dispatch(key, input));
	if outcome == Some(EventOutcome::PreventDefault) {
		event.prevent_default();
	}
}

pub(crate) fn deliver_timer(key: TimerKey) {
	with_registry(|registry| registry.fire(key));
}
