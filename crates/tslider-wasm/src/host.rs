//! `web_sys` host.
//!
//! Listener closures and timers are owned here, keyed by what the core
//! asked for, so `unlisten` and `clear` can find and drop them. Dropping a
//! `gloo_timers` handle cancels the timer.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use tslider_core::{Dom, DomError, DomEvent, ListenerKey, Scheduler, TimerId, TimerKey};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element, Event, HtmlElement};

use crate::runtime;

struct Registration {
	node: Element,
	event: DomEvent,
	key: ListenerKey,
	closure: Closure<dyn FnMut(Event)>,
}

enum Timer {
	Interval(Interval),
	Timeout(Timeout),
}

/// The page's document plus every listener and timer the sliders own.
pub struct WebHost {
	document: Document,
	listeners: RefCell<Vec<Registration>>,
	timers: RefCell<HashMap<TimerId, Timer>>,
	// timeouts push their id here when they fire; pruned on the next schedule
	expired: Rc<RefCell<Vec<TimerId>>>,
	next_timer: Cell<u64>,
}

impl fmt::Debug for WebHost {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("WebHost")
			.field("listeners", &self.listeners.borrow().len())
			.field("timers", &self.timers.borrow().len())
			.finish()
	}
}

pub(crate) fn js_error(operation: &'static str) -> impl Fn(JsValue) -> DomError {
	move |err| {
		let reason = err.as_string().unwrap_or_else(|| format!("{err:?}"));
		DomError::new(operation, reason)
	}
}

fn html(node: &Element, operation: &'static str) -> Result<&HtmlElement, DomError> {
	node.dyn_ref::<HtmlElement>()
		.ok_or_else(|| DomError::new(operation, "element is not an HTMLElement"))
}

impl WebHost {
	/// Binds to the current window's document.
	pub fn new() -> Result<Self, DomError> {
		let document = web_sys::window()
			.and_then(|window| window.document())
			.ok_or_else(|| DomError::new("WebHost::new", "no document available"))?;
		Ok(Self {
			document,
			listeners: RefCell::new(Vec::new()),
			timers: RefCell::new(HashMap::new()),
			expired: Rc::new(RefCell::new(Vec::new())),
			next_timer: Cell::new(0),
		})
	}

	/// Number of live listener registrations.
	pub fn listener_count(&self) -> usize {
		self.listeners.borrow().len()
	}

	/// Number of scheduled timers, fired timeouts excluded.
	pub fn timer_count(&self) -> usize {
		self.prune();
		self.timers.borrow().len()
	}

	fn allocate(&self) -> TimerId {
		let id = self.next_timer.get() + 1;
		self.next_timer.set(id);
		TimerId(id)
	}

	fn prune(&self) {
		let expired: Vec<TimerId> = self.expired.borrow_mut().drain(..).collect();
		let mut timers = self.timers.borrow_mut();
		for id in expired {
			timers.remove(&id);
		}
	}
}

impl Dom for WebHost {
	type Node = Element;

	fn query(&self, selector: &str) -> Option<Element> {
		self.document.query_selector(selector).ok().flatten()
	}

	fn query_within(&self, root: &Element, selector: &str) -> Option<Element> {
		root.query_selector(selector).ok().flatten()
	}

	fn query_all_within(&self, root: &Element, selector: &str) -> Vec<Element> {
		let Ok(list) = root.query_selector_all(selector) else {
			return Vec::new();
		};
		(0..list.length())
			.filter_map(|index| list.item(index))
			.filter_map(|node| node.dyn_into::<Element>().ok())
			.collect()
	}

	fn create_element(&self, tag: &str) -> Result<Element, DomError> {
		self.document
			.create_element(tag)
			.map_err(js_error("create_element"))
	}

	fn append_child(&self, parent: &Element, child: &Element) -> Result<(), DomError> {
		parent
			.append_child(child)
			.map(|_| ())
			.map_err(js_error("append_child"))
	}

	fn set_class_name(&self, node: &Element, class_name: &str) -> Result<(), DomError> {
		node.set_class_name(class_name);
		Ok(())
	}

	fn set_text(&self, node: &Element, text: &str) -> Result<(), DomError> {
		node.set_text_content(Some(text));
		Ok(())
	}

	fn set_style(&self, node: &Element, property: &str, value: &str) -> Result<(), DomError> {
		html(node, "set_style")?
			.style()
			.set_property(property, value)
			.map_err(js_error("set_style"))
	}

	fn toggle_class(&self, node: &Element, class: &str, force: bool) -> Result<(), DomError> {
		node.class_list()
			.toggle_with_force(class, force)
			.map(|_| ())
			.map_err(js_error("toggle_class"))
	}

	fn has_class(&self, node: &Element, class: &str) -> bool {
		node.class_list().contains(class)
	}

	fn set_data(&self, node: &Element, key: &str, value: &str) -> Result<(), DomError> {
		html(node, "set_data")?
			.dataset()
			.set(key, value)
			.map_err(js_error("set_data"))
	}

	fn data(&self, node: &Element, key: &str) -> Option<String> {
		node.dyn_ref::<HtmlElement>()?.dataset().get(key)
	}

	fn offset_width(&self, node: &Element) -> f64 {
		node.dyn_ref::<HtmlElement>()
			.map_or(0.0, |element| f64::from(element.offset_width()))
	}

	fn clear_children(&self, node: &Element) -> Result<(), DomError> {
		node.set_inner_html("");
		Ok(())
	}

	fn listen(&self, node: &Element, event: DomEvent, key: ListenerKey) -> Result<(), DomError> {
		let closure = Closure::<dyn FnMut(Event)>::new(move |native: Event| {
			runtime::deliver_event(key, native);
		});
		let options = AddEventListenerOptions::new();
		if let Some(passive) = event.passive() {
			options.set_passive(passive);
		}
		node.add_event_listener_with_callback_and_add_event_listener_options(
			event.name(),
			closure.as_ref().unchecked_ref(),
			&options,
		)
		.map_err(js_error("listen"))?;

		self.listeners.borrow_mut().push(Registration {
			node: node.clone(),
			event,
			key,
			closure,
		});
		Ok(())
	}

	fn unlisten(&self, node: &Element, event: DomEvent, key: ListenerKey) -> Result<(), DomError> {
		let registration = {
			let mut listeners = self.listeners.borrow_mut();
			let Some(position) = listeners
				.iter()
				.position(|r| r.node == *node && r.event == event && r.key == key)
			else {
				return Ok(());
			};
			listeners.remove(position)
		};
		registration
			.node
			.remove_event_listener_with_callback(
				event.name(),
				registration.closure.as_ref().unchecked_ref(),
			)
			.map_err(js_error("unlisten"))
	}

	fn inject_stylesheet(&self, css: &str) -> Result<(), DomError> {
		let head = self
			.document
			.head()
			.ok_or_else(|| DomError::new("inject_stylesheet", "document has no <head>"))?;
		let style = self.create_element("style")?;
		style.set_text_content(Some(css));
		head.append_child(&style)
			.map(|_| ())
			.map_err(js_error("inject_stylesheet"))
	}
}

impl Scheduler for WebHost {
	fn set_interval(&self, period_ms: u32, key: TimerKey) -> Result<TimerId, DomError> {
		self.prune();
		let id = self.allocate();
		let interval = Interval::new(period_ms, move || runtime::deliver_timer(key));
		self.timers.borrow_mut().insert(id, Timer::Interval(interval));
		Ok(id)
	}

	fn set_timeout(&self, delay_ms: u32, key: TimerKey) -> Result<TimerId, DomError> {
		self.prune();
		let id = self.allocate();
		let expired = Rc::clone(&self.expired);
		let timeout = Timeout::new(delay_ms, move || {
			expired.borrow_mut().push(id);
			runtime::deliver_timer(key);
		});
		self.timers.borrow_mut().insert(id, Timer::Timeout(timeout));
		Ok(id)
	}

	fn clear(&self, id: TimerId) {
		if let Some(timer) = self.timers.borrow_mut().remove(&id) {
			match timer {
				Timer::Interval(interval) => {
					interval.cancel();
				}
				Timer::Timeout(timeout) => {
					timeout.cancel();
				}
			}
		}
	}
}
