//! In-memory host for tests.
//!
//! [`MockHost`] keeps a small DOM tree, records listener registrations and
//! runs timers on a virtual clock. Selectors support one compound simple
//! selector: an optional tag followed by any number of `.class` and
//! `#id` parts (`button.ts-slider-dot`, `#hero`).
//!
//! Events and time are driven through the registry so callbacks take the
//! same route they take in a browser:
//!
//! ```
//! use tslider_core::testing::MockHost;
//! use tslider_core::{Registry, SliderOptions};
//!
//! let host = MockHost::new();
//! host.build_slider("hero", 3);
//! let mut registry = Registry::new(host);
//! registry.bootstrap(tslider_core::default_library_data(), 1);
//! let id = registry.initialize_slider("#hero", SliderOptions::default()).unwrap();
//!
//! registry.advance(3000);
//! assert_eq!(registry.slider(id).unwrap().current_index(), 1);
//! ```

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use crate::host::{
	Dom, DomError, DomEvent, EventOutcome, ListenerKey, PointerInput, Scheduler, TimerId, TimerKey,
};
use crate::registry::Registry;
use crate::style::{CONTAINER_CLASS, SLIDE_CLASS, TRACK_CLASS};

/// Width given to containers built by [`MockHost::build_slider`].
pub const MOCK_CONTAINER_WIDTH: f64 = 800.0;

/// Handle to a mock element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MockNode(usize);

const ROOT: MockNode = MockNode(0);

#[derive(Debug, Default)]
struct NodeData {
	tag: String,
	id: Option<String>,
	classes: Vec<String>,
	styles: BTreeMap<String, String>,
	data: BTreeMap<String, String>,
	text: String,
	parent: Option<MockNode>,
	children: Vec<MockNode>,
	listeners: Vec<(DomEvent, ListenerKey)>,
	width: f64,
}

#[derive(Debug)]
struct PendingTimer {
	id: TimerId,
	key: TimerKey,
	due: u64,
	period: Option<u64>,
}

#[derive(Debug, Default)]
struct State {
	nodes: Vec<NodeData>,
	timers: Vec<PendingTimer>,
	now: u64,
	next_timer: u64,
	stylesheets: Vec<String>,
	failing_styles: BTreeSet<String>,
}

#[derive(Debug, Default)]
struct Selector {
	tag: Option<String>,
	id: Option<String>,
	classes: Vec<String>,
}

impl Selector {
	fn parse(selector: &str) -> Self {
		let mut parsed = Self::default();
		let selector = selector.trim();
		let end = selector.find(['.', '#']).unwrap_or(selector.len());
		if end > 0 {
			parsed.tag = Some(selector[..end].to_ascii_lowercase());
		}
		let mut rest = &selector[end..];
		while let Some(marker) = rest.chars().next() {
			let body = &rest[1..];
			let end = body.find(['.', '#']).unwrap_or(body.len());
			let name = body[..end].to_string();
			if marker == '#' {
				parsed.id = Some(name);
			} else {
				parsed.classes.push(name);
			}
			rest = &body[end..];
		}
		parsed
	}

	fn matches(&self, node: &NodeData) -> bool {
		self.tag.as_ref().is_none_or(|tag| *tag == node.tag)
			&& self.id.as_ref().is_none_or(|id| node.id.as_ref() == Some(id))
			&& self.classes.iter().all(|class| node.classes.contains(class))
	}
}

/// Shared in-memory DOM and clock. Clones share state.
#[derive(Debug, Clone)]
pub struct MockHost {
	state: Rc<RefCell<State>>,
}

impl Default for MockHost {
	fn default() -> Self {
		Self::new()
	}
}

impl MockHost {
	/// Empty document with a `<body>` root.
	pub fn new() -> Self {
		let state = State {
			nodes: vec![NodeData {
				tag: "body".to_string(),
				width: 1024.0,
				..NodeData::default()
			}],
			..State::default()
		};
		Self {
			state: Rc::new(RefCell::new(state)),
		}
	}

	pub fn body(&self) -> MockNode {
		ROOT
	}

	/// Creates a detached element.
	pub fn element(&self, tag: &str) -> MockNode {
		let mut state = self.state.borrow_mut();
		state.nodes.push(NodeData {
			tag: tag.to_ascii_lowercase(),
			..NodeData::default()
		});
		MockNode(state.nodes.len() - 1)
	}

	/// Moves `child` under `parent`.
	pub fn append(&self, parent: MockNode, child: MockNode) {
		let mut state = self.state.borrow_mut();
		if let Some(old) = state.nodes[child.0].parent.take() {
			state.nodes[old.0].children.retain(|c| *c != child);
		}
		state.nodes[child.0].parent = Some(parent);
		state.nodes[parent.0].children.push(child);
	}

	pub fn set_id(&self, node: MockNode, id: &str) {
		self.state.borrow_mut().nodes[node.0].id = Some(id.to_string());
	}

	pub fn add_class(&self, node: MockNode, class: &str) {
		let mut state = self.state.borrow_mut();
		let classes = &mut state.nodes[node.0].classes;
		if !classes.iter().any(|c| c == class) {
			classes.push(class.to_string());
		}
	}

	pub fn set_width(&self, node: MockNode, width: f64) {
		self.state.borrow_mut().nodes[node.0].width = width;
	}

	/// Builds `<div id=.. class="TSslider">` holding a track with `slides`
	/// slides, appends it to the body and returns the container.
	pub fn build_slider(&self, id: &str, slides: usize) -> MockNode {
		let container = self.element("div");
		self.set_id(container, id);
		self.add_class(container, CONTAINER_CLASS);
		self.set_width(container, MOCK_CONTAINER_WIDTH);

		let track = self.element("div");
		self.add_class(track, TRACK_CLASS);
		self.append(container, track);

		for n in 0..slides {
			let slide = self.element("div");
			self.add_class(slide, SLIDE_CLASS);
			self.state.borrow_mut().nodes[slide.0].text = format!("Slide {}", n + 1);
			self.append(track, slide);
		}

		self.append(ROOT, container);
		container
	}

	/// Inline style value.
	pub fn style(&self, node: MockNode, property: &str) -> Option<String> {
		self.state.borrow().nodes[node.0].styles.get(property).cloned()
	}

	pub fn classes(&self, node: MockNode) -> Vec<String> {
		self.state.borrow().nodes[node.0].classes.clone()
	}

	pub fn tag(&self, node: MockNode) -> String {
		self.state.borrow().nodes[node.0].tag.clone()
	}

	pub fn text(&self, node: MockNode) -> String {
		self.state.borrow().nodes[node.0].text.clone()
	}

	pub fn children(&self, node: MockNode) -> Vec<MockNode> {
		self.state.borrow().nodes[node.0].children.clone()
	}

	pub fn parent(&self, node: MockNode) -> Option<MockNode> {
		self.state.borrow().nodes[node.0].parent
	}

	/// Listener registrations on `node`, in registration order.
	pub fn listeners(&self, node: MockNode) -> Vec<(DomEvent, ListenerKey)> {
		self.state.borrow().nodes[node.0].listeners.clone()
	}

	/// First attached element matching `selector`.
	pub fn find(&self, selector: &str) -> Option<MockNode> {
		self.query(selector)
	}

	/// Every attached element matching `selector`.
	pub fn find_all(&self, selector: &str) -> Vec<MockNode> {
		self.query_all_within(&ROOT, selector)
	}

	/// Virtual time in milliseconds.
	pub fn now(&self) -> u64 {
		self.state.borrow().now
	}

	pub fn pending_timers(&self) -> usize {
		self.state.borrow().timers.len()
	}

	/// Stylesheets injected so far.
	pub fn stylesheets(&self) -> Vec<String> {
		self.state.borrow().stylesheets.clone()
	}

	/// Makes every later write of `property` fail.
	pub fn fail_style(&self, property: &str) {
		self.state.borrow_mut().failing_styles.insert(property.to_string());
	}

	/// Undoes [`MockHost::fail_style`].
	pub fn heal_style(&self, property: &str) {
		self.state.borrow_mut().failing_styles.remove(property);
	}

	/// Pops the earliest timer due at or before `deadline`, moving the
	/// clock to its due time. Intervals are rescheduled.
	fn next_due(&self, deadline: u64) -> Option<TimerKey> {
		let mut state = self.state.borrow_mut();
		let position = state
			.timers
			.iter()
			.enumerate()
			.filter(|(_, timer)| timer.due <= deadline)
			.min_by_key(|(_, timer)| (timer.due, timer.id))
			.map(|(position, _)| position)?;

		let PendingTimer {
			key, due, period, ..
		} = state.timers[position];
		state.now = due;
		match period {
			Some(period) => state.timers[position].due += period.max(1),
			None => {
				state.timers.remove(position);
			}
		}
		Some(key)
	}

	fn set_now(&self, now: u64) {
		self.state.borrow_mut().now = now;
	}

	/// `node` followed by its ancestors.
	fn propagation_path(&self, node: MockNode) -> Vec<MockNode> {
		let state = self.state.borrow();
		let mut path = vec![node];
		let mut current = state.nodes[node.0].parent;
		while let Some(parent) = current {
			path.push(parent);
			current = state.nodes[parent.0].parent;
		}
		path
	}

	fn descendants(&self, root: MockNode) -> Vec<MockNode> {
		let state = self.state.borrow();
		let mut out = Vec::new();
		let mut stack: Vec<MockNode> = state.nodes[root.0].children.iter().rev().copied().collect();
		while let Some(node) = stack.pop() {
			out.push(node);
			stack.extend(state.nodes[node.0].children.iter().rev().copied());
		}
		out
	}

	fn schedule(&self, delay_ms: u32, key: TimerKey, repeat: bool) -> TimerId {
		let mut state = self.state.borrow_mut();
		state.next_timer += 1;
		let id = TimerId(state.next_timer);
		let due = state.now + u64::from(delay_ms);
		state.timers.push(PendingTimer {
			id,
			key,
			due,
			period: repeat.then_some(u64::from(delay_ms)),
		});
		id
	}
}

impl Dom for MockHost {
	type Node = MockNode;

	fn query(&self, selector: &str) -> Option<MockNode> {
		self.query_within(&ROOT, selector)
	}

	fn query_within(&self, root: &MockNode, selector: &str) -> Option<MockNode> {
		self.query_all_within(root, selector).into_iter().next()
	}

	fn query_all_within(&self, root: &MockNode, selector: &str) -> Vec<MockNode> {
		let selector = Selector::parse(selector);
		let candidates = self.descendants(*root);
		let state = self.state.borrow();
		candidates
			.into_iter()
			.filter(|node| selector.matches(&state.nodes[node.0]))
			.collect()
	}

	fn create_element(&self, tag: &str) -> Result<MockNode, DomError> {
		Ok(self.element(tag))
	}

	fn append_child(&self, parent: &MockNode, child: &MockNode) -> Result<(), DomError> {
		if self.propagation_path(*parent).contains(child) {
			return Err(DomError::new("append_child", "new child contains the parent"));
		}
		self.append(*parent, *child);
		Ok(())
	}

	fn set_class_name(&self, node: &MockNode, class_name: &str) -> Result<(), DomError> {
		self.state.borrow_mut().nodes[node.0].classes =
			class_name.split_whitespace().map(str::to_string).collect();
		Ok(())
	}

	fn set_text(&self, node: &MockNode, text: &str) -> Result<(), DomError> {
		self.state.borrow_mut().nodes[node.0].text = text.to_string();
		Ok(())
	}

	fn set_style(&self, node: &MockNode, property: &str, value: &str) -> Result<(), DomError> {
		let mut state = self.state.borrow_mut();
		if state.failing_styles.contains(property) {
			return Err(DomError::new(
				"set_style",
				format!("injected failure for `{property}`"),
			));
		}
		state.nodes[node.0]
			.styles
			.insert(property.to_string(), value.to_string());
		Ok(())
	}

	fn toggle_class(&self, node: &MockNode, class: &str, force: bool) -> Result<(), DomError> {
		let mut state = self.state.borrow_mut();
		let classes = &mut state.nodes[node.0].classes;
		classes.retain(|c| c != class);
		if force {
			classes.push(class.to_string());
		}
		Ok(())
	}

	fn has_class(&self, node: &MockNode, class: &str) -> bool {
		self.state.borrow().nodes[node.0]
			.classes
			.iter()
			.any(|c| c == class)
	}

	fn set_data(&self, node: &MockNode, key: &str, value: &str) -> Result<(), DomError> {
		self.state.borrow_mut().nodes[node.0]
			.data
			.insert(key.to_string(), value.to_string());
		Ok(())
	}

	fn data(&self, node: &MockNode, key: &str) -> Option<String> {
		self.state.borrow().nodes[node.0].data.get(key).cloned()
	}

	fn offset_width(&self, node: &MockNode) -> f64 {
		self.state.borrow().nodes[node.0].width
	}

	fn clear_children(&self, node: &MockNode) -> Result<(), DomError> {
		let mut state = self.state.borrow_mut();
		let children = std::mem::take(&mut state.nodes[node.0].children);
		for child in children {
			state.nodes[child.0].parent = None;
		}
		Ok(())
	}

	fn listen(&self, node: &MockNode, event: DomEvent, key: ListenerKey) -> Result<(), DomError> {
		self.state.borrow_mut().nodes[node.0]
			.listeners
			.push((event, key));
		Ok(())
	}

	fn unlisten(&self, node: &MockNode, event: DomEvent, key: ListenerKey) -> Result<(), DomError> {
		self.state.borrow_mut().nodes[node.0]
			.listeners
			.retain(|registered| *registered != (event, key));
		Ok(())
	}

	fn inject_stylesheet(&self, css: &str) -> Result<(), DomError> {
		self.state.borrow_mut().stylesheets.push(css.to_string());
		Ok(())
	}
}

impl Scheduler for MockHost {
	fn set_interval(&self, period_ms: u32, key: TimerKey) -> Result<TimerId, DomError> {
		Ok(self.schedule(period_ms, key, true))
	}

	fn set_timeout(&self, delay_ms: u32, key: TimerKey) -> Result<TimerId, DomError> {
		Ok(self.schedule(delay_ms, key, false))
	}

	fn clear(&self, id: TimerId) {
		self.state.borrow_mut().timers.retain(|timer| timer.id != id);
	}
}

impl Registry<MockHost> {
	/// Moves the virtual clock forward, firing every timer that comes due
	/// in order.
	pub fn advance(&mut self, ms: u64) {
		let deadline = self.host().now() + ms;
		while let Some(key) = self.host().next_due(deadline) {
			self.fire(key);
		}
		self.host().set_now(deadline);
	}

	/// Dispatches `event` at `target`, bubbling to ancestors when the event
	/// bubbles. Returns one outcome per listener reached.
	pub fn emit(
		&mut self,
		target: MockNode,
		event: DomEvent,
		client_x: Option<f64>,
	) -> Vec<EventOutcome> {
		let path = if event.bubbles() {
			self.host().propagation_path(target)
		} else {
			vec![target]
		};
		let mut outcomes = Vec::new();
		for node in path {
			let keys: Vec<ListenerKey> = self
				.host()
				.listeners(node)
				.into_iter()
				.filter(|(registered, _)| *registered == event)
				.map(|(_, key)| key)
				.collect();
			for key in keys {
				let input = PointerInput {
					client_x,
					target: Some(target),
				};
				outcomes.push(self.dispatch(key, input));
			}
		}
		outcomes
	}

	pub fn click(&mut self, target: MockNode) -> Vec<EventOutcome> {
		self.emit(target, DomEvent::Click, None)
	}

	/// Mouse press at `from_x`, one move to `to_x`, release.
	pub fn mouse_swipe(&mut self, track: MockNode, from_x: f64, to_x: f64) {
		self.emit(track, DomEvent::MouseDown, Some(from_x));
		self.emit(track, DomEvent::MouseMove, Some(to_x));
		self.emit(track, DomEvent::MouseUp, None);
	}

	/// Touch press at `from_x`, one move to `to_x`, release.
	pub fn touch_swipe(&mut self, track: MockNode, from_x: f64, to_x: f64) {
		self.emit(track, DomEvent::TouchStart, Some(from_x));
		self.emit(track, DomEvent::TouchMove, Some(to_x));
		self.emit(track, DomEvent::TouchEnd, None);
	}
}
