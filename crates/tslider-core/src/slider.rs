//! Slider instance state and its operations.
//!
//! A [`Slider`] holds every piece of mutable state of one mounted widget.
//! It never stores the host; each operation borrows it, so the registry
//! can own both side by side.

use crate::config::SliderOptions;
use crate::dispatch::fail_soft;
use crate::drag::{self, DragState, SwipeDecision};
use crate::error::{Result, SliderError};
use crate::host::{
	Binding, DomEvent, Host, ListenerKey, PointerInput, SliderId, TimerId, TimerKey, TimerTask,
};
use crate::style::{
	DRAG_TRANSITION, SLIDE_CLASS, SLIDE_FLEX, TRACK_CLASS, TRACK_TRANSITION, dragged_transform,
	snapped_transform,
};

/// Pause between a user interaction and autoplay resuming.
pub const RESTART_DELAY_MS: u32 = 2000;

/// Drag listeners on the track. The first four are the mouse ones
/// [`Slider::destroy`] removes.
pub(crate) const DRAG_LISTENERS: [(DomEvent, Binding); 7] = [
	(DomEvent::MouseDown, Binding::DragStart),
	(DomEvent::MouseMove, Binding::DragMove),
	(DomEvent::MouseUp, Binding::DragEnd),
	(DomEvent::MouseLeave, Binding::DragEnd),
	(DomEvent::TouchStart, Binding::DragStart),
	(DomEvent::TouchMove, Binding::DragMove),
	(DomEvent::TouchEnd, Binding::DragEnd),
];

const MOUSE_DRAG_LISTENERS: usize = 4;

/// One mounted slider.
#[derive(Debug)]
pub struct Slider<N> {
	pub(crate) id: SliderId,
	pub(crate) config: SliderOptions<N>,
	pub(crate) container: N,
	pub(crate) track: N,
	pub(crate) slides: Vec<N>,
	pub(crate) current_index: usize,
	pub(crate) autoplay_timer: Option<TimerId>,
	pub(crate) drag: DragState,
	pub(crate) dots: Vec<N>,
	pub(crate) destroyed: bool,
}

impl<N> Slider<N>
where
	N: Clone + PartialEq + std::fmt::Debug,
{
	/// Locates the container and mounts a slider into it.
	///
	/// Fails when the options are invalid or the container, track or
	/// slides are missing. Navigation and pagination problems are logged
	/// and leave the slider without those controls.
	pub fn mount<H>(
		host: &H,
		id: SliderId,
		selector: &str,
		config: SliderOptions<N>,
	) -> Result<Self>
	where
		H: Host<Node = N>,
	{
		config.validate()?;

		let container = host
			.query(selector)
			.ok_or_else(|| SliderError::ContainerNotFound(selector.to_string()))?;
		let track = host.query_within(&container, &format!(".{TRACK_CLASS}"));
		let slides = host.query_all_within(&container, &format!(".{SLIDE_CLASS}"));
		let track = match track {
			Some(track) if !slides.is_empty() => track,
			_ => return Err(SliderError::MissingStructure),
		};

		let mut slider = Self {
			id,
			config,
			container,
			track,
			slides,
			current_index: 0,
			autoplay_timer: None,
			drag: DragState::default(),
			dots: Vec::new(),
			destroyed: false,
		};

		host.set_style(&slider.track, "display", "flex")?;
		host.set_style(&slider.track, "transition", TRACK_TRANSITION)?;
		for slide in &slider.slides {
			host.set_style(slide, "flex", SLIDE_FLEX)?;
		}

		fail_soft("adding navigation buttons", || slider.mount_navigation(host));
		fail_soft("adding pagination", || slider.mount_pagination(host));

		for (event, binding) in DRAG_LISTENERS {
			host.listen(&slider.track, event, slider.listener(binding))?;
		}
		host.listen(
			&slider.container,
			DomEvent::MouseEnter,
			slider.listener(Binding::HoverEnter),
		)?;
		host.listen(
			&slider.container,
			DomEvent::MouseLeave,
			slider.listener(Binding::HoverLeave),
		)?;

		if slider.config.loop_slides {
			fail_soft("starting autoplay", || slider.start_autoplay(host));
		}

		tracing::debug!(slider = %id, slides = slider.slides.len(), "slider mounted");
		Ok(slider)
	}

	pub fn id(&self) -> SliderId {
		self.id
	}

	pub fn container(&self) -> &N {
		&self.container
	}

	pub fn track(&self) -> &N {
		&self.track
	}

	pub fn config(&self) -> &SliderOptions<N> {
		&self.config
	}

	pub fn current_index(&self) -> usize {
		self.current_index
	}

	pub fn slide_count(&self) -> usize {
		self.slides.len()
	}

	/// Dots created by this slider, parallel to the slides.
	pub fn pagination_dots(&self) -> &[N] {
		&self.dots
	}

	pub fn is_dragging(&self) -> bool {
		self.drag.is_dragging()
	}

	/// Whether an autoplay interval is scheduled.
	pub fn is_autoplaying(&self) -> bool {
		self.autoplay_timer.is_some()
	}

	/// Whether [`Slider::destroy`] has run.
	pub fn is_destroyed(&self) -> bool {
		self.destroyed
	}

	/// Moves to `index`, wrapping into `0..slide_count`.
	///
	/// The index is committed before the track is touched; if the
	/// transform or the dot update fails, the logical index has already
	/// moved on.
	pub fn go_to<H>(&mut self, host: &H, index: i64) -> Result<()>
	where
		H: Host<Node = N>,
	{
		let count = self.slides.len() as i64;
		self.current_index = index.rem_euclid(count) as usize;
		self.snap(host)?;
		self.update_pagination(host)
	}

	pub fn next<H>(&mut self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		self.go_to(host, self.current_index as i64 + 1)
	}

	pub fn prev<H>(&mut self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		self.go_to(host, self.current_index as i64 - 1)
	}

	/// Starts the autoplay interval if autoplay is enabled, replacing any
	/// running one.
	pub fn start_autoplay<H>(&mut self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		if !self.config.autoplay {
			return Ok(());
		}
		self.stop_autoplay(host);
		let timer = host.set_interval(self.config.interval, self.timer(TimerTask::AutoplayTick))?;
		self.autoplay_timer = Some(timer);
		Ok(())
	}

	pub fn stop_autoplay<H>(&mut self, host: &H)
	where
		H: Host<Node = N>,
	{
		if let Some(timer) = self.autoplay_timer.take() {
			host.clear(timer);
		}
	}

	/// Stops autoplay now and resumes it after [`RESTART_DELAY_MS`].
	///
	/// The resume timer is not tracked: a later stop does not cancel it.
	pub fn restart_autoplay<H>(&mut self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		self.stop_autoplay(host);
		host.set_timeout(RESTART_DELAY_MS, self.timer(TimerTask::ResumeAutoplay))?;
		Ok(())
	}

	/// Handles a routed listener callback.
	pub fn handle<H>(&mut self, host: &H, binding: Binding, input: PointerInput<N>) -> Result<()>
	where
		H: Host<Node = N>,
	{
		match binding {
			Binding::DragStart => self.drag_start(host, &input),
			Binding::DragMove => self.drag_move(host, &input),
			Binding::DragEnd => self.drag_end(host),
			Binding::HoverEnter => {
				self.stop_autoplay(host);
				Ok(())
			}
			Binding::HoverLeave => self.start_autoplay(host),
			Binding::PrevButton => {
				let moved = self.prev(host);
				let restarted = self.restart_autoplay(host);
				moved.and(restarted)
			}
			Binding::NextButton => {
				let moved = self.next(host);
				let restarted = self.restart_autoplay(host);
				moved.and(restarted)
			}
			Binding::DotClick => self.dot_click(host, &input),
		}
	}

	/// Handles a routed timer callback.
	pub fn fire<H>(&mut self, host: &H, task: TimerTask) -> Result<()>
	where
		H: Host<Node = N>,
	{
		match task {
			TimerTask::AutoplayTick => self.next(host),
			TimerTask::ResumeAutoplay => self.start_autoplay(host),
		}
	}

	/// Stops autoplay, removes the mouse drag listeners and empties the
	/// container.
	///
	/// Touch, hover and click listeners stay registered, and the slider
	/// stays in the registry.
	pub fn destroy<H>(&mut self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		self.stop_autoplay(host);
		for (event, binding) in &DRAG_LISTENERS[..MOUSE_DRAG_LISTENERS] {
			host.unlisten(&self.track, *event, self.listener(*binding))?;
		}
		host.clear_children(&self.container)?;
		self.destroyed = true;
		tracing::debug!(slider = %self.id, "slider destroyed");
		Ok(())
	}

	pub(crate) fn listener(&self, binding: Binding) -> ListenerKey {
		ListenerKey {
			slider: self.id,
			binding,
		}
	}

	fn timer(&self, task: TimerTask) -> TimerKey {
		TimerKey {
			slider: self.id,
			task,
		}
	}

	fn snap<H>(&self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		host.set_style(&self.track, "transform", &snapped_transform(self.current_index))?;
		Ok(())
	}

	fn baseline<H>(&self, host: &H) -> f64
	where
		H: Host<Node = N>,
	{
		drag::baseline(self.current_index, host.offset_width(&self.container))
	}

	fn drag_start<H>(&mut self, host: &H, input: &PointerInput<N>) -> Result<()>
	where
		H: Host<Node = N>,
	{
		let x = input.client_x.ok_or(SliderError::MissingPointer)?;
		let baseline = self.baseline(host);
		self.drag.press(x, baseline);
		host.set_style(&self.track, "transition", DRAG_TRANSITION)?;
		self.stop_autoplay(host);
		Ok(())
	}

	fn drag_move<H>(&mut self, host: &H, input: &PointerInput<N>) -> Result<()>
	where
		H: Host<Node = N>,
	{
		if !self.drag.is_dragging() {
			return Ok(());
		}
		let x = input.client_x.ok_or(SliderError::MissingPointer)?;
		if let Some(offset) = self.drag.track(x) {
			host.set_style(&self.track, "transform", &dragged_transform(offset))?;
		}
		Ok(())
	}

	fn drag_end<H>(&mut self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		let Some(decision) = self.drag.release() else {
			return Ok(());
		};
		let moved = match decision {
			SwipeDecision::Next => self.next(host),
			SwipeDecision::Prev => self.prev(host),
			SwipeDecision::SnapBack => self.snap(host),
		};
		let restored = host.set_style(&self.track, "transition", TRACK_TRANSITION);
		let baseline = self.baseline(host);
		self.drag.settle(baseline);
		// plain start, not the delayed restart used by clicks
		let started = self.start_autoplay(host);
		moved.and(restored.map_err(Into::into)).and(started)
	}
}
