//! Swipe gesture state.
//!
//! Pure bookkeeping; the slider applies the resulting transforms and
//! navigation. Offsets are CSS pixels, negative to the left.

/// Net displacement a release must exceed to change slides.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

/// What a release does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDecision {
	/// Dragged left past the threshold.
	Next,
	/// Dragged right past the threshold.
	Prev,
	/// Return to the current slide.
	SnapBack,
}

/// Classifies a net displacement. The threshold is exclusive on both sides.
pub fn decide(moved_by: f64) -> SwipeDecision {
	if moved_by < -SWIPE_THRESHOLD_PX {
		SwipeDecision::Next
	} else if moved_by > SWIPE_THRESHOLD_PX {
		SwipeDecision::Prev
	} else {
		SwipeDecision::SnapBack
	}
}

/// Baseline translate for the slide at `index` in a container `width` wide.
pub fn baseline(index: usize, width: f64) -> f64 {
	-(index as f64 * width)
}

/// Idle/dragging state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
	dragging: bool,
	start_x: f64,
	current_translate: f64,
	prev_translate: f64,
}

impl DragState {
	/// Enters dragging at `x`, tracking from `baseline`.
	pub fn press(&mut self, x: f64, baseline: f64) {
		self.dragging = true;
		self.start_x = x;
		self.prev_translate = baseline;
		self.current_translate = baseline;
	}

	/// Follows the pointer. Returns the live offset, or `None` when idle.
	pub fn track(&mut self, x: f64) -> Option<f64> {
		if !self.dragging {
			return None;
		}
		self.current_translate = self.prev_translate + (x - self.start_x);
		Some(self.current_translate)
	}

	/// Leaves dragging. Returns `None` when there was no gesture to end.
	pub fn release(&mut self) -> Option<SwipeDecision> {
		if !self.dragging {
			return None;
		}
		self.dragging = false;
		Some(decide(self.displacement()))
	}

	/// Re-anchors the baseline after a release.
	pub fn settle(&mut self, baseline: f64) {
		self.prev_translate = baseline;
	}

	pub fn is_dragging(&self) -> bool {
		self.dragging
	}

	/// Offset travelled since the press.
	pub fn displacement(&self) -> f64 {
		self.current_translate - self.prev_translate
	}
}
