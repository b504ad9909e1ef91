//! Shared fixtures for the slider integration tests.

#![allow(dead_code)]

use tslider_core::testing::{MockHost, MockNode};
use tslider_core::{Dom, Registry, SliderId, SliderOptions, default_library_data};

/// A bootstrapped registry with one unmounted slider container `#hero`.
pub struct Page {
	pub registry: Registry<MockHost>,
	pub container: MockNode,
	pub track: MockNode,
}

impl Page {
	pub fn new(slides: usize) -> Self {
		let host = MockHost::new();
		let container = host.build_slider("hero", slides);
		let track = host
			.query_within(&container, ".TSslider-wrapper")
			.expect("track present");
		let mut registry = Registry::new(host);
		assert!(registry.bootstrap(default_library_data(), 1));
		Self {
			registry,
			container,
			track,
		}
	}

	pub fn host(&self) -> &MockHost {
		self.registry.host()
	}

	pub fn mount(&mut self, options: SliderOptions<MockNode>) -> SliderId {
		self.registry
			.initialize_slider("#hero", options)
			.expect("slider should mount")
	}

	pub fn index(&self, id: SliderId) -> usize {
		self.registry.slider(id).expect("slider registered").current_index()
	}

	pub fn transform(&self) -> Option<String> {
		self.host().style(self.track, "transform")
	}

	pub fn button(&self, class: &str) -> MockNode {
		self.host()
			.find(&format!("button.{class}"))
			.expect("button present")
	}

	pub fn dots(&self, id: SliderId) -> Vec<MockNode> {
		self.registry
			.slider(id)
			.expect("slider registered")
			.pagination_dots()
			.to_vec()
	}

	/// Indices of the dots carrying `class`.
	pub fn active_dots(&self, id: SliderId, class: &str) -> Vec<usize> {
		self.dots(id)
			.iter()
			.enumerate()
			.filter(|(_, dot)| self.host().classes(**dot).iter().any(|c| c == class))
			.map(|(index, _)| index)
			.collect()
	}
}

/// Default options with pagination dots rendered into an auto-created container.
pub fn with_dots() -> SliderOptions<MockNode> {
	SliderOptions::default().pagination(tslider_core::ElementTarget::Create, true)
}
