//! Registry lifecycle, version gating and fail-soft mounting.

mod common;

use common::Page;
use rstest::rstest;
use serde_json::json;
use tslider_core::testing::MockHost;
use tslider_core::{
	Binding, EventOutcome, Lifecycle, ListenerKey, PointerInput, Registry, SliderOptions,
	default_library_data,
};

#[rstest]
fn test_version_gating_sequence() {
	let mut registry = Registry::new(MockHost::new());

	assert!(registry.bootstrap(default_library_data(), 1));
	assert!(!registry.bootstrap(json!({ "data": { "ignored": true } }), 1));
	assert!(!registry.bootstrap(default_library_data(), 0));
	assert_eq!(registry.data()["data"], json!({}));
	assert!(registry.bootstrap(json!({ "data": { "fresh": true } }), 2));

	assert_eq!(registry.lifecycle(), Lifecycle::Initialized { version: 2 });
	assert_eq!(registry.data()["data"], json!({ "fresh": true }));
}

#[rstest]
fn test_upgrade_unlists_but_keeps_running_existing_sliders() {
	let mut page = Page::new(3);
	let id = page.mount(SliderOptions::default());
	let next = page.button("ts-slider-button-next");

	assert!(page.registry.bootstrap(default_library_data(), 2));

	assert!(page.registry.is_empty());
	assert!(!page.registry.is_listed(id));
	assert_eq!(page.host().pending_timers(), 1);

	page.registry.advance(3000);
	assert_eq!(page.index(id), 1);
	assert_eq!(page.registry.click(next), vec![EventOutcome::PreventDefault]);
	assert_eq!(page.index(id), 2);
	assert_eq!(page.transform().as_deref(), Some("translateX(-200%)"));

	page.registry.handle(id).unwrap().go_to(0);
	assert_eq!(page.index(id), 0);
}

#[rstest]
fn test_callbacks_reach_sliders_from_previous_version() {
	let host = MockHost::new();
	host.build_slider("a", 3);
	host.build_slider("b", 3);
	let mut registry = Registry::new(host);
	registry.bootstrap(default_library_data(), 1);
	let options = || SliderOptions::default().autoplay(false);
	let old = registry.initialize_slider("#a", options()).unwrap();
	registry.bootstrap(default_library_data(), 2);
	let fresh = registry.initialize_slider("#b", options()).unwrap();

	let outcome = registry.dispatch(
		ListenerKey {
			slider: old,
			binding: Binding::NextButton,
		},
		PointerInput::empty(),
	);

	assert_eq!(outcome, EventOutcome::PreventDefault);
	assert_eq!(registry.slider(old).unwrap().current_index(), 1);
	assert_eq!(registry.slider(fresh).unwrap().current_index(), 0);
	assert_eq!(registry.ids(), vec![fresh]);
	assert_eq!((old.generation, fresh.generation), (1, 2));
}

#[rstest]
#[case::missing_container("#nope", 3, SliderOptions::default())]
#[case::no_slides("#hero", 0, SliderOptions::default())]
#[case::zero_interval("#hero", 3, SliderOptions::default().interval(0))]
fn test_failed_mount_registers_nothing(
	#[case] selector: &str,
	#[case] slides: usize,
	#[case] options: SliderOptions<tslider_core::testing::MockNode>,
) {
	let mut page = Page::new(slides);

	assert_eq!(page.registry.initialize_slider(selector, options), None);
	assert!(page.registry.is_empty());
	assert_eq!(page.host().pending_timers(), 0);
}

#[rstest]
fn test_container_without_track_is_rejected() {
	let host = MockHost::new();
	let container = host.element("div");
	host.set_id(container, "bare");
	let slide = host.element("div");
	host.add_class(slide, "slide");
	host.append(container, slide);
	host.append(host.body(), container);
	let mut registry = Registry::new(host);
	registry.bootstrap(default_library_data(), 1);

	assert_eq!(registry.initialize_slider("#bare", SliderOptions::default()), None);
}

#[rstest]
fn test_ids_are_unique_and_ordered() {
	let host = MockHost::new();
	host.build_slider("a", 2);
	host.build_slider("b", 2);
	let mut registry = Registry::new(host);
	registry.bootstrap(default_library_data(), 1);

	let a = registry.initialize_slider("#a", SliderOptions::default()).unwrap();
	assert_eq!(registry.initialize_slider("#missing", SliderOptions::default()), None);
	let b = registry.initialize_slider("#b", SliderOptions::default()).unwrap();
	let a_again = registry.initialize_slider("#a", SliderOptions::default()).unwrap();

	assert_eq!(registry.ids(), vec![a, b, a_again]);
	assert!(a.serial < b.serial && b.serial < a_again.serial);
	assert_eq!(registry.len(), 3);
}

#[rstest]
fn test_handle_controls_its_slider() {
	let host = MockHost::new();
	let first = host.build_slider("a", 3);
	host.build_slider("b", 3);
	let mut registry = Registry::new(host);
	registry.bootstrap(default_library_data(), 1);
	let options = || SliderOptions::default().autoplay(false);
	let a = registry.initialize_slider("#a", options()).unwrap();
	let b = registry.initialize_slider("#b", options()).unwrap();

	let mut handle = registry.handle(a).unwrap();
	assert_eq!(handle.id(), a);
	assert_eq!(handle.container(), Some(&first));
	handle.go_to(-1);
	handle.prev();

	assert_eq!(registry.slider(a).unwrap().current_index(), 1);
	assert_eq!(registry.slider(b).unwrap().current_index(), 0);
}

#[rstest]
fn test_independent_autoplay_per_slider() {
	let host = MockHost::new();
	host.build_slider("a", 3);
	host.build_slider("b", 3);
	let mut registry = Registry::new(host);
	registry.bootstrap(default_library_data(), 1);
	let a = registry.initialize_slider("#a", SliderOptions::default()).unwrap();
	let b = registry
		.initialize_slider("#b", SliderOptions::default().interval(1000))
		.unwrap();

	registry.advance(3000);

	assert_eq!(registry.slider(a).unwrap().current_index(), 1);
	assert_eq!(registry.slider(b).unwrap().current_index(), 0);
}
