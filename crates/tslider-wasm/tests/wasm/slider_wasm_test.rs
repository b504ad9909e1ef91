//! Browser tests for the slider bindings.
//!
//! Run with:
//!   wasm-pack test --chrome --headless crates/tslider-wasm

#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use tslider_core::GLOBAL_KEY;
use tslider_wasm::runtime::with_registry;
use tslider_wasm::{bootstrap, initialize_slider, sliders};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Appends a three-slide slider with id `id` to the body.
fn mount_markup(id: &str) -> Element {
	let document = document();
	let container = document.create_element("div").unwrap();
	container.set_id(id);
	container.set_class_name("TSslider");
	container.set_inner_html(
		r#"<div class="TSslider-wrapper">
			<div class="slide">1</div>
			<div class="slide">2</div>
			<div class="slide">3</div>
		</div>"#,
	);
	document.body().unwrap().append_child(&container).unwrap();
	container
}

fn options(json: &str) -> JsValue {
	js_sys::JSON::parse(json).unwrap()
}

fn track_transform(container: &Element) -> String {
	container
		.query_selector(".TSslider-wrapper")
		.unwrap()
		.unwrap()
		.unchecked_into::<HtmlElement>()
		.style()
		.get_property_value("transform")
		.unwrap()
}

#[wasm_bindgen_test]
fn initialize_publishes_handles() {
	bootstrap(1, JsValue::UNDEFINED);
	mount_markup("publish");

	initialize_slider("#publish", options(r#"{ "autoplay": false }"#));

	let global = Reflect::get(&web_sys::window().unwrap(), &GLOBAL_KEY.into()).unwrap();
	assert!(Reflect::get(&global, &"version".into()).unwrap().as_f64() >= Some(1.0));
	let listed = js_sys::Array::from(&Reflect::get(&global, &"sliders".into()).unwrap());
	assert_eq!(listed.length(), sliders().length());
	assert!(listed.length() >= 1);
}

#[wasm_bindgen_test]
fn handle_navigates_and_translates_track() {
	bootstrap(1, JsValue::UNDEFINED);
	let container = mount_markup("navigate");
	initialize_slider("#navigate", options(r#"{ "autoplay": false }"#));

	let handle = sliders()
		.iter()
		.find(|handle| {
			Reflect::get(handle, &"container".into())
				.ok()
				.and_then(|value| value.dyn_into::<Element>().ok())
				.as_ref() == Some(&container)
		})
		.unwrap();

	call(&handle, "goTo", &[JsValue::from(-1)]);
	assert_eq!(current_index(&handle), Some(2.0));
	assert_eq!(track_transform(&container), "translateX(-200%)");
	call(&handle, "next", &[]);
	assert_eq!(current_index(&handle), Some(0.0));
}

fn call(handle: &JsValue, method: &str, args: &[JsValue]) {
	let function: js_sys::Function = Reflect::get(handle, &method.into()).unwrap().unchecked_into();
	let args: js_sys::Array = args.iter().collect();
	function.apply(handle, &args).unwrap();
}

fn current_index(handle: &JsValue) -> Option<f64> {
	Reflect::get(handle, &"currentIndex".into()).unwrap().as_f64()
}

#[wasm_bindgen_test]
fn next_button_click_advances() {
	bootstrap(1, JsValue::UNDEFINED);
	let container = mount_markup("buttons");
	initialize_slider("#buttons", options(r#"{ "autoplay": false }"#));

	let next = container
		.query_selector(".ts-slider-button-next")
		.unwrap()
		.unwrap()
		.unchecked_into::<HtmlElement>();
	next.click();

	let index = with_registry(|registry| {
		registry
			.ids()
			.into_iter()
			.filter_map(|id| registry.slider(id))
			.find(|slider| *slider.container() == container)
			.map(|slider| slider.current_index())
	})
	.flatten();
	assert_eq!(index, Some(1));
}

#[wasm_bindgen_test]
fn mouse_drag_past_threshold_advances() {
	bootstrap(1, JsValue::UNDEFINED);
	let container = mount_markup("drag");
	initialize_slider("#drag", options(r#"{ "autoplay": false }"#));
	let track = container.query_selector(".TSslider-wrapper").unwrap().unwrap();

	let fire = |kind: &str, x: i32| {
		let init = MouseEventInit::new();
		init.set_client_x(x);
		let event = MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap();
		track.dispatch_event(&event).unwrap();
	};
	fire("mousedown", 300);
	fire("mousemove", 200);
	fire("mouseup", 200);

	assert_eq!(track_transform(&container), "translateX(-100%)");
}

#[wasm_bindgen_test]
fn missing_container_is_logged_not_thrown() {
	bootstrap(1, JsValue::UNDEFINED);
	let before = sliders().length();

	initialize_slider("#does-not-exist", JsValue::UNDEFINED);

	assert_eq!(sliders().length(), before);
}

#[wasm_bindgen_test]
fn element_options_are_used_directly() {
	bootstrap(1, JsValue::UNDEFINED);
	let container = mount_markup("element-pager");
	let pager = document().create_element("div").unwrap();
	document().body().unwrap().append_child(&pager).unwrap();

	let options = options(r#"{ "autoplay": false }"#);
	let pagination = js_sys::Object::new();
	Reflect::set(&pagination, &"el".into(), &pager).unwrap();
	Reflect::set(&options, &"pagination".into(), &pagination).unwrap();
	initialize_slider("#element-pager", options);

	assert_eq!(pager.query_selector_all(".ts-slider-dot").unwrap().length(), 3);
	assert!(container.query_selector(".ts-slider-pagination").unwrap().is_none());
}

#[wasm_bindgen_test]
fn destroy_drops_mouse_listeners_and_autoplay() {
	bootstrap(1, JsValue::UNDEFINED);
	let container = mount_markup("teardown");
	initialize_slider("#teardown", JsValue::UNDEFINED);

	let (listeners, timers) = with_registry(|registry| {
		(registry.host().listener_count(), registry.host().timer_count())
	})
	.unwrap();
	let handle = sliders().iter().last().unwrap();
	call(&handle, "destroy", &[]);

	let (after_listeners, after_timers) = with_registry(|registry| {
		(registry.host().listener_count(), registry.host().timer_count())
	})
	.unwrap();
	assert_eq!(after_listeners, listeners - 4);
	assert_eq!(after_timers, timers - 1);
	assert_eq!(container.child_element_count(), 0);
}

#[wasm_bindgen_test]
fn newer_page_object_blocks_bootstrap_and_keeps_page_data() {
	bootstrap(1, JsValue::UNDEFINED);
	let window = web_sys::window().unwrap();
	let previous = Reflect::get(&window, &GLOBAL_KEY.into()).unwrap();
	let loaded = options(r#"{ "version": 5, "data": { "x": 1 } }"#);
	Reflect::set(&window, &GLOBAL_KEY.into(), &loaded).unwrap();

	assert!(!bootstrap(1, JsValue::UNDEFINED));
	assert!(!bootstrap(5, JsValue::UNDEFINED));

	let global = Reflect::get(&window, &GLOBAL_KEY.into()).unwrap();
	assert_eq!(global, loaded);
	let data = Reflect::get(&global, &"data".into()).unwrap();
	assert_eq!(Reflect::get(&data, &"x".into()).unwrap().as_f64(), Some(1.0));
	assert_eq!(Reflect::get(&global, &"version".into()).unwrap().as_f64(), Some(5.0));

	Reflect::set(&window, &GLOBAL_KEY.into(), &previous).unwrap();
}

#[wasm_bindgen_test]
fn mount_updates_page_object_in_place() {
	bootstrap(1, JsValue::UNDEFINED);
	let window = web_sys::window().unwrap();
	let global = Reflect::get(&window, &GLOBAL_KEY.into()).unwrap();
	Reflect::set(&global, &"note".into(), &"kept".into()).unwrap();
	mount_markup("in-place");

	initialize_slider("#in-place", options(r#"{ "autoplay": false }"#));

	let after = Reflect::get(&window, &GLOBAL_KEY.into()).unwrap();
	assert_eq!(after, global);
	let note = Reflect::get(&after, &"note".into()).unwrap().as_string();
	assert_eq!(note.as_deref(), Some("kept"));
	let listed = js_sys::Array::from(&Reflect::get(&after, &"sliders".into()).unwrap());
	assert_eq!(listed.length(), sliders().length());
}
