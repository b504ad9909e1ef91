//! JavaScript entry points.
//!
//! `window.expLibraryData` is shared by every copy of the library loaded
//! on the page. Its `version` gates bootstrap, and it is updated in place:
//! an upgrade assigns the initial data keys, `version` and an empty
//! `sliders` array, and every mount refreshes `sliders`. Keys written by
//! page code are left alone.

use js_sys::{Array, JSON, Object, Reflect};
use serde_json::{Map, Value};
use tslider_core::{
	DomError, GLOBAL_KEY, LIBRARY_VERSION, SliderHandle as CoreHandle, SliderId,
	default_library_data, fail_soft,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::host::{WebHost, js_error};
use crate::logging;
use crate::options;
use crate::runtime::with_registry;

#[wasm_bindgen(start)]
pub fn start() {
	logging::init();
	bootstrap(LIBRARY_VERSION, JsValue::UNDEFINED);
}

/// Initializes or upgrades the library.
///
/// `initial` is merged over the default data object. Returns `false` when
/// `version` is not newer than the one already on the page, whichever
/// copy of the library stored it.
#[wasm_bindgen]
pub fn bootstrap(version: u32, initial: JsValue) -> bool {
	let global = page_global();
	let page_version = global.as_ref().map_or(0, global_version);
	if page_version >= version {
		tracing::warn!(
			stored = page_version,
			requested = version,
			"slider library already loaded on this page"
		);
		return false;
	}

	let initial = library_data(&initial);
	let mut seeded = global.as_ref().map(global_data).unwrap_or_default();
	if let Value::Object(keys) = &initial {
		seeded.extend(keys.clone());
	}
	let seeded = Value::Object(seeded);
	let upgraded = with_registry(|registry| registry.bootstrap(seeded, version)).unwrap_or(false);
	if upgraded {
		publish(Some(&initial));
	}
	upgraded
}

/// Mounts a slider on the first element matching `selector`.
///
/// Failures are logged to the console; nothing is registered then.
#[wasm_bindgen(js_name = initializeSlider)]
pub fn initialize_slider(selector: &str, options: JsValue) {
	let mounted = with_registry(|registry| {
		let options = fail_soft("reading slider options", || options::from_js(&options))?;
		registry.initialize_slider(selector, options)
	})
	.flatten();
	if mounted.is_some() {
		publish(None);
	}
}

/// Handles of every registered slider, in creation order.
#[wasm_bindgen]
pub fn sliders() -> Array {
	with_registry(|registry| registry.ids())
		.unwrap_or_default()
		.into_iter()
		.map(|id| JsValue::from(SliderHandle { id }))
		.collect()
}

/// Control object for one slider.
///
/// Handles keep working after a version upgrade unlists their slider.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct SliderHandle {
	id: SliderId,
}

#[wasm_bindgen]
impl SliderHandle {
	pub fn next(&self) {
		self.control(|handle| handle.next());
	}

	pub fn prev(&self) {
		self.control(|handle| handle.prev());
	}

	#[wasm_bindgen(js_name = goTo)]
	pub fn go_to(&self, index: i32) {
		self.control(|handle| handle.go_to(i64::from(index)));
	}

	pub fn destroy(&self) {
		self.control(|handle| handle.destroy());
	}

	#[wasm_bindgen(getter)]
	pub fn container(&self) -> Option<Element> {
		with_registry(|registry| registry.slider(self.id).map(|slider| slider.container().clone()))
			.flatten()
	}

	#[wasm_bindgen(getter, js_name = currentIndex)]
	pub fn current_index(&self) -> Option<u32> {
		with_registry(|registry| registry.slider(self.id).map(|slider| slider.current_index()))
			.flatten()
			.and_then(|index| u32::try_from(index).ok())
	}
}

impl SliderHandle {
	fn control(&self, op: impl FnOnce(&mut CoreHandle<'_, WebHost>)) {
		with_registry(|registry| match registry.handle(self.id) {
			Some(mut handle) => op(&mut handle),
			None => tracing::debug!(slider = %self.id, "handle refers to an unknown slider"),
		});
	}
}

fn library_data(initial: &JsValue) -> Value {
	if initial.is_undefined() || initial.is_null() {
		return default_library_data();
	}
	let parsed = JSON::stringify(initial)
		.ok()
		.map(String::from)
		.and_then(|json| serde_json::from_str(&json).ok());
	parsed.unwrap_or_else(|| {
		tracing::warn!("initial library data is not JSON; using defaults");
		default_library_data()
	})
}

/// The page-wide library object, when one exists.
fn page_global() -> Option<Object> {
	let window = web_sys::window()?;
	Reflect::get(&window, &GLOBAL_KEY.into())
		.ok()
		.filter(JsValue::is_object)
		.map(|global| global.unchecked_into::<Object>())
}

fn global_version(global: &Object) -> u32 {
	Reflect::get(global, &"version".into())
		.ok()
		.and_then(|version| version.as_f64())
		.filter(|version| version.is_finite() && *version > 0.0)
		.map_or(0, |version| version.min(f64::from(u32::MAX)) as u32)
}

/// JSON keys of the page object other than `version` and `sliders`.
fn global_data(global: &Object) -> Map<String, Value> {
	let mut data = Map::new();
	for key in Object::keys(global).iter() {
		let Some(name) = key.as_string() else {
			continue;
		};
		if name == "version" || name == "sliders" {
			continue;
		}
		let value = Reflect::get(global, &key)
			.ok()
			.and_then(|value| JSON::stringify(&value).ok())
			.map(String::from)
			.and_then(|json| serde_json::from_str(&json).ok());
		match value {
			Some(value) => {
				data.insert(name, value);
			}
			None => tracing::debug!(key = %name, "skipping non-JSON library data key"),
		}
	}
	data
}

/// Updates `window.expLibraryData` in place.
///
/// `assign` carries the keys of an upgrade; they are written together with
/// `version`. The `sliders` array is always rebuilt from the registry.
fn publish(assign: Option<&Value>) {
	let Some((version, ids)) = with_registry(|registry| (registry.version(), registry.ids()))
	else {
		return;
	};
	fail_soft("publishing library data", || {
		let window =
			web_sys::window().ok_or_else(|| DomError::new("publish", "no window available"))?;
		let global = match page_global() {
			Some(global) => global,
			None => {
				let global = Object::new();
				Reflect::set(&window, &GLOBAL_KEY.into(), &global).map_err(js_error("publish"))?;
				global
			}
		};
		if let Some(Value::Object(keys)) = assign {
			for (key, value) in keys {
				let value = JSON::parse(&value.to_string()).map_err(js_error("publish"))?;
				Reflect::set(&global, &key.into(), &value).map_err(js_error("publish"))?;
			}
			Reflect::set(&global, &"version".into(), &JsValue::from(version))
				.map_err(js_error("publish"))?;
		}
		let handles: Array = ids
			.into_iter()
			.map(|id| JsValue::from(SliderHandle { id }))
			.collect();
		Reflect::set(&global, &"sliders".into(), &handles).map_err(js_error("publish"))?;
		Ok(())
	});
}
