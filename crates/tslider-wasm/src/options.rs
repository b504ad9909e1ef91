//! JavaScript option objects to [`SliderOptions`].
//!
//! Plain fields go through `JSON.stringify` and serde. Element-valued
//! fields do not survive that trip (an element serializes as `{}`), so
//! they are read back with `Reflect` and upgraded when they hold a live
//! `HTMLElement`.

use js_sys::{JSON, Reflect};
use tslider_core::{ElementTarget, Result, SliderError, SliderOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlElement};

pub(crate) fn from_js(options: &JsValue) -> Result<SliderOptions<Element>> {
	if options.is_undefined() || options.is_null() {
		return Ok(SliderOptions::default());
	}
	let json: String = JSON::stringify(options)
		.map_err(|err| SliderError::InvalidOptions(format!("{err:?}")))?
		.into();
	let mut parsed = SliderOptions::from_json_str(&json)?;

	if let Some(el) = element_at(options, &["pagination", "el"]) {
		parsed.pagination.el = ElementTarget::Element(el);
	}
	if let Some(el) = element_at(options, &["navigation", "nextEl"]) {
		parsed.navigation.next_el = ElementTarget::Element(el);
	}
	if let Some(el) = element_at(options, &["navigation", "prevEl"]) {
		parsed.navigation.prev_el = ElementTarget::Element(el);
	}
	Ok(parsed)
}

fn element_at(root: &JsValue, path: &[&str]) -> Option<Element> {
	let mut value = root.clone();
	for key in path {
		if !value.is_object() {
			return None;
		}
		value = Reflect::get(&value, &JsValue::from_str(key)).ok()?;
	}
	value.dyn_into::<HtmlElement>().ok().map(Element::from)
}
