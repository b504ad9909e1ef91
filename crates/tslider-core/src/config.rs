//! Slider options and their merge rules.
//!
//! Options arrive in the JSON shape of the JavaScript option object and
//! are merged shallowly over the defaults: an absent top-level key keeps
//! its default, but a nested object (`pagination`, `navigation`,
//! `styles`) that is present replaces the default object wholesale. Its
//! missing keys are empty, not back-filled:
//!
//! ```
//! use tslider_core::config::{ElementTarget, SliderOptions};
//!
//! let options: SliderOptions =
//!     SliderOptions::from_json_str(r#"{"pagination": {"el": ".dots"}}"#).unwrap();
//! assert_eq!(options.pagination.el, ElementTarget::Selector(".dots".to_string()));
//! assert!(!options.pagination.clickable);
//! ```

use serde::{Deserialize, Deserializer};

use crate::error::{Result, SliderError};
use crate::style::DEFAULT_ACTIVE_DOT_CLASS;

/// Default autoplay period in milliseconds.
pub const DEFAULT_INTERVAL_MS: u32 = 3000;

/// Where a navigation button or the pagination container comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementTarget<N> {
	/// Not configured.
	None,
	/// Resolved with `document.querySelector` at mount time.
	Selector(String),
	/// A live element supplied by the caller.
	Element(N),
	/// Configured with a value that is neither a selector nor an element;
	/// the slider creates its own element.
	Create,
}

impl<N> Default for ElementTarget<N> {
	fn default() -> Self {
		Self::None
	}
}

impl<'de, N> Deserialize<'de> for ElementTarget<N> {
	fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		use serde_json::Value;

		Ok(match Value::deserialize(deserializer)? {
			Value::Null | Value::Bool(false) => Self::None,
			Value::String(selector) if selector.is_empty() => Self::None,
			Value::String(selector) => Self::Selector(selector),
			Value::Number(n) if n.as_f64() == Some(0.0) => Self::None,
			_ => Self::Create,
		})
	}
}

/// `pagination` options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = ""))]
pub struct PaginationOptions<N> {
	#[serde(default)]
	pub el: ElementTarget<N>,
	#[serde(default)]
	pub clickable: bool,
}

impl<N> Default for PaginationOptions<N> {
	fn default() -> Self {
		Self {
			el: ElementTarget::None,
			clickable: true,
		}
	}
}

/// `navigation` options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = ""), rename_all = "camelCase")]
pub struct NavigationOptions<N> {
	#[serde(default)]
	pub next_el: ElementTarget<N>,
	#[serde(default)]
	pub prev_el: ElementTarget<N>,
}

impl<N> Default for NavigationOptions<N> {
	fn default() -> Self {
		Self {
			next_el: ElementTarget::None,
			prev_el: ElementTarget::None,
		}
	}
}

/// `styles` options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOptions {
	/// Class toggled on the active dot. `None` when the caller replaced
	/// `styles` without naming one; dots are then never highlighted.
	#[serde(default)]
	pub active_dot: Option<String>,
}

impl Default for StyleOptions {
	fn default() -> Self {
		Self {
			active_dot: Some(DEFAULT_ACTIVE_DOT_CLASS.to_string()),
		}
	}
}

/// Complete slider configuration, immutable once a slider is mounted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, bound(deserialize = ""))]
pub struct SliderOptions<N = ()> {
	/// Enables timer-driven advance.
	pub autoplay: bool,
	pub pagination: PaginationOptions<N>,
	pub navigation: NavigationOptions<N>,
	/// Gates whether autoplay starts at mount.
	#[serde(rename = "loop")]
	pub loop_slides: bool,
	/// Autoplay period in milliseconds.
	pub interval: u32,
	pub styles: StyleOptions,
}

impl<N> Default for SliderOptions<N> {
	fn default() -> Self {
		Self {
			autoplay: true,
			pagination: PaginationOptions::default(),
			navigation: NavigationOptions::default(),
			loop_slides: true,
			interval: DEFAULT_INTERVAL_MS,
			styles: StyleOptions::default(),
		}
	}
}

impl<N> SliderOptions<N> {
	/// Merges a JSON option object over the defaults.
	pub fn from_json(value: serde_json::Value) -> Result<Self> {
		if value.is_null() {
			return Ok(Self::default());
		}
		serde_json::from_value(value).map_err(|e| SliderError::InvalidOptions(e.to_string()))
	}

	/// Parses and merges a JSON option string over the defaults.
	pub fn from_json_str(json: &str) -> Result<Self> {
		let value: serde_json::Value =
			serde_json::from_str(json).map_err(|e| SliderError::InvalidOptions(e.to_string()))?;
		Self::from_json(value)
	}

	/// Rejects configurations no slider can run with.
	pub fn validate(&self) -> Result<()> {
		if self.interval == 0 {
			return Err(SliderError::InvalidInterval);
		}
		Ok(())
	}

	/// Sets `autoplay`.
	pub fn autoplay(mut self, enabled: bool) -> Self {
		self.autoplay = enabled;
		self
	}

	/// Sets `loop`.
	pub fn loop_slides(mut self, enabled: bool) -> Self {
		self.loop_slides = enabled;
		self
	}

	/// Sets the autoplay period.
	pub fn interval(mut self, interval_ms: u32) -> Self {
		self.interval = interval_ms;
		self
	}

	/// Replaces the `pagination` object.
	pub fn pagination(mut self, el: ElementTarget<N>, clickable: bool) -> Self {
		self.pagination = PaginationOptions { el, clickable };
		self
	}

	/// Replaces the `navigation` object.
	pub fn navigation(mut self, prev_el: ElementTarget<N>, next_el: ElementTarget<N>) -> Self {
		self.navigation = NavigationOptions { next_el, prev_el };
		self
	}

	/// Replaces the `styles` object.
	pub fn active_dot(mut self, class: Option<String>) -> Self {
		self.styles = StyleOptions { active_dot: class };
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	type Options = SliderOptions<()>;

	#[rstest]
	fn test_defaults() {
		let options = Options::default();
		assert!(options.autoplay);
		assert!(options.loop_slides);
		assert_eq!(options.interval, 3000);
		assert_eq!(options.pagination.el, ElementTarget::None);
		assert!(options.pagination.clickable);
		assert_eq!(options.navigation.next_el, ElementTarget::None);
		assert_eq!(options.styles.active_dot.as_deref(), Some("active"));
	}

	#[rstest]
	fn test_empty_object_is_defaults() {
		let options = Options::from_json(json!({})).unwrap();
		assert_eq!(options, Options::default());
	}

	#[rstest]
	fn test_null_is_defaults() {
		let options = Options::from_json(serde_json::Value::Null).unwrap();
		assert_eq!(options, Options::default());
	}

	#[rstest]
	fn test_top_level_override_keeps_other_defaults() {
		let options = Options::from_json(json!({ "interval": 500, "loop": false })).unwrap();
		assert_eq!(options.interval, 500);
		assert!(!options.loop_slides);
		assert!(options.autoplay);
		assert!(options.pagination.clickable);
	}

	#[rstest]
	fn test_nested_object_replaces_defaults_wholesale() {
		let options = Options::from_json(json!({ "pagination": { "el": ".dots" } })).unwrap();
		assert_eq!(options.pagination.el, ElementTarget::Selector(".dots".into()));
		// `clickable` is not back-filled from the defaults
		assert!(!options.pagination.clickable);
	}

	#[rstest]
	fn test_styles_without_active_dot() {
		let options = Options::from_json(json!({ "styles": {} })).unwrap();
		assert_eq!(options.styles.active_dot, None);
	}

	#[rstest]
	fn test_navigation_camel_case_keys() {
		let options =
			Options::from_json(json!({ "navigation": { "nextEl": "#next", "prevEl": "#prev" } }))
				.unwrap();
		assert_eq!(options.navigation.next_el, ElementTarget::Selector("#next".into()));
		assert_eq!(options.navigation.prev_el, ElementTarget::Selector("#prev".into()));
	}

	#[rstest]
	#[case(json!(null), ElementTarget::None)]
	#[case(json!(false), ElementTarget::None)]
	#[case(json!(""), ElementTarget::None)]
	#[case(json!(0), ElementTarget::None)]
	#[case(json!(".pager"), ElementTarget::Selector(".pager".into()))]
	#[case(json!(true), ElementTarget::Create)]
	#[case(json!({}), ElementTarget::Create)]
	#[case(json!(1), ElementTarget::Create)]
	fn test_element_target_truthiness(
		#[case] value: serde_json::Value,
		#[case] expected: ElementTarget<()>,
	) {
		let options = Options::from_json(json!({ "pagination": { "el": value } })).unwrap();
		assert_eq!(options.pagination.el, expected);
	}

	#[rstest]
	fn test_invalid_shape_is_rejected() {
		let err = Options::from_json(json!({ "interval": "fast" })).unwrap_err();
		assert!(matches!(err, SliderError::InvalidOptions(_)));
	}

	#[rstest]
	fn test_zero_interval_fails_validation() {
		let options = Options::default().interval(0);
		assert_eq!(options.validate(), Err(SliderError::InvalidInterval));
	}

	#[rstest]
	fn test_builder_replaces_nested_objects() {
		let options = Options::default()
			.pagination(ElementTarget::Create, false)
			.active_dot(Some("on".into()));
		assert_eq!(options.pagination.el, ElementTarget::Create);
		assert!(!options.pagination.clickable);
		assert_eq!(options.styles.active_dot.as_deref(), Some("on"));
	}
}
