//! Structural class names, inline style values and the default stylesheet.

/// Class of the slider container.
pub const CONTAINER_CLASS: &str = "TSslider";
/// Class of the translated track inside the container.
pub const TRACK_CLASS: &str = "TSslider-wrapper";
/// Class of each slide inside the track.
pub const SLIDE_CLASS: &str = "slide";
/// Class of the auto-created pagination container.
pub const PAGINATION_CLASS: &str = "ts-slider-pagination";
/// Class of each pagination dot.
pub const DOT_CLASS: &str = "ts-slider-dot";
/// Class of the auto-created previous button.
pub const PREV_BUTTON_CLASS: &str = "ts-slider-button-prev";
/// Class of the auto-created next button.
pub const NEXT_BUTTON_CLASS: &str = "ts-slider-button-next";
/// Default class marking the active dot.
pub const DEFAULT_ACTIVE_DOT_CLASS: &str = "active";

/// Track transition while idle.
pub const TRACK_TRANSITION: &str = "transform 0.3s ease";
/// Track transition while a drag is live.
pub const DRAG_TRANSITION: &str = "none";
/// Flex shorthand giving every slide the full container width.
pub const SLIDE_FLEX: &str = "0 0 100%";

/// Dataset key carrying a dot's slide index.
pub const DOT_INDEX_KEY: &str = "index";

/// Transform that snaps the track to `index`.
pub fn snapped_transform(index: usize) -> String {
	format!("translateX(-{}%)", index * 100)
}

/// Transform for a live drag offset.
pub fn dragged_transform(offset_px: f64) -> String {
	format!("translateX({}px)", offset_px)
}

/// Stylesheet injected once per bootstrap.
pub const STYLESHEET: &str = r#"
.TSslider {
	position: relative;
	overflow: hidden;
	width: 100%;
}
.TSslider-wrapper {
	display: flex;
	transition: transform 0.3s ease;
	gap: 10px;
	cursor: grab;
}
.TSslider-wrapper:active {
	cursor: grabbing;
}
.slide {
	flex: 0 0 100%;
	display: flex;
	justify-content: center;
	align-items: center;
	background-color: #f5f5f5;
	border-radius: 10px;
	overflow: hidden;
}
.ts-slider-pagination {
	position: absolute;
	bottom: 10px;
	left: 50%;
	transform: translateX(-50%);
	display: flex;
	gap: 8px;
}
.ts-slider-dot {
	width: 10px;
	height: 10px;
	background-color: rgba(0, 0, 0, 0.3);
	border-radius: 50%;
	cursor: pointer;
	transition: background-color 0.3s;
}
.ts-slider-dot.active {
	background-color: rgba(0, 0, 0, 0.8);
}
"#;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(0, "translateX(-0%)")]
	#[case(1, "translateX(-100%)")]
	#[case(4, "translateX(-400%)")]
	fn test_snapped_transform(#[case] index: usize, #[case] expected: &str) {
		assert_eq!(snapped_transform(index), expected);
	}

	#[rstest]
	fn test_dragged_transform_keeps_sign() {
		assert_eq!(dragged_transform(-51.0), "translateX(-51px)");
		assert_eq!(dragged_transform(12.5), "translateX(12.5px)");
	}
}
