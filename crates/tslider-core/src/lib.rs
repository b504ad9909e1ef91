//! # tslider-core
//!
//! Platform-neutral controller for a horizontal content slider: a
//! container whose track is translated to reveal one slide at a time,
//! with autoplay, prev/next buttons, pagination dots and swipe gestures.
//!
//! ## Architecture
//!
//! - [`host`]: the [`Dom`] and [`Scheduler`] traits a page implements
//! - [`config`]: option record and its shallow-merge rules
//! - [`slider`]: per-instance state and navigation/autoplay/drag logic
//! - [`registry`]: the versioned, process-wide owner of every slider
//! - [`dispatch`]: the fail-soft boundary all page entry points go through
//! - [`testing`]: in-memory host (feature `testing`)
//!
//! The browser host lives in `tslider-wasm`.
//!
//! ## Example
//!
//! ```ignore
//! use tslider_core::{Registry, SliderOptions, default_library_data};
//!
//! let mut registry = Registry::new(host);
//! registry.bootstrap(default_library_data(), 1);
//!
//! let id = registry
//!     .initialize_slider("#hero", SliderOptions::default().interval(5000))
//!     .expect("slider mounted");
//! registry.handle(id).unwrap().go_to(2);
//! ```

pub mod config;
pub mod dispatch;
pub mod drag;
pub mod error;
pub mod host;
mod navigation;
mod pagination;
pub mod registry;
pub mod slider;
pub mod style;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{ElementTarget, NavigationOptions, PaginationOptions, SliderOptions, StyleOptions};
pub use dispatch::fail_soft;
pub use drag::{DragState, SWIPE_THRESHOLD_PX, SwipeDecision};
pub use error::{Result, SliderError};
pub use host::{
	Binding, Dom, DomError, DomEvent, EventOutcome, Host, ListenerKey, PointerInput, Scheduler,
	SliderId, TimerId, TimerKey, TimerTask,
};
pub use registry::{
	GLOBAL_KEY, LIBRARY_VERSION, Lifecycle, Registry, SliderHandle, default_library_data,
};
pub use slider::{RESTART_DELAY_MS, Slider};
