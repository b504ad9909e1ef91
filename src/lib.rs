//! # tslider
//!
//! A horizontal content slider for the browser: one slide visible at a
//! time, autoplay, prev/next buttons, pagination dots and mouse/touch
//! swipes.
//!
//! The controller is platform-neutral and lives in `tslider-core`; this
//! crate re-exports it. On `wasm32` the browser bindings are available as
//! [`web`].
//!
//! ## Feature Flags
//!
//! - `testing` - in-memory DOM host and virtual clock (`tslider::testing`)
//! - `console_error_panic_hook` - readable panics in the browser console
//!
//! ## Example
//!
//! ```rust,ignore
//! use tslider::{Registry, SliderOptions, default_library_data};
//!
//! let mut registry = Registry::new(host);
//! registry.bootstrap(default_library_data(), 1);
//! let id = registry
//!     .initialize_slider("#hero", SliderOptions::default().interval(5000))
//!     .expect("slider mounted");
//! registry.handle(id).unwrap().next();
//! ```

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use tslider_core::*;
