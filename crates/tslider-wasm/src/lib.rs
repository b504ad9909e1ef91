//! # tslider-wasm
//!
//! Browser host for `tslider-core`.
//!
//! - [`host`]: `web_sys` implementation of the `Dom` and `Scheduler` traits
//! - [`runtime`]: the per-thread registry native callbacks are routed into
//! - [`bindings`]: the JavaScript surface (`bootstrap`, `initializeSlider`,
//!   `sliders`, handle objects)
//! - [`logging`]: `tracing` subscriber writing to the browser console
//!
//! ## Usage from JavaScript
//!
//! ```js
//! import init, { initializeSlider } from "./tslider_wasm.js";
//!
//! await init();
//! initializeSlider("#hero", { interval: 5000, pagination: { el: ".dots" } });
//! window.expLibraryData.sliders[0].next();
//! ```

pub mod logging;

#[cfg(target_arch = "wasm32")]
pub mod bindings;
#[cfg(target_arch = "wasm32")]
pub mod host;
#[cfg(target_arch = "wasm32")]
mod options;
#[cfg(target_arch = "wasm32")]
pub mod runtime;

#[cfg(target_arch = "wasm32")]
pub use bindings::{SliderHandle, bootstrap, initialize_slider, sliders};
#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
