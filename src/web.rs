//! Browser bindings
//!
//! This module provides access to tslider-wasm: the `web_sys` host, the
//! per-thread registry and the JavaScript entry points.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tslider::web::runtime::with_registry;
//!
//! let count = with_registry(|registry| registry.len());
//! ```

pub use tslider_wasm::*;
