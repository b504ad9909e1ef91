//! Error types for slider setup and runtime operations.

use crate::host::DomError;

/// Errors raised while mounting or driving a slider.
///
/// None of these ever reach the page: the registry stops them at its
/// dispatch boundary and logs them (see [`crate::dispatch::fail_soft`]).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SliderError {
	/// The container selector matched nothing.
	#[error("Slider element not found: {0}")]
	ContainerNotFound(String),
	/// The container has no track or no slides.
	#[error("Slider requires a .TSslider-wrapper and .slide elements")]
	MissingStructure,
	/// The autoplay interval was zero.
	#[error("autoplay interval must be a positive number of milliseconds")]
	InvalidInterval,
	/// A navigation or pagination selector matched nothing.
	#[error("element not found: {0}")]
	ElementNotFound(String),
	/// A pagination dot carried a missing or non-numeric `data-index`.
	#[error("pagination dot carries an invalid index: {0:?}")]
	InvalidDotIndex(Option<String>),
	/// A press or move event arrived without a pointer position.
	#[error("pointer event carried no coordinates")]
	MissingPointer,
	/// The option object could not be read.
	#[error("invalid slider options: {0}")]
	InvalidOptions(String),
	/// A slider was requested before the registry was bootstrapped.
	#[error("slider library has not been bootstrapped")]
	NotBootstrapped,
	/// The host rejected a DOM or timer operation.
	#[error(transparent)]
	Dom(#[from] DomError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SliderError>;
