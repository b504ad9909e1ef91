//! Prev/next buttons.

use crate::config::ElementTarget;
use crate::error::{Result, SliderError};
use crate::host::{Binding, DomEvent, Host};
use crate::slider::Slider;
use crate::style::{NEXT_BUTTON_CLASS, PREV_BUTTON_CLASS};

impl<N> Slider<N>
where
	N: Clone + PartialEq + std::fmt::Debug,
{
	/// Wires the prev/next buttons, creating default ones where none are
	/// configured.
	///
	/// Both buttons are resolved before either is wired, so a missing prev
	/// selector still leaves a default next button in the container.
	pub(crate) fn mount_navigation<H>(&mut self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		let navigation = &self.config.navigation;
		let prev = self.resolve_button(host, &navigation.prev_el, PREV_BUTTON_CLASS, "Prev");
		let next = self.resolve_button(host, &navigation.next_el, NEXT_BUTTON_CLASS, "Next");
		let (prev, next) = (prev?, next?);

		host.listen(&prev, DomEvent::Click, self.listener(Binding::PrevButton))?;
		host.listen(&next, DomEvent::Click, self.listener(Binding::NextButton))?;
		Ok(())
	}

	fn resolve_button<H>(
		&self,
		host: &H,
		target: &ElementTarget<N>,
		class_name: &str,
		label: &str,
	) -> Result<N>
	where
		H: Host<Node = N>,
	{
		match target {
			ElementTarget::Selector(selector) => host
				.query(selector)
				.ok_or_else(|| SliderError::ElementNotFound(selector.clone())),
			ElementTarget::Element(node) => Ok(node.clone()),
			ElementTarget::None | ElementTarget::Create => {
				let button = host.create_element("button")?;
				host.set_class_name(&button, class_name)?;
				host.set_text(&button, label)?;
				host.append_child(&self.container, &button)?;
				Ok(button)
			}
		}
	}
}
