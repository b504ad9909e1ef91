//! Pagination dots.

use crate::config::ElementTarget;
use crate::error::{Result, SliderError};
use crate::host::{Binding, DomEvent, Host, PointerInput};
use crate::slider::Slider;
use crate::style::{DOT_CLASS, DOT_INDEX_KEY, PAGINATION_CLASS};

impl<N> Slider<N>
where
	N: Clone + PartialEq + std::fmt::Debug,
{
	/// Renders one dot per slide into the configured target and, when
	/// clickable, delegates dot clicks from the container.
	pub(crate) fn mount_pagination<H>(&mut self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		let target = match &self.config.pagination.el {
			ElementTarget::None => return Ok(()),
			ElementTarget::Selector(selector) => host
				.query(selector)
				.ok_or_else(|| SliderError::ElementNotFound(selector.clone()))?,
			ElementTarget::Element(node) => node.clone(),
			ElementTarget::Create => {
				let node = host.create_element("div")?;
				host.set_class_name(&node, PAGINATION_CLASS)?;
				host.append_child(&self.container, &node)?;
				node
			}
		};

		let mut dots = Vec::with_capacity(self.slides.len());
		for index in 0..self.slides.len() {
			let dot = host.create_element("button")?;
			host.set_class_name(&dot, DOT_CLASS)?;
			host.set_data(&dot, DOT_INDEX_KEY, &index.to_string())?;
			if index == 0 {
				if let Some(active) = &self.config.styles.active_dot {
					host.toggle_class(&dot, active, true)?;
				}
			}
			host.append_child(&target, &dot)?;
			dots.push(dot);
		}
		self.dots = dots;

		if self.config.pagination.clickable {
			host.listen(
				&self.container,
				DomEvent::Click,
				self.listener(Binding::DotClick),
			)?;
		}
		Ok(())
	}

	/// Marks exactly the dot at the current index active.
	pub(crate) fn update_pagination<H>(&self, host: &H) -> Result<()>
	where
		H: Host<Node = N>,
	{
		let Some(active) = &self.config.styles.active_dot else {
			return Ok(());
		};
		for (index, dot) in self.dots.iter().enumerate() {
			host.toggle_class(dot, active, index == self.current_index)?;
		}
		Ok(())
	}

	/// Delegated click on the container. Clicks that did not land on a dot
	/// are ignored.
	pub(crate) fn dot_click<H>(&mut self, host: &H, input: &PointerInput<N>) -> Result<()>
	where
		H: Host<Node = N>,
	{
		let Some(target) = &input.target else {
			return Ok(());
		};
		if !host.has_class(target, DOT_CLASS) {
			return Ok(());
		}
		let raw = host.data(target, DOT_INDEX_KEY);
		let index = raw
			.as_deref()
			.and_then(|value| value.trim().parse::<i64>().ok())
			.ok_or_else(|| SliderError::InvalidDotIndex(raw.clone()))?;
		let moved = self.go_to(host, index);
		let restarted = self.restart_autoplay(host);
		moved.and(restarted)
	}
}
