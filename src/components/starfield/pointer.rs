//! Pointer interaction state machine for the starfield.
//!
//! One instance tracks hover and pinned-tooltip state across the whole star
//! set. Stars are referenced by index into the owning scene's star list.
//! Transitions return a [`PointerUpdate`] describing the tooltip side
//! effect; the caller (the canvas component) applies it to the DOM, which
//! keeps this module free of browser types and testable on the host.

/// Current interaction mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerMode {
	#[default]
	Idle,
	/// Pointer is over a star; the tooltip follows the pointer.
	Hover(usize),
	/// Tooltip locked open by a click. Survives pointer movement and
	/// mouseleave until explicitly dismissed.
	Pinned(usize),
}

/// Tooltip side effect requested by a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerUpdate {
	/// Nothing to do (also used while pinned ignores movement).
	None,
	/// Show or reposition the hover tooltip for the given star.
	ShowHover(usize),
	/// Show the pinned tooltip for the given star at the click position.
	ShowPinned(usize),
	/// Hide the tooltip.
	Hide,
}

/// The machine itself. At most one star is "active" (hovered or pinned) at
/// any time.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerState {
	mode: PointerMode,
}

impl PointerState {
	pub fn mode(&self) -> PointerMode {
		self.mode
	}

	pub fn hovered(&self) -> Option<usize> {
		match self.mode {
			PointerMode::Hover(index) => Some(index),
			_ => None,
		}
	}

	pub fn pinned(&self) -> Option<usize> {
		match self.mode {
			PointerMode::Pinned(index) => Some(index),
			_ => None,
		}
	}

	pub fn is_pinned(&self) -> bool {
		matches!(self.mode, PointerMode::Pinned(_))
	}

	/// Whether the given star should render as active (enlarged, glowing).
	pub fn is_active(&self, index: usize) -> bool {
		matches!(self.mode, PointerMode::Hover(i) | PointerMode::Pinned(i) if i == index)
	}

	/// Pointer moved over the canvas; `hit` is the star under it, if any.
	///
	/// While pinned this is a no-op: the pinned tooltip ignores hover, and
	/// its position is driven only by pin/unpin events.
	pub fn pointer_moved(&mut self, hit: Option<usize>) -> PointerUpdate {
		if self.is_pinned() {
			return PointerUpdate::None;
		}
		match hit {
			Some(index) => {
				self.mode = PointerMode::Hover(index);
				PointerUpdate::ShowHover(index)
			}
			None => {
				self.mode = PointerMode::Idle;
				PointerUpdate::Hide
			}
		}
	}

	/// Pointer left the canvas. A pinned tooltip survives; hover does not.
	pub fn pointer_left(&mut self) -> PointerUpdate {
		if self.is_pinned() {
			return PointerUpdate::None;
		}
		self.mode = PointerMode::Idle;
		PointerUpdate::Hide
	}

	/// Click on the canvas; `hit` is the star under the pointer, if any.
	///
	/// Clicking the pinned star again unpins (toggle); clicking another
	/// star re-pins; clicking empty canvas dismisses a pinned tooltip.
	pub fn clicked(&mut self, hit: Option<usize>) -> PointerUpdate {
		match hit {
			Some(index) => {
				if self.mode == PointerMode::Pinned(index) {
					self.mode = PointerMode::Idle;
					PointerUpdate::Hide
				} else {
					self.mode = PointerMode::Pinned(index);
					PointerUpdate::ShowPinned(index)
				}
			}
			None => self.dismiss_pinned(),
		}
	}

	/// Click landed outside both the canvas and the tooltip region.
	pub fn outside_click(&mut self) -> PointerUpdate {
		self.dismiss_pinned()
	}

	fn dismiss_pinned(&mut self) -> PointerUpdate {
		if self.is_pinned() {
			self.mode = PointerMode::Idle;
			PointerUpdate::Hide
		} else {
			PointerUpdate::None
		}
	}
}
