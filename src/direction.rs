use std::ops::Not;

/// Which way `next` moves the cursor.
/// Flipping the direction never touches the elements or their order.
/// ```
/// # use reviter::Direction;
/// assert_eq!(Direction::default(), Direction::Forward);
/// assert_eq!(!Direction::Forward, Direction::Backward);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
	/// Head to tail.
	#[default]
	Forward,
	/// Tail to head.
	Backward,
}

impl Direction {
	#[inline]
	pub const fn flip(self) -> Self {
		match self {
			Self::Forward  => Self::Backward,
			Self::Backward => Self::Forward,
		}
	}

	#[inline]
	pub const fn is_forward(self) -> bool {
		matches!(self, Self::Forward)
	}
}

impl Not for Direction {
	type Output = Self;

	#[inline]
	fn not(self) -> Self::Output {
		self.flip()
	}
}
