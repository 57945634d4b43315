use crate::arena::NodeId;
use crate::Direction;

/// The gap between two structural positions of the chain.
///
/// `prev`/`from_start` describe the head side and `next`/`from_end` the tail
/// side. Traversal code asks for the side *behind* or *ahead* of the cursor for a
/// given direction instead of branching on the direction itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
	pub prev:       Option<NodeId>,
	pub next:       Option<NodeId>,
	pub from_start: usize,
	pub from_end:   usize,
}

/// One side of the cursor: the adjacent node and how many nodes lie that way.
pub(crate) struct Side<'c> {
	pub node:  &'c mut Option<NodeId>,
	pub count: &'c mut usize,
}

impl Cursor {
	#[inline]
	pub const fn new() -> Self {
		Self {
			prev:       None,
			next:       None,
			from_start: 0,
			from_end:   0,
		}
	}

	#[inline]
	pub const fn ahead(&self, dir: Direction) -> Option<NodeId> {
		match dir {
			Direction::Forward  => self.next,
			Direction::Backward => self.prev,
		}
	}

	#[inline]
	pub const fn behind(&self, dir: Direction) -> Option<NodeId> {
		self.ahead(dir.flip())
	}

	#[inline]
	pub const fn remaining(&self, dir: Direction) -> usize {
		match dir {
			Direction::Forward  => self.from_end,
			Direction::Backward => self.from_start,
		}
	}

	#[inline]
	pub const fn travelled(&self, dir: Direction) -> usize {
		self.remaining(dir.flip())
	}

	/// Split into `(behind, ahead)` relative to `dir`.
	#[inline]
	pub fn sides(&mut self, dir: Direction) -> (Side<'_>, Side<'_>) {
		let start = Side { node: &mut self.prev, count: &mut self.from_start };
		let end   = Side { node: &mut self.next, count: &mut self.from_end };

		match dir {
			Direction::Forward  => (start, end),
			Direction::Backward => (end, start),
		}
	}

	/// Step over `crossed`, the node ahead in `dir`. `beyond` is whatever lies past it.
	#[inline]
	pub fn cross(&mut self, dir: Direction, crossed: NodeId, beyond: Option<NodeId>) {
		let (behind, ahead) = self.sides(dir);
		*behind.node   = Some(crossed);
		*behind.count += 1;
		*ahead.node    = beyond;
		*ahead.count  -= 1;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sides_mirror_each_other() {
		let mut cursor = Cursor { from_start: 2, from_end: 5, ..Cursor::new() };

		assert_eq!(cursor.remaining(Direction::Forward), 5);
		assert_eq!(cursor.remaining(Direction::Backward), 2);
		assert_eq!(cursor.travelled(Direction::Forward), 2);

		let (behind, ahead) = cursor.sides(Direction::Backward);
		*behind.count += 1;
		*ahead.count  -= 1;

		assert_eq!((cursor.from_start, cursor.from_end), (1, 6));
	}
}
