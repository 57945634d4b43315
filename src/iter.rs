use std::fmt::Debug;
use std::iter::FusedIterator;
use std::mem;

use tracing::{debug, trace};

use crate::arena::{Arena, Node, NodeId};
use crate::cursor::Cursor;
use crate::{Direction, Error};

/// A doubly linked sequence with a single cursor that can be walked in either direction.
///
/// The cursor sits *between* elements. `next` crosses the element ahead of it,
/// `previous` the one behind it, and which way is "ahead" depends on the
/// current [`Direction`]. Reversing never reorders anything.
///
/// Nodes live in an arena and link to each other by index, each element is owned
/// by the iterator and dropped with it.
pub struct RevIter<T> {
	nodes:     Arena<T>,
	head:      Option<NodeId>,
	tail:      Option<NodeId>,
	cursor:    Cursor,
	direction: Direction,
}

impl<T> RevIter<T> {
	/// Create a new empty iterator, running forward. `O(1)`.
	/// Does not allocate any memory.
	/// ```
	/// # use reviter::{RevIter, Direction};
	/// let it: RevIter<u8> = RevIter::new();
	/// assert!(it.is_empty());
	/// assert_eq!(it.direction(), Direction::Forward);
	/// assert_eq!(it.distance_to_end(), 0);
	/// ```
	#[inline]
	pub const fn new() -> Self {
		Self {
			nodes:     Arena::new(),
			head:      None,
			tail:      None,
			cursor:    Cursor::new(),
			direction: Direction::Forward,
		}
	}

	/// Create a new empty iterator with room for `capacity` elements.
	/// Fails instead of aborting if the storage can't be allocated.
	/// ```
	/// # use reviter::RevIter;
	/// let it = RevIter::<u64>::try_with_capacity(16).unwrap();
	/// assert!(it.is_empty());
	///
	/// assert!(RevIter::<u64>::try_with_capacity(usize::MAX).is_err());
	/// ```
	pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
		let mut it = Self::new();
		it.nodes.try_reserve(capacity)?;
		Ok(it)
	}

	/// Number of elements. `O(1)`.
	#[inline]
	pub const fn len(&self) -> usize {
		self.nodes.len()
	}

	#[inline]
	pub const fn is_empty(&self) -> bool {
		self.len() == 0
	}

	#[inline]
	pub const fn direction(&self) -> Direction {
		self.direction
	}

	/// The first node when walking in `dir`.
	#[inline]
	const fn first(&self, dir: Direction) -> Option<NodeId> {
		match dir {
			Direction::Forward  => self.head,
			Direction::Backward => self.tail,
		}
	}

	/// Insert an element at the cursor. `O(1)`.
	/// The new element is always the one the following `next` returns,
	/// whichever way the iterator runs.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::new();
	/// it.add(5).unwrap();
	/// it.add(3).unwrap();
	///
	/// it.reset();
	/// assert_eq!(it.next(), Some(&3));
	/// assert_eq!(it.next(), Some(&5));
	/// assert_eq!(it.next(), None);
	/// ```
	pub fn add(&mut self, elem: T) -> Result<(), Error> {
		let id = self.nodes.try_insert(Node::new(elem, self.cursor.prev, self.cursor.next))?;
		self.splice(id);
		Ok(())
	}

	/// Link a freshly stored node into the gap at the cursor and put it ahead.
	fn splice(&mut self, id: NodeId) {
		let (prev, next) = (self.nodes[id].prev, self.nodes[id].next);

		match prev {
			Some(prev) => self.nodes[prev].next = Some(id),
			None       => self.head = Some(id),
		}
		match next {
			Some(next) => self.nodes[next].prev = Some(id),
			None       => self.tail = Some(id),
		}

		let (_, ahead) = self.cursor.sides(self.direction);
		*ahead.node   = Some(id);
		*ahead.count += 1;

		trace!(len = self.len(), "inserted at cursor");
	}

	/// Check whether `next` would return an element. `O(1)`.
	#[inline]
	pub const fn has_next(&self) -> bool {
		self.cursor.remaining(self.direction) > 0
	}

	/// Check whether `previous` would return an element. `O(1)`.
	#[inline]
	pub const fn has_previous(&self) -> bool {
		self.cursor.travelled(self.direction) > 0
	}

	fn step(&mut self) -> Option<NodeId> {
		let crossed = self.cursor.ahead(self.direction)?;
		let beyond  = self.nodes[crossed].towards(self.direction);
		self.cursor.cross(self.direction, crossed, beyond);
		Some(crossed)
	}

	/// Move the cursor over the element ahead and return it. `O(1)`.
	/// Returns `None` at the end of the current direction.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3]);
	/// assert_eq!(it.next(), Some(&1));
	///
	/// it.reverse();
	/// assert_eq!(it.next(), Some(&1));
	/// assert_eq!(it.next(), None);
	/// ```
	#[inline]
	pub fn next(&mut self) -> Option<&T> {
		self.step().map(|id| &self.nodes[id].elem)
	}

	/// Move the cursor back over the element behind it and return it. `O(1)`.
	/// Exactly mirrors `next`.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3]);
	/// assert_eq!(it.previous(), None);
	///
	/// it.next();
	/// it.next();
	/// assert_eq!(it.previous(), Some(&2));
	/// assert_eq!(it.distance_from_start(), 1);
	/// ```
	pub fn previous(&mut self) -> Option<&T> {
		self.reverse();
		let crossed = self.step();
		self.reverse();
		crossed.map(|id| &self.nodes[id].elem)
	}

	/// The element `next` would return, without moving. `O(1)`.
	#[inline]
	pub fn peek_next(&self) -> Option<&T> {
		self.cursor.ahead(self.direction).map(|id| &self.nodes[id].elem)
	}

	/// The element `previous` would return, without moving. `O(1)`.
	/// This is also the element `del` and `set` act on.
	#[inline]
	pub fn peek_previous(&self) -> Option<&T> {
		self.cursor.behind(self.direction).map(|id| &self.nodes[id].elem)
	}

	/// Remove the element just crossed and return it. `O(1)`.
	/// Fails with [`Error::AtBoundary`] if the cursor hasn't crossed anything.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3]);
	/// assert!(it.del().is_err());
	///
	/// it.next();
	/// assert_eq!(it.del(), Ok(1));
	/// assert_eq!(format!("{it:?}"), "[2, 3]");
	/// assert_eq!(it.distance_from_start(), 0);
	/// ```
	pub fn del(&mut self) -> Result<T, Error> {
		let target = self.cursor.behind(self.direction).ok_or(Error::AtBoundary)?;
		let node   = self.nodes.remove(target);

		match node.prev {
			Some(prev) => self.nodes[prev].next = node.next,
			None       => self.head = node.next,
		}
		match node.next {
			Some(next) => self.nodes[next].prev = node.prev,
			None       => self.tail = node.prev,
		}

		let (behind, _) = self.cursor.sides(self.direction);
		*behind.node   = node.towards(self.direction.flip());
		*behind.count -= 1;

		trace!(len = self.len(), "removed behind cursor");
		Ok(node.elem)
	}

	/// Replace the element just crossed, returning the old one. `O(1)`.
	/// Fails with [`Error::AtBoundary`] if the cursor hasn't crossed anything.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3]);
	/// it.next();
	/// it.next();
	/// assert_eq!(it.set(20), Ok(2));
	/// assert_eq!(format!("{it:?}"), "[1, 20, 3]");
	/// ```
	pub fn set(&mut self, elem: T) -> Result<T, Error> {
		let target = self.cursor.behind(self.direction).ok_or(Error::AtBoundary)?;
		Ok(mem::replace(&mut self.nodes[target].elem, elem))
	}

	/// Flip the traversal direction. `O(1)`.
	/// The cursor stays where it is, only what counts as "next" changes.
	#[inline]
	pub fn reverse(&mut self) {
		self.direction = !self.direction;
	}

	/// Move the cursor to the start of the current direction. `O(1)`.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3]);
	/// it.next();
	/// it.reverse();
	/// it.reset();
	/// assert_eq!(it.distance_to_end(), 3);
	/// assert_eq!(it.next(), Some(&3));
	/// ```
	pub fn reset(&mut self) {
		let first = self.first(self.direction);
		let (behind, ahead) = self.cursor.sides(self.direction);

		*ahead.count += mem::take(behind.count);
		*behind.node  = None;
		*ahead.node   = first;

		trace!(direction = ?self.direction, "cursor reset");
	}

	/// How many elements `previous` could still return. `O(1)`.
	#[inline]
	pub const fn distance_from_start(&self) -> usize {
		self.cursor.travelled(self.direction)
	}

	/// How many elements `next` could still return. `O(1)`.
	#[inline]
	pub const fn distance_to_end(&self) -> usize {
		self.cursor.remaining(self.direction)
	}

	/// Drop every element. The direction is kept. `O(n)`.
	pub fn clear(&mut self) {
		self.nodes.clear();
		self.head   = None;
		self.tail   = None;
		self.cursor = Cursor::new();
	}

	/// Iterate over every element in traversal order, ignoring the cursor. `O(1)`.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3]);
	/// it.next();
	/// assert_eq!(it.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
	///
	/// it.reverse();
	/// assert_eq!(it.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
	/// ```
	#[inline]
	pub fn iter(&self) -> Iter<'_, T> {
		Iter {
			nodes:     &self.nodes,
			front:     self.first(self.direction),
			back:      self.first(self.direction.flip()),
			len:       self.len(),
			direction: self.direction,
		}
	}

	/// Take every element out in traversal order. `O(n)`.
	pub fn into_vec(mut self) -> Vec<T> {
		let mut elems = Vec::with_capacity(self.len());
		let mut at = self.first(self.direction);

		while let Some(id) = at {
			let node = self.nodes.remove(id);
			at = node.towards(self.direction);
			elems.push(node.elem);
		}
		elems
	}
}

impl<T: Clone> RevIter<T> {
	/// Cross up to `limit` elements, adding a clone of each one `keep` accepts to `out`.
	fn harvest(&mut self, limit: usize, out: &mut Self, mut keep: impl FnMut(&T) -> bool) -> Result<(), Error> {
		for _ in 0..limit {
			let Some(id) = self.step() else { break };
			let elem = &self.nodes[id].elem;
			if keep(elem) {
				out.add(elem.clone())?;
			}
		}
		Ok(())
	}

	/// `add` leaves the collected elements back to front, so run `out` the other way
	/// from its start.
	fn finish_harvest(out: &mut Self) {
		out.reverse();
		out.reset();
	}

	/// Move the cursor `n` steps and return a new iterator of the elements crossed, in
	/// the order they were crossed. `O(n)`.
	/// A negative `n` moves against the current direction. The returned iterator
	/// runs backward with its cursor at its start.
	///
	/// Fails, leaving the cursor untouched, if `n` is zero or larger than what is
	/// left in that direction.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3, 4, 5]);
	///
	/// let mut visited = it.advance(2).unwrap();
	/// assert_eq!(visited.next(), Some(&1));
	/// assert_eq!(visited.next(), Some(&2));
	/// assert_eq!(visited.next(), None);
	///
	/// assert_eq!(it.distance_from_start(), 2);
	/// assert_eq!(it.peek_next(), Some(&3));
	///
	/// let back = it.advance(-2).unwrap();
	/// assert_eq!(format!("{back:?}"), "[2, 1]");
	///
	/// assert!(it.advance(0).is_err());
	/// assert!(it.advance(6).is_err());
	/// ```
	pub fn advance(&mut self, n: isize) -> Result<Self, Error> {
		let backwards = n < 0;
		let requested = n.unsigned_abs();
		let available = if backwards { self.distance_from_start() } else { self.distance_to_end() };

		if n == 0 {
			debug!("rejected advance by zero");
			return Err(Error::ZeroSteps);
		}
		if requested > available {
			debug!(requested, available, "rejected advance past the end");
			return Err(Error::OutOfRange { requested, available });
		}

		let mut visited = Self::try_with_capacity(requested)?;

		if backwards { self.reverse(); }
		let harvested = self.harvest(requested, &mut visited, |_| true);
		if backwards { self.reverse(); }
		harvested?;

		Self::finish_harvest(&mut visited);
		debug!(steps = n, "advanced");
		Ok(visited)
	}

	/// Collect clones of every element from the cursor to the end of the current
	/// direction that matches `predicate`. `O(n)`.
	/// The cursor is back where it was afterwards. The returned iterator runs
	/// backward, yielding matches in the order they were found.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3, 4, 5, 6]);
	/// it.next();
	///
	/// let even = it.find(|n| n % 2 == 0).unwrap();
	/// assert_eq!(format!("{even:?}"), "[2, 4, 6]");
	///
	/// assert_eq!(it.distance_from_start(), 1);
	/// assert_eq!(it.peek_next(), Some(&2));
	/// ```
	pub fn find(&mut self, predicate: impl FnMut(&T) -> bool) -> Result<Self, Error> {
		let saved = self.cursor;
		let mut found = Self::new();

		let harvested = self.harvest(self.distance_to_end(), &mut found, predicate);
		self.cursor = saved;
		harvested?;

		Self::finish_harvest(&mut found);
		debug!(matched = found.len(), "find finished");
		Ok(found)
	}
}

impl<T: PartialEq> RevIter<T> {
	/// Check whether any element equals `elem`. `O(n)`.
	/// ```
	/// # use reviter::RevIter;
	/// let it = RevIter::from(vec!["a", "b"]);
	/// assert!(it.contains(&"b"));
	/// assert!(!it.contains(&"c"));
	/// ```
	pub fn contains(&self, elem: &T) -> bool {
		self.iter().any(|e| e == elem)
	}
}



impl<T> Default for RevIter<T> {
	#[inline]
	fn default() -> Self {
		Self::new()
	}
}

impl<T: Clone> Clone for RevIter<T> {
	/// Clone every element. `O(n)`.
	/// Cursor position and direction are retained.
	fn clone(&self) -> Self {
		Self {
			nodes:     self.nodes.clone(),
			head:      self.head,
			tail:      self.tail,
			cursor:    self.cursor,
			direction: self.direction,
		}
	}
}

impl<T: Debug> Debug for RevIter<T> {
	/// Elements in traversal order.
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T: PartialEq> PartialEq for RevIter<T> {
	/// Same elements in the same traversal order; cursors are not compared.
	fn eq(&self, other: &Self) -> bool {
		self.len() == other.len() && self.iter().eq(other.iter())
	}
}

impl<T: Eq> Eq for RevIter<T> {}

impl<T> From<Vec<T>> for RevIter<T> {
	/// Create a forward iterator from a Vec, cursor at the start. `O(n)`.
	/// ```
	/// # use reviter::RevIter;
	/// let mut it = RevIter::from(vec![1, 2, 3]);
	/// assert_eq!(it.distance_to_end(), 3);
	/// assert_eq!(it.next(), Some(&1));
	/// ```
	fn from(elems: Vec<T>) -> Self {
		let mut it = Self::new();
		for elem in elems {
			let id = it.nodes.insert(Node::new(elem, it.cursor.prev, it.cursor.next));
			it.splice(id);
			it.step();
		}
		it.reset();
		it
	}
}

impl<T> FromIterator<T> for RevIter<T> {
	/// ```
	/// # use reviter::RevIter;
	/// let it = (1..=3).collect::<RevIter<_>>();
	/// assert_eq!(format!("{it:?}"), "[1, 2, 3]");
	/// ```
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::from(iter.into_iter().collect::<Vec<_>>())
	}
}

impl<'i, T> IntoIterator for &'i RevIter<T> {
	type Item     = &'i T;
	type IntoIter = Iter<'i, T>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}


/*
* =====================
* ===== Iter bits =====
* =====================
*/

/// Borrowing iterator over a [`RevIter`], see [`RevIter::iter`].
pub struct Iter<'i, T> {
	nodes:     &'i Arena<T>,
	front:     Option<NodeId>,
	back:      Option<NodeId>,
	len:       usize,
	direction: Direction,
}

impl<T> Clone for Iter<'_, T> {
	fn clone(&self) -> Self {
		Self { ..*self }
	}
}

impl<'i, T> Iterator for Iter<'i, T> {
	type Item = &'i T;

	#[inline]
	fn next(&mut self) -> Option<Self::Item> {
		if self.len == 0 { return None; }

		let nodes: &'i Arena<T> = self.nodes;
		let node = &nodes[self.front?];
		self.front = node.towards(self.direction);
		self.len -= 1;
		Some(&node.elem)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>)
		{ (self.len, Some(self.len)) }
}

impl<'i, T> DoubleEndedIterator for Iter<'i, T> {
	#[inline]
	fn next_back(&mut self) -> Option<Self::Item> {
		if self.len == 0 { return None; }

		let nodes: &'i Arena<T> = self.nodes;
		let node = &nodes[self.back?];
		self.back = node.towards(self.direction.flip());
		self.len -= 1;
		Some(&node.elem)
	}
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T: Debug> Debug for Iter<'_, T> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.debug_list().entries(self.clone()).finish()
	}
}
