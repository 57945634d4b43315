//! Node storage for the chain.
//!
//! Nodes live in a `Vec` of slots and link to each other by index. Removed slots
//! are threaded onto a free list and reused by the next insert, so a `NodeId`
//! stays valid until its node is removed.

use std::collections::TryReserveError;
use std::mem;
use std::ops::{Index, IndexMut};

use crate::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
	pub elem: T,
	pub prev: Option<NodeId>,
	pub next: Option<NodeId>,
}

impl<T> Node<T> {
	#[inline]
	pub const fn new(elem: T, prev: Option<NodeId>, next: Option<NodeId>) -> Self {
		Self { elem, prev, next }
	}

	/// The neighbour one step away in `dir`.
	#[inline]
	pub const fn towards(&self, dir: Direction) -> Option<NodeId> {
		match dir {
			Direction::Forward  => self.next,
			Direction::Backward => self.prev,
		}
	}
}

#[derive(Debug, Clone)]
enum Slot<T> {
	Occupied(Node<T>),
	/// Index of the next vacant slot.
	Vacant(Option<usize>),
}

#[derive(Debug, Clone)]
pub(crate) struct Arena<T> {
	slots: Vec<Slot<T>>,
	free:  Option<usize>,
	len:   usize,
}

impl<T> Arena<T> {
	#[inline]
	pub const fn new() -> Self {
		Self {
			slots: Vec::new(),
			free:  None,
			len:   0,
		}
	}

	#[inline]
	pub const fn len(&self) -> usize {
		self.len
	}

	/// Make room for `additional` more nodes. Vacant slots count as room.
	pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
		let vacant = self.slots.len() - self.len;
		self.slots.try_reserve(additional.saturating_sub(vacant))
	}

	/// Store a node, reporting allocation failure instead of aborting.
	pub fn try_insert(&mut self, node: Node<T>) -> Result<NodeId, TryReserveError> {
		if self.free.is_none() {
			self.slots.try_reserve(1)?;
		}
		Ok(self.insert(node))
	}

	pub fn insert(&mut self, node: Node<T>) -> NodeId {
		let index = match self.free {
			Some(index) => {
				self.free = match self.slots[index] {
					Slot::Vacant(next) => next,
					Slot::Occupied(_)  => unreachable!("free list points at an occupied slot"),
				};
				self.slots[index] = Slot::Occupied(node);
				index
			},
			None => {
				self.slots.push(Slot::Occupied(node));
				self.slots.len() - 1
			},
		};

		self.len += 1;
		NodeId(index)
	}

	pub fn remove(&mut self, id: NodeId) -> Node<T> {
		match mem::replace(&mut self.slots[id.0], Slot::Vacant(self.free)) {
			Slot::Occupied(node) => {
				self.free = Some(id.0);
				self.len -= 1;
				node
			},
			Slot::Vacant(_) => unreachable!("removed a vacant node slot"),
		}
	}

	pub fn clear(&mut self) {
		self.slots.clear();
		self.free = None;
		self.len  = 0;
	}
}

impl<T> Index<NodeId> for Arena<T> {
	type Output = Node<T>;

	#[inline]
	fn index(&self, id: NodeId) -> &Self::Output {
		match &self.slots[id.0] {
			Slot::Occupied(node) => node,
			Slot::Vacant(_)      => unreachable!("dangling node id"),
		}
	}
}

impl<T> IndexMut<NodeId> for Arena<T> {
	#[inline]
	fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
		match &mut self.slots[id.0] {
			Slot::Occupied(node) => node,
			Slot::Vacant(_)      => unreachable!("dangling node id"),
		}
	}
}
