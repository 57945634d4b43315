use proptest::prelude::*;
use reviter::{Direction, RevIter};

#[derive(Debug, Clone)]
enum Op {
	Add(i32),
	Next,
	Previous,
	Del,
	Set(i32),
	Reverse,
	Reset,
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		3 => any::<i32>().prop_map(Op::Add),
		3 => Just(Op::Next),
		2 => Just(Op::Previous),
		2 => Just(Op::Del),
		1 => any::<i32>().prop_map(Op::Set),
		1 => Just(Op::Reverse),
		1 => Just(Op::Reset),
	]
}

/// Plain `Vec` rendition: `pos` counts elements on the head side of the cursor.
#[derive(Debug, Default)]
struct Model {
	elems:     Vec<i32>,
	pos:       usize,
	direction: Direction,
}

impl Model {
	fn forward(&self) -> bool {
		self.direction == Direction::Forward
	}

	/// Index of the element behind the cursor in the current direction.
	fn behind(&self) -> Option<usize> {
		match self.forward() {
			true  => self.pos.checked_sub(1),
			false => (self.pos < self.elems.len()).then_some(self.pos),
		}
	}

	fn step(&mut self, forward: bool) -> Option<i32> {
		if forward {
			let elem = *self.elems.get(self.pos)?;
			self.pos += 1;
			Some(elem)
		} else {
			self.pos = self.pos.checked_sub(1)?;
			Some(self.elems[self.pos])
		}
	}

	fn apply(&mut self, op: &Op) -> Option<i32> {
		match *op {
			Op::Add(v) => {
				self.elems.insert(self.pos, v);
				if !self.forward() { self.pos += 1; }
				None
			},
			Op::Next     => self.step(self.forward()),
			Op::Previous => self.step(!self.forward()),
			Op::Del => {
				let at = self.behind()?;
				if self.forward() { self.pos -= 1; }
				Some(self.elems.remove(at))
			},
			Op::Set(v) => {
				let at = self.behind()?;
				Some(std::mem::replace(&mut self.elems[at], v))
			},
			Op::Reverse => { self.direction = !self.direction; None },
			Op::Reset => {
				self.pos = if self.forward() { 0 } else { self.elems.len() };
				None
			},
		}
	}
}

fn apply(it: &mut RevIter<i32>, op: &Op) -> Option<i32> {
	match *op {
		Op::Add(v)   => { it.add(v).unwrap(); None },
		Op::Next     => it.next().copied(),
		Op::Previous => it.previous().copied(),
		Op::Del      => it.del().ok(),
		Op::Set(v)   => it.set(v).ok(),
		Op::Reverse  => { it.reverse(); None },
		Op::Reset    => { it.reset(); None },
	}
}

fn traversal(model: &Model) -> Vec<i32> {
	match model.forward() {
		true  => model.elems.clone(),
		false => model.elems.iter().rev().copied().collect(),
	}
}

proptest! {
	#[test]
	fn matches_vec_model(ops in proptest::collection::vec(op(), 0..64)) {
		let mut it = RevIter::new();
		let mut model = Model::default();

		for op in &ops {
			prop_assert_eq!(apply(&mut it, op), model.apply(op), "result of {:?}", op);

			let len = model.elems.len();
			let travelled = if model.forward() { model.pos } else { len - model.pos };

			prop_assert_eq!(it.len(), len);
			prop_assert_eq!(it.distance_from_start() + it.distance_to_end(), len);
			prop_assert_eq!(it.distance_from_start(), travelled);
			prop_assert_eq!(it.has_next(), travelled < len);
			prop_assert_eq!(it.has_previous(), travelled > 0);
			prop_assert_eq!(it.direction(), model.direction);

			let expected = traversal(&model);
			prop_assert_eq!(it.iter().copied().collect::<Vec<_>>(), expected.clone());
			prop_assert_eq!(
				it.iter().rev().copied().collect::<Vec<_>>(),
				expected.into_iter().rev().collect::<Vec<_>>()
			);
		}
	}

	#[test]
	fn reverse_twice_is_identity(elems in proptest::collection::vec(any::<i8>(), 0..16), steps in 0usize..16) {
		let mut it = RevIter::from(elems);
		for _ in 0..steps { it.next(); }

		let (from_start, to_end, next) = (it.distance_from_start(), it.distance_to_end(), it.peek_next().copied());
		it.reverse();
		it.reverse();

		prop_assert_eq!(it.direction(), Direction::Forward);
		prop_assert_eq!(it.distance_from_start(), from_start);
		prop_assert_eq!(it.distance_to_end(), to_end);
		prop_assert_eq!(it.peek_next().copied(), next);
	}

	#[test]
	fn next_then_previous_round_trips(
		elems in proptest::collection::vec(any::<u16>(), 1..16),
		steps in 0usize..16,
		backward in any::<bool>()
	) {
		let mut it = RevIter::from(elems);
		if backward { it.reverse(); it.reset(); }
		for _ in 0..steps.min(it.len() - 1) { it.next(); }

		let position = it.distance_from_start();
		let forth = it.next().copied();
		let back = it.previous().copied();

		prop_assert!(forth.is_some());
		prop_assert_eq!(forth, back);
		prop_assert_eq!(it.distance_from_start(), position);
	}

	#[test]
	fn reset_is_idempotent(elems in proptest::collection::vec(any::<u8>(), 0..16), steps in 0usize..16, backward in any::<bool>()) {
		let mut it = RevIter::from(elems);
		for _ in 0..steps { it.next(); }
		if backward { it.reverse(); }

		it.reset();
		let once = (it.distance_from_start(), it.distance_to_end(), it.peek_next().copied());
		it.reset();

		prop_assert_eq!(once, (it.distance_from_start(), it.distance_to_end(), it.peek_next().copied()));
		prop_assert_eq!(once.0, 0);
	}

	#[test]
	fn advance_matches_slice(elems in proptest::collection::vec(any::<i16>(), 0..24), start in 0usize..24, n in -24isize..24) {
		let mut it = RevIter::from(elems.clone());
		let start = start.min(elems.len());
		for _ in 0..start { it.next(); }

		match it.advance(n) {
			Ok(visited) => {
				let expected: Vec<i16> = match n > 0 {
					true  => elems[start..start + n as usize].to_vec(),
					false => elems[start - n.unsigned_abs()..start].iter().rev().copied().collect(),
				};
				prop_assert_eq!(visited.into_vec(), expected);
				prop_assert_eq!(it.distance_from_start() as isize, start as isize + n);
			},
			Err(_) => {
				let fits = n != 0 && start as isize + n >= 0 && start as isize + n <= elems.len() as isize;
				prop_assert!(!fits);
				prop_assert_eq!(it.distance_from_start(), start);
			},
		}
	}
}
