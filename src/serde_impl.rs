use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::RevIter;

impl<T: Serialize> Serialize for RevIter<T> {
	/// Serialized as a plain sequence in traversal order.
	/// The cursor position is not part of it.
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(self.iter())
	}
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RevIter<T> {
	/// Comes back running forward with the cursor at the start.
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Vec::<T>::deserialize(deserializer).map(Self::from)
	}
}
