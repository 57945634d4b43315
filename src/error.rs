use std::collections::TryReserveError;

use thiserror::Error;

/// Errors returned by the fallible `RevIter` operations.
/// A failed operation never leaves the iterator half-modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// Node storage could not grow.
	#[error("failed to allocate node storage: {0}")]
	Alloc(#[from] TryReserveError),

	/// There is no element on the side of the cursor last traversed.
	#[error("no element behind the cursor")]
	AtBoundary,

	/// `advance` was asked to move zero steps.
	#[error("cannot advance by zero steps")]
	ZeroSteps,

	/// `advance` was asked to move past the end of the traversal.
	#[error("cannot advance {requested} steps, only {available} remaining")]
	OutOfRange { requested: usize, available: usize },
}
