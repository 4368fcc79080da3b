//! # mirrorsync-core
//!
//! Core library for one-way directory mirroring.
//!
//! This library walks a source tree and replicates it into a destination
//! tree, creating missing directories and copying files that are missing at
//! the destination or whose source modification time is strictly newer.
//! Nothing is ever deleted from the destination.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Core error types for the mirrorsync library
pub mod error;

/// Source/destination argument handling
pub mod pair;

/// Modification time comparison
pub mod comparison;

/// Mirroring engine
pub mod sync;

pub use error::{MirrorError, Result};
pub use pair::DirectoryPair;
pub use sync::{MirrorOptions, MirrorReporter, MirrorResult, MirrorWalker};
