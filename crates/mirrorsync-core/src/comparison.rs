//! Staleness detection
//!
//! The only signal used to decide whether a destination file is stale is its
//! modification time. Content is never hashed or compared.

mod timestamp;

pub use timestamp::TimestampComparator;
