//! Persistence for trained maps.
//!
//! Maps are stored in a line-oriented text format; see [`format`] for the
//! layout. The engine itself never performs I/O: the writer reads its
//! accessors and the reader hands a parsed weight matrix back to
//! [`crate::som::SelfOrganizingMap::from_weights`].

mod format;

pub use format::{MapFile, MapFormat};
