//! Reference module - canonical pose captures
//!
//! Re-exports only. Data and loading live in `library.rs`.

mod library;

pub use library::{ReferenceLibrary, ReferencePose};
