//! Subject source registry
//!
//! This module provides:
//! - The `SubjectSource` trait the collector talks to
//! - The Open Library implementation used by the binary
//!
//! All API-specific logic (URL layout, status handling, decoding)
//! lives in the implementation modules. The collector only sees
//! decoded `SubjectResponse` values.

pub mod adapter;
pub mod openlibrary;

pub use adapter::SubjectSource;
pub use openlibrary::OpenLibrarySource;
