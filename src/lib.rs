//! Class Docs Native Library
//!
//! This library extracts formatted call signatures and named documentation
//! fragments from pre-resolved introspection metadata of classes, methods,
//! and free functions.

pub mod docs;
pub mod logging;
