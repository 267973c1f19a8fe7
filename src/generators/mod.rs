//! # Output Generators
//!
//! Everything that writes into the build directory: rendered pages and the
//! static asset tree.

/// Static asset merge-copy.
pub mod assets;

/// Rendered page output.
pub mod html;

pub use html::HtmlGenerator;
