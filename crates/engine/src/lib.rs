//! # Tailgroup Engine
//!
//! Classifies whitespace-separated CSS utility-class tokens into a fixed
//! taxonomy of semantic categories and re-renders them as a category-labeled,
//! multi-segment structure instead of one flat string.
//!
//! The engine is the shared core of every front end (lint fix, formatter
//! transform, CLI): hosts hand it a raw class string and splice the returned
//! text back themselves. It never parses source code.
//!
//! ## Architecture
//!
//! ```text
//! Class String
//!     │
//!     ├──> Gate (token threshold, multiline check, single-category check)
//!     │
//!     ├──> Grouping
//!     │    ├─> Classify each token (ordered table, first-match-wins)
//!     │    └─> Bucket by category, first-occurrence order
//!     │
//!     └──> Serializer (clsx call / array / template literal / raw mapping)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use tailgroup_engine::{format, FormatOptions};
//!
//! let options = FormatOptions::default();
//! let outcome = format("mt-4 flex items-center px-6 bg-white", &options).unwrap();
//!
//! assert!(outcome.changed);
//! assert!(outcome.output.starts_with("clsx("));
//! ```

mod config;
mod error;
mod formatter;
mod gate;
mod grouping;
mod render;
mod taxonomy;

pub use config::{FormatOptions, OutputFormat};
pub use error::{EngineError, Result};
pub use formatter::{format, FormatOutcome, Formatter};
pub use gate::{should_group, SkipReason};
pub use grouping::{group, CategoryGroup, Grouping};
pub use render::render;
pub use taxonomy::{category_table, classify, Category, CategoryRule};
