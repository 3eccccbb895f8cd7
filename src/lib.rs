//! A small lexical tagger for syntax highlighting brushes.
//!
//! A brush is an ordered list of rules, each pairing a regular expression with
//! a [Category]. Tagging text applies every rule and returns the
//! non-overlapping [TaggedSpan]s, earlier rules winning any overlap. Turning
//! those spans into styled output is left to the host.
//!
//! # Example
//! ```
//! use brushwork::{Category, Registry};
//!
//! let registry = Registry::builtin().unwrap();
//! let haskell = registry.get("hs").unwrap();
//! let source = "case x of -- done";
//! let spans = haskell.tag(source);
//! assert_eq!(spans[0].text(source), "case");
//! assert_eq!(spans[0].category, Category::Keyword);
//! assert_eq!(spans.last().unwrap().category, Category::Comment);
//! ```

pub mod config;
pub mod error;
pub mod languages;
pub mod registry;
pub mod tagger;
pub mod tokens;
pub mod util;

pub use config::BrushConfig;
pub use error::{Error, Result, RuleSetError};
pub use registry::Registry;
pub use tagger::{tag, Rule, RuleSet, RuleSetBuilder};
pub use tokens::{Category, Segment, TaggedSpan};
pub use util::segments;
