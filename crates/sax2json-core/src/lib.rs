//! # sax2json-core
//!
//! Builds an in-memory JSON-like tree from a push-style stream of XML parse
//! events (element open, character data, element close).
//!
//! The conversion rules:
//!
//! - an element with only text becomes a typed leaf (`<n>7</n>` → `7`)
//! - an empty element becomes `null`
//! - an element with attributes or children becomes an object; its own text
//!   goes under a configurable value key
//! - siblings sharing a name fold into an array, in document order
//! - text next to child elements is rejected as mixed content
//!
//! ## Quick start
//!
//! ```rust
//! use sax2json_core::{convert_str, encode, ConvertOptions};
//!
//! let xml = r#"<note id="7"><to>Tove</to><to>Jani</to><price>10.90</price></note>"#;
//! let root = convert_str(xml, &ConvertOptions::default()).unwrap();
//! assert_eq!(
//!     encode(&root).unwrap(),
//!     r#"{"note":{"to":["Tove","Jani"],"price":10.90,"id":7}}"#
//! );
//! ```
//!
//! ## Modules
//!
//! - [`builder`]: `TreeBuilder` stack machine fed with parse events
//! - [`frame`]: per-element accumulation state and finalization rules
//! - [`fold`]: repeated-sibling folding into arrays
//! - [`infer`]: literal type inference (integer → decimal → boolean → string)
//! - [`node`]: the `Node` tree and insertion-ordered `Object`
//! - [`options`]: `ConvertOptions`
//! - [`reader`]: quick-xml driver (`convert_str`, `convert_reader`)
//! - [`json`]: exact JSON encoding/decoding of trees
//! - [`error`]: error types

pub mod builder;
pub mod error;
pub mod fold;
pub mod frame;
pub mod infer;
pub mod json;
pub mod node;
pub mod options;
pub mod reader;

pub use builder::{BuilderState, ConvertStats, TreeBuilder};
pub use error::ConvertError;
pub use fold::{fold, fold_all};
pub use frame::ElementFrame;
pub use infer::infer;
pub use json::{decode, encode, encode_pretty, from_value, to_value};
pub use node::{Node, Object};
pub use options::ConvertOptions;
pub use reader::{convert_reader, convert_str, convert_with_stats};
