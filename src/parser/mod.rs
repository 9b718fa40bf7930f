//! Decoder for `.mon` monster files.
//!
//! Decoding happens in two stages:
//!
//! - [`lines`] turns raw lines into `(property, raw value)` pairs, handling
//!   comments, blank lines and continuation lines.
//! - [`element`] and [`values`] turn raw values into typed fields and
//!   structured sub-values (outfit, strategy, flags, skills, inventory, talk).
//!
//! # Usage
//!
//! ```ignore
//! use moncat::parser::tokenize_str;
//!
//! let source = std::fs::read_to_string("monster/rat.mon")?;
//! for property in tokenize_str(&source) {
//!     let property = property?;
//!     println!("{} = {}", property.name, property.value);
//! }
//! ```

pub mod element;
pub mod lines;
pub mod span;
pub mod values;

pub use element::{parse_elements, Attribute, Element, GrammarError};
pub use lines::{tokenize, tokenize_str, Property, PropertyLines};
pub use span::LineSpan;
