//! objectpath - resolve path expressions against in-memory values
//!
//! A path such as `Address.City`, `Numbers[1]` or `[0].Name` is resolved
//! against records, string-keyed maps, sequences and JSON documents alike:
//!
//! ```text
//! Path String
//!      |
//!   Tokenizer -> Segments (split on `.`, `[`, `]`)
//!      |
//! Traversal Engine -- per segment --> Shape Dispatcher
//!      |                                 |-- JSON node   (json)
//!      |                                 |-- Sequence    (integer segments)
//!      |                                 |-- Keyed map
//!      |                                 `-- Record  <-- Member Cache
//!      |
//!   Value
//! ```
//!
//! Records take part by registering their members with [`record!`]; maps,
//! sequences, JSON values and common leaf types implement [`Reflect`] out of
//! the box.
//!
//! ```
//! use objectpath::{get_value, record, Reason};
//!
//! struct Person { name: String, numbers: Vec<i32> }
//! record!(Person { fields: [Name => name, Numbers => numbers] });
//!
//! let person = Person { name: "John".into(), numbers: vec![1, 2, 3] };
//! assert_eq!(get_value(&person, "name", true).unwrap().as_str(), Some("John"));
//! assert_eq!(get_value(&person, "Numbers[1]", true).unwrap().downcast_ref::<i32>(), Some(&2));
//!
//! let err = get_value(&person, "Numbers[5]", true).unwrap_err();
//! assert_eq!(err.reason(), Reason::IndexOutOfRange);
//! ```

pub mod cache;
mod dispatch;
pub mod dynamic;
pub mod engine;
pub mod error;
pub mod expando;
pub mod ext;
pub mod json;
pub mod path;
pub mod reflect;
pub mod value;

// Re-export main types
pub use cache::MemberCache;
pub use dynamic::Dynamic;
pub use engine::{get_value, PathResolver, ResolveOptions};
pub use error::{Error, Reason, Result};
pub use expando::{Attr, Expando, ToExpando};
pub use ext::{get_value_or_null, ObjectPathExt};
pub use path::{tokenize, Segment, Step};
pub use reflect::{Getter, KeyedMap, Member, MemberKind, RecordRef, Reflect, Sequence, Shape};
pub use value::Value;
