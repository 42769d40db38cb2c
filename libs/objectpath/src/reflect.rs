//! Runtime shape model
//!
//! Rust has no runtime introspection, so every traversable type describes
//! itself through [`Reflect::shape`]. A value is one of:
//!
//! - a **record** with named members registered once per type (see [`record!`]),
//! - a **keyed map** with string keys,
//! - an **indexable sequence** with a known length,
//! - a **JSON node** (`serde_json::Value`, or a bare `serde_json::Map`),
//!
//! or a leaf (text, bool, decimal, null, opaque scalar). Transparent wrappers
//! such as `Option<T>` and `Box<dyn Reflect>` forward to their content.
//!
//! Each type reports exactly one shape, so a map is never treated as a record.
//!
//! [`record!`]: crate::record

mod impls;

use std::any::{Any, TypeId};
use std::fmt;

use rust_decimal::Decimal;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// A value that path expressions can traverse.
pub trait Reflect: Any + Send + Sync {
    /// The shape this value presents to the traversal engine.
    fn shape(&self) -> Shape<'_>;

    fn as_any(&self) -> &dyn Any;

    /// JSON rendering for leaf values. Structured shapes are rendered by
    /// [`Value::to_json`](crate::Value::to_json) from their shape instead.
    fn to_json(&self) -> Option<JsonValue> {
        None
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// The shape of a [`Reflect`] value.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    Null,
    Text(&'a str),
    Bool(bool),
    Decimal(Decimal),
    Json(&'a JsonValue),
    /// A bare JSON object map; looked up with JSON rules, not generic map rules.
    JsonObject(&'a JsonMap<String, JsonValue>),
    Sequence(&'a dyn Sequence),
    Map(&'a dyn KeyedMap),
    Record(RecordRef<'a>),
    /// Transparent wrapper around another value.
    Deref(&'a dyn Reflect),
    /// Leaf without further structure (integers, floats, dates, ...).
    Opaque,
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Null => f.write_str("Null"),
            Shape::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Shape::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Shape::Decimal(d) => f.debug_tuple("Decimal").field(d).finish(),
            Shape::Json(node) => f.debug_tuple("Json").field(node).finish(),
            Shape::JsonObject(object) => write!(f, "JsonObject(len={})", object.len()),
            Shape::Sequence(seq) => write!(f, "Sequence(len={})", seq.length()),
            Shape::Map(_) => f.write_str("Map"),
            Shape::Record(record) => write!(f, "Record({})", record.type_name()),
            Shape::Deref(inner) => write!(f, "Deref({})", inner.type_name()),
            Shape::Opaque => f.write_str("Opaque"),
        }
    }
}

/// Integer-position lookup with a known length.
pub trait Sequence {
    fn length(&self) -> usize;

    fn element(&self, index: usize) -> Option<&dyn Reflect>;
}

/// String-keyed lookup.
pub trait KeyedMap {
    /// Exact key lookup.
    fn lookup(&self, key: &str) -> Option<&dyn Reflect>;

    /// All entries, in the map's own iteration order.
    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_>;
}

/// Whether a registered member is backed by a getter or by a field.
///
/// Properties are resolved before fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Property,
    Field,
}

/// Reads one member out of a record. Returns `None` if `target` is not the
/// record type the member was registered for.
pub type Getter = for<'a> fn(&'a dyn Any) -> Option<&'a dyn Reflect>;

/// One entry of a record type's registration table.
pub struct Member {
    pub name: &'static str,
    pub kind: MemberKind,
    pub get: Getter,
}

impl fmt::Debug for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// A borrowed record together with its type identity and member table.
#[derive(Clone, Copy)]
pub struct RecordRef<'a> {
    type_id: TypeId,
    type_name: &'static str,
    members: &'static [Member],
    target: &'a dyn Any,
}

impl<'a> RecordRef<'a> {
    pub fn new<T: Reflect>(target: &'a T, members: &'static [Member]) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            members,
            target,
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn members(&self) -> &'static [Member] {
        self.members
    }

    /// Read `member` from this record.
    pub fn read(&self, member: &Member) -> Option<&'a dyn Reflect> {
        (member.get)(self.target)
    }
}

/// Register a struct's members so paths can traverse it.
///
/// Member names are the path names (often PascalCase), mapped to the struct
/// field or to a getter method returning a reference. Properties are looked
/// up before fields. The getter's return type must be `&T` for a sized
/// `T: Reflect`.
///
/// ```
/// use objectpath::{get_value, record};
///
/// struct Address { city: String, street: String }
/// struct Person { name: String, address: Address }
///
/// impl Person {
///     fn home(&self) -> &Address { &self.address }
/// }
///
/// record!(Address { fields: [City => city, Street => street] });
/// record!(Person {
///     fields: [Name => name, Address => address],
///     properties: [Home => home],
/// });
///
/// let person = Person {
///     name: "John".into(),
///     address: Address { city: "New York".into(), street: "123 Main St".into() },
/// };
/// assert_eq!(get_value(&person, "Home.City", true).unwrap().as_str(), Some("New York"));
/// ```
#[macro_export]
macro_rules! record {
    ($ty:ty {
        $(fields: [$($field_name:ident => $field:ident),* $(,)?] $(,)?)?
        $(properties: [$($prop_name:ident => $getter:ident),* $(,)?] $(,)?)?
    }) => {
        impl $crate::Reflect for $ty {
            fn shape(&self) -> $crate::Shape<'_> {
                static MEMBERS: &[$crate::Member] = &[
                    $($(
                        $crate::Member {
                            name: stringify!($prop_name),
                            kind: $crate::MemberKind::Property,
                            get: |target| {
                                target
                                    .downcast_ref::<$ty>()
                                    .map(|record| record.$getter() as &dyn $crate::Reflect)
                            },
                        },
                    )*)?
                    $($(
                        $crate::Member {
                            name: stringify!($field_name),
                            kind: $crate::MemberKind::Field,
                            get: |target| {
                                target
                                    .downcast_ref::<$ty>()
                                    .map(|record| &record.$field as &dyn $crate::Reflect)
                            },
                        },
                    )*)?
                ];
                $crate::Shape::Record($crate::RecordRef::new(self, MEMBERS))
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }
    };
}
