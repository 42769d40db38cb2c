//! `Reflect` implementations for std, serde_json, rust_decimal and chrono types

use std::any::Any;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::{KeyedMap, Reflect, Sequence, Shape};

macro_rules! impl_opaque {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Reflect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Opaque
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }

                fn to_json(&self) -> Option<JsonValue> {
                    serde_json::to_value(self).ok()
                }
            }
        )*
    };
}

impl_opaque!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char,
    chrono::NaiveDate,
    chrono::NaiveTime,
    chrono::NaiveDateTime,
    chrono::DateTime<chrono::Utc>,
    chrono::DateTime<chrono::FixedOffset>,
);

impl Reflect for bool {
    fn shape(&self) -> Shape<'_> {
        Shape::Bool(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for &'static str {
    fn shape(&self) -> Shape<'_> {
        Shape::Text(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for Decimal {
    fn shape(&self) -> Shape<'_> {
        Shape::Decimal(*self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for () {
    fn shape(&self) -> Shape<'_> {
        Shape::Null
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for JsonValue {
    fn shape(&self) -> Shape<'_> {
        Shape::Json(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Transparent wrappers
// ============================================================================

impl<T: Reflect> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(inner) => Shape::Deref(inner),
            None => Shape::Null,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for Box<dyn Reflect> {
    fn shape(&self) -> Shape<'_> {
        Shape::Deref(&**self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for Arc<dyn Reflect> {
    fn shape(&self) -> Shape<'_> {
        Shape::Deref(&**self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Sequences
// ============================================================================

macro_rules! impl_slice_sequence {
    ($(impl<$($param:ident),* $(; const $len:ident: usize)?> for $ty:ty;)*) => {
        $(
            impl<$($param: Reflect),* $(, const $len: usize)?> Sequence for $ty {
                fn length(&self) -> usize {
                    self[..].len()
                }

                fn element(&self, index: usize) -> Option<&dyn Reflect> {
                    self[..].get(index).map(|item| item as &dyn Reflect)
                }
            }

            impl<$($param: Reflect),* $(, const $len: usize)?> Reflect for $ty {
                fn shape(&self) -> Shape<'_> {
                    Shape::Sequence(self)
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )*
    };
}

impl_slice_sequence! {
    impl<T> for Vec<T>;
    impl<T> for Box<[T]>;
    impl<T; const N: usize> for [T; N];
}

impl<T: Reflect> Sequence for VecDeque<T> {
    fn length(&self) -> usize {
        self.len()
    }

    fn element(&self, index: usize) -> Option<&dyn Reflect> {
        VecDeque::get(self, index).map(|item| item as &dyn Reflect)
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Keyed maps
// ============================================================================

impl<T: Reflect> KeyedMap for HashMap<String, T> {
    fn lookup(&self, key: &str) -> Option<&dyn Reflect> {
        HashMap::get(self, key).map(|value| value as &dyn Reflect)
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key.as_str(), value as &dyn Reflect)),
        )
    }
}

impl<T: Reflect> Reflect for HashMap<String, T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: Reflect> KeyedMap for BTreeMap<String, T> {
    fn lookup(&self, key: &str) -> Option<&dyn Reflect> {
        BTreeMap::get(self, key).map(|value| value as &dyn Reflect)
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
        Box::new(
            self.iter()
                .map(|(key, value)| (key.as_str(), value as &dyn Reflect)),
        )
    }
}

impl<T: Reflect> Reflect for BTreeMap<String, T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for JsonMap<String, JsonValue> {
    fn shape(&self) -> Shape<'_> {
        Shape::JsonObject(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
