//! Attribute-style view over string-keyed maps
//!
//! [`Expando`] mirrors a map of [`Dynamic`] values, turning every nested map
//! into a nested `Expando` so attributes can be chained:
//! `view["Address"]["City"]`. It is itself traversable by path.

use std::any::Any;
use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

use crate::dynamic::Dynamic;
use crate::reflect::{KeyedMap, Reflect, Shape};

/// One attribute of an [`Expando`].
#[derive(Debug, Clone, PartialEq)]
pub enum Attr {
    Nested(Expando),
    Value(Dynamic),
}

impl Attr {
    pub fn as_expando(&self) -> Option<&Expando> {
        match self {
            Attr::Nested(expando) => Some(expando),
            Attr::Value(_) => None,
        }
    }

    pub fn as_dynamic(&self) -> Option<&Dynamic> {
        match self {
            Attr::Value(value) => Some(value),
            Attr::Nested(_) => None,
        }
    }
}

/// Dynamic attribute view built from a string-keyed map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expando {
    attrs: BTreeMap<String, Attr>,
}

impl Expando {
    /// Convert `map`, recursing into nested maps.
    pub fn from_map(map: &HashMap<String, Dynamic>) -> Self {
        let attrs = map
            .iter()
            .map(|(key, value)| {
                let attr = match value {
                    Dynamic::Map(nested) => Attr::Nested(Expando::from_map(nested)),
                    other => Attr::Value(other.clone()),
                };
                (key.clone(), attr)
            })
            .collect();
        Self { attrs }
    }

    pub fn attr(&self, name: &str) -> Option<&Attr> {
        self.attrs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.attrs.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

impl Index<&str> for Expando {
    type Output = Attr;

    fn index(&self, name: &str) -> &Attr {
        self.attr(name)
            .unwrap_or_else(|| panic!("no attribute named `{}`", name))
    }
}

impl Index<&str> for Attr {
    type Output = Attr;

    fn index(&self, name: &str) -> &Attr {
        match self {
            Attr::Nested(expando) => &expando[name],
            Attr::Value(_) => panic!("attribute is not an object; cannot index `{}`", name),
        }
    }
}

impl PartialEq<Dynamic> for Attr {
    fn eq(&self, other: &Dynamic) -> bool {
        self.as_dynamic() == Some(other)
    }
}

/// Conversion into an [`Expando`] view.
pub trait ToExpando {
    fn to_expando(&self) -> Expando;
}

impl ToExpando for HashMap<String, Dynamic> {
    fn to_expando(&self) -> Expando {
        Expando::from_map(self)
    }
}

impl KeyedMap for Expando {
    fn lookup(&self, key: &str) -> Option<&dyn Reflect> {
        self.attrs.get(key).map(|attr| attr as &dyn Reflect)
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (&str, &dyn Reflect)> + '_> {
        Box::new(
            self.attrs
                .iter()
                .map(|(key, attr)| (key.as_str(), attr as &dyn Reflect)),
        )
    }
}

impl Reflect for Expando {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reflect for Attr {
    fn shape(&self) -> Shape<'_> {
        match self {
            Attr::Nested(expando) => Shape::Deref(expando),
            Attr::Value(value) => Shape::Deref(value),
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
