mod convert;
mod crud;
mod merge;
mod serde;

use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};

/// Key used by [`Value::put_safe`] to hold a value that would otherwise
/// clobber, or be clobbered by, an object at the same path.
pub const ALTERNATIVE_KEY: &str = "value";

/// The document type produced by metadata generators.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Bytes - usually representing a UTF8 String,
    Bytes(Bytes),

    /// Integer
    Integer(i64),

    /// Float
    Float(f64),

    /// Boolean
    Boolean(bool),

    /// Timestamp with UTC
    Timestamp(DateTime<Utc>),

    /// Object
    Object(BTreeMap<String, Value>),

    /// Array
    Array(Vec<Value>),

    /// Null
    Null,
}

impl Default for Value {
    fn default() -> Self {
        Self::object()
    }
}

impl Value {
    #[inline]
    pub fn object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Returns true if this is an object without any field, or an empty array.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Object(map) => map.is_empty(),
            Value::Array(array) => array.is_empty(),
            _ => false,
        }
    }

    /// Returns a reference to a field value specified by a dotted path.
    pub fn get(&self, path: &str) -> Option<&Self> {
        crud::get(self, path.split('.'))
    }

    /// Get a mutable borrow of the value by a dotted path.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut Self> {
        crud::get_mut(self, path.split('.'))
    }

    /// Determine if the path is contained within the value.
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// Inserts a value at the dotted path, creating intermediate objects as
    /// needed. Anything that is not an object along the way is replaced.
    ///
    /// Returns the previous value at the path, if any.
    pub fn insert(&mut self, path: &str, value: impl Into<Self>) -> Option<Self> {
        crud::insert(self, path.split('.').peekable(), value.into())
    }

    /// Inserts a value at the dotted path without overwriting existing data.
    ///
    /// If the leaf already holds an object, the value is stored under
    /// [`ALTERNATIVE_KEY`] inside that object. If an intermediate segment
    /// holds a scalar, the scalar is moved under [`ALTERNATIVE_KEY`] so the
    /// path can continue. For example
    ///
    /// ```text
    /// put_safe("com.docker.swarm.task", "x")
    /// put_safe("com.docker.swarm.task.id", 1)
    /// ```
    ///
    /// results in `{"com":{"docker":{"swarm":{"task":{"id":1,"value":"x"}}}}}`.
    ///
    /// Returns false if `self` is not an object.
    pub fn put_safe(&mut self, path: &str, value: impl Into<Self>) -> bool {
        match self {
            Value::Object(map) => {
                crud::put_safe(map, path, value.into());
                true
            }
            _ => false,
        }
    }

    /// Removes field value specified by the given path and return its value.
    pub fn remove(&mut self, path: &str) -> Option<Self> {
        match path.rsplit_once('.') {
            Some((parent, key)) => match self.get_mut(parent)? {
                Value::Object(map) => map.remove(key),
                _ => None,
            },
            None => match self {
                Value::Object(map) => map.remove(path),
                _ => None,
            },
        }
    }
}

/// Replaces every `.` in the key with `_`, so label and annotation keys like
/// `app.kubernetes.io/name` don't turn into nested paths.
#[inline]
pub fn dedot(key: &str) -> String {
    key.replace('.', "_")
}

/// Build a [`Value`] with JSON-like syntax.
///
/// Every value must be a single token tree, so anything more complex than a
/// literal, identifier, object or array has to be wrapped in parentheses.
///
/// ```
/// use value::value;
///
/// let name = "frontend";
/// let doc = value!({
///     "service": {
///         "name": name,
///         "ports": [80, 443],
///     },
///     "uid": (format!("{}-uid", name)),
///     "deleted": null,
/// });
/// assert!(doc.contains("service.ports"));
/// ```
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };

    ({}) => {
        $crate::Value::object()
    };

    ({ $($key:literal : $value:tt),+ $(,)? }) => {{
        let mut object = ::std::collections::BTreeMap::new();
        $(
            object.insert(::std::string::String::from($key), $crate::value!($value));
        )+
        $crate::Value::Object(object)
    }};

    ([]) => {
        $crate::Value::Array(::std::vec::Vec::new())
    };

    ([ $($value:tt),+ $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::value!($value)),+])
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn value_macro() {
        assert_eq!(value!(1), Value::Integer(1));
        assert_eq!(value!(1.2), Value::Float(1.2));
        assert_eq!(value!("foo"), "foo".into());
        assert_eq!(value!(true), Value::Boolean(true));
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!({}), Value::object());

        let arr = value!([1, 2]);
        assert_eq!(arr, Value::Array(vec![value!(1), value!(2)]));

        let nested = value!({
            "foo": "bar",
            "arr": [1, 2],
            "map": {
                "key": "value"
            }
        });
        assert_eq!(nested, {
            let mut map = BTreeMap::new();
            map.insert("foo".to_string(), value!("bar"));
            map.insert("arr".to_string(), value!([1, 2]));

            let mut sub_map = BTreeMap::new();
            sub_map.insert("key".into(), "value".into());
            map.insert("map".into(), sub_map.into());

            Value::Object(map)
        })
    }

    #[test]
    fn dedot_keys() {
        assert_eq!(dedot("app.kubernetes.io/name"), "app_kubernetes_io/name");
        assert_eq!(dedot("app"), "app");
        assert_eq!(dedot(""), "");
    }

    #[test]
    fn get_and_contains() {
        let value = value!({
            "kubernetes": {
                "service": {
                    "name": "frontend"
                }
            }
        });

        assert_eq!(value.get("kubernetes.service.name"), Some(&value!("frontend")));
        assert!(value.contains("kubernetes.service"));
        assert!(!value.contains("kubernetes.pod"));
        assert!(!value.contains("kubernetes.service.name.first"));
    }

    #[test]
    fn insert_creates_intermediate_objects() {
        let mut value = Value::object();
        assert_eq!(value.insert("a.b.c", 1), None);
        assert_eq!(value, value!({"a": {"b": {"c": 1}}}));

        // scalars along the path get replaced
        let mut value = value!({"a": "scalar"});
        value.insert("a.b", true);
        assert_eq!(value, value!({"a": {"b": true}}));

        let mut value = value!({"a": 1});
        assert_eq!(value.insert("a", 2), Some(value!(1)));
    }

    #[test]
    fn put_safe_never_clobbers() {
        let mut value = Value::object();
        assert!(value.put_safe("com.docker.swarm.task", "x"));
        assert!(value.put_safe("com.docker.swarm.task.id", 1));
        assert!(value.put_safe("com.docker.swarm.task.name", "foo"));
        assert_eq!(
            value,
            value!({
                "com": {
                    "docker": {
                        "swarm": {
                            "task": {
                                "id": 1,
                                "name": "foo",
                                "value": "x"
                            }
                        }
                    }
                }
            })
        );

        // leaf collides with an existing object
        let mut value = value!({"a": {"b": 1}});
        value.put_safe("a", "scalar");
        assert_eq!(value, value!({"a": {"b": 1, "value": "scalar"}}));

        // the alternative key is overwritten, not descended into
        let mut value = value!({"a": {"value": {"x": 1}}});
        value.put_safe("a", "s");
        assert_eq!(value, value!({"a": {"value": "s"}}));

        // non object
        let mut value = value!("foo");
        assert!(!value.put_safe("a", 1));
        assert_eq!(value, value!("foo"));
    }

    #[test]
    fn put_safe_keeps_siblings() {
        let mut value = value!({
            "service": {
                "name": "frontend"
            },
            "labels": {
                "app": "frontend"
            }
        });

        value.put_safe("selectors", value!({"app": "frontend"}));
        value.put_safe("service.port", 80);

        assert_eq!(
            value,
            value!({
                "service": {
                    "name": "frontend",
                    "port": 80
                },
                "labels": {
                    "app": "frontend"
                },
                "selectors": {
                    "app": "frontend"
                }
            })
        );
    }

    #[test]
    fn remove() {
        let mut value = value!({
            "labels": {
                "app": "frontend",
                "tier": "web"
            },
            "name": "foo"
        });

        assert_eq!(value.remove("labels.tier"), Some(value!("web")));
        assert_eq!(value.remove("labels.missing"), None);
        assert_eq!(value.remove("name"), Some(value!("foo")));
        assert_eq!(value.remove("name.deeper"), None);
        assert_eq!(value, value!({"labels": {"app": "frontend"}}));
    }

    #[test]
    fn emptiness() {
        assert!(Value::object().is_empty());
        assert!(value!([]).is_empty());
        assert!(!value!({"a": 1}).is_empty());
        assert!(!value!(null).is_empty());
        assert!(!value!("").is_empty());
    }
}
