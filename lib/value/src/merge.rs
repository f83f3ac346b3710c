use std::collections::BTreeMap;

use crate::Value;

impl Value {
    /// Recursively merges `other` into `self`.
    ///
    /// Objects are merged key by key. For everything else, including an
    /// object meeting a non-object, the value from `other` wins.
    pub fn deep_update(&mut self, other: Value) {
        match (self, other) {
            (Value::Object(this), Value::Object(other)) => deep_update_map(this, other),
            (this, other) => *this = other,
        }
    }

    /// Like [`Value::deep_update`], but consumes both sides and returns the
    /// merged document, so no document is ever shared while it's mutated.
    #[must_use]
    pub fn merged(mut self, other: Value) -> Value {
        self.deep_update(other);
        self
    }
}

fn deep_update_map(this: &mut BTreeMap<String, Value>, other: BTreeMap<String, Value>) {
    for (key, value) in other {
        match this.get_mut(&key) {
            Some(existing)
                if matches!(existing, Value::Object(_)) && matches!(value, Value::Object(_)) =>
            {
                existing.deep_update(value)
            }
            _ => {
                this.insert(key, value);
            }
        }
    }
}
