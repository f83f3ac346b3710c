use std::collections::BTreeMap;
use std::iter::Peekable;

use crate::{ALTERNATIVE_KEY, Value};

pub fn get<'a, 'b>(
    mut value: &'b Value,
    path_iter: impl Iterator<Item = &'a str>,
) -> Option<&'b Value> {
    for key in path_iter {
        value = match value {
            Value::Object(map) => map.get(key)?,
            _ => return None,
        };
    }

    Some(value)
}

pub fn get_mut<'a, 'b>(
    mut value: &'b mut Value,
    path_iter: impl Iterator<Item = &'a str>,
) -> Option<&'b mut Value> {
    for key in path_iter {
        value = match value {
            Value::Object(map) => map.get_mut(key)?,
            _ => return None,
        };
    }

    Some(value)
}

pub fn insert<'a, I>(
    value: &mut Value,
    mut path_iter: Peekable<I>,
    insert_value: Value,
) -> Option<Value>
where
    I: Iterator<Item = &'a str>,
{
    let Some(key) = path_iter.next() else {
        return Some(std::mem::replace(value, insert_value));
    };

    if !matches!(value, Value::Object(_)) {
        *value = Value::object();
    }

    let Value::Object(map) = value else {
        return None;
    };

    if path_iter.peek().is_none() {
        return map.insert(key.to_string(), insert_value);
    }

    let nested = map.entry(key.to_string()).or_insert_with(Value::object);
    insert(nested, path_iter, insert_value)
}

pub fn put_safe(map: &mut BTreeMap<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => match map.get_mut(path) {
            Some(Value::Object(existing)) => {
                existing.insert(ALTERNATIVE_KEY.to_string(), value);
            }
            _ => {
                map.insert(path.to_string(), value);
            }
        },
        Some((head, rest)) => {
            let entry = map.entry(head.to_string()).or_insert_with(Value::object);
            if !matches!(entry, Value::Object(_)) {
                let old = std::mem::replace(entry, Value::Null);
                *entry = Value::Object(BTreeMap::from([(ALTERNATIVE_KEY.to_string(), old)]));
            }

            if let Value::Object(nested) = entry {
                put_safe(nested, rest, value);
            }
        }
    }
}
