use std::collections::BTreeMap;

use value::Value;

/// Converts a label (or annotation) map into document fields.
///
/// With `dedot` set, keys are dedotted and stored flat. Otherwise dotted keys
/// become nested objects, written with [`Value::put_safe`] so that `a` and
/// `a.b` can both be kept.
pub fn generate_map(input: &BTreeMap<String, String>, dedot: bool) -> Value {
    let mut output = Value::object();

    for (key, field) in input {
        put(&mut output, key, field, dedot);
    }

    output
}

/// Like [`generate_map`] but only for the listed keys that exist in `input`.
pub fn generate_map_subset(
    input: &BTreeMap<String, String>,
    keys: &[String],
    dedot: bool,
) -> Value {
    let mut output = Value::object();

    for key in keys {
        if let Some(field) = input.get(key) {
            put(&mut output, key, field, dedot);
        }
    }

    output
}

fn put(output: &mut Value, key: &str, field: &str, dedot: bool) {
    if dedot {
        if let Value::Object(map) = output {
            map.insert(value::dedot(key), field.into());
        }
    } else {
        output.put_safe(key, field);
    }
}
