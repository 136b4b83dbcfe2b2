use crate::flatten::wrapper::{classify_wrapper, take_wrapper};
use serde_json::{Map, Value};

/// Separator between a parent key and its nested keys
const KEY_SEPARATOR: char = '.';

/// Flatten a JSON value for columnar loading.
///
/// Wrapper objects (`$date`, `$oid`, `$ref`/`$id`) are replaced by their payload,
/// nested plain objects are merged into the parent under dotted keys, and arrays
/// stay arrays with each element flattened on its own. The input is not modified.
pub fn flatten(value: &Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(flatten_object(obj)),
        Value::Array(items) => Value::Array(items.iter().map(flatten).collect()),
        scalar => scalar.clone(),
    }
}

/// Owned variant of [`flatten`] for documents read straight off a stream.
///
/// Same result as `flatten(&value)`, but moves keys and payloads instead of
/// cloning them.
pub fn flatten_document(value: Value) -> Value {
    match value {
        Value::Object(obj) => Value::Object(flatten_object_owned(obj)),
        Value::Array(items) => Value::Array(items.into_iter().map(flatten_document).collect()),
        scalar => scalar,
    }
}

fn dotted_key(key: &str, nested_key: &str) -> String {
    format!("{}{}{}", key, KEY_SEPARATOR, nested_key)
}

fn flatten_object(obj: &Map<String, Value>) -> Map<String, Value> {
    let mut result = Map::with_capacity(obj.len());

    for (key, field) in obj {
        match field {
            Value::Object(nested) => {
                if let Some(wrapper) = classify_wrapper(nested) {
                    result.insert(key.clone(), wrapper.resolve());
                    continue;
                }

                match flatten(field) {
                    Value::Object(flat) => {
                        for (nested_key, nested_value) in flat {
                            // Later keys overwrite earlier ones on collision
                            result.insert(dotted_key(key, &nested_key), nested_value);
                        }
                    }
                    other => {
                        result.insert(key.clone(), other);
                    }
                }
            }
            Value::Array(items) => {
                result.insert(key.clone(), Value::Array(items.iter().map(flatten).collect()));
            }
            scalar => {
                result.insert(key.clone(), scalar.clone());
            }
        }
    }

    result
}

fn flatten_object_owned(obj: Map<String, Value>) -> Map<String, Value> {
    let mut result = Map::with_capacity(obj.len());

    for (key, field) in obj {
        match field {
            Value::Object(nested) => match take_wrapper(nested) {
                Ok(resolved) => {
                    result.insert(key, resolved);
                }
                Err(plain) => {
                    for (nested_key, nested_value) in flatten_object_owned(plain) {
                        result.insert(dotted_key(&key, &nested_key), nested_value);
                    }
                }
            },
            Value::Array(items) => {
                result.insert(key, Value::Array(items.into_iter().map(flatten_document).collect()));
            }
            scalar => {
                result.insert(key, scalar);
            }
        }
    }

    result
}
