use serde_json::{Map, Value};

/// A database-native typed value encoded as a single-purpose JSON object.
///
/// Each variant borrows the payload that [`Wrapper::resolve`] turns into the
/// replacement value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wrapper<'a> {
    /// `{"$date": X}`
    Date(&'a Value),
    /// `{"$oid": X}`
    Oid(&'a Value),
    /// `{"$ref": R, "$id": Y}`, holding `Y`
    Ref(&'a Value),
}

const DATE_KEY: &str = "$date";
const OID_KEY: &str = "$oid";
const REF_KEY: &str = "$ref";
const ID_KEY: &str = "$id";

/// Recognize a wrapper object.
///
/// Checked in a fixed order: `$date`, then `$oid`, then `$ref` together with `$id`.
/// Anything else is a plain nested object.
pub fn classify_wrapper(obj: &Map<String, Value>) -> Option<Wrapper<'_>> {
    if let Some(date) = obj.get(DATE_KEY) {
        return Some(Wrapper::Date(date));
    }
    if let Some(oid) = obj.get(OID_KEY) {
        return Some(Wrapper::Oid(oid));
    }
    match (obj.get(REF_KEY), obj.get(ID_KEY)) {
        (Some(_), Some(id)) => Some(Wrapper::Ref(id)),
        _ => None,
    }
}

impl Wrapper<'_> {
    /// Produce the value that replaces the wrapper object.
    pub fn resolve(self) -> Value {
        match self {
            Wrapper::Date(payload) | Wrapper::Oid(payload) => payload.clone(),
            Wrapper::Ref(id) => match id {
                Value::Object(inner) => match inner.get(OID_KEY) {
                    Some(oid) => oid.clone(),
                    None => id.clone(),
                },
                _ => id.clone(),
            },
        }
    }
}

/// Owned counterpart of `classify_wrapper(..).map(Wrapper::resolve)`.
///
/// Moves the payload out of a wrapper object. A plain object is handed back
/// untouched in `Err`.
pub fn take_wrapper(mut obj: Map<String, Value>) -> Result<Value, Map<String, Value>> {
    if let Some(date) = obj.remove(DATE_KEY) {
        return Ok(date);
    }
    if let Some(oid) = obj.remove(OID_KEY) {
        return Ok(oid);
    }
    if !obj.contains_key(REF_KEY) {
        return Err(obj);
    }
    match obj.remove(ID_KEY) {
        Some(Value::Object(mut inner)) => Ok(inner
            .remove(OID_KEY)
            .unwrap_or(Value::Object(inner))),
        Some(id) => Ok(id),
        None => Err(obj),
    }
}
