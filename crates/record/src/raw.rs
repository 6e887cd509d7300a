//! Read-only access to loosely-shaped form input

use serde_json::Value;

/// Borrowed view over the raw input JSON
///
/// Any non-object value behaves like an empty object, so lookups on bad
/// input simply find nothing.
#[derive(Debug, Clone, Copy)]
pub struct RawInput<'a> {
    value: &'a Value,
}

static EMPTY: Value = Value::Null;

impl<'a> RawInput<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// Top-level value rendered as text
    ///
    /// Strings are returned verbatim, numbers and booleans in their JSON
    /// rendering. Null, arrays, objects and missing keys give `""`.
    pub fn text(&self, key: &str) -> String {
        match self.value.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    /// Nested page section (`page2`, `page3`, `page4`)
    pub fn page(&self, name: &str) -> RawInput<'a> {
        match self.value.get(name) {
            Some(v @ Value::Object(_)) => RawInput::new(v),
            _ => RawInput::new(&EMPTY),
        }
    }

    /// First key whose text is non-empty
    pub fn first_of(&self, keys: &[&str]) -> String {
        first_non_empty(keys.iter().map(|key| self.text(key)))
    }
}

/// First non-empty candidate, or `""`
///
/// Whitespace-only strings count as values here.
pub fn first_non_empty<I>(candidates: I) -> String
where
    I: IntoIterator<Item = String>,
{
    candidates
        .into_iter()
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}
