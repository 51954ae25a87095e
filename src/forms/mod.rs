//! Parsing and validation of submitted `x-www-form-urlencoded` bodies.
//!
//! Handlers extract bodies as raw `(key, value)` pairs so that repeated
//! keys (`genres=Jazz&genres=Folk`) survive. The per-entity `validate`
//! functions build a `New*` record from them and run its `Validate`
//! rules, reporting every failing field at once.

pub mod artist;
pub mod choices;
pub mod rules;
pub mod show;
pub mod venue;

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::filters::join_genres;
use choices::{genre_choice, state_choice, GENRES, STATES};

#[derive(Debug, Clone, Default)]
pub struct FormData {
    pairs: Vec<(String, String)>,
}

impl From<Vec<(String, String)>> for FormData {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

impl FormData {
    /// First value submitted for `key`, trimmed. Blank counts as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.trim())
            .filter(|v| !v.is_empty())
            .collect()
    }

    /// Value of a text field; missing reads as empty and fails `not_blank`.
    pub(crate) fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub(crate) fn optional(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    /// Checkbox semantics: only `y` is checked.
    pub(crate) fn checkbox(&self, key: &str) -> bool {
        self.get(key) == Some("y")
    }

    /// State code in its listed spelling (`ca` becomes `CA`). Unknown
    /// values pass through for `valid_state` to reject.
    pub(crate) fn state(&self, key: &str) -> String {
        let value = self.get(key).unwrap_or_default();
        state_choice(value).unwrap_or(value).to_string()
    }

    /// Every submitted genre, deduplicated and in its listed spelling,
    /// joined into the stored delimited form.
    pub(crate) fn genres(&self, key: &str) -> String {
        let mut genres: Vec<&str> = Vec::new();
        for value in self.get_all(key) {
            let genre = genre_choice(value).unwrap_or(value);
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }
        join_genres(&genres)
    }

    /// Positive id, or 0 (rejected by the `range` rule) when the field is
    /// missing or not an `i32`.
    pub(crate) fn id(&self, key: &str) -> i32 {
        self.get(key)
            .and_then(|value| value.parse().ok())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Error)]
#[serde(transparent)]
#[error("{} invalid field(s)", .0.len())]
pub struct FormErrors(Vec<FieldError>);

impl From<Vec<FieldError>> for FormErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self(errors)
    }
}

impl FormErrors {
    /// Flattens `validator` output, listing fields in the form's order.
    pub fn from_validation(errors: &ValidationErrors, schema: &FormSchema) -> Self {
        let by_field = errors.field_errors();
        let mut out = Vec::new();
        for spec in &schema.fields {
            let Some(field_errors) = by_field.get(spec.name) else {
                continue;
            };
            for error in field_errors.iter() {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| error.code.to_string());
                out.push(FieldError::new(spec.name, message));
            }
        }
        Self(out)
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Url,
    Tel,
    Select,
    MultiSelect,
    Checkbox,
    Integer,
    Datetime,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<&'static [&'static str]>,
}

impl FieldSpec {
    fn new(name: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            kind,
            required,
            choices: None,
        }
    }

    fn choices(mut self, choices: &'static [&'static str]) -> Self {
        self.choices = Some(choices);
        self
    }
}

/// Description of a form, returned by the `GET .../create` and
/// `GET .../edit` routes in place of a rendered page.
#[derive(Debug, Clone, Serialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSpec>,
}

pub(crate) fn state_field() -> FieldSpec {
    FieldSpec::new("state", FieldKind::Select, true).choices(STATES)
}

pub(crate) fn genres_field() -> FieldSpec {
    FieldSpec::new("genres", FieldKind::MultiSelect, true).choices(GENRES)
}

pub(crate) fn field(name: &'static str, kind: FieldKind, required: bool) -> FieldSpec {
    FieldSpec::new(name, kind, required)
}
