//! Declarative validation of CloudFormation resource properties.
//!
//! A [`Schema`] is a list of named field [`Rule`]s. Validation produces a new
//! property map with defaults filled in and scalar strings coerced to the
//! declared type (CloudFormation hands every scalar over as a string).
//! Fields that the schema does not mention are passed through untouched.

pub mod monitor;
pub mod timeboard;

use serde_json::{Map, Number, Value};
use std::fmt;

/// A single violated constraint, located by its property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.path, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of validating a property map: the normalized properties.
pub type Validated = Result<Map<String, Value>, ValidationError>;

#[derive(Debug, Clone)]
pub enum Kind {
    String,
    Number,
    Boolean,
    Array(Box<Rule>),
    Object(Schema),
    /// Object validated against the first variant whose `tag` field accepts
    /// the value found under `tag`.
    OneOf {
        tag: &'static str,
        variants: Vec<Schema>,
    },
}

#[derive(Debug, Clone)]
pub struct Rule {
    kind: Kind,
    required: bool,
    allowed: Vec<String>,
    default: Option<Value>,
}

impl Rule {
    fn of(kind: Kind) -> Self {
        Self {
            kind,
            required: false,
            allowed: Vec::new(),
            default: None,
        }
    }

    pub fn string() -> Self {
        Self::of(Kind::String)
    }

    pub fn number() -> Self {
        Self::of(Kind::Number)
    }

    pub fn boolean() -> Self {
        Self::of(Kind::Boolean)
    }

    pub fn array(items: Rule) -> Self {
        Self::of(Kind::Array(Box::new(items)))
    }

    pub fn object(schema: Schema) -> Self {
        Self::of(Kind::Object(schema))
    }

    pub fn one_of(tag: &'static str, variants: Vec<Schema>) -> Self {
        Self::of(Kind::OneOf { tag, variants })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Restrict a string field to an enumerated set of values.
    pub fn valid<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed.extend(values.into_iter().map(Into::into));
        self
    }

    /// Value inserted when the field is omitted.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    fn accepts(&self, value: &Value) -> bool {
        match value.as_str() {
            Some(s) => self.allowed.is_empty() || self.allowed.iter().any(|a| a == s),
            None => false,
        }
    }

    fn check(&self, value: &Value, path: &str) -> Result<Value, ValidationError> {
        let checked = match &self.kind {
            Kind::String => match value {
                Value::String(_) => value.clone(),
                _ => return Err(ValidationError::new(path, "must be a string")),
            },
            Kind::Number => coerce_number(value)
                .ok_or_else(|| ValidationError::new(path, "must be a number"))?,
            Kind::Boolean => coerce_boolean(value)
                .ok_or_else(|| ValidationError::new(path, "must be a boolean"))?,
            Kind::Array(item) => match value {
                Value::Array(items) => Value::Array(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, v)| item.check(v, &format!("{}[{}]", path, i)))
                        .collect::<Result<Vec<_>, _>>()?,
                ),
                _ => return Err(ValidationError::new(path, "must be an array")),
            },
            Kind::Object(schema) => match value {
                Value::Object(map) => Value::Object(schema.check_object(map, path)?),
                _ => return Err(ValidationError::new(path, "must be an object")),
            },
            Kind::OneOf { tag, variants } => match value {
                Value::Object(map) => Value::Object(check_one_of(tag, variants, map, path)?),
                _ => return Err(ValidationError::new(path, "must be an object")),
            },
        };

        if !self.allowed.is_empty() && !self.accepts(&checked) {
            return Err(ValidationError::new(
                path,
                format!("must be one of [{}]", self.allowed.join(", ")),
            ));
        }

        Ok(checked)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(&'static str, Rule)>,
    exclusive: Vec<(&'static str, &'static str)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing an earlier rule of the same name.
    pub fn field(mut self, name: &'static str, rule: Rule) -> Self {
        self.fields.retain(|(existing, _)| *existing != name);
        self.fields.push((name, rule));
        self
    }

    /// Forbid `field` and `peer` from being present together.
    pub fn without(mut self, field: &'static str, peer: &'static str) -> Self {
        self.exclusive.push((field, peer));
        self
    }

    /// Validate a top-level property map.
    pub fn validate(&self, properties: &Map<String, Value>) -> Validated {
        self.check_object(properties, "")
    }

    fn rule(&self, name: &str) -> Option<&Rule> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, r)| r)
    }

    fn check_object(&self, map: &Map<String, Value>, path: &str) -> Validated {
        for (field, peer) in &self.exclusive {
            if map.contains_key(*field) && map.contains_key(*peer) {
                return Err(ValidationError::new(
                    &child(path, field),
                    format!("conflict with forbidden peer \"{}\"", peer),
                ));
            }
        }

        let mut out = map.clone();

        for (name, rule) in &self.fields {
            let field_path = child(path, name);
            match map.get(*name) {
                Some(value) => {
                    out.insert(name.to_string(), rule.check(value, &field_path)?);
                }
                None if rule.required => {
                    return Err(ValidationError::new(&field_path, "is required"));
                }
                None => {
                    if let Some(default) = &rule.default {
                        out.insert(name.to_string(), default.clone());
                    }
                }
            }
        }

        Ok(out)
    }
}

fn check_one_of(
    tag: &str,
    variants: &[Schema],
    map: &Map<String, Value>,
    path: &str,
) -> Validated {
    let tag_path = child(path, tag);
    let value = map
        .get(tag)
        .ok_or_else(|| ValidationError::new(&tag_path, "is required"))?;

    let matched = variants
        .iter()
        .find(|schema| schema.rule(tag).is_some_and(|rule| rule.accepts(value)));

    match matched {
        Some(schema) => schema.check_object(map, path),
        None => {
            let allowed: Vec<&str> = variants
                .iter()
                .filter_map(|schema| schema.rule(tag))
                .flat_map(|rule| rule.allowed.iter().map(String::as_str))
                .collect();
            Err(ValidationError::new(
                &tag_path,
                format!("must be one of [{}]", allowed.join(", ")),
            ))
        }
    }
}

fn child(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", path, name)
    }
}

fn coerce_number(value: &Value) -> Option<Value> {
    match value {
        Value::Number(_) => Some(value.clone()),
        Value::String(s) => {
            let s = s.trim();
            if let Ok(i) = s.parse::<i64>() {
                Some(Value::Number(i.into()))
            } else {
                s.parse::<f64>()
                    .ok()
                    .and_then(Number::from_f64)
                    .map(Value::Number)
            }
        }
        _ => None,
    }
}

fn coerce_boolean(value: &Value) -> Option<Value> {
    match value {
        Value::Bool(_) => Some(value.clone()),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(Value::Bool(true)),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(Value::Bool(false)),
        _ => None,
    }
}
