//! Declarative payload schema and the validation gate.
//!
//! A [`Schema`] is an ordered list of required fields, each with a type and
//! bounds. Validation is fail-fast: fields are checked in declaration order
//! and the first failing rule aborts with [`Error::Validation`] carrying
//! that rule's message. Nothing is coerced: a numeric string is rejected
//! for an integer field, not parsed.
//!
//! [`Schema::guard`] is the gate itself: it wraps an operation with the
//! schema check, short-circuiting before the operation runs on invalid
//! input and otherwise passing the original payload through unchanged.

use once_cell::sync::Lazy;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::hero::{HUMILITY_MAX, HUMILITY_MIN, NAME_MAX, NAME_MIN, SUPERPOWER_MAX, SUPERPOWER_MIN};

/// Per-field constraint kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// A required string with a character-count range.
    Text { min: usize, max: usize },
    /// A required integer with an inclusive value range.
    Integer { min: i64, max: i64 },
}

/// A single required field in a schema.
#[derive(Debug, Clone)]
pub struct Field {
    /// JSON key looked up in the payload.
    key: &'static str,
    /// Human-readable name used in failure messages.
    label: &'static str,
    rule: FieldRule,
}

impl Field {
    /// A required text field with a character-count range.
    pub fn text(key: &'static str, label: &'static str, min: usize, max: usize) -> Self {
        Self {
            key,
            label,
            rule: FieldRule::Text { min, max },
        }
    }

    /// A required integer field with an inclusive value range.
    pub fn integer(key: &'static str, label: &'static str, min: i64, max: i64) -> Self {
        Self {
            key,
            label,
            rule: FieldRule::Integer { min, max },
        }
    }

    fn check(&self, payload: &Value) -> Result<()> {
        let value = match payload.get(self.key) {
            None | Some(Value::Null) => return Err(self.fail("is a required field")),
            Some(value) => value,
        };

        match self.rule {
            FieldRule::Text { min, max } => self.check_text(value, min, max),
            FieldRule::Integer { min, max } => self.check_integer(value, min, max),
        }
    }

    fn check_text(&self, value: &Value, min: usize, max: usize) -> Result<()> {
        let text = match value.as_str() {
            Some(text) => text,
            None => return Err(self.fail("should be of type string")),
        };
        if text.is_empty() {
            return Err(self.fail("is a required field"));
        }

        let length = text.chars().count();
        if length < min {
            return Err(self.fail(&format!("should have at least {min} characters")));
        }
        if length > max {
            return Err(self.fail(&format!("can have a maximum of {max} characters")));
        }
        Ok(())
    }

    fn check_integer(&self, value: &Value, min: i64, max: i64) -> Result<()> {
        if !value.is_number() {
            return Err(self.fail("should be a number"));
        }
        let number = match value.as_i64() {
            Some(number) => number,
            None => return Err(self.fail("should be an integer")),
        };
        if number < min {
            return Err(self.fail(&format!("must be at least {min}")));
        }
        if number > max {
            return Err(self.fail(&format!("can be at most {max}")));
        }
        Ok(())
    }

    fn fail(&self, reason: &str) -> Error {
        Error::Validation {
            message: format!("{} {}", self.label, reason),
        }
    }
}

/// An ordered set of required fields.
///
/// Declaration order is the validation order; unknown payload keys are
/// ignored.
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<Field>,
}

impl Schema {
    /// Build a schema from its fields, in validation order.
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Check the payload against every field, stopping at the first failure.
    pub fn validate(&self, payload: &Value) -> Result<()> {
        for field in &self.fields {
            field.check(payload)?;
        }
        Ok(())
    }

    /// Run `op` behind the schema check.
    ///
    /// On invalid input the operation is never invoked; on valid input it
    /// receives the original payload and its result is returned unchanged.
    pub fn guard<T, F>(&self, payload: &Value, op: F) -> Result<T>
    where
        F: FnOnce(&Value) -> Result<T>,
    {
        self.validate(payload)?;
        op(payload)
    }
}

static CREATION_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        Field::text("name", "Name", NAME_MIN, NAME_MAX),
        Field::text("superpower", "Superpower", SUPERPOWER_MIN, SUPERPOWER_MAX),
        Field::integer("humilityScore", "Humility score", HUMILITY_MIN, HUMILITY_MAX),
    ])
});

/// The shared schema for superhero creation payloads.
pub fn creation_schema() -> &'static Schema {
    &CREATION_SCHEMA
}
