//! Declared behavior schemas and the typed accessor layer.
//!
//! A behavior declares up front which named child elements ("targets") and
//! typed configuration attributes ("values") it requires. Binding validates
//! the whole declaration against an element at attach time, so a behavior
//! that attaches successfully can rely on every accessor resolving.

use std::collections::HashMap;

use crate::element::Element;

/// Expected type of a configuration attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
    Flag,
}

impl ValueKind {
    fn name(&self) -> &'static str {
        match self {
            ValueKind::Text => "text",
            ValueKind::Number => "number",
            ValueKind::Flag => "flag",
        }
    }
}

/// Required named child element with its expected tag.
#[derive(Debug, Clone, Copy)]
pub struct TargetSpec {
    pub name: &'static str,
    pub tag: &'static str,
}

/// Required configuration attribute with its expected type.
#[derive(Debug, Clone, Copy)]
pub struct ValueSpec {
    pub name: &'static str,
    pub kind: ValueKind,
}

/// Full declaration for one behavior: controller name, targets, values.
#[derive(Debug, Clone, Copy)]
pub struct BehaviorSchema {
    pub controller: &'static str,
    pub targets: &'static [TargetSpec],
    pub values: &'static [ValueSpec],
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum BindError {
    #[error("Behavior {controller}: missing target '{name}'")]
    MissingTarget {
        controller: &'static str,
        name: &'static str,
    },

    #[error("Behavior {controller}: target '{name}' is <{actual}>, expected <{expected}>")]
    TargetTagMismatch {
        controller: &'static str,
        name: &'static str,
        expected: &'static str,
        actual: String,
    },

    #[error("Behavior {controller}: missing value attribute '{attribute}'")]
    MissingValue {
        controller: &'static str,
        attribute: String,
    },

    #[error("Behavior {controller}: value '{attribute}' is not a valid {kind}: '{raw}'")]
    InvalidValue {
        controller: &'static str,
        attribute: String,
        kind: &'static str,
        raw: String,
    },
}

/// Schema-validated view over one element: every declared target and value
/// is present and well-typed.
#[derive(Debug, Clone)]
pub struct BoundElement {
    targets: HashMap<&'static str, Element>,
    texts: HashMap<&'static str, String>,
    numbers: HashMap<&'static str, i64>,
    flags: HashMap<&'static str, bool>,
}

impl BoundElement {
    /// Validate `root` against `schema`. Fails fast on the first missing or
    /// mistyped target/value.
    pub fn bind(schema: &BehaviorSchema, root: &Element) -> Result<Self, BindError> {
        let mut targets = HashMap::new();
        for spec in schema.targets {
            let found = root.find_target(schema.controller, spec.name).ok_or(
                BindError::MissingTarget {
                    controller: schema.controller,
                    name: spec.name,
                },
            )?;
            if found.tag() != spec.tag {
                return Err(BindError::TargetTagMismatch {
                    controller: schema.controller,
                    name: spec.name,
                    expected: spec.tag,
                    actual: found.tag().to_string(),
                });
            }
            targets.insert(spec.name, found.clone());
        }

        let mut texts = HashMap::new();
        let mut numbers = HashMap::new();
        let mut flags = HashMap::new();
        for spec in schema.values {
            let attribute = format!("data-{}-{}-value", schema.controller, spec.name);
            let raw = root
                .attr(&attribute)
                .ok_or_else(|| BindError::MissingValue {
                    controller: schema.controller,
                    attribute: attribute.clone(),
                })?;
            let invalid = |raw: &str| BindError::InvalidValue {
                controller: schema.controller,
                attribute: attribute.clone(),
                kind: spec.kind.name(),
                raw: raw.to_string(),
            };
            match spec.kind {
                ValueKind::Text => {
                    texts.insert(spec.name, raw.to_string());
                }
                ValueKind::Number => {
                    let parsed = raw.parse::<i64>().map_err(|_| invalid(raw))?;
                    numbers.insert(spec.name, parsed);
                }
                ValueKind::Flag => {
                    let parsed = match raw {
                        "true" => true,
                        "false" => false,
                        other => return Err(invalid(other)),
                    };
                    flags.insert(spec.name, parsed);
                }
            }
        }

        Ok(Self {
            targets,
            texts,
            numbers,
            flags,
        })
    }

    pub fn target(&self, name: &str) -> Option<&Element> {
        self.targets.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(String::as_str)
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        self.numbers.get(name).copied()
    }

    pub fn flag(&self, name: &str) -> Option<bool> {
        self.flags.get(name).copied()
    }
}
