//! The property model handed to builder generators
//!
//! A `PropertyInfo` is either a terminal leaf (a primitive, literal or enum)
//! or a non-terminal with children (an object's properties or a union's
//! elements). The split is encoded in [`PropertyNode`] so a terminal can
//! never carry children. On the wire the tree keeps the flat camelCase shape
//! consumers already read: `kind`, `type`, then `properties` or `elements`.

use crate::error::ModelError;
use fluent_gen_parser::{format_number, Literal};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value carried by a terminal property or an enum
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    String(String),
    Number(OrderedFloat<f64>),
    Boolean(bool),
    Null,
}

impl LiteralValue {
    pub fn number(value: f64) -> Self {
        LiteralValue::Number(OrderedFloat(value))
    }

    /// The value as an object key
    pub fn as_key(&self) -> String {
        match self {
            LiteralValue::String(s) => s.clone(),
            LiteralValue::Number(n) => format_number(n.0),
            LiteralValue::Boolean(b) => b.to_string(),
            LiteralValue::Null => "null".to_string(),
        }
    }
}

impl From<&Literal> for LiteralValue {
    fn from(literal: &Literal) -> Self {
        match literal {
            Literal::String(s) => LiteralValue::String(s.clone()),
            Literal::Number(n) => LiteralValue::number(*n),
            Literal::Boolean(b) => LiteralValue::Boolean(*b),
        }
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "\"{}\"", s),
            other => write!(f, "{}", other.as_key()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyKind {
    Terminal,
    NonTerminal,
}

/// The `type` tag of a serialized property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Number,
    Boolean,
    Enum,
    Object,
    Union,
    Unknown,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PropertyType::String => "string",
            PropertyType::Number => "number",
            PropertyType::Boolean => "boolean",
            PropertyType::Enum => "enum",
            PropertyType::Object => "object",
            PropertyType::Union => "union",
            PropertyType::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminalType {
    String,
    Number,
    Boolean,
    Enum,
    Unknown,
}

impl From<TerminalType> for PropertyType {
    fn from(ty: TerminalType) -> Self {
        match ty {
            TerminalType::String => PropertyType::String,
            TerminalType::Number => PropertyType::Number,
            TerminalType::Boolean => PropertyType::Boolean,
            TerminalType::Enum => PropertyType::Enum,
            TerminalType::Unknown => PropertyType::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminalType {
    Object,
    Union,
}

impl From<NonTerminalType> for PropertyType {
    fn from(ty: NonTerminalType) -> Self {
        match ty {
            NonTerminalType::Object => PropertyType::Object,
            NonTerminalType::Union => PropertyType::Union,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyNode {
    Terminal {
        type_: TerminalType,
        /// Literal value for literal types
        value: Option<LiteralValue>,
        /// Member values for enums
        values: Option<Vec<LiteralValue>>,
    },
    NonTerminal {
        type_: NonTerminalType,
        /// Object properties, or union elements
        children: Vec<PropertyInfo>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPropertyInfo", into = "RawPropertyInfo")]
pub struct PropertyInfo {
    pub name: String,
    /// Rendering of the type expression this property came from
    pub type_as_string: String,
    pub is_optional: bool,
    pub is_array: bool,
    pub documentation: Option<String>,
    /// The object admits keys beyond `properties`
    pub accepts_unknown_properties: bool,
    pub node: PropertyNode,
}

impl PropertyInfo {
    pub fn kind(&self) -> PropertyKind {
        match self.node {
            PropertyNode::Terminal { .. } => PropertyKind::Terminal,
            PropertyNode::NonTerminal { .. } => PropertyKind::NonTerminal,
        }
    }

    pub fn property_type(&self) -> PropertyType {
        match &self.node {
            PropertyNode::Terminal { type_, .. } => (*type_).into(),
            PropertyNode::NonTerminal { type_, .. } => (*type_).into(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.kind() == PropertyKind::Terminal
    }

    pub fn is_object(&self) -> bool {
        self.property_type() == PropertyType::Object
    }

    pub fn is_union(&self) -> bool {
        self.property_type() == PropertyType::Union
    }

    /// Children of a non-terminal, empty for terminals
    pub fn children(&self) -> &[PropertyInfo] {
        match &self.node {
            PropertyNode::NonTerminal { children, .. } => children,
            PropertyNode::Terminal { .. } => &[],
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<PropertyInfo>> {
        match &mut self.node {
            PropertyNode::NonTerminal { children, .. } => Some(children),
            PropertyNode::Terminal { .. } => None,
        }
    }

    pub fn into_children(self) -> Vec<PropertyInfo> {
        match self.node {
            PropertyNode::NonTerminal { children, .. } => children,
            PropertyNode::Terminal { .. } => Vec::new(),
        }
    }

    /// Object properties; `None` unless this is an object
    pub fn properties(&self) -> Option<&[PropertyInfo]> {
        self.is_object().then(|| self.children())
    }

    /// Union elements; `None` unless this is a union
    pub fn elements(&self) -> Option<&[PropertyInfo]> {
        self.is_union().then(|| self.children())
    }

    /// Child property by name
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.children().iter().find(|child| child.name == name)
    }

    pub fn value(&self) -> Option<&LiteralValue> {
        match &self.node {
            PropertyNode::Terminal { value, .. } => value.as_ref(),
            PropertyNode::NonTerminal { .. } => None,
        }
    }

    pub fn values(&self) -> Option<&[LiteralValue]> {
        match &self.node {
            PropertyNode::Terminal { values, .. } => values.as_deref(),
            PropertyNode::NonTerminal { .. } => None,
        }
    }

    /// Re-tag a union as an object whose properties are its elements
    pub fn into_object_shape(mut self) -> Self {
        if let PropertyNode::NonTerminal { type_, .. } = &mut self.node {
            *type_ = NonTerminalType::Object;
        }
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_documentation(mut self, documentation: Option<String>) -> Self {
        self.documentation = documentation;
        self
    }
}

/// Serialized layout of a property
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPropertyInfo {
    kind: PropertyKind,
    #[serde(rename = "type")]
    type_: PropertyType,
    name: String,
    type_as_string: String,
    #[serde(default, skip_serializing_if = "is_false")]
    is_optional: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    is_array: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    documentation: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    accepts_unknown_properties: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<LiteralValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    values: Option<Vec<LiteralValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    properties: Option<Vec<PropertyInfo>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    elements: Option<Vec<PropertyInfo>>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl From<PropertyInfo> for RawPropertyInfo {
    fn from(info: PropertyInfo) -> Self {
        let type_ = info.property_type();
        let kind = info.kind();
        let (value, values, properties, elements) = match info.node {
            PropertyNode::Terminal { value, values, .. } => (value, values, None, None),
            PropertyNode::NonTerminal {
                type_: NonTerminalType::Object,
                children,
            } => (None, None, Some(children), None),
            PropertyNode::NonTerminal {
                type_: NonTerminalType::Union,
                children,
            } => (None, None, None, Some(children)),
        };

        RawPropertyInfo {
            kind,
            type_,
            name: info.name,
            type_as_string: info.type_as_string,
            is_optional: info.is_optional,
            is_array: info.is_array,
            documentation: info.documentation,
            accepts_unknown_properties: info.accepts_unknown_properties,
            value,
            values,
            properties,
            elements,
        }
    }
}

impl TryFrom<RawPropertyInfo> for PropertyInfo {
    type Error = ModelError;

    fn try_from(raw: RawPropertyInfo) -> Result<Self, Self::Error> {
        let invalid = |reason: &str| ModelError {
            name: raw.name.clone(),
            reason: reason.to_string(),
        };

        let node = match raw.kind {
            PropertyKind::Terminal => {
                if raw.properties.is_some() || raw.elements.is_some() {
                    return Err(invalid("terminal properties cannot have children"));
                }
                let type_ = match raw.type_ {
                    PropertyType::String => TerminalType::String,
                    PropertyType::Number => TerminalType::Number,
                    PropertyType::Boolean => TerminalType::Boolean,
                    PropertyType::Enum => TerminalType::Enum,
                    PropertyType::Unknown => TerminalType::Unknown,
                    PropertyType::Object | PropertyType::Union => {
                        return Err(invalid("object and union types must be non-terminal"))
                    }
                };
                PropertyNode::Terminal {
                    type_,
                    value: raw.value,
                    values: raw.values,
                }
            }
            PropertyKind::NonTerminal => {
                if raw.value.is_some() || raw.values.is_some() {
                    return Err(invalid("non-terminal properties cannot carry values"));
                }
                match (raw.type_, raw.properties, raw.elements) {
                    (PropertyType::Object, Some(children), None) => PropertyNode::NonTerminal {
                        type_: NonTerminalType::Object,
                        children,
                    },
                    (PropertyType::Union, None, Some(children)) => PropertyNode::NonTerminal {
                        type_: NonTerminalType::Union,
                        children,
                    },
                    (PropertyType::Object, _, _) => {
                        return Err(invalid("objects carry exactly `properties`"))
                    }
                    (PropertyType::Union, _, _) => {
                        return Err(invalid("unions carry exactly `elements`"))
                    }
                    _ => return Err(invalid("only object and union types can be non-terminal")),
                }
            }
        };

        Ok(PropertyInfo {
            name: raw.name,
            type_as_string: raw.type_as_string,
            is_optional: raw.is_optional,
            is_array: raw.is_array,
            documentation: raw.documentation,
            accepts_unknown_properties: raw.accepts_unknown_properties,
            node,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn terminal(name: &str, type_: TerminalType) -> PropertyInfo {
        PropertyInfo {
            name: name.to_string(),
            type_as_string: "string".to_string(),
            is_optional: false,
            is_array: false,
            documentation: None,
            accepts_unknown_properties: false,
            node: PropertyNode::Terminal {
                type_,
                value: None,
                values: None,
            },
        }
    }

    #[test]
    fn test_object_serializes_with_properties() {
        let object = PropertyInfo {
            name: "user".to_string(),
            type_as_string: "User".to_string(),
            is_optional: true,
            is_array: false,
            documentation: Some("The user".to_string()),
            accepts_unknown_properties: false,
            node: PropertyNode::NonTerminal {
                type_: NonTerminalType::Object,
                children: vec![terminal("id", TerminalType::String)],
            },
        };

        let value = serde_json::to_value(&object).unwrap();
        assert_eq!(
            value,
            json!({
                "kind": "non-terminal",
                "type": "object",
                "name": "user",
                "typeAsString": "User",
                "isOptional": true,
                "documentation": "The user",
                "properties": [
                    { "kind": "terminal", "type": "string", "name": "id", "typeAsString": "string" }
                ]
            })
        );
    }

    #[test]
    fn test_literal_value_serialization() {
        let mut status = terminal("status", TerminalType::String);
        status.node = PropertyNode::Terminal {
            type_: TerminalType::String,
            value: Some(LiteralValue::String("active".to_string())),
            values: None,
        };
        let value = serde_json::to_value(&status).unwrap();
        assert_eq!(value["value"], "active");

        assert_eq!(serde_json::to_value(LiteralValue::number(2.0)).unwrap(), json!(2.0));
        assert_eq!(serde_json::to_value(LiteralValue::Null).unwrap(), json!(null));
    }

    #[test]
    fn test_deserialize_rejects_terminal_with_children() {
        let raw = json!({
            "kind": "terminal",
            "type": "string",
            "name": "bad",
            "typeAsString": "string",
            "properties": []
        });
        assert!(serde_json::from_value::<PropertyInfo>(raw).is_err());

        let raw = json!({
            "kind": "non-terminal",
            "type": "union",
            "name": "bad",
            "typeAsString": "A | B",
            "properties": []
        });
        assert!(serde_json::from_value::<PropertyInfo>(raw).is_err());
    }

    #[test]
    fn test_deserialize_union() {
        let raw = json!({
            "kind": "non-terminal",
            "type": "union",
            "name": "value",
            "typeAsString": "string | number",
            "elements": [
                { "kind": "terminal", "type": "string", "name": "", "typeAsString": "string" },
                { "kind": "terminal", "type": "number", "name": "", "typeAsString": "number" }
            ]
        });
        let info: PropertyInfo = serde_json::from_value(raw).unwrap();
        assert!(info.is_union());
        assert_eq!(info.elements().map(|e| e.len()), Some(2));
        assert_eq!(info.properties(), None);
    }

    #[test]
    fn test_union_reshaped_as_object() {
        let union = PropertyInfo {
            node: PropertyNode::NonTerminal {
                type_: NonTerminalType::Union,
                children: vec![terminal("", TerminalType::String)],
            },
            ..terminal("status", TerminalType::String)
        };
        let object = union.into_object_shape();
        assert!(object.is_object());
        assert_eq!(object.children().len(), 1);
    }

    #[test]
    fn test_literal_keys() {
        assert_eq!(LiteralValue::number(3.0).as_key(), "3");
        assert_eq!(LiteralValue::String("a".into()).to_string(), "\"a\"");
    }
}
