use crate::options::AnalyzeOptions;
use crate::property::*;

pub const FALLBACK_DOCUMENTATION: &str = "Fallback for unresolved type";

/// Builds well-formed properties with the call's modifiers applied
pub struct PropertyFactory;

impl PropertyFactory {
    pub fn terminal(
        name: &str,
        type_: TerminalType,
        type_as_string: &str,
        options: &AnalyzeOptions,
    ) -> PropertyInfo {
        Self::build(
            name,
            type_as_string,
            options,
            PropertyNode::Terminal {
                type_,
                value: None,
                values: None,
            },
        )
    }

    /// A terminal carrying a literal value
    pub fn literal(
        name: &str,
        type_: TerminalType,
        value: LiteralValue,
        type_as_string: &str,
        options: &AnalyzeOptions,
    ) -> PropertyInfo {
        Self::build(
            name,
            type_as_string,
            options,
            PropertyNode::Terminal {
                type_,
                value: Some(value),
                values: None,
            },
        )
    }

    pub fn enumeration(
        name: &str,
        values: Vec<LiteralValue>,
        type_as_string: &str,
        options: &AnalyzeOptions,
    ) -> PropertyInfo {
        Self::build(
            name,
            type_as_string,
            options,
            PropertyNode::Terminal {
                type_: TerminalType::Enum,
                value: None,
                values: Some(values),
            },
        )
    }

    pub fn object(
        name: &str,
        properties: Vec<PropertyInfo>,
        type_as_string: &str,
        options: &AnalyzeOptions,
    ) -> PropertyInfo {
        Self::build(
            name,
            type_as_string,
            options,
            PropertyNode::NonTerminal {
                type_: NonTerminalType::Object,
                children: properties,
            },
        )
    }

    /// An object with no known properties that admits any key
    pub fn open_object(name: &str, type_as_string: &str, options: &AnalyzeOptions) -> PropertyInfo {
        let mut object = Self::object(name, Vec::new(), type_as_string, options);
        object.accepts_unknown_properties = true;
        object
    }

    pub fn union(
        name: &str,
        elements: Vec<PropertyInfo>,
        type_as_string: &str,
        options: &AnalyzeOptions,
    ) -> PropertyInfo {
        Self::build(
            name,
            type_as_string,
            options,
            PropertyNode::NonTerminal {
                type_: NonTerminalType::Union,
                children: elements,
            },
        )
    }

    /// Stand-in for a type that could not be analyzed
    pub fn fallback(name: &str, type_as_string: &str, options: &AnalyzeOptions) -> PropertyInfo {
        Self::terminal(name, TerminalType::String, type_as_string, options)
            .with_documentation(Some(FALLBACK_DOCUMENTATION.to_string()))
    }

    fn build(
        name: &str,
        type_as_string: &str,
        options: &AnalyzeOptions,
        node: PropertyNode,
    ) -> PropertyInfo {
        PropertyInfo {
            name: name.to_string(),
            type_as_string: type_as_string.to_string(),
            is_optional: options.is_optional,
            is_array: options.is_array,
            documentation: None,
            accepts_unknown_properties: false,
            node,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_applied() {
        let options = AnalyzeOptions::default().with_optional(true).with_array(true);
        let prop = PropertyFactory::terminal("tags", TerminalType::String, "string", &options);

        assert!(prop.is_optional);
        assert!(prop.is_array);
        assert_eq!(prop.property_type(), PropertyType::String);
    }

    #[test]
    fn test_fallback_is_documented_string() {
        let prop = PropertyFactory::fallback("x", "Weird<T>", &AnalyzeOptions::default());

        assert!(prop.is_terminal());
        assert_eq!(prop.property_type(), PropertyType::String);
        assert_eq!(prop.type_as_string, "Weird<T>");
        assert_eq!(prop.documentation.as_deref(), Some(FALLBACK_DOCUMENTATION));
    }

    #[test]
    fn test_open_object() {
        let prop = PropertyFactory::open_object("meta", "object", &AnalyzeOptions::default());
        assert!(prop.accepts_unknown_properties);
        assert_eq!(prop.properties(), Some(&[][..]));
    }
}
