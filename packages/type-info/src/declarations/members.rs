use crate::analyzer::TypeAnalyzer;
use crate::context::ExtractorContext;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::{PropertyInfo, TerminalType};
use fluent_gen_parser::TypeMember;

/// Properties of an object-like member list
#[derive(Debug, Default)]
pub struct MemberAnalysis {
    pub properties: Vec<PropertyInfo>,
    /// An index signature was present
    pub accepts_unknown_properties: bool,
}

/// Analyze the property members of an interface body or type literal
///
/// Methods and call signatures have no builder representation and are
/// skipped, as are properties whose type analyzes to nothing. `options`
/// are the options for the members themselves.
pub fn analyze_members(
    members: &[TypeMember],
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
) -> MemberAnalysis {
    let mut analysis = MemberAnalysis::default();

    for member in members {
        match member {
            TypeMember::Property(property) => {
                let member_options = options.clone().with_optional(property.optional);
                let info = match &property.ty {
                    Some(ty) => analyzer.analyze(&property.name, ty, ctx, &member_options),
                    // Unannotated members are implicitly `any`
                    None => Some(PropertyFactory::terminal(
                        &property.name,
                        TerminalType::Unknown,
                        "any",
                        &member_options,
                    )),
                };

                if let Some(mut info) = info {
                    if property.documentation.is_some() {
                        info.documentation = property.documentation.clone();
                    }
                    analysis.properties.push(info);
                }
            }
            TypeMember::Index(_) => analysis.accepts_unknown_properties = true,
            TypeMember::Method(_) | TypeMember::Call(_) => {}
        }
    }

    analysis
}
