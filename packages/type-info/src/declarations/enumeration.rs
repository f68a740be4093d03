use super::{DeclarationRequest, DeclarationStrategy};
use crate::analyzer::TypeAnalyzer;
use crate::context::ExtractorContext;
use crate::error::{AnalysisError, AnalysisResult};
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::{LiteralValue, PropertyInfo};
use fluent_gen_parser::Declaration;

/// Enums become enum terminals listing their member values
///
/// A member's literal initializer wins over its name; members with computed
/// or missing initializers contribute their name.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumStrategy;

impl DeclarationStrategy for EnumStrategy {
    fn name(&self) -> &'static str {
        "enum"
    }

    fn can_handle(&self, declaration: &Declaration) -> bool {
        matches!(declaration, Declaration::Enum(_))
    }

    fn analyze(
        &self,
        declaration: &Declaration,
        request: &DeclarationRequest<'_>,
        _ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        _analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        let Declaration::Enum(enumeration) = declaration else {
            return Ok(None);
        };

        if enumeration.members.is_empty() {
            return Err(AnalysisError::EmptyEnum {
                name: enumeration.name.clone(),
            });
        }

        let values = enumeration
            .members
            .iter()
            .map(|member| match &member.initializer {
                Some(literal) => LiteralValue::from(literal),
                None => LiteralValue::String(member.name.clone()),
            })
            .collect();

        let info = PropertyFactory::enumeration(request.name, values, request.type_as_string, options)
            .with_documentation(enumeration.documentation.clone());
        Ok(Some(info))
    }
}
