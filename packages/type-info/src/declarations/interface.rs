use super::{analyze_members, DeclarationRequest, DeclarationStrategy};
use crate::analyzer::TypeAnalyzer;
use crate::context::{DiagnosticKind, ExtractorContext};
use crate::error::AnalysisResult;
use crate::factory::PropertyFactory;
use crate::options::AnalyzeOptions;
use crate::property::PropertyInfo;
use fluent_gen_parser::{Declaration, InterfaceDecl, TypeNode};

/// Interfaces become objects: own properties in declaration order, then
/// inherited properties not shadowed by an own one
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceStrategy;

impl DeclarationStrategy for InterfaceStrategy {
    fn name(&self) -> &'static str {
        "interface"
    }

    fn can_handle(&self, declaration: &Declaration) -> bool {
        matches!(declaration, Declaration::Interface(_))
    }

    fn analyze(
        &self,
        declaration: &Declaration,
        request: &DeclarationRequest<'_>,
        ctx: &mut ExtractorContext<'_>,
        options: &AnalyzeOptions,
        analyzer: &TypeAnalyzer,
    ) -> AnalysisResult<Option<PropertyInfo>> {
        let Declaration::Interface(interface) = declaration else {
            return Ok(None);
        };

        let key = circular_key(&interface.name, request.type_args);
        if !ctx.enter_circular_check(&key) {
            ctx.warn(
                DiagnosticKind::CircularDependency,
                format!("Circular dependency detected: {}", interface.name),
            );
            let truncated =
                PropertyFactory::object(request.name, Vec::new(), request.type_as_string, options)
                    .with_documentation(interface.documentation.clone());
            return Ok(Some(truncated));
        }

        let scope = request.bind_type_params(declaration, ctx.file_path(), options);
        let member_options = options.nested().with_generic_context(scope);
        let result = collect_object(interface, request, ctx, options, &member_options, analyzer);

        ctx.exit_circular_check(&key);
        Ok(Some(result))
    }
}

fn collect_object(
    interface: &InterfaceDecl,
    request: &DeclarationRequest<'_>,
    ctx: &mut ExtractorContext<'_>,
    options: &AnalyzeOptions,
    member_options: &AnalyzeOptions,
    analyzer: &TypeAnalyzer,
) -> PropertyInfo {
    let mut analysis = analyze_members(&interface.members, ctx, member_options, analyzer);

    for heritage in &interface.extends {
        let Some(base) = analyzer.analyze(&heritage.text, heritage, ctx, member_options) else {
            continue;
        };
        if !base.is_object() {
            continue;
        }

        analysis.accepts_unknown_properties |= base.accepts_unknown_properties;
        for inherited in base.into_children() {
            let shadowed = analysis
                .properties
                .iter()
                .any(|own| own.name == inherited.name);
            if !shadowed {
                analysis.properties.push(inherited);
            }
        }
    }

    let mut object = PropertyFactory::object(
        request.name,
        analysis.properties,
        request.type_as_string,
        options,
    )
    .with_documentation(interface.documentation.clone());
    object.accepts_unknown_properties = analysis.accepts_unknown_properties;
    object
}

/// Instantiations with different arguments are distinct expansions
fn circular_key(name: &str, type_args: &[TypeNode]) -> String {
    if type_args.is_empty() {
        name.to_string()
    } else {
        let args: Vec<&str> = type_args.iter().map(|arg| arg.text.as_str()).collect();
        format!("{}<{}>", name, args.join(", "))
    }
}
