use crate::commands::load_project;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use fluent_gen_project::Project;
use fluent_gen_type_info::{Diagnostic, ExtractedType, ExtractorOptions, InterfaceExtractor};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// TypeScript file to extract from
    pub file: PathBuf,

    /// Declarations to extract (every declaration of the file when omitted)
    pub types: Vec<String>,

    /// Maximum nesting depth of the analysis (overrides config)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Additional directory to resolve package imports in
    #[arg(long = "module-dir")]
    pub module_dirs: Vec<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Suppress the diagnostics summary on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn extract(args: ExtractArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = config.resolve_input(cwd, &args.file);
    if !input.is_file() {
        return Err(anyhow!("Input file does not exist: {}", input.display()));
    }

    let (project, entry) = load_project(&input, config.module_dirs(cwd, &args.module_dirs))?;
    debug!(files = project.file_count(), entry = %entry.display(), "Project loaded");

    let mut options = ExtractorOptions::default();
    if let Some(max_depth) = args.max_depth.or(config.max_depth) {
        options = ExtractorOptions::with_max_depth(max_depth);
    }

    let names = requested_names(&project, &entry, &args.types)?;
    let mut extractor = InterfaceExtractor::new(&project, &entry).with_options(options);

    let mut extracted = Vec::with_capacity(names.len());
    let mut diagnostics = Vec::new();
    for name in &names {
        extracted.push(extractor.extract(name)?);
        diagnostics.extend(extractor.diagnostics().iter().cloned());
    }

    println!("{}", render(&extracted, args.types.len() == 1, args.pretty)?);

    if !args.quiet {
        report(&diagnostics);
    }

    Ok(())
}

fn requested_names(
    project: &Project,
    entry: &Path,
    types: &[String],
) -> Result<Vec<String>> {
    if !types.is_empty() {
        return Ok(types.to_vec());
    }

    let file = project
        .file(entry)
        .ok_or_else(|| anyhow!("File was not loaded: {}", entry.display()))?;
    Ok(file
        .declaration_names()
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// A single requested type prints as an object, anything else as an array
fn render(extracted: &[ExtractedType], single: bool, pretty: bool) -> Result<String> {
    let value = match extracted {
        [only] if single => serde_json::to_value(only)?,
        all => serde_json::to_value(all)?,
    };

    let json = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(json)
}

fn report(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!(
            "{} {} {}",
            "warning:".yellow().bold(),
            diagnostic.message,
            format!("({})", diagnostic.file_path.display()).dimmed()
        );
    }
    if !diagnostics.is_empty() {
        eprintln!(
            "{} {} diagnostic(s) reported",
            "⚠️".yellow(),
            diagnostics.len()
        );
    }
}
