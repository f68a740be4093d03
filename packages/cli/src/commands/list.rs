use crate::commands::load_project;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use fluent_gen_parser::{DeclarationKind, SourceFile};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// File or directory to list (defaults to the configured source directory)
    pub path: Option<PathBuf>,

    /// Show documentation comments
    #[arg(short, long)]
    pub docs: bool,
}

pub fn list(args: ListArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let input = match &args.path {
        Some(path) => config.resolve_input(cwd, path),
        None => config.src_dir(cwd),
    };

    let files = if input.is_file() {
        vec![input]
    } else if input.is_dir() {
        find_ts_files(&input)
    } else {
        return Err(anyhow!("Input path does not exist: {}", input.display()));
    };

    if files.is_empty() {
        println!("{}", "⚠️  No TypeScript files found".yellow());
        return Ok(());
    }

    for file in &files {
        // Only the file's own declarations are listed, not those it imports
        let (project, entry) = load_project(file, Vec::new())?;
        let Some(source) = project.file(&entry) else {
            continue;
        };
        print_declarations(file, source, args.docs);
    }

    Ok(())
}

fn print_declarations(path: &Path, source: &SourceFile, docs: bool) {
    println!("{}", path.display().to_string().bright_white().bold());

    if source.declarations.is_empty() {
        println!("  {}", "(no declarations)".dimmed());
    }

    for declaration in &source.declarations {
        let label = format!("{:>9}", declaration.kind().to_string());
        let kind = match declaration.kind() {
            DeclarationKind::Interface => label.blue(),
            DeclarationKind::TypeAlias => label.magenta(),
            DeclarationKind::Enum => label.cyan(),
        };
        println!("  {} {}", kind, declaration.name());

        if docs {
            if let Some(doc) = declaration.documentation() {
                println!("            {}", doc.dimmed());
            }
        }
    }
    println!();
}

/// `.ts` and `.tsx` sources under `dir`, declaration files included
fn find_ts_files(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.is_file()
                && matches!(
                    path.extension().and_then(|s| s.to_str()),
                    Some("ts") | Some("tsx")
                )
                && !path.components().any(|c| c.as_os_str() == "node_modules")
        })
        .collect();
    files.sort();
    files
}
