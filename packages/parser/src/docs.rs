//! JSDoc extraction
//!
//! Only `/** ... */` comments count as documentation. The text is returned
//! with comment markers and leading `*` gutters removed; tag lines such as
//! `@deprecated` are kept verbatim.

/// Returns true for a `/** ... */` block comment (but not `/**/`)
pub fn is_doc_comment(comment: &str) -> bool {
    comment.starts_with("/**") && comment.len() > 4 && !comment.starts_with("/***")
}

/// Strip comment markers from a JSDoc block, returning `None` when the block
/// carries no text
pub fn extract_doc_comment(comment: &str) -> Option<String> {
    if !is_doc_comment(comment) {
        return None;
    }

    let body = comment
        .strip_prefix("/**")
        .and_then(|rest| rest.strip_suffix("*/"))
        .unwrap_or("");

    let lines: Vec<&str> = body
        .lines()
        .map(|line| {
            let trimmed = line.trim();
            match trimmed.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest).trim_end(),
                None => trimmed,
            }
        })
        .collect();

    // Drop blank lines around the text but keep the ones inside it
    let start = lines.iter().position(|line| !line.is_empty())?;
    let end = lines.iter().rposition(|line| !line.is_empty())?;

    Some(lines[start..=end].join("\n"))
}
