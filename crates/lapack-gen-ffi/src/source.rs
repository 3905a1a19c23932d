//! Raw binding text cleanup.
//!
//! Turns the text of a binding file into a list of single-line statements,
//! ready for [`Prototype::parse`](crate::prototype::Prototype::parse).
//! Bindgen output is recognised by its `extern "C" {` blocks; only their
//! bodies are kept. Text without such blocks is taken as a bare list of
//! statements.

use crate::error::{GenError, Result};

const EXTERN_BLOCK: &str = "extern \"C\"";

/// Split binding text into cleaned, non-empty statements.
///
/// Comment lines and attribute lines are dropped, whitespace runs collapse to
/// a single space, and statements are separated on `;`. Text trailing the `}`
/// of an extern block is a parse error.
pub fn clean(text: &str) -> Result<Vec<String>> {
    let lines = declaration_lines(text)?;

    let joined = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !is_comment_or_attribute(line))
        .collect::<Vec<_>>()
        .join("\n");
    let collapsed = joined.split_whitespace().collect::<Vec<_>>().join(" ");

    Ok(collapsed
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .map(str::to_string)
        .collect())
}

fn is_comment_or_attribute(line: &str) -> bool {
    line.starts_with("//") || line.starts_with("#[")
}

/// Byte offset of the `{` opening an extern block on this line.
fn block_opener(line: &str) -> Option<usize> {
    let start = line.find(EXTERN_BLOCK)? + EXTERN_BLOCK.len();
    let brace = line[start..].find('{')?;
    line[start..start + brace]
        .trim()
        .is_empty()
        .then_some(start + brace)
}

/// Lines holding declarations: the bodies of `extern "C"` blocks when the
/// text has any, every line otherwise.
///
/// Blocks may open and close on the same line as their declarations.
fn declaration_lines(text: &str) -> Result<Vec<&str>> {
    let mut lines = Vec::new();
    let mut inside = false;
    let mut found_block = false;

    for line in text.lines() {
        let mut rest = line.trim();
        if !inside {
            let Some(open) = block_opener(rest) else {
                continue;
            };
            inside = true;
            found_block = true;
            rest = rest[open + 1..].trim();
        } else if is_comment_or_attribute(rest) {
            lines.push(rest);
            continue;
        }

        if let Some(close) = rest.find('}') {
            let trailer = rest[close + 1..].trim();
            if !trailer.is_empty() {
                return Err(GenError::Parse {
                    statement: line.trim().to_string(),
                    detail: format!("unexpected '{trailer}' after extern block"),
                });
            }
            rest = rest[..close].trim();
            inside = false;
        }
        if !rest.is_empty() {
            lines.push(rest);
        }
    }

    if found_block {
        Ok(lines)
    } else {
        Ok(text.lines().collect())
    }
}
