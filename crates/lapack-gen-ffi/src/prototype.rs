//! Hand-written declaration parser.
//!
//! Handles prototypes of the form `name(a: T, b: U) -> R` as they appear in
//! cleaned binding text, with an optional `pub unsafe fn` prefix and the trailing
//! `_` of Fortran symbols. Parsing is purely syntactic: raw types are kept as
//! written and interpreted later by [`crate::ctype`] and [`crate::classify`].

use crate::error::{GenError, Result};
use crate::source;

/// A parsed parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    /// Parameter name as written.
    pub name: String,
    /// Raw type text (e.g. `*const c_int`).
    pub raw_type: String,
}

/// A parsed foreign function declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prototype {
    /// Routine name without the Fortran `_` suffix.
    pub name: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Param>,
    /// Raw return type, if any.
    pub return_type: Option<String>,
}

impl Prototype {
    /// Parse a single cleaned statement.
    ///
    /// Examples:
    /// - `"sgesv(n: *const c_int, a: *mut f32)"`
    /// - `"pub fn dlamch_(cmach: *const c_char) -> f64"`
    pub fn parse(statement: &str) -> Result<Self> {
        let input = statement.trim();
        if input.is_empty() {
            return Err(invalid(statement, "empty statement"));
        }

        let open = input.find('(').ok_or_else(|| invalid(statement, "missing '('"))?;
        let close = matching_paren(input, open).ok_or_else(|| invalid(statement, "missing ')'"))?;

        let name = strip_keywords(&input[..open]);
        if name.is_empty() {
            return Err(invalid(statement, "missing function name"));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid(statement, "function name is not an identifier"));
        }
        let name = name.strip_suffix('_').unwrap_or(name).to_string();

        let parameters = parse_params(statement, &input[open + 1..close])?;
        let return_type = parse_return(statement, &input[close + 1..])?;

        Ok(Prototype {
            name,
            parameters,
            return_type,
        })
    }

    /// Name of the raw entry point this prototype was declared as.
    pub fn symbol(&self) -> String {
        format!("{}_", self.name)
    }
}

impl std::fmt::Display for Prototype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", param.name, param.raw_type)?;
        }
        write!(f, ")")?;
        if let Some(ret) = &self.return_type {
            write!(f, " -> {ret}")?;
        }
        Ok(())
    }
}

/// Clean raw binding text and parse every statement in it.
///
/// Stops at the first statement that fails to parse.
pub fn parse_all(text: &str) -> Result<Vec<Prototype>> {
    source::clean(text)?
        .iter()
        .map(|stmt| Prototype::parse(stmt))
        .collect()
}

fn invalid(statement: &str, detail: &str) -> GenError {
    GenError::Parse {
        statement: statement.trim().to_string(),
        detail: detail.to_string(),
    }
}

/// Strip `pub` / `unsafe` / `safe` / `fn` keywords in front of the routine name.
fn strip_keywords(head: &str) -> &str {
    let mut head = head.trim();
    for keyword in ["pub ", "unsafe ", "safe ", "fn "] {
        if let Some(rest) = head.strip_prefix(keyword) {
            head = rest.trim_start();
        }
    }
    head.trim()
}

/// Byte offset of the `)` closing the `(` at `open`.
fn matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in s[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split on commas that are not nested inside `<>` or `()`.
fn split_top_level(s: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;
    for (i, c) in s.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            // `->` inside a nested fn type is not a closing bracket
            '>' if !s[..i].ends_with('-') => depth -= 1,
            ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&s[start..]);
    parts
}

/// Parse the parameter list between `(` and `)`.
fn parse_params(statement: &str, s: &str) -> Result<Vec<Param>> {
    if s.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parts = split_top_level(s);
    let last = parts.len() - 1;
    let mut params = Vec::new();

    for (i, part) in parts.iter().enumerate() {
        let part = part.trim();
        if part.is_empty() {
            if i == last {
                // trailing comma
                continue;
            }
            return Err(invalid(statement, "empty parameter"));
        }

        let (name, raw_type) = part
            .split_once(':')
            .ok_or_else(|| invalid(statement, &format!("missing ':' in parameter '{part}'")))?;
        let (name, raw_type) = (name.trim(), raw_type.trim());
        if name.is_empty() || raw_type.is_empty() {
            return Err(invalid(statement, &format!("incomplete parameter '{part}'")));
        }

        params.push(Param {
            name: name.to_string(),
            raw_type: raw_type.to_string(),
        });
    }

    Ok(params)
}

/// Parse what follows the closing `)`: nothing, or `-> type`.
fn parse_return(statement: &str, rest: &str) -> Result<Option<String>> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Ok(None);
    }
    match rest.strip_prefix("->").map(str::trim) {
        Some(ty) if !ty.is_empty() => Ok(Some(ty.to_string())),
        Some(_) => Err(invalid(statement, "missing return type after '->'")),
        None => Err(invalid(statement, &format!("unexpected '{rest}' after ')'"))),
    }
}
