//! Wrapper assembly and output.

use std::io::Write;

use tracing::{debug, info};

use crate::call::build_body;
use crate::error::Result;
use crate::prototype::{parse_all, Prototype};
use crate::signature::build_signature;

/// Routines that never get a generated wrapper.
///
/// `lsame` compares two characters and is wrapped by hand.
pub const EXCLUDED: &[&str] = &["lsame"];

/// Whether `name` is on the exclusion list.
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED.iter().any(|excluded| excluded.eq_ignore_ascii_case(name))
}

/// Signature and body of one generated wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapperUnit {
    pub signature: String,
    pub body: String,
}

impl WrapperUnit {
    /// Derive the wrapper for one prototype.
    pub fn build(prototype: &Prototype) -> Result<Self> {
        Ok(WrapperUnit {
            signature: build_signature(prototype)?,
            body: build_body(prototype)?,
        })
    }

    /// Text of the wrapper, preceded by a blank line.
    pub fn render(&self) -> String {
        format!("\n#[inline]\n{} {{\n    {}\n}}\n", self.signature, self.body)
    }
}

/// Build the wrappers of every non-excluded prototype, in input order.
pub fn build_units(prototypes: &[Prototype]) -> Result<Vec<WrapperUnit>> {
    let mut units = Vec::with_capacity(prototypes.len());
    for prototype in prototypes {
        if is_excluded(&prototype.name) {
            debug!(routine = %prototype.name, "skipping excluded routine");
            continue;
        }
        units.push(WrapperUnit::build(prototype)?);
    }
    Ok(units)
}

/// Write the wrappers of `prototypes` to `out`.
///
/// Every wrapper is derived before anything is written, so a failure leaves
/// `out` untouched. Returns the number of wrappers written.
pub fn emit<W: Write>(prototypes: &[Prototype], out: &mut W) -> Result<usize> {
    let units = build_units(prototypes)?;
    for unit in &units {
        out.write_all(unit.render().as_bytes())?;
    }
    info!(
        prototypes = prototypes.len(),
        wrappers = units.len(),
        "emitted wrappers"
    );
    Ok(units.len())
}

/// Run the whole pipeline over raw binding text.
pub fn generate(text: &str) -> Result<String> {
    let prototypes = parse_all(text)?;
    let mut out = Vec::new();
    emit(&prototypes, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GenError;

    #[test]
    fn render_format() {
        let unit = WrapperUnit {
            signature: "pub unsafe fn ilaver(vers_major: &mut i32)".to_string(),
            body: "ffi::ilaver_(vers_major)".to_string(),
        };
        assert_eq!(
            unit.render(),
            "\n#[inline]\npub unsafe fn ilaver(vers_major: &mut i32) {\n    ffi::ilaver_(vers_major)\n}\n"
        );
    }

    #[test]
    fn lsame_is_excluded() {
        let text = "lsame(ca: *const c_char, cb: *const c_char, arg1: size_t, arg2: size_t) -> c_int;\n\
                    ilaver(vers_major: *mut c_int, vers_minor: *mut c_int, vers_patch: *mut c_int);";
        let out = generate(text).unwrap();
        assert!(!out.contains("lsame"));
        assert!(out.contains("pub unsafe fn ilaver("));
        assert!(is_excluded("lsame"));
        assert!(!is_excluded("slamch"));
    }

    #[test]
    fn emit_counts_units() {
        let prototypes = parse_all("sgesv(n: *const c_int);\nlsame(ca: *const c_char) -> c_int;\ndgesv(n: *const c_int);")
            .unwrap();
        let mut out = Vec::new();
        assert_eq!(emit(&prototypes, &mut out).unwrap(), 2);
    }

    #[test]
    fn failure_writes_nothing() {
        let prototypes = parse_all("sgesv(n: *const c_int);\nfoo(x: *mut c_void);").unwrap();
        let mut out = Vec::new();
        assert!(matches!(emit(&prototypes, &mut out), Err(GenError::TypeMapping { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn empty_input_emits_nothing() {
        assert_eq!(generate("").unwrap(), "");
    }
}
