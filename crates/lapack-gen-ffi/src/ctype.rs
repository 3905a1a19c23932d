//! Mapping from raw binding types to canonical element types.
//!
//! Raw types come straight from the binding text (`*const c_int`,
//! `*mut __BindgenComplex<f64>`, `lapack_float_return`, ...). Aliases are
//! normalised first, then the first matching marker decides the type.

use crate::error::{GenError, Result};

/// One of the primitive element types a wrapper parameter can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalType {
    Byte,
    Int32,
    Float32,
    Float64,
    Complex32,
    Complex64,
    Size,
}

/// Alias rewrites applied, in order, before matching.
const ALIASES: &[(&str, &str)] = &[
    ("__BindgenComplex<f32>", "lapack_complex_float"),
    ("__BindgenComplex<f64>", "lapack_complex_double"),
    ("lapack_float_return", "c_float"),
    ("f32", "c_float"),
    ("f64", "c_double"),
    ("lapack_int", "c_int"),
    ("lapack_logical", "c_int"),
];

/// Markers tested in priority order; first match wins.
const MARKERS: &[(&str, CanonicalType)] = &[
    ("c_char", CanonicalType::Byte),
    ("c_int", CanonicalType::Int32),
    ("c_float", CanonicalType::Float32),
    ("c_double", CanonicalType::Float64),
    ("lapack_complex_float", CanonicalType::Complex32),
    ("lapack_complex_double", CanonicalType::Complex64),
    ("size_t", CanonicalType::Size),
];

impl CanonicalType {
    /// Map a raw type to its canonical element type.
    pub fn map(raw_type: &str) -> Result<Self> {
        let normalized = ALIASES
            .iter()
            .fold(raw_type.to_string(), |ty, (from, to)| ty.replace(from, to));

        MARKERS
            .iter()
            .find(|(marker, _)| normalized.contains(marker))
            .map(|(_, ty)| *ty)
            .ok_or_else(|| GenError::TypeMapping {
                raw_type: raw_type.to_string(),
            })
    }

    /// Type name used in emitted code.
    pub fn as_str(self) -> &'static str {
        match self {
            CanonicalType::Byte => "u8",
            CanonicalType::Int32 => "i32",
            CanonicalType::Float32 => "f32",
            CanonicalType::Float64 => "f64",
            CanonicalType::Complex32 => "c32",
            CanonicalType::Complex64 => "c64",
            CanonicalType::Size => "size_t",
        }
    }
}

impl std::fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
