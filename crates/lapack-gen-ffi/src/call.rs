//! Raw call expressions.
//!
//! Every LAPACK entry point takes pointers, so each wrapper argument is
//! turned back into one: values by address, references as-is, slices through
//! their storage pointer. Complex and byte arguments are additionally cast
//! between the wrapper's `c32`/`c64`/`u8` and the binding's own types.

use crate::ctype::CanonicalType;
use crate::error::{GenError, Result};
use crate::prototype::Prototype;
use crate::signature::{param_name, SafeType};

/// Module path of the raw bindings in emitted code.
pub const FFI_MODULE: &str = "ffi";

/// Expression passing the wrapper argument `name` of type `ty` to the raw
/// entry point.
pub fn build_call_expression(name: &str, ty: &SafeType) -> Result<String> {
    use CanonicalType::*;

    let expr = match *ty {
        SafeType::Select { .. } => format!("transmute({name})"),

        SafeType::Value(Byte) => format!("&({name} as c_char)"),
        SafeType::MutRef(Byte) => format!("{name} as *mut _ as *mut _"),

        SafeType::Value(Int32 | Float32 | Float64) => format!("&{name}"),
        SafeType::MutRef(Int32 | Float32 | Float64) => name.to_string(),
        SafeType::Slice(Int32 | Float32 | Float64) => format!("{name}.as_ptr()"),
        SafeType::MutSlice(Int32 | Float32 | Float64) => format!("{name}.as_mut_ptr()"),

        SafeType::Value(Complex32 | Complex64) => format!("&{name} as *const _ as *const _"),
        SafeType::MutRef(Complex32 | Complex64) => format!("{name} as *mut _ as *mut _"),
        SafeType::Slice(Complex32 | Complex64) => format!("{name}.as_ptr() as *const _"),
        SafeType::MutSlice(Complex32 | Complex64) => format!("{name}.as_mut_ptr() as *mut _"),

        SafeType::Value(Size) => name.to_string(),

        SafeType::Slice(Byte)
        | SafeType::MutSlice(Byte)
        | SafeType::MutRef(Size)
        | SafeType::Slice(Size)
        | SafeType::MutSlice(Size) => {
            return Err(GenError::ClassificationGap {
                name: name.to_string(),
                safe_type: ty.to_string(),
            });
        }
    };
    Ok(expr)
}

/// Render the wrapper body: one call to the raw entry point.
pub fn build_body(prototype: &Prototype) -> Result<String> {
    let args = prototype
        .parameters
        .iter()
        .map(|param| {
            let ty = SafeType::of_param(prototype, param)?;
            build_call_expression(&param_name(param), &ty)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(format!("{FFI_MODULE}::{}({})", prototype.symbol(), args.join(", ")))
}
