//! Safe parameter types and wrapper signatures.

use tracing::debug;

use crate::classify::{classify, ParameterRole, Precision};
use crate::ctype::CanonicalType;
use crate::error::Result;
use crate::prototype::{Param, Prototype};

/// The type a wrapper exposes for one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafeType {
    /// `T`
    Value(CanonicalType),
    /// `&mut T`
    MutRef(CanonicalType),
    /// `&[T]`
    Slice(CanonicalType),
    /// `&mut [T]`
    MutSlice(CanonicalType),
    /// `Select<arity><precision>`
    Select { precision: Precision, arity: u8 },
}

impl SafeType {
    /// Combine a role with the element type of the parameter.
    ///
    /// Selector roles ignore `ty`.
    pub fn synthesize(role: ParameterRole, ty: CanonicalType) -> Self {
        match role {
            ParameterRole::ScalarByValue | ParameterRole::ScalarInRef => SafeType::Value(ty),
            ParameterRole::ScalarOutRef => SafeType::MutRef(ty),
            ParameterRole::ArrayInView => SafeType::Slice(ty),
            ParameterRole::ArrayOutView => SafeType::MutSlice(ty),
            ParameterRole::SelectorCallback { precision, arity } => {
                SafeType::Select { precision, arity }
            }
        }
    }

    /// Classify a parameter of `prototype` and derive its safe type.
    pub fn of_param(prototype: &Prototype, param: &Param) -> Result<Self> {
        let role = classify(&param.name, &param.raw_type, &prototype.name)?;
        let ty = match role {
            ParameterRole::SelectorCallback { precision, arity } => {
                return Ok(SafeType::Select { precision, arity });
            }
            _ => CanonicalType::map(&param.raw_type)?,
        };
        let safe = SafeType::synthesize(role, ty);
        debug!(
            routine = %prototype.name,
            param = %param.name,
            raw_type = %param.raw_type,
            ?role,
            safe_type = %safe,
            "classified parameter"
        );
        Ok(safe)
    }

    /// Whether the type is a slice view.
    pub fn is_slice(&self) -> bool {
        matches!(self, SafeType::Slice(_) | SafeType::MutSlice(_))
    }
}

impl std::fmt::Display for SafeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SafeType::Value(ty) => write!(f, "{ty}"),
            SafeType::MutRef(ty) => write!(f, "&mut {ty}"),
            SafeType::Slice(ty) => write!(f, "&[{ty}]"),
            SafeType::MutSlice(ty) => write!(f, "&mut [{ty}]"),
            SafeType::Select { precision, arity } => {
                write!(f, "Select{arity}{}", precision.suffix())
            }
        }
    }
}

/// Parameter name as it appears in the wrapper.
pub fn param_name(param: &Param) -> String {
    param.name.to_lowercase()
}

/// Render `name: type` pairs for every parameter.
pub fn build_params(prototype: &Prototype) -> Result<String> {
    let params = prototype
        .parameters
        .iter()
        .map(|param| {
            let ty = SafeType::of_param(prototype, param)?;
            Ok(format!("{}: {ty}", param_name(param)))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(params.join(", "))
}

/// Render the full wrapper signature, without the body.
pub fn build_signature(prototype: &Prototype) -> Result<String> {
    let params = build_params(prototype)?;
    let name = prototype.name.to_lowercase();
    match &prototype.return_type {
        None => Ok(format!("pub unsafe fn {name}({params})")),
        Some(ret) => {
            let ret = CanonicalType::map(ret)?;
            Ok(format!("pub unsafe fn {name}({params}) -> {ret}"))
        }
    }
}
