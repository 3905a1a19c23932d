//! Safe wrapper synthesis for raw LAPACK foreign declarations.
//!
//! Reads the prototypes of a raw `-sys` binding file and derives, for each
//! routine, an `unsafe fn` whose parameters are values, references, slices
//! or selector callbacks instead of raw pointers, together with the body that
//! forwards to the raw `ffi::<name>_` entry point.
//!
//! ## Modules
//!
//! - [`source`] — Binding text cleanup and statement splitting
//! - [`prototype`] — Declaration parser
//! - [`ctype`] — Raw type to canonical type mapping
//! - [`classify`] — Parameter role heuristics
//! - [`signature`] — Safe type and wrapper signature synthesis
//! - [`call`] — Raw call expression synthesis
//! - [`emit`] — Wrapper unit assembly and output

pub mod call;
pub mod classify;
pub mod ctype;
pub mod emit;
pub mod error;
pub mod prototype;
pub mod signature;
pub mod source;

// Re-export key types for convenience
pub use classify::{classify, ParameterRole, Precision};
pub use ctype::CanonicalType;
pub use emit::{emit, generate, WrapperUnit};
pub use error::GenError;
pub use prototype::{Param, Prototype};
pub use signature::SafeType;
