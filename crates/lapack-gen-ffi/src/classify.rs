//! Parameter role classification.
//!
//! Decides, for each parameter of a prototype, whether the wrapper takes it
//! as a value, a mutable reference, a slice, a mutable slice or a selector
//! callback. Pointer qualification comes from the raw type; whether a pointer
//! addresses one element or a run of them comes from [`SCALAR_RULES`], a
//! table of exceptions over the LAPACK catalogue. Pointers no rule claims are
//! arrays.

use tracing::trace;

use crate::ctype::CanonicalType;
use crate::error::Result;

/// Numeric precision of a selector callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    F32,
    F64,
    C32,
    C64,
}

impl Precision {
    /// Precision for a LAPACK family letter (`S`, `D`, `C`, `Z`).
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'S' => Some(Precision::F32),
            'D' => Some(Precision::F64),
            'C' => Some(Precision::C32),
            'Z' => Some(Precision::C64),
            _ => None,
        }
    }

    /// Suffix used in selector type names.
    pub fn suffix(self) -> &'static str {
        match self {
            Precision::F32 => "F32",
            Precision::F64 => "F64",
            Precision::C32 => "C32",
            Precision::C64 => "C64",
        }
    }
}

/// How a wrapper receives one parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterRole {
    /// Not a pointer at all.
    ScalarByValue,
    /// `*const T` to a single element.
    ScalarInRef,
    /// `*mut T` to a single element.
    ScalarOutRef,
    /// `*const T` to a contiguous run.
    ArrayInView,
    /// `*mut T` to a contiguous run.
    ArrayOutView,
    /// `LAPACK_<L>_SELECT<n>` eigenvalue predicate.
    SelectorCallback { precision: Precision, arity: u8 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pointer {
    None,
    Const,
    Mut,
}

/// Parameters of one classification query.
#[derive(Debug, Clone, Copy)]
pub struct Subject<'a> {
    /// Lower-cased parameter name.
    pub name: &'a str,
    pub raw_type: &'a str,
    /// Lower-cased name of the enclosing prototype.
    pub routine: &'a str,
}

/// A named scalar test.
pub type ScalarRule = (&'static str, fn(&Subject<'_>) -> bool);

/// Names that always denote a single element.
const SCALAR_NAMES: &[&str] = &[
    "abnrm", "abstol", "amax", "anorm", "bbnrm", "colcnd", "ihi", "il", "ilo", "info", "iter",
    "iu", "l", "liwork", "lrwork", "lwork", "m", "mm", "n", "n_err_bnds", "nb", "nrhs", "rank",
    "rcond", "rowcnd", "rpvgrw", "sdim", "tryrac", "vu",
];

/// Routines where `vl`/`vr` hold eigenvector matrices.
const EIGENVECTOR_ROUTINES: &[&str] = &["geev", "ggev", "hsein", "tgevc", "tgsna", "trevc", "trsna"];

/// Routines where names starting with `k` are permutation vectors.
const PERMUTATION_ROUTINES: &[&str] = &["lapmr", "lapmt"];

const SCALAR_PREFIXES: &[&str] = &["inc", "ld", "tol", "vers"];

/// Ordered scalar rules; a pointer parameter is scalar when any rule holds.
pub static SCALAR_RULES: &[ScalarRule] = &[
    ("byte", |s| s.raw_type.contains("c_char")),
    ("named", |s| SCALAR_NAMES.iter().any(|n| *n == s.name)),
    ("alpha", |s| s.name == "alpha" && s.routine.contains("larfg")),
    ("dif", |s| {
        s.name == "dif" && !(s.routine.contains("tgsen") || s.routine.contains("tgsna"))
    }),
    ("p", |s| s.name == "p" && !s.routine.contains("tgevc")),
    ("q", |s| {
        s.name == "q" && matches!(CanonicalType::map(s.raw_type), Ok(CanonicalType::Int32))
    }),
    ("vl_vr", |s| {
        (s.name == "vl" || s.name == "vr")
            && !EIGENVECTOR_ROUTINES.iter().any(|r| s.routine.contains(r))
    }),
    ("k_prefix", |s| {
        s.name.starts_with('k') && !PERMUTATION_ROUTINES.iter().any(|r| s.routine.contains(r))
    }),
    ("prefix", |s| SCALAR_PREFIXES.iter().any(|p| s.name.starts_with(p))),
];

/// Name of the first scalar rule that holds, if any.
pub fn matching_rule(subject: &Subject<'_>) -> Option<&'static str> {
    SCALAR_RULES
        .iter()
        .find(|(_, holds)| holds(subject))
        .map(|(name, _)| *name)
}

/// Parse `LAPACK_<L>_SELECT<n>` at the start of a raw type.
pub fn parse_selector(raw_type: &str) -> Option<(Precision, u8)> {
    let rest = raw_type.trim().strip_prefix("LAPACK_")?;
    let mut chars = rest.chars();
    let letter = chars.next()?;
    let digit = chars.as_str().strip_prefix("_SELECT")?.chars().next()?;
    let precision = Precision::from_letter(letter)?;
    let arity = digit.to_digit(10).filter(|d| *d > 0)?;
    Some((precision, arity as u8))
}

fn pointer_of(raw_type: &str) -> Pointer {
    if raw_type.contains("*const") {
        Pointer::Const
    } else if raw_type.contains("*mut") {
        Pointer::Mut
    } else {
        Pointer::None
    }
}

/// Classify one parameter of the routine `routine`.
///
/// Both names are folded to lower case before any rule is consulted.
pub fn classify(name: &str, raw_type: &str, routine: &str) -> Result<ParameterRole> {
    if let Some((precision, arity)) = parse_selector(raw_type) {
        return Ok(ParameterRole::SelectorCallback { precision, arity });
    }

    let pointer = pointer_of(raw_type);
    if pointer == Pointer::None {
        return Ok(ParameterRole::ScalarByValue);
    }

    let name = name.to_lowercase();
    let routine = routine.to_lowercase();
    let subject = Subject {
        name: &name,
        raw_type,
        routine: &routine,
    };
    let rule = matching_rule(&subject);
    if let Some(rule) = rule {
        trace!(routine = %routine, param = %name, rule, "scalar rule matched");
    }

    Ok(match (pointer, rule.is_some()) {
        (Pointer::Const, true) => ParameterRole::ScalarInRef,
        (Pointer::Const, false) => ParameterRole::ArrayInView,
        (_, true) => ParameterRole::ScalarOutRef,
        (_, false) => ParameterRole::ArrayOutView,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn role(name: &str, raw: &str, routine: &str) -> ParameterRole {
        classify(name, raw, routine).unwrap()
    }

    fn rule(name: &str, raw: &str, routine: &str) -> Option<&'static str> {
        matching_rule(&Subject {
            name,
            raw_type: raw,
            routine,
        })
    }

    #[test]
    fn selector_types() {
        use ParameterRole::SelectorCallback as Sel;
        assert_eq!(
            role("select", "LAPACK_S_SELECT2", "sgees"),
            Sel { precision: Precision::F32, arity: 2 }
        );
        assert_eq!(
            role("select", "LAPACK_D_SELECT3", "dgges"),
            Sel { precision: Precision::F64, arity: 3 }
        );
        assert_eq!(
            role("select", "LAPACK_C_SELECT2", "cgges"),
            Sel { precision: Precision::C32, arity: 2 }
        );
        assert_eq!(
            role("selctg", "LAPACK_Z_SELECT3", "zgges"),
            Sel { precision: Precision::C64, arity: 3 }
        );
    }

    #[test]
    fn selector_rejects_malformed() {
        assert_eq!(parse_selector("LAPACK_Q_SELECT2"), None);
        assert_eq!(parse_selector("LAPACK_S_SELECTX"), None);
        assert_eq!(parse_selector("*mut LAPACK_S_SELECT2"), None);
    }

    #[test]
    fn pointer_qualification() {
        assert_eq!(role("a", "*const f64", "dgemm"), ParameterRole::ArrayInView);
        assert_eq!(role("a", "*mut f64", "dgesv"), ParameterRole::ArrayOutView);
        assert_eq!(role("info", "*mut c_int", "dgesv"), ParameterRole::ScalarOutRef);
        assert_eq!(role("trans", "*const c_char", "dgemm"), ParameterRole::ScalarInRef);
        assert_eq!(role("arg1", "size_t", "dgemm"), ParameterRole::ScalarByValue);
    }

    #[test]
    fn n_is_never_an_array() {
        for raw in ["c_int", "*const c_int", "*mut c_int"] {
            for routine in ["sgesv", "dtgsen", "zlapmt"] {
                let r = role("n", raw, routine);
                assert!(
                    !matches!(r, ParameterRole::ArrayInView | ParameterRole::ArrayOutView),
                    "{routine}: n: {raw}"
                );
            }
        }
        assert_eq!(role("N", "*const c_int", "sgesv"), ParameterRole::ScalarInRef);
    }

    #[test]
    fn alpha_depends_on_routine() {
        assert_eq!(role("alpha", "*mut f32", "slarfg"), ParameterRole::ScalarOutRef);
        assert_eq!(role("alpha", "*mut f32", "sgemm"), ParameterRole::ArrayOutView);
        assert_eq!(rule("alpha", "*mut f32", "clarfgp"), Some("alpha"));
    }

    #[test]
    fn dif_depends_on_routine() {
        assert_eq!(role("dif", "*mut f64", "dtgsen"), ParameterRole::ArrayOutView);
        assert_eq!(role("dif", "*mut f64", "stgsna"), ParameterRole::ArrayOutView);
        assert_eq!(role("dif", "*mut f64", "dlarfg"), ParameterRole::ScalarOutRef);
        assert_eq!(rule("dif", "*mut f64", "dtgsyl"), Some("dif"));
    }

    #[test]
    fn p_and_q() {
        assert_eq!(role("p", "*const c_int", "dggsvp"), ParameterRole::ScalarInRef);
        assert_eq!(role("p", "*mut f64", "dtgevc"), ParameterRole::ArrayOutView);
        assert_eq!(role("q", "*const c_int", "sorcsd2by1"), ParameterRole::ScalarInRef);
        assert_eq!(role("q", "*mut f32", "sggsvd"), ParameterRole::ArrayOutView);
        assert_eq!(role("q", "*mut lapack_int", "sggsvp"), ParameterRole::ScalarOutRef);
    }

    #[test]
    fn eigenvector_matrices() {
        for routine in ["dgeev", "zggev", "shsein", "ctgevc", "dtgsna", "strevc3", "ztrsna"] {
            assert_eq!(role("vl", "*mut f64", routine), ParameterRole::ArrayOutView, "{routine}");
            assert_eq!(role("vr", "*mut f64", routine), ParameterRole::ArrayOutView, "{routine}");
        }
        assert_eq!(role("vl", "*const f64", "dstebz"), ParameterRole::ScalarInRef);
        assert_eq!(rule("vr", "*const f64", "dsyevr"), Some("vl_vr"));
    }

    #[test]
    fn k_prefix_except_permutations() {
        assert_eq!(role("k", "*const c_int", "sgemm"), ParameterRole::ScalarInRef);
        assert_eq!(role("kd", "*const c_int", "dpbsv"), ParameterRole::ScalarInRef);
        assert_eq!(role("k", "*mut c_int", "slapmt"), ParameterRole::ArrayOutView);
        assert_eq!(role("k", "*mut c_int", "dlapmr"), ParameterRole::ArrayOutView);
    }

    #[test]
    fn prefixes_are_always_scalar() {
        for routine in ["saxpy", "dlapmt", "zgeev"] {
            assert_eq!(role("incx", "*const c_int", routine), ParameterRole::ScalarInRef);
            assert_eq!(role("incx", "*mut c_int", routine), ParameterRole::ScalarOutRef);
        }
        assert_eq!(rule("lda", "*const c_int", "dgesv"), Some("prefix"));
        assert_eq!(rule("tolb", "*const f64", "dggsvp"), Some("prefix"));
        assert_eq!(rule("vers_major", "*mut c_int", "ilaver"), Some("prefix"));
    }

    #[test]
    fn byte_rule_precedes_names() {
        assert_eq!(rule("a", "*const c_char", "dgemm"), Some("byte"));
        assert_eq!(rule("info", "*mut c_int", "dgesv"), Some("named"));
        assert_eq!(rule("ipiv", "*mut c_int", "dgesv"), None);
    }

    #[test]
    fn rule_table_is_ordered() {
        let names: Vec<_> = SCALAR_RULES.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            ["byte", "named", "alpha", "dif", "p", "q", "vl_vr", "k_prefix", "prefix"]
        );
    }
}
