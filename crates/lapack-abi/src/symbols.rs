use std::fmt::{Display, Formatter};

/// Scalar type of a native routine, selecting its one-letter prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ScalarKind {
    Single,
    Double,
    ComplexSingle,
    ComplexDouble,
}

impl ScalarKind {
    pub const ALL: [ScalarKind; 4] = [
        ScalarKind::Single,
        ScalarKind::Double,
        ScalarKind::ComplexSingle,
        ScalarKind::ComplexDouble,
    ];

    pub fn prefix(self) -> char {
        match self {
            ScalarKind::Single => 's',
            ScalarKind::Double => 'd',
            ScalarKind::ComplexSingle => 'c',
            ScalarKind::ComplexDouble => 'z',
        }
    }

    pub fn is_complex(self) -> bool {
        matches!(self, ScalarKind::ComplexSingle | ScalarKind::ComplexDouble)
    }
}

/// The wrapped LAPACK routines, independent of scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Routine {
    Syequb,
    SytrfAa,
    SytrsAa,
    SysvAa,
    Potrf,
    Potrs,
    Posv,
}

impl Routine {
    pub const ALL: [Routine; 7] = [
        Routine::Syequb,
        Routine::SytrfAa,
        Routine::SytrsAa,
        Routine::SysvAa,
        Routine::Potrf,
        Routine::Potrs,
        Routine::Posv,
    ];

    /// Routine name without the scalar prefix, e.g. `sytrs_aa`.
    pub fn base_name(self) -> &'static str {
        match self {
            Routine::Syequb => "syequb",
            Routine::SytrfAa => "sytrf_aa",
            Routine::SytrsAa => "sytrs_aa",
            Routine::SysvAa => "sysv_aa",
            Routine::Potrf => "potrf",
            Routine::Potrs => "potrs",
            Routine::Posv => "posv",
        }
    }

    pub fn symbol(self, kind: ScalarKind) -> Symbol {
        Symbol {
            routine: self,
            kind,
        }
    }
}

/// A concrete native routine: one (routine, scalar type) pair.
///
/// Displays as the linker symbol, e.g. `zsytrs_aa_`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Symbol {
    pub routine: Routine,
    pub kind: ScalarKind,
}

impl Symbol {
    pub fn link_name(&self) -> String {
        fortran_symbol(&format!(
            "{}{}",
            self.kind.prefix(),
            self.routine.base_name()
        ))
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.link_name())
    }
}

/// Mangles a routine name the way gfortran exports it: lowercase with a
/// single trailing underscore.
pub fn fortran_symbol(name: &str) -> String {
    let sanitized = sanitize_symbol(name).to_ascii_lowercase();
    if sanitized.ends_with('_') {
        sanitized
    } else {
        format!("{sanitized}_")
    }
}

fn sanitize_symbol(name: &str) -> String {
    name.trim()
        .trim_end_matches('\0')
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric() || *ch == '_')
        .collect()
}
