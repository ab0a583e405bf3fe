//! Built-in boundary catalogue.
//!
//! The default families are compiled-in configuration, not user input. The
//! table below is the single source for them; families are registered in
//! table order, which is also their default priority.

use once_cell::sync::Lazy;

use crate::boundary::Boundary;
use crate::errors::PatternError;
use crate::family::Family;
use crate::types::{BoundaryName, FamilyName};

/// A boundary as fixed data: name plus raw pattern.
#[derive(Debug, Clone, Copy)]
pub struct BoundarySpec {
    pub name: &'static BoundaryName,
    pub pattern: &'static str,
}

/// A family as fixed data, boundaries from most to least specific.
#[derive(Debug, Clone, Copy)]
pub struct FamilySpec {
    pub name: &'static FamilyName,
    pub boundaries: &'static [BoundarySpec],
}

macro_rules! spec {
    ($name:expr, $pattern:expr) => {
        BoundarySpec {
            name: &$name,
            pattern: $pattern,
        }
    };
}

/// The default catalogue, in registration order.
pub static DEFAULT_CATALOGUE: &[FamilySpec] = &[
    FamilySpec {
        name: &FamilyName::JAVADOC,
        boundaries: &[
            spec!(BoundaryName::JAVADOC_EXACT_HEADER, r"^/\*\*$"),
            spec!(BoundaryName::JAVADOC_MULTIPLE_ASTERISK, r"^/\*\*\*+$"),
            spec!(BoundaryName::JAVADOC_EXACT_FOOTER, r"^\*/$"),
            spec!(BoundaryName::JAVADOC_MULTIPLE_FOOTER, r"^\*{2,}/$"),
        ],
    },
    FamilySpec {
        name: &FamilyName::CBLOCK,
        boundaries: &[
            spec!(BoundaryName::CBLOCK_COMMENT_HEADER, r"^/\*$"),
            spec!(BoundaryName::CBLOCK_COMMENT_FOOTER, r"^\*/$"),
        ],
    },
    FamilySpec {
        name: &FamilyName::SINGLE_LINE,
        boundaries: &[
            spec!(BoundaryName::FORWARD_SLASH_TWICE, r"^//$"),
            spec!(BoundaryName::FORWARD_SLASH_MULTIPLE, r"^/{3,}$"),
        ],
    },
    FamilySpec {
        name: &FamilyName::DOXYGEN,
        boundaries: &[
            spec!(BoundaryName::DOXYGEN_QT_STYLE, r"^/!\*$"),
            spec!(BoundaryName::DOXYGEN_BANG_STYLE, r"^/\*!$"),
            spec!(BoundaryName::DOXYGEN_TRIPLE_SLASH, r"^///$"),
            spec!(BoundaryName::DOXYGEN_BANG_SLASH, r"^//!$"),
        ],
    },
    FamilySpec {
        name: &FamilyName::PYTHON,
        boundaries: &[
            spec!(BoundaryName::PYTHON_TRIPLE_QUOTE, r#"^(?:"""|''')$"#),
            spec!(BoundaryName::PYTHON_HASH_COMMENT, r"^#+$"),
        ],
    },
    FamilySpec {
        name: &FamilyName::HASH,
        boundaries: &[
            spec!(BoundaryName::HASH_COMMENT, r"^#$"),
            spec!(BoundaryName::HASH_MULTIPLE, r"^#{2,}$"),
        ],
    },
];

/// Boundaries that make up the single-line comment marker view.
static SINGLE_LINE_MARKERS: &[&BoundaryName] = &[
    &BoundaryName::FORWARD_SLASH_TWICE,
    &BoundaryName::FORWARD_SLASH_MULTIPLE,
    &BoundaryName::DOXYGEN_TRIPLE_SLASH,
    &BoundaryName::DOXYGEN_BANG_SLASH,
    &BoundaryName::HASH_COMMENT,
    &BoundaryName::HASH_MULTIPLE,
];

static DEFAULT_FAMILIES: Lazy<Vec<Family>> = Lazy::new(|| {
    DEFAULT_CATALOGUE
        .iter()
        .map(compile_family)
        .collect::<Result<Vec<_>, _>>()
        .expect("built-in boundary catalogue must compile")
});

static SINGLE_LINE_MARKER_BOUNDARIES: Lazy<Vec<Boundary>> = Lazy::new(|| {
    SINGLE_LINE_MARKERS
        .iter()
        .filter_map(|name| boundary(name).cloned())
        .collect()
});

/// Compile one family spec into a `Family`.
pub fn compile_family(spec: &FamilySpec) -> Result<Family, PatternError> {
    let boundaries = spec
        .boundaries
        .iter()
        .map(|b| Boundary::new(b.name.clone(), b.pattern))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Family::new(spec.name.clone(), boundaries))
}

/// Startup self-check: compile every built-in pattern, reporting the first
/// failure instead of panicking on first use of the catalogue.
pub fn verify_defaults() -> Result<(), PatternError> {
    for spec in DEFAULT_CATALOGUE {
        compile_family(spec)?;
    }
    Ok(())
}

/// The compiled default families, in registration order.
pub fn default_families() -> &'static [Family] {
    &DEFAULT_FAMILIES
}

/// Look up a built-in boundary by name.
pub fn boundary(name: &str) -> Option<&'static Boundary> {
    DEFAULT_FAMILIES
        .iter()
        .flat_map(|family| family.boundaries())
        .find(|b| b.name() == name)
}

pub(crate) fn single_line_markers() -> &'static [Boundary] {
    &SINGLE_LINE_MARKER_BOUNDARIES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_compile() {
        assert!(verify_defaults().is_ok());
        assert_eq!(default_families().len(), 6);
    }

    #[test]
    fn test_single_line_markers_resolve() {
        assert_eq!(single_line_markers().len(), SINGLE_LINE_MARKERS.len());
    }

    #[test]
    fn test_boundary_names_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for b in default_families().iter().flat_map(|f| f.boundaries()) {
            assert!(seen.insert(b.name().to_string()), "duplicate {}", b.name());
        }
    }
}
