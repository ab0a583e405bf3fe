//! Typed names for boundaries and families.
//!
//! Each name type wraps a `Cow<'static, str>` so built-in names are free
//! to construct in `const` context while configured names can be owned.
//! A `FamilyName` cannot be accidentally used where a `BoundaryName` is expected.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

macro_rules! define_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Create a name from a string literal, usable in `const` items.
            pub const fn from_static(name: &'static str) -> Self {
                Self(Cow::Borrowed(name))
            }

            /// Borrow the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&'static str> for $name {
            fn from(name: &'static str) -> Self {
                Self::from_static(name)
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(Cow::Owned(name))
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

define_name!(
    /// Name of a boundary family (a documentation-comment style).
    FamilyName
);

define_name!(
    /// Name of a single comment boundary.
    BoundaryName
);

impl FamilyName {
    pub const JAVADOC: Self = Self::from_static("Javadoc");
    pub const CBLOCK: Self = Self::from_static("CBlock");
    pub const SINGLE_LINE: Self = Self::from_static("SingleLine");
    pub const DOXYGEN: Self = Self::from_static("Doxygen");
    pub const PYTHON: Self = Self::from_static("Python");
    pub const HASH: Self = Self::from_static("Hash");
}

impl BoundaryName {
    pub const JAVADOC_EXACT_HEADER: Self = Self::from_static("JavadocExactHeader");
    pub const JAVADOC_MULTIPLE_ASTERISK: Self = Self::from_static("JavadocMultipleAsterisk");
    pub const JAVADOC_EXACT_FOOTER: Self = Self::from_static("JavadocExactFooter");
    pub const JAVADOC_MULTIPLE_FOOTER: Self = Self::from_static("JavadocMultipleFooter");

    pub const CBLOCK_COMMENT_HEADER: Self = Self::from_static("CBlockCommentHeader");
    pub const CBLOCK_COMMENT_FOOTER: Self = Self::from_static("CBlockCommentFooter");

    pub const FORWARD_SLASH_TWICE: Self = Self::from_static("ForwardSlashTwice");
    pub const FORWARD_SLASH_MULTIPLE: Self = Self::from_static("ForwardSlashMultiple");

    pub const DOXYGEN_QT_STYLE: Self = Self::from_static("DoxygenQtStyle");
    pub const DOXYGEN_BANG_STYLE: Self = Self::from_static("DoxygenBangStyle");
    pub const DOXYGEN_TRIPLE_SLASH: Self = Self::from_static("DoxygenTripleSlash");
    pub const DOXYGEN_BANG_SLASH: Self = Self::from_static("DoxygenBangSlash");

    pub const PYTHON_TRIPLE_QUOTE: Self = Self::from_static("PythonTripleQuote");
    pub const PYTHON_HASH_COMMENT: Self = Self::from_static("PythonHashComment");

    pub const HASH_COMMENT: Self = Self::from_static("HashComment");
    pub const HASH_MULTIPLE: Self = Self::from_static("HashMultiple");
}
