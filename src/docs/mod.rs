//! Class documentation module
//!
//! This module turns pre-resolved introspection metadata into formatted call
//! signatures and extracts the named XML fragments embedded in doc comment
//! blocks (`description`, `example`, `return-type`, `exception`).
//!
//! Metadata descriptors are built ahead of time by whatever tool inspects the
//! host runtime; this module only consumes them. Descriptors are plain serde
//! structures, so a descriptor set can be loaded straight from JSON.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod fragment;
pub mod registry;
pub mod signature;

// Re-export the main entry points
pub use fragment::{FragmentResult, extract_fragment, NOT_AVAILABLE};
pub use registry::ClassRegistry;
pub use signature::build_signature;

/// Visibility of a bound member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
}

impl Visibility {
    /// The keyword rendered into signatures
    pub fn keyword(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Protected => "protected",
            Visibility::Private => "private",
        }
    }
}

/// Modifier set of a bound member
///
/// Free functions carry no modifiers at all; see [`MemberInfo::modifiers`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    /// Member visibility
    pub visibility: Visibility,
    /// Whether the member is declared static
    #[serde(default)]
    pub is_static: bool,
    /// Whether the member is declared abstract
    #[serde(default)]
    pub is_abstract: bool,
    /// Whether the member is declared final
    #[serde(default)]
    pub is_final: bool,
}

impl Modifiers {
    /// Render the modifier set as space-joined keywords in canonical order:
    /// visibility first, then `static`, then `abstract`, then `final`.
    pub fn render(&self) -> String {
        let mut keywords = vec![self.visibility.keyword()];
        if self.is_static {
            keywords.push("static");
        }
        if self.is_abstract {
            keywords.push("abstract");
        }
        if self.is_final {
            keywords.push("final");
        }
        keywords.join(" ")
    }
}

/// A literal parameter default value read from the declaration site
///
/// Untagged so JSON literals map directly: `null`, `true`, `42`, `0.5`, `"x"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl DefaultValue {
    /// Loose falsiness, matching the host language's `== false` comparison:
    /// zero, `0.0`, `"0"` and the empty string all count as falsy.
    pub fn is_falsy(&self) -> bool {
        match self {
            DefaultValue::Null => true,
            DefaultValue::Bool(b) => !b,
            DefaultValue::Int(i) => *i == 0,
            DefaultValue::Float(f) => *f == 0.0,
            DefaultValue::Str(s) => s.is_empty() || s == "0",
        }
    }
}

/// A single declared parameter of a routine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterInfo {
    /// Parameter name, without the `$` sigil
    pub name: String,
    /// Declared type, when the declaration carries one
    #[serde(default)]
    pub type_name: Option<String>,
    /// Whether the declaration gives this parameter a default
    #[serde(default)]
    pub is_optional: bool,
    /// The default value itself. `None` while `is_optional` is set means the
    /// default exists but could not be read, which happens for
    /// natively-implemented routines.
    ///
    /// In JSON, an absent `default` key means unreadable, while an explicit
    /// `"default": null` is a readable null default. The custom deserializer
    /// keeps the two apart; plain `Option` would swallow the null first.
    #[serde(
        default,
        deserialize_with = "deserialize_default_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<DefaultValue>,
}

/// Deserialize a present `default` field, mapping JSON `null` to
/// [`DefaultValue::Null`] instead of "no value"
fn deserialize_default_value<'de, D>(deserializer: D) -> Result<Option<DefaultValue>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    DefaultValue::deserialize(deserializer).map(Some)
}

/// Pre-resolved metadata descriptor for one introspectable routine
///
/// Covers both class methods and free functions. A method has a declaring
/// type and a modifier set; a free function has neither, and introspection
/// exposes no comment block for it either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberInfo {
    /// Routine name
    pub name: String,
    /// Name of the declaring class, absent for free functions
    #[serde(default)]
    pub declaring_type: Option<String>,
    /// Modifier set, absent for free functions
    #[serde(default)]
    pub modifiers: Option<Modifiers>,
    /// Declared parameters, in declaration order
    #[serde(default)]
    pub parameters: Vec<ParameterInfo>,
    /// Declared return type, when introspection exposes one
    #[serde(default)]
    pub return_type: Option<String>,
    /// Raw doc comment text attached to the definition site, delimiters included
    #[serde(default)]
    pub comment: Option<String>,
}

impl MemberInfo {
    /// Whether this routine belongs to a declaring type
    ///
    /// Bound members carry modifiers and may carry a comment block; free
    /// functions have none of those, which drives every fallback in
    /// [`signature::build_signature`].
    pub fn is_bound(&self) -> bool {
        self.declaring_type.is_some()
    }
}

/// One class and its members, in declaration order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    /// Class name as it appears in signatures
    pub name: String,
    /// Member descriptors, in declaration order
    #[serde(default)]
    pub members: Vec<MemberInfo>,
}
