//! Canonical signature rendering from member descriptors
//!
//! Builds a human-readable signature string out of whatever metadata
//! introspection managed to supply, backfilling the gaps from the member's
//! comment block where one exists. Natively-implemented routines expose no
//! parameter types, no readable defaults and no declaring class, so every
//! piece of the signature degrades independently: whatever is missing is
//! simply left out, and the result is still a usable string.
//!
//! Signatures are recomputed on every call and nothing is cached.

use super::fragment::{FragmentResult, extract_fragment};
use super::{DefaultValue, MemberInfo, ParameterInfo, Visibility};

/// Fragment consulted when introspection exposes no return type
const RETURN_TYPE_FRAGMENT: &str = "return-type";

/// Fragment rendered as the `throws` clause
const EXCEPTION_FRAGMENT: &str = "exception";

/// Build the canonical signature string for a member
///
/// Bound members render as
/// `<modifiers> <return-type> <Class>::<name>(<params>) throws <exception>`,
/// with absent pieces contributing nothing. Free functions render as the bare
/// name and parameter list; they have no modifiers, no comment block to fall
/// back on, and never carry a `throws` clause.
///
/// Returns the empty string for private members. Callers enumerating a
/// class's API treat that as "suppress this member", not as an error.
pub fn build_signature(member: &MemberInfo) -> String {
    let bound = member.is_bound();
    let comment = member.comment.as_deref().unwrap_or("");

    let mut segments: Vec<String> = Vec::new();

    if bound {
        if let Some(modifiers) = &member.modifiers {
            if modifiers.visibility == Visibility::Private {
                return String::new();
            }
            segments.push(modifiers.render());
        }
    }

    if let Some(return_type) = &member.return_type {
        segments.push(return_type.clone());
    } else if bound {
        // Natively-implemented methods expose no return type; the authored
        // comment block is the only place left to look
        if let FragmentResult::Found(fragment) = extract_fragment(comment, RETURN_TYPE_FRAGMENT) {
            segments.push(fragment);
        }
    }

    let qualified_name = match &member.declaring_type {
        Some(class) => format!("{}::{}", class, member.name),
        None => member.name.clone(),
    };

    let mut call = format!("{}{}", qualified_name, render_parameter_list(member, bound));

    if bound {
        if let FragmentResult::Found(fragment) = extract_fragment(comment, EXCEPTION_FRAGMENT) {
            call.push_str(" throws ");
            call.push_str(&fragment);
        }
    }

    segments.push(call);
    segments.join(" ").trim().to_string()
}

/// Render the parenthesized parameter list in declaration order
fn render_parameter_list(member: &MemberInfo, bound: bool) -> String {
    if member.parameters.is_empty() {
        return "()".to_string();
    }

    let rendered: Vec<String> = member
        .parameters
        .iter()
        .map(|parameter| render_parameter(parameter, bound))
        .collect();

    format!("( {})", rendered.join(", "))
}

/// Render a single parameter as `<type> $<name>`, or `$<name>` when the
/// declaration carries no type
fn render_parameter(parameter: &ParameterInfo, bound: bool) -> String {
    let mut out = match &parameter.type_name {
        Some(type_name) => format!("{} ${}", type_name, parameter.name),
        None => format!("${}", parameter.name),
    };

    // Defaults are only looked up for bound members. An optional parameter
    // whose default could not be read (natively-implemented routines) keeps
    // the flag but loses the suffix.
    if bound && parameter.is_optional {
        if let Some(default) = &parameter.default {
            out.push_str(" = ");
            out.push_str(&render_default(default));
        }
    }

    out
}

/// Render a literal default value
///
/// The falsy cases mirror the loose equality the original doc formatter was
/// built around: the empty string renders as `""`, while `0`, `0.0` and `"0"`
/// all render as `false`. Downstream rendering depends on these exact
/// spellings, so they stay as-is even though the rule is not orthogonal.
fn render_default(value: &DefaultValue) -> String {
    match value {
        DefaultValue::Bool(b) => b.to_string(),
        DefaultValue::Null => "NULL".to_string(),
        DefaultValue::Str(s) if s.is_empty() => "\"\"".to_string(),
        falsy if falsy.is_falsy() => "false".to_string(),
        DefaultValue::Int(i) => i.to_string(),
        DefaultValue::Float(f) => f.to_string(),
        DefaultValue::Str(s) => s.clone(),
    }
}

#[cfg(test)]
#[path = "signature_tests.rs"]
mod tests;
