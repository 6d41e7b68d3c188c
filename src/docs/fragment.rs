//! Fragment extraction from doc comment blocks
//!
//! A comment block is free-form prose followed by named XML elements, the
//! whole thing wrapped in comment delimiters. The block is only valid XML
//! after the prose before the first `<` and the `*/` end marker are stripped.
//! Even then it may fail to parse; a malformed block means "no fragments
//! available", never an error. Callers deliberately cannot tell a malformed
//! comment apart from a genuinely absent fragment — downstream formatting
//! treats the sentinel as the single "nothing to show" signal, and a richer
//! outcome would break compatibility with it.

use quick_xml::Reader;
use quick_xml::events::Event;

/// Sentinel returned in place of a fragment that is absent or unreadable.
///
/// Distinguishable from any legitimate fragment, since legitimate content is
/// always a serialized element starting with `<`.
pub const NOT_AVAILABLE: &str = "information not available";

/// Comment-end marker stripped from the block before parsing
const COMMENT_END: &str = "*/";

/// Synthetic root wrapped around the stripped block so that a sequence of
/// sibling fragment elements parses as one document
const SYNTHETIC_ROOT: &str = "fragments";

/// Outcome of a fragment lookup
///
/// `Unavailable` covers every failure mode: empty comment, no markup,
/// malformed XML, or a fragment that simply is not there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentResult {
    /// The fragment's serialized form, opening tag through closing tag,
    /// nested markup preserved verbatim
    Found(String),
    /// Nothing to show
    Unavailable,
}

impl FragmentResult {
    /// Collapse to the boundary string: the serialization when found, the
    /// [`NOT_AVAILABLE`] sentinel otherwise
    pub fn into_text(self) -> String {
        match self {
            FragmentResult::Found(content) => content,
            FragmentResult::Unavailable => NOT_AVAILABLE.to_string(),
        }
    }

    /// The serialized fragment, if one was found
    pub fn as_found(&self) -> Option<&str> {
        match self {
            FragmentResult::Found(content) => Some(content),
            FragmentResult::Unavailable => None,
        }
    }
}

/// Extract the named fragment from a raw comment block
///
/// Scans the top-level elements of the stripped block in document order and
/// returns the serialization of the first one whose tag name equals
/// `fragment_name`. Returns [`FragmentResult::Unavailable`] when the comment
/// holds no markup, fails to parse as XML, or has no matching element.
pub fn extract_fragment(raw_comment: &str, fragment_name: &str) -> FragmentResult {
    // No markup at all, don't even attempt a parse
    let Some(first_tag) = raw_comment.find('<') else {
        return FragmentResult::Unavailable;
    };

    let body = raw_comment[first_tag..].replace(COMMENT_END, "");
    let wrapped = format!("<{SYNTHETIC_ROOT}>{body}</{SYNTHETIC_ROOT}>");

    match find_top_level_element(&wrapped, fragment_name) {
        Some((start, end)) => FragmentResult::Found(wrapped[start..end].to_string()),
        None => FragmentResult::Unavailable,
    }
}

/// Locate the byte span of the first direct child of the synthetic root whose
/// tag name matches, while checking that the whole document is well-formed
///
/// The span is sliced out of the input afterwards instead of re-serializing
/// events, so nested markup comes back byte-for-byte. The scan always runs to
/// end of input: a block that turns malformed after the wanted element still
/// counts as unparseable.
fn find_top_level_element(wrapped: &str, fragment_name: &str) -> Option<(usize, usize)> {
    let mut reader = Reader::from_str(wrapped);

    let mut depth = 0usize;
    // Start offset of a matching element still waiting for its closing tag
    let mut open_match: Option<usize> = None;
    let mut span: Option<(usize, usize)> = None;

    loop {
        let event_start = reader.buffer_position() as usize;
        match reader.read_event() {
            Err(_) => return None,
            Ok(Event::Start(e)) => {
                if depth == 1 && span.is_none() && e.name().as_ref() == fragment_name.as_bytes() {
                    open_match = Some(event_start);
                }
                depth += 1;
            }
            Ok(Event::End(_)) => {
                depth = depth.checked_sub(1)?;
                if depth == 1 {
                    if let Some(start) = open_match.take() {
                        span = Some((start, reader.buffer_position() as usize));
                    }
                }
            }
            Ok(Event::Empty(e)) => {
                if depth == 1 && span.is_none() && e.name().as_ref() == fragment_name.as_bytes() {
                    span = Some((event_start, reader.buffer_position() as usize));
                }
            }
            Ok(Event::GeneralRef(entity)) => {
                // Entity references come out of the reader as their own
                // events; an undefined entity makes the whole block unreadable
                if !is_known_entity(&entity) {
                    return None;
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
        }
    }

    span
}

/// Whether an entity reference is a character reference or one of the five
/// predefined XML entities. Anything else has no definition in a comment
/// block and makes it unreadable.
fn is_known_entity(name: &[u8]) -> bool {
    matches!(name, b"amp" | b"lt" | b"gt" | b"apos" | b"quot") || name.starts_with(b"#")
}

#[cfg(test)]
#[path = "fragment_tests.rs"]
mod tests;
