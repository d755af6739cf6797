//! Tag declaration tokenization
//!
//! One shorthand element is declared by a single logical line such as
//! `<input name="query" type="text">start here`. The declaration may span
//! several physical lines (accumulated by the translator until a `>` is
//! seen); by the time it reaches this module it is one string.
//!
//! The tokens are defined with the logos derive macro; extraction walks the
//! token stream and slices the declaration by token spans. Attribute text is
//! copied through verbatim, so everything between the tag name and the first
//! `>` is the attribute span regardless of its content.

use logos::Logos;

use crate::shml::error::TagError;

/// Tokens inside one tag declaration.
///
/// Anything that is not one of these (whitespace, quotes, attribute
/// punctuation) lexes as an error chunk and is skipped; only the marker and
/// word positions matter for extraction.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum TagToken {
    #[token("<")]
    OpenAngle,

    #[token(">")]
    CloseAngle,

    /// A word usable as a tag name.
    #[regex(r"[A-Za-z0-9_]+")]
    Word,
}

/// The extracted pieces of one tag declaration.
///
/// Only the name is mandatory; attributes and trailing text are optional and
/// empty when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagParts {
    /// First word after the tag-open marker.
    pub name: String,
    /// Everything between the tag name and the first `>`, trimmed.
    pub attributes: String,
    /// Everything after the first `>`, trimmed.
    pub trailing: String,
}

/// Extract tag name, attribute text, and trailing text from a declaration.
///
/// Requirements, in order: the declaration starts with `<`; a word starts
/// immediately after it (the tag name); a `>` appears somewhere after the
/// name. Each unmet requirement is its own [`TagError`] so the caller can
/// report precisely why a line is not valid shorthand.
pub fn parse_tag_declaration(declaration: &str) -> Result<TagParts, TagError> {
    let mut lexer = TagToken::lexer(declaration);

    match lexer.next() {
        Some(Ok(TagToken::OpenAngle)) => {}
        _ => return Err(TagError::MissingOpenMarker),
    }

    // The tag name must follow the open marker with no gap.
    let name_span = match lexer.next() {
        Some(Ok(TagToken::Word)) if lexer.span().start == 1 => lexer.span(),
        _ => return Err(TagError::MissingTagName),
    };

    // Attribute text runs to the first close marker, whatever it contains.
    let mut close_span = None;
    while let Some(result) = lexer.next() {
        if let Ok(TagToken::CloseAngle) = result {
            close_span = Some(lexer.span());
            break;
        }
    }
    let close_span = close_span.ok_or(TagError::MissingCloseMarker)?;

    Ok(TagParts {
        name: declaration[name_span.clone()].to_string(),
        attributes: declaration[name_span.end..close_span.start].trim().to_string(),
        trailing: declaration[close_span.end..].trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_tag() {
        let parts = parse_tag_declaration("<div>").unwrap();
        assert_eq!(parts.name, "div");
        assert_eq!(parts.attributes, "");
        assert_eq!(parts.trailing, "");
    }

    #[test]
    fn test_tag_with_attributes() {
        let parts = parse_tag_declaration("<div id=\"Foo1\" class=\"someclass\">").unwrap();
        assert_eq!(parts.name, "div");
        assert_eq!(parts.attributes, "id=\"Foo1\" class=\"someclass\"");
        assert_eq!(parts.trailing, "");
    }

    #[test]
    fn test_tag_with_trailing_text() {
        let parts = parse_tag_declaration("<span>hello there").unwrap();
        assert_eq!(parts.name, "span");
        assert_eq!(parts.attributes, "");
        assert_eq!(parts.trailing, "hello there");
    }

    #[test]
    fn test_tag_with_attributes_and_trailing_text() {
        let parts = parse_tag_declaration("<i style=\"color:red\">James").unwrap();
        assert_eq!(parts.name, "i");
        assert_eq!(parts.attributes, "style=\"color:red\"");
        assert_eq!(parts.trailing, "James");
    }

    #[test]
    fn test_accumulated_multiline_declaration() {
        // The translator space-joins continuation lines before extraction.
        let declaration = "<input name=\"somename\" type=\"button\" value=\"somename\">";
        let parts = parse_tag_declaration(declaration).unwrap();
        assert_eq!(parts.name, "input");
        assert_eq!(
            parts.attributes,
            "name=\"somename\" type=\"button\" value=\"somename\""
        );
        assert_eq!(parts.trailing, "");
    }

    #[test]
    fn test_trailing_text_keeps_later_markup() {
        // Only the first '>' terminates the declaration.
        let parts = parse_tag_declaration("<b>My name is: <i>James").unwrap();
        assert_eq!(parts.name, "b");
        assert_eq!(parts.trailing, "My name is: <i>James");
    }

    #[test]
    fn test_underscores_and_digits_in_names() {
        let parts = parse_tag_declaration("<h1>heading").unwrap();
        assert_eq!(parts.name, "h1");

        let parts = parse_tag_declaration("<my_view>").unwrap();
        assert_eq!(parts.name, "my_view");
    }

    #[test]
    fn test_missing_open_marker() {
        assert_eq!(
            parse_tag_declaration("div>"),
            Err(TagError::MissingOpenMarker)
        );
    }

    #[test]
    fn test_missing_tag_name() {
        assert_eq!(parse_tag_declaration("<>"), Err(TagError::MissingTagName));
        assert_eq!(
            parse_tag_declaration("< div>"),
            Err(TagError::MissingTagName)
        );
        assert_eq!(
            parse_tag_declaration("<-div>"),
            Err(TagError::MissingTagName)
        );
    }

    #[test]
    fn test_missing_close_marker() {
        assert_eq!(
            parse_tag_declaration("<input name=\"x\""),
            Err(TagError::MissingCloseMarker)
        );
    }

    #[test]
    fn test_attribute_text_is_trimmed() {
        let parts = parse_tag_declaration("<div   id=\"a\"   >  text  ").unwrap();
        assert_eq!(parts.attributes, "id=\"a\"");
        assert_eq!(parts.trailing, "text");
    }
}
