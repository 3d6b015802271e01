//! Color, text and tag extraction from raw block bodies.
//!
//! A body has the form `color: text`, optionally surrounded by whitespace.
//! The color is a bare identifier (`lightgray`, `White`) or a `#rrggbb`
//! literal. The text runs up to the first newline or bracket. Tag tokens
//! such as `:center` are cut out of the text and collected into a
//! [`TagSet`].
//!
//! Extraction always reads [`Block::body`], never the previously extracted
//! text, so running it again produces the same content.

use log::{debug, trace};
use winnow::{
    Parser as _,
    ascii::multispace0,
    combinator::{alt, preceded, terminated},
    error::ModalResult,
    token::{one_of, take_till, take_while},
};

use wirebox_core::{
    block::{Block, Content},
    tag::{Tag, TagSet},
};

use crate::{
    error::{Diagnostic, ErrorCode},
    span::Span,
};

/// `#` followed by exactly six hex digits.
fn hex_color<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ('#', take_while(6, |c: char| c.is_ascii_hexdigit()))
        .take()
        .parse_next(input)
}

/// An ASCII letter followed by word characters.
fn named_color<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        one_of(|c: char| c.is_ascii_alphabetic()),
        take_while(0.., |c: char| c.is_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

fn leaf_text<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_till(1.., ['[', ']', '\n']).parse_next(input)
}

/// Matches the `color: text` prefix of a body.
fn leaf<'a>(input: &mut &'a str) -> ModalResult<(&'a str, &'a str)> {
    preceded(
        multispace0,
        (
            terminated(alt((hex_color, named_color)), ':'),
            preceded(multispace0, leaf_text),
        ),
    )
    .parse_next(input)
}

/// Extracts the content of a raw body.
///
/// Returns `None` when the body does not start with `color:` followed by
/// text.
///
/// # Example
///
/// ```
/// # use wirebox_core::tag::Tag;
/// # use wirebox_parser::extract::extract;
/// let content = extract("goldenrod: OK :center Button").unwrap();
///
/// assert_eq!(content.color(), "goldenrod");
/// assert_eq!(content.text(), "OK  Button");
/// assert!(content.has_tag(Tag::Center));
/// ```
pub fn extract(body: &str) -> Option<Content> {
    let mut input = body;
    let (color, text) = leaf.parse_next(&mut input).ok()?;
    let (text, tags) = strip_tags(text.trim_end());
    Some(Content::new(color, text.trim_end(), tags))
}

/// Extracts the content of one block from its raw body.
///
/// A mismatching body leaves the content empty. Non-blank mismatches are
/// returned as a warning labelled with the block's source range.
pub fn extract_block(block: &mut Block) -> Option<Diagnostic> {
    match extract(block.body()) {
        Some(content) => {
            trace!(cell:? = block.cell(), color = content.color(); "Extracted content");
            block.set_content(content);
            None
        }
        None => {
            block.set_content(Content::default());
            if block.body().trim().is_empty() {
                return None;
            }
            debug!(cell:? = block.cell(); "Block body is not `color: text`");
            Some(unrecognized_body(block))
        }
    }
}

/// Extracts the content of every block in the tree.
///
/// Returns the warnings in source order.
pub fn extract_tree(root: &mut Block) -> Vec<Diagnostic> {
    let mut warnings = Vec::new();
    extract_into(root, &mut warnings);
    warnings
}

fn extract_into(block: &mut Block, warnings: &mut Vec<Diagnostic>) {
    warnings.extend(extract_block(block));
    for child in block.children_mut() {
        extract_into(child, warnings);
    }
}

fn unrecognized_body(block: &Block) -> Diagnostic {
    let first_line = block.body().trim().lines().next().unwrap_or_default();
    Diagnostic::warning(ErrorCode::W100.description())
        .with_code(ErrorCode::W100)
        .with_label(
            Span::new(block.source_range()),
            format!("{first_line:?} is drawn without color or text"),
        )
        .with_help("start the body with a color name or `#rrggbb`, then `:` and the text")
}

/// Removes tag tokens from `text`, leaving the surrounding whitespace.
///
/// A token is recognized at the start of the text or after whitespace, and
/// only when no word character follows it.
fn strip_tags(text: &str) -> (String, TagSet) {
    let mut clean = String::with_capacity(text.len());
    let mut tags = TagSet::new();
    let mut rest = text;
    let mut at_boundary = true;

    while let Some(ch) = rest.chars().next() {
        if at_boundary {
            if let Some((tag, after)) = match_tag(rest) {
                tags.insert(tag);
                rest = after;
                at_boundary = false;
                continue;
            }
        }
        clean.push(ch);
        at_boundary = ch.is_whitespace();
        rest = &rest[ch.len_utf8()..];
    }
    (clean, tags)
}

fn match_tag(input: &str) -> Option<(Tag, &str)> {
    Tag::ALL.into_iter().find_map(|tag| {
        let after = input.strip_prefix(tag.token())?;
        let bounded = after
            .chars()
            .next()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_'));
        bounded.then_some((tag, after))
    })
}

#[cfg(test)]
mod tests {
    use wirebox_core::cell::Cell;

    use super::*;

    fn block(body: &str) -> Block {
        let mut block = Block::new(Cell::default(), 0);
        block.push_body(body);
        block.set_source_range(0..body.len() + 2);
        block
    }

    #[test]
    fn test_named_color() {
        let content = extract("White: Message text").unwrap();

        assert_eq!(content.color(), "White");
        assert_eq!(content.text(), "Message text");
        assert!(content.tags().is_empty());
    }

    #[test]
    fn test_hex_color() {
        let content = extract("#ff0505: Cancel Button").unwrap();

        assert_eq!(content.color(), "#ff0505");
        assert_eq!(content.text(), "Cancel Button");
    }

    #[test]
    fn test_text_stops_at_newline() {
        let content = extract("lightgray: Frame\n    \n    //\n").unwrap();

        assert_eq!(content.color(), "lightgray");
        assert_eq!(content.text(), "Frame");
    }

    #[test]
    fn test_surrounding_whitespace() {
        let content = extract("\n   dark_blue_2:   padded   \n").unwrap();

        assert_eq!(content.color(), "dark_blue_2");
        assert_eq!(content.text(), "padded");
    }

    #[test]
    fn test_tag_removed_in_place() {
        let content = extract("white: OK :center Button").unwrap();

        assert_eq!(content.text(), "OK  Button");
        assert_eq!(content.tags().iter().copied().collect::<Vec<_>>(), vec![Tag::Center]);
    }

    #[test]
    fn test_tags_deduplicated_in_first_occurrence_order() {
        let content = extract("white: :nostroke Title :center :nostroke").unwrap();

        assert_eq!(content.text(), " Title");
        assert_eq!(
            content.tags().iter().copied().collect::<Vec<_>>(),
            vec![Tag::NoStroke, Tag::Center]
        );
    }

    #[test]
    fn test_tag_requires_word_boundary() {
        let content = extract("white: a:center :centered x:nostroke").unwrap();

        assert_eq!(content.text(), "a:center :centered x:nostroke");
        assert!(content.tags().is_empty());
    }

    #[test]
    fn test_mismatch() {
        assert_eq!(extract(""), None);
        assert_eq!(extract("   \n  "), None);
        assert_eq!(extract("no colon here"), None);
        assert_eq!(extract("#ff05: short hex"), None);
        assert_eq!(extract("9lives: digit first"), None);
        assert_eq!(extract("white:"), None);
        assert_eq!(extract("white:   \n"), None);
    }

    #[test]
    fn test_extract_block_is_idempotent() {
        let mut block = block("goldenrod: OK :center Button");

        assert!(extract_block(&mut block).is_none());
        let first = block.content().clone();
        assert!(extract_block(&mut block).is_none());

        assert_eq!(block.content(), &first);
        assert_eq!(block.text(), "OK  Button");
        assert_eq!(block.body(), "goldenrod: OK :center Button");
    }

    #[test]
    fn test_mismatch_keeps_body_and_warns() {
        let mut block = block("just words");

        let warning = extract_block(&mut block).unwrap();

        assert!(block.content().is_blank());
        assert_eq!(block.body(), "just words");
        assert!(warning.severity().is_warning());
        assert_eq!(warning.code(), Some(ErrorCode::W100));
        assert_eq!(warning.labels()[0].span(), Span::new(0..12));
    }

    #[test]
    fn test_blank_body_is_silent() {
        let mut block = block("  \n  ");

        assert!(extract_block(&mut block).is_none());
        assert!(block.content().is_blank());
    }

    #[test]
    fn test_extract_tree_collects_warnings_in_source_order() {
        let mut root = block("gray: Root");
        let mut first = Block::new(Cell::new(0, 1), 1);
        first.push_body("bad one");
        first.set_source_range(1..10);
        let mut second = Block::new(Cell::new(0, 2), 1);
        second.push_body("bad two");
        second.set_source_range(11..20);
        root.push_child(first);
        root.push_child(second);

        let warnings = extract_tree(&mut root);

        assert_eq!(root.color(), "gray");
        assert_eq!(warnings.len(), 2);
        assert_eq!(warnings[0].labels()[0].span().start(), 1);
        assert_eq!(warnings[1].labels()[0].span().start(), 11);
    }
}
