//! Inline rendering hints.
//!
//! Block text may carry tag tokens such as `:center`. The extractor strips
//! them from the visible text and records them in a [`TagSet`].

use std::fmt;

use indexmap::IndexSet;

/// An ordered, deduplicated set of tags in first-occurrence order.
pub type TagSet = IndexSet<Tag>;

/// A recognized inline tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `:nostroke` - draw the cell without an outline.
    NoStroke,
    /// `:center` - stretch the cell across the full diagram width.
    Center,
}

impl Tag {
    /// All tags, in the order the extractor tries them.
    pub const ALL: [Tag; 2] = [Tag::NoStroke, Tag::Center];

    /// Returns the source token for this tag, including the leading colon.
    pub fn token(self) -> &'static str {
        match self {
            Tag::NoStroke => ":nostroke",
            Tag::Center => ":center",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_display_is_token() {
        assert_eq!(Tag::Center.to_string(), ":center");
        assert_eq!(Tag::NoStroke.to_string(), ":nostroke");
    }

    #[test]
    fn test_tag_set_keeps_first_occurrence_order() {
        let mut tags = TagSet::new();
        tags.insert(Tag::Center);
        tags.insert(Tag::NoStroke);
        tags.insert(Tag::Center);

        assert_eq!(
            tags.iter().copied().collect::<Vec<_>>(),
            vec![Tag::Center, Tag::NoStroke]
        );
    }
}
