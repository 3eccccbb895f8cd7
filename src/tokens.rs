use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

/// The semantic tag attached to a span of text.
///
/// A host maps each category to a display style, this crate never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Comment,
    String,
    Keyword,
    Type,
    Constant,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 5] = [
        Category::Comment,
        Category::String,
        Category::Keyword,
        Category::Type,
        Category::Constant,
    ];

    /// The lowercase label for this category
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::String => "string",
            Category::Keyword => "keyword",
            Category::Type => "type",
            Category::Constant => "constant",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category '{s}'"))
    }
}

/// A range of the source text annotated with a category.
/// Offsets are byte offsets and always fall on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaggedSpan {
    pub start: usize,
    pub end: usize,
    pub category: Category,
}

impl TaggedSpan {
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self { start, end, category }
    }

    /// Returns the length of the span in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Determines if the span is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Whether this span shares at least one byte with another
    pub fn overlaps(&self, other: &TaggedSpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// The text this span covers within the source it was produced from
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }
}

/// A piece of source text, either tagged with a category or plain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text covered by a span, in the format Tagged(TEXT, CATEGORY)
    Tagged(&'a str, Category),
    /// Untagged text, the host applies its default style here
    Plain(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Tagged(text, _) | Segment::Plain(text) => text,
        }
    }

    pub fn category(&self) -> Option<Category> {
        match self {
            Segment::Tagged(_, category) => Some(*category),
            Segment::Plain(_) => None,
        }
    }

    /// Display width of the segment in terminal columns
    pub fn width(&self) -> usize {
        self.text().width()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}
