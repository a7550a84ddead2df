//! Finding the color literal under (or nearest to) the cursor.
//!
//! [`locate`] scans a document with the patterns of every format in the
//! active [`Category`] and picks one occurrence:
//!
//! 1. an occurrence whose span contains the cursor (distance 0), otherwise
//! 2. the occurrence closest to the cursor,
//!
//! with ties broken by format priority and then by document position. Each
//! call is a pure function of its inputs.
//!
//! Offsets are character indices. A literal's span contains every cursor
//! position from just before its first character to just after its last, so
//! a cursor sitting right after the closing parenthesis still counts as
//! inside.
//!
//! # Example
//!
//! ```rust
//! use colorlit::{locate, Category, Format};
//!
//! let doc = "a rgb(1,2,3) b";
//! let found = locate(doc, Category::Css, 1).unwrap();
//! assert_eq!(found.format, Format::RgbInt);
//! assert_eq!(found.span.start, 2);
//! assert_eq!(found.text, "rgb(1,2,3)");
//! ```

use std::ops::Range;

use regex::Captures;

use crate::color::Color;
use crate::format::{Category, Format};
use crate::formatter::format_color;
use crate::parse::parse;
use crate::settings::Settings;

/// A character span in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Character index of the first character.
    pub start: usize,
    /// Length in characters.
    pub len: usize,
}

impl Span {
    /// One past the last character.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// `true` if `offset` lies within the span or on either of its edges.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end()
    }

    /// Characters between `offset` and the nearest edge; 0 when contained.
    pub fn distance_to(&self, offset: usize) -> usize {
        if offset < self.start {
            self.start - offset
        } else {
            offset.saturating_sub(self.end())
        }
    }
}

/// A literal found in a document.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralMatch {
    /// Location in characters.
    pub span: Span,
    /// Location in bytes, for slicing the document.
    pub byte_range: Range<usize>,
    /// The literal as written.
    pub text: String,
    /// Format the literal was read as.
    pub format: Format,
    /// Parsed value.
    pub color: Color,
}

impl LiteralMatch {
    /// Renders `color` in this literal's format family, ready to replace
    /// [`text`](LiteralMatch::text).
    pub fn rewrite(&self, color: &Color) -> String {
        format_color(color, self.format)
    }
}

/// Conversion between byte and character offsets.
///
/// ASCII documents need no table.
struct CharOffsets {
    /// Byte offset of every character, followed by the text length.
    starts: Option<Vec<usize>>,
    char_len: usize,
}

impl CharOffsets {
    fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self {
                starts: None,
                char_len: text.len(),
            };
        }
        let mut starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        let char_len = starts.len();
        starts.push(text.len());
        Self {
            starts: Some(starts),
            char_len,
        }
    }

    /// Character index of a byte offset that falls on a char boundary.
    fn to_char(&self, byte: usize) -> usize {
        match &self.starts {
            None => byte,
            Some(starts) => starts.binary_search(&byte).unwrap_or_else(|i| i),
        }
    }
}

/// `true` unless the literal continues an identifier, a member access or
/// another hex literal (`Qt.rgba(` must not be read as `rgba(`).
fn starts_at_boundary(text: &str, start: usize) -> bool {
    match text[..start].chars().next_back() {
        Some(c) => !(c.is_alphanumeric() || c == '_' || c == '.' || c == '#'),
        None => true,
    }
}

struct Candidate<'t> {
    format: Format,
    rank: usize,
    span: Span,
    distance: usize,
    caps: Captures<'t>,
}

impl Candidate<'_> {
    /// Ranking key; unique per candidate, so the pick order is total.
    fn key(&self) -> (usize, usize, usize) {
        (self.distance, self.rank, self.span.start)
    }

    fn into_match(self) -> Option<LiteralMatch> {
        let m = self.caps.get(0)?;
        match parse(self.format, &self.caps) {
            Ok(color) => {
                tracing::debug!(
                    format = %self.format,
                    start = self.span.start,
                    len = self.span.len,
                    "located color literal"
                );
                Some(LiteralMatch {
                    span: self.span,
                    byte_range: m.range(),
                    text: m.as_str().to_string(),
                    format: self.format,
                    color,
                })
            }
            Err(err) => {
                tracing::warn!(
                    format = %self.format,
                    start = self.span.start,
                    error = %err,
                    "skipping color literal that failed to parse"
                );
                None
            }
        }
    }
}

/// Finds the literal of `category` under or nearest to `cursor`.
///
/// `cursor` is a character index and is clamped to the document length.
/// Candidates whose captures fail to parse are logged and skipped. Returns
/// `None` when the document holds no usable literal.
pub fn locate(text: &str, category: Category, cursor: usize) -> Option<LiteralMatch> {
    let offsets = CharOffsets::new(text);
    let cursor = cursor.min(offsets.char_len);

    let mut candidates = Vec::new();
    for (rank, &format) in category.formats().iter().enumerate() {
        for caps in format.pattern().captures_iter(text) {
            let Some(m) = caps.get(0) else { continue };
            if !starts_at_boundary(text, m.start()) {
                continue;
            }
            let start = offsets.to_char(m.start());
            let span = Span {
                start,
                len: offsets.to_char(m.end()) - start,
            };
            candidates.push(Candidate {
                format,
                rank,
                span,
                distance: span.distance_to(cursor),
                caps,
            });
        }
    }

    // Rank order without sorting: pick the best remaining candidate and drop
    // it if it fails to parse.
    loop {
        let best = candidates
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| c.key())
            .map(|(i, _)| i)?;
        if let Some(found) = candidates.swap_remove(best).into_match() {
            return Some(found);
        }
    }
}

/// Per-document locator that remembers the document's category.
///
/// The host refreshes the category whenever the document kind or the
/// [`Settings`] change; between those events every [`process`] call reuses it.
///
/// [`process`]: ColorWatcher::process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorWatcher {
    category: Category,
}

impl ColorWatcher {
    /// Watcher scanning for the formats of `category`.
    pub fn new(category: Category) -> Self {
        Self { category }
    }

    /// Watcher for a document of kind `document`, honoring
    /// [`Settings::editor_sensitive`].
    pub fn for_document(settings: &Settings, document: Category) -> Self {
        Self::new(settings.effective_category(document))
    }

    /// Category the next [`process`](ColorWatcher::process) call uses.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Switches the category; a change is logged at debug level.
    pub fn set_category(&mut self, category: Category) {
        if self.category != category {
            tracing::debug!(from = %self.category, to = %category, "color category changed");
            self.category = category;
        }
    }

    /// Re-derives the category after a settings or document-kind change.
    pub fn apply_settings(&mut self, settings: &Settings, document: Category) {
        self.set_category(settings.effective_category(document));
    }

    /// Formats the host may offer as output for this document.
    pub fn available_formats(&self) -> &'static [Format] {
        self.category.formats()
    }

    /// Locates the literal under or nearest to `cursor`.
    pub fn process(&self, text: &str, cursor: usize) -> Option<LiteralMatch> {
        locate(text, self.category, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_geometry() {
        let span = Span { start: 2, len: 3 };
        assert_eq!(span.end(), 5);
        assert!(span.contains(2));
        assert!(span.contains(5));
        assert!(!span.contains(1));
        assert!(!span.contains(6));
        assert_eq!(span.distance_to(0), 2);
        assert_eq!(span.distance_to(4), 0);
        assert_eq!(span.distance_to(9), 4);
    }

    #[test]
    fn nearest_when_cursor_outside() {
        let found = locate("a rgb(1,2,3) b", Category::Any, 1).unwrap();
        assert_eq!(found.format, Format::RgbInt);
        assert_eq!(found.span, Span { start: 2, len: 10 });
        assert_eq!(found.byte_range, 2..12);
        assert_eq!(found.color, Color::from_rgb(1, 2, 3));
    }

    #[test]
    fn literal_under_cursor_wins_over_earlier_one() {
        let doc = "#000000; color: rgb(10, 20, 30);";
        let found = locate(doc, Category::Css, 20).unwrap();
        assert_eq!(found.text, "rgb(10, 20, 30)");

        let found = locate(doc, Category::Css, 0).unwrap();
        assert_eq!(found.text, "#000000");
    }

    #[test]
    fn closest_literal_wins() {
        let doc = "vec3(0.0, 0.0, 0.0)      vec3(1.0, 1.0, 1.0)";
        let found = locate(doc, Category::Glsl, 23).unwrap();
        assert_eq!(found.span.start, 25);
        let found = locate(doc, Category::Glsl, 21).unwrap();
        assert_eq!(found.span.start, 0);
    }

    #[test]
    fn equal_distance_prefers_format_priority() {
        // rgb(...) and #ffffff are both 3 characters away from offset 10.
        let doc = "#ffffff  .   rgb(1, 2, 3)";
        assert_eq!(doc.find("rgb"), Some(13));
        let found = locate(doc, Category::Css, 10).unwrap();
        assert_eq!(found.format, Format::RgbInt);
    }

    #[test]
    fn equal_distance_and_format_prefers_earlier_position() {
        let doc = "#111111  #222222";
        let found = locate(doc, Category::Any, 8).unwrap();
        assert_eq!(found.text, "#111111");
        let found = locate(doc, Category::Any, 9).unwrap();
        assert_eq!(found.text, "#222222");
    }

    #[test]
    fn nothing_found() {
        assert!(locate("", Category::Any, 0).is_none());
        assert!(locate("no colors here", Category::Any, 3).is_none());
    }

    #[test]
    fn category_filters_formats() {
        let doc = "color = vec3(1.0, 0.5, 0.0);";
        assert!(locate(doc, Category::Css, 12).is_none());
        assert!(locate(doc, Category::Glsl, 12).is_some());
    }

    #[test]
    fn member_call_is_not_a_bare_call() {
        let doc = "color: Qt.rgba(1, 0, 0, 1)";
        let found = locate(doc, Category::Any, 12).unwrap();
        assert_eq!(found.format, Format::QmlRgba);
        assert_eq!(found.text, "Qt.rgba(1, 0, 0, 1)");

        assert!(locate("ivec3(1, 0, 0)", Category::Glsl, 2).is_none());
    }

    #[test]
    fn malformed_candidate_is_skipped() {
        let doc = "rgb(300, 0, 0) rgb(0, 0, 255)";
        let found = locate(doc, Category::Css, 0).unwrap();
        assert_eq!(found.text, "rgb(0, 0, 255)");

        assert!(locate("rgb(300, 0, 0)", Category::Css, 0).is_none());
    }

    #[test]
    fn fallthrough_follows_rank_order() {
        let doc = "#000001 rgb(300, 0, 0) #000002 rgb(256, 0, 0)";
        let found = locate(doc, Category::Css, 0).unwrap();
        assert_eq!(found.text, "#000001");

        // From the end, the broken rgb under the cursor is dropped and the
        // next closest literal wins over the earlier broken one.
        let found = locate(doc, Category::Css, doc.len()).unwrap();
        assert_eq!(found.text, "#000002");

        let found = locate(doc, Category::Css, 20).unwrap();
        assert_eq!(found.text, "#000002");
    }

    #[test]
    fn cursor_is_clamped() {
        let found = locate("x: #abc", Category::Any, 1000).unwrap();
        assert_eq!(found.text, "#abc");
    }

    #[test]
    fn offsets_are_characters() {
        let doc = "été: rgb(1, 2, 3)";
        let found = locate(doc, Category::Any, 5).unwrap();
        assert_eq!(found.span, Span { start: 5, len: 12 });
        assert_eq!(found.byte_range, 7..19);
        assert_eq!(&doc[found.byte_range.clone()], "rgb(1, 2, 3)");
    }

    #[test]
    fn rewrite_keeps_the_family() {
        let found = locate("vec3(1.0, 0.5, 0.0)", Category::Glsl, 0).unwrap();
        let edited = found.color.with_alpha(0.25).unwrap();
        assert_eq!(found.rewrite(&edited), "vec4(1.0, 0.5, 0.0, 0.25)");
    }

    #[test]
    fn watcher_follows_settings() {
        let mut settings = Settings::default();
        let mut watcher = ColorWatcher::for_document(&settings, Category::Qml);
        assert_eq!(watcher.category(), Category::Qml);
        assert!(watcher.process("#ff0000", 0).is_none());

        settings.editor_sensitive = false;
        watcher.apply_settings(&settings, Category::Qml);
        assert_eq!(watcher.category(), Category::Any);
        assert_eq!(watcher.process("#ff0000", 0).unwrap().format, Format::Hex);
        assert_eq!(watcher.available_formats().len(), 13);
    }
}
