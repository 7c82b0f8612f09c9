//! Display surface
//!
//! The text widget the highlighter paints on: positioned text plus
//! named tags. Each tag carries one style directive and covers any
//! number of ranges. Tags created later take priority over older ones
//! where their directives overlap.

use crate::syntax::{Position, StyleDirective};

/// A text area that can be tagged with styles
pub trait DisplaySurface {
    /// Text between two positions (end exclusive)
    fn text(&self, start: Position, end: Position) -> String;

    /// Position just past the last character
    fn end(&self) -> Position;

    /// Number of lines (always at least 1)
    fn line_count(&self) -> usize;

    /// Position just past the last character of `line`
    fn line_end(&self, line: usize) -> Position;

    /// Add `tag` to a range, creating the tag if needed
    fn tag_add(&mut self, tag: &str, start: Position, end: Position);

    /// Remove `tag` from a range
    fn tag_remove(&mut self, tag: &str, start: Position, end: Position);

    /// Drop a tag entirely: its ranges and its configuration
    fn tag_delete(&mut self, tag: &str);

    /// Set the display directive of a tag, creating it if needed
    fn tag_configure(&mut self, tag: &str, directive: &StyleDirective);

    /// Names of all tags, oldest first
    fn tag_names(&self) -> Vec<String>;

    /// Move `chars` characters forward from `pos`, clamped to the end
    fn advance(&self, pos: Position, chars: usize) -> Position;

    /// Whole buffer contents
    fn content(&self) -> String {
        self.text(Position::START, self.end())
    }
}

/// One tagged range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagRange {
    pub start: Position,
    pub end: Position,
    /// Sequence number of the `tag_add` that created this range
    pub stamp: u64,
}

#[derive(Debug, Clone)]
struct Tag {
    name: String,
    directive: Option<StyleDirective>,
    /// Sorted and non-overlapping
    ranges: Vec<TagRange>,
}

impl Tag {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            directive: None,
            ranges: Vec::new(),
        }
    }

    /// Index of the first range ending after `pos`
    fn first_after(&self, pos: Position) -> usize {
        self.ranges.partition_point(|r| r.end <= pos)
    }

    /// Cut `[start, end)` out of every range, keeping stamps of what is left
    fn cut(&mut self, start: Position, end: Position) {
        let lo = self.first_after(start);
        let hi = self.ranges.partition_point(|r| r.start < end);
        if lo >= hi {
            return;
        }
        let (first, last) = (self.ranges[lo], self.ranges[hi - 1]);
        let mut pieces = Vec::with_capacity(2);
        if first.start < start {
            pieces.push(TagRange { end: start, ..first });
        }
        if last.end > end {
            pieces.push(TagRange { start: end, ..last });
        }
        self.ranges.splice(lo..hi, pieces);
    }

    /// Add a range, replacing whatever it overlaps
    fn add(&mut self, range: TagRange) {
        match self.ranges.last() {
            // Passes add in buffer order, so most adds land past the last range
            Some(last) if last.end > range.start => {
                self.cut(range.start, range.end);
                let idx = self.ranges.partition_point(|r| r.start < range.start);
                self.ranges.insert(idx, range);
            }
            _ => self.ranges.push(range),
        }
    }

    fn covers(&self, pos: Position) -> bool {
        self.ranges.get(self.first_after(pos)).map_or(false, |r| r.start <= pos)
    }
}

/// In-memory text buffer implementing [`DisplaySurface`]
///
/// Tag ranges follow edits: text inserted inside a range extends it,
/// text inserted at a range boundary stays outside it, and deleting
/// text shrinks or removes the ranges it overlapped.
#[derive(Debug, Clone)]
pub struct TextSurface {
    /// Lines of text (without newlines)
    lines: Vec<String>,
    /// Insertion cursor
    cursor: Position,
    /// Tags in creation order
    tags: Vec<Tag>,
    /// Number of tag operations performed
    mutations: u64,
    next_stamp: u64,
}

impl TextSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Position::START,
            tags: Vec::new(),
            mutations: 0,
            next_stamp: 0,
        }
    }

    /// Create a surface holding `content`
    pub fn with_content(content: &str) -> Self {
        let mut surface = Self::new();
        surface.lines = split_lines(content);
        surface
    }

    /// Get the insertion cursor
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Move the insertion cursor, clamped into the text
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.clamp(pos);
    }

    /// Text of one line (1-based)
    pub fn line(&self, line: usize) -> Option<&str> {
        line.checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    /// Insert text at a position and leave the cursor after it
    pub fn insert(&mut self, pos: Position, text: &str) {
        let at = self.offset_of(pos);
        let count = text.chars().count();
        let ranges = self.range_offsets();

        let mut content = self.content();
        let byte = byte_index(&content, at);
        content.insert_str(byte, text);
        self.lines = split_lines(&content);

        self.restore_ranges(ranges, |offset, is_start| {
            if offset > at || (is_start && offset == at) {
                offset + count
            } else {
                offset
            }
        });
        self.cursor = self.position_of(at + count);
    }

    /// Delete the text between two positions and leave the cursor there
    pub fn delete(&mut self, start: Position, end: Position) {
        let from = self.offset_of(start);
        let to = self.offset_of(end);
        if from >= to {
            return;
        }
        let ranges = self.range_offsets();

        let mut content = self.content();
        let range = byte_index(&content, from)..byte_index(&content, to);
        content.replace_range(range, "");
        self.lines = split_lines(&content);

        self.restore_ranges(ranges, |offset, _| {
            if offset >= to {
                offset - (to - from)
            } else {
                offset.min(from)
            }
        });
        self.cursor = self.position_of(from);
    }

    /// Replace the whole text; tags stay configured but lose their ranges
    pub fn set_content(&mut self, content: &str) {
        self.lines = split_lines(content);
        for tag in &mut self.tags {
            tag.ranges.clear();
        }
        self.cursor = Position::START;
    }

    /// Ranges covered by a tag, in buffer order
    pub fn tag_ranges(&self, tag: &str) -> Vec<TagRange> {
        self.tag(tag).map(|t| t.ranges.clone()).unwrap_or_default()
    }

    /// Directive configured on a tag
    pub fn tag_style(&self, tag: &str) -> Option<StyleDirective> {
        self.tag(tag).and_then(|t| t.directive)
    }

    /// Tags covering a position, oldest first
    pub fn tags_at(&self, pos: Position) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|t| t.covers(pos))
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Effective style at a position
    ///
    /// Directives of all covering tags are layered in creation order,
    /// so the newest tag wins for each attribute it sets.
    pub fn style_at(&self, pos: Position) -> StyleDirective {
        self.tags
            .iter()
            .filter(|t| t.covers(pos))
            .filter_map(|t| t.directive)
            .fold(StyleDirective::default(), StyleDirective::merged_with)
    }

    /// Effective style of every character on a line
    ///
    /// Same result as [`style_at`](Self::style_at) for each column, but
    /// visits only the ranges that touch the line.
    pub fn line_styles(&self, line: usize) -> Vec<StyleDirective> {
        let len = self.line(line).map_or(0, |text| text.chars().count());
        let mut styles = vec![StyleDirective::default(); len];
        let (line_start, line_end) = (Position::line_start(line), Position::new(line, len));

        for tag in &self.tags {
            let directive = match tag.directive {
                Some(directive) => directive,
                None => continue,
            };
            let first = tag.first_after(line_start);
            for range in tag.ranges[first..].iter().take_while(|r| r.start < line_end) {
                let from = if range.start.line < line { 0 } else { range.start.column };
                let to = if range.end.line > line { len } else { range.end.column.min(len) };
                for style in &mut styles[from..to] {
                    *style = style.merged_with(directive);
                }
            }
        }
        styles
    }

    /// Number of tag operations performed so far
    pub fn mutations(&self) -> u64 {
        self.mutations
    }

    /// Stamp the next `tag_add` will use
    pub fn next_stamp(&self) -> u64 {
        self.next_stamp
    }

    fn tag(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }

    fn tag_mut(&mut self, name: &str) -> &mut Tag {
        let idx = match self.tags.iter().position(|t| t.name == name) {
            Some(idx) => idx,
            None => {
                self.tags.push(Tag::new(name));
                self.tags.len() - 1
            }
        };
        &mut self.tags[idx]
    }

    /// Clamp a position into the text without walking earlier lines
    fn clamp(&self, pos: Position) -> Position {
        if pos.line == 0 {
            return Position::START;
        }
        match self.lines.get(pos.line - 1) {
            Some(text) => Position::new(pos.line, pos.column.min(text.chars().count())),
            None => self.end(),
        }
    }

    /// Character offset of a position, clamped into the text
    fn offset_of(&self, pos: Position) -> usize {
        if pos.line == 0 {
            return 0;
        }
        let line = pos.line.min(self.lines.len());
        let before: usize = self.lines[..line - 1]
            .iter()
            .map(|l| l.chars().count() + 1)
            .sum();
        let column = if pos.line > self.lines.len() {
            usize::MAX
        } else {
            pos.column
        };
        before + column.min(self.lines[line - 1].chars().count())
    }

    /// Position of a character offset, clamped to the end
    fn position_of(&self, mut offset: usize) -> Position {
        for (idx, line) in self.lines.iter().enumerate() {
            let len = line.chars().count();
            if offset <= len {
                return Position::new(idx + 1, offset);
            }
            offset -= len + 1;
        }
        self.end()
    }

    /// Character offset at which each line starts
    fn line_offsets(&self) -> Vec<usize> {
        let mut offset = 0;
        self.lines
            .iter()
            .map(|line| {
                let start = offset;
                offset += line.chars().count() + 1;
                start
            })
            .collect()
    }

    /// Snapshot every tag range as character offsets
    fn range_offsets(&self) -> Vec<Vec<(usize, usize, u64)>> {
        let starts = self.line_offsets();
        // Stored ranges are already clamped into the text
        let offset = |pos: Position| starts[pos.line - 1] + pos.column;
        self.tags
            .iter()
            .map(|t| t.ranges.iter().map(|r| (offset(r.start), offset(r.end), r.stamp)).collect())
            .collect()
    }

    /// Rebuild tag ranges from shifted offsets, dropping empty ones
    fn restore_ranges(&mut self, offsets: Vec<Vec<(usize, usize, u64)>>, shift: impl Fn(usize, bool) -> usize) {
        let starts = self.line_offsets();
        let end = self.end();
        // Only the last line can overshoot, and only past the end
        let position = |offset: usize| {
            let line = starts.partition_point(|&start| start <= offset);
            Position::new(line, offset - starts[line - 1]).min(end)
        };
        for (idx, ranges) in offsets.into_iter().enumerate() {
            let restored: Vec<TagRange> = ranges
                .into_iter()
                .map(|(start, end, stamp)| (shift(start, true), shift(end, false), stamp))
                .filter(|(start, end, _)| start < end)
                .map(|(start, end, stamp)| TagRange {
                    start: position(start),
                    end: position(end),
                    stamp,
                })
                .collect();
            self.tags[idx].ranges = restored;
        }
    }
}

impl Default for TextSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for TextSurface {
    fn text(&self, start: Position, end: Position) -> String {
        let from = self.offset_of(start);
        let to = self.offset_of(end);
        if from >= to {
            return String::new();
        }
        let mut out = String::new();
        let mut offset = 0;
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                if offset >= from && offset < to {
                    out.push('\n');
                }
                offset += 1;
            }
            for ch in line.chars() {
                if offset >= to {
                    return out;
                }
                if offset >= from {
                    out.push(ch);
                }
                offset += 1;
            }
        }
        out
    }

    fn end(&self) -> Position {
        let last = self.lines.len();
        Position::new(last, self.lines[last - 1].chars().count())
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_end(&self, line: usize) -> Position {
        match self.line(line) {
            Some(text) => Position::new(line, text.chars().count()),
            None => self.end(),
        }
    }

    fn tag_add(&mut self, tag: &str, start: Position, end: Position) {
        let (start, end) = (self.clamp(start), self.clamp(end));
        self.mutations += 1;
        let stamp = self.next_stamp;
        self.next_stamp += 1;

        let tag = self.tag_mut(tag);
        if start < end {
            tag.add(TagRange { start, end, stamp });
        }
    }

    fn tag_remove(&mut self, tag: &str, start: Position, end: Position) {
        let (start, end) = (self.clamp(start), self.clamp(end));
        self.mutations += 1;
        if let Some(tag) = self.tags.iter_mut().find(|t| t.name == tag) {
            tag.cut(start, end);
        }
    }

    fn tag_delete(&mut self, tag: &str) {
        self.mutations += 1;
        self.tags.retain(|t| t.name != tag);
    }

    fn tag_configure(&mut self, tag: &str, directive: &StyleDirective) {
        self.mutations += 1;
        self.tag_mut(tag).directive = Some(*directive);
    }

    fn tag_names(&self) -> Vec<String> {
        self.tags.iter().map(|t| t.name.clone()).collect()
    }

    fn advance(&self, pos: Position, chars: usize) -> Position {
        self.position_of(self.offset_of(pos).saturating_add(chars))
    }
}

fn split_lines(content: &str) -> Vec<String> {
    content.split('\n').map(str::to_string).collect()
}

/// Byte index of a character offset
fn byte_index(s: &str, offset: usize) -> usize {
    s.char_indices().nth(offset).map_or(s.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{Color, FontVariant};

    fn pos(line: usize, column: usize) -> Position {
        Position::new(line, column)
    }

    #[test]
    fn test_content_round_trip() {
        let surface = TextSurface::with_content("def f():\n    return 1\n");
        assert_eq!(surface.line_count(), 3);
        assert_eq!(surface.content(), "def f():\n    return 1\n");
        assert_eq!(surface.end(), pos(3, 0));
        assert_eq!(surface.line_end(2), pos(2, 12));
        assert_eq!(surface.text(pos(1, 4), pos(2, 4)), "f():\n    ");
    }

    #[test]
    fn test_text_counts_characters() {
        let surface = TextSurface::with_content("héllo\nwörld");
        assert_eq!(surface.text(pos(1, 1), pos(1, 3)), "él");
        assert_eq!(surface.text(pos(2, 0), pos(9, 9)), "wörld");
        assert_eq!(surface.advance(pos(1, 4), 3), pos(2, 1));
        assert_eq!(surface.advance(pos(2, 4), 10), pos(2, 5));
    }

    #[test]
    fn test_insert_and_delete() {
        let mut surface = TextSurface::with_content("ab\ncd");
        surface.insert(pos(1, 1), "X\nY");
        assert_eq!(surface.content(), "aX\nYb\ncd");
        assert_eq!(surface.cursor(), pos(2, 1));

        surface.delete(pos(1, 2), pos(2, 1));
        assert_eq!(surface.content(), "aXb\ncd");
        assert_eq!(surface.cursor(), pos(1, 2));
    }

    #[test]
    fn test_tag_add_and_remove() {
        let mut surface = TextSurface::with_content("hello world");
        surface.tag_add("Keyword", pos(1, 0), pos(1, 11));
        surface.tag_remove("Keyword", pos(1, 5), pos(1, 6));

        let ranges = surface.tag_ranges("Keyword");
        assert_eq!(ranges.len(), 2);
        assert_eq!((ranges[0].start, ranges[0].end), (pos(1, 0), pos(1, 5)));
        assert_eq!((ranges[1].start, ranges[1].end), (pos(1, 6), pos(1, 11)));
        // Both pieces keep the stamp of the original add
        assert_eq!(ranges[0].stamp, ranges[1].stamp);
        assert_eq!(surface.mutations(), 2);
    }

    #[test]
    fn test_tag_add_replaces_overlap() {
        let mut surface = TextSurface::with_content("abcdef");
        surface.tag_add("Name", pos(1, 0), pos(1, 4));
        surface.tag_add("Name", pos(1, 2), pos(1, 6));
        let ranges = surface.tag_ranges("Name");
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges[0].end, pos(1, 2));
        assert_eq!(ranges[1].start, pos(1, 2));
        assert!(ranges[1].stamp > ranges[0].stamp);
    }

    #[test]
    fn test_ranges_follow_edits() {
        let mut surface = TextSurface::with_content("let x = 1;");
        surface.tag_add("Keyword", pos(1, 0), pos(1, 3));
        surface.tag_add("Number", pos(1, 8), pos(1, 9));

        // Insert at the keyword's end boundary stays outside it
        surface.insert(pos(1, 3), "!");
        assert_eq!(surface.tag_ranges("Keyword")[0].end, pos(1, 3));
        assert_eq!(surface.tag_ranges("Number")[0].start, pos(1, 9));

        // Insert inside extends the range
        surface.insert(pos(1, 1), "ee");
        assert_eq!(surface.tag_ranges("Keyword")[0].end, pos(1, 5));

        // Deleting the whole number drops its range
        surface.delete(pos(1, 11), pos(1, 12));
        assert!(surface.tag_ranges("Number").is_empty());
        assert_eq!(surface.content(), "leeet! x = ;");
    }

    #[test]
    fn test_newest_tag_wins_per_attribute() {
        let mut surface = TextSurface::with_content("text");
        surface.tag_configure("A", &StyleDirective::fg(Color::rgb(1, 1, 1)).with_font(FontVariant::Bold));
        surface.tag_configure("B", &StyleDirective::fg(Color::rgb(2, 2, 2)));
        surface.tag_add("B", pos(1, 0), pos(1, 4));
        surface.tag_add("A", pos(1, 0), pos(1, 4));

        let style = surface.style_at(pos(1, 1));
        assert_eq!(style.foreground, Some(Color::rgb(2, 2, 2)));
        assert_eq!(style.font, Some(FontVariant::Bold));
        assert_eq!(surface.tags_at(pos(1, 1)), vec!["A", "B"]);
    }

    #[test]
    fn test_tag_delete_forgets_configuration() {
        let mut surface = TextSurface::with_content("text");
        surface.tag_configure("A", &StyleDirective::fg(Color::rgb(1, 1, 1)));
        surface.tag_add("A", pos(1, 0), pos(1, 4));
        surface.tag_delete("A");
        assert!(surface.tag_names().is_empty());
        assert_eq!(surface.tag_style("A"), None);
        assert!(surface.style_at(pos(1, 0)).is_empty());
    }

    #[test]
    fn test_set_content_clears_ranges() {
        let mut surface = TextSurface::with_content("abc");
        surface.tag_configure("A", &StyleDirective::fg(Color::rgb(1, 1, 1)));
        surface.tag_add("A", pos(1, 0), pos(1, 3));
        surface.set_content("xyz\n");
        assert_eq!(surface.tag_names(), vec!["A".to_string()]);
        assert!(surface.tag_ranges("A").is_empty());
        assert_eq!(surface.line_count(), 2);
    }

    #[test]
    fn test_clamp_matches_offsets() {
        let surface = TextSurface::with_content("héllo\nab\n");
        for p in [pos(0, 3), pos(1, 2), pos(1, 99), pos(2, 9), pos(3, 0), pos(3, 5), pos(7, 1)] {
            assert_eq!(surface.clamp(p), surface.position_of(surface.offset_of(p)), "{p}");
        }
    }

    #[test]
    fn test_many_in_order_adds_stay_sorted() {
        let line = "ab ".repeat(2000);
        let mut surface = TextSurface::with_content(&format!("{line}\n{line}"));
        for row in 1..=2 {
            for word in 0..2000 {
                surface.tag_add("Name", pos(row, word * 3), pos(row, word * 3 + 2));
            }
        }
        // Out-of-order add splits the ranges it overlaps
        surface.tag_add("Name", pos(1, 1), pos(1, 4));

        let ranges = surface.tag_ranges("Name");
        assert_eq!(ranges.len(), 4001);
        assert!(ranges.windows(2).all(|w| w[0].end <= w[1].start));
        assert_eq!((ranges[0].start, ranges[0].end), (pos(1, 0), pos(1, 1)));
        assert_eq!((ranges[1].start, ranges[1].end), (pos(1, 1), pos(1, 4)));
        assert_eq!((ranges[2].start, ranges[2].end), (pos(1, 4), pos(1, 5)));
        assert_eq!(ranges[2].stamp, 1);
        assert_eq!(surface.tags_at(pos(2, 5997)), vec!["Name"]);
        assert!(surface.tags_at(pos(2, 5999)).is_empty());
    }

    #[test]
    fn test_line_styles_match_style_at() {
        let mut surface = TextSurface::with_content("one two\nthree\n\nfour");
        surface.tag_configure("Outer", &StyleDirective::fg(Color::rgb(1, 1, 1)));
        surface.tag_configure("Inner", &StyleDirective::default().with_font(FontVariant::Italic));
        surface.tag_configure("Plain", &StyleDirective::fg(Color::rgb(3, 3, 3)));
        surface.tag_add("Outer", pos(1, 4), pos(4, 2));
        surface.tag_add("Inner", pos(1, 0), pos(1, 5));
        surface.tag_add("Inner", pos(2, 2), pos(2, 9));
        surface.tag_add("Plain", pos(4, 1), pos(4, 3));
        // Unconfigured tags never style anything
        surface.tag_add("Bare", pos(1, 0), pos(4, 4));

        for line in 1..=surface.line_count() {
            let expected: Vec<_> = (0..surface.line_end(line).column)
                .map(|column| surface.style_at(pos(line, column)))
                .collect();
            assert_eq!(surface.line_styles(line), expected, "line {line}");
        }
        assert!(surface.line_styles(9).is_empty());
    }
}
