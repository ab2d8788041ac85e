//! Rich-text editor state over a persisted [`EditorDocument`].
//!
//! DESIGN
//! ======
//! Edits work on a flattened view of the document: one glyph per character,
//! with a break glyph between paragraphs. Offsets (selection, caret) index that
//! flat sequence, which lines up with the `\n`-joined plain text shown in the
//! text area. After every edit the glyphs are regrouped into paragraphs and
//! runs, and the document is normalized.
//!
//! The document is only written on an explicit save.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use storage::{Block, EditorDocument, FontSize, KeyValueStore, Mark, StorageError, StorageGateway, TextRun, keys};

use super::status::SaveStatus;

/// Character-offset selection over the document's plain text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_collapsed(self) -> bool {
        self.start == self.end
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Style {
    bold: bool,
    italic: bool,
    underline: bool,
    font_size: Option<FontSize>,
}

impl Style {
    fn of(run: &TextRun) -> Self {
        Self { bold: run.bold, italic: run.italic, underline: run.underline, font_size: run.font_size }
    }

    fn has(self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
        }
    }

    fn with(mut self, mark: Mark, on: bool) -> Self {
        match mark {
            Mark::Bold => self.bold = on,
            Mark::Italic => self.italic = on,
            Mark::Underline => self.underline = on,
        }
        self
    }

    fn run(self, text: String) -> TextRun {
        TextRun {
            text,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            font_size: self.font_size,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Glyph {
    Char(char, Style),
    Break,
}

impl Glyph {
    fn as_char(self) -> char {
        match self {
            Self::Char(c, _) => c,
            Self::Break => '\n',
        }
    }

    fn style(self) -> Option<Style> {
        match self {
            Self::Char(_, style) => Some(style),
            Self::Break => None,
        }
    }
}

fn flatten(doc: &EditorDocument) -> Vec<Glyph> {
    let mut glyphs = Vec::new();
    for (i, block) in doc.blocks().iter().enumerate() {
        if i > 0 {
            glyphs.push(Glyph::Break);
        }
        for run in block.children() {
            let style = Style::of(run);
            glyphs.extend(run.text.chars().map(|c| Glyph::Char(c, style)));
        }
    }
    glyphs
}

fn rebuild(glyphs: &[Glyph]) -> EditorDocument {
    let blocks = glyphs
        .split(|g| *g == Glyph::Break)
        .map(|line| {
            let mut runs: Vec<TextRun> = Vec::new();
            for glyph in line {
                if let Glyph::Char(c, style) = *glyph {
                    match runs.last_mut() {
                        Some(last) if Style::of(last) == style => last.text.push(c),
                        _ => runs.push(style.run(c.to_string())),
                    }
                }
            }
            Block::paragraph(runs)
        })
        .collect();
    EditorDocument::new(blocks)
}

/// Style a caret at `at` picks up: the character before it, or the one after
/// it at the start of a paragraph.
fn style_near(glyphs: &[Glyph], at: usize) -> Style {
    let before = at.checked_sub(1).and_then(|i| glyphs.get(i)).and_then(|g| g.style());
    let after = glyphs.get(at).and_then(|g| g.style());
    before.or(after).unwrap_or_default()
}

/// Convert a UTF-16 offset (what browser text controls report) into a char
/// offset into `text`.
pub fn char_offset_from_utf16(text: &str, units: usize) -> usize {
    let mut seen = 0;
    for (index, c) in text.chars().enumerate() {
        if seen >= units {
            return index;
        }
        seen += c.len_utf16();
    }
    text.chars().count()
}

#[derive(Clone, Debug, Default)]
pub struct EditorState {
    document: EditorDocument,
    selection: Selection,
    /// Style for the next typed text after a mark toggle on a collapsed caret.
    pending: Option<Style>,
    /// Font size shown in the toolbar select.
    pub font_size: FontSize,
    pub status: SaveStatus,
}

impl EditorState {
    pub fn load<S: KeyValueStore>(gateway: &StorageGateway<S>) -> Self {
        Self { document: gateway.load_or_default(keys::EDITOR_CONTENT), ..Self::default() }
    }

    pub fn document(&self) -> &EditorDocument {
        &self.document
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    fn len(&self) -> usize {
        self.plain_text().chars().count()
    }

    /// Select `start..end` (in either order), clamped to the text length.
    pub fn set_selection(&mut self, start: usize, end: usize) {
        let len = self.len();
        let (start, end) = (start.min(len), end.min(len));
        let next = Selection { start: start.min(end), end: start.max(end) };
        if next != self.selection {
            self.pending = None;
        }
        self.selection = next;
    }

    /// Replace the whole text, keeping the styles of unchanged characters.
    ///
    /// Only the span between the common prefix and suffix of the old and new
    /// text is rewritten; inserted characters take the pending style or the
    /// style at the insertion point, and `\n` starts a new paragraph. The
    /// caret ends after the inserted text.
    ///
    /// `caret` is the caret position reported after the edit, when known. It
    /// pins the edit when the typed text repeats its neighbours (typing `b`
    /// between `a` and `b`), where prefix and suffix alone are ambiguous.
    pub fn replace_text(&mut self, text: &str, caret: Option<usize>) {
        let mut glyphs = flatten(&self.document);
        let next: Vec<char> = text.chars().collect();
        let (old_len, new_len) = (glyphs.len(), next.len());

        let mut max_prefix = old_len.min(new_len);
        let mut max_suffix_after = new_len;
        if let Some(caret) = caret.map(|c| c.min(new_len)) {
            let grown = new_len.saturating_sub(old_len);
            max_prefix = max_prefix.min(caret.saturating_sub(grown));
            max_suffix_after = new_len - caret;
        }

        let prefix = glyphs
            .iter()
            .zip(&next)
            .take(max_prefix)
            .take_while(|(g, c)| g.as_char() == **c)
            .count();
        let max_suffix = (old_len.min(new_len) - prefix).min(max_suffix_after);
        let suffix = glyphs
            .iter()
            .rev()
            .zip(next.iter().rev())
            .take(max_suffix)
            .take_while(|(g, c)| g.as_char() == **c)
            .count();

        let inserted = &next[prefix..new_len - suffix];
        let style = self.pending.unwrap_or_else(|| style_near(&glyphs, prefix));
        let replacement = inserted.iter().map(|&c| if c == '\n' { Glyph::Break } else { Glyph::Char(c, style) });
        glyphs.splice(prefix..old_len - suffix, replacement);

        self.document = rebuild(&glyphs);
        self.selection = Selection::caret(prefix + inserted.len());
        self.pending = None;
    }

    /// Whether `mark` applies to the whole selection (or to the caret).
    pub fn is_mark_active(&self, mark: Mark) -> bool {
        if let Some(pending) = self.pending {
            return pending.has(mark);
        }
        let glyphs = flatten(&self.document);
        let Selection { start, end } = self.selection;
        if start == end {
            return style_near(&glyphs, start).has(mark);
        }
        let mut styles = glyphs[start..end].iter().filter_map(|g| g.style()).peekable();
        styles.peek().is_some() && styles.all(|s| s.has(mark))
    }

    /// Add `mark` to the selection, or remove it when already fully applied.
    /// On a collapsed caret the change applies to the next typed text.
    pub fn toggle_mark(&mut self, mark: Mark) {
        let on = !self.is_mark_active(mark);
        if self.selection.is_collapsed() {
            let base = self.pending.unwrap_or_else(|| self.caret_style());
            self.pending = Some(base.with(mark, on));
            return;
        }
        self.restyle(|style| style.with(mark, on));
    }

    /// Set the font size of the selection (or of the next typed text).
    pub fn apply_font_size(&mut self, size: FontSize) {
        self.font_size = size;
        if self.selection.is_collapsed() {
            let base = self.pending.unwrap_or_else(|| self.caret_style());
            self.pending = Some(Style { font_size: Some(size), ..base });
            return;
        }
        self.restyle(|style| Style { font_size: Some(size), ..style });
    }

    fn caret_style(&self) -> Style {
        style_near(&flatten(&self.document), self.selection.start)
    }

    fn restyle(&mut self, f: impl Fn(Style) -> Style) {
        let mut glyphs = flatten(&self.document);
        let Selection { start, end } = self.selection;
        for glyph in &mut glyphs[start..end] {
            if let Glyph::Char(_, style) = glyph {
                *style = f(*style);
            }
        }
        self.document = rebuild(&glyphs);
    }

    /// Persist the current document.
    ///
    /// # Errors
    ///
    /// Returns the gateway's error when the write is rejected; the stored
    /// document is unchanged.
    pub fn save<S: KeyValueStore>(&mut self, gateway: &StorageGateway<S>) -> Result<(), StorageError> {
        match gateway.save(keys::EDITOR_CONTENT, &self.document) {
            Ok(()) => {
                self.status = SaveStatus::Saved;
                Ok(())
            }
            Err(err) => {
                self.status = SaveStatus::Failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Back to one empty paragraph with the caret at the start; the stored
    /// document is removed.
    pub fn reset<S: KeyValueStore>(&mut self, gateway: &StorageGateway<S>) {
        *self = Self::default();
        gateway.remove(keys::EDITOR_CONTENT);
    }
}
