use serde::{Deserialize, Serialize};

use super::{Record, decode_json, encode_json};
use crate::error::RecordError;

/// Toolbar font sizes, stored as their CSS pixel value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontSize {
    #[serde(rename = "12px")]
    Small,
    #[default]
    #[serde(rename = "16px")]
    Medium,
    #[serde(rename = "20px")]
    Large,
}

impl FontSize {
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_css(self) -> &'static str {
        match self {
            Self::Small => "12px",
            Self::Medium => "16px",
            Self::Large => "20px",
        }
    }

    /// Option value used by the toolbar select.
    pub fn name(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.name() == name)
    }
}

/// Boolean style flags a run can carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

/// A span of text sharing one set of styles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, rename = "fontSize", skip_serializing_if = "Option::is_none")]
    pub font_size: Option<FontSize>,
}

impl TextRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self { text: text.into(), ..Self::default() }
    }

    pub fn has_mark(&self, mark: Mark) -> bool {
        match mark {
            Mark::Bold => self.bold,
            Mark::Italic => self.italic,
            Mark::Underline => self.underline,
        }
    }

    pub fn set_mark(&mut self, mark: Mark, on: bool) {
        match mark {
            Mark::Bold => self.bold = on,
            Mark::Italic => self.italic = on,
            Mark::Underline => self.underline = on,
        }
    }

    #[must_use]
    pub fn with_mark(mut self, mark: Mark) -> Self {
        self.set_mark(mark, true);
        self
    }

    /// Copy of this run's styles holding `text`.
    #[must_use]
    pub fn restyled(&self, text: impl Into<String>) -> Self {
        Self { text: text.into(), ..self.clone() }
    }

    pub fn same_style(&self, other: &Self) -> bool {
        self.bold == other.bold
            && self.italic == other.italic
            && self.underline == other.underline
            && self.font_size == other.font_size
    }
}

/// Top-level block node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
    Paragraph { children: Vec<TextRun> },
}

impl Block {
    pub fn paragraph(children: Vec<TextRun>) -> Self {
        Self::Paragraph { children }
    }

    pub fn empty_paragraph() -> Self {
        Self::paragraph(vec![TextRun::default()])
    }

    pub fn children(&self) -> &[TextRun] {
        match self {
            Self::Paragraph { children } => children,
        }
    }

    pub fn text(&self) -> String {
        self.children().iter().map(|run| run.text.as_str()).collect()
    }

    /// Merge adjacent runs with identical styles and drop empty runs, always
    /// keeping at least one run.
    fn normalize(&mut self) {
        let Self::Paragraph { children } = self;
        let mut merged: Vec<TextRun> = Vec::with_capacity(children.len());
        for run in children.drain(..) {
            if run.text.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.same_style(&run) => last.text.push_str(&run.text),
                _ => merged.push(run),
            }
        }
        if merged.is_empty() {
            merged.push(TextRun::default());
        }
        *children = merged;
    }
}

/// Ordered blocks of the rich-text editor. Never empty once normalized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorDocument(Vec<Block>);

impl Default for EditorDocument {
    fn default() -> Self {
        Self(vec![Block::empty_paragraph()])
    }
}

impl EditorDocument {
    /// Build a normalized document from `blocks`.
    pub fn new(blocks: Vec<Block>) -> Self {
        let mut doc = Self(blocks);
        doc.normalize();
        doc
    }

    /// Document from plain text, one paragraph per line.
    pub fn from_plain_text(text: &str) -> Self {
        Self::new(text.split('\n').map(|line| Block::paragraph(vec![TextRun::plain(line)])).collect())
    }

    pub fn blocks(&self) -> &[Block] {
        &self.0
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.0
    }

    /// Text of every block joined with `\n`.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(Block::text).collect::<Vec<_>>().join("\n")
    }

    pub fn is_blank(&self) -> bool {
        self.0.iter().all(|block| block.text().is_empty())
    }

    /// Restore the invariants: at least one block, at least one run per
    /// block, no adjacent runs with identical styles.
    pub fn normalize(&mut self) {
        if self.0.is_empty() {
            self.0.push(Block::empty_paragraph());
        }
        for block in &mut self.0 {
            block.normalize();
        }
    }
}

impl Record for EditorDocument {
    fn encode(&self) -> Result<String, RecordError> {
        let mut doc = self.clone();
        doc.normalize();
        encode_json(&doc)
    }

    fn decode(raw: &str) -> Result<Self, RecordError> {
        let mut doc: Self = decode_json(raw)?;
        doc.normalize();
        Ok(doc)
    }
}
