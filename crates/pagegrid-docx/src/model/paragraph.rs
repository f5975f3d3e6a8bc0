//! Paragraphs, runs, and character formatting on the document side

use std::path::PathBuf;

use pagegrid_core::{Color, TextFormat};

/// A paragraph inside a table cell
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    /// Runs, in order
    pub runs: Vec<Run>,
    /// Paragraph alignment, when set
    pub alignment: Option<ParagraphAlignment>,
    /// Named paragraph style; resolved by the host's style registry
    pub style: Option<String>,
    /// Force a page break before this paragraph
    pub page_break_before: bool,
    /// Keep this paragraph on the same page as the next
    pub keep_with_next: bool,
}

impl Paragraph {
    /// Create an empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a run
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Append a text run with the given character format
    pub fn add_text_run<S: Into<String>>(&mut self, text: S, format: CharacterFormat) {
        self.runs.push(Run {
            content: RunContent::Text(text.into()),
            format,
        });
    }

    /// Concatenated text of all literal text runs
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .filter_map(|r| match &r.content {
                RunContent::Text(t) => Some(t.as_str()),
                _ => None,
            })
            .collect()
    }

    /// True when the paragraph holds no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

/// A contiguous span of content sharing one character format
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    /// What the run carries
    pub content: RunContent,
    /// Character formatting
    pub format: CharacterFormat,
}

impl Run {
    /// Create a literal text run
    pub fn text<S: Into<String>>(text: S, format: CharacterFormat) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            format,
        }
    }

    /// Create a field run with default formatting
    pub fn field(kind: FieldKind) -> Self {
        Self {
            content: RunContent::Field(kind),
            format: CharacterFormat::default(),
        }
    }

    /// Create a picture run
    pub fn picture(picture: Picture) -> Self {
        Self {
            content: RunContent::Picture(picture),
            format: CharacterFormat::default(),
        }
    }
}

/// Run payload
#[derive(Debug, Clone, PartialEq)]
pub enum RunContent {
    /// Literal text
    Text(String),
    /// An inline picture
    Picture(Picture),
    /// A dynamic field resolved at page-layout time
    Field(FieldKind),
}

/// Dynamic field kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Current page number
    Page,
    /// Total page count
    NumPages,
}

/// An inline picture at a fixed physical size
#[derive(Debug, Clone, PartialEq)]
pub struct Picture {
    /// Path to the image file
    pub path: PathBuf,
    /// Width in inches
    pub width: f64,
    /// Height in inches
    pub height: f64,
}

impl Picture {
    /// Create a picture
    pub fn new<P: Into<PathBuf>>(path: P, width: f64, height: f64) -> Self {
        Self {
            path: path.into(),
            width,
            height,
        }
    }
}

/// Resolved character formatting for a document run
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CharacterFormat {
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
    /// Underline
    pub underline: bool,
    /// Strikethrough
    pub strikethrough: bool,
    /// Font family name; absent inherits the style's font
    pub font_family: Option<String>,
    /// Font size in points; absent inherits the style's size
    pub font_size_pt: Option<f64>,
    /// Text color; absent inherits the style's color
    pub color: Option<Color>,
}

impl From<&TextFormat> for CharacterFormat {
    fn from(format: &TextFormat) -> Self {
        Self {
            bold: format.bold.unwrap_or(false),
            italic: format.italic.unwrap_or(false),
            underline: format.underline.unwrap_or(false),
            strikethrough: format.strikethrough.unwrap_or(false),
            font_family: format.font_family.clone(),
            font_size_pt: format.font_size_pt,
            color: format.foreground,
        }
    }
}

/// Paragraph alignment options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParagraphAlignment {
    /// Left aligned
    #[default]
    Left,
    /// Center aligned
    Center,
    /// Right aligned
    Right,
    /// Justified
    Justify,
}
