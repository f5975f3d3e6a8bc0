//! Note side-channel directives
//!
//! A cell's note may carry a JSON object steering layout outside the normal
//! format path: a forced page break, keep-with-next, an explicit paragraph
//! style, or a page-number field. The note is parsed once per cell into a
//! single tagged [`CellDirective`]; the variant's shape enforces that at
//! most one directive applies.

use serde::Deserialize;
use serde_json::Value;

/// A layout/style directive carried in a cell's note
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CellDirective {
    /// No directive (absent, empty, or malformed note)
    #[default]
    None,
    /// Force a page break before the cell's paragraph
    PageBreak,
    /// Keep the cell's paragraph with the next one
    KeepWithNext,
    /// Render the cell text as one run under the named paragraph style
    Style(String),
    /// Render a page-number field (current page of total pages) under the
    /// named paragraph style, instead of literal text
    PageNumber(String),
}

/// Mirror of the raw note JSON. Flag keys accept any value; only presence
/// counts.
#[derive(Debug, Deserialize)]
struct RawNote {
    style: Option<String>,
    #[serde(rename = "page-number")]
    page_number: Option<String>,
    #[serde(rename = "new-page")]
    new_page: Option<Value>,
    #[serde(rename = "keep-with-next")]
    keep_with_next: Option<Value>,
}

impl CellDirective {
    /// Parse a note payload.
    ///
    /// Malformed JSON is a best-effort annotation fault: it yields
    /// [`CellDirective::None`] and never fails the render. When several keys
    /// are present, the most content-affecting one wins:
    /// `style` > `page-number` > `new-page` > `keep-with-next`.
    pub fn parse(note: &str) -> CellDirective {
        Self::try_parse(note).unwrap_or_default()
    }

    /// Parse a note payload, surfacing the JSON error.
    ///
    /// Callers that want to log the swallowed fault use this; the policy of
    /// never failing the render still belongs to them.
    pub fn try_parse(note: &str) -> std::result::Result<CellDirective, serde_json::Error> {
        let raw: RawNote = serde_json::from_str(note)?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawNote) -> CellDirective {
        if let Some(style) = raw.style {
            CellDirective::Style(style)
        } else if let Some(style) = raw.page_number {
            CellDirective::PageNumber(style)
        } else if raw.new_page.is_some() {
            CellDirective::PageBreak
        } else if raw.keep_with_next.is_some() {
            CellDirective::KeepWithNext
        } else {
            CellDirective::None
        }
    }
}
