//! End-to-end tests for note directives and rich-text rendering

use pagegrid::prelude::*;
use pretty_assertions::assert_eq;

fn render_single(cell: CellRecord) -> Table {
    let grid = GridDocument::new(GridProperties::new(1, 1))
        .with_pixel_widths(&[100.0])
        .push_row(RowRecord::new(vec![cell]));

    let mut body = DocumentBody::new();
    GridRenderer::new().render_into(&grid, 6.0, &mut body).unwrap();
    body.tables()[0].clone()
}

/// A page-number note renders a current-page-of-total-pages field construct
/// under the named style, with no literal text run
#[test]
fn test_page_number_directive() {
    let table = render_single(
        CellRecord::new()
            .with_text("ignored")
            .with_format(EffectiveFormat::new())
            .with_note(r#"{"page-number": "Footer-Style"}"#),
    );

    let paragraph = table.cell(0, 0).unwrap().first_paragraph();
    assert_eq!(paragraph.style.as_deref(), Some("Footer-Style"));

    let kinds: Vec<_> = paragraph
        .runs
        .iter()
        .map(|r| match &r.content {
            RunContent::Field(kind) => format!("{kind:?}"),
            RunContent::Text(text) => format!("text:{text}"),
            RunContent::Picture(_) => "picture".to_string(),
        })
        .collect();
    assert_eq!(kinds, vec!["Page", "text: of ", "NumPages"]);
    // the cell's literal text is not rendered
    assert!(!paragraph.text().contains("ignored"));
}

/// A style note renders the whole text as one plain run and skips run
/// splitting entirely
#[test]
fn test_style_directive_is_exclusive() {
    let runs = vec![
        TextFormatRun::new(0, TextFormat::new()),
        TextFormatRun::new(3, TextFormat::new().with_bold(true)),
    ];
    let table = render_single(
        CellRecord::new()
            .with_text("Heading text")
            .with_runs(runs)
            .with_format(EffectiveFormat::new())
            .with_note(r#"{"style": "Title-1"}"#),
    );

    let paragraph = table.cell(0, 0).unwrap().first_paragraph();
    assert_eq!(paragraph.style.as_deref(), Some("Title-1"));
    assert_eq!(paragraph.runs.len(), 1);
    assert_eq!(paragraph.text(), "Heading text");
}

#[test]
fn test_page_break_directive() {
    // the directive applies even to a cell with no effective format
    let table = render_single(CellRecord::new().with_note(r#"{"new-page": true}"#));

    let paragraph = table.cell(0, 0).unwrap().first_paragraph();
    assert!(paragraph.page_break_before);
    assert!(!paragraph.keep_with_next);
    assert!(paragraph.is_empty());
}

#[test]
fn test_keep_with_next_directive() {
    let table = render_single(
        CellRecord::new()
            .with_text("header row")
            .with_format(EffectiveFormat::new())
            .with_note(r#"{"keep-with-next": true}"#),
    );

    let paragraph = table.cell(0, 0).unwrap().first_paragraph();
    assert!(paragraph.keep_with_next);
    assert_eq!(paragraph.text(), "header row");
}

/// Malformed note JSON never blocks rendering
#[test]
fn test_malformed_note_is_ignored() {
    let table = render_single(
        CellRecord::new()
            .with_text("still here")
            .with_format(EffectiveFormat::new())
            .with_note("{not valid json"),
    );

    let paragraph = table.cell(0, 0).unwrap().first_paragraph();
    assert_eq!(paragraph.text(), "still here");
    assert!(paragraph.style.is_none());
    assert!(!paragraph.page_break_before);
}

#[test]
fn test_rich_text_runs_split_and_override() {
    let base = TextFormat::new().with_font_family("Arial").with_font_size(10.0);
    let runs = vec![
        TextFormatRun::new(0, TextFormat::new()),
        TextFormatRun::new(6, TextFormat::new().with_bold(true)),
    ];
    let table = render_single(
        CellRecord::new()
            .with_text("plain strong")
            .with_runs(runs)
            .with_format(EffectiveFormat::new().with_text_format(base)),
    );

    let paragraph = table.cell(0, 0).unwrap().first_paragraph();
    assert_eq!(paragraph.runs.len(), 2);
    assert_eq!(paragraph.text(), "plain strong");

    let first = &paragraph.runs[0].format;
    assert!(!first.bold);
    assert_eq!(first.font_family.as_deref(), Some("Arial"));

    // the span's delta overrides bold but inherits the base font
    let second = &paragraph.runs[1].format;
    assert!(second.bold);
    assert_eq!(second.font_family.as_deref(), Some("Arial"));
    assert_eq!(second.font_size_pt, Some(10.0));
}

#[test]
fn test_formatting_applied_to_cell() {
    let format = EffectiveFormat::new()
        .with_vertical_alignment(VerticalAlignment::Middle)
        .with_horizontal_alignment(HorizontalAlignment::Center)
        .with_background(ColorTriple::new(1.0, 1.0, 0.0))
        .with_vertical_text()
        .with_borders(Borders::new().with_bottom(BorderEdge::solid()));

    let table = render_single(CellRecord::new().with_text("styled").with_format(format));

    let cell = table.cell(0, 0).unwrap();
    assert_eq!(cell.vertical_alignment, Some(pagegrid::CellVerticalAlignment::Center));
    assert_eq!(
        cell.first_paragraph().alignment,
        Some(ParagraphAlignment::Center)
    );
    assert_eq!(cell.shading, Some(Color::rgb(255, 255, 0)));
    assert_eq!(cell.text_direction, Some(pagegrid::TextDirection::BottomToTop));
    assert!(cell.borders.bottom.is_some());
    assert!(cell.borders.top.is_none());
}

/// Styles named by directives resolve against the document's registry; the
/// renderer itself never validates the name
#[test]
fn test_directive_styles_resolve_against_registry() {
    let mut doc = Document::new();
    doc.styles.register(
        pagegrid::ParagraphStyle::new("Footer-Style").with_alignment(ParagraphAlignment::Center),
    );

    let grid = GridDocument::new(GridProperties::new(1, 1))
        .with_pixel_widths(&[100.0])
        .push_row(RowRecord::new(vec![
            CellRecord::new()
                .with_text("")
                .with_format(EffectiveFormat::new())
                .with_note(r#"{"page-number": "Footer-Style"}"#),
        ]));

    GridRenderer::new().render_into(&grid, 6.5, &mut doc.footer).unwrap();

    let paragraph = doc.footer.tables()[0].cell(0, 0).unwrap().first_paragraph();
    let name = paragraph.style.as_deref().unwrap();
    let style = doc.styles.get(name).expect("registered style");
    assert_eq!(style.alignment, Some(ParagraphAlignment::Center));

    // an unknown name is set all the same; resolution failure is the host's
    let unknown = GridDocument::new(GridProperties::new(1, 1))
        .with_pixel_widths(&[100.0])
        .push_row(RowRecord::new(vec![
            CellRecord::new()
                .with_text("x")
                .with_format(EffectiveFormat::new())
                .with_note(r#"{"style": "No-Such-Style"}"#),
        ]));
    GridRenderer::new().render_into(&unknown, 6.5, &mut doc.body).unwrap();
    let paragraph = doc.body.tables()[0].cell(0, 0).unwrap().first_paragraph();
    assert_eq!(paragraph.style.as_deref(), Some("No-Such-Style"));
    assert!(doc.styles.get("No-Such-Style").is_none());
}

/// A cell with no effective format renders blank even when it carries text
#[test]
fn test_cell_without_format_renders_blank() {
    let table = render_single(CellRecord::new().with_text("invisible"));

    let paragraph = table.cell(0, 0).unwrap().first_paragraph();
    assert!(paragraph.is_empty());
}
