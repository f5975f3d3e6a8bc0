//! Rendering one grid cell into one table cell

use log::warn;

use pagegrid_core::{CellDirective, CellRecord, TextFormat, TextFormatRun};

use crate::error::{Error, Result};
use crate::model::{CharacterFormat, FieldKind, Picture, Run, TableCell, TextDirection};
use crate::render::convert::{self, MergeIndex};
use crate::render::{borders, grid};

/// Horizontal padding reserved when an image is shrunk to fit its cell
/// (inches)
const IMAGE_FIT_PADDING: f64 = 0.2;

/// Per-cell rendering context, shared with the recursive grid renderer
pub(crate) struct CellContext<'a> {
    /// Table-space row index
    pub row: u32,
    /// Table-space column index
    pub col: u16,
    /// Column shares for the whole table
    pub shares: &'a [f64],
    /// Merge-anchor index for the whole grid
    pub merges: &'a MergeIndex,
    /// Current nesting depth
    pub depth: usize,
    /// Nesting depth limit
    pub max_depth: usize,
}

/// Render one cell record into an already-allocated table cell
///
/// Every step is independently optional based on data presence; the only
/// failure modes are nested-grid faults and host faults surfaced by the
/// recursive render.
pub(crate) fn render_cell(
    record: &CellRecord,
    target: &mut TableCell,
    width: f64,
    ctx: &CellContext<'_>,
) -> Result<()> {
    target.width = width;

    let directive = parse_directive(record);
    match &directive {
        CellDirective::PageBreak => target.first_paragraph_mut().page_break_before = true,
        CellDirective::KeepWithNext => target.first_paragraph_mut().keep_with_next = true,
        _ => {}
    }

    // A cell without an effective format renders blank; directives above
    // still apply.
    let Some(format) = &record.format else {
        return Ok(());
    };

    target.vertical_alignment = Some(convert::cell_vertical_alignment(format.vertical_alignment));
    if let Some(halign) = format.horizontal_alignment {
        target.first_paragraph_mut().alignment = Some(convert::paragraph_alignment(halign));
    }

    if let Some(color) = convert::shading(&format.background) {
        target.shading = Some(color);
    }

    if format.vertical_text {
        target.text_direction = Some(TextDirection::BottomToTop);
    }

    if let Some(spec) = &format.borders {
        target.borders = convert::cell_borders(spec);
    }

    // Merge-aware width: the cell's own width was already set to the
    // unmerged share, but image scaling and nested embedding need the full
    // span. Must be resolved before merges are applied.
    let effective_width = ctx.merges.merged_cell_width(ctx.row, ctx.col, ctx.shares);

    if let Some(image) = &record.image {
        let (mut w, mut h) = image.physical_size();
        if w > effective_width {
            let fitted = effective_width - IMAGE_FIT_PADDING;
            h *= fitted / w;
            w = fitted;
        }
        target
            .first_paragraph_mut()
            .add_run(Run::picture(Picture::new(image.path.clone(), w, h)));
        return Ok(());
    }

    if let Some(nested) = &record.nested {
        if ctx.depth + 1 > ctx.max_depth {
            return Err(Error::NestingTooDeep {
                limit: ctx.max_depth,
            });
        }
        let table = grid::render_at_depth(nested, effective_width, target, ctx.depth + 1, ctx.max_depth)?;
        borders::propagate_merged(table);
        return Ok(());
    }

    let Some(text) = &record.text else {
        return Ok(());
    };

    match directive {
        CellDirective::Style(style) => {
            // The style drives the formatting; the text becomes one plain run.
            let paragraph = target.first_paragraph_mut();
            paragraph.add_text_run(text.clone(), CharacterFormat::default());
            paragraph.style = Some(style);
        }
        CellDirective::PageNumber(style) => {
            // Current page of total pages, no literal text.
            let paragraph = target.first_paragraph_mut();
            paragraph.add_run(Run::field(FieldKind::Page));
            paragraph.add_text_run(" of ", CharacterFormat::default());
            paragraph.add_run(Run::field(FieldKind::NumPages));
            paragraph.style = Some(style);
        }
        _ => {
            let base = &format.text_format;
            if record.runs.is_empty() {
                target
                    .first_paragraph_mut()
                    .add_text_run(text.clone(), CharacterFormat::from(base));
            } else {
                for (segment, delta) in split_runs(text, &record.runs) {
                    let merged = match delta {
                        Some(delta) => base.overridden_by(delta),
                        None => base.clone(),
                    };
                    target
                        .first_paragraph_mut()
                        .add_text_run(segment, CharacterFormat::from(&merged));
                }
            }
        }
    }

    Ok(())
}

fn parse_directive(record: &CellRecord) -> CellDirective {
    match record.note.as_deref() {
        None => CellDirective::None,
        Some(note) => match CellDirective::try_parse(note) {
            Ok(directive) => directive,
            Err(err) => {
                warn!("ignoring malformed cell note: {err}");
                CellDirective::None
            }
        },
    }
}

/// Split `text` into contiguous substrings at the runs' character offsets
///
/// Spans are ordered by ascending offset; the last span runs to the end of
/// the text. When the first span starts past 0, the text before it becomes a
/// leading segment with no format delta. Offsets are character offsets,
/// clamped into range and into ascending order, so concatenating the
/// segments always reconstructs the input exactly.
fn split_runs<'r>(
    text: &str,
    runs: &'r [TextFormatRun],
) -> Vec<(String, Option<&'r TextFormat>)> {
    let char_count = text.chars().count();
    let byte_of = |char_offset: usize| -> usize {
        if char_offset >= char_count {
            text.len()
        } else {
            text.char_indices()
                .nth(char_offset)
                .map(|(byte, _)| byte)
                .unwrap_or(text.len())
        }
    };

    let mut starts: Vec<usize> = runs.iter().map(|r| r.start_index.min(char_count)).collect();
    for i in 1..starts.len() {
        if starts[i] < starts[i - 1] {
            starts[i] = starts[i - 1];
        }
    }

    let mut segments = Vec::with_capacity(runs.len() + 1);
    if let Some(&first) = starts.first() {
        if first > 0 {
            segments.push((text[..byte_of(first)].to_string(), None));
        }
    }
    for (i, run) in runs.iter().enumerate() {
        let begin = byte_of(starts[i]);
        let end = starts
            .get(i + 1)
            .map(|&next| byte_of(next))
            .unwrap_or(text.len());
        segments.push((text[begin..end].to_string(), Some(&run.format)));
    }
    segments
}
