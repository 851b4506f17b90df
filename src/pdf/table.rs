use crate::model::{Alignment, Table};

use super::{Canvas, TEXT_LEFT, TEXT_WIDTH};
use super::layout::{
    LINE_HEIGHT, TextLine, ascender, build_paragraph_lines, fill_rect, paragraph_font_size,
    render_paragraph_lines,
};

const CELL_PAD_X: f32 = 5.0;
const CELL_PAD_Y: f32 = 4.0;
const MIN_ROW_HEIGHT: f32 = 16.0;
const BORDER_GRAY: f32 = 0.22;
const SPACE_AFTER_TABLE: f32 = 12.0;

struct ParagraphLayout {
    lines: Vec<TextLine>,
    line_pitch: f32,
    ascent: f32,
    alignment: Alignment,
    space_after: f32,
}

struct CellLayout {
    x: f32,
    width: f32,
    shading: Option<[u8; 3]>,
    paragraphs: Vec<ParagraphLayout>,
}

struct RowLayout {
    height: f32,
    cells: Vec<CellLayout>,
}

/// Column widths in points and the table's left edge. Regular tables span
/// the text width; compact tables keep their widths and hug the right margin.
fn resolve_columns(table: &Table, left: f32, width: f32) -> (Vec<f32>, f32) {
    let total: f32 = table.col_widths.iter().sum();
    // Compact tables keep their natural widths, right-aligned, unless they overflow.
    if table.compact && total <= width {
        return (table.col_widths.clone(), left + width - total);
    }
    if total <= 0.0 {
        return (table.col_widths.clone(), left);
    }
    let scale = width / total;
    (table.col_widths.iter().map(|w| w * scale).collect(), left)
}

fn compute_row_layouts(
    table: &Table,
    col_widths: &[f32],
    table_left: f32,
    canvas: &Canvas,
) -> Vec<RowLayout> {
    table
        .rows
        .iter()
        .map(|row| {
            let mut grid_col = 0usize;
            let mut max_h: f32 = MIN_ROW_HEIGHT;
            let cells = row
                .cells
                .iter()
                .map(|cell| {
                    let span = cell.grid_span.max(1) as usize;
                    let start = grid_col.min(col_widths.len());
                    let end = col_widths.len().min(grid_col + span);
                    let x = table_left + col_widths[..start].iter().sum::<f32>();
                    let width: f32 = col_widths[start..end].iter().sum();
                    grid_col += span;

                    let text_w = (width - 2.0 * CELL_PAD_X).max(0.0);
                    let mut total_h = 2.0 * CELL_PAD_Y;
                    let paragraphs: Vec<ParagraphLayout> = cell
                        .paragraphs
                        .iter()
                        .map(|para| {
                            let lines = build_paragraph_lines(&para.runs, canvas.fonts, text_w);
                            let line_pitch = paragraph_font_size(&para.runs) * LINE_HEIGHT;
                            total_h += lines.len() as f32 * line_pitch + para.space_after;
                            ParagraphLayout {
                                lines,
                                line_pitch,
                                ascent: ascender(canvas.fonts, &para.runs),
                                alignment: para.alignment,
                                space_after: para.space_after,
                            }
                        })
                        .collect();
                    max_h = max_h.max(total_h);

                    CellLayout {
                        x,
                        width,
                        shading: cell.shading,
                        paragraphs,
                    }
                })
                .collect();

            RowLayout { height: max_h, cells }
        })
        .collect()
}

pub(super) fn render_table(canvas: &mut Canvas, table: &Table) {
    let (col_widths, table_left) = resolve_columns(table, TEXT_LEFT, TEXT_WIDTH);
    let rows = compute_row_layouts(table, &col_widths, table_left, canvas);
    let fonts = canvas.fonts;

    for (ri, row) in rows.iter().enumerate() {
        canvas.ensure_space(row.height);
        let row_top = canvas.y;
        let row_bottom = row_top - row.height;
        log::debug!(
            "TABLE {:?} row={} row_h={:.2} cells={} top={:.2}",
            table.role,
            ri,
            row.height,
            row.cells.len(),
            row_top,
        );

        for cell in &row.cells {
            if let Some(color) = cell.shading {
                fill_rect(&mut canvas.content, color, cell.x, row_bottom, cell.width, row.height);
            }

            let mut cursor = row_top - CELL_PAD_Y;
            for para in &cell.paragraphs {
                render_paragraph_lines(
                    &mut canvas.content,
                    &para.lines,
                    para.alignment,
                    cell.x + CELL_PAD_X,
                    (cell.width - 2.0 * CELL_PAD_X).max(0.0),
                    cursor - para.ascent,
                    para.line_pitch,
                    fonts,
                );
                cursor -= para.lines.len() as f32 * para.line_pitch + para.space_after;
            }

            let content = &mut canvas.content;
            content.save_state();
            content.set_line_width(0.75);
            content.set_stroke_gray(BORDER_GRAY);
            content.rect(cell.x, row_bottom, cell.width, row.height);
            content.stroke();
            content.restore_state();
        }

        canvas.y = row_bottom;
    }

    canvas.y -= SPACE_AFTER_TABLE;
}
