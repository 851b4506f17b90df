use pdf_writer::{Content, Name, Str};

use crate::fonts::{FontSet, to_winansi_bytes};
use crate::model::{Alignment, FontStyle, Run, TEXT};

pub(super) const LINE_HEIGHT: f32 = 1.25;

pub(super) struct WordChunk {
    pub(super) style: FontStyle,
    pub(super) text: String,
    pub(super) font_size: f32,
    pub(super) color: [u8; 3],
    pub(super) x_offset: f32, // x relative to line start
    pub(super) width: f32,
    /// Separated from the previous chunk by a space (justification gap).
    pub(super) space_before: bool,
}

pub(super) struct TextLine {
    pub(super) chunks: Vec<WordChunk>,
    pub(super) total_width: f32,
    /// Last line of a paragraph or ended by an explicit `\n`; never justified.
    pub(super) hard_end: bool,
}

fn finish_line(chunks: &mut Vec<WordChunk>, hard_end: bool) -> TextLine {
    let total_width = chunks.last().map(|c| c.x_offset + c.width).unwrap_or(0.0);
    TextLine {
        chunks: std::mem::take(chunks),
        total_width,
        hard_end,
    }
}

/// Largest font size among the runs, used for the paragraph's line pitch.
pub(super) fn paragraph_font_size(runs: &[Run]) -> f32 {
    runs.iter().map(|r| r.font_size).fold(0.0, f32::max).max(1.0)
}

/// Layout runs into wrapped lines.
/// Text in adjacent runs is joined without a gap unless one side has
/// whitespace at the boundary (`"Nimi: "` + `"Oy"` keeps one space, `"1"` +
/// `"-12"` keeps none). Only ASCII spaces break; a no-break space stays
/// inside its word.
pub(super) fn build_paragraph_lines(
    runs: &[Run],
    fonts: &FontSet,
    max_width: f32,
) -> Vec<TextLine> {
    let mut lines: Vec<TextLine> = Vec::new();
    let mut chunks: Vec<WordChunk> = Vec::new();
    let mut current_x: f32 = 0.0;
    let mut pending_space = false;

    for run in runs {
        let Some(entry) = fonts.get(&run.style) else {
            continue;
        };
        let space_w = entry.space_width(run.font_size);
        let color = run.color.unwrap_or(TEXT);

        for (seg_idx, segment) in run.text.split('\n').enumerate() {
            if seg_idx > 0 {
                lines.push(finish_line(&mut chunks, true));
                current_x = 0.0;
                pending_space = false;
            }
            if segment.starts_with([' ', '\t']) {
                pending_space = true;
            }

            let mut words = segment.split([' ', '\t']).filter(|w| !w.is_empty()).peekable();
            while let Some(word) = words.next() {
                let word_w = entry.word_width(word, run.font_size);
                let mut gap = if pending_space && !chunks.is_empty() { space_w } else { 0.0 };

                if !chunks.is_empty() && current_x + gap + word_w > max_width {
                    lines.push(finish_line(&mut chunks, false));
                    current_x = 0.0;
                    gap = 0.0;
                }

                let x = current_x + gap;
                chunks.push(WordChunk {
                    style: run.style,
                    text: word.to_string(),
                    font_size: run.font_size,
                    color,
                    x_offset: x,
                    width: word_w,
                    space_before: gap > 0.0,
                });
                current_x = x + word_w;
                pending_space = words.peek().is_some();
            }

            if segment.ends_with([' ', '\t']) {
                pending_space = true;
            }
        }
    }

    if !chunks.is_empty() {
        lines.push(finish_line(&mut chunks, true));
    } else if let Some(last) = lines.last_mut() {
        last.hard_end = true;
    }
    lines
}

fn set_fill(content: &mut Content, [r, g, b]: [u8; 3]) {
    content.set_fill_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
}

pub(super) fn render_paragraph_lines(
    content: &mut Content,
    lines: &[TextLine],
    alignment: Alignment,
    margin_left: f32,
    text_width: f32,
    first_baseline_y: f32,
    line_pitch: f32,
    fonts: &FontSet,
) {
    let mut current_color: Option<[u8; 3]> = None;
    let mut current_font: Option<(FontStyle, f32)> = None;

    for (line_num, line) in lines.iter().enumerate() {
        if line.chunks.is_empty() {
            continue;
        }
        let y = first_baseline_y - line_num as f32 * line_pitch;

        let gaps = line.chunks.iter().filter(|c| c.space_before).count();
        let extra_per_gap = if alignment == Alignment::Justify && !line.hard_end && gaps > 0 {
            (text_width - line.total_width).max(0.0) / gaps as f32
        } else {
            0.0
        };

        let line_start_x = match alignment {
            Alignment::Center => margin_left + (text_width - line.total_width) / 2.0,
            Alignment::Right => margin_left + text_width - line.total_width,
            Alignment::Left | Alignment::Justify => margin_left,
        };

        content.begin_text();
        let mut td_x = 0.0_f32;
        let mut td_y = 0.0_f32;
        let mut gaps_seen = 0usize;

        for chunk in &line.chunks {
            if chunk.space_before {
                gaps_seen += 1;
            }
            let x = line_start_x + chunk.x_offset + gaps_seen as f32 * extra_per_gap;

            if current_color != Some(chunk.color) {
                set_fill(content, chunk.color);
                current_color = Some(chunk.color);
            }

            if current_font != Some((chunk.style, chunk.font_size)) {
                if let Some(entry) = fonts.get(&chunk.style) {
                    content.set_font(Name(entry.pdf_name.as_bytes()), chunk.font_size);
                }
                current_font = Some((chunk.style, chunk.font_size));
            }

            content.next_line(x - td_x, y - td_y);
            td_x = x;
            td_y = y;

            content.show(Str(&to_winansi_bytes(&chunk.text)));
        }
        content.end_text();
    }
}

/// Single line of text at an absolute position, no wrapping.
pub(super) fn draw_text(
    content: &mut Content,
    fonts: &FontSet,
    run: &Run,
    x: f32,
    baseline_y: f32,
) {
    let Some(entry) = fonts.get(&run.style) else {
        return;
    };
    set_fill(content, run.color.unwrap_or(TEXT));
    content.begin_text();
    content.set_font(Name(entry.pdf_name.as_bytes()), run.font_size);
    content.next_line(x, baseline_y);
    content.show(Str(&to_winansi_bytes(&run.text)));
    content.end_text();
}

pub(super) fn text_width(fonts: &FontSet, run: &Run) -> f32 {
    fonts
        .get(&run.style)
        .map(|e| e.word_width(&run.text, run.font_size))
        .unwrap_or(0.0)
}

pub(super) fn ascender(fonts: &FontSet, runs: &[Run]) -> f32 {
    let font_size = paragraph_font_size(runs);
    let ratio = runs
        .first()
        .and_then(|r| fonts.get(&r.style))
        .map_or(0.75, |e| e.ascender_ratio);
    font_size * ratio
}

pub(super) fn fill_rect(content: &mut Content, color: [u8; 3], x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    set_fill(content, color);
    content.rect(x, y, w, h);
    content.fill_nonzero();
    content.restore_state();
}

pub(super) fn stroke_line(
    content: &mut Content,
    width: f32,
    gray: f32,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
) {
    content.save_state();
    content.set_line_width(width);
    content.set_stroke_gray(gray);
    content.move_to(x1, y1);
    content.line_to(x2, y2);
    content.stroke();
    content.restore_state();
}
