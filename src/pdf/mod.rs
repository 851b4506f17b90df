mod layout;
mod logo;
mod table;

use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref};

use crate::error::Error;
use crate::fonts::{FontSet, register_fonts};
use crate::model::{
    ACCENT, Alignment, Block, Document, Footer, Header, Logo, MUTED, Paragraph, Run, SignatureBlock,
};

use layout::{
    LINE_HEIGHT, ascender, build_paragraph_lines, draw_text, fill_rect, paragraph_font_size,
    render_paragraph_lines, stroke_line, text_width,
};
use logo::{LogoSet, embed_logos};

/// A4 portrait in points.
const PAGE_WIDTH: f32 = 595.28;
const PAGE_HEIGHT: f32 = 841.89;
/// 20 mm left and right, 15 mm top and bottom.
const MARGIN_X: f32 = 56.69;
const MARGIN_Y: f32 = 42.52;
const TEXT_LEFT: f32 = MARGIN_X;
const TEXT_RIGHT: f32 = PAGE_WIDTH - MARGIN_X;
const TEXT_WIDTH: f32 = TEXT_RIGHT - TEXT_LEFT;

const MONOGRAM_FILL: [u8; 3] = [0x1f, 0x29, 0x37];
const WHITE: [u8; 3] = [0xff, 0xff, 0xff];

/// Drawing state for one document: the sheet being filled, the y cursor on
/// it, and the sheets already finished. A document page that overflows the
/// bottom margin continues on a fresh sheet.
struct Canvas<'a> {
    fonts: &'a FontSet,
    logos: &'a LogoSet,
    content: Content,
    y: f32,
    sheets: Vec<Content>,
}

impl<'a> Canvas<'a> {
    fn new(fonts: &'a FontSet, logos: &'a LogoSet) -> Self {
        Self {
            fonts,
            logos,
            content: Content::new(),
            y: Self::top(),
            sheets: Vec::new(),
        }
    }

    fn top() -> f32 {
        PAGE_HEIGHT - MARGIN_Y
    }

    fn at_top(&self) -> bool {
        (self.y - Self::top()).abs() < 0.5
    }

    fn new_sheet(&mut self) {
        self.sheets
            .push(std::mem::replace(&mut self.content, Content::new()));
        self.y = Self::top();
    }

    /// Start a continuation sheet unless `height` still fits above the bottom
    /// margin. Content taller than a whole sheet is drawn anyway.
    fn ensure_space(&mut self, height: f32) {
        if !self.at_top() && self.y - height < MARGIN_Y {
            log::debug!(
                "overflow: need {height:.1}pt, {:.1}pt left; continuing on sheet {}",
                self.y - MARGIN_Y,
                self.sheets.len() + 2,
            );
            self.new_sheet();
        }
    }

    fn finish(mut self) -> Vec<Content> {
        self.sheets.push(self.content);
        self.sheets
    }
}

/// Render the assembled document to PDF bytes.
pub fn render(doc: &Document) -> Result<Vec<u8>, Error> {
    if doc.pages.is_empty() {
        return Err(Error::Pdf("document has no pages".into()));
    }

    let t0 = std::time::Instant::now();
    let mut pdf = Pdf::new();
    let mut next_id = 1i32;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let pages_id = alloc();

    // Phase 1: fonts and logo images
    let fonts = register_fonts(&mut pdf, &mut alloc);
    let t_fonts = t0.elapsed();
    let logos = embed_logos(doc, &mut pdf, &mut alloc);
    let t_images = t0.elapsed();

    // Phase 2: lay out every page, spilling onto continuation sheets
    let mut canvas = Canvas::new(&fonts, &logos);
    for (pi, page) in doc.pages.iter().enumerate() {
        if pi > 0 {
            canvas.new_sheet();
        }
        for block in &page.blocks {
            render_block(&mut canvas, block);
        }
    }
    let all_contents = canvas.finish();
    let t_layout = t0.elapsed();

    // Phase 3: page objects
    let n = all_contents.len();
    if n > doc.pages.len() {
        log::debug!("{} document pages laid out on {n} sheets", doc.pages.len());
    }
    let page_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..n).map(|_| alloc()).collect();

    for (i, c) in all_contents.into_iter().enumerate() {
        let raw = c.finish();
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(raw.as_slice(), 6);
        pdf.stream(content_ids[i], &compressed).filter(Filter::FlateDecode);
    }

    pdf.catalog(catalog_id).pages(pages_id);
    pdf.pages(pages_id)
        .kids(page_ids.iter().copied())
        .count(n as i32);

    let mut font_pairs: Vec<(&str, Ref)> = fonts
        .values()
        .map(|entry| (entry.pdf_name.as_str(), entry.font_ref))
        .collect();
    font_pairs.sort_by(|a, b| a.0.cmp(b.0));
    let mut image_pairs: Vec<(&str, Ref)> = logos
        .values()
        .map(|img| (img.pdf_name.as_str(), img.xobj_ref))
        .collect();
    image_pairs.sort_by(|a, b| a.0.cmp(b.0));

    for i in 0..n {
        let mut page = pdf.page(page_ids[i]);
        page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .parent(pages_id)
            .contents(content_ids[i]);
        let mut resources = page.resources();
        {
            let mut fonts = resources.fonts();
            for (name, font_ref) in &font_pairs {
                fonts.pair(Name(name.as_bytes()), *font_ref);
            }
        }
        if !image_pairs.is_empty() {
            let mut xobjects = resources.x_objects();
            for (name, xobj_ref) in &image_pairs {
                xobjects.pair(Name(name.as_bytes()), *xobj_ref);
            }
        }
    }

    let t_assembly = t0.elapsed();

    log::info!(
        "Render phases: fonts={:.1}ms, images={:.1}ms, layout={:.1}ms, assembly={:.1}ms",
        t_fonts.as_secs_f64() * 1000.0,
        (t_images - t_fonts).as_secs_f64() * 1000.0,
        (t_layout - t_images).as_secs_f64() * 1000.0,
        (t_assembly - t_layout).as_secs_f64() * 1000.0,
    );

    Ok(pdf.finish())
}

fn render_block(canvas: &mut Canvas, block: &Block) {
    match block {
        Block::Header(header) => render_header(canvas, header),
        Block::Paragraph(para) => render_paragraph(canvas, para),
        Block::Table(t) => table::render_table(canvas, t),
        Block::Signatures(blocks) => render_signatures(canvas, blocks),
        Block::Footer(footer) => render_footer(canvas, footer),
    }
}

/// Draw a logo with its bottom-left corner at (x, y), `size` points tall.
/// Returns the width used.
fn draw_logo(canvas: &mut Canvas, logo: &Logo, x: f32, y: f32, size: f32) -> f32 {
    if let Logo::Image { uri, .. } = logo {
        if let Some(img) = canvas.logos.get(uri) {
            let w = size * img.aspect;
            canvas.content.save_state();
            canvas.content.transform([w, 0.0, 0.0, size, x, y]);
            canvas.content.x_object(Name(img.pdf_name.as_bytes()));
            canvas.content.restore_state();
            return w;
        }
    }

    // Monogram: a dark square with the initial centred in white.
    fill_rect(&mut canvas.content, MONOGRAM_FILL, x, y, size, size);
    let letter = Run::bold(logo.monogram().to_string(), size * 0.55).with_color(WHITE);
    let letter_w = text_width(canvas.fonts, &letter);
    let baseline = y + (size - ascender(canvas.fonts, std::slice::from_ref(&letter))) / 2.0;
    draw_text(&mut canvas.content, canvas.fonts, &letter, x + (size - letter_w) / 2.0, baseline);
    size
}

fn draw_right_aligned(canvas: &mut Canvas, runs: &[Run], baseline_y: f32) {
    let total: f32 = runs.iter().map(|r| text_width(canvas.fonts, r)).sum();
    let mut x = TEXT_RIGHT - total;
    for run in runs {
        draw_text(&mut canvas.content, canvas.fonts, run, x, baseline_y);
        x += text_width(canvas.fonts, run);
    }
}

fn render_header(canvas: &mut Canvas, header: &Header) {
    let full = header.logo.is_some() || header.company_name.is_some();

    if !full {
        canvas.ensure_space(24.0);
        let top = canvas.y;
        draw_text(
            &mut canvas.content,
            canvas.fonts,
            &Run::bold(header.title.to_uppercase(), 10.0),
            TEXT_LEFT,
            top - 10.0,
        );
        if let Some(number) = &header.contract_number {
            draw_right_aligned(
                canvas,
                &[Run::label("Sopimusnumero: ", 9.0), Run::mono(number.as_str(), 9.0)],
                top - 10.0,
            );
        }
        stroke_line(&mut canvas.content, 0.75, 0.85, TEXT_LEFT, top - 16.0, TEXT_RIGHT, top - 16.0);
        canvas.y = top - 26.0;
        return;
    }

    const LOGO_SIZE: f32 = 40.0;
    canvas.ensure_space(LOGO_SIZE + 16.0);
    let top = canvas.y;
    let mut text_x = TEXT_LEFT;
    if let Some(logo) = &header.logo {
        let used = draw_logo(canvas, logo, text_x, top - LOGO_SIZE, LOGO_SIZE);
        text_x += used + 12.0;
    }
    if let Some(name) = &header.company_name {
        let run = Run::bold(name.as_str(), 16.0);
        draw_text(&mut canvas.content, canvas.fonts, &run, text_x, top - 18.0);
    }
    if let Some(bid) = &header.business_id {
        draw_text(
            &mut canvas.content,
            canvas.fonts,
            &Run::label(format!("Y-tunnus: {bid}"), 9.0),
            text_x,
            top - 32.0,
        );
    }

    draw_right_aligned(canvas, &[Run::bold(header.title.as_str(), 14.0)], top - 14.0);
    if let Some(number) = &header.contract_number {
        draw_right_aligned(canvas, &[Run::label("Sopimusnumero", 8.0)], top - 28.0);
        draw_right_aligned(canvas, &[Run::mono(number.as_str(), 11.0)], top - 40.0);
    }

    let rule_y = top - LOGO_SIZE - 6.0;
    stroke_line(&mut canvas.content, 1.5, 0.2, TEXT_LEFT, rule_y, TEXT_RIGHT, rule_y);
    canvas.y = rule_y - 12.0;
}

/// Lay out a paragraph across `width` starting at the cursor and advance it.
fn flow_paragraph(canvas: &mut Canvas, para: &Paragraph, x: f32, width: f32) {
    let inset = if para.shading.is_some() { 8.0 } else { 0.0 };
    let lines = build_paragraph_lines(&para.runs, canvas.fonts, width - 2.0 * inset);
    let pitch = paragraph_font_size(&para.runs) * LINE_HEIGHT;
    let height = lines.len() as f32 * pitch + 2.0 * inset;

    canvas.y -= para.space_before;
    canvas.ensure_space(height);
    let top = canvas.y;

    if let Some(color) = para.shading {
        fill_rect(&mut canvas.content, color, x, top - height, width, height);
    }
    render_paragraph_lines(
        &mut canvas.content,
        &lines,
        para.alignment,
        x + inset,
        width - 2.0 * inset,
        top - inset - ascender(canvas.fonts, &para.runs),
        pitch,
        canvas.fonts,
    );
    canvas.y = top - height - para.space_after;
}

fn render_paragraph(canvas: &mut Canvas, para: &Paragraph) {
    flow_paragraph(canvas, para, TEXT_LEFT, TEXT_WIDTH);
}

const SIGNATURE_GAP: f32 = 24.0;
const SIGNATURE_PAD: f32 = 8.0;
const CAPTION_SIZE: f32 = 8.0;
/// Writing area above each line: place/date, signature, name.
const SIGNATURE_AREAS: [f32; 3] = [22.0, 40.0, 22.0];

fn signature_block_height() -> f32 {
    let fields: f32 = SIGNATURE_AREAS.iter().map(|a| CAPTION_SIZE + 4.0 + a + 8.0).sum();
    2.0 * SIGNATURE_PAD + 18.0 + fields
}

fn draw_check_mark(content: &mut Content, x: f32, y: f32) {
    let [r, g, b] = ACCENT;
    content.save_state();
    content.set_line_width(1.5);
    content.set_stroke_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
    content.move_to(x, y + 4.0);
    content.line_to(x + 3.0, y + 1.0);
    content.line_to(x + 9.0, y + 8.0);
    content.stroke();
    content.restore_state();
}

fn render_signatures(canvas: &mut Canvas, blocks: &[SignatureBlock]) {
    if blocks.is_empty() {
        return;
    }
    let n = blocks.len() as f32;
    let block_w = if blocks.len() == 1 {
        TEXT_WIDTH.min(260.0)
    } else {
        (TEXT_WIDTH - SIGNATURE_GAP * (n - 1.0)) / n
    };
    let height = signature_block_height();

    canvas.ensure_space(height);
    let top = canvas.y;
    let fonts = canvas.fonts;

    for (i, block) in blocks.iter().enumerate() {
        let x = TEXT_LEFT + i as f32 * (block_w + SIGNATURE_GAP);
        let inner_x = x + SIGNATURE_PAD;
        let inner_w = block_w - 2.0 * SIGNATURE_PAD;
        let content = &mut canvas.content;

        content.save_state();
        content.set_line_width(0.75);
        content.set_stroke_gray(0.8);
        content.rect(x, top - height, block_w, height);
        content.stroke();
        content.restore_state();

        let mut cursor = top - SIGNATURE_PAD;
        draw_text(content, fonts, &Run::bold(block.title.as_str(), 9.0), inner_x, cursor - 9.0);
        cursor -= 18.0;

        let captions = ["Paikka ja päivämäärä", "Allekirjoitus", "Nimenselvennys"];
        for (field, (caption, area)) in captions.iter().zip(SIGNATURE_AREAS).enumerate() {
            let label = Run::label(*caption, CAPTION_SIZE);
            draw_text(content, fonts, &label, inner_x, cursor - CAPTION_SIZE);
            cursor -= CAPTION_SIZE + 4.0 + area;
            let line_y = cursor;

            match field {
                0 => {
                    if let Some(place_date) = &block.place_and_date {
                        let run = Run::plain(place_date.as_str(), 10.0);
                        draw_text(content, fonts, &run, inner_x, line_y + 5.0);
                    }
                }
                1 => {
                    if let Some(sig) = &block.signature {
                        draw_check_mark(content, inner_x, line_y + 18.0);
                        let label = Run::bold(sig.label.as_str(), 10.0).with_color(ACCENT);
                        draw_text(content, fonts, &label, inner_x + 13.0, line_y + 18.0);
                        if !sig.signed_on.is_empty() {
                            let date = Run::plain(sig.signed_on.as_str(), 8.0).with_color(MUTED);
                            draw_text(content, fonts, &date, inner_x + 13.0, line_y + 6.0);
                        }
                    }
                }
                _ => {
                    if let Some(name) = &block.signer_name {
                        let run = Run::bold(name.as_str(), 10.0);
                        draw_text(content, fonts, &run, inner_x, line_y + 5.0);
                    }
                }
            }

            stroke_line(content, 0.75, 0.0, inner_x, line_y, inner_x + inner_w, line_y);
            cursor -= 8.0;
        }
    }

    canvas.y = top - height - 16.0;
}

fn render_footer(canvas: &mut Canvas, footer: &Footer) {
    const LOGO_SIZE: f32 = 24.0;
    let fonts = canvas.fonts;
    let lines_h: f32 = footer
        .lines
        .iter()
        .map(|p| p.space_before + p.space_after + paragraph_font_size(&p.runs) * LINE_HEIGHT)
        .sum();
    let height = 16.0
        + if footer.initials { 16.0 } else { 0.0 }
        + if footer.logo.is_some() { LOGO_SIZE + 8.0 } else { 0.0 }
        + lines_h
        + if footer.page_label.is_some() { 16.0 } else { 0.0 };

    canvas.y -= 16.0;
    canvas.ensure_space(height - 16.0);

    if footer.initials {
        let baseline = canvas.y - 9.0;
        draw_right_aligned(
            canvas,
            &[Run::label("NIMIKIRJAIMET ", 9.0), Run::plain("___________", 9.0)],
            baseline,
        );
        canvas.y -= 16.0;
    }

    if footer.logo.is_some() || !footer.lines.is_empty() {
        stroke_line(&mut canvas.content, 0.75, 0.85, TEXT_LEFT, canvas.y, TEXT_RIGHT, canvas.y);
        canvas.y -= 8.0;
    }

    if let Some(logo) = &footer.logo {
        let img_w = match logo {
            Logo::Image { uri, .. } => canvas
                .logos
                .get(uri)
                .map_or(LOGO_SIZE, |img| LOGO_SIZE * img.aspect),
            Logo::Monogram(_) => LOGO_SIZE,
        };
        let x = TEXT_LEFT + (TEXT_WIDTH - img_w) / 2.0;
        let y = canvas.y - LOGO_SIZE;
        draw_logo(canvas, logo, x, y, LOGO_SIZE);
        canvas.y -= LOGO_SIZE + 8.0;
    }

    for line in &footer.lines {
        let mut centred = line.clone();
        centred.alignment = Alignment::Center;
        flow_paragraph(canvas, &centred, TEXT_LEFT, TEXT_WIDTH);
    }

    if let Some(label) = &footer.page_label {
        let run = Run::label(label.as_str(), 9.0);
        let run_w = text_width(fonts, &run);
        draw_text(&mut canvas.content, fonts, &run, TEXT_RIGHT - run_w, canvas.y - 9.0);
        canvas.y -= 16.0;
    }
}
