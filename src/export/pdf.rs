//! Minimal PDF table writer for the reconciliation report.
//! Renders a title, a summary banner on the first page, and a paged
//! zebra-striped table.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

// A4 portrait geometry.
const PAGE_W: f32 = 595.0;
const PAGE_H: f32 = 842.0;
const MARGIN: f32 = 50.0;
const ROW_H: f32 = 18.0;

const FONT_SIZE: f32 = 9.0;
const HEADER_FONT_SIZE: f32 = 10.0;
const TITLE_FONT_SIZE: f32 = 14.0;
const SUMMARY_FONT_SIZE: f32 = 10.0;

pub(crate) struct ReportPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    font_id: Ref,
    page_refs: Vec<Ref>,
    next_id: i32,
}

impl ReportPdf {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            font_id,
            page_refs: Vec::new(),
            next_id: 4,
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Register a new page object; the caller fills the returned content
    /// buffer and hands it back to `end_page`.
    fn begin_page(&mut self) -> (Content, Ref) {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, PAGE_W, PAGE_H))
            .contents(content_id);
        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        (Content::new(), content_id)
    }

    fn end_page(&mut self, content: Content, content_id: Ref) {
        self.pdf.stream(content_id, &content.finish());
    }

    /// Render the whole report: summary banner on page one, then the
    /// table, paged as needed.
    pub fn write_report(
        &mut self,
        title: &str,
        summary_lines: &[String],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let col_widths = compute_col_widths(headers, rows);
        let header_cells: Vec<String> = headers.iter().map(|s| s.to_string()).collect();

        let mut remaining: &[Vec<String>] = rows;
        let mut page_no = 1;

        loop {
            let (mut content, content_id) = self.begin_page();

            draw_text(
                &mut content,
                MARGIN,
                PAGE_H - MARGIN + 15.0,
                TITLE_FONT_SIZE,
                title,
            );
            let page_label = format!("Page {}", page_no);
            draw_text(
                &mut content,
                PAGE_W - MARGIN - 60.0,
                MARGIN - 35.0,
                FONT_SIZE,
                &page_label,
            );

            let mut y = PAGE_H - MARGIN - 20.0;

            // Summary banner, first page only.
            if page_no == 1 {
                for line in summary_lines {
                    draw_text(&mut content, MARGIN, y, SUMMARY_FONT_SIZE, line);
                    y -= ROW_H;
                }
                y -= ROW_H / 2.0;
            }

            // Table header
            fill_row_band(&mut content, y, &col_widths, 0.85, 0.87, 0.90);
            draw_row(
                &mut content,
                y,
                &col_widths,
                &header_cells,
                HEADER_FONT_SIZE,
            );
            y -= ROW_H;

            // Table body
            let mut consumed = 0;
            for (i, row) in remaining.iter().enumerate() {
                if y - ROW_H < MARGIN {
                    break;
                }

                if i % 2 == 0 {
                    fill_row_band(&mut content, y, &col_widths, 0.96, 0.96, 0.96);
                }

                draw_row(&mut content, y, &col_widths, row, FONT_SIZE);
                y -= ROW_H;
                consumed += 1;
            }

            self.end_page(content, content_id);

            remaining = &remaining[consumed..];
            page_no += 1;

            if remaining.is_empty() {
                break;
            }
        }
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);

        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
        drop(pages);

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}

fn draw_text(content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
    content.begin_text();
    content.set_font(Name(b"F1"), size);
    content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
    content.show(Str(text.as_bytes()));
    content.end_text();
}

fn draw_cell_borders(content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
    content.save_state();
    content.set_stroke_rgb(0.65, 0.65, 0.65);
    content.rect(x, y, w, h);
    content.stroke();
    content.restore_state();
}

fn draw_row(content: &mut Content, y: f32, col_widths: &[f32], row: &[String], font_size: f32) {
    let mut x = MARGIN;

    for (i, text) in row.iter().enumerate() {
        let w = col_widths[i];
        draw_text(content, x + 4.0, y + 5.0, font_size, text);
        draw_cell_borders(content, x, y, w, ROW_H);
        x += w;
    }
}

fn fill_row_band(content: &mut Content, y: f32, col_widths: &[f32], r: f32, g: f32, b: f32) {
    content.save_state();
    content.set_fill_rgb(r, g, b);
    content.rect(MARGIN, y, col_widths.iter().sum(), ROW_H);
    content.fill_nonzero();
    content.restore_state();
}

/// Column widths from header + content, scaled down to fit the page.
fn compute_col_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
    let mut widths: Vec<f32> = headers.iter().map(|h| h.len() as f32 * 6.5).collect();

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = (cell.len() as f32 * 6.2).max(widths[i]);
        }
    }

    let total: f32 = widths.iter().sum();
    let max = PAGE_W - 2.0 * MARGIN;

    if total > max {
        let scale = max / total;
        for w in &mut widths {
            *w *= scale;
        }
    }

    widths
}
