//! Positioned text cells over `printpdf`.
//!
//! The invoice layout is a fixed template of absolute-positioned cells, so
//! the canvas exposes a small cell/cursor surface: coordinates are in
//! millimetres with the origin at the top-left of an A4 page, and text is
//! placed either flush-left at the cursor or right-aligned against a cell
//! edge using measured glyph widths.

use std::io::Cursor;

use printpdf::{
    IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference, Point,
};

use crate::policy::{
    MARGIN_LEFT_MM, MARGIN_RIGHT_MM, PAGE_BREAK_Y_MM, PAGE_HEIGHT_MM, PAGE_WIDTH_MM,
};
use crate::render::fonts::{FontSet, Weight};
use crate::render::RenderError;

/// Horizontal alignment of text within a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One PDF document under construction, with a cursor and an active font.
pub struct Canvas<'f> {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    fonts: &'f FontSet,
    x: f32,
    y: f32,
    weight: Weight,
    size: f32,
    pages: usize,
}

impl<'f> Canvas<'f> {
    pub fn new(title: &str, fonts: &'f FontSet) -> Result<Self, RenderError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        let regular = doc
            .add_external_font(Cursor::new(fonts.regular.bytes().to_vec()))
            .map_err(RenderError::EmbedFont)?;
        let bold = doc
            .add_external_font(Cursor::new(fonts.bold.bytes().to_vec()))
            .map_err(RenderError::EmbedFont)?;
        let layer = doc.get_page(page).get_layer(layer);

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            fonts,
            x: MARGIN_LEFT_MM,
            y: MARGIN_LEFT_MM,
            weight: Weight::Regular,
            size: 9.0,
            pages: 1,
        })
    }

    pub fn set_font(&mut self, weight: Weight, size: f32) {
        self.weight = weight;
        self.size = size;
    }

    pub fn set_xy(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Move the cursor down by `h` and back to the left margin.
    pub fn ln(&mut self, h: f32) {
        self.y += h;
        self.x = MARGIN_LEFT_MM;
    }

    /// Draw a cell of width `w` and height `h` at the cursor, then advance
    /// the cursor horizontally past it.
    pub fn cell(&mut self, w: f32, h: f32, text: &str, align: Align) {
        let text_x = match align {
            Align::Left => self.x,
            Align::Right => self.x + w - self.text_width(text),
        };
        self.draw_text(text, text_x, self.y + h * 0.8);
        self.x += w;
    }

    /// Draw a cell spanning from the cursor to the right margin, then move
    /// to the next line. Mirrors a full-width flowed cell.
    pub fn cell_ln(&mut self, h: f32, text: &str, align: Align) {
        let text_x = match align {
            Align::Left => self.x,
            Align::Right => MARGIN_RIGHT_MM - self.text_width(text),
        };
        self.draw_text(text, text_x, self.y + h * 0.8);
        self.ln(h);
    }

    /// Horizontal rule at the current y position.
    pub fn hline(&mut self, x1: f32, x2: f32) {
        let y = Mm(PAGE_HEIGHT_MM - self.y);
        let line = Line {
            points: vec![
                (Point::new(Mm(x1), y), false),
                (Point::new(Mm(x2), y), false),
            ],
            is_closed: false,
        };
        self.layer.add_line(line);
    }

    /// Whether a block of height `h` placed at the cursor would run past
    /// the page-break threshold.
    pub fn needs_page_break(&self, h: f32) -> bool {
        self.y + h > PAGE_BREAK_Y_MM
    }

    /// Start a fresh page and reset the cursor to the top-left margin. The
    /// caller is responsible for redrawing the per-page header afterwards.
    pub fn add_page(&mut self) {
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.x = MARGIN_LEFT_MM;
        self.y = MARGIN_LEFT_MM;
        self.pages += 1;
    }

    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Serialize the document to PDF bytes.
    pub fn finish(self) -> Result<Vec<u8>, RenderError> {
        self.doc.save_to_bytes().map_err(RenderError::Serialize)
    }

    fn text_width(&self, text: &str) -> f32 {
        self.fonts.asset(self.weight).text_width_mm(text, self.size)
    }

    fn draw_text(&self, text: &str, x: f32, baseline_y: f32) {
        let font = match self.weight {
            Weight::Regular => &self.regular,
            Weight::Bold => &self.bold,
        };
        self.layer
            .use_text(text, self.size, Mm(x), Mm(PAGE_HEIGHT_MM - baseline_y), font);
    }
}
