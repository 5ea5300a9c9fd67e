use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use chrono::Local;
use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};
use thiserror::Error;

use crate::reflow::{reflow, PAGE_WIDTH};

pub const PDF_FILE_NAME: &str = "analisis_jony.pdf";
pub const TEXT_FILE_NAME: &str = "conversacion_jony.txt";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no hay contenido para guardar")]
    NothingToSave,
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("PDF: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// Page geometry in PDF points.
#[derive(Debug, Clone, Copy)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
    pub font_size: f32,
    pub line_height: f32,
}

impl PageLayout {
    /// US letter, 50pt margins, 11pt text on a 14pt pitch.
    pub const LETTER: Self = Self {
        width: 612.0,
        height: 792.0,
        margin: 50.0,
        font_size: 11.0,
        line_height: 14.0,
    };

    fn top(&self) -> f32 {
        self.height - self.margin
    }
}

/// A line placed on a page at baseline `y`, measured from the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedLine<'a> {
    pub y: f32,
    pub text: &'a str,
}

/// Lay lines out top to bottom, opening a new page once the cursor falls below
/// the bottom margin.
pub fn paginate<'a>(lines: &[&'a str], layout: &PageLayout) -> Vec<Vec<PlacedLine<'a>>> {
    let mut pages = vec![Vec::new()];
    let mut y = layout.top();
    for &text in lines {
        if y < layout.margin {
            pages.push(Vec::new());
            y = layout.top();
        }
        if let Some(page) = pages.last_mut() {
            page.push(PlacedLine { y, text });
        }
        y -= layout.line_height;
    }
    pages
}

fn non_empty(content: &str) -> Result<&str, ExportError> {
    let content = content.trim();
    if content.is_empty() {
        Err(ExportError::NothingToSave)
    } else {
        Ok(content)
    }
}

/// Write the transcript to a paginated PDF at `path`, replacing any existing file.
pub fn save_pdf(content: &str, path: &Path) -> Result<(), ExportError> {
    let content = non_empty(content)?;
    let layout = PageLayout::LETTER;
    let wrapped = reflow(content, PAGE_WIDTH);
    let lines: Vec<&str> = wrapped.split('\n').collect();
    let pages = paginate(&lines, &layout);

    let page_w: Mm = Pt(layout.width).into();
    let page_h: Mm = Pt(layout.height).into();
    let title = format!("Análisis JONY {}", Local::now().format("%Y-%m-%d %H:%M"));
    let (doc, first_page, first_layer) = PdfDocument::new(title, page_w, page_h, "Layer 1");
    let font = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    for (i, page) in pages.iter().enumerate() {
        let (page_idx, layer_idx) = if i == 0 {
            (first_page, first_layer)
        } else {
            doc.add_page(page_w, page_h, "Layer 1")
        };
        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        for line in page.iter().filter(|l| !l.text.is_empty()) {
            layer.use_text(
                line.text,
                layout.font_size,
                Pt(layout.margin).into(),
                Pt(line.y).into(),
                &font,
            );
        }
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))?;
    log::debug!("Wrote {} PDF page(s) to {}", pages.len(), path.display());
    Ok(())
}

/// Write the transcript verbatim to `path`, replacing any existing file.
pub fn save_text(content: &str, path: &Path) -> Result<(), ExportError> {
    let content = non_empty(content)?;
    fs::write(path, content)?;
    Ok(())
}
