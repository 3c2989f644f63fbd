use std::sync::LazyLock;

use chrono::Datelike;
use ecow::EcoVec;
use shared_types::AppError;
use typst::diag::{FileError, FileResult, SourceDiagnostic};
use typst::foundations::{Bytes, Datetime};
use typst::layout::PagedDocument;
use typst::syntax::{FileId, Source};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, LibraryExt, World};

use crate::report::canvas::{DrawOp, ReportDocument, Rule, TextRun};

/// Escape a value for use inside a Typst string literal.
pub fn escape_typst_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}

/// Translate a composed report into Typst markup.
///
/// Every draw operation becomes an absolutely placed element on a margin-less
/// page; text edges are pinned to the baseline so `dy` matches the cursor.
pub fn build_report_source(document: &ReportDocument) -> String {
    let mut src = format!(
        "#set page(width: {:.2}mm, height: {:.2}mm, margin: 0pt)\n\
         #set text(top-edge: \"baseline\", bottom-edge: \"baseline\", lang: \"fr\")\n\n",
        document.width, document.height
    );

    for (index, page) in document.pages().iter().enumerate() {
        if index > 0 {
            src.push_str("#pagebreak()\n");
        }
        for op in &page.ops {
            match op {
                DrawOp::Text(run) => src.push_str(&place_text(run)),
                DrawOp::Rule(rule) => src.push_str(&place_rule(rule)),
            }
            src.push('\n');
        }
    }

    src
}

fn place_text(run: &TextRun) -> String {
    format!(
        "#place(top + left, dx: {:.2}mm, dy: {:.2}mm, text(size: {:.1}pt, weight: \"{}\", \"{}\"))",
        run.x,
        run.y,
        run.size,
        run.weight.as_str(),
        escape_typst_string(&run.text),
    )
}

fn place_rule(rule: &Rule) -> String {
    format!(
        "#place(top + left, line(start: ({x1:.2}mm, {y:.2}mm), end: ({x2:.2}mm, {y:.2}mm), stroke: {w:.2}mm + rgb({r}, {g}, {b})))",
        x1 = rule.x1,
        x2 = rule.x2,
        y = rule.y,
        w = rule.width,
        r = rule.color.0,
        g = rule.color.1,
        b = rule.color.2,
    )
}

// ---------------------------------------------------------------------------
// Static singletons, initialized once and reused across all requests
// ---------------------------------------------------------------------------

static FONTS: LazyLock<Vec<Font>> = LazyLock::new(|| {
    typst_assets::fonts()
        .flat_map(|data| Font::iter(Bytes::new(data)))
        .collect()
});

static FONT_BOOK: LazyLock<LazyHash<FontBook>> = LazyLock::new(|| {
    LazyHash::new(FontBook::from_fonts(FONTS.iter()))
});

static LIBRARY: LazyLock<LazyHash<Library>> = LazyLock::new(|| {
    LazyHash::new(Library::default())
});

// ---------------------------------------------------------------------------
// World implementation for in-process Typst compilation
// ---------------------------------------------------------------------------

struct ReportWorld {
    source: Source,
}

impl ReportWorld {
    fn new(source_text: &str) -> Self {
        Self {
            source: Source::detached(source_text),
        }
    }
}

impl World for ReportWorld {
    fn library(&self) -> &LazyHash<Library> {
        &LIBRARY
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &FONT_BOOK
    }

    fn main(&self) -> FileId {
        self.source.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.source.id() {
            Ok(self.source.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rooted_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rooted_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        FONTS.get(index).cloned()
    }

    fn today(&self, offset: Option<i64>) -> Option<Datetime> {
        let now = chrono::Utc::now();
        let naive = match offset {
            Some(hours) => {
                let tz = chrono::FixedOffset::east_opt((hours as i32) * 3600)?;
                now.with_timezone(&tz).naive_local()
            }
            None => now.naive_utc(),
        };
        Datetime::from_ymd(naive.year(), naive.month() as u8, naive.day() as u8)
    }
}

// ---------------------------------------------------------------------------
// Public compilation entry points
// ---------------------------------------------------------------------------

/// Compile a Typst source string into PDF bytes.
///
/// Compilation is CPU-bound and runs on a blocking thread.
pub async fn compile_typst(source: &str) -> Result<Vec<u8>, AppError> {
    let source = source.to_owned();

    tokio::task::spawn_blocking(move || compile_typst_sync(&source))
        .await
        .map_err(|e| AppError::internal(format!("Typst task panicked: {e}")))?
}

fn compile_typst_sync(source: &str) -> Result<Vec<u8>, AppError> {
    let world = ReportWorld::new(source);

    let warned = typst::compile::<PagedDocument>(&world);
    let document = warned
        .output
        .map_err(|diagnostics| format_diagnostics("Typst compilation failed", &diagnostics))?;

    typst_pdf::pdf(&document, &typst_pdf::PdfOptions::default())
        .map_err(|diagnostics| format_diagnostics("PDF export failed", &diagnostics))
}

fn format_diagnostics(prefix: &str, diagnostics: &EcoVec<SourceDiagnostic>) -> AppError {
    let msgs: Vec<String> = diagnostics.iter().map(|d| d.message.to_string()).collect();
    AppError::composition(format!("{prefix}: {}", msgs.join("; ")))
}
