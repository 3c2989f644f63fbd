//! Page model, vertical cursor and block writer used by the report composer.
//!
//! Coordinates are millimetres on an A4 sheet with the origin at the top-left
//! corner; text `y` is the baseline. Font sizes are points.

use shared_types::PageBreakPolicy;

pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;
pub const TOP_MARGIN: f32 = 20.0;
pub const BOTTOM_MARGIN: f32 = 20.0;
pub const SIDE_MARGIN: f32 = 20.0;

/// Vertical position of the accent rule drawn above the title.
pub const ACCENT_RULE_Y: f32 = 10.0;
pub const RULE_WIDTH: f32 = 0.5;

/// Gap before and after a divider.
const RULE_SPACE_BEFORE: f32 = 3.0;
const RULE_SPACE_AFTER: f32 = 5.0;

/// Distance the cursor moves after writing a line at `font_size`.
pub fn line_advance(font_size: f32) -> f32 {
    font_size / 2.0 + 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "regular",
            FontWeight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const ACCENT_COLOR: Rgb = Rgb(249, 115, 22);
pub const DIVIDER_COLOR: Rgb = Rgb(230, 230, 230);

#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub weight: FontWeight,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub x1: f32,
    pub x2: f32,
    pub y: f32,
    pub color: Rgb,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text(TextRun),
    Rule(Rule),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// The composed report: an ordered list of pages of draw operations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDocument {
    pub width: f32,
    pub height: f32,
    pages: Vec<Page>,
}

impl ReportDocument {
    fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            pages: vec![Page::default()],
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Every text run in document order.
    pub fn text_runs(&self) -> impl Iterator<Item = &TextRun> {
        self.pages.iter().flat_map(|p| p.ops.iter()).filter_map(|op| match op {
            DrawOp::Text(run) => Some(run),
            DrawOp::Rule(_) => None,
        })
    }

    /// Textual content of the report, one entry per written line.
    pub fn text_lines(&self) -> Vec<&str> {
        self.text_runs().map(|run| run.text.as_str()).collect()
    }

    fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    fn push(&mut self, op: DrawOp) {
        if let Some(page) = self.pages.last_mut() {
            page.ops.push(op);
        }
    }
}

/// Vertical writing position on the current page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    y: f32,
    page_width: f32,
    page_height: f32,
}

impl Cursor {
    pub fn a4() -> Self {
        Self {
            y: TOP_MARGIN,
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn page_width(&self) -> f32 {
        self.page_width
    }

    pub fn page_height(&self) -> f32 {
        self.page_height
    }

    pub fn advance(&mut self, dy: f32) {
        self.y += dy;
    }

    pub fn reset(&mut self) {
        self.y = TOP_MARGIN;
    }

    /// Whether `height` more units fit above the bottom margin.
    pub fn fits(&self, height: f32) -> bool {
        self.y + height <= self.page_height - BOTTOM_MARGIN
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockItem {
    Line {
        text: String,
        indent: f32,
        size: f32,
        weight: FontWeight,
    },
    Gap(f32),
}

/// A run of lines kept together behind a single page-break check.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    estimate: f32,
    items: Vec<BlockItem>,
}

impl Block {
    /// `estimate` is the height reserved under [`PageBreakPolicy::Heuristic`].
    pub fn new(estimate: f32) -> Self {
        Self {
            estimate,
            items: Vec::new(),
        }
    }

    pub fn line(&mut self, text: impl Into<String>, indent: f32, size: f32) -> &mut Self {
        self.push_line(text.into(), indent, size, FontWeight::Normal)
    }

    pub fn bold(&mut self, text: impl Into<String>, indent: f32, size: f32) -> &mut Self {
        self.push_line(text.into(), indent, size, FontWeight::Bold)
    }

    pub fn gap(&mut self, height: f32) -> &mut Self {
        self.items.push(BlockItem::Gap(height));
        self
    }

    fn push_line(&mut self, text: String, indent: f32, size: f32, weight: FontWeight) -> &mut Self {
        self.items.push(BlockItem::Line {
            text,
            indent,
            size,
            weight,
        });
        self
    }

    pub fn estimate(&self) -> f32 {
        self.estimate
    }

    pub fn items(&self) -> &[BlockItem] {
        &self.items
    }

    /// Exact vertical space the block consumes once written.
    pub fn measured_height(&self) -> f32 {
        self.items
            .iter()
            .map(|item| match item {
                BlockItem::Line { size, .. } => line_advance(*size),
                BlockItem::Gap(h) => *h,
            })
            .sum()
    }
}

/// Document plus cursor for one composition pass.
#[derive(Debug)]
pub struct Canvas {
    document: ReportDocument,
    cursor: Cursor,
    policy: PageBreakPolicy,
}

impl Canvas {
    pub fn new(policy: PageBreakPolicy) -> Self {
        let cursor = Cursor::a4();
        Self {
            document: ReportDocument::new(cursor.page_width(), cursor.page_height()),
            cursor,
            policy,
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    /// Write one line at the cursor, then move down by `size / 2 + 2`.
    pub fn write_line(&mut self, text: impl Into<String>, x: f32, size: f32, weight: FontWeight) {
        self.document.push(DrawOp::Text(TextRun {
            x,
            y: self.cursor.y(),
            size,
            weight,
            text: text.into(),
        }));
        self.cursor.advance(line_advance(size));
    }

    /// Light divider across the printable width, with spacing around it.
    pub fn write_rule(&mut self) {
        self.cursor.advance(RULE_SPACE_BEFORE);
        let y = self.cursor.y();
        self.draw_rule(y, DIVIDER_COLOR);
        self.cursor.advance(RULE_SPACE_AFTER);
    }

    /// Accent-colored rule at `y`; the cursor does not move.
    pub fn accent_rule(&mut self, y: f32) {
        self.draw_rule(y, ACCENT_COLOR);
    }

    pub fn skip(&mut self, dy: f32) {
        self.cursor.advance(dy);
    }

    /// Start a new page when `required` units no longer fit.
    ///
    /// Returns `true` when a page break happened.
    pub fn ensure_space(&mut self, required: f32) -> bool {
        if self.cursor.fits(required) {
            return false;
        }
        self.document.add_page();
        self.cursor.reset();
        true
    }

    /// Height reserved for `block` under the active policy.
    pub fn required_height(&self, block: &Block) -> f32 {
        match self.policy {
            PageBreakPolicy::Heuristic => block.estimate(),
            PageBreakPolicy::Measured => block.measured_height(),
        }
    }

    /// Check for space once, then write every item of the block.
    pub fn write_block(&mut self, block: &Block) {
        let required = self.required_height(block);
        self.ensure_space(required);
        self.write_items(block);
    }

    /// Write a section heading that stays on the page of the entry after it.
    ///
    /// Under the measured policy the space check covers the heading and
    /// `first` together; the heuristic policy reserves the heading estimate only.
    pub fn write_heading(&mut self, heading: &Block, first: Option<&Block>) {
        let mut required = self.required_height(heading);
        if self.policy == PageBreakPolicy::Measured {
            required += first.map_or(0.0, Block::measured_height);
        }
        self.ensure_space(required);
        self.write_items(heading);
    }

    pub fn finish(self) -> ReportDocument {
        self.document
    }

    fn write_items(&mut self, block: &Block) {
        for item in block.items() {
            match item {
                BlockItem::Line {
                    text,
                    indent,
                    size,
                    weight,
                } => self.write_line(text.clone(), *indent, *size, *weight),
                BlockItem::Gap(h) => self.skip(*h),
            }
        }
    }

    fn draw_rule(&mut self, y: f32, color: Rgb) {
        let width = self.cursor.page_width();
        self.document.push(DrawOp::Rule(Rule {
            x1: SIDE_MARGIN,
            x2: width - SIDE_MARGIN,
            y,
            color,
            width: RULE_WIDTH,
        }));
    }
}
