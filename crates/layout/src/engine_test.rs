use crate::elements::{LaidOutDocument, LayoutElement};
use crate::fonts::text_width;
use crate::{LayoutEngine, LayoutError};
use orcamento_idf::{Block, CellRange, Document, Paragraph, Table, TableAlign, TableRow, TableStyle};
use orcamento_style::{
    Border, CellStyleOverride, FontWeight, Margins, PageLayout, PageSize, ParagraphStyle,
    TextAlign, VerticalAlign,
};
use orcamento_types::Color;
use std::sync::Arc;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A 200x100pt page with 10pt margins: a 180x80pt frame.
fn small_page() -> PageLayout {
    PageLayout::new(
        PageSize::Custom {
            width: 200.0,
            height: 100.0,
        },
        Margins::all(10.0),
    )
}

fn layout(doc: &Document) -> LaidOutDocument {
    LayoutEngine::new().layout(doc).unwrap()
}

fn body() -> Arc<ParagraphStyle> {
    Arc::new(ParagraphStyle::default())
}

#[test]
fn empty_document_has_one_blank_page() {
    init_logger();
    let out = layout(&Document::new(PageLayout::default()));
    assert_eq!(out.page_count(), 1);
    assert!(out.pages[0].is_empty());
    assert_eq!(out.page_size, (595.28, 841.89));
}

#[test]
fn margins_without_room_are_rejected() {
    init_logger();
    let page = PageLayout::new(
        PageSize::Custom {
            width: 50.0,
            height: 50.0,
        },
        Margins::all(30.0),
    );
    let err = LayoutEngine::new().layout(&Document::new(page)).unwrap_err();
    assert!(matches!(err, LayoutError::NoContentArea { .. }));
}

#[test]
fn paragraph_lines_start_at_frame_origin() {
    init_logger();
    let mut doc = Document::new(small_page());
    doc.push(Paragraph::from_text("Hello", body()));
    let out = layout(&doc);
    let first = &out.pages[0][0];
    assert_eq!((first.x, first.y), (10.0, 10.0));
    assert_eq!(first.height, 12.0);
    assert_eq!(out.page_text(0), vec!["Hello"]);
}

#[test]
fn paragraph_splits_between_lines() {
    init_logger();
    // 80pt frame holds six 12pt lines.
    let text = (1..=9).map(|i| format!("line {i}")).collect::<Vec<_>>().join("\n");
    let mut doc = Document::new(small_page());
    doc.push(Paragraph::from_text(&text, body()));
    let out = layout(&doc);
    assert_eq!(out.page_count(), 2);
    assert_eq!(out.page_text(0).len(), 6);
    assert_eq!(out.page_text(1), vec!["line 7", "line 8", "line 9"]);
    assert_eq!(out.pages[1][0].y, 10.0);
}

#[test]
fn spacer_is_dropped_at_page_top_and_never_breaks() {
    init_logger();
    let mut doc = Document::new(small_page());
    doc.spacer(30.0);
    doc.push(Paragraph::from_text("first", body()));
    doc.spacer(500.0);
    let out = layout(&doc);
    assert_eq!(out.page_count(), 1);
    assert_eq!(out.pages[0][0].y, 10.0);
}

#[test]
fn space_before_is_ignored_at_page_top() {
    init_logger();
    let style = Arc::new(ParagraphStyle::new("section").bold().space_before(15.0));
    let mut doc = Document::new(small_page());
    doc.push(Paragraph::from_text("A", Arc::clone(&style)));
    doc.push(Paragraph::from_text("B", style));
    let out = layout(&doc);
    assert_eq!(out.pages[0][0].y, 10.0);
    assert_eq!(out.pages[0][1].y, 10.0 + 12.0 + 15.0);
}

#[test]
fn paragraph_alignment_within_frame() {
    init_logger();
    let style = Arc::new(ParagraphStyle::default().align(TextAlign::Right));
    let mut doc = Document::new(small_page());
    doc.push(Paragraph::from_text("end", style));
    let out = layout(&doc);
    let el = &out.pages[0][0];
    assert!((el.x + el.width - 190.0).abs() < 1e-3);
}

#[test]
fn table_is_centred_and_cells_respect_alignment() {
    init_logger();
    let table = Table::new(&[60.0, 60.0])
        .row(TableRow::new(["left", "right"]))
        .style(
            TableStyle::new()
                .cells(CellRange::column(-1), CellStyleOverride::default().align(TextAlign::Right)),
        );
    let mut doc = Document::new(small_page());
    doc.push(table);
    let out = layout(&doc);

    // Frame is 180pt wide, the table 120pt: 30pt either side.
    let left = out.pages[0].iter().find(|e| e.text().map(|t| t.content.as_str()) == Some("left")).unwrap();
    assert!((left.x - (10.0 + 30.0 + 6.0)).abs() < 1e-3);

    let right = out.pages[0].iter().find(|e| e.text().map(|t| t.content.as_str()) == Some("right")).unwrap();
    assert!((right.x + right.width - (10.0 + 30.0 + 120.0 - 6.0)).abs() < 1e-3);
}

#[test]
fn left_aligned_table_starts_at_margin() {
    init_logger();
    let table = Table::new(&[50.0]).row(TableRow::new(["x"])).align(TableAlign::Left);
    let mut doc = Document::new(small_page());
    doc.push(table);
    let out = layout(&doc);
    assert!((out.pages[0][0].x - 16.0).abs() < 1e-3);
}

#[test]
fn row_height_follows_tallest_cell_and_valign() {
    init_logger();
    let table = Table::new(&[40.0, 140.0])
        .row(TableRow::new(["k", "one\ntwo\nthree"]))
        .style(TableStyle::new().cells(
            CellRange::all(),
            CellStyleOverride::default()
                .valign(VerticalAlign::Top)
                .padding(Margins::new(3.0, 5.0, 3.0, 0.0)),
        ));
    let mut doc = Document::new(small_page());
    doc.push(table);
    doc.push(Paragraph::from_text("after", body()));
    let out = layout(&doc);

    let find = |s: &str| out.pages[0].iter().find(|e| e.text().map(|t| t.content.as_str()) == Some(s)).unwrap().y;
    assert_eq!(find("k"), find("one"));
    assert_eq!(find("k"), 13.0);
    // 3 + 3 lines x 12 + 3 = 42
    assert!((find("after") - 52.0).abs() < 1e-3);
}

#[test]
fn default_valign_is_bottom() {
    init_logger();
    let table = Table::new(&[40.0, 140.0]).row(TableRow::new(["k", "a\nb"]));
    let mut doc = Document::new(small_page());
    doc.push(table);
    let out = layout(&doc);
    let find = |s: &str| out.pages[0].iter().find(|e| e.text().map(|t| t.content.as_str()) == Some(s)).unwrap().y;
    assert_eq!(find("k"), find("b"));
}

#[test]
fn cell_text_wraps_inside_padding() {
    init_logger();
    let table = Table::new(&[60.0]).row(TableRow::new(["several words that wrap"]));
    let mut doc = Document::new(small_page());
    doc.push(table);
    let out = layout(&doc);
    let lines = out.page_text(0);
    assert!(lines.len() > 1);
    for line in lines {
        assert!(text_width(line, FontWeight::Regular, 10.0) <= 48.0);
    }
}

#[test]
fn no_wrap_cells_overflow_on_one_line() {
    init_logger();
    let table = Table::new(&[40.0])
        .row(TableRow::new(["R$ 12345,67"]))
        .style(TableStyle::new().cells(
            CellRange::all(),
            CellStyleOverride::default().align(TextAlign::Right).no_wrap(),
        ));
    let mut doc = Document::new(small_page());
    doc.push(table.align(TableAlign::Left));
    let out = layout(&doc);
    assert_eq!(out.page_text(0), vec!["R$ 12345,67"]);
    // Right-aligned overflow extends past the left padding edge.
    assert!(out.pages[0][0].x < 16.0);
}

#[test]
fn line_rules_are_emitted_at_cell_edges() {
    init_logger();
    let table = Table::new(&[50.0, 50.0])
        .row(TableRow::new(["#", "Name"]))
        .row(TableRow::new(["1", "x"]))
        .style(TableStyle::new().line_below(CellRange::row(0), Border::new(1.0, Color::BLACK)));
    let mut doc = Document::new(small_page());
    doc.push(table);
    let out = layout(&doc);
    let rules: Vec<_> = out.pages[0]
        .iter()
        .filter(|e| matches!(e.element, LayoutElement::Rule(_)))
        .collect();
    assert_eq!(rules.len(), 2);
    // Header row: 3 + 12 + 3.
    assert!(rules.iter().all(|r| (r.y - 28.0).abs() < 1e-3));
    assert_eq!(rules.iter().map(|r| r.width).sum::<f32>(), 100.0);
}

#[test]
fn tables_split_between_rows() {
    init_logger();
    // Each row is 18pt high; four fit in the 80pt frame.
    let mut table = Table::new(&[100.0]);
    for i in 0..10 {
        table.push_row(TableRow::new([format!("row {i}")]));
    }
    let mut doc = Document::new(small_page());
    doc.push(table);
    let out = layout(&doc);
    assert_eq!(out.page_count(), 3);
    assert_eq!(out.page_text(0), vec!["row 0", "row 1", "row 2", "row 3"]);
    assert_eq!(out.page_text(2), vec!["row 8", "row 9"]);
}

#[test]
fn row_taller_than_frame_fails() {
    init_logger();
    let text = vec!["x"; 10].join("\n");
    let table = Table::new(&[100.0]).row(TableRow::new([text]));
    let mut doc = Document::new(small_page());
    doc.push(table);
    let err = LayoutEngine::new().layout(&doc).unwrap_err();
    assert!(matches!(err, LayoutError::ElementTooLarge(h, f) if h > f && f == 80.0));
}

#[test]
fn malformed_tables_are_rejected() {
    init_logger();
    let engine = LayoutEngine::new();

    let mut doc = Document::new(small_page());
    doc.push(Table::new(&[50.0, 50.0]).row(TableRow::new(["only one"])));
    assert_eq!(
        engine.layout(&doc).unwrap_err(),
        LayoutError::CellCountMismatch {
            row: 0,
            expected: 2,
            found: 1
        }
    );

    let mut doc = Document::new(small_page());
    doc.push(Table::new(&[50.0, 0.0]).row(TableRow::new(["a", "b"])));
    assert!(matches!(
        engine.layout(&doc).unwrap_err(),
        LayoutError::InvalidColumnWidth { column: 1, .. }
    ));

    let mut doc = Document::new(small_page());
    doc.push(Table::new(&[50.0, f32::NAN]));
    assert!(engine.layout(&doc).is_err());
}

#[test]
fn zero_font_size_is_rejected() {
    init_logger();
    let style = Arc::new(ParagraphStyle {
        font_size: 0.0,
        ..Default::default()
    });
    let mut doc = Document::new(small_page());
    doc.push(Block::Paragraph(Paragraph::from_text("x", style)));
    assert_eq!(
        LayoutEngine::new().layout(&doc).unwrap_err(),
        LayoutError::InvalidFontSize(0.0)
    );
}
