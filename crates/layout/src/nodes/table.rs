use super::TextSetting;
use crate::elements::{LayoutElement, PositionedElement, RuleElement};
use crate::engine::LayoutContext;
use crate::text::wrap_text;
use crate::LayoutError;
use log::{debug, warn};
use orcamento_idf::{CellContent, Table, TableAlign, TableCell};
use orcamento_style::border::Border;
use orcamento_style::stylesheet::CellStyle;
use orcamento_style::text::VerticalAlign;

/// A cell after wrapping, before it is placed on a page.
struct MeasuredCell {
    style: CellStyle,
    setting: TextSetting,
    lines: Vec<String>,
    above: Option<Border>,
    below: Option<Border>,
}

impl MeasuredCell {
    fn content_height(&self) -> f32 {
        self.lines.len() as f32 * self.setting.leading
    }

    fn height(&self) -> f32 {
        self.style.padding.top + self.content_height() + self.style.padding.bottom
    }
}

struct MeasuredRow {
    height: f32,
    cells: Vec<MeasuredCell>,
}

/// Places a table row by row, moving whole rows to the next page when they
/// do not fit.
pub(crate) fn layout_table(ctx: &mut LayoutContext, table: &Table) -> Result<(), LayoutError> {
    validate(table)?;
    let rows = measure(table)?;

    let frame_width = ctx.frame().width;
    let total_width = table.total_width();
    if total_width > frame_width + 0.01 {
        warn!(
            "Table is {:.2}pt wide but the frame is only {:.2}pt; it will overflow the margins",
            total_width, frame_width
        );
    }
    let left = match table.align {
        TableAlign::Left => 0.0,
        TableAlign::Center => (frame_width - total_width) / 2.0,
        TableAlign::Right => frame_width - total_width,
    };
    debug!(
        "Table with {} row(s) x {} column(s), {:.2}pt wide",
        rows.len(),
        table.column_count(),
        total_width
    );

    for row in &rows {
        ctx.ensure_room(row.height)?;
        let top = ctx.cursor_y();
        let mut x = left;
        for (cell, column) in row.cells.iter().zip(&table.columns) {
            place_cell(ctx, cell, x, top, column.width, row.height);
            x += column.width;
        }
        ctx.advance_cursor(row.height);
    }
    Ok(())
}

fn validate(table: &Table) -> Result<(), LayoutError> {
    for (column, c) in table.columns.iter().enumerate() {
        if !(c.width > 0.0 && c.width.is_finite()) {
            return Err(LayoutError::InvalidColumnWidth {
                column,
                width: c.width,
            });
        }
    }
    for (row, r) in table.rows.iter().enumerate() {
        if r.cells.len() != table.columns.len() {
            return Err(LayoutError::CellCountMismatch {
                row,
                expected: table.columns.len(),
                found: r.cells.len(),
            });
        }
    }
    Ok(())
}

fn measure(table: &Table) -> Result<Vec<MeasuredRow>, LayoutError> {
    let (cols, rows) = (table.column_count(), table.row_count());
    let mut measured = Vec::with_capacity(rows);
    for (r, row) in table.rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(cols);
        for (c, (cell, column)) in row.cells.iter().zip(&table.columns).enumerate() {
            let style = table.style.cell_style(c, r, cols, rows);
            let (above, below) = table.style.cell_lines(c, r, cols, rows);
            let setting = setting_for(cell, &style);
            setting.validate()?;
            let inner = if style.wrap {
                column.width - style.padding.horizontal()
            } else {
                0.0
            };
            let lines = match &cell.content {
                CellContent::Empty => Vec::new(),
                CellContent::Text(t) => wrap_text(t, setting.weight, setting.size, inner),
                CellContent::Paragraph(p) => {
                    wrap_text(&p.plain_text(), setting.weight, setting.size, inner)
                }
            };
            cells.push(MeasuredCell {
                style,
                setting,
                lines,
                above,
                below,
            });
        }
        let height = cells.iter().map(MeasuredCell::height).fold(0.0, f32::max);
        measured.push(MeasuredRow { height, cells });
    }
    Ok(measured)
}

/// Text cells take their font from the cell style; paragraphs keep their own.
fn setting_for(cell: &TableCell, style: &CellStyle) -> TextSetting {
    match &cell.content {
        CellContent::Paragraph(p) => TextSetting::for_paragraph(p),
        _ => TextSetting {
            weight: style.font_weight,
            size: style.font_size,
            leading: style.effective_leading(),
            align: style.align,
            color: style.color,
        },
    }
}

fn place_cell(
    ctx: &mut LayoutContext,
    cell: &MeasuredCell,
    x: f32,
    top: f32,
    width: f32,
    row_height: f32,
) {
    let padding = cell.style.padding;
    let content_height = cell.content_height();
    let content_top = match cell.style.valign {
        VerticalAlign::Top => top + padding.top,
        VerticalAlign::Bottom => top + row_height - padding.bottom - content_height,
        VerticalAlign::Middle => {
            let room = row_height - padding.vertical() - content_height;
            top + padding.top + room / 2.0
        }
    };

    let inner_width = width - padding.horizontal();
    for (i, line) in cell.lines.iter().enumerate() {
        let y = content_top + i as f32 * cell.setting.leading;
        if let Some(element) = cell.setting.line_element(line, x + padding.left, y, inner_width) {
            ctx.push(element);
        }
    }

    if let Some(border) = cell.above {
        ctx.push(rule(border, x, top, width));
    }
    if let Some(border) = cell.below {
        ctx.push(rule(border, x, top + row_height, width));
    }
}

fn rule(border: Border, x: f32, y: f32, width: f32) -> PositionedElement {
    PositionedElement {
        x,
        y,
        width,
        height: 0.0,
        element: LayoutElement::Rule(RuleElement {
            thickness: border.width,
            color: border.color,
        }),
    }
}
