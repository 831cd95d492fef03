//! Composes a quote into the ordered blocks of an A4 document.

use crate::format::{format_currency, format_date, format_quantity};
use crate::model::{AmountOverflow, Quote};
use crate::profile::IssuerProfile;
use orcamento_idf::{
    CellRange, Document, Paragraph, Table, TableCell, TableRow, TableStyle,
};
use orcamento_style::{
    cm, Border, CellStyleOverride, Margins, PageLayout, PageSize, ParagraphStyle, Stylesheet,
    TextAlign, VerticalAlign,
};
use orcamento_types::Color;
use rust_decimal::Decimal;

/// Days a quote stays valid. No such field exists on the model.
pub const VALIDITY_DAYS: u32 = 30;
/// Shown for client details the model does not store.
pub const NOT_INFORMED: &str = "Not informed";
pub const NO_ITEMS: &str = "No item added";
pub const NO_OBSERVATIONS: &str = "No observation provided.";
pub const BRAND_COLOR: Color = Color::rgb(0x2c, 0x3e, 0x50);

pub const CLIENT_SECTION_TITLE: &str = "Client details";
pub const ITEMS_SECTION_TITLE: &str = "Items";
pub const OBSERVATIONS_SECTION_TITLE: &str = "Observations";
pub const ITEM_HEADER: [&str; 5] = ["#", "Name", "Qty", "Unit Value", "Subtotal"];

const STYLE_BRAND: &str = "brand";
const STYLE_COMPANY: &str = "company";
const STYLE_CONTACT: &str = "contact";
const STYLE_SECTION: &str = "section";
const STYLE_NORMAL: &str = "normal";

/// A4 with 2cm side and bottom margins and a 1.5cm top margin.
pub fn quote_page_layout() -> PageLayout {
    PageLayout::new(
        PageSize::A4,
        Margins::new(cm(1.5), cm(2.0), cm(2.0), cm(2.0)),
    )
}

fn quote_stylesheet() -> Stylesheet {
    let mut sheet = Stylesheet::new(quote_page_layout());
    sheet.insert(
        ParagraphStyle::new(STYLE_BRAND)
            .bold()
            .font_size(12.0)
            .color(BRAND_COLOR),
    );
    sheet.insert(ParagraphStyle::new(STYLE_COMPANY).font_size(9.0).leading(11.0));
    sheet.insert(
        ParagraphStyle::new(STYLE_CONTACT)
            .font_size(9.0)
            .leading(11.0)
            .align(TextAlign::Right),
    );
    sheet.insert(
        ParagraphStyle::new(STYLE_SECTION)
            .bold()
            .font_size(11.0)
            .space_before(15.0)
            .space_after(8.0),
    );
    sheet.insert(ParagraphStyle::new(STYLE_NORMAL).font_size(10.0).leading(12.0));
    sheet
}

fn padding(top: f32, right: f32, bottom: f32, left: f32) -> CellStyleOverride {
    CellStyleOverride::default().padding(Margins::new(top, right, bottom, left))
}

fn black_rule() -> Border {
    Border::new(1.0, Color::BLACK)
}

/// Builds the block list for a quote: header, metadata, client, items,
/// totals, observations and signatures, separated by fixed spacers.
pub struct QuoteDocumentBuilder<'a> {
    profile: &'a IssuerProfile,
    styles: Stylesheet,
}

impl<'a> QuoteDocumentBuilder<'a> {
    pub fn new(profile: &'a IssuerProfile) -> Self {
        Self {
            profile,
            styles: quote_stylesheet(),
        }
    }

    /// Sets the document on another page size or margins. Column widths stay
    /// fixed, so narrow frames make tables overflow.
    pub fn with_page_layout(mut self, page: PageLayout) -> Self {
        self.styles.page = page;
        self
    }

    /// Fails only when an item subtotal or the quote total is out of range.
    pub fn build(&self, quote: &Quote) -> Result<Document, AmountOverflow> {
        let mut doc =
            Document::new(self.styles.page).with_title(format!("Quote {}", quote.id));

        doc.push(self.header_table());
        doc.spacer(20.0);

        doc.push(metadata_table(quote));
        doc.spacer(20.0);

        doc.push(self.section_title(CLIENT_SECTION_TITLE));
        doc.push(client_table(quote));
        doc.spacer(25.0);

        doc.push(self.section_title(ITEMS_SECTION_TITLE));
        doc.push(items_table(quote)?);
        doc.spacer(20.0);

        doc.push(totals_table(quote)?);
        doc.spacer(20.0);

        doc.push(self.section_title(OBSERVATIONS_SECTION_TITLE));
        doc.push(self.observations(quote));
        doc.spacer(30.0);

        doc.push(self.signature_table(quote));

        log::debug!(
            "Composed quote {} into {} block(s)",
            quote.id,
            doc.blocks.len()
        );
        Ok(doc)
    }

    fn section_title(&self, title: &str) -> Paragraph {
        Paragraph::from_text(title, self.styles.get(STYLE_SECTION))
    }

    fn header_table(&self) -> Table {
        Table::new(&[cm(4.0), cm(8.0), cm(5.0)])
            .row(TableRow::new([
                Paragraph::from_text(&self.profile.brand_mark, self.styles.get(STYLE_BRAND)),
                Paragraph::from_text(&self.profile.identity_text(), self.styles.get(STYLE_COMPANY)),
                Paragraph::from_text(&self.profile.contact_text(), self.styles.get(STYLE_CONTACT)),
            ]))
            .style(
                TableStyle::new()
                    .cells(CellRange::all(), CellStyleOverride::default().valign(VerticalAlign::Top))
                    .cells(CellRange::all(), padding(0.0, 0.0, 10.0, 0.0)),
            )
    }

    fn observations(&self, quote: &Quote) -> Paragraph {
        let text = if quote.description.trim().is_empty() {
            NO_OBSERVATIONS
        } else {
            quote.description.as_str()
        };
        Paragraph::from_text(text, self.styles.get(STYLE_NORMAL))
    }

    fn signature_table(&self, quote: &Quote) -> Table {
        Table::new(&[cm(8.5), cm(8.5)])
            .row(TableRow::new([
                self.profile.name.as_str(),
                quote.client_name.as_str(),
            ]))
            .style(
                TableStyle::new()
                    .cells(
                        CellRange::all(),
                        CellStyleOverride::bold().font_size(11.0).align(TextAlign::Center),
                    )
                    .line_above(CellRange::all(), black_rule())
                    .cells(CellRange::all(), padding(5.0, 0.0, 0.0, 0.0)),
            )
    }
}

fn metadata_table(quote: &Quote) -> Table {
    Table::new(&[cm(6.0), cm(5.0), cm(6.0)])
        .row(TableRow::new([
            format!("Quote: {}", quote.id),
            format!("Date: {}", format_date(quote.created_on())),
            format!("Validity: {} days", VALIDITY_DAYS),
        ]))
        .style(
            TableStyle::new()
                .cells(CellRange::all(), CellStyleOverride::bold().font_size(11.0))
                .cells(CellRange::cell(0, 0), CellStyleOverride::default().align(TextAlign::Left))
                .cells(CellRange::cell(1, 0), CellStyleOverride::default().align(TextAlign::Center))
                .cells(CellRange::cell(2, 0), CellStyleOverride::default().align(TextAlign::Right))
                .cells(CellRange::all(), padding(5.0, 0.0, 5.0, 0.0)),
        )
}

fn client_table(quote: &Quote) -> Table {
    Table::new(&[cm(2.5), cm(6.0), cm(2.0), cm(6.5)])
        .row(TableRow::new(vec![
            TableCell::text("Name"),
            TableCell::text(quote.client_name.as_str()),
            TableCell::empty(),
            TableCell::empty(),
        ]))
        .row(TableRow::new(["Phone", NOT_INFORMED, "Email", NOT_INFORMED]))
        .row(TableRow::new(vec![
            TableCell::text("Tax ID"),
            TableCell::text(NOT_INFORMED),
            TableCell::empty(),
            TableCell::empty(),
        ]))
        .row(TableRow::new(vec![
            TableCell::text("Address"),
            TableCell::text(NOT_INFORMED),
            TableCell::empty(),
            TableCell::empty(),
        ]))
        .style(
            TableStyle::new()
                .cells(CellRange::all(), CellStyleOverride::default().font_size(10.0))
                .cells(CellRange::column(0), CellStyleOverride::bold())
                .cells(CellRange::cell(2, 1), CellStyleOverride::bold())
                .cells(
                    CellRange::all(),
                    CellStyleOverride::default()
                        .align(TextAlign::Left)
                        .valign(VerticalAlign::Top),
                )
                .cells(CellRange::all(), padding(3.0, 5.0, 3.0, 0.0)),
        )
}

/// Rows of the items table below the header: one per service, or a single
/// placeholder row when there are none.
pub fn item_rows(quote: &Quote) -> Result<Vec<[String; 5]>, AmountOverflow> {
    if quote.services.is_empty() {
        return Ok(vec![[
            "1".to_string(),
            NO_ITEMS.to_string(),
            "0".to_string(),
            format_currency(Decimal::ZERO),
            format_currency(Decimal::ZERO),
        ]]);
    }
    quote
        .services
        .iter()
        .enumerate()
        .map(|(i, service)| {
            Ok([
                (i + 1).to_string(),
                service.name.clone(),
                format_quantity(service.quantity),
                format_currency(service.unit_price),
                format_currency(service.subtotal()?),
            ])
        })
        .collect()
}

fn items_table(quote: &Quote) -> Result<Table, AmountOverflow> {
    let mut table = Table::new(&[cm(1.0), cm(9.0), cm(1.5), cm(2.5), cm(3.0)])
        .row(TableRow::new(ITEM_HEADER));
    for row in item_rows(quote)? {
        table.push_row(TableRow::new(row));
    }
    Ok(table.style(
        TableStyle::new()
            .cells(CellRange::row(0), CellStyleOverride::bold().font_size(10.0))
            .cells(CellRange::column(0), CellStyleOverride::default().align(TextAlign::Center))
            .cells(CellRange::column(1), CellStyleOverride::default().align(TextAlign::Left))
            .cells(CellRange::column(2), CellStyleOverride::default().align(TextAlign::Center))
            .cells(CellRange::column(3), CellStyleOverride::default().align(TextAlign::Right))
            .cells(CellRange::column(4), CellStyleOverride::default().align(TextAlign::Right))
            .cells(CellRange::new((2, 1), (-1, -1)), CellStyleOverride::default().no_wrap())
            .cells(CellRange::rows_from(1), CellStyleOverride::default().font_size(10.0))
            .line_below(CellRange::row(0), black_rule())
            .cells(CellRange::all(), padding(4.0, 3.0, 4.0, 3.0))
            .cells(CellRange::all(), CellStyleOverride::default().valign(VerticalAlign::Top)),
    ))
}

fn totals_table(quote: &Quote) -> Result<Table, AmountOverflow> {
    let subtotal = quote.subtotal()?;
    let total = quote.total()?;
    Ok(Table::new(&[cm(2.0), cm(2.5), cm(1.5), cm(2.0)])
        .row(TableRow::new([
            "Subtotal:".to_string(),
            format_currency(subtotal),
            "Total:".to_string(),
            format_currency(total),
        ]))
        .style(
            TableStyle::new()
                .cells(
                    CellRange::all(),
                    CellStyleOverride::bold()
                        .font_size(10.0)
                        .align(TextAlign::Right)
                        .no_wrap(),
                )
                .cells(CellRange::all(), padding(5.0, 3.0, 5.0, 3.0)),
        ))
}
