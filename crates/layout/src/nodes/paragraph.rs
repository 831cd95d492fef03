use super::TextSetting;
use crate::engine::LayoutContext;
use crate::text::wrap_text;
use crate::LayoutError;
use orcamento_idf::Paragraph;

impl TextSetting {
    pub(crate) fn for_paragraph(paragraph: &Paragraph) -> Self {
        let style = &paragraph.style;
        Self {
            weight: style.font_weight,
            size: style.font_size,
            leading: style.leading,
            align: style.align,
            color: style.color,
        }
    }
}

/// Sets a paragraph line by line, splitting it across pages between lines.
pub(crate) fn layout_paragraph(
    ctx: &mut LayoutContext,
    paragraph: &Paragraph,
) -> Result<(), LayoutError> {
    let setting = TextSetting::for_paragraph(paragraph);
    setting.validate()?;

    ctx.add_space(paragraph.style.space_before);

    let width = ctx.frame().width;
    let lines = wrap_text(&paragraph.plain_text(), setting.weight, setting.size, width);
    for line in &lines {
        ctx.ensure_room(setting.leading)?;
        let y = ctx.cursor_y();
        if let Some(element) = setting.line_element(line, 0.0, y, width) {
            ctx.push(element);
        }
        ctx.advance_cursor(setting.leading);
    }

    ctx.add_space(paragraph.style.space_after);
    Ok(())
}
