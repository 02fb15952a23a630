use ratatui::buffer::Buffer;
use ratatui::layout::Constraint;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Cell;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Row as TableRow;
use ratatui::widgets::Table;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use super::DataTable;
use super::DataTableOptions;
use super::model::ResolvedRow;
use super::model::TableBody;
use super::model::TableModel;
use crate::content::Content;
use crate::label::ResolvedLabel;
use crate::render;
use crate::style::StyleAttrs;
use crate::theme::ModeSource;
use crate::theme::Theme;
use crate::value::Record;

impl<T: Record> DataTable<T> {
    /// Resolves `rows` and paints the result into `area`.
    pub fn render(&self, rows: &[T], area: Rect, buf: &mut Buffer, theme: &Theme) {
        let model = self.build(rows);
        render_model(&model, &self.options, area, buf, theme);
    }

    /// Like [`DataTable::render`], with the theme picked from the injected color mode.
    pub fn render_with_mode(
        &self,
        rows: &[T],
        area: Rect,
        buf: &mut Buffer,
        modes: &dyn ModeSource,
    ) {
        self.render(rows, area, buf, &Theme::from_source(modes));
    }
}

/// Paints an already built [`TableModel`].
pub fn render_model(
    model: &TableModel,
    options: &DataTableOptions,
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let base_style = if options.style == Style::default() {
        theme.text_primary
    } else {
        options.style
    };
    buf.set_style(area, base_style);

    let mut body_area = area;
    if model.title.is_some() || model.right.is_some() {
        render::render_title_bar(
            Rect::new(area.x, area.y, area.width, 1),
            buf,
            model.title.as_deref(),
            model.right.as_ref(),
            theme,
        );
        body_area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
    }

    match &model.body {
        TableBody::Empty(text) => {
            Paragraph::new(text.clone())
                .style(theme.text_muted)
                .render(body_area, buf);
        }
        TableBody::Populated {
            header,
            rows,
            footer,
        } => {
            let widths = column_constraints(model, header.as_deref(), rows, footer.as_deref());
            let body_rows = rows.iter().map(|row| body_row(row, theme));
            let mut table = Table::new(body_rows, widths)
                .column_spacing(options.column_spacing)
                .style(base_style);
            if let Some(header) = header {
                table = table.header(label_row(header, theme.header));
            }
            if let Some(footer) = footer {
                table = table.footer(label_row(footer, theme.footer));
            }
            table.render(body_area, buf);
        }
    }

    if model.loading {
        render::render_loading_overlay(
            area,
            buf,
            theme,
            &options.loading_text,
            options.spinner_tick,
        );
    }
}

fn column_constraints(
    model: &TableModel,
    header: Option<&[ResolvedLabel]>,
    rows: &[ResolvedRow],
    footer: Option<&[ResolvedLabel]>,
) -> Vec<Constraint> {
    model
        .widths
        .iter()
        .enumerate()
        .map(|(col, width)| match width {
            Some(w) => Constraint::Length(*w),
            None => {
                let labels = header
                    .into_iter()
                    .chain(footer)
                    .filter_map(|labels| labels.get(col))
                    .map(|l| fitted_width(&l.content, &l.attrs));
                let cells = rows
                    .iter()
                    .filter_map(|r| r.cells.get(col))
                    .map(|c| fitted_width(&c.content, &c.attrs));
                let w = labels.chain(cells).max().unwrap_or(0);
                Constraint::Min(w.min(u16::MAX as usize) as u16)
            }
        })
        .collect()
}

fn fitted_width(content: &Content, attrs: &StyleAttrs) -> usize {
    let w = match (content, attrs.transform) {
        (Content::Text(s), Some(transform)) => UnicodeWidthStr::width(transform.apply(s).as_str()),
        _ => content.width(),
    };
    attrs.width.map(|max| w.min(max as usize)).unwrap_or(w)
}

fn body_row(row: &ResolvedRow, theme: &Theme) -> TableRow<'static> {
    let base = if row.striped {
        theme.stripe
    } else {
        Style::default()
    };
    TableRow::new(
        row.cells
            .iter()
            .map(|c| content_cell(&c.content, &c.attrs, Style::default())),
    )
    .style(base.patch(row.style))
}

fn label_row(labels: &[ResolvedLabel], section_style: Style) -> TableRow<'static> {
    TableRow::new(
        labels
            .iter()
            .map(|l| content_cell(&l.content, &l.attrs, section_style)),
    )
}

fn content_cell(content: &Content, attrs: &StyleAttrs, base: Style) -> Cell<'static> {
    let mut line = match content {
        Content::Empty => Line::default(),
        Content::Text(s) => Line::from(
            attrs
                .transform
                .map(|t| t.apply(s))
                .unwrap_or_else(|| s.clone()),
        ),
        Content::Node(line) => line.clone(),
    };
    if let Some(w) = attrs.width {
        line = render::truncate_line(&line, w);
    }
    if let Some(alignment) = attrs.alignment {
        line = line.alignment(alignment);
    }
    Cell::from(line).style(base.patch(attrs.style))
}
