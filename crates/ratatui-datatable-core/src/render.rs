use ratatui::buffer::Buffer;
use ratatui::layout::Alignment;
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: usize) -> &'static str {
    SPINNER_FRAMES[tick % SPINNER_FRAMES.len()]
}

/// Longest prefix of `input` that fits in `max_cols` display columns, and whether that is all of
/// `input`.
///
/// Zero-width chars (combining marks, joiners, variation selectors) stay with the char before
/// them. The cut stops at the first char that does not fit, even if a narrower one follows.
pub fn fit_prefix(input: &str, max_cols: usize) -> (&str, bool) {
    let mut used = 0usize;
    for (i, ch) in input.char_indices() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if w == 0 {
            continue;
        }
        if used + w > max_cols {
            return (&input[..i], false);
        }
        used += w;
    }
    (input, true)
}

/// Cuts a styled line down to at most `max_cols` display columns, keeping span styles.
///
/// A line that already fits is returned unchanged.
pub fn truncate_line(line: &Line<'static>, max_cols: u16) -> Line<'static> {
    if line.width() <= max_cols as usize {
        return line.clone();
    }
    let mut remaining = max_cols as usize;
    let mut spans: Vec<Span<'static>> = Vec::new();
    for span in &line.spans {
        let (kept, complete) = fit_prefix(span.content.as_ref(), remaining);
        if !kept.is_empty() {
            remaining -= UnicodeWidthStr::width(kept);
            spans.push(Span::styled(kept.to_string(), span.style));
        }
        if !complete {
            break;
        }
    }
    let mut out = Line::from(spans).style(line.style);
    out.alignment = line.alignment;
    out
}

/// A `w` x `h` rect centered in `area`, clamped to it.
pub fn centered_rect(area: Rect, w: u16, h: u16) -> Rect {
    let w = w.min(area.width);
    let h = h.min(area.height);
    Rect::new(
        area.x + (area.width - w) / 2,
        area.y + (area.height - h) / 2,
        w,
        h,
    )
}

/// One-line bar with `title` on the left and `right` flush right.
pub fn render_title_bar(
    area: Rect,
    buf: &mut Buffer,
    title: Option<&str>,
    right: Option<&Line<'static>>,
    theme: &Theme,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let right_w = right.map(|r| r.width()).unwrap_or(0).min(area.width as usize) as u16;
    if let Some(right) = right {
        let mut right = right.clone();
        right.style = theme.accent.patch(right.style);
        buf.set_line(area.right() - right_w, area.y, &right, right_w);
    }
    if let Some(title) = title {
        let max = area.width.saturating_sub(right_w).saturating_sub(u16::from(right_w > 0));
        let (clipped, _) = fit_prefix(title, max as usize);
        buf.set_stringn(area.x, area.y, clipped, max as usize, theme.title);
    }
}

/// Dims whatever is already drawn in `area` and puts a spinner box on top.
pub fn render_loading_overlay(
    area: Rect,
    buf: &mut Buffer,
    theme: &Theme,
    text: &str,
    tick: usize,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    buf.set_style(area, Style::default().add_modifier(Modifier::DIM));

    let label = format!("{} {}", spinner_frame(tick), text);
    let label_w = UnicodeWidthStr::width(label.as_str()) as u16;
    let line = Line::from(Span::styled(label, theme.overlay)).alignment(Alignment::Center);

    if area.height < 3 {
        let rect = centered_rect(area, label_w, 1);
        Clear.render(rect, buf);
        Paragraph::new(line).style(theme.overlay).render(rect, buf);
        return;
    }

    let rect = centered_rect(area, label_w.saturating_add(4), 3);
    Clear.render(rect, buf);
    let block = Block::bordered()
        .border_style(theme.overlay.patch(theme.border))
        .style(theme.overlay);
    let inner = block.inner(rect);
    block.render(rect, buf);
    Paragraph::new(line).render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;
    use ratatui::style::Stylize;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf.cell((x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn fit_prefix_stops_at_first_overflow() {
        assert_eq!(fit_prefix("abcdef", 3), ("abc", false));
        assert_eq!(fit_prefix("abc", 3), ("abc", true));
        assert_eq!(fit_prefix("你好", 3), ("你", false));
        assert_eq!(fit_prefix("你a", 1), ("", false));
    }

    #[test]
    fn fit_prefix_keeps_zero_width_chars_with_their_base() {
        assert_eq!(fit_prefix("cafe\u{301}", 4), ("cafe\u{301}", true));
        assert_eq!(fit_prefix("cafe\u{301}s", 4), ("cafe\u{301}", false));
        assert_eq!(fit_prefix("a\tb", 2), ("a\tb", true));
    }

    #[test]
    fn truncate_line_keeps_span_styles() {
        let line = Line::from(vec!["ab".red(), "cdef".green()]);
        let cut = truncate_line(&line, 3);
        assert_eq!(cut.spans.len(), 2);
        assert_eq!(cut.spans[0].content, "ab");
        assert_eq!(cut.spans[1].content, "c");
        assert_eq!(cut.spans[1].style.fg, Some(Color::Green));
    }

    #[test]
    fn truncate_line_leaves_fitting_line_alone() {
        let line = Line::from(vec!["cafe\u{301}".red(), "\t".into()]);
        assert_eq!(truncate_line(&line, 10), line);
    }

    #[test]
    fn truncate_line_does_not_skip_to_later_spans() {
        let line = Line::from(vec!["你a".red(), "b".green()]);
        let cut = truncate_line(&line, 1);
        assert_eq!(cut.width(), 0);
        assert!(cut.spans.is_empty());

        let line = Line::from(vec!["x你".red(), "b".green()]);
        let cut = truncate_line(&line, 2);
        assert_eq!(cut.spans.len(), 1);
        assert_eq!(cut.spans[0].content, "x");
    }

    #[test]
    fn centered_rect_clamps_to_area() {
        let r = centered_rect(Rect::new(0, 0, 10, 5), 20, 3);
        assert_eq!(r, Rect::new(0, 1, 10, 3));
    }

    #[test]
    fn title_bar_places_right_element() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        let right = Line::from("[+]");
        render_title_bar(
            buf.area,
            &mut buf,
            Some("Items"),
            Some(&right),
            &Theme::default(),
        );
        let s = row_text(&buf, 0);
        assert!(s.starts_with("Items"));
        assert!(s.ends_with("[+]"));
        assert_eq!(buf.cell((19, 0)).unwrap().fg, Theme::default().accent.fg.unwrap());
    }

    #[test]
    fn loading_overlay_shows_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 5));
        render_loading_overlay(buf.area, &mut buf, &Theme::default(), "Loading", 0);
        let s = row_text(&buf, 2);
        assert!(s.contains("Loading"));
        assert!(s.contains(SPINNER_FRAMES[0]));
        let theme = Theme::default();
        let corner = (0..buf.area.width)
            .find(|&x| buf.cell((x, 1)).unwrap().symbol() == "┌")
            .unwrap();
        assert_eq!(buf.cell((corner, 1)).unwrap().fg, theme.border.fg.unwrap());
    }

    #[test]
    fn loading_overlay_fits_single_line() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 1));
        render_loading_overlay(buf.area, &mut buf, &Theme::default(), "Loading", 1);
        assert!(row_text(&buf, 0).contains("Loading"));
    }
}
