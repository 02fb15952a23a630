use ratatui::layout::Alignment;
use ratatui::style::Style;

/// Text transform applied by the painter, never by the resolvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextTransform {
    Uppercase,
}

impl TextTransform {
    pub fn apply(self, s: &str) -> String {
        match self {
            TextTransform::Uppercase => s.to_uppercase(),
        }
    }
}

/// Presentation attributes for a single cell, header, or footer label.
///
/// This is opaque to the resolvers: they only produce and merge it. `width` is a fixed size in
/// display columns (minimum, preferred, and maximum at once).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StyleAttrs {
    pub style: Style,
    pub width: Option<u16>,
    pub alignment: Option<Alignment>,
    pub transform: Option<TextTransform>,
}

impl StyleAttrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attributes carrying only a fixed size.
    pub fn sized(width: u16) -> Self {
        Self {
            width: Some(width),
            ..Self::default()
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn transform(mut self, transform: TextTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Layers `over` on top of `self`. Set fields of `over` win, styles are patched.
    pub fn merge(self, over: StyleAttrs) -> StyleAttrs {
        StyleAttrs {
            style: self.style.patch(over.style),
            width: over.width.or(self.width),
            alignment: over.alignment.or(self.alignment),
            transform: over.transform.or(self.transform),
        }
    }
}

impl From<Style> for StyleAttrs {
    fn from(style: Style) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn merge_prefers_overlay_fields() {
        let base = StyleAttrs::sized(10).style(Style::new().fg(Color::Red));
        let over = StyleAttrs::new()
            .width(4)
            .style(Style::new().bg(Color::Blue));
        let merged = base.merge(over);
        assert_eq!(merged.width, Some(4));
        assert_eq!(merged.style, Style::new().fg(Color::Red).bg(Color::Blue));
    }

    #[test]
    fn merge_keeps_base_when_overlay_unset() {
        let merged = StyleAttrs::sized(7).merge(Style::new().fg(Color::Green).into());
        assert_eq!(merged.width, Some(7));
        assert_eq!(merged.style.fg, Some(Color::Green));
    }

    #[test]
    fn uppercase_transform() {
        assert_eq!(TextTransform::Uppercase.apply("title"), "TITLE");
    }
}
