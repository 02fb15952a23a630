use ratatui::text::Line;
use ratatui::text::Span;

use crate::content::Content;
use crate::style::StyleAttrs;
use crate::style::TextTransform;

/// How a plain-text header label is cased.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum HeaderCase {
    /// Uppercased at paint time; the label text itself is left alone.
    #[default]
    Upper,
    /// First character uppercased, the rest lowercased.
    Capitalize,
    None,
}

/// An explicit header/footer label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Label {
    Text(String),
    Node(Line<'static>),
}

impl From<&str> for Label {
    fn from(v: &str) -> Self {
        Label::Text(v.to_string())
    }
}

impl From<String> for Label {
    fn from(v: String) -> Self {
        Label::Text(v)
    }
}

impl From<Line<'static>> for Label {
    fn from(v: Line<'static>) -> Self {
        Label::Node(v)
    }
}

impl From<Span<'static>> for Label {
    fn from(v: Span<'static>) -> Self {
        Label::Node(Line::from(v))
    }
}

/// A resolved header or footer label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedLabel {
    pub content: Content,
    pub attrs: StyleAttrs,
}

/// Resolves the label shown for column `key`.
///
/// Node labels are returned untouched and ignore `case`. Text labels, or the key itself when no
/// label is set, are cased per `case`; [`HeaderCase::Upper`] only sets a
/// [`TextTransform::Uppercase`] attribute. `header_props` is layered on top.
pub fn resolve_label(
    key: &str,
    label: Option<&Label>,
    header_props: Option<&StyleAttrs>,
    case: HeaderCase,
) -> ResolvedLabel {
    let props = header_props.copied().unwrap_or_default();
    let base = match label {
        Some(Label::Node(line)) => {
            return ResolvedLabel {
                content: Content::Node(line.clone()),
                attrs: props,
            };
        }
        Some(Label::Text(s)) => s.as_str(),
        None => key,
    };

    let (text, attrs) = match case {
        HeaderCase::Upper => (
            base.to_string(),
            StyleAttrs::new().transform(TextTransform::Uppercase),
        ),
        HeaderCase::Capitalize => (capitalize(base), StyleAttrs::new()),
        HeaderCase::None => (base.to_string(), StyleAttrs::new()),
    };
    let content = if text.is_empty() {
        Content::Empty
    } else {
        Content::Text(text)
    };
    ResolvedLabel {
        content,
        attrs: attrs.merge(props),
    }
}

/// Uppercases the first character and lowercases the rest.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
