use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    Light,
    #[default]
    Dark,
}

/// Read access to the app's current color mode.
///
/// The table never detects the mode itself; the app injects whatever source it tracks.
pub trait ModeSource {
    fn current_mode(&self) -> ColorMode;
}

impl ModeSource for ColorMode {
    fn current_mode(&self) -> ColorMode {
        *self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorToken {
    Text,
    Muted,
    Accent,
    Border,
    Stripe,
    Overlay,
}

pub fn color(mode: ColorMode, token: ColorToken) -> Color {
    match (mode, token) {
        (ColorMode::Dark, ColorToken::Text) => Color::Reset,
        (ColorMode::Dark, ColorToken::Muted) => Color::DarkGray,
        (ColorMode::Dark, ColorToken::Accent) => Color::Cyan,
        (ColorMode::Dark, ColorToken::Border) => Color::DarkGray,
        (ColorMode::Dark, ColorToken::Stripe) => Color::Rgb(38, 38, 46),
        (ColorMode::Dark, ColorToken::Overlay) => Color::Rgb(24, 24, 30),
        (ColorMode::Light, ColorToken::Text) => Color::Black,
        (ColorMode::Light, ColorToken::Muted) => Color::Gray,
        (ColorMode::Light, ColorToken::Accent) => Color::Blue,
        (ColorMode::Light, ColorToken::Border) => Color::Gray,
        (ColorMode::Light, ColorToken::Stripe) => Color::Rgb(237, 242, 247),
        (ColorMode::Light, ColorToken::Overlay) => Color::Rgb(250, 250, 252),
    }
}

#[derive(Clone, Debug)]
pub struct Theme {
    pub mode: ColorMode,
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub title: Style,
    pub header: Style,
    pub footer: Style,
    pub stripe: Style,
    pub overlay: Style,
    pub border: Style,
}

impl Theme {
    pub fn for_mode(mode: ColorMode) -> Self {
        let c = |token| color(mode, token);
        Self {
            mode,
            text_primary: Style::default().fg(c(ColorToken::Text)),
            text_muted: Style::default().fg(c(ColorToken::Muted)),
            accent: Style::default().fg(c(ColorToken::Accent)),
            title: Style::default()
                .fg(c(ColorToken::Accent))
                .add_modifier(Modifier::BOLD),
            header: Style::default().fg(c(ColorToken::Muted)),
            footer: Style::default().fg(c(ColorToken::Muted)),
            stripe: Style::default().bg(c(ColorToken::Stripe)),
            overlay: Style::default()
                .fg(c(ColorToken::Accent))
                .bg(c(ColorToken::Overlay)),
            border: Style::default().fg(c(ColorToken::Border)),
        }
    }

    pub fn from_source(source: &dyn ModeSource) -> Self {
        Self::for_mode(source.current_mode())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_mode(ColorMode::default())
    }
}
