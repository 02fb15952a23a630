use chrono::NaiveDate;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::style::Stylize;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui_datatable::prelude::*;
use simplelog::Config;
use simplelog::LevelFilter;
use simplelog::WriteLogger;
use std::fs::File;
use std::io;
use std::time::Duration;

struct Item {
    id: i64,
    title: Option<String>,
    items: Vec<String>,
    created: NaiveDate,
}

impl Record for Item {
    fn field(&self, key: &str) -> Option<Value> {
        match key {
            "id" => Some(self.id.into()),
            "title" => Some(self.title.clone().into()),
            "items" => Some(self.items.clone().into()),
            "created" => Some(self.created.into()),
            _ => None,
        }
    }
}

/// Light/dark switch owned by the app, handed to the table on every frame.
struct AppMode {
    dark: bool,
}

impl ModeSource for AppMode {
    fn current_mode(&self) -> ColorMode {
        if self.dark {
            ColorMode::Dark
        } else {
            ColorMode::Light
        }
    }
}

fn main() -> io::Result<()> {
    let log_file = File::create("datatable-demo.log")?;
    if let Err(err) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
        eprintln!("logger init failed: {err}");
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal);

    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    res
}

fn data() -> Vec<Item> {
    let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap_or_default();
    vec![
        Item {
            id: 1,
            title: Some("foobar".into()),
            items: vec!["1".into(), "2".into(), "3".into()],
            created: day(1),
        },
        Item {
            id: 2,
            title: Some("something".into()),
            items: vec!["1".into(), "2".into(), "3".into()],
            created: day(7),
        },
        Item {
            id: 3,
            title: Some("fooasdasd".into()),
            items: vec!["1".into(), "2".into(), "3".into()],
            created: day(12),
        },
        Item {
            id: 4,
            title: None,
            items: Vec::new(),
            created: day(30),
        },
    ]
}

fn table() -> DataTable<Item> {
    DataTable::new()
        .column("id", MapperEntry::pass_through())
        .column(
            "title",
            MapperEntry::compute(|r: &Item, _| {
                r.title
                    .clone()
                    .map(|t| Line::from(Span::styled(t, Style::new().green())))
            }),
        )
        .column(
            "items",
            MapperEntry::compute(|r: &Item, _| r.items.join(", ")),
        )
        .column(
            "created",
            MapperEntry::pass_through().with_style(Style::new().fg(Color::Magenta)),
        )
        .column(
            "buttons",
            MapperEntry::compute(|_: &Item, _| Line::from("[ Click me ]".cyan().bold()))
                .with_style(StyleAttrs::new().alignment(ratatui::layout::Alignment::Right)),
        )
        .label("buttons", "")
        .width("id", 4)
        .key_field("id")
        .row_props(|r, _| {
            if r.title.is_none() {
                Style::new().italic()
            } else {
                Style::default()
            }
        })
        .with_options(DataTableOptions {
            title: Some("Some random data".to_string()),
            right: Some(Line::from("[ Add ]".bold())),
            ..Default::default()
        })
}

fn next_case(case: HeaderCase) -> HeaderCase {
    match case {
        HeaderCase::Upper => HeaderCase::Capitalize,
        HeaderCase::Capitalize => HeaderCase::None,
        HeaderCase::None => HeaderCase::Upper,
    }
}

fn run<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>) -> io::Result<()> {
    let mut table = table();
    let rows = data();
    let mut show_rows = true;
    let mut mode = AppMode { dark: true };

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let table_area = Rect::new(area.x, area.y, area.width, area.height.saturating_sub(1));
            let status_area = Rect::new(area.x, area.y + table_area.height, area.width, 1);
            let visible: &[Item] = if show_rows { &rows } else { &[] };

            let buf = f.buffer_mut();
            table.render_with_mode(visible, table_area, buf, &mode);
            render_status(status_area, buf, &Theme::from_source(&mode), table.options());
        })?;

        if table.options().is_loading {
            table.options_mut().spinner_tick += 1;
        }

        if !crossterm::event::poll(Duration::from_millis(80))? {
            continue;
        }
        let Event::Key(key) = crossterm::event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let options = table.options_mut();
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
            KeyCode::Char('l') => options.is_loading = !options.is_loading,
            KeyCode::Char('s') => options.striped = !options.striped,
            KeyCode::Char('f') => options.show_footer = !options.show_footer,
            KeyCode::Char('n') => options.show_empty = !options.show_empty,
            KeyCode::Char('h') => options.header_case = next_case(options.header_case),
            KeyCode::Char('e') => show_rows = !show_rows,
            KeyCode::Char('t') => mode.dark = !mode.dark,
            _ => continue,
        }
        log::debug!("toggled {:?}", key.code);
    }
}

fn render_status(
    area: Rect,
    buf: &mut ratatui::buffer::Buffer,
    theme: &Theme,
    options: &DataTableOptions,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let s = format!(
        "l loading={}  s striped={}  f footer={}  n show_empty={}  h case={:?}  e rows  t theme={:?}  q quit",
        options.is_loading,
        options.striped,
        options.show_footer,
        options.show_empty,
        options.header_case,
        theme.mode,
    );
    let span = Span::styled(s, theme.text_muted);
    buf.set_span(area.x, area.y, &span, area.width);
}
