//! Terminal preview for kuler-swatch.
//!
//! Shows a random scheme next to its complementary scheme as colored blocks,
//! with the channels of the selected swatch underneath. It uses `ratatui` and
//! `crossterm` for drawing and input.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CEvent, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color as RColor, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::{Frame, Terminal};
use tracing::debug;

use kuler_swatch::color_utils::swatch_rgb8;
use kuler_swatch::{tools, Config, Scheme, Swatch};

/// The preview's state.
pub struct App {
    pub config: Config,
    pub scheme: Scheme,
    pub complement: Scheme,
    /// Index of the highlighted swatch.
    pub selected: usize,
    /// Indicates whether the UI needs to be redrawn.
    pub dirty: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let scheme = tools::random_scheme();
        let complement = scheme.complementary();
        App {
            config,
            scheme,
            complement,
            selected: 0,
            dirty: true,
        }
    }

    /// Replace the scheme with a fresh random one.
    pub fn regenerate(&mut self) {
        self.scheme = tools::random_scheme();
        self.complement = self.scheme.complementary();
        debug!(colors = ?self.scheme.hex_colors(), "regenerated preview scheme");
        self.dirty = true;
    }

    pub fn next(&mut self) {
        let len = self.scheme.swatches.len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
            self.dirty = true;
        }
    }

    pub fn previous(&mut self) {
        let len = self.scheme.swatches.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
            self.dirty = true;
        }
    }

    fn details(&self) -> String {
        let mut lines = Vec::new();
        let rows = [("Swatch", &self.scheme), ("Complement", &self.complement)];
        for (label, scheme) in rows {
            if let Some(swatch) = scheme.swatches.get(self.selected) {
                lines.push(describe(label, swatch, self.config.show_hsl));
            }
        }
        lines.join("\n")
    }
}

fn describe(label: &str, swatch: &Swatch, show_hsl: bool) -> String {
    let (r, g, b) = swatch.channels();
    let mut line = format!(
        "{label:<11} #{}  rgb({r:.3}, {g:.3}, {b:.3})  brightness {:.3}",
        swatch.hex_color,
        tools::brightness(swatch)
    );
    if show_hsl {
        let hsl = tools::to_hsl(swatch);
        line.push_str(&format!(
            "  hsl({:.1}, {:.3}, {:.3})",
            hsl.channel_1, hsl.channel_2, hsl.channel_3
        ));
    }
    line
}

fn render_row(f: &mut Frame, area: Rect, title: &str, scheme: &Scheme, app: &App) {
    let outer = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title_alignment(Alignment::Center);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let mut constraints: Vec<Constraint> = scheme
        .swatches
        .iter()
        .map(|_| Constraint::Length(app.config.block_width))
        .collect();
    constraints.push(Constraint::Min(0));
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (i, swatch) in scheme.swatches.iter().enumerate() {
        let (r, g, b) = swatch_rgb8(swatch);
        let fg = if tools::brightness(swatch) > 0.5 {
            RColor::Black
        } else {
            RColor::White
        };
        let mut block = Block::default().style(Style::default().bg(RColor::Rgb(r, g, b)));
        if i == app.selected {
            block = block
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(fg));
        }
        let cell = Paragraph::new(swatch.hex_color.as_str())
            .block(block)
            .style(Style::default().fg(fg).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(cell, cells[i]);
    }
}

/// Draws the preview layout onto the frame.
pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let header = Paragraph::new("kuler-swatch")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(RColor::Yellow)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(header, chunks[0]);

    render_row(f, chunks[1], "Scheme", &app.scheme, app);
    render_row(f, chunks[2], "Complementary", &app.complement, app);

    let details = Paragraph::new(app.details())
        .block(
            Block::default()
                .title("Selected Swatch")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(RColor::LightBlue))
        .alignment(Alignment::Left);
    f.render_widget(details, chunks[3]);

    let info_text = "Press 'q' to exit. Use ←→ to select. Press 'r' for a new scheme.";
    let info = Paragraph::new(info_text)
        .block(
            Block::default()
                .title("Instructions")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(RColor::Gray))
        .alignment(Alignment::Center);
    f.render_widget(info, chunks[4]);
}

/// Runs the preview loop, handling events and rendering.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms);
    let mut last_tick = Instant::now();
    let mut should_quit = false;

    while !should_quit {
        let now = Instant::now();
        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if app.dirty || last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| ui(f, &app))?;
            app.dirty = false;
            last_tick = now;
        }

        if event::poll(timeout)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => should_quit = true,
                        KeyCode::Char('r') => app.regenerate(),
                        KeyCode::Right | KeyCode::Down => app.next(),
                        KeyCode::Left | KeyCode::Up => app.previous(),
                        _ => {}
                    }
                }
            }
        }
    }
    Ok(())
}

/// Launches the preview in raw mode and restores the terminal upon exit.
pub fn show_preview(config: &Config) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config.clone()));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        let mut app = App::new(Config::default());
        app.previous();
        assert_eq!(app.selected, 4);
        app.next();
        assert_eq!(app.selected, 0);
    }

    #[test]
    fn complement_follows_regeneration() {
        let mut app = App::new(Config::default());
        app.regenerate();
        assert_eq!(app.complement, app.scheme.complementary());
    }

    #[test]
    fn details_mention_both_swatches() {
        let app = App::new(Config::default());
        let details = app.details();
        assert!(details.contains("Swatch"));
        assert!(details.contains("Complement"));
        assert!(details.contains("hsl("));
    }
}
