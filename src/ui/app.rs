use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::host::WidgetHost;
use crate::models::UpdateMessage;
use crate::store::SharedStore;
use crate::view::{WidgetSize, WidgetView};

use super::helpers::clamp_lines;

/// Footer space reserved for status messages and instructions.
const FOOTER_HEIGHT: u16 = 3;

/// Sample payload the `p` key pushes, standing in for the main application
/// sending a real update.
fn demo_update() -> UpdateMessage {
    UpdateMessage {
        hymns_count: 150,
        favorites_count: 12,
        featured_hymn_number: Some("1".to_string()),
        featured_hymn_title: Some("Vous qui sur la terre !".to_string()),
        featured_hymn_lyrics: Some(
            "Vous qui sur la terre habitez, Chantez à haute voix, chantez! \
             Réjouissez-vous au Seigneur, Par un saint hymne à son honneur!"
                .to_string(),
        ),
    }
}

/// Holds the footer message text plus its severity.
struct StatusMessage {
    text: String,
    kind: StatusKind,
}

/// Severity levels shown in the footer.
enum StatusKind {
    Info,
    Error,
}

/// Preview application state: a widget host with one instance per size, plus
/// footer bookkeeping. The terminal loop owns the refresh clock and calls
/// back into `scheduled_refresh`.
pub struct App {
    host: WidgetHost,
    status: Option<StatusMessage>,
}

impl App {
    /// Register one instance of every size and render the initial views.
    pub fn new(store: SharedStore) -> Self {
        let mut host = WidgetHost::new(store);
        for size in WidgetSize::ALL {
            host.add_instance(size);
        }
        host.refresh_all();
        Self { host, status: None }
    }

    /// Scheduled-trigger entry point driven by the terminal loop's timer.
    pub fn scheduled_refresh(&mut self) {
        self.host.refresh_all();
        self.set_info("Refreshed from shared store");
    }

    /// Handle a key press; returns `true` when the app should exit.
    pub fn handle_key(&mut self, code: KeyCode) -> Result<bool> {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
            KeyCode::Char('r') => {
                self.host.refresh_all();
                self.set_info("Refreshed from shared store");
            }
            KeyCode::Char('p') => {
                let update = demo_update();
                match self.host.handle_update(&update) {
                    Ok(()) => self.set_info("Push applied: featured hymn #1"),
                    Err(err) => self.set_error(&format!("Push failed: {err}")),
                }
            }
            KeyCode::Char('c') => {
                let cleared = UpdateMessage {
                    hymns_count: demo_update().hymns_count,
                    favorites_count: demo_update().favorites_count,
                    ..UpdateMessage::default()
                };
                match self.host.handle_update(&cleared) {
                    Ok(()) => self.set_info("Push applied: featured hymn cleared"),
                    Err(err) => self.set_error(&format!("Push failed: {err}")),
                }
            }
            _ => {}
        }
        Ok(false)
    }

    fn set_info(&mut self, text: &str) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            kind: StatusKind::Info,
        });
    }

    fn set_error(&mut self, text: &str) {
        self.status = Some(StatusMessage {
            text: text.to_string(),
            kind: StatusKind::Error,
        });
    }

    /// Draw the three size panels side by side with the footer below.
    pub fn draw(&self, frame: &mut Frame<'_>) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(8), Constraint::Length(FOOTER_HEIGHT)])
            .split(frame.area());

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(22),
                Constraint::Percentage(34),
                Constraint::Percentage(44),
            ])
            .split(rows[0]);

        for (view, panel) in self.host.views().zip(panels.iter()) {
            draw_widget_panel(frame, view, *panel);
        }

        self.draw_footer(frame, rows[1]);
    }

    fn draw_footer(&self, frame: &mut Frame<'_>, area: Rect) {
        let mut lines = vec![Line::from(
            "r: refresh  p: push update  c: push clear  q: quit",
        )];
        if let Some(status) = &self.status {
            let style = match status.kind {
                StatusKind::Info => Style::default().fg(Color::Green),
                StatusKind::Error => Style::default().fg(Color::Red),
            };
            lines.push(Line::from(Span::styled(status.text.clone(), style)));
        }
        let footer = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
        frame.render_widget(footer, area);
    }
}

/// Render one widget view into a bordered panel titled by its size.
fn draw_widget_panel(frame: &mut Frame<'_>, view: &WidgetView, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(view.size.label());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let mut lines: Vec<Line<'static>> = Vec::new();

    match view.size {
        WidgetSize::Compact => lines.push(Line::from("♪")),
        WidgetSize::Medium => lines.push(Line::from(Span::styled(
            format!("♪ {}", view.header),
            Style::default().add_modifier(Modifier::BOLD),
        ))),
        WidgetSize::Expanded => {
            lines.push(Line::from(Span::styled(
                format!("♪ {}", view.header),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            if let Some(subtitle) = view.subtitle {
                lines.push(Line::from(Span::styled(
                    subtitle,
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }
    }
    lines.push(Line::from(""));

    if let Some(featured) = &view.featured {
        lines.push(Line::from(Span::styled(
            featured.number_label.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for text in clamp_lines(&featured.title, width, featured.title_line_limit) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        for text in clamp_lines(&featured.lyrics, width, featured.lyrics_line_limit) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(Line::from(""));
    } else if view.shows_stat_fallback() {
        lines.push(stat_line(view.hymns_stat_label(), view.hymns_count));
        lines.push(stat_line(view.favorites_stat_label(), view.favorites_count));
        lines.push(Line::from(""));
    }

    // The compact layout always ends with the stat row; the expanded layout
    // always shows stats separately from the featured section.
    match view.size {
        WidgetSize::Compact => lines.push(Line::from(format!(
            "♪ {}  ♥ {}",
            view.hymns_count, view.favorites_count
        ))),
        WidgetSize::Expanded => {
            lines.push(stat_line(view.hymns_stat_label(), view.hymns_count));
            lines.push(stat_line(view.favorites_stat_label(), view.favorites_count));
        }
        WidgetSize::Medium => {}
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// A `label: count` stat row; counts are always plain decimal integers.
fn stat_line(label: &str, count: i64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::DarkGray)),
        Span::styled(
            count.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])
}
