//! Ratatui-based terminal dashboard.
//!
//! Sidebar with year/type multi-selects, and a main area that shows the
//! filtered table, one of the five charts, or the statistics block.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use plotters::style::RGBColor;
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Clear, Gauge, List, ListItem, ListState, Paragraph, Row, Table, Wrap},
};

use crate::analysis::ChartId;
use crate::config::Settings;
use crate::data::{DatasetCache, FeriadosClient, HolidaySource};
use crate::domain::kind_label;
use crate::error::{AppError, EXIT_RUNTIME};

mod plotters_chart;
pub mod state;

use plotters_chart::BarPlottersChart;
use state::{Action, DashboardState, Focus, ViewMode};

/// Start the TUI.
pub fn run(settings: Settings) -> Result<(), AppError> {
    let client = FeriadosClient::new(&settings)?;

    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to initialize terminal: {e}")))?;

    // The first fetch blocks for up to the configured timeout.
    terminal
        .draw(|f| {
            let msg = Paragraph::new(format!("Cargando datos desde {} ...", settings.url))
                .style(Style::default().fg(Color::Yellow))
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(msg, f.area());
        })
        .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Terminal draw error: {e}")))?;

    let mut app = App::new(client);
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode()
            .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::new(EXIT_RUNTIME, format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    client: FeriadosClient,
    cache: DatasetCache,
    state: DashboardState,
}

impl App {
    fn new(client: FeriadosClient) -> Self {
        let mut cache = DatasetCache::new();
        let state = DashboardState::from_outcome(cache.get_or_load(&client));
        Self { client, cache, state }
    }

    fn reload(&mut self) {
        self.cache.invalidate(self.client.endpoint());
        self.state = DashboardState::from_outcome(self.cache.get_or_load(&self.client));
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| draw(&self.state, f))
                    .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::new(EXIT_RUNTIME, format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    match self.state.handle_key(key.code) {
                        Action::Quit => break,
                        Action::Reload => {
                            // The fetch blocks; show the status first.
                            terminal
                                .draw(|f| draw(&self.state, f))
                                .map_err(|e| AppError::new(EXIT_RUNTIME, format!("Terminal draw error: {e}")))?;
                            self.reload();
                        }
                        Action::None => {}
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }
}

fn draw(state: &DashboardState, frame: &mut ratatui::Frame<'_>) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
        .split(size);

    draw_header(state, frame, chunks[0]);
    if state.has_data() {
        draw_body(state, frame, chunks[1]);
    } else {
        draw_error(state, frame, chunks[1]);
    }
    draw_footer(state, frame, chunks[2]);
}

fn draw_header(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(vec![
        Span::styled("feriados", Style::default().fg(Color::Cyan)),
        Span::raw(" | Análisis de Feriados - API Digital.gob.cl"),
    ]));

    if state.has_data() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} | cargados: {} | vista: {}",
                crate::report::shown_line(state.view.rows.len()),
                state.dataset.len(),
                state.mode.label(),
            ),
            Style::default().fg(Color::Gray),
        )));
    }

    let p = Paragraph::new(Text::from(lines)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn draw_error(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let message = state
        .error
        .clone()
        .unwrap_or_else(|| "No se pudieron cargar los datos.".to_string());
    let p = Paragraph::new(message)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Error").borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn draw_body(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(0)])
        .split(area);

    draw_filters(state, frame, chunks[0]);
    match state.mode {
        ViewMode::Data => draw_table(state, frame, chunks[1]),
        ViewMode::Loaded => draw_loaded(state, frame, chunks[1]),
        ViewMode::Charts => draw_chart(state, frame, chunks[1]),
        ViewMode::Stats => draw_stats(state, frame, chunks[1]),
    }
}

fn draw_filters(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let show_kinds = !state.kind_options.is_empty();
    let constraints = if show_kinds {
        [Constraint::Percentage(50), Constraint::Percentage(50)]
    } else {
        [Constraint::Percentage(100), Constraint::Length(0)]
    };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let years: Vec<ListItem> = state
        .year_options
        .iter()
        .map(|&y| ListItem::new(format!("{} {y}", checkbox(state.year_selected(y)))))
        .collect();
    render_select(frame, chunks[0], "Año(s)", years, state.year_cursor, state.focus == Focus::Years);

    if show_kinds {
        let kinds: Vec<ListItem> = state
            .kind_options
            .iter()
            .map(|k| {
                ListItem::new(format!(
                    "{} {}",
                    checkbox(state.kind_selected(k)),
                    kind_label(k.as_deref())
                ))
            })
            .collect();
        render_select(frame, chunks[1], "Tipo(s)", kinds, state.kind_cursor, state.focus == Focus::Kinds);
    }
}

fn render_select(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    title: &str,
    items: Vec<ListItem>,
    cursor: usize,
    focused: bool,
) {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(Block::default().title(title.to_string()).borders(Borders::ALL).border_style(border))
        .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
        .highlight_symbol("» ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(cursor));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn checkbox(on: bool) -> &'static str {
    if on { "[x]" } else { "[ ]" }
}

fn draw_table(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let header = Row::new(["fecha", "día", "nombre", "tipo", "irr."])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .view
        .rows
        .iter()
        .skip(state.table_offset)
        .map(|r| {
            Row::new(vec![
                Cell::from(r.date.to_string()),
                Cell::from(r.weekday_name),
                Cell::from(r.name.clone()),
                Cell::from(r.kind_label().to_string()),
                Cell::from(crate::report::fmt_flag(r.irrenunciable)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Length(9),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(4),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(crate::report::shown_line(state.view.rows.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

/// Every loaded holiday, independent of the sidebar selection.
fn draw_loaded(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let header = Row::new(["fecha", "nombre", "tipo", "irr.", "comentarios", "leyes"])
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .dataset
        .records()
        .iter()
        .skip(state.loaded_offset)
        .map(|r| {
            Row::new(vec![
                Cell::from(r.date.to_string()),
                Cell::from(r.name.clone()),
                Cell::from(r.kind_label().to_string()),
                Cell::from(crate::report::fmt_flag(r.irrenunciable)),
                Cell::from(r.comments.clone().unwrap_or_default()),
                Cell::from(crate::report::fmt_laws(&r.laws)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(10),
        Constraint::Min(20),
        Constraint::Length(12),
        Constraint::Length(4),
        Constraint::Length(24),
        Constraint::Length(16),
    ];
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(format!("Datos cargados ({} feriados)", state.dataset.len()))
            .borders(Borders::ALL),
    );
    frame.render_widget(table, area);
}

fn draw_chart(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!("{} [{}/5]", state.chart.title(), chart_number(state.chart)))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Clear, inner);

    let Some(chart) = state.view.chart(state.chart) else {
        return;
    };

    if chart.id.is_share() {
        draw_shares(chart, frame, inner);
        return;
    }

    let (horizontal, bar_color) = match chart.id {
        ChartId::ByYear => (false, RGBColor(70, 110, 230)),
        ChartId::ByMonth => (true, RGBColor(230, 120, 90)),
        ChartId::ByWeekday => (true, RGBColor(100, 200, 150)),
        _ => (true, RGBColor(90, 200, 120)),
    };
    frame.render_widget(
        BarPlottersChart {
            chart,
            horizontal,
            bar_color,
        },
        inner,
    );
}

/// The pie chart, rendered as one gauge per type.
fn draw_shares(chart: &crate::analysis::Chart, frame: &mut ratatui::Frame<'_>, area: Rect) {
    if chart.points.is_empty() {
        frame.render_widget(
            Paragraph::new("Sin datos para los filtros actuales.").style(Style::default().fg(Color::Yellow)),
            area,
        );
        return;
    }

    let palette = [Color::LightBlue, Color::LightMagenta, Color::LightGreen, Color::LightYellow, Color::LightCyan];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(chart.points.iter().map(|_| Constraint::Length(2)).collect::<Vec<_>>())
        .split(area);

    for (i, (point, rect)) in chart.points.iter().zip(rows.iter()).enumerate() {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(palette[i % palette.len()]))
            .ratio((point.share / 100.0).clamp(0.0, 1.0))
            .label(format!("{}: {:.1}% ({})", point.label, point.share, point.count));
        frame.render_widget(gauge, *rect);
    }
}

fn draw_stats(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let lines: Vec<Line> = crate::report::summary_lines(&state.view.summary)
        .into_iter()
        .map(Line::from)
        .collect();
    let p = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Análisis Estadístico").borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn draw_footer(state: &DashboardState, frame: &mut ratatui::Frame<'_>, area: Rect) {
    let help = if state.has_data() {
        "Tab lista  ↑/↓ mover  Espacio marcar  a/n todos/ninguno  v vista  d cargados  1-5 gráfico  PgUp/PgDn  r recargar  q salir"
    } else {
        "r reintentar  q salir"
    };
    let line = Line::from(vec![
        Span::styled(help, Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(state.status.as_str(), Style::default().fg(Color::Yellow)),
    ]);
    let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(p, area);
}

fn chart_number(id: ChartId) -> usize {
    ChartId::ALL.iter().position(|c| *c == id).map(|i| i + 1).unwrap_or(1)
}
