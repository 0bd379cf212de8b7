//! Dashboard state and key handling, independent of the terminal.

use crossterm::event::KeyCode;

use crate::analysis::ChartId;
use crate::app::pipeline::{DashboardView, build_view};
use crate::data::LoadOutcome;
use crate::domain::{FilterCriteria, HolidayDataset, kind_label};

const PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Years,
    Kinds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Data,
    /// Every loaded holiday, ignoring the filters.
    Loaded,
    Charts,
    Stats,
}

impl ViewMode {
    fn next(self) -> Self {
        match self {
            ViewMode::Data => ViewMode::Loaded,
            ViewMode::Loaded => ViewMode::Charts,
            ViewMode::Charts => ViewMode::Stats,
            ViewMode::Stats => ViewMode::Data,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewMode::Data => "Datos",
            ViewMode::Loaded => "Datos cargados",
            ViewMode::Charts => "Gráficos",
            ViewMode::Stats => "Estadísticas",
        }
    }
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Reload,
    Quit,
}

pub struct DashboardState {
    pub dataset: HolidayDataset,
    /// Set when the load failed; the dashboard is replaced by this message.
    pub error: Option<String>,
    pub year_options: Vec<i32>,
    pub kind_options: Vec<Option<String>>,
    pub criteria: FilterCriteria,
    pub focus: Focus,
    pub year_cursor: usize,
    pub kind_cursor: usize,
    pub mode: ViewMode,
    pub chart: ChartId,
    pub table_offset: usize,
    pub loaded_offset: usize,
    pub view: DashboardView,
    pub status: String,
}

impl DashboardState {
    pub fn from_outcome(outcome: &LoadOutcome) -> Self {
        let dataset = outcome.dataset.clone();
        let criteria = FilterCriteria::all_from(&dataset);
        let view = build_view(&dataset, &criteria);
        let status = match &outcome.error {
            Some(_) => "No se pudieron cargar los datos.".to_string(),
            None => format!("{} feriados cargados", dataset.len()),
        };
        Self {
            year_options: dataset.years(),
            kind_options: dataset.kinds(),
            dataset,
            error: outcome.error.clone(),
            criteria,
            focus: Focus::Years,
            year_cursor: 0,
            kind_cursor: 0,
            mode: ViewMode::Data,
            chart: ChartId::ByKind,
            table_offset: 0,
            loaded_offset: 0,
            view,
            status,
        }
    }

    pub fn has_data(&self) -> bool {
        self.error.is_none() && !self.dataset.is_empty()
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return Action::Quit,
            KeyCode::Char('r') => {
                self.status = "Recargando datos...".to_string();
                return Action::Reload;
            }
            _ => {}
        }

        if !self.has_data() {
            return Action::None;
        }

        match code {
            KeyCode::Tab | KeyCode::BackTab => self.switch_focus(),
            KeyCode::Up => self.move_cursor(-1),
            KeyCode::Down => self.move_cursor(1),
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_current(),
            KeyCode::Char('a') => self.select_all(true),
            KeyCode::Char('n') => self.select_all(false),
            KeyCode::Char('v') => {
                self.mode = self.mode.next();
                self.status = format!("vista: {}", self.mode.label());
            }
            KeyCode::Char('c') => {
                self.chart = self.chart.next();
                self.mode = ViewMode::Charts;
            }
            KeyCode::Char(c @ '1'..='5') => {
                let idx = c as usize - '1' as usize;
                self.chart = ChartId::ALL[idx];
                self.mode = ViewMode::Charts;
                self.status = self.chart.title().to_string();
            }
            KeyCode::Char('d') => {
                self.mode = ViewMode::Loaded;
                self.status = format!("vista: {}", self.mode.label());
            }
            KeyCode::PageDown => {
                if self.mode == ViewMode::Loaded {
                    let max = self.dataset.len().saturating_sub(1);
                    self.loaded_offset = (self.loaded_offset + PAGE).min(max);
                } else {
                    let max = self.view.rows.len().saturating_sub(1);
                    self.table_offset = (self.table_offset + PAGE).min(max);
                }
            }
            KeyCode::PageUp => {
                if self.mode == ViewMode::Loaded {
                    self.loaded_offset = self.loaded_offset.saturating_sub(PAGE);
                } else {
                    self.table_offset = self.table_offset.saturating_sub(PAGE);
                }
            }
            _ => {}
        }
        Action::None
    }

    fn switch_focus(&mut self) {
        // The type list only exists when the data has a type field.
        self.focus = match self.focus {
            Focus::Years if !self.kind_options.is_empty() => Focus::Kinds,
            _ => Focus::Years,
        };
    }

    fn move_cursor(&mut self, delta: isize) {
        let (cursor, len) = match self.focus {
            Focus::Years => (&mut self.year_cursor, self.year_options.len()),
            Focus::Kinds => (&mut self.kind_cursor, self.kind_options.len()),
        };
        if len == 0 {
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn toggle_current(&mut self) {
        match self.focus {
            Focus::Years => {
                if let Some(&year) = self.year_options.get(self.year_cursor) {
                    self.criteria.toggle_year(year);
                    self.status = format!("año {year}");
                }
            }
            Focus::Kinds => {
                if let Some(kind) = self.kind_options.get(self.kind_cursor).cloned() {
                    self.status = format!("tipo {}", kind_label(kind.as_deref()));
                    self.criteria.toggle_kind(kind);
                }
            }
        }
        self.refresh();
    }

    fn select_all(&mut self, on: bool) {
        match (self.focus, on) {
            (Focus::Years, true) => self.criteria.years = self.year_options.iter().copied().collect(),
            (Focus::Years, false) => self.criteria.years.clear(),
            (Focus::Kinds, true) => self.criteria.kinds = self.kind_options.iter().cloned().collect(),
            (Focus::Kinds, false) => self.criteria.kinds.clear(),
        }
        self.refresh();
    }

    fn refresh(&mut self) {
        self.view = build_view(&self.dataset, &self.criteria);
        self.table_offset = self.table_offset.min(self.view.rows.len().saturating_sub(1));
    }

    pub fn year_selected(&self, year: i32) -> bool {
        self.criteria.years.contains(&year)
    }

    pub fn kind_selected(&self, kind: &Option<String>) -> bool {
        self.criteria.kinds.contains(kind)
    }
}
