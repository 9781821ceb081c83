use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent};
use uuid::Uuid;

use engine::{
    Currency, Customer, DeleteOutcome, Engine, Expense, Granularity, Money, Trip, UpdateOutcome,
    seed,
};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    forms::{EntryForm, FormKind, FormOutput},
    ui,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Dashboard,
    Log,
    Analytics,
    Customers,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Log => "Log",
            Self::Analytics => "Analytics",
            Self::Customers => "Customers",
        }
    }
}

/// One row of the merged log: a trip or an expense.
#[derive(Debug, Clone)]
pub enum LogEntry {
    Trip(Trip),
    Expense(Expense),
}

impl LogEntry {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Trip(trip) => trip.id,
            Self::Expense(expense) => expense.id,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::Trip(trip) => trip.occurred_at,
            Self::Expense(expense) => expense.occurred_at,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Trip(trip) => trip.customer_name.as_str(),
            Self::Expense(expense) => expense.description.as_str(),
        }
    }
}

/// Trips and expenses merged into one list, newest first. Ties keep trip
/// before expense in insertion order (the sort is stable).
pub fn log_entries(engine: &Engine) -> Vec<LogEntry> {
    let mut entries: Vec<LogEntry> = engine
        .trips()
        .iter()
        .cloned()
        .map(LogEntry::Trip)
        .chain(engine.expenses().iter().cloned().map(LogEntry::Expense))
        .collect();
    entries.sort_by(|a, b| b.occurred_at().cmp(&a.occurred_at()));
    entries
}

/// Customers as shown in the Customers section: best customer first. The
/// engine itself returns first-appearance order; the descending-earnings sort
/// is purely presentational.
pub fn sorted_customers(engine: &Engine) -> Vec<Customer> {
    let mut list = engine.customers();
    list.sort_by(|a, b| b.total_earnings_minor.cmp(&a.total_earnings_minor));
    list
}

#[derive(Debug, Default)]
pub struct LogState {
    pub selected: usize,
}

impl LogState {
    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(len - 1);
        }
    }
}

#[derive(Debug, Default)]
pub struct CustomersState {
    pub selected: usize,
    pub detail: Option<Customer>,
}

impl CustomersState {
    fn select_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1).min(len - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

#[derive(Debug)]
pub struct AnalyticsState {
    pub granularity: Granularity,
}

impl Default for AnalyticsState {
    fn default() -> Self {
        Self {
            granularity: Granularity::Day,
        }
    }
}

impl AnalyticsState {
    fn cycle_granularity(&mut self) {
        self.granularity = match self.granularity {
            Granularity::Day => Granularity::Week,
            Granularity::Week => Granularity::Month,
            Granularity::Month => Granularity::Day,
        };
    }

    /// How many buckets the chart shows per granularity.
    pub fn bucket_count(&self) -> usize {
        match self.granularity {
            Granularity::Day => 7,
            Granularity::Week => 8,
            Granularity::Month => 6,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct ToastState {
    pub message: String,
    pub level: ToastLevel,
    ticks_left: u8,
}

impl ToastState {
    fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            // ~3s at the 200ms poll cadence.
            ticks_left: 15,
        }
    }
}

/// A delete waiting for confirmation.
#[derive(Debug, Clone)]
pub struct PendingDelete {
    pub id: Uuid,
    pub label: String,
}

#[derive(Debug)]
pub struct AppState {
    pub section: Section,
    pub log: LogState,
    pub customers: CustomersState,
    pub analytics: AnalyticsState,
    pub form: Option<EntryForm>,
    pub confirm: Option<PendingDelete>,
    pub toast: Option<ToastState>,
    pub timezone: Tz,
    pub currency: Currency,
}

pub struct App {
    config: AppConfig,
    engine: Engine,
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Result<Self> {
        let timezone: Tz = config
            .timezone
            .parse()
            .map_err(|_| AppError::Timezone(config.timezone.clone()))?;

        let engine = seed::sample_book(Utc::now());
        tracing::info!(
            trips = engine.trips().len(),
            expenses = engine.expenses().len(),
            %timezone,
            "book seeded"
        );

        let state = AppState {
            section: Section::Dashboard,
            log: LogState::default(),
            customers: CustomersState::default(),
            analytics: AnalyticsState::default(),
            form: None,
            confirm: None,
            toast: None,
            timezone,
            currency: Currency::default(),
        };

        Ok(Self {
            config,
            engine,
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.engine, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key)?,
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            } else {
                self.tick_toast();
            }
        }

        Ok(())
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn tick_toast(&mut self) {
        if let Some(toast) = &mut self.state.toast {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
            if toast.ticks_left == 0 {
                self.state.toast = None;
            }
        }
    }

    fn toast(&mut self, message: impl Into<String>, level: ToastLevel) {
        self.state.toast = Some(ToastState::new(message, level));
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match ui::keymap::map_key(key) {
            ui::keymap::AppAction::Quit => {
                self.should_quit = true;
            }
            ui::keymap::AppAction::Cancel => {
                if self.state.form.is_some() {
                    self.state.form = None;
                } else if self.state.confirm.is_some() {
                    self.state.confirm = None;
                } else if self.state.customers.detail.is_some() {
                    self.state.customers.detail = None;
                }
            }
            ui::keymap::AppAction::NextField => {
                if let Some(form) = &mut self.state.form {
                    form.next_field();
                }
            }
            ui::keymap::AppAction::Submit => {
                if self.state.form.is_some() {
                    self.submit_form();
                } else if self.state.confirm.is_some() {
                    self.apply_pending_delete();
                } else if self.state.section == Section::Customers {
                    self.open_customer_detail();
                }
            }
            ui::keymap::AppAction::Backspace => {
                if let Some(form) = &mut self.state.form {
                    form.active_field_mut().pop();
                }
            }
            ui::keymap::AppAction::Up => self.move_selection(-1),
            ui::keymap::AppAction::Down => self.move_selection(1),
            ui::keymap::AppAction::Input(ch) => {
                if let Some(form) = &mut self.state.form {
                    form.active_field_mut().push(ch);
                } else if self.state.confirm.is_some() {
                    match ch {
                        'y' | 'Y' => self.apply_pending_delete(),
                        'n' | 'N' => self.state.confirm = None,
                        _ => {}
                    }
                } else {
                    self.handle_browse_key(ch);
                }
            }
            ui::keymap::AppAction::None => {}
        }

        Ok(())
    }

    fn change_section(&mut self, section: Section) {
        self.state.section = section;
        // Leaving the customer detail when switching away mirrors the main
        // navigation reset.
        self.state.customers.detail = None;
    }

    fn handle_browse_key(&mut self, ch: char) {
        match ch {
            'q' => {
                self.should_quit = true;
                return;
            }
            'h' | 'H' => {
                self.change_section(Section::Dashboard);
                return;
            }
            'l' | 'L' => {
                self.change_section(Section::Log);
                return;
            }
            's' | 'S' => {
                self.change_section(Section::Analytics);
                return;
            }
            'c' | 'C' => {
                self.change_section(Section::Customers);
                return;
            }
            _ => {}
        }

        match self.state.section {
            Section::Log => match ch {
                'a' | 'A' => self.state.form = Some(EntryForm::add(FormKind::Trip)),
                'x' | 'X' => self.state.form = Some(EntryForm::add(FormKind::Expense)),
                'e' | 'E' => self.open_edit_form(),
                'd' | 'D' => self.request_delete(),
                'j' => self.move_selection(1),
                'k' => self.move_selection(-1),
                _ => {}
            },
            Section::Customers => match ch {
                'b' | 'B' => self.state.customers.detail = None,
                'j' => self.move_selection(1),
                'k' => self.move_selection(-1),
                _ => {}
            },
            Section::Analytics => {
                if ch == 'g' || ch == 'G' {
                    self.state.analytics.cycle_granularity();
                }
            }
            Section::Dashboard => {}
        }
    }

    fn move_selection(&mut self, delta: i8) {
        match self.state.section {
            Section::Log => {
                let len = log_entries(&self.engine).len();
                if delta > 0 {
                    self.state.log.select_next(len);
                } else {
                    self.state.log.select_prev();
                }
            }
            Section::Customers if self.state.customers.detail.is_none() => {
                let len = sorted_customers(&self.engine).len();
                if delta > 0 {
                    self.state.customers.select_next(len);
                } else {
                    self.state.customers.select_prev();
                }
            }
            _ => {}
        }
    }

    fn open_edit_form(&mut self) {
        let entries = log_entries(&self.engine);
        let Some(entry) = entries.get(self.state.log.selected) else {
            return;
        };
        self.state.form = Some(match entry {
            LogEntry::Trip(trip) => EntryForm::edit_trip(trip.clone()),
            LogEntry::Expense(expense) => EntryForm::edit_expense(expense.clone()),
        });
    }

    fn request_delete(&mut self) {
        let entries = log_entries(&self.engine);
        let Some(entry) = entries.get(self.state.log.selected) else {
            return;
        };
        self.state.confirm = Some(PendingDelete {
            id: entry.id(),
            label: entry.label().to_string(),
        });
    }

    fn submit_form(&mut self) {
        let Some(form) = &self.state.form else {
            return;
        };

        let output = match form.submit(self.state.currency) {
            Ok(output) => output,
            Err(message) => {
                if let Some(form) = &mut self.state.form {
                    form.message = Some(message);
                }
                return;
            }
        };

        match output {
            FormOutput::NewTrip(draft) => {
                let earnings = draft.earnings_minor;
                self.engine.add_trip(draft, Utc::now());
                self.toast(
                    format!(
                        "Trip added ({}).",
                        Money::new(earnings).format(self.state.currency)
                    ),
                    ToastLevel::Success,
                );
            }
            FormOutput::NewExpense(draft) => {
                let amount = draft.amount_minor;
                self.engine.add_expense(draft, Utc::now());
                self.toast(
                    format!(
                        "Expense added ({}).",
                        Money::new(amount).format(self.state.currency)
                    ),
                    ToastLevel::Success,
                );
            }
            FormOutput::EditedTrip(trip) => match self.engine.update_trip(trip) {
                UpdateOutcome::Updated => self.toast("Trip updated.", ToastLevel::Success),
                UpdateOutcome::NotFound => {
                    self.toast("Trip no longer exists.", ToastLevel::Error);
                }
            },
            FormOutput::EditedExpense(expense) => match self.engine.update_expense(expense) {
                UpdateOutcome::Updated => self.toast("Expense updated.", ToastLevel::Success),
                UpdateOutcome::NotFound => {
                    self.toast("Expense no longer exists.", ToastLevel::Error);
                }
            },
        }

        self.state.form = None;
        self.state.log.clamp(log_entries(&self.engine).len());
    }

    fn apply_pending_delete(&mut self) {
        let Some(pending) = self.state.confirm.take() else {
            return;
        };

        match self.engine.delete_entry(pending.id) {
            DeleteOutcome::DeletedTrip => self.toast("Trip deleted.", ToastLevel::Info),
            DeleteOutcome::DeletedExpense => self.toast("Expense deleted.", ToastLevel::Info),
            DeleteOutcome::NotFound => {
                self.toast("Entry was already removed.", ToastLevel::Error);
            }
        }

        self.state.log.clamp(log_entries(&self.engine).len());
    }

    fn open_customer_detail(&mut self) {
        if self.state.customers.detail.is_some() {
            return;
        }
        let customers = sorted_customers(&self.engine);
        if let Some(customer) = customers.get(self.state.customers.selected) {
            self.state.customers.detail = Some(customer.clone());
        }
    }
}
