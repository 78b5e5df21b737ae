//! Main TUI application state machine.
//!
//! Handles:
//! - Screen navigation
//! - Input event handling
//! - Service integration

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::memory::MemoryCache;
use crate::application::{AssessmentService, RiskAssessmentEngine};
use crate::config::AppConfig;
use crate::domain::{BodyMeasurements, PatientProfile, TherapyPlan};

use super::ui::{
    patient::{render_patient_form, PatientFormState},
    render_disclaimer,
    result::{render_result, ResultState},
    therapy::{render_therapy_form, TherapyFormState},
};

/// Current screen/view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Patient,
    Therapy,
    Result,
}

/// Main application state
pub struct App {
    /// Current screen
    screen: Screen,

    /// Whether the app should quit
    should_quit: bool,

    service: AssessmentService<MemoryCache>,

    patient_form_state: PatientFormState,
    therapy_form_state: TherapyFormState,
    result_state: ResultState,

    /// Profile accepted from the patient screen
    profile: Option<PatientProfile>,
    body: Option<BodyMeasurements>,
}

impl App {
    /// Create a new application from configuration.
    pub fn new(config: &AppConfig) -> Self {
        let service = AssessmentService::new(
            RiskAssessmentEngine::new(),
            MemoryCache::new(config.cache_capacity),
        );
        Self::with_service(service)
    }

    /// Create application with an injected service (Composition Root pattern).
    pub fn with_service(service: AssessmentService<MemoryCache>) -> Self {
        Self {
            screen: Screen::Patient,
            should_quit: false,
            service,
            patient_form_state: PatientFormState::default(),
            therapy_form_state: TherapyFormState::default(),
            result_state: ResultState::default(),
            profile: None,
            body: None,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!(model = self.service.model_name(), "Starting assessment UI");

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(0), Constraint::Length(3)])
                    .split(f.area());

                match self.screen {
                    Screen::Patient => {
                        render_patient_form(f, chunks[0], &self.patient_form_state)
                    }
                    Screen::Therapy => {
                        render_therapy_form(f, chunks[0], &self.therapy_form_state)
                    }
                    Screen::Result => render_result(f, chunks[0], &self.result_state),
                }

                render_disclaimer(f, chunks[1]);
            })?;

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        // Global quit handling
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Patient => self.handle_patient_key(key),
            Screen::Therapy => self.handle_therapy_key(key),
            Screen::Result => self.handle_result_key(key),
        }
    }

    fn handle_patient_key(&mut self, key: KeyCode) {
        let form = &mut self.patient_form_state.form;
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => form.prev_field(),
            KeyCode::Down | KeyCode::Tab => form.next_field(),
            KeyCode::Char(' ') => form.activate(),
            KeyCode::Char('s') | KeyCode::Char('S') => {
                self.patient_form_state.load_sample_data();
            }
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Backspace => form.delete_char(),
            KeyCode::Delete => form.clear_field(),
            KeyCode::Enter => self.submit_patient_form(),
            _ => {}
        }
    }

    fn handle_therapy_key(&mut self, key: KeyCode) {
        let form = &mut self.therapy_form_state.form;
        match key {
            KeyCode::Esc => self.screen = Screen::Patient,
            KeyCode::Up => form.prev_field(),
            KeyCode::Down | KeyCode::Tab => form.next_field(),
            KeyCode::Char(' ') => form.activate(),
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Backspace => form.delete_char(),
            KeyCode::Delete => form.clear_field(),
            KeyCode::Enter => self.submit_therapy_form(),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Esc => self.screen = Screen::Therapy,
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.result_state.show_evidence = !self.result_state.show_evidence;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => self.start_new_patient(),
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ => {}
        }
    }

    fn submit_patient_form(&mut self) {
        match self.patient_form_state.to_patient_input() {
            Ok(input) => {
                self.therapy_form_state
                    .set_pcsk9_available(TherapyPlan::pcsk9_eligible(input.profile.ldl));
                self.profile = Some(input.profile);
                self.body = input.body;
                self.patient_form_state.form.error_message = None;
                self.screen = Screen::Therapy;
            }
            Err(e) => {
                self.patient_form_state.form.error_message = Some(e);
            }
        }
    }

    fn submit_therapy_form(&mut self) {
        let Some(profile) = self.profile.clone() else {
            self.screen = Screen::Patient;
            return;
        };

        let plan = match self.therapy_form_state.to_therapy_plan() {
            Ok(plan) => plan,
            Err(e) => {
                self.therapy_form_state.form.error_message = Some(e);
                return;
            }
        };

        match self.service.assess(&profile, &plan) {
            Ok(result) => {
                self.result_state.result = Some(result);
                self.result_state.bmi = self.body.map(|b| b.bmi());
                self.result_state.pcsk9_applied =
                    plan.pcsk9_inhibitor && TherapyPlan::pcsk9_eligible(profile.ldl);
                self.therapy_form_state.form.error_message = None;
                self.screen = Screen::Result;
            }
            Err(e) => {
                self.therapy_form_state.form.error_message = Some(e.to_string());
            }
        }
    }

    /// Wipe all patient data held by the UI and the memo cache.
    fn start_new_patient(&mut self) {
        self.patient_form_state.clear_sensitive();
        self.patient_form_state.load_defaults();
        self.therapy_form_state.clear_sensitive();
        self.therapy_form_state.set_pcsk9_available(true);
        self.result_state.clear();
        self.profile = None;
        self.body = None;
        self.service.clear_cache();
        self.screen = Screen::Patient;
    }
}
