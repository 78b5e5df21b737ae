//! Treatment options form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::domain::{StatinIntensity, TherapyPlan, INTENSIVE_SBP_TARGET, PCSK9_MIN_LDL};
use crate::tui::evidence;

use super::form::{render_form_fields, render_form_footer, render_header, FormField, FormState};

const STATIN: usize = 0;
const EZETIMIBE: usize = 1;
const PCSK9: usize = 2;
const SBP_TARGET: usize = 3;

const STATIN_OPTIONS: &[&str] = &["None", "Moderate", "High"];

/// Therapy form state
pub struct TherapyFormState {
    pub form: FormState,
}

impl Default for TherapyFormState {
    fn default() -> Self {
        let mut form = FormState::new(vec![
            FormField::choice(
                "Statin intensity",
                evidence::tooltip("statin_high"),
                STATIN_OPTIONS,
            ),
            FormField::toggle("Ezetimibe 10mg daily", ""),
            FormField::toggle("PCSK9 inhibitor", format!("requires LDL ≥ {PCSK9_MIN_LDL}")),
            FormField::number(
                "Target SBP",
                format!("mmHg (80-220), SPRINT target <{INTENSIVE_SBP_TARGET}"),
                "",
            ),
        ]);
        form.set_text(SBP_TARGET, "130");
        Self { form }
    }
}

impl TherapyFormState {
    /// Enable or disable the PCSK9 inhibitor toggle for the patient's LDL.
    ///
    /// Disabling also clears the toggle. The engine ignores the flag below
    /// the threshold either way.
    pub fn set_pcsk9_available(&mut self, available: bool) {
        self.form.fields[PCSK9].enabled = available;
        if !available {
            self.form.set_toggle(PCSK9, false);
        }
    }

    /// Parse and validate the form.
    ///
    /// # Errors
    /// Returns a display message if the SBP target is missing or out of range.
    pub fn to_therapy_plan(&self) -> Result<TherapyPlan, String> {
        let form = &self.form;
        let statin_intensity = match form.choice(STATIN) {
            1 => StatinIntensity::Moderate,
            2 => StatinIntensity::High,
            _ => StatinIntensity::None,
        };
        let sbp_target = form.number(SBP_TARGET)?;

        Ok(TherapyPlan {
            statin_intensity,
            ezetimibe: form.toggle(EZETIMIBE),
            pcsk9_inhibitor: form.toggle(PCSK9),
            sbp_target_below_130: TherapyPlan::sbp_target_from_mmhg(sbp_target)
                .map_err(|e| e.to_string())?,
        })
    }

    pub fn clear_sensitive(&mut self) {
        self.form.clear_sensitive();
        self.form.set_text(SBP_TARGET, "130");
    }
}

/// Render the treatment options form
pub fn render_therapy_form(f: &mut Frame, area: Rect, state: &TherapyFormState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(3), // Footer/error
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "2. Treatment Options",
        "Lipid lowering and blood pressure management",
    );
    render_form_fields(f, chunks[1], &state.form);
    render_form_footer(
        f,
        chunks[2],
        &state.form,
        &[
            ("↑↓", "Navigate"),
            ("Space", "Toggle"),
            ("Enter", "Assess"),
            ("Esc", "Back"),
        ],
    );
}
