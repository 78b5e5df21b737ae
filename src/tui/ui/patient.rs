//! Patient characteristics form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::domain::{BodyMeasurements, PatientProfile, Sex, VascularHistory};
use crate::tui::evidence;

use super::form::{render_form_fields, render_form_footer, render_header, FormField, FormState};

const AGE: usize = 0;
const SEX: usize = 1;
const DIABETES: usize = 2;
const SMOKER: usize = 3;
const EGFR: usize = 4;
const LDL: usize = 5;
const SBP: usize = 6;
const CORONARY: usize = 7;
const CEREBROVASCULAR: usize = 8;
const PERIPHERAL: usize = 9;
const WEIGHT: usize = 10;
const HEIGHT: usize = 11;

const SEX_OPTIONS: &[&str] = &["Male", "Female"];

/// Validated output of the patient form.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientInput {
    pub profile: PatientProfile,
    pub body: Option<BodyMeasurements>,
}

/// Patient form state
pub struct PatientFormState {
    pub form: FormState,
}

impl Default for PatientFormState {
    fn default() -> Self {
        let mut state = Self {
            form: FormState::new(vec![
                FormField::number("Age", "years (30-90)", ""),
                FormField::choice("Sex", "", SEX_OPTIONS),
                FormField::toggle("Diabetes mellitus", ""),
                FormField::toggle("Current smoker", evidence::tooltip("smoking")),
                FormField::number("eGFR", "mL/min/1.73m² (15-120)", ""),
                FormField::number("LDL-C", evidence::tooltip("ldl"), ""),
                FormField::number("Systolic BP", evidence::tooltip("sbp"), ""),
                FormField::toggle("Coronary artery disease", ""),
                FormField::toggle("Cerebrovascular disease", ""),
                FormField::toggle("Peripheral artery disease", ""),
                FormField::number("Weight", "kg (40-200, optional)", ""),
                FormField::number("Height", "cm (140-210, optional)", ""),
            ]),
        };
        state.load_defaults();
        state
    }
}

impl PatientFormState {
    /// Typical starting values for a patient with established CVD.
    pub fn load_defaults(&mut self) {
        let form = &mut self.form;
        form.set_text(AGE, "65");
        form.set_choice(SEX, 0);
        form.set_text(EGFR, "60");
        form.set_text(LDL, "3.0");
        form.set_text(SBP, "140");
        form.set_text(WEIGHT, "75");
        form.set_text(HEIGHT, "170");
    }

    /// Load a high-burden sample patient
    pub fn load_sample_data(&mut self) {
        // 80yo male, diabetic smoker, eGFR 25, three vascular beds
        let form = &mut self.form;
        form.set_text(AGE, "80");
        form.set_choice(SEX, 0);
        form.set_toggle(DIABETES, true);
        form.set_toggle(SMOKER, true);
        form.set_text(EGFR, "25");
        form.set_text(LDL, "5.0");
        form.set_text(SBP, "180");
        form.set_toggle(CORONARY, true);
        form.set_toggle(CEREBROVASCULAR, true);
        form.set_toggle(PERIPHERAL, true);
        form.set_text(WEIGHT, "82");
        form.set_text(HEIGHT, "176");
        form.error_message = None;
    }

    /// Parse and validate the form.
    ///
    /// # Errors
    /// Returns a display message for the first unparsable field or the
    /// joined validation errors.
    pub fn to_patient_input(&self) -> Result<PatientInput, String> {
        let form = &self.form;
        let sex = match form.choice(SEX) {
            0 => Sex::Male,
            _ => Sex::Female,
        };
        let vascular = VascularHistory {
            coronary: form.toggle(CORONARY),
            cerebrovascular: form.toggle(CEREBROVASCULAR),
            peripheral: form.toggle(PERIPHERAL),
        };

        let profile = PatientProfile {
            age: form.whole_number(AGE)?,
            sex,
            has_diabetes: form.toggle(DIABETES),
            is_smoker: form.toggle(SMOKER),
            egfr: form.number(EGFR)?,
            vascular_bed_count: vascular.bed_count(),
            ldl: form.number(LDL)?,
            sbp: form.number(SBP)?,
        };
        profile.validate().map_err(|e| e.to_string())?;

        let body = match (form.optional_number(WEIGHT)?, form.optional_number(HEIGHT)?) {
            (Some(weight_kg), Some(height_cm)) => {
                let body = BodyMeasurements {
                    weight_kg,
                    height_cm,
                };
                body.validate().map_err(|e| e.to_string())?;
                Some(body)
            }
            _ => None,
        };

        Ok(PatientInput { profile, body })
    }

    /// Wipe all field buffers after an assessment has been started.
    pub fn clear_sensitive(&mut self) {
        self.form.clear_sensitive();
    }
}

/// Render the patient data input form
pub fn render_patient_form(f: &mut Frame, area: Rect, state: &PatientFormState) {
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
        "1. Patient Characteristics",
        "Demographics, clinical markers, vascular history",
    );
    render_form_fields(f, chunks[1], &state.form);
    render_form_footer(
        f,
        chunks[2],
        &state.form,
        &[
            ("↑↓", "Navigate"),
            ("Space", "Toggle"),
            ("Enter", "Treatments"),
            ("S", "Sample Data"),
            ("Esc", "Quit"),
        ],
    );
}
