//! Shared form model and rendering for the input screens.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use zeroize::Zeroize;

use crate::tui::styles::MedicalTheme;

/// Editable value of one form field.
#[derive(Debug, Clone)]
pub enum FieldInput {
    /// Free numeric text, parsed on submit
    Number(String),
    /// Yes/no checkbox
    Toggle(bool),
    /// One of a fixed set of options
    Choice {
        options: &'static [&'static str],
        selected: usize,
    },
}

/// Form field definition
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub hint: String,
    pub input: FieldInput,
    pub enabled: bool,
}

impl FormField {
    pub fn number(label: &'static str, hint: impl Into<String>, value: &str) -> Self {
        Self {
            label,
            hint: hint.into(),
            input: FieldInput::Number(value.to_string()),
            enabled: true,
        }
    }

    pub fn toggle(label: &'static str, hint: impl Into<String>) -> Self {
        Self {
            label,
            hint: hint.into(),
            input: FieldInput::Toggle(false),
            enabled: true,
        }
    }

    pub fn choice(
        label: &'static str,
        hint: impl Into<String>,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            label,
            hint: hint.into(),
            input: FieldInput::Choice {
                options,
                selected: 0,
            },
            enabled: true,
        }
    }
}

/// Navigation and editing state shared by the input screens.
#[derive(Debug, Clone)]
pub struct FormState {
    pub fields: Vec<FormField>,
    pub selected_field: usize,
    pub error_message: Option<String>,
}

impl FormState {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            selected_field: 0,
            error_message: None,
        }
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.selected_field = (self.selected_field + 1) % self.fields.len();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        if self.selected_field == 0 {
            self.selected_field = self.fields.len() - 1;
        } else {
            self.selected_field -= 1;
        }
    }

    /// Add a character to the current numeric field
    pub fn input_char(&mut self, c: char) {
        let field = &mut self.fields[self.selected_field];
        if !field.enabled {
            return;
        }
        if let FieldInput::Number(text) = &mut field.input {
            if c.is_ascii_digit() || (c == '.' && !text.contains('.')) {
                text.push(c);
                self.error_message = None;
            }
        }
    }

    /// Delete the last character
    pub fn delete_char(&mut self) {
        if let FieldInput::Number(text) = &mut self.fields[self.selected_field].input {
            text.pop();
        }
    }

    /// Clear the current field
    pub fn clear_field(&mut self) {
        if let FieldInput::Number(text) = &mut self.fields[self.selected_field].input {
            text.clear();
        }
    }

    /// Flip a toggle or advance a choice on the current field.
    pub fn activate(&mut self) {
        let field = &mut self.fields[self.selected_field];
        if !field.enabled {
            return;
        }
        match &mut field.input {
            FieldInput::Toggle(on) => *on = !*on,
            FieldInput::Choice { options, selected } => {
                *selected = (*selected + 1) % options.len();
            }
            FieldInput::Number(_) => return,
        }
        self.error_message = None;
    }

    pub fn set_text(&mut self, index: usize, value: &str) {
        if let FieldInput::Number(text) = &mut self.fields[index].input {
            text.clear();
            text.push_str(value);
        }
    }

    pub fn set_toggle(&mut self, index: usize, value: bool) {
        if let FieldInput::Toggle(on) = &mut self.fields[index].input {
            *on = value;
        }
    }

    pub fn set_choice(&mut self, index: usize, value: usize) {
        if let FieldInput::Choice { options, selected } = &mut self.fields[index].input {
            *selected = value.min(options.len() - 1);
        }
    }

    /// Parse a numeric field.
    ///
    /// # Errors
    /// Returns a message naming the field if it is empty or not a number.
    pub fn number(&self, index: usize) -> Result<f64, String> {
        let field = &self.fields[index];
        match &field.input {
            FieldInput::Number(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| format!("{}: Invalid number", field.label)),
            _ => Err(format!("{}: Not a numeric field", field.label)),
        }
    }

    /// Parse an optional numeric field; empty means `None`.
    ///
    /// # Errors
    /// Returns a message naming the field if it is not a number.
    pub fn optional_number(&self, index: usize) -> Result<Option<f64>, String> {
        match &self.fields[index].input {
            FieldInput::Number(text) if text.trim().is_empty() => Ok(None),
            _ => self.number(index).map(Some),
        }
    }

    /// Parse a whole-number field.
    ///
    /// # Errors
    /// Returns a message naming the field if it is not a non-negative integer.
    pub fn whole_number(&self, index: usize) -> Result<u32, String> {
        let field = &self.fields[index];
        match &field.input {
            FieldInput::Number(text) => text
                .trim()
                .parse::<u32>()
                .map_err(|_| format!("{}: Must be a whole number", field.label)),
            _ => Err(format!("{}: Not a numeric field", field.label)),
        }
    }

    #[must_use]
    pub fn toggle(&self, index: usize) -> bool {
        matches!(self.fields[index].input, FieldInput::Toggle(true))
    }

    #[must_use]
    pub fn choice(&self, index: usize) -> usize {
        match self.fields[index].input {
            FieldInput::Choice { selected, .. } => selected,
            _ => 0,
        }
    }

    /// Wipe all field buffers from memory and reset selections.
    pub fn clear_sensitive(&mut self) {
        for field in self.fields.iter_mut() {
            match &mut field.input {
                FieldInput::Number(text) => text.zeroize(),
                FieldInput::Toggle(on) => *on = false,
                FieldInput::Choice { selected, .. } => *selected = 0,
            }
        }
        self.error_message = None;
        self.selected_field = 0;
    }
}

/// Render a screen header line.
pub fn render_header(f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", MedicalTheme::text()),
        Span::styled(title.to_string(), MedicalTheme::title()),
        Span::styled(format!(" │ {subtitle}"), MedicalTheme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(header, area);
}

/// Render the fields in two columns.
pub fn render_form_fields(f: &mut Frame, area: Rect, state: &FormState) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(area);

    let mid = (state.fields.len() + 1) / 2;

    render_field_column(f, columns[0], &state.fields[..mid], 0, state.selected_field);
    render_field_column(
        f,
        columns[1],
        &state.fields[mid..],
        mid,
        state.selected_field,
    );
}

fn render_field_column(
    f: &mut Frame,
    area: Rect,
    fields: &[FormField],
    offset: usize,
    selected: usize,
) {
    let field_height = 3;
    let constraints: Vec<Constraint> = fields
        .iter()
        .map(|_| Constraint::Length(field_height))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in fields.iter().enumerate() {
        let is_selected = offset + i == selected;
        let border_style = if is_selected {
            MedicalTheme::border_focused()
        } else {
            MedicalTheme::border()
        };

        let title_style = if !field.enabled {
            MedicalTheme::text_muted()
        } else if is_selected {
            MedicalTheme::focused()
        } else {
            MedicalTheme::text_secondary()
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", field.label), title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        let value_display = field_value_span(field);

        let content = Paragraph::new(Line::from(vec![
            Span::raw(" "),
            value_display,
            Span::raw("  "),
            Span::styled(field.hint.clone(), MedicalTheme::text_muted()),
            if is_selected {
                Span::styled(" ▌", MedicalTheme::cursor())
            } else {
                Span::raw("")
            },
        ]))
        .block(block);

        f.render_widget(content, chunks[i]);
    }
}

fn field_value_span(field: &FormField) -> Span<'_> {
    if !field.enabled {
        return Span::styled("n/a", MedicalTheme::text_muted());
    }
    match &field.input {
        FieldInput::Number(text) if text.is_empty() => Span::styled("_", MedicalTheme::text_muted()),
        FieldInput::Number(text) => Span::styled(text.as_str(), MedicalTheme::text()),
        FieldInput::Toggle(true) => Span::styled("[x]", MedicalTheme::success()),
        FieldInput::Toggle(false) => Span::styled("[ ]", MedicalTheme::text_secondary()),
        FieldInput::Choice { options, selected } => Span::styled(
            format!("< {} >", options[*selected]),
            MedicalTheme::text(),
        ),
    }
}

/// Render the key hint line or the current error.
pub fn render_form_footer(f: &mut Frame, area: Rect, state: &FormState, hints: &[(&str, &str)]) {
    let content = if let Some(err) = &state.error_message {
        Line::from(vec![
            Span::styled("! ", MedicalTheme::danger()),
            Span::styled(err.clone(), MedicalTheme::danger()),
        ])
    } else {
        Line::from(
            hints
                .iter()
                .flat_map(|(key, desc)| {
                    [
                        Span::styled(format!("[{key}] "), MedicalTheme::key_hint()),
                        Span::styled(format!("{desc} "), MedicalTheme::key_desc()),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}
