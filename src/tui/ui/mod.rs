//! UI module: View components for the TUI.

pub mod form;
pub mod patient;
pub mod result;
pub mod therapy;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::MedicalTheme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: Population-level estimates from the SMART-2 model. Not a substitute for clinical judgment.",
            MedicalTheme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Validated for adults aged 30-90 with established cardiovascular disease.",
            MedicalTheme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(MedicalTheme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
