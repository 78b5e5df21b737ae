//! Result view: baseline and projected risk, tier, recommendations.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::domain::AssessmentResult;
use crate::tui::evidence::{EVIDENCE, MODEL_CITATION};
use crate::tui::styles::MedicalTheme;

use super::form::render_header;

/// What the result screen shows.
#[derive(Debug, Clone, Default)]
pub struct ResultState {
    pub result: Option<AssessmentResult>,
    pub bmi: Option<f64>,
    pub pcsk9_applied: bool,
    pub show_evidence: bool,
}

impl ResultState {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Render the result view.
pub fn render_result(f: &mut Frame, area: Rect, state: &ResultState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(
        f,
        chunks[0],
        "3. Risk Assessment",
        "10-year risk of recurrent vascular events",
    );

    match &state.result {
        Some(result) if state.show_evidence => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
                .split(chunks[1]);
            render_summary(f, halves[0], result, state);
            render_evidence(f, halves[1]);
        }
        Some(result) => render_summary(f, chunks[1], result, state),
        None => {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No assessment yet.",
                MedicalTheme::text_muted(),
            )))
            .alignment(Alignment::Center);
            f.render_widget(empty, chunks[1]);
        }
    }

    render_result_footer(f, chunks[2], state.show_evidence);
}

fn render_summary(f: &mut Frame, area: Rect, result: &AssessmentResult, state: &ResultState) {
    let tier_style = MedicalTheme::risk_tier(result.risk_tier);
    let block = Block::default()
        .title(Span::styled(" Result ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tier
            Constraint::Length(3), // Baseline
            Constraint::Length(3), // Projected
            Constraint::Length(2), // Reductions
            Constraint::Min(0),    // Recommendations
        ])
        .margin(1)
        .split(inner);

    let tier = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("{} RISK", result.risk_tier),
            tier_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            result.risk_tier.description(),
            MedicalTheme::text_secondary(),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(tier, chunks[0]);

    f.render_widget(
        risk_gauge(" Baseline (current) ", result.baseline_risk_percent),
        chunks[1],
    );
    f.render_widget(
        risk_gauge(" Projected (with treatment) ", result.projected_risk_percent),
        chunks[2],
    );

    let mut figures = vec![
        Span::styled("RRR: ", MedicalTheme::text_secondary()),
        Span::styled(
            format!("{:.0}%", result.relative_risk_reduction_percent),
            MedicalTheme::text(),
        ),
        Span::styled("  ARR: ", MedicalTheme::text_secondary()),
        Span::styled(
            format!("{:.1}%", result.absolute_risk_reduction()),
            MedicalTheme::text(),
        ),
    ];
    if let Some(bmi) = state.bmi {
        figures.push(Span::styled("  BMI: ", MedicalTheme::text_secondary()));
        figures.push(Span::styled(format!("{bmi:.1}"), MedicalTheme::text()));
    }
    let mut reduction_lines = vec![Line::from(figures)];
    if !state.pcsk9_applied {
        reduction_lines.push(Line::from(Span::styled(
            "PCSK9 inhibitor not applied",
            MedicalTheme::text_muted(),
        )));
    }
    f.render_widget(
        Paragraph::new(reduction_lines).alignment(Alignment::Center),
        chunks[3],
    );

    let mut lines = vec![Line::from(Span::styled(
        "Recommendations",
        MedicalTheme::subtitle(),
    ))];
    lines.extend(result.recommendations.iter().map(|r| {
        Line::from(vec![
            Span::styled("  • ", tier_style),
            Span::styled(r.as_str(), MedicalTheme::text()),
        ])
    }));
    f.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }),
        chunks[4],
    );
}

fn risk_gauge(title: &str, percent: f64) -> Gauge<'_> {
    Gauge::default()
        .block(
            Block::default()
                .title(Span::styled(title, MedicalTheme::text_secondary()))
                .borders(Borders::ALL)
                .border_style(MedicalTheme::border()),
        )
        .gauge_style(MedicalTheme::risk_gauge(percent))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.1}%"))
}

fn render_evidence(f: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Evidence ", MedicalTheme::subtitle()))
        .borders(Borders::ALL)
        .border_style(MedicalTheme::border());

    let mut lines = vec![
        Line::from(Span::styled("SMART-2 model", MedicalTheme::text())),
        Line::from(Span::styled(MODEL_CITATION, MedicalTheme::text_muted())),
        Line::from(""),
    ];
    for e in &EVIDENCE {
        lines.push(Line::from(vec![
            Span::styled(e.study, MedicalTheme::text()),
            Span::styled(format!(": {}", e.effect), MedicalTheme::text_secondary()),
        ]));
        lines.push(Line::from(Span::styled(e.link, MedicalTheme::info())));
    }

    let p = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(p, area);
}

fn render_result_footer(f: &mut Frame, area: Rect, show_evidence: bool) {
    let evidence_label = if show_evidence {
        "Hide Evidence "
    } else {
        "Evidence "
    };
    let content = Line::from(vec![
        Span::styled("[Enter] ", MedicalTheme::key_hint()),
        Span::styled("Adjust Treatment ", MedicalTheme::key_desc()),
        Span::styled("[E] ", MedicalTheme::key_hint()),
        Span::styled(evidence_label, MedicalTheme::key_desc()),
        Span::styled("[N] ", MedicalTheme::key_hint()),
        Span::styled("New Patient ", MedicalTheme::key_desc()),
        Span::styled("[Q] ", MedicalTheme::key_hint()),
        Span::styled("Quit", MedicalTheme::key_desc()),
    ]);

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(MedicalTheme::border()),
    );

    f.render_widget(footer, area);
}
