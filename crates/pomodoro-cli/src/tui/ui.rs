use pomodoro_core::timer::{format_clock, format_minutes};
use pomodoro_core::DurationKind;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Gauge, Paragraph};

use super::app::App;
use super::event::HELP;

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(frame.area());

    render_durations(frame, app, chunks[0]);
    render_session(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_footer(frame, app, chunks[4]);
}

fn render_durations(frame: &mut Frame, app: &App, area: Rect) {
    let halves =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(area);
    let engine = app.engine();
    let locked = !engine.can_edit_durations();

    for (kind, area, keys) in [
        (DurationKind::Focus, halves[0], "\u{2193} \u{2191}"),
        (DurationKind::Break, halves[1], "\u{2190} \u{2192}"),
    ] {
        let title = match kind {
            DurationKind::Focus => "Focus Duration",
            DurationKind::Break => "Break Duration",
        };
        let key_style = if locked {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Cyan)
        };
        let line = Line::from(vec![
            Span::raw(format!(
                "{title}: {} ",
                format_minutes(engine.durations().minutes(kind))
            )),
            Span::styled(format!("[{keys}]"), key_style),
        ]);
        frame.render_widget(Paragraph::new(line).block(Block::bordered()), area);
    }
}

fn render_session(frame: &mut Frame, app: &App, area: Rect) {
    let engine = app.engine();
    let block = Block::bordered().title(" Session ");

    let Some(label) = engine.mode().label() else {
        let idle = Paragraph::new("Press space to start focusing")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(idle, area);
        return;
    };

    let total_minutes = engine.total_secs() / 60;
    let mut lines = vec![
        Line::from(format!("{label} for {total_minutes:02}:00 minutes")).bold(),
        Line::from(format!("{} remaining", format_clock(engine.remaining_secs()))),
    ];
    if !engine.is_running() {
        lines.push(Line::from("PAUSED").fg(Color::Yellow));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn render_progress(frame: &mut Frame, app: &App, area: Rect) {
    let pct = app.engine().progress_pct();
    let gauge = Gauge::default()
        .block(Block::bordered().title(" Progress "))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(format!("{pct:.0}%"));
    frame.render_widget(gauge, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let text = app.status().unwrap_or(HELP);
    frame.render_widget(Paragraph::new(text).fg(Color::DarkGray), area);
}
