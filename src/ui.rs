use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::schedule::{RUBRIC, RUBRIC_SCALE};
use crate::session::{LogEntry, Session};
use crate::App;

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;

        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let cyan_bold_style = Style::default().patch(bold_style).fg(Color::Cyan);
        let magenta_style = Style::default().fg(Color::Magenta);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let prompt = session.current_prompt();
        let prompt_occupied_lines =
            ((prompt.width() as f64 / max_chars_per_line as f64).ceil() as u16).max(1) + 1;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Length(2),                    // segment label + side
                Constraint::Length(2),                    // clock
                Constraint::Length(2),                    // progress gauge
                Constraint::Length(prompt_occupied_lines), // prompt
                Constraint::Min(1),                       // rubric or log
                Constraint::Length(2),                    // key hints
            ])
            .split(area);

        let header = Paragraph::new(vec![
            Line::from(Span::styled(session.segment_label(), cyan_bold_style)),
            Line::from(side_line(session, dim_style)),
        ])
        .alignment(Alignment::Center);
        header.render(chunks[0], buf);

        let clock = Paragraph::new(Span::styled(session.clock(), bold_style))
            .alignment(Alignment::Center);
        clock.render(chunks[1], buf);

        let pct = session.progress_percent();
        let gauge = Gauge::default()
            .gauge_style(magenta_style)
            .ratio(pct / 100.0)
            .label(format!("{:.0}%", pct));
        gauge.render(chunks[2], buf);

        let prompt_widget = Paragraph::new(Span::styled(prompt, italic_style))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        prompt_widget.render(chunks[3], buf);

        if session.is_running() {
            log_paragraph(session.log(), chunks[4].height).render(chunks[4], buf);
        } else {
            rubric_paragraph().render(chunks[4], buf);
        }

        hints_paragraph(session, dim_style).render(chunks[5], buf);
    }
}

fn side_line(session: &Session, dim_style: Style) -> Span<'static> {
    let text = if session.is_idle() {
        format!("Side: {}", session.selected_side())
    } else {
        format!("Side: {} (locked)", session.selected_side())
    };
    Span::styled(text, dim_style)
}

/// Tail of the session log, newest lines kept visible.
fn log_paragraph(log: &[LogEntry], height: u16) -> Paragraph<'static> {
    let visible = height.saturating_sub(1) as usize;
    let skip = log.len().saturating_sub(visible);
    let lines: Vec<Line> = log
        .iter()
        .skip(skip)
        .map(|entry| Line::from(entry.line()))
        .collect();

    Paragraph::new(lines).style(Style::default().fg(Color::Gray))
}

fn rubric_paragraph() -> Paragraph<'static> {
    let mut lines = vec![Line::from(Span::styled(
        "Judging rubric",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for category in RUBRIC {
        lines.push(Line::from(format!("{}: {}", category, RUBRIC_SCALE)));
    }

    Paragraph::new(lines)
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
}

fn hints_paragraph(session: &Session, dim_style: Style) -> Paragraph<'static> {
    let hints = if session.is_idle() {
        "(s)tart (t)oggle side (a)ffirmative (n)egative (r)eset (q)uit"
    } else if session.is_running() {
        // side keys are locked mid-run
        "(r)eset (q)uit"
    } else {
        "(s)tart again (r)eset (q)uit"
    };

    Paragraph::new(Span::styled(hints, dim_style.add_modifier(Modifier::ITALIC)))
        .alignment(Alignment::Center)
}
