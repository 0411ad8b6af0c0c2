//! ratatui rendering of the form: input, result regions, status line.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Severity};

pub fn render(frame: &mut Frame, app: &App) {
    let layout = Layout::vertical([
        Constraint::Length(1),  // banner
        Constraint::Length(3),  // URL entry
        Constraint::Length(1),  // trigger
        Constraint::Length(3),  // title
        Constraint::Length(3),  // authors
        Constraint::Length(3),  // publication date
        Constraint::Min(8),     // summary
        Constraint::Length(4),  // sentiment
        Constraint::Length(1),  // status line
    ]);
    let [banner, entry, trigger, title, authors, date, summary, sentiment, status] =
        layout.areas(frame.area());

    frame.render_widget(
        Paragraph::new("📰 News Article Summarizer")
            .style(Style::default().add_modifier(Modifier::BOLD)),
        banner,
    );

    frame.render_widget(
        Paragraph::new(app.input.as_str()).block(
            Block::default()
                .title("🔗 Article URL (Enter to summarize, Esc to quit)")
                .borders(Borders::ALL),
        ),
        entry,
    );

    let trigger_style = if app.trigger_enabled() {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(
        Paragraph::new(app.trigger_label()).style(trigger_style),
        trigger,
    );

    render_region(frame, title, "📝 Title", &app.fields.title);
    render_region(frame, authors, "👤 Author(s)", &app.fields.authors);
    render_region(frame, date, "📅 Publication Date", &app.fields.date);
    render_region(frame, summary, "📄 Summary", &app.fields.summary);
    render_region(frame, sentiment, "💭 Sentiment Analysis", &app.fields.sentiment);

    frame.render_widget(
        Paragraph::new(app.status.text.as_str())
            .style(Style::default().fg(severity_color(app.status.severity))),
        status,
    );

    if let Some(notice) = &app.notice {
        render_notice(frame, notice);
    }
}

fn render_region(frame: &mut Frame, area: Rect, title: &str, content: &str) {
    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Ready => Color::DarkGray,
        Severity::Working => Color::Yellow,
        Severity::Success => Color::Green,
        Severity::Error => Color::Red,
    }
}

fn render_notice(frame: &mut Frame, notice: &str) {
    let area = centered_rect(frame.area(), 50, 5);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(format!("{}\n\n(press any key)", notice))
            .wrap(Wrap { trim: false })
            .style(Style::default().fg(Color::Yellow))
            .block(Block::default().title("⚠ Warning").borders(Borders::ALL)),
        area,
    );
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors() {
        assert_eq!(severity_color(Severity::Ready), Color::DarkGray);
        assert_eq!(severity_color(Severity::Working), Color::Yellow);
        assert_eq!(severity_color(Severity::Success), Color::Green);
        assert_eq!(severity_color(Severity::Error), Color::Red);
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let outer = Rect::new(0, 0, 80, 24);
        let inner = centered_rect(outer, 50, 5);
        assert!(inner.x >= outer.x && inner.right() <= outer.right());
        assert!(inner.y >= outer.y && inner.bottom() <= outer.bottom());
    }

    #[test]
    fn test_centered_rect_clamps_to_small_terminal() {
        let outer = Rect::new(0, 0, 20, 3);
        let inner = centered_rect(outer, 50, 5);
        assert!(inner.width <= outer.width);
        assert!(inner.height <= outer.height);
    }
}
