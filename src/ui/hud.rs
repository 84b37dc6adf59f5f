use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::game::{GameStatus, GameView};

/// Renders the one-line HUD at the top of `area` and returns the rest.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, view: &GameView<'_>, theme: &Theme) -> Rect {
    let [hud_area, play_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
    let [stats_area, status_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(10)]).areas(hud_area);

    frame.render_widget(Paragraph::new(stats_line(view, theme)), stats_area);
    frame.render_widget(
        Paragraph::new(status_label(view.status))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.hud_label)),
        status_area,
    );

    play_area
}

fn stats_line(view: &GameView<'_>, theme: &Theme) -> Line<'static> {
    let label = Style::default().fg(theme.hud_label);
    let value = Style::default()
        .fg(theme.hud_value)
        .add_modifier(Modifier::BOLD);

    Line::from(vec![
        Span::styled(" Score ", label),
        Span::styled(view.score.to_string(), value),
        Span::styled("  Best ", label),
        Span::styled(view.high_score.to_string(), value),
        Span::styled("  Length ", label),
        Span::styled(view.snake.len().to_string(), value),
        Span::styled("  Speed ", label),
        Span::styled(format!("{}ms", view.tick_interval_ms), value),
    ])
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::Paused => "paused ",
        GameStatus::Over => "game over ",
        GameStatus::Won => "cleared ",
        GameStatus::Idle | GameStatus::Running => "",
    }
}
