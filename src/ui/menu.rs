use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;

/// Draws the pause screen as a centered popup.
pub fn render_pause_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines = vec![
        title_line("PAUSED", theme),
        Line::from(""),
        Line::from("[Space] Resume"),
        Line::from("[R] Restart  [Q] Quit"),
    ];

    render_popup(frame, area, " pause ", lines, theme);
}

/// Draws the game-over screen as a centered popup.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    high_score: u32,
    new_high_score: bool,
    theme: &Theme,
) {
    let lines = vec![
        title_line("GAME OVER", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(format!("High score: {high_score}")),
        Line::from(if new_high_score { "New high score!" } else { "" }),
        Line::from("[R] Play again  [Q] Quit"),
    ];

    render_popup(frame, area, " game over ", lines, theme);
}

/// Draws the screen shown when the snake fills the whole board.
pub fn render_won_menu(frame: &mut Frame<'_>, area: Rect, score: u32, theme: &Theme) {
    let lines = vec![
        title_line("BOARD CLEARED", theme),
        Line::from(""),
        Line::from(format!("Score: {score}")),
        Line::from(""),
        Line::from("[R] Play again  [Q] Quit"),
    ];

    render_popup(frame, area, " you win ", lines, theme);
}

fn title_line(text: &'static str, theme: &Theme) -> Line<'static> {
    Line::styled(
        text,
        Style::default()
            .fg(theme.menu_title)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    lines: Vec<Line<'static>>,
    theme: &Theme,
) {
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0);
    let width = u16::try_from(content_width).unwrap_or(u16::MAX).saturating_add(4);
    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);

    let popup = centered_popup(area, width, height);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::bordered()
                .title(title)
                .border_style(Style::default().fg(theme.menu_footer)),
        ),
        popup,
    );
}

fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let [mid] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(mid);

    center
}
