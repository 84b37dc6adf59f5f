use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{Theme, BORDER_BOARD, CELL_COLUMNS, GLYPH_CELL};
use crate::game::{GameStatus, GameView};
use crate::grid::{Cell, GridSize};
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_won_menu};

/// Renders the full game frame from immutable state.
pub fn render(frame: &mut Frame<'_>, view: &GameView<'_>, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, view, theme);
    let board_area = board_rect(play_area, view.bounds);

    let block = Block::bordered()
        .border_set(BORDER_BOARD)
        .border_style(Style::new().fg(theme.border_fg))
        .style(Style::new().bg(theme.board_bg));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    if let Some(food) = view.food {
        draw_cell(frame, inner, view.bounds, food, Style::new().fg(theme.food));
    }
    render_snake(frame, inner, view, theme);

    match view.status {
        GameStatus::Paused => render_pause_menu(frame, play_area, theme),
        GameStatus::Over => render_game_over_menu(
            frame,
            play_area,
            view.score,
            view.high_score,
            view.new_high_score,
            theme,
        ),
        GameStatus::Won => render_won_menu(frame, play_area, view.score, theme),
        GameStatus::Idle | GameStatus::Running => {}
    }
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, view: &GameView<'_>, theme: &Theme) {
    let body = Style::new().fg(theme.snake_body);
    let head = Style::new()
        .fg(theme.snake_head)
        .add_modifier(Modifier::BOLD);

    // Tail first so the head is drawn last.
    let segments: Vec<Cell> = view.snake.segments().copied().collect();
    for (index, segment) in segments.iter().enumerate().rev() {
        let style = if index == 0 { head } else { body };
        draw_cell(frame, inner, view.bounds, *segment, style);
    }
}

fn draw_cell(frame: &mut Frame<'_>, inner: Rect, bounds: GridSize, cell: Cell, style: Style) {
    let Some((x, y)) = logical_to_terminal(inner, bounds, cell) else {
        return;
    };

    frame.buffer_mut().set_string(x, y, GLYPH_CELL, style);
}

/// Centres a board of `bounds` cells (plus border) inside `area`, clipped to fit.
fn board_rect(area: Rect, bounds: GridSize) -> Rect {
    let width = bounds
        .width
        .saturating_mul(CELL_COLUMNS)
        .saturating_add(2)
        .min(area.width);
    let height = bounds.height.saturating_add(2).min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if !bounds.contains(cell) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_COLUMNS)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x.saturating_add(CELL_COLUMNS) > inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::THEME;
    use crate::food::FoodPlacer;
    use crate::game::GameEngine;
    use crate::grid::{Cell, GridSize};
    use crate::score::MemoryScoreStore;

    use super::{logical_to_terminal, render};

    const GRID: GridSize = GridSize {
        width: 10,
        height: 8,
    };

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn cells_map_to_two_columns_each() {
        let inner = Rect::new(3, 2, 20, 8);

        assert_eq!(logical_to_terminal(inner, GRID, Cell::new(0, 0)), Some((3, 2)));
        assert_eq!(logical_to_terminal(inner, GRID, Cell::new(4, 1)), Some((11, 3)));
        assert_eq!(logical_to_terminal(inner, GRID, Cell::new(10, 0)), None);
    }

    #[test]
    fn frame_shows_hud_and_pause_popup() {
        let mut engine = GameEngine::new(
            GRID,
            FoodPlacer::with_seed(5),
            Box::new(MemoryScoreStore::with_score(30)),
        );
        engine.reset();
        let mut terminal = Terminal::new(TestBackend::new(40, 14)).expect("test terminal");

        terminal
            .draw(|frame| render(frame, &engine.view(), &THEME))
            .expect("draw should succeed");
        let text = screen_text(&terminal);
        assert!(text.contains("Score"));
        assert!(text.contains("30"));
        assert!(!text.contains("PAUSED"));

        engine.toggle_pause();
        terminal
            .draw(|frame| render(frame, &engine.view(), &THEME))
            .expect("draw should succeed");
        assert!(screen_text(&terminal).contains("PAUSED"));
    }
}
