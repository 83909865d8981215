use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders, Widget};

use steppe_core::{Automaton, CellView, Ruleset};

/// Draws the automaton grid, one styled glyph per cell, inside a bordered
/// block titled with the current generation and population summary.
pub struct GridWidget<'a, R: Ruleset> {
    world: &'a Automaton<R>,
}

impl<'a, R: Ruleset> GridWidget<'a, R> {
    pub fn new(world: &'a Automaton<R>) -> Self {
        Self { world }
    }
}

impl<R: Ruleset> Widget for GridWidget<'_, R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " Gen {} | {} ",
                self.world.tick,
                self.world.summary()
            ))
            .borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let grid = &self.world.grid;
        for y in 0..inner.height.min(grid.height()) {
            for x in 0..inner.width.min(grid.width()) {
                let cell = grid.get(x, y);
                if cell.symbol() == ' ' {
                    continue;
                }
                if let Some(buf_cell) = buf.cell_mut((inner.x + x, inner.y + y)) {
                    buf_cell.set_char(cell.symbol());
                    buf_cell.set_fg(cell.color());
                }
            }
        }
    }
}
