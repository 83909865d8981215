use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use std::time::{Duration, Instant};
use tracing::info;

use crate::ui::renderer::GridWidget;
use crate::ui::tui::Tui;
use steppe_core::{Automaton, Ruleset};

/// Owns one automaton and drives the render/step loop around it.
pub struct App<R: Ruleset> {
    pub running: bool,
    pub paused: bool,
    pub extinct: bool,
    pub world: Automaton<R>,
    /// Generation budget; the loop stops once `world.tick` reaches it.
    pub steps: u64,
    pub delay: Duration,
    pub time_scale: f64,
}

impl<R: Ruleset> App<R> {
    pub fn new(world: Automaton<R>, steps: u64, delay_ms: u64) -> Self {
        Self {
            running: true,
            paused: false,
            extinct: false,
            world,
            steps,
            delay: Duration::from_millis(delay_ms),
            time_scale: 1.0,
        }
    }

    /// Checks the termination conditions and advances one generation if
    /// neither holds. Returns false once the run is over.
    fn advance(&mut self) -> bool {
        if self.world.is_extinct() {
            self.extinct = true;
            return false;
        }
        if self.world.tick >= self.steps {
            return false;
        }
        self.world.step();
        true
    }

    pub fn run(&mut self, tui: &mut Tui) -> Result<()> {
        let mut last_tick = Instant::now();

        while self.running {
            let effective_delay =
                Duration::from_secs_f64(self.delay.as_secs_f64() / self.time_scale);

            tui.terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Min(0)])
                    .split(f.area());

                let state = if self.paused { "paused" } else { "running" };
                let status = format!(
                    "{} | speed x{:.1} | [q] quit  [space] pause  [+/-] speed",
                    state, self.time_scale
                );
                f.render_widget(
                    Paragraph::new(status).style(Style::default().fg(Color::DarkGray)),
                    chunks[0],
                );
                f.render_widget(GridWidget::new(&self.world), chunks[1]);
            })?;

            let timeout = effective_delay.saturating_sub(last_tick.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        match key.code {
                            KeyCode::Char('q') => self.running = false,
                            KeyCode::Char(' ') => self.paused = !self.paused,
                            KeyCode::Char('+') | KeyCode::Char('=') => {
                                self.time_scale = (self.time_scale + 0.5).min(4.0)
                            }
                            KeyCode::Char('-') | KeyCode::Char('_') => {
                                self.time_scale = (self.time_scale - 0.5).max(0.5)
                            }
                            _ => {}
                        }
                    }
                }
            }

            if last_tick.elapsed() >= effective_delay {
                if !self.paused && !self.advance() {
                    self.running = false;
                }
                last_tick = Instant::now();
            }
        }
        Ok(())
    }

    /// No terminal, no delay: steps until the generation budget is spent or
    /// the world goes extinct.
    pub fn run_headless(&mut self) {
        info!(
            width = self.world.width,
            height = self.world.height,
            steps = self.steps,
            "running headless"
        );
        while self.advance() {}
        self.running = false;
        info!(tick = self.world.tick, extinct = self.extinct, "run finished");
    }
}
