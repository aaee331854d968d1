//! Fixed-rate render loop with polled cancellation.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent};

use crate::effects::Effect;
use crate::surface::Surface;

/// Drives one effect against one surface at a target frame rate.
///
/// Each iteration polls for a cancellation key without blocking, advances
/// the effect, rescales and renders, then sleeps whatever remains of the
/// frame interval. A frame that runs long simply starts the next iteration
/// immediately; there is no frame dropping or catch-up.
pub struct Runner {
    surface: Surface,
    frame_duration: Duration,
    preserve_aspect: bool,
}

impl Runner {
    /// `rows`/`cols` size the logical grid; `fps` must be positive.
    pub fn new(rows: usize, cols: usize, fps: f64, preserve_aspect: bool) -> anyhow::Result<Self> {
        anyhow::ensure!(fps > 0.0, "frame rate must be positive, got {fps}");
        Ok(Self {
            surface: Surface::new(rows, cols)?,
            frame_duration: Duration::from_secs_f64(1.0 / fps),
            preserve_aspect,
        })
    }

    /// Runs until a cancellation key arrives. Cancellation happens at the
    /// top of the iteration, before any update or render, so a pending `q`
    /// never waits out a frame sleep.
    pub fn run(&mut self, effect: &mut dyn Effect) -> anyhow::Result<()> {
        effect.setup(self.surface.active_mut());

        loop {
            if event::poll(Duration::ZERO)? {
                if let Event::Key(KeyEvent { code, .. }) = event::read()? {
                    if is_cancel_key(code) {
                        return Ok(());
                    }
                }
            }

            let frame_start = Instant::now();

            effect.advance(self.surface.active_mut());
            self.surface.scale(self.preserve_aspect);
            self.surface.render()?;

            if let Some(remaining) = self.frame_duration.checked_sub(frame_start.elapsed()) {
                std::thread::sleep(remaining);
            }
        }
    }
}

/// Case-insensitive `q`, or Esc.
fn is_cancel_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
}
