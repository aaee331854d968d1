//! Terminal surface: active/scaled grids, raw-mode lifecycle, frame output.

use std::io::Write;

use crossterm::terminal;
use gridfx_core::{resample_background, Grid};

/// Fallback dimensions when the terminal size cannot be queried at startup.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

/// Owns the logical (active) and physical (scaled) grids plus the terminal
/// mode guard. Exactly one `Surface` may be live at a time: raw mode and
/// cursor visibility are process-wide state with a single owner.
pub struct Surface {
    active: Grid,
    scaled: Grid,
    term_cols: u16,
    term_rows: u16,
    frame_buf: Vec<u8>,
    _mode: RawModeGuard,
}

impl Surface {
    /// Allocates the active grid at the given logical resolution and
    /// switches the terminal into raw mode with the cursor hidden.
    pub fn new(rows: usize, cols: usize) -> anyhow::Result<Self> {
        let mode = RawModeGuard::acquire()?;
        let (term_cols, term_rows) = terminal::size().unwrap_or(DEFAULT_SIZE);
        Ok(Self {
            active: Grid::new(rows, cols),
            scaled: Grid::new(term_rows as usize, term_cols as usize),
            term_cols,
            term_rows,
            frame_buf: Vec::with_capacity(256 * 1024),
            _mode: mode,
        })
    }

    pub fn active_mut(&mut self) -> &mut Grid {
        &mut self.active
    }

    pub fn scaled(&self) -> &Grid {
        &self.scaled
    }

    /// Re-reads the physical terminal size. A failed query keeps the last
    /// known dimensions; the renderer carries on at the stale size rather
    /// than aborting an interactive session.
    fn query_size(&mut self) {
        if let Ok((cols, rows)) = terminal::size() {
            self.term_cols = cols;
            self.term_rows = rows;
        }
    }

    /// Regenerates the scaled grid from the active grid at the terminal's
    /// current size. Safe to call every frame; the user can resize the
    /// terminal at any time and the next call picks it up.
    pub fn scale(&mut self, preserve_aspect: bool) {
        self.query_size();
        self.scaled
            .resize(self.term_rows as usize, self.term_cols as usize);
        resample_background(&self.active, &mut self.scaled, preserve_aspect);
    }

    /// Serializes the whole scaled grid row-major behind a cursor-home +
    /// erase-below prefix, then writes and flushes stdout once.
    pub fn render(&mut self) -> anyhow::Result<()> {
        self.frame_buf.clear();
        self.frame_buf.extend_from_slice(b"\x1b[H\x1b[J");
        for cell in self.scaled.cells() {
            cell.write_ansi(&mut self.frame_buf);
        }

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&self.frame_buf)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Scoped ownership of the terminal's mode: raw input and hidden cursor on
/// acquisition, unconditionally restored on drop. Pair with
/// [`install_panic_hook`] so a panicking frame also restores the terminal.
struct RawModeGuard;

impl RawModeGuard {
    fn acquire() -> anyhow::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(b"\x1b[?25l")?;
        stdout.flush()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Best-effort restoration: reset colors, show the cursor, leave raw mode.
/// Errors are ignored; there is nothing useful to do with them on teardown.
fn restore_terminal() {
    let mut stdout = std::io::stdout().lock();
    let _ = stdout.write_all(b"\x1b[0m\x1b[?25h");
    let _ = stdout.flush();
    let _ = terminal::disable_raw_mode();
}

/// Chains a panic hook that restores the terminal before the default hook
/// prints the panic message, so the message lands on a usable screen.
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        original_hook(info);
    }));
}
