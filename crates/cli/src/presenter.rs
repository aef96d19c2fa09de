//! Off-screen buffer presenter over a ratatui terminal.
//!
//! Screens repaint an owned [`Buffer`] each frame; `present` blits it
//! onto the terminal frame. Keeping the surface a plain buffer means the
//! same screens render into test buffers with no terminal at all.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use screenplay_core::{Frontend, FrontendError};

use crate::terminal::Tui;

pub struct TuiPresenter {
    terminal: Tui,
    surface: Buffer,
}

impl TuiPresenter {
    pub fn new(terminal: Tui) -> Result<Self, FrontendError> {
        let mut presenter = Self {
            terminal,
            surface: Buffer::empty(Rect::new(0, 0, 0, 0)),
        };
        presenter.fit_surface()?;
        Ok(presenter)
    }

    /// Match the surface to the current terminal size. Screens repaint
    /// fully every frame, so old contents are simply dropped.
    fn fit_surface(&mut self) -> Result<(), FrontendError> {
        let size = self.terminal.size().map_err(FrontendError::from)?;
        let area = Rect::new(0, 0, size.width, size.height);
        if area != self.surface.area {
            self.surface = Buffer::empty(area);
        }
        Ok(())
    }
}

impl Frontend for TuiPresenter {
    type Surface = Buffer;

    fn surface(&mut self) -> &mut Buffer {
        // Resize between frames is picked up here; a failed size query
        // leaves the previous geometry in place until present() reports.
        let _ = self.fit_surface();
        self.surface.reset();
        &mut self.surface
    }

    fn present(&mut self) -> Result<(), FrontendError> {
        let src = &self.surface;
        self.terminal
            .draw(|frame| {
                Blit(src).render(frame.area(), frame.buffer_mut());
            })
            .map_err(FrontendError::from)?;
        Ok(())
    }
}

/// Copies one buffer's cell region onto another at the origin.
struct Blit<'a>(&'a Buffer);

impl Widget for Blit<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let copy = self.0.area.intersection(area);
        for y in copy.top()..copy.bottom() {
            for x in copy.left()..copy.right() {
                if let (Some(src), Some(dst)) = (self.0.cell((x, y)), buf.cell_mut((x, y))) {
                    *dst = src.clone();
                }
            }
        }
    }
}
