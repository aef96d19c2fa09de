//! Presentation seam between the runtime and a rendering backend.

use crate::error::FrontendError;

/// Rendering backend driven by the director once per frame.
///
/// The backend owns the drawing surface. Each frame the director hands
/// the surface to the active screen for a full repaint, then calls
/// [`present`](Self::present) to flip it to the display.
pub trait Frontend {
    /// The drawing surface screens repaint. An opaque 2D target from the
    /// runtime's point of view; screens know the concrete type.
    type Surface;

    /// Surface for the frame being built.
    fn surface(&mut self) -> &mut Self::Surface;

    /// Flip the built frame to the display.
    fn present(&mut self) -> Result<(), FrontendError>;
}
