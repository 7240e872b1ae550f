//! Pure UI state, separate from the image data.

const MIN_ZOOM: f32 = 1.0 / 64.0;
const MAX_ZOOM: f32 = 64.0;

/// Where and how the current image is shown.
pub struct ViewState {
    /// Index of the image on screen.
    pub current: usize,

    /// Display scale, `1.0` is one texel per point.
    pub zoom: f32,

    /// Offset of the image origin from the panel origin, in points.
    pub pan: egui::Vec2,

    /// Background level behind the image, `0.0..=1.0`.
    pub background: f32,
}

impl ViewState {
    /// Initial view: first image, 1:1, no pan.
    pub fn new(background: f32) -> Self {
        Self {
            current: 0,
            zoom: 1.0,
            pan: egui::Vec2::ZERO,
            background,
        }
    }

    /// Set the zoom, kept within sane display bounds.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }
}
