//! The viewer application: image display, pan/zoom, HUD, live retuning.

mod hud;
mod shortcuts;
mod view_state;

use std::time::Instant;

use egui::{ColorImage, TextureHandle, TextureOptions};
use raster_image::{RasterImage, ToneParams};
use tracing::debug;

pub use view_state::ViewState;

/// A loaded image plus its uploaded texture, if any.
struct Slot {
    image: RasterImage,
    texture: Option<TextureHandle>,
}

/// Application state driving the repaint loop.
pub struct Viewer {
    slots: Vec<Slot>,

    /// UI-side tone controls. Applied to the current image whenever they
    /// differ from the parameters recorded on it.
    tone: ToneParams,

    view: ViewState,

    /// Which image the window title currently names.
    titled: Option<usize>,
}

impl Viewer {
    /// Wrap the loaded images; textures are uploaded lazily on first view.
    pub fn new(images: Vec<RasterImage>, tone: ToneParams, background: f32) -> Self {
        assert!(!images.is_empty(), "the viewer needs at least one image");

        let slots = images
            .into_iter()
            .map(|image| Slot {
                image,
                texture: None,
            })
            .collect();

        Self {
            slots,
            tone,
            view: ViewState::new(background),
            titled: None,
        }
    }

    fn image_count(&self) -> usize {
        self.slots.len()
    }

    /// Re-derive the current image's display buffer when the controls have
    /// moved, then refresh its texture.
    fn retune(&mut self, ctx: &egui::Context) {
        let slot = &mut self.slots[self.view.current];
        if !slot.image.is_hdr() || slot.image.tone == self.tone {
            return;
        }

        let start = Instant::now();
        tonemapper::apply(&mut slot.image, self.tone);
        debug!(
            "Tonemapping {} took {}ms",
            slot.image.path.display(),
            start.elapsed().as_millis()
        );

        self.refresh_texture(ctx);
    }

    /// Upload the current image's display buffer, creating the texture on
    /// first use.
    fn refresh_texture(&mut self, ctx: &egui::Context) {
        let index = self.view.current;
        let slot = &mut self.slots[index];
        let pixels = color_image(&slot.image);

        match &mut slot.texture {
            Some(texture) => texture.set(pixels, TextureOptions::NEAREST),
            None => {
                slot.texture =
                    Some(ctx.load_texture(format!("image-{index}"), pixels, TextureOptions::NEAREST));
            }
        }
    }

    fn update_title(&mut self, ctx: &egui::Context) {
        if self.titled == Some(self.view.current) {
            return;
        }

        let image = &self.slots[self.view.current].image;
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(format!(
            "hdr-image-viewer | {} | {}x{}@{}",
            image.path.display(),
            image.width,
            image.height,
            image.channels
        )));

        self.titled = Some(self.view.current);
    }

    /// Draw the current image with pan and zoom and return the image-space
    /// pixel under the cursor. An off-screen sentinel is returned when the
    /// cursor is absent, which the sampler reads as the zero color.
    fn show_image(&mut self, ctx: &egui::Context) -> (i32, i32) {
        let mut cursor_pixel = (i32::MIN, i32::MIN);

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

                let level = (self.view.background.clamp(0.0, 1.0) * 255.0) as u8;
                painter.rect_filled(response.rect, 0.0, egui::Color32::from_gray(level));

                if response.dragged() {
                    self.view.pan += response.drag_delta();
                }

                if response.hovered() {
                    let scroll = ui.input(|i| i.raw_scroll_delta.y);
                    if scroll != 0.0 {
                        self.view.set_zoom(self.view.zoom * (scroll * 0.005).exp2());
                    }
                }

                let slot = &self.slots[self.view.current];
                let origin = response.rect.min + self.view.pan;
                let size = egui::vec2(slot.image.width as f32, slot.image.height as f32)
                    * self.view.zoom;

                if let Some(texture) = &slot.texture {
                    painter.image(
                        texture.id(),
                        egui::Rect::from_min_size(origin, size),
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }

                if let Some(hover) = response.hover_pos() {
                    let position = (hover - origin) / self.view.zoom;
                    cursor_pixel = (position.x.round() as i32, position.y.round() as i32);
                }
            });

        cursor_pixel
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.retune(ctx);

        if self.slots[self.view.current].texture.is_none() {
            self.refresh_texture(ctx);
        }

        self.update_title(ctx);

        let cursor_pixel = self.show_image(ctx);
        self.show_hud(ctx, cursor_pixel);
    }
}

/// Widen the display buffer to RGBA for texture upload.
fn color_image(image: &RasterImage) -> ColorImage {
    let (width, height) = (image.width as usize, image.height as usize);

    let mut rgba = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            rgba.extend(image.sample_ldr(x as i32, y as i32));
        }
    }

    ColorImage::from_rgba_unmultiplied([width, height], &rgba)
}
