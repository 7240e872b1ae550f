//! The floating HUD: image info, cursor readout, tone controls.

use egui::{ComboBox, Grid, Slider, Window};
use raster_image::TonemapOperator;

use super::Viewer;

impl Viewer {
    /// Show the HUD for the current image. `cursor_pixel` is in image
    /// space; out-of-bounds coordinates read as the zero color.
    pub fn show_hud(&mut self, ctx: &egui::Context, cursor_pixel: (i32, i32)) {
        let image = &self.slots[self.view.current].image;
        let (x, y) = cursor_pixel;

        let filename = image.path.display().to_string();
        let (width, height, channels) = (image.width, image.height, image.channels);
        let is_hdr = image.is_hdr();
        let ldr = image.sample_ldr(x, y);
        let hdr = image.sample_hdr(x, y);

        Window::new("hdr-image-viewer")
            .resizable(false)
            .default_pos([8.0, 8.0])
            .show(ctx, |ui| {
                Grid::new("info").num_columns(2).show(ui, |ui| {
                    ui.label("filename");
                    ui.label(&filename);
                    ui.end_row();

                    ui.label("w");
                    ui.label(width.to_string());
                    ui.end_row();

                    ui.label("h");
                    ui.label(height.to_string());
                    ui.end_row();

                    ui.label("c");
                    ui.label(channels.to_string());
                    ui.end_row();
                });

                ui.separator();

                Grid::new("readout").num_columns(3).show(ui, |ui| {
                    ui.label("");
                    ui.label("ldr");
                    if is_hdr {
                        ui.label("hdr");
                    }
                    ui.end_row();

                    for (channel, name) in ["r", "g", "b", "a"].into_iter().enumerate() {
                        ui.label(name);
                        ui.monospace(ldr[channel].to_string());
                        if is_hdr {
                            ui.monospace(format!("{:.4}", hdr[channel]));
                        }
                        ui.end_row();
                    }
                });

                if is_hdr {
                    ui.separator();

                    ui.add(Slider::new(&mut self.tone.exposure, -20.0..=20.0).text("exposure"));
                    ui.add(Slider::new(&mut self.tone.gamma, 0.1..=5.0).text("gamma"));

                    ComboBox::from_label("tonemap")
                        .selected_text(self.tone.operator.name())
                        .show_ui(ui, |ui| {
                            for operator in TonemapOperator::ALL {
                                ui.selectable_value(
                                    &mut self.tone.operator,
                                    operator,
                                    operator.name(),
                                );
                            }
                        });
                }
            });
    }
}
