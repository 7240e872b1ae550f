//! Keyboard shortcuts, driven by text events so shifted characters arrive
//! as typed.

use super::Viewer;

impl Viewer {
    /// Apply any shortcuts typed this frame. Skipped while a widget owns the
    /// keyboard.
    pub fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let events = ctx.input(|i| i.events.clone());
        for event in events {
            if let egui::Event::Text(text) = event {
                for character in text.chars() {
                    self.shortcut(character);
                }
            }
        }
    }

    fn shortcut(&mut self, character: char) {
        match character {
            ' ' | '.' => self.next_image(),
            ',' => self.previous_image(),

            '-' | '_' => self.view.set_zoom(self.view.zoom / 2.0),
            '+' | '=' => self.view.set_zoom(self.view.zoom * 2.0),
            'z' => self.view.set_zoom(1.0),

            '[' => self.nudge_exposure(-1.0),
            ']' => self.nudge_exposure(1.0),
            '{' => self.nudge_gamma(-0.1),
            '}' => self.nudge_gamma(0.1),

            '1' => {
                self.tone.exposure = 0.0;
                self.tone.gamma = 1.0;
            }
            '2' => {
                self.tone.exposure = 0.0;
                self.tone.gamma = 2.2;
            }

            _ => {}
        }
    }

    fn next_image(&mut self) {
        self.view.current = (self.view.current + 1) % self.image_count();
    }

    fn previous_image(&mut self) {
        self.view.current = (self.view.current + self.image_count() - 1) % self.image_count();
    }

    fn nudge_exposure(&mut self, stops: f32) {
        self.tone.exposure = (self.tone.exposure + stops).clamp(-20.0, 20.0);
    }

    fn nudge_gamma(&mut self, amount: f32) {
        self.tone.gamma = (self.tone.gamma + amount).clamp(0.1, 5.0);
    }
}
