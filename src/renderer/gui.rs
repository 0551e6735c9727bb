use quarkstrom::egui;

impl super::Renderer {
    pub fn show_gui(&mut self, ctx: &quarkstrom::egui::Context) {
        egui::Area::new("overlay")
            .fixed_pos(egui::pos2(8.0, 8.0))
            .show(ctx, |ui| {
                ui.colored_label(
                    egui::Color32::WHITE,
                    format!("FPS: {:.2}", self.frames.fps()),
                );
                ui.colored_label(
                    egui::Color32::WHITE,
                    format!("No. of Particles: {}", self.simulation.particles.len()),
                );
                if self.simulation.target_fps == 0 {
                    ui.colored_label(egui::Color32::YELLOW, "Frame cap off");
                }
            });
    }
}
