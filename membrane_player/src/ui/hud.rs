//! HUD overlay: frame position, particle counts, FPS.

use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::scene::Player;

pub fn hud_plugin(app: &mut App) {
    super::ensure_egui(app);
    if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
        app.add_plugins(FrameTimeDiagnosticsPlugin);
    }
    app.add_systems(Update, hud_overlay_system);
}

fn hud_overlay_system(
    mut contexts: EguiContexts,
    player: Option<Res<Player>>,
    diagnostics: Res<DiagnosticsStore>,
) {
    let fps = diagnostics
        .get(&FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|d| d.smoothed())
        .unwrap_or(0.0);

    egui::Window::new("Membrane")
        .anchor(egui::Align2::LEFT_TOP, [10.0, 10.0])
        .resizable(false)
        .collapsible(false)
        .title_bar(false)
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            let Some(player) = player else {
                ui.label("Loading snapshots…");
                ui.label(format!("FPS  {fps:.0}"));
                return;
            };
            let controller = &player.controller;
            let frames = controller.frames();

            ui.label(
                egui::RichText::new(frame_label(
                    controller.display_index(),
                    controller.frame_count(),
                ))
                .size(16.0)
                .color(egui::Color32::from_rgb(100, 220, 180)),
            );
            ui.add_space(4.0);

            ui.label(format!("Lipids    {}", player.registry.lipid_count()));
            ui.label(format!("Proteins  {}", player.registry.protein_count()));
            let missing = frames.missing_count();
            if missing > 0 {
                ui.label(format!("Missing   {missing} frames"));
            }
            ui.add_space(4.0);

            ui.separator();
            ui.label(format!("FPS  {fps:.0}"));
        });
}

fn frame_label(index: usize, count: usize) -> String {
    format!("Frame {index:>3} / {}", count.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_label_shows_last_index() {
        assert_eq!(frame_label(0, 60), "Frame   0 / 59");
        assert_eq!(frame_label(59, 60), "Frame  59 / 59");
    }

    #[test]
    fn frame_label_handles_empty() {
        assert_eq!(frame_label(0, 0), "Frame   0 / 0");
    }
}
