//! Timeline scrubber: bottom panel with play/pause and a frame slider.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::render::BevyBridge;
use crate::scene::Player;

pub fn timeline_plugin(app: &mut App) {
    super::ensure_egui(app);
    app.add_systems(Update, (timeline_ui_system, playback_keys_system));
}

/// Label of the play/pause trigger: the action a click performs.
pub fn play_button_label(playing: bool) -> &'static str {
    if playing {
        "Pause"
    } else {
        "Play"
    }
}

fn timeline_ui_system(
    mut contexts: EguiContexts,
    player: Option<ResMut<Player>>,
    mut bridge: BevyBridge,
) {
    let Some(mut player) = player else {
        return;
    };
    let player = &mut *player;
    let last = player.controller.frame_count().saturating_sub(1);

    egui::TopBottomPanel::bottom("timeline")
        .frame(
            egui::Frame::default()
                .fill(egui::Color32::from_rgba_premultiplied(15, 15, 25, 210))
                .inner_margin(egui::Margin::same(8))
                .corner_radius(egui::CornerRadius::same(0)),
        )
        .show(contexts.ctx_mut(), |ui| {
            ui.style_mut().override_text_style = Some(egui::TextStyle::Monospace);
            ui.visuals_mut().override_text_color = Some(egui::Color32::from_rgb(200, 220, 240));

            ui.horizontal(|ui| {
                if ui
                    .button(play_button_label(player.controller.is_playing()))
                    .clicked()
                {
                    player.controller.toggle_play();
                }

                ui.separator();

                let mut index = player.controller.display_index();
                ui.spacing_mut().slider_width = (ui.available_width() - 60.0).max(100.0);
                let response = ui.add(egui::Slider::new(&mut index, 0..=last).integer());
                if response.changed() {
                    if let Err(err) =
                        player
                            .controller
                            .scrub(index, &player.registry, &mut bridge)
                    {
                        warn!("ignoring scrub: {err}");
                    }
                }
            });
        });
}

/// Space toggles playback unless an egui widget owns keyboard focus.
pub fn space_toggles_playback(space_pressed: bool, ui_has_focus: bool) -> bool {
    space_pressed && !ui_has_focus
}

fn playback_keys_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    player: Option<ResMut<Player>>,
) {
    let Some(mut player) = player else {
        return;
    };
    let ui_has_focus = contexts
        .ctx_mut()
        .memory(|memory| memory.focused().is_some());
    if space_toggles_playback(keys.just_pressed(KeyCode::Space), ui_has_focus) {
        let playing = player.controller.toggle_play();
        debug!("playback {}", if playing { "resumed" } else { "paused" });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_shows_next_action() {
        assert_eq!(play_button_label(true), "Pause");
        assert_eq!(play_button_label(false), "Play");
    }

    #[test]
    fn space_is_ignored_while_a_widget_has_focus() {
        assert!(space_toggles_playback(true, false));
        assert!(!space_toggles_playback(true, true));
        assert!(!space_toggles_playback(false, false));
    }

    #[test]
    fn focused_widget_is_visible_through_egui_memory() {
        let ctx = egui::Context::default();
        let focused = |ctx: &egui::Context| ctx.memory(|memory| memory.focused().is_some());
        assert!(!focused(&ctx));

        ctx.memory_mut(|memory| memory.request_focus(egui::Id::new("slider")));
        assert!(focused(&ctx));
        assert!(!space_toggles_playback(true, focused(&ctx)));
    }
}
