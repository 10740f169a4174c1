mod hud;
mod timeline;
mod window;

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPlugin};

pub use hud::hud_plugin;
pub use timeline::{play_button_label, timeline_plugin};
pub use window::{fullscreen_plugin, toggled_mode};

/// Whether egui owns the pointer this frame; camera input is ignored then.
#[derive(Resource, Default)]
pub struct PointerOverUi(pub bool);

fn ensure_egui(app: &mut App) {
    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin)
            .init_resource::<PointerOverUi>()
            .add_systems(PostUpdate, track_pointer_system);
    }
}

fn track_pointer_system(mut contexts: EguiContexts, mut pointer: ResMut<PointerOverUi>) {
    let ctx = contexts.ctx_mut();
    pointer.0 = ctx.is_pointer_over_area() || ctx.wants_pointer_input();
}
