//! Fullscreen toggle on `F`.

use bevy::prelude::*;
use bevy::window::{MonitorSelection, PrimaryWindow, WindowMode};

pub fn fullscreen_plugin(app: &mut App) {
    app.add_systems(Update, toggle_fullscreen_system);
}

/// Windowed goes borderless fullscreen on the current monitor; any
/// fullscreen mode goes back to windowed.
pub fn toggled_mode(mode: WindowMode) -> WindowMode {
    match mode {
        WindowMode::Windowed => WindowMode::BorderlessFullscreen(MonitorSelection::Current),
        _ => WindowMode::Windowed,
    }
}

fn toggle_fullscreen_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
) {
    if !keys.just_pressed(KeyCode::KeyF) {
        return;
    }
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };
    window.mode = toggled_mode(window.mode);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_between_windowed_and_borderless() {
        let full = toggled_mode(WindowMode::Windowed);
        assert_eq!(
            full,
            WindowMode::BorderlessFullscreen(MonitorSelection::Current)
        );
        assert_eq!(toggled_mode(full), WindowMode::Windowed);
    }
}
