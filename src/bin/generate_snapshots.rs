//! Writes the snapshot files the viewer plays back.

use bevy::app::AppExit;
use bevy::log::LogPlugin;
use bevy::prelude::*;
use membrane_player::config::{self, GENERATED_LIPIDS, TOTAL_FRAMES};
use membrane_player::data::snapshot_file_name;
use membrane_player::sim::Simulation;

fn main() -> AppExit {
    let _ = dotenvy::dotenv();
    App::new()
        .add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_systems(Startup, generate)
        .run()
}

fn generate(mut exit: EventWriter<AppExit>) {
    let out_dir = config::snapshot_dir();
    if let Err(err) = std::fs::create_dir_all(&out_dir) {
        error!("cannot create {}: {err}", out_dir.display());
        exit.send(AppExit::error());
        return;
    }

    let mut sim = Simulation::new(GENERATED_LIPIDS);
    for index in 0..TOTAL_FRAMES {
        sim.step();
        let path = out_dir.join(snapshot_file_name(index));
        if let Err(err) = sim.save_frame(&path) {
            error!("{err}");
            exit.send(AppExit::error());
            return;
        }
    }

    info!(
        "wrote {TOTAL_FRAMES} snapshots of {GENERATED_LIPIDS} lipids to {}",
        out_dir.display()
    );
    exit.send(AppExit::Success);
}
