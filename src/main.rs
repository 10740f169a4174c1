//! Membrane: lipid bilayer snapshot viewer. Runs the membrane_player app.

use membrane_player::sdk::PlayerBuilder;

fn main() {
    let _ = dotenvy::dotenv();
    PlayerBuilder::new().build().run();
}
