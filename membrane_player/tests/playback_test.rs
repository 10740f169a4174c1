use std::path::PathBuf;
use std::sync::Arc;

use membrane_player::data::{FetchError, LoadError, Position3, SnapshotDir, SnapshotSource};
use membrane_player::playback::{EntityRegistry, FrameApplied, PlaybackController};
use membrane_player::render::{Appearance, RecordingBridge};
use membrane_player::SnapshotStore;

fn fixture(name: &str) -> SnapshotDir {
    SnapshotDir::new(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name),
    )
}

#[tokio::test]
async fn two_frame_fixture_plays_lipids_and_pins_protein() {
    let frames = SnapshotStore::new(fixture("two_frames"))
        .load_all(2)
        .await
        .expect("fixture should load");
    let frames = Arc::new(frames);

    let mut bridge = RecordingBridge::new();
    let registry = EntityRegistry::populate(&frames, &mut bridge).unwrap();
    let mut controller = PlaybackController::new(Arc::clone(&frames));

    assert_eq!(registry.lipid_count(), 2);
    let protein = bridge.sphere(registry.protein_handles()[0]).clone();
    assert_eq!(protein.position, Position3::new(1.0, 2.0, 3.0));
    assert_eq!(protein.radius, 0.5);
    assert_eq!(protein.appearance, Appearance::Protein);

    controller.tick(&registry, &mut bridge);
    assert_eq!(
        bridge.positions(registry.lipid_handles()),
        vec![Position3::new(0.0, 0.0, 0.5), Position3::new(1.0, -1.0, -0.5)]
    );

    controller.tick(&registry, &mut bridge);
    assert_eq!(
        bridge.positions(registry.lipid_handles()),
        vec![Position3::new(0.1, 0.0, 0.5), Position3::new(1.1, -1.0, -0.5)]
    );
    assert_eq!(controller.state().current_index, 0);

    for _ in 0..7 {
        controller.tick(&registry, &mut bridge);
    }
    assert_eq!(bridge.sphere(registry.protein_handles()[0]), &protein);
}

#[tokio::test]
async fn missing_file_becomes_absent_frame() {
    let frames = SnapshotStore::new(fixture("two_frames"))
        .load_all(3)
        .await
        .expect("frame 0 exists, so loading succeeds");

    assert_eq!(frames.len(), 3);
    assert_eq!(frames.missing_indices(), vec![2]);
    assert_eq!(frames.missing_count(), 1);

    let frames = Arc::new(frames);
    let mut bridge = RecordingBridge::new();
    let registry = EntityRegistry::populate(&frames, &mut bridge).unwrap();
    let mut controller = PlaybackController::new(frames);

    controller.scrub(1, &registry, &mut bridge).unwrap();
    let before = bridge.positions(registry.lipid_handles());
    assert_eq!(
        controller.scrub(2, &registry, &mut bridge),
        Ok(FrameApplied::Missing)
    );
    assert_eq!(bridge.positions(registry.lipid_handles()), before);
}

#[tokio::test]
async fn first_frame_without_lipids_is_malformed() {
    let err = SnapshotStore::new(fixture("malformed"))
        .load_all(2)
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::MalformedSnapshot(_)));
}

#[tokio::test]
async fn missing_directory_is_malformed() {
    let err = SnapshotStore::new(fixture("does_not_exist"))
        .load_all(60)
        .await
        .unwrap_err();
    assert!(matches!(err, LoadError::MalformedSnapshot(_)));
}

#[tokio::test]
async fn fetch_reports_io_and_parse_errors() {
    let missing = fixture("two_frames").fetch(5).await.unwrap_err();
    assert!(matches!(missing, FetchError::Io { .. }));

    let dir = std::env::temp_dir().join(format!("membrane-parse-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("frame_00000.json"), "{ not json").unwrap();

    let bad = SnapshotDir::new(&dir).fetch(0).await.unwrap_err();
    assert!(matches!(bad, FetchError::Parse { .. }));

    std::fs::remove_dir_all(&dir).unwrap();
}
