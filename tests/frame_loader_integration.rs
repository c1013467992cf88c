//! Frame loading integration tests against real folders on disk.

use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

use flipbook::FlipbookError;
use flipbook::components::animation::{
    Animation, AnimationLoopType, AnimationSettings, noop_callback,
};
use flipbook::resources::config::FlipbookConfig;
use flipbook::resources::frameloader::FrameLoader;
use flipbook::scene::Scene;

/// Write a 4x2 PNG whose red channel is `id`.
fn write_frame(dir: &Path, name: &str, id: u8) {
    RgbaImage::from_pixel(4, 2, Rgba([id, 0, 0, 255]))
        .save(dir.join(name))
        .unwrap();
}

fn frame_ids(frames: &[flipbook::frame::Frame]) -> Vec<u8> {
    frames.iter().map(|f| f.image().get_pixel(0, 0)[0]).collect()
}

fn numbered_folder() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    // written out of order on purpose
    for i in [10u8, 2, 1, 3, 11] {
        write_frame(dir.path(), &format!("{i}.png"), i);
    }
    fs::write(dir.path().join("notes.txt"), "not a frame").unwrap();
    fs::create_dir(dir.path().join("99.png")).unwrap();
    dir
}

#[test]
fn load_sorts_numerically_and_filters() {
    let dir = numbered_folder();
    let frames = FrameLoader::default().load(dir.path()).unwrap();
    assert_eq!(frame_ids(&frames), vec![1, 2, 3, 10, 11]);
    assert!(frames.iter().all(|f| f.size() == (4, 2)));
}

#[test]
fn frame_paths_ignore_directories_and_other_extensions() {
    let dir = numbered_folder();
    let names: Vec<String> = FrameLoader::default()
        .frame_paths(dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["1.png", "2.png", "3.png", "10.png", "11.png"]);
}

#[test]
fn extension_filter_is_configurable() {
    let dir = tempfile::tempdir().unwrap();
    write_frame(dir.path(), "1.png", 1);
    fs::write(dir.path().join("2.jpg"), b"jpeg bytes").unwrap();

    let png_only = FrameLoader::default().load(dir.path()).unwrap();
    assert_eq!(png_only.len(), 1);

    let jpg_only = FrameLoader::new(["jpg"]).frame_paths(dir.path()).unwrap();
    assert_eq!(jpg_only.len(), 1);
}

#[test]
fn empty_folder_is_no_frames_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("readme.md"), "# nothing").unwrap();
    let err = FrameLoader::default().load(dir.path()).unwrap_err();
    assert!(matches!(err, FlipbookError::NoFrames(path) if path == dir.path()));
}

#[test]
fn corrupt_png_is_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("1.png"), b"definitely not a png").unwrap();
    let err = FrameLoader::default().load(dir.path()).unwrap_err();
    assert!(matches!(err, FlipbookError::Decode { .. }));
}

#[test]
fn from_folder_path_uses_first_frame_size_by_default() {
    let dir = numbered_folder();
    let anim = Animation::from_folder_path(
        dir.path(),
        &FrameLoader::default(),
        AnimationSettings::default().with_scale(2.0),
        noop_callback(),
    )
    .unwrap();
    assert_eq!(anim.frame_count(), 5);
    assert_eq!(anim.size(), (8, 4));
    assert_eq!(anim.flip_interval(), 200);
    assert_eq!(anim.tag(), "Animation");
}

#[test]
fn from_folder_path_backward_starts_on_last_file() {
    let dir = numbered_folder();
    let anim = Animation::from_folder_path(
        dir.path(),
        &FrameLoader::default(),
        AnimationSettings::default()
            .with_size(2, 2)
            .with_loop_type(AnimationLoopType::Backward),
        noop_callback(),
    )
    .unwrap();
    assert_eq!(anim.size(), (2, 2));
    assert_eq!(anim.current_image().image().get_pixel(0, 0)[0], 11);
}

#[test]
fn from_folder_path_propagates_loader_errors() {
    let err = Animation::from_folder_path(
        "/no/such/frames",
        &FrameLoader::default(),
        AnimationSettings::default(),
        noop_callback(),
    )
    .unwrap_err();
    assert!(matches!(err, FlipbookError::Io { .. }));
}

#[test]
fn scene_snapshot_saves_png() {
    let dir = numbered_folder();
    let anim = Animation::from_folder_path(
        dir.path(),
        &FrameLoader::default(),
        AnimationSettings::default().with_loop_type(AnimationLoopType::Repeating),
        noop_callback(),
    )
    .unwrap();
    let mut config = FlipbookConfig::new();
    config.screen_width = 16;
    config.screen_height = 16;
    config.oscillation_enabled = false;

    let mut scene = Scene::new(&config, anim);
    scene.play();
    scene.tick(200);

    let out = dir.path().join("out.png");
    scene.screen().save(&out).unwrap();
    let saved = image::open(&out).unwrap().into_rgba8();
    assert_eq!(saved.dimensions(), (16, 16));
    // second loaded frame (id 2) centred on the screen
    assert_eq!(saved.get_pixel(8, 8), &Rgba([2, 0, 0, 255]));
}
