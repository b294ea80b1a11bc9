//! Tests for command-line argument parsing and config merging

use clap::Parser;
use exercise_motion::{
    app::{GuiMode, VideoSource},
    cli::Args,
    config::Config,
    constants::DEFAULT_MOTION_THRESHOLD,
};

fn parse(args: &[&str]) -> Result<Args, clap::Error> {
    Args::try_parse_from(std::iter::once("exercise-motion").chain(args.iter().copied()))
}

#[test]
fn test_help_argument() {
    let err = parse(&["--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn test_no_arguments() {
    let args = parse(&[]).unwrap();
    assert_eq!(args.cam, None);
    assert_eq!(args.video, None);
    assert!(!args.debug);

    let app_config = args.app_config(&Config::default());
    assert_eq!(app_config.video_source, VideoSource::Camera(0));
    assert_eq!(app_config.gui_mode, GuiMode::Window);
    assert_eq!(app_config.threshold, DEFAULT_MOTION_THRESHOLD);
    assert_eq!(app_config.max_frames, None);
}

#[test]
fn test_cam_argument() {
    let args = parse(&["--cam", "2"]).unwrap();
    assert_eq!(args.app_config(&Config::default()).video_source, VideoSource::Camera(2));
}

#[test]
fn test_video_argument() {
    let args = parse(&["-v", "workout.mp4"]).unwrap();
    assert_eq!(
        args.app_config(&Config::default()).video_source,
        VideoSource::File("workout.mp4".to_string())
    );
}

#[test]
fn test_cam_video_conflict() {
    let err = parse(&["--cam", "0", "--video", "workout.mp4"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_threshold_and_frames() {
    let args = parse(&["-t", "800", "--max-frames", "120"]).unwrap();
    let app_config = args.app_config(&Config::default());
    assert_eq!(app_config.threshold, 800);
    assert_eq!(app_config.max_frames, Some(120));
}

#[test]
fn test_invalid_threshold() {
    assert!(parse(&["--threshold", "lots"]).is_err());
}

#[test]
fn test_gui_modes() {
    for (name, expected) in [("none", GuiMode::None), ("window", GuiMode::Window), ("sideways", GuiMode::Window)] {
        let args = parse(&["--gui", name]).unwrap();
        assert_eq!(args.app_config(&Config::default()).gui_mode, expected);
    }
}

#[test]
fn test_arguments_override_config() {
    let mut config = Config::default();
    config.camera.index = 3;
    config.detection.threshold = 900;
    config.display.gui = false;

    let args = parse(&[]).unwrap();
    let app_config = args.app_config(&config);
    assert_eq!(app_config.video_source, VideoSource::Camera(3));
    assert_eq!(app_config.threshold, 900);
    assert_eq!(app_config.gui_mode, GuiMode::None);

    let args = parse(&["--cam", "1", "-t", "50", "-g", "window"]).unwrap();
    let app_config = args.app_config(&config);
    assert_eq!(app_config.video_source, VideoSource::Camera(1));
    assert_eq!(app_config.threshold, 50);
    assert_eq!(app_config.gui_mode, GuiMode::Window);
}

#[test]
fn test_config_and_debug_flags() {
    let args = parse(&["-C", "motion.yaml", "-d"]).unwrap();
    assert_eq!(args.config.as_deref(), Some("motion.yaml"));
    assert!(args.debug);
}
