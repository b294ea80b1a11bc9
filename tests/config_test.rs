//! Configuration file loading, saving and validation

use exercise_motion::{
    config::{Config, EXAMPLE_CONFIG},
    error::AppError,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_save_and_load() {
    let mut config = Config::default();
    config.camera.index = 1;
    config.detection.threshold = 2200;
    config.detection.blur_kernel = 7;
    config.display.window_name = "Workout".to_string();

    let file = NamedTempFile::new().unwrap();
    config.to_file(file.path()).unwrap();

    let loaded = Config::from_file(file.path()).unwrap();
    assert_eq!(loaded, config);
    assert!(loaded.validate().is_ok());
}

#[test]
fn test_load_example_config() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(EXAMPLE_CONFIG.as_bytes()).unwrap();

    let loaded = Config::from_file(file.path()).unwrap();
    assert_eq!(loaded, Config::default());
}

#[test]
fn test_missing_file() {
    let result = Config::from_file("/nonexistent/motion.yaml");
    assert!(matches!(result, Err(AppError::Io(_))));
}

#[test]
fn test_malformed_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"detection: [threshold").unwrap();

    match Config::from_file(file.path()) {
        Err(AppError::ConfigError(msg)) => assert!(msg.contains("Failed to parse config")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}

#[test]
fn test_out_of_range_pixel_delta() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"detection:\n  pixel_delta: 300\n").unwrap();

    assert!(matches!(Config::from_file(file.path()), Err(AppError::ConfigError(_))));
}

#[test]
fn test_loaded_config_can_fail_validation() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"detection:\n  blur_kernel: 6\n").unwrap();

    let loaded = Config::from_file(file.path()).unwrap();
    match loaded.validate() {
        Err(AppError::ConfigError(msg)) => assert!(msg.contains("Blur kernel")),
        other => panic!("Expected ConfigError, got {other:?}"),
    }
}
