//! Constants used throughout the application

/// Absolute grayscale difference a pixel must exceed to count as changed
pub const DEFAULT_PIXEL_DELTA: u8 = 25;

/// Value written to changed pixels in the binary motion mask
pub const MASK_ON_VALUE: f64 = 255.0;

/// Side length of the square Gaussian kernel used to smooth the motion mask
pub const DEFAULT_BLUR_KERNEL: i32 = 5;

/// Motion score above which the user is considered to be exercising
pub const DEFAULT_MOTION_THRESHOLD: i32 = 1500;

/// Upper end of the threshold slider
pub const DEFAULT_TRACKBAR_MAX: i32 = 5000;

/// Delay passed to `wait_key` each loop iteration, in milliseconds
pub const DEFAULT_WAIT_KEY_MS: i32 = 30;

/// Default camera device index
pub const DEFAULT_CAMERA_INDEX: i32 = 0;

/// Capture buffer size requested from webcams to keep latency low
pub const DEFAULT_CAMERA_BUFFER_SIZE: i32 = 1;

pub const DEFAULT_WINDOW_NAME: &str = "Exercise Detection";
pub const TRACKBAR_NAME: &str = "Threshold";

/// Key codes that stop the capture loop
pub const KEY_ESCAPE: i32 = 27;
pub const KEY_QUIT_LOWER: i32 = b'q' as i32;
pub const KEY_QUIT_UPPER: i32 = b'Q' as i32;

/// Overlay text layout
pub const OVERLAY_LEFT_MARGIN: i32 = 10;
pub const OVERLAY_STATUS_Y: i32 = 30;
pub const OVERLAY_SCORE_Y: i32 = 60;
pub const OVERLAY_THRESHOLD_Y: i32 = 90;
pub const OVERLAY_STATUS_SCALE: f64 = 0.8;
pub const OVERLAY_DETAIL_SCALE: f64 = 0.6;
