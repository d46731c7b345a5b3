// Layout and tuning constants shared by the orchestrator and the renderer.

/// Water shader phase advance per rendered frame. Frame-count-driven on
/// purpose: apparent flow speed follows the display refresh rate, not
/// wall-clock time.
pub const WATER_PHASE_STEP: f32 = 1.0 / 80.0;

// Camera
pub const CAMERA_EYE: [f32; 3] = [-254.0, 153.0, 951.0];
pub const ORBIT_TARGET: [f32; 3] = [-73.0, 54.0, 75.0];
pub const CAMERA_NEAR: f32 = 1.0;
pub const CAMERA_FAR: f32 = 20000.0;

// Field-of-view interpolation clamps (CSS pixels / degrees)
pub const FOV_NARROW_WIDTH: f32 = 360.0;
pub const FOV_WIDE_WIDTH: f32 = 1920.0;
pub const FOV_NARROW_DEG: f32 = 104.0;
pub const FOV_WIDE_DEG: f32 = 45.0;

// Renderer
pub const MAX_PIXEL_RATIO: f64 = 2.0; // bounds GPU cost on high-density screens

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05; // per-frame easing toward queued rotation

// Platform and emitter layout, (x, z) world units
pub const BASE_POSITIONS: [[f32; 2]; 5] = [
    [0.0, 200.0],
    [-440.0, 200.0],
    [440.0, 200.0],
    [105.0, 440.0],
    [-265.0, 440.0],
];
pub const BLOB_POSITIONS: [[f32; 2]; 5] = [
    [200.0, 0.0],
    [200.0, -440.0],
    [200.0, 440.0],
    [440.0, 105.0],
    [440.0, -265.0],
];

// Marker heights above the water plane
pub const BASE_HEIGHT: f32 = 40.0;
pub const BLOB_HOVER_HEIGHT: f32 = 90.0;

// Marker sizing (world units)
pub const BASE_MARKER_SCALE: f32 = 60.0;
pub const BLOB_MARKER_SCALE: f32 = 34.0;

// Blob animation shaping
pub const BLOB_BOB_FREQ: f32 = 1.4; // radians per elapsed second
pub const BLOB_BOB_AMPLITUDE: f32 = 18.0; // world units
pub const BLOB_PULSE_FREQ: f32 = 3.1;
pub const BLOB_SETTLE: f32 = 0.92; // per-frame decay toward rest while off

// Sun drift driven by the water phase
pub const SUN_ELEVATION_BASE: f32 = 0.18; // radians above the horizon
pub const SUN_ELEVATION_SWAY: f32 = 0.04;
pub const SUN_AZIMUTH_BASE: f32 = 2.4;
pub const SUN_DRIFT_RATE: f32 = 0.02;

// Wall model placement
pub const WALL_POSITION: [f32; 3] = [-600.0, 0.0, -200.0];
