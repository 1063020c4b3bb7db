// Shared simulation and visual tuning constants for the particle backdrop.

// Pointer proximity zones (surface pixels)
pub const ORBIT_RADIUS: f32 = 250.0; // outer edge of the swirl zone
pub const REPEL_RADIUS: f32 = 15.0; // inside this the pointer pushes particles away

// Orbit forces
pub const ORBIT_SPEED: f32 = 0.08; // tangential speed at zero distance, before gain
pub const ORBIT_TANGENT_GAIN: f32 = 18.0;
pub const ORBIT_PULL_STRENGTH: f32 = 0.025; // centripetal pull per pixel of displacement

// Repel zone
pub const REPEL_PUSH: f32 = 0.8;

// Per-frame velocity damping
pub const FRICTION: f32 = 0.97;

// Viewport modes
pub const COMPACT_VIEWPORT_MAX_WIDTH: f32 = 1024.0;
pub const PARTICLE_COUNT_DESKTOP: usize = 150;
pub const PARTICLE_COUNT_COMPACT: usize = 80;

// Particle look
pub const PARTICLE_SIZE_MIN: f32 = 1.0;
pub const PARTICLE_SIZE_MAX: f32 = 3.0;
pub const PARTICLE_OPACITY: f32 = 0.7;
pub const DRIFT_SPEED: f32 = 0.6;

// Deep blue palette
pub const DEFAULT_PALETTE: [&str; 5] = ["#3b82f6", "#1e40af", "#60a5fa", "#1e3a8a", "#93c5fd"];

// Connector lines
pub const CONNECTOR_DISTANCE: f32 = 130.0;
pub const CONNECTOR_COLOR: &str = "rgba(59, 130, 246, 0.1)";
pub const CONNECTOR_MAX_ALPHA: f32 = 0.4;
pub const CONNECTOR_WIDTH: f32 = 0.5;

// Horizontal track
pub const SCROLL_PER_SLIDE_VIEWPORTS: f32 = 0.5; // vertical scroll per slide, in viewport heights
