//! Shared numeric constants for the shapekit crate.

// ── Alignment ───────────────────────────────────────────────────

/// Default tolerance for "already aligned" checks and per-item move skipping.
pub const DEFAULT_ALIGN_EPSILON: f64 = 1e-6;

/// Half-pixel tolerance preset for screen-space editors.
pub const PIXEL_ALIGN_EPSILON: f64 = 0.5;

/// Environment variable overriding the alignment epsilon.
pub const ALIGN_EPSILON_ENV: &str = "SHAPEKIT_ALIGN_EPSILON";

// ── Color keys ──────────────────────────────────────────────────

/// First key handed out by a fresh registry (opaque, non-black).
pub const COLOR_KEY_BASE: u32 = 0xFF00_0001;

/// The counter wraps back to [`COLOR_KEY_BASE`] before reaching this value.
pub const COLOR_KEY_LIMIT: u32 = 0xFFFF_FFFE;

/// Keys whose RGB bits are all zero read back as background black.
pub const COLOR_KEY_RGB_MASK: u32 = 0x00FF_FFFF;

/// Number of independently locked shards in the key map.
pub const REGISTRY_SHARDS: usize = 16;

// ── Primitive defaults ──────────────────────────────────────────

/// Opaque white, the default fill for every primitive.
pub const DEFAULT_FILL: u32 = 0xFFFF_FFFF;
