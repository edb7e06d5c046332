// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.

// ==========================================================================
// Media Defaults
// ==========================================================================

/// Hero background image.
pub const DEFAULT_HERO_IMAGE: &str = "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?ixlib=rb-4.0.3&auto=format&fit=crop&w=2070&q=80";

/// Thumbnail of the institutional video card.
pub const DEFAULT_VIDEO_THUMBNAIL: &str = "https://images.unsplash.com/photo-1589939705384-5185137a7f0f?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80";

// ==========================================================================
// Comparison Defaults
// ==========================================================================

/// "Before" image of the portfolio comparison.
pub const DEFAULT_BEFORE_IMAGE: &str = "https://images.unsplash.com/photo-1594488518001-16c52683058c?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80";

/// "After" image of the portfolio comparison.
pub const DEFAULT_AFTER_IMAGE: &str = "https://images.unsplash.com/photo-1600607686527-6fb886090705?ixlib=rb-4.0.3&auto=format&fit=crop&w=1470&q=80";

// ==========================================================================
// Location Defaults
// ==========================================================================

/// Environment variable holding the Gemini API key.
pub const DEFAULT_LOCATION_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Request timeout for the location lookup (in seconds).
pub const DEFAULT_LOCATION_TIMEOUT_SECS: u64 = 15;

/// Minimum location timeout (in seconds).
pub const MIN_LOCATION_TIMEOUT_SECS: u64 = 1;

/// Maximum location timeout (in seconds).
pub const MAX_LOCATION_TIMEOUT_SECS: u64 = 120;
