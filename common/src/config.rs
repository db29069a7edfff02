//! Display geometry, label layout, loop cadences, and time-source settings.

// =============================================================================
// Display
// =============================================================================

/// Panel width in pixels (ST7735, portrait).
pub const SCREEN_WIDTH: u32 = 128;

/// Panel height in pixels.
pub const SCREEN_HEIGHT: u32 = 160;

// =============================================================================
// Labels
// =============================================================================

/// Title line, anchored top-middle.
pub const TITLE_TEXT: &str = "Lich nhac!";

/// Vertical offset of the title below the top edge.
pub const TITLE_DY: i32 = 5;

/// Caption above the clock, anchored top-left.
pub const SCHEDULE_TEXT: &str = "Uong thuoc luc:";
pub const SCHEDULE_DX: i32 = 5;
pub const SCHEDULE_DY: i32 = 30;

/// Live clock label, anchored top-left.
pub const TIME_DX: i32 = 5;
pub const TIME_DY: i32 = 50;

// =============================================================================
// Cadences
// =============================================================================

/// Period of the clock-formatting task: one wall-clock sample per second.
pub const CLOCK_UPDATE_MS: u64 = 1000;

/// Period of the redraw driver loop. Not a hard deadline; jitter under load
/// only delays the next frame.
pub const FRAME_MS: u64 = 10;

// =============================================================================
// Time source
// =============================================================================

/// SNTP pool queried by the sync task.
pub const SNTP_SERVER: &str = "pool.ntp.org";

/// Retry interval until the first successful sync.
pub const SNTP_RETRY_SECS: u64 = 10;

/// Re-anchor interval after the clock is synchronized.
pub const SNTP_RESYNC_SECS: u64 = 3600;

/// Fixed offset from UTC to display time, in seconds. The appliance ships
/// configured for Indochina Time (UTC+7).
pub const UTC_OFFSET_SECS: i32 = 7 * 3600;
