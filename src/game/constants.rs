//! Constants of the game rules. Speeds and distances are in playfield pixels per tick and assume the default tick
//! cadence.

/// Ball side length, as a fraction of the playfield width.
pub const BALL_WIDTH_RATIO: f64 = 0.012;
pub const BALL_DEFAULT_SPEED: f64 = 5.0;
pub const BALL_SPEED_LIMIT: f64 = 10.0;
/// Distance kept between a served ball and the horizontal walls, in ball widths.
pub const SERVE_MARGIN_IN_BALL_WIDTHS: f64 = 5.0;

pub const PAD_HEIGHT_RATIO: f64 = 0.10;
pub const PAD_WIDTH_RATIO: f64 = 0.014;
pub const PAD_SPEED: f64 = 6.0;
/// Left edge of the left pad, as a fraction of the playfield width.
pub const LEFT_PAD_X_RATIO: f64 = 0.10;
/// Right edge of the right pad, as a fraction of the playfield width.
pub const RIGHT_PAD_X2_RATIO: f64 = 0.90;

/// Half-height of the band around the playfield's vertical middle where a recentering pad stops.
pub const RECENTER_DEAD_ZONE: f64 = 10.0;

pub const HIGHLIGHT_SCORE: u32 = 9;
pub const WINNING_SCORE: u32 = 10;

pub const DEFAULT_TICK_MILLIS: u64 = 10;

pub const DIVIDER_X_OFFSET: f64 = 5.0;
pub const DIVIDER_DASH_WIDTH: f64 = 10.0;
pub const DIVIDER_DASH_HEIGHT: f64 = 20.0;
pub const DIVIDER_DASH_STEP: f64 = 50.0;
