/// Game tuning parameters, expressed against an 800x500 reference field.
///
/// Speeds are in field units per frame unit (one frame unit ~ 16.67 ms),
/// durations in seconds of simulated time.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 500.0;

    // Paddle (fractions of the field)
    pub const PADDLE_WIDTH_RATIO: f32 = 0.0125;
    pub const PADDLE_HEIGHT_RATIO: f32 = 0.22;
    pub const PADDLE_MARGIN_RATIO: f32 = 0.025;
    pub const PLAYER_SPEED: f32 = 7.0;
    pub const PADDLE_STEP: f32 = 10.0; // on-screen button step
    pub const HOLD_REPEAT_MS: f32 = 30.0;

    // Ball
    pub const BALL_RADIUS_RATIO: f32 = 0.01;
    pub const BALL_SPEED: f32 = 5.0;
    pub const RESET_SPEEDUP: f32 = 0.1; // fraction of base speed added per point
    pub const MAX_BALLS: usize = 2;

    // Opponent
    pub const OPPONENT_LERP: f32 = 0.1;

    // Power-ups
    pub const POWER_UP_RADIUS_RATIO: f32 = 0.02;
    pub const POWER_UP_SPAWN_INTERVAL: f32 = 10.0;
    pub const WIDEN_FACTOR: f32 = 1.5;
    pub const WIDEN_DURATION: f32 = 10.0;
    pub const FREEZE_DURATION: f32 = 5.0;

    // Score
    pub const WIN_SCORE: u8 = 3;

    // Timing
    pub const FRAME_MS: f64 = 16.666;
    pub const MAX_DT_UNITS: f32 = 6.0; // ~100 ms, clamp to prevent large jumps

    // Backdrop
    pub const STAR_COUNT: usize = 200;
    pub const ENERGY_LINE_COUNT: usize = 50;

    // Win banner animation, per frame unit
    pub const BANNER_GROWTH: f32 = 0.02;
}
