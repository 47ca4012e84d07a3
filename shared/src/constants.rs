pub const MIN_PRIZES: usize = 2;
pub const MAX_PRIZES: usize = 12;

pub const FULL_SPINS: f64 = 5.0;
pub const DEGREES_PER_TURN: f64 = 360.0;
pub const SPIN_DURATION_MS: u32 = 4000;

pub const BUZZWIRE_SECONDS: u32 = 60;
pub const GREENTEL_SECONDS: u32 = 300;
pub const SHOWCASE_SECONDS: u32 = 23 * 3600 + 59 * 60 + 29;
pub const TICK_INTERVAL_MS: u32 = 1000;
pub const AUDIO_LOOP_GAP_MS: u32 = 250;

// Prize names containing any of these (case-insensitive) are not announced.
pub const NON_PRIZE_SENTINELS: &[&str] = &["try again", "thank you for trying"];

pub const EMPTY_NAME_ERROR: &str = "Prize name cannot be empty";
pub const MAX_CAPACITY_ERROR: &str = "Max items reached";
pub const MIN_CAPACITY_ERROR: &str = "The wheel needs at least two prizes";
