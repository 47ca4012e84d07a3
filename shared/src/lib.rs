pub mod constants;
pub mod image_ref;
pub mod prize_list;
pub mod shared_countdown;
pub mod shared_session;
pub mod shared_wheel_game;
pub mod validation;

pub use image_ref::ImageRef;
pub use prize_list::{AddRejected, EntryId, PrizeEntry, PrizeList, PrizeListError};
pub use shared_countdown::{CountdownTimer, TickOutcome};
pub use shared_session::{AcknowledgeOutcome, Announcement, DrawMode, SessionController, SpinState, Winner};
pub use shared_wheel_game::SpinPlan;
