pub mod form_state;
pub mod use_countdown;
pub mod use_spin_session;

pub use form_state::*;
pub use use_countdown::*;
pub use use_spin_session::*;
