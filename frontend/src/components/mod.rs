pub mod configuration_panel;
pub mod countdown_display;
pub mod winner_modal;

pub use configuration_panel::ConfigurationPanel;
pub use countdown_display::CountdownDisplay;
pub use winner_modal::WinnerModal;
