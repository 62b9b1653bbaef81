pub mod draw;
pub mod events;
pub mod layout;
pub mod run;
pub mod state;
pub mod views;

pub use events::{handle_key_event, Action};
pub use run::run;
pub use state::TuiState;
