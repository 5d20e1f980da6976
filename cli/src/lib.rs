pub mod commands;
pub mod logging;
mod readline;
pub mod state;

pub use readline::readline;
pub use state::AppState;
