//! Application state module

mod app_state;
mod forms;
mod notice;
mod session;

pub use app_state::*;
pub use forms::*;
pub use notice::*;
pub use session::*;
