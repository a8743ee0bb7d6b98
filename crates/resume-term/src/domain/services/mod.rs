pub mod actions;
mod app_state;
pub mod events;
pub mod handlers;
mod interpreter;
mod scroll;
mod scrollback_view;
mod session;

pub use app_state::*;
pub use interpreter::*;
pub use scroll::*;
pub use scrollback_view::*;
pub use session::*;
