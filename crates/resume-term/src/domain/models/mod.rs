mod action;
mod command;
mod entry;
mod event;
mod resume;
mod resume_source;

pub use action::*;
pub use command::*;
pub use entry::*;
pub use event::*;
pub use resume::*;
pub use resume_source::*;
