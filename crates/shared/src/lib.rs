mod command;
mod date;
pub mod form;

pub use command::*;
pub use date::*;
