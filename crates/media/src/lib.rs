mod drive;
mod item;

pub use drive::*;
pub use item::*;
