mod migrate;
mod serve;

pub use migrate::*;
pub use serve::*;
