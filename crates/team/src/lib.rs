mod profile;
mod query;

pub use profile::*;
pub use query::*;
