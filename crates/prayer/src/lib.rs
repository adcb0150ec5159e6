mod request;
mod submit;

pub use request::*;
pub use submit::*;
