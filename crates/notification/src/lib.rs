mod prayer;
mod service;
mod signup;
mod template;

pub use prayer::*;
pub use service::*;
pub use signup::*;
pub use template::Email;
