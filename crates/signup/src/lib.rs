mod form;
mod notifier;
mod pipeline;
mod query;
mod record;
mod value_object;

pub use form::*;
pub use notifier::*;
pub use pipeline::*;
pub use query::*;
pub use record::*;
pub use value_object::*;
