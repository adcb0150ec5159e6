mod calendar;
mod carousel;
mod eligibility;
mod event;
mod query;
mod spotlight;

pub use calendar::*;
pub use carousel::*;
pub use eligibility::*;
pub use event::*;
pub use query::*;
pub use spotlight::*;
