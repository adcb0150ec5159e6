use time::Date;

use crate::{Event, is_upcoming};

/// Nearest upcoming workshop. Same-date workshops resolve to the first in
/// input order.
pub fn spotlight(events: &[Event], today: Date) -> Option<&Event> {
    events
        .iter()
        .filter(|e| e.is_workshop() && is_upcoming(e, today))
        .min_by_key(|e| e.date)
}
