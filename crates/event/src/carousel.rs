use time::Date;

use crate::{Event, is_upcoming};

/// Upcoming events ascending by date, browsed one slide at a time.
///
/// The current slide index lives with the caller; every navigation method
/// takes it and returns the new one.
#[derive(Debug, Clone)]
pub struct Carousel<'a> {
    items: Vec<&'a Event>,
}

impl<'a> Carousel<'a> {
    pub fn new(events: &'a [Event], today: Date) -> Self {
        Self {
            items: list_view(events, today),
        }
    }

    pub fn items(&self) -> &[&'a Event] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a Event> {
        self.items.get(index).copied()
    }

    /// Direct dot selection. Out of range selects nothing.
    pub fn select(&self, index: usize) -> Option<usize> {
        (index < self.items.len()).then_some(index)
    }

    /// Advancing past the last slide wraps to the first.
    pub fn next(&self, index: usize) -> Option<usize> {
        let len = self.items.len();
        (len > 0).then(|| (index % len + 1) % len)
    }

    /// Stepping back from the first slide wraps to the last.
    pub fn prev(&self, index: usize) -> Option<usize> {
        let len = self.items.len();
        (len > 0).then(|| match index % len {
            0 => len - 1,
            i => i - 1,
        })
    }
}

/// Upcoming events ascending by date, same-date events in input order.
pub fn list_view(events: &[Event], today: Date) -> Vec<&Event> {
    let mut items = events
        .iter()
        .filter(|e| is_upcoming(e, today))
        .collect::<Vec<_>>();
    items.sort_by_key(|e| e.date);

    items
}
