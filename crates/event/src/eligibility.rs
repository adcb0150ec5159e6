use serde::Serialize;
use time::Date;

use crate::Event;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Eligibility {
    Open,
    Closed,
}

/// Same calendar day counts as upcoming.
pub fn is_upcoming(event: &Event, today: Date) -> bool {
    event.date >= today
}

pub fn is_signup_open(event: &Event, today: Date) -> bool {
    is_upcoming(event, today)
}

pub fn eligibility(event: &Event, today: Date) -> Eligibility {
    if is_signup_open(event, today) {
        Eligibility::Open
    } else {
        Eligibility::Closed
    }
}

/// Upcoming events in their input order.
pub fn upcoming(events: &[Event], today: Date) -> Vec<&Event> {
    events.iter().filter(|e| is_upcoming(e, today)).collect()
}

/// Splits events into `(upcoming, past)`, both keeping input order.
pub fn partition(events: &[Event], today: Date) -> (Vec<&Event>, Vec<&Event>) {
    events.iter().partition(|e| is_upcoming(e, today))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn event(id: i64, date: Date, time: Option<&str>) -> Event {
        Event {
            id,
            title: format!("event {id}"),
            date,
            time: time.map(str::to_owned),
            location: "Events at 1900".to_owned(),
            description: String::new(),
            cost: None,
            category: None,
        }
    }

    #[test]
    fn same_day_is_upcoming() {
        let today = date!(2026 - 01 - 20);
        assert!(is_upcoming(&event(1, today, None), today));
        assert!(is_signup_open(&event(1, today, Some("12:01 AM")), today));
    }

    #[test]
    fn boundary_is_inclusive() {
        let today = date!(2026 - 01 - 20);
        assert!(!is_upcoming(&event(1, date!(2026 - 01 - 19), None), today));
        assert!(is_upcoming(&event(1, date!(2026 - 01 - 21), None), today));
    }

    #[test]
    fn past_events_are_closed_regardless_of_time() {
        let today = date!(2026 - 01 - 20);
        for time in [None, Some("11:59 PM"), Some("all day"), Some("")] {
            let past = event(1, date!(2026 - 01 - 19), time);
            assert!(!is_signup_open(&past, today));
            assert_eq!(eligibility(&past, today), Eligibility::Closed);
        }
    }

    #[test]
    fn partition_keeps_input_order() {
        let today = date!(2026 - 03 - 01);
        let events = vec![
            event(1, date!(2026 - 04 - 01), None),
            event(2, date!(2026 - 02 - 01), None),
            event(3, date!(2026 - 03 - 01), None),
            event(4, date!(2025 - 12 - 31), None),
        ];

        let (upcoming, past) = partition(&events, today);
        assert_eq!(upcoming.iter().map(|e| e.id).collect::<Vec<_>>(), [1, 3]);
        assert_eq!(past.iter().map(|e| e.id).collect::<Vec<_>>(), [2, 4]);
    }

    #[test]
    fn repartitions_with_new_reference_day() {
        let events = vec![
            event(1, date!(2026 - 01 - 20), None),
            event(2, date!(2026 - 01 - 25), None),
        ];

        assert_eq!(upcoming(&events, date!(2026 - 01 - 20)).len(), 2);
        assert_eq!(upcoming(&events, date!(2026 - 01 - 21)).len(), 1);
        assert_eq!(upcoming(&events, date!(2026 - 01 - 20)).len(), 2);
        assert!(upcoming(&events, date!(2026 - 01 - 26)).is_empty());
    }
}
