use serde::Serialize;
use time::{Date, Month};

use crate::{Eligibility, Event, eligibility};

/// The month currently displayed by a calendar. Owned by the caller and
/// passed in on every render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MonthCursor {
    pub year: i32,
    #[serde(serialize_with = "serialize_month")]
    pub month: Month,
}

fn serialize_month<S: serde::Serializer>(month: &Month, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(*month as u8)
}

impl MonthCursor {
    pub fn new(year: i32, month: Month) -> Self {
        Self { year, month }
    }

    pub fn from_date(date: Date) -> Self {
        Self::new(date.year(), date.month())
    }

    pub fn from_numbers(year: i32, month: u8) -> Option<Self> {
        let month = Month::try_from(month).ok()?;
        // Keeps first_day() infallible.
        Date::from_calendar_date(year, month, 1).ok()?;

        Some(Self::new(year, month))
    }

    /// `None` past the last representable month.
    pub fn next(self) -> Option<Self> {
        match self.month {
            Month::December => Self::from_numbers(self.year.checked_add(1)?, 1),
            month => Some(Self::new(self.year, month.next())),
        }
    }

    /// `None` before the first representable month.
    pub fn prev(self) -> Option<Self> {
        match self.month {
            Month::January => Self::from_numbers(self.year.checked_sub(1)?, 12),
            month => Some(Self::new(self.year, month.previous())),
        }
    }

    pub fn days_in_month(self) -> u8 {
        (28..=31)
            .rev()
            .find(|day| self.day(*day).is_some())
            .unwrap_or(28)
    }

    pub fn first_day(self) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, 1).ok()
    }

    pub fn day(self, day: u8) -> Option<Date> {
        Date::from_calendar_date(self.year, self.month, day).ok()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay<'a> {
    pub day: u8,
    pub date: Date,
    pub is_today: bool,
    /// First event dated on this day. Later events on the same day are not
    /// surfaced by the grid.
    pub event: Option<&'a Event>,
    pub signup: Option<Eligibility>,
}

pub type CalendarWeek<'a> = [Option<CalendarDay<'a>>; 7];

#[derive(Debug, Clone, Serialize)]
pub struct CalendarGrid<'a> {
    pub month: MonthCursor,
    /// `None` when the neighbouring month cannot be displayed.
    pub prev: Option<MonthCursor>,
    pub next: Option<MonthCursor>,
    /// Sunday-first rows, padded with empty cells before day 1 and after the
    /// last day.
    pub weeks: Vec<CalendarWeek<'a>>,
}

impl CalendarGrid<'_> {
    pub fn cells(&self) -> impl Iterator<Item = &Option<CalendarDay<'_>>> {
        self.weeks.iter().flatten()
    }

    pub fn days(&self) -> impl Iterator<Item = &CalendarDay<'_>> {
        self.cells().flatten()
    }
}

pub fn calendar_grid(events: &[Event], month: MonthCursor, today: Date) -> CalendarGrid<'_> {
    let days_in_month = month.days_in_month();
    let leading = month
        .first_day()
        .map(|d| d.weekday().number_days_from_sunday())
        .unwrap_or_default();

    let mut weeks = Vec::with_capacity(6);
    let mut week: CalendarWeek<'_> = Default::default();
    let mut column = usize::from(leading);

    for day in 1..=days_in_month {
        let Some(date) = month.day(day) else {
            continue;
        };

        let event = events.iter().find(|e| e.date == date);

        week[column] = Some(CalendarDay {
            day,
            date,
            is_today: date == today,
            event,
            signup: event.map(|e| eligibility(e, today)),
        });

        column += 1;
        if column == 7 {
            weeks.push(std::mem::take(&mut week));
            column = 0;
        }
    }

    if column > 0 {
        weeks.push(week);
    }

    CalendarGrid {
        month,
        prev: month.prev(),
        next: month.next(),
        weeks,
    }
}
