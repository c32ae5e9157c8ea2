use chrono::{Datelike, NaiveDate, Weekday};

/// Resolves a calendar date to the name of the public holiday on it, if any.
///
/// A lookup that cannot answer returns `None`; callers treat that the same as an ordinary day.
pub trait HolidayLookup {
    fn holiday(&self, date: NaiveDate) -> Option<String>;
}

impl<F> HolidayLookup for F
where
    F: Fn(NaiveDate) -> Option<String>,
{
    fn holiday(&self, date: NaiveDate) -> Option<String> {
        self(date)
    }
}

/// US federal holidays, including the weekday a weekend holiday is observed on.
///
/// Dates follow the law in force for the requested year: the Uniform Monday Holiday Act
/// moved several holidays to Mondays from 1971, and Thanksgiving was the last Thursday
/// of November until 1941.
#[derive(Clone, Copy, Debug, Default)]
pub struct UsHolidays;

impl UsHolidays {
    pub fn new() -> UsHolidays {
        UsHolidays
    }

    pub fn calendar(&self, year: i32) -> Vec<(NaiveDate, String)> {
        let mut days: Vec<(NaiveDate, String)> = Vec::new();
        let monday_act = year >= 1971;

        // (since, name, date, moved to a weekday when it falls on a weekend)
        let rules = [
            (1871, "New Year's Day", fixed(year, 1, 1), true),
            (1986, "Martin Luther King Jr. Day", nth(year, 1, Weekday::Mon, 3), false),
            (
                1879,
                "Washington's Birthday",
                if monday_act { nth(year, 2, Weekday::Mon, 3) } else { fixed(year, 2, 22) },
                false,
            ),
            (
                1888,
                "Memorial Day",
                if monday_act { last_weekday_of_month(year, 5, Weekday::Mon) } else { fixed(year, 5, 30) },
                false,
            ),
            (2021, "Juneteenth National Independence Day", fixed(year, 6, 19), true),
            (1871, "Independence Day", fixed(year, 7, 4), true),
            (1894, "Labor Day", nth(year, 9, Weekday::Mon, 1), false),
            (
                1937,
                "Columbus Day",
                if monday_act { nth(year, 10, Weekday::Mon, 2) } else { fixed(year, 10, 12) },
                false,
            ),
            (
                1938,
                if year < 1954 { "Armistice Day" } else { "Veterans Day" },
                if (1971..=1977).contains(&year) { nth(year, 10, Weekday::Mon, 4) } else { fixed(year, 11, 11) },
                !(1971..=1977).contains(&year),
            ),
            (
                1871,
                "Thanksgiving",
                if year <= 1941 { last_weekday_of_month(year, 11, Weekday::Thu) } else { nth(year, 11, Weekday::Thu, 4) },
                false,
            ),
            (1871, "Christmas Day", fixed(year, 12, 25), true),
        ];

        for (since, name, date, movable) in rules {
            if year < since {
                continue;
            }

            if let Some(date) = date {
                days.push((date, name.to_string()));

                if movable {
                    // a Saturday Jan 1 is observed on Dec 31 of the previous year
                    if let Some(observed) = observed(date).filter(|x| x.year() == year) {
                        days.push((observed, format!("{name} (observed)")));
                    }
                }
            }
        }

        if year + 1 >= 1871 {
            if let Some(observed) = fixed(year + 1, 1, 1).and_then(observed) {
                if observed.year() == year {
                    days.push((observed, "New Year's Day (observed)".to_string()));
                }
            }
        }

        days.sort_by_key(|(date, _)| *date);
        days
    }
}

impl HolidayLookup for UsHolidays {
    fn holiday(&self, date: NaiveDate) -> Option<String> {
        let names = self
            .calendar(date.year())
            .into_iter()
            .filter(|(day, _)| *day == date)
            .map(|(_, name)| name)
            .collect::<Vec<String>>();

        if names.is_empty() {
            None
        } else {
            Some(names.join("; "))
        }
    }
}

fn observed(date: NaiveDate) -> Option<NaiveDate> {
    match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => None,
    }
}

fn fixed(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

fn nth(year: i32, month: u32, weekday: Weekday, n: u8) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

fn last_weekday_of_month(year: i32, month: u32, weekday: Weekday) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5)
        .or_else(|| NaiveDate::from_weekday_of_month_opt(year, month, weekday, 4))
}
