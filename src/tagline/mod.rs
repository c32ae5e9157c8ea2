use crate::holiday::HolidayLookup;

use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

pub const NEW_YEAR: &[&str] = &[
    "Happy New Year!",
    "Time to start the New Year with some malware testing!",
    "Let's kick off the New Year with a bang, shall we?",
    "Ringing in the New Year with some malicious code!",
];

pub const INDEPENDENCE_DAY: &[&str] = &[
    "Happy 4th of July!",
    "Celebrate freedom with some malware testing!",
    "Let's light up the sky... and your computer with some malware!",
    "Yeah fireworks are a thrill, but have you tried testing malware?",
];

pub const THANKSGIVING: &[&str] = &[
    "Happy Thanksgiving!",
    "Gobble gobble... with some malware testing on the side!",
    "Thankful for all the new malware to test!",
    "Why watch the parade when you can test malware instead?",
];

pub const CHRISTMAS: &[&str] = &[
    "Merry Christmas!",
    "All we want for Christmas is some new malware to test!",
    "Tis the season for malware and mayhem!",
    "Deck the halls with bytes of malware!",
];

pub const EVERYDAY: &[&str] = &[
    "We're the reason antivirus software needs therapy.",
    "Stressing out your antivirus since 1/1/1970.",
    "Testing the untestable, one virus at a time.",
    "Chaos unleashed, solutions found.",
    "Your AV will need a vacation after this one!",
    "Choose an option: Persuade [] Intimidate [X] Leave []",
    "We promise we won't break your computer... too much.",
    "Are you tired of your AV working? Try Malbench today!",
    "You encountered a virus!  Run [] Hide [] Fight []",
    "Test malware, smash AV.",
    "Time to go to plan B!",
    "Kiss your computer goodbye!",
    "\"I didn't run this program, did you run this program?!\"",
    "Disabling their algorithms...",
    "Loading awesomeness [===============   ]",
    "Loading pixels...? [===               ]",
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Occasion {
    NewYear,
    IndependenceDay,
    Thanksgiving,
    Christmas,
    Everyday,
}

impl Occasion {
    /// Maps a holiday name to its tagline group. Earlier groups win when a name matches several.
    pub fn from_holiday(name: &str) -> Occasion {
        let name = name.to_lowercase();

        if name.contains("new year") {
            Occasion::NewYear
        } else if name.contains("independence day") {
            Occasion::IndependenceDay
        } else if name.contains("thanksgiving") {
            Occasion::Thanksgiving
        } else if name.contains("christmas") {
            Occasion::Christmas
        } else {
            Occasion::Everyday
        }
    }

    pub fn taglines(&self) -> &'static [&'static str] {
        match self {
            Occasion::NewYear => NEW_YEAR,
            Occasion::IndependenceDay => INDEPENDENCE_DAY,
            Occasion::Thanksgiving => THANKSGIVING,
            Occasion::Christmas => CHRISTMAS,
            Occasion::Everyday => EVERYDAY,
        }
    }
}

pub fn occasion<L: HolidayLookup + ?Sized>(lookup: &L, today: NaiveDate) -> Occasion {
    lookup
        .holiday(today)
        .map(|name| Occasion::from_holiday(&name))
        .unwrap_or(Occasion::Everyday)
}

pub fn select<L, R>(lookup: &L, today: NaiveDate, rng: &mut R) -> &'static str
where
    L: HolidayLookup + ?Sized,
    R: Rng + ?Sized,
{
    occasion(lookup, today)
        .taglines()
        .choose(rng)
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn draws(holiday: Option<&'static str>) -> Vec<&'static str> {
        let lookup = move |_: NaiveDate| holiday.map(str::to_string);

        (0..64)
            .map(|seed| select(&lookup, today(), &mut StdRng::seed_from_u64(seed)))
            .collect()
    }

    #[test]
    fn groups_have_expected_sizes() {
        assert_eq!(EVERYDAY.len(), 16);

        for group in [NEW_YEAR, INDEPENDENCE_DAY, THANKSGIVING, CHRISTMAS] {
            assert_eq!(group.len(), 4);
        }
    }

    #[test]
    fn holiday_names_pick_their_group() {
        let cases = [
            ("New Year's Day", NEW_YEAR),
            ("New Year's Day (observed)", NEW_YEAR),
            ("Independence Day", INDEPENDENCE_DAY),
            ("Thanksgiving", THANKSGIVING),
            ("Christmas Day (observed)", CHRISTMAS),
        ];

        for (name, group) in cases {
            for tagline in draws(Some(name)) {
                assert!(group.contains(&tagline), "{tagline:?} not drawn from {name:?}");
            }
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(Occasion::from_holiday("CHRISTMAS DAY"), Occasion::Christmas);
        assert_eq!(Occasion::from_holiday("thanksGIVING"), Occasion::Thanksgiving);
    }

    #[test]
    fn juneteenth_shares_independence_day_group() {
        // the full name still contains the substring, so it shares the July group
        assert_eq!(
            Occasion::from_holiday("Juneteenth National Independence Day"),
            Occasion::IndependenceDay
        );
    }

    #[test]
    fn unrecognized_or_absent_holiday_uses_everyday() {
        for holiday in [None, Some("Labor Day"), Some("")] {
            for tagline in draws(holiday) {
                assert!(EVERYDAY.contains(&tagline), "{tagline:?} not an everyday tagline");
            }
        }
    }

    #[test]
    fn every_everyday_tagline_is_reachable() {
        let seen = (0..2048)
            .map(|seed| select(&|_: NaiveDate| -> Option<String> { None }, today(), &mut StdRng::seed_from_u64(seed)))
            .collect::<std::collections::HashSet<&str>>();

        assert_eq!(seen.len(), EVERYDAY.len());
    }

    #[test]
    fn us_calendar_drives_selection() {
        let thanksgiving = NaiveDate::from_ymd_opt(2026, 11, 26).unwrap();
        let lookup = crate::holiday::UsHolidays::new();

        assert_eq!(occasion(&lookup, thanksgiving), Occasion::Thanksgiving);
        assert_eq!(occasion(&lookup, today()), Occasion::Everyday);
    }
}
