use std::collections::HashMap;

use chrono::Weekday;

/// The five days the menu page covers. The site-specific spelling of each day
/// lives in the profile (`DayTokens`), not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// Monday → Friday, the order the week is printed in.
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Sunday-based weekday number, Monday=2 through Friday=6.
    pub fn weekday_number(self) -> u32 {
        match self {
            Day::Monday => 2,
            Day::Tuesday => 3,
            Day::Wednesday => 4,
            Day::Thursday => 5,
            Day::Friday => 6,
        }
    }

    /// Maps a calendar weekday onto a menu day. Weekends have no menu.
    pub fn from_weekday(weekday: Weekday) -> Option<Day> {
        Day::ALL
            .into_iter()
            .find(|day| day.weekday_number() == weekday.number_from_sunday())
    }
}

/// One classified markup fragment: either a day heading or a dish entry,
/// carrying the label text cut out of the fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    Day(String),
    Dish(String),
}

/// Day → ordered dish names. Only days that appeared under a recognized day
/// heading are present; iteration order across days is not guaranteed.
pub type Menu = HashMap<Day, Vec<String>>;

/// One search hit: the day's site token and the dish as printed on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealMatch {
    pub day: String,
    pub dish: String,
}

/// Day selection applied to a meal search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Week,
    SingleDay(Day),
}

/// One typed command-line item produced by the argument parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentItem {
    Day(Day),
    Week,
    Meal(String),
    Order,
    Help,
    /// A token no flag recognizes, or `--today` on a weekend (with an
    /// explanatory message instead of the raw token).
    Unknown(String),
    /// A flag whose required value tokens were missing or collided with
    /// another flag; carries the diagnostic. Ends parsing.
    Malformed(String),
}

impl ArgumentItem {
    /// `--today`-resolved days and `--week` scope the query in time; at most
    /// one of them may appear.
    pub fn is_temporal_constraint(&self) -> bool {
        matches!(self, ArgumentItem::Day(_) | ArgumentItem::Week)
    }

    /// `--help` and `--order` must be the whole query.
    pub fn is_standalone_instruction(&self) -> bool {
        matches!(self, ArgumentItem::Help | ArgumentItem::Order)
    }
}

/// The parsed command line, in encounter order; built once per invocation.
pub type Query = Vec<ArgumentItem>;
