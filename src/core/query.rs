use chrono::Weekday;

use crate::domain::model::{ArgumentItem, Day, Query};

pub const USAGE: &str = "\
cantine - weekly menu of Chez Gustave from the command line

Usage: cantine [OPTIONS]

Options:
  -m, --meal <MEAL>  search dishes containing MEAL (repeatable)
  -t, --today        today's menu, monday to friday
  -w, --week         the whole week
  -o, --order        open the online order page
  -h, --help         print this help
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flag {
    Meal,
    Today,
    Week,
    Order,
    Help,
}

impl Flag {
    fn lookup(token: &str) -> Option<Flag> {
        match token {
            "-m" | "--meal" => Some(Flag::Meal),
            "-t" | "--today" => Some(Flag::Today),
            "-w" | "--week" => Some(Flag::Week),
            "-o" | "--order" => Some(Flag::Order),
            "-h" | "--help" => Some(Flag::Help),
            _ => None,
        }
    }

    /// How many value tokens the flag consumes after itself.
    fn arity(self) -> usize {
        match self {
            Flag::Meal => 1,
            _ => 0,
        }
    }

    fn canonical(self) -> &'static str {
        match self {
            Flag::Meal => "--meal",
            Flag::Today => "--today",
            Flag::Week => "--week",
            Flag::Order => "--order",
            Flag::Help => "--help",
        }
    }
}

/// Turns raw command-line tokens into typed query items.
///
/// Each token is looked up in the flag table; misses become `Unknown` items
/// and parsing continues, so the validator can report every stray token at
/// once. A flag whose value slot is missing or occupied by another flag
/// yields a single `Malformed` item and parsing stops there, discarding the
/// rest of the line. The parser never rejects a query itself.
pub fn parse_query(tokens: &[String], today: Weekday) -> Query {
    let mut items = Query::new();
    let mut index = 0;
    while index < tokens.len() {
        let token = &tokens[index];
        index += 1;

        let Some(flag) = Flag::lookup(token) else {
            items.push(ArgumentItem::Unknown(token.clone()));
            continue;
        };

        let arity = flag.arity();
        let values = &tokens[index..];
        if values.len() < arity {
            items.push(ArgumentItem::Malformed(format!(
                "{} expects a value",
                flag.canonical()
            )));
            break;
        }
        if let Some(other) = values[..arity].iter().find_map(|value| Flag::lookup(value)) {
            items.push(ArgumentItem::Malformed(format!(
                "{} expects a value, not the flag {}",
                flag.canonical(),
                other.canonical()
            )));
            break;
        }
        index += arity;
        items.push(resolve(flag, &values[..arity], today));
    }
    items
}

fn resolve(flag: Flag, values: &[String], today: Weekday) -> ArgumentItem {
    match flag {
        Flag::Meal => ArgumentItem::Meal(values[0].clone()),
        Flag::Today => match Day::from_weekday(today) {
            Some(day) => ArgumentItem::Day(day),
            // The restaurant only serves monday to friday, so --today has no
            // day to resolve to at the weekend.
            None => ArgumentItem::Unknown(
                "--today: the menu runs monday to friday and today is a weekend day".to_string(),
            ),
        },
        Flag::Week => ArgumentItem::Week,
        Flag::Order => ArgumentItem::Order,
        Flag::Help => ArgumentItem::Help,
    }
}
