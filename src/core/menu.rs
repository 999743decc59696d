use crate::config::SiteProfile;
use crate::domain::model::{Menu, Tag};

/// Folds the extracted tag stream into a day-to-dishes table.
///
/// Dishes before the first day heading belong to no day and are dropped up
/// front. From there a single pass threads a current-day cursor: recognized
/// headings open (or reopen) a day, dishes append under the cursor, and an
/// unrecognized heading clears the cursor so the dishes that follow it are
/// dropped until the next recognized one.
pub fn build_menu(tags: Vec<Tag>, profile: &SiteProfile) -> Menu {
    let tags = discard_leading_dishes(tags);

    let mut menu = Menu::new();
    let mut current = None;
    for tag in tags {
        match tag {
            Tag::Day(heading) => match profile.day_tokens.day_for(&heading) {
                Some(day) => {
                    // Reopening an already-seen day starts its list over, so
                    // on a page that repeats a heading the later block wins.
                    menu.insert(day, Vec::new());
                    current = Some(day);
                }
                None => {
                    tracing::debug!("unrecognized day heading `{}`", heading);
                    current = None;
                }
            },
            Tag::Dish(dish) => {
                if let Some(day) = current {
                    menu.entry(day).or_default().push(dish);
                }
            }
        }
    }
    menu
}

fn discard_leading_dishes(mut tags: Vec<Tag>) -> Vec<Tag> {
    match tags.iter().position(|tag| matches!(tag, Tag::Day(_))) {
        Some(first_day) => {
            if first_day > 0 {
                tracing::debug!("dropping {} dishes listed before any day", first_day);
                tags.drain(..first_day);
            }
            tags
        }
        None => tags,
    }
}
