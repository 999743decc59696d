use crate::config::SiteProfile;
use crate::domain::model::{Day, MealMatch, Menu, Scope};

/// Case-insensitive substring search over the menu. Week scope walks every
/// day; single-day scope only that day's list. Matches carry the profile's
/// day token so the caller never re-derives labels.
pub fn search_menu(menu: &Menu, profile: &SiteProfile, meal: &str, scope: Scope) -> Vec<MealMatch> {
    let needle = meal.to_lowercase();
    match scope {
        Scope::SingleDay(day) => match menu.get(&day) {
            Some(dishes) => matches_for_day(day, dishes, &needle, profile),
            None => Vec::new(),
        },
        Scope::Week => menu
            .iter()
            .flat_map(|(day, dishes)| matches_for_day(*day, dishes, &needle, profile))
            .collect(),
    }
}

fn matches_for_day(
    day: Day,
    dishes: &[String],
    needle: &str,
    profile: &SiteProfile,
) -> Vec<MealMatch> {
    dishes
        .iter()
        .filter(|dish| dish.to_lowercase().contains(needle))
        .map(|dish| MealMatch {
            day: profile.day_tokens.token(day).to_string(),
            dish: dish.clone(),
        })
        .collect()
}
