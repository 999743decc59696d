use std::io::Write;

use crate::config::SiteProfile;
use crate::core::extract::extract_tags;
use crate::core::filter::search_menu;
use crate::core::menu::build_menu;
use crate::core::query::USAGE;
use crate::domain::model::{ArgumentItem, Day, Menu, Scope};
use crate::domain::ports::{LinkOpener, PageSource};
use crate::utils::error::Result;

/// Maps a validated query onto the pipeline. Standalone items act on their
/// own; everything else is a meal search whose scope comes from the query's
/// temporal item, defaulting to the whole week. The menu page is fetched at
/// most once per run, and only for queries that need it.
pub struct Dispatcher<S: PageSource, L: LinkOpener> {
    profile: SiteProfile,
    source: S,
    opener: L,
}

impl<S: PageSource, L: LinkOpener> Dispatcher<S, L> {
    pub fn new(profile: SiteProfile, source: S, opener: L) -> Self {
        Self {
            profile,
            source,
            opener,
        }
    }

    pub fn run<W: Write>(&self, query: &[ArgumentItem], out: &mut W) -> Result<()> {
        if let [item] = query {
            match item {
                ArgumentItem::Help => {
                    write!(out, "{}", USAGE)?;
                    return Ok(());
                }
                ArgumentItem::Order => {
                    self.opener.open(&self.profile.order_url)?;
                    writeln!(out, "opening {}", self.profile.order_url)?;
                    return Ok(());
                }
                ArgumentItem::Day(day) => return self.show_day(*day, out),
                ArgumentItem::Week => return self.show_week(out),
                _ => {}
            }
        }
        self.run_searches(query, out)
    }

    fn show_day<W: Write>(&self, day: Day, out: &mut W) -> Result<()> {
        let menu = self.load_menu()?;
        self.write_day(&menu, day, out)
    }

    fn show_week<W: Write>(&self, out: &mut W) -> Result<()> {
        let menu = self.load_menu()?;
        for day in Day::ALL {
            self.write_day(&menu, day, out)?;
        }
        Ok(())
    }

    fn run_searches<W: Write>(&self, query: &[ArgumentItem], out: &mut W) -> Result<()> {
        let scope = resolve_scope(query);
        let menu = self.load_menu()?;
        for item in query {
            if let ArgumentItem::Meal(meal) = item {
                let matches = search_menu(&menu, &self.profile, meal, scope);
                if matches.is_empty() {
                    match scope {
                        Scope::Week => writeln!(out, "no dish matching \"{}\" this week", meal)?,
                        Scope::SingleDay(day) => writeln!(
                            out,
                            "no dish matching \"{}\" on {}",
                            meal,
                            self.profile.day_tokens.token(day)
                        )?,
                    }
                } else {
                    for found in &matches {
                        writeln!(out, "{}: {}", found.day, found.dish)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn load_menu(&self) -> Result<Menu> {
        let markup = self.source.fetch_text(&self.profile.menu_url)?;
        let tags = extract_tags(&markup, &self.profile);
        tracing::debug!("extracted {} tags from the menu page", tags.len());
        Ok(build_menu(tags, &self.profile))
    }

    fn write_day<W: Write>(&self, menu: &Menu, day: Day, out: &mut W) -> Result<()> {
        let label = self.profile.day_tokens.token(day);
        match menu.get(&day) {
            Some(dishes) if !dishes.is_empty() => {
                writeln!(out, "{}:", label)?;
                for dish in dishes {
                    writeln!(out, "  - {}", dish)?;
                }
            }
            _ => writeln!(out, "{}: no dishes listed", label)?,
        }
        Ok(())
    }
}

fn resolve_scope(query: &[ArgumentItem]) -> Scope {
    query
        .iter()
        .find_map(|item| match item {
            ArgumentItem::Day(day) => Some(Scope::SingleDay(*day)),
            ArgumentItem::Week => Some(Scope::Week),
            _ => None,
        })
        .unwrap_or(Scope::Week)
}
