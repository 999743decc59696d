use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::model::Day;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{validate_lowercase, validate_non_empty, validate_url, Validate};

/// Environment variable naming an alternate profile file.
pub const PROFILE_ENV: &str = "CANTINE_PROFILE";

/// Everything the tool knows about the menu site: the two URLs, how the page
/// is cut into fragments, which substrings mark day headings and dish
/// entries, and how the site spells the five days.
///
/// These markers are an undocumented contract with one specific web page. If
/// the site's markup changes, extraction silently yields fewer (or no) tags;
/// the fix is a profile update, not a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub menu_url: String,
    pub order_url: String,
    pub fragment_delimiter: String,
    pub day_markers: FragmentMarkers,
    pub dish_markers: FragmentMarkers,
    pub day_tokens: DayTokens,
}

/// Substring triple identifying one kind of fragment: `marker` classifies the
/// fragment, the label is the text strictly between `start` and `end`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FragmentMarkers {
    pub marker: String,
    pub start: String,
    pub end: String,
}

/// The site's lowercase spelling of each weekday heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayTokens {
    pub monday: String,
    pub tuesday: String,
    pub wednesday: String,
    pub thursday: String,
    pub friday: String,
}

impl Default for SiteProfile {
    fn default() -> Self {
        SiteProfile {
            menu_url: "https://www.chezgustave.fr/menu-de-la-semaine/".to_string(),
            order_url: "https://www.chezgustave.fr/commande/".to_string(),
            fragment_delimiter: "\n".to_string(),
            day_markers: FragmentMarkers {
                marker: "jour-bloc".to_string(),
                start: "jour-bloc\">".to_string(),
                end: "</h2>".to_string(),
            },
            dish_markers: FragmentMarkers {
                marker: "plat-bloc".to_string(),
                start: "plat-bloc\">".to_string(),
                end: "</p>".to_string(),
            },
            day_tokens: DayTokens {
                monday: "lundi".to_string(),
                tuesday: "mardi".to_string(),
                wednesday: "mercredi".to_string(),
                thursday: "jeudi".to_string(),
                friday: "vendredi".to_string(),
            },
        }
    }
}

impl SiteProfile {
    /// The profile for this run: the file named by `CANTINE_PROFILE` when the
    /// variable is set, the built-in site constants otherwise.
    pub fn load() -> Result<Self> {
        match std::env::var(PROFILE_ENV) {
            Ok(path) => {
                tracing::debug!("loading site profile from {}", path);
                Self::from_file(&path)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Fields absent from the TOML keep their built-in values; `${VAR}`
    /// references are substituted from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let substituted = Self::substitute_env_vars(content);

        toml::from_str(&substituted).map_err(|e| MenuError::InvalidProfile {
            field: "toml".to_string(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value; unset variables are
    /// left verbatim.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl FragmentMarkers {
    fn validate_table(&self, table: &str) -> Result<()> {
        validate_non_empty(&format!("{}.marker", table), &self.marker)?;
        validate_non_empty(&format!("{}.start", table), &self.start)?;
        validate_non_empty(&format!("{}.end", table), &self.end)?;
        Ok(())
    }
}

impl DayTokens {
    /// The site token for a day, e.g. `Day::Tuesday` → `"mardi"`.
    pub fn token(&self, day: Day) -> &str {
        match day {
            Day::Monday => &self.monday,
            Day::Tuesday => &self.tuesday,
            Day::Wednesday => &self.wednesday,
            Day::Thursday => &self.thursday,
            Day::Friday => &self.friday,
        }
    }

    /// Looks up a heading's text against the five tokens, lowercasing first.
    /// Anything that is not one of the five tokens is not a day.
    pub fn day_for(&self, text: &str) -> Option<Day> {
        let lowered = text.to_lowercase();
        Day::ALL.into_iter().find(|&day| self.token(day) == lowered)
    }
}

impl Validate for SiteProfile {
    fn validate(&self) -> Result<()> {
        validate_url("menu_url", &self.menu_url)?;
        validate_url("order_url", &self.order_url)?;
        validate_non_empty("fragment_delimiter", &self.fragment_delimiter)?;
        self.day_markers.validate_table("day_markers")?;
        self.dish_markers.validate_table("dish_markers")?;
        validate_lowercase("day_tokens.monday", &self.day_tokens.monday)?;
        validate_lowercase("day_tokens.tuesday", &self.day_tokens.tuesday)?;
        validate_lowercase("day_tokens.wednesday", &self.day_tokens.wednesday)?;
        validate_lowercase("day_tokens.thursday", &self.day_tokens.thursday)?;
        validate_lowercase("day_tokens.friday", &self.day_tokens.friday)?;
        Ok(())
    }
}
