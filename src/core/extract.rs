use crate::config::{FragmentMarkers, SiteProfile};
use crate::domain::model::Tag;

/// Cuts the fetched markup into fragments along the profile delimiter and
/// classifies each as a day heading or a dish entry by substring search.
/// Fragments carrying neither marker, and fragments whose label cannot be cut
/// out cleanly, vanish without error; output order is input order.
///
/// This is deliberately not an HTML parser. The page is an undocumented,
/// loosely-delimited layout and the markers are maintained in the profile.
pub fn extract_tags(markup: &str, profile: &SiteProfile) -> Vec<Tag> {
    markup
        .split(profile.fragment_delimiter.as_str())
        .filter_map(|fragment| classify_fragment(fragment, profile))
        .collect()
}

/// The day check runs first, so a fragment that somehow carries both markers
/// counts as a day.
fn classify_fragment(fragment: &str, profile: &SiteProfile) -> Option<Tag> {
    if fragment.contains(profile.day_markers.marker.as_str()) {
        cut_label(fragment, &profile.day_markers).map(Tag::Day)
    } else if fragment.contains(profile.dish_markers.marker.as_str()) {
        cut_label(fragment, &profile.dish_markers).map(Tag::Dish)
    } else {
        None
    }
}

/// Text strictly between `start` and `end`. The start marker must occur
/// exactly once, otherwise the fragment is dropped; everything from the end
/// marker on is cut off, and a missing end marker keeps the whole tail.
fn cut_label(fragment: &str, markers: &FragmentMarkers) -> Option<String> {
    let mut pieces = fragment.splitn(3, markers.start.as_str());
    pieces.next();
    let tail = pieces.next()?;
    if pieces.next().is_some() {
        return None;
    }
    tail.split(markers.end.as_str()).next().map(str::to_string)
}
