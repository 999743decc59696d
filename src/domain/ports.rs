use crate::utils::error::Result;

/// Where the weekly menu page comes from. The sole network seam: one blocking
/// GET, body decoded as UTF-8.
pub trait PageSource {
    fn fetch_text(&self, url: &str) -> Result<String>;
}

/// Hands a URL to whatever the system considers the default handler.
pub trait LinkOpener {
    fn open(&self, url: &str) -> Result<()>;
}
