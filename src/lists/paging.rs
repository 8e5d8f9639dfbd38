//! Paging cursor and page envelope.

use serde::{Deserialize, Serialize};

use crate::lists::MailingList;

/// Navigation links returned with every page.
///
/// Each field is an opaque, fully qualified URL or empty. An empty
/// `previous` or `last` means there is no such page; it is not an error.
/// A `Paging` value is replaced wholesale after each successful fetch and
/// never edited field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paging {
    /// Link to the first page.
    #[serde(default)]
    pub first: String,
    /// Link to the page after the current one.
    #[serde(default)]
    pub next: String,
    /// Link to the page before the current one.
    #[serde(default)]
    pub previous: String,
    /// Link to the last page.
    #[serde(default)]
    pub last: String,
}

impl Paging {
    /// Cursor for an iterator that has not fetched anything yet: both
    /// `first` and `next` point at the starting URL.
    #[must_use]
    pub fn starting_at(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            first: url.clone(),
            next: url,
            previous: String::new(),
            last: String::new(),
        }
    }

    /// Returns `true` if there is a previous page to fetch.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        !self.previous.is_empty()
    }

    /// Returns `true` if the last-page link is known.
    #[must_use]
    pub fn has_last(&self) -> bool {
        !self.last.is_empty()
    }
}

/// One page of mailing lists, as returned by `GET /lists/pages`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListsPage {
    /// The lists on this page, in server order.
    pub items: Vec<MailingList>,
    /// Links to adjacent pages.
    pub paging: Paging,
}
