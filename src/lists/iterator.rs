//! Cursor-driven iterator over the pages of mailing lists.
//!
//! A [`ListsIterator`] holds exactly one page and the paging links that came
//! with it. Every navigation call performs one fetch and, on success,
//! replaces both wholesale. The first fetch error is kept: from then on the
//! iterator is [`IteratorState::Failed`] and every navigation call returns
//! immediately without touching the network.
//!
//! # Example
//!
//! ```rust,ignore
//! use mailgun_api::{ListsOptions, MailingList};
//!
//! let mut it = MailingList::all(&client, Some(&ListsOptions { limit: Some(100) }));
//! let mut page = Vec::new();
//! while it.next(&mut page).await {
//!     for list in &page {
//!         println!("{} ({} members)", list.address, list.members_count);
//!     }
//! }
//! if let Some(e) = it.err() {
//!     eprintln!("listing stopped: {e}");
//! }
//! ```

use crate::clients::{HttpClient, HttpError};
use crate::lists::paging::{ListsPage, Paging};
use crate::lists::MailingList;

/// Options for listing mailing lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListsOptions {
    /// Page size. `None` or `Some(0)` leaves the server default.
    pub limit: Option<u32>,
}

/// Lifecycle of a [`ListsIterator`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IteratorState {
    /// Nothing fetched yet.
    Unfetched,
    /// At least one page fetched successfully.
    Fetched,
    /// A fetch failed; the error is kept and no further fetch is made.
    Failed(HttpError),
}

/// Iterator over pages of mailing lists.
///
/// Created by [`MailingList::all`]. Construction does not touch the network.
///
/// The iterator borrows the client and owns its current page. Navigation
/// methods take `&mut self`, so one iterator cannot be driven from several
/// tasks at once; use one iterator per task instead.
///
/// # Navigation
///
/// | Method | Link followed | Empty page |
/// |---|---|---|
/// | [`first`](Self::first) | `first` | `true` |
/// | [`next`](Self::next) | `next` | `false` |
/// | [`previous`](Self::previous) | `previous`, not fetched when empty | `false` |
/// | [`last`](Self::last) | `last` | `true` |
///
/// All four return `false` on error, after which [`err`](Self::err) returns
/// the error.
#[derive(Debug)]
pub struct ListsIterator<'a> {
    client: &'a HttpClient,
    page: ListsPage,
    state: IteratorState,
}

impl<'a> ListsIterator<'a> {
    /// Creates an iterator positioned before the first page.
    ///
    /// If the starting URL cannot be built the iterator starts out failed.
    pub(crate) fn new(client: &'a HttpClient, options: Option<&ListsOptions>) -> Self {
        let (paging, state) = match Self::start_url(client, options) {
            Ok(url) => (Paging::starting_at(url), IteratorState::Unfetched),
            Err(error) => (Paging::default(), IteratorState::Failed(error)),
        };

        Self {
            client,
            page: ListsPage {
                items: Vec::new(),
                paging,
            },
            state,
        }
    }

    fn start_url(client: &HttpClient, options: Option<&ListsOptions>) -> Result<String, HttpError> {
        let mut url = client.endpoint(&["lists", "pages"])?;
        if let Some(limit) = options.and_then(|o| o.limit).filter(|&limit| limit != 0) {
            url.query_pairs_mut()
                .append_pair("limit", &limit.to_string());
        }
        Ok(url.into())
    }

    /// Returns the error that stopped the iterator, if any.
    #[must_use]
    pub const fn err(&self) -> Option<&HttpError> {
        match &self.state {
            IteratorState::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &IteratorState {
        &self.state
    }

    /// Returns the lists on the current page.
    #[must_use]
    pub fn lists(&self) -> &[MailingList] {
        &self.page.items
    }

    /// Returns the paging links of the current page.
    #[must_use]
    pub const fn paging(&self) -> &Paging {
        &self.page.paging
    }

    /// Fetches the page after the current one.
    ///
    /// The end of the collection is reached when [`lists`](Self::lists) is
    /// empty afterwards.
    ///
    /// # Errors
    ///
    /// Returns the fetch error, which also becomes the iterator's sticky
    /// error. A failed iterator returns its stored error without fetching.
    pub async fn get_next(&mut self) -> Result<(), HttpError> {
        let url = self.page.paging.next.clone();
        self.fetch(&url).await
    }

    /// Fetches the page before the current one.
    ///
    /// Unlike [`previous`](Self::previous) there is no guard for a missing
    /// link: an empty `previous` link fails with
    /// [`InvalidHttpRequestError::EmptyUrl`](crate::clients::InvalidHttpRequestError::EmptyUrl).
    ///
    /// # Errors
    ///
    /// Returns the fetch error, which also becomes the iterator's sticky
    /// error. A failed iterator returns its stored error without fetching.
    pub async fn get_previous(&mut self) -> Result<(), HttpError> {
        let url = self.page.paging.previous.clone();
        self.fetch(&url).await
    }

    /// Fetches the first page and copies its lists into `out`.
    ///
    /// Returns `true` even when the page is empty, since the collection
    /// itself may be empty. Returns `false` only on error.
    pub async fn first(&mut self, out: &mut Vec<MailingList>) -> bool {
        let url = self.page.paging.first.clone();
        if self.fetch(&url).await.is_err() {
            return false;
        }
        out.clone_from(&self.page.items);
        true
    }

    /// Fetches the next page and copies its lists into `out`.
    ///
    /// Returns `false` on error or when the page is empty (the collection
    /// is exhausted going forward).
    pub async fn next(&mut self, out: &mut Vec<MailingList>) -> bool {
        if self.get_next().await.is_err() {
            return false;
        }
        out.clone_from(&self.page.items);
        !self.page.items.is_empty()
    }

    /// Fetches the previous page and copies its lists into `out`.
    ///
    /// Returns `false` without fetching when the current page has no
    /// `previous` link, and `false` on error or when the page is empty.
    pub async fn previous(&mut self, out: &mut Vec<MailingList>) -> bool {
        if self.err().is_some() || !self.page.paging.has_previous() {
            return false;
        }
        if self.get_previous().await.is_err() {
            return false;
        }
        out.clone_from(&self.page.items);
        !self.page.items.is_empty()
    }

    /// Fetches the last page and copies its lists into `out`.
    ///
    /// Calling `last` before [`first`](Self::first) or [`next`](Self::next)
    /// is invalid: the `last` link is only known after a fetch, which
    /// [`Paging::has_last`] reports. Doing so
    /// fails the iterator with
    /// [`InvalidHttpRequestError::EmptyUrl`](crate::clients::InvalidHttpRequestError::EmptyUrl)
    /// and returns `false`.
    pub async fn last(&mut self, out: &mut Vec<MailingList>) -> bool {
        let url = self.page.paging.last.clone();
        if self.fetch(&url).await.is_err() {
            return false;
        }
        out.clone_from(&self.page.items);
        true
    }

    async fn fetch(&mut self, url: &str) -> Result<(), HttpError> {
        if let IteratorState::Failed(error) = &self.state {
            return Err(error.clone());
        }

        tracing::debug!("Fetching mailing list page {}", url);

        match self.client.get_json::<ListsPage>(url).await {
            Ok(page) => {
                let first = std::mem::take(&mut self.page.paging.first);
                self.page = ListsPage {
                    items: page.items,
                    paging: Paging {
                        first,
                        ..page.paging
                    },
                };
                self.state = IteratorState::Fetched;
                Ok(())
            }
            Err(error) => {
                tracing::warn!("Mailing list iteration failed at {}: {}", url, error);
                self.state = IteratorState::Failed(error.clone());
                Err(error)
            }
        }
    }
}
