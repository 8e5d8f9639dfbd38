//! Mailing list CRUD operations.
//!
//! Each operation is a single authenticated request with no retained state.
//!
//! | Operation | Request |
//! |---|---|
//! | [`MailingList::all`] | `GET /lists/pages` (lazily, via [`ListsIterator`]) |
//! | [`MailingList::create`] | `POST /lists` |
//! | [`MailingList::find`] | `GET /lists/{address}` |
//! | [`MailingList::update`] | `PUT /lists/{address}` |
//! | [`MailingList::delete`] | `DELETE /lists/{address}` |

use serde::Deserialize;

use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest, InvalidHttpRequestError};
use crate::lists::{ListsIterator, ListsOptions, MailingList};

/// Single-list response body: `{"list": {...}}`.
#[derive(Debug, Deserialize)]
struct ListEnvelope {
    list: MailingList,
}

impl MailingList {
    /// Returns an iterator over the account's mailing lists.
    ///
    /// No request is made until a navigation method is called.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut it = MailingList::all(&client, Some(&ListsOptions { limit: Some(2) }));
    /// let mut page = Vec::new();
    /// if it.first(&mut page).await {
    ///     println!("{} lists on the first page", page.len());
    /// }
    /// ```
    #[must_use]
    pub fn all<'a>(client: &'a HttpClient, options: Option<&ListsOptions>) -> ListsIterator<'a> {
        ListsIterator::new(client, options)
    }

    /// Creates a mailing list.
    ///
    /// Only the non-empty fields of `prototype` are sent; the server fills
    /// in defaults for the rest (e.g. access level `everyone`). Returns the
    /// server's representation of the new list.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Response`] if the server rejects the list, or
    /// any transport or decode error.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let list = MailingList::create(&client, &MailingList {
    ///     address: "devs@example.com".to_string(),
    ///     name: "Developers".to_string(),
    ///     ..Default::default()
    /// }).await?;
    /// assert_eq!(list.access_level, Some(AccessLevel::Everyone));
    /// ```
    pub async fn create(client: &HttpClient, prototype: &Self) -> Result<Self, HttpError> {
        let url = client.endpoint(&["lists"])?;
        let request = HttpRequest::builder(HttpMethod::Post, url.as_str())
            .form(prototype.to_form())
            .build()?;

        let response = client.request(request).await?;
        let envelope: ListEnvelope = response.json()?;
        Ok(envelope.list)
    }

    /// Fetches a mailing list by address.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::EmptyAddress`] for an empty address,
    /// a 404 [`HttpError::Response`] if the list does not exist, or any
    /// transport or decode error.
    pub async fn find(client: &HttpClient, address: &str) -> Result<Self, HttpError> {
        let url = Self::list_url(client, address)?;
        let envelope: ListEnvelope = client.get_json(&url).await?;
        Ok(envelope.list)
    }

    /// Changes the fields of a mailing list that are set in `prototype`.
    ///
    /// Fields left empty in `prototype` are not sent and keep their current
    /// value. Setting `address` renames the list; mail sent to the old
    /// address will then fail.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::EmptyAddress`] for an empty address,
    /// a 404 [`HttpError::Response`] if the list does not exist, or any
    /// transport or decode error.
    pub async fn update(
        client: &HttpClient,
        address: &str,
        prototype: &Self,
    ) -> Result<Self, HttpError> {
        let url = Self::list_url(client, address)?;
        let request = HttpRequest::builder(HttpMethod::Put, url)
            .form(prototype.to_form())
            .build()?;

        let response = client.request(request).await?;
        let envelope: ListEnvelope = response.json()?;
        Ok(envelope.list)
    }

    /// Deletes a mailing list and, server-side, all of its members.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::EmptyAddress`] for an empty address,
    /// a 404 [`HttpError::Response`] if the list does not exist (including
    /// one already deleted), or any transport error.
    pub async fn delete(client: &HttpClient, address: &str) -> Result<(), HttpError> {
        let url = Self::list_url(client, address)?;
        let request = HttpRequest::builder(HttpMethod::Delete, url).build()?;

        client.request(request).await?;
        Ok(())
    }

    fn list_url(client: &HttpClient, address: &str) -> Result<String, HttpError> {
        if address.is_empty() {
            return Err(InvalidHttpRequestError::EmptyAddress.into());
        }
        Ok(client.endpoint(&["lists", address])?.into())
    }
}
