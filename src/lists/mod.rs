//! Mailing lists: the record type, its CRUD operations and the page iterator.
//!
//! # Overview
//!
//! - [`MailingList`]: a list record, also used as the prototype for create and update
//! - [`AccessLevel`]: who may post to a list
//! - [`ListsIterator`]: cursor-driven navigation over pages of lists
//! - [`Paging`]: the navigation links that come with each page
//!
//! # Example
//!
//! ```rust,ignore
//! use mailgun_api::{HttpClient, ListsOptions, MailingList, MailgunConfig, ApiKey};
//!
//! let config = MailgunConfig::builder()
//!     .api_key(ApiKey::new("key-123").unwrap())
//!     .build()
//!     .unwrap();
//! let client = HttpClient::new(&config);
//!
//! let created = MailingList::create(&client, &MailingList {
//!     address: "devs@example.com".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! let mut it = MailingList::all(&client, Some(&ListsOptions { limit: Some(50) }));
//! let mut page = Vec::new();
//! while it.next(&mut page).await {
//!     println!("{} lists", page.len());
//! }
//! ```

mod iterator;
mod mailing_list;
mod operations;
mod paging;

pub use iterator::{IteratorState, ListsIterator, ListsOptions};
pub use mailing_list::{AccessLevel, MailingList};
pub use paging::{ListsPage, Paging};
