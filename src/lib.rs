//! # Mailgun API Rust SDK
//!
//! A Rust SDK for the Mailgun mailing lists API, providing type-safe
//! configuration, an authenticated HTTP client with a pluggable transport,
//! and cursor-based pagination over mailing lists.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Type-safe configuration via [`MailgunConfig`] and [`MailgunConfigBuilder`]
//! - Validated newtypes for the API key and base URL, plus [`Region`] selection
//! - An async [`HttpClient`] sending through any [`Transport`]
//! - [`MailingList`] CRUD operations
//! - [`ListsIterator`], a cursor-driven iterator with `first`/`next`/`previous`/`last`
//!
//! ## Quick Start
//!
//! ```rust
//! use mailgun_api::{ApiKey, HttpClient, MailgunConfig, Region};
//!
//! let config = MailgunConfig::builder()
//!     .api_key(ApiKey::new("your-api-key").unwrap())
//!     .region(Region::Us)
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config);
//! ```
//!
//! ## Listing Mailing Lists
//!
//! ```rust,ignore
//! use mailgun_api::{ListsOptions, MailingList};
//!
//! let mut it = MailingList::all(&client, Some(&ListsOptions { limit: Some(100) }));
//! let mut page = Vec::new();
//!
//! if it.first(&mut page).await {
//!     loop {
//!         for list in &page {
//!             println!("{}", list.address);
//!         }
//!         if !it.next(&mut page).await {
//!             break;
//!         }
//!     }
//! }
//!
//! if let Some(error) = it.err() {
//!     eprintln!("iteration stopped: {error}");
//! }
//! ```
//!
//! ## Managing a List
//!
//! ```rust,ignore
//! use mailgun_api::{AccessLevel, MailingList};
//!
//! let list = MailingList::create(&client, &MailingList {
//!     address: "devs@example.com".to_string(),
//!     name: "Developers".to_string(),
//!     ..Default::default()
//! }).await?;
//!
//! let updated = MailingList::update(&client, &list.address, &MailingList {
//!     access_level: Some(AccessLevel::Members),
//!     ..Default::default()
//! }).await?;
//!
//! MailingList::delete(&client, &updated.address).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **No hidden retries**: Every operation is one round trip; retries and
//!   timeouts belong to the [`Transport`]
//! - **Sticky iteration errors**: A failed [`ListsIterator`] stays failed

pub mod clients;
pub mod config;
pub mod error;
pub mod lists;

// Re-export public types at crate root for convenience
pub use config::{ApiBase, ApiKey, MailgunConfig, MailgunConfigBuilder, Region};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DecodeError, FormBody, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder,
    HttpResponse, HttpResponseError, InvalidHttpRequestError, ReqwestTransport, Transport,
    TransportError, TransportRequest,
};

// Re-export mailing list types
pub use lists::{
    AccessLevel, IteratorState, ListsIterator, ListsOptions, ListsPage, MailingList, Paging,
};
