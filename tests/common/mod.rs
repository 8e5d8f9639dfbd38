//! In-memory stand-in for the mailing lists API, used as a [`Transport`].
//!
//! Pages are keyed on list addresses the way the real API does it:
//! `page=next&address=X` returns the lists after `X`, `page=prev&address=X`
//! the lists before it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mailgun_api::{
    ApiBase, ApiKey, HttpClient, HttpMethod, HttpResponse, MailgunConfig, Transport,
    TransportError, TransportRequest,
};
use serde_json::{json, Value};

pub const BASE: &str = "https://lists.test/v3";
pub const CREATED_AT: &str = "Tue, 06 Mar 2012 05:44:45 GMT";
const DEFAULT_LIMIT: usize = 100;

#[derive(Debug, Default)]
pub struct FakeListServer {
    lists: Mutex<Vec<Value>>,
    calls: AtomicUsize,
    fail_with: Mutex<Option<u16>>,
}

impl FakeListServer {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Seeds `count` lists named `list1@example.com`, `list2@example.com`, ...
    pub fn seeded(count: usize) -> Arc<Self> {
        let server = Self::new();
        {
            let mut lists = server.lists.lock().unwrap();
            for i in 1..=count {
                lists.push(json!({
                    "address": format!("list{i}@example.com"),
                    "name": format!("List {i}"),
                    "description": "",
                    "access_level": "everyone",
                    "created_at": CREATED_AT,
                    "members_count": 0,
                }));
            }
        }
        server
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Makes every following request answer with `status`.
    pub fn fail_with(&self, status: u16) {
        *self.fail_with.lock().unwrap() = Some(status);
    }

    pub fn client(self: &Arc<Self>) -> HttpClient {
        let config = MailgunConfig::builder()
            .api_key(ApiKey::new("key-test").unwrap())
            .api_base(ApiBase::new(BASE).unwrap())
            .build()
            .unwrap();
        HttpClient::with_transport(&config, self.clone())
    }

    fn page_url(page: &str, address: Option<&str>, limit: usize) -> String {
        let mut url = reqwest::Url::parse(&format!("{BASE}/lists/pages")).unwrap();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", page);
            if let Some(address) = address {
                pairs.append_pair("address", address);
            }
            pairs.append_pair("limit", &limit.to_string());
        }
        url.into()
    }

    fn page(&self, query: &HashMap<String, String>) -> Value {
        let lists = self.lists.lock().unwrap();
        let limit = query
            .get("limit")
            .and_then(|l| l.parse().ok())
            .unwrap_or(DEFAULT_LIMIT);
        let position = |address: &String| {
            lists
                .iter()
                .position(|l| l["address"] == address.as_str())
                .unwrap_or(lists.len())
        };

        let (start, end) = match (query.get("page").map(String::as_str), query.get("address")) {
            (Some("next"), Some(address)) => {
                let start = (position(address) + 1).min(lists.len());
                (start, (start + limit).min(lists.len()))
            }
            (Some("prev"), Some(address)) => {
                let end = position(address);
                (end.saturating_sub(limit), end)
            }
            (Some("last"), _) => (lists.len().saturating_sub(limit), lists.len()),
            _ => (0, limit.min(lists.len())),
        };

        let items: Vec<Value> = lists[start..end].to_vec();
        let pivot_last = items
            .last()
            .or_else(|| lists.get(start.wrapping_sub(1)))
            .and_then(|l| l["address"].as_str())
            .map(String::from);
        let previous = items
            .first()
            .filter(|_| start > 0)
            .and_then(|l| l["address"].as_str())
            .map_or(String::new(), |a| Self::page_url("prev", Some(a), limit));

        json!({
            "items": items,
            "paging": {
                "first": Self::page_url("first", None, limit),
                "next": Self::page_url("next", pivot_last.as_deref(), limit),
                "previous": previous,
                "last": Self::page_url("last", None, limit),
            }
        })
    }

    fn decode_form(body: Option<&str>) -> HashMap<String, String> {
        body.unwrap_or_default()
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter_map(|pair| pair.split_once('='))
            .map(|(k, v)| {
                (
                    urlencoding::decode(k).unwrap().into_owned(),
                    urlencoding::decode(v).unwrap().into_owned(),
                )
            })
            .collect()
    }

    fn not_found(address: &str) -> (u16, Value) {
        (404, json!({ "message": format!("Mailing list {address} not found") }))
    }

    fn handle(&self, request: &TransportRequest) -> (u16, Value) {
        if let Some(status) = *self.fail_with.lock().unwrap() {
            return (status, json!({ "message": "Injected failure" }));
        }

        let segments: Vec<String> = request
            .url
            .path_segments()
            .unwrap()
            .map(|s| urlencoding::decode(s).unwrap().into_owned())
            .collect();
        let query: HashMap<String, String> = request.url.query_pairs().into_owned().collect();
        let form = Self::decode_form(request.body.as_deref());

        match (request.method, segments.as_slice()) {
            (HttpMethod::Get, [_, lists, pages]) if lists == "lists" && pages == "pages" => {
                (200, self.page(&query))
            }
            (HttpMethod::Post, [_, lists]) if lists == "lists" => {
                let Some(address) = form.get("address") else {
                    return (400, json!({ "message": "'address' parameter is missing" }));
                };
                let mut store = self.lists.lock().unwrap();
                if store.iter().any(|l| l["address"] == address.as_str()) {
                    return (400, json!({ "message": format!("Duplicate object: {address}") }));
                }
                let list = json!({
                    "address": address,
                    "name": form.get("name").cloned().unwrap_or_default(),
                    "description": form.get("description").cloned().unwrap_or_default(),
                    "access_level": form.get("access_level").cloned().unwrap_or_else(|| "everyone".to_string()),
                    "created_at": CREATED_AT,
                    "members_count": 0,
                });
                store.push(list.clone());
                (200, json!({ "message": "Mailing list has been created", "list": list }))
            }
            (method, [_, lists, address]) if lists == "lists" => {
                let mut store = self.lists.lock().unwrap();
                let Some(index) = store.iter().position(|l| l["address"] == address.as_str())
                else {
                    return Self::not_found(address);
                };
                match method {
                    HttpMethod::Get => (200, json!({ "list": store[index] })),
                    HttpMethod::Put => {
                        for (key, value) in &form {
                            store[index][key.as_str()] = json!(value);
                        }
                        (200, json!({ "message": "Mailing list has been updated", "list": store[index] }))
                    }
                    HttpMethod::Delete => {
                        store.remove(index);
                        (200, json!({ "message": "Mailing list has been removed", "address": address }))
                    }
                    HttpMethod::Post => (405, json!({ "message": "Method not allowed" })),
                }
            }
            _ => (404, json!({ "message": "Not found" })),
        }
    }
}

#[async_trait]
impl Transport for FakeListServer {
    async fn send(&self, request: TransportRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (code, body) = self.handle(&request);
        Ok(HttpResponse::new(code, HashMap::new(), body.to_string()))
    }
}

/// Transport that always fails before reaching a server.
#[derive(Debug, Default)]
pub struct UnreachableTransport {
    pub calls: AtomicUsize,
}

#[async_trait]
impl Transport for UnreachableTransport {
    async fn send(&self, _request: TransportRequest) -> Result<HttpResponse, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(TransportError::new("dns error: failed to lookup address"))
    }
}
