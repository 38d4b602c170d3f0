//! In-process fake of the upstream catalog for async tests

use crate::prelude::*;
use crate::swapi::SwapiClient;
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Canned answer for one upstream path
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Text(String),
    Status(StatusCode),
}

#[derive(Clone)]
struct Shared {
    routes: Arc<HashMap<String, Reply>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Fake catalog bound to an ephemeral local port
///
/// Every request is recorded by path and query so tests can assert on call
/// order. Unknown paths answer 404.
pub struct FakeUpstream {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl FakeUpstream {
    /// Start the fake; `routes` receives the base URL so pages can link to each other
    pub async fn start(routes: impl FnOnce(&str) -> Vec<(String, Reply)>) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = f!("http://{}", listener.local_addr().unwrap());

        let shared = Shared {
            routes: Arc::new(routes(&base_url).into_iter().collect()),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let requests = shared.requests.clone();

        let app = Router::new().fallback(respond).with_state(shared);
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            requests,
            handle,
        }
    }

    pub fn client(&self) -> SwapiClient {
        SwapiClient::new(self.base_url.clone(), None).unwrap()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for FakeUpstream {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(State(shared): State<Shared>, uri: Uri) -> Response {
    let key = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    shared.requests.lock().unwrap().push(key.clone());

    match shared.routes.get(&key) {
        Some(Reply::Json(body)) => Json(body.clone()).into_response(),
        Some(Reply::Text(body)) => body.clone().into_response(),
        Some(Reply::Status(status)) => (*status).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

pub fn route(path: &str, reply: Reply) -> (String, Reply) {
    (path.to_string(), reply)
}

/// A listing page in the catalog's envelope
pub fn page(results: &[Value], next: Option<String>) -> Reply {
    Reply::Json(json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results,
    }))
}

fn character(name: &str, mass: &str, height: &str) -> Value {
    json!({
        "name": name,
        "mass": mass,
        "height": height,
        "hair_color": "n/a",
        "homeworld": "https://swapi.py4e.com/api/planets/1/",
    })
}

/// A small catalog: 13 characters over two pages, four planets over two pages
///
/// Planets sorted by name are Alderaan, Bespin, Hoth, Tatooine; their
/// residents in that order are Leia, Lobot, Luke, C-3PO.
pub fn fixture(base: &str) -> Vec<(String, Reply)> {
    let people_page_1 = [
        character("Luke Skywalker", "77", "172"),
        character("C-3PO", "75", "167"),
        character("R2-D2", "32", "96"),
        character("Darth Vader", "136", "202"),
        character("Leia Organa", "49", "150"),
        character("Owen Lars", "120", "178"),
        character("Beru Whitesun lars", "75", "165"),
        character("R5-D4", "32", "97"),
        character("Biggs Darklighter", "84", "183"),
        character("Obi-Wan Kenobi", "77", "182"),
    ];
    let people_page_2 = [
        character("Anakin Skywalker", "84", "188"),
        character("Wilhuff Tarkin", "unknown", "180"),
        character("Chewbacca", "112", "228"),
    ];

    let planets_page_1 = [
        json!({
            "name": "Tatooine",
            "climate": "arid",
            "residents": [f!("{base}/people/1/"), f!("{base}/people/2/")],
        }),
        json!({
            "name": "Alderaan",
            "climate": "temperate",
            "residents": [f!("{base}/people/5/")],
        }),
    ];
    let planets_page_2 = [
        json!({ "name": "Hoth", "climate": "frozen", "residents": [] }),
        json!({
            "name": "Bespin",
            "climate": "temperate",
            "residents": [f!("{base}/people/26/")],
        }),
    ];

    vec![
        route(
            "/people/",
            page(&people_page_1, Some(f!("{base}/people/?page=2"))),
        ),
        route("/people/?page=2", page(&people_page_2, None)),
        route(
            "/planets/",
            page(&planets_page_1, Some(f!("{base}/planets/?page=2"))),
        ),
        route("/planets/?page=2", page(&planets_page_2, None)),
        route(
            "/people/?search=sky",
            page(
                &[
                    character("Luke Skywalker", "77", "172"),
                    character("Anakin Skywalker", "84", "188"),
                ],
                // Search answers are returned as-is; this link must not be followed.
                Some(f!("{base}/people/?search=sky&page=2")),
            ),
        ),
        route("/people/?search=nobody", page(&[], None)),
        route(
            "/people/1/",
            Reply::Json(character("Luke Skywalker", "77", "172")),
        ),
        route("/people/2/", Reply::Json(character("C-3PO", "75", "167"))),
        route("/people/5/", Reply::Json(character("Leia Organa", "49", "150"))),
        route("/people/26/", Reply::Json(character("Lobot", "79", "175"))),
    ]
}
