// common/mod.rs - Shared test utilities
//
// Starts a throwaway record service on an ephemeral port that answers every
// `POST /record` with a canned reply and remembers the bodies it received.

#![allow(dead_code)]

use actix_web::dev::ServerHandle;
use actix_web::http::StatusCode;
use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::Value;
use std::sync::{Arc, Mutex};

use fridge_manager::web_app::api::client::RecordClient;
use fridge_manager::web_app::api::config::ServiceConfig;

/// What the fake service answers with
#[derive(Clone, Debug)]
pub struct MockReply {
    pub status: u16,
    pub body: String,
}

impl MockReply {
    pub fn ok(body: &str) -> Self {
        Self { status: 200, body: body.to_string() }
    }

    pub fn status(status: u16) -> Self {
        Self { status, body: "Error processing with AI".to_string() }
    }
}

struct MockState {
    reply: MockReply,
    received: Arc<Mutex<Vec<Value>>>,
}

pub struct MockService {
    pub base_url: String,
    received: Arc<Mutex<Vec<Value>>>,
    handle: ServerHandle,
}

impl MockService {
    /// JSON bodies received so far
    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }

    pub fn client(&self) -> RecordClient {
        RecordClient::new(ServiceConfig { base_url: self.base_url.clone() })
    }

    pub async fn stop(self) {
        self.handle.stop(false).await;
    }
}

async fn record(state: web::Data<MockState>, body: web::Bytes) -> HttpResponse {
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state.received.lock().unwrap().push(json);

    let status = StatusCode::from_u16(state.reply.status).unwrap();
    HttpResponse::build(status)
        .content_type("application/json")
        .body(state.reply.body.clone())
}

/// Start the fake record service. Must run inside an actix runtime.
pub async fn start_mock_service(reply: MockReply) -> anyhow::Result<MockService> {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = web::Data::new(MockState { reply, received: received.clone() });

    let server = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .route("/record", web::post().to(record))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))?;

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    actix_web::rt::spawn(server);

    Ok(MockService {
        base_url: format!("http://{}", addr),
        received,
        handle,
    })
}

pub const MILK_RESPONSE: &str = r#"{"items":[{"item":"牛奶","quantity":2,"unit":"盒","expireDate":"2024-06-01T00:00:00Z"}]}"#;

pub const TWO_ITEMS_RESPONSE: &str = r#"{"items":[
    {"item":"苹果","quantity":3,"unit":"个","expireDate":"2024-06-03 00:00:00"},
    {"item":"猪肉","quantity":1,"unit":"斤","expireDate":"2024-05-30 12:00:00"}
]}"#;
