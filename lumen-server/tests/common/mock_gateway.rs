use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use lumen_server::app::forward_router;
use lumen_server::configs::Gateway;
use lumen_server::handles::ForwardState;
use lumen_server::services::ForwardService;
use tokio::net::TcpListener;

#[derive(Clone)]
struct GatewayState {
    bodies: Arc<Mutex<Vec<String>>>,
    status: StatusCode,
}

/// Push gateway stand-in recording every posted body.
pub struct MockGateway {
    pub address: SocketAddr,
    bodies: Arc<Mutex<Vec<String>>>,
}

impl MockGateway {
    pub async fn start(status: StatusCode) -> Self {
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let router = Router::new()
            .route("/api/v2/push", post(push))
            .with_state(GatewayState {
                bodies: bodies.clone(),
                status,
            });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self { address, bodies }
    }

    pub fn url(&self) -> String {
        format!("http://{}/api/v2/push", self.address)
    }

    pub fn bodies(&self) -> Vec<String> {
        self.bodies.lock().unwrap().clone()
    }
}

async fn push(State(state): State<GatewayState>, body: String) -> (StatusCode, &'static str) {
    state.bodies.lock().unwrap().push(body);
    (state.status, "{\"status\":\"accepted\"}")
}

/// An address nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{address}/api/v2/push")
}

pub fn app_for(address: String) -> Router {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    let forward_service = ForwardService::with_client(
        Gateway {
            address,
            dry_run: false,
            time_to_live: 1,
        },
        client,
    );

    forward_router(ForwardState {
        forward_service: Arc::new(forward_service),
    })
}
