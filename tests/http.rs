use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct HugState {
    count: u64,
    message: Option<String>,
    active: bool,
}

#[derive(Debug, Deserialize)]
struct CakeConfig {
    layers: u8,
    flavor: String,
    decorations: Vec<String>,
    candles: u8,
}

#[derive(Debug, Deserialize)]
struct CakeBuilderView {
    open: bool,
    draft: CakeConfig,
    built: Option<CakeConfig>,
}

#[derive(Debug, Deserialize)]
struct FireworkId {
    timestamp_ms: i64,
    nonce: u32,
}

#[derive(Debug, Deserialize)]
struct Firework {
    id: FireworkId,
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize)]
struct Theme {
    kind: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Snapshot {
    is_birthday: bool,
    theme: Theme,
    hug: HugState,
    cake: CakeBuilderView,
    fireworks: Vec<Firework>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/state")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_birthday_widget"))
        .env("PORT", port.to_string())
        .env("WIDGET_SEED", "1234")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn snapshot(client: &Client, server: &TestServer) -> Snapshot {
    client
        .get(format!("{}/api/state", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_index_renders_theme() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let state = snapshot(&client, &server).await;
    let html = client
        .get(format!("{}/", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("<!DOCTYPE html>"));
    assert!(!html.contains("{{"));
    assert!(!state.theme.name.is_empty());
    if state.is_birthday {
        assert_eq!(state.theme.kind, "birthday");
    } else {
        assert_ne!(state.theme.kind, "birthday");
    }
}

#[tokio::test]
async fn http_hug_increments_counter() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = snapshot(&client, &server).await;

    let hug: HugState = client
        .post(format!("{}/api/hug", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(hug.count, before.hug.count + 1);
    assert!(hug.active);
    assert!(hug.message.is_some());

    sleep(Duration::from_millis(2_500)).await;
    let after = snapshot(&client, &server).await;
    assert!(!after.hug.active);
    assert_eq!(after.hug.count, hug.count);
}

#[tokio::test]
async fn http_firework_appears_then_expires() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let baseline = snapshot(&client, &server).await.fireworks.len();

    let firework: Firework = client
        .post(format!("{}/api/fireworks", server.base_url))
        .json(&serde_json::json!({ "x": 120.5, "y": 64.0 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(firework.x, 120.5);
    assert_eq!(firework.y, 64.0);

    let live = snapshot(&client, &server).await;
    assert_eq!(live.fireworks.len(), baseline + 1);
    assert!(live.fireworks.iter().any(|f| {
        f.id.timestamp_ms == firework.id.timestamp_ms && f.id.nonce == firework.id.nonce
    }));

    sleep(Duration::from_millis(2_500)).await;
    assert_eq!(snapshot(&client, &server).await.fireworks.len(), baseline);
}

#[tokio::test]
async fn http_cake_builder_flow() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let url = |path: &str| format!("{}/api/cake/{path}", server.base_url);

    client.post(url("close")).send().await.unwrap();
    let closed = client
        .post(url("layers"))
        .json(&serde_json::json!({ "delta": 1 }))
        .send()
        .await
        .unwrap();
    assert_eq!(closed.status(), StatusCode::CONFLICT);

    let view: CakeBuilderView = client.post(url("open")).send().await.unwrap().json().await.unwrap();
    assert!(view.open);

    let view: CakeBuilderView = client
        .post(url("layers"))
        .json(&serde_json::json!({ "delta": -7 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view.draft.layers, 1);

    let view: CakeBuilderView = client
        .post(url("candles"))
        .json(&serde_json::json!({ "delta": 25 }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(view.draft.candles, 10);

    let bad = client
        .post(url("flavor"))
        .json(&serde_json::json!({ "flavor": "broccoli" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad.status(), StatusCode::BAD_REQUEST);

    client
        .post(url("flavor"))
        .json(&serde_json::json!({ "flavor": "red velvet" }))
        .send()
        .await
        .unwrap();

    let before = view.draft.decorations.clone();
    for _ in 0..2 {
        client
            .post(url("decorations/toggle"))
            .json(&serde_json::json!({ "decoration": "stars" }))
            .send()
            .await
            .unwrap();
    }

    let view: CakeBuilderView = client.post(url("build")).send().await.unwrap().json().await.unwrap();
    assert!(!view.open);
    let built = view.built.expect("cake was built");
    assert_eq!(built.flavor, "red velvet");
    assert_eq!(built.layers, 1);
    assert_eq!(built.candles, 10);
    assert_eq!(built.decorations, before);

    let state = snapshot(&client, &server).await;
    assert!(!state.cake.open);
    assert!(state.cake.built.is_some());
}
