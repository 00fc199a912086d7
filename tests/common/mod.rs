use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;

static SERVER: OnceLock<TestServer> = OnceLock::new();

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub jwt_secret: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/catalog-api-rust");
        cmd.env("CATALOG_API_PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Required configuration gets a test default unless the caller's
        // environment (or .env, loaded by the server) already provides it.
        let jwt_secret = env_default(&mut cmd, "JWT_SECRET", "integration-test-secret");
        env_default(&mut cmd, "DATABASE_HOST", "127.0.0.1");
        env_default(&mut cmd, "DATABASE_USER", "postgres");
        env_default(&mut cmd, "DATABASE_PASSWORD", "postgres");
        env_default(&mut cmd, "DATABASE_NAME", "catalog_test");

        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self {
            port,
            base_url,
            jwt_secret,
            child,
        })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // The pool is lazy, so the server is up even when the
                // database is not: OK or SERVICE_UNAVAILABLE both count.
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

fn env_default(cmd: &mut Command, key: &str, value: &str) -> String {
    match std::env::var(key) {
        Ok(existing) => existing,
        Err(_) => {
            cmd.env(key, value);
            value.to_string()
        }
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server = SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(15)).await?;
    Ok(server)
}
