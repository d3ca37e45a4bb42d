use std::net::TcpListener;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;

use portfolio::config::get_configuration;
use portfolio::domain::site::{ContactRecipient, StaticDir};
use portfolio::mail::{MailError, MailTransport, OutgoingEmail};
use portfolio::telemetry::{get_subscriber, init_subscriber};

static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        init_subscriber(get_subscriber(
            "test".into(),
            "debug".into(),
            std::io::stdout,
        ));
    } else {
        init_subscriber(get_subscriber("test".into(), "debug".into(), std::io::sink));
    }
});

/// Where test submissions are expected to land.
pub const RECIPIENT: &str = "owner@example.com";

/// In-memory stand-in for the SMTP relay: records every send, or rejects each
/// one when built with `failing()`.
pub struct RecordingMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
    fail: bool,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl MailTransport for RecordingMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Smtp("connection refused".into()));
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

pub struct TestApp {
    pub addr: String,
    pub mailer: Arc<RecordingMailer>,
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(Arc::new(RecordingMailer::new()), PathBuf::from("static")).await
}

pub async fn spawn_app_with_failing_mailer() -> TestApp {
    spawn_app_with(Arc::new(RecordingMailer::failing()), PathBuf::from("static")).await
}

pub async fn spawn_app_with_static_dir(static_dir: PathBuf) -> TestApp {
    spawn_app_with(Arc::new(RecordingMailer::new()), static_dir).await
}

async fn spawn_app_with(mailer: Arc<RecordingMailer>, static_dir: PathBuf) -> TestApp {
    Lazy::force(&TRACING);

    let configuration = get_configuration().expect("should load configuration");

    let listener = TcpListener::bind(format!("{}:0", configuration.app.host))
        .expect("failed to bind to random port");
    let port = listener.local_addr().unwrap().port();

    let transport: Arc<dyn MailTransport> = mailer.clone();
    let server = portfolio::run::run(
        listener,
        transport,
        ContactRecipient(RECIPIENT.into()),
        StaticDir(static_dir),
    )
    .expect("Failed to bind address");
    let _ = tokio::spawn(server);

    TestApp {
        addr: format!("http://{}:{}", configuration.app.host, port),
        mailer,
    }
}
