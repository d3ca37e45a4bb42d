use std::net::TcpListener;
use std::sync::Arc;

use actix_web::dev::Server;

use crate::config::Configuration;
use crate::domain::site::{ContactRecipient, StaticDir};
use crate::mail::{MailTransport, SmtpMailer};
use crate::run::run;

pub struct AppServer {
    port: u16,
    address: String,
    server: Server,
}

impl AppServer {
    pub async fn build(configuration: Configuration) -> Result<Self, anyhow::Error> {
        let mailer: Arc<dyn MailTransport> = Arc::new(SmtpMailer::new(&configuration.mail)?);

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.app.host, configuration.app.port
        ))?;

        tracing::info!(
            "Starting service on address: {}",
            listener.local_addr()?
        );

        let address = configuration.app.host.clone();
        let port = listener.local_addr()?.port();

        // Submissions land in the operator's own mailbox.
        let recipient = ContactRecipient(configuration.mail.username.clone());
        let server = run(
            listener,
            mailer,
            recipient,
            StaticDir(configuration.app.static_dir.clone()),
        )?;

        Ok(Self {
            port,
            address,
            server,
        })
    }

    pub fn to_server_address(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }

    pub fn address(&self) -> String {
        self.address.clone()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
