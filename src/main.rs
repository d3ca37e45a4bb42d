use portfolio::config::get_configuration;
use portfolio::startup::AppServer;
use portfolio::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_subscriber(get_subscriber(
        "portfolio".into(),
        "info".into(),
        std::io::stdout,
    ));

    let configuration = get_configuration().expect("Should have loaded configuration");
    let server = AppServer::build(configuration)
        .await
        .expect("should have created server");

    server.run_until_stopped().await?;

    Ok(())
}
