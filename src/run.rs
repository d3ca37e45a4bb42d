use std::net::TcpListener;
use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::dev::Server;
use actix_web::http::StatusCode;
use actix_web::middleware::ErrorHandlers;
use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use crate::domain::site::{ContactRecipient, StaticDir};
use crate::mail::MailTransport;
use crate::routes::contact::send_message;
use crate::routes::error_pages::{not_found, render_server_error};
use crate::routes::health::health_check;
use crate::routes::home::home;
use crate::routes::resume::download_resume;

pub fn run(
    listener: TcpListener,
    mailer: Arc<dyn MailTransport>,
    recipient: ContactRecipient,
    static_dir: StaticDir,
) -> Result<Server, std::io::Error> {
    let mailer = web::Data::from(mailer);
    let recipient = web::Data::new(recipient);
    let static_dir = web::Data::new(static_dir);
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .wrap(
                ErrorHandlers::new()
                    .handler(StatusCode::INTERNAL_SERVER_ERROR, render_server_error),
            )
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(home))
            .route("/send_message", web::post().to(send_message))
            .route("/download_resume", web::get().to(download_resume))
            .service(Files::new("/static", static_dir.0.clone()))
            .app_data(mailer.clone())
            .app_data(recipient.clone())
            .app_data(static_dir.clone())
            .default_service(web::route().to(not_found))
    })
    .listen(listener)?
    .run())
}
