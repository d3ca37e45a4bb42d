use actix_files::NamedFile;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse};

use crate::domain::site::StaticDir;

const RESUME_FILE: &str = "resume.pdf";

/// Serves the resume as a download. A missing or unreadable file turns into a
/// 404 carrying the file-access error text.
pub async fn download_resume(req: HttpRequest, static_dir: web::Data<StaticDir>) -> HttpResponse {
    let path = static_dir.0.join("assets").join(RESUME_FILE);

    match NamedFile::open_async(&path).await {
        Ok(file) => file
            .set_content_disposition(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(RESUME_FILE.to_string())],
            })
            .into_response(&req),
        Err(e) => HttpResponse::NotFound().body(e.to_string()),
    }
}
