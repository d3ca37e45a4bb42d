use actix_web::dev::ServiceResponse;
use actix_web::http::header::{ContentType, HeaderValue, CONTENT_TYPE};
use actix_web::middleware::ErrorHandlerResponse;
use actix_web::{HttpResponse, Responder};

/// Fallback for every path the route table does not know about.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound()
        .content_type(ContentType::html())
        .body(include_str!("not_found.html"))
}

/// Dresses bare 500 responses in the HTML error page. Responses that already
/// carry a content type (e.g. the JSON failure bodies of `/send_message`)
/// pass through untouched.
pub fn render_server_error<B>(
    res: ServiceResponse<B>,
) -> actix_web::Result<ErrorHandlerResponse<B>> {
    if res.response().headers().contains_key(CONTENT_TYPE) {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    }

    let (req, res) = res.into_parts();
    let mut res = res.set_body(include_str!("server_error.html"));
    res.headers_mut().insert(
        CONTENT_TYPE,
        HeaderValue::from_static("text/html; charset=utf-8"),
    );

    let res = ServiceResponse::new(req, res)
        .map_into_boxed_body()
        .map_into_right_body();
    Ok(ErrorHandlerResponse::Response(res))
}
