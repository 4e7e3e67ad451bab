// service/src/web/handlers/page_handlers.rs

use actix_web::HttpResponse;

const INDEX_HTML: &str = include_str!("../../../static/index.html");

pub async fn index_handler() -> HttpResponse {
  HttpResponse::Ok().content_type("text/html; charset=utf-8").body(INDEX_HTML)
}
