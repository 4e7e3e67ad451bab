// service/src/web/routes.rs

use actix_web::web;

use crate::web::handlers::{admin_handlers, page_handlers, product_handlers};

// Called from `main.rs` and from the API tests to configure services for the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .route("/", web::get().to(page_handlers::index_handler))
    .service(
      web::scope("/products")
        .service(
          web::resource("")
            .route(web::get().to(product_handlers::list_products_handler))
            .route(web::post().to(product_handlers::create_product_handler)),
        )
        // Non-integer ids fail path extraction and answer 404.
        .service(
          web::resource("/{product_id}")
            .route(web::get().to(product_handlers::get_product_handler))
            .route(web::put().to(product_handlers::update_product_handler))
            .route(web::delete().to(product_handlers::delete_product_handler)),
        ),
    )
    .service(web::scope("/admin").route("/reset", web::delete().to(admin_handlers::reset_products_handler)));
}
