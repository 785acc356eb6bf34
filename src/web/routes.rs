// src/web/routes.rs

use actix_web::web;

// In a real deployment this would also check DB connectivity.
async fn health_check_handler() -> actix_web::HttpResponse {
  actix_web::HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

// Called in `main.rs` (and by the HTTP tests) to configure the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(
    web::scope("/api/v1") // Base path for API version 1
      // Health Check Route
      .route("/health", web::get().to(health_check_handler))
      // Catalog Routes
      .service(
        web::scope("/products")
          .route(
            "",
            web::get().to(crate::web::handlers::product_handlers::list_products_handler),
          )
          .route(
            "/{product_id}",
            web::get().to(crate::web::handlers::product_handlers::get_product_handler),
          ),
      )
      // Cart Routes (session-scoped; no account needed)
      .service(
        web::scope("/cart")
          .route("", web::get().to(crate::web::handlers::cart_handlers::view_cart_handler))
          .route(
            "/add",
            web::post().to(crate::web::handlers::cart_handlers::add_to_cart_handler),
          )
          .route(
            "/update",
            web::post().to(crate::web::handlers::cart_handlers::update_cart_handler),
          ),
      )
      // Checkout Route
      .service(web::scope("/checkout").route(
        "",
        web::post().to(crate::web::handlers::checkout_handlers::checkout_handler),
      ))
      // Order confirmation data
      .service(web::scope("/orders").route(
        "/{order_id}",
        web::get().to(crate::web::handlers::order_handlers::get_order_handler),
      ))
      // Admin Routes (shared-secret gated)
      .service(
        web::scope("/admin")
          .route(
            "/login",
            web::post().to(crate::web::handlers::admin_handlers::login_handler),
          )
          .route(
            "/products",
            web::get().to(crate::web::handlers::admin_handlers::list_admin_products_handler),
          )
          .route(
            "/products",
            web::post().to(crate::web::handlers::admin_handlers::add_product_handler),
          ),
      ),
  );
}
