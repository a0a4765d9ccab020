use crate::configuration::Settings;
use crate::errors::ApiError;
use crate::routes;
use crate::store::ResourceStore;
use actix_cors::Cors;
use actix_web::dev::{Server, Service};
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tracing_actix_web::TracingLogger;

/// Registers every resource scope. Shared by the server and route tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::not_valid(err.to_string()).into());

    cfg.app_data(query_config)
        .service(web::scope("/health_check").service(routes::health_check))
        .service(
            web::scope("/product")
                .service(routes::product::get::list)
                .service(routes::product::add::add)
                .service(routes::product::get::item)
                .service(routes::product::update::item)
                .service(routes::product::delete::item),
        )
        .service(
            web::scope("/article")
                .service(routes::article::get::list)
                .service(routes::article::add::add)
                .service(routes::article::get::item)
                .service(routes::article::update::item)
                .service(routes::article::delete::item),
        )
        .service(
            web::scope("/comment")
                .service(routes::comment::get::product_list)
                .service(routes::comment::add::product_add)
                .service(routes::comment::update::product_item)
                .service(routes::comment::delete::product_item)
                .service(routes::comment::get::article_list)
                .service(routes::comment::add::article_add)
                .service(routes::comment::update::article_item)
                .service(routes::comment::delete::article_item),
        );
}

pub async fn run(
    listener: TcpListener,
    store: Arc<dyn ResourceStore>,
    settings: Settings,
) -> Result<Server, std::io::Error> {
    let store = web::Data::new(store);
    let request_timeout = Duration::from_secs(settings.request_timeout_secs);

    let server = HttpServer::new(move || {
        App::new()
            .wrap_fn(move |req, srv| {
                let fut = srv.call(req);
                async move {
                    match tokio::time::timeout(request_timeout, fut).await {
                        Ok(res) => res,
                        Err(_) => {
                            tracing::warn!("Request exceeded {:?}", request_timeout);
                            Err(ApiError::Timeout.into())
                        }
                    }
                }
            })
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(store.clone())
            .configure(configure)
    })
    .listen(listener)?
    .run();

    Ok(server)
}
