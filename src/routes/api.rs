use actix_web::web;

use crate::handlers;

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(web::resource("/login").route(web::post().to(handlers::auth::login))),
    )
    .service(web::resource("/content").route(web::get().to(handlers::campaign::get_content)))
    .service(web::resource("/donate").route(web::post().to(handlers::donations::submit)))
    .service(
        web::scope("/donations")
            .service(web::resource("/recent").route(web::get().to(handlers::donations::recent))),
    )
    .service(
        web::resource("/donation-recap").route(web::post().to(handlers::confirmations::submit)),
    )
    .service(web::resource("/prayers").route(web::get().to(handlers::prayers::index)))
    .service(
        web::resource("/progress-images").route(web::get().to(handlers::progress::public_index)),
    )
    .service(
        web::scope("/admin")
            .service(
                web::resource("/content").route(web::put().to(handlers::campaign::update_content)),
            )
            .service(
                web::scope("/confirmations")
                    .service(
                        web::resource("")
                            .route(web::get().to(handlers::confirmations::admin_index))
                            .route(web::put().to(handlers::confirmations::review)),
                    )
                    .service(
                        web::resource("/count")
                            .route(web::get().to(handlers::confirmations::pending_count)),
                    ),
            )
            .service(
                web::scope("/progress-images")
                    .service(
                        web::resource("")
                            .route(web::get().to(handlers::progress::admin_index))
                            .route(web::post().to(handlers::progress::create)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::put().to(handlers::progress::update))
                            .route(web::delete().to(handlers::progress::delete)),
                    ),
            )
            .service(web::resource("/upload").route(web::post().to(handlers::uploads::upload))),
    );
}
