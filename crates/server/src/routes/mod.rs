use crate::{doc::ApiDoc, state::AppState};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod course;
pub mod health;
pub mod review;
pub mod wishlist;

/// Routes reachable without a bearer token
fn public_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::root))
        .routes(routes!(health::health))
        .routes(routes!(course::list_courses))
        .routes(routes!(course::get_course))
        .routes(routes!(review::list_reviews))
}

/// Routes that need the claims inserted by the OAuth2 layer
fn protected_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(auth::me))
        .routes(routes!(review::create_review))
        .routes(routes!(review::vote, review::clear_vote))
        .routes(routes!(wishlist::list_wishlist, wishlist::add_to_wishlist))
        .routes(routes!(wishlist::remove_from_wishlist))
        .routes(routes!(wishlist::set_notify))
}

pub fn router(state: AppState, oauth2: OAuth2ResourceServer) -> Router {
    let (public, mut api) = public_routes().split_for_parts();
    let (protected, protected_api) = protected_routes().split_for_parts();
    api.merge(protected_api);

    public
        .merge(protected.route_layer(ServiceBuilder::new().layer(oauth2.into_layer())))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", api))
        .layer(CompressionLayer::new())
        .with_state(state)
}
