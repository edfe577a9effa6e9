use salvo::cors::*;
use salvo::prelude::*;

use crate::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .hoop(affix_state::inject(state))
        .hoop(
            Cors::new()
                .allow_origin(AllowOrigin::any())
                .allow_methods(AllowMethods::any())
                .allow_headers(AllowHeaders::any())
                .into_handler(),
        )
        .push(Router::with_path("health").get(handlers::health::health))
        .push(Router::with_path("v1/models").get(handlers::health::list_models))
        .push(
            Router::with_path("v1/sections/method")
                .post(handlers::section::section_completions),
        )
}
