use axum::{
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::auth::{admin_middleware, auth_middleware};
use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router<Arc<AppState>> {
    let public_routes = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/instrument", get(handlers::instrument::list_instruments))
        .route("/public/orderbook/:ticker", get(handlers::public::orderbook))
        .route("/public/transactions/:ticker", get(handlers::public::transactions));

    let user_routes = Router::new()
        .route("/balance", get(handlers::balance::get_balances))
        .route("/order", post(handlers::order::create_order))
        .route("/order", get(handlers::order::list_orders))
        .route("/order/:id", get(handlers::order::get_order))
        .route("/order/:id", delete(handlers::order::cancel_order))
        .layer(axum_middleware::from_fn_with_state(state.clone(), auth_middleware));

    let admin_routes = Router::new()
        .route("/instrument", post(handlers::instrument::create_instrument))
        .route("/admin/instrument", post(handlers::instrument::create_instrument))
        .route("/admin/instrument/:ticker", delete(handlers::instrument::delete_instrument))
        .route("/admin/balance/deposit", post(handlers::admin::deposit))
        .route("/admin/balance/withdraw", post(handlers::admin::withdraw))
        .route("/admin/user/:id", delete(handlers::admin::delete_user))
        .layer(axum_middleware::from_fn_with_state(state.clone(), admin_middleware));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(admin_routes)
}
