//! HTTP surface: handlers, routes and middleware

pub mod middleware;
pub mod services;

use actix_web::web;

/// 注册全部路由（服务器与测试共用）
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(services::shorten_routes())
        .service(services::redirect_routes());
}
