//! 创建短链

use actix_web::http::Method;
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse, web};
use futures_util::StreamExt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

use crate::errors::{Result, ShortenerError};
use crate::storage::UrlStore;
use crate::utils::generate_short_key;

/// 短链前缀，响应体为 `前缀 + 短码`
#[derive(Clone, Debug)]
pub struct BaseUrl(pub String);

impl BaseUrl {
    pub fn short_url(&self, key: &str) -> String {
        format!("{}{}", self.0, key)
    }
}

pub struct ShortenService {}

impl ShortenService {
    /// `POST /`：请求体原样作为目标 URL
    ///
    /// 不校验 URL 格式也不要求 UTF-8，空请求体同样接受并映射到空值。
    pub async fn handle_create(
        req: HttpRequest,
        payload: web::Payload,
        store: web::Data<Arc<dyn UrlStore>>,
        base_url: web::Data<BaseUrl>,
    ) -> HttpResponse {
        if req.method() != Method::POST {
            trace!("Create rejected, method not allowed: {}", req.method());
            return HttpResponse::MethodNotAllowed().finish();
        }

        let body = match read_body(payload).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read create request body: {}", e);
                return HttpResponse::BadRequest()
                    .content_type(ContentType::plaintext())
                    .body("Error reading request body");
            }
        };

        let short_key = generate_short_key();
        let short_url = base_url.short_url(&short_key);

        debug!("Created short key {} ({} bytes target)", short_key, body.len());
        store.insert(short_key, body);

        HttpResponse::Created()
            .insert_header(("Content-Type", "text/plain"))
            .body(short_url)
    }
}

/// 读取完整请求体，流结束即读取完成
async fn read_body(mut payload: web::Payload) -> Result<web::Bytes> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| ShortenerError::body_read(e.to_string()))?;
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

/// 创建路由：`/` 上的所有方法都交给 handler，由其拒绝非 POST 请求
pub fn shorten_routes() -> actix_web::Resource {
    web::resource("/").to(ShortenService::handle_create)
}
