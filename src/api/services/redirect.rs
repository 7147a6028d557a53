use actix_web::http::Method;
use actix_web::http::header::{ContentType, HeaderValue, LOCATION};
use actix_web::{HttpRequest, HttpResponse, web};
use bytes::Bytes;
use std::sync::Arc;
use tracing::{debug, trace};

use crate::storage::UrlStore;

pub struct RedirectService {}

impl RedirectService {
    /// `GET /{id}`：命中则 307 跳转到原始 URL
    ///
    /// 只读操作，不修改存储。
    pub async fn handle_redirect(
        req: HttpRequest,
        store: web::Data<Arc<dyn UrlStore>>,
    ) -> HttpResponse {
        if req.method() != Method::GET {
            trace!("Redirect rejected, method not allowed: {}", req.method());
            return HttpResponse::MethodNotAllowed().finish();
        }

        let id = req.match_info().get("id").unwrap_or_default();
        if id.is_empty() {
            return Self::bad_request_response();
        }

        match store.lookup(id) {
            Some(original_url) => Self::finish_redirect(id, original_url),
            None => {
                debug!("Redirect key not found: {}", id);
                Self::not_found_response()
            }
        }
    }

    fn finish_redirect(id: &str, original_url: Bytes) -> HttpResponse {
        trace!(
            "Redirecting {} -> {}",
            id,
            String::from_utf8_lossy(&original_url)
        );
        HttpResponse::TemporaryRedirect()
            .insert_header((LOCATION, location_header(original_url)))
            .finish()
    }

    #[inline]
    fn bad_request_response() -> HttpResponse {
        HttpResponse::BadRequest()
            .content_type(ContentType::plaintext())
            .body("Bad request")
    }

    #[inline]
    fn not_found_response() -> HttpResponse {
        HttpResponse::NotFound()
            .content_type(ContentType::plaintext())
            .body("Not found")
    }
}

/// header 值不允许出现的字节：除 TAB 外的控制字符与 DEL
#[inline]
fn is_forbidden_header_byte(b: u8) -> bool {
    (b < 0x20 && b != b'\t') || b == 0x7f
}

/// 存储的 URL 原样写入 Location；含有非法字节时将其替换为空格
fn location_header(url: Bytes) -> HeaderValue {
    if !url.iter().copied().any(is_forbidden_header_byte)
        && let Ok(value) = HeaderValue::from_maybe_shared(url.clone())
    {
        return value;
    }

    let sanitized: Vec<u8> = url
        .iter()
        .map(|&b| if is_forbidden_header_byte(b) { b' ' } else { b })
        .collect();
    // every remaining byte is visible ASCII, obs-text or TAB
    HeaderValue::from_bytes(&sanitized).unwrap_or_else(|_| HeaderValue::from_static(""))
}

/// Redirect 路由配置：`/{id}` 上的所有方法都交给 handler，由其拒绝非 GET 请求
pub fn redirect_routes() -> actix_web::Resource {
    web::resource("/{id}").to(RedirectService::handle_redirect)
}
