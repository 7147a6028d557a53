//! 短码生成工具

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;

/// 每个短码消耗的随机字节数
pub const KEY_ENTROPY_BYTES: usize = 6;

/// 短码长度（URL-safe base64 编码后截断）
pub const SHORT_KEY_LENGTH: usize = 8;

/// 生成一个新的短码
///
/// 从线程本地 CSPRNG（由操作系统熵源播种）取 6 个字节，
/// 使用 URL-safe base64 编码后截取前 8 个字符。
///
/// 不检查与已有映射的冲突：相同短码的后一次写入会直接覆盖前一次。
///
/// # Panics
/// 熵源不可用时 panic，服务器模式下的 panic hook 会终止进程。
pub fn generate_short_key() -> String {
    let bytes: [u8; KEY_ENTROPY_BYTES] = rand::random();
    let mut encoded = URL_SAFE.encode(bytes);
    encoded.truncate(SHORT_KEY_LENGTH);
    encoded
}

/// 字符是否属于 URL-safe base64 字母表（不含填充符）
#[inline]
pub fn is_url_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// 检查字符串是否是合法格式的短码
pub fn is_valid_short_key(key: &str) -> bool {
    key.len() == SHORT_KEY_LENGTH && key.chars().all(is_url_safe_char)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_short_key_length() {
        for _ in 0..100 {
            assert_eq!(generate_short_key().len(), SHORT_KEY_LENGTH);
        }
    }

    #[test]
    fn test_generate_short_key_alphabet() {
        for _ in 0..200 {
            let key = generate_short_key();
            assert!(is_valid_short_key(&key), "Invalid key: {}", key);
            assert!(!key.contains('='), "Key must not carry padding: {}", key);
        }
    }

    #[test]
    fn test_generate_short_key_uniqueness() {
        let keys: HashSet<String> = (0..1000).map(|_| generate_short_key()).collect();

        // 48 bits of entropy: 1000 draws collide with negligible probability
        assert!(keys.len() > 995, "Generated keys lack sufficient randomness");
    }

    #[test]
    fn test_is_valid_short_key() {
        assert!(is_valid_short_key("abcDEF12"));
        assert!(is_valid_short_key("a-b_c-d_"));
        assert!(!is_valid_short_key(""));
        assert!(!is_valid_short_key("abc"));
        assert!(!is_valid_short_key("abcdefghi"));
        assert!(!is_valid_short_key("abc+/EF="));
    }
}
