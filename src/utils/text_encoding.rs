// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use thiserror::Error;
use tracing::debug;

/// 文本解码错误类型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TextDecodeError {
    #[error("响应内容包含无效的 {encoding} 字节序列")]
    Malformed { encoding: &'static str },
}

/// 将响应体解码为 UTF-8 文本
///
/// 依次尝试：BOM 指定的编码、UTF-8、`chardetng` 猜测的编码。
/// 转换过程中出现无效字节序列时返回错误，不做替换。
pub fn decode_text(input: &[u8]) -> Result<String, TextDecodeError> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(input) {
        debug!("检测到 BOM，编码: {}", encoding.name());
        return convert(&input[bom_len..], encoding);
    }

    if let Ok(text) = std::str::from_utf8(input) {
        return Ok(text.to_owned());
    }

    let mut detector = EncodingDetector::new();
    detector.feed(input, true);
    let encoding = detector.guess(None, true);
    debug!("检测到编码: {}", encoding.name());

    convert(input, encoding)
}

fn convert(input: &[u8], encoding: &'static Encoding) -> Result<String, TextDecodeError> {
    let (text, had_errors) = encoding.decode_without_bom_handling(input);
    if had_errors {
        return Err(TextDecodeError::Malformed {
            encoding: encoding.name(),
        });
    }
    Ok(text.into_owned())
}
