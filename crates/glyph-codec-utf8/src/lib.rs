#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # glyph-codec-utf8
//!
//! ## 教案目的（Why）
//! - **定位**：变宽 UTF-8 字符集策略，覆盖 1..4 字节的全部标量区间，
//!   是“先计数、后编码”协议最常见的落点。
//! - **架构角色**：宽度判定与位级写出都收敛在本 crate；
//!   代理缝合与回退时机由 [`StreamEncoder`](glyph_codecs::StreamEncoder) 决定。
//!
//! ## 交互契约（What）
//! - **宽度规则**：`U+0000..=U+007F` 1 字节、`..=U+07FF` 2 字节、
//!   `..=U+FFFF` 3 字节、增补平面 4 字节；
//! - **回退序列**：U+FFFD 的 UTF-8 形式 `EF BF BD`（3 字节），
//!   用于落单代理等不完整输入；
//! - **后置条件**：`encode_scalar` 写出的字节数恒等于 `width_for_scalar`。

use glyph_codecs::{CodecDescriptor, ScalarCodec};

/// U+FFFD 的 UTF-8 编码。
const FALLBACK: [u8; 3] = [0xEF, 0xBF, 0xBD];

/// 变宽 UTF-8 编码策略。
///
/// # 契约说明（What）
/// - 无状态、可复制；
/// - 宽度判定与 [`char::encode_utf8`] 的输出长度恒等，这是计数契约的根基。
#[derive(Debug, Clone, Copy)]
pub struct Utf8Codec {
    descriptor: CodecDescriptor,
}

impl Utf8Codec {
    /// 构造 UTF-8 编码策略实例。
    #[must_use]
    pub const fn new() -> Self {
        Self {
            descriptor: CodecDescriptor::new("utf-8"),
        }
    }
}

impl Default for Utf8Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarCodec for Utf8Codec {
    fn descriptor(&self) -> &CodecDescriptor {
        &self.descriptor
    }

    fn width_for_scalar(&self, scalar: char) -> usize {
        scalar.len_utf8()
    }

    fn fallback_width(&self) -> usize {
        FALLBACK.len()
    }

    fn fallback_bytes(&self) -> &[u8] {
        &FALLBACK
    }

    fn encode_scalar(&self, scalar: char, dst: &mut [u8]) -> usize {
        scalar.encode_utf8(dst).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 四个宽度档位的边界标量。
    #[test]
    fn width_ladder_matches_utf8_rules() {
        let codec = Utf8Codec::new();
        assert_eq!(codec.width_for_scalar('\u{0000}'), 1);
        assert_eq!(codec.width_for_scalar('\u{007F}'), 1);
        assert_eq!(codec.width_for_scalar('\u{0080}'), 2);
        assert_eq!(codec.width_for_scalar('\u{07FF}'), 2);
        assert_eq!(codec.width_for_scalar('\u{0800}'), 3);
        assert_eq!(codec.width_for_scalar('\u{FFFF}'), 3);
        assert_eq!(codec.width_for_scalar('\u{10000}'), 4);
        assert_eq!(codec.width_for_scalar('\u{10FFFF}'), 4);
    }

    #[test]
    fn fallback_is_three_byte_replacement_char() {
        let codec = Utf8Codec::new();
        assert_eq!(codec.fallback_width(), 3);
        assert_eq!(codec.fallback_bytes(), &[0xEF, 0xBF, 0xBD]);
    }

    #[test]
    fn encode_scalar_width_matches_declared_width() {
        let codec = Utf8Codec::new();
        let mut dst = [0u8; 4];
        for scalar in ['A', 'ß', '测', '𝄞'] {
            let written = codec.encode_scalar(scalar, &mut dst);
            assert_eq!(written, codec.width_for_scalar(scalar));
        }
        assert_eq!(&dst, "𝄞".as_bytes());
    }
}
