#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # glyph-codec-ascii
//!
//! ## 教案目的（Why）
//! - **定位**：单字节 ASCII 字符集策略，是 [`ScalarCodec`] 契约最小的参考实现。
//! - **架构角色**：所有标量都折算为一个输出字节——可编码范围外的标量与
//!   非法输入一样落到 `?` 替换字节，保持“每码元一字节”的计数直觉。
//!
//! ## 交互契约（What）
//! - **宽度规则**：任何标量恒为 1 字节（范围外标量写出替换字节，宽度不变）；
//! - **回退序列**：`?`（1 字节），用于落单代理等不完整输入；
//! - **前置条件**：由 [`StreamEncoder`](glyph_codecs::StreamEncoder) 负责代理缝合，
//!   本策略只会收到完整标量。
//!
//! ## 风险提示（Trade-offs）
//! - 以 `?` 吞掉非 ASCII 标量是有损转换；需要保真时应选择 UTF-8/UTF-16 策略。

use glyph_codecs::{CodecDescriptor, ScalarCodec};

const REPLACEMENT: u8 = b'?';
const FALLBACK: [u8; 1] = [REPLACEMENT];

/// 单字节 ASCII 编码策略。
///
/// # 契约说明（What）
/// - 无状态、可复制，可安全在多线程间共享；
/// - `width_for_scalar` 恒为 1，`encode_scalar` 对范围外标量写出 `?`。
#[derive(Debug, Clone, Copy)]
pub struct AsciiCodec {
    descriptor: CodecDescriptor,
}

impl AsciiCodec {
    /// 构造 ASCII 编码策略实例。
    #[must_use]
    pub const fn new() -> Self {
        Self {
            descriptor: CodecDescriptor::new("us-ascii"),
        }
    }
}

impl Default for AsciiCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl ScalarCodec for AsciiCodec {
    fn descriptor(&self) -> &CodecDescriptor {
        &self.descriptor
    }

    fn width_for_scalar(&self, _scalar: char) -> usize {
        1
    }

    fn fallback_width(&self) -> usize {
        FALLBACK.len()
    }

    fn fallback_bytes(&self) -> &[u8] {
        &FALLBACK
    }

    fn encode_scalar(&self, scalar: char, dst: &mut [u8]) -> usize {
        let value = scalar as u32;
        dst[0] = if value <= 0x7F {
            value as u8
        } else {
            REPLACEMENT
        };
        1
    }
}
