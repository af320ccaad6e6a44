#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # glyph-codec-utf16
//!
//! ## 教案目的（Why）
//! - **定位**：UTF-16 字符集策略，支持小端与大端两种字节序。
//!   输入与输出同属 UTF-16 家族，但本策略仍然只面对完整标量——
//!   跨调用的代理缝合由编码器完成，这里只负责拆回码元并按字节序写出。
//! - **架构角色**：展示 [`ScalarCodec`] 的“每标量 2 或 4 字节”档位，
//!   与 UTF-8 的 1..4 字节档位互为对照。
//!
//! ## 交互契约（What）
//! - **宽度规则**：BMP 标量 2 字节，增补平面 4 字节（一对代理码元）；
//! - **回退序列**：U+FFFD 按选定字节序的 2 字节形式
//!   （小端 `FD FF`，大端 `FF FD`），用于落单代理等不完整输入；
//! - **后置条件**：`encode_scalar` 写出的字节数恒等于 `width_for_scalar`。
//!
//! ## 风险提示（Trade-offs）
//! - 本策略不写出 BOM；流首标识由上层协议协商，避免分段编码时重复插入。

use glyph_codecs::{CodecDescriptor, ScalarCodec};

/// 输出字节序。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// 低位字节在前（Windows/.NET `Encoding.Unicode` 的默认序）。
    LittleEndian,
    /// 高位字节在前。
    BigEndian,
}

const FALLBACK_LE: [u8; 2] = [0xFD, 0xFF];
const FALLBACK_BE: [u8; 2] = [0xFF, 0xFD];

/// UTF-16 编码策略，字节序在构造时固定。
///
/// # 契约说明（What）
/// - 无状态、可复制；
/// - 增补平面标量经 [`char::encode_utf16`] 拆为代理对后逐码元写出。
#[derive(Debug, Clone, Copy)]
pub struct Utf16Codec {
    descriptor: CodecDescriptor,
    order: ByteOrder,
}

impl Utf16Codec {
    /// 构造小端 UTF-16 编码策略。
    #[must_use]
    pub const fn little_endian() -> Self {
        Self {
            descriptor: CodecDescriptor::new("utf-16le"),
            order: ByteOrder::LittleEndian,
        }
    }

    /// 构造大端 UTF-16 编码策略。
    #[must_use]
    pub const fn big_endian() -> Self {
        Self {
            descriptor: CodecDescriptor::new("utf-16be"),
            order: ByteOrder::BigEndian,
        }
    }

    /// 返回选定的字节序。
    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    #[inline]
    fn put_unit(&self, unit: u16, dst: &mut [u8]) {
        let bytes = match self.order {
            ByteOrder::LittleEndian => unit.to_le_bytes(),
            ByteOrder::BigEndian => unit.to_be_bytes(),
        };
        dst[..2].copy_from_slice(&bytes);
    }
}

impl Default for Utf16Codec {
    fn default() -> Self {
        Self::little_endian()
    }
}

impl ScalarCodec for Utf16Codec {
    fn descriptor(&self) -> &CodecDescriptor {
        &self.descriptor
    }

    fn width_for_scalar(&self, scalar: char) -> usize {
        scalar.len_utf16() * 2
    }

    fn fallback_width(&self) -> usize {
        2
    }

    fn fallback_bytes(&self) -> &[u8] {
        match self.order {
            ByteOrder::LittleEndian => &FALLBACK_LE,
            ByteOrder::BigEndian => &FALLBACK_BE,
        }
    }

    fn encode_scalar(&self, scalar: char, dst: &mut [u8]) -> usize {
        let mut units = [0u16; 2];
        let encoded = scalar.encode_utf16(&mut units);
        for (i, &unit) in encoded.iter().enumerate() {
            self.put_unit(unit, &mut dst[i * 2..]);
        }
        encoded.len() * 2
    }
}
