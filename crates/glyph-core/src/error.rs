//! 编码调用的错误域。
//!
//! ## 模块目的（Why）
//! - 将“调用方编程错误”（缺失序列、区间越界、输出缓冲不足）与“非法字符数据”
//!   （落单代理）严格分离：前者以错误形式立即返回，后者走 codec 的回退序列，永不报错。
//! - 每个变体绑定一个稳定字符串错误码，遵循 `<领域>.<语义>` 约定，便于日志与
//!   指标系统跨组件聚合。
//!
//! ## 契约说明（What）
//! - 所有变体均表示“扫描开始前”的校验失败；返回错误的调用不产生任何状态副作用。
//! - 错误不可重试：修复调用参数是唯一的恢复路径。

use core::fmt;

/// 框架内置的错误码常量集合，确保可观测性系统具有稳定识别符。
pub mod codes {
    /// 必填的码元序列缺失。
    pub const ENCODE_NULL_INPUT: &str = "encode.null_input";
    /// `index`/`count` 为负，或区间超出序列长度。
    pub const ENCODE_OUT_OF_RANGE: &str = "encode.out_of_range";
    /// 输出缓冲剩余空间不足以容纳本次编码结果。
    pub const ENCODE_BUFFER_TOO_SMALL: &str = "encode.buffer_too_small";
}

/// 编码调用的参数校验错误。
///
/// # 设计背景（Why）
/// - 两阶段协议要求 `byte_count` 与 `encode` 的校验行为完全一致，集中为单一枚举
///   可避免两条路径各自演化出不同的拒绝语义。
/// - 枚举变体直接对应稳定错误码，调用方既可 `match` 变体，也可凭 [`code`](Self::code)
///   做字符串级聚合。
///
/// # 契约说明（What）
/// - `NullInput`：必填的码元序列参数缺失；
/// - `OutOfRange`：`index < 0`、`count < 0`，或 `index + count` 越过序列末尾
///   （含加法溢出）；
/// - `BufferTooSmall`：仅 `encode` 返回——输出缓冲自 `dst_index` 起的剩余空间
///   小于本次调用将写出的字节数。
/// - **后置条件**：任何变体返回时编码器状态与输出缓冲均保持原样。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// 必填的码元序列参数缺失。
    NullInput,
    /// 区间参数为负或越过序列末尾。
    OutOfRange,
    /// 输出缓冲剩余空间不足。
    BufferTooSmall,
}

impl EncodeError {
    /// 返回变体对应的稳定错误码。
    pub const fn code(self) -> &'static str {
        match self {
            EncodeError::NullInput => codes::ENCODE_NULL_INPUT,
            EncodeError::OutOfRange => codes::ENCODE_OUT_OF_RANGE,
            EncodeError::BufferTooSmall => codes::ENCODE_BUFFER_TOO_SMALL,
        }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let detail = match self {
            EncodeError::NullInput => "input code unit sequence is missing",
            EncodeError::OutOfRange => "index/count do not denote a valid range",
            EncodeError::BufferTooSmall => "output buffer cannot hold the encoded bytes",
        };
        write!(f, "{}: {}", self.code(), detail)
    }
}

impl core::error::Error for EncodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    /// 错误码必须与变体一一对应，避免观测链路出现歧义标识。
    #[test]
    fn codes_are_stable_identifiers() {
        assert_eq!(EncodeError::NullInput.code(), "encode.null_input");
        assert_eq!(EncodeError::OutOfRange.code(), "encode.out_of_range");
        assert_eq!(EncodeError::BufferTooSmall.code(), "encode.buffer_too_small");
    }

    #[test]
    fn display_carries_code_prefix() {
        let rendered = format!("{}", EncodeError::OutOfRange);
        assert!(rendered.starts_with("encode.out_of_range: "));
    }
}
