#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! # glyph-codecs
//!
//! ## 教案意图（Why）
//! - **职责定位**：为各个 `glyph-codec-*` 字符集实现提供统一、稳定的契约面，
//!   避免每个字符集 crate 直接依赖 `glyph-core` 的内部演进节奏。
//! - **架构价值**：集中 re-export 核心的策略 trait、编码器、错误域与指标挂钩，
//!   使字符集实现层可以插拔替换，同时保持核心 crate 的重构自由度。
//!
//! ## 使用方式（How）
//! - 在字符集 crate 中引入 `glyph-codecs`，即可访问 [`ScalarCodec`]、
//!   [`StreamEncoder`]、[`EncodeError`] 与代理运算工具；
//! - Feature `alloc`/`std` 直接透传到 `glyph-core`，保持二者行为一致。
//!
//! ## 契约说明（What）
//! - 对外暴露的所有类型均来源于 `glyph-core`，确保语义一致；
//! - 不额外引入状态或逻辑，纯粹扮演“接口整合层”。
//!
//! ## 风险提示（Trade-offs）
//! - 本 crate 为 re-export 形态，核心层重构时需同步更新此处映射。

/// 统一暴露编码调用的错误域。
pub use glyph_core::error;
/// 暴露稳定错误码常量命名空间。
pub use glyph_core::error::codes;
/// 重新导出代理区间运算工具，供字符集实现与测试复用。
pub use glyph_core::surrogate;

/// 便捷 re-export：直接在 crate 根访问常用契约。
pub use glyph_core::{
    CodecDescriptor, EncodeError, EncodePhase, EncoderMetricsHook, MetricsSink, PendingUnit,
    Result, ScalarCodec, StreamEncoder,
};
