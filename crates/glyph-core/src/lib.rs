#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

//! # glyph-core
//!
//! ## 教案目的（Why）
//! - **定位**：本 crate 是 glyph 转码平台的契约层，承载“UTF-16 码元序列 → 目标字节编码”
//!   的有状态转换引擎。上层字符集实现（`glyph-codec-*`）只需要提供标量级的宽度与写出规则，
//!   跨调用的代理对（surrogate pair）缝合、回退（fallback）记账与参数校验全部收敛在这里。
//! - **架构角色**：`StreamEncoder` 面向“先计数、后编码”的两阶段协议——调用方先用
//!   [`StreamEncoder::byte_count`] 精确测量输出体积，再分配缓冲并调用
//!   [`StreamEncoder::encode`]。两条路径共享同一套扫描例程，预测值与实际写出量
//!   在构造层面恒等，而非靠测试巧合。
//! - **设计演进**：本迭代落地错误域、策略 trait、状态机与指标挂钩；字符集实现
//!   由 `glyph-codec-ascii`/`glyph-codec-utf8`/`glyph-codec-utf16` 分 crate 提供。
//!
//! ## 交互契约（What）
//! - **输入前提**：调用方提供 UTF-16 码元切片与 `[index, index+count)` 子区间；
//!   区间越界、负值参数与缺失序列均在扫描开始前被拒绝，不产生任何状态副作用。
//! - **输出能力**：
//!   - `byte_count` 返回与 `encode` 完全一致的字节数，且不改变编码器状态；
//!   - `encode` 写出字节并提交尾部悬挂高代理的跨调用状态。
//! - **前置条件**：同一实例上的调用必须串行（`&mut self` 已在类型层面强制）；
//! - **后置条件**：非法字符数据（落单代理）不会报错，而是按 codec 的回退序列记账。
//!
//! ## 实现策略（How）
//! - **模块划分**：
//!   1. `error`：稳定错误码与参数校验错误域；
//!   2. `codec`：标量级编码策略契约与描述符；
//!   3. `surrogate`：UTF-16 代理区间的常量与组合运算；
//!   4. `encoder`：`Idle`/`PendingHigh` 两态状态机与共享扫描例程；
//!   5. `metrics`：编码指标挂钩，供宿主按需接入观测后端。
//! - **关键技巧**：计数路径以“干跑”方式求值状态迁移而不提交，编码路径先经同一干跑
//!   预算输出空间，容量不足时在写出任何字节之前失败，保证调用原子性。
//!
//! ## 风险提示（Trade-offs）
//! - **功能边界**：仅覆盖编码方向（字符 → 字节）；解码与区域性代码页不在本层职责内。
//! - **维护建议**：新增字符集时仅实现 [`ScalarCodec`]，不要绕过 `StreamEncoder`
//!   自行维护跨调用状态，否则回退记账与计数契约会出现分叉。

pub mod codec;
pub mod error;
pub mod metrics;
pub mod surrogate;

mod encoder;

pub use codec::{CodecDescriptor, ScalarCodec};
pub use encoder::{PendingUnit, StreamEncoder};
pub use error::{EncodeError, codes};
pub use metrics::{EncodePhase, EncoderMetricsHook, MetricsSink};

/// 统一的结果别名，默认错误类型为本层的 [`EncodeError`]。
pub type Result<T, E = EncodeError> = core::result::Result<T, E>;
