//! 标量级编码策略契约。
//!
//! ## 模块目的（Why）
//! - 把“一个完整 Unicode 标量值映射为多少字节、写出哪些字节”的知识从状态机中
//!   剥离出来：跨调用的代理缝合与回退记账属于 [`StreamEncoder`](crate::StreamEncoder)，
//!   字节宽度与位级布局属于各字符集 crate。
//! - 回退（fallback）宽度按 codec 配置而非全局常量——UTF-8 的替换序列占 3 字节，
//!   UTF-16 占 2 字节，ASCII 占 1 字节，硬编码任何一个都会破坏其余字符集的计数契约。
//!
//! ## 交互契约（What）
//! - 实现必须是无跨调用状态的不可变策略；所有跨调用状态由编码器持有。
//! - `width_for_scalar` 与 `encode_scalar` 对同一标量必须给出一致的字节数，
//!   这是“先计数、后编码”协议成立的根基。

/// 编码器描述符，标识字符集名称供注册与日志使用。
///
/// # 设计背景（Why）
/// - 观测与排障需要一个稳定的人读标签；用独立结构而非裸字符串，
///   便于未来在不破坏调用方的前提下追加字节序、BOM 策略等元信息。
///
/// # 契约说明（What）
/// - `charset` 采用 IANA 风格的小写命名（如 `"utf-8"`、`"utf-16le"`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecDescriptor {
    charset: &'static str,
}

impl CodecDescriptor {
    /// 构造描述符。
    #[must_use]
    pub const fn new(charset: &'static str) -> Self {
        Self { charset }
    }

    /// 返回字符集名称。
    pub const fn charset(&self) -> &'static str {
        self.charset
    }
}

/// `ScalarCodec` 定义单个 Unicode 标量值到目标编码字节的映射策略。
///
/// # 设计初衷（Why）
/// - 借鉴“Decoder/Encoder 组合 trait”的分层方式：本 trait 是字符集实现的
///   最小插拔面，编码器对其保持完全无知——既不关心位级布局，也不关心
///   回退序列的具体内容，只做宽度记账与字节搬运。
///
/// # 行为逻辑（How）
/// 1. `descriptor` 返回字符集标识；
/// 2. `width_for_scalar` 给出一个完整标量（单码元或合法代理对组合）的输出宽度；
/// 3. `fallback_width`/`fallback_bytes` 描述非法或不完整输入的替换序列；
/// 4. `encode_scalar` 将标量写入输出切片并返回写出的字节数。
///
/// # 契约说明（What）
/// - **前置条件**：`encode_scalar` 的 `dst` 至少有 `width_for_scalar(scalar)` 字节；
/// - **后置条件**：`encode_scalar` 的返回值恒等于 `width_for_scalar(scalar)`；
///   `fallback_bytes().len()` 恒等于 `fallback_width()`；
/// - 实现需满足 `Send + Sync + 'static`，以便编码器实例跨线程移交。
///
/// # 风险提示（Trade-offs）
/// - 宽度与写出逻辑拆成两个方法意味着同一判定会执行两次；换来的是计数路径
///   完全不触碰输出缓冲。对 1..4 字节的查表型判定，这个代价可以忽略。
pub trait ScalarCodec: Send + Sync + 'static {
    /// 返回字符集描述符。
    fn descriptor(&self) -> &CodecDescriptor;

    /// 返回编码一个完整标量值所需的字节数。
    fn width_for_scalar(&self, scalar: char) -> usize;

    /// 返回替换序列的字节宽度。
    fn fallback_width(&self) -> usize;

    /// 返回替换序列本身，用于非法或不完整输入。
    fn fallback_bytes(&self) -> &[u8];

    /// 将标量值写入 `dst` 起始处，返回写出的字节数。
    fn encode_scalar(&self, scalar: char, dst: &mut [u8]) -> usize;
}
