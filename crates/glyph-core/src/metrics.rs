//! 编码指标挂钩。
//!
//! ## 模块目的（Why）
//! - 为宿主提供最小样板的观测接入点：统一记录消费码元数、产出字节数与回退次数，
//!   避免每个调用点直接耦合具体的指标后端。
//! - 本工作区不内置指标实现；[`MetricsSink`] 是宿主注入后端的对象安全缝合面。
//!
//! ## 契约说明（What）
//! - 所有指标以 `charset` 标签区分字符集，以 [`EncodePhase`] 区分计数/编码两个阶段；
//! - 挂钩只借用 sink，不持有所有权，可在调用栈上临时构造。

use crate::codec::CodecDescriptor;

/// 编码阶段枚举，区分纯计数与实际写出。
///
/// # 设计动机（Why）
/// - 两阶段协议下同一输入会被扫描两次；若不区分阶段，吞吐指标会被干跑虚增一倍。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EncodePhase {
    /// 干跑计数阶段（不产生输出）。
    Count,
    /// 实际编码阶段（写出字节并提交状态）。
    Encode,
}

impl EncodePhase {
    /// 返回阶段的稳定标签值，供指标维度使用。
    #[inline]
    pub const fn mode_label(self) -> &'static str {
        match self {
            EncodePhase::Count => "count",
            EncodePhase::Encode => "encode",
        }
    }
}

/// 指标落点契约，由宿主实现并接入自己的观测后端。
///
/// # 契约说明（What）
/// - 所有方法均为增量语义，允许重复调用累加；
/// - 实现必须容忍高频调用，重操作应在内部做缓冲或采样。
pub trait MetricsSink {
    /// 记录本次调用消费的码元数。
    fn record_units(&self, phase: EncodePhase, charset: &'static str, units: u64);

    /// 记录本次调用计得或写出的字节数。
    fn record_bytes(&self, phase: EncodePhase, charset: &'static str, bytes: u64);

    /// 记录本次调用发生的回退替换次数。
    fn record_fallbacks(&self, phase: EncodePhase, charset: &'static str, count: u64);
}

/// 编码指标挂钩。
///
/// # 设计动机（Why）
/// - 封装与 [`MetricsSink`] 的交互，统一标签取值，调用点只需传业务数值；
/// - 未来若需要批量缓冲或线程本地聚合，可在挂钩内部演进而不动调用方。
///
/// # 契约说明（What）
/// - 挂钩不持有 sink 的所有权；
/// - **前置条件**：`descriptor` 必须来自当前生效的 codec，保证标签一致性。
pub struct EncoderMetricsHook<'a> {
    sink: &'a dyn MetricsSink,
}

impl<'a> EncoderMetricsHook<'a> {
    /// 构造编码指标挂钩。
    pub fn new(sink: &'a dyn MetricsSink) -> Self {
        Self { sink }
    }

    /// 记录一次完整调用的三项指标。
    ///
    /// # 调用契约
    /// - **输入**：`units` 为消费的码元数，`bytes` 为计得/写出的字节数，
    ///   `fallbacks` 为回退替换次数；
    /// - **前置条件**：应在调用成功返回后记录，校验失败的调用不应计入吞吐。
    pub fn record_call(
        &self,
        phase: EncodePhase,
        descriptor: &CodecDescriptor,
        units: u64,
        bytes: u64,
        fallbacks: u64,
    ) {
        let charset = descriptor.charset();
        self.sink.record_units(phase, charset, units);
        self.sink.record_bytes(phase, charset, bytes);
        if fallbacks > 0 {
            self.sink.record_fallbacks(phase, charset, fallbacks);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// 计数型 sink 桩，逐项累加以验证挂钩的转发行为。
    struct CountingSink {
        units: Cell<u64>,
        bytes: Cell<u64>,
        fallbacks: Cell<u64>,
    }

    impl MetricsSink for CountingSink {
        fn record_units(&self, _phase: EncodePhase, _charset: &'static str, units: u64) {
            self.units.set(self.units.get() + units);
        }

        fn record_bytes(&self, _phase: EncodePhase, _charset: &'static str, bytes: u64) {
            self.bytes.set(self.bytes.get() + bytes);
        }

        fn record_fallbacks(&self, _phase: EncodePhase, _charset: &'static str, count: u64) {
            self.fallbacks.set(self.fallbacks.get() + count);
        }
    }

    #[test]
    fn hook_forwards_all_dimensions() {
        let sink = CountingSink {
            units: Cell::new(0),
            bytes: Cell::new(0),
            fallbacks: Cell::new(0),
        };
        let hook = EncoderMetricsHook::new(&sink);
        let descriptor = CodecDescriptor::new("utf-8");
        hook.record_call(EncodePhase::Encode, &descriptor, 9, 18, 1);
        assert_eq!(sink.units.get(), 9);
        assert_eq!(sink.bytes.get(), 18);
        assert_eq!(sink.fallbacks.get(), 1);
    }

    /// 回退次数为零时不应触碰回退计数器，避免无意义的零样本。
    #[test]
    fn zero_fallbacks_are_not_recorded() {
        let sink = CountingSink {
            units: Cell::new(0),
            bytes: Cell::new(0),
            fallbacks: Cell::new(0),
        };
        let hook = EncoderMetricsHook::new(&sink);
        let descriptor = CodecDescriptor::new("ascii");
        hook.record_call(EncodePhase::Count, &descriptor, 4, 4, 0);
        assert_eq!(sink.fallbacks.get(), 0);
        assert_eq!(sink.bytes.get(), 4);
    }

    #[test]
    fn mode_labels_are_stable() {
        assert_eq!(EncodePhase::Count.mode_label(), "count");
        assert_eq!(EncodePhase::Encode.mode_label(), "encode");
    }
}
