//! 编码器状态机性质验证
//!
//! # 教案级注释概览
//!
//! - **核心目标 (Why)**：用随机码元序列验证编码器的三条核心性质：
//!   1. **纯度**：`byte_count` 重复询问结果恒定，且不改变编码器状态；
//!   2. **一致律**：`byte_count` 的预测值与同参 `encode` 的实际写出量逐次相等；
//!   3. **切分不变性**：把同一序列在任意位置切成两段流式喂入（末段冲洗），
//!      总字节数与一次性冲洗喂入完全一致——跨调用的代理缝合不得丢失或重复记账。
//! - **设计手法 (Why)**：以 Proptest 生成覆盖四个区段（BMP、高代理、低代理、
//!   BMP 高段）的码元流，保证代理对、落单代理与切分点的组合被充分遍历。
//! - **测试桩 (How)**：使用与真实字符集无关的定宽桩 codec，防止性质
//!   “顺带通过”某个具体编码的巧合行为。
//!
//! # 合同与边界 (What)
//!
//! - **输入**：长度 0..64 的随机码元向量与任意切分点；
//! - **断言**：任一性质失败即给出最小反例；
//! - **前置条件**：桩 codec 的 `width_for_scalar` 与 `encode_scalar` 宽度一致。

use glyph_core::{CodecDescriptor, ScalarCodec, StreamEncoder};
use proptest::prelude::*;

/// 定宽测试桩：BMP 标量 2 字节、增补平面 4 字节、回退 2 字节。
struct PairStub {
    descriptor: CodecDescriptor,
}

impl PairStub {
    fn new() -> Self {
        Self {
            descriptor: CodecDescriptor::new("pair-stub"),
        }
    }
}

const STUB_FALLBACK: [u8; 2] = [0xAB, 0xCD];

impl ScalarCodec for PairStub {
    fn descriptor(&self) -> &CodecDescriptor {
        &self.descriptor
    }

    fn width_for_scalar(&self, scalar: char) -> usize {
        if (scalar as u32) >= 0x10000 { 4 } else { 2 }
    }

    fn fallback_width(&self) -> usize {
        STUB_FALLBACK.len()
    }

    fn fallback_bytes(&self) -> &[u8] {
        &STUB_FALLBACK
    }

    fn encode_scalar(&self, scalar: char, dst: &mut [u8]) -> usize {
        let value = scalar as u32;
        if value >= 0x10000 {
            dst[..4].copy_from_slice(&value.to_be_bytes());
            4
        } else {
            dst[..2].copy_from_slice(&(value as u16).to_be_bytes());
            2
        }
    }
}

/// 覆盖 BMP 低段、高代理、低代理与 BMP 高段的码元生成器。
fn any_unit() -> impl Strategy<Value = u16> {
    prop_oneof![
        0x0000_u16..=0xD7FF,
        0xD800_u16..=0xDBFF,
        0xDC00_u16..=0xDFFF,
        0xE000_u16..=0xFFFF,
    ]
}

fn unit_stream() -> impl Strategy<Value = Vec<u16>> {
    proptest::collection::vec(any_unit(), 0..64)
}

proptest! {
    /// 性质 1：计数是纯函数——重复询问恒定，状态不被污染。
    #[test]
    fn byte_count_is_pure(units in unit_stream(), flush in any::<bool>()) {
        let enc = StreamEncoder::new(PairStub::new());
        let len = units.len() as isize;
        let first = enc.byte_count(Some(&units), 0, len, flush).unwrap();
        let second = enc.byte_count(Some(&units), 0, len, flush).unwrap();
        prop_assert_eq!(first, second);
        prop_assert!(!enc.has_pending());
    }

    /// 性质 2：一致律——预测值等于实际写出量，在流式两段喂入下逐次成立。
    #[test]
    fn byte_count_agrees_with_encode(units in unit_stream(), split in 0usize..=64) {
        let split = split.min(units.len());
        let (head, tail) = units.split_at(split);
        let mut enc = StreamEncoder::new(PairStub::new());
        let mut dst = vec![0u8; units.len() * 4 + 8];

        let predicted_head = enc
            .byte_count(Some(head), 0, head.len() as isize, false)
            .unwrap();
        let written_head = enc
            .encode(Some(head), 0, head.len() as isize, false, &mut dst, 0)
            .unwrap();
        prop_assert_eq!(predicted_head, written_head);

        let predicted_tail = enc
            .byte_count(Some(tail), 0, tail.len() as isize, true)
            .unwrap();
        let written_tail = enc
            .encode(Some(tail), 0, tail.len() as isize, true, &mut dst, 0)
            .unwrap();
        prop_assert_eq!(predicted_tail, written_tail);
        prop_assert!(!enc.has_pending());
    }

    /// 性质 3：切分不变性——任意切分点的两段流式总量等于一次性冲洗总量。
    #[test]
    fn chunked_stream_matches_single_shot(units in unit_stream(), split in 0usize..=64) {
        let split = split.min(units.len());
        let (head, tail) = units.split_at(split);

        let whole = StreamEncoder::new(PairStub::new())
            .byte_count(Some(&units), 0, units.len() as isize, true)
            .unwrap();

        let mut streaming = StreamEncoder::new(PairStub::new());
        let mut dst = vec![0u8; units.len() * 4 + 8];
        let first = streaming
            .encode(Some(head), 0, head.len() as isize, false, &mut dst, 0)
            .unwrap();
        let second = streaming
            .encode(Some(tail), 0, tail.len() as isize, true, &mut dst, 0)
            .unwrap();

        prop_assert_eq!(whole, first + second);
    }

    /// 冲洗差额性质：冲洗与非冲洗计数的差，要么为零，要么恰为一次回退宽度，
    /// 且后者当且仅当扫描以未配对的高代理收尾。
    #[test]
    fn flush_delta_is_zero_or_one_fallback(units in unit_stream()) {
        let len = units.len() as isize;
        let enc = StreamEncoder::new(PairStub::new());
        let flushed = enc.byte_count(Some(&units), 0, len, true).unwrap();
        let deferred = enc.byte_count(Some(&units), 0, len, false).unwrap();

        // 用一次非冲洗 encode 观测扫描是否以悬挂高代理收尾。
        let mut probe = StreamEncoder::new(PairStub::new());
        let mut dst = vec![0u8; units.len() * 4 + 8];
        probe
            .encode(Some(&units), 0, len, false, &mut dst, 0)
            .unwrap();

        let expected_delta = if probe.has_pending() {
            probe.codec().fallback_width()
        } else {
            0
        };
        prop_assert_eq!(flushed - deferred, expected_delta);
    }
}
