//! 有状态编码器：跨调用代理缝合、干跑计数与提交式写出。
//!
//! ## 模块目的（Why）
//! - UTF-16 输入可能在任意位置被切开，代理对的前半截会落在上一次调用的末尾。
//!   本模块以显式两态状态机（[`PendingUnit`]）承载这份跨调用状态，
//!   并保证“计数”与“编码”两条路径对状态迁移的求值完全一致。
//! - 计数路径必须是纯函数：调用方会在分配缓冲前反复询问同一参数，
//!   任何状态副作用都会让第二次询问失真。
//!
//! ## 实现策略（How）
//! - 单一扫描例程 [`scan`] 负责全部迁移判定，向外只发射两类事件：
//!   “完整标量”与“回退替换”。计数路径把事件折算成宽度累加；
//!   编码路径先用同一例程干跑预算输出空间，再二次扫描提交字节与状态。
//! - 参数校验先于一切扫描；被拒绝的调用不触碰状态、不触碰输出缓冲。

use crate::codec::ScalarCodec;
use crate::error::EncodeError;
use crate::surrogate;

/// 编码器的跨调用状态：空闲，或悬挂一个等待低代理的高代理码元。
///
/// # 契约说明（What）
/// - 初始为 [`Idle`](PendingUnit::Idle)；
/// - 仅当一次非冲洗调用以落单高代理收尾时进入
///   [`HighSurrogate`](PendingUnit::HighSurrogate)；
/// - 任何冲洗调用、或悬挂代理被后续输入消解（成对或回退）后回到 `Idle`；
/// - 无终止态，实例可无限复用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingUnit {
    /// 无悬挂状态。
    #[default]
    Idle,
    /// 上一次非冲洗调用遗留的高代理码元。
    HighSurrogate(u16),
}

/// 扫描例程发射的事件：一个完整标量，或一次回退替换。
#[derive(Debug, Clone, Copy)]
enum Emitted {
    Scalar(char),
    Fallback,
}

/// 对选定区间执行一次完整的状态机求值。
///
/// # 行为逻辑（How）
/// 1. 若存在悬挂高代理，概念上把它前置到区间首个码元之前：后继是低代理则缝合为
///    增补平面标量，否则对陈旧的悬挂码元发射回退，再正常处理当前码元；
/// 2. 区间内的高代理一律先悬挂，等待下一个码元揭晓成对与否；
/// 3. 无前导高代理的低代理立即回退；其余码元即为合法 BMP 标量；
/// 4. 区间耗尽后若仍有悬挂高代理：`flush` 为真则发射回退并清空，
///    为假则把悬挂状态作为返回值交由调用方决定提交与否。
///
/// # 契约说明（What）
/// - 本函数不触碰编码器字段，纯粹以值语义计算“下一个状态”，
///   计数路径直接丢弃返回值即可获得干跑效果。
fn scan<C: ScalarCodec>(
    codec: &C,
    pending: PendingUnit,
    units: &[u16],
    flush: bool,
    mut emit: impl FnMut(&C, Emitted),
) -> PendingUnit {
    let mut held = match pending {
        PendingUnit::HighSurrogate(high) => Some(high),
        PendingUnit::Idle => None,
    };

    for &unit in units {
        if let Some(high) = held.take() {
            if surrogate::is_low_surrogate(unit) {
                match char::from_u32(surrogate::combine(high, unit)) {
                    Some(scalar) => emit(codec, Emitted::Scalar(scalar)),
                    None => emit(codec, Emitted::Fallback),
                }
                continue;
            }
            // 悬挂的高代理等不到低代理，按不完整序列回退。
            emit(codec, Emitted::Fallback);
        }

        if surrogate::is_high_surrogate(unit) {
            held = Some(unit);
        } else if surrogate::is_low_surrogate(unit) {
            emit(codec, Emitted::Fallback);
        } else {
            match char::from_u32(unit as u32) {
                Some(scalar) => emit(codec, Emitted::Scalar(scalar)),
                None => emit(codec, Emitted::Fallback),
            }
        }
    }

    if flush {
        if held.take().is_some() {
            emit(codec, Emitted::Fallback);
        }
        return PendingUnit::Idle;
    }

    match held {
        Some(high) => PendingUnit::HighSurrogate(high),
        None => PendingUnit::Idle,
    }
}

/// 把事件折算为该 codec 下的字节宽度。
#[inline]
fn width_of<C: ScalarCodec>(codec: &C, emitted: Emitted) -> usize {
    match emitted {
        Emitted::Scalar(scalar) => codec.width_for_scalar(scalar),
        Emitted::Fallback => codec.fallback_width(),
    }
}

/// 有状态编码器，实现“先计数、后编码”的两阶段转码协议。
///
/// # 设计初衷（Why）
/// - 把跨调用状态收敛为唯一字段，令 `byte_count` 的纯度与 `encode` 的提交语义
///   共用同一迁移例程，预测值与实际写出量在构造层面恒等。
///
/// # 交互契约（What）
/// - **输入**：`Option` 包裹的码元切片与 `[index, index+count)` 子区间；
///   `index`/`count` 取带符号整数以保留“负值即拒绝”的调用契约。
/// - **前置条件**：同一实例上的调用串行执行——`encode`/`reset` 的 `&mut self`
///   已在类型层面强制，多个实例间完全独立。
/// - **后置条件**：校验失败的调用返回 [`EncodeError`] 且不产生任何副作用；
///   落单代理不报错，按 codec 回退序列记账。
///
/// # 风险提示（Trade-offs）
/// - `encode` 为保证原子性会对区间扫描两次（预算 + 提交）；对于线性扫描的
///   短调用，这比“边写边检查容量、失败时回滚”的方案更简单也更可审计。
#[derive(Debug)]
pub struct StreamEncoder<C: ScalarCodec> {
    codec: C,
    pending: PendingUnit,
}

impl<C: ScalarCodec> StreamEncoder<C> {
    /// 以给定字符集策略构造编码器，初始状态为空闲。
    #[must_use]
    pub const fn new(codec: C) -> Self {
        Self {
            codec,
            pending: PendingUnit::Idle,
        }
    }

    /// 返回绑定的字符集策略。
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// 当前是否悬挂着等待配对的高代理。
    pub fn has_pending(&self) -> bool {
        matches!(self.pending, PendingUnit::HighSurrogate(_))
    }

    /// 无条件清空跨调用状态，使实例回到刚构造时的空闲态。
    pub fn reset(&mut self) {
        self.pending = PendingUnit::Idle;
    }

    /// 计算 `encode` 对相同参数将写出的字节数，不产生输出、不改变状态。
    ///
    /// # 行为逻辑（How）
    /// 1. 校验序列存在且 `[index, index+count)` 是合法区间；
    /// 2. 空区间直接返回 0——零长度请求不触发冲洗记账，也不消解既有悬挂状态；
    /// 3. 以当前悬挂状态干跑扫描例程，把事件折算成宽度累加。
    ///
    /// # 调用契约（What）
    /// - **纯度**：对相同参数与相同编码器状态，重复调用返回相同结果；
    /// - **一致性**：返回值恒等于紧随其后的同参 `encode` 写出的字节数。
    pub fn byte_count(
        &self,
        chars: Option<&[u16]>,
        index: isize,
        count: isize,
        flush: bool,
    ) -> crate::Result<usize> {
        let range = checked_range(chars, index, count)?;
        if range.is_empty() {
            return Ok(0);
        }

        let mut total = 0usize;
        scan(&self.codec, self.pending, range, flush, |codec, emitted| {
            total += width_of(codec, emitted);
        });
        Ok(total)
    }

    /// 将选定区间编码进 `dst[dst_index..]`，返回写出的字节数并提交状态迁移。
    ///
    /// # 行为逻辑（How）
    /// 1. 与 `byte_count` 共享全部参数校验，另要求 `dst_index` 不越过缓冲末尾；
    /// 2. 先干跑预算所需字节数，剩余空间不足时在写出任何字节之前失败；
    /// 3. 二次扫描提交：标量经 codec 写出，回退直接拷贝替换序列；
    /// 4. 仅在写出完成后提交悬挂状态——非冲洗调用的尾部落单高代理
    ///    转入 [`PendingUnit::HighSurrogate`]，其余路径回到空闲。
    ///
    /// # 调用契约（What）
    /// - **原子性**：任何错误返回都保证状态与输出缓冲保持调用前的原样；
    /// - **返回值**：实际写出的字节数，恒等于同参 `byte_count` 的返回值。
    pub fn encode(
        &mut self,
        chars: Option<&[u16]>,
        index: isize,
        count: isize,
        flush: bool,
        dst: &mut [u8],
        dst_index: usize,
    ) -> crate::Result<usize> {
        let range = checked_range(chars, index, count)?;
        if dst_index > dst.len() {
            return Err(EncodeError::OutOfRange);
        }
        if range.is_empty() {
            return Ok(0);
        }

        let mut required = 0usize;
        let next = scan(&self.codec, self.pending, range, flush, |codec, emitted| {
            required += width_of(codec, emitted);
        });
        if dst.len() - dst_index < required {
            return Err(EncodeError::BufferTooSmall);
        }

        let mut cursor = dst_index;
        scan(&self.codec, self.pending, range, flush, |codec, emitted| {
            match emitted {
                Emitted::Scalar(scalar) => {
                    cursor += codec.encode_scalar(scalar, &mut dst[cursor..]);
                }
                Emitted::Fallback => {
                    let fallback = codec.fallback_bytes();
                    dst[cursor..cursor + fallback.len()].copy_from_slice(fallback);
                    cursor += fallback.len();
                }
            }
        });

        self.pending = next;
        Ok(cursor - dst_index)
    }
}

/// 校验并切出 `[index, index+count)` 区间。
///
/// # 契约说明（What）
/// - 序列缺失 → [`EncodeError::NullInput`]；
/// - `index < 0`、`count < 0`、`index + count` 溢出或越过序列末尾
///   → [`EncodeError::OutOfRange`]；
/// - 校验通过后返回借用原序列的子切片，调用方免于再做边界运算。
fn checked_range(chars: Option<&[u16]>, index: isize, count: isize) -> crate::Result<&[u16]> {
    let chars = chars.ok_or(EncodeError::NullInput)?;
    if index < 0 || count < 0 {
        return Err(EncodeError::OutOfRange);
    }
    let end = index
        .checked_add(count)
        .ok_or(EncodeError::OutOfRange)?;
    if end as usize > chars.len() {
        return Err(EncodeError::OutOfRange);
    }
    Ok(&chars[index as usize..end as usize])
}
