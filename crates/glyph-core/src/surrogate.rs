//! UTF-16 代理区间的常量与组合运算。
//!
//! ## 模块目的（Why）
//! - 将代理对（surrogate pair）的区间判定与标量组合集中为 `const fn`，
//!   供状态机与各字符集实现共享，避免魔法数散落各处。
//!
//! ## 契约说明（What）
//! - 高代理：`0xD800..=0xDBFF`；低代理：`0xDC00..=0xDFFF`；
//! - [`combine`] 仅在“高代理 + 低代理”前提下有意义，产出 `0x10000..=0x10FFFF`
//!   的增补平面标量。

/// 高代理区间起点。
pub const HIGH_SURROGATE_START: u16 = 0xD800;
/// 高代理区间终点（含）。
pub const HIGH_SURROGATE_END: u16 = 0xDBFF;
/// 低代理区间起点。
pub const LOW_SURROGATE_START: u16 = 0xDC00;
/// 低代理区间终点（含）。
pub const LOW_SURROGATE_END: u16 = 0xDFFF;

/// 判断码元是否落在高代理区间。
#[inline]
pub const fn is_high_surrogate(unit: u16) -> bool {
    unit >= HIGH_SURROGATE_START && unit <= HIGH_SURROGATE_END
}

/// 判断码元是否落在低代理区间。
#[inline]
pub const fn is_low_surrogate(unit: u16) -> bool {
    unit >= LOW_SURROGATE_START && unit <= LOW_SURROGATE_END
}

/// 判断码元是否为任一代理（单独出现时不构成合法标量）。
#[inline]
pub const fn is_surrogate(unit: u16) -> bool {
    is_high_surrogate(unit) || is_low_surrogate(unit)
}

/// 将一对高/低代理组合为增补平面标量值。
///
/// # 调用契约（What）
/// - **前置条件**：`high` 落在高代理区间、`low` 落在低代理区间；
/// - **返回值**：`0x10000..=0x10FFFF` 范围内的 Unicode 标量值；
/// - 违反前置条件时结果无意义，调用方必须先用区间判定过滤。
#[inline]
pub const fn combine(high: u16, low: u16) -> u32 {
    0x10000 + (((high as u32 - HIGH_SURROGATE_START as u32) << 10)
        | (low as u32 - LOW_SURROGATE_START as u32))
}
