//! 代价类型
//!
//! 最短路径算法对代价类型的要求：可比较、可相加、有零值，
//! 并且有一个大于任何可行路径代价的"无穷大"哨兵值

use std::fmt::Debug;
use std::ops::Add;

/// 边权与路径代价的数值类型
///
/// 整数类型以 `MAX` 作为无穷大，浮点类型使用 `INFINITY`。
/// 调用方在一次计算中固定使用同一种代价类型。
pub trait Cost: Copy + PartialOrd + Add<Output = Self> + Debug + Send + Sync + 'static {
    /// 起点的代价
    const ZERO: Self;
    /// 尚未到达的节点的代价
    const INFINITY: Self;

    /// 是否为有限代价（即节点已可达）
    fn is_finite_cost(self) -> bool {
        self != Self::INFINITY
    }

    /// 是否为负值
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }
}

macro_rules! impl_integer_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0;
                const INFINITY: Self = <$t>::MAX;
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                const ZERO: Self = 0.0;
                const INFINITY: Self = <$t>::INFINITY;
            }
        )*
    };
}

impl_integer_cost!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_cost!(f32, f64);
