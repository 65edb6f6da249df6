//! # LAMBW Graph
//!
//! 用纯rust实现的两个协作部件：
//! - 计算图算子的构建（以`reduce_max`为代表的归约算子：组装描述符 → 提交给图 → 返回输出句柄）；
//! - LAMBW 优化器（带解耦权重衰减、逐层信任比的 LAMB），既可作为纯函数单独调用，
//!   也可绑定图中的变量逐迭代更新。
//!

pub mod errors;
pub mod nn;
pub mod tensor;
pub mod utils;
