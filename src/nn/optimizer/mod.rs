/*
 * @Description  : 优化器模块：LAMBW（带解耦权重衰减的 LAMB）
 *
 * - `lamb::step`: 纯函数形式的单张量更新规则
 * - `LambW`: 绑定图中变量、逐迭代调用 `lamb::step` 的有状态优化器
 */

mod config;
mod core;
mod error;
pub mod lamb;

pub use config::{LambConfig, LearningRate};
pub use core::{LambW, Optimizer};
pub use error::OptimizerError;
pub use lamb::{OptimizerState, trust_ratio};
