/*
 * @Description  : 算子构建函数
 *
 * 所有算子绑定都遵循同一流程：组装描述符 → 提交给图 → 把声明的输出槽包装成句柄，
 * 该流程由 `OpBuilder` 统一实现，各算子只负责给出自己的类型化配置。
 */

mod builder;
mod reduce;
mod variable;

pub use builder::OpBuilder;
pub use reduce::{reduce_max, reduce_mean, reduce_sum};
pub use variable::variable;
