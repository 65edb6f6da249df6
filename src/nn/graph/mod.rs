/*
 * @Description  : Graph 模块：算子注册、形状推断与求值
 *
 * 公开 API：
 * - `Graph`: 用户级句柄（显式的会话对象，不存在全局默认图）
 * - `GraphInner`: 底层实现
 * - `GraphError`: 错误类型
 */

mod error;
mod handle;
mod inner;

pub use error::GraphError;
pub use handle::Graph;
pub use inner::{GraphInner, OperatorNode};
