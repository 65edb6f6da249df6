/*
 * @Description  : Graph 模块的错误类型
 */

use thiserror::Error;

/// Graph 操作错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum GraphError {
    #[error("找不到张量：{0}")]
    TensorNotFound(String),
    #[error("算子名重复：{0}")]
    DuplicateName(String),
    #[error(
        "算子{op_name}的归约轴{axis}非法：输入张量的阶数为{rank}，轴须在[-{rank}, {rank})范围内且不可重复"
    )]
    InvalidAxis {
        op_name: String,
        axis: i32,
        rank: usize,
    },
    #[error("形状不一致（{message}）：预期{expected:?}，实际为{got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    #[error("非法操作：{0}")]
    InvalidOperation(String),
}
