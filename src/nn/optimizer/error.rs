use crate::nn::GraphError;
use thiserror::Error;

/// 优化器错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OptimizerError {
    /// 梯度（或矩估计）与参数形状不一致：不做广播，直接中止本次更新
    #[error("形状不一致（{message}）：预期{expected:?}，实际为{got:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
        message: String,
    },
    /// 超参数非法：在任何一次迭代之前就应当失败
    #[error("超参数非法：{0}")]
    InvalidHyperparameter(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
