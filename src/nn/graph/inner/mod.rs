/*
 * @Description  : GraphInner 计算图的底层实现（图解释器）
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 创建、基础访问器、唯一名生成
 * - interpret.rs: 算子提交（查重、轴校验、形状推断）
 * - variable.rs: 变量的值与梯度
 * - eval.rs: 按句柄求值
 * - describe.rs: describe
 */

mod core;
mod describe;
mod eval;
mod interpret;
mod variable;

use crate::nn::descriptor::{InterpretMode, OperatorDescriptor};
use crate::tensor::Tensor;
use rand::rngs::StdRng;
use std::collections::HashMap;

/// 已注册到图中的算子
#[derive(Debug, Clone)]
pub struct OperatorNode {
    pub(in crate::nn::graph) descriptor: OperatorDescriptor,
    pub(in crate::nn::graph) mode: InterpretMode,
    /// 提交时推断出的输出形状
    pub(in crate::nn::graph) output_shape: Vec<usize>,
}

impl OperatorNode {
    pub fn descriptor(&self) -> &OperatorDescriptor {
        &self.descriptor
    }

    pub const fn mode(&self) -> InterpretMode {
        self.mode
    }

    pub fn output_shape(&self) -> &[usize] {
        &self.output_shape
    }
}

/// 图的完整定义（核心实现）
///
/// 用户通常通过 `Graph` 句柄使用此结构。
/// 算子一旦注册便归图所有，描述符不再修改。
#[derive(Debug)]
pub struct GraphInner {
    pub(in crate::nn::graph) name: String,
    pub(in crate::nn::graph) nodes: HashMap<String, OperatorNode>,
    /// 注册顺序
    pub(in crate::nn::graph) order: Vec<String>,
    /// 变量的当前值（按算子名索引）
    pub(in crate::nn::graph) values: HashMap<String, Tensor>,
    /// 变量的梯度（由外部训练循环写入）
    pub(in crate::nn::graph) grads: HashMap<String, Tensor>,
    /// 图级别的随机数生成器（用于变量初始化）
    /// None 表示使用默认的 thread_rng（非确定性）
    pub(in crate::nn::graph) rng: Option<StdRng>,
}

impl Default for GraphInner {
    fn default() -> Self {
        Self::new()
    }
}
