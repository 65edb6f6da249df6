/*
 * @Description  : GraphInner 核心操作
 */

use super::super::error::GraphError;
use super::{GraphInner, OperatorNode};
use crate::nn::descriptor::{OperatorDescriptor, TensorHandle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

impl GraphInner {
    // ========== 创建 ==========

    pub fn new() -> Self {
        Self::with_name("default_graph")
    }

    /// 创建一个带固定种子的计算图（确保变量初始化可重复）
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_name_and_seed("default_graph", seed)
    }

    /// 创建一个带名称和固定种子的计算图
    pub fn with_name_and_seed(name: &str, seed: u64) -> Self {
        let mut graph = Self::with_name(name);
        graph.rng = Some(StdRng::seed_from_u64(seed));
        graph
    }

    pub fn with_name(name: &str) -> Self {
        Self {
            name: name.to_string(),
            nodes: HashMap::new(),
            order: Vec::new(),
            values: HashMap::new(),
            grads: HashMap::new(),
            rng: None,
        }
    }

    /// 设置随机种子（影响之后创建的变量）
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = Some(StdRng::seed_from_u64(seed));
    }

    /// 清空图中所有算子、变量值与梯度，名称与随机数状态保留
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.order.clear();
        self.values.clear();
        self.grads.clear();
    }

    // ========== 基础访问器 ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 按注册顺序返回所有算子名
    pub fn operator_names(&self) -> &[String] {
        &self.order
    }

    pub fn operators_count(&self) -> usize {
        self.order.len()
    }

    pub fn contains(&self, op_name: &str) -> bool {
        self.nodes.contains_key(op_name)
    }

    pub fn get_operator(&self, op_name: &str) -> Result<&OperatorNode, GraphError> {
        self.nodes
            .get(op_name)
            .ok_or_else(|| GraphError::TensorNotFound(op_name.to_string()))
    }

    pub fn get_descriptor(&self, op_name: &str) -> Result<&OperatorDescriptor, GraphError> {
        Ok(&self.get_operator(op_name)?.descriptor)
    }

    /// 解析句柄：算子必须存在，且槽名必须是该算子声明的输出槽
    pub(in crate::nn::graph) fn resolve(
        &self,
        handle: &TensorHandle,
    ) -> Result<&OperatorNode, GraphError> {
        match self.nodes.get(handle.op_name()) {
            Some(node) if node.descriptor.conf().output_slot() == handle.slot() => Ok(node),
            _ => Err(GraphError::TensorNotFound(handle.to_string())),
        }
    }

    /// 句柄所指张量的静态形状
    pub fn shape_of(&self, handle: &TensorHandle) -> Result<Vec<usize>, GraphError> {
        Ok(self.resolve(handle)?.output_shape.clone())
    }

    // ========== 名称 ==========

    pub(in crate::nn::graph) fn check_duplicate_name(&self, name: &str) -> Result<(), GraphError> {
        if self.nodes.contains_key(name) {
            return Err(GraphError::DuplicateName(name.to_string()));
        }
        Ok(())
    }

    /// 生成图内唯一的算子名：`{prefix}_{counter}`，counter 从1开始
    pub fn unique_name(&self, prefix: &str) -> String {
        let mut counter = 1;
        loop {
            let name = format!("{prefix}_{counter}");
            if self.check_duplicate_name(&name).is_ok() {
                return name;
            }
            counter += 1;
        }
    }
}
