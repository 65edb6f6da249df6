use super::OpBuilder;
use crate::nn::descriptor::{DEFAULT_OUTPUT_SLOT, Initializer, OperatorConf, TensorHandle, VariableConf};
use crate::nn::{Graph, GraphError};

/// 创建变量。`trainable`为true的变量会被优化器自动收集。
pub fn variable(
    graph: &Graph,
    shape: &[usize],
    initializer: Initializer,
    trainable: bool,
    name: Option<&str>,
) -> Result<TensorHandle, GraphError> {
    OpBuilder::new(graph).name(name).build(OperatorConf::Variable(VariableConf {
        shape: shape.to_vec(),
        initializer,
        trainable,
        out: DEFAULT_OUTPUT_SLOT.to_string(),
    }))
}
