/*
 * @Description  : 负责计算图的构建（算子描述符、图解释器、算子构建函数）与参数优化
 */

pub mod descriptor;
mod graph;
pub mod ops;
pub mod optimizer;

pub use descriptor::{
    GraphDescriptor, Initializer, InterpretMode, OperatorConf, OperatorDescriptor, ReduceAxes,
    ReduceConf, TensorHandle, VariableConf,
};
pub use graph::{Graph, GraphError, GraphInner, OperatorNode};
pub use ops::{OpBuilder, reduce_max, reduce_mean, reduce_sum, variable};
pub use optimizer::{LambConfig, LambW, LearningRate, Optimizer, OptimizerError, OptimizerState};
