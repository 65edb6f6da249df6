/*
 * @Description  : 归约算子（reduce_max / reduce_mean / reduce_sum）的构建函数
 */

use super::OpBuilder;
use crate::nn::descriptor::{DEFAULT_OUTPUT_SLOT, OperatorConf, ReduceAxes, ReduceConf, TensorHandle};
use crate::nn::{Graph, GraphError};

fn reduce_conf(input: &TensorHandle, axis: ReduceAxes, keep_dims: bool) -> ReduceConf {
    ReduceConf {
        input: input.clone(),
        out: DEFAULT_OUTPUT_SLOT.to_string(),
        axis: axis.into_list(),
        keep_dims,
    }
}

/// 沿`axis`求最大值
///
/// - `axis`: 单个整数、整数列表，或 `ReduceAxes::All`（对所有轴归约）
/// - `keep_dims`: 是否把被归约的轴保留为长度1的维度
/// - `name`: 算子名，为 None 时自动生成（如 `ReduceMax_1`）
///
/// 轴越界返回 `GraphError::InvalidAxis`，名称冲突返回 `GraphError::DuplicateName`，
/// 两种情况下图都不会被修改。
pub fn reduce_max(
    graph: &Graph,
    input: &TensorHandle,
    axis: impl Into<ReduceAxes>,
    keep_dims: bool,
    name: Option<&str>,
) -> Result<TensorHandle, GraphError> {
    OpBuilder::new(graph)
        .name(name)
        .build(OperatorConf::ReduceMax(reduce_conf(input, axis.into(), keep_dims)))
}

/// 沿`axis`求均值，参数同`reduce_max`
pub fn reduce_mean(
    graph: &Graph,
    input: &TensorHandle,
    axis: impl Into<ReduceAxes>,
    keep_dims: bool,
    name: Option<&str>,
) -> Result<TensorHandle, GraphError> {
    OpBuilder::new(graph)
        .name(name)
        .build(OperatorConf::ReduceMean(reduce_conf(input, axis.into(), keep_dims)))
}

/// 沿`axis`求和，参数同`reduce_max`
pub fn reduce_sum(
    graph: &Graph,
    input: &TensorHandle,
    axis: impl Into<ReduceAxes>,
    keep_dims: bool,
    name: Option<&str>,
) -> Result<TensorHandle, GraphError> {
    OpBuilder::new(graph)
        .name(name)
        .build(OperatorConf::ReduceSum(reduce_conf(input, axis.into(), keep_dims)))
}
