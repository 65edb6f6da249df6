/*
 * @Description  : GraphInner 算子提交：查重 → 输入解析 → 轴校验/形状推断 → 注册
 *                 任何一步失败都不会留下部分注册的算子
 */

use super::super::error::GraphError;
use super::{GraphInner, OperatorNode};
use crate::nn::descriptor::{
    Initializer, InterpretMode, OperatorConf, OperatorDescriptor, ReduceConf, TensorHandle,
    VariableConf,
};
use crate::tensor::Tensor;

impl GraphInner {
    /// 将算子描述符注册进图，返回其输出句柄
    pub fn submit(
        &mut self,
        descriptor: OperatorDescriptor,
        mode: InterpretMode,
    ) -> Result<TensorHandle, GraphError> {
        let name = descriptor.name().to_string();
        if name.is_empty() {
            return Err(GraphError::InvalidOperation("算子名不能为空".to_string()));
        }
        self.check_duplicate_name(&name)?;

        let (output_shape, initial_value) = match descriptor.conf() {
            OperatorConf::ReduceMax(conf)
            | OperatorConf::ReduceMean(conf)
            | OperatorConf::ReduceSum(conf) => (self.infer_reduce_shape(&name, conf)?, None),
            OperatorConf::Variable(conf) => {
                let value = self.initial_value(conf)?;
                (conf.shape.clone(), Some(value))
            }
        };

        log::debug!(
            "图{}注册算子{}（{}，{:?}），输出形状{:?}",
            self.name,
            name,
            descriptor.conf().kind_name(),
            mode,
            output_shape
        );

        let handle = descriptor.output();
        if let Some(value) = initial_value {
            self.values.insert(name.clone(), value);
        }
        self.nodes.insert(
            name.clone(),
            OperatorNode {
                descriptor,
                mode,
                output_shape,
            },
        );
        self.order.push(name);
        Ok(handle)
    }

    fn infer_reduce_shape(&self, op_name: &str, conf: &ReduceConf) -> Result<Vec<usize>, GraphError> {
        let input_shape = self.shape_of(&conf.input)?;
        let axes = resolve_axes(op_name, &conf.axis, input_shape.len())?;
        let output_shape = input_shape
            .iter()
            .enumerate()
            .filter_map(|(i, &dim)| match (axes.contains(&i), conf.keep_dims) {
                (false, _) => Some(dim),
                (true, true) => Some(1),
                (true, false) => None,
            })
            .collect();
        Ok(output_shape)
    }

    fn initial_value(&mut self, conf: &VariableConf) -> Result<Tensor, GraphError> {
        let value = match conf.initializer {
            Initializer::Zeros => Tensor::zeros(&conf.shape),
            Initializer::Constant { value } => Tensor::full(value, &conf.shape),
            Initializer::RandomUniform { min, max } => {
                if !(min <= max) || !min.is_finite() || !max.is_finite() {
                    return Err(GraphError::InvalidOperation(format!(
                        "均匀分布初始化的区间非法：[{min}, {max}]"
                    )));
                }
                match self.rng.as_mut() {
                    Some(rng) => Tensor::new_random_with_rng(min, max, &conf.shape, rng),
                    None => Tensor::new_random(min, max, &conf.shape),
                }
            }
        };
        Ok(value)
    }
}

/// 将描述符中的轴列表解析为`[0, rank)`内的下标（保持原有顺序）。
/// 空列表代表全部轴；负数轴从末尾计数；越界或重复都视为非法。
pub(crate) fn resolve_axes(op_name: &str, axes: &[i32], rank: usize) -> Result<Vec<usize>, GraphError> {
    if axes.is_empty() {
        return Ok((0..rank).collect());
    }
    let invalid = |axis: i32| GraphError::InvalidAxis {
        op_name: op_name.to_string(),
        axis,
        rank,
    };
    let signed_rank = i64::try_from(rank).map_err(|_| invalid(axes[0]))?;
    let mut resolved = Vec::with_capacity(axes.len());
    for &axis in axes {
        let normalized = if axis < 0 {
            i64::from(axis) + signed_rank
        } else {
            i64::from(axis)
        };
        if !(0..signed_rank).contains(&normalized) {
            return Err(invalid(axis));
        }
        let normalized = normalized as usize;
        if resolved.contains(&normalized) {
            return Err(invalid(axis));
        }
        resolved.push(normalized);
    }
    Ok(resolved)
}
