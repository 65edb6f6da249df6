/*
 * @Description  : GraphInner 求值：按句柄递归计算张量值
 */

use super::super::error::GraphError;
use super::GraphInner;
use super::interpret::resolve_axes;
use crate::nn::descriptor::{OperatorConf, TensorHandle};
use crate::tensor::Tensor;

impl GraphInner {
    /// 计算句柄所指张量的当前值
    ///
    /// 变量直接返回其当前值；归约算子先求输入，再沿描述符中的轴归约。
    pub fn eval(&self, handle: &TensorHandle) -> Result<Tensor, GraphError> {
        let node = self.resolve(handle)?;
        let op_name = node.descriptor.name();
        match node.descriptor.conf() {
            OperatorConf::Variable(_) => self
                .values
                .get(op_name)
                .cloned()
                .ok_or_else(|| GraphError::TensorNotFound(handle.to_string())),
            OperatorConf::ReduceMax(conf) => {
                let input = self.eval(&conf.input)?;
                let axes = resolve_axes(op_name, &conf.axis, input.dimension())?;
                Ok(input.reduce_max(&axes, conf.keep_dims))
            }
            OperatorConf::ReduceMean(conf) => {
                let input = self.eval(&conf.input)?;
                let axes = resolve_axes(op_name, &conf.axis, input.dimension())?;
                Ok(input.reduce_mean(&axes, conf.keep_dims))
            }
            OperatorConf::ReduceSum(conf) => {
                let input = self.eval(&conf.input)?;
                let axes = resolve_axes(op_name, &conf.axis, input.dimension())?;
                Ok(input.reduce_sum(&axes, conf.keep_dims))
            }
        }
    }
}
