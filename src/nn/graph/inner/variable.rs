/*
 * @Description  : GraphInner 变量的值与梯度
 *                 梯度由外部训练循环（或自动微分）写入，本图只负责存放
 */

use super::super::error::GraphError;
use super::GraphInner;
use crate::nn::descriptor::{OperatorConf, TensorHandle, VariableConf};
use crate::tensor::Tensor;

impl GraphInner {
    fn get_variable_conf(&self, handle: &TensorHandle) -> Result<&VariableConf, GraphError> {
        match self.resolve(handle)?.descriptor.conf() {
            OperatorConf::Variable(conf) => Ok(conf),
            _ => Err(GraphError::InvalidOperation(format!(
                "{handle}不是变量，不能读写其值或梯度"
            ))),
        }
    }

    fn check_variable_shape(
        &self,
        handle: &TensorHandle,
        tensor: &Tensor,
        what: &str,
    ) -> Result<(), GraphError> {
        let conf = self.get_variable_conf(handle)?;
        if conf.shape.as_slice() != tensor.shape() {
            return Err(GraphError::ShapeMismatch {
                expected: conf.shape.clone(),
                got: tensor.shape().to_vec(),
                message: format!("{handle}的{what}"),
            });
        }
        Ok(())
    }

    pub fn get_value(&self, handle: &TensorHandle) -> Result<Option<&Tensor>, GraphError> {
        self.get_variable_conf(handle)?;
        Ok(self.values.get(handle.op_name()))
    }

    pub fn set_value(&mut self, handle: &TensorHandle, value: &Tensor) -> Result<(), GraphError> {
        self.check_variable_shape(handle, value, "值")?;
        self.values
            .insert(handle.op_name().to_string(), value.clone());
        Ok(())
    }

    pub fn get_grad(&self, handle: &TensorHandle) -> Result<Option<&Tensor>, GraphError> {
        self.get_variable_conf(handle)?;
        Ok(self.grads.get(handle.op_name()))
    }

    pub fn set_grad(&mut self, handle: &TensorHandle, grad: &Tensor) -> Result<(), GraphError> {
        self.check_variable_shape(handle, grad, "梯度")?;
        self.grads.insert(handle.op_name().to_string(), grad.clone());
        Ok(())
    }

    pub fn clear_grad(&mut self, handle: &TensorHandle) -> Result<(), GraphError> {
        self.get_variable_conf(handle)?;
        self.grads.remove(handle.op_name());
        Ok(())
    }

    /// 按注册顺序返回所有可训练变量
    pub fn trainable_variables(&self) -> Vec<TensorHandle> {
        self.order
            .iter()
            .filter_map(|name| self.nodes.get(name))
            .filter(|node| {
                matches!(node.descriptor.conf(), OperatorConf::Variable(conf) if conf.trainable)
            })
            .map(|node| node.descriptor.output())
            .collect()
    }
}
