/*
 * @Description  : GraphInner describe 相关方法
 */

use super::GraphInner;
use crate::nn::descriptor::{GraphDescriptor, RegisteredOperator};

impl GraphInner {
    /// 导出图的描述符（用于序列化、调试）
    ///
    /// # 示例
    /// ```ignore
    /// let descriptor = graph.describe();
    /// log::debug!("{}", descriptor.to_json()?);
    /// ```
    pub fn describe(&self) -> GraphDescriptor {
        let mut descriptor = GraphDescriptor::new(&self.name);
        descriptor.operators = self
            .order
            .iter()
            .filter_map(|name| self.nodes.get(name))
            .map(|node| RegisteredOperator {
                descriptor: node.descriptor.clone(),
                mode: node.mode,
                output_shape: node.output_shape.clone(),
            })
            .collect();
        descriptor
    }
}
