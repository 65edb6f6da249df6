use crate::nn::descriptor::{InterpretMode, OperatorConf, OperatorDescriptor, TensorHandle};
use crate::nn::{Graph, GraphError};

/// 通用算子构建器
///
/// # 使用示例
/// ```ignore
/// let out = OpBuilder::new(&graph)
///     .name(Some("max_1"))
///     .build(OperatorConf::ReduceMax(conf))?;
/// ```
pub struct OpBuilder<'g> {
    graph: &'g Graph,
    name: Option<String>,
    mode: InterpretMode,
}

impl<'g> OpBuilder<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            name: None,
            mode: InterpretMode::Forward,
        }
    }

    /// 指定算子名；为 None 时由图按算子类型生成唯一名
    pub fn name(mut self, name: Option<&str>) -> Self {
        self.name = name.map(str::to_string);
        self
    }

    pub fn mode(mut self, mode: InterpretMode) -> Self {
        self.mode = mode;
        self
    }

    /// 组装描述符并提交，返回描述符声明的输出槽的句柄
    pub fn build(self, conf: OperatorConf) -> Result<TensorHandle, GraphError> {
        let name = match self.name {
            Some(name) => name,
            None => self.graph.unique_name(conf.kind_name()),
        };
        let descriptor = OperatorDescriptor::new(&name, conf);
        self.graph.submit(descriptor, self.mode)
    }
}
