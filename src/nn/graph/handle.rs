/*
 * @Description  : Graph 句柄（用户级 API）
 */

use super::error::GraphError;
use super::inner::GraphInner;
use crate::nn::descriptor::{GraphDescriptor, InterpretMode, OperatorDescriptor, TensorHandle};
use crate::tensor::Tensor;
use std::cell::RefCell;
use std::rc::Rc;

/// Graph - 计算图句柄
///
/// # 设计原则
/// - 是 `Rc<RefCell<GraphInner>>` 的薄封装
/// - Clone 语义：多个 Graph 引用同一个 GraphInner
/// - 显式的会话对象：`new` 创建 → 构建/训练 → `clear` 清理，不存在全局默认图
#[derive(Clone, Default)]
pub struct Graph {
    inner: Rc<RefCell<GraphInner>>,
}

impl Graph {
    // ==================== 创建 ====================

    /// 创建新图
    pub fn new() -> Self {
        Self::from_inner(GraphInner::new())
    }

    /// 创建带种子的图（用于确定性的变量初始化）
    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_inner(GraphInner::new_with_seed(seed))
    }

    /// 创建带名称的图
    pub fn with_name(name: &str) -> Self {
        Self::from_inner(GraphInner::with_name(name))
    }

    /// 从现有 GraphInner 创建句柄
    pub fn from_inner(inner: GraphInner) -> Self {
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// 获取内部 GraphInner 的不可变引用
    pub fn inner(&self) -> std::cell::Ref<'_, GraphInner> {
        self.inner.borrow()
    }

    /// 获取内部 GraphInner 的可变引用
    pub fn inner_mut(&self) -> std::cell::RefMut<'_, GraphInner> {
        self.inner.borrow_mut()
    }

    /// 获取内部 Rc
    pub(crate) fn inner_rc(&self) -> Rc<RefCell<GraphInner>> {
        Rc::clone(&self.inner)
    }

    // ==================== 构建 ====================

    /// 生成图内唯一的算子名
    pub fn unique_name(&self, prefix: &str) -> String {
        self.inner.borrow().unique_name(prefix)
    }

    /// 提交算子描述符
    pub fn submit(
        &self,
        descriptor: OperatorDescriptor,
        mode: InterpretMode,
    ) -> Result<TensorHandle, GraphError> {
        self.inner.borrow_mut().submit(descriptor, mode)
    }

    pub fn shape_of(&self, handle: &TensorHandle) -> Result<Vec<usize>, GraphError> {
        self.inner.borrow().shape_of(handle)
    }

    pub fn get_descriptor(&self, op_name: &str) -> Result<OperatorDescriptor, GraphError> {
        self.inner.borrow().get_descriptor(op_name).cloned()
    }

    pub fn operators_count(&self) -> usize {
        self.inner.borrow().operators_count()
    }

    // ==================== 求值 ====================

    pub fn eval(&self, handle: &TensorHandle) -> Result<Tensor, GraphError> {
        self.inner.borrow().eval(handle)
    }

    // ==================== 变量 ====================

    pub fn value(&self, handle: &TensorHandle) -> Result<Option<Tensor>, GraphError> {
        Ok(self.inner.borrow().get_value(handle)?.cloned())
    }

    pub fn set_value(&self, handle: &TensorHandle, value: &Tensor) -> Result<(), GraphError> {
        self.inner.borrow_mut().set_value(handle, value)
    }

    pub fn grad(&self, handle: &TensorHandle) -> Result<Option<Tensor>, GraphError> {
        Ok(self.inner.borrow().get_grad(handle)?.cloned())
    }

    pub fn set_grad(&self, handle: &TensorHandle, grad: &Tensor) -> Result<(), GraphError> {
        self.inner.borrow_mut().set_grad(handle, grad)
    }

    pub fn clear_grad(&self, handle: &TensorHandle) -> Result<(), GraphError> {
        self.inner.borrow_mut().clear_grad(handle)
    }

    pub fn trainable_variables(&self) -> Vec<TensorHandle> {
        self.inner.borrow().trainable_variables()
    }

    // ==================== 描述/清理 ====================

    pub fn describe(&self) -> GraphDescriptor {
        self.inner.borrow().describe()
    }

    /// 清空图（相当于结束一次会话），之后可重新构建
    pub fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}
