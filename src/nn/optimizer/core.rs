/*
 * @Description  : Optimizer trait 与绑定图中变量的 LAMBW 优化器
 */

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::lamb::{self, OptimizerState};
use super::{LambConfig, OptimizerError};
use crate::nn::descriptor::TensorHandle;
use crate::nn::graph::GraphInner;
use crate::nn::{Graph, GraphError};

/// Optimizer trait
///
/// # 使用示例
/// ```ignore
/// let mut optimizer = LambW::new(&graph, &graph.trainable_variables(), config)?;
///
/// // 训练循环：梯度由外部写入图
/// optimizer.zero_grad()?;
/// graph.set_grad(&x, &grad)?;
/// optimizer.step()?;
/// ```
pub trait Optimizer {
    /// 清零所有参数的梯度
    fn zero_grad(&mut self) -> Result<(), OptimizerError>;

    /// 更新参数（只更新 Optimizer 绑定且有梯度的参数）
    fn step(&mut self) -> Result<(), OptimizerError>;

    /// 下一次`step`将使用的学习率
    fn learning_rate(&self) -> f32;

    /// 重置累积状态（矩估计与时间步）
    fn reset(&mut self);
}

/// LAMBW 优化器
///
/// 每个参数各自维护一份 `OptimizerState`；`step()` 先为所有参数算出更新，
/// 全部成功后才写回图，任何一个参数出错都不会留下部分更新。
/// 学习率按优化器的全局`step`次数查调度表，某步没有梯度而被跳过的参数不会因此落后。
#[derive(Debug)]
pub struct LambW {
    /// 图引用
    graph: Rc<RefCell<GraphInner>>,
    /// 要优化的参数
    params: Vec<TensorHandle>,
    config: LambConfig,
    /// 各参数的状态（首次更新时按参数形状零初始化）
    states: HashMap<TensorHandle, OptimizerState>,
    /// 已执行的`step`次数
    train_step: u64,
}

impl LambW {
    /// 创建新的 LAMBW 优化器
    ///
    /// 超参数在此处校验，非法时直接失败；`params` 中每个句柄都必须是图中的变量。
    pub fn new(
        graph: &Graph,
        params: &[TensorHandle],
        config: LambConfig,
    ) -> Result<Self, OptimizerError> {
        config.validate()?;
        {
            let g = graph.inner();
            for param in params {
                g.get_value(param)?;
            }
        }
        log::debug!(
            "创建 LAMBW 优化器：{}个参数，{:?}",
            params.len(),
            config
        );
        Ok(Self {
            graph: graph.inner_rc(),
            params: params.to_vec(),
            config,
            states: HashMap::new(),
            train_step: 0,
        })
    }

    /// 优化图中当前所有可训练变量
    pub fn for_trainable_variables(
        graph: &Graph,
        config: LambConfig,
    ) -> Result<Self, OptimizerError> {
        Self::new(graph, &graph.trainable_variables(), config)
    }

    /// 获取优化器绑定的参数列表
    pub fn params(&self) -> &[TensorHandle] {
        &self.params
    }

    pub const fn config(&self) -> &LambConfig {
        &self.config
    }

    /// 获取指定参数的状态（尚未更新过则为 None）
    pub fn state(&self, param: &TensorHandle) -> Option<&OptimizerState> {
        self.states.get(param)
    }

    /// 获取已执行的`step`次数
    pub const fn timestep(&self) -> u64 {
        self.train_step
    }
}

impl Optimizer for LambW {
    fn zero_grad(&mut self) -> Result<(), OptimizerError> {
        let mut g = self.graph.borrow_mut();
        for param in &self.params {
            g.clear_grad(param)?;
        }
        Ok(())
    }

    fn step(&mut self) -> Result<(), OptimizerError> {
        // 所有参数共用全局迭代计数对应的学习率，与各自的状态步数无关
        let lr = self.learning_rate();
        let mut updates = Vec::with_capacity(self.params.len());
        {
            let g = self.graph.borrow();
            for param in &self.params {
                let Some(grad) = g.get_grad(param)? else {
                    continue;
                };
                let value = g
                    .get_value(param)?
                    .ok_or_else(|| GraphError::TensorNotFound(param.to_string()))?;
                let (new_value, new_state) = match self.states.get(param) {
                    Some(state) => {
                        lamb::step_with_learning_rate(value, grad, state, &self.config, lr)?
                    }
                    None => lamb::step_with_learning_rate(
                        value,
                        grad,
                        &OptimizerState::new(value.shape()),
                        &self.config,
                        lr,
                    )?,
                };
                updates.push((param.clone(), new_value, new_state));
            }
        }

        let mut g = self.graph.borrow_mut();
        let updated = updates.len();
        for (param, new_value, new_state) in updates {
            g.set_value(&param, &new_value)?;
            self.states.insert(param, new_state);
        }
        self.train_step += 1;
        log::debug!(
            "LAMBW 第{}次 step：lr={}，更新了{}/{}个参数",
            self.train_step,
            lr,
            updated,
            self.params.len()
        );
        Ok(())
    }

    fn learning_rate(&self) -> f32 {
        self.config.learning_rate.rate_at(self.train_step)
    }

    fn reset(&mut self) {
        self.states.clear();
        self.train_step = 0;
    }
}
