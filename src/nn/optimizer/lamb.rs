/*
 * @Description  : LAMBW 单张量更新规则
 *
 * 对一个参数张量，给定梯度与上一步的状态 (m, v, t)：
 * - t' = t + 1
 * - m' = β1 * m + (1 - β1) * g
 * - v' = β2 * v + (1 - β2) * g²
 * - m_hat = m' / (1 - β1^t')，v_hat = v' / (1 - β2^t')
 * - r' = m_hat / (√v_hat + ε) + λ * θ
 * - θ' = θ - lr(t) * trust_ratio * r'，其中 trust_ratio = ‖θ‖ / ‖r'‖
 */

use super::{LambConfig, OptimizerError};
use crate::tensor::Tensor;

/// 单个参数跨迭代保存的状态
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizerState {
    /// 一阶矩估计
    m: Tensor,
    /// 二阶矩估计
    v: Tensor,
    /// 已完成的更新次数
    t: u64,
}

impl OptimizerState {
    /// 首次更新前的状态：m = v = 0，t = 0
    pub fn new(shape: &[usize]) -> Self {
        Self {
            m: Tensor::zeros(shape),
            v: Tensor::zeros(shape),
            t: 0,
        }
    }

    pub fn m(&self) -> &Tensor {
        &self.m
    }

    pub fn v(&self) -> &Tensor {
        &self.v
    }

    pub const fn t(&self) -> u64 {
        self.t
    }
}

/// LAMB 的层级信任比 ‖θ‖ / ‖r'‖
///
/// `update_norm`为0时取1.0；`param_norm`为0（而`update_norm`不为0）时自然得到0.0。
pub fn trust_ratio(param_norm: f32, update_norm: f32) -> f32 {
    if update_norm == 0. {
        1.
    } else {
        param_norm / update_norm
    }
}

fn check_same_shape(param: &Tensor, other: &Tensor, what: &str) -> Result<(), OptimizerError> {
    if param.is_same_shape(other) {
        Ok(())
    } else {
        Err(OptimizerError::ShapeMismatch {
            expected: param.shape().to_vec(),
            got: other.shape().to_vec(),
            message: format!("{what}与参数的形状不一致"),
        })
    }
}

/// 计算一次 LAMBW 更新，返回 (新参数, 新状态)
///
/// 这是一个纯函数：输入只借用不修改，失败时调用方手里的`state`依旧有效；
/// 相同输入总是得到逐位相同的输出。学习率取调度在`state.t`处的值。
pub fn step(
    param: &Tensor,
    grad: &Tensor,
    state: &OptimizerState,
    config: &LambConfig,
) -> Result<(Tensor, OptimizerState), OptimizerError> {
    let lr = config.learning_rate.rate_at(state.t);
    step_with_learning_rate(param, grad, state, config, lr)
}

/// 同`step`，但使用调用方给定的学习率（忽略`config.learning_rate`）
///
/// 多个参数共享同一个全局迭代计数时（见`LambW`），由调用方按该计数查调度表。
pub fn step_with_learning_rate(
    param: &Tensor,
    grad: &Tensor,
    state: &OptimizerState,
    config: &LambConfig,
    lr: f32,
) -> Result<(Tensor, OptimizerState), OptimizerError> {
    config.validate()?;
    if !(lr.is_finite() && lr >= 0.) {
        return Err(OptimizerError::InvalidHyperparameter(format!(
            "学习率须为非负有限数，实际为{lr}"
        )));
    }
    check_same_shape(param, grad, "梯度")?;
    check_same_shape(param, &state.m, "一阶矩估计")?;
    check_same_shape(param, &state.v, "二阶矩估计")?;

    let LambConfig {
        beta1,
        beta2,
        epsilon,
        weight_decay,
        ..
    } = *config;
    let t = state.t + 1;
    let exponent = i32::try_from(t).unwrap_or(i32::MAX);

    // 更新矩估计
    let m = &state.m * beta1 + grad * (1. - beta1);
    let v = &state.v * beta2 + grad.square() * (1. - beta2);

    // 偏差修正（0 < β < 1，故分母恒不为0）
    let m_hat = &m / (1. - beta1.powi(exponent));
    let v_hat = &v / (1. - beta2.powi(exponent));

    // 自适应方向 + 解耦权重衰减
    let direction = &m_hat / (v_hat.sqrt() + epsilon);
    let update = direction + param * weight_decay;

    let param_norm = param.l2_norm();
    let update_norm = update.l2_norm();
    let ratio = trust_ratio(param_norm, update_norm);
    log::trace!(
        "LAMBW 第{t}步：lr={lr}，‖θ‖={param_norm}，‖r'‖={update_norm}，trust_ratio={ratio}"
    );

    let new_param = param - &update * (lr * ratio);
    Ok((new_param, OptimizerState { m, v, t }))
}
