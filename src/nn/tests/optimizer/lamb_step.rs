/*
 * @Description  : 单张量 LAMBW 更新规则
 */

use approx::assert_abs_diff_eq;

use crate::assert_err;
use crate::nn::optimizer::lamb;
use crate::nn::optimizer::{LambConfig, LearningRate, OptimizerError, OptimizerState, trust_ratio};
use crate::tensor::Tensor;

fn assert_tensor_close(actual: &Tensor, expected: &[f32]) {
    let actual = actual.to_vec();
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_abs_diff_eq!(*a, *e, epsilon = 1e-4);
    }
}

#[test]
fn test_trust_ratio() {
    assert_eq!(trust_ratio(4., 2.), 2.);
    assert_eq!(trust_ratio(3., 0.), 1.);
    assert_eq!(trust_ratio(0., 0.), 1.);
    assert_eq!(trust_ratio(0., 2.), 0.);
}

#[test]
fn test_single_step_value() -> Result<(), OptimizerError> {
    let param = Tensor::new(&[1., 2.], &[2]);
    let grad = Tensor::new(&[0.1, -0.2], &[2]);
    let config = LambConfig::new(0.1);

    let (new_param, state) = lamb::step(&param, &grad, &OptimizerState::new(&[2]), &config)?;

    // 首步偏差修正后 m_hat = g，v_hat = g²，方向约为 sign(g)；
    // trust_ratio ≈ √5 / √2
    let ratio = (5f32 / 2.).sqrt();
    assert_tensor_close(&new_param, &[1. - 0.1 * ratio, 2. + 0.1 * ratio]);
    assert_eq!(state.t(), 1);
    assert_tensor_close(state.m(), &[0.01, -0.02]);
    assert_tensor_close(state.v(), &[0.00001, 0.00004]);
    Ok(())
}

#[test]
fn test_pure_weight_decay_scales_param() -> Result<(), OptimizerError> {
    // 梯度为0时 r' = λθ，信任比为 1/λ，于是 θ' = θ(1 - lr)
    let param = Tensor::new(&[3., 4.], &[2]);
    let grad = Tensor::zeros(&[2]);
    let config = LambConfig::new(0.1).with_weight_decay(0.1);

    let (new_param, _) = lamb::step(&param, &grad, &OptimizerState::new(&[2]), &config)?;
    assert_tensor_close(&new_param, &[2.7, 3.6]);
    Ok(())
}

#[test]
fn test_zero_grad_is_fixed_point() -> Result<(), OptimizerError> {
    let param = Tensor::new(&[1., -2., 3., -4., 5., -6.], &[2, 3]);
    let grad = Tensor::zeros(&[2, 3]);
    let config = LambConfig::new(1.0).with_epsilon(1e-9);

    let (new_param, state) = lamb::step(&param, &grad, &OptimizerState::new(&[2, 3]), &config)?;
    assert_eq!(new_param, param);
    assert!(state.m().is_all_zero());
    assert!(state.v().is_all_zero());
    assert_eq!(state.t(), 1);
    Ok(())
}

#[test]
fn test_zero_param_stays_zero() -> Result<(), OptimizerError> {
    let param = Tensor::zeros(&[4]);
    let grad = Tensor::new(&[1., -1., 0.5, 2.], &[4]);
    let config = LambConfig::new(1.0).with_weight_decay(0.01);

    let (new_param, state) = lamb::step(&param, &grad, &OptimizerState::new(&[4]), &config)?;
    assert!(new_param.is_all_zero());
    // 矩估计照常更新
    assert!(!state.m().is_all_zero());
    Ok(())
}

#[test]
fn test_first_step_is_finite() -> Result<(), OptimizerError> {
    let param = Tensor::new(&[0.5, -0.5, 1e3], &[3]);
    let grad = Tensor::new(&[1e-12, 0., 1e6], &[3]);
    let config = LambConfig::new(1.0)
        .with_betas(0.9, 0.99)
        .with_epsilon(1e-9)
        .with_weight_decay(0.01);

    let (new_param, state) = lamb::step(&param, &grad, &OptimizerState::new(&[3]), &config)?;
    assert_eq!(new_param.shape(), &[3]);
    assert!(new_param.to_vec().iter().all(|x| x.is_finite()));
    assert!(state.v().to_vec().iter().all(|x| x.is_finite()));
    Ok(())
}

#[test]
fn test_step_is_deterministic() -> Result<(), OptimizerError> {
    let param = Tensor::new(&[0.3, -1.2, 2.5, 0.7], &[2, 2]);
    let grad = Tensor::new(&[0.05, 0.4, -0.3, 0.01], &[2, 2]);
    let config = LambConfig::new(0.5).with_weight_decay(0.01);
    let state = OptimizerState::new(&[2, 2]);

    let first = lamb::step(&param, &grad, &state, &config)?;
    let second = lamb::step(&param, &grad, &state, &config)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_timestep_accumulates() -> Result<(), OptimizerError> {
    let grad = Tensor::new(&[0.1, 0.2], &[2]);
    let config = LambConfig::new(0.01);
    let mut param = Tensor::new(&[1., 1.], &[2]);
    let mut state = OptimizerState::new(&[2]);

    for expected_t in 1..=3 {
        let (new_param, new_state) = lamb::step(&param, &grad, &state, &config)?;
        assert_eq!(new_state.t(), expected_t);
        assert_eq!(new_param.shape(), param.shape());
        param = new_param;
        state = new_state;
    }
    // 梯度恒为正，参数应单调下降
    assert!(param.to_vec().iter().all(|&x| x < 1.));
    Ok(())
}

#[test]
fn test_shape_mismatch() {
    let param = Tensor::new(&[1., 2.], &[2]);
    let config = LambConfig::new(0.1);
    let state = OptimizerState::new(&[2]);

    let grad = Tensor::new(&[1., 2., 3.], &[3]);
    assert_err!(
        lamb::step(&param, &grad, &state, &config),
        OptimizerError::ShapeMismatch([2], [3], "梯度与参数的形状不一致")
    );

    let grad = Tensor::new(&[1., 2.], &[2]);
    let bad_state = OptimizerState::new(&[1, 2]);
    assert_err!(
        lamb::step(&param, &grad, &bad_state, &config),
        OptimizerError::ShapeMismatch([2], [1, 2], "一阶矩估计与参数的形状不一致")
    );
    // 失败不影响调用方持有的状态
    assert_eq!(bad_state, OptimizerState::new(&[1, 2]));
}

#[test]
fn test_invalid_hyperparameter() {
    let param = Tensor::new(&[1., 2.], &[2]);
    let grad = Tensor::new(&[0.1, 0.2], &[2]);
    let state = OptimizerState::new(&[2]);

    let config = LambConfig::new(0.1).with_betas(1., 0.999);
    assert_err!(
        lamb::step(&param, &grad, &state, &config),
        OptimizerError::InvalidHyperparameter(msg) if msg.contains("beta1")
    );
    let config = LambConfig::new(0.1).with_epsilon(0.);
    assert_err!(
        lamb::step(&param, &grad, &state, &config),
        OptimizerError::InvalidHyperparameter(_)
    );
}

#[test]
fn test_step_with_explicit_learning_rate() -> Result<(), OptimizerError> {
    let param = Tensor::new(&[1., 2.], &[2]);
    let grad = Tensor::new(&[0.1, -0.2], &[2]);
    // 调度表在 t=0 处给出 0.1
    let config = LambConfig::new(LearningRate::piecewise_constant(&[1], &[0.1, 0.5]));
    let state = OptimizerState::new(&[2]);

    // 不给定学习率时按 state.t 查表
    let scheduled = lamb::step(&param, &grad, &state, &config)?;
    let explicit = lamb::step_with_learning_rate(&param, &grad, &state, &config, 0.1)?;
    assert_eq!(scheduled, explicit);

    // 学习率为0：参数不变，矩估计与时间步照常更新
    let (new_param, new_state) = lamb::step_with_learning_rate(&param, &grad, &state, &config, 0.)?;
    assert_eq!(new_param, param);
    assert_eq!(new_state.t(), 1);
    assert_tensor_close(new_state.m(), &[0.01, -0.02]);

    assert_err!(
        lamb::step_with_learning_rate(&param, &grad, &state, &config, f32::NAN),
        OptimizerError::InvalidHyperparameter(_)
    );
    assert_err!(
        lamb::step_with_learning_rate(&param, &grad, &state, &config, -1.),
        OptimizerError::InvalidHyperparameter(_)
    );
    Ok(())
}
