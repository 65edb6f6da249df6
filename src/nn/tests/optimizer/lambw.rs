/*
 * @Description  : 绑定图变量的 LambW 优化器
 */

use crate::assert_err;
use crate::nn::optimizer::lamb;
use crate::nn::{
    Graph, GraphError, Initializer, LambConfig, LambW, LearningRate, Optimizer, OptimizerError,
    OptimizerState, TensorHandle, reduce_mean, variable,
};
use crate::tensor::Tensor;

fn constant(graph: &Graph, name: &str, shape: &[usize], value: f32) -> Result<TensorHandle, GraphError> {
    variable(graph, shape, Initializer::Constant { value }, true, Some(name))
}

#[test]
fn test_new_validates_config() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let w = constant(&graph, "w", &[2], 1.)?;
    let config = LambConfig::new(0.1).with_betas(0.9, 1.);
    assert_err!(
        LambW::new(&graph, &[w], config),
        OptimizerError::InvalidHyperparameter(_)
    );
    Ok(())
}

#[test]
fn test_new_rejects_non_variable_params() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let w = constant(&graph, "w", &[2], 1.)?;
    let mean = reduce_mean(&graph, &w, 0, false, None)?;
    assert_err!(
        LambW::new(&graph, &[w.clone(), mean], LambConfig::default()),
        OptimizerError::Graph(GraphError::InvalidOperation(_))
    );

    let missing = TensorHandle::new("missing", "out");
    assert_err!(
        LambW::new(&graph, &[w, missing], LambConfig::default()),
        OptimizerError::Graph(GraphError::TensorNotFound(name)) if name == "missing/out"
    );
    Ok(())
}

#[test]
fn test_for_trainable_variables() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let a = constant(&graph, "a", &[2], 1.)?;
    variable(&graph, &[2], Initializer::Zeros, false, Some("frozen"))?;
    let b = constant(&graph, "b", &[3], 2.)?;

    let optimizer = LambW::for_trainable_variables(&graph, LambConfig::default())?;
    assert_eq!(optimizer.params(), &[a, b]);
    assert_eq!(optimizer.timestep(), 0);
    Ok(())
}

#[test]
fn test_step_matches_pure_update() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let w = constant(&graph, "w", &[3], 0.5)?;
    let config = LambConfig::new(0.2).with_weight_decay(0.01);
    let mut optimizer = LambW::new(&graph, &[w.clone()], config.clone())?;

    let grad = Tensor::new(&[0.3, -0.1, 0.2], &[3]);
    let initial = graph.value(&w)?.unwrap();
    let (expected_1, state_1) = lamb::step(&initial, &grad, &OptimizerState::new(&[3]), &config)?;
    let (expected_2, state_2) = lamb::step(&expected_1, &grad, &state_1, &config)?;

    graph.set_grad(&w, &grad)?;
    optimizer.step()?;
    assert_eq!(graph.value(&w)?.unwrap(), expected_1);
    assert_eq!(optimizer.state(&w), Some(&state_1));

    optimizer.step()?;
    assert_eq!(graph.value(&w)?.unwrap(), expected_2);
    assert_eq!(optimizer.state(&w), Some(&state_2));
    assert_eq!(optimizer.timestep(), 2);
    Ok(())
}

#[test]
fn test_step_skips_params_without_grad() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let a = constant(&graph, "a", &[2], 1.)?;
    let b = constant(&graph, "b", &[2], 1.)?;
    let mut optimizer = LambW::for_trainable_variables(&graph, LambConfig::new(0.1))?;

    graph.set_grad(&a, &Tensor::new(&[1., 1.], &[2]))?;
    optimizer.step()?;

    assert_ne!(graph.value(&a)?.unwrap(), Tensor::new(&[1., 1.], &[2]));
    assert_eq!(graph.value(&b)?.unwrap(), Tensor::new(&[1., 1.], &[2]));
    assert_eq!(optimizer.state(&a).map(OptimizerState::t), Some(1));
    assert!(optimizer.state(&b).is_none());
    assert_eq!(optimizer.timestep(), 1);
    Ok(())
}

#[test]
fn test_zero_grad() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let a = constant(&graph, "a", &[2], 1.)?;
    let mut optimizer = LambW::for_trainable_variables(&graph, LambConfig::new(0.1))?;

    graph.set_grad(&a, &Tensor::new(&[1., 1.], &[2]))?;
    optimizer.zero_grad()?;
    assert_eq!(graph.grad(&a)?, None);

    // 没有梯度时 step 不改变参数
    optimizer.step()?;
    assert_eq!(graph.value(&a)?.unwrap(), Tensor::new(&[1., 1.], &[2]));
    Ok(())
}

#[test]
fn test_reset() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let a = constant(&graph, "a", &[2], 1.)?;
    let mut optimizer = LambW::for_trainable_variables(&graph, LambConfig::new(0.1))?;

    graph.set_grad(&a, &Tensor::new(&[0.5, -0.5], &[2]))?;
    optimizer.step()?;
    optimizer.step()?;
    assert_eq!(optimizer.timestep(), 2);

    optimizer.reset();
    assert_eq!(optimizer.timestep(), 0);
    assert!(optimizer.state(&a).is_none());

    optimizer.step()?;
    assert_eq!(optimizer.state(&a).map(OptimizerState::t), Some(1));
    Ok(())
}

#[test]
fn test_learning_rate_schedule() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let a = constant(&graph, "a", &[2], 1.)?;
    let schedule = LearningRate::piecewise_constant(&[1, 3], &[0.1, 0.05, 0.01]);
    let config = LambConfig::new(schedule.clone());
    let mut optimizer = LambW::for_trainable_variables(&graph, config.clone())?;

    graph.set_grad(&a, &Tensor::new(&[0.5, 0.5], &[2]))?;
    let mut expected_rates = Vec::new();
    for _ in 0..4 {
        expected_rates.push(optimizer.learning_rate());
        optimizer.step()?;
    }
    assert_eq!(expected_rates, vec![0.1, 0.05, 0.05, 0.01]);
    assert_eq!(optimizer.learning_rate(), 0.01);

    // 与逐步调用纯函数一致（每步使用更新前时间步对应的学习率）
    let mut value = Tensor::new(&[1., 1.], &[2]);
    let mut state = OptimizerState::new(&[2]);
    let grad = Tensor::new(&[0.5, 0.5], &[2]);
    for _ in 0..4 {
        (value, state) = lamb::step(&value, &grad, &state, &config)?;
    }
    assert_eq!(graph.value(&a)?.unwrap(), value);
    Ok(())
}

#[test]
fn test_step_after_graph_cleared() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    let a = constant(&graph, "a", &[2], 1.)?;
    let mut optimizer = LambW::for_trainable_variables(&graph, LambConfig::new(0.1))?;
    graph.set_grad(&a, &Tensor::new(&[0.5, 0.5], &[2]))?;

    graph.clear();
    assert_err!(
        optimizer.step(),
        OptimizerError::Graph(GraphError::TensorNotFound(_))
    );
    assert_eq!(optimizer.timestep(), 0);
    Ok(())
}

#[test]
fn test_late_param_uses_global_learning_rate() -> Result<(), OptimizerError> {
    // 第0步学习率为1，之后为0
    let graph = Graph::new();
    let a = constant(&graph, "a", &[2], 1.)?;
    let b = constant(&graph, "b", &[2], 1.)?;
    let config = LambConfig::new(LearningRate::piecewise_constant(&[1], &[1.0, 0.0]));
    let mut optimizer = LambW::for_trainable_variables(&graph, config)?;
    let grad = Tensor::new(&[0.5, -0.5], &[2]);

    // 前两步只有 a 有梯度
    for _ in 0..2 {
        optimizer.zero_grad()?;
        graph.set_grad(&a, &grad)?;
        optimizer.step()?;
    }
    assert!(optimizer.state(&b).is_none());
    assert_eq!(optimizer.learning_rate(), 0.);

    // b 第一次有梯度时已处于学习率为0的阶段，参数不变，但状态照常推进
    optimizer.zero_grad()?;
    graph.set_grad(&b, &grad)?;
    optimizer.step()?;
    assert_eq!(graph.value(&b)?.unwrap(), Tensor::new(&[1., 1.], &[2]));
    assert_eq!(optimizer.state(&b).map(OptimizerState::t), Some(1));
    assert_eq!(optimizer.timestep(), 3);
    Ok(())
}

#[test]
fn test_debug_output() -> Result<(), OptimizerError> {
    let graph = Graph::new();
    constant(&graph, "a", &[2], 1.)?;
    let optimizer = LambW::for_trainable_variables(&graph, LambConfig::new(0.1))?;
    let debug = format!("{optimizer:?}");
    assert!(debug.starts_with("LambW"));
    assert!(debug.contains("train_step: 0"));
    Ok(())
}
