use crate::assert_err;
use crate::nn::optimizer::{LambConfig, LearningRate, OptimizerError};

#[test]
fn test_default_config() {
    let config = LambConfig::default();
    assert_eq!(config.learning_rate, LearningRate::Constant(1e-3));
    assert_eq!(config.beta1, 0.9);
    assert_eq!(config.beta2, 0.999);
    assert_eq!(config.epsilon, 1e-6);
    assert_eq!(config.weight_decay, 0.);
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder_setters() {
    let config = LambConfig::new(1.0)
        .with_betas(0.9, 0.99)
        .with_epsilon(1e-9)
        .with_weight_decay(0.01);
    assert_eq!(config.learning_rate.rate_at(0), 1.0);
    assert_eq!(config.beta2, 0.99);
    assert_eq!(config.epsilon, 1e-9);
    assert_eq!(config.weight_decay, 0.01);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_betas() {
    for (beta1, beta2) in [(0., 0.99), (1., 0.99), (0.9, 0.), (0.9, 1.), (-0.5, 0.9), (f32::NAN, 0.9)] {
        let config = LambConfig::new(0.1).with_betas(beta1, beta2);
        assert_err!(config.validate(), OptimizerError::InvalidHyperparameter(_));
    }
}

#[test]
fn test_invalid_epsilon_and_weight_decay() {
    assert_err!(
        LambConfig::new(0.1).with_epsilon(0.).validate(),
        OptimizerError::InvalidHyperparameter(msg) if msg.contains("epsilon")
    );
    assert_err!(
        LambConfig::new(0.1).with_epsilon(-1e-8).validate(),
        OptimizerError::InvalidHyperparameter(_)
    );
    assert_err!(
        LambConfig::new(0.1).with_weight_decay(-0.01).validate(),
        OptimizerError::InvalidHyperparameter(msg) if msg.contains("weight_decay")
    );
    assert_err!(
        LambConfig::new(f32::INFINITY).validate(),
        OptimizerError::InvalidHyperparameter(_)
    );
}

#[test]
fn test_piecewise_constant_learning_rate() {
    let lr = LearningRate::piecewise_constant(&[2, 5], &[1.0, 0.5, 0.1]);
    assert!(lr.validate().is_ok());
    assert_eq!(lr.rate_at(0), 1.0);
    assert_eq!(lr.rate_at(1), 1.0);
    assert_eq!(lr.rate_at(2), 0.5);
    assert_eq!(lr.rate_at(4), 0.5);
    assert_eq!(lr.rate_at(5), 0.1);
    assert_eq!(lr.rate_at(1000), 0.1);

    // 没有分界点时即常数
    let constant = LearningRate::piecewise_constant(&[], &[0.3]);
    assert_eq!(constant.rate_at(7), 0.3);
}

#[test]
fn test_invalid_piecewise_constant_learning_rate() {
    assert_err!(
        LearningRate::piecewise_constant(&[2], &[1.0]).validate(),
        OptimizerError::InvalidHyperparameter(_)
    );
    assert_err!(
        LearningRate::piecewise_constant(&[5, 2], &[1.0, 0.5, 0.1]).validate(),
        OptimizerError::InvalidHyperparameter(_)
    );
    assert_err!(
        LearningRate::piecewise_constant(&[2], &[1.0, -0.5]).validate(),
        OptimizerError::InvalidHyperparameter(_)
    );
}

#[test]
fn test_config_from_json() {
    let config = LambConfig::from_json(
        r#"{ "learning_rate": 1.0, "beta1": 0.9, "beta2": 0.99, "epsilon": 1e-9, "weight_decay": 0.01 }"#,
    )
    .unwrap();
    assert_eq!(
        config,
        LambConfig::new(1.0)
            .with_betas(0.9, 0.99)
            .with_epsilon(1e-9)
            .with_weight_decay(0.01)
    );

    // 省略的字段取默认值；学习率可以是分段常数调度
    let config = LambConfig::from_json(
        r#"{ "learning_rate": { "boundaries": [10], "values": [0.1, 0.01] } }"#,
    )
    .unwrap();
    assert_eq!(config.beta1, 0.9);
    assert_eq!(config.learning_rate.rate_at(10), 0.01);

    // 解析成功但取值非法
    assert_err!(
        LambConfig::from_json(r#"{ "learning_rate": 0.1, "beta2": 1.5 }"#),
        OptimizerError::InvalidHyperparameter(msg) if msg.contains("beta2")
    );
    // 缺少学习率
    assert_err!(
        LambConfig::from_json(r#"{ "beta1": 0.9 }"#),
        OptimizerError::InvalidHyperparameter(_)
    );
}
