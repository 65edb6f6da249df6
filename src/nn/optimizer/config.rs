/*
 * @Description  : LAMBW 超参数配置（可从 JSON 读入），在构造优化器时一次性校验
 */

use super::OptimizerError;
use serde::{Deserialize, Serialize};

/// 学习率：常数，或分段常数调度
///
/// 序列化时不带标签：一个裸数字即常数学习率。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LearningRate {
    Constant(f32),
    /// 第`s`次迭代（从0计）的学习率为 `values[boundaries 中 <= s 的个数]`，
    /// 因此 `values` 须比 `boundaries` 多一个元素
    PiecewiseConstant { boundaries: Vec<u64>, values: Vec<f32> },
}

impl LearningRate {
    pub fn piecewise_constant(boundaries: &[u64], values: &[f32]) -> Self {
        Self::PiecewiseConstant {
            boundaries: boundaries.to_vec(),
            values: values.to_vec(),
        }
    }

    /// 第`step`次迭代（从0计）使用的学习率
    pub fn rate_at(&self, step: u64) -> f32 {
        match self {
            Self::Constant(lr) => *lr,
            Self::PiecewiseConstant { boundaries, values } => {
                let index = boundaries.iter().filter(|&&b| b <= step).count();
                values
                    .get(index)
                    .or_else(|| values.last())
                    .copied()
                    .unwrap_or(0.)
            }
        }
    }

    pub fn validate(&self) -> Result<(), OptimizerError> {
        let check_rate = |lr: f32| {
            if lr.is_finite() && lr >= 0. {
                Ok(())
            } else {
                Err(OptimizerError::InvalidHyperparameter(format!(
                    "学习率须为非负有限数，实际为{lr}"
                )))
            }
        };
        match self {
            Self::Constant(lr) => check_rate(*lr),
            Self::PiecewiseConstant { boundaries, values } => {
                if values.len() != boundaries.len() + 1 {
                    return Err(OptimizerError::InvalidHyperparameter(format!(
                        "分段常数学习率的取值个数({})须比分界点个数({})多1",
                        values.len(),
                        boundaries.len()
                    )));
                }
                if boundaries.windows(2).any(|pair| pair[0] >= pair[1]) {
                    return Err(OptimizerError::InvalidHyperparameter(format!(
                        "分段常数学习率的分界点须严格递增：{boundaries:?}"
                    )));
                }
                values.iter().try_for_each(|&lr| check_rate(lr))
            }
        }
    }
}

impl From<f32> for LearningRate {
    fn from(lr: f32) -> Self {
        Self::Constant(lr)
    }
}

const fn default_beta1() -> f32 {
    0.9
}

const fn default_beta2() -> f32 {
    0.999
}

const fn default_epsilon() -> f32 {
    1e-6
}

/// LAMBW 超参数
///
/// # 使用示例
/// ```ignore
/// let config = LambConfig::new(1.0)
///     .with_betas(0.9, 0.99)
///     .with_epsilon(1e-9)
///     .with_weight_decay(0.01);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LambConfig {
    pub learning_rate: LearningRate,
    /// β1（一阶矩衰减）
    #[serde(default = "default_beta1")]
    pub beta1: f32,
    /// β2（二阶矩衰减）
    #[serde(default = "default_beta2")]
    pub beta2: f32,
    /// 数值稳定项
    #[serde(default = "default_epsilon")]
    pub epsilon: f32,
    /// 解耦权重衰减系数
    #[serde(default)]
    pub weight_decay: f32,
}

impl Default for LambConfig {
    fn default() -> Self {
        Self::new(1e-3)
    }
}

impl LambConfig {
    pub fn new(learning_rate: impl Into<LearningRate>) -> Self {
        Self {
            learning_rate: learning_rate.into(),
            beta1: default_beta1(),
            beta2: default_beta2(),
            epsilon: default_epsilon(),
            weight_decay: 0.,
        }
    }

    pub fn with_betas(mut self, beta1: f32, beta2: f32) -> Self {
        self.beta1 = beta1;
        self.beta2 = beta2;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_weight_decay(mut self, weight_decay: f32) -> Self {
        self.weight_decay = weight_decay;
        self
    }

    /// 校验：0 < β1, β2 < 1；ε > 0；权重衰减为非负有限数；学习率合法
    pub fn validate(&self) -> Result<(), OptimizerError> {
        for (name, beta) in [("beta1", self.beta1), ("beta2", self.beta2)] {
            if !(beta > 0. && beta < 1.) {
                return Err(OptimizerError::InvalidHyperparameter(format!(
                    "{name}须在(0, 1)范围内，实际为{beta}"
                )));
            }
        }
        if !(self.epsilon > 0.) {
            return Err(OptimizerError::InvalidHyperparameter(format!(
                "epsilon须大于0，实际为{}",
                self.epsilon
            )));
        }
        if !(self.weight_decay.is_finite() && self.weight_decay >= 0.) {
            return Err(OptimizerError::InvalidHyperparameter(format!(
                "weight_decay须为非负有限数，实际为{}",
                self.weight_decay
            )));
        }
        self.learning_rate.validate()
    }

    /// 从 JSON 读入并校验
    pub fn from_json(json: &str) -> Result<Self, OptimizerError> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            OptimizerError::InvalidHyperparameter(format!("无法解析配置：{e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
