/*
 * @Description  : 算子描述符（Operator Descriptor）与张量句柄（TensorHandle）
 *                 构建期的统一中间表示，一经提交给图便不再修改；同时可序列化，用于调试输出
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// 所有算子输出槽的默认名
pub const DEFAULT_OUTPUT_SLOT: &str = "out";

/// 指向图中某个算子输出的句柄：(产生它的算子名, 输出槽名)
///
/// 不持有任何数据，只是一个查找键，由图在求值时惰性解析。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TensorHandle {
    op_name: String,
    slot: String,
}

impl TensorHandle {
    pub fn new(op_name: &str, slot: &str) -> Self {
        Self {
            op_name: op_name.to_string(),
            slot: slot.to_string(),
        }
    }

    pub fn op_name(&self) -> &str {
        &self.op_name
    }

    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// 形如 `op_name/slot` 的逻辑名
    pub fn logical_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TensorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.op_name, self.slot)
    }
}

/// 归约轴参数
///
/// 单个整数会被包装成只含一个元素的列表，列表则保持原有顺序，
/// 因此 `2` 与 `[2]` 得到完全相同的描述符。负数轴从末尾计数（-1 为最后一维）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReduceAxes {
    /// 对所有轴归约
    #[default]
    All,
    Some(Vec<i32>),
}

impl ReduceAxes {
    /// 写入描述符时的轴列表；空列表代表全部轴
    pub fn into_list(self) -> Vec<i32> {
        match self {
            Self::All => Vec::new(),
            Self::Some(axes) => axes,
        }
    }
}

impl From<i32> for ReduceAxes {
    fn from(axis: i32) -> Self {
        Self::Some(vec![axis])
    }
}

impl From<Vec<i32>> for ReduceAxes {
    fn from(axes: Vec<i32>) -> Self {
        Self::Some(axes)
    }
}

impl From<&[i32]> for ReduceAxes {
    fn from(axes: &[i32]) -> Self {
        Self::Some(axes.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for ReduceAxes {
    fn from(axes: [i32; N]) -> Self {
        Self::Some(axes.to_vec())
    }
}

impl From<Option<Vec<i32>>> for ReduceAxes {
    fn from(axes: Option<Vec<i32>>) -> Self {
        axes.map_or(Self::All, Self::Some)
    }
}

/// 归约类算子（max/mean/sum）共用的配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReduceConf {
    pub input: TensorHandle,
    pub out: String,
    /// 空列表代表全部轴
    pub axis: Vec<i32>,
    pub keep_dims: bool,
}

/// 变量的初始化方式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Initializer {
    Zeros,
    Constant { value: f32 },
    RandomUniform { min: f32, max: f32 },
}

/// 变量（可训练参数或普通输入）的配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableConf {
    pub shape: Vec<usize>,
    pub initializer: Initializer,
    pub trainable: bool,
    pub out: String,
}

/// 算子类型及其特有参数：每种算子一个强类型变体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OperatorConf {
    ReduceMax(ReduceConf),
    ReduceMean(ReduceConf),
    ReduceSum(ReduceConf),
    Variable(VariableConf),
}

impl OperatorConf {
    /// 自动生成算子名时使用的前缀
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::ReduceMax(_) => "ReduceMax",
            Self::ReduceMean(_) => "ReduceMean",
            Self::ReduceSum(_) => "ReduceSum",
            Self::Variable(_) => "Variable",
        }
    }

    /// 该算子声明的输出槽
    pub fn output_slot(&self) -> &str {
        match self {
            Self::ReduceMax(conf) | Self::ReduceMean(conf) | Self::ReduceSum(conf) => {
                conf.out.as_str()
            }
            Self::Variable(conf) => conf.out.as_str(),
        }
    }

    /// 该算子引用的输入张量
    pub fn inputs(&self) -> Vec<&TensorHandle> {
        match self {
            Self::ReduceMax(conf) | Self::ReduceMean(conf) | Self::ReduceSum(conf) => {
                vec![&conf.input]
            }
            Self::Variable(_) => Vec::new(),
        }
    }
}

/// 算子在图中的解释模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpretMode {
    /// 训练图中的前向算子
    #[default]
    Forward,
    /// 仅用于推理
    Inference,
}

/// 一个算子实例的完整描述（名称 + 类型化配置），构造后不可修改
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorDescriptor {
    name: String,
    conf: OperatorConf,
}

impl OperatorDescriptor {
    pub fn new(name: &str, conf: OperatorConf) -> Self {
        Self {
            name: name.to_string(),
            conf,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn conf(&self) -> &OperatorConf {
        &self.conf
    }

    /// 指向本算子声明的输出槽的句柄
    pub fn output(&self) -> TensorHandle {
        TensorHandle::new(&self.name, self.conf.output_slot())
    }
}

/// 已注册算子的可序列化快照
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredOperator {
    pub descriptor: OperatorDescriptor,
    pub mode: InterpretMode,
    pub output_shape: Vec<usize>,
}

/// 图的可序列化描述
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    /// 图名称
    pub name: String,
    /// 按注册顺序排列的算子
    pub operators: Vec<RegisteredOperator>,
}

impl GraphDescriptor {
    /// 创建新的图描述符
    pub fn new(name: &str) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            name: name.to_string(),
            operators: Vec::new(),
        }
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
