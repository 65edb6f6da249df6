/*
 * @Description  : 张量的其他运算：逐元素函数、范数以及沿轴归约（max/mean/sum）
 */

use crate::errors::TensorError;
use crate::tensor::Tensor;
use ndarray::Axis;
use std::cmp::PartialEq;

impl From<f32> for Tensor {
    /// 实现 From<f32> trait 用于将`f32`类型转换为形状为`[1]`的张量
    fn from(scalar: f32) -> Self {
        Tensor::new(&[scalar], &[1])
    }
}

impl PartialEq for Tensor {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓逐元素函数↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Tensor {
    /// 逐元素开平方
    pub fn sqrt(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(f32::sqrt),
        }
    }

    /// 逐元素平方
    pub fn square(&self) -> Tensor {
        Tensor {
            data: self.data.mapv(|x| x * x),
        }
    }

    /// 所有元素视作一个向量后的L2范数（即Frobenius范数）。
    /// 按行优先顺序逐个累加，保证同样的数据总能得到同样的结果。
    pub fn l2_norm(&self) -> f32 {
        self.data.iter().map(|&x| x * x).sum::<f32>().sqrt()
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑逐元素函数↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/

/*↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓沿轴归约↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓*/
impl Tensor {
    /// 沿`axes`求最大值。`axes`为空时对所有轴归约；
    /// `keep_dims`为true时被归约的轴保留为长度1的维度。
    pub fn reduce_max(&self, axes: &[usize], keep_dims: bool) -> Tensor {
        self.reduce_along(axes, keep_dims, f32::NEG_INFINITY, f32::max)
    }

    /// 沿`axes`求和，规则同`reduce_max`
    pub fn reduce_sum(&self, axes: &[usize], keep_dims: bool) -> Tensor {
        self.reduce_along(axes, keep_dims, 0., |acc, x| acc + x)
    }

    /// 沿`axes`求均值，规则同`reduce_max`
    pub fn reduce_mean(&self, axes: &[usize], keep_dims: bool) -> Tensor {
        let count: usize = self
            .normalized_reduce_axes(axes)
            .iter()
            .map(|&axis| self.shape()[axis])
            .product();
        self.reduce_sum(axes, keep_dims) / count as f32
    }

    fn reduce_along<F>(&self, axes: &[usize], keep_dims: bool, init: f32, fold: F) -> Tensor
    where
        F: Fn(f32, f32) -> f32,
    {
        let mut data = self.data.clone();
        // 从高轴往低轴归约，这样不保留维度时低轴的下标不受影响
        for &axis in self.normalized_reduce_axes(axes).iter().rev() {
            let folded = data.fold_axis(Axis(axis), init, |&acc, &x| fold(acc, x));
            data = if keep_dims {
                folded.insert_axis(Axis(axis))
            } else {
                folded
            };
        }
        Tensor { data }
    }

    /// 升序、去重后的归约轴；空列表代表全部轴
    fn normalized_reduce_axes(&self, axes: &[usize]) -> Vec<usize> {
        let rank = self.dimension();
        if axes.is_empty() {
            return (0..rank).collect();
        }
        for &axis in axes {
            assert!(axis < rank, "{}", TensorError::AxisOutOfRange { axis, rank });
        }
        let mut axes = axes.to_vec();
        axes.sort_unstable();
        axes.dedup();
        axes
    }
}
/*↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑沿轴归约↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑↑*/
