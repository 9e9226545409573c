use ndarray::{arr0, Array, ArrayBase, ArrayD, CowArray, Data, Dimension, IxDyn};

use crate::errors::{Parameter, RelationError};

/// An argument handed to a rocket relation; `Text` and `Missing` fail the type check.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Array(ArrayD<f64>),
    Text(String),
    Missing,
}

impl Operand {
    fn describe(&self) -> String {
        match self {
            Operand::Scalar(value) => format!("scalar {}", value),
            Operand::Array(values) => format!("array of shape {:?}", values.shape()),
            Operand::Text(text) => format!("text {:?}", text),
            Operand::Missing => "nothing".to_string(),
        }
    }

    /// Views the operand as an n-dimensional array, scalars becoming 0-d.
    pub(crate) fn numeric(
        &self,
        parameter: Parameter,
    ) -> Result<CowArray<'_, f64, IxDyn>, RelationError> {
        match self {
            Operand::Scalar(value) => Ok(CowArray::from(arr0(*value).into_dyn())),
            Operand::Array(values) => Ok(CowArray::from(values.view())),
            Operand::Text(_) | Operand::Missing => Err(RelationError::NonNumeric {
                parameter,
                found: self.describe(),
            }),
        }
    }
}

macro_rules! scalar_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value as f64)
                }
            }
        )*
    };
}

scalar_operand!(f64, f32, i32, i64, u32, u64);

impl<S, D> From<ArrayBase<S, D>> for Operand
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn from(values: ArrayBase<S, D>) -> Self {
        Operand::Array(values.into_owned().into_dyn())
    }
}

impl<S, D> From<&ArrayBase<S, D>> for Operand
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    fn from(values: &ArrayBase<S, D>) -> Self {
        Operand::Array(values.to_owned().into_dyn())
    }
}

impl From<Vec<f64>> for Operand {
    fn from(values: Vec<f64>) -> Self {
        Operand::Array(Array::from_vec(values).into_dyn())
    }
}

impl From<Vec<i64>> for Operand {
    fn from(values: Vec<i64>) -> Self {
        Operand::from(values.into_iter().map(|v| v as f64).collect::<Vec<_>>())
    }
}

impl From<&[f64]> for Operand {
    fn from(values: &[f64]) -> Self {
        Operand::from(values.to_vec())
    }
}

impl<const N: usize> From<[f64; N]> for Operand {
    fn from(values: [f64; N]) -> Self {
        Operand::from(values.to_vec())
    }
}

impl From<&str> for Operand {
    fn from(text: &str) -> Self {
        Operand::Text(text.to_string())
    }
}

impl From<String> for Operand {
    fn from(text: String) -> Self {
        Operand::Text(text)
    }
}

impl<T: Into<Operand>> From<Option<T>> for Operand {
    fn from(value: Option<T>) -> Self {
        value.map_or(Operand::Missing, Into::into)
    }
}

/// Scalar when every input was a scalar, otherwise an array of the broadcast shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Quantity {
    Scalar(f64),
    Array(ArrayD<f64>),
}

impl Quantity {
    pub(crate) fn from_values(values: ArrayD<f64>, all_scalar: bool) -> Self {
        if all_scalar && values.ndim() == 0 {
            if let Some(&value) = values.iter().next() {
                return Quantity::Scalar(value);
            }
        }
        Quantity::Array(values)
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Quantity::Scalar(_))
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Quantity::Scalar(value) => Some(*value),
            Quantity::Array(_) => None,
        }
    }

    pub fn as_array(&self) -> Option<&ArrayD<f64>> {
        match self {
            Quantity::Scalar(_) => None,
            Quantity::Array(values) => Some(values),
        }
    }

    pub fn into_array(self) -> ArrayD<f64> {
        match self {
            Quantity::Scalar(value) => arr0(value).into_dyn(),
            Quantity::Array(values) => values,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Quantity::Scalar(_) => &[],
            Quantity::Array(values) => values.shape(),
        }
    }
}

/// NumPy broadcasting: trailing axes aligned, each axis equal or 1.
pub fn broadcast_shape(shapes: &[(Parameter, &[usize])]) -> Result<Vec<usize>, RelationError> {
    let ndim = shapes.iter().map(|(_, shape)| shape.len()).max().unwrap_or(0);
    let mut target = vec![1; ndim];

    for (parameter, shape) in shapes {
        let offset = ndim - shape.len();
        for (axis, &len) in shape.iter().enumerate() {
            let slot = &mut target[offset + axis];
            if *slot == 1 {
                *slot = len;
            } else if len != 1 && len != *slot {
                return Err(RelationError::ShapeMismatch {
                    parameter: *parameter,
                    shape: shape.to_vec(),
                    target: target.clone(),
                });
            }
        }
    }

    Ok(target)
}
