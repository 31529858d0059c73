// Author: Dustin Pilgrim
// License: MIT

use super::{Value, ValueType};
use crate::error::ForgeError;

impl TryFrom<&Value> for bool {
    type Error = ForgeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_bool()
    }
}

impl TryFrom<&Value> for String {
    type Error = ForgeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_str().map(str::to_string)
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ForgeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_integer()
    }
}

// Integers widen to floats; floats never narrow to integers.
impl TryFrom<&Value> for f64 {
    type Error = ForgeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Float(f) => Ok(*f),
            Value::Integer(i) => Ok(*i as f64),
            other => Err(ForgeError::TypeMismatch {
                expected: ValueType::Float,
                found: other.value_type(),
            }),
        }
    }
}

// Rounds to the nearest f32; values beyond f32's range are rejected.
impl TryFrom<&Value> for f32 {
    type Error = ForgeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let f = f64::try_from(value)?;
        if f.abs() > f64::from(f32::MAX) {
            return Err(ForgeError::OutOfRange {
                value: f.to_string(),
                target: "f32",
            });
        }
        Ok(f as f32)
    }
}

macro_rules! impl_try_from_integer {
    ($($ty:ty),*) => {
        $(
            impl TryFrom<&Value> for $ty {
                type Error = ForgeError;

                fn try_from(value: &Value) -> Result<Self, Self::Error> {
                    let n = value.as_integer()?;
                    <$ty>::try_from(n).map_err(|_| ForgeError::OutOfRange {
                        value: n.to_string(),
                        target: stringify!($ty),
                    })
                }
            }
        )*
    };
}

impl_try_from_integer!(i32, u8, u16, u32, u64, usize);

impl<T> TryFrom<&Value> for Vec<T>
where
    T: for<'v> TryFrom<&'v Value, Error = ForgeError>,
{
    type Error = ForgeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        value.as_list()?.iter().map(T::try_from).collect()
    }
}
