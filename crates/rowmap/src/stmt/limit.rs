use crate::{Error, Result};

use rowmap_sql::stmt::Limit;

/// Values accepted by [`FindAll::limit`](super::FindAll::limit).
///
/// A single number is a row count. A pair is `(offset, count)`. Strings take
/// the same two shapes, `"5"` or `"10, 5"`.
pub trait IntoLimit {
    fn into_limit(self) -> Result<Limit>;
}

impl IntoLimit for Limit {
    fn into_limit(self) -> Result<Limit> {
        Ok(self)
    }
}

impl IntoLimit for usize {
    fn into_limit(self) -> Result<Limit> {
        Ok(Limit::new(non_negative(self, &self)?))
    }
}

impl IntoLimit for u64 {
    fn into_limit(self) -> Result<Limit> {
        Ok(Limit::new(non_negative(self, &self)?))
    }
}

impl IntoLimit for i32 {
    fn into_limit(self) -> Result<Limit> {
        Ok(Limit::new(non_negative(self, &self)?))
    }
}

impl IntoLimit for i64 {
    fn into_limit(self) -> Result<Limit> {
        Ok(Limit::new(non_negative(self, &self)?))
    }
}

macro_rules! impl_into_limit_pair {
    ( $( $ty:ty ),* ) => {
        $(
            impl IntoLimit for ($ty, $ty) {
                fn into_limit(self) -> Result<Limit> {
                    Ok(Limit::with_offset(
                        non_negative(self.0, &self)?,
                        non_negative(self.1, &self)?,
                    ))
                }
            }
        )*
    };
}

impl_into_limit_pair!(usize, u64, i32, i64);

impl IntoLimit for &[i64] {
    fn into_limit(self) -> Result<Limit> {
        match *self {
            [count] => count.into_limit(),
            [offset, count] => (offset, count).into_limit(),
            _ => Err(invalid(&self)),
        }
    }
}

impl<const N: usize> IntoLimit for [i64; N] {
    fn into_limit(self) -> Result<Limit> {
        self.as_slice().into_limit()
    }
}

impl IntoLimit for Vec<i64> {
    fn into_limit(self) -> Result<Limit> {
        self.as_slice().into_limit()
    }
}

impl IntoLimit for &str {
    fn into_limit(self) -> Result<Limit> {
        let parts = self
            .split(',')
            .map(|part| part.trim().parse::<i64>().ok().filter(|value| *value >= 0))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| invalid(&self))?;

        match parts[..] {
            [count] => Ok(Limit::new(count)),
            [offset, count] => Ok(Limit::with_offset(offset, count)),
            _ => Err(invalid(&self)),
        }
    }
}

impl IntoLimit for String {
    fn into_limit(self) -> Result<Limit> {
        self.as_str().into_limit()
    }
}

/// Checks that `value` fits a bound `limit` argument, `0..=i64::MAX`.
fn non_negative<T: TryInto<i64>>(value: T, input: &dyn core::fmt::Debug) -> Result<i64> {
    value
        .try_into()
        .ok()
        .filter(|value| *value >= 0)
        .ok_or_else(|| invalid(input))
}

fn invalid(input: &dyn core::fmt::Debug) -> Error {
    Error::query_argument(format!("invalid limit value: {input:?}"))
}
