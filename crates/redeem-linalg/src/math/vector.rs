use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use num_traits::Zero;

/// Dense vector backed by a contiguous `ndarray::Array1`.
#[derive(Clone, Debug, PartialEq)]
pub struct Array1<T> {
    inner: ndarray::Array1<T>,
}

impl<T> Array1<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            inner: ndarray::Array1::from_vec(data),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn as_slice(&self) -> &[T] {
        self.inner
            .as_slice()
            .expect("(BUG) Array1 storage is not contiguous")
    }

    pub fn view(&self) -> ndarray::ArrayView1<'_, T> {
        self.inner.view()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.to_vec()
    }
}

impl<T> Array1<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Self {
            inner: ndarray::Array1::zeros(len),
        }
    }

    pub fn sum(&self) -> T {
        self.inner.sum()
    }
}

impl<T> From<Vec<T>> for Array1<T> {
    fn from(value: Vec<T>) -> Self {
        Array1::from_vec(value)
    }
}

impl<T> From<Array1<T>> for Vec<T> {
    fn from(value: Array1<T>) -> Self {
        value.inner.into_raw_vec()
    }
}

impl<T: Clone> From<ndarray::Array1<T>> for Array1<T> {
    fn from(value: ndarray::Array1<T>) -> Self {
        if value.is_standard_layout() {
            Array1 { inner: value }
        } else {
            value.iter().cloned().collect()
        }
    }
}

impl<T> From<Array1<T>> for ndarray::Array1<T> {
    fn from(value: Array1<T>) -> Self {
        value.inner
    }
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for Array1<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.inner[index]
    }
}

impl<T: fmt::Display> fmt::Display for Array1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.inner.iter().enumerate() {
            match f.precision() {
                Some(p) => write!(f, "{:.*}", p, value)?,
                None => write!(f, "{}", value)?,
            }
            if idx + 1 != self.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
