use std::error::Error;
use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::{One, Zero};

use crate::math::vector::Array1;

/// Dense matrix backed by an `ndarray::Array2`.
///
/// The storage is always in standard (row-major) layout, so the element
/// buffer can be borrowed as one slice.
#[derive(Clone, Debug, PartialEq)]
pub struct Array2<T> {
    inner: ndarray::Array2<T>,
}

impl<T> Array2<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, ShapeError> {
        let (rows, cols) = shape;
        let len = data.len();
        if len != rows * cols {
            return Err(ShapeError::BufferLength { rows, cols, len });
        }
        ndarray::Array2::from_shape_vec(shape, data)
            .map(|inner| Self { inner })
            .map_err(|_| ShapeError::BufferLength { rows, cols, len })
    }

    /// Build a matrix by calling `f(row, col)` for every element.
    pub fn from_shape_fn<F>(shape: (usize, usize), mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self {
            inner: ndarray::Array2::from_shape_fn(shape, |(r, c)| f(r, c)),
        }
    }

    /// Build a matrix from nested rows.
    ///
    /// Every row must have the length of the first one. An empty outer
    /// sequence gives a `0 x 0` matrix.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, ShapeError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[T]>,
        T: Clone,
    {
        let mut data = Vec::new();
        let mut expected = None;
        let mut nrows = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let values = values.as_ref();
            let cols = *expected.get_or_insert(values.len());
            if values.len() != cols {
                return Err(ShapeError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
            nrows += 1;
        }
        Self::from_shape_vec((nrows, expected.unwrap_or(0)), data)
    }

    /// A `1 x n` matrix holding `v` as its only row.
    pub fn from_row(v: Array1<T>) -> Self {
        let v: ndarray::Array1<T> = v.into();
        Self {
            inner: v.insert_axis(ndarray::Axis(0)),
        }
    }

    /// An `n x 1` matrix holding `v` as its only column.
    pub fn from_column(v: Array1<T>) -> Self {
        let v: ndarray::Array1<T> = v.into();
        Self {
            inner: v.insert_axis(ndarray::Axis(1)),
        }
    }

    pub fn nrows(&self) -> usize {
        self.inner.nrows()
    }

    pub fn ncols(&self) -> usize {
        self.inner.ncols()
    }

    pub fn shape(&self) -> (usize, usize) {
        self.inner.dim()
    }

    pub fn is_square(&self) -> bool {
        self.inner.is_square()
    }

    /// Borrow as an `ndarray` view, for the kernels in [`crate::math::linalg`].
    pub fn view(&self) -> ndarray::ArrayView2<'_, T> {
        self.inner.view()
    }

    /// The elements in row-major order.
    pub fn as_slice(&self) -> &[T] {
        self.inner
            .as_slice()
            .expect("(BUG) Array2 storage is not in standard layout")
    }

    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.nrows(), "row index out of bounds");
        let cols = self.ncols();
        &self.as_slice()[row * cols..(row + 1) * cols]
    }

    pub fn row(&self, row: usize) -> Array1<T>
    where
        T: Clone,
    {
        self.inner.row(row).iter().cloned().collect()
    }

    pub fn column(&self, col: usize) -> Array1<T>
    where
        T: Clone,
    {
        self.inner.column(col).iter().cloned().collect()
    }

    /// Swap two rows in place.
    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for c in 0..self.ncols() {
            self.inner.swap((a, c), (b, c));
        }
    }

    /// Rows and columns exchanged, as a new matrix.
    pub fn t(&self) -> Array2<T>
    where
        T: Clone,
    {
        Array2::from(self.inner.t().to_owned())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.inner.iter().cloned().collect()
    }

    /// The matrix as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.inner.outer_iter().map(|row| row.to_vec()).collect()
    }
}

impl<T: Clone + Zero> Array2<T> {
    pub fn zeros(shape: (usize, usize)) -> Self {
        Self {
            inner: ndarray::Array2::zeros(shape),
        }
    }
}

impl<T: Clone + Zero + One> Array2<T> {
    /// The `n x n` identity matrix.
    pub fn eye(n: usize) -> Self {
        Self {
            inner: ndarray::Array2::eye(n),
        }
    }
}

impl<T> Index<(usize, usize)> for Array2<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.inner[index]
    }
}

impl<T> IndexMut<(usize, usize)> for Array2<T> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.inner[index]
    }
}

impl<T: Clone> From<ndarray::Array2<T>> for Array2<T> {
    fn from(value: ndarray::Array2<T>) -> Self {
        let inner = if value.is_standard_layout() {
            value
        } else {
            value.as_standard_layout().into_owned()
        };
        Array2 { inner }
    }
}

impl<T> From<Array2<T>> for ndarray::Array2<T> {
    fn from(value: Array2<T>) -> Self {
        value.inner
    }
}

impl<T: fmt::Display> fmt::Display for Array2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, row) in self.inner.outer_iter().enumerate() {
            if idx > 0 {
                write!(f, ",\n ")?;
            }
            write!(f, "[")?;
            for (col, value) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{:.*}", p, value)?,
                    None => write!(f, "{}", value)?,
                }
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Flat buffer length does not match `rows * cols`.
    BufferLength { rows: usize, cols: usize, len: usize },
    /// A nested row differs in length from the first row.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::BufferLength { rows, cols, len } => write!(
                f,
                "invalid shape ({}, {}) for buffer of length {}",
                rows, cols, len
            ),
            ShapeError::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged input: row {} has length {}, expected {}",
                row, found, expected
            ),
        }
    }
}

impl Error for ShapeError {}
