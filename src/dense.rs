//! Dense n-dimensional array collaborator
//!
//! A minimal row-major dense array used as the source and target of
//! sparse/dense conversions. Layout design beyond "contiguous, row-major,
//! innermost dimension fastest" is out of scope.

use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use crate::shape::Shape;

/// Contiguous row-major n-dimensional array
#[derive(Debug, Clone, PartialEq)]
pub struct DenseArray<T: Element> {
    pub(crate) shape: Shape,
    pub(crate) data: Vec<T>,
}

impl<T: Element> DenseArray<T> {
    /// Create a dense array from owned data
    ///
    /// # Errors
    ///
    /// Returns an error if the shape is rank 0, has a zero-size dimension,
    /// or its element count disagrees with `data.len()`.
    pub fn new(shape: impl Into<Shape>, data: Vec<T>) -> Result<Self> {
        let shape = shape.into();
        if shape.is_empty() {
            return Err(Error::invalid_argument("shape", "rank must be at least 1"));
        }
        if let Some(axis) = shape.iter().position(|&dim| dim == 0) {
            return Err(Error::invalid_argument(
                "shape",
                format!("dimension {axis} has size 0"),
            ));
        }
        if data.len() != shape.numel() {
            return Err(Error::shape_mismatch(&[shape.numel()], &[data.len()]));
        }
        Ok(Self { shape, data })
    }

    /// Create a dense array by copying a slice
    pub fn from_slice(data: &[T], shape: impl Into<Shape>) -> Result<Self> {
        Self::new(shape, data.to_vec())
    }

    /// Create a dense array filled with one value
    pub fn splat(shape: impl Into<Shape>, value: T) -> Result<Self> {
        let shape = shape.into();
        let numel = shape.numel();
        Self::new(shape, vec![value; numel])
    }

    /// Shape of the array
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Number of dimensions
    #[inline]
    pub fn rank(&self) -> usize {
        self.shape.ndim()
    }

    /// Runtime element type tag
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Row-major element slice
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Read the element at `coords`
    pub fn get(&self, coords: &[usize]) -> Result<&T> {
        if coords.len() != self.rank() {
            return Err(Error::RankMismatch {
                expected: self.rank(),
                got: coords.len(),
            });
        }
        let mut offset = 0;
        for (axis, (&index, &size)) in coords.iter().zip(self.shape.iter()).enumerate() {
            if index >= size {
                return Err(Error::IndexOutOfBounds { index, axis, size });
            }
            offset = offset * size + index;
        }
        Ok(&self.data[offset])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates_length() {
        assert!(DenseArray::new([2, 3], vec![0.0f64; 6]).is_ok());
        assert!(DenseArray::new([2, 3], vec![0.0f64; 5]).is_err());
        assert!(DenseArray::new([2, 0], Vec::<f64>::new()).is_err());
        assert!(DenseArray::<f64>::new(Vec::new(), vec![1.0]).is_err());
    }

    #[test]
    fn test_row_major_get() {
        // [[1, 2, 3],
        //  [4, 5, 6]]
        let a = DenseArray::from_slice(&[1, 2, 3, 4, 5, 6], [2, 3]).unwrap();
        assert_eq!(*a.get(&[0, 0]).unwrap(), 1);
        assert_eq!(*a.get(&[0, 2]).unwrap(), 3);
        assert_eq!(*a.get(&[1, 0]).unwrap(), 4);
        assert_eq!(*a.get(&[1, 2]).unwrap(), 6);
        assert!(a.get(&[2, 0]).is_err());
        assert!(a.get(&[0]).is_err());
    }

    #[test]
    fn test_splat() {
        let a = DenseArray::splat([2, 2], 7i32).unwrap();
        assert_eq!(a.data(), &[7, 7, 7, 7]);
    }
}
