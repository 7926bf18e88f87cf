//! Fixed-width value storage as raw bytes with typed views.

use lamina_buffers::TypedByteVec;

/// A collection of fixed-width values stored as bytes.
///
/// `Values` wraps a [`TypedByteVec`] and provides element-typed accessors
/// for the byte representations of primitive values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values(TypedByteVec);

impl Values {
    /// Creates a new, empty `Values` container.
    pub fn new() -> Values {
        Values(TypedByteVec::new())
    }

    /// Creates a new container with capacity for at least `capacity` bytes.
    pub fn with_byte_capacity(capacity: usize) -> Values {
        Values(TypedByteVec::with_byte_capacity(capacity))
    }

    /// Creates a container holding `len` zeroed elements of type `T`.
    pub fn zeroed<T>(len: usize) -> Values
    where
        T: bytemuck::Zeroable,
    {
        Values(TypedByteVec::zeroed(len * std::mem::size_of::<T>()))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of complete elements of type `T` in the container.
    #[inline]
    pub fn len<T>(&self) -> usize {
        self.0.len() / std::mem::size_of::<T>()
    }

    /// Number of bytes in the container.
    #[inline]
    pub fn bytes_len(&self) -> usize {
        self.0.len()
    }

    /// The underlying bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// The contents interpreted as a slice of `T`.
    #[inline]
    pub fn as_slice<T>(&self) -> &[T]
    where
        T: bytemuck::AnyBitPattern,
    {
        self.0.typed_data()
    }

    /// The contents interpreted as a mutable slice of `T`.
    #[inline]
    pub fn as_mut_slice<T>(&mut self) -> &mut [T]
    where
        T: bytemuck::AnyBitPattern + bytemuck::NoUninit,
    {
        self.0.typed_data_mut()
    }

    /// Appends a single element of type `T`.
    #[inline]
    pub fn push<T>(&mut self, value: T)
    where
        T: bytemuck::NoUninit,
    {
        self.0.push_typed(value);
    }

    /// Appends every element of a slice of `T` values.
    #[inline]
    pub fn extend_from_slice<T>(&mut self, values: &[T])
    where
        T: bytemuck::NoUninit,
    {
        self.0.extend_from_typed_slice(values);
    }

    /// Clears the container, removing all elements.
    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let values = Values::new();
        assert!(values.is_empty());
        assert_eq!(values.bytes_len(), 0);
    }

    #[test]
    fn test_zeroed() {
        let values = Values::zeroed::<i32>(5);
        assert_eq!(values.len::<i32>(), 5);
        assert_eq!(values.as_slice::<i32>(), &[0, 0, 0, 0, 0]);
    }

    #[test]
    fn test_push_and_len() {
        let mut values = Values::new();
        values.push(1i16);
        values.push(2i16);
        values.push(3i16);
        assert_eq!(values.len::<i16>(), 3);
        assert_eq!(values.bytes_len(), 6);
        assert_eq!(values.as_slice::<i16>(), &[1, 2, 3]);
    }

    #[test]
    fn test_extend_from_slice() {
        let mut values = Values::with_byte_capacity(32);
        values.extend_from_slice(&[1.5f64, 2.5]);
        values.extend_from_slice(&[3.5f64]);
        assert_eq!(values.as_slice::<f64>(), &[1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_as_mut_slice() {
        let mut values = Values::zeroed::<i32>(3);
        values.as_mut_slice::<i32>()[2] = 30;
        assert_eq!(values.as_slice::<i32>(), &[0, 0, 30]);
    }

    #[test]
    fn test_clear() {
        let mut values = Values::new();
        values.extend_from_slice(&[1i8, 2, 3]);
        values.clear();
        assert!(values.is_empty());
        assert_eq!(values.len::<i8>(), 0);
    }
}
