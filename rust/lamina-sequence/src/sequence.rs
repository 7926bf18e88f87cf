//! The sequence handle: an element kind paired with representation-specific
//! storage.

use crate::boxed::BoxedValue;
use crate::kind::{ElementKind, FixedElement, SequenceTag, TaggedElement};
use crate::values::Values;

/// A fixed-length sequence of elements of a single logical kind.
///
/// The kind is fixed at construction and never changes. Three storage
/// families back the nine kinds:
///
/// - `Generic` sequences hold boxed elements directly;
/// - `Boolean`, `Char` and `Long` sequences hold boxed elements alongside an
///   explicit [`SequenceTag`], standing in for fixed-width buffers the host
///   environment does not provide;
/// - the remaining numeric kinds hold a contiguous fixed-width byte buffer.
///
/// Sequences are immutable after construction; every deriving operation
/// (notably concatenation) allocates fresh storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    kind: ElementKind,
    storage: Storage,
}

/// Representation-specific backing storage of a [`Sequence`].
#[derive(Debug, Clone, PartialEq)]
pub enum Storage {
    /// Boxed elements with no tag: a true generic sequence.
    Boxed(Vec<BoxedValue>),
    /// Boxed elements carrying the storage tag of an emulated fixed-width
    /// kind.
    Tagged {
        tag: SequenceTag,
        elements: Vec<BoxedValue>,
    },
    /// Contiguous fixed-width buffer; the element width is given by the
    /// sequence kind.
    Fixed(Values),
}

impl Sequence {
    /// Creates a generic sequence over the given boxed elements.
    pub fn generic(elements: Vec<BoxedValue>) -> Sequence {
        Sequence {
            kind: ElementKind::Generic,
            storage: Storage::Boxed(elements),
        }
    }

    /// Creates an emulated fixed-width sequence by tagging generic-shaped
    /// storage.
    ///
    /// Every element must match the tag; tagged storage admits nothing else.
    pub fn tagged(tag: SequenceTag, elements: Vec<BoxedValue>) -> Sequence {
        debug_assert!(elements.iter().all(|element| tag.admits(element)));
        Sequence {
            kind: tag.element_kind(),
            storage: Storage::Tagged { tag, elements },
        }
    }

    /// Creates an emulated fixed-width sequence from unboxed values
    /// (boolean, char or long).
    pub fn emulated<T>(values: &[T]) -> Sequence
    where
        T: TaggedElement + Copy,
    {
        let elements = values.iter().map(|value| value.to_boxed()).collect();
        Sequence {
            kind: T::TAG.element_kind(),
            storage: Storage::Tagged {
                tag: T::TAG,
                elements,
            },
        }
    }

    /// Creates a fixed-width sequence from a slice of unboxed values.
    pub fn fixed<T>(values: &[T]) -> Sequence
    where
        T: FixedElement,
    {
        let mut storage = Values::with_byte_capacity(std::mem::size_of_val(values));
        storage.extend_from_slice(values);
        Sequence {
            kind: T::KIND,
            storage: Storage::Fixed(storage),
        }
    }

    /// Wraps an already populated fixed-width buffer.
    pub(crate) fn from_fixed_values(kind: ElementKind, values: Values) -> Sequence {
        debug_assert!(kind.is_fixed_width());
        Sequence {
            kind,
            storage: Storage::Fixed(values),
        }
    }

    /// The logical element kind.
    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The backing storage.
    #[inline]
    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match &self.storage {
            Storage::Boxed(elements) | Storage::Tagged { elements, .. } => elements.len(),
            Storage::Fixed(values) => {
                let size = self.kind.primitive_size().expect("fixed-width kind");
                values.bytes_len() / size
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The storage tag, for emulated fixed-width sequences.
    pub fn tag(&self) -> Option<SequenceTag> {
        match &self.storage {
            Storage::Tagged { tag, .. } => Some(*tag),
            _ => None,
        }
    }

    /// Typed view of a fixed-width sequence.
    ///
    /// # Panics
    ///
    /// Panics if `T` does not match the sequence kind.
    pub fn as_slice<T>(&self) -> &[T]
    where
        T: FixedElement,
    {
        assert_eq!(self.kind, T::KIND);
        match &self.storage {
            Storage::Fixed(values) => values.as_slice(),
            _ => unreachable!("fixed-width kind with generic-shaped storage"),
        }
    }

    /// Borrows the boxed elements of generic-shaped storage (generic and
    /// tagged sequences).
    ///
    /// # Panics
    ///
    /// Panics if the sequence is backed by a fixed-width buffer.
    pub fn boxed_elements(&self) -> &[BoxedValue] {
        match &self.storage {
            Storage::Boxed(elements) | Storage::Tagged { elements, .. } => elements,
            Storage::Fixed(_) => panic!("{} sequence has no boxed elements", self.kind),
        }
    }

    /// Boxes the element at `index`.
    ///
    /// This is the ordered-element view a sequence presents when it
    /// participates in a generic (boxed) context.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn value_at(&self, index: usize) -> BoxedValue {
        match &self.storage {
            Storage::Boxed(elements) | Storage::Tagged { elements, .. } => {
                elements[index].clone()
            }
            Storage::Fixed(values) => match self.kind {
                ElementKind::Byte => values.as_slice::<i8>()[index].to_boxed(),
                ElementKind::Short => values.as_slice::<i16>()[index].to_boxed(),
                ElementKind::Int => values.as_slice::<i32>()[index].to_boxed(),
                ElementKind::Float => values.as_slice::<f32>()[index].to_boxed(),
                ElementKind::Double => values.as_slice::<f64>()[index].to_boxed(),
                _ => unreachable!("fixed-width kind"),
            },
        }
    }

    /// Appends every element, in storage order, to `out` as boxed values.
    pub(crate) fn push_boxed_into(&self, out: &mut Vec<BoxedValue>) {
        match &self.storage {
            Storage::Boxed(elements) | Storage::Tagged { elements, .. } => {
                out.extend_from_slice(elements);
            }
            Storage::Fixed(_) => {
                for index in 0..self.len() {
                    out.push(self.value_at(index));
                }
            }
        }
    }
}
