//! Representation-preserving sequence concatenation.

use lamina_common::Result;
use lamina_common::error::Error;

use crate::boxed::BoxedValue;
use crate::kind::{ElementKind, FixedElement};
use crate::sequence::{Sequence, Storage};
use crate::values::Values;

/// Concatenates sequence operands into one newly allocated sequence holding
/// every element in operand order.
///
/// The result keeps the representation of the first operand. A generic
/// first operand selects the representation-agnostic path: every operand is
/// flattened into its ordered boxed-element view, and mixed operand kinds
/// are accepted. Any other first operand selects the fixed-width path,
/// which allocates storage of the first operand's family (including its
/// storage tag, for emulated kinds) and requires kind homogeneity across
/// operands; a mismatch is reported as an error.
///
/// At least one operand is required. Operands are never modified, and the
/// result never shares backing storage with them.
pub fn concat(operands: &[&Sequence]) -> Result<Sequence> {
    lamina_common::verify_arg!(operands, !operands.is_empty());
    match operands[0].kind() {
        ElementKind::Generic => Ok(concat_boxed(operands)),
        _ => concat_primitive(operands),
    }
}

/// Generic path: the ordered boxed-element view of every operand.
fn concat_boxed(operands: &[&Sequence]) -> Sequence {
    let total: usize = operands.iter().map(|operand| operand.len()).sum();
    let mut elements: Vec<BoxedValue> = Vec::with_capacity(total);
    for operand in operands {
        operand.push_boxed_into(&mut elements);
    }
    Sequence::generic(elements)
}

/// Fixed-width and tagged path: same storage family as the first operand.
fn concat_primitive(operands: &[&Sequence]) -> Result<Sequence> {
    let first = operands[0];
    for operand in &operands[1..] {
        if operand.kind() != first.kind() {
            return Err(Error::kind_mismatch(
                first.kind().to_string(),
                operand.kind().to_string(),
            ));
        }
    }

    match first.storage() {
        Storage::Tagged { tag, .. } => {
            let total: usize = operands.iter().map(|operand| operand.len()).sum();
            let mut elements: Vec<BoxedValue> = Vec::with_capacity(total);
            for operand in operands {
                elements.extend_from_slice(operand.boxed_elements());
            }
            Ok(Sequence::tagged(*tag, elements))
        }
        Storage::Fixed(_) => concat_fixed(operands, first.kind()),
        // A generic first operand never reaches this path.
        Storage::Boxed(_) => lamina_common::unmatched_branch!(),
    }
}

/// Dispatches the fixed-width copy over the closed set of buffer kinds.
fn concat_fixed(operands: &[&Sequence], kind: ElementKind) -> Result<Sequence> {
    match kind {
        ElementKind::Byte => Ok(concat_values::<i8>(operands)),
        ElementKind::Short => Ok(concat_values::<i16>(operands)),
        ElementKind::Int => Ok(concat_values::<i32>(operands)),
        ElementKind::Float => Ok(concat_values::<f32>(operands)),
        ElementKind::Double => Ok(concat_values::<f64>(operands)),
        _ => lamina_common::unmatched_branch!(),
    }
}

fn concat_values<T>(operands: &[&Sequence]) -> Sequence
where
    T: FixedElement,
{
    let total: usize = operands.iter().map(|operand| operand.len()).sum();
    let mut values = Values::with_byte_capacity(total * std::mem::size_of::<T>());
    for operand in operands {
        values.extend_from_slice(operand.as_slice::<T>());
    }
    Sequence::from_fixed_values(T::KIND, values)
}
