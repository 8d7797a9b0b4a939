// Random integer sequences for the sorting family

use crate::engine::errors::EngineError;
use rand::rngs::StdRng;
use rand::Rng;

/// Smallest array the sorting procedures accept.
pub const MIN_ARRAY_SIZE: usize = 5;
/// Largest array the sorting procedures accept.
pub const MAX_ARRAY_SIZE: usize = 100;

/// View annotation for one array slot.
///
/// Statuses drive rendering only; they never affect ordering semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementStatus {
    Default,
    Comparing,
    Sorted,
    Pivot,
}

/// One slot of the working array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayElement {
    pub value: i32,
    pub status: ElementStatus,
}

impl ArrayElement {
    pub fn new(value: i32) -> Self {
        ArrayElement {
            value,
            status: ElementStatus::Default,
        }
    }
}

/// Generate `size` elements with values sampled independently from [1, 100].
pub fn generate_array(size: usize, rng: &mut StdRng) -> Result<Vec<ArrayElement>, EngineError> {
    if !(MIN_ARRAY_SIZE..=MAX_ARRAY_SIZE).contains(&size) {
        return Err(EngineError::InvalidArraySize { size });
    }

    Ok((0..size)
        .map(|_| ArrayElement::new(rng.gen_range(1..=100)))
        .collect())
}
