use crate::descriptor::{OpDescriptor, RawOpDescriptor};

/// The sealed, process-lifetime descriptor sequence.
///
/// Built exactly once from the registered schemas; never mutated afterwards, so both the
/// Rust slice and its C mirror keep stable addresses for as long as the owner lives.
#[derive(Debug)]
pub(crate) struct Catalog {
    ops: Box<[OpDescriptor]>,
    raw: Box<[RawOpDescriptor]>,
}

impl Catalog {
    pub(crate) fn seal(ops: Vec<OpDescriptor>) -> Self {
        let ops = ops.into_boxed_slice();
        // `raw` borrows the heap buffers of `ops`; moving the boxes does not move them.
        let raw = ops.iter().map(OpDescriptor::raw).collect();
        Self { ops, raw }
    }

    pub(crate) fn ops(&self) -> &[OpDescriptor] {
        &self.ops
    }

    /// The C mirror of [`Catalog::ops`]; same length, same order.
    pub(crate) fn raw(&self) -> &[RawOpDescriptor] {
        &self.raw
    }

    pub(crate) fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether `op` is one of this catalog's own records (by address, not by value).
    pub(crate) fn contains(&self, op: &OpDescriptor) -> bool {
        self.ops.as_ptr_range().contains(&std::ptr::from_ref(op))
    }
}
