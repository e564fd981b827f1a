/// An observable event of a sorting run. Indices are slots in the slice
/// being sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortStep<T> {
    /// Two slots are being compared.
    Compare(usize, usize),
    /// Two slots have exchanged values.
    Swap(usize, usize),
    /// A slot has been overwritten with `value`.
    Set { index: usize, value: T },
    /// A slot holds its final sorted value.
    Finalize(usize),
}

impl<T> SortStep<T> {
    /// Whether this event changes the sequence.
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Swap(..) | Self::Set { .. })
    }
}
