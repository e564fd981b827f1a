use algoviz_core::Result;

use crate::{SortStep, SortStepper};

/// Bubble sort: repeated adjacent compare-and-swap passes.
///
/// After pass `i` the slot `n-1-i` is final; slot 0 is finalized last.
pub fn bubble_sort<T: PartialOrd>(a: &mut [T], st: &mut SortStepper<'_, T>) -> Result<()> {
    let n = a.len();
    if n == 0 {
        return Ok(());
    }

    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            st.emit(SortStep::Compare(j, j + 1))?;
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                st.step(SortStep::Swap(j, j + 1))?;
            }
        }
        st.mark(SortStep::Finalize(n - 1 - i));
    }
    st.mark(SortStep::Finalize(0));
    Ok(())
}
