use algoviz_core::Result;

use crate::{SortStep, SortStepper};

/// Insertion sort: grow a sorted prefix by shifting larger elements right.
///
/// Each shift is one counted step; placing the key is reported but not
/// counted. The prefix is only final once the last key is placed, so every
/// slot is finalized at the end.
pub fn insertion_sort<T: PartialOrd + Clone>(
    a: &mut [T],
    st: &mut SortStepper<'_, T>,
) -> Result<()> {
    let n = a.len();

    for i in 1..n {
        let key = a[i].clone();
        // `a[j]` is the hole the key will eventually fill.
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            if let Err(e) = st.emit(SortStep::Compare(j - 1, i)) {
                a[j] = key;
                return Err(e);
            }
            a[j] = a[j - 1].clone();
            j -= 1;
            let shifted = SortStep::Set {
                index: j + 1,
                value: a[j + 1].clone(),
            };
            if let Err(e) = st.step(shifted) {
                a[j] = key;
                return Err(e);
            }
        }
        a[j] = key.clone();
        st.mark(SortStep::Set { index: j, value: key });
    }

    for i in 0..n {
        st.mark(SortStep::Finalize(i));
    }
    Ok(())
}
