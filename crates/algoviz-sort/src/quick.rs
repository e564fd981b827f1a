use algoviz_core::Result;

use crate::{SortStep, SortStepper};

/// Quick sort with the Lomuto partition scheme (last element as pivot).
///
/// Each pivot is finalized as soon as it lands; singleton ranges are
/// finalized when reached.
pub fn quick_sort<T: PartialOrd>(a: &mut [T], st: &mut SortStepper<'_, T>) -> Result<()> {
    if a.is_empty() {
        return Ok(());
    }
    quick_range(a, 0, a.len() - 1, st)
}

fn quick_range<T: PartialOrd>(
    a: &mut [T],
    low: usize,
    high: usize,
    st: &mut SortStepper<'_, T>,
) -> Result<()> {
    if low >= high {
        if low == high {
            st.mark(SortStep::Finalize(low));
        }
        return Ok(());
    }

    let pivot = partition(a, low, high, st)?;
    st.mark(SortStep::Finalize(pivot));
    if pivot > 0 {
        quick_range(a, low, pivot - 1, st)?;
    }
    quick_range(a, pivot + 1, high, st)
}

/// Partition `[low, high]` around `a[high]`; returns the pivot's final slot.
fn partition<T: PartialOrd>(
    a: &mut [T],
    low: usize,
    high: usize,
    st: &mut SortStepper<'_, T>,
) -> Result<usize> {
    // Next slot for an element smaller than the pivot. The pivot stays at
    // `high` until the final swap.
    let mut boundary = low;
    for j in low..high {
        st.emit(SortStep::Compare(j, high))?;
        if a[j] < a[high] {
            a.swap(boundary, j);
            st.step(SortStep::Swap(boundary, j))?;
            boundary += 1;
        }
    }
    a.swap(boundary, high);
    st.step(SortStep::Swap(boundary, high))?;
    Ok(boundary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{finalized, run};

    #[test]
    fn counts_every_swap() {
        let mut v = [5, 3, 8, 1];
        let (res, events, steps) = run(|st| quick_sort(&mut v, st));
        res.unwrap();
        assert_eq!(v, [1, 3, 5, 8]);
        // pivot 1 -> slot 0; then pivot 5: self-swap of 3, pivot swap.
        assert_eq!(steps, 3);
        assert_eq!(finalized(&events), vec![0, 2, 1, 3]);
    }

    #[test]
    fn compares_against_pivot_slot() {
        let mut v = [2, 1, 3];
        let (_, events, _) = run(|st| quick_sort(&mut v, st));
        assert_eq!(events[0], SortStep::Compare(0, 2));
        assert_eq!(events[1], SortStep::Swap(0, 0));
    }

    #[test]
    fn handles_duplicates_and_sorted_runs() {
        let mut v = [4, 4, 4, 1, 2, 3, 4];
        let (res, _, _) = run(|st| quick_sort(&mut v, st));
        res.unwrap();
        assert_eq!(v, [1, 2, 3, 4, 4, 4, 4]);
    }
}
