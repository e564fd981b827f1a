use algoviz_core::Result;

use crate::{SortStep, SortStepper};

/// Heap sort: build a max-heap, then repeatedly move the root behind the
/// shrinking heap.
pub fn heap_sort<T: PartialOrd>(a: &mut [T], st: &mut SortStepper<'_, T>) -> Result<()> {
    let n = a.len();

    for i in (0..n / 2).rev() {
        sift_down(a, n, i, st)?;
    }

    for end in (1..n).rev() {
        a.swap(0, end);
        st.step(SortStep::Swap(0, end))?;
        st.mark(SortStep::Finalize(end));
        sift_down(a, end, 0, st)?;
    }

    if n > 0 {
        st.mark(SortStep::Finalize(0));
    }
    Ok(())
}

/// Restore the max-heap property below `root` within `a[..len]`.
fn sift_down<T: PartialOrd>(
    a: &mut [T],
    len: usize,
    mut root: usize,
    st: &mut SortStepper<'_, T>,
) -> Result<()> {
    loop {
        let left = 2 * root + 1;
        let right = 2 * root + 2;
        let mut largest = root;
        if left < len && a[left] > a[largest] {
            largest = left;
        }
        if right < len && a[right] > a[largest] {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }

        st.emit(SortStep::Compare(root, largest))?;
        a.swap(root, largest);
        st.step(SortStep::Swap(root, largest))?;
        root = largest;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{finalized, run};

    #[test]
    fn sorts_and_counts_swaps() {
        let mut v = [5, 3, 8, 1];
        let (res, _, steps) = run(|st| heap_sort(&mut v, st));
        res.unwrap();
        assert_eq!(v, [1, 3, 5, 8]);
        // One heapify swap, three root extractions, two sift-down swaps.
        assert_eq!(steps, 6);
    }

    #[test]
    fn finalizes_from_the_back() {
        let mut v = [2, 9, 4, 7];
        let (_, events, _) = run(|st| heap_sort(&mut v, st));
        assert_eq!(finalized(&events), vec![3, 2, 1, 0]);
    }

    #[test]
    fn build_phase_produces_max_heap() {
        let mut v = [1, 2, 3, 4, 5, 6, 7];
        let (_, events, _) = run(|st| heap_sort(&mut v, st));
        // The first extraction swaps the maximum out of the root.
        let first_extract = events
            .iter()
            .position(|e| *e == SortStep::Swap(0, 6))
            .unwrap();
        assert!(events[..first_extract].iter().all(|e| !matches!(e, SortStep::Finalize(_))));
        assert_eq!(v, [1, 2, 3, 4, 5, 6, 7]);
    }
}
