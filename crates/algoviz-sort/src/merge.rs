use algoviz_core::Result;

use crate::{SortStep, SortStepper};

/// Top-down merge sort. Stable: equal elements keep their input order.
///
/// Every write back from the merge buffer is one counted step.
pub fn merge_sort<T: PartialOrd + Clone>(
    a: &mut [T],
    st: &mut SortStepper<'_, T>,
) -> Result<()> {
    let n = a.len();
    if n > 1 {
        sort_range(a, 0, n - 1, st)?;
    }
    for i in 0..n {
        st.mark(SortStep::Finalize(i));
    }
    Ok(())
}

/// Sort the inclusive range `[l, r]`.
fn sort_range<T: PartialOrd + Clone>(
    a: &mut [T],
    l: usize,
    r: usize,
    st: &mut SortStepper<'_, T>,
) -> Result<()> {
    if l >= r {
        return Ok(());
    }
    let m = l + (r - l) / 2;
    sort_range(a, l, m, st)?;
    sort_range(a, m + 1, r, st)?;
    merge(a, l, m, r, st)
}

/// Merge the sorted runs `[l, m]` and `[m+1, r]`.
fn merge<T: PartialOrd + Clone>(
    a: &mut [T],
    l: usize,
    m: usize,
    r: usize,
    st: &mut SortStepper<'_, T>,
) -> Result<()> {
    let mut buf = Vec::with_capacity(r - l + 1);
    let (mut i, mut j) = (l, m + 1);

    while i <= m && j <= r {
        st.emit(SortStep::Compare(i, j))?;
        // `<=` takes from the left run on ties.
        if a[i] <= a[j] {
            buf.push(a[i].clone());
            i += 1;
        } else {
            buf.push(a[j].clone());
            j += 1;
        }
    }
    buf.extend_from_slice(&a[i..=m]);
    buf.extend_from_slice(&a[j..=r]);

    for (p, value) in buf.iter().enumerate() {
        a[l + p] = value.clone();
        let written = SortStep::Set {
            index: l + p,
            value: value.clone(),
        };
        if let Err(e) = st.step(written) {
            // Finish the write-back so the slice stays a permutation.
            a[l + p + 1..=r].clone_from_slice(&buf[p + 1..]);
            return Err(e);
        }
    }
    Ok(())
}
