//! Instrumented sorting algorithms.
//!
//! Every algorithm sorts a slice in place, ascending, while reporting each
//! comparison, swap and write through a [`Stepper`] so that a renderer can
//! replay it and a controller can pause or cancel it between steps:
//!
//! - **Bubble** ([`bubble_sort`])
//! - **Insertion** ([`insertion_sort`])
//! - **Merge** ([`merge_sort`]), stable
//! - **Quick** ([`quick_sort`]), Lomuto partition
//! - **Heap** ([`heap_sort`])
//!
//! Pick one at runtime through [`SortAlgorithm`].

mod bubble;
mod heap;
mod input;
mod insertion;
mod merge;
mod quick;
mod step;

use std::fmt;
use std::str::FromStr;

use algoviz_core::{Error, Result, Stepper};

pub use bubble::bubble_sort;
pub use heap::heap_sort;
pub use input::{MIN_LEN, RANDOM_LEN, RANDOM_VALUE, check_len, parse_values, random_values};
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use step::SortStep;

/// Stepper specialised to sorting events.
pub type SortStepper<'a, T> = Stepper<'a, SortStep<T>>;

/// The available sorting algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortAlgorithm {
    Bubble,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl SortAlgorithm {
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Insertion,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Short identifier, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
        }
    }

    /// Display title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
        }
    }

    /// Big-O time complexity (average case).
    pub fn time_complexity(self) -> &'static str {
        match self {
            Self::Bubble | Self::Insertion => "O(n^2)",
            Self::Merge | Self::Quick | Self::Heap => "O(n log n)",
        }
    }

    /// Sort `values` ascending in place, reporting through `st`.
    ///
    /// Fewer than [`MIN_LEN`] values is [`Error::InvalidInput`] and leaves
    /// `values` untouched. On [`Error::Cancelled`] the slice is left as a
    /// permutation of its input.
    pub fn sort<T: PartialOrd + Clone>(
        self,
        values: &mut [T],
        st: &mut SortStepper<'_, T>,
    ) -> Result<()> {
        check_len(values.len())?;
        log::debug!("{} on {} values", self.title(), values.len());
        let res = match self {
            Self::Bubble => bubble_sort(values, st),
            Self::Insertion => insertion_sort(values, st),
            Self::Merge => merge_sort(values, st),
            Self::Quick => quick_sort(values, st),
            Self::Heap => heap_sort(values, st),
        };
        log::debug!("{} finished after {} steps: {:?}", self.name(), st.steps(), res);
        res
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use algoviz_core::{Control, Recorder, RunState, Stepper};
    use proptest::prelude::*;

    use super::*;
    use crate::testutil::{finalized, run};

    #[test]
    fn parses_names() {
        assert_eq!("bubble".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Bubble);
        assert_eq!(" Heap ".parse::<SortAlgorithm>().unwrap(), SortAlgorithm::Heap);
        assert_eq!(
            "bogo".parse::<SortAlgorithm>().unwrap_err(),
            Error::UnknownAlgorithm("bogo".into())
        );
        for a in SortAlgorithm::ALL {
            assert_eq!(a.to_string().parse::<SortAlgorithm>().unwrap(), a);
        }
    }

    #[test]
    fn metadata() {
        assert_eq!(SortAlgorithm::Quick.title(), "Quick Sort");
        assert_eq!(SortAlgorithm::Insertion.time_complexity(), "O(n^2)");
        assert_eq!(SortAlgorithm::Merge.time_complexity(), "O(n log n)");
    }

    #[test]
    fn too_short_is_rejected_untouched() {
        for a in SortAlgorithm::ALL {
            let mut one = [42];
            let (res, events, _) = run(|st| a.sort(&mut one, st));
            assert!(matches!(res, Err(Error::InvalidInput(_))));
            assert!(events.is_empty());
            assert_eq!(one, [42]);
        }
    }

    #[test]
    fn every_index_is_finalized_once() {
        for a in SortAlgorithm::ALL {
            let mut v = vec![9, 4, 7, 1, 8, 2, 2, 6];
            let (res, events, _) = run(|st| a.sort(&mut v, st));
            res.unwrap();
            let mut fin = finalized(&events);
            fin.sort_unstable();
            assert_eq!(fin, (0..8).collect::<Vec<_>>(), "{a}");
        }
    }

    #[test]
    fn cancellation_leaves_a_permutation() {
        for a in SortAlgorithm::ALL {
            for stop_after in [1usize, 3, 7, 12] {
                let input = vec![12, 5, 9, 1, 5, 30, 2, 8, 7, 3];
                let mut v = input.clone();
                let control = Control::new();
                let state = RunState::new();
                let mut seen = 0usize;
                let mut sink = {
                    let control = control.clone();
                    move |_: &SortStep<i32>| {
                        seen += 1;
                        if seen == stop_after {
                            control.cancel();
                        }
                    }
                };
                let mut st = Stepper::new(&mut sink, &control, &state, Duration::ZERO);
                assert_eq!(a.sort(&mut v, &mut st), Err(Error::Cancelled), "{a}");

                let mut got = v.clone();
                let mut want = input.clone();
                got.sort_unstable();
                want.sort_unstable();
                assert_eq!(got, want, "{a} stopped after {stop_after} events");
            }
        }
    }

    #[test]
    fn recorded_steps_replay_to_sorted_output() {
        for a in SortAlgorithm::ALL {
            let input = vec![31, 4, 15, 9, 26, 5, 35, 8];
            let mut v = input.clone();
            let mut rec = Recorder::new();
            let control = Control::new();
            let state = RunState::new();
            let mut st = Stepper::new(&mut rec, &control, &state, Duration::ZERO);
            a.sort(&mut v, &mut st).unwrap();

            let mut view = input.clone();
            for e in &rec.events {
                match e {
                    SortStep::Swap(i, j) => view.swap(*i, *j),
                    SortStep::Set { index, value } => view[*index] = *value,
                    SortStep::Compare(..) | SortStep::Finalize(_) => {}
                }
            }
            assert_eq!(view, v, "{a}");
        }
    }

    proptest! {
        #[test]
        fn output_is_sorted_permutation(input in prop::collection::vec(-500i64..500, 2..40)) {
            for a in SortAlgorithm::ALL {
                let mut v = input.clone();
                let (res, _, _) = run(|st| a.sort(&mut v, st));
                prop_assert!(res.is_ok());
                let mut want = input.clone();
                want.sort();
                prop_assert_eq!(&v, &want);
            }
        }

        #[test]
        fn step_counts_are_deterministic(input in prop::collection::vec(0i64..100, 2..30)) {
            for a in SortAlgorithm::ALL {
                let mut first = input.clone();
                let mut second = input.clone();
                let (_, e1, s1) = run(|st| a.sort(&mut first, st));
                let (_, e2, s2) = run(|st| a.sort(&mut second, st));
                prop_assert_eq!(s1, s2);
                prop_assert_eq!(e1, e2);
            }
        }
    }
}
