//! Generic "group by key, reduce a field" operation.
//!
//! Every aggregator in [`crate::rollups`] is one call to [`group_aggregate`]
//! with a different key selector, value selector and [`Reducer`].

use crate::models::AggregateRow;
use std::collections::BTreeMap;

/// Folds the values of one group into a single output.
pub trait Reducer {
    type Input;
    type Acc: Default;
    type Output;

    fn accumulate(&self, acc: &mut Self::Acc, value: Self::Input);

    /// `None` drops the group from the result.
    fn finish(&self, acc: Self::Acc) -> Option<Self::Output>;
}

/// Integer sum, widened to `u64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sum;

impl Reducer for Sum {
    type Input = u32;
    type Acc = u64;
    type Output = u64;

    fn accumulate(&self, acc: &mut u64, value: u32) {
        *acc += u64::from(value);
    }

    fn finish(&self, acc: u64) -> Option<u64> {
        Some(acc)
    }
}

/// Arithmetic mean at full `f64` precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

#[derive(Debug, Default)]
pub struct MeanAcc {
    sum: u64,
    count: u64,
}

impl Reducer for Mean {
    type Input = u32;
    type Acc = MeanAcc;
    type Output = f64;

    fn accumulate(&self, acc: &mut MeanAcc, value: u32) {
        acc.sum += u64::from(value);
        acc.count += 1;
    }

    fn finish(&self, acc: MeanAcc) -> Option<f64> {
        if acc.count == 0 {
            None
        } else {
            Some(acc.sum as f64 / acc.count as f64)
        }
    }
}

/// Group `items` by `group_key`, reduce `field` within each group.
///
/// Returns one row per distinct key present, ascending by key. An empty
/// input gives an empty result.
///
/// # Example
///
/// ```rust
/// use brd_data::grouping::{group_aggregate, Sum};
///
/// let items = [("b", 2u32), ("a", 1), ("b", 3)];
/// let rows = group_aggregate(&items, |(k, _)| *k, |(_, v)| *v, &Sum);
/// assert_eq!(rows.len(), 2);
/// assert_eq!((rows[0].key, rows[0].value), ("a", 1));
/// assert_eq!((rows[1].key, rows[1].value), ("b", 5));
/// ```
pub fn group_aggregate<T, K, G, F, R>(
    items: &[T],
    group_key: G,
    field: F,
    reducer: &R,
) -> Vec<AggregateRow<K, R::Output>>
where
    K: Ord,
    G: Fn(&T) -> K,
    F: Fn(&T) -> R::Input,
    R: Reducer,
{
    let mut groups: BTreeMap<K, R::Acc> = BTreeMap::new();
    for item in items {
        reducer.accumulate(groups.entry(group_key(item)).or_default(), field(item));
    }
    groups
        .into_iter()
        .filter_map(|(key, acc)| reducer.finish(acc).map(|value| AggregateRow { key, value }))
        .collect()
}
