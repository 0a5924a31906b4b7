//! In-place ordering of a sequence by a derived key.
//!
//! Selection sort: for each position, scan the unsorted suffix for the
//! strictly smallest (or largest) key and exchange it into place. Ties keep
//! the first element found. Keys that do not order against each other (NaN,
//! values without a common type) never displace the current pick.

use crate::expression::LambdaResult;
use crate::query::callable::Projector;
use crate::query::sequence::Sequence;
use log::trace;

/// Direction of `order_by`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Whether `candidate` should move ahead of `current`
    fn prefers<K: PartialOrd>(self, candidate: &K, current: &K) -> bool {
        match self {
            SortOrder::Ascending => candidate < current,
            SortOrder::Descending => candidate > current,
        }
    }
}

/// Sort `container` in place by `key`, returning the number of exchanges made.
///
/// Keys are computed once per element before any element moves.
pub fn selection_sort<C, K, P>(container: &mut C, key: &P, order: SortOrder) -> LambdaResult<usize>
where
    C: Sequence,
    K: PartialOrd,
    P: Projector<C::Item, K>,
{
    let len = container.len();
    if len < 2 {
        return Ok(0);
    }

    let mut keys = container
        .elements()
        .map(|item| key.project(item))
        .collect::<LambdaResult<Vec<K>>>()?;

    let mut exchanges = 0;
    for position in 0..len - 1 {
        let mut pick = position;
        for candidate in position + 1..len {
            if order.prefers(&keys[candidate], &keys[pick]) {
                pick = candidate;
            }
        }

        if pick != position {
            trace!("order_by: exchanging positions {} and {}", position, pick);
            container.exchange(position, pick);
            keys.swap(position, pick);
            exchanges += 1;
        }
    }

    Ok(exchanges)
}
