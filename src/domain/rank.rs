//! Rank-order events for one trial.
//!
//! A trial is a group of values where index 0 is "me". Ranks are
//! 0-indexed positions in the ascending order of the group. With ties,
//! my rank is the position of my first occurrence, i.e. how many values
//! are strictly below mine.

/// Which events one trial produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankEvents {
    /// Nobody is strictly below me.
    pub youngest: bool,
    /// Nobody is strictly above me.
    pub oldest: bool,
    /// My rank is at or above the median position.
    pub at_least_median: bool,
}

/// Rank position counted as "at least median" for a group of `group_size`.
#[inline]
pub const fn median_rank(group_size: usize) -> usize {
    group_size / 2
}

/// My 0-indexed rank in ascending order, or `None` for an empty group.
pub fn rank_of_first(values: &[f64]) -> Option<usize> {
    let (&me, _) = values.split_first()?;
    Some(values.iter().filter(|&&v| v < me).count())
}

/// Classify one trial. Returns `None` for an empty group.
pub fn classify(values: &[f64]) -> Option<RankEvents> {
    let below = rank_of_first(values)?;
    let me = values[0];
    let above = values.iter().filter(|&&v| v > me).count();

    Some(RankEvents {
        youngest: below == 0,
        oldest: above == 0,
        at_least_median: below >= median_rank(values.len()),
    })
}

/// Exact probability of being strictly extremal (youngest or oldest)
/// among `group_size` i.i.d. continuous draws.
#[allow(clippy::cast_precision_loss)]
pub fn analytic_extremal(group_size: usize) -> f64 {
    if group_size == 0 {
        return 0.0;
    }
    1.0 / group_size as f64
}

/// Exact probability of a rank at or above [`median_rank`] for
/// continuous draws: every rank is equally likely.
#[allow(clippy::cast_precision_loss)]
pub fn analytic_at_least_median(group_size: usize) -> f64 {
    if group_size == 0 {
        return 0.0;
    }
    (group_size - median_rank(group_size)) as f64 / group_size as f64
}
