use crate::types::{Offsets, RawTimes};

/// Adds each slot's minute offset. Unsolvable slots stay unsolvable.
pub fn tune_times(times: &RawTimes, offsets: &Offsets) -> RawTimes {
    times.map(|prayer, value| value.map(|h| h + offsets.get(prayer) / 60.0))
}
