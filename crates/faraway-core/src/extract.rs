//! Feature extraction from save data.
//!
//! Each feature is copied out of the save buffer segment by segment into a
//! fixed-size slot array, then the layout's slot rotations are applied.

use strum::IntoEnumIterator;
use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::layout::{Feature, KEY_SLOTS};
use crate::save::SaveBuffer;

/// Level each key is found in, indexed by key slot
pub const KEY_LEVELS: [u8; KEY_SLOTS] = [3, 6, 7, 9, 11, 13, 16, 18];

/// Copy `count` bytes from `buffer[stream_offset..]` into `dest[dest_index..]`.
///
/// Nothing is copied if either range is out of bounds.
pub fn extract(
    buffer: &[u8],
    stream_offset: usize,
    dest: &mut [u8],
    dest_index: usize,
    count: usize,
) -> Result<()> {
    let src = stream_offset
        .checked_add(count)
        .and_then(|end| buffer.get(stream_offset..end))
        .ok_or(Error::OutOfRange {
            offset: stream_offset,
            count,
            len: buffer.len(),
        })?;

    let dest_len = dest.len();
    let dst = dest_index
        .checked_add(count)
        .and_then(|end| dest.get_mut(dest_index..end))
        .ok_or(Error::DestinationOutOfRange {
            index: dest_index,
            count,
            len: dest_len,
        })?;

    dst.copy_from_slice(src);
    Ok(())
}

/// Rotate the values at `indices` left by one position.
///
/// The value at `indices[1]` moves to `indices[0]`, and so on; the value
/// that was at `indices[0]` ends up at the last index. Fails without
/// touching `slots` if any index is past the end.
pub fn rotate_left(mut slots: Vec<u8>, indices: &[usize]) -> Result<Vec<u8>> {
    if let Some(&index) = indices.iter().find(|&&i| i >= slots.len()) {
        return Err(Error::DestinationOutOfRange {
            index,
            count: 1,
            len: slots.len(),
        });
    }

    let (Some(&first), Some(&last)) = (indices.first(), indices.last()) else {
        return Ok(slots);
    };

    let backup = slots[first];
    for pair in indices.windows(2) {
        slots[pair[0]] = slots[pair[1]];
    }
    slots[last] = backup;
    Ok(slots)
}

/// Pair each key slot with the level it belongs to: `(level, found)`
pub fn keys_by_level(keys: &FeatureArray) -> Vec<(u8, bool)> {
    KEY_LEVELS
        .iter()
        .enumerate()
        .map(|(slot, &level)| (level, keys.is_set(slot, 0x01)))
        .collect()
}

/// Slot values of one feature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureArray {
    feature: Feature,
    slots: Vec<u8>,
}

impl FeatureArray {
    /// Extract a feature from save data using its layout
    pub fn read(feature: Feature, save: &SaveBuffer) -> Result<Self> {
        let layout = feature.layout();
        let mut slots = vec![0u8; layout.slots];

        for seg in layout.segments {
            trace!(
                "{}: {} bytes at {:#x} -> slot {}",
                feature, seg.count, seg.stream_offset, seg.dest_index
            );
            extract(
                save.as_bytes(),
                seg.stream_offset,
                &mut slots,
                seg.dest_index,
                seg.count,
            )?;
        }

        for rotation in layout.rotations {
            slots = rotate_left(slots, rotation)?;
        }

        debug!("Extracted {}: {:02X?}", feature, slots);
        Ok(Self { feature, slots })
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn slots(&self) -> &[u8] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Check a slot against a mask. Out-of-range slots are unset.
    pub fn is_set(&self, index: usize, mask: u8) -> bool {
        self.slots.get(index).is_some_and(|b| b & mask != 0)
    }

    /// Number of slots with any bit of `mask` set
    pub fn count_set(&self, mask: u8) -> usize {
        self.slots.iter().filter(|&&b| b & mask != 0).count()
    }
}

impl Feature {
    /// All features in print order
    pub fn all() -> impl Iterator<Item = Feature> {
        Feature::iter()
    }

    pub fn read(&self, save: &SaveBuffer) -> Result<FeatureArray> {
        FeatureArray::read(*self, save)
    }
}
