//! Save layout constants for Faraway: Director's Cut (`FarawaySave4.save`)
//!
//! This module centralizes the offset table used to pull progress data out
//! of the save file. Constants are organized by feature.
//!
//! No header or magic number is checked; any buffer long enough to cover
//! every segment is accepted.

use strum::{Display, EnumIter};

/// One contiguous run of save bytes copied into a feature array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Byte offset in the save file
    pub stream_offset: usize,
    /// First destination slot
    pub dest_index: usize,
    /// Number of bytes to copy
    pub count: usize,
}

impl Segment {
    pub const fn new(stream_offset: usize, dest_index: usize, count: usize) -> Self {
        Self {
            stream_offset,
            dest_index,
            count,
        }
    }

    /// First save offset past this segment
    pub const fn stream_end(&self) -> usize {
        self.stream_offset + self.count
    }
}

/// One rendered row of a feature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub label: &'static str,
    pub mask: u8,
}

impl View {
    pub const fn new(label: &'static str, mask: u8) -> Self {
        Self { label, mask }
    }
}

/// Full description of where a feature lives in the save file
#[derive(Debug, Clone, Copy)]
pub struct FeatureLayout {
    /// Number of slots in the destination array
    pub slots: usize,
    /// Segments, applied in order
    pub segments: &'static [Segment],
    /// Slot rotations applied after all segments, in order
    pub rotations: &'static [&'static [usize]],
    /// Rows rendered from this feature, in order
    pub views: &'static [View],
}

/// Number of per-level slots (index 0 plus levels 1-20)
pub const LEVEL_SLOTS: usize = 21;

/// Number of key slots
pub const KEY_SLOTS: usize = 8;

/// Level completion flags
pub mod levels {
    use super::*;

    pub const OFFSET: usize = 0x16;

    pub const LAYOUT: FeatureLayout = FeatureLayout {
        slots: LEVEL_SLOTS,
        segments: &[Segment::new(OFFSET, 1, 20)],
        rotations: &[],
        views: &[View::new("Levels", 0x01)],
    };
}

/// Collectible letters, three flags per level
pub mod letters {
    use super::*;

    pub const OFFSET: usize = 0x116;

    pub const LETTER_1: u8 = 0x01;
    pub const LETTER_2: u8 = 0x02;
    pub const LETTER_3: u8 = 0x04;

    pub const LAYOUT: FeatureLayout = FeatureLayout {
        slots: LEVEL_SLOTS,
        segments: &[Segment::new(OFFSET, 1, 20)],
        rotations: &[],
        views: &[
            View::new("Letter 1", LETTER_1),
            View::new("Letter 2", LETTER_2),
            View::new("Letter 3", LETTER_3),
        ],
    };
}

/// Slot rotations shared by pots and photos.
///
/// The save stores levels 2/3 and levels 5/6/8 out of order. The rotations
/// are a literal compatibility shim; the reason for the order is unknown.
pub const SWAPPED_SLOTS: &[&[usize]] = &[&[2, 3], &[5, 8, 6]];

/// Breakable pots, one per level
pub mod pots {
    use super::*;

    pub const SLOT_0: usize = 0x384;
    pub const SLOTS_1_TO_18: usize = 0x31F;
    pub const SLOTS_19_TO_20: usize = 0x36F;

    pub const LAYOUT: FeatureLayout = FeatureLayout {
        slots: LEVEL_SLOTS,
        segments: &[
            Segment::new(SLOT_0, 0, 1),
            Segment::new(SLOTS_1_TO_18, 1, 18),
            Segment::new(SLOTS_19_TO_20, 19, 2),
        ],
        rotations: SWAPPED_SLOTS,
        views: &[View::new("Pots", 0x01)],
    };
}

/// Photos, one per level (same shape as pots, 0x100 further in)
pub mod photos {
    use super::*;

    pub const SLOT_0: usize = 0x484;
    pub const SLOTS_1_TO_18: usize = 0x41F;
    pub const SLOTS_19_TO_20: usize = 0x46F;

    pub const LAYOUT: FeatureLayout = FeatureLayout {
        slots: LEVEL_SLOTS,
        segments: &[
            Segment::new(SLOT_0, 0, 1),
            Segment::new(SLOTS_1_TO_18, 1, 18),
            Segment::new(SLOTS_19_TO_20, 19, 2),
        ],
        rotations: SWAPPED_SLOTS,
        views: &[View::new("Photos", 0x01)],
    };
}

/// Keys
pub mod keys {
    use super::*;

    pub const OFFSET: usize = 0x216;

    pub const LAYOUT: FeatureLayout = FeatureLayout {
        slots: KEY_SLOTS,
        segments: &[Segment::new(OFFSET, 0, KEY_SLOTS)],
        rotations: &[],
        views: &[View::new("Keys", 0x01)],
    };
}

/// Progress categories, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Feature {
    Levels,
    Letters,
    Pots,
    Photos,
    Keys,
}

impl Feature {
    pub fn layout(&self) -> &'static FeatureLayout {
        match self {
            Self::Levels => &levels::LAYOUT,
            Self::Letters => &letters::LAYOUT,
            Self::Pots => &pots::LAYOUT,
            Self::Photos => &photos::LAYOUT,
            Self::Keys => &keys::LAYOUT,
        }
    }

    pub fn views(&self) -> &'static [View] {
        self.layout().views
    }
}

const ALL_LAYOUTS: [FeatureLayout; 5] = [
    levels::LAYOUT,
    letters::LAYOUT,
    pots::LAYOUT,
    photos::LAYOUT,
    keys::LAYOUT,
];

const fn furthest_segment_end(layouts: &[FeatureLayout]) -> usize {
    let mut end = 0;
    let mut i = 0;
    while i < layouts.len() {
        let segments = layouts[i].segments;
        let mut j = 0;
        while j < segments.len() {
            let seg_end = segments[j].stream_end();
            if seg_end > end {
                end = seg_end;
            }
            j += 1;
        }
        i += 1;
    }
    end
}

/// Smallest save buffer that covers every segment (photo slot 0 at 0x484)
///
/// This is 0x485, one less than the 0x486 often quoted for the format,
/// because no byte past photo slot 0 is ever read.
pub const MIN_SAVE_LEN: usize = furthest_segment_end(&ALL_LAYOUTS);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_min_save_len() {
        assert_eq!(MIN_SAVE_LEN, 0x485);
    }

    #[test]
    fn test_feature_order() {
        let order: Vec<Feature> = Feature::iter().collect();
        assert_eq!(
            order,
            vec![
                Feature::Levels,
                Feature::Letters,
                Feature::Pots,
                Feature::Photos,
                Feature::Keys
            ]
        );
    }

    #[test]
    fn test_view_labels_and_masks() {
        let views: Vec<(&str, u8)> = Feature::iter()
            .flat_map(|f| f.views().iter().map(|v| (v.label, v.mask)))
            .collect();
        assert_eq!(
            views,
            vec![
                ("Levels", 0x01),
                ("Letter 1", 0x01),
                ("Letter 2", 0x02),
                ("Letter 3", 0x04),
                ("Pots", 0x01),
                ("Photos", 0x01),
                ("Keys", 0x01),
            ]
        );
    }

    #[test]
    fn test_segments_fit_slots() {
        for feature in Feature::iter() {
            let layout = feature.layout();
            for seg in layout.segments {
                assert!(
                    seg.dest_index + seg.count <= layout.slots,
                    "{} segment overflows its array",
                    feature
                );
            }
            for rotation in layout.rotations {
                assert!(rotation.iter().all(|&i| i < layout.slots));
            }
        }
    }

    #[test]
    fn test_pots_and_photos_cover_every_slot() {
        for layout in [&pots::LAYOUT, &photos::LAYOUT] {
            let mut covered = [false; LEVEL_SLOTS];
            for seg in layout.segments {
                for slot in &mut covered[seg.dest_index..seg.dest_index + seg.count] {
                    assert!(!*slot);
                    *slot = true;
                }
            }
            assert!(covered.iter().all(|&c| c));
        }
    }

    #[test]
    fn test_feature_display() {
        assert_eq!(Feature::Photos.to_string(), "Photos");
        assert_eq!(Feature::Keys.to_string(), "Keys");
    }
}
