use std::num::NonZeroU32;
use std::ops::Range;

/// A contiguous run of rows rendered by one task.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Band {
    pub index: usize,
    pub start_row: u32,
    pub end_row: u32,
}

impl Band {
    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.start_row..self.end_row
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.end_row - self.start_row
    }
}

/// Splits `[0, height)` into `max_bands` bands of `height / max_bands` rows,
/// the last band taking the remainder. The band count is clamped to `height`
/// so no band is empty; a zero-height image yields no bands.
#[must_use]
pub fn calculate_row_bands(height: u32, max_bands: NonZeroU32) -> Vec<Band> {
    if height == 0 {
        return Vec::new();
    }

    let total_bands = max_bands.get().min(height);
    let band_height = height / total_bands;

    (0..total_bands)
        .map(|band_num| {
            let start_row = band_num * band_height;
            let end_row = if band_num == total_bands - 1 {
                height // Last band takes any remainder rows
            } else {
                start_row + band_height
            };

            Band {
                index: band_num as usize,
                start_row,
                end_row,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands(height: u32, max_bands: u32) -> Vec<Band> {
        calculate_row_bands(height, NonZeroU32::new(max_bands).unwrap())
    }

    fn assert_exact_cover(height: u32, bands: &[Band]) {
        let mut covered = vec![0u32; height as usize];

        for band in bands {
            for row in band.rows() {
                covered[row as usize] += 1;
            }
        }

        assert!(
            covered.iter().all(|&count| count == 1),
            "rows not covered exactly once for height {}: {:?}",
            height,
            covered
        );
    }

    #[test]
    fn test_zero_height_gives_no_bands() {
        assert!(bands(0, 4).is_empty());
    }

    #[test]
    fn test_single_band_covers_everything() {
        assert_eq!(
            bands(10, 1),
            vec![Band {
                index: 0,
                start_row: 0,
                end_row: 10
            }]
        );
    }

    #[test]
    fn test_last_band_takes_remainder() {
        let result = bands(10, 3);

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].rows(), 0..3);
        assert_eq!(result[1].rows(), 3..6);
        assert_eq!(result[2].rows(), 6..10);
    }

    #[test]
    fn test_more_bands_than_rows_is_clamped() {
        let result = bands(3, 8);

        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|band| band.height() == 1));
    }

    #[test]
    fn test_band_indices_are_sequential() {
        let result = bands(100, 7);

        for (i, band) in result.iter().enumerate() {
            assert_eq!(band.index, i);
        }
    }

    #[test]
    fn test_partition_covers_every_row_exactly_once() {
        for height in 0..=64 {
            for max_bands in 1..=17 {
                let result = bands(height, max_bands);
                assert_exact_cover(height, &result);
                assert!(result.iter().all(|band| band.height() > 0));
            }
        }
    }
}
