//! Destination regions and their division across workers.
//!
//! A [`Fragment`] is a rectangle of packed pixels inside a caller-owned
//! buffer. Dividing one splits the buffer itself, so every worker holds an
//! exclusive `&mut` slice and pixel writes need no synchronization.

use crate::{RenderError, RenderResult};

/// A rectangular region of the destination image.
#[derive(Debug)]
pub struct Fragment<'a> {
    buf: &'a mut [u32],
    /// X coordinate of the fragment's top-left corner within the frame
    pub x: u32,
    /// Y coordinate of the fragment's top-left corner within the frame
    pub y: u32,
    /// Width of the fragment in pixels
    pub width: u32,
    /// Height of the fragment in pixels
    pub height: u32,
    /// Padding pixels between the end of one row and the start of the next
    pub stride: u32,
}

/// Pixels needed to hold `height` rows of `width` with `stride` padding.
///
/// The last row's padding is optional.
fn required_len(width: u32, height: u32, stride: u32) -> usize {
    if height == 0 {
        return 0;
    }
    (height as usize - 1) * (width as usize + stride as usize) + width as usize
}

impl<'a> Fragment<'a> {
    /// Wrap a whole destination buffer as a fragment at (0, 0).
    pub fn new(buf: &'a mut [u32], width: u32, height: u32, stride: u32) -> RenderResult<Self> {
        let required = required_len(width, height, stride);
        if buf.len() < required {
            return Err(RenderError::BufferTooSmall {
                required,
                actual: buf.len(),
            });
        }

        Ok(Self {
            buf,
            x: 0,
            y: 0,
            width,
            height,
            stride,
        })
    }

    /// Place this fragment at (x, y) within a larger frame.
    pub fn at(mut self, x: u32, y: u32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Distance in pixels between the starts of consecutive rows.
    #[inline]
    pub fn pitch(&self) -> usize {
        self.width as usize + self.stride as usize
    }

    pub fn buf_mut(&mut self) -> &mut [u32] {
        &mut self.buf[..]
    }

    /// Split into exactly `n` row bands covering this fragment once.
    ///
    /// Bands are as even as possible; when there are fewer rows than
    /// bands the trailing bands are empty. `n == 0` is treated as 1.
    pub fn divide(self, n: usize) -> Vec<Fragment<'a>> {
        let Fragment {
            buf,
            x,
            y,
            width,
            height,
            stride,
        } = self;
        let pitch = width as usize + stride as usize;

        let mut rest = buf;
        let mut fragments = Vec::with_capacity(n.max(1));
        for (offset, rows) in slice_rows(height, n) {
            let take = (rows as usize * pitch).min(rest.len());
            let (band, tail) = std::mem::take(&mut rest).split_at_mut(take);
            rest = tail;

            fragments.push(Fragment {
                buf: band,
                x,
                y: y + offset,
                width,
                height: rows,
                stride,
            });
        }

        fragments
    }
}

/// Row bands `(y_offset, rows)` for dividing `height` rows among `n`.
///
/// The first `height % n` bands get one extra row.
pub fn slice_rows(height: u32, n: usize) -> Vec<(u32, u32)> {
    let n = n.max(1) as u32;
    let base = height / n;
    let extra = height % n;

    let mut bands = Vec::with_capacity(n as usize);
    let mut offset = 0;
    for i in 0..n {
        let rows = base + u32::from(i < extra);
        bands.push((offset, rows));
        offset += rows;
    }
    bands
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENTINEL: u32 = 0xDEAD_BEEF;

    #[test]
    fn test_slice_rows_exact_fit() {
        assert_eq!(slice_rows(12, 4), vec![(0, 3), (3, 3), (6, 3), (9, 3)]);
    }

    #[test]
    fn test_slice_rows_uneven() {
        assert_eq!(slice_rows(10, 4), vec![(0, 3), (3, 3), (6, 2), (8, 2)]);
        assert_eq!(slice_rows(2, 4), vec![(0, 1), (1, 1), (2, 0), (2, 0)]);
    }

    #[test]
    fn test_slice_rows_cover_every_row_once() {
        for height in 1..40 {
            for n in 1..17 {
                let bands = slice_rows(height, n);
                assert_eq!(bands.len(), n);

                let mut next = 0;
                for &(offset, rows) in &bands {
                    assert_eq!(offset, next, "height={height} n={n}");
                    next += rows;
                }
                assert_eq!(next, height, "height={height} n={n}");
            }
        }
    }

    #[test]
    fn test_new_rejects_short_buffer() {
        let mut buf = vec![0u32; 10 * 4 + 9];
        let err = Fragment::new(&mut buf, 10, 5, 0).unwrap_err();
        assert!(matches!(
            err,
            RenderError::BufferTooSmall {
                required: 50,
                actual: 49
            }
        ));
    }

    #[test]
    fn test_new_allows_missing_trailing_stride() {
        let mut buf = vec![0u32; (10 + 2) * 4 + 10];
        assert!(Fragment::new(&mut buf, 10, 5, 2).is_ok());
    }

    #[test]
    fn test_divide_is_disjoint_and_covering() {
        for (width, height, stride) in [(7, 13, 0), (5, 3, 2), (1, 1, 0), (16, 9, 3)] {
            for n in 1..9 {
                let pitch = width as usize + stride as usize;
                let mut buf = vec![SENTINEL; pitch * height as usize];

                let fragment = Fragment::new(&mut buf, width, height, stride).unwrap();
                let fragments = fragment.divide(n);
                assert_eq!(fragments.len(), n);

                // stamp each pixel with the id of the fragment that owns it
                for (id, mut fragment) in fragments.into_iter().enumerate() {
                    let (w, h, pitch) = (fragment.width as usize, fragment.height as usize, fragment.pitch());
                    let band = fragment.buf_mut();
                    for row in 0..h {
                        for col in 0..w {
                            let pixel = &mut band[row * pitch + col];
                            assert_eq!(*pixel, SENTINEL, "pixel written twice");
                            *pixel = id as u32;
                        }
                    }
                }

                let bands = slice_rows(height, n);
                for row in 0..height as usize {
                    let owner = bands
                        .iter()
                        .position(|&(offset, rows)| (offset..offset + rows).contains(&(row as u32)))
                        .unwrap() as u32;
                    for col in 0..pitch {
                        let pixel = buf[row * pitch + col];
                        if col < width as usize {
                            assert_eq!(pixel, owner);
                        } else {
                            assert_eq!(pixel, SENTINEL, "padding touched");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_divide_keeps_absolute_offsets() {
        let mut buf = vec![0u32; 8 * 6];
        let fragment = Fragment::new(&mut buf, 8, 6, 0).unwrap().at(16, 10);

        let fragments = fragment.divide(3);
        let origins: Vec<(u32, u32)> = fragments.iter().map(|f| (f.x, f.y)).collect();
        assert_eq!(origins, vec![(16, 10), (16, 12), (16, 14)]);
        assert!(fragments.iter().all(|f| f.width * f.height == 16));
    }
}
