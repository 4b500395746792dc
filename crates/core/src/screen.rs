//! Screen: the glyph grid the rasterizer writes into.
//!
//! Pure data, row-major, no terminal I/O. The terminal layer reads rows
//! out of this and owns the actual escape-sequence encoding.

use crate::error::{Error, Result};

const BLANK: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Screen {
    /// Build a cleared screen. Zero dimensions are rejected.
    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidScreenSize);
        }

        let len = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![BLANK; len],
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Width over height. The glyph doubling applied on output is not
    /// part of this ratio; it works in logical pixels.
    pub fn aspect_ratio(&self) -> f32 {
        f32::from(self.width) / f32::from(self.height)
    }

    /// Whether a pixel coordinate lies inside the screen rectangle.
    ///
    /// Takes signed coordinates because triangle bounding boxes extend
    /// past the screen in any direction.
    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < i32::from(self.width) && y < i32::from(self.height)
    }

    /// Resize the screen, preserving the allocation when possible.
    ///
    /// Existing content is kept where the flat layout overlaps; new cells
    /// start blank. Zero dimensions are rejected.
    pub fn resize(&mut self, width: u16, height: u16) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidScreenSize);
        }
        if self.width == width && self.height == height {
            return Ok(());
        }

        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, BLANK);
        Ok(())
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Iterate the grid row by row, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.cells.chunks_exact(self.width as usize)
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, glyph: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = glyph;
        }
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Screen::new(0, 10).unwrap_err(), Error::InvalidScreenSize);
        assert_eq!(Screen::new(10, 0).unwrap_err(), Error::InvalidScreenSize);
        assert!(Screen::new(1, 1).is_ok());
    }

    #[test]
    fn new_screen_is_blank() {
        let screen = Screen::new(4, 3).unwrap();
        assert!(screen.cells().iter().all(|&c| c == ' '));
        assert_eq!(screen.cells().len(), 12);
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let screen = Screen::new(200, 100).unwrap();
        assert_eq!(screen.aspect_ratio(), 2.0);

        let square = Screen::new(300, 300).unwrap();
        assert_eq!(square.aspect_ratio(), 1.0);
    }

    #[test]
    fn is_inside_checks_the_full_rectangle() {
        let screen = Screen::new(10, 5).unwrap();
        assert!(screen.is_inside(0, 0));
        assert!(screen.is_inside(9, 4));
        assert!(!screen.is_inside(10, 4));
        assert!(!screen.is_inside(9, 5));
        assert!(!screen.is_inside(-1, 0));
        assert!(!screen.is_inside(0, -1));
    }

    #[test]
    fn set_get_round_trip_and_ignore_out_of_bounds() {
        let mut screen = Screen::new(3, 3).unwrap();
        screen.set(1, 2, '@');
        assert_eq!(screen.get(1, 2), Some('@'));
        assert_eq!(screen.get(3, 0), None);

        // Out-of-bounds writes are dropped.
        screen.set(3, 3, '@');
        assert_eq!(screen.cells().iter().filter(|&&c| c == '@').count(), 1);
    }

    #[test]
    fn clear_resets_all_cells() {
        let mut screen = Screen::new(3, 2).unwrap();
        screen.set(0, 0, '#');
        screen.set(2, 1, '#');
        screen.clear();
        assert!(screen.cells().iter().all(|&c| c == ' '));
    }

    #[test]
    fn resize_validates_and_adjusts_capacity() {
        let mut screen = Screen::new(4, 4).unwrap();
        assert_eq!(screen.resize(0, 4).unwrap_err(), Error::InvalidScreenSize);
        assert_eq!(screen.width(), 4);

        screen.resize(2, 3).unwrap();
        assert_eq!((screen.width(), screen.height()), (2, 3));
        assert_eq!(screen.cells().len(), 6);

        screen.resize(8, 2).unwrap();
        assert_eq!(screen.cells().len(), 16);
    }

    #[test]
    fn rows_iterates_row_major() {
        let mut screen = Screen::new(2, 2).unwrap();
        screen.set(0, 0, 'a');
        screen.set(1, 0, 'b');
        screen.set(0, 1, 'c');
        screen.set(1, 1, 'd');

        let rows: Vec<&[char]> = screen.rows().collect();
        assert_eq!(rows, vec![&['a', 'b'][..], &['c', 'd'][..]]);
    }
}
