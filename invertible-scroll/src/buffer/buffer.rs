use super::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    pub fn new(width: u16, height: u16) -> Self {
        let cells = vec![Cell::default(); (width as usize) * (height as usize)];
        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if x < self.width && y < self.height {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Copy a `width` x `height` window of `src` starting at `(src_x, src_y)`
    /// into this buffer at `(dst_x, dst_y)`. Out-of-range cells are skipped.
    pub fn blit(
        &mut self,
        src: &Buffer,
        (src_x, src_y): (u16, u16),
        (dst_x, dst_y): (u16, u16),
        (width, height): (u16, u16),
    ) {
        for dy in 0..height {
            for dx in 0..width {
                let (Some(sx), Some(sy)) = (src_x.checked_add(dx), src_y.checked_add(dy)) else {
                    continue;
                };
                let (Some(tx), Some(ty)) = (dst_x.checked_add(dx), dst_y.checked_add(dy)) else {
                    continue;
                };
                if let Some(cell) = src.get(sx, sy) {
                    self.set(tx, ty, *cell);
                }
            }
        }
    }

    /// Mirror the buffer top to bottom.
    pub fn flip_vertical(&mut self) {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        let rows = self.height as usize;
        for y in 0..rows / 2 {
            let (top, bottom) = self.cells.split_at_mut((rows - 1 - y) * width);
            top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
        }
    }

    /// Mirror the buffer left to right.
    pub fn flip_horizontal(&mut self) {
        let width = self.width as usize;
        if width == 0 {
            return;
        }
        for row in self.cells.chunks_mut(width) {
            row.reverse();
        }
    }

    /// The characters of one row, skipping wide-character continuations.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y))
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.char)
            .collect()
    }

    /// All rows, one string per row.
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|y| self.row_text(y)).collect()
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}
