use crate::cell::{Cell, CellKind, Coord};
use crate::error::{DishError, DishResult};

/// The dish lattice: a fixed `width x height` grid where every coordinate
/// holds exactly one cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Lattice {
    /// Allocates a lattice of the given shape filled with empty cells.
    pub fn new(shape: (usize, usize)) -> DishResult<Lattice> {
        let (width, height) = shape;
        if width == 0 || height == 0 {
            return Err(DishError::InvalidShape { width, height });
        }

        let mut cells = Vec::with_capacity(width * height);
        cells.resize_with(width * height, Cell::default);

        Ok(Lattice {
            width,
            height,
            cells,
        })
    }

    pub fn get(&self, idx: Coord) -> DishResult<&Cell> {
        let offset = self.offset(idx)?;
        Ok(&self.cells[offset])
    }

    pub fn set(&mut self, idx: Coord, cell: Cell) -> DishResult<()> {
        let offset = self.offset(idx)?;
        self.cells[offset] = cell;
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, idx: Coord) -> bool {
        self.offset(idx).is_ok()
    }

    /// All cells with their coordinates, `x` major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> + '_ {
        let height = self.height;
        self.cells.iter().enumerate().map(move |(offset, cell)| {
            let x = (offset / height) as i64;
            let y = (offset % height) as i64;
            ((x, y), cell)
        })
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|cell| cell.kind() == kind).count()
    }

    fn offset(&self, idx: Coord) -> DishResult<usize> {
        let (x, y) = idx;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(DishError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok(x as usize * self.height + y as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::FoodCell;

    #[test]
    fn when_creating_a_lattice_every_coordinate_holds_an_empty_cell() {
        let lattice = Lattice::new((4, 3)).unwrap();

        assert_eq!(lattice.len(), 12);
        assert_eq!(lattice.shape(), (4, 3));
        for x in 0..4 {
            for y in 0..3 {
                assert_eq!(lattice.get((x, y)).unwrap(), &Cell::Empty);
            }
        }
    }

    #[test]
    fn when_creating_a_lattice_with_a_zero_dimension_an_invalid_shape_error_is_returned() {
        assert!(matches!(
            Lattice::new((0, 5)),
            Err(DishError::InvalidShape {
                width: 0,
                height: 5
            })
        ));
        assert!(matches!(
            Lattice::new((5, 0)),
            Err(DishError::InvalidShape { .. })
        ));
    }

    #[test]
    fn when_setting_a_cell_only_that_coordinate_changes() {
        let mut lattice = Lattice::new((3, 3)).unwrap();
        lattice.set((1, 2), Cell::Food(FoodCell::new(0, (1, 2)))).unwrap();

        assert_eq!(lattice.get((1, 2)).unwrap().kind(), CellKind::Food);
        assert_eq!(lattice.count(CellKind::Food), 1);
        assert_eq!(lattice.count(CellKind::Empty), 8);
    }

    #[test]
    fn when_accessing_outside_the_lattice_an_out_of_bounds_error_is_returned() {
        let mut lattice = Lattice::new((3, 2)).unwrap();

        assert!(matches!(
            lattice.get((3, 0)),
            Err(DishError::OutOfBounds { x: 3, y: 0, .. })
        ));
        assert!(matches!(
            lattice.get((0, 2)),
            Err(DishError::OutOfBounds { .. })
        ));
        assert!(matches!(
            lattice.set((-1, 0), Cell::Empty),
            Err(DishError::OutOfBounds { .. })
        ));
        assert!(!lattice.contains((0, -1)));
        assert!(lattice.contains((2, 1)));
    }

    #[test]
    fn when_iterating_the_lattice_coordinates_are_x_major() {
        let lattice = Lattice::new((2, 3)).unwrap();
        let coords: Vec<Coord> = lattice.iter().map(|(idx, _)| idx).collect();

        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }
}
