use crate::slime::Direction;
use serde::Serialize;
use std::collections::VecDeque;

/// A lattice coordinate `(x, y)`.
///
/// Signed so that neighbour arithmetic near the edges can step outside the
/// dish and be rejected by the bounds check instead of wrapping.
pub type Coord = (i64, i64);

/// Identifier of a food source: the row index in the food table.
pub type FoodId = usize;

/// Pheromone level reported by every food cell.
pub const FOOD_PHEROMONE: f64 = 10.0;

/// Pheromone cap of a freshly generated slime cell.
pub const INITIAL_MAX_PHEROMONE: f64 = 4.0;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum CellKind {
    Empty,
    Slime,
    Food,
}

/// A single unit of the dish lattice.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Cell {
    #[default]
    Empty,
    Slime(SlimeCell),
    Food(FoodCell),
}

impl Cell {
    pub fn pheromone(&self) -> f64 {
        match self {
            Cell::Empty => 0.0,
            Cell::Slime(slime) => slime.pheromone,
            Cell::Food(food) => food.pheromone,
        }
    }

    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Empty => CellKind::Empty,
            Cell::Slime(_) => CellKind::Slime,
            Cell::Food(_) => CellKind::Food,
        }
    }
}

/// A cell belonging to a placed food patch.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodCell {
    food_id: FoodId,
    food_idx: Coord,
    pheromone: f64,
}

impl FoodCell {
    pub fn new(food_id: FoodId, food_idx: Coord) -> FoodCell {
        FoodCell {
            food_id,
            food_idx,
            pheromone: FOOD_PHEROMONE,
        }
    }

    pub fn food_id(&self) -> FoodId {
        self.food_id
    }

    pub fn food_idx(&self) -> Coord {
        self.food_idx
    }

    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }
}

/// A cell occupied by the mould.
#[derive(Clone, Debug, PartialEq)]
pub struct SlimeCell {
    pub(crate) idx: Coord,
    pub(crate) pheromone: f64,
    pub(crate) max_ph: f64,
    pub(crate) direction: Option<Direction>,
    pub(crate) is_capital: bool,
    pub(crate) reached_food_id: Option<FoodId>,
    pub(crate) food_path: VecDeque<FoodId>,
    // (food id, anchor position) of the next food on the path
    pub(crate) step_food: Option<(FoodId, Coord)>,
    pub(crate) curr_target: Option<FoodId>,
}

impl SlimeCell {
    pub fn new(idx: Coord, pheromone: f64, is_capital: bool) -> SlimeCell {
        SlimeCell {
            idx,
            pheromone,
            max_ph: INITIAL_MAX_PHEROMONE,
            direction: None,
            is_capital,
            reached_food_id: None,
            food_path: VecDeque::new(),
            step_food: None,
            curr_target: None,
        }
    }

    pub fn idx(&self) -> Coord {
        self.idx
    }

    pub fn pheromone(&self) -> f64 {
        self.pheromone
    }

    pub fn set_pheromone(&mut self, pheromone: f64) {
        self.pheromone = pheromone;
    }

    pub fn max_pheromone(&self) -> f64 {
        self.max_ph
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn is_capital(&self) -> bool {
        self.is_capital
    }

    pub fn reached_food_id(&self) -> Option<FoodId> {
        self.reached_food_id
    }

    pub fn remove_capital(&mut self) {
        self.is_capital = false;
    }
}
