use crate::cell::{Cell, CellKind, Coord, FoodCell, FoodId};
use crate::error::DishResult;
use crate::food::FoodSource;
use crate::food_graph::FoodGraph;
use crate::lattice::Lattice;
use crate::pheromone::PheromoneField;
use std::collections::{BTreeMap, HashSet};
use tracing::{debug, info};

/// The petri dish: the lattice, the food catalogue and the food graph.
///
/// A mould only changes the dish through [`Dish::set_lattice`] and
/// [`Dish::add_food_edge`]; everything else is read-only.
#[derive(Clone, Debug)]
pub struct Dish {
    lattice: Lattice,
    dish_size: usize,
    all_foods: BTreeMap<FoodId, Vec<FoodCell>>,
    all_foods_idx: Vec<Coord>,
    food_idx_set: HashSet<Coord>,
    food_positions: BTreeMap<FoodId, Coord>,
    food_graph: FoodGraph,
}

impl Dish {
    /// Creates a dish of the given shape and stamps the food table into it.
    ///
    /// # Arguments
    /// * `dish_shape` - The `(width, height)` of the lattice. Both must be positive.
    /// * `foods` - The food table. Row `i` becomes food id `i`.
    pub fn new(dish_shape: (usize, usize), foods: &[FoodSource]) -> DishResult<Dish> {
        let lattice = Lattice::new(dish_shape)?;
        let dish_size = dish_shape.0 * dish_shape.1;

        let mut dish = Dish {
            lattice,
            dish_size,
            all_foods: BTreeMap::new(),
            all_foods_idx: Vec::new(),
            food_idx_set: HashSet::new(),
            food_positions: BTreeMap::new(),
            food_graph: FoodGraph::new(),
        };
        dish.initialise_food(foods)?;

        info!(
            width = dish_shape.0,
            height = dish_shape.1,
            foods = foods.len(),
            food_cells = dish.lattice.count(CellKind::Food),
            "dish created"
        );

        Ok(dish)
    }

    fn initialise_food(&mut self, foods: &[FoodSource]) -> DishResult<()> {
        for (food_id, food) in foods.iter().enumerate() {
            self.food_positions.insert(food_id, food.anchor());

            // Later rows overwrite earlier ones in the lattice, but every row
            // keeps its own bookkeeping of the coordinates it stamped.
            for food_idx in food.patch() {
                let food_cell = FoodCell::new(food_id, food_idx);
                self.lattice.set(food_idx, Cell::Food(food_cell.clone()))?;

                self.all_foods_idx.push(food_idx);
                self.food_idx_set.insert(food_idx);
                self.all_foods.entry(food_id).or_default().push(food_cell);
            }
        }

        self.food_graph
            .add_nodes_from(self.food_positions.keys().copied());

        Ok(())
    }

    /// Current pheromone level of every cell. Computed on every call.
    pub fn pheromones(&self) -> PheromoneField {
        let values = self.lattice.iter().map(|(_, cell)| cell.pheromone()).collect();
        PheromoneField::new(self.lattice.width(), self.lattice.height(), values)
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn cell(&self, idx: Coord) -> DishResult<&Cell> {
        self.lattice.get(idx)
    }

    /// Replaces the cell at `idx`.
    pub fn set_lattice(&mut self, idx: Coord, cell: Cell) -> DishResult<()> {
        self.lattice.set(idx, cell)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.lattice.shape()
    }

    pub fn dish_size(&self) -> usize {
        self.dish_size
    }

    /// Food cells placed per food id. Ids whose patch was empty are absent.
    pub fn all_foods(&self) -> &BTreeMap<FoodId, Vec<FoodCell>> {
        &self.all_foods
    }

    /// Every placed food coordinate in placement order, overlaps included.
    pub fn all_foods_idx(&self) -> &[Coord] {
        &self.all_foods_idx
    }

    pub fn is_food_idx(&self, idx: Coord) -> bool {
        self.food_idx_set.contains(&idx)
    }

    pub fn food_position(&self, food_id: FoodId) -> Option<Coord> {
        self.food_positions.get(&food_id).copied()
    }

    pub fn food_positions(&self) -> &BTreeMap<FoodId, Coord> {
        &self.food_positions
    }

    pub fn food_nodes(&self) -> Vec<FoodId> {
        self.food_graph.nodes()
    }

    pub fn food_graph(&self) -> &FoodGraph {
        &self.food_graph
    }

    /// Records that the mould connected two food sources.
    pub fn add_food_edge(&mut self, source: FoodId, target: FoodId) {
        if !self.food_graph.has_edge(source, target) {
            debug!(source, target, "food edge added");
        }
        self.food_graph.add_edge(source, target);
    }
}
