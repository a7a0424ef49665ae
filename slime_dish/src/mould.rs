use crate::cell::{Cell, Coord, FoodId, SlimeCell};
use crate::dish::Dish;
use crate::error::{DishError, DishResult};
use crate::slime::{distance, neighbours, within_boundary, Direction};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Pheromone above which a slime cell spreads into empty side neighbours.
const DIFFUSION_THRESHOLD: f64 = 3.5;
const DIFFUSION_DECAY_RATE: f64 = 1.26;
/// Side spreading only happens this close to an already reached food.
const DISTANCE_FOR_DIFFUSION_THRESHOLD: f64 = 55.0;
/// Pheromone above which a slime cell moves along its main direction.
const MOVING_THRESHOLD: f64 = 1.0;
const MAX_PH: f64 = 5.5;
const MAX_PH_INCREASE_STEP: f64 = 0.2;
/// Pheromone set on a slime cell that touches food.
const FED_PHEROMONE: f64 = 7.0;
const INITIAL_PHEROMONE: f64 = 4.0;
/// Steps without reaching new food before the mould switches target.
const TARGET_SWITCH_THRESHOLD: usize = 5;
/// Distance at which a slime cell moves on to the next food of its path.
const STEP_FOOD_REACHED_DISTANCE: f64 = 3.0;

/// A foraging agent living in a dish.
///
/// The agent advances one step at a time and may only change the dish
/// through [`Dish::set_lattice`] and [`Dish::add_food_edge`].
pub trait Mould {
    /// Advances the mould by one step.
    fn evolve(&mut self, dish: &mut Dish) -> DishResult<()>;

    /// Per-step history, if the mould keeps one.
    fn stats(&self) -> Option<&MouldStats> {
        None
    }
}

/// Parameters handed to the mould when it is placed in a dish.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MouldParams {
    /// Centre of the initial mould.
    pub start_loc: Coord,
    /// Half extent of the initial mould along `x` and `y`.
    pub mould_shape: Coord,
    /// Probability of seeding a slime cell at each coordinate of the initial mould.
    pub init_mould_coverage: f64,
    /// Rate at which a slime cell loses pheromone when it spreads.
    pub decay: f64,
    /// Seed for the mould's random choices.
    pub seed: u64,
}

impl Default for MouldParams {
    fn default() -> Self {
        Self {
            start_loc: (50, 50),
            mould_shape: (3, 3),
            init_mould_coverage: 1.0,
            decay: 0.2,
            seed: 0,
        }
    }
}

/// History of the mould, one entry per step.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MouldStats {
    /// Average pheromone of active cells (0 when none is active).
    pub avg_ph: Vec<f64>,
    pub total_num: Vec<usize>,
    /// Cells with pheromone above 1.
    pub total_active_num: Vec<usize>,
    pub total_inactive_num: Vec<usize>,
    pub total_reached_foods: Vec<usize>,
    /// Slime cells over dish size.
    pub coverage_ratio: Vec<f64>,
}

/// The slime mould: a set of slime cells that spreads pheromone towards a
/// target food and links the foods it reaches in the dish's food graph.
#[derive(Debug)]
pub struct SlimeMould {
    decay: f64,
    // Insertion order matters: cells step in the order they were created.
    slime_cells: Vec<Coord>,
    slime_set: HashSet<Coord>,
    reached_food_ids: BTreeSet<FoodId>,
    current_target: Option<(FoodId, Coord)>,
    nearest_connected_target: Option<FoodId>,
    capital: Option<Coord>,
    target_switch_count: usize,
    stats: MouldStats,
    rng: StdRng,
}

impl SlimeMould {
    /// Seeds a mould into `dish`.
    ///
    /// Slime cells are placed over the rectangle `start_loc ± mould_shape`
    /// with probability `init_mould_coverage`, skipping food. When nothing is
    /// seeded the start location itself is used.
    pub fn new(dish: &mut Dish, params: &MouldParams) -> DishResult<SlimeMould> {
        let mut mould = SlimeMould {
            decay: params.decay,
            slime_cells: Vec::new(),
            slime_set: HashSet::new(),
            reached_food_ids: BTreeSet::new(),
            current_target: None,
            nearest_connected_target: None,
            capital: None,
            target_switch_count: 0,
            stats: MouldStats::default(),
            rng: StdRng::seed_from_u64(params.seed),
        };
        mould.initialise(dish, params)?;
        Ok(mould)
    }

    fn initialise(&mut self, dish: &mut Dish, params: &MouldParams) -> DishResult<()> {
        let (sx, sy) = params.start_loc;
        let (mx, my) = params.mould_shape;

        // The whole rectangle is seeded, not only its four corners, so the
        // initial mould is one connected patch.
        for x in (sx - mx)..=(sx + mx) {
            for y in (sy - my)..=(sy + my) {
                if self.rng.gen::<f64>() < params.init_mould_coverage && !dish.is_food_idx((x, y))
                {
                    self.generate_slime_cell(dish, (x, y), None, 0.0, false)?;
                }
            }
        }

        if self.slime_cells.is_empty() {
            self.generate_slime_cell(dish, params.start_loc, None, 0.0, false)?;
        }

        self.setup_capital_slime(dish)?;
        self.update_target_food(dish)
    }

    pub fn slime_cells(&self) -> &[Coord] {
        &self.slime_cells
    }

    pub fn reached_food_ids(&self) -> &BTreeSet<FoodId> {
        &self.reached_food_ids
    }

    pub fn current_target(&self) -> Option<(FoodId, Coord)> {
        self.current_target
    }

    pub fn nearest_connected_target(&self) -> Option<FoodId> {
        self.nearest_connected_target
    }

    pub fn capital(&self) -> Option<Coord> {
        self.capital
    }

    fn update_slime_cell(&mut self, dish: &mut Dish, slime: SlimeCell) -> DishResult<()> {
        let idx = slime.idx;
        dish.set_lattice(idx, Cell::Slime(slime))?;
        if self.slime_set.insert(idx) {
            self.slime_cells.push(idx);
        }
        Ok(())
    }

    fn generate_slime_cell(
        &mut self,
        dish: &mut Dish,
        idx: Coord,
        pheromone: Option<f64>,
        decay: f64,
        is_capital: bool,
    ) -> DishResult<()> {
        let pheromone = pheromone.unwrap_or(INITIAL_PHEROMONE * (1.0 - decay));
        if is_capital {
            self.capital = Some(idx);
        }
        self.update_slime_cell(dish, SlimeCell::new(idx, pheromone, is_capital))
    }

    /// The slime cell currently at `idx`, if any.
    fn slime_at(dish: &Dish, idx: Coord) -> DishResult<Option<SlimeCell>> {
        match dish.cell(idx)? {
            Cell::Slime(slime) => Ok(Some(slime.clone())),
            _ => Ok(None),
        }
    }

    fn food_position(dish: &Dish, food_id: FoodId) -> DishResult<Coord> {
        dish.food_position(food_id)
            .ok_or(DishError::UnknownFood(food_id))
    }

    /// Slime cell at one corner of the mould: 0 the lowest coordinate,
    /// 1 the first cell on the largest `x`, 2 the first cell on the smallest
    /// `y`, 3 the highest coordinate.
    fn corner(&self, corner: usize) -> Option<Coord> {
        match corner {
            0 => self.slime_cells.iter().min().copied(),
            1 => {
                let max_x = self.slime_cells.iter().map(|(x, _)| *x).max()?;
                self.slime_cells.iter().find(|(x, _)| *x == max_x).copied()
            }
            2 => {
                let min_y = self.slime_cells.iter().map(|(_, y)| *y).min()?;
                self.slime_cells.iter().find(|(_, y)| *y == min_y).copied()
            }
            _ => self.slime_cells.iter().max().copied(),
        }
    }

    /// Picks a random corner whose cell has not touched food yet, falling
    /// back to the first corner tried.
    ///
    /// Skipping fed corners keeps a freshly picked capital from firing the
    /// capital-fed retarget on the very next step.
    fn pick_capital(&mut self, dish: &Dish) -> DishResult<Option<Coord>> {
        let mut corners = [0, 1, 2, 3];
        corners.shuffle(&mut self.rng);

        let mut fallback = None;
        for corner in corners {
            let Some(idx) = self.corner(corner) else {
                continue;
            };
            fallback.get_or_insert(idx);
            if let Some(slime) = Self::slime_at(dish, idx)? {
                if slime.reached_food_id.is_none() {
                    return Ok(Some(idx));
                }
            }
        }

        Ok(fallback)
    }

    fn setup_capital_slime(&mut self, dish: &mut Dish) -> DishResult<()> {
        if let Some(previous) = self.capital.take() {
            if let Some(mut slime) = Self::slime_at(dish, previous)? {
                slime.remove_capital();
                self.update_slime_cell(dish, slime)?;
            }
        }

        self.capital = self.pick_capital(dish)?;
        if let Some(idx) = self.capital {
            if let Some(mut slime) = Self::slime_at(dish, idx)? {
                slime.is_capital = true;
                self.update_slime_cell(dish, slime)?;
            }
            debug!(x = idx.0, y = idx.1, "capital slime selected");
        }

        Ok(())
    }

    /// Nearest food among `food_ids` from `idx`, ties going to the lowest id.
    fn find_nearest_food(
        dish: &Dish,
        idx: Coord,
        food_ids: impl IntoIterator<Item = FoodId>,
    ) -> DishResult<Option<(FoodId, f64)>> {
        let mut nearest: Option<(FoodId, f64)> = None;
        for food_id in food_ids {
            let dist = distance(idx, Self::food_position(dish, food_id)?);
            if nearest.map_or(true, |(_, min_dist)| dist < min_dist) {
                nearest = Some((food_id, dist));
            }
        }
        Ok(nearest)
    }

    /// Nearest reached food to `food_id`, excluding itself.
    fn find_nearest_connected_food(&self, dish: &Dish, food_id: FoodId) -> DishResult<Option<FoodId>> {
        let food_idx = Self::food_position(dish, food_id)?;
        let others = self
            .reached_food_ids
            .iter()
            .copied()
            .filter(|&reached| reached != food_id);
        Ok(Self::find_nearest_food(dish, food_idx, others)?.map(|(id, _)| id))
    }

    fn update_food_connection(&mut self, dish: &mut Dish, food_id: FoodId) -> DishResult<()> {
        if self.reached_food_ids.is_empty() {
            return Ok(());
        }

        self.nearest_connected_target = self.find_nearest_connected_food(dish, food_id)?;
        if let Some(nearest) = self.nearest_connected_target {
            if !dish.food_graph().has_edge(food_id, nearest) {
                dish.add_food_edge(food_id, nearest);
            }
        }
        Ok(())
    }

    fn update_target_food(&mut self, dish: &mut Dish) -> DishResult<()> {
        let Some(capital) = self.capital else {
            return Ok(());
        };

        let remaining: Vec<FoodId> = dish
            .all_foods()
            .keys()
            .copied()
            .filter(|food_id| !self.reached_food_ids.contains(food_id))
            .collect();

        let Some((target, _)) = Self::find_nearest_food(dish, capital, remaining)? else {
            return Ok(());
        };

        if self.current_target.map(|(id, _)| id) != Some(target) {
            debug!(target, "target food switched");
        }
        // Foods reached since the last retarget still need linking to the target.
        self.current_target = Some((target, Self::food_position(dish, target)?));
        self.nearest_connected_target = self.find_nearest_connected_food(dish, target)?;
        self.update_food_connection(dish, target)
    }

    fn set_reached_food_path(&self, dish: &Dish, slime: &mut SlimeCell) -> DishResult<()> {
        let Some((target, _)) = self.current_target else {
            return Ok(());
        };
        slime.curr_target = Some(target);

        if self.reached_food_ids.is_empty() {
            slime.food_path.push_back(target);
        } else {
            let nearest_reached =
                Self::find_nearest_food(dish, slime.idx, self.reached_food_ids.iter().copied())?
                    .map(|(id, _)| id);

            match (nearest_reached, self.nearest_connected_target) {
                (Some(start), Some(connected)) => {
                    slime.food_path = dish
                        .food_graph()
                        .shortest_path(start, connected)
                        .unwrap_or_else(|| vec![start])
                        .into();
                }
                (Some(start), None) => slime.food_path.push_back(start),
                _ => {}
            }
            slime.food_path.push_back(target);
        }

        if let Some(step_food) = slime.food_path.pop_front() {
            slime.step_food = Some((step_food, Self::food_position(dish, step_food)?));
        }
        Ok(())
    }

    fn reset_step_food(&self, dish: &Dish, slime: &mut SlimeCell) -> DishResult<()> {
        let current_target = self.current_target.map(|(id, _)| id);
        if slime.reached_food_id.is_some()
            && slime.reached_food_id == slime.curr_target
            && slime.curr_target == current_target
        {
            return Ok(());
        }

        match slime.step_food {
            Some((_, step_food_idx)) if !slime.food_path.is_empty() => {
                if distance(step_food_idx, slime.idx) < STEP_FOOD_REACHED_DISTANCE {
                    if let Some(next) = slime.food_path.pop_front() {
                        slime.step_food = Some((next, Self::food_position(dish, next)?));
                    }
                }
                Ok(())
            }
            _ => self.set_reached_food_path(dish, slime),
        }
    }

    /// Points the slime cell at its step food.
    fn sensory(&self, dish: &Dish, slime: &mut SlimeCell) -> DishResult<()> {
        let reached_step_food = match (slime.reached_food_id, slime.step_food) {
            (Some(reached), Some((step_food, _))) => reached == step_food,
            _ => false,
        };
        if slime.step_food.is_none() || reached_step_food {
            self.reset_step_food(dish, slime)?;
        }

        if let Some((_, food_idx)) = slime.step_food {
            if let Some(direction) = Direction::towards(slime.idx, food_idx) {
                slime.direction = Some(direction);
            }
        }
        Ok(())
    }

    /// Spreads the slime cell into its neighbourhood, main direction first.
    fn diffusion(&mut self, dish: &mut Dish, mut slime: SlimeCell) -> DishResult<()> {
        let decay = self.decay;
        let main_step = slime.direction.map(|direction| direction.step(slime.idx));

        let mut around = neighbours(slime.idx);
        if let Some(main_step) = main_step {
            around.retain(|&idx| idx != main_step);
            around.insert(0, main_step);
        }

        for neighbour in around {
            if !within_boundary(neighbour, dish.shape()) {
                continue;
            }
            let is_main = Some(neighbour) == main_step;
            let neighbour_cell = dish.cell(neighbour)?.clone();

            match neighbour_cell {
                Cell::Empty => {
                    if is_main && slime.pheromone > MOVING_THRESHOLD {
                        self.generate_slime_cell(
                            dish,
                            neighbour,
                            Some(slime.pheromone),
                            decay,
                            slime.is_capital,
                        )?;
                        slime.pheromone *= 1.0 - DIFFUSION_DECAY_RATE * decay;
                        slime.is_capital = false;
                        continue;
                    }

                    let near_reached_food = Self::find_nearest_food(
                        dish,
                        slime.idx,
                        self.reached_food_ids.iter().copied(),
                    )?
                    .map_or(true, |(_, dist)| dist < DISTANCE_FOR_DIFFUSION_THRESHOLD);

                    if slime.pheromone > DIFFUSION_THRESHOLD && near_reached_food {
                        self.generate_slime_cell(
                            dish,
                            neighbour,
                            Some(slime.pheromone / DIFFUSION_DECAY_RATE),
                            decay,
                            false,
                        )?;
                        slime.pheromone *= 1.0 - 2.0 * DIFFUSION_DECAY_RATE * decay;
                    }
                }
                Cell::Slime(mut neighbour_slime) => {
                    if is_main && slime.pheromone > MOVING_THRESHOLD {
                        let increased = neighbour_slime.pheromone + slime.pheromone / DIFFUSION_DECAY_RATE;
                        neighbour_slime.pheromone = increased.min(neighbour_slime.max_ph);
                        slime.pheromone /= DIFFUSION_DECAY_RATE;
                        self.update_slime_cell(dish, neighbour_slime.clone())?;
                    }

                    if neighbour_slime.pheromone > slime.pheromone && slime.max_ph < MAX_PH {
                        slime.max_ph += MAX_PH_INCREASE_STEP;
                        slime.pheromone += neighbour_slime.pheromone / 10.0;
                    }
                }
                Cell::Food(food) => {
                    slime.pheromone = FED_PHEROMONE;
                    slime.max_ph = FED_PHEROMONE;
                    slime.reached_food_id = Some(food.food_id());

                    if !self.reached_food_ids.contains(&food.food_id()) {
                        self.update_food_connection(dish, food.food_id())?;
                        self.reached_food_ids.insert(food.food_id());
                    }
                }
            }
        }

        self.update_slime_cell(dish, slime)
    }

    fn step_slime_cell(&mut self, dish: &mut Dish, idx: Coord) -> DishResult<()> {
        let Some(mut slime) = Self::slime_at(dish, idx)? else {
            return Ok(());
        };
        self.sensory(dish, &mut slime)?;
        self.diffusion(dish, slime)
    }

    fn update_slime(&mut self, dish: &mut Dish) -> DishResult<()> {
        let mut pheromones = Vec::with_capacity(self.slime_cells.len());
        for &idx in &self.slime_cells {
            if let Some(slime) = Self::slime_at(dish, idx)? {
                pheromones.push(slime.pheromone);
            }
        }

        let active: Vec<f64> = pheromones.iter().copied().filter(|&ph| ph > 1.0).collect();
        let average = if active.is_empty() {
            0.0
        } else {
            active.iter().sum::<f64>() / active.len() as f64
        };

        self.stats.avg_ph.push(average);
        self.stats.total_num.push(self.slime_cells.len());
        self.stats.total_active_num.push(active.len());
        self.stats
            .total_inactive_num
            .push(self.slime_cells.len() - active.len());
        self.stats.total_reached_foods.push(self.reached_food_ids.len());
        self.stats
            .coverage_ratio
            .push(self.slime_cells.len() as f64 / dish.dish_size() as f64);

        let capital_fed = match self.capital {
            Some(idx) => Self::slime_at(dish, idx)?.is_some_and(|slime| slime.reached_food_id.is_some()),
            None => false,
        };
        let target_reached = self
            .current_target
            .is_some_and(|(id, _)| self.reached_food_ids.contains(&id));

        if self.target_switch_count > TARGET_SWITCH_THRESHOLD || capital_fed || target_reached {
            self.target_switch_count = 0;
            self.setup_capital_slime(dish)?;
            self.update_target_food(dish)?;
        }
        Ok(())
    }
}

impl Mould for SlimeMould {
    /// Every slime cell present at the start of the step senses its step
    /// food and then diffuses. Cells created during the step wait for the
    /// next one.
    fn evolve(&mut self, dish: &mut Dish) -> DishResult<()> {
        let previous_reached_foods = self.reached_food_ids.len();

        for idx in self.slime_cells.clone() {
            self.step_slime_cell(dish, idx)?;
        }

        if self.reached_food_ids.len() == previous_reached_foods {
            self.target_switch_count += 1;
        }
        self.update_slime(dish)
    }

    fn stats(&self) -> Option<&MouldStats> {
        Some(&self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellKind;
    use crate::food::FoodSource;

    fn params(start_loc: Coord, mould_shape: Coord) -> MouldParams {
        MouldParams {
            start_loc,
            mould_shape,
            init_mould_coverage: 1.0,
            decay: 0.2,
            seed: 7,
        }
    }

    #[test]
    fn when_creating_a_mould_with_full_coverage_the_whole_start_rectangle_is_slime() {
        let mut dish = Dish::new((20, 20), &[FoodSource::new(15, 15, 2)]).unwrap();
        let mould = SlimeMould::new(&mut dish, &params((5, 5), (1, 1))).unwrap();

        assert_eq!(mould.slime_cells().len(), 9);
        for x in 4..=6 {
            for y in 4..=6 {
                assert_eq!(dish.cell((x, y)).unwrap().kind(), CellKind::Slime);
            }
        }
        assert_eq!(dish.cell((5, 5)).unwrap().pheromone(), INITIAL_PHEROMONE);
    }

    #[test]
    fn when_creating_a_mould_food_cells_are_not_covered() {
        let mut dish = Dish::new((20, 20), &[FoodSource::new(5, 5, 2)]).unwrap();
        let mould = SlimeMould::new(&mut dish, &params((5, 5), (1, 1))).unwrap();

        assert_eq!(mould.slime_cells().len(), 8);
        assert_eq!(dish.cell((5, 5)).unwrap().kind(), CellKind::Food);
    }

    #[test]
    fn when_creating_a_mould_with_zero_coverage_the_start_location_is_seeded() {
        let mut dish = Dish::new((20, 20), &[FoodSource::new(15, 15, 2)]).unwrap();
        let mut mould_params = params((5, 5), (2, 2));
        mould_params.init_mould_coverage = 0.0;
        let mould = SlimeMould::new(&mut dish, &mould_params).unwrap();

        assert_eq!(mould.slime_cells(), &[(5, 5)]);
        assert_eq!(mould.capital(), Some((5, 5)));
    }

    #[test]
    fn when_creating_a_mould_the_nearest_food_becomes_the_target() {
        let foods = [FoodSource::new(18, 18, 2), FoodSource::new(8, 8, 2)];
        let mut dish = Dish::new((20, 20), &foods).unwrap();
        let mould = SlimeMould::new(&mut dish, &params((4, 4), (1, 1))).unwrap();

        assert_eq!(mould.current_target(), Some((1, (8, 8))));
        assert!(mould.capital().is_some());
        assert!(mould.reached_food_ids().is_empty());
    }

    #[test]
    fn when_creating_a_mould_outside_the_dish_an_out_of_bounds_error_is_returned() {
        let mut dish = Dish::new((10, 10), &[FoodSource::new(5, 5, 2)]).unwrap();

        assert!(matches!(
            SlimeMould::new(&mut dish, &params((0, 0), (1, 1))),
            Err(DishError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn when_evolving_the_mould_grows_towards_its_target() {
        let mut dish = Dish::new((30, 30), &[FoodSource::new(20, 5, 2)]).unwrap();
        let mut mould = SlimeMould::new(&mut dish, &params((5, 5), (1, 1))).unwrap();
        let initial = mould.slime_cells().len();

        mould.evolve(&mut dish).unwrap();

        assert!(mould.slime_cells().len() > initial);
        assert!(mould.slime_cells().iter().any(|&(x, _)| x == 7));
    }

    #[test]
    fn when_evolving_statistics_are_recorded_once_per_step() {
        let mut dish = Dish::new((30, 30), &[FoodSource::new(20, 20, 2)]).unwrap();
        let mut mould = SlimeMould::new(&mut dish, &params((5, 5), (1, 1))).unwrap();

        for _ in 0..3 {
            mould.evolve(&mut dish).unwrap();
        }

        let stats = mould.stats().unwrap();
        assert_eq!(stats.total_num.len(), 3);
        assert_eq!(stats.coverage_ratio.len(), 3);
        for step in 0..3 {
            assert_eq!(
                stats.total_num[step],
                stats.total_active_num[step] + stats.total_inactive_num[step]
            );
            assert_eq!(
                stats.coverage_ratio[step],
                stats.total_num[step] as f64 / 900.0
            );
        }
    }

    #[test]
    fn when_a_slime_cell_touches_food_the_food_is_reached() {
        let mut dish = Dish::new((20, 20), &[FoodSource::new(7, 5, 2)]).unwrap();
        let mut mould = SlimeMould::new(&mut dish, &params((5, 5), (1, 1))).unwrap();

        mould.evolve(&mut dish).unwrap();

        assert!(mould.reached_food_ids().contains(&0));
        match dish.cell((6, 5)).unwrap() {
            Cell::Slime(slime) => assert_eq!(slime.reached_food_id(), Some(0)),
            other => panic!("Expected a slime cell, got {:?}", other),
        }
        assert_eq!(dish.cell((7, 5)).unwrap().kind(), CellKind::Food);
    }

    #[test]
    fn when_a_second_food_is_reached_it_is_linked_to_the_first_in_the_food_graph() {
        let foods = [FoodSource::new(7, 5, 2), FoodSource::new(3, 5, 2)];
        let mut dish = Dish::new((20, 20), &foods).unwrap();
        let mut mould = SlimeMould::new(&mut dish, &params((5, 5), (1, 1))).unwrap();

        mould.evolve(&mut dish).unwrap();

        assert_eq!(mould.reached_food_ids().len(), 2);
        assert_eq!(dish.food_graph().edges(), vec![(0, 1)]);
    }

    #[test]
    fn when_retargeting_to_the_same_food_newly_reached_foods_are_linked_to_it() {
        let foods = [
            FoodSource::new(10, 10, 2),
            FoodSource::new(3, 18, 2),
            FoodSource::new(18, 18, 2),
        ];
        let mut dish = Dish::new((20, 20), &foods).unwrap();
        let mut mould = SlimeMould::new(&mut dish, &params((5, 5), (1, 1))).unwrap();
        assert_eq!(mould.current_target(), Some((0, (10, 10))));

        mould.reached_food_ids.insert(1);
        mould.update_target_food(&mut dish).unwrap();

        assert_eq!(mould.current_target(), Some((0, (10, 10))));
        assert_eq!(mould.nearest_connected_target(), Some(1));
        assert_eq!(dish.food_graph().edges(), vec![(0, 1)]);
    }

    #[test]
    fn when_creating_a_mould_the_interior_of_the_start_rectangle_is_seeded() {
        let mut dish = Dish::new((20, 20), &[FoodSource::new(15, 15, 2)]).unwrap();
        let mould = SlimeMould::new(&mut dish, &params((8, 8), (2, 2))).unwrap();

        assert_eq!(mould.slime_cells().len(), 25);
        assert_eq!(dish.cell((8, 8)).unwrap().kind(), CellKind::Slime);
        assert_eq!(dish.cell((7, 9)).unwrap().kind(), CellKind::Slime);
    }

    #[test]
    fn when_a_corner_has_touched_food_another_corner_becomes_the_capital() {
        let mut dish = Dish::new((20, 20), &[FoodSource::new(15, 15, 2)]).unwrap();
        let mut mould = SlimeMould::new(&mut dish, &params((5, 5), (1, 1))).unwrap();
        for idx in [(4, 4), (6, 6)] {
            let mut slime = SlimeMould::slime_at(&dish, idx).unwrap().unwrap();
            slime.reached_food_id = Some(0);
            mould.update_slime_cell(&mut dish, slime).unwrap();
        }

        for _ in 0..8 {
            let capital = mould.pick_capital(&dish).unwrap().unwrap();
            assert!(capital != (4, 4) && capital != (6, 6));
        }
    }

    #[test]
    fn when_evolving_twice_with_the_same_seed_the_dishes_are_identical() {
        let foods = [FoodSource::new(25, 10, 4), FoodSource::new(10, 25, 4)];
        let run = || {
            let mut dish = Dish::new((32, 32), &foods).unwrap();
            let mut mould = SlimeMould::new(&mut dish, &params((8, 8), (2, 2))).unwrap();
            for _ in 0..10 {
                mould.evolve(&mut dish).unwrap();
            }
            dish.pheromones()
        };

        assert_eq!(run(), run());
    }
}
