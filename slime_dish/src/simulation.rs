use crate::config::SimulationConfig;
use crate::dish::Dish;
use crate::error::{DishError, DishResult};
use crate::mould::{Mould, SlimeMould};
use crate::pheromone::PheromoneField;
use crate::replay::create_frame_recorder;
use tracing::{info, trace};
use uuid::Uuid;

/// A slime mould growing in a petri dish.
/// Main entry point for running the simulation.
pub struct Simulation {
    run_id: String,
    dish: Dish,
    mould: Box<dyn Mould>,
    frame: usize,
}

impl Simulation {
    /// Creates a dish from the configuration and seeds a [`SlimeMould`] into it.
    pub fn new(config: &SimulationConfig) -> DishResult<Simulation> {
        let mut dish = Dish::new(config.dish_shape, &config.foods)?;
        let mould = SlimeMould::new(&mut dish, &config.mould)?;
        Ok(Simulation::with_mould(dish, Box::new(mould)))
    }

    /// Runs any mould in an already built dish.
    pub fn with_mould(dish: Dish, mould: Box<dyn Mould>) -> Simulation {
        Simulation {
            run_id: Uuid::new_v4().to_string(),
            dish,
            mould,
            frame: 0,
        }
    }

    /// Advances the mould by one step and returns the resulting pheromone field.
    pub fn step(&mut self) -> DishResult<PheromoneField> {
        self.mould.evolve(&mut self.dish)?;
        self.frame += 1;

        let field = self.dish.pheromones();
        trace!(run_id = %self.run_id, frame = self.frame, "frame advanced");
        Ok(field)
    }

    /// Runs `frames` steps, reading the pheromone field after each one.
    ///
    /// # Arguments
    /// * `frames` - The number of steps to run.
    /// * `interval` - Milliseconds between frames. The export plays at `1000 / interval` fps.
    /// * `filename` - Where to save the animation. If `None`, nothing is saved.
    pub fn animate(
        &mut self,
        frames: usize,
        interval: u64,
        filename: Option<String>,
    ) -> DishResult<Vec<PheromoneField>> {
        if interval == 0 {
            return Err(DishError::InvalidInterval);
        }
        let fps = 1000.0 / interval as f64;
        let (width, height) = self.dish.shape();
        let mut recorder =
            create_frame_recorder(filename, self.run_id.clone(), width, height, fps);

        info!(run_id = %self.run_id, frames, fps, "animation started");
        recorder.log_initial(&self.dish.pheromones());

        let mut fields = Vec::with_capacity(frames);
        for _ in 0..frames {
            let field = self.step()?;
            recorder.log_frame(self.frame, &field);
            fields.push(field);
        }

        recorder.log_end(
            self.dish.food_graph().edges(),
            self.mould.stats().cloned(),
        );
        recorder.save()?;
        info!(run_id = %self.run_id, frame = self.frame, "animation finished");

        Ok(fields)
    }

    /// Draws the current pheromone field to the console.
    pub fn draw(&self) -> DishResult<()> {
        let graph = self.dish.food_graph();
        let header = vec![
            format!("Frame: {}", self.frame),
            format!(
                "Foods: {}, Links: {}",
                graph.node_count(),
                graph.edge_count()
            ),
        ];
        self.dish.pheromones().draw(&header)
    }

    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn dish(&self) -> &Dish {
        &self.dish
    }

    pub fn mould(&self) -> &dyn Mould {
        self.mould.as_ref()
    }
}
