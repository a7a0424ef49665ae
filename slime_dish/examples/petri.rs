use slime_dish::{FoodSource, MouldParams, Simulation, SimulationConfig};
use std::thread::sleep;
use std::time::Duration;

const FRAMES: usize = 60;
const INTERVAL: u64 = 100;

fn main() {
    let config = SimulationConfig {
        dish_shape: (60, 40),
        foods: vec![
            FoodSource::new(50, 30, 4),
            FoodSource::new(12, 34, 4),
            FoodSource::new(40, 8, 6),
            FoodSource::new(28, 22, 2),
        ],
        mould: MouldParams {
            start_loc: (8, 8),
            mould_shape: (2, 2),
            init_mould_coverage: 0.8,
            decay: 0.2,
            seed: 42,
        },
    };

    let mut simulation = match Simulation::new(&config) {
        Ok(simulation) => simulation,
        Err(e) => panic!("Could not set up the dish: {}", e),
    };

    for _ in 0..FRAMES {
        if let Err(e) = simulation.step().and_then(|_| simulation.draw()) {
            panic!("Simulation failed: {}", e);
        }
        sleep(Duration::from_millis(INTERVAL));
    }

    // Replay the same setup without drawing and export it
    let mut replay = Simulation::new(&config).expect("config was valid above");
    replay
        .animate(FRAMES, INTERVAL, Some("/tmp/petri_replay.json".to_string()))
        .expect("Could not save the replay");

    println!(
        "\nLinked foods: {:?}",
        simulation.dish().food_graph().edges()
    );
}
