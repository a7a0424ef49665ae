use crate::cell::FoodId;
use crate::error::DishResult;
use crate::mould::MouldStats;
use crate::pheromone::{PheromoneField, DISPLAY_MAX, DISPLAY_MIN};
use serde_json::json;
use std::{fs::File, io::BufWriter};
use tracing::info;

pub fn create_frame_recorder(
    filename: Option<String>,
    run_id: String,
    width: usize,
    height: usize,
    fps: f64,
) -> Box<dyn FrameRecorder> {
    match filename {
        None => Box::new(NoOpFrameRecorder {}),
        Some(filename) => Box::new(JsonFrameRecorder::new(filename, run_id, width, height, fps)),
    }
}

/// Collects the frames of an animation and persists them once it ends.
pub trait FrameRecorder {
    #[allow(unused_variables)]
    fn log_initial(&mut self, field: &PheromoneField) {}

    #[allow(unused_variables)]
    fn log_frame(&mut self, frame: usize, field: &PheromoneField) {}

    #[allow(unused_variables)]
    fn log_end(&mut self, food_edges: Vec<(FoodId, FoodId)>, stats: Option<MouldStats>) {}

    fn save(&self) -> DishResult<()> {
        Ok(())
    }
}

struct Frame {
    frame: usize,
    field: PheromoneField,
}

struct NoOpFrameRecorder;
impl FrameRecorder for NoOpFrameRecorder {}

struct JsonFrameRecorder {
    filename: String,
    run_id: String,
    width: usize,
    height: usize,
    fps: f64,
    initial: Option<PheromoneField>,
    frames: Vec<Frame>,
    food_edges: Vec<(FoodId, FoodId)>,
    stats: Option<MouldStats>,
}

impl JsonFrameRecorder {
    pub fn new(
        filename: String,
        run_id: String,
        width: usize,
        height: usize,
        fps: f64,
    ) -> JsonFrameRecorder {
        JsonFrameRecorder {
            filename,
            run_id,
            width,
            height,
            fps,
            initial: None,
            frames: Vec::new(),
            food_edges: Vec::new(),
            stats: None,
        }
    }
}

impl FrameRecorder for JsonFrameRecorder {
    fn log_initial(&mut self, field: &PheromoneField) {
        self.initial = Some(field.clone());
    }

    fn log_frame(&mut self, frame: usize, field: &PheromoneField) {
        self.frames.push(Frame {
            frame,
            field: field.clone(),
        });
    }

    fn log_end(&mut self, food_edges: Vec<(FoodId, FoodId)>, stats: Option<MouldStats>) {
        self.food_edges = food_edges;
        self.stats = stats;
    }

    fn save(&self) -> DishResult<()> {
        let file = File::create(&self.filename)?;
        let frames: Vec<_> = self
            .frames
            .iter()
            .map(|frame| {
                json!({
                    "frame": frame.frame,
                    "pheromones": frame.field.rows(),
                })
            })
            .collect();

        let data = json!({
            "run_id": self.run_id,
            "dish": {
                "width": self.width,
                "height": self.height,
            },
            "fps": self.fps,
            "color_range": [DISPLAY_MIN, DISPLAY_MAX],
            "initial": self.initial.as_ref().map(|field| field.rows()),
            "frames": frames,
            "food_edges": self.food_edges,
            "stats": self.stats,
        });

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &data)?;
        info!(filename = %self.filename, frames = self.frames.len(), "animation saved");
        Ok(())
    }
}
