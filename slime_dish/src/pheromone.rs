use crate::cell::Coord;
use crate::error::DishResult;
use crossterm::{
    cursor::Hide,
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use serde::Serialize;
use std::io::{stdout, Write};

/// Lower end of the fixed display scale.
pub const DISPLAY_MIN: f64 = 0.0;
/// Upper end of the fixed display scale.
pub const DISPLAY_MAX: f64 = 10.0;

/// Snapshot of the pheromone level of every lattice cell.
///
/// Values are stored unclamped, `x` major, exactly as the cells reported them.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PheromoneField {
    width: usize,
    height: usize,
    values: Vec<f64>,
}

impl PheromoneField {
    pub(crate) fn new(width: usize, height: usize, values: Vec<f64>) -> PheromoneField {
        debug_assert_eq!(values.len(), width * height);
        PheromoneField {
            width,
            height,
            values,
        }
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

    /// Pheromone at `idx`, or `None` outside the field.
    pub fn get(&self, idx: Coord) -> Option<f64> {
        let (x, y) = idx;
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(self.values[x as usize * self.height + y as usize])
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The field as rows indexed `[x][y]`.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.height)
            .map(|column| column.to_vec())
            .collect()
    }

    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Draws the field to the terminal on the fixed `[0, 10]` scale with the
    /// origin in the lower-left corner.
    pub fn draw(&self, header: &[String]) -> DishResult<()> {
        let mut stdout = stdout();

        execute!(stdout, Clear(ClearType::All), Hide)?;
        for line in header {
            execute!(stdout, Print(line), Print("\n"))?;
        }
        execute!(stdout, Print("\n"))?;

        for y in (0..self.height).rev() {
            for x in 0..self.width {
                let value = self.values[x * self.height + y];
                execute!(
                    stdout,
                    SetForegroundColor(scale_color(value)),
                    Print(scale_char(value)),
                    SetForegroundColor(Color::Reset)
                )?;
            }
            execute!(stdout, Print("\n"))?;
        }

        stdout.flush()?;
        Ok(())
    }
}

/// Position of `value` on the display scale, clipped to `[0, 1]`.
fn scale_position(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    ((value - DISPLAY_MIN) / (DISPLAY_MAX - DISPLAY_MIN)).clamp(0.0, 1.0)
}

// Yellow through orange to red.
fn scale_color(value: f64) -> Color {
    let t = scale_position(value);
    if t == 0.0 {
        return Color::Reset;
    }
    let r = 255 - (127.0 * t) as u8;
    let g = (255.0 * (1.0 - t)) as u8;
    let b = (204.0 * (1.0 - t).powi(3)) as u8;
    Color::Rgb { r, g, b }
}

fn scale_char(value: f64) -> char {
    match scale_position(value) {
        t if t == 0.0 => '.',
        t if t < 0.25 => '░',
        t if t < 0.5 => '▒',
        t if t < 0.75 => '▓',
        _ => '█',
    }
}
