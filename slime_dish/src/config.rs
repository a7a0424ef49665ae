use crate::error::DishResult;
use crate::food::FoodSource;
use crate::mould::MouldParams;
use serde::{Deserialize, Serialize};

/// Everything needed to set up a simulation run.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// `(width, height)` of the dish lattice.
    pub dish_shape: (usize, usize),
    /// Food table. Row `i` becomes food id `i`.
    pub foods: Vec<FoodSource>,
    /// Forwarded to the mould as is.
    pub mould: MouldParams,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            dish_shape: (100, 100),
            foods: Vec::new(),
            mould: MouldParams::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_json(contents: &str) -> DishResult<SimulationConfig> {
        Ok(serde_json::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DishError;

    #[test]
    fn when_parsing_an_empty_object_the_defaults_are_used() {
        let config = SimulationConfig::from_json("{}").unwrap();

        assert_eq!(config, SimulationConfig::default());
    }

    #[test]
    fn when_parsing_a_partial_config_the_missing_fields_keep_their_defaults() {
        let config = SimulationConfig::from_json(
            r#"{
                "dish_shape": [40, 30],
                "foods": [{"x": 10, "y": 12, "value": 4}],
                "mould": {"start_loc": [20, 15], "decay": 0.1}
            }"#,
        )
        .unwrap();

        assert_eq!(config.dish_shape, (40, 30));
        assert_eq!(config.foods, vec![FoodSource::new(10, 12, 4)]);
        assert_eq!(config.mould.start_loc, (20, 15));
        assert_eq!(config.mould.decay, 0.1);
        assert_eq!(config.mould.mould_shape, MouldParams::default().mould_shape);
    }

    #[test]
    fn when_parsing_a_config_with_a_malformed_food_row_a_serialization_error_is_returned() {
        let result = SimulationConfig::from_json(r#"{"foods": [{"x": 1, "y": 2}]}"#);

        assert!(matches!(result, Err(DishError::Serialization(_))));
    }
}
