use crate::cell::Coord;
use crate::error::{DishError, DishResult};
use serde::{Deserialize, Serialize};

/// One row of the food table: an anchor coordinate and the patch magnitude.
///
/// A row places a square of `value / 2` by `value / 2` food cells that grows
/// from `(x, y)` towards decreasing `x` and `y`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FoodSource {
    pub x: i64,
    pub y: i64,
    pub value: i64,
}

impl FoodSource {
    pub fn new(x: i64, y: i64, value: i64) -> FoodSource {
        FoodSource { x, y, value }
    }

    pub fn anchor(&self) -> Coord {
        (self.x, self.y)
    }

    /// Coordinates covered by this row's patch, in placement order.
    /// Empty when `value < 2`.
    pub fn patch(&self) -> Vec<Coord> {
        let side = self.value / 2;
        let mut coords = Vec::new();

        for dx in 0..side {
            for dy in 0..side {
                coords.push((self.x - dx, self.y - dy));
            }
        }

        coords
    }
}

/// Parses a food table from a JSON array of `{"x", "y", "value"}` rows.
pub fn food_table_from_json(contents: &str) -> DishResult<Vec<FoodSource>> {
    serde_json::from_str(contents).map_err(DishError::MalformedFoodTable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_computing_a_patch_it_expands_towards_decreasing_coordinates() {
        let food = FoodSource::new(5, 5, 4);

        assert_eq!(food.patch(), vec![(5, 5), (5, 4), (4, 5), (4, 4)]);
    }

    #[test]
    fn when_computing_a_patch_with_an_odd_value_the_side_is_rounded_down() {
        let food = FoodSource::new(10, 10, 7);

        assert_eq!(food.patch().len(), 9);
        assert!(food.patch().iter().all(|(x, y)| (8..=10).contains(x) && (8..=10).contains(y)));
    }

    #[test]
    fn when_the_value_is_below_two_the_patch_is_empty() {
        assert!(FoodSource::new(3, 3, 1).patch().is_empty());
        assert!(FoodSource::new(3, 3, 0).patch().is_empty());
        assert!(FoodSource::new(3, 3, -4).patch().is_empty());
    }

    #[test]
    fn when_parsing_a_food_table_the_rows_are_returned_in_order() {
        let table = r#"[{"x": 5, "y": 6, "value": 4}, {"x": 1, "y": 2, "value": 2}]"#;
        let foods = food_table_from_json(table).unwrap();

        assert_eq!(foods, vec![FoodSource::new(5, 6, 4), FoodSource::new(1, 2, 2)]);
    }

    #[test]
    fn when_parsing_a_food_table_with_a_missing_column_a_malformed_table_error_is_returned() {
        let table = r#"[{"x": 5, "value": 4}]"#;

        assert!(matches!(
            food_table_from_json(table),
            Err(DishError::MalformedFoodTable(_))
        ));
    }

    #[test]
    fn when_parsing_a_food_table_with_a_non_numeric_value_a_malformed_table_error_is_returned() {
        let table = r#"[{"x": 5, "y": 5, "value": "lots"}]"#;

        assert!(matches!(
            food_table_from_json(table),
            Err(DishError::MalformedFoodTable(_))
        ));
    }
}
