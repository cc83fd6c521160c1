use chrono::NaiveDate;
use serde::Serialize;

use crate::numerology::details::{life_path_details, LifePathDetails};
use crate::numerology::name::{
    expression_number, life_path_from_date, personality_number, soul_urge_number,
};

/// A computed number and its interpretation, if it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumberReading {
    pub number: u64,
    pub details: Option<&'static LifePathDetails>,
}

impl NumberReading {
    pub fn new(number: u64) -> Self {
        Self {
            number,
            details: life_path_details(number),
        }
    }

    /// True for the 0 sentinel produced by empty or degenerate input.
    pub fn is_indeterminate(&self) -> bool {
        self.number == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumerologyProfile {
    pub life_path: NumberReading,
    pub expression: NumberReading,
    pub soul_urge: NumberReading,
    pub personality: NumberReading,
}

impl NumerologyProfile {
    pub fn compute(name: &str, birth_date: NaiveDate) -> Self {
        Self {
            life_path: NumberReading::new(life_path_from_date(birth_date)),
            expression: NumberReading::new(expression_number(name)),
            soul_urge: NumberReading::new(soul_urge_number(name)),
            personality: NumberReading::new(personality_number(name)),
        }
    }
}
