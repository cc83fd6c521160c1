pub mod details;
pub mod name;
pub mod profile;
pub mod reducer;

pub use details::{life_path_details, LifePathDetails, LIFE_PATH_DETAILS};
pub use name::{
    expression_number, life_path_from_date, life_path_from_str, life_path_number,
    normalize_name, personality_number, soul_urge_number,
};
pub use profile::{NumberReading, NumerologyProfile};
pub use reducer::{digit_sum, is_master, reduce, MASTER_NUMBERS};
