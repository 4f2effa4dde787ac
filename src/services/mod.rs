pub mod dates;
pub mod seed;
