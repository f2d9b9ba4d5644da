pub mod brute_force;
pub mod caesar;
pub mod frequency;
