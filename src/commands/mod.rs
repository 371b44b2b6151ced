pub mod calculator;
pub mod foods;
pub mod tracker;
