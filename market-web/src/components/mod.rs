pub mod admin;
pub mod chart;
pub mod farmer;
