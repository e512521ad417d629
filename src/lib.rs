pub mod attacks;
pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod export;
pub mod gui;
pub mod series;
pub mod trust;
pub mod weighted_average;
