pub mod config;
pub mod engine;
pub mod heuristics;
pub mod inference;
pub mod model;
pub mod propagation;
pub mod state;
pub mod stats;
pub mod trail;
pub mod work_list;
