pub mod logistic;

pub use logistic::logistic;
