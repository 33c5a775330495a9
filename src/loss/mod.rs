pub mod reconstruction;

pub use reconstruction::ReconstructionLoss;
