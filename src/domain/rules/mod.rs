pub mod frequency_gate;
pub mod intra_batch;
pub mod normalize;
