pub mod brand;
pub mod normalize;
pub mod pipeline;
pub mod policy;
pub mod rank;
pub mod similarity;
pub mod types;
