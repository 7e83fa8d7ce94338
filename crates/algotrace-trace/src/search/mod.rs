pub mod binary;
pub mod linear;

pub use binary::generate_binary_search_steps;
pub use linear::generate_linear_search_steps;
