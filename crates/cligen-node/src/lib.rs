pub mod emitters;
pub mod error;
pub mod generator;

pub use error::GenerateError;
pub use generator::NodeCliGenerator;
