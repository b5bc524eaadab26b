pub mod locate;
pub mod mask;
pub mod probe;
pub mod sample;
