// Domain layer: case transformation rules and error contracts.

pub mod case_mode;
pub mod errors;

pub use case_mode::CaseMode;
