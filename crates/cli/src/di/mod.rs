mod resolver;
mod use_cases;

pub use resolver::build_resolver;
pub use use_cases::UseCases;
