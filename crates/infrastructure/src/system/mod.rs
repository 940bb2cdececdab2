pub mod resolver;

pub use resolver::SystemResolver;
