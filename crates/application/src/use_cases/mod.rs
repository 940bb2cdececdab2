pub mod labels;
pub mod resolve;

// Re-export use cases
pub use labels::{DecodeLabelUseCase, EncodeLabelUseCase};
pub use resolve::{LookupAddressUseCase, ReverseLookupUseCase};
