mod lookup_address;
mod reverse_lookup;

pub use lookup_address::LookupAddressUseCase;
pub use reverse_lookup::ReverseLookupUseCase;
