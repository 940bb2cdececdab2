use crate::address::Address;
use crate::address_family::AddressFamily;
use crate::DomainError;

/// Validated mask bit count for one address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaskSpec {
    bits: u32,
}

impl MaskSpec {
    /// Accepts `bits` in `[0, family.bit_width()]`. Out-of-range values fail,
    /// they are never clamped.
    pub fn new(bits: i64, family: AddressFamily) -> Result<Self, DomainError> {
        let width = family.bit_width();
        if bits < 0 || bits > i64::from(width) {
            return Err(DomainError::MaskError { bits, width });
        }

        Ok(Self { bits: bits as u32 })
    }

    pub fn bits(&self) -> u32 {
        self.bits
    }
}

/// Keeps the leading `mask_bits` bits of `address` and zeroes the rest.
pub fn apply_mask(address: &Address, mask_bits: i64) -> Result<Address, DomainError> {
    let checked = MaskSpec::new(mask_bits, address.family())?;

    Ok(match address {
        Address::V4(octets) => Address::V4(mask_octets(octets, checked.bits())),
        Address::V6(octets) => Address::V6(mask_octets(octets, checked.bits())),
    })
}

fn mask_octets<const N: usize>(source: &[u8; N], bits: u32) -> [u8; N] {
    let mut masked = [0u8; N];
    let mut remaining = bits;
    let mut index = 0;

    while remaining >= 8 {
        masked[index] = source[index];
        remaining -= 8;
        index += 1;
    }

    if remaining > 0 {
        let keep = ((0xFFu32 << (8 - remaining)) & 0xFF) as u8;
        masked[index] = source[index] & keep;
    }

    masked
}

impl Address {
    /// See [`apply_mask`].
    pub fn mask(&self, mask_bits: i64) -> Result<Address, DomainError> {
        apply_mask(self, mask_bits)
    }
}
