use crate::di::UseCases;
use ferrous_inet_domain::{Address, AddressFamily, DomainError, DomainLabel, PresentationString};

/// One codec or resolver call, parameterised by everything except its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Pton { family: Option<AddressFamily> },
    Ntop,
    Mask { bits: i64 },
    Expand,
    Detect { hex: bool },
    Lookup { binary: bool },
    Reverse { hex: bool },
    PtrName,
    ToAscii { charset: Option<String>, hex: bool },
    FromAscii { charset: Option<String> },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Pton { .. } => "pton",
            Operation::Ntop => "ntop",
            Operation::Mask { .. } => "mask",
            Operation::Expand => "expand",
            Operation::Detect { .. } => "detect",
            Operation::Lookup { .. } => "lookup",
            Operation::Reverse { .. } => "reverse",
            Operation::PtrName => "ptr-name",
            Operation::ToAscii { .. } => "to-ascii",
            Operation::FromAscii { .. } => "from-ascii",
        }
    }

    /// True when the call may block on name resolution.
    pub fn uses_resolver(&self) -> bool {
        matches!(self, Operation::Lookup { .. } | Operation::Reverse { .. })
    }

    pub fn execute(&self, use_cases: &UseCases, input: &[u8]) -> Result<String, DomainError> {
        match self {
            Operation::Pton { family } => {
                let address = Address::from_presentation_as(input, *family)?;
                Ok(hex::encode(address.octets()))
            }
            Operation::Ntop => {
                let address = Address::from_bytes(&decode_hex(input)?)?;
                Ok(address.to_presentation().to_string())
            }
            Operation::Mask { bits } => {
                let network = Address::from_presentation(input)?.mask(*bits)?;
                Ok(network.to_presentation().to_string())
            }
            Operation::Expand => Ok(Address::from_presentation(input)?.to_expanded()),
            Operation::Detect { hex: true } => {
                Ok(AddressFamily::detect_binary(&decode_hex(input)?)?.to_string())
            }
            Operation::Detect { hex: false } => {
                let text = PresentationString::from_input(input)?;
                Ok(AddressFamily::detect_text(text.as_bytes()).to_string())
            }
            Operation::Lookup { binary: true } => {
                let address = use_cases.lookup.execute(input)?;
                Ok(hex::encode(address.octets()))
            }
            Operation::Lookup { binary: false } => {
                Ok(use_cases.lookup.execute_presentation(input)?.to_string())
            }
            Operation::Reverse { hex } => {
                let hostname = if *hex {
                    use_cases.reverse.execute_any(&decode_hex(input)?)?
                } else {
                    use_cases.reverse.execute_any(input)?
                };
                Ok(hostname.to_string())
            }
            Operation::PtrName => Ok(Address::from_presentation(input)?.reverse_domain()),
            Operation::ToAscii { charset, hex } => {
                let bytes = if *hex {
                    decode_hex(input)?
                } else {
                    input.to_vec()
                };
                let label = DomainLabel::new(&bytes, charset.as_deref())?;
                use_cases.encode_label.execute(&label)
            }
            Operation::FromAscii { charset } => {
                let label = DomainLabel::new(input, charset.as_deref())?;
                let decoded = use_cases.decode_label.execute(&label)?;
                Ok(match String::from_utf8(decoded) {
                    Ok(text) => text,
                    Err(e) => hex::encode(e.into_bytes()),
                })
            }
        }
    }
}

fn decode_hex(input: &[u8]) -> Result<Vec<u8>, DomainError> {
    if input.is_empty() {
        return Err(DomainError::EmptyInput);
    }

    hex::decode(input).map_err(|_| DomainError::ParseError {
        family: "hex",
        input: String::from_utf8_lossy(input).into_owned(),
    })
}
