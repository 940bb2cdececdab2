mod executor;
mod operation;
mod output;

pub use executor::Executor;
pub use operation::Operation;
pub use output::{Outcome, OutputFormat};

use clap::Subcommand;
use ferrous_inet_domain::AddressFamily;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Presentation text to binary (printed as hex)
    Pton {
        /// Address text, e.g. 1.2.3.4 or fe80::1
        input: Option<String>,

        /// Parse as this family (ipv4, ipv6) instead of detecting it
        #[arg(long)]
        family: Option<AddressFamily>,
    },

    /// Binary (hex) to presentation text
    Ntop {
        /// 8 or 32 hex digits
        input: Option<String>,
    },

    /// Zero every bit after the first <bits>
    Mask {
        address: Option<String>,

        /// Number of leading bits to keep
        #[arg(short, long, allow_negative_numbers = true)]
        bits: i64,
    },

    /// Write an IPv6 address with all eight groups in full
    Expand { address: Option<String> },

    /// Report the address family of the input
    Detect {
        input: Option<String>,

        /// Input is hex-encoded binary, classified by length
        #[arg(long)]
        hex: bool,
    },

    /// Resolve a host name to one address, IPv6 preferred
    Lookup {
        host: Option<String>,

        /// Print the address as hex instead of presentation text
        #[arg(long)]
        binary: bool,
    },

    /// Resolve an address to its host name
    Reverse {
        input: Option<String>,

        /// Input is hex-encoded binary
        #[arg(long)]
        hex: bool,
    },

    /// Print the in-addr.arpa / ip6.arpa name of an address
    PtrName { address: Option<String> },

    /// Encode a label to its ASCII-compatible (xn--) form
    ToAscii {
        label: Option<String>,

        /// Charset of the label bytes
        #[arg(long)]
        charset: Option<String>,

        /// Label is given as hex-encoded bytes
        #[arg(long)]
        hex: bool,
    },

    /// Decode an ASCII-compatible label
    FromAscii {
        label: Option<String>,

        /// Charset to deliver the decoded label in
        #[arg(long)]
        charset: Option<String>,
    },
}

impl Command {
    /// Splits the command into what to do and the positional input, if any.
    pub fn into_parts(self) -> (Operation, Option<String>) {
        match self {
            Command::Pton { input, family } => (Operation::Pton { family }, input),
            Command::Ntop { input } => (Operation::Ntop, input),
            Command::Mask { address, bits } => (Operation::Mask { bits }, address),
            Command::Expand { address } => (Operation::Expand, address),
            Command::Detect { input, hex } => (Operation::Detect { hex }, input),
            Command::Lookup { host, binary } => (Operation::Lookup { binary }, host),
            Command::Reverse { input, hex } => (Operation::Reverse { hex }, input),
            Command::PtrName { address } => (Operation::PtrName, address),
            Command::ToAscii {
                label,
                charset,
                hex,
            } => (Operation::ToAscii { charset, hex }, label),
            Command::FromAscii { label, charset } => (Operation::FromAscii { charset }, label),
        }
    }
}
