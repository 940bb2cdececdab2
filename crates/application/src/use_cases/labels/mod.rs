mod decode_label;
mod encode_label;

pub use decode_label::DecodeLabelUseCase;
pub use encode_label::EncodeLabelUseCase;

use ferrous_inet_domain::MAX_HOSTNAME_LEN;

/// Cuts codec output to the host name bound without splitting a character.
fn bound_text(text: &str) -> &str {
    if text.len() <= MAX_HOSTNAME_LEN {
        return text;
    }

    let mut end = MAX_HOSTNAME_LEN;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
