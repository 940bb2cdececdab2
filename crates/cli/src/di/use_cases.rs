use ferrous_inet_application::ports::{AsciiLabelCodec, CharsetTranscoder, HostResolver};
use ferrous_inet_application::use_cases::{
    DecodeLabelUseCase, EncodeLabelUseCase, LookupAddressUseCase, ReverseLookupUseCase,
};
use ferrous_inet_domain::Config;
use ferrous_inet_infrastructure::idna::{EncodingTranscoder, Uts46LabelCodec};
use std::sync::Arc;

pub struct UseCases {
    pub lookup: Arc<LookupAddressUseCase>,
    pub reverse: Arc<ReverseLookupUseCase>,
    pub encode_label: Arc<EncodeLabelUseCase>,
    pub decode_label: Arc<DecodeLabelUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, resolver: Arc<dyn HostResolver>) -> Self {
        let codec: Arc<dyn AsciiLabelCodec> = Arc::new(Uts46LabelCodec::new());
        let transcoder: Arc<dyn CharsetTranscoder> = Arc::new(EncodingTranscoder::new());
        let default_charset = config.idna.default_charset.as_str();

        Self {
            lookup: Arc::new(LookupAddressUseCase::new(resolver.clone())),
            reverse: Arc::new(ReverseLookupUseCase::new(resolver)),
            encode_label: Arc::new(EncodeLabelUseCase::new(
                codec.clone(),
                transcoder.clone(),
                default_charset,
            )),
            decode_label: Arc::new(DecodeLabelUseCase::new(
                codec,
                transcoder,
                default_charset,
            )),
        }
    }
}
