use airsign_payload::{
    decode_payload, CryptoAlgorithm, EncoderConfig, PayloadData, PayloadError, SigningRequest,
    MIN_PAYLOAD_SIZE,
};
use proptest::prelude::*;

fn any_request() -> impl Strategy<Value = SigningRequest> {
    (
        any::<u8>(),
        0u8..=2,
        any::<u8>(),
        prop::array::uniform32(any::<u8>()),
        prop::collection::vec(any::<u8>(), 0..512),
        prop::array::uniform32(any::<u8>()),
    )
        .prop_map(|(network_tag, crypto, command, public_key, data, genesis_hash)| {
            SigningRequest::new(
                &EncoderConfig { network_tag },
                CryptoAlgorithm::from(crypto),
                command,
                &public_key,
                PayloadData::from(data),
                &genesis_hash,
            )
            .expect("fixed-width fields are valid")
        })
}

proptest! {
    #[test]
    fn decode_inverts_encode(request in any_request()) {
        let wire = request.encode();
        prop_assert_eq!(wire.len(), MIN_PAYLOAD_SIZE + request.data.len());
        prop_assert_eq!(decode_payload(&wire).expect("valid payload"), request);
    }

    #[test]
    fn short_buffers_are_truncated(bytes in prop::collection::vec(any::<u8>(), 0..MIN_PAYLOAD_SIZE)) {
        let is_truncated = matches!(
            decode_payload(&bytes),
            Err(PayloadError::TruncatedPayload { .. })
        );
        prop_assert!(is_truncated);
    }

    #[test]
    fn text_data_is_utf8(text in ".{0,64}") {
        let request = SigningRequest::new(
            &EncoderConfig::default(),
            CryptoAlgorithm::Sr25519,
            3,
            &[0u8; 32],
            PayloadData::Text(text.clone()),
            &[0u8; 32],
        ).expect("valid request");
        let decoded = decode_payload(&request.encode()).expect("valid payload");
        prop_assert_eq!(decoded.data.as_ref(), text.as_bytes());
    }
}
