use alloy_primitives::{Address, Bytes, B256};
use serde::{Deserialize, Serialize};

use super::{put_prefixed, DecodeError, Reader};
use crate::{
    constants::message_type, identity_from_bytes, identity_to_bytes, DeploymentParams, TokenId,
};

/// Request to deploy an interchain token on the destination ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployMessage {
    /// Token id shared by every deployment of the token.
    pub token_id: TokenId,
    /// Token name.
    pub name: String,
    /// Token symbol.
    pub symbol: String,
    /// Token decimals.
    pub decimals: u8,
    /// Minter on the destination ledger, `None` when the token has no minter.
    pub minter: Option<Address>,
}

impl DeployMessage {
    /// Builds a deploy message from a token id and its deployment params.
    pub fn new(token_id: TokenId, params: DeploymentParams) -> Self {
        let DeploymentParams { name, symbol, decimals, minter } = params;
        Self { token_id, name, symbol, decimals, minter }
    }

    /// The deployment params carried by the message.
    pub fn params(&self) -> DeploymentParams {
        DeploymentParams {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            minter: self.minter,
        }
    }

    /// Encodes the message.
    pub fn encode(&self) -> Bytes {
        let mut buf = Vec::with_capacity(
            1 + 32 + 4 + self.name.len() + 4 + self.symbol.len() + 1 + 4 + 20,
        );
        buf.push(message_type::DEPLOY_INTERCHAIN_TOKEN);
        buf.extend_from_slice(self.token_id.as_slice());
        put_prefixed(&mut buf, self.name.as_bytes());
        put_prefixed(&mut buf, self.symbol.as_bytes());
        buf.push(self.decimals);
        put_prefixed(&mut buf, &identity_to_bytes(self.minter));
        buf.into()
    }

    /// Decodes a message produced by [`DeployMessage::encode`].
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(data);
        match reader.u8()? {
            message_type::DEPLOY_INTERCHAIN_TOKEN => {}
            actual @ (message_type::SEND_TO_HUB | message_type::RECEIVE_FROM_HUB) => {
                return Err(DecodeError::UnexpectedMessageType {
                    expected: message_type::DEPLOY_INTERCHAIN_TOKEN,
                    actual,
                })
            }
            other => return Err(DecodeError::UnknownMessageType(other)),
        }

        let token_id = TokenId(B256::from_slice(reader.take(32)?));
        let name = reader.string("name")?;
        let symbol = reader.string("symbol")?;
        let decimals = reader.u8()?;
        let minter = identity_from_bytes(reader.prefixed()?)?;
        reader.finish()?;

        Ok(Self { token_id, name, symbol, decimals, minter })
    }
}

#[cfg(test)]
mod tests {
    use alloy_primitives::{address, b256, hex};

    use super::*;

    fn message(minter: Option<Address>) -> DeployMessage {
        DeployMessage {
            token_id: TokenId(b256!(
                "1111111111111111111111111111111111111111111111111111111111111111"
            )),
            name: "Token Name".to_string(),
            symbol: "TN".to_string(),
            decimals: 18,
            minter,
        }
    }

    #[test]
    fn test_layout() {
        let encoded = message(None).encode();
        let expected = hex!(
            "01"
            "1111111111111111111111111111111111111111111111111111111111111111"
            "0000000a" "546f6b656e204e616d65"
            "00000002" "544e"
            "12"
            "00000000"
        );
        assert_eq!(encoded.as_ref(), expected.as_slice());
    }

    #[test]
    fn test_round_trip() {
        for minter in [
            None,
            Some(Address::ZERO),
            Some(address!("f39Fd6e51aad88F6F4ce6aB8827279cffFb92266")),
        ] {
            let msg = message(minter);
            let encoded = msg.encode();
            let decoded = DeployMessage::decode(&encoded).unwrap();
            assert_eq!(decoded, msg);
            assert_eq!(decoded.encode(), encoded);
        }
    }

    #[test]
    fn test_empty_minter_decodes_to_none() {
        let decoded = DeployMessage::decode(&message(None).encode()).unwrap();
        assert_eq!(decoded.minter, None);
        assert_eq!(decoded.params().minter_or_zero(), Address::ZERO);
    }

    #[test]
    fn test_rejects_malformed_input() {
        let encoded = message(None).encode().to_vec();

        let mut wrong_type = encoded.clone();
        wrong_type[0] = 9;
        assert_eq!(DeployMessage::decode(&wrong_type), Err(DecodeError::UnknownMessageType(9)));

        let mut envelope_type = encoded.clone();
        envelope_type[0] = message_type::RECEIVE_FROM_HUB;
        assert!(matches!(
            DeployMessage::decode(&envelope_type),
            Err(DecodeError::UnexpectedMessageType { actual: 4, .. })
        ));

        assert!(matches!(
            DeployMessage::decode(&encoded[..encoded.len() - 1]),
            Err(DecodeError::UnexpectedEof { .. })
        ));

        let mut trailing = encoded.clone();
        trailing.push(0);
        assert_eq!(DeployMessage::decode(&trailing), Err(DecodeError::TrailingBytes(1)));

        assert!(matches!(DeployMessage::decode(&[]), Err(DecodeError::UnexpectedEof { .. })));
    }

    #[test]
    fn test_rejects_short_minter() {
        let mut encoded = message(None).encode().to_vec();
        let len = encoded.len();
        encoded[len - 1] = 3;
        encoded.extend_from_slice(&[1, 2, 3]);
        assert_eq!(DeployMessage::decode(&encoded), Err(DecodeError::InvalidIdentityLength(3)));
    }

    #[test]
    fn test_rejects_invalid_utf8_name() {
        let mut encoded = message(None).encode().to_vec();
        // first byte of the name
        encoded[1 + 32 + 4] = 0xff;
        assert_eq!(DeployMessage::decode(&encoded), Err(DecodeError::InvalidUtf8("name")));
    }
}
