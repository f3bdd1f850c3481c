use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use super::{put_prefixed, DecodeError, DeployMessage, Reader};
use crate::constants::message_type;

/// Envelope of a message routed through the hub.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HubMessage {
    /// Sent by an origin ledger, asking the hub to forward `payload` to `destination_chain`.
    SendToHub {
        /// Chain the payload is addressed to.
        destination_chain: String,
        /// Encoded inner message.
        payload: Bytes,
    },
    /// Delivered by the hub, carrying a payload that originated on `origin_chain`.
    ReceiveFromHub {
        /// Chain the payload originated on.
        origin_chain: String,
        /// Encoded inner message.
        payload: Bytes,
    },
}

impl HubMessage {
    /// The message type byte of the envelope.
    pub const fn message_type(&self) -> u8 {
        match self {
            Self::SendToHub { .. } => message_type::SEND_TO_HUB,
            Self::ReceiveFromHub { .. } => message_type::RECEIVE_FROM_HUB,
        }
    }

    /// The chain named by the envelope.
    pub fn chain(&self) -> &str {
        match self {
            Self::SendToHub { destination_chain: chain, .. } |
            Self::ReceiveFromHub { origin_chain: chain, .. } => chain,
        }
    }

    /// The inner payload.
    pub const fn payload(&self) -> &Bytes {
        match self {
            Self::SendToHub { payload, .. } | Self::ReceiveFromHub { payload, .. } => payload,
        }
    }

    /// Encodes the envelope.
    pub fn encode(&self) -> Bytes {
        let chain = self.chain().as_bytes();
        let payload = self.payload();
        let mut buf = Vec::with_capacity(1 + 4 + chain.len() + 4 + payload.len());
        buf.push(self.message_type());
        put_prefixed(&mut buf, chain);
        put_prefixed(&mut buf, payload);
        buf.into()
    }

    /// Decodes an envelope. The chain must not be empty; the payload is returned as-is.
    pub fn decode(data: &[u8]) -> Result<Self, DecodeError> {
        let mut reader = Reader::new(data);
        let ty = reader.u8()?;
        if ty == message_type::DEPLOY_INTERCHAIN_TOKEN {
            return Err(DecodeError::UnexpectedMessageType {
                expected: message_type::RECEIVE_FROM_HUB,
                actual: ty,
            });
        }
        if ty != message_type::SEND_TO_HUB && ty != message_type::RECEIVE_FROM_HUB {
            return Err(DecodeError::UnknownMessageType(ty));
        }

        let chain = reader.string("chain")?;
        if chain.is_empty() {
            return Err(DecodeError::EmptyChainName);
        }
        let payload = Bytes::copy_from_slice(reader.prefixed()?);
        reader.finish()?;

        Ok(if ty == message_type::SEND_TO_HUB {
            Self::SendToHub { destination_chain: chain, payload }
        } else {
            Self::ReceiveFromHub { origin_chain: chain, payload }
        })
    }
}

/// Wraps an inner payload into the envelope the hub delivers to a destination ledger.
pub fn wrap_for_hub(origin_chain: &str, inner: &[u8]) -> Bytes {
    HubMessage::ReceiveFromHub {
        origin_chain: origin_chain.to_string(),
        payload: Bytes::copy_from_slice(inner),
    }
    .encode()
}

/// Wraps an inner payload into the envelope an origin ledger sends to the hub.
pub fn wrap_to_hub(destination_chain: &str, inner: &[u8]) -> Bytes {
    HubMessage::SendToHub {
        destination_chain: destination_chain.to_string(),
        payload: Bytes::copy_from_slice(inner),
    }
    .encode()
}

/// Unwraps an envelope delivered by the hub into its origin chain and inner payload.
///
/// Besides the envelope itself, the inner payload must decode as a recognized message.
pub fn unwrap_hub(data: &[u8]) -> Result<(String, Bytes), DecodeError> {
    match HubMessage::decode(data)? {
        HubMessage::ReceiveFromHub { origin_chain, payload } => {
            DeployMessage::decode(&payload)?;
            Ok((origin_chain, payload))
        }
        HubMessage::SendToHub { .. } => Err(DecodeError::UnexpectedMessageType {
            expected: message_type::RECEIVE_FROM_HUB,
            actual: message_type::SEND_TO_HUB,
        }),
    }
}
