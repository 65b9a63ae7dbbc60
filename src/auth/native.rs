//! Native auth: local private-key wallet.
//!
//! Only available with the `native-auth` feature.

use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::auth::{MessageSigner, SigningIdentity};
use crate::error::SdkError;
use crate::shared::Address;

/// An in-process wallet that signs with EIP-191 `personal_sign`.
#[derive(Clone)]
pub struct LocalWallet {
    signer: PrivateKeySigner,
    address: Address,
}

impl LocalWallet {
    /// Load a wallet from a hex private key (with or without `0x`).
    pub fn from_private_key(key: &str) -> Result<Self, SdkError> {
        let signer: PrivateKeySigner = key
            .trim()
            .parse()
            .map_err(|e| SdkError::Configuration(format!("Invalid private key: {}", e)))?;
        Ok(Self::from_signer(signer))
    }

    /// A throwaway wallet with a random key.
    pub fn random() -> Self {
        Self::from_signer(PrivateKeySigner::random())
    }

    fn from_signer(signer: PrivateKeySigner) -> Self {
        let address = Address::new(signer.address().to_string());
        Self { signer, address }
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Wrap this wallet as the client's signing identity.
    pub fn into_identity(self) -> SigningIdentity {
        let address = self.address.clone();
        SigningIdentity::new(address, Arc::new(self))
    }
}

impl fmt::Debug for LocalWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalWallet")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl MessageSigner for LocalWallet {
    async fn sign_message(&self, address: &Address, message: &[u8]) -> Result<String, SdkError> {
        if *address != self.address {
            return Err(SdkError::Signing(format!(
                "wallet {} cannot sign for {}",
                self.address, address
            )));
        }
        let signature = self
            .signer
            .sign_message_sync(message)
            .map_err(|e| SdkError::Signing(e.to_string()))?;
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}
