//! Key Management
//!
//! The dev wallet is a single ed25519 keypair stored on disk as a JSON array
//! of 64 integers: the 32-byte secret seed followed by the 32-byte public key.
//! Public keys are displayed and parsed as base-58.

use ed25519_dalek::{Signer, SigningKey, KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH};
use rand::rngs::OsRng;
use std::{
    fmt, fs,
    io::{self, Write},
    path::Path,
    str::FromStr,
};
use tracing::debug;

use crate::error::{Error, Result};

/// Length of an ed25519 signature in bytes
pub const SIGNATURE_LENGTH: usize = ed25519_dalek::SIGNATURE_LENGTH;

/// A 32-byte account address
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pubkey([u8; PUBLIC_KEY_LENGTH]);

impl Pubkey {
    pub const fn new(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.0
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", bs58::encode(self.0).into_string())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self)
    }
}

impl FromStr for Pubkey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidPubkey {
            input: s.to_string(),
            reason,
        };

        let bytes = bs58::decode(s.trim())
            .into_vec()
            .map_err(|e| invalid(e.to_string()))?;
        let bytes: [u8; PUBLIC_KEY_LENGTH] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| invalid(format!("expected 32 bytes, got {}", v.len())))?;

        Ok(Self(bytes))
    }
}

/// The signing keypair used for every outgoing operation.
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a fresh keypair from the OS random number generator
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Build a keypair from its 64-byte secret key form.
    ///
    /// The trailing 32 bytes must be the public key of the leading seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; KEYPAIR_LENGTH] = bytes
            .try_into()
            .map_err(|_| Error::KeypairLength(bytes.len()))?;

        let signing_key =
            SigningKey::from_keypair_bytes(bytes).map_err(|_| Error::KeypairMismatch)?;

        Ok(Self { signing_key })
    }

    /// Load a keypair from a JSON byte array file
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::KeypairIo {
            path: path.to_path_buf(),
            source,
        })?;

        let bytes: Vec<u8> = serde_json::from_str(&contents)?;
        let keypair = Self::from_bytes(&bytes)?;

        debug!("Loaded keypair {} from {}", keypair.pubkey(), path.display());
        Ok(keypair)
    }

    /// Write the keypair as a JSON byte array, refusing to clobber an
    /// existing file unless `overwrite` is set.
    pub fn write_to_file(&self, path: impl AsRef<Path>, overwrite: bool) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string(&self.to_bytes().to_vec())?;

        let io_error = |source: io::Error| match source.kind() {
            io::ErrorKind::AlreadyExists => Error::KeypairExists(path.to_path_buf()),
            _ => Error::KeypairIo {
                path: path.to_path_buf(),
                source,
            },
        };

        let mut options = fs::OpenOptions::new();
        options.write(true);
        if overwrite {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        // Secret key material: owner read/write only
        #[cfg(unix)]
        {
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
            options.mode(0o600);
            let mut file = options.open(path).map_err(io_error)?;
            // mode() only applies on creation, so tighten a reused file too
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(io_error)?;
            file.write_all(json.as_bytes()).map_err(io_error)
        }

        #[cfg(not(unix))]
        {
            let mut file = options.open(path).map_err(io_error)?;
            file.write_all(json.as_bytes()).map_err(io_error)
        }
    }

    pub fn pubkey(&self) -> Pubkey {
        Pubkey(self.signing_key.verifying_key().to_bytes())
    }

    /// Secret seed followed by the public key
    pub fn to_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        self.signing_key.to_keypair_bytes()
    }

    /// Sign an arbitrary message
    pub fn sign(&self, message: &[u8]) -> [u8; SIGNATURE_LENGTH] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("pubkey", &self.pubkey())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signature, Verifier, VerifyingKey};
    use tempfile::TempDir;

    #[test]
    fn test_pubkey_roundtrip() {
        let key: Pubkey = "HrK9NkuGnVnu6TsEvRfdDhsnTBEH89VtGnANyTCUAyXm".parse().unwrap();
        assert_eq!(key.to_string(), "HrK9NkuGnVnu6TsEvRfdDhsnTBEH89VtGnANyTCUAyXm");
    }

    #[test]
    fn test_system_program_is_all_zeroes() {
        let key: Pubkey = "11111111111111111111111111111111".parse().unwrap();
        assert_eq!(key, Pubkey::default());
    }

    #[test]
    fn test_pubkey_rejects_bad_input() {
        assert!("not-base58-0OIl".parse::<Pubkey>().is_err());
        // valid base58, wrong length
        assert!("3yZe7d".parse::<Pubkey>().is_err());
    }

    #[test]
    fn test_keypair_file_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dev-wallet.json");

        let keypair = Keypair::generate();
        keypair.write_to_file(&path, false).unwrap();

        let loaded = Keypair::read_from_file(&path).unwrap();
        assert_eq!(loaded.pubkey(), keypair.pubkey());
        assert_eq!(loaded.to_bytes(), keypair.to_bytes());
    }

    #[test]
    fn test_write_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dev-wallet.json");

        Keypair::generate().write_to_file(&path, false).unwrap();
        let err = Keypair::generate().write_to_file(&path, false).unwrap_err();
        assert!(matches!(err, Error::KeypairExists(_)));

        Keypair::generate().write_to_file(&path, true).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_keypair_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dev-wallet.json");

        Keypair::generate().write_to_file(&path, false).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_tightens_existing_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dev-wallet.json");
        fs::write(&path, "[]").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let keypair = Keypair::generate();
        keypair.write_to_file(&path, true).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
        assert_eq!(Keypair::read_from_file(&path).unwrap().pubkey(), keypair.pubkey());
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = Keypair::from_bytes(&[1u8; 32]).unwrap_err();
        assert!(matches!(err, Error::KeypairLength(32)));
    }

    #[test]
    fn test_mismatched_public_half_rejected() {
        let mut bytes = Keypair::generate().to_bytes();
        bytes[63] ^= 0xff;
        let err = Keypair::from_bytes(&bytes).unwrap_err();
        assert!(matches!(err, Error::KeypairMismatch));
    }

    #[test]
    fn test_non_json_file_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("dev-wallet.json");
        std::fs::write(&path, "not json").unwrap();

        let err = Keypair::read_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::KeypairJson(_)));
    }

    #[test]
    fn test_signature_verifies() {
        let keypair = Keypair::generate();
        let message = b"devnet";
        let signature = Signature::from_bytes(&keypair.sign(message));

        let verifying_key = VerifyingKey::from_bytes(keypair.pubkey().as_bytes()).unwrap();
        assert!(verifying_key.verify(message, &signature).is_ok());
    }
}
