//! Transaction Building and Signing
//!
//! Builds legacy-format messages locally and signs them with the dev wallet
//! key. Only the system program's transfer instruction is needed here.

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::keys::{Keypair, Pubkey, SIGNATURE_LENGTH};

/// Lamports per SOL
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// The system program id, `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new([0u8; 32]);

/// Index of the transfer variant in the system program's instruction enum
const SYSTEM_TRANSFER_INDEX: u32 = 2;

/// A 32-byte recent blockhash
pub type Hash = [u8; 32];

/// An account referenced by an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

/// A single program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

/// Build a system program transfer of `lamports` from `from` to `to`
pub fn system_transfer(from: &Pubkey, to: &Pubkey, lamports: u64) -> Instruction {
    let mut data = Vec::with_capacity(12);
    data.extend_from_slice(&SYSTEM_TRANSFER_INDEX.to_le_bytes());
    data.extend_from_slice(&lamports.to_le_bytes());

    Instruction {
        program_id: SYSTEM_PROGRAM_ID,
        accounts: vec![
            AccountMeta {
                pubkey: *from,
                is_signer: true,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *to,
                is_signer: false,
                is_writable: true,
            },
        ],
        data,
    }
}

/// Read the lamport amount back out of a system transfer's data
pub fn transfer_lamports(data: &[u8]) -> Option<u64> {
    let (index, amount) = data.split_first_chunk::<4>()?;
    if u32::from_le_bytes(*index) != SYSTEM_TRANSFER_INDEX {
        return None;
    }
    let amount: [u8; 8] = amount.try_into().ok()?;
    Some(u64::from_le_bytes(amount))
}

/// Message header counting the signer and read-only accounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageHeader {
    pub num_required_signatures: u8,
    pub num_readonly_signed_accounts: u8,
    pub num_readonly_unsigned_accounts: u8,
}

/// An instruction with its accounts replaced by indices into the message's
/// account list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub accounts: Vec<u8>,
    pub data: Vec<u8>,
}

/// A legacy message: the part of a transaction covered by the signatures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: MessageHeader,
    pub account_keys: Vec<Pubkey>,
    pub recent_blockhash: Hash,
    pub instructions: Vec<CompiledInstruction>,
}

impl Message {
    /// Compile instructions into a message paid for by `payer`.
    ///
    /// Account keys are deduplicated with their signer/writable flags merged,
    /// then ordered writable signers, read-only signers, writable
    /// non-signers, read-only non-signers. The payer is always first.
    pub fn new(instructions: &[Instruction], payer: &Pubkey, recent_blockhash: Hash) -> Self {
        let mut metas: Vec<AccountMeta> = vec![AccountMeta {
            pubkey: *payer,
            is_signer: true,
            is_writable: true,
        }];

        let mut merge = |meta: AccountMeta| {
            match metas.iter_mut().find(|m| m.pubkey == meta.pubkey) {
                Some(existing) => {
                    existing.is_signer |= meta.is_signer;
                    existing.is_writable |= meta.is_writable;
                }
                None => metas.push(meta),
            }
        };

        for ix in instructions {
            for meta in &ix.accounts {
                merge(*meta);
            }
            merge(AccountMeta {
                pubkey: ix.program_id,
                is_signer: false,
                is_writable: false,
            });
        }

        // Stable sort keeps the payer ahead of every other writable signer
        metas.sort_by_key(|m| match (m.is_signer, m.is_writable) {
            (true, true) => 0,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        });

        let count = |signer: bool, writable: bool| {
            metas
                .iter()
                .filter(|m| m.is_signer == signer && m.is_writable == writable)
                .count() as u8
        };
        let header = MessageHeader {
            num_required_signatures: metas.iter().filter(|m| m.is_signer).count() as u8,
            num_readonly_signed_accounts: count(true, false),
            num_readonly_unsigned_accounts: count(false, false),
        };

        let account_keys: Vec<Pubkey> = metas.iter().map(|m| m.pubkey).collect();
        let index_of = |key: &Pubkey| {
            account_keys
                .iter()
                .position(|k| k == key)
                .unwrap_or_default() as u8
        };

        let instructions = instructions
            .iter()
            .map(|ix| CompiledInstruction {
                program_id_index: index_of(&ix.program_id),
                accounts: ix.accounts.iter().map(|m| index_of(&m.pubkey)).collect(),
                data: ix.data.clone(),
            })
            .collect();

        Self {
            header,
            account_keys,
            recent_blockhash,
            instructions,
        }
    }

    /// Serialize to the wire format that signatures are computed over
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(128 + 32 * self.account_keys.len());

        out.push(self.header.num_required_signatures);
        out.push(self.header.num_readonly_signed_accounts);
        out.push(self.header.num_readonly_unsigned_accounts);

        encode_compact_u16(&mut out, self.account_keys.len() as u16);
        for key in &self.account_keys {
            out.extend_from_slice(key.as_bytes());
        }

        out.extend_from_slice(&self.recent_blockhash);

        encode_compact_u16(&mut out, self.instructions.len() as u16);
        for ix in &self.instructions {
            out.push(ix.program_id_index);
            encode_compact_u16(&mut out, ix.accounts.len() as u16);
            out.extend_from_slice(&ix.accounts);
            encode_compact_u16(&mut out, ix.data.len() as u16);
            out.extend_from_slice(&ix.data);
        }

        out
    }

    /// Base64 of the serialized message, as `getFeeForMessage` expects
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.serialize())
    }
}

/// A message plus the signatures of its required signers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub signatures: Vec<[u8; SIGNATURE_LENGTH]>,
    pub message: Message,
}

impl Transaction {
    /// Sign `message` with the single fee-paying keypair
    pub fn sign(message: Message, payer: &Keypair) -> Self {
        let signature = payer.sign(&message.serialize());
        Self {
            signatures: vec![signature],
            message,
        }
    }

    /// Transaction id: base-58 of the first signature
    pub fn id(&self) -> Option<String> {
        self.signatures
            .first()
            .map(|sig| bs58::encode(sig).into_string())
    }

    pub fn serialize(&self) -> Vec<u8> {
        let message = self.message.serialize();
        let mut out =
            Vec::with_capacity(3 + SIGNATURE_LENGTH * self.signatures.len() + message.len());

        encode_compact_u16(&mut out, self.signatures.len() as u16);
        for sig in &self.signatures {
            out.extend_from_slice(sig);
        }
        out.extend_from_slice(&message);
        out
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.serialize())
    }
}

/// Append `value` as a compact-u16: 7 bits per byte, low bits first, high
/// bit set on every byte but the last.
pub fn encode_compact_u16(out: &mut Vec<u8>, value: u16) {
    let mut rem = value;
    loop {
        let mut byte = (rem & 0x7f) as u8;
        rem >>= 7;
        if rem == 0 {
            out.push(byte);
            return;
        }
        byte |= 0x80;
        out.push(byte);
    }
}

/// Format lamports as SOL with 9 decimal places
pub fn format_sol(lamports: u64) -> String {
    format!(
        "{}.{:09} SOL",
        lamports / LAMPORTS_PER_SOL,
        lamports % LAMPORTS_PER_SOL
    )
}

/// Parse a SOL amount string to lamports.
///
/// Accepts a plain decimal with at most 9 fractional digits. Amounts that
/// do not fit in a u64 are rejected.
pub fn parse_sol(sol: &str) -> Option<u64> {
    let amount = sol.trim().trim_end_matches("SOL").trim();
    let (whole, frac) = amount.split_once('.').unwrap_or((amount, ""));

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    let digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !digits(whole) || !digits(frac) || frac.len() > 9 {
        return None;
    }

    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let frac: u64 = if frac.is_empty() {
        0
    } else {
        format!("{:0<9}", frac).parse().ok()?
    };

    whole.checked_mul(LAMPORTS_PER_SOL)?.checked_add(frac)
}
