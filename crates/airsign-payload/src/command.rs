//! Known command codes.
//!
//! The command byte is opaque to the codec: any value round-trips. These
//! constants name the codes air-gapped signers act on today.

/// Sign a mortal transaction payload.
pub const SIGN_MORTAL_TRANSACTION: u8 = 0x00;

/// Sign a pre-hashed transaction payload.
pub const SIGN_TRANSACTION_HASH: u8 = 0x01;

/// Sign an immortal transaction payload.
pub const SIGN_IMMORTAL_TRANSACTION: u8 = 0x02;

/// Sign a free-form message.
pub const SIGN_MESSAGE: u8 = 0x03;

/// Returns a human-readable name for a command code.
pub fn command_name(command: u8) -> &'static str {
    match command {
        SIGN_MORTAL_TRANSACTION => "SIGN_MORTAL_TRANSACTION",
        SIGN_TRANSACTION_HASH => "SIGN_TRANSACTION_HASH",
        SIGN_IMMORTAL_TRANSACTION => "SIGN_IMMORTAL_TRANSACTION",
        SIGN_MESSAGE => "SIGN_MESSAGE",
        _ => "UNKNOWN",
    }
}

/// Returns true if the command signs a transaction rather than a message.
pub fn is_transaction(command: u8) -> bool {
    command <= SIGN_IMMORTAL_TRANSACTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_known_commands() {
        assert_eq!(command_name(0x00), "SIGN_MORTAL_TRANSACTION");
        assert_eq!(command_name(0x03), "SIGN_MESSAGE");
        assert_eq!(command_name(0x7f), "UNKNOWN");
    }

    #[test]
    fn message_is_not_a_transaction() {
        assert!(is_transaction(SIGN_IMMORTAL_TRANSACTION));
        assert!(!is_transaction(SIGN_MESSAGE));
    }
}
