//! Flag register layout and flag derivation for arithmetic results.
//!
//! The bit layout follows the Z80 F register. Both derivations rebuild the
//! whole flag byte: no flag survives an arithmetic or compare instruction.

/// Sign flag (bit 7), copy of bit 7 of the result.
pub const SF: u8 = 0b1000_0000;

/// Zero flag (bit 6).
pub const ZF: u8 = 0b0100_0000;

/// Half-carry flag (bit 4), carry or borrow between bit 3 and bit 4.
pub const HF: u8 = 0b0001_0000;

/// Parity flag (bit 2).
///
/// Part of the layout but never computed: every derivation leaves it clear.
/// An even-parity computation would plug in here.
pub const PF: u8 = 0b0000_0100;

/// Negative flag (bit 1), set when the last operation was a subtraction.
pub const NF: u8 = 0b0000_0010;

/// Carry flag (bit 0), carry out of or borrow into bit 7.
pub const CF: u8 = 0b0000_0001;

fn sign_and_zero(result: u8) -> u8 {
    let mut flags = 0;
    if result == 0 {
        flags |= ZF;
    }
    if result & 0x80 != 0 {
        flags |= SF;
    }
    flags
}

/// Flags of `a + b`, `result` being the sum already wrapped to 8 bits.
#[must_use]
pub fn derive_add(a: u8, b: u8, result: u8) -> u8 {
    let mut flags = sign_and_zero(result);
    if (a & 0x0f) + (b & 0x0f) > 0x0f {
        flags |= HF;
    }
    // the wrapped sum is smaller than an operand only if bit 7 carried out
    if result < a {
        flags |= CF;
    }
    flags
}

/// Flags of `a - b`, `result` being the difference already wrapped to 8 bits.
#[must_use]
pub fn derive_sub(a: u8, b: u8, result: u8) -> u8 {
    let mut flags = sign_and_zero(result) | NF;
    if (a & 0x0f) < (b & 0x0f) {
        flags |= HF;
    }
    if a < b {
        flags |= CF;
    }
    flags
}
