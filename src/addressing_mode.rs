use super::memory::RAM as Memory;
use super::memory::{little_endian, AddressableIO, MemoryError};
use super::registers::{Register, Registers};
use std::fmt;

#[derive(Debug, Eq, PartialEq, Clone)]
pub struct AddressingModeResolution {
    pub operands: Vec<u8>,
    pub addressing_mode: AddressingMode,
    pub target_address: Option<u16>,
}

impl AddressingModeResolution {
    fn new(operands: Vec<u8>, addressing_mode: AddressingMode, target_address: Option<u16>) -> Self {
        AddressingModeResolution {
            operands,
            addressing_mode,
            target_address,
        }
    }
}

impl fmt::Display for AddressingModeResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target_address {
            Some(addr) => write!(f, "(#0x{:04X})", addr),
            None => write!(f, "         "),
        }
    }
}

/*
 * AddressingMode
 * Operand bytes following an opcode. Immediate is a single byte read right
 * after the opcode, Extended is a 16 bits word stored low byte first.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum AddressingMode {
    Implied,
    Immediate([u8; 1]),
    Extended([u8; 2]),
}

impl AddressingMode {
    pub fn solve(&self, opcode_address: u16) -> AddressingModeResolution {
        match *self {
            AddressingMode::Implied => AddressingModeResolution::new(vec![], *self, None),
            AddressingMode::Immediate(v) => AddressingModeResolution::new(
                vec![v[0]],
                *self,
                Some(opcode_address.wrapping_add(1)),
            ),
            AddressingMode::Extended(v) => {
                AddressingModeResolution::new(v.to_vec(), *self, Some(little_endian(&v)))
            }
        }
    }

    pub fn get_operands(&self) -> Vec<u8> {
        match *self {
            AddressingMode::Implied => vec![],
            AddressingMode::Immediate(v) => v.to_vec(),
            AddressingMode::Extended(v) => v.to_vec(),
        }
    }

    /// Encoded length of the instruction, opcode included.
    pub fn instruction_len(&self) -> u16 {
        1 + self.get_operands().len() as u16
    }

    pub fn byte(&self) -> Option<u8> {
        match *self {
            AddressingMode::Immediate(v) => Some(v[0]),
            _ => None,
        }
    }

    pub fn word(&self) -> Option<u16> {
        match *self {
            AddressingMode::Extended(v) => Some(little_endian(&v)),
            _ => None,
        }
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            AddressingMode::Implied => write!(f, ""),
            AddressingMode::Immediate(v) => write!(f, "${:02x}", v[0]),
            AddressingMode::Extended(v) => write!(f, "${:04x}", little_endian(&v)),
        }
    }
}

/*
 * OperandSize
 * How many operand bytes the decoder fetches after an opcode.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum OperandSize {
    None,
    Byte,
    Word,
}

impl OperandSize {
    pub fn fetch(&self, opcode_address: u16, memory: &Memory) -> Result<AddressingMode, MemoryError> {
        let operand_address = opcode_address as usize + 1;
        match *self {
            OperandSize::None => Ok(AddressingMode::Implied),
            OperandSize::Byte => {
                let bytes = memory.read(operand_address, 1)?;
                Ok(AddressingMode::Immediate([bytes[0]]))
            }
            OperandSize::Word => {
                let bytes = memory.read(operand_address, 2)?;
                Ok(AddressingMode::Extended([bytes[0], bytes[1]]))
            }
        }
    }
}

/*
 * Location
 * 8 bits source or destination encoded on 3 bits in the opcode, the
 * value 6 stands for the memory byte addressed by HL.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Location {
    Register(Register),
    IndirectHL,
}

impl Location {
    pub fn from_code(code: u8) -> Location {
        match code & 0b111 {
            0 => Location::Register(Register::B),
            1 => Location::Register(Register::C),
            2 => Location::Register(Register::D),
            3 => Location::Register(Register::E),
            4 => Location::Register(Register::H),
            5 => Location::Register(Register::L),
            6 => Location::IndirectHL,
            _ => Location::Register(Register::A),
        }
    }

    pub fn read(&self, registers: &Registers, memory: &Memory) -> Result<u8, MemoryError> {
        match *self {
            Location::Register(register) => Ok(registers.get(register)),
            Location::IndirectHL => memory.read_byte(registers.get_hl()),
        }
    }

    pub fn write(
        &self,
        registers: &mut Registers,
        memory: &mut Memory,
        value: u8,
    ) -> Result<(), MemoryError> {
        match *self {
            Location::Register(register) => {
                registers.set(register, value);
                Ok(())
            }
            Location::IndirectHL => memory.write_byte(registers.get_hl(), value),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Register(register) => write!(f, "{}", register),
            Location::IndirectHL => write!(f, "(HL)"),
        }
    }
}

/*
 * RegisterPair
 * 16 bits operand encoded on bits 5-4 of the opcode. Code 0 (BC) is not
 * part of this instruction set.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum RegisterPair {
    DE,
    HL,
    SP,
}

impl RegisterPair {
    pub fn from_code(code: u8) -> Option<RegisterPair> {
        match code & 0b11 {
            1 => Some(RegisterPair::DE),
            2 => Some(RegisterPair::HL),
            3 => Some(RegisterPair::SP),
            _ => None,
        }
    }

    pub fn get(&self, registers: &Registers) -> u16 {
        match *self {
            RegisterPair::DE => registers.get_de(),
            RegisterPair::HL => registers.get_hl(),
            RegisterPair::SP => registers.stack_pointer,
        }
    }

    pub fn set(&self, registers: &mut Registers, value: u16) {
        match *self {
            RegisterPair::DE => registers.set_de(value),
            RegisterPair::HL => registers.set_hl(value),
            RegisterPair::SP => registers.stack_pointer = value,
        }
    }
}

impl fmt::Display for RegisterPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegisterPair::DE => write!(f, "DE"),
            RegisterPair::HL => write!(f, "HL"),
            RegisterPair::SP => write!(f, "SP"),
        }
    }
}

/*
 * Condition
 * Branch condition encoded on bits 4-3 of conditional jumps, calls and
 * returns.
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Condition {
    NonZero,
    Zero,
    NoCarry,
    Carry,
}

impl Condition {
    pub fn from_code(code: u8) -> Condition {
        match code & 0b11 {
            0 => Condition::NonZero,
            1 => Condition::Zero,
            2 => Condition::NoCarry,
            _ => Condition::Carry,
        }
    }

    pub fn is_met(&self, registers: &Registers) -> bool {
        match *self {
            Condition::NonZero => !registers.z_flag_is_set(),
            Condition::Zero => registers.z_flag_is_set(),
            Condition::NoCarry => !registers.c_flag_is_set(),
            Condition::Carry => registers.c_flag_is_set(),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::NonZero => write!(f, "NZ"),
            Condition::Zero => write!(f, "Z"),
            Condition::NoCarry => write!(f, "NC"),
            Condition::Carry => write!(f, "C"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_implied() {
        let am = AddressingMode::Implied;
        let resolution = am.solve(0x1000);

        assert_eq!(0, resolution.operands.len());
        assert_eq!(None, resolution.target_address);
        assert_eq!(1, am.instruction_len());
    }

    #[test]
    fn test_immediate() {
        let am = AddressingMode::Immediate([0x21]);
        let resolution = am.solve(0x1000);

        assert_eq!(vec![0x21], resolution.operands);
        assert_eq!(Some(0x1001), resolution.target_address);
        assert_eq!(Some(0x21), am.byte());
        assert_eq!(2, am.instruction_len());
        assert_eq!("$21", format!("{}", am));
    }

    #[test]
    fn test_extended() {
        let am = AddressingMode::Extended([0x34, 0x12]);
        let resolution = am.solve(0x1000);

        assert_eq!(vec![0x34, 0x12], resolution.operands);
        assert_eq!(Some(0x1234), resolution.target_address);
        assert_eq!(Some(0x1234), am.word());
        assert_eq!(3, am.instruction_len());
        assert_eq!("$1234", format!("{}", am));
    }

    #[test]
    fn test_fetch_operands() {
        let mut memory = Memory::default();
        memory.write(0x1000, &[0xcd, 0x0a, 0x02]).unwrap();
        assert_eq!(
            AddressingMode::Extended([0x0a, 0x02]),
            OperandSize::Word.fetch(0x1000, &memory).unwrap()
        );
        assert_eq!(
            AddressingMode::Immediate([0x0a]),
            OperandSize::Byte.fetch(0x1000, &memory).unwrap()
        );
        assert_eq!(
            AddressingMode::Implied,
            OperandSize::None.fetch(0x1000, &memory).unwrap()
        );
    }

    #[test]
    fn test_fetch_past_end_of_memory() {
        let memory = Memory::new(0x10).unwrap();
        assert_eq!(
            MemoryError::ReadOverflow(2, 0x0f, 0x10),
            OperandSize::Word.fetch(0x0e, &memory).unwrap_err()
        );
    }

    #[test]
    fn test_location() {
        let mut memory = Memory::default();
        let mut registers = Registers::new(0x0000);
        registers.set_hl(0x8000);
        assert_eq!(Location::Register(Register::B), Location::from_code(0));
        assert_eq!(Location::Register(Register::A), Location::from_code(7));
        assert_eq!(Location::IndirectHL, Location::from_code(6));

        Location::IndirectHL.write(&mut registers, &mut memory, 0x41).unwrap();
        assert_eq!(0x41, memory.read_byte(0x8000).unwrap());
        assert_eq!(0x41, Location::IndirectHL.read(&registers, &memory).unwrap());
        Location::from_code(3).write(&mut registers, &mut memory, 0x07).unwrap();
        assert_eq!(0x07, registers.register_e);
        assert_eq!("(HL)", format!("{}", Location::IndirectHL));
    }

    #[test]
    fn test_register_pair() {
        let mut registers = Registers::new(0x0000);
        assert_eq!(None, RegisterPair::from_code(0));
        RegisterPair::from_code(1).unwrap().set(&mut registers, 0x1234);
        assert_eq!(0x12, registers.register_d);
        assert_eq!(0x34, registers.register_e);
        RegisterPair::from_code(3).unwrap().set(&mut registers, 0x4000);
        assert_eq!(0x4000, registers.stack_pointer);
        assert_eq!(0x4000, RegisterPair::SP.get(&registers));
    }

    #[test]
    fn test_condition() {
        let mut registers = Registers::new(0x0000);
        assert!(Condition::NonZero.is_met(&registers));
        assert!(Condition::NoCarry.is_met(&registers));
        registers.set_z_flag(true);
        registers.set_c_flag(true);
        assert!(Condition::Zero.is_met(&registers));
        assert!(Condition::Carry.is_met(&registers));
        assert!(!Condition::from_code(0).is_met(&registers));
        assert!(!Condition::from_code(2).is_met(&registers));
    }
}
