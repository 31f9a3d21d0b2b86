use std::fmt;
use super::flags::{CF, HF, NF, PF, SF, ZF};
use super::memory::{AddressableIO, MemoryError};
use super::memory::RAM as Memory;
/*
 * registers
 * A, B, C, D, E, H & L are 8 bits general purpose registers, F holds the
 * condition flags:
 * bit 7: Sign flag
 * bit 6: Zero flag
 * bit 4: Half-carry flag
 * bit 2: Parity flag (never set)
 * bit 1: Negative (subtract) flag
 * bit 0: Carry flag
 *
 * HL & DE are 16 bits views over their two 8 bits registers, high byte
 * first. There is no storage behind them.
 *
 * program counter: 16 bits address of the next opcode.
 * stack pointer: 16 bits, grows downward, set at 0xFFFE at start.
 */
pub const TOP_OF_STACK: u16 = 0xfffe;

#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::D => "D",
            Register::E => "E",
            Register::H => "H",
            Register::L => "L",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Registers {
    pub accumulator:        u8,
    pub register_b:         u8,
    pub register_c:         u8,
    pub register_d:         u8,
    pub register_e:         u8,
    pub register_h:         u8,
    pub register_l:         u8,
    pub status_register:    u8,
    pub program_counter:    u16,
    pub stack_pointer:      u16,
    pub halted:             bool,
}

impl Registers {
    pub fn new(init_address: u16) -> Registers {
        Registers::with_stack_pointer(init_address, TOP_OF_STACK)
    }

    pub fn with_stack_pointer(init_address: u16, stack_pointer: u16) -> Registers {
        Registers {
            accumulator:        0x00,
            register_b:         0x00,
            register_c:         0x00,
            register_d:         0x00,
            register_e:         0x00,
            register_h:         0x00,
            register_l:         0x00,
            status_register:    0x00,
            program_counter:    init_address,
            stack_pointer,
            halted:             false,
        }
    }

    pub fn get(&self, register: Register) -> u8 {
        match register {
            Register::A => self.accumulator,
            Register::B => self.register_b,
            Register::C => self.register_c,
            Register::D => self.register_d,
            Register::E => self.register_e,
            Register::H => self.register_h,
            Register::L => self.register_l,
        }
    }

    pub fn set(&mut self, register: Register, value: u8) {
        match register {
            Register::A => self.accumulator = value,
            Register::B => self.register_b = value,
            Register::C => self.register_c = value,
            Register::D => self.register_d = value,
            Register::E => self.register_e = value,
            Register::H => self.register_h = value,
            Register::L => self.register_l = value,
        }
    }

    pub fn get_hl(&self) -> u16 {
        (self.register_h as u16) << 8 | self.register_l as u16
    }

    pub fn set_hl(&mut self, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.register_h = high;
        self.register_l = low;
    }

    pub fn get_de(&self) -> u16 {
        (self.register_d as u16) << 8 | self.register_e as u16
    }

    pub fn set_de(&mut self, value: u16) {
        let [high, low] = value.to_be_bytes();
        self.register_d = high;
        self.register_e = low;
    }

    /*
     * The stack stores words little endian at descending addresses: the high
     * byte goes to SP-1, the low byte to SP-2 and SP ends pointing at the low
     * byte. stack_pull walks the same bytes back up.
     */
    pub fn stack_push(&mut self, memory: &mut Memory, value: u16) -> Result<(), MemoryError> {
        let sp = self
            .stack_pointer
            .checked_sub(2)
            .ok_or(MemoryError::StackOverflow(self.stack_pointer))?;
        let [low, high] = value.to_le_bytes();
        memory.write(sp as usize, &[low, high])?;
        self.stack_pointer = sp;

        Ok(())
    }

    pub fn stack_pull(&mut self, memory: &Memory) -> Result<u16, MemoryError> {
        let sp = self
            .stack_pointer
            .checked_add(2)
            .ok_or(MemoryError::StackUnderflow(self.stack_pointer))?;
        let bytes = memory.read(self.stack_pointer as usize, 2)?;
        self.stack_pointer = sp;

        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    pub fn get_status_register(&self) -> u8 {
        self.status_register
    }

    pub fn clear_flags(&mut self) {
        self.status_register = 0x00;
    }

    fn flag_is_set(&self, flag: u8) -> bool {
        self.status_register & flag == flag
    }

    fn set_flag(&mut self, flag: u8, value: bool) {
        if value {
            self.status_register |= flag;
        } else {
            self.status_register &= !flag;
        }
    }

    pub fn s_flag_is_set(&self) -> bool {
        self.flag_is_set(SF)
    }

    pub fn z_flag_is_set(&self) -> bool {
        self.flag_is_set(ZF)
    }

    pub fn h_flag_is_set(&self) -> bool {
        self.flag_is_set(HF)
    }

    pub fn p_flag_is_set(&self) -> bool {
        self.flag_is_set(PF)
    }

    pub fn n_flag_is_set(&self) -> bool {
        self.flag_is_set(NF)
    }

    pub fn c_flag_is_set(&self) -> bool {
        self.flag_is_set(CF)
    }

    pub fn set_s_flag(&mut self, flag: bool) {
        self.set_flag(SF, flag);
    }

    pub fn set_z_flag(&mut self, flag: bool) {
        self.set_flag(ZF, flag);
    }

    pub fn set_h_flag(&mut self, flag: bool) {
        self.set_flag(HF, flag);
    }

    pub fn set_n_flag(&mut self, flag: bool) {
        self.set_flag(NF, flag);
    }

    pub fn set_c_flag(&mut self, flag: bool) {
        self.set_flag(CF, flag);
    }

    pub fn format_status(&self) -> String {
        format!(
            "{}{}-{}-{}{}{}",
            if self.s_flag_is_set() { "S" } else { "s" },
            if self.z_flag_is_set() { "Z" } else { "z" },
            if self.h_flag_is_set() { "H" } else { "h" },
            if self.p_flag_is_set() { "P" } else { "p" },
            if self.n_flag_is_set() { "N" } else { "n" },
            if self.c_flag_is_set() { "C" } else { "c" },
        )
    }

    /// Register dump printed when the program halts.
    pub fn format_exit_registers(&self) -> String {
        format!(
            "A-{:02x} B-{:02x} C-{:02x} D-{:02x} E-{:02x} F-{:02x} H-{:02x} L-{:02x}",
            self.accumulator,
            self.register_b,
            self.register_c,
            self.register_d,
            self.register_e,
            self.status_register,
            self.register_h,
            self.register_l,
        )
    }
}

impl fmt::Debug for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
        f,
        "Registers [A:0x{:02x}, B:0x{:02x}, C:0x{:02x}, D:0x{:02x}, E:0x{:02x}, H:0x{:02x}, L:0x{:02x} | SP:0x{:04x} PC:0x{:04x} | {}]",
        self.accumulator,
        self.register_b,
        self.register_c,
        self.register_d,
        self.register_e,
        self.register_h,
        self.register_l,
        self.stack_pointer,
        self.program_counter,
        self.format_status()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        let registers = Registers::new(0x0000);
        assert_eq!(0xfffe, registers.stack_pointer);
        assert_eq!(0x0000, registers.program_counter);
        assert_eq!(0x00, registers.status_register);
        assert!(!registers.halted);
        assert_eq!("sz-h-pnc", registers.format_status());
    }

    #[test]
    fn test_set_flags() {
        let mut registers = Registers::new(0x1000);
        registers.set_c_flag(true);
        registers.set_z_flag(true);
        registers.set_s_flag(true);
        registers.set_h_flag(true);
        registers.set_n_flag(true);
        assert!(registers.c_flag_is_set());
        assert!(registers.z_flag_is_set());
        assert!(registers.s_flag_is_set());
        assert!(registers.h_flag_is_set());
        assert!(registers.n_flag_is_set());
        assert!(!registers.p_flag_is_set());
        assert_eq!("SZ-H-pNC", registers.format_status());
        registers.set_z_flag(false);
        assert!(!registers.z_flag_is_set());
        assert!(registers.c_flag_is_set());
        registers.clear_flags();
        assert_eq!(0x00, registers.get_status_register());
    }

    #[test]
    fn test_register_pairs() {
        let mut registers = Registers::new(0x0000);
        for value in [0x0000, 0x00ff, 0xff00, 0x1234, 0xfffe, 0xffff] {
            registers.set_hl(value);
            assert_eq!(value, registers.get_hl());
            assert_eq!((value >> 8) as u8, registers.register_h);
            assert_eq!((value & 0xff) as u8, registers.register_l);
            registers.set_de(value);
            assert_eq!(value, registers.get_de());
            assert_eq!((value >> 8) as u8, registers.register_d);
            assert_eq!((value & 0xff) as u8, registers.register_e);
        }
        registers.register_h = 0xab;
        registers.register_l = 0xcd;
        assert_eq!(0xabcd, registers.get_hl());
    }

    #[test]
    fn test_register_pairs_all_values() {
        let mut registers = Registers::new(0x0000);
        for value in 0..=0xffffu16 {
            registers.set_hl(value);
            assert_eq!(value, registers.get_hl());
        }
    }

    #[test]
    fn test_get_set_by_name() {
        let mut registers = Registers::new(0x0000);
        registers.set(Register::C, 0x42);
        assert_eq!(0x42, registers.register_c);
        assert_eq!(0x42, registers.get(Register::C));
        registers.set(Register::A, 0x01);
        assert_eq!(0x01, registers.accumulator);
    }

    #[test]
    fn test_stack_push() {
        let mut memory = Memory::default();
        let mut registers = Registers::new(0x0000);
        registers.stack_push(&mut memory, 0x1234).unwrap();
        assert_eq!(0xfffc, registers.stack_pointer);
        assert_eq!(vec![0x34, 0x12], memory.read(0xfffc, 2).unwrap());
    }

    #[test]
    fn test_stack_round_trip() {
        let mut memory = Memory::default();
        let mut registers = Registers::new(0x0000);
        let values = [0x0003, 0x1234, 0xffff, 0x0000, 0x8001];
        for value in values {
            registers.stack_push(&mut memory, value).unwrap();
        }
        assert_eq!(0xfffe - 2 * values.len() as u16, registers.stack_pointer);
        for value in values.iter().rev() {
            assert_eq!(*value, registers.stack_pull(&memory).unwrap());
        }
        assert_eq!(0xfffe, registers.stack_pointer);
    }

    #[test]
    fn test_stack_overflow() {
        let mut memory = Memory::new(0x100).unwrap();
        let mut registers = Registers::with_stack_pointer(0x0000, 0x0001);
        assert_eq!(
            MemoryError::StackOverflow(0x0001),
            registers.stack_push(&mut memory, 0x1234).unwrap_err()
        );
        assert_eq!(0x0001, registers.stack_pointer);
    }

    #[test]
    fn test_stack_outside_memory() {
        let mut memory = Memory::new(0x100).unwrap();
        let mut registers = Registers::new(0x0000);
        assert_eq!(
            MemoryError::WriteOverflow(2, 0xfffc, 0x100),
            registers.stack_push(&mut memory, 0x1234).unwrap_err()
        );
        assert_eq!(0xfffe, registers.stack_pointer);
    }

    #[test]
    fn test_stack_underflow() {
        let memory = Memory::default();
        let mut registers = Registers::with_stack_pointer(0x0000, 0xffff);
        assert_eq!(
            MemoryError::StackUnderflow(0xffff),
            registers.stack_pull(&memory).unwrap_err()
        );
    }
}
