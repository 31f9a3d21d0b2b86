#[test]
fn read_program() {
    use softz8::{disassemble, AddressableIO, Memory};

    let init_vector: u16 = 0x0800;
    let mut memory = Memory::default();
    memory
        .write(
            init_vector as usize,
            &[
                0x21, 0x00, 0x80, 0x36, 0x41, 0x78, 0x86, 0xfe, 0x0a, 0xca, 0x00, 0x08, 0xd4, 0x34,
                0x12, 0xc8, 0xdd, 0x1a, 0x76,
            ],
        )
        .unwrap();
    let expected_output: Vec<&str> = vec![
        "#0x0800: (21 00 80)    LD HL,$8000",
        "#0x0803: (36 41)       LD (HL),$41",
        "#0x0805: (78)          LD A,B",
        "#0x0806: (86)          ADD A,(HL)",
        "#0x0807: (fe 0a)       CP $0a",
        "#0x0809: (ca 00 08)    JP Z,$0800",
        "#0x080C: (d4 34 12)    CALL NC,$1234",
        "#0x080F: (c8)          RET Z",
        "#0x0810: (dd)          DB   $dd",
        "#0x0811: (1a)          LD A,(DE)",
        "#0x0812: (76)          HALT",
    ];
    let output = disassemble(init_vector, 0x0813, &memory).unwrap();

    assert_eq!(expected_output.len(), output.len());
    for (expected, line) in expected_output.iter().zip(output.iter()) {
        assert_eq!(*expected, line.trim());
    }
}

#[test]
fn stop_at_end_of_memory() {
    use softz8::{disassemble, AddressableIO, Memory};

    let mut memory = Memory::new(0x04).unwrap();
    memory.write(0x00, &[0x00, 0x00, 0x00, 0xc3]).unwrap();
    let output = disassemble(0x0000, 0x0010, &memory);

    // the last JP has no room for its operand
    assert!(output.is_ok());
    let output = output.unwrap();
    assert_eq!(4, output.len());
    assert_eq!("#0x0003: (c3)          DB   $c3", output[3].trim());
}
