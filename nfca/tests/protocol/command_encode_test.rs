use nfca::protocol::{CascadeLevel, Command};

#[test]
fn command_encoding_table() {
    let cases: Vec<(Command, Vec<u8>)> = vec![
        (Command::Request, vec![0x26]),
        (
            Command::Anticollision {
                level: CascadeLevel::One,
            },
            vec![0x93, 0x20],
        ),
        (
            Command::Anticollision {
                level: CascadeLevel::Two,
            },
            vec![0x95, 0x20],
        ),
        (
            Command::Select {
                level: CascadeLevel::Two,
                cascade: vec![0x05, 0x06, 0x07, 0x08, 0x0C],
            },
            vec![0x95, 0x70, 0x05, 0x06, 0x07, 0x08, 0x0C],
        ),
        (Command::Read { block: 3 }, vec![0x30, 0x03]),
        (Command::Halt, vec![0x50, 0x00]),
    ];
    for (cmd, expected) in cases {
        assert_eq!(cmd.encode(), expected, "{cmd:?}");
    }
}

#[test]
fn only_request_is_a_short_frame() {
    assert_eq!(Command::Request.short_frame_bits(), Some(7));
    assert_eq!(Command::Halt.short_frame_bits(), None);
    assert_eq!(Command::Read { block: 0 }.short_frame_bits(), None);
}
