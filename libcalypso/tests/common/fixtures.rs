// fixtures.rs — sample APDUs and card dumps shared by the integration tests

use libcalypso::card::CardDump;
use libcalypso::test_support::{navigo_dump, opus_dump};

pub const CARD_NUMBER: u32 = 0x1234_5678;

fn select_hex(cla: &str, dir: u8, app: u8) -> String {
    format!("{}a4000002{:02x}{:02x}00", cla, dir, app)
}

fn read_hex(cla: &str, record: u8) -> String {
    format!("{}b2{:02x}041d", cla, record)
}

/// The select/read APDUs a full Navigo read sends, as hex. `cla` is the
/// class byte in hex ("94" or "00").
pub fn navigo_command_hex(contract_reads: u8, cla: &str) -> Vec<String> {
    let mut cmds = vec![
        select_hex(cla, 0x00, 0x02),
        read_hex(cla, 1),
        select_hex(cla, 0x20, 0x00),
        select_hex(cla, 0x20, 0x01),
        read_hex(cla, 1),
        select_hex(cla, 0x20, 0x20),
    ];
    cmds.extend((1..=contract_reads).map(|r| read_hex(cla, r)));
    cmds.push(select_hex(cla, 0x20, 0x69));
    cmds.push(read_hex(cla, 1));
    cmds.push(select_hex(cla, 0x20, 0x10));
    cmds.extend((1..=3).map(|r| read_hex(cla, r)));
    cmds
}

pub fn sent_hex(sent: &[Vec<u8>]) -> Vec<String> {
    sent.iter().map(hex::encode).collect()
}

pub fn navigo_card(tariffs: &[u16]) -> CardDump {
    navigo_dump(CARD_NUMBER, tariffs)
}

pub fn opus_card() -> CardDump {
    opus_dump(CARD_NUMBER)
}

/// Dump text in the on-disk format, built with the hex crate so the text
/// does not depend on the crate's own encoder.
pub fn dump_text(dump: &CardDump) -> String {
    let mut lines = vec!["# fixture".to_string()];
    let mut add = |kind: &str, payload: &[u8]| lines.push(format!("{}: {}", kind, hex::encode(payload)));
    if let Some(icc) = &dump.icc {
        add("icc", icc);
    }
    if let Some(env) = &dump.environment {
        add("environment", env);
    }
    for c in &dump.contracts {
        add("contract", c);
    }
    if let Some(c) = &dump.counters {
        add("counters", c);
    }
    for e in &dump.events {
        add("event", e);
    }
    lines.join("\n")
}
