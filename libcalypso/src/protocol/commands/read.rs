// libcalypso/src/protocol/commands/read.rs

use crate::constants::READ_RECORD_TEMPLATE;
use crate::protocol::ClassByte;

/// Encode a READ RECORD command for record `record` of the current file.
/// Layout: cla(1) + ins(1) + record(1) + p2(1) + le(1)
pub fn encode_read_record(cla: ClassByte, record: u8) -> [u8; 5] {
    let mut buf = READ_RECORD_TEMPLATE;
    buf[0] = cla.as_u8();
    buf[2] = record;
    buf
}
