// libcalypso/src/protocol/commands/select.rs

use crate::constants::SELECT_TEMPLATE;
use crate::protocol::ClassByte;

/// Encode a SELECT FILE command.
/// Layout: cla(1) + ins(1) + p1(1) + p2(1) + lc(1) + dir(1) + app(1) + le(1)
pub fn encode_select(cla: ClassByte, directory: u8, app: u8) -> [u8; 8] {
    let mut buf = SELECT_TEMPLATE;
    buf[0] = cla.as_u8();
    buf[5] = directory;
    buf[6] = app;
    buf
}
