//! BDS 1,0 — Datalink capability report (ICAO 9871 Table A-2-16)
//!
//! The tag byte `0x10` is necessary but not sufficient: the reserved field
//! must also be zero before the decoder commits, since a tag-byte-only
//! match is too weak on its own to out-score a structural decoder on an
//! ambiguous payload.

use super::{DecodeContext, Decoder};
use crate::bits::bits;
use crate::record::{CommBFormat, MessageRecord};

fn reserved_is_zero(mb: &[u8; 7]) -> bool {
    bits(mb, 10, 14) == 0
}

pub struct DatalinkCapability;

impl Decoder for DatalinkCapability {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        if ctx.mb[0] == 0x10 && reserved_is_zero(&ctx.mb) {
            56
        } else {
            0
        }
    }

    fn store(&self, _ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::DatalinkCaps;
    }
}
