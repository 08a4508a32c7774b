//! BDS 3,0 — ACAS resolution advisory (ICAO 9871 Table A-2-60)
//!
//! No structural check beyond the tag byte: the RA record's internal
//! fields are all meaningful in every combination, so there is nothing
//! further to validate at this layer (the host's ACAS logic, not this
//! crate, interprets the advisory bits themselves).

use super::{DecodeContext, Decoder};
use crate::record::{CommBFormat, MessageRecord};

pub struct AcasResolutionAdvisory;

impl Decoder for AcasResolutionAdvisory {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        if ctx.mb[0] == 0x30 {
            56
        } else {
            0
        }
    }

    fn store(&self, _ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::AcasRa;
    }
}
