//! BDS 1,7 — GICB capability report (ICAO 9871 Table A-2-41)
//!
//! No tag byte: this is a pure bit-pattern match over "which other
//! registers does the transponder claim to support". Every bit plausible
//! in a normal aircraft pulls the score up a little; an implausible
//! cluster (e.g. claiming surface position and waypoint registers that
//! essentially nothing transmits) drags it down hard enough that a
//! competing decoder usually wins instead.

use super::{DecodeContext, Decoder};
use crate::bits::{bits, flag};
use crate::record::{CommBFormat, MessageRecord};

fn score(mb: &[u8; 7]) -> u32 {
    if bits(mb, 25, 56) != 0 {
        return 0;
    }

    let mut score: i32 = 0;

    score += if flag(mb, 7) { 1 } else { -2 };
    for b in [10, 11, 12] {
        if flag(mb, b) {
            score -= 2;
        }
    }
    for b in [13, 14] {
        if flag(mb, b) {
            score -= 1;
        }
    }
    for b in [20, 21, 22] {
        if flag(mb, b) {
            score -= 2;
        }
    }

    let es_bits: [bool; 6] = core::array::from_fn(|i| flag(mb, i as u32 + 1));
    score += if es_bits[0..5].iter().all(|&b| b) {
        5 + i32::from(es_bits[5])
    } else if es_bits.iter().all(|&b| !b) {
        1
    } else if !es_bits[0] && !es_bits[1] && es_bits[2] && es_bits[3] && es_bits[4] {
        3
    } else {
        -12
    };

    let (b9, b16, b24) = (flag(mb, 9), flag(mb, 16), flag(mb, 24));
    score += if b16 && b24 {
        2 + i32::from(b9)
    } else if !b9 && !b16 && !b24 {
        1
    } else {
        -6
    };

    score.max(0) as u32
}

pub struct GicbCapability;

impl Decoder for GicbCapability {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        score(&ctx.mb)
    }

    fn store(&self, _ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::GicbCaps;
    }
}
