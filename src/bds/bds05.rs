//! BDS 0,5 — Extended-squitter airborne position (recognition only)
//!
//! Not a Comm-B register at all — an ADS-B extended-squitter airborne
//! position report happens to be structurally compatible with a Comm-B
//! `MB` field, and without this decoder the arbiter would sometimes
//! misclassify one as BDS 4,4 (an MRAR collision). Scoring it at 100,
//! above every other decoder's maximum of 56, makes it win on sight
//! whenever recognised; this crate never decodes the position itself
//! (that belongs to a full ADS-B frame decoder, out of scope here).

use super::{DecodeContext, Decoder};
use crate::bits::{bits, flag};
use crate::record::{CommBFormat, MessageRecord};

/// Deliberately greater than any other decoder's maximum score (56).
const OVERRIDE_SCORE: u32 = 100;

fn matches(ctx: &DecodeContext) -> bool {
    if ctx.msgtype != 20 {
        return false;
    }
    let type_code = bits(&ctx.mb, 1, 5);
    if !(9..=18).contains(&type_code) {
        return false;
    }
    if flag(&ctx.mb, 21) {
        return false;
    }
    let ac12 = bits(&ctx.mb, 9, 20);
    if ac12 == 0 {
        return false;
    }
    let ac13 = ((ac12 & 0x0FC0) << 1) | (ac12 & 0x003F);
    if ac13 != u32::from(ctx.ac) {
        return false;
    }
    bits(&ctx.mb, 23, 39) != 0 && bits(&ctx.mb, 40, 56) != 0
}

pub struct AirbornePosition;

impl Decoder for AirbornePosition {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        if matches(ctx) {
            OVERRIDE_SCORE
        } else {
            0
        }
    }

    fn store(&self, _ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::AirbornePosition;
    }
}
