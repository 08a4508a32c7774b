//! Arbiter: runs every decoder dry, picks the unique max scorer, and
//! re-invokes it to actually populate the record.
//!
//! This is the two-pass "score then store" design: decoders stay pure
//! functions of [`DecodeContext`], and the common (unambiguous) case
//! still only pays for one real extraction pass.

#[cfg(feature = "alloc")]
use tracing::{debug, warn};

use crate::bds::{DecodeContext, ALL_DECODERS};
use crate::record::{CommBFormat, MessageRecord};

/// Entry point: read `{msgtype, mb, dr, um, corrected_bits, ac}` from
/// `record`, write `{commb_format, ...decoded fields}` back into it.
///
/// Behavior:
/// 1. Framing refusal (`dr`/`um`/`corrected_bits` non-zero) short-circuits
///    to [`CommBFormat::NotDecoded`] without running any decoder.
/// 2. Every decoder runs once in score mode.
/// 3. No positive score → [`CommBFormat::Unknown`].
/// 4. A tie at the top → [`CommBFormat::Ambiguous`].
/// 5. Otherwise the unique winner runs again in store mode.
pub fn decode_commb(record: &mut MessageRecord) {
    if record.dr != 0 || record.um != 0 || record.corrected_bits > 0 {
        record.commb_format = CommBFormat::NotDecoded;
        return;
    }

    let ctx = DecodeContext { msgtype: record.msgtype, mb: record.mb, ac: record.ac };

    let mut best_score = 0u32;
    let mut best: Option<&dyn crate::bds::Decoder> = None;
    let mut ambiguous = false;

    for &decoder in ALL_DECODERS {
        let s = decoder.score(&ctx);
        #[cfg(feature = "alloc")]
        debug!(score = s, "decoder scored");
        if s == 0 {
            continue;
        }
        match s.cmp(&best_score) {
            core::cmp::Ordering::Greater => {
                best_score = s;
                best = Some(decoder);
                ambiguous = false;
            }
            core::cmp::Ordering::Equal => {
                ambiguous = true;
            }
            core::cmp::Ordering::Less => {}
        }
    }

    match best {
        None => {
            record.commb_format = CommBFormat::Unknown;
        }
        Some(_) if ambiguous => {
            #[cfg(feature = "alloc")]
            warn!(score = best_score, "ambiguous Comm-B classification");
            record.commb_format = CommBFormat::Ambiguous;
        }
        Some(winner) => {
            winner.store(&ctx, record);
        }
    }
}
