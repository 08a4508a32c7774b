//! BDS 2,0 — Aircraft identification (ICAO 9871 Table A-2-32)
//!
//! AIS-6 decode, scored rather than trusted unconditionally: a byte that
//! merely starts with `0x20` still needs every one of its eight 6-bit
//! groups to decode to something printable before this register wins.

use super::{DecodeContext, Decoder};
use crate::bits::bits;
use crate::charset::{self, PAD};
use crate::record::{CommBFormat, MessageRecord};

/// Decode the 8 six-bit characters in bits 9..56, alongside a count of how
/// many decoded to a non-pad `[A-Z0-9 ]` character (the rest are `'@'`
/// pads). `None` means one of them fell outside `[A-Z0-9 @]` and the whole
/// payload must be rejected.
fn decode_chars(mb: &[u8; 7]) -> Option<([char; 8], u32)> {
    let mut out = ['@'; 8];
    let mut valid_count = 0u32;
    for (i, slot) in out.iter_mut().enumerate() {
        let lo = 9 + (i as u32) * 6;
        let code = bits(mb, lo, lo + 5) as u8;
        let c = charset::lookup(code);
        if c == charset::INVALID {
            return None;
        }
        if c != PAD {
            valid_count += 1;
        }
        *slot = c;
    }
    Some((out, valid_count))
}

pub struct AircraftIdentification;

impl Decoder for AircraftIdentification {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        if ctx.mb[0] != 0x20 {
            return 0;
        }
        match decode_chars(&ctx.mb) {
            Some((_, valid_count)) => 8 + 6 * valid_count,
            None => 0,
        }
    }

    fn store(&self, ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::AircraftIdent;
        if let Some((chars, _)) = decode_chars(&ctx.mb) {
            if !chars.contains(&PAD) {
                record.callsign = Some(chars);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::set_bits;

    fn mb_for(chars: [u8; 8]) -> [u8; 7] {
        let mut mb = [0x20, 0, 0, 0, 0, 0, 0];
        for (i, &c) in chars.iter().enumerate() {
            let lo = 9 + (i as u32) * 6;
            set_bits(&mut mb, lo, lo + 5, u32::from(c));
        }
        mb
    }

    #[test]
    fn fully_valid_callsign_scores_max_and_stores() {
        // "ABC123  " -> codes: A=1 B=2 C=3 1=49 2=50 3=51 space=32 space=32
        let mb = mb_for([1, 2, 3, 49, 50, 51, 32, 32]);
        let ctx = DecodeContext { msgtype: 20, mb, ac: 0 };
        assert_eq!(AircraftIdentification.score(&ctx), 56);

        let mut record = MessageRecord::default();
        AircraftIdentification.store(&ctx, &mut record);
        assert_eq!(record.commb_format, CommBFormat::AircraftIdent);
        let callsign: String = record.callsign.unwrap().iter().collect();
        assert_eq!(callsign, "ABC123  ");
    }

    #[test]
    fn pad_present_does_not_set_callsign() {
        // 2 valid chars ('A', 'B'), 6 pads -> 8 + 6*2 = 20, not the all-valid max of 56.
        let mb = mb_for([1, 2, 0, 0, 0, 0, 0, 0]);
        let ctx = DecodeContext { msgtype: 20, mb, ac: 0 };
        assert_eq!(AircraftIdentification.score(&ctx), 20);

        let mut record = MessageRecord::default();
        AircraftIdentification.store(&ctx, &mut record);
        assert!(record.callsign.is_none());
    }

    #[test]
    fn all_pad_scores_minimum() {
        // No valid characters at all -> 8 + 6*0 = 8, well below a real callsign.
        let mb = mb_for([0, 0, 0, 0, 0, 0, 0, 0]);
        let ctx = DecodeContext { msgtype: 20, mb, ac: 0 };
        assert_eq!(AircraftIdentification.score(&ctx), 8);
    }

    #[test]
    fn invalid_code_rejects() {
        let mb = mb_for([1, 2, 27, 0, 0, 0, 0, 0]);
        let ctx = DecodeContext { msgtype: 20, mb, ac: 0 };
        assert_eq!(AircraftIdentification.score(&ctx), 0);
    }

    #[test]
    fn wrong_tag_rejects() {
        let mut mb = mb_for([1, 2, 3, 4, 5, 6, 7, 8]);
        mb[0] = 0x30;
        let ctx = DecodeContext { msgtype: 20, mb, ac: 0 };
        assert_eq!(AircraftIdentification.score(&ctx), 0);
    }
}
