//! BDS 4,0 — Selected vertical intent (ICAO 9871 Table A-2-97)
//!
//! Three independent status+value pairs (MCP altitude, FMS altitude,
//! barometric setting) share one scoring rule, then two cross-field
//! consistency checks penalise implausible combinations the structural
//! gate alone wouldn't catch (an MCP/FMS mismatch, or an altitude that
//! isn't a plausible flight-level-ish round number).

use super::{DecodeContext, Decoder};
use crate::bits::{bits, flag};
use crate::record::{AltitudeSource, CommBFormat, MessageRecord, NavData, NavModes};

struct Fields {
    mcp_altitude: Option<u32>,
    fms_altitude: Option<u32>,
    qnh: Option<f32>,
    mode_valid: bool,
    modes: NavModes,
    source_valid: bool,
    source: u8,
}

/// `None` means "reject": either an impossible status/value combination or
/// an out-of-range decoded value.
fn decode(mb: &[u8; 7]) -> Option<(u32, Fields)> {
    let mut score: i32 = 0;
    let mut any_status = false;

    let mut altitude = |status_bit: u32, lo: u32, hi: u32| -> Option<Option<u32>> {
        let valid = flag(mb, status_bit);
        let raw = bits(mb, lo, hi);
        if valid {
            any_status = true;
        }
        match (valid, raw) {
            (true, 0) => None,
            (true, raw) => {
                let alt = raw * 16;
                if (1000..=50000).contains(&alt) {
                    score += 13;
                    Some(Some(alt))
                } else {
                    None
                }
            }
            (false, 0) => {
                score += 1;
                Some(None)
            }
            (false, _) => None,
        }
    };

    let mcp_altitude = altitude(1, 2, 13)?;
    let fms_altitude = altitude(14, 15, 26)?;

    let baro_valid = flag(mb, 27);
    let baro_raw = bits(mb, 28, 39);
    if baro_valid {
        any_status = true;
    }
    let qnh = match (baro_valid, baro_raw) {
        (true, 0) => return None,
        (true, raw) => {
            let p = 800.0 + f32::from(raw as u16) * 0.1;
            if (900.0..=1100.0).contains(&p) {
                score += 13;
                Some(p)
            } else {
                return None;
            }
        }
        (false, 0) => {
            score += 1;
            None
        }
        (false, _) => return None,
    };

    if bits(mb, 40, 47) != 0 || bits(mb, 52, 53) != 0 {
        return None;
    }

    let mode_valid = flag(mb, 48);
    if mode_valid {
        any_status = true;
        score += 4;
    }
    let modes = NavModes::from_bits_truncate(bits(mb, 49, 51) as u8);

    let source_valid = flag(mb, 54);
    if source_valid {
        any_status = true;
        score += 3;
    }
    let source = bits(mb, 55, 56) as u8;

    if !any_status {
        return None;
    }

    if let (Some(mcp), Some(fms)) = (mcp_altitude, fms_altitude) {
        if mcp != fms {
            score -= 4;
        }
    }
    for alt in [mcp_altitude, fms_altitude] {
        if let Some(alt) = alt {
            let rem = alt % 500;
            let dist = rem.min(500 - rem);
            if dist > 16 {
                score -= 4;
            }
        }
    }

    Some((
        score.max(0) as u32,
        Fields { mcp_altitude, fms_altitude, qnh, mode_valid, modes, source_valid, source },
    ))
}

pub struct SelectedVerticalIntent;

impl Decoder for SelectedVerticalIntent {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        decode(&ctx.mb).map_or(0, |(score, _)| score)
    }

    fn store(&self, ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::VerticalIntent;
        if let Some((_, fields)) = decode(&ctx.mb) {
            let altitude_source = if fields.source_valid {
                AltitudeSource::from(fields.source)
            } else {
                AltitudeSource::Invalid
            };
            record.nav = Some(NavData {
                mcp_altitude: fields.mcp_altitude,
                fms_altitude: fields.fms_altitude,
                qnh: fields.qnh,
                modes: fields.mode_valid.then_some(fields.modes),
                altitude_source: Some(altitude_source),
            });
        }
    }
}
