//! BDS 5,0 — Track and turn report (ICAO 9871 Table A-2-78)
//!
//! Unlike the BDS 4,0 fields, roll/track/GS/TAS aren't individually
//! optional here: a track-and-turn report with only some of the four core
//! fields present isn't something a real ADIRU emits, so all four status
//! bits are required before this register is even considered.
//!
//! A turn is a turn: the bank angle, airspeed and turn rate it reports
//! have to be physically consistent (a standard-rate turn formula), and a
//! plausible ground speed has to be within shouting distance of the true
//! airspeed it reports alongside it. Either mismatch costs points rather
//! than rejecting outright, since wind and maneuvering both legitimately
//! separate GS from TAS a little.

use super::{DecodeContext, Decoder};
use crate::bits::{bits, flag};
use crate::record::{CommBFormat, HeadingType, MessageRecord};

struct Fields {
    roll: f32,
    track: f32,
    gs: f32,
    track_rate: Option<f32>,
    tas: f32,
}

fn decode(mb: &[u8; 7]) -> Option<(u32, Fields)> {
    if !(flag(mb, 1) && flag(mb, 12) && flag(mb, 24) && flag(mb, 46)) {
        return None;
    }

    let mut score: i32 = 0;

    let roll = {
        let raw = f64::from(bits(mb, 3, 11));
        let mut v = raw * 45.0 / 256.0;
        if flag(mb, 2) {
            v -= 90.0;
        }
        if !(-40.0..40.0).contains(&v) {
            return None;
        }
        score += 11;
        v
    };

    let track = {
        let raw = f64::from(bits(mb, 14, 23));
        let mut v = raw * 90.0 / 512.0;
        if flag(mb, 13) {
            v += 180.0;
        }
        if !(0.0..360.0).contains(&v) {
            return None;
        }
        score += 12;
        v
    };

    let gs = {
        let raw = f64::from(bits(mb, 25, 34));
        let v = raw * 2.0;
        if !(50.0..=700.0).contains(&v) {
            return None;
        }
        score += 11;
        v
    };

    let track_rate_valid = flag(mb, 35);
    let track_rate = if track_rate_valid {
        let raw = f64::from(bits(mb, 37, 45));
        let mut v = raw * 8.0 / 256.0;
        if flag(mb, 36) {
            v -= 16.0;
        }
        if !(-10.0..=10.0).contains(&v) {
            return None;
        }
        score += 11;
        Some(v)
    } else {
        None
    };

    let tas = {
        let raw = f64::from(bits(mb, 47, 56));
        let v = raw * 2.0;
        if !(50.0..=700.0).contains(&v) {
            return None;
        }
        score += 11;
        v
    };

    if let Some(track_rate) = track_rate {
        if tas > 0.0 {
            let expected = 68_625.0 * libm::tan(roll.to_radians()) / (tas * 20.0 * core::f64::consts::PI);
            if (expected - track_rate).abs() > 2.0 {
                score -= 6;
            }
        }
    }

    // See DESIGN.md "BDS 5,0 consistency delta" for why this compares the
    // values themselves rather than their validity flags.
    if (gs - tas).abs() > 150.0 {
        score -= 6;
    }

    Some((
        score.max(0) as u32,
        Fields {
            roll: roll as f32,
            track: track as f32,
            gs: gs as f32,
            track_rate: track_rate.map(|v| v as f32),
            tas: tas as f32,
        },
    ))
}

pub struct TrackAndTurn;

impl Decoder for TrackAndTurn {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        decode(&ctx.mb).map_or(0, |(score, _)| score)
    }

    fn store(&self, ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::TrackTurn;
        if let Some((_, fields)) = decode(&ctx.mb) {
            record.roll = Some(fields.roll);
            record.heading = Some(fields.track);
            record.heading_type = Some(HeadingType::GroundTrack);
            record.gs = Some(fields.gs);
            record.track_rate = fields.track_rate;
            record.tas = Some(fields.tas);
        }
    }
}
