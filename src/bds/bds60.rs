//! BDS 6,0 — Heading and speed report (ICAO 9871 Table A-2-98)
//!
//! Heading/IAS/Mach form the mandatory core (an air data computer that
//! reports one but not the others isn't real); at least one of the two
//! vertical-rate sources has to be present too, and when both are, a
//! barometric/inertial split of more than 2000 ft/min is implausible
//! enough to penalise.

use super::{DecodeContext, Decoder};
use crate::bits::{bits, flag};
use crate::record::{CommBFormat, HeadingType, MessageRecord};

struct Fields {
    heading: f32,
    ias: f32,
    mach: f32,
    baro_rate: Option<f32>,
    geom_rate: Option<f32>,
}

fn decode_rate(mb: &[u8; 7], status_bit: u32, sign_bit: u32, lo: u32, hi: u32) -> Option<Option<f32>> {
    if !flag(mb, status_bit) {
        return Some(None);
    }
    let raw = f64::from(bits(mb, lo, hi));
    let mut v = raw * 32.0;
    if flag(mb, sign_bit) {
        v -= 16_384.0;
    }
    if !(-6000.0..=6000.0).contains(&v) {
        return None;
    }
    Some(Some(v as f32))
}

fn decode(mb: &[u8; 7]) -> Option<(u32, Fields)> {
    if !(flag(mb, 1) && flag(mb, 13) && flag(mb, 24)) {
        return None;
    }

    let mut score: i32 = 0;

    let heading = {
        let raw = f64::from(bits(mb, 3, 12));
        let mut v = raw * 90.0 / 512.0;
        if flag(mb, 2) {
            v += 180.0;
        }
        if !(0.0..360.0).contains(&v) {
            return None;
        }
        score += 12;
        v as f32
    };

    let ias = {
        let raw = f64::from(bits(mb, 14, 23));
        if !(50.0..=700.0).contains(&raw) {
            return None;
        }
        score += 11;
        raw as f32
    };

    let mach = {
        let raw = f64::from(bits(mb, 25, 34));
        let v = raw * 2.048 / 512.0;
        if !(0.1..=0.9).contains(&v) {
            return None;
        }
        score += 11;
        v as f32
    };

    let baro_rate = decode_rate(mb, 35, 36, 37, 45)?;
    if baro_rate.is_some() {
        score += 11;
    }
    let geom_rate = decode_rate(mb, 46, 47, 48, 56)?;
    if geom_rate.is_some() {
        score += 11;
    }
    if baro_rate.is_none() && geom_rate.is_none() {
        return None;
    }

    if let (Some(b), Some(g)) = (baro_rate, geom_rate) {
        if (b - g).abs() > 2000.0 {
            score -= 12;
        }
    }

    Some((score.max(0) as u32, Fields { heading, ias, mach, baro_rate, geom_rate }))
}

pub struct HeadingAndSpeed;

impl Decoder for HeadingAndSpeed {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        decode(&ctx.mb).map_or(0, |(score, _)| score)
    }

    fn store(&self, ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::HeadingSpeed;
        if let Some((_, fields)) = decode(&ctx.mb) {
            record.heading = Some(fields.heading);
            record.heading_type = Some(HeadingType::Magnetic);
            record.ias = Some(fields.ias);
            record.mach = Some(fields.mach);
            record.baro_rate = fields.baro_rate;
            record.geom_rate = fields.geom_rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::set_bits;

    fn sample() -> [u8; 7] {
        let mut mb = [0u8; 7];
        set_bits(&mut mb, 1, 1, 1);
        set_bits(&mut mb, 2, 2, 0);
        set_bits(&mut mb, 3, 12, (100.0_f64 * 512.0 / 90.0).round() as u32);

        set_bits(&mut mb, 13, 13, 1);
        set_bits(&mut mb, 14, 23, 280);

        set_bits(&mut mb, 24, 24, 1);
        set_bits(&mut mb, 25, 34, (0.78_f64 * 512.0 / 2.048).round() as u32);

        set_bits(&mut mb, 35, 35, 1);
        set_bits(&mut mb, 36, 36, 0);
        set_bits(&mut mb, 37, 45, (1500.0_f64 / 32.0).round() as u32);
        mb
    }

    #[test]
    fn heading_ias_mach_and_one_rate_scores() {
        let ctx = DecodeContext { msgtype: 20, mb: sample(), ac: 0 };
        assert_eq!(HeadingAndSpeed.score(&ctx), 45);
    }

    #[test]
    fn missing_mach_rejects() {
        let mut mb = sample();
        set_bits(&mut mb, 24, 24, 0);
        set_bits(&mut mb, 25, 34, 0);
        let ctx = DecodeContext { msgtype: 20, mb, ac: 0 };
        assert_eq!(HeadingAndSpeed.score(&ctx), 0);
    }

    #[test]
    fn neither_rate_rejects() {
        let mut mb = sample();
        set_bits(&mut mb, 35, 35, 0);
        set_bits(&mut mb, 37, 45, 0);
        let ctx = DecodeContext { msgtype: 20, mb, ac: 0 };
        assert_eq!(HeadingAndSpeed.score(&ctx), 0);
    }

    #[test]
    fn store_sets_magnetic_heading() {
        let ctx = DecodeContext { msgtype: 20, mb: sample(), ac: 0 };
        let mut record = MessageRecord::default();
        HeadingAndSpeed.store(&ctx, &mut record);
        assert_eq!(record.heading_type, Some(HeadingType::Magnetic));
        assert!((record.ias.unwrap() - 280.0).abs() < f32::EPSILON);
        assert!(record.baro_rate.is_some());
        assert!(record.geom_rate.is_none());
    }
}
