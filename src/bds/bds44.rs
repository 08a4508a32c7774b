//! BDS 4,4 — Meteorological routine air report (ICAO 9871 Table A-2-65)
//!
//! The trickiest collision in the whole register set: a BDS 1,7 GICB
//! capability pattern that happens to claim the `{0,7 0,8 0,9}` + `6,0`
//! cluster and nothing else can satisfy this decoder's structural gates
//! with `source = DME/DME`. That specific combination is clamped to a
//! score of 1 so BDS 1,7 always wins the tie instead.

use super::{DecodeContext, Decoder};
use crate::bits::{bits, flag};
use crate::record::{CommBFormat, MessageRecord, Mrar, MrarSource, Turbulence};

struct Fields {
    source: MrarSource,
    wind_speed: u16,
    wind_dir: f32,
    temperature: f32,
    pressure: Option<f32>,
    turbulence: Option<Turbulence>,
    humidity: Option<f32>,
}

fn decode(mb: &[u8; 7]) -> Option<(u32, Fields)> {
    let source = MrarSource::from(bits(mb, 1, 4) as u8);
    if matches!(source, MrarSource::Invalid | MrarSource::Reserved) {
        return None;
    }

    if !(flag(mb, 5) && flag(mb, 24)) {
        return None;
    }

    let asp_present = flag(mb, 35);
    if !asp_present && bits(mb, 36, 46) != 0 {
        return None;
    }
    let turb_present = flag(mb, 47);
    if !turb_present && bits(mb, 48, 49) != 0 {
        return None;
    }
    let humidity_present = flag(mb, 50);
    if !humidity_present && bits(mb, 51, 56) != 0 {
        return None;
    }

    let mut score: i32 = 0;

    let wind_speed = bits(mb, 6, 14) as u16;
    let wind_dir = f32::from(bits(mb, 15, 23) as u16) * 180.0 / 256.0;
    if wind_speed == 0 {
        score += 2;
    } else if wind_speed <= 250 {
        score += 19;
    } else {
        return None;
    }

    let sat_sign = flag(mb, 25);
    let sat_raw = bits(mb, 26, 34) as u16;
    let temperature = f32::from(sat_raw) * 0.25 - if sat_sign { 128.0 } else { 0.0 };
    if temperature == 0.0 {
        score += 2;
    } else if (-80.0..=60.0).contains(&temperature) {
        score += 11;
    } else {
        return None;
    }

    let pressure = if asp_present {
        let asp = f32::from(bits(mb, 36, 46) as u16);
        if !(25.0..=1100.0).contains(&asp) {
            return None;
        }
        score += 12;
        Some(asp)
    } else {
        score += 1;
        None
    };

    let turbulence = if turb_present {
        score += 3;
        Some(Turbulence::from(bits(mb, 48, 49) as u8))
    } else {
        score += 1;
        None
    };

    let humidity = if humidity_present {
        score += 7;
        Some(f32::from(bits(mb, 51, 56) as u16) * 100.0 / 64.0)
    } else {
        score += 1;
        None
    };

    if matches!(source, MrarSource::DmeDme) {
        score = 1;
    }

    Some((
        score.max(0) as u32,
        Fields { source, wind_speed, wind_dir, temperature, pressure, turbulence, humidity },
    ))
}

pub struct MeteorologicalReport;

impl Decoder for MeteorologicalReport {
    fn score(&self, ctx: &DecodeContext) -> u32 {
        decode(&ctx.mb).map_or(0, |(score, _)| score)
    }

    fn store(&self, ctx: &DecodeContext, record: &mut MessageRecord) {
        record.commb_format = CommBFormat::Mrar;
        if let Some((_, fields)) = decode(&ctx.mb) {
            record.mrar = Some(Mrar {
                source: fields.source,
                wind_speed: Some(fields.wind_speed),
                wind_dir: Some(fields.wind_dir),
                temperature: Some(fields.temperature),
                pressure: fields.pressure,
                turbulence: fields.turbulence,
                humidity: fields.humidity,
            });
        }
    }
}
