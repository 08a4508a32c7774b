use commb_deku::{decode_commb, CommBFormat, MessageRecord};
use hexlit::hex;

/// 1-based, MSB-first bit writer — the mirror of `commb_deku::bits::bits`,
/// duplicated here since integration tests can't reach the crate's private
/// `testutil` module.
fn set_bits(mb: &mut [u8; 7], lo: u32, hi: u32, value: u32) {
    let width = hi - lo + 1;
    for i in 0..width {
        let bit_value = (value >> (width - 1 - i)) & 1 == 1;
        let n = lo + i;
        let byte = ((n - 1) / 8) as usize;
        let shift = 7 - ((n - 1) % 8);
        if bit_value {
            mb[byte] |= 1 << shift;
        } else {
            mb[byte] &= !(1 << shift);
        }
    }
}

fn record(mb: [u8; 7]) -> MessageRecord {
    MessageRecord { msgtype: 20, mb, ..Default::default() }
}

#[test]
fn empty_response_zero_tag() {
    let mb = hex!("00000000000000");
    let mut record = record(mb);
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::EmptyResponse);
}

#[test]
fn empty_response_alternate_tag() {
    let mb = hex!("60000000000000");
    let mut record = record(mb);
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::EmptyResponse);
}

#[test]
fn datalink_capability() {
    let mb = hex!("10002000000000");
    let mut record = record(mb);
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::DatalinkCaps);
}

#[test]
fn acas_resolution_advisory() {
    let mb = hex!("30000000000000");
    let mut record = record(mb);
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::AcasRa);
}

#[test]
fn aircraft_identification_callsign() {
    // tag 0x20, then "ABC123  " packed as 8 6-bit AIS codes.
    let mb = hex!("200420F1CB3820");
    let mut record = record(mb);
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::AircraftIdent);
    let callsign: String = record.callsign.unwrap().iter().collect();
    assert_eq!(callsign, "ABC123  ");
}

#[test]
fn downlink_request_refuses_classification() {
    let mb = hex!("20000000000000");
    let mut record = record(mb);
    record.dr = 5;
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::NotDecoded);
    assert!(!record.is_decoded());
}

#[test]
fn corrected_bits_refuses_classification() {
    let mb = hex!("00000000000000");
    let mut record = record(mb);
    record.corrected_bits = 2;
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::NotDecoded);
}

#[test]
fn track_and_turn_report() {
    // roll +5deg, track 270deg, gs 450kt, track-rate +1deg/s, tas 460kt.
    let mut mb = [0u8; 7];
    set_bits(&mut mb, 1, 1, 1);
    set_bits(&mut mb, 2, 2, 0);
    set_bits(&mut mb, 3, 11, (5.0_f64 * 256.0 / 45.0).round() as u32);
    set_bits(&mut mb, 12, 12, 1);
    set_bits(&mut mb, 13, 13, 1);
    set_bits(&mut mb, 14, 23, ((270.0_f64 - 180.0) * 512.0 / 90.0).round() as u32);
    set_bits(&mut mb, 24, 24, 1);
    set_bits(&mut mb, 25, 34, (450.0 / 2.0) as u32);
    set_bits(&mut mb, 35, 35, 1);
    set_bits(&mut mb, 36, 36, 0);
    set_bits(&mut mb, 37, 45, (1.0_f64 * 256.0 / 8.0).round() as u32);
    set_bits(&mut mb, 46, 46, 1);
    set_bits(&mut mb, 47, 56, (460.0 / 2.0) as u32);

    let mut record = record(mb);
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::TrackTurn);
    assert!((record.roll.unwrap() - 5.0).abs() < 0.5);
    assert!((record.ground_speed().unwrap() - 450.0).abs() < 1.0);
    assert!((record.tas.unwrap() - 460.0).abs() < 1.0);
}

#[test]
fn airborne_position_overrides_other_candidates() {
    // extended-squitter position, type code 11, AC12 matching the framing AC.
    let mut mb = [0u8; 7];
    set_bits(&mut mb, 1, 5, 11);
    let ac12 = 0b0000_1010_0101u32;
    set_bits(&mut mb, 9, 20, ac12);
    set_bits(&mut mb, 23, 39, 0x1ABCD);
    set_bits(&mut mb, 40, 56, 0x1DCBA);
    let ac13 = ((ac12 & 0x0FC0) << 1) | (ac12 & 0x003F);

    let mut record = MessageRecord { msgtype: 20, mb, ac: ac13 as u16, ..Default::default() };
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::AirbornePosition);
}

#[test]
fn meteorological_report() {
    let mut mb = [0u8; 7];
    set_bits(&mut mb, 1, 4, 2); // Gnss
    set_bits(&mut mb, 5, 5, 1);
    set_bits(&mut mb, 6, 14, 30);
    set_bits(&mut mb, 15, 23, 100);
    set_bits(&mut mb, 24, 24, 1);
    set_bits(&mut mb, 26, 34, 40); // +10C

    let mut record = record(mb);
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::Mrar);
    let mrar = record.mrar.unwrap();
    assert_eq!(mrar.wind_speed, Some(30));
    assert!((mrar.temperature.unwrap() - 10.0).abs() < 0.5);
}

#[test]
fn gicb_mrar_collision_resolves_to_gicb() {
    // Bits 1-6 = 001110, bit16 = 1, bit24 = 1, everything else zero: the
    // BDS 1,7 "{0,7 0,8 0,9} + 6,0 available" cluster that simultaneously
    // satisfies BDS 4,4's structural gates with source = DME/DME, wind
    // status and SAT status both set. The tie-breaker in src/bds/bds44.rs
    // clamps the MRAR score to 1 so the arbiter settles on GICB_CAPS.
    let mut mb = [0u8; 7];
    set_bits(&mut mb, 1, 4, 0b0011); // bits 1,2=0; bits 3,4=1 (source = DmeDme)
    set_bits(&mut mb, 5, 5, 1); // bit 5 = 1 (es cluster bit 5 / MRAR wind status)
    set_bits(&mut mb, 16, 16, 1);
    set_bits(&mut mb, 24, 24, 1); // MRAR SAT status

    let mut record = record(mb);
    decode_commb(&mut record);
    assert_eq!(record.commb_format, CommBFormat::GicbCaps);
    assert!(record.mrar.is_none());
}
