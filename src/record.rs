//! Message record: framing fields in, decoded fields out.
//!
//! One [`MessageRecord`] is owned by the caller for the duration of a
//! single Comm-B reply — built by the host, handed to
//! [`crate::decode_commb`] once, then read and dropped. Decoded fields are
//! `Option<T>` rather than paired with parallel `bool` validity flags:
//! `None` *is* the validity flag, so there is no way to construct a value
//! with the flag unset and stale data still readable behind it.

#[cfg(feature = "alloc")]
use core::fmt;

use bitflags::bitflags;

/// Discriminant written exactly once per [`crate::decode_commb`] call.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommBFormat {
    /// Framing fields refused classification (`DR`/`UM` non-zero or
    /// corrected bits present). No decoder ran.
    #[default]
    NotDecoded,
    /// Every decoder scored zero.
    Unknown,
    /// Two or more decoders tied at the top score.
    Ambiguous,
    EmptyResponse,
    DatalinkCaps,
    GicbCaps,
    AircraftIdent,
    AcasRa,
    VerticalIntent,
    TrackTurn,
    HeadingSpeed,
    Mrar,
    AirbornePosition,
}

#[cfg(feature = "alloc")]
impl fmt::Display for CommBFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NotDecoded => "not decoded",
            Self::Unknown => "unknown",
            Self::Ambiguous => "ambiguous",
            Self::EmptyResponse => "BDS empty response",
            Self::DatalinkCaps => "BDS1,0 datalink capability",
            Self::GicbCaps => "BDS1,7 GICB capability report",
            Self::AircraftIdent => "BDS2,0 aircraft identification",
            Self::AcasRa => "BDS3,0 ACAS resolution advisory",
            Self::VerticalIntent => "BDS4,0 selected vertical intent",
            Self::TrackTurn => "BDS5,0 track and turn",
            Self::HeadingSpeed => "BDS6,0 heading and speed",
            Self::Mrar => "BDS4,4 meteorological routine air report",
            Self::AirbornePosition => "BDS0,5 airborne position",
        };
        write!(f, "{s}")
    }
}

/// Source of a selected/reported altitude in [`NavData`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AltitudeSource {
    Unknown,
    Aircraft,
    Mcp,
    Fms,
    Invalid,
}

impl From<u8> for AltitudeSource {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Unknown,
            1 => Self::Aircraft,
            2 => Self::Mcp,
            3 => Self::Fms,
            _ => Self::Invalid,
        }
    }
}

bitflags! {
    /// BDS 4,0 mode status bits (`nav.modes`).
    #[derive(Debug, PartialEq, Eq, Clone, Copy)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct NavModes: u8 {
        const VNAV      = 0b100;
        const ALT_HOLD  = 0b010;
        const APPROACH  = 0b001;
    }
}

/// BDS 4,0 selected vertical intent.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavData {
    /// MCP/FCU selected altitude, feet, multiple of 16.
    pub mcp_altitude: Option<u32>,
    /// FMS selected altitude, feet, multiple of 16.
    pub fms_altitude: Option<u32>,
    /// Barometric pressure setting, hPa.
    pub qnh: Option<f32>,
    pub modes: Option<NavModes>,
    pub altitude_source: Option<AltitudeSource>,
}

/// Ground-track vs magnetic heading, set alongside [`MessageRecord::heading`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeadingType {
    GroundTrack,
    Magnetic,
}

/// MRAR (BDS 4,4) wind/navigation data source.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MrarSource {
    Invalid,
    Ins,
    Gnss,
    DmeDme,
    VorDme,
    Reserved,
}

impl From<u8> for MrarSource {
    fn from(code: u8) -> Self {
        match code {
            0 => Self::Invalid,
            1 => Self::Ins,
            2 => Self::Gnss,
            3 => Self::DmeDme,
            4 => Self::VorDme,
            _ => Self::Reserved,
        }
    }
}

/// BDS 4,4 turbulence hazard code.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turbulence {
    Nil,
    Light,
    Moderate,
    Severe,
}

impl From<u8> for Turbulence {
    fn from(code: u8) -> Self {
        match code & 0b11 {
            0 => Self::Nil,
            1 => Self::Light,
            2 => Self::Moderate,
            _ => Self::Severe,
        }
    }
}

/// BDS 4,4 meteorological routine air report.
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mrar {
    pub source: MrarSource,
    pub wind_speed: Option<u16>,
    pub wind_dir: Option<f32>,
    pub temperature: Option<f32>,
    pub pressure: Option<f32>,
    pub turbulence: Option<Turbulence>,
    pub humidity: Option<f32>,
}

/// Mutable, caller-owned result container: framing fields in, decoded
/// fields out. See module docs for the lifecycle and the `Option<T>`
/// validity convention.
#[derive(Debug, PartialEq, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MessageRecord {
    /// Downlink format, `20` or `21`. Read-only to the core.
    pub msgtype: u8,
    /// 56-bit Comm-B payload, big-endian, bit 1 = MSB of `mb[0]`.
    pub mb: [u8; 7],
    /// 5-bit downlink request. Non-zero declines classification.
    pub dr: u8,
    /// 5-bit utility message. Non-zero declines classification.
    pub um: u8,
    /// FEC-corrected bit count. Non-zero declines classification.
    pub corrected_bits: u32,
    /// 13-bit altitude code from the surrounding DF20 frame.
    pub ac: u16,

    pub commb_format: CommBFormat,

    /// BDS 2,0: 8-character callsign, `[A-Z0-9 ]` only when `Some`.
    pub callsign: Option<[char; 8]>,

    /// BDS 4,0.
    pub nav: Option<NavData>,

    /// BDS 5,0: roll angle, degrees.
    pub roll: Option<f32>,
    /// BDS 5,0 (ground track) or BDS 6,0 (magnetic heading), degrees.
    pub heading: Option<f32>,
    pub heading_type: Option<HeadingType>,
    /// BDS 5,0: ground speed, kt. Exposed under three call-site-friendly
    /// aliases by [`MessageRecord::ground_speed`] and
    /// [`MessageRecord::speed`] rather than stored three times, which
    /// would let the aliases disagree.
    pub gs: Option<f32>,
    /// BDS 5,0: track angle rate, deg/s.
    pub track_rate: Option<f32>,
    /// BDS 5,0: true airspeed, kt.
    pub tas: Option<f32>,

    /// BDS 6,0: indicated airspeed, kt.
    pub ias: Option<f32>,
    /// BDS 6,0: Mach number.
    pub mach: Option<f32>,
    /// BDS 6,0: barometric vertical rate, ft/min.
    pub baro_rate: Option<f32>,
    /// BDS 6,0: inertial (INS-derived) vertical rate, ft/min.
    pub geom_rate: Option<f32>,

    /// BDS 4,4.
    pub mrar: Option<Mrar>,
}

impl MessageRecord {
    /// Alias for [`MessageRecord::gs`].
    #[must_use]
    pub fn ground_speed(&self) -> Option<f32> {
        self.gs
    }

    /// Alias for [`MessageRecord::gs`].
    #[must_use]
    pub fn speed(&self) -> Option<f32> {
        self.gs
    }

    /// `true` once a register with extracted fields has won arbitration.
    #[must_use]
    pub fn is_decoded(&self) -> bool {
        !matches!(
            self.commb_format,
            CommBFormat::NotDecoded | CommBFormat::Unknown | CommBFormat::Ambiguous
        )
    }
}

#[cfg(feature = "alloc")]
impl fmt::Display for MessageRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Comm-B format: {}", self.commb_format)?;
        if let Some(callsign) = &self.callsign {
            let s: alloc::string::String = callsign.iter().collect();
            writeln!(f, "  Callsign:      {s}")?;
        }
        if let Some(nav) = &self.nav {
            if let Some(alt) = nav.mcp_altitude {
                writeln!(f, "  MCP altitude:  {alt} ft")?;
            }
            if let Some(alt) = nav.fms_altitude {
                writeln!(f, "  FMS altitude:  {alt} ft")?;
            }
            if let Some(qnh) = nav.qnh {
                writeln!(f, "  QNH:           {qnh} hPa")?;
            }
        }
        if let Some(roll) = self.roll {
            writeln!(f, "  Roll:          {roll} deg")?;
        }
        if let Some(heading) = self.heading {
            writeln!(f, "  Heading:       {heading} deg")?;
        }
        if let Some(gs) = self.gs {
            writeln!(f, "  Ground speed:  {gs} kt")?;
        }
        if let Some(mrar) = &self.mrar {
            writeln!(f, "  MRAR source:   {:?}", mrar.source)?;
        }
        Ok(())
    }
}
