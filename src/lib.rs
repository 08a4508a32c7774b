#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/*!
`commb_deku` resolves which Mode S Comm-B register (`BDS x,y`) a DF20/DF21
reply's 56-bit `MB` field actually contains.

Comm-B replies carry no register tag: the same 7 bytes are structurally
valid under several different BDS layouts at once, and a receiver has to
*guess* which one the transponder meant by how well each candidate's
fields hold together. This crate runs every known layout's decoder over
the payload, scores how plausible each one is, and returns the unique
best match — or reports [`record::CommBFormat::Unknown`] /
[`record::CommBFormat::Ambiguous`] when the payload doesn't settle on one.

# Supported registers

|  BDS  |  Name                                      |
| ----- | ------------------------------------------ |
| (0,0) | [`record::CommBFormat::EmptyResponse`]      |
| (1,0) | [`record::CommBFormat::DatalinkCaps`]       |
| (1,7) | [`record::CommBFormat::GicbCaps`]           |
| (2,0) | [`record::CommBFormat::AircraftIdent`]      |
| (3,0) | [`record::CommBFormat::AcasRa`]             |
| (4,0) | [`record::CommBFormat::VerticalIntent`]     |
| (5,0) | [`record::CommBFormat::TrackTurn`]          |
| (6,0) | [`record::CommBFormat::HeadingSpeed`]       |
| (4,4) | [`record::CommBFormat::Mrar`]               |
| (0,5) | [`record::CommBFormat::AirbornePosition`] (recognition only) |

# Example

```rust
use commb_deku::{decode_commb, MessageRecord};

let mut record = MessageRecord {
    msgtype: 20,
    mb: [0x10, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00],
    ..Default::default()
};
decode_commb(&mut record);
assert!(record.is_decoded());
```
*/

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod arbiter;
pub mod bds;
pub mod bits;
pub mod charset;
pub mod record;
mod testutil;

pub use arbiter::decode_commb;
pub use record::{CommBFormat, MessageRecord};
