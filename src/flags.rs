use std::fmt::{Display, Formatter};
use crate::result_code::ResultCode;

/*
                                1  1  1  1  1  1
  0  1  2  3  4  5  6  7  8  9  0  1  2  3  4  5
+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
|QR|   Opcode  |AA|TC|RD|RA|   Z    |   RCODE   |
+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+--+
*/
const QR_SHIFT: u16 = 15;
const OPCODE_SHIFT: u16 = 11;
const AA_SHIFT: u16 = 10;
const TC_SHIFT: u16 = 9;
const RD_SHIFT: u16 = 8;
const RA_SHIFT: u16 = 7;
const Z_SHIFT: u16 = 4;

/// The second header word. Sub-fields are always derived from the raw bits.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags(u16);

impl Flags {
    pub const fn new(bits: u16) -> Self {
        Self(bits)
    }

    /// Flags of a standard query.
    pub fn query(recursion_desired: bool) -> Self {
        Self::default().with_rd(recursion_desired)
    }

    pub fn bits(&self) -> u16 {
        self.0
    }

    pub fn qr(&self) -> bool {
        self.bit(QR_SHIFT)
    }

    pub fn opcode(&self) -> u8 {
        self.field(OPCODE_SHIFT, 0xF)
    }

    pub fn aa(&self) -> bool {
        self.bit(AA_SHIFT)
    }

    pub fn tc(&self) -> bool {
        self.bit(TC_SHIFT)
    }

    pub fn rd(&self) -> bool {
        self.bit(RD_SHIFT)
    }

    pub fn ra(&self) -> bool {
        self.bit(RA_SHIFT)
    }

    pub fn z(&self) -> u8 {
        self.field(Z_SHIFT, 0x7)
    }

    pub fn rcode(&self) -> u8 {
        self.field(0, 0xF)
    }

    pub fn result_code(&self) -> ResultCode {
        ResultCode::from(self.rcode())
    }

    pub fn with_qr(self, value: bool) -> Self {
        self.with_field(QR_SHIFT, 0x1, value as u16)
    }

    pub fn with_opcode(self, value: u8) -> Self {
        self.with_field(OPCODE_SHIFT, 0xF, value as u16)
    }

    pub fn with_aa(self, value: bool) -> Self {
        self.with_field(AA_SHIFT, 0x1, value as u16)
    }

    pub fn with_tc(self, value: bool) -> Self {
        self.with_field(TC_SHIFT, 0x1, value as u16)
    }

    pub fn with_rd(self, value: bool) -> Self {
        self.with_field(RD_SHIFT, 0x1, value as u16)
    }

    pub fn with_ra(self, value: bool) -> Self {
        self.with_field(RA_SHIFT, 0x1, value as u16)
    }

    pub fn with_z(self, value: u8) -> Self {
        self.with_field(Z_SHIFT, 0x7, value as u16)
    }

    pub fn with_rcode(self, value: u8) -> Self {
        self.with_field(0, 0xF, value as u16)
    }

    fn bit(&self, shift: u16) -> bool {
        (self.0 >> shift) & 0x1 == 1
    }

    fn field(&self, shift: u16, mask: u16) -> u8 {
        ((self.0 >> shift) & mask) as u8
    }

    fn with_field(self, shift: u16, mask: u16, value: u16) -> Self {
        Self((self.0 & !(mask << shift)) | ((value & mask) << shift))
    }
}

impl From<u16> for Flags {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "qr: {}, opcode: {}, aa: {}, tc: {}, rd: {}, ra: {}, z: {}, rcode: {}",
            self.qr() as u8,
            self.opcode(),
            self.aa() as u8,
            self.tc() as u8,
            self.rd() as u8,
            self.ra() as u8,
            self.z(),
            self.result_code(),
        )
    }
}
