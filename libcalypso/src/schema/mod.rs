// libcalypso/src/schema/mod.rs

//! Declarative EN1545 record schemas.
//!
//! A schema is a flat, ordered table of [`FieldSpec`]s. Nesting is expressed
//! through presence rules: a field is gated by one bit of a bitmap field that
//! precedes it in the table. Bit 0 of a bitmap (its least significant bit)
//! gates the bitmap's first child. Evaluating a schema against one record
//! yields a [`Layout`] carrying every field's offset and presence.

pub mod catalog;
pub mod field;
mod intercode;
mod opus;

pub use catalog::{CounterLayout, SchemaSet};
pub use field::Field;

use derive_more::Display;

use crate::utils::BitView;
use crate::{Error, Result};

/// Which of the six catalog schemas a table describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SchemaKind {
    #[display(fmt = "navigo environment")]
    NavigoEnvironment,
    #[display(fmt = "navigo contract")]
    NavigoContract,
    #[display(fmt = "navigo event")]
    NavigoEvent,
    #[display(fmt = "opus environment")]
    OpusEnvironment,
    #[display(fmt = "opus contract")]
    OpusContract,
    #[display(fmt = "opus event")]
    OpusEvent,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 6] = [
        SchemaKind::NavigoEnvironment,
        SchemaKind::NavigoContract,
        SchemaKind::NavigoEvent,
        SchemaKind::OpusEnvironment,
        SchemaKind::OpusContract,
        SchemaKind::OpusEvent,
    ];

    pub fn record_kind(&self) -> RecordKind {
        match self {
            Self::NavigoEnvironment | Self::OpusEnvironment => RecordKind::Environment,
            Self::NavigoContract | Self::OpusContract => RecordKind::Contract,
            Self::NavigoEvent | Self::OpusEvent => RecordKind::Event,
        }
    }
}

/// Record family a schema decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Environment,
    Contract,
    Event,
}

impl RecordKind {
    /// Fields read at their computed offset without a presence check. Every
    /// schema of this kind must declare them.
    pub fn always_decoded(&self) -> &'static [Field] {
        match self {
            Self::Environment => &[
                Field::EnvApplicationVersionNumber,
                Field::EnvNetworkId,
                Field::EnvApplicationValidityEndDate,
                Field::HolderDataCardStatus,
                Field::HolderDataCommercialID,
            ],
            Self::Contract => &[Field::ContractBitmap, Field::ContractValiditySaleAgent],
            Self::Event => &[Field::EventDateStamp, Field::EventTimeStamp],
        }
    }
}

/// Presence rule: the field exists iff `bitmap` exists and bit `bit` of its
/// value is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presence {
    pub bitmap: Field,
    pub bit: u8,
}

/// One row of a schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub width: u16,
    pub presence: Option<Presence>,
    pub is_bitmap: bool,
}

impl FieldSpec {
    pub const fn leaf(field: Field, width: u16) -> Self {
        Self {
            field,
            width,
            presence: None,
            is_bitmap: false,
        }
    }

    pub const fn bitmap(field: Field, width: u16) -> Self {
        Self {
            field,
            width,
            presence: None,
            is_bitmap: true,
        }
    }

    /// Gate this field on bit `bit` of `bitmap`.
    pub const fn under(self, bitmap: Field, bit: u8) -> Self {
        Self {
            presence: Some(Presence { bitmap, bit }),
            ..self
        }
    }
}

/// An immutable record description.
#[derive(Debug)]
pub struct FieldSchema {
    kind: SchemaKind,
    fields: &'static [FieldSpec],
}

impl FieldSchema {
    pub const fn new(kind: SchemaKind, fields: &'static [FieldSpec]) -> Self {
        Self { kind, fields }
    }

    pub fn kind(&self) -> SchemaKind {
        self.kind
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }

    pub fn contains(&self, field: Field) -> bool {
        self.position(field).is_some()
    }

    fn position(&self, field: Field) -> Option<usize> {
        self.fields.iter().position(|s| s.field == field)
    }

    fn index_of(&self, field: Field) -> Result<usize> {
        self.position(field).ok_or(Error::UnknownField {
            field,
            schema: self.kind,
        })
    }

    pub fn spec(&self, field: Field) -> Result<&'static FieldSpec> {
        let idx = self.index_of(field)?;
        Ok(&self.fields[idx])
    }

    /// Declared width of `field` in bits.
    pub fn size_of(&self, field: Field) -> Result<usize> {
        Ok(self.spec(field)?.width as usize)
    }

    /// Sum of every declared width, i.e. the record length when every
    /// optional field is present.
    pub fn total_width(&self) -> usize {
        self.fields.iter().map(|s| s.width as usize).sum()
    }

    /// The first top-level bitmap of the table.
    pub fn leading_bitmap(&self) -> Option<&'static FieldSpec> {
        self.fields
            .iter()
            .find(|s| s.is_bitmap && s.presence.is_none())
    }

    /// Walk the table once in declaration order, computing offsets and
    /// reading each present bitmap so that its children can be gated.
    pub fn evaluate<'a>(&'a self, bits: BitView<'a>) -> Result<Layout<'a>> {
        let mut slots: Vec<Slot> = Vec::with_capacity(self.fields.len());
        let mut cursor = 0usize;

        for spec in self.fields {
            let present = match spec.presence {
                None => true,
                Some(Presence { bitmap, bit }) => {
                    let parent = slots
                        .get(self.index_of(bitmap)?)
                        .copied()
                        .unwrap_or_default();
                    parent.present && parent.bitmap.is_some_and(|v| (v >> bit) & 1 == 1)
                }
            };

            let width = spec.width as usize;
            let bitmap = if present && spec.is_bitmap {
                Some(bits.read(cursor, width)?)
            } else {
                None
            };

            slots.push(Slot {
                offset: cursor,
                present,
                bitmap,
            });
            if present {
                cursor += width;
            }
        }

        Ok(Layout {
            schema: self,
            bits,
            slots,
            end: cursor,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Slot {
    offset: usize,
    present: bool,
    bitmap: Option<u64>,
}

/// A schema evaluated against one record.
#[derive(Debug, Clone)]
pub struct Layout<'a> {
    schema: &'a FieldSchema,
    bits: BitView<'a>,
    slots: Vec<Slot>,
    end: usize,
}

impl<'a> Layout<'a> {
    pub fn schema(&self) -> &'a FieldSchema {
        self.schema
    }

    fn slot(&self, field: Field) -> Result<Slot> {
        let idx = self.schema.index_of(field)?;
        Ok(self.slots[idx])
    }

    /// Absolute bit offset. For an absent field this is where it would
    /// start, which is what always-decoded reads use.
    pub fn offset_of(&self, field: Field) -> Result<usize> {
        Ok(self.slot(field)?.offset)
    }

    pub fn size_of(&self, field: Field) -> Result<usize> {
        self.schema.size_of(field)
    }

    pub fn is_present(&self, field: Field) -> Result<bool> {
        Ok(self.slot(field)?.present)
    }

    /// Value of a present bitmap field.
    pub fn bitmap_value(&self, field: Field) -> Result<Option<u64>> {
        Ok(self.slot(field)?.bitmap)
    }

    /// Read `field` at its offset without checking presence.
    pub fn read(&self, field: Field) -> Result<u64> {
        let slot = self.slot(field)?;
        self.bits.read(slot.offset, self.size_of(field)?)
    }

    /// Read `field` if present.
    pub fn read_present(&self, field: Field) -> Result<Option<u64>> {
        if !self.is_present(field)? {
            return Ok(None);
        }
        self.read(field).map(Some)
    }

    /// Bits consumed by the present fields.
    pub fn used_bits(&self) -> usize {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOY: &[FieldSpec] = &[
        FieldSpec::leaf(Field::EventDateStamp, 4),
        FieldSpec::bitmap(Field::EventBitmap, 3),
        FieldSpec::leaf(Field::EventCode, 8).under(Field::EventBitmap, 0),
        FieldSpec::bitmap(Field::EventData, 2).under(Field::EventBitmap, 1),
        FieldSpec::leaf(Field::EventDataTrip, 4).under(Field::EventData, 0),
        FieldSpec::leaf(Field::EventDataSimulation, 4).under(Field::EventData, 1),
        FieldSpec::leaf(Field::EventServiceProvider, 8).under(Field::EventBitmap, 2),
    ];
    static TOY_SCHEMA: FieldSchema = FieldSchema::new(SchemaKind::NavigoEvent, TOY);

    #[test]
    fn offsets_skip_absent_fields() {
        // date=1010, bitmap=101 (code + provider), code=0xAB, provider=0xCD
        // 1010 101 10101011 11001101 -> pad to 4 bytes
        let bytes = [0b1010_1011, 0b0101_0111, 0b1001_1010, 0b0000_0000];
        let layout = TOY_SCHEMA.evaluate(BitView::new(&bytes)).unwrap();

        assert_eq!(layout.read(Field::EventDateStamp).unwrap(), 0b1010);
        assert_eq!(layout.bitmap_value(Field::EventBitmap).unwrap(), Some(0b101));
        assert_eq!(layout.offset_of(Field::EventCode).unwrap(), 7);
        assert_eq!(layout.read_present(Field::EventCode).unwrap(), Some(0xAB));
        assert!(!layout.is_present(Field::EventData).unwrap());
        assert!(!layout.is_present(Field::EventDataTrip).unwrap());
        assert_eq!(layout.read_present(Field::EventDataTrip).unwrap(), None);
        assert_eq!(layout.offset_of(Field::EventServiceProvider).unwrap(), 15);
        assert_eq!(layout.read(Field::EventServiceProvider).unwrap(), 0xCD);
        assert_eq!(layout.used_bits(), 23);
    }

    #[test]
    fn nested_bitmap_gates_children() {
        // date=0000, bitmap=010 (data only), data=10 (simulation only), sim=1111
        // 0000 010 10 1111 -> 0000_0101 0111_1000
        let bytes = [0b0000_0101, 0b0111_1000];
        let layout = TOY_SCHEMA.evaluate(BitView::new(&bytes)).unwrap();
        assert!(layout.is_present(Field::EventData).unwrap());
        assert!(!layout.is_present(Field::EventDataTrip).unwrap());
        assert_eq!(layout.offset_of(Field::EventDataSimulation).unwrap(), 9);
        assert_eq!(
            layout.read_present(Field::EventDataSimulation).unwrap(),
            Some(0b1111)
        );
    }

    #[test]
    fn bitmap_past_payload_is_bit_range() {
        let bytes = [0xFF];
        // bitmap 111 -> code present at 7..14, data bitmap at 15..16 is past the end
        match TOY_SCHEMA.evaluate(BitView::new(&bytes)) {
            Err(Error::BitRange { .. }) => {}
            other => panic!("expected BitRange, got {:?}", other.map(|l| l.used_bits())),
        }
    }

    #[test]
    fn unknown_field_fails_fast() {
        let bytes = [0u8; 4];
        let layout = TOY_SCHEMA.evaluate(BitView::new(&bytes)).unwrap();
        match layout.offset_of(Field::ContractTariff) {
            Err(Error::UnknownField { field, schema }) => {
                assert_eq!(field, Field::ContractTariff);
                assert_eq!(schema, SchemaKind::NavigoEvent);
            }
            other => panic!("expected UnknownField, got {:?}", other),
        }
        assert!(!TOY_SCHEMA.contains(Field::ContractTariff));
        assert!(TOY_SCHEMA.size_of(Field::ContractTariff).is_err());
    }

    #[test]
    fn static_queries() {
        assert_eq!(TOY_SCHEMA.total_width(), 4 + 3 + 8 + 2 + 4 + 4 + 8);
        assert_eq!(TOY_SCHEMA.size_of(Field::EventCode).unwrap(), 8);
        assert_eq!(
            TOY_SCHEMA.leading_bitmap().map(|s| s.field),
            Some(Field::EventBitmap)
        );
    }
}
