// thaiid/src/catalog/fields.rs

use derive_more::Display;

use crate::types::CommandTemplate;

/// Text fields stored on the card, in read order.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FieldId {
    /// 13-digit citizen identification number
    #[display(fmt = "cid")]
    CitizenId,
    /// Name in Thai, parts separated by `#`
    #[display(fmt = "thFullName")]
    ThaiFullName,
    /// Name in Latin script, parts separated by `#`
    #[display(fmt = "enFullName")]
    EnglishFullName,
    /// `YYYYMMDD`, Buddhist era
    #[display(fmt = "dateOfBirth")]
    DateOfBirth,
    /// `1` male, `2` female
    #[display(fmt = "gender")]
    Gender,
    /// Issuing office
    #[display(fmt = "issuer")]
    Issuer,
    /// `YYYYMMDD`, Buddhist era
    #[display(fmt = "issueDate")]
    IssueDate,
    /// `YYYYMMDD`, Buddhist era
    #[display(fmt = "expireDate")]
    ExpireDate,
    /// Registered address, parts separated by `#`
    #[display(fmt = "address")]
    Address,
}

impl FieldId {
    /// Every text field, in read order.
    pub const ALL: [FieldId; 9] = [
        Self::CitizenId,
        Self::ThaiFullName,
        Self::EnglishFullName,
        Self::DateOfBirth,
        Self::Gender,
        Self::Issuer,
        Self::IssueDate,
        Self::ExpireDate,
        Self::Address,
    ];

    /// Record label of the field, same as its `Display`.
    pub fn label(&self) -> &'static str {
        TEXT_FIELDS[*self as usize].label
    }
}

/// How a payload is interpreted once the trailer is stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Thai-codepage text, space padded
    Text,
    /// Opaque bytes (photo segments)
    Binary,
}

/// Where a data object lives on the card and how to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Record label (`cid`, `photo`, ...)
    pub label: &'static str,
    /// Offset and length to read
    pub template: CommandTemplate,
    /// Text or binary payload
    pub kind: FieldKind,
}

impl FieldDescriptor {
    const fn text(label: &'static str, offset: u16, length: u8) -> Self {
        Self {
            label,
            template: CommandTemplate::new(offset, length),
            kind: FieldKind::Text,
        }
    }

    /// True for text fields.
    pub const fn is_textual(&self) -> bool {
        matches!(self.kind, FieldKind::Text)
    }
}

/// Text field descriptors, indexed by `FieldId`.
pub const TEXT_FIELDS: [FieldDescriptor; 9] = [
    FieldDescriptor::text("cid", 0x0004, 13),
    FieldDescriptor::text("thFullName", 0x0011, 100),
    FieldDescriptor::text("enFullName", 0x0075, 100),
    FieldDescriptor::text("dateOfBirth", 0x00D9, 8),
    FieldDescriptor::text("gender", 0x00E1, 1),
    FieldDescriptor::text("issuer", 0x00F6, 100),
    FieldDescriptor::text("issueDate", 0x0167, 8),
    FieldDescriptor::text("expireDate", 0x016F, 8),
    FieldDescriptor::text("address", 0x1579, 100),
];
