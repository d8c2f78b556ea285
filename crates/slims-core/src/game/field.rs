use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::buffer::ByteWidth;

/// A ranged integer counter (bolts, ammo, weapon experience)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarField {
    pub name: &'static str,
    pub description: &'static str,
    pub offset: usize,
    pub min: i32,
    pub max: i32,
    pub width: ByteWidth,
}

/// Ammo pools share the counter layout
pub type WeaponAmmo = ScalarField;

impl ScalarField {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        offset: usize,
        min: i32,
        max: i32,
    ) -> Self {
        Self {
            name,
            description,
            offset,
            min,
            max,
            width: ByteWidth::I32,
        }
    }

    /// Same field stored in a single byte
    pub const fn byte(mut self) -> Self {
        self.width = ByteWidth::U8;
        self
    }

    /// Clamp to the declared range, then to what the storage width can hold
    pub fn clamp(&self, value: i32) -> i32 {
        let clamped = value.clamp(self.min, self.max);
        match self.width {
            ByteWidth::U8 => clamped.clamp(0, i32::from(u8::MAX)),
            ByteWidth::I32 => clamped,
        }
    }
}

/// A single owned/not-owned bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitFlag {
    pub name: &'static str,
    pub description: &'static str,
    pub offset: usize,
    pub bit: u8,
}

impl BitFlag {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        offset: usize,
        bit: u8,
    ) -> Self {
        Self {
            name,
            description,
            offset,
            bit,
        }
    }
}

/// Editor tabs; each schema lists its fields per group
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FieldGroup {
    Values,
    Weapons,
    Gadgets,
    Unlockables,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 4] = [
        FieldGroup::Values,
        FieldGroup::Weapons,
        FieldGroup::Gadgets,
        FieldGroup::Unlockables,
    ];

    pub fn is_flag(&self) -> bool {
        matches!(self, Self::Gadgets | Self::Unlockables)
    }
}

/// A field as listed by a schema, tagged with the group it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDescriptor {
    Value(&'static ScalarField),
    Weapon(&'static WeaponAmmo),
    Gadget(&'static BitFlag),
    Unlockable(&'static BitFlag),
}

impl FieldDescriptor {
    pub fn group(&self) -> FieldGroup {
        match self {
            Self::Value(_) => FieldGroup::Values,
            Self::Weapon(_) => FieldGroup::Weapons,
            Self::Gadget(_) => FieldGroup::Gadgets,
            Self::Unlockable(_) => FieldGroup::Unlockables,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Value(f) | Self::Weapon(f) => f.name,
            Self::Gadget(f) | Self::Unlockable(f) => f.name,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Value(f) | Self::Weapon(f) => f.description,
            Self::Gadget(f) | Self::Unlockable(f) => f.description,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            Self::Value(f) | Self::Weapon(f) => f.offset,
            Self::Gadget(f) | Self::Unlockable(f) => f.offset,
        }
    }

    pub fn as_scalar(&self) -> Option<&'static ScalarField> {
        match *self {
            Self::Value(f) | Self::Weapon(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<&'static BitFlag> {
        match *self {
            Self::Gadget(f) | Self::Unlockable(f) => Some(f),
            _ => None,
        }
    }
}

/// Positional address of a field within a schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    pub group: FieldGroup,
    pub index: usize,
}

impl FieldRef {
    pub const fn new(group: FieldGroup, index: usize) -> Self {
        Self { group, index }
    }
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.index)
    }
}

/// Current content of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i32),
    Flag(bool),
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i32> {
        match *self {
            Self::Int(v) => Some(v),
            Self::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match *self {
            Self::Flag(v) => Some(v),
            Self::Int(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
            Self::Flag(true) => write!(f, "owned"),
            Self::Flag(false) => write!(f, "not owned"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const BOLTS: ScalarField = ScalarField::new("Bolts", "Current bolt count", 36, 0, 999_999);
    const HELI_PACK: BitFlag = BitFlag::new("Heli-Pack", "Helicopter backpack", 442, 0);

    #[test]
    fn test_scalar_clamp() {
        assert_eq!(BOLTS.clamp(5_000_000), 999_999);
        assert_eq!(BOLTS.clamp(-1), 0);
        assert_eq!(BOLTS.clamp(1234), 1234);
    }

    #[test]
    fn test_byte_clamp_respects_width() {
        let lives = ScalarField::new("Lives", "Extra lives", 80, 0, 1_000).byte();
        assert_eq!(lives.clamp(700), 255);
        assert_eq!(lives.clamp(1_500), 255);
        assert_eq!(lives.clamp(200), 200);
        assert_eq!(lives.clamp(-5), 0);
    }

    #[test]
    fn test_byte_width_builder() {
        assert_eq!(BOLTS.width, ByteWidth::I32);
        assert_eq!(BOLTS.byte().width, ByteWidth::U8);
    }

    #[test]
    fn test_descriptor_accessors() {
        let value = FieldDescriptor::Value(&BOLTS);
        assert_eq!(value.group(), FieldGroup::Values);
        assert_eq!(value.name(), "Bolts");
        assert_eq!(value.offset(), 36);
        assert!(value.as_scalar().is_some());
        assert!(value.as_flag().is_none());

        let gadget = FieldDescriptor::Gadget(&HELI_PACK);
        assert_eq!(gadget.group(), FieldGroup::Gadgets);
        assert_eq!(gadget.description(), "Helicopter backpack");
        assert_eq!(gadget.as_flag().map(|f| f.bit), Some(0));
    }

    #[test]
    fn test_field_group_strings() {
        assert_eq!(FieldGroup::from_str("Weapons").unwrap(), FieldGroup::Weapons);
        assert_eq!(FieldGroup::Unlockables.to_string(), "unlockables");
        assert!(FieldGroup::Gadgets.is_flag());
        assert!(!FieldGroup::Values.is_flag());
    }

    #[test]
    fn test_field_ref_display() {
        assert_eq!(FieldRef::new(FieldGroup::Weapons, 3).to_string(), "weapons:3");
    }

    #[test]
    fn test_field_value_json() {
        assert_eq!(serde_json::to_string(&FieldValue::Int(40)).unwrap(), "40");
        assert_eq!(serde_json::to_string(&FieldValue::Flag(true)).unwrap(), "true");
    }
}
