use super::field::{BitFlag, FieldDescriptor, FieldGroup, FieldRef, ScalarField, WeaponAmmo};
use super::tables::{rac1, rac2, rac3};
use super::variant::GameVariant;

/// Every editable field of one game.
///
/// Schemas are static; binding one to a save file only borrows it.
#[derive(Debug)]
pub struct GameSchema {
    pub variant: GameVariant,
    pub display_name: &'static str,
    pub values: &'static [ScalarField],
    pub weapons: &'static [WeaponAmmo],
    pub gadgets: &'static [BitFlag],
    pub unlockables: &'static [BitFlag],
    /// Appended to `values` when listing or indexing the values group
    pub extra_values: &'static [ScalarField],
}

pub static UNKNOWN_SCHEMA: GameSchema = GameSchema {
    variant: GameVariant::Unknown,
    display_name: "Unknown Game",
    values: &[],
    weapons: &[],
    gadgets: &[],
    unlockables: &[],
    extra_values: &[],
};

pub static RAC1_SCHEMA: GameSchema = GameSchema {
    variant: GameVariant::Rac1,
    display_name: "Ratchet & Clank HD",
    values: rac1::VALUES,
    weapons: rac1::WEAPONS,
    gadgets: rac1::GADGETS,
    unlockables: rac1::UNLOCKABLES,
    extra_values: &[],
};

pub static RAC2_SCHEMA: GameSchema = GameSchema {
    variant: GameVariant::Rac2,
    display_name: "Ratchet & Clank 2 HD",
    values: rac2::VALUES,
    weapons: rac2::WEAPONS,
    gadgets: rac2::GADGETS,
    unlockables: rac2::UNLOCKABLES,
    extra_values: &[],
};

pub static RAC3_SCHEMA: GameSchema = GameSchema {
    variant: GameVariant::Rac3,
    display_name: "Ratchet & Clank 3 HD",
    values: rac3::VALUES,
    weapons: rac3::WEAPONS,
    gadgets: rac3::GADGETS,
    unlockables: rac3::UNLOCKABLES,
    extra_values: rac3::WEAPON_EXP,
};

impl GameSchema {
    pub fn for_variant(variant: GameVariant) -> &'static GameSchema {
        match variant {
            GameVariant::Unknown => &UNKNOWN_SCHEMA,
            GameVariant::Rac1 => &RAC1_SCHEMA,
            GameVariant::Rac2 => &RAC2_SCHEMA,
            GameVariant::Rac3 => &RAC3_SCHEMA,
        }
    }

    /// Number of fields in a group (values include the extra values)
    pub fn len(&self, group: FieldGroup) -> usize {
        match group {
            FieldGroup::Values => self.values.len() + self.extra_values.len(),
            FieldGroup::Weapons => self.weapons.len(),
            FieldGroup::Gadgets => self.gadgets.len(),
            FieldGroup::Unlockables => self.unlockables.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        FieldGroup::ALL.iter().all(|&group| self.len(group) == 0)
    }

    /// Field at a position within its group
    pub fn field(&self, field: FieldRef) -> Option<FieldDescriptor> {
        let index = field.index;
        match field.group {
            FieldGroup::Values => self
                .values
                .get(index)
                .or_else(|| {
                    index
                        .checked_sub(self.values.len())
                        .and_then(|i| self.extra_values.get(i))
                })
                .map(FieldDescriptor::Value),
            FieldGroup::Weapons => self.weapons.get(index).map(FieldDescriptor::Weapon),
            FieldGroup::Gadgets => self.gadgets.get(index).map(FieldDescriptor::Gadget),
            FieldGroup::Unlockables => self.unlockables.get(index).map(FieldDescriptor::Unlockable),
        }
    }

    /// Fields of a group in declaration order; positions are stable
    pub fn fields(&self, group: FieldGroup) -> Vec<FieldDescriptor> {
        match group {
            FieldGroup::Values => self
                .values
                .iter()
                .chain(self.extra_values)
                .map(FieldDescriptor::Value)
                .collect(),
            FieldGroup::Weapons => self.weapons.iter().map(FieldDescriptor::Weapon).collect(),
            FieldGroup::Gadgets => self.gadgets.iter().map(FieldDescriptor::Gadget).collect(),
            FieldGroup::Unlockables => self
                .unlockables
                .iter()
                .map(FieldDescriptor::Unlockable)
                .collect(),
        }
    }

    /// Find a field by name, ignoring case.
    ///
    /// Groups are searched values first, then weapons, gadgets and
    /// unlockables; the first match wins.
    pub fn find(&self, name: &str) -> Option<FieldRef> {
        let name = name.trim();
        FieldGroup::ALL.iter().find_map(|&group| {
            self.fields(group)
                .iter()
                .position(|field| field.name().eq_ignore_ascii_case(name))
                .map(|index| FieldRef::new(group, index))
        })
    }
}
