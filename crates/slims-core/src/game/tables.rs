//! Field tables for each supported game.
//!
//! Offsets are byte positions from the start of the save file. Every flag
//! currently lives in bit 0 of its own byte. Ammo maxima are the fully
//! upgraded capacities.

use super::field::{BitFlag, ScalarField, WeaponAmmo};

/// Ratchet & Clank HD
pub mod rac1 {
    use super::*;

    pub const VALUES: &[ScalarField] = &[ScalarField::new(
        "Bolts",
        "Current bolt count",
        36,
        0,
        999_999,
    )];

    pub const WEAPONS: &[WeaponAmmo] = &[
        ScalarField::new("Bomb Glove", "Starting weapon", 324, 0, 40),
        ScalarField::new("Pyrocitor", "Flamethrower", 348, 0, 240),
        ScalarField::new("Blaster", "Rapid fire pistol", 344, 0, 200),
        ScalarField::new("Devastator", "Rocket launcher", 328, 0, 20),
        ScalarField::new("Visibomb Gun", "Guided missiles", 336, 0, 20),
        ScalarField::new("Mine Glove", "Proximity mines", 352, 0, 50),
        ScalarField::new("Tesla Claw", "Electric weapon", 360, 0, 240),
        ScalarField::new("Glove of Doom", "Spawns agents", 364, 0, 10),
        ScalarField::new("RYNO", "Ultimate weapon", 376, 0, 50),
        ScalarField::new("Drone Device", "Attack drones", 380, 0, 10),
        ScalarField::new("Decoy Glove", "Spawns decoy", 384, 0, 20),
    ];

    pub const GADGETS: &[BitFlag] = &[
        BitFlag::new("Heli-Pack", "Helicopter backpack", 442, 0),
        BitFlag::new("Thruster-Pack", "Jetpack", 443, 0),
        BitFlag::new("Hydro-Pack", "Underwater propulsion", 444, 0),
        BitFlag::new("Sonic Summoner", "Calls transport", 445, 0),
        BitFlag::new("O2 Mask", "Underwater breathing", 446, 0),
        BitFlag::new("Pilot Helmet", "Fly ships", 447, 0),
        BitFlag::new("Swingshot", "Grappling hook", 452, 0),
        BitFlag::new("Hydrodisplacer", "Water management", 462, 0),
        BitFlag::new("Trespasser", "Hacking tool", 466, 0),
        BitFlag::new("Metal Detector", "Find items", 467, 0),
        BitFlag::new("Magneboots", "Magnetic boots", 468, 0),
        BitFlag::new("Grindboots", "Rail grinding", 469, 0),
        BitFlag::new("Hoverboard", "Hoverboard", 470, 0),
        BitFlag::new("Hologuise", "Disguise", 471, 0),
        BitFlag::new("Gadgetron PDA", "PDA device", 472, 0),
        BitFlag::new("Map-o-Matic", "Map display", 473, 0),
        BitFlag::new("Bolt Grabber", "Magnetic bolts", 474, 0),
        BitFlag::new("Persuader", "Unlock doors", 475, 0),
    ];

    pub const UNLOCKABLES: &[BitFlag] = &[
        BitFlag::new("Suck Cannon Owned", "Unlock Suck Cannon", 449, 0),
        BitFlag::new("Bomb Glove Owned", "Unlock Bomb Glove", 450, 0),
        BitFlag::new("Devastator Owned", "Unlock Devastator", 451, 0),
        BitFlag::new("Visibomb Gun Owned", "Unlock Visibomb Gun", 453, 0),
        BitFlag::new("Taunter Owned", "Unlock Taunter", 454, 0),
        BitFlag::new("Blaster Owned", "Unlock Blaster", 455, 0),
        BitFlag::new("Pyrocitor Owned", "Unlock Pyrocitor", 456, 0),
        BitFlag::new("Mine Glove Owned", "Unlock Mine Glove", 457, 0),
        BitFlag::new("Walloper Owned", "Unlock Walloper", 458, 0),
        BitFlag::new("Tesla Claw Owned", "Unlock Tesla Claw", 459, 0),
        BitFlag::new("Glove of Doom Owned", "Unlock Glove of Doom", 460, 0),
        BitFlag::new("Morph-o-Ray Owned", "Unlock Morph-o-Ray", 461, 0),
        BitFlag::new("RYNO Owned", "Unlock RYNO", 463, 0),
        BitFlag::new("Drone Device Owned", "Unlock Drone Device", 464, 0),
        BitFlag::new("Decoy Glove Owned", "Unlock Decoy Glove", 465, 0),
    ];
}

/// Ratchet & Clank 2: Going Commando HD
pub mod rac2 {
    use super::*;

    pub const VALUES: &[ScalarField] = &[
        ScalarField::new("Bolts", "Current bolt count", 36, 0, 9_999_999),
        ScalarField::new("Raritanium", "Upgrade currency", 40, 0, 99_999),
    ];

    pub const WEAPONS: &[WeaponAmmo] = &[
        // Megacorp weapons
        ScalarField::new("Lancer", "Basic pistol", 544, 0, 300),
        // TODO: locate the Gravity Bomb ammo counter; offset 0 is a placeholder
        ScalarField::new("Gravity Bomb", "Gravity weapon", 0, 0, 12),
        ScalarField::new("Chopper", "Throwing blades", 512, 0, 50),
        ScalarField::new("Seeker Gun", "Homing missiles", 520, 0, 50),
        ScalarField::new("Pulse Rifle", "Energy weapon", 516, 0, 12),
        ScalarField::new("Miniturret Glove", "Spawns turrets", 588, 0, 25),
        ScalarField::new("Blitz Gun", "Lightning weapon", 528, 0, 50),
        ScalarField::new("Shield Charger", "Protective shield", 604, 0, 10),
        ScalarField::new("Synthenoid", "Spawns allies", 548, 0, 20),
        ScalarField::new("Lava Gun", "Lava launcher", 540, 0, 300),
        ScalarField::new("Bouncer", "Bomb launcher", 572, 0, 25),
        ScalarField::new("Minirocket Tube", "Mini rockets", 532, 0, 25),
        ScalarField::new("Plasma Coil", "Plasma weapon", 536, 0, 25),
        ScalarField::new("Hoverbomb Gun", "Guided bombs", 524, 0, 15),
        ScalarField::new("Spiderbot Glove", "Spider bots", 552, 0, 12),
        // Gadgetron legacy weapons
        ScalarField::new("Bomb Glove (RC1)", "From RC1", 456, 0, 60),
        ScalarField::new("Tesla Claw (RC1)", "From RC1", 496, 0, 300),
        ScalarField::new("Visibomb Gun (RC1)", "From RC1", 472, 0, 30),
        ScalarField::new("Decoy Glove (RC1)", "From RC1", 488, 0, 30),
        ScalarField::new("RYNO II", "Super weapon", 600, 0, 100),
        ScalarField::new("Zodiac", "Ultimate weapon", 596, 0, 4),
    ];

    pub const GADGETS: &[BitFlag] = &[
        BitFlag::new("Heli-Pack", "Helicopter pack", 658, 0),
        BitFlag::new("Thruster-Pack", "Jetpack", 659, 0),
        BitFlag::new("Hydro-Pack", "Water propulsion", 660, 0),
        BitFlag::new("Mapper", "Map display", 661, 0),
        BitFlag::new("Levitator", "Gravity platform", 664, 0),
        BitFlag::new("Swingshot", "Grappling hook", 669, 0),
        BitFlag::new("Gravity Boots", "Wall walking", 675, 0),
        BitFlag::new("Grindboots", "Rail grinding", 676, 0),
        BitFlag::new("Glider", "Glider", 677, 0),
        BitFlag::new("Dynamo", "Powers machinery", 692, 0),
        BitFlag::new("Electrolyzer", "Electric tool", 694, 0),
        BitFlag::new("Thermanator", "Heat visor", 695, 0),
        BitFlag::new("Tractor Beam", "Move objects", 702, 0),
        BitFlag::new("Biker Helmet", "Helmet", 704, 0),
        BitFlag::new("Quark Statuette", "Collectible", 705, 0),
        BitFlag::new("Box Breaker", "Stronger wrench", 706, 0),
        BitFlag::new("Infiltrator", "Hacking tool", 708, 0),
        BitFlag::new("Charge Boots", "Speed boots", 710, 0),
        BitFlag::new("Hypnomatic", "Mind control", 711, 0),
    ];

    pub const UNLOCKABLES: &[BitFlag] = &[
        BitFlag::new("Clank Zapper Owned", "Unlock Clank Zapper", 665, 0),
        BitFlag::new("Bomb Glove Owned", "Unlock Bomb Glove", 668, 0),
        BitFlag::new("Visibomb Gun Owned", "Unlock Visibomb Gun", 670, 0),
        BitFlag::new("Sheepinator Owned", "Unlock Sheepinator", 672, 0),
        BitFlag::new("Decoy Glove Owned", "Unlock Decoy Glove", 673, 0),
        BitFlag::new("Tesla Claw Owned", "Unlock Tesla Claw", 674, 0),
        // Shares its byte with the Glider gadget
        BitFlag::new("Chopper Owned", "Unlock Chopper", 677, 0),
        BitFlag::new("Pulse Rifle Owned", "Unlock Pulse Rifle", 679, 0),
        BitFlag::new("Seeker Gun Owned", "Unlock Seeker Gun", 680, 0),
        BitFlag::new("Hoverbomb Gun Owned", "Unlock Hoverbomb Gun", 681, 0),
        BitFlag::new("Blitz Gun Owned", "Unlock Blitz Gun", 682, 0),
        BitFlag::new("Minirocket Tube Owned", "Unlock Minirocket Tube", 683, 0),
        BitFlag::new("Plasma Coil Owned", "Unlock Plasma Coil", 684, 0),
        BitFlag::new("Lava Gun Owned", "Unlock Lava Gun", 685, 0),
        BitFlag::new("Lancer Owned", "Unlock Lancer", 686, 0),
        BitFlag::new("Synthenoid Owned", "Unlock Synthenoid", 687, 0),
        BitFlag::new("Spiderbot Glove Owned", "Unlock Spiderbot Glove", 688, 0),
        BitFlag::new("Bouncer Owned", "Unlock Bouncer", 693, 0),
        BitFlag::new("Miniturret Glove Owned", "Unlock Miniturret Glove", 697, 0),
        BitFlag::new("Zodiac Owned", "Unlock Zodiac", 699, 0),
        BitFlag::new("RYNO II Owned", "Unlock RYNO II", 700, 0),
        BitFlag::new("Shield Charger Owned", "Unlock Shield Charger", 701, 0),
        BitFlag::new("Walloper Owned", "Unlock Walloper", 709, 0),
    ];
}

/// Ratchet & Clank 3: Up Your Arsenal HD
pub mod rac3 {
    use super::*;

    pub const VALUES: &[ScalarField] = &[ScalarField::new(
        "Bolts",
        "Current bolt count",
        36,
        0,
        9_999_999,
    )];

    pub const WEAPONS: &[WeaponAmmo] = &[
        ScalarField::new("Shock Blaster", "Electric pistol", 716, 0, 100),
        ScalarField::new("Nitro Launcher", "Rocket launcher", 1036, 0, 40),
        ScalarField::new("N60 Storm", "Machine gun", 748, 0, 300),
        ScalarField::new("Plasma Whip", "Melee weapon", 1068, 0, 50),
        ScalarField::new("Infector", "Infection weapon", 780, 0, 30),
        ScalarField::new("Annihilator", "Laser weapon", 812, 0, 70),
        ScalarField::new("Agents of Doom", "Spawns agents", 908, 0, 15),
        ScalarField::new("Flux Rifle", "Sniper rifle", 1004, 0, 15),
        ScalarField::new("Disc Blade Gun", "Disc launcher", 876, 0, 50),
        ScalarField::new("Rift Inducer", "Black hole gun", 940, 0, 8),
        ScalarField::new("Spitting Hydra", "Multi-rocket", 844, 0, 40),
        ScalarField::new("Holoshield Glove", "Shield generator", 972, 0, 8),
        ScalarField::new("Qwack-O-Ray", "Transform weapon", 1132, 0, 25),
        ScalarField::new("RY3NO", "Ultimate weapon", 1164, 0, 100),
    ];

    /// Per-weapon experience, listed after the primary values
    pub const WEAPON_EXP: &[ScalarField] = &[
        ScalarField::new("Shock Blaster EXP", "Weapon experience", 1676, 0, 999_999),
        ScalarField::new("N60 Storm EXP", "Weapon experience", 1708, 0, 999_999),
        ScalarField::new("Infector EXP", "Weapon experience", 1740, 0, 999_999),
        ScalarField::new("Annihilator EXP", "Weapon experience", 1772, 0, 999_999),
        ScalarField::new("Spitting Hydra EXP", "Weapon experience", 1804, 0, 999_999),
        ScalarField::new("Disc Blade Gun EXP", "Weapon experience", 1836, 0, 999_999),
        ScalarField::new("Agents of Doom EXP", "Weapon experience", 1868, 0, 999_999),
        ScalarField::new("Rift Inducer EXP", "Weapon experience", 1900, 0, 999_999),
        ScalarField::new("Holoshield EXP", "Weapon experience", 1932, 0, 999_999),
        ScalarField::new("Flux Rifle EXP", "Weapon experience", 1964, 0, 999_999),
        ScalarField::new("Nitro Launcher EXP", "Weapon experience", 1996, 0, 999_999),
        ScalarField::new("Plasma Whip EXP", "Weapon experience", 2028, 0, 999_999),
        ScalarField::new("Qwack-O-Ray EXP", "Weapon experience", 2060, 0, 999_999),
        ScalarField::new("RY3NO EXP", "Weapon experience", 2124, 0, 999_999),
    ];

    pub const GADGETS: &[BitFlag] = &[
        BitFlag::new("Heli Pack", "Helicopter pack", 1194, 0),
        BitFlag::new("Thruster Pack", "Jetpack", 1195, 0),
        BitFlag::new("Hydro Pack", "Water propulsion", 1196, 0),
        BitFlag::new("Map-o-Matic", "Map display", 1197, 0),
        BitFlag::new("Commando Suit", "Armor", 1198, 0),
        BitFlag::new("Bolt Grabber v2", "Enhanced bolt magnet", 1199, 0),
        BitFlag::new("Levitator", "Gravity platform", 1200, 0),
        BitFlag::new("Omniwrench", "Upgraded wrench", 1201, 0),
        BitFlag::new("Hypershot", "Long grapple", 1203, 0),
        BitFlag::new("Gravity Boots", "Wall walking", 1205, 0),
        BitFlag::new("Refractor", "Deflects lasers", 1210, 0),
        BitFlag::new("The Hacker", "Computer hacking", 1212, 0),
        BitFlag::new("Charge Boots", "Speed boots", 1221, 0),
        BitFlag::new("Tyhrraguise", "Disguise", 1222, 0),
        BitFlag::new("Warp Pad", "Teleporter", 1223, 0),
        BitFlag::new("Nano Pak", "Health upgrade", 1224, 0),
        BitFlag::new("Star Map", "Galactic map", 1226, 0),
        BitFlag::new("Master Plan", "Story item", 1227, 0),
        BitFlag::new("PDA", "Device", 1228, 0),
    ];

    pub const UNLOCKABLES: &[BitFlag] = &[
        BitFlag::new("Shock Blaster V1 Owned", "Unlock Shock Blaster", 1231, 0),
        BitFlag::new("N60 Storm V1 Owned", "Unlock N60 Storm", 1239, 0),
        BitFlag::new("Infector V1 Owned", "Unlock Infector", 1247, 0),
        BitFlag::new("Annihilator V1 Owned", "Unlock Annihilator", 1255, 0),
        BitFlag::new("Spitting Hydra V1 Owned", "Unlock Spitting Hydra", 1263, 0),
        BitFlag::new("Disc Blade Gun V1 Owned", "Unlock Disc Blade Gun", 1271, 0),
        BitFlag::new("Agents of Doom V1 Owned", "Unlock Agents of Doom", 1279, 0),
        BitFlag::new("Rift Inducer V1 Owned", "Unlock Rift Inducer", 1287, 0),
        BitFlag::new("Holoshield V1 Owned", "Unlock Holoshield", 1295, 0),
        BitFlag::new("Flux Rifle V1 Owned", "Unlock Flux Rifle", 1303, 0),
        BitFlag::new("Nitro Launcher V1 Owned", "Unlock Nitro Launcher", 1311, 0),
        BitFlag::new("Plasma Whip V1 Owned", "Unlock Plasma Whip", 1319, 0),
        BitFlag::new("Qwack-O-Ray V1 Owned", "Unlock Qwack-O-Ray", 1327, 0),
        BitFlag::new("RY3NO V1 Owned", "Unlock RY3NO", 1343, 0),
        // Returning weapons from Going Commando
        BitFlag::new("Plasma Coil Owned", "Unlock Plasma Coil (RC2)", 1208, 0),
        BitFlag::new("Lava Gun Owned", "Unlock Lava Gun (RC2)", 1209, 0),
        BitFlag::new("Bouncer Owned", "Unlock Bouncer (RC2)", 1211, 0),
        BitFlag::new("Miniturret Owned", "Unlock Miniturret (RC2)", 1213, 0),
        BitFlag::new("Shield Charger Owned", "Unlock Shield Charger (RC2)", 1214, 0),
    ];
}
