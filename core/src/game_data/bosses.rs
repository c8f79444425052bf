//! Field boss table
//!
//! Every tracked boss with its respawn rule in raw string form.
//! Rules are either a fixed interval (`"24 hrs"`) or a weekly schedule
//! (`"Mon 11:30 / Thu 19:00"`), parsed at use by the respawn module.

/// One entry in the static boss table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossEntry {
    pub name: &'static str,
    /// Raw respawn rule, parsed by `RespawnPolicy::parse`
    pub respawn_rule: &'static str,
    pub armor: &'static str,
    pub level: u8,
    pub location: &'static str,
}

pub static BOSS_DATA: &[BossEntry] = &[
    BossEntry {
        name: "Venatus",
        respawn_rule: "10 hrs",
        armor: "TBD",
        level: 60,
        location: "Corrupted Basin",
    },
    BossEntry {
        name: "Viorent",
        respawn_rule: "10 hrs",
        armor: "TBD",
        level: 65,
        location: "Crescent Lake",
    },
    BossEntry {
        name: "Ego",
        respawn_rule: "21 hrs",
        armor: "TBD",
        level: 70,
        location: "Ulan Canyon",
    },
    BossEntry {
        name: "Clementis",
        respawn_rule: "Mon 11:30 / Thu 19:00",
        armor: "TBD",
        level: 70,
        location: "Corrupted Basin",
    },
    BossEntry {
        name: "Livera",
        respawn_rule: "24 hrs",
        armor: "TBD",
        level: 75,
        location: "Protector's Ruins",
    },
    BossEntry {
        name: "Araneo",
        respawn_rule: "24 hrs",
        armor: "TBD",
        level: 75,
        location: "Lower Tomb of Tyriosa 1F",
    },
    BossEntry {
        name: "Undomiel",
        respawn_rule: "24 hrs",
        armor: "TBD",
        level: 80,
        location: "Secret Laboratory",
    },
    BossEntry {
        name: "Saphirus",
        respawn_rule: "Sun 17:00 / Tue 11:30",
        armor: "TBD",
        level: 80,
        location: "Crescent Lake",
    },
    BossEntry {
        name: "Neutro",
        respawn_rule: "Tue 19:00 / Thu 11:30",
        armor: "TBD",
        level: 80,
        location: "Desert of the Screaming",
    },
    BossEntry {
        name: "Lady Dalia",
        respawn_rule: "18 hrs",
        armor: "TBD",
        level: 85,
        location: "Twilight Hill",
    },
    BossEntry {
        name: "Aquleus",
        respawn_rule: "29 hrs",
        armor: "TBD",
        level: 85,
        location: "Lower Tomb of Tyriosa 2F",
    },
    BossEntry {
        name: "Thymele",
        respawn_rule: "Mon 19:00 / Wed 11:30",
        armor: "TBD",
        level: 85,
        location: "Twilight Hill",
    },
    BossEntry {
        name: "Amentis",
        respawn_rule: "29 hrs",
        armor: "TBD",
        level: 88,
        location: "Land of Glory",
    },
    BossEntry {
        name: "Baron",
        respawn_rule: "32 hrs",
        armor: "TBD",
        level: 88,
        location: "Battlefield of Templar",
    },
    BossEntry {
        name: "Milavy",
        respawn_rule: "Sat 15:00",
        armor: "TBD",
        level: 90,
        location: "Lower Tomb of Tyriosa 3F",
    },
    BossEntry {
        name: "Wannitas",
        respawn_rule: "48 hrs",
        armor: "TBD",
        level: 93,
        location: "Plateau of Revolution",
    },
    BossEntry {
        name: "Metus",
        respawn_rule: "48 hrs",
        armor: "TBD",
        level: 93,
        location: "Plateau of Revolution",
    },
    BossEntry {
        name: "Duplican",
        respawn_rule: "48 hrs",
        armor: "TBD",
        level: 93,
        location: "Plateau of Revolution",
    },
    BossEntry {
        name: "Shuliar",
        respawn_rule: "35 hrs",
        armor: "TBD",
        level: 95,
        location: "Ruins of the War",
    },
    BossEntry {
        name: "Ringor",
        respawn_rule: "Sat 17:00",
        armor: "TBD",
        level: 95,
        location: "Battlefield of Templar",
    },
    BossEntry {
        name: "Roderick",
        respawn_rule: "Fri 19:00",
        armor: "TBD",
        level: 95,
        location: "Garbana Underground Waterway 1F",
    },
    BossEntry {
        name: "Gareth",
        respawn_rule: "32 hrs",
        armor: "TBD",
        level: 98,
        location: "Deadman's Land District 1",
    },
    BossEntry {
        name: "Titore",
        respawn_rule: "37 hrs",
        armor: "TBD",
        level: 98,
        location: "Deadman's Land District 2",
    },
    BossEntry {
        name: "Larba",
        respawn_rule: "34 hrs",
        armor: "TBD",
        level: 98,
        location: "Ruins of the War",
    },
    BossEntry {
        name: "Catena",
        respawn_rule: "34 hrs",
        armor: "TBD",
        level: 100,
        location: "Deadman's Land District 3",
    },
    BossEntry {
        name: "Auraq",
        respawn_rule: "Sun 21:00 / Wed 21:00",
        armor: "TBD",
        level: 100,
        location: "Garbana Underground Waterway 2F",
    },
];
