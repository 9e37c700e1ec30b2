//! Armor impact scenarios

use skillrules::entity::{ArmorSlot, ItemStack, Material};
use skillrules::skills::{axes::impact_durability_increment, ActivationChance, ScriptedActivation};
use skillrules::SkillsConfig;

use crate::harness::{iron_mob, mob, wear, AxesTest, TEST_PLATE};

/// Test: durability 0, max 100, no unbreaking, 5 damage, 50% cap → 5
#[test]
fn test_impact_example() {
    // 1 + 200 / 50 = 5 durability damage
    let test = AxesTest::with_config(AxesTest::test_plate_config(), 200, ScriptedActivation::always(true));
    let mut target = mob(1).with_armor(ArmorSlot::Chestplate, ItemStack::custom(TEST_PLATE));

    test.manager().impact_check(&mut target);
    assert_eq!(target.armor(ArmorSlot::Chestplate).unwrap().durability, 5);
}

/// Test: each armor piece rolls on its own
#[test]
fn test_impact_rolls_per_piece() {
    let test = AxesTest::scripted(0, [true, false, true, false]);
    let mut target = iron_mob(1);

    test.manager().impact_check(&mut target);

    // Boots and chestplate passed their rolls; level 0 deals 1
    assert_eq!(wear(&target), vec![Some(1), Some(0), Some(1), Some(0)]);

    let rolls = test.rolls();
    assert_eq!(rolls.len(), 4);
    assert!(rolls
        .iter()
        .all(|r| r.chance == ActivationChance::Fixed { chance: 25.0 }));
}

/// Test: items that are not armor are skipped without rolling
#[test]
fn test_impact_skips_non_armor() {
    let test = AxesTest::always(0, true);
    let mut target = mob(1)
        .with_armor(ArmorSlot::Helmet, ItemStack::new(Material::Pumpkin))
        .with_armor(ArmorSlot::Boots, ItemStack::new(Material::IronBoots))
        .with_armor(ArmorSlot::Chestplate, ItemStack::custom("unregistered"));

    test.manager().impact_check(&mut target);

    assert_eq!(wear(&target), vec![Some(1), None, Some(0), Some(0)]);
    assert_eq!(test.rolls().len(), 1);
}

/// Test: unbreaking divides the durability damage
#[test]
fn test_impact_unbreaking() {
    // 1 + 550 / 50 = 12
    let test = AxesTest::always(550, true);
    let mut target = mob(1)
        .with_armor(
            ArmorSlot::Chestplate,
            ItemStack::new(Material::IronChestplate)
                .with_durability(10)
                .with_unbreaking(3),
        )
        .with_armor(
            ArmorSlot::Leggings,
            ItemStack::new(Material::IronLeggings).with_unbreaking(1),
        )
        .with_armor(ArmorSlot::Boots, ItemStack::new(Material::IronBoots));

    test.manager().impact_check(&mut target);

    assert_eq!(wear(&target), vec![Some(12), Some(6), Some(13), None]);
}

/// Test: one impact never takes more than the configured fraction
#[test]
fn test_impact_capped_by_max_durability() {
    // 1 + 5000 / 50 = 101, leather helmet cap 55 * 0.2 = 11
    let test = AxesTest::always(5000, true);
    let mut target = mob(1).with_armor(
        ArmorSlot::Helmet,
        ItemStack::new(Material::LeatherHelmet).with_durability(20),
    );

    test.manager().impact_check(&mut target);
    assert_eq!(target.armor(ArmorSlot::Helmet).unwrap().durability, 31);
}

/// Test: wear saturates instead of wrapping
#[test]
fn test_impact_saturates() {
    let mut config = SkillsConfig::default();
    config.mods.armor.push(skillrules::config::CustomArmorEntry {
        id: "colossus_plate".to_string(),
        durability: 60000,
    });
    let test = AxesTest::with_config(config, 1_000_000, ScriptedActivation::always(true));
    let mut target = mob(1).with_armor(
        ArmorSlot::Chestplate,
        ItemStack::custom("colossus_plate").with_durability(65530),
    );

    test.manager().impact_check(&mut target);
    assert_eq!(target.armor(ArmorSlot::Chestplate).unwrap().durability, u16::MAX);
}

/// Test: the increment stays under the cap and shrinks with unbreaking
#[test]
fn test_impact_increment_bounds() {
    let config = SkillsConfig::default().axes;
    for material in [
        Material::LeatherBoots,
        Material::GoldHelmet,
        Material::IronChestplate,
        Material::DiamondLeggings,
    ] {
        let cap = material.max_durability() as f64 * config.impact_max_durability_modifier;
        for level in (0..3000).step_by(50) {
            let damage = 1 + level / config.impact_increase_level;
            let mut last = f64::MAX;
            for unbreaking in 0..5 {
                let increment = impact_durability_increment(
                    damage,
                    unbreaking,
                    material.max_durability(),
                    config.impact_max_durability_modifier,
                );
                assert!(increment <= cap, "{:?} level {} over cap", material, level);
                assert!(increment <= last);
                last = increment;
            }
        }
    }
}

/// Test: failed rolls leave armor alone
#[test]
fn test_impact_all_rolls_fail() {
    let test = AxesTest::always(1000, false);
    let mut target = iron_mob(1);

    test.manager().impact_check(&mut target);
    assert_eq!(wear(&target), vec![Some(0); 4]);
    assert_eq!(test.rolls().len(), 4);
}
