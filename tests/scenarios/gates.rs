//! Gate predicate scenarios

use skillrules::entity::{ArmorSlot, ItemStack, Material};
use skillrules::permissions::Capability;
use skillrules::profile::ProfileStore;
use skillrules::skills::{AbilityType, ToolType};
use skillrules::Creature;

use crate::harness::{iron_mob, mob, AxesTest, TEST_PLATE};

/// Test: default player permissions open the gates that match the target
#[test]
fn test_default_gates() {
    let test = AxesTest::always(100, true);
    let manager = test.manager();

    let bare = mob(1);
    assert!(manager.can_use_axe_mastery());
    assert!(manager.can_critical_hit(&bare));
    assert!(!manager.can_impact(&bare));
    assert!(manager.can_greater_impact(&bare));
    // Skull Splitter is not running
    assert!(!manager.can_use_skull_splitter(&bare));

    let armored = iron_mob(2);
    assert!(manager.can_critical_hit(&armored));
    assert!(manager.can_impact(&armored));
    assert!(!manager.can_greater_impact(&armored));
}

/// Test: impact and greater impact are never eligible together
#[test]
fn test_impact_gates_exclusive() {
    let test = AxesTest::with_config(
        AxesTest::test_plate_config(),
        0,
        skillrules::skills::ScriptedActivation::always(true),
    );
    let manager = test.manager();

    let targets = vec![
        mob(1),
        iron_mob(2),
        mob(3).with_armor(ArmorSlot::Helmet, ItemStack::new(Material::Pumpkin)),
        mob(4).with_armor(ArmorSlot::Helmet, ItemStack::new(Material::Skull)),
        mob(5).with_armor(ArmorSlot::Boots, ItemStack::new(Material::GoldBoots)),
        mob(6).with_armor(ArmorSlot::Chestplate, ItemStack::custom(TEST_PLATE)),
        mob(7).with_armor(ArmorSlot::Chestplate, ItemStack::custom("unregistered")),
    ];

    for target in &targets {
        assert!(
            !(manager.can_impact(target) && manager.can_greater_impact(target)),
            "both impact gates open for {:?}",
            target
        );
    }

    assert!(manager.can_greater_impact(&targets[2]), "pumpkin is not armor");
    assert!(manager.can_impact(&targets[5]), "registered custom armor");
    assert!(manager.can_greater_impact(&targets[6]), "unregistered custom item");
}

/// Test: a despawned target closes every target gate, whatever the permissions
#[test]
fn test_invalid_target_closes_gates() {
    let test = AxesTest::always(1000, true);
    test.permissions.grant_all(test.actor.id());
    test.update_profile(|p| p.set_ability_mode(AbilityType::SkullSplitter, true));
    let manager = test.manager();

    let mut targets: Vec<Creature> = vec![mob(1), iron_mob(2)];
    for target in targets.iter_mut() {
        assert!(manager.can_critical_hit(target));
        assert!(manager.can_use_skull_splitter(target));

        target.despawn();
        assert!(!manager.can_critical_hit(target));
        assert!(!manager.can_impact(target));
        assert!(!manager.can_greater_impact(target));
        assert!(!manager.can_use_skull_splitter(target));
    }
}

/// Test: revoking a capability closes its gate only
#[test]
fn test_revoked_capabilities() {
    let test = AxesTest::always(100, true);
    let actor = test.actor_id();
    let bare = mob(1);
    let armored = iron_mob(2);

    test.permissions.revoke(&actor, Capability::BonusDamage);
    assert!(!test.manager().can_use_axe_mastery());
    assert!(test.manager().can_critical_hit(&bare));

    test.permissions.revoke(&actor, Capability::CriticalStrikes);
    assert!(!test.manager().can_critical_hit(&bare));

    test.permissions.revoke(&actor, Capability::ArmorImpact);
    assert!(!test.manager().can_impact(&armored));
    assert!(!test.manager().can_greater_impact(&armored));
    assert!(test.manager().can_greater_impact(&bare));

    test.permissions.revoke(&actor, Capability::GreaterImpact);
    assert!(!test.manager().can_greater_impact(&bare));
}

/// Test: Skull Splitter needs the ability running and the permission
#[test]
fn test_skull_splitter_gate() {
    let test = AxesTest::always(100, true);
    let target = mob(1);

    assert!(!test.manager().can_use_skull_splitter(&target));

    test.update_profile(|p| p.set_ability_mode(AbilityType::SkullSplitter, true));
    assert!(test.manager().can_use_skull_splitter(&target));

    test.permissions
        .revoke(test.actor.id(), Capability::SkullSplitter);
    assert!(!test.manager().can_use_skull_splitter(&target));
}

/// Test: a readied axe can start the ability
#[test]
fn test_can_activate_ability() {
    let test = AxesTest::always(100, true);
    assert!(!test.manager().can_activate_ability());

    test.update_profile(|p| p.set_tool_preparation_mode(ToolType::Sword, true));
    assert!(!test.manager().can_activate_ability());

    test.update_profile(|p| p.set_tool_preparation_mode(ToolType::Axe, true));
    assert!(test.profiles.tool_prepared(test.actor.id(), ToolType::Axe));
    assert!(test.manager().can_activate_ability());

    test.permissions
        .revoke(test.actor.id(), Capability::SkullSplitter);
    assert!(!test.manager().can_activate_ability());
}

/// Test: evaluating gates never rolls, messages or splashes
#[test]
fn test_gates_have_no_side_effects() {
    let test = AxesTest::always(500, true);
    test.update_profile(|p| {
        p.set_ability_mode(AbilityType::SkullSplitter, true);
        p.set_tool_preparation_mode(ToolType::Axe, true);
    });
    let manager = test.manager();

    for target in [mob(1), iron_mob(2)] {
        let before = target.clone();
        manager.can_use_axe_mastery();
        manager.can_critical_hit(&target);
        manager.can_impact(&target);
        manager.can_greater_impact(&target);
        manager.can_use_skull_splitter(&target);
        manager.can_activate_ability();
        assert_eq!(target, before);
    }

    assert!(test.rolls().is_empty());
    assert!(test.outbound.is_empty());
    assert!(test.aoe.is_empty());
}
