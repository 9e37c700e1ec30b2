//! Whole-hit scenarios through `resolve_hit`

use std::sync::Arc;

use skillrules::permissions::PermissionTable;
use skillrules::skills::{AbilityType, ActivationChance, RandomActivation, ToolType};
use skillrules::{AxesHit, AxesManager, ConfigError, SkillContext, SkillsConfig};

use crate::harness::{iron_mob, mob, wear, AxesTest};

/// Test: with every roll failing only axe mastery applies
#[test]
fn test_all_rolls_fail() {
    let test = AxesTest::always(500, false);
    let mut target = mob(1);

    let hit = test.manager().resolve_hit(&mut target, 10);
    assert_eq!(
        hit,
        AxesHit {
            damage: 14,
            ability_ready: false,
            critical: false,
            impact: false,
            greater_impact: false,
            skull_splitter: false,
        }
    );

    // Critical hit, then greater impact
    let rolls = test.rolls();
    assert_eq!(rolls.len(), 2);
    assert!(matches!(rolls[0].chance, ActivationChance::Scaled { .. }));
    assert!(matches!(rolls[1].chance, ActivationChance::Fixed { .. }));
    assert!(test.aoe.is_empty());
}

/// Test: armored target takes impact instead of greater impact
#[test]
fn test_armored_target() {
    // Critical hit, then one roll per armor piece
    let test = AxesTest::scripted(0, [true, true, true, true, true]);
    let mut target = iron_mob(1);

    let hit = test.manager().resolve_hit(&mut target, 10);
    assert_eq!(hit.damage, 20);
    assert!(hit.critical);
    assert!(hit.impact);
    assert!(!hit.greater_impact);
    assert_eq!(wear(&target), vec![Some(1); 4]);
    assert_eq!(test.rolls().len(), 5);
    assert!(test.outbound.effects().is_empty());
}

/// Test: every ability firing on an unarmored target
#[test]
fn test_everything_fires() {
    let test = AxesTest::always(200, true);
    test.update_profile(|p| {
        p.set_ability_mode(AbilityType::SkullSplitter, true);
        p.set_tool_preparation_mode(ToolType::Axe, true);
    });
    let mut target = mob(1);

    let hit = test.manager().resolve_hit(&mut target, 10);
    // (10 + 4) * 2 + 2
    assert_eq!(hit.damage, 30);
    assert!(hit.ability_ready);
    assert!(hit.critical);
    assert!(!hit.impact);
    assert!(hit.greater_impact);
    assert!(hit.skull_splitter);

    // Splash uses the fully modified damage
    assert_eq!(test.aoe.strikes()[0].damage, 15);
    assert_eq!(
        test.actor_messages(),
        vec!["CRITICAL HIT!", "**STRUCK WITH GREAT FORCE**"]
    );
}

/// Test: a despawned target only gets axe mastery
#[test]
fn test_invalid_target() {
    let test = AxesTest::always(500, true);
    test.update_profile(|p| p.set_ability_mode(AbilityType::SkullSplitter, true));
    let mut target = iron_mob(1);
    target.despawn();

    let hit = test.manager().resolve_hit(&mut target, 10);
    assert_eq!(hit.damage, 14);
    assert!(!hit.critical && !hit.impact && !hit.greater_impact && !hit.skull_splitter);
    assert_eq!(wear(&target), vec![Some(0); 4]);
    assert!(test.rolls().is_empty());
    assert!(test.outbound.is_empty());
    assert!(test.aoe.is_empty());
}

/// Test: without permissions nothing runs
#[test]
fn test_no_permissions() {
    let mut test = AxesTest::always(1000, true);
    let permissions = PermissionTable::new().shared();
    test.context = SkillContext::new(
        test.context.config.clone(),
        test.context.locale.clone(),
        permissions,
        test.profiles.clone(),
        test.context.activation.clone(),
        test.outbound.clone(),
        test.aoe.clone(),
    )
    .unwrap();
    test.update_profile(|p| {
        p.set_ability_mode(AbilityType::SkullSplitter, true);
        p.set_tool_preparation_mode(ToolType::Axe, true);
    });

    let mut target = mob(1);
    let hit = test.manager().resolve_hit(&mut target, 10);
    assert_eq!(hit.damage, 10);
    assert!(!hit.ability_ready);
    assert!(test.rolls().is_empty());
    assert!(test.outbound.is_empty());
    assert!(test.aoe.is_empty());
}

/// Test: a config that fails validation never reaches the rules
#[test]
fn test_invalid_config_refused() {
    let test = AxesTest::always(500, true);
    let build = |config: SkillsConfig| {
        SkillContext::new(
            Arc::new(config),
            test.context.locale.clone(),
            test.permissions.clone(),
            test.profiles.clone(),
            test.context.activation.clone(),
            test.outbound.clone(),
            test.aoe.clone(),
        )
    };

    // Fewer bonus levels than bonus points
    let mut config = SkillsConfig::default();
    config.axes.bonus_damage_max_bonus_level = 3;
    let err = build(config).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "axes.bonus_damage_max_bonus_level",
            ..
        }
    ));

    let mut config = SkillsConfig::default();
    config.axes.impact_increase_level = 0;
    assert!(build(config).is_err());

    let mut config = SkillsConfig::default();
    config.axes.skull_splitter_modifier = 0;
    assert!(build(config).is_err());

    let mut config = SkillsConfig::default();
    config.axes.bonus_damage_max_bonus = u32::MAX;
    config.axes.bonus_damage_max_bonus_level = u32::MAX;
    assert!(build(config).is_err());

    assert!(build(SkillsConfig::default()).is_ok());
}

/// Test: seeded random activation lands near the configured chance
#[test]
fn test_random_activation_rate() {
    let test = AxesTest::with_oracle(
        SkillsConfig::default(),
        0,
        Arc::new(RandomActivation::seeded(1234)),
    );
    let manager = AxesManager::new(&test.actor, &test.context);

    let trials = 10_000;
    let mut procs = 0;
    for _ in 0..trials {
        let mut target = mob(1);
        if manager.greater_impact_check(&mut target, 0) == 2 {
            procs += 1;
        }
    }

    let rate = procs as f64 / trials as f64 * 100.0;
    assert!((rate - 25.0).abs() < 3.0, "greater impact rate {}%", rate);
}

/// Test: critical hits never fire at level 0
#[test]
fn test_random_critical_at_level_zero() {
    let test = AxesTest::with_oracle(
        SkillsConfig::default(),
        0,
        Arc::new(RandomActivation::seeded(99)),
    );
    let target = mob(1);

    for _ in 0..1000 {
        assert_eq!(test.manager().critical_hit_check(&target, 10), 10);
    }
}
