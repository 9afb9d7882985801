//! Action selection against a chosen target.
//!
//! The common action table every variant falls back on:
//!
//! | Situation                                    | Action          |
//! |----------------------------------------------|-----------------|
//! | no target                                    | `Wait`          |
//! | adjacent, roll < `skill_chance`, skill fits  | `UseSkill`      |
//! | adjacent                                     | `MeleeAttack`   |
//! | not adjacent, suitable skill reaches         | `UseSkill`      |
//! | not adjacent, basic attack reaches           | `RangedAttack`  |
//! | otherwise                                    | `Move`          |

use game_content::CoreWeights;
use game_core::{Skill, Unit, UnitClass, chebyshev};

use crate::types::ActionChoice;

/// Whether a unit of `class` would reasonably use `skill`.
///
/// Melee-oriented classes stick to melee skills, casters to ranged or
/// hazard-creating ones, everybody else uses anything. Content tags take
/// precedence over the skill's range.
pub fn is_suitable(class: UnitClass, skill: &Skill) -> bool {
    if class.is_melee_oriented() {
        skill.is_melee()
    } else if class.is_caster_oriented() {
        skill.is_ranged() || skill.leaves_hazard()
    } else {
        true
    }
}

/// First harmful, suitable skill (in loadout order) that reaches `target`.
pub fn offensive_skill<'s>(
    attacker: &Unit,
    target: &Unit,
    skills: &'s [Skill],
) -> Option<&'s Skill> {
    skills.iter().find(|skill| {
        !skill.is_supportive()
            && is_suitable(attacker.class, skill)
            && skill.reaches(attacker.position, target.position)
    })
}

/// First supportive skill (in loadout order) that reaches `target`.
pub fn supportive_skill<'s>(
    caster: &Unit,
    target: &Unit,
    skills: &'s [Skill],
) -> Option<&'s Skill> {
    skills
        .iter()
        .find(|skill| skill.is_supportive() && skill.reaches(caster.position, target.position))
}

/// True when the basic attack hits `target` from where `attacker` stands.
pub fn basic_ranged_reaches(attacker: &Unit, target: &Unit) -> bool {
    attacker.has_ranged_attack()
        && chebyshev(attacker.position, target.position) <= attacker.attack_range
}

/// The common action table against an enemy.
///
/// `roll` is a percentile in `0..100`; the skill is preferred over a melee
/// attack when `roll < skill_chance`.
pub fn offensive_action(
    core: &CoreWeights,
    attacker: &Unit,
    target: Option<&Unit>,
    skills: &[Skill],
    roll: u32,
) -> ActionChoice {
    let Some(target) = target else {
        return ActionChoice::wait();
    };

    let skill = offensive_skill(attacker, target, skills);

    if chebyshev(attacker.position, target.position) <= 1 {
        return match skill {
            Some(skill) if roll < core.skill_chance => ActionChoice::use_skill(skill.id),
            _ => ActionChoice::melee(),
        };
    }

    if let Some(skill) = skill {
        return ActionChoice::use_skill(skill.id);
    }

    if basic_ranged_reaches(attacker, target) {
        return ActionChoice::ranged();
    }

    ActionChoice::movement()
}
