//! Decision types produced by the AI.

use std::fmt;

use game_core::{AffectedArea, Position, SkillId, UnitId};

/// What a unit does on its turn.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ActionType {
    Move,
    MeleeAttack,
    RangedAttack,
    UseSkill,
    /// Supportive skill aimed at an ally.
    Support,
    Wait,
}

/// Output of the action phase: the action kind plus the skill, when one
/// was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionChoice {
    pub kind: ActionType,
    pub skill: Option<SkillId>,
}

impl ActionChoice {
    pub const fn new(kind: ActionType) -> Self {
        Self { kind, skill: None }
    }

    pub const fn wait() -> Self {
        Self::new(ActionType::Wait)
    }

    pub const fn movement() -> Self {
        Self::new(ActionType::Move)
    }

    pub const fn melee() -> Self {
        Self::new(ActionType::MeleeAttack)
    }

    pub const fn ranged() -> Self {
        Self::new(ActionType::RangedAttack)
    }

    pub const fn use_skill(skill: SkillId) -> Self {
        Self {
            kind: ActionType::UseSkill,
            skill: Some(skill),
        }
    }

    pub const fn support(skill: SkillId) -> Self {
        Self {
            kind: ActionType::Support,
            skill: Some(skill),
        }
    }
}

/// Everything the turn system needs to execute a unit's turn.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AiDecision {
    /// The acting unit.
    pub unit: UnitId,
    pub target: Option<UnitId>,
    pub action: ActionType,
    /// Where to move; set for [`ActionType::Move`] only.
    pub destination: Option<Position>,
    pub skill: Option<SkillId>,
    /// Cells an area skill will hit, identical to what resolution computes.
    pub affected: AffectedArea,
    /// Steps to the destination, start excluded.
    pub path: Option<Vec<Position>>,
}

impl AiDecision {
    pub fn wait(unit: UnitId) -> Self {
        Self {
            unit,
            target: None,
            action: ActionType::Wait,
            destination: None,
            skill: None,
            affected: AffectedArea::new(),
            path: None,
        }
    }

    pub fn new(unit: UnitId, target: UnitId, action: ActionType) -> Self {
        Self {
            target: Some(target),
            action,
            ..Self::wait(unit)
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: Option<UnitId>) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_destination(mut self, destination: Position, path: Option<Vec<Position>>) -> Self {
        self.destination = Some(destination);
        self.path = path;
        self
    }

    #[must_use]
    pub fn with_skill(mut self, skill: SkillId, affected: AffectedArea) -> Self {
        self.skill = Some(skill);
        self.affected = affected;
        self
    }

    pub fn is_wait(&self) -> bool {
        self.action == ActionType::Wait
    }
}

impl fmt::Display for AiDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.unit, self.action)?;
        if let Some(skill) = self.skill {
            write!(f, " {}", skill)?;
        }
        if let Some(target) = self.target {
            write!(f, " target {}", target)?;
        }
        if let Some(destination) = self.destination {
            write!(f, " to {}", destination)?;
        }
        if !self.affected.is_empty() {
            write!(f, " hitting {} cells", self.affected.len())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_display() {
        let decision = AiDecision::new(UnitId(4), UnitId(1), ActionType::Move)
            .with_destination(Position::new(2, 3), Some(vec![Position::new(2, 3)]));
        assert_eq!(decision.to_string(), "#4 move target #1 to (2, 3)");
        assert_eq!(AiDecision::wait(UnitId(2)).to_string(), "#2 wait");
    }

    #[test]
    fn action_type_names() {
        assert_eq!(ActionType::MeleeAttack.as_ref(), "melee_attack");
        assert_eq!("use_skill".parse::<ActionType>().unwrap(), ActionType::UseSkill);
    }
}
