//! Player entity and related types

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::PlayerValidationError;
use crate::domain::validation::require_text;
use crate::domain::team::TeamId;

/// Player identifier - positive integer assigned by the ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// In-game position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Carry,
    Support,
}

impl Role {
    pub const ALL: [Role; 5] = [Self::Top, Self::Jungle, Self::Mid, Self::Carry, Self::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Jungle => "Jungle",
            Self::Mid => "Mid",
            Self::Carry => "Carry",
            Self::Support => "Support",
        }
    }
}

impl FromStr for Role {
    type Err = PlayerValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::ALL, s, Self::as_str)
            .ok_or_else(|| PlayerValidationError::InvalidRole(s.trim().to_string()))
    }
}

/// Competitive rank, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Diamond,
    Master,
    Grandmaster,
    Challenger,
}

impl Rank {
    pub const ALL: [Rank; 9] = [
        Self::Iron,
        Self::Bronze,
        Self::Silver,
        Self::Gold,
        Self::Platinum,
        Self::Diamond,
        Self::Master,
        Self::Grandmaster,
        Self::Challenger,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Iron => "Iron",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
            Self::Diamond => "Diamond",
            Self::Master => "Master",
            Self::Grandmaster => "Grandmaster",
            Self::Challenger => "Challenger",
        }
    }
}

impl FromStr for Rank {
    type Err = PlayerValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::ALL, s, Self::as_str)
            .ok_or_else(|| PlayerValidationError::InvalidRank(s.trim().to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
    Undisclosed,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Self::Male, Self::Female, Self::Other, Self::Undisclosed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
            Self::Undisclosed => "Undisclosed",
        }
    }
}

impl FromStr for Gender {
    type Err = PlayerValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(&Self::ALL, s, Self::as_str)
            .ok_or_else(|| PlayerValidationError::InvalidGender(s.trim().to_string()))
    }
}

macro_rules! display_as_str {
    ($($ty:ty),*) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_str!(Role, Rank, Gender);

fn lookup<T: Copy>(all: &[T], raw: &str, name: fn(&T) -> &'static str) -> Option<T> {
    let raw = raw.trim();
    all.iter()
        .find(|candidate| name(candidate).eq_ignore_ascii_case(raw))
        .copied()
}

/// Validated player fields awaiting an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDraft {
    name: String,
    nickname: String,
    role: Role,
    rank: Rank,
    gender: Gender,
    team_id: TeamId,
}

impl PlayerDraft {
    /// Validate raw form values for a player of `team_id`
    pub fn new(
        name: &str,
        nickname: &str,
        role: &str,
        rank: &str,
        gender: &str,
        team_id: TeamId,
    ) -> Result<Self, PlayerValidationError> {
        Ok(Self {
            name: require_text(name, PlayerValidationError::EmptyName)?,
            nickname: require_text(nickname, PlayerValidationError::EmptyNickname)?,
            role: role.parse()?,
            rank: rank.parse()?,
            gender: gender.parse()?,
            team_id,
        })
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Attach an allocated id, producing the stored entity
    pub fn into_player(self, id: PlayerId) -> Player {
        Player {
            id,
            name: self.name,
            nickname: self.nickname,
            role: self.role,
            rank: self.rank,
            gender: self.gender,
            team_id: self.team_id,
            created_at: Utc::now(),
        }
    }
}

/// Player entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    /// In-game nickname
    nickname: String,
    role: Role,
    rank: Rank,
    gender: Gender,
    /// Owning team (non-owning reference)
    team_id: TeamId,
    created_at: DateTime<Utc>,
}

impl Player {
    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
