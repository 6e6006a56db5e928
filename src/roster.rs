//! Named rosters: the bridge between people and member ids.
//!
//! A [`Roster`] assigns ids to names in listing order and remembers which
//! names form a family. The engine only ever sees the ids.
//!
//! ## File format
//!
//! ```json
//! { "families": [["Nick", "Trevor"], ["Amy"], ["Sam", "Nancy"]] }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::types::{Assignment, FamilyUnit, MemberId};

/// Names used when no roster file is given
pub const DEFAULT_NAMES: [&str; 23] = [
    "Nick", "Trevor", "Amy", "Sam", "Nancy", "Matsuo-san", "Ingo", "Renato", "Judith", "Neal",
    "Teymour", "Ryan", "Selim", "Robert", "Claudia", "Kaj-Erik", "Hesham", "Michael Sr.",
    "Michael Jr.", "Allison", "Brad", "Hitesh", "Khaled",
];

/// Errors raised while building a roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to read roster {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed roster: {0}")]
    Json(#[from] serde_json::Error),

    #[error("roster has no members")]
    Empty,

    #[error("family {family} contains a blank name")]
    BlankName { family: usize },

    #[error("name `{0}` appears more than once")]
    DuplicateName(String),

    #[error("requested {requested} members but only {available} default names exist")]
    TooManyMembers { requested: usize, available: usize },
}

#[derive(Debug, Deserialize)]
struct RosterFile {
    families: Vec<Vec<String>>,
}

/// Participants grouped into families
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    names: Vec<String>,
    units: Vec<FamilyUnit>,
}

impl Roster {
    /// Build a roster from named families.
    ///
    /// Member ids are assigned in listing order, starting at 0. Empty
    /// families are kept so the engine can report them.
    ///
    /// # Example
    ///
    /// ```
    /// use family_gift_exchange::roster::Roster;
    ///
    /// let roster = Roster::from_families(vec![
    ///     vec!["Ann".into(), "Bob".into()],
    ///     vec!["Cat".into()],
    /// ]).unwrap();
    ///
    /// assert_eq!(roster.family_units(), &[vec![0, 1], vec![2]]);
    /// assert_eq!(roster.name_of(2), Some("Cat"));
    /// ```
    pub fn from_families(families: Vec<Vec<String>>) -> Result<Self, RosterError> {
        let mut names = Vec::new();
        let mut units = Vec::with_capacity(families.len());
        let mut seen = HashSet::new();

        for (family_idx, family) in families.into_iter().enumerate() {
            let mut unit = Vec::with_capacity(family.len());
            for name in family {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(RosterError::BlankName { family: family_idx });
                }
                if !seen.insert(name.clone()) {
                    return Err(RosterError::DuplicateName(name));
                }
                unit.push(names.len() as MemberId);
                names.push(name);
            }
            units.push(unit);
        }

        if names.is_empty() {
            return Err(RosterError::Empty);
        }
        Ok(Self { names, units })
    }

    /// Every name in a family of its own
    pub fn singletons<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_families(names.into_iter().map(|n| vec![n.into()]).collect())
    }

    /// The first `count` default names (all of them for `None`), each in a
    /// family of its own
    pub fn default_names(count: Option<usize>) -> Result<Self, RosterError> {
        let count = count.unwrap_or(DEFAULT_NAMES.len());
        if count > DEFAULT_NAMES.len() {
            return Err(RosterError::TooManyMembers {
                requested: count,
                available: DEFAULT_NAMES.len(),
            });
        }
        Self::singletons(DEFAULT_NAMES[..count].iter().copied())
    }

    /// Parse a JSON roster
    pub fn from_json_str(json: &str) -> Result<Self, RosterError> {
        let file: RosterFile = serde_json::from_str(json)?;
        Self::from_families(file.families)
    }

    /// Read and parse a JSON roster file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RosterError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Family units in member ids, ready for the engine
    pub fn family_units(&self) -> &[FamilyUnit] {
        &self.units
    }

    /// Name behind a member id
    pub fn name_of(&self, id: MemberId) -> Option<&str> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.names.get(idx))
            .map(String::as_str)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the roster has no members
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// One `"<giver> gifts to <receiver>"` line per pair, in giver order.
    ///
    /// Ids without a name are shown as `#<id>`.
    pub fn render(&self, assignment: &Assignment) -> Vec<String> {
        assignment
            .iter()
            .map(|(giver, receiver)| {
                format!("{} gifts to {}", self.display_name(giver), self.display_name(receiver))
            })
            .collect()
    }

    fn display_name(&self, id: MemberId) -> String {
        self.name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{id}"))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
