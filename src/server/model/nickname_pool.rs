//! Per-guild list of candidate nicknames.

use rand::seq::IndexedRandom;

use crate::{model::nickname::NicknamePoolDto, server::error::nickname::NicknameError};

/// Discord rejects nicknames longer than this many characters.
pub const MAX_NICKNAME_LENGTH: usize = 32;

/// Built-in pool every guild starts with and returns to on reset.
pub const DEFAULT_NICKNAMES: &[&str] = &[
    // Italian classics
    "Gino Panino",
    "Mario Spaghetti",
    "Giuseppe Focaccia",
    "Peppino lo Scemo",
    "Il Magnifico",
    "Don Caciotta",
    "Signor Broccolo",
    "Zio Mortazza",
    "Nonna Furiosa",
    // Internet nonsense
    "Captain Spaghetti",
    "Lord Farquaad's Cousin",
    "Definitely Not A Bot",
    "Someone's Mom",
    "Professional Overthinker",
    "Certified Chaos Agent",
    "A Sentient Potato",
    "FBI Agent #47",
    "Your WiFi Password",
    "404 Name Not Found",
    // Plain names
    "Kevin",
    "Greg",
    "Brenda",
    "Keith",
    "Nigel",
    "Gertrude",
    "Cletus",
    // Identity crisis
    "Who Am I",
    "Not Marco",
    "Wrong Person",
    "Identity Theft Victim",
    "Your Other Account",
    "The Impostor",
    "Witness Protection",
    // Food
    "Human Lasagna",
    "Angry Mozzarella",
    "Escaped Raviolo",
    "Carbonara Incarnata",
    "Panino Imbottito",
    // Titles
    "CEO of Nothing",
    "Professional Screamer",
    "Local Cryptid",
    "That One Guy",
    "Your Mom's Favorite",
    "The Quiet One (lol)",
    "Main Character",
    "Background NPC",
    // Mixed
    "Ciao Bella Problems",
    "Molto Confused",
    "Mamma Mia Energy",
    "Pizza Time Specialist",
    "Espresso Depresso",
];

/// Ordered, duplicate-free list of nicknames for one guild.
///
/// Duplicate detection is case-sensitive: "Kevin" and "kevin" are distinct entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NicknamePool {
    pub guild_id: u64,
    pub entries: Vec<String>,
}

impl NicknamePool {
    /// Pool seeded with [`DEFAULT_NICKNAMES`].
    pub fn with_defaults(guild_id: u64) -> Self {
        Self {
            guild_id,
            entries: default_entries(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, nickname: &str) -> bool {
        self.entries.iter().any(|entry| entry == nickname)
    }

    /// Appends a nickname after trimming and validating it.
    ///
    /// # Returns
    /// - `Ok(String)` - The entry as stored (trimmed)
    /// - `Err(NicknameError::Empty | TooLong | DuplicateEntry)` - Entry rejected, pool unchanged
    pub fn add(&mut self, nickname: &str) -> Result<String, NicknameError> {
        let nickname = normalize(nickname)?;

        if self.contains(&nickname) {
            return Err(NicknameError::DuplicateEntry(nickname));
        }

        self.entries.push(nickname.clone());

        Ok(nickname)
    }

    /// Removes an entry; may leave the pool empty.
    ///
    /// # Returns
    /// - `Ok(())` - Entry removed
    /// - `Err(NicknameError::NotFound)` - No entry equal to the trimmed input
    pub fn remove(&mut self, nickname: &str) -> Result<(), NicknameError> {
        let nickname = nickname.trim();

        let Some(index) = self.entries.iter().position(|entry| entry == nickname) else {
            return Err(NicknameError::NotFound(nickname.to_string()));
        };

        self.entries.remove(index);

        Ok(())
    }

    /// Replaces every entry with the defaults.
    pub fn reset(&mut self) {
        self.entries = default_entries();
    }

    /// Picks an entry uniformly at random, `None` when the pool is empty.
    pub fn choose(&self) -> Option<&str> {
        self.entries
            .choose(&mut rand::rng())
            .map(|entry| entry.as_str())
    }

    pub fn into_dto(self) -> NicknamePoolDto {
        NicknamePoolDto {
            guild_id: self.guild_id,
            nicknames: self.entries,
        }
    }
}

fn default_entries() -> Vec<String> {
    DEFAULT_NICKNAMES.iter().map(|name| name.to_string()).collect()
}

/// Trims a candidate nickname and checks Discord's constraints.
pub fn normalize(nickname: &str) -> Result<String, NicknameError> {
    let nickname = nickname.trim();

    if nickname.is_empty() {
        return Err(NicknameError::Empty);
    }

    if nickname.chars().count() > MAX_NICKNAME_LENGTH {
        return Err(NicknameError::TooLong(nickname.to_string()));
    }

    Ok(nickname.to_string())
}
