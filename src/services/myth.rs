//! Myth service: random legends for clicked stars.
//!
//! DESIGN
//! ======
//! A myth is assembled from fixed word pools held in a [`MythBook`]: a star
//! name (`<first> <second>`), a title (`<name>, <epithet>`), and a
//! four-sentence story. The caller supplies the random source, so handlers use
//! the thread RNG while tests pass a seeded `StdRng` and get stable text.
//!
//! ERROR HANDLING
//! ==============
//! The only failure is drawing from an empty pool, reported as
//! [`MythError::EmptyPool`] and surfaced to clients as a 500.

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

const FIRST_NAMES: &[&str] = &[
    "Althea", "Callias", "Eleni", "Thalos", "Nikos", "Ione", "Myrrine", "Phaedra", "Orpheon", "Altheon", "Selas",
    "Timon", "Lyris", "Ephyra", "Koros", "Melina", "Lykos",
];

const SECOND_NAMES: &[&str] = &[
    "of the North Wind",
    "of the Sun",
    "of the Moon",
    "of the Sea",
    "of Thunder",
    "of Shadows",
    "of Dawn",
    "of the Forge",
    "of the Underworld",
    "of the Cross",
    "of Fire",
    "of the Serpent",
    "of Twilight",
    "of the Swan",
];

const EPITHETS: &[&str] =
    &["the Wanderer", "Storm-Bringer", "Shadow-Keeper", "Seafarer", "Hearth-Tender", "Sky-Weaver", "River-Guardian"];

const FIGURES: &[&str] = &["a hunter", "a queen", "a trickster", "a ferryman", "a healer", "a poet", "a builder"];

const REALMS: &[&str] = &[
    "the northern pines",
    "the endless sea",
    "the ancient mountains",
    "the whispering dunes",
    "the hidden valleys",
    "the celestial plains",
    "the forgotten isles",
];

const OMENS: &[&str] = &["comets", "ravens", "tides", "shadows", "winds", "fires", "echoes"];

const TRIALS: &[&str] = &[
    "a long winter",
    "a great flood",
    "a fierce battle",
    "a perilous journey",
    "a cunning riddle",
    "a vanished city",
    "a sleepless moon",
];

const GIFTS: &[&str] =
    &["a bronze compass", "a silver harp", "a golden crown", "a map of stars", "a woven tapestry", "a carved staff"];

const PATH_SENTENCE: &str = "They traced a path by three faint stars and swore to return before the first thaw.";
const CUSTOM_SENTENCE: &str =
    "Sailors still tap the mast twice when this star rises, and bakers keep the oven door ajar until its light fades.";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MythError {
    #[error("word pool {0:?} is empty")]
    EmptyPool(&'static str),
}

/// Response body for `GET /api/myth`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Myth {
    /// The requested star id, echoed back as text.
    pub id: String,
    pub title: String,
    pub story: String,
}

/// Word pools a myth is drawn from.
#[derive(Debug, Clone)]
pub struct MythBook {
    pub first_names: Vec<&'static str>,
    pub second_names: Vec<&'static str>,
    pub epithets: Vec<&'static str>,
    pub figures: Vec<&'static str>,
    pub realms: Vec<&'static str>,
    pub omens: Vec<&'static str>,
    pub trials: Vec<&'static str>,
    pub gifts: Vec<&'static str>,
}

impl Default for MythBook {
    fn default() -> Self {
        Self {
            first_names: FIRST_NAMES.to_vec(),
            second_names: SECOND_NAMES.to_vec(),
            epithets: EPITHETS.to_vec(),
            figures: FIGURES.to_vec(),
            realms: REALMS.to_vec(),
            omens: OMENS.to_vec(),
            trials: TRIALS.to_vec(),
            gifts: GIFTS.to_vec(),
        }
    }
}

impl MythBook {
    /// Tell a myth for `star_id`.
    ///
    /// # Errors
    ///
    /// Returns [`MythError::EmptyPool`] if any pool has no entries.
    pub fn tell<R: Rng + ?Sized>(&self, star_id: &str, rng: &mut R) -> Result<Myth, MythError> {
        let name = format!(
            "{} {}",
            pick(&self.first_names, "first_names", rng)?,
            pick(&self.second_names, "second_names", rng)?
        );
        let title = format!("{name}, {}", pick(&self.epithets, "epithets", rng)?);

        let origin = format!(
            "{name} was {} of {}.",
            pick(&self.figures, "figures", rng)?,
            pick(&self.realms, "realms", rng)?
        );
        let quest = format!(
            "When {} foretold {}, they set out with {}.",
            pick(&self.omens, "omens", rng)?,
            pick(&self.trials, "trials", rng)?,
            pick(&self.gifts, "gifts", rng)?
        );
        let story = [origin.as_str(), quest.as_str(), PATH_SENTENCE, CUSTOM_SENTENCE].join(" ");

        Ok(Myth { id: star_id.to_string(), title, story })
    }
}

fn pick<'a, R: Rng + ?Sized>(pool: &'a [&'static str], name: &'static str, rng: &mut R) -> Result<&'a str, MythError> {
    pool.choose(rng).copied().ok_or(MythError::EmptyPool(name))
}

#[cfg(test)]
#[path = "myth_test.rs"]
mod tests;
