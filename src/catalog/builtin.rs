//! The built-in catalog of STEM figures.
//!
//! Attributes used:
//!
//! - `gender`: "female" | "male"
//! - `alive`, `nobel_prize`, `italian`, `computing`, `space`: flags
//! - `continent`: "europe" | "north-america" | "asia"
//! - `birth_year`: integer
//!
//! Flags are only set where true or where the distinction matters;
//! a missing flag answers "no" to attribute questions.

use super::character::{Character, Field};
use super::error::CatalogResult;
use super::predicate::Predicate;
use super::question::Question;
use super::registry::Catalog;

/// Shorthand for a character with the attributes every entry carries.
fn figure(
    id: &str,
    name: &str,
    field: Field,
    gender: &str,
    alive: bool,
    continent: &str,
    birth_year: i64,
) -> Character {
    Character::new(id, name, field)
        .with_image(format!("images/{id}.jpg"))
        .with_attr("gender", gender)
        .with_attr("alive", alive)
        .with_attr("continent", continent)
        .with_attr("birth_year", birth_year)
}

fn born_between(c: &Character, from: i64, until: i64) -> bool {
    c.get_int("birth_year")
        .is_some_and(|year| (from..until).contains(&year))
}

/// Characters in dataset order.
pub fn characters() -> Vec<Character> {
    vec![
        figure("marie-curie", "Marie Curie", Field::Science, "female", false, "europe", 1867)
            .with_description("Physicist and chemist, pioneer of radioactivity research")
            .with_attr("nobel_prize", true),
        figure("rita-levi-montalcini", "Rita Levi-Montalcini", Field::Science, "female", false, "europe", 1909)
            .with_description("Neurobiologist who discovered nerve growth factor")
            .with_attr("nobel_prize", true)
            .with_attr("italian", true),
        figure("albert-einstein", "Albert Einstein", Field::Science, "male", false, "europe", 1879)
            .with_description("Theoretical physicist, author of the theory of relativity")
            .with_attr("nobel_prize", true),
        figure("galileo-galilei", "Galileo Galilei", Field::Science, "male", false, "europe", 1564)
            .with_description("Astronomer and father of the scientific method")
            .with_attr("italian", true)
            .with_attr("space", true),
        figure("fabiola-gianotti", "Fabiola Gianotti", Field::Science, "female", true, "europe", 1960)
            .with_description("Particle physicist and first woman to lead CERN")
            .with_attr("italian", true),
        figure("ada-lovelace", "Ada Lovelace", Field::Mathematics, "female", false, "europe", 1815)
            .with_description("Wrote the first published algorithm for a machine")
            .with_attr("computing", true),
        figure("emmy-noether", "Emmy Noether", Field::Mathematics, "female", false, "europe", 1882)
            .with_description("Algebraist who linked symmetry and conservation laws"),
        figure("katherine-johnson", "Katherine Johnson", Field::Mathematics, "female", false, "north-america", 1918)
            .with_description("NASA mathematician who computed orbital trajectories")
            .with_attr("space", true)
            .with_attr("computing", true),
        figure("maryam-mirzakhani", "Maryam Mirzakhani", Field::Mathematics, "female", false, "asia", 1977)
            .with_description("First woman to win the Fields Medal"),
        figure("srinivasa-ramanujan", "Srinivasa Ramanujan", Field::Mathematics, "male", false, "asia", 1887)
            .with_description("Self-taught genius of number theory"),
        figure("alan-turing", "Alan Turing", Field::Technology, "male", false, "europe", 1912)
            .with_description("Father of theoretical computer science")
            .with_attr("computing", true),
        figure("grace-hopper", "Grace Hopper", Field::Technology, "female", false, "north-america", 1906)
            .with_description("Computer pioneer who built the first compiler")
            .with_attr("computing", true),
        figure("hedy-lamarr", "Hedy Lamarr", Field::Technology, "female", false, "europe", 1914)
            .with_description("Actress and inventor of frequency hopping")
            .with_attr("computing", true),
        figure("tim-berners-lee", "Tim Berners-Lee", Field::Technology, "male", true, "europe", 1955)
            .with_description("Inventor of the World Wide Web")
            .with_attr("computing", true),
        figure("nikola-tesla", "Nikola Tesla", Field::Engineering, "male", false, "europe", 1856)
            .with_description("Inventor of alternating current systems"),
        figure("samantha-cristoforetti", "Samantha Cristoforetti", Field::Engineering, "female", true, "europe", 1977)
            .with_description("Astronaut and engineer of the European Space Agency")
            .with_attr("italian", true)
            .with_attr("space", true),
        figure("leonardo-da-vinci", "Leonardo da Vinci", Field::Arts, "male", false, "europe", 1452)
            .with_description("Renaissance painter, inventor and anatomist")
            .with_attr("italian", true),
        figure("frida-kahlo", "Frida Kahlo", Field::Arts, "female", false, "north-america", 1907)
            .with_description("Painter known for her self-portraits"),
    ]
}

/// Questions in dataset order.
pub fn questions() -> Vec<Question> {
    vec![
        Question::attribute("is-woman", "Is your character a woman?", "gender", "female"),
        Question::attribute("is-alive", "Is your character still alive?", "alive", true),
        Question::attribute("is-scientist", "Is your character a scientist?", "field", Field::Science.as_str()),
        Question::attribute("is-mathematician", "Is your character a mathematician?", "field", Field::Mathematics.as_str()),
        Question::attribute("works-in-technology", "Does your character work in technology?", "field", Field::Technology.as_str()),
        Question::attribute("is-engineer", "Is your character an engineer?", "field", Field::Engineering.as_str()),
        Question::attribute("is-artist", "Is your character an artist?", "field", Field::Arts.as_str()),
        Question::attribute("won-nobel", "Did your character win a Nobel Prize?", "nobel_prize", true),
        Question::attribute("is-italian", "Is your character Italian?", "italian", true),
        Question::attribute("from-europe", "Was your character born in Europe?", "continent", "europe"),
        Question::attribute("from-north-america", "Was your character born in North America?", "continent", "north-america"),
        Question::attribute("from-asia", "Was your character born in Asia?", "continent", "asia"),
        Question::attribute("computing", "Did your character shape modern computing?", "computing", true),
        Question::attribute("space", "Is your character connected to space exploration?", "space", true),
        Question::predicate(
            "born-before-1800",
            "Was your character born before 1800?",
            Predicate::native("born_before_1800", |c| born_between(c, i64::MIN, 1800)),
        ),
        Question::predicate(
            "born-in-19th-century",
            "Was your character born in the 19th century?",
            Predicate::native("born_1800s", |c| born_between(c, 1800, 1900)),
        ),
        Question::predicate(
            "born-after-1950",
            "Was your character born after 1950?",
            Predicate::native("born_after_1950", |c| born_between(c, 1950, i64::MAX)),
        ),
        Question::predicate(
            "italian-woman",
            "Is your character an Italian woman?",
            Predicate::equals("italian", true).and(Predicate::equals("gender", "female")),
        ),
    ]
}

impl Catalog {
    /// The built-in STEM catalog.
    pub fn builtin() -> CatalogResult<Self> {
        Catalog::from_parts(characters(), questions())
    }
}
