//! Built-in character and question catalog.
//!
//! Characters list only the traits that hold; everything else reads as
//! `false`. Questions cover the full attribute vocabulary, one each.

use super::attributes::keys;
use super::base::KnowledgeBase;
use super::character::{Character, CharacterId};
use super::question::{Question, QuestionId};

type CharacterSeed = (&'static str, &'static str, &'static str, &'static [&'static str]);

const CHARACTERS: &[CharacterSeed] = &[
    (
        "Harry Potter",
        "harry-potter",
        "The boy who lived, a young wizard attending Hogwarts.",
        &[
            "isMale",
            "isFictional",
            "isFromMovie",
            "isFromBook",
            "isHuman",
            "hasMagic",
            "hasSidekick",
            "isAlive",
        ],
    ),
    (
        "Hermione Granger",
        "hermione-granger",
        "The brightest witch of her age.",
        &["isFictional", "isFromMovie", "isFromBook", "isHuman", "hasMagic", "isAlive"],
    ),
    (
        "Spider-Man",
        "spider-man",
        "Friendly neighborhood superhero from Queens.",
        &[
            "isMale",
            "isFictional",
            "isFromMovie",
            "isSuperhero",
            "hasSuperpowers",
            "isHuman",
            "isAmerican",
            "wearsDistinctiveCostume",
            "isAnimated",
            "isFromTVShow",
            "isFromVideoGame",
        ],
    ),
    (
        "Superman",
        "superman",
        "The Man of Steel from the planet Krypton.",
        &[
            "isMale",
            "isFictional",
            "isFromMovie",
            "isSuperhero",
            "hasSuperpowers",
            "canFly",
            "isAmerican",
            "wearsDistinctiveCostume",
            "isFromTVShow",
        ],
    ),
    (
        "Batman",
        "batman",
        "The Dark Knight who protects Gotham City.",
        &[
            "isMale",
            "isFictional",
            "isFromMovie",
            "isSuperhero",
            "isHuman",
            "hasSidekick",
            "isAmerican",
            "wearsDistinctiveCostume",
            "isFromTVShow",
            "isFromVideoGame",
            "isAnimated",
        ],
    ),
    (
        "Wonder Woman",
        "wonder-woman",
        "Amazon warrior princess of Themyscira.",
        &[
            "isFictional",
            "isFromMovie",
            "isSuperhero",
            "hasSuperpowers",
            "canFly",
            "wearsDistinctiveCostume",
        ],
    ),
    (
        "Darth Vader",
        "darth-vader",
        "Sith Lord and former Jedi Knight.",
        &[
            "isMale",
            "isFictional",
            "isFromMovie",
            "isVillain",
            "isDisney",
            "isHuman",
            "hasSuperpowers",
            "wearsDistinctiveCostume",
            "isOlderThan50",
        ],
    ),
    (
        "Elsa",
        "elsa",
        "The Snow Queen of Arendelle.",
        &[
            "isFictional",
            "isFromMovie",
            "isDisney",
            "isAnimated",
            "hasMagic",
            "isHuman",
            "hasSidekick",
        ],
    ),
    (
        "Mickey Mouse",
        "mickey-mouse",
        "Disney's cheerful mascot mouse.",
        &[
            "isMale",
            "isFictional",
            "isDisney",
            "isAnimated",
            "isFunny",
            "isFromTVShow",
            "isFromMovie",
            "wearsDistinctiveCostume",
            "isOlderThan50",
        ],
    ),
    (
        "Homer Simpson",
        "homer-simpson",
        "Donut-loving safety inspector from Springfield.",
        &[
            "isMale",
            "isFictional",
            "isAnimated",
            "isFunny",
            "isFromTVShow",
            "isAmerican",
            "isHuman",
        ],
    ),
    (
        "SpongeBob SquarePants",
        "spongebob",
        "An optimistic sea sponge who lives in a pineapple.",
        &["isMale", "isFictional", "isAnimated", "isFunny", "isFromTVShow", "hasSidekick"],
    ),
    (
        "Bugs Bunny",
        "bugs-bunny",
        "Wisecracking rabbit: \"What's up, Doc?\"",
        &[
            "isMale",
            "isFictional",
            "isAnimated",
            "isFunny",
            "isFromTVShow",
            "isFromMovie",
            "isAmerican",
            "isOlderThan50",
        ],
    ),
    (
        "Pikachu",
        "pikachu",
        "Electric-type Pokemon and Ash's partner.",
        &[
            "isFictional",
            "isAnimated",
            "isFromAnime",
            "isFromVideoGame",
            "isFromGame",
            "isFromTVShow",
            "hasSuperpowers",
        ],
    ),
    (
        "Goku",
        "goku",
        "Saiyan martial artist who always seeks a stronger opponent.",
        &[
            "isMale",
            "isFictional",
            "isAnimated",
            "isFromAnime",
            "isFromTVShow",
            "hasSuperpowers",
            "canFly",
            "isFromVideoGame",
        ],
    ),
    (
        "Mario",
        "mario",
        "Mustachioed plumber from the Mushroom Kingdom.",
        &[
            "isMale",
            "isFictional",
            "isFromVideoGame",
            "isFromGame",
            "isHuman",
            "isFunny",
            "wearsDistinctiveCostume",
            "hasSidekick",
            "isAnimated",
        ],
    ),
    (
        "Link",
        "link",
        "Hero of Hyrule wielding the Master Sword.",
        &[
            "isMale",
            "isFictional",
            "isFromVideoGame",
            "isFromGame",
            "isHuman",
            "wearsDistinctiveCostume",
            "hasMagic",
        ],
    ),
    (
        "Lara Croft",
        "lara-croft",
        "Archaeologist and tomb raider.",
        &["isFictional", "isFromVideoGame", "isFromGame", "isFromMovie", "isHuman"],
    ),
    (
        "Sonic the Hedgehog",
        "sonic",
        "The fastest hedgehog alive.",
        &[
            "isMale",
            "isFictional",
            "isFromVideoGame",
            "isFromGame",
            "isAnimated",
            "hasSuperpowers",
            "hasSidekick",
            "isFromMovie",
        ],
    ),
    (
        "Pac-Man",
        "pac-man",
        "Round yellow maze runner chased by ghosts.",
        &["isMale", "isFictional", "isFromVideoGame", "isFromGame", "isAnimated"],
    ),
    (
        "Sherlock Holmes",
        "sherlock-holmes",
        "Consulting detective of 221B Baker Street.",
        &[
            "isMale",
            "isFictional",
            "isFromBook",
            "isFromMovie",
            "isFromTVShow",
            "isHuman",
            "hasSidekick",
        ],
    ),
    (
        "Gandalf",
        "gandalf",
        "Wizard of Middle-earth.",
        &[
            "isMale",
            "isFictional",
            "isFromBook",
            "isFromMovie",
            "hasMagic",
            "isOlderThan50",
            "wearsDistinctiveCostume",
        ],
    ),
    (
        "Frodo Baggins",
        "frodo-baggins",
        "Hobbit ring-bearer from the Shire.",
        &["isMale", "isFictional", "isFromBook", "isFromMovie", "hasSidekick"],
    ),
    (
        "Dracula",
        "dracula",
        "The vampire count of Transylvania.",
        &[
            "isMale",
            "isFictional",
            "isFromBook",
            "isFromMovie",
            "isVillain",
            "hasSuperpowers",
            "canFly",
            "isOlderThan50",
        ],
    ),
    (
        "The Joker",
        "joker",
        "Clown Prince of Crime and Batman's nemesis.",
        &[
            "isMale",
            "isFictional",
            "isFromMovie",
            "isVillain",
            "isHuman",
            "isFunny",
            "isAmerican",
            "wearsDistinctiveCostume",
            "isFromTVShow",
            "isAnimated",
        ],
    ),
    (
        "Shrek",
        "shrek",
        "Grumpy ogre who just wants his swamp back.",
        &["isMale", "isFictional", "isFromMovie", "isAnimated", "isFunny", "hasSidekick"],
    ),
    (
        "Albert Einstein",
        "albert-einstein",
        "Physicist who developed the theory of relativity.",
        &["isMale", "isHuman", "isHistorical", "isScientist", "isOlderThan50", "isAmerican"],
    ),
    (
        "Abraham Lincoln",
        "abraham-lincoln",
        "16th President of the United States.",
        &[
            "isMale",
            "isHuman",
            "isHistorical",
            "isPolitician",
            "isAmerican",
            "isOlderThan50",
            "wearsDistinctiveCostume",
        ],
    ),
    (
        "Cleopatra",
        "cleopatra",
        "Last active ruler of the Ptolemaic Kingdom of Egypt.",
        &["isHuman", "isHistorical", "isPolitician"],
    ),
    (
        "Napoleon Bonaparte",
        "napoleon",
        "French emperor and military commander.",
        &["isMale", "isHuman", "isHistorical", "isPolitician", "wearsDistinctiveCostume"],
    ),
    (
        "Marie Curie",
        "marie-curie",
        "Pioneer of radioactivity research.",
        &["isHuman", "isHistorical", "isScientist"],
    ),
    (
        "Leonardo da Vinci",
        "leonardo-da-vinci",
        "Renaissance painter, inventor and engineer.",
        &["isMale", "isHuman", "isHistorical", "isScientist", "isOlderThan50"],
    ),
    (
        "Michael Jordan",
        "michael-jordan",
        "Six-time NBA champion.",
        &[
            "isMale",
            "isHuman",
            "isSportsRelated",
            "isAmerican",
            "isAlive",
            "isOlderThan50",
            "isFromMovie",
        ],
    ),
    (
        "Serena Williams",
        "serena-williams",
        "Winner of 23 Grand Slam singles titles.",
        &["isHuman", "isSportsRelated", "isAmerican", "isAlive"],
    ),
    (
        "Lionel Messi",
        "lionel-messi",
        "Argentine football forward.",
        &["isMale", "isHuman", "isSportsRelated", "isAlive"],
    ),
    (
        "Usain Bolt",
        "usain-bolt",
        "The fastest sprinter in recorded history.",
        &["isMale", "isHuman", "isSportsRelated", "isAlive"],
    ),
    (
        "Muhammad Ali",
        "muhammad-ali",
        "Heavyweight boxing champion: float like a butterfly.",
        &["isMale", "isHuman", "isSportsRelated", "isAmerican", "isHistorical"],
    ),
    (
        "Elvis Presley",
        "elvis-presley",
        "The King of Rock and Roll.",
        &[
            "isMale",
            "isHuman",
            "isMusician",
            "isAmerican",
            "isHistorical",
            "isFromMovie",
            "wearsDistinctiveCostume",
        ],
    ),
    (
        "Taylor Swift",
        "taylor-swift",
        "Singer-songwriter.",
        &["isHuman", "isMusician", "isAmerican", "isAlive"],
    ),
    (
        "Rich Uncle Pennybags",
        "monopoly-man",
        "Top-hatted mascot of Monopoly.",
        &[
            "isMale",
            "isFictional",
            "isFromGame",
            "wearsDistinctiveCostume",
            "isOlderThan50",
            "isAmerican",
        ],
    ),
    (
        "Colonel Mustard",
        "colonel-mustard",
        "Suspect in the board game Clue.",
        &["isMale", "isFictional", "isFromGame", "isHuman", "isOlderThan50"],
    ),
];

const QUESTIONS: &[(&str, &str)] = &[
    (keys::IS_MALE, "Is your character male?"),
    (keys::IS_FICTIONAL, "Is your character fictional?"),
    (keys::IS_FROM_MOVIE, "Does your character appear in movies?"),
    (keys::IS_SUPERHERO, "Is your character a superhero?"),
    (keys::HAS_SUPERPOWERS, "Does your character have superpowers?"),
    (keys::IS_VILLAIN, "Is your character a villain?"),
    (keys::IS_DISNEY, "Is your character associated with Disney?"),
    (keys::IS_HUMAN, "Is your character human?"),
    (keys::IS_FROM_BOOK, "Does your character come from a book?"),
    (keys::HAS_SIDEKICK, "Does your character have a sidekick?"),
    (keys::IS_FROM_TV_SHOW, "Is your character from a TV show?"),
    (keys::IS_ANIMATED, "Is your character animated?"),
    (keys::CAN_FLY, "Can your character fly?"),
    (keys::IS_FUNNY, "Is your character known for being funny?"),
    (keys::HAS_MAGIC, "Does your character use magic?"),
    (keys::IS_HISTORICAL, "Is your character a historical figure?"),
    (keys::IS_ALIVE, "Is your character alive today?"),
    (keys::IS_AMERICAN, "Is your character American?"),
    (keys::IS_OLDER_THAN_50, "Is your character older than 50?"),
    (keys::WEARS_DISTINCTIVE_COSTUME, "Does your character wear a distinctive costume?"),
    (keys::IS_FROM_GAME, "Is your character from a game?"),
    (keys::IS_FROM_VIDEO_GAME, "Is your character from a video game?"),
    (keys::IS_SPORTS_RELATED, "Is your character related to sports?"),
    (keys::IS_MUSICIAN, "Is your character a musician?"),
    (keys::IS_POLITICIAN, "Is your character a politician?"),
    (keys::IS_SCIENTIST, "Is your character a scientist?"),
    (keys::IS_FROM_ANIME, "Is your character from an anime?"),
];

/// Build the catalog served by `KnowledgeBase::builtin`.
pub(crate) fn builtin_catalog() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();

    for (i, &(name, slug, description, traits)) in CHARACTERS.iter().enumerate() {
        kb.register_character(
            Character::new(CharacterId::new(i as u32 + 1), name)
                .with_description(description)
                .with_image(format!("/characters/{}.jpg", slug))
                .with_traits(traits),
        );
    }

    for (i, &(attribute, text)) in QUESTIONS.iter().enumerate() {
        kb.register_question(Question::new(QuestionId::new(i as u32 + 1), text, attribute));
    }

    kb
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Category;

    #[test]
    fn test_every_trait_is_known() {
        for &(name, _, _, traits) in CHARACTERS {
            for t in traits {
                assert!(keys::ALL.contains(t), "{} has unknown trait {}", name, t);
            }
        }
    }

    #[test]
    fn test_one_question_per_attribute() {
        let kb = builtin_catalog();
        assert_eq!(kb.list_questions().len(), keys::ALL.len());
        for key in keys::ALL {
            assert!(kb.list_questions().iter().any(|q| q.attribute.as_str() == key));
        }
    }

    #[test]
    fn test_every_category_is_playable() {
        let kb = builtin_catalog();
        for category in Category::ALL {
            assert!(
                kb.filter_by_category(category).len() >= 5,
                "{} has too few characters",
                category
            );
        }
    }

    #[test]
    fn test_ids_start_at_one() {
        let kb = builtin_catalog();
        assert_eq!(kb.list_entities()[0].id, CharacterId::new(1));
        assert_eq!(kb.list_entities()[0].name, "Harry Potter");
        assert_eq!(kb.list_entities()[0].image, "/characters/harry-potter.jpg");
    }
}
