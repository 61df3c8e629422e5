use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

#[test]
fn myth_echoes_star_id() {
    let myth = MythBook::default().tell("42", &mut rng()).unwrap();
    assert_eq!(myth.id, "42");
}

#[test]
fn same_rng_seed_tells_same_myth() {
    let book = MythBook::default();
    let a = book.tell("3", &mut rng()).unwrap();
    let b = book.tell("3", &mut rng()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn title_is_name_then_epithet() {
    let myth = MythBook::default().tell("0", &mut rng()).unwrap();
    let (name, epithet) = myth.title.split_once(", ").unwrap();
    assert!(EPITHETS.contains(&epithet));
    assert!(FIRST_NAMES.iter().any(|first| name.starts_with(first)));
    assert!(SECOND_NAMES.iter().any(|second| name.ends_with(second)));
}

#[test]
fn story_has_four_sentences_and_names_the_star() {
    let myth = MythBook::default().tell("0", &mut rng()).unwrap();
    let name = myth.title.split_once(", ").unwrap().0;
    assert!(myth.story.starts_with(&format!("{name} was ")));
    assert!(myth.story.contains(PATH_SENTENCE));
    assert!(myth.story.ends_with(CUSTOM_SENTENCE));
    assert_eq!(myth.story.matches(". ").count(), 3);
}

#[test]
fn story_draws_from_pools() {
    let myth = MythBook::default().tell("9", &mut rng()).unwrap();
    assert!(FIGURES.iter().any(|f| myth.story.contains(f)));
    assert!(REALMS.iter().any(|r| myth.story.contains(r)));
    assert!(OMENS.iter().any(|o| myth.story.contains(&format!("When {o} foretold"))));
    assert!(TRIALS.iter().any(|t| myth.story.contains(t)));
    assert!(GIFTS.iter().any(|g| myth.story.contains(&format!("set out with {g}."))));
}

#[test]
fn single_entry_pools_are_fully_determined() {
    let book = MythBook {
        first_names: vec!["Vega"],
        second_names: vec!["of the Lyre"],
        epithets: vec!["the Harpist"],
        figures: vec!["a poet"],
        realms: vec!["the endless sea"],
        omens: vec!["tides"],
        trials: vec!["a long winter"],
        gifts: vec!["a silver harp"],
    };
    let myth = book.tell("5", &mut rng()).unwrap();
    assert_eq!(myth.title, "Vega of the Lyre, the Harpist");
    assert!(myth.story.starts_with(
        "Vega of the Lyre was a poet of the endless sea. When tides foretold a long winter, they set out with a silver harp."
    ));
}

#[test]
fn empty_pool_is_an_error() {
    let book = MythBook { gifts: Vec::new(), ..MythBook::default() };
    assert_eq!(book.tell("1", &mut rng()), Err(MythError::EmptyPool("gifts")));
}

#[test]
fn serializes_to_wire_shape() {
    let myth = Myth { id: "1".into(), title: "T".into(), story: "S".into() };
    let json = serde_json::to_value(&myth).unwrap();
    assert_eq!(json, serde_json::json!({"id": "1", "title": "T", "story": "S"}));
}
