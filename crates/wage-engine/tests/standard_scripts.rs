//! Integration tests for the standard scripts.
use wage_core::{ArmorSlot, World};
use wage_engine::{ClickInput, Engine, EngineConfig, ScriptedRolls, StandardScripts, TextBuffer};

const WORLD: &str = r#"{
    "name": "Manor",
    "player": "Hero",
    "scenes": [
        {"name": "Hall", "x": 0, "y": 0, "description": "A long hall.", "blocked": ["north"]},
        {"name": "Yard", "x": 1, "y": 0, "description": "A muddy yard."}
    ],
    "objects": [
        {"name": "Statue", "kind": "immobile", "home": "Hall", "description": "A stern statue."},
        {"name": "Helmet", "kind": "helmet", "home": "Hall"},
        {"name": "Coin", "home": "Yard"}
    ],
    "characters": [
        {"name": "Hero", "proper_noun": true, "initial_scene": "Hall",
         "stats": {"physical_hp": 10}}
    ]
}"#;

struct Session {
    engine: Engine,
    output: TextBuffer,
}

impl Session {
    fn start() -> Self {
        let world = World::from_json(WORLD).unwrap();
        let output = TextBuffer::new();
        let mut engine = Engine::new(world, StandardScripts, EngineConfig::default())
            .unwrap()
            .with_output(output.clone())
            .with_random(ScriptedRolls::constant(0.0));
        engine.process_turn(None, None);
        output.take();
        Self { engine, output }
    }

    fn say(&mut self, input: &str) -> Vec<String> {
        self.engine.process_turn(Some(input), None);
        let text = self.output.take();
        text.lines().map(str::to_string).collect()
    }
}

#[test]
fn look_lists_scenery_first() {
    let mut session = Session::start();
    assert_eq!(
        session.say("look"),
        vec!["Hall", "A long hall.", "You see: Statue, Helmet."]
    );
}

#[test]
fn walking_respects_blocks_and_the_grid() {
    let mut session = Session::start();
    assert_eq!(session.say("north"), vec!["You can't go that way."]);
    assert_eq!(session.say("go west"), vec!["You can't go that way."]);
    assert_eq!(
        session.say("e"),
        vec!["Yard", "A muddy yard.", "You see: Coin."]
    );
    let yard = session.engine.world().scene_by_name("Yard").unwrap();
    assert_eq!(session.engine.player_scene(), Some(yard));
}

#[test]
fn taking_wearing_and_dropping() {
    let mut session = Session::start();
    assert_eq!(session.say("take statue"), vec!["You can't take the Statue."]);
    assert_eq!(session.say("take the helmet"), vec!["You now have the Helmet."]);
    assert_eq!(session.say("wear helmet"), vec!["You are now wearing the Helmet."]);

    let world = session.engine.world();
    let hero = world.player().unwrap();
    let helmet = world.object_by_name("Helmet").unwrap();
    assert_eq!(world.character(hero).armor(ArmorSlot::Head), Some(helmet));

    assert_eq!(session.say("i"), vec!["You have: Helmet."]);
    assert_eq!(session.say("drop helmet"), vec!["You no longer have the Helmet."]);
    assert_eq!(session.say("inventory"), vec!["You are empty-handed."]);

    let world = session.engine.world();
    assert_eq!(world.character(hero).armor(ArmorSlot::Head), None);
}

#[test]
fn fuzzy_names_resolve() {
    let mut session = Session::start();
    assert_eq!(session.say("take helmt"), vec!["You now have the Helmet."]);
}

#[test]
fn examining_and_status() {
    let mut session = Session::start();
    assert_eq!(session.say("x statue"), vec!["A stern statue."]);
    assert_eq!(
        session.say("examine helmet"),
        vec!["You see nothing special about the Helmet."]
    );
    assert_eq!(
        session.say("status"),
        vec!["Your condition appears to be excellent. Kills: 0."]
    );
}

#[test]
fn clicking_an_object_examines_it() {
    let mut session = Session::start();
    let statue = session.engine.world().object_by_name("Statue").unwrap();
    session
        .engine
        .process_turn(None, Some(ClickInput::Object(statue)));
    assert_eq!(session.output.take(), "A stern statue.\n");
}

#[test]
fn gibberish_is_not_understood() {
    let mut session = Session::start();
    assert_eq!(session.say("xyzzy"), vec!["What?"]);
    assert_eq!(session.say("take dragon"), vec!["What?"]);
    assert_eq!(session.say("attack nobody"), vec!["What?"]);
}

#[test]
fn clicks_on_unknown_entities_are_ignored() {
    let mut session = Session::start();
    let before = session.engine.turn_state().turn;

    let object: ClickInput = serde_json::from_str(r#"{"Object":7}"#).unwrap();
    session.engine.process_turn(None, Some(object));
    let character: ClickInput = serde_json::from_str(r#"{"Character":9}"#).unwrap();
    session.engine.process_turn(None, Some(character));

    assert_eq!(session.output.take(), "");
    assert_eq!(session.engine.turn_state().turn, before + 2);
    assert_eq!(session.say("look")[0], "Hall");
}
