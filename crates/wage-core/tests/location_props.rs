//! Property tests for object location invariants.
use proptest::prelude::*;
use wage_core::{
    BaseStats, Character, CharacterId, Container, Object, ObjectId, ObjectKind, Scene, SceneId,
    Stat, World, WorldMeta,
};

const SCENES: usize = 3;
const CHARACTERS: usize = 2;

#[derive(Debug, Clone)]
enum Op {
    ObjectToScene(usize, usize),
    ObjectToCharacter(usize, usize),
    CharacterToScene(usize, usize),
}

fn op(objects: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..objects, 0..=SCENES).prop_map(|(o, s)| Op::ObjectToScene(o, s)),
        (0..objects, 0..CHARACTERS).prop_map(|(o, c)| Op::ObjectToCharacter(o, c)),
        (0..CHARACTERS, 0..=SCENES).prop_map(|(c, s)| Op::CharacterToScene(c, s)),
    ]
}

struct Fixture {
    world: World,
    scenes: Vec<SceneId>,
    objects: Vec<ObjectId>,
    characters: Vec<CharacterId>,
}

fn fixture(immobile: &[bool]) -> Fixture {
    let mut world = World::new(WorldMeta::new("props"));
    let mut scenes = vec![world.storage()];
    for i in 0..SCENES {
        let x = i32::try_from(i).unwrap();
        scenes.push(world.add_scene(Scene::new(format!("scene{i}"), x, 0)).unwrap());
    }
    let objects = immobile
        .iter()
        .enumerate()
        .map(|(i, fixed)| {
            let kind = if *fixed {
                ObjectKind::Immobile
            } else {
                ObjectKind::Movable
            };
            world.add_object(Object::new(format!("obj{i}"), kind)).unwrap()
        })
        .collect();
    let characters = (0..CHARACTERS)
        .map(|i| {
            let stats = BaseStats {
                physical_hp: 12,
                physical_strength: 4,
                ..BaseStats::default()
            };
            world
                .add_character(Character::new(format!("chr{i}")).with_stats(stats))
                .unwrap()
        })
        .collect();
    Fixture {
        world,
        scenes,
        objects,
        characters,
    }
}

fn containers_holding(world: &World, obj: ObjectId) -> Vec<Container> {
    let mut found = Vec::new();
    for scene in world.scene_ids() {
        let count = world.scene(scene).objects().iter().filter(|o| **o == obj).count();
        found.extend(std::iter::repeat_n(Container::Scene(scene), count));
    }
    for chr in world.character_ids() {
        let count = world.character(chr).inventory().iter().filter(|o| **o == obj).count();
        found.extend(std::iter::repeat_n(Container::Character(chr), count));
    }
    found
}

fn assert_sorted(world: &World, list: &[ObjectId]) {
    let keys: Vec<(bool, usize)> = list
        .iter()
        .map(|id| {
            let object = world.object(*id);
            (!object.kind.is_immobile(), object.index())
        })
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

proptest! {
    #[test]
    fn every_placed_object_has_exactly_one_container(
        immobile in prop::collection::vec(any::<bool>(), 1..6),
        ops in prop::collection::vec(op(5), 0..40),
    ) {
        let Fixture { mut world, scenes, objects, characters } = fixture(&immobile);
        for op in ops {
            match op {
                Op::ObjectToScene(o, s) if o < objects.len() => {
                    world.move_object_to_scene(objects[o], scenes[s]);
                }
                Op::ObjectToCharacter(o, c) if o < objects.len() => {
                    world.move_object_to_character(objects[o], characters[c]);
                }
                Op::CharacterToScene(c, s) => {
                    world.move_character(characters[c], scenes[s]);
                }
                _ => {}
            }
        }

        for obj in &objects {
            let holders = containers_holding(&world, *obj);
            match world.object(*obj).location() {
                Some(location) => prop_assert_eq!(holders, vec![location]),
                None => prop_assert!(holders.is_empty()),
            }
        }
        for scene in world.scene_ids() {
            assert_sorted(&world, world.scene(scene).objects());
            let present = world.scene(scene).characters();
            prop_assert!(present.windows(2).all(|w| w[0] < w[1]));
        }
        for chr in &characters {
            assert_sorted(&world, world.character(*chr).inventory());
        }
    }

    #[test]
    fn leaving_storage_resets_and_later_moves_only_count_visits(
        hops in prop::collection::vec(1..=SCENES, 1..10),
        damage in 0..12i32,
    ) {
        let Fixture { mut world, scenes, characters, .. } = fixture(&[]);
        let chr = characters[0];
        world.move_character(chr, world.storage());
        world.character_mut(chr).context_mut().record_kill();

        world.move_character(chr, scenes[hops[0]]);
        let ctx = world.character(chr).context();
        prop_assert_eq!(ctx.visits(), 1);
        prop_assert_eq!(ctx.kills(), 0);
        for stat in Stat::ALL {
            prop_assert_eq!(ctx.current(stat), ctx.base(stat));
        }

        world.character_mut(chr).context_mut().adjust(Stat::PhysicalHp, -damage);
        let mut expected_visits = 1;
        let mut here = scenes[hops[0]];
        for hop in &hops[1..] {
            let target = scenes[*hop];
            if world.move_character(chr, target).is_some() {
                expected_visits += 1;
            }
            prop_assert_eq!(target == here, world.character(chr).current_scene() == Some(here));
            here = target;
        }
        let ctx = world.character(chr).context();
        prop_assert_eq!(ctx.visits(), expected_visits);
        prop_assert_eq!(ctx.current(Stat::PhysicalHp), 12 - damage);
    }
}
