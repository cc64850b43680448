// tests/composite_properties.rs
// Randomized check that Not/And/Or evaluate exactly as !, && and || over
// leaves with known outcomes, at arbitrary nesting depth.

use news_alert_filter::trigger::parse_reference_time;
use news_alert_filter::{NewsStory, Trigger};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn fixed_story() -> NewsStory {
    NewsStory::new(
        "guid-prop",
        "alpha beta gamma",
        "delta epsilon",
        "https://example.test/prop",
        parse_reference_time("3 Oct 2016 17:00:10").unwrap(),
    )
}

// Leaf stand-ins with a known truth value against `fixed_story`.
fn leaf(rng: &mut StdRng) -> (Trigger, bool) {
    if rng.random_bool(0.5) {
        (Trigger::Title("alpha".into()), true)
    } else {
        (Trigger::Title("omega".into()), false)
    }
}

fn random_tree(rng: &mut StdRng, depth: usize) -> (Trigger, bool) {
    if depth == 0 || rng.random_bool(0.3) {
        return leaf(rng);
    }
    match rng.random_range(0..3) {
        0 => {
            let (inner, v) = random_tree(rng, depth - 1);
            (Trigger::Not(Box::new(inner)), !v)
        }
        1 => {
            let (a, va) = random_tree(rng, depth - 1);
            let (b, vb) = random_tree(rng, depth - 1);
            (Trigger::And(Box::new(a), Box::new(b)), va && vb)
        }
        _ => {
            let (a, va) = random_tree(rng, depth - 1);
            let (b, vb) = random_tree(rng, depth - 1);
            (Trigger::Or(Box::new(a), Box::new(b)), va || vb)
        }
    }
}

#[test]
fn composites_match_plain_boolean_algebra() {
    let story = fixed_story();
    let mut rng = StdRng::seed_from_u64(0x5EED_u64);
    for _ in 0..500 {
        let (trigger, expected) = random_tree(&mut rng, 4);
        assert_eq!(trigger.evaluate(&story), expected, "{trigger:?}");
    }
}

#[test]
fn and_or_agree_with_their_operands() {
    let story = fixed_story();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..200 {
        let (a, _) = random_tree(&mut rng, 3);
        let (b, _) = random_tree(&mut rng, 3);
        let va = a.evaluate(&story);
        let vb = b.evaluate(&story);
        assert_eq!(
            Trigger::And(Box::new(a.clone()), Box::new(b.clone())).evaluate(&story),
            va && vb
        );
        assert_eq!(
            Trigger::Or(Box::new(a.clone()), Box::new(b.clone())).evaluate(&story),
            va || vb
        );
        assert_eq!(Trigger::Not(Box::new(a)).evaluate(&story), !va);
    }
}
