use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wishsim::banner::Drops;
use wishsim::{BannerConfig, BannerKind, BannerSession, Catalog, Rarity};

fn catalog() -> Catalog {
    Catalog::load(Path::new(env!("CARGO_MANIFEST_DIR")).join("data")).unwrap()
}

#[test]
fn every_bundled_banner_resolves() {
    let c = catalog();
    let names: Vec<_> = c.banner_names().collect();
    assert_eq!(names[0], "standard");
    assert!(names.len() > 1);
    for name in names {
        let banner = c.banner(name).unwrap();
        assert_eq!(banner.name, name);
    }
}

#[test]
fn other_never_contains_featured() {
    let c = catalog();
    for name in c.banner_names() {
        let banner = c.banner(name).unwrap();
        let Drops::Event { four, five, .. } = &banner.drops else {
            continue;
        };
        for split in [four, five] {
            for item in split.featured.as_slice() {
                assert!(!split.other.contains(item), "{name}: {item} in other");
            }
        }
    }
}

#[test]
fn never_two_lost_fifty_fiftys_in_a_row() {
    let c = catalog();
    for name in c.banner_names() {
        let banner = c.banner(name).unwrap();
        let Drops::Event { four, five, .. } = &banner.drops else {
            continue;
        };
        let mut session = BannerSession::new(&banner);
        let mut rng = Pcg32::seed_from_u64(2024);
        let mut last_lost_five = false;
        let mut last_lost_four = false;
        for _ in 0..50_000 {
            let pull = session.pull(&mut rng);
            match pull.tier {
                Rarity::Five => {
                    let lost = !five.featured.contains(pull.item);
                    assert!(!(lost && last_lost_five), "{name}: two 5* losses in a row");
                    last_lost_five = lost;
                }
                Rarity::Four => {
                    let lost = !four.featured.contains(pull.item);
                    assert!(!(lost && last_lost_four), "{name}: two 4* losses in a row");
                    last_lost_four = lost;
                }
                Rarity::Three => {}
            }
        }
    }
}

#[test]
fn weapon_banner_hits_hard_pity_sooner() {
    let c = catalog();
    let weapon = c.banner("epitome_weap").unwrap();
    let character = c.banner("venti").unwrap();
    assert!(matches!(weapon.kind(), BannerKind::Event { .. }));

    let longest_drought = |banner: &BannerConfig| {
        let mut session = BannerSession::new(banner);
        let mut rng = Pcg32::seed_from_u64(8);
        let mut longest = 0;
        for _ in 0..100_000 {
            session.pull(&mut rng);
            longest = longest.max(session.pity().count(Rarity::Five));
        }
        longest
    };
    assert!(longest_drought(&weapon) <= 78);
    assert!(longest_drought(&character) <= 90);
}

#[test]
fn seeded_runs_replay() {
    let c = catalog();
    let banner = c.banner("standard").unwrap();
    let run = || {
        let mut session = BannerSession::with_pity(&banner, "4:8,5:70").unwrap();
        let mut rng = Pcg32::seed_from_u64(123);
        session
            .pulls(300, &mut rng)
            .into_iter()
            .map(|p| (p.tier, p.item.to_string()))
            .collect::<Vec<_>>()
    };
    assert_eq!(run(), run());
}
