use rand::Rng;

use crate::Tiered;
use crate::odds::OddsTable;
use crate::pity::PityCounters;
use crate::rarity::Rarity;

/// Pick a tier, rarest first.
///
/// Each non-fallback tier gets one independent roll against its current odds;
/// the first hit wins. If none hits, the fallback tier is returned without
/// consuming a roll.
pub fn select_tier<R: Rng + ?Sized>(table: &OddsTable, pity: &PityCounters, rng: &mut R) -> Rarity {
    for &tier in Rarity::PRIORITY {
        let Some(odds) = table.get(tier) else {
            continue;
        };
        let p = odds.at(pity.count(tier));
        log::debug!("{}* pity: {}, {:.1}% chance", tier.stars(), pity.count(tier), p * 100.0);
        if rng.random::<f64>() < p {
            return tier;
        }
    }
    Rarity::FALLBACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::Scripted;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn rarest_tier_checked_first() {
        // Both rolls would hit; only the first is used.
        let mut rng = Scripted::new([0, 0]);
        let tier = select_tier(&OddsTable::CHARACTER, &PityCounters::new(), &mut rng);
        assert_eq!(tier, Rarity::Five);
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn four_star_when_five_misses() {
        let mut rng = Scripted::new([u64::MAX, 0]);
        let tier = select_tier(&OddsTable::CHARACTER, &PityCounters::new(), &mut rng);
        assert_eq!(tier, Rarity::Four);
    }

    #[test]
    fn fallback_when_everything_misses() {
        let mut rng = Scripted::new([u64::MAX, u64::MAX, 0]);
        let tier = select_tier(&OddsTable::CHARACTER, &PityCounters::new(), &mut rng);
        assert_eq!(tier, Rarity::Three);
        // No roll for the fallback itself.
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn hard_pity_always_hits() {
        let mut pity = PityCounters::new();
        pity.set_count(Rarity::Five, 90);
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..1000 {
            assert_eq!(select_tier(&OddsTable::CHARACTER, &pity, &mut rng), Rarity::Five);
        }
    }

    #[test]
    fn empirical_rates_near_base_odds() {
        let mut rng = Pcg32::seed_from_u64(42);
        let pity = PityCounters::new();
        let draws = 200_000;
        let mut five = 0usize;
        let mut four = 0usize;
        for _ in 0..draws {
            match select_tier(&OddsTable::CHARACTER, &pity, &mut rng) {
                Rarity::Five => five += 1,
                Rarity::Four => four += 1,
                Rarity::Three => {}
            }
        }
        let five = five as f64 / draws as f64;
        let four = four as f64 / draws as f64;
        assert!((five - 0.006).abs() < 0.002, "five={five}");
        // Four only rolls when five missed.
        assert!((four - 0.994 * 0.051).abs() < 0.005, "four={four}");
    }
}
