//! Farming-area recommendation
//!
//! For a selected weapon, find the area whose drops best serve it, and for
//! each secondary tag the player could lock, list the other weapons that
//! would be perfectly farmable in that area under that lock.
//!
//! Empty tags mean "no tag" and are never matched literally:
//! - an empty main tag on the selected weapon passes every area's main check
//! - an empty secondary tag is trivially coverable and produces no lock
//! - a candidate weapon whose remaining secondary tag is empty still counts
//!   as perfectly farmable
//!
//! Only secondary tags the area can drop are locked, which matters for
//! [`Eligibility::Lenient`] where one secondary may be missing.

use serde::Serialize;

use crate::catalogue::{Area, TagSlot, Weapon};
use crate::labels::{LabelPair, TagLabels};

/// Which areas qualify as candidates for a weapon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Eligibility {
    /// Main tag in slot 0, and both secondary tags each in slot 1 or 2
    #[default]
    Strict,
    /// Main tag in slot 0, and at least one secondary tag in slot 1 or 2
    Lenient,
}

/// Options for [`recommend_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    pub eligibility: Eligibility,
}

/// Weapons sharing one main-attribute value, within one locked tag
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MainTagGroup<'a> {
    pub main: LabelPair,
    pub weapons: Vec<&'a Weapon>,
}

/// Perfect matches when one secondary tag is locked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LockedTagResult<'a> {
    pub locked_tag: LabelPair,
    /// Slot the locked tag occupies on the selected weapon
    pub slot: TagSlot,
    /// Total weapons across all groups
    pub perfect_count: usize,
    /// Non-empty groups, in the area's slot-0 order
    pub weapons_by_main: Vec<MainTagGroup<'a>>,
}

impl<'a> LockedTagResult<'a> {
    /// Group for a main-attribute value
    pub fn group(&self, main: &str) -> Option<&MainTagGroup<'a>> {
        self.weapons_by_main.iter().find(|g| g.main.en == main)
    }

    /// Groups with `main` moved to the front, others in area order
    pub fn groups_main_first(&self, main: &str) -> Vec<&MainTagGroup<'a>> {
        let (mut first, rest): (Vec<_>, Vec<_>) =
            self.weapons_by_main.iter().partition(|g| g.main.en == main);
        first.extend(rest);
        first
    }

    /// Every weapon across all groups
    pub fn weapons(&self) -> impl Iterator<Item = &'a Weapon> + '_ {
        self.weapons_by_main
            .iter()
            .flat_map(|g| g.weapons.iter().copied())
    }
}

/// The recommended area for a weapon
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BestAreaResult<'a> {
    pub area: &'a Area,
    /// Sorted by `perfect_count`, highest first
    pub locked_tags: Vec<LockedTagResult<'a>>,
    /// Sum of `perfect_count` over all locks
    pub perfect_total: usize,
}

impl<'a> BestAreaResult<'a> {
    /// Result for a particular locked tag
    pub fn lock(&self, tag: &str) -> Option<&LockedTagResult<'a>> {
        self.locked_tags.iter().find(|l| l.locked_tag.en == tag)
    }
}

/// Recommend the best farming area for `selected` using strict eligibility.
///
/// Returns `None` when no area can serve the weapon. `weapons` may include
/// `selected` itself; it is never listed among its own matches. Ties are
/// broken by area order in `areas`.
pub fn recommend<'a>(
    selected: &Weapon,
    weapons: &'a [Weapon],
    areas: &'a [Area],
) -> Option<BestAreaResult<'a>> {
    recommend_with(selected, weapons, areas, MatchOptions::default())
}

/// [`recommend`] with explicit options
pub fn recommend_with<'a>(
    selected: &Weapon,
    weapons: &'a [Weapon],
    areas: &'a [Area],
    options: MatchOptions,
) -> Option<BestAreaResult<'a>> {
    let labels = TagLabels::from_weapons(weapons);
    recommend_with_labels(selected, weapons, areas, &labels, options)
}

/// [`recommend_with`] using labels already built for `weapons`, such as
/// [`Catalogue::labels`](crate::Catalogue::labels)
pub fn recommend_with_labels<'a>(
    selected: &Weapon,
    weapons: &'a [Weapon],
    areas: &'a [Area],
    labels: &TagLabels,
    options: MatchOptions,
) -> Option<BestAreaResult<'a>> {
    let mut best: Option<BestAreaResult<'a>> = None;

    for area in areas {
        if !is_candidate(selected, area, options.eligibility) {
            tracing::trace!(area = %area.id, weapon = %selected.id, "area not eligible");
            continue;
        }

        // A tag the area cannot drop cannot be locked there
        let locked_tags: Vec<LockedTagResult<'a>> = locks(selected)
            .filter(|(_, tag)| area.offers_secondary(tag))
            .map(|(slot, tag)| evaluate_lock(selected, area, slot, tag, weapons, labels))
            .collect();
        let perfect_total: usize = locked_tags.iter().map(|l| l.perfect_count).sum();

        tracing::debug!(area = %area.id, perfect_total, "scored candidate area");

        if best
            .as_ref()
            .map_or(true, |b| perfect_total > b.perfect_total)
        {
            best = Some(BestAreaResult {
                area,
                locked_tags,
                perfect_total,
            });
        }
    }

    if let Some(result) = best.as_mut() {
        // Stable: equal counts keep stat-lock before skill-lock
        result
            .locked_tags
            .sort_by(|a, b| b.perfect_count.cmp(&a.perfect_count));
        tracing::debug!(
            weapon = %selected.id,
            area = %result.area.id,
            perfect_total = result.perfect_total,
            "recommended area"
        );
    }

    best
}

/// Whether `area` can drop essences for every tag `weapon` has
pub fn is_candidate(weapon: &Weapon, area: &Area, eligibility: Eligibility) -> bool {
    let main = weapon.tags.main();
    if !main.is_empty() && !area.offers(TagSlot::Main, main) {
        return false;
    }

    let mut secondaries = [weapon.tags.stat(), weapon.tags.skill()]
        .into_iter()
        .filter(|t| !t.is_empty())
        .peekable();
    if secondaries.peek().is_none() {
        return true;
    }

    match eligibility {
        Eligibility::Strict => secondaries.all(|t| area.offers_secondary(t)),
        Eligibility::Lenient => secondaries.any(|t| area.offers_secondary(t)),
    }
}

/// Areas that qualify for `weapon`, in catalogue order
pub fn candidate_areas<'a>(
    weapon: &Weapon,
    areas: &'a [Area],
    eligibility: Eligibility,
) -> Vec<&'a Area> {
    areas
        .iter()
        .filter(|a| is_candidate(weapon, a, eligibility))
        .collect()
}

/// Number of catalogue weapons whose tags can all drop in `area`
pub fn area_coverage(area: &Area, weapons: &[Weapon]) -> usize {
    weapons
        .iter()
        .filter(|w| is_candidate(w, area, Eligibility::Strict))
        .count()
}

/// The secondary tags that can be locked, stat first
fn locks(weapon: &Weapon) -> impl Iterator<Item = (TagSlot, &str)> {
    [TagSlot::Stat, TagSlot::Skill]
        .into_iter()
        .map(move |slot| (slot, weapon.tags.get(slot)))
        .filter(|(_, tag)| !tag.is_empty())
}

fn evaluate_lock<'a>(
    selected: &Weapon,
    area: &Area,
    slot: TagSlot,
    locked: &str,
    weapons: &'a [Weapon],
    labels: &TagLabels,
) -> LockedTagResult<'a> {
    let mut weapons_by_main = Vec::new();
    let mut perfect_count = 0;

    for main in area.main_tags().iter().filter(|m| !m.is_empty()) {
        let matches: Vec<&'a Weapon> = weapons
            .iter()
            .filter(|w| w.id != selected.id && is_perfect(w, area, main, locked))
            .collect();

        if matches.is_empty() {
            continue;
        }

        perfect_count += matches.len();
        weapons_by_main.push(MainTagGroup {
            main: labels.label(TagSlot::Main, main),
            weapons: matches,
        });
    }

    LockedTagResult {
        locked_tag: labels.label(slot, locked),
        slot,
        perfect_count,
        weapons_by_main,
    }
}

/// `weapon` has main tag `main`, carries `locked` as a secondary, and its
/// remaining secondary tag (if any) can also drop in `area`
fn is_perfect(weapon: &Weapon, area: &Area, main: &str, locked: &str) -> bool {
    if weapon.tags.main() != main {
        return false;
    }
    match weapon.tags.other_secondary(locked) {
        Some(other) => other.is_empty() || area.offers_secondary(other),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Tags;

    fn weapon(id: &str, main: &str, stat: &str, skill: &str) -> Weapon {
        Weapon {
            id: id.to_string(),
            name: id.to_string(),
            name_jp: None,
            rarity: 5,
            weapon_type: "Sword".to_string(),
            tags: Tags::new(main, stat, skill),
            tags_jp: None,
        }
    }

    fn area(id: &str, main: &[&str], stat: &[&str], skill: &[&str]) -> Area {
        let slot = |tags: &[&str]| tags.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        Area {
            id: id.to_string(),
            name: id.to_string(),
            name_jp: None,
            tag_slots: [slot(main), slot(stat), slot(skill)],
        }
    }

    fn ids<'a>(weapons: &[&'a Weapon]) -> Vec<&'a str> {
        weapons.iter().map(|w| w.id.as_str()).collect()
    }

    #[test]
    fn test_single_candidate_has_two_locks() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![w1.clone()];
        let areas = vec![area(
            "park",
            &["Strength", "Will"],
            &["Attack", "HP"],
            &["Pursuit", "Flow"],
        )];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        assert_eq!(result.area.id, "park");
        let locked: Vec<&str> = result
            .locked_tags
            .iter()
            .map(|l| l.locked_tag.en.as_str())
            .collect();
        assert_eq!(locked, ["Attack", "Pursuit"]);
        assert_eq!(result.locked_tags[0].slot, TagSlot::Stat);
        assert_eq!(result.locked_tags[1].slot, TagSlot::Skill);
        assert_eq!(result.perfect_total, 0);
    }

    #[test]
    fn test_no_area_with_main_tag() {
        let w1 = weapon("w1", "Intellect", "Attack", "Pursuit");
        let areas = vec![area("park", &["Strength"], &["Attack"], &["Pursuit"])];
        assert!(recommend(&w1, &[w1.clone()], &areas).is_none());
    }

    #[test]
    fn test_empty_area_catalogue() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        assert!(recommend(&w1, &[], &[]).is_none());
    }

    #[test]
    fn test_higher_perfect_total_wins() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![
            w1.clone(),
            weapon("w2", "Will", "Attack", "Flow"),
            weapon("w3", "Strength", "HP", "Pursuit"),
        ];
        // Both areas cover w1 equally; only "plateau" also drops Flow and HP
        let areas = vec![
            area("park", &["Strength", "Will"], &["Attack"], &["Pursuit"]),
            area(
                "plateau",
                &["Strength", "Will"],
                &["Attack", "HP"],
                &["Pursuit", "Flow"],
            ),
        ];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        assert_eq!(result.area.id, "plateau");
        assert_eq!(result.perfect_total, 2);
        assert_eq!(ids(&result.lock("Attack").unwrap().group("Will").unwrap().weapons), ["w2"]);
        assert_eq!(
            ids(&result.lock("Pursuit").unwrap().group("Strength").unwrap().weapons),
            ["w3"]
        );
    }

    #[test]
    fn test_ties_keep_first_area() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![w1.clone(), weapon("w2", "Strength", "Attack", "Pursuit")];
        let areas = vec![
            area("first", &["Strength"], &["Attack"], &["Pursuit"]),
            area("second", &["Strength"], &["Attack"], &["Pursuit"]),
        ];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        assert_eq!(result.area.id, "first");
        assert_eq!(result.perfect_total, 2);
    }

    #[test]
    fn test_locks_sorted_by_perfect_count() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![
            w1.clone(),
            weapon("w2", "Strength", "HP", "Pursuit"),
            weapon("w3", "Will", "Crit Rate", "Pursuit"),
            weapon("w4", "Will", "Attack", "Flow"),
        ];
        let areas = vec![area(
            "park",
            &["Strength", "Will"],
            &["Attack", "HP", "Crit Rate"],
            &["Pursuit", "Flow"],
        )];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        assert_eq!(result.locked_tags[0].locked_tag.en, "Pursuit");
        assert_eq!(result.locked_tags[0].perfect_count, 2);
        assert_eq!(result.locked_tags[1].locked_tag.en, "Attack");
        assert_eq!(result.locked_tags[1].perfect_count, 1);
        assert_eq!(result.perfect_total, 3);
    }

    #[test]
    fn test_equal_counts_keep_stat_lock_first() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![
            w1.clone(),
            weapon("w2", "Strength", "Attack", "Flow"),
            weapon("w3", "Strength", "HP", "Pursuit"),
        ];
        let areas = vec![area(
            "park",
            &["Strength"],
            &["Attack", "HP"],
            &["Pursuit", "Flow"],
        )];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        let locked: Vec<&str> = result
            .locked_tags
            .iter()
            .map(|l| l.locked_tag.en.as_str())
            .collect();
        assert_eq!(locked, ["Attack", "Pursuit"]);
    }

    #[test]
    fn test_selected_weapon_excluded_from_matches() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let twin = weapon("twin", "Strength", "Attack", "Pursuit");
        let weapons = vec![w1.clone(), twin];
        let areas = vec![area("park", &["Strength"], &["Attack"], &["Pursuit"])];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        for lock in &result.locked_tags {
            assert!(lock.weapons().all(|w| w.id != "w1"));
            assert_eq!(lock.weapons().map(|w| w.id.as_str()).collect::<Vec<_>>(), ["twin"]);
        }
    }

    #[test]
    fn test_other_secondary_must_drop_in_area() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![
            w1.clone(),
            // Twilight never drops here, so locking Attack can't finish w2
            weapon("w2", "Strength", "Attack", "Twilight"),
            weapon("w3", "Strength", "Attack", "Flow"),
        ];
        let areas = vec![area(
            "park",
            &["Strength"],
            &["Attack"],
            &["Pursuit", "Flow"],
        )];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        let attack = result.lock("Attack").unwrap();
        assert_eq!(attack.weapons().map(|w| w.id.as_str()).collect::<Vec<_>>(), ["w3"]);
    }

    #[test]
    fn test_groups_cover_every_main_value_in_area_order() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![
            w1.clone(),
            weapon("w2", "Will", "Attack", "Pursuit"),
            weapon("w3", "Agility", "Attack", "Pursuit"),
            weapon("w4", "Strength", "Attack", "Pursuit"),
            // Main value the area doesn't offer
            weapon("w5", "Intellect", "Attack", "Pursuit"),
        ];
        let areas = vec![area(
            "park",
            &["Agility", "Strength", "Will"],
            &["Attack"],
            &["Pursuit"],
        )];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        let attack = result.lock("Attack").unwrap();
        let mains: Vec<&str> = attack
            .weapons_by_main
            .iter()
            .map(|g| g.main.en.as_str())
            .collect();
        assert_eq!(mains, ["Agility", "Strength", "Will"]);
        assert_eq!(attack.perfect_count, 3);

        let display: Vec<&str> = attack
            .groups_main_first("Strength")
            .iter()
            .map(|g| g.main.en.as_str())
            .collect();
        assert_eq!(display, ["Strength", "Agility", "Will"]);
    }

    #[test]
    fn test_secondary_tag_may_sit_in_either_slot() {
        // Pursuit is offered in the stat slot, Attack in the skill slot
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let w2 = weapon("w2", "Strength", "Pursuit", "Attack");
        let weapons = vec![w1.clone(), w2];
        let areas = vec![area("swap", &["Strength"], &["Pursuit"], &["Attack"])];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        assert_eq!(result.perfect_total, 2);
    }

    #[test]
    fn test_strict_eligibility_requires_both_secondaries() {
        // Earlier revisions accepted main + one secondary; strict is the default
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let areas = vec![area("half", &["Strength"], &["Attack"], &["Flow"])];

        assert!(!is_candidate(&w1, &areas[0], Eligibility::Strict));
        assert!(is_candidate(&w1, &areas[0], Eligibility::Lenient));

        let weapons = vec![w1.clone()];
        assert!(recommend(&w1, &weapons, &areas).is_none());

        let lenient = MatchOptions {
            eligibility: Eligibility::Lenient,
        };
        let result = recommend_with(&w1, &weapons, &areas, lenient).unwrap();
        assert_eq!(result.area.id, "half");
        // Pursuit does not drop in "half", so only Attack can be locked
        assert_eq!(result.locked_tags.len(), 1);
        assert_eq!(result.locked_tags[0].locked_tag.en, "Attack");
    }

    #[test]
    fn test_lenient_ignores_locks_the_area_cannot_drop() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![
            w1.clone(),
            weapon("p1", "Strength", "HP", "Pursuit"),
            weapon("p2", "Strength", "Crit Rate", "Pursuit"),
        ];
        let areas = vec![
            area(
                "partial",
                &["Strength"],
                &["Attack", "HP", "Crit Rate"],
                &["Flow"],
            ),
            area("full", &["Strength"], &["Attack", "HP"], &["Pursuit"]),
        ];
        let lenient = MatchOptions {
            eligibility: Eligibility::Lenient,
        };

        let result = recommend_with(&w1, &weapons, &areas, lenient).unwrap();
        // "partial" would score 2 on an unfarmable Pursuit lock
        assert_eq!(result.area.id, "full");
        assert_eq!(result.perfect_total, 1);
        assert_eq!(result.lock("Pursuit").unwrap().perfect_count, 1);
        assert!(result
            .locked_tags
            .iter()
            .all(|l| result.area.offers_secondary(&l.locked_tag.en)));

        let partial = recommend_with(&w1, &weapons, &areas[..1], lenient).unwrap();
        assert_eq!(partial.perfect_total, 0);
        assert!(partial.lock("Pursuit").is_none());
    }

    #[test]
    fn test_recommend_with_cached_labels() {
        let mut w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        w1.tags_jp = Some(Tags::new("筋力", "攻撃力", "追撃"));
        let weapons = vec![w1.clone(), weapon("w2", "Strength", "Attack", "Flow")];
        let areas = vec![area("park", &["Strength"], &["Attack"], &["Pursuit", "Flow"])];
        let labels = TagLabels::from_weapons(&weapons);

        let cached =
            recommend_with_labels(&w1, &weapons, &areas, &labels, MatchOptions::default());
        assert_eq!(
            cached,
            recommend_with(&w1, &weapons, &areas, MatchOptions::default())
        );
        let cached = cached.unwrap();
        assert_eq!(cached.lock("Attack").unwrap().locked_tag.jp.as_deref(), Some("攻撃力"));
    }

    #[test]
    fn test_empty_skill_tag_is_no_constraint() {
        let w1 = weapon("w1", "Will", "HP", "");
        let weapons = vec![
            w1.clone(),
            weapon("w2", "Will", "HP", "Medicant"),
            weapon("w3", "Will", "HP", ""),
        ];
        let areas = vec![area("clinic", &["Will"], &["HP"], &["Medicant"])];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        assert_eq!(result.locked_tags.len(), 1);
        assert_eq!(result.locked_tags[0].locked_tag.en, "HP");
        let matched: Vec<&str> = result.locked_tags[0]
            .weapons()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(matched, ["w2", "w3"]);
    }

    #[test]
    fn test_empty_tags_never_match_literally() {
        let w1 = weapon("w1", "Will", "HP", "");
        // An area listing "" must not turn empty-skill weapons into locks
        let areas = vec![area("odd", &["Will"], &["HP"], &[""])];
        let weapons = vec![w1.clone(), weapon("w2", "Will", "", "")];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        assert!(result.lock("").is_none());
        assert_eq!(result.perfect_total, 0);
    }

    #[test]
    fn test_empty_main_tag_passes_main_check() {
        let w1 = weapon("w1", "", "Attack", "Pursuit");
        let areas = vec![area("park", &["Strength"], &["Attack"], &["Pursuit"])];
        assert!(is_candidate(&w1, &areas[0], Eligibility::Strict));
    }

    #[test]
    fn test_labels_carried_in_result() {
        let mut w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        w1.tags_jp = Some(Tags::new("筋力", "攻撃力", "追撃"));
        let weapons = vec![w1.clone(), weapon("w2", "Strength", "Attack", "Pursuit")];
        let areas = vec![area("park", &["Strength"], &["Attack"], &["Pursuit"])];

        let result = recommend(&w1, &weapons, &areas).unwrap();
        let attack = result.lock("Attack").unwrap();
        assert_eq!(attack.locked_tag.jp.as_deref(), Some("攻撃力"));
        assert_eq!(attack.weapons_by_main[0].main.jp.as_deref(), Some("筋力"));
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let w1 = weapon("w1", "Strength", "Attack", "Pursuit");
        let weapons = vec![
            w1.clone(),
            weapon("w2", "Strength", "Attack", "Flow"),
            weapon("w3", "Will", "HP", "Pursuit"),
        ];
        let areas = vec![
            area("a", &["Strength", "Will"], &["Attack", "HP"], &["Pursuit"]),
            area("b", &["Strength", "Will"], &["Attack"], &["Pursuit", "Flow"]),
        ];
        assert_eq!(
            recommend(&w1, &weapons, &areas),
            recommend(&w1, &weapons, &areas)
        );
    }

    #[test]
    fn test_area_coverage() {
        let weapons = vec![
            weapon("w1", "Strength", "Attack", "Pursuit"),
            weapon("w2", "Will", "HP", ""),
            weapon("w3", "Agility", "Attack", "Pursuit"),
            weapon("w4", "Strength", "Attack", "Twilight"),
        ];
        let park = area("park", &["Strength", "Will"], &["Attack", "HP"], &["Pursuit"]);
        assert_eq!(area_coverage(&park, &weapons), 2);

        let areas = vec![park];
        assert_eq!(candidate_areas(&weapons[3], &areas, Eligibility::Strict).len(), 0);
        assert_eq!(candidate_areas(&weapons[3], &areas, Eligibility::Lenient).len(), 1);
    }
}
