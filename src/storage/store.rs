//! The club record store.
//!
//! `ClubStore` is the storage collaborator consumed by the API and CLI. It
//! reads whole JSONL collections per request (fine at single-club volumes)
//! and serializes mutations behind one lock so concurrent read-modify-write
//! cycles cannot interleave. Season scoping for the stats fetches happens
//! here, by joining scorecard rows to fixtures.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use serde::{de::DeserializeOwned, Serialize};
use tracing::info;

use crate::models::{
    BattingInnings, BowlingSpell, Fixture, FixtureId, Member, MemberId, Season, SeasonId, Team,
    TeamId,
};

use super::{EntityType, JsonlReader, JsonlWriter, StorageConfig, StorageError};

pub struct ClubStore {
    config: StorageConfig,
    write_lock: Mutex<()>,
}

impl ClubStore {
    pub fn new(config: StorageConfig) -> Self {
        Self {
            config,
            write_lock: Mutex::new(()),
        }
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // A poisoned lock only means a writer panicked mid-cycle; the
        // underlying files are still line-consistent.
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn read<T: DeserializeOwned>(&self, entity: EntityType) -> Result<Vec<T>, StorageError> {
        JsonlReader::for_entity(&self.config, entity).read_all()
    }

    fn write<T: Serialize>(&self, entity: EntityType, records: &[T]) -> Result<(), StorageError> {
        JsonlWriter::for_entity(&self.config, entity).write_all(records)?;
        Ok(())
    }

    /// Insert or replace a record, matched by the given predicate.
    fn upsert<T, F>(&self, entity: EntityType, record: T, matches: F) -> Result<(), StorageError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&T) -> bool,
    {
        let _guard = self.lock();
        let mut all: Vec<T> = self.read(entity)?;
        match all.iter().position(|r| matches(r)) {
            Some(i) => all[i] = record,
            None => all.push(record),
        }
        self.write(entity, &all)
    }

    /// Apply a mutation to the first matching record. Returns whether a
    /// record matched.
    fn mutate<T, F, M>(&self, entity: EntityType, matches: F, mutate: M) -> Result<bool, StorageError>
    where
        T: Serialize + DeserializeOwned,
        F: Fn(&T) -> bool,
        M: FnOnce(&mut T),
    {
        let _guard = self.lock();
        let mut all: Vec<T> = self.read(entity)?;
        let Some(i) = all.iter().position(|r| matches(r)) else {
            return Ok(false);
        };
        mutate(&mut all[i]);
        self.write(entity, &all)?;
        Ok(true)
    }

    // ── Members ─────────────────────────────────────────────────

    pub fn members(&self) -> Result<Vec<Member>, StorageError> {
        self.read(EntityType::Member)
    }

    pub fn member_by_id(&self, id: &MemberId) -> Result<Option<Member>, StorageError> {
        Ok(self.members()?.into_iter().find(|m| &m.id == id))
    }

    pub fn upsert_member(&self, member: Member) -> Result<Member, StorageError> {
        let id = member.id.clone();
        self.upsert(EntityType::Member, member.clone(), |m: &Member| m.id == id)?;
        Ok(member)
    }

    /// Soft delete: clears the active flag, keeping the record (and its
    /// scorecard history) in place.
    pub fn soft_delete_member(&self, id: &MemberId) -> Result<bool, StorageError> {
        self.mutate(EntityType::Member, |m: &Member| &m.id == id, |m| {
            m.is_active = false;
        })
    }

    // ── Teams ───────────────────────────────────────────────────

    pub fn teams(&self) -> Result<Vec<Team>, StorageError> {
        self.read(EntityType::Team)
    }

    pub fn team_by_id(&self, id: &TeamId) -> Result<Option<Team>, StorageError> {
        Ok(self.teams()?.into_iter().find(|t| &t.id == id))
    }

    pub fn upsert_team(&self, team: Team) -> Result<Team, StorageError> {
        let id = team.id.clone();
        self.upsert(EntityType::Team, team.clone(), |t: &Team| t.id == id)?;
        Ok(team)
    }

    pub fn soft_delete_team(&self, id: &TeamId) -> Result<bool, StorageError> {
        self.mutate(EntityType::Team, |t: &Team| &t.id == id, |t| {
            t.is_active = false;
        })
    }

    // ── Seasons ─────────────────────────────────────────────────

    pub fn seasons(&self) -> Result<Vec<Season>, StorageError> {
        self.read(EntityType::Season)
    }

    pub fn season_by_id(&self, id: &SeasonId) -> Result<Option<Season>, StorageError> {
        Ok(self.seasons()?.into_iter().find(|s| &s.id == id))
    }

    pub fn upsert_season(&self, season: Season) -> Result<Season, StorageError> {
        let id = season.id.clone();
        self.upsert(EntityType::Season, season.clone(), |s: &Season| s.id == id)?;
        Ok(season)
    }

    pub fn soft_delete_season(&self, id: &SeasonId) -> Result<bool, StorageError> {
        self.mutate(EntityType::Season, |s: &Season| &s.id == id, |s| {
            s.is_active = false;
        })
    }

    // ── Fixtures ────────────────────────────────────────────────

    pub fn fixtures(&self) -> Result<Vec<Fixture>, StorageError> {
        self.read(EntityType::Fixture)
    }

    pub fn fixture_by_id(&self, id: &FixtureId) -> Result<Option<Fixture>, StorageError> {
        Ok(self.fixtures()?.into_iter().find(|f| &f.id == id))
    }

    pub fn upsert_fixture(&self, fixture: Fixture) -> Result<Fixture, StorageError> {
        let id = fixture.id.clone();
        self.upsert(EntityType::Fixture, fixture.clone(), |f: &Fixture| {
            f.id == id
        })?;
        Ok(fixture)
    }

    /// Delete a fixture along with any scorecard records attached to it.
    pub fn delete_fixture(&self, id: &FixtureId) -> Result<bool, StorageError> {
        let _guard = self.lock();

        let mut fixtures: Vec<Fixture> = self.read(EntityType::Fixture)?;
        let before = fixtures.len();
        fixtures.retain(|f| &f.id != id);
        if fixtures.len() == before {
            return Ok(false);
        }
        self.write(EntityType::Fixture, &fixtures)?;

        let innings: Vec<BattingInnings> = self.read(EntityType::BattingInnings)?;
        let innings: Vec<BattingInnings> =
            innings.into_iter().filter(|i| &i.fixture_id != id).collect();
        self.write(EntityType::BattingInnings, &innings)?;

        let spells: Vec<BowlingSpell> = self.read(EntityType::BowlingSpell)?;
        let spells: Vec<BowlingSpell> =
            spells.into_iter().filter(|s| &s.fixture_id != id).collect();
        self.write(EntityType::BowlingSpell, &spells)?;

        info!("Deleted fixture {} and its scorecard records", id);
        Ok(true)
    }

    // ── Scorecards ──────────────────────────────────────────────

    /// All batting innings, optionally scoped to one season via the
    /// innings → fixture → season join.
    pub fn batting_innings_for_stats(
        &self,
        season_id: Option<&SeasonId>,
    ) -> Result<Vec<BattingInnings>, StorageError> {
        let innings: Vec<BattingInnings> = self.read(EntityType::BattingInnings)?;
        match season_id {
            Some(season) => {
                let in_season = self.fixture_ids_in_season(season)?;
                Ok(innings
                    .into_iter()
                    .filter(|i| in_season.contains(&i.fixture_id))
                    .collect())
            }
            None => Ok(innings),
        }
    }

    /// All bowling spells, optionally scoped to one season.
    pub fn bowling_spells_for_stats(
        &self,
        season_id: Option<&SeasonId>,
    ) -> Result<Vec<BowlingSpell>, StorageError> {
        let spells: Vec<BowlingSpell> = self.read(EntityType::BowlingSpell)?;
        match season_id {
            Some(season) => {
                let in_season = self.fixture_ids_in_season(season)?;
                Ok(spells
                    .into_iter()
                    .filter(|s| in_season.contains(&s.fixture_id))
                    .collect())
            }
            None => Ok(spells),
        }
    }

    fn fixture_ids_in_season(&self, season_id: &SeasonId) -> Result<HashSet<FixtureId>, StorageError> {
        Ok(self
            .fixtures()?
            .into_iter()
            .filter(|f| &f.season_id == season_id)
            .map(|f| f.id)
            .collect())
    }

    /// The scorecard currently stored for one fixture.
    pub fn fixture_result(
        &self,
        fixture_id: &FixtureId,
    ) -> Result<(Vec<BattingInnings>, Vec<BowlingSpell>), StorageError> {
        let innings = JsonlReader::<BattingInnings>::for_entity(&self.config, EntityType::BattingInnings)
            .read_where(|i| &i.fixture_id == fixture_id)?;
        let spells = JsonlReader::<BowlingSpell>::for_entity(&self.config, EntityType::BowlingSpell)
            .read_where(|s| &s.fixture_id == fixture_id)?;
        Ok((innings, spells))
    }

    /// Upsert a match result: every prior innings/spell for the fixture is
    /// deleted and replaced by the new set.
    pub fn replace_fixture_result(
        &self,
        fixture_id: &FixtureId,
        batting: Vec<BattingInnings>,
        bowling: Vec<BowlingSpell>,
    ) -> Result<(), StorageError> {
        let _guard = self.lock();

        let innings: Vec<BattingInnings> = self.read(EntityType::BattingInnings)?;
        let mut innings: Vec<BattingInnings> = innings
            .into_iter()
            .filter(|i| &i.fixture_id != fixture_id)
            .collect();
        innings.extend(batting);
        self.write(EntityType::BattingInnings, &innings)?;

        let spells: Vec<BowlingSpell> = self.read(EntityType::BowlingSpell)?;
        let mut spells: Vec<BowlingSpell> = spells
            .into_iter()
            .filter(|s| &s.fixture_id != fixture_id)
            .collect();
        spells.extend(bowling);
        self.write(EntityType::BowlingSpell, &spells)?;

        info!("Replaced match result for fixture {}", fixture_id);
        Ok(())
    }

    /// Delete the match result for one fixture. Returns the number of
    /// innings and spells removed.
    pub fn delete_fixture_result(
        &self,
        fixture_id: &FixtureId,
    ) -> Result<(usize, usize), StorageError> {
        let _guard = self.lock();

        let innings: Vec<BattingInnings> = self.read(EntityType::BattingInnings)?;
        let before_innings = innings.len();
        let innings: Vec<BattingInnings> = innings
            .into_iter()
            .filter(|i| &i.fixture_id != fixture_id)
            .collect();
        let removed_innings = before_innings - innings.len();
        self.write(EntityType::BattingInnings, &innings)?;

        let spells: Vec<BowlingSpell> = self.read(EntityType::BowlingSpell)?;
        let before_spells = spells.len();
        let spells: Vec<BowlingSpell> = spells
            .into_iter()
            .filter(|s| &s.fixture_id != fixture_id)
            .collect();
        let removed_spells = before_spells - spells.len();
        self.write(EntityType::BowlingSpell, &spells)?;

        info!(
            "Deleted match result for fixture {} ({} innings, {} spells)",
            fixture_id, removed_innings, removed_spells
        );
        Ok((removed_innings, removed_spells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, HomeAway};
    use chrono::Utc;
    use tempfile::TempDir;

    fn test_store(temp_dir: &TempDir) -> ClubStore {
        ClubStore::new(StorageConfig::new(temp_dir.path().to_path_buf()))
    }

    fn fixture_in(season: &str) -> Fixture {
        Fixture::new(
            EntityId::from(season),
            EntityId::from("team-1"),
            "Riverside CC".to_string(),
            HomeAway::Home,
            Utc::now(),
        )
    }

    fn innings_for(fixture: &FixtureId, member: &str, runs: u32) -> BattingInnings {
        BattingInnings::new(
            fixture.clone(),
            EntityId::from("team-1"),
            EntityId::from(member),
            1,
        )
        .with_score(runs, runs)
    }

    fn spell_for(fixture: &FixtureId, member: &str, wickets: u32) -> BowlingSpell {
        BowlingSpell::new(
            fixture.clone(),
            EntityId::from("team-1"),
            EntityId::from(member),
        )
        .with_figures(4.0, 0, 20, wickets)
    }

    #[test]
    fn test_member_crud_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let member = store.upsert_member(Member::new("Joe Root".to_string())).unwrap();
        assert_eq!(store.members().unwrap().len(), 1);

        let fetched = store.member_by_id(&member.id).unwrap().unwrap();
        assert_eq!(fetched.name, "Joe Root");

        let mut renamed = fetched.clone();
        renamed.name = "J. Root".to_string();
        store.upsert_member(renamed).unwrap();

        let all = store.members().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "J. Root");
    }

    #[test]
    fn test_soft_delete_member_keeps_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let member = store.upsert_member(Member::new("Leaver".to_string())).unwrap();
        assert!(store.soft_delete_member(&member.id).unwrap());

        let fetched = store.member_by_id(&member.id).unwrap().unwrap();
        assert!(!fetched.is_active);

        // Unknown id: no-op
        assert!(!store.soft_delete_member(&EntityId::from("nope")).unwrap());
    }

    #[test]
    fn test_replace_fixture_result_is_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let fixture = store.upsert_fixture(fixture_in("s1")).unwrap();

        store
            .replace_fixture_result(
                &fixture.id,
                vec![innings_for(&fixture.id, "m1", 40), innings_for(&fixture.id, "m2", 10)],
                vec![spell_for(&fixture.id, "m3", 2)],
            )
            .unwrap();

        let (innings, spells) = store.fixture_result(&fixture.id).unwrap();
        assert_eq!(innings.len(), 2);
        assert_eq!(spells.len(), 1);

        // Second upsert replaces everything for the fixture
        store
            .replace_fixture_result(
                &fixture.id,
                vec![innings_for(&fixture.id, "m1", 75)],
                vec![],
            )
            .unwrap();

        let (innings, spells) = store.fixture_result(&fixture.id).unwrap();
        assert_eq!(innings.len(), 1);
        assert_eq!(innings[0].runs, 75);
        assert!(spells.is_empty());
    }

    #[test]
    fn test_replace_result_leaves_other_fixtures_alone() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let f1 = store.upsert_fixture(fixture_in("s1")).unwrap();
        let f2 = store.upsert_fixture(fixture_in("s1")).unwrap();

        store
            .replace_fixture_result(&f1.id, vec![innings_for(&f1.id, "m1", 40)], vec![])
            .unwrap();
        store
            .replace_fixture_result(&f2.id, vec![innings_for(&f2.id, "m1", 60)], vec![])
            .unwrap();

        store.replace_fixture_result(&f1.id, vec![], vec![]).unwrap();

        let (f2_innings, _) = store.fixture_result(&f2.id).unwrap();
        assert_eq!(f2_innings.len(), 1);
        assert_eq!(f2_innings[0].runs, 60);
    }

    #[test]
    fn test_delete_fixture_result_counts() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let fixture = store.upsert_fixture(fixture_in("s1")).unwrap();
        store
            .replace_fixture_result(
                &fixture.id,
                vec![innings_for(&fixture.id, "m1", 40)],
                vec![spell_for(&fixture.id, "m2", 3)],
            )
            .unwrap();

        let (innings_removed, spells_removed) =
            store.delete_fixture_result(&fixture.id).unwrap();
        assert_eq!(innings_removed, 1);
        assert_eq!(spells_removed, 1);

        let (innings, spells) = store.fixture_result(&fixture.id).unwrap();
        assert!(innings.is_empty());
        assert!(spells.is_empty());
    }

    #[test]
    fn test_delete_fixture_cascades_to_scorecard() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let fixture = store.upsert_fixture(fixture_in("s1")).unwrap();
        store
            .replace_fixture_result(
                &fixture.id,
                vec![innings_for(&fixture.id, "m1", 40)],
                vec![spell_for(&fixture.id, "m2", 3)],
            )
            .unwrap();

        assert!(store.delete_fixture(&fixture.id).unwrap());
        assert!(store.fixture_by_id(&fixture.id).unwrap().is_none());
        assert!(store.batting_innings_for_stats(None).unwrap().is_empty());
        assert!(store.bowling_spells_for_stats(None).unwrap().is_empty());

        assert!(!store.delete_fixture(&fixture.id).unwrap());
    }

    #[test]
    fn test_season_scoped_stats_fetch() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let f1 = store.upsert_fixture(fixture_in("s1")).unwrap();
        let f2 = store.upsert_fixture(fixture_in("s2")).unwrap();

        store
            .replace_fixture_result(
                &f1.id,
                vec![innings_for(&f1.id, "m1", 40)],
                vec![spell_for(&f1.id, "m1", 2)],
            )
            .unwrap();
        store
            .replace_fixture_result(
                &f2.id,
                vec![innings_for(&f2.id, "m1", 90)],
                vec![spell_for(&f2.id, "m1", 4)],
            )
            .unwrap();

        let all = store.batting_innings_for_stats(None).unwrap();
        assert_eq!(all.len(), 2);

        let s1 = store
            .batting_innings_for_stats(Some(&EntityId::from("s1")))
            .unwrap();
        assert_eq!(s1.len(), 1);
        assert_eq!(s1[0].runs, 40);

        let s2_spells = store
            .bowling_spells_for_stats(Some(&EntityId::from("s2")))
            .unwrap();
        assert_eq!(s2_spells.len(), 1);
        assert_eq!(s2_spells[0].wickets, 4);
    }

    #[test]
    fn test_season_and_team_crud() {
        let temp_dir = TempDir::new().unwrap();
        let store = test_store(&temp_dir);

        let season = store
            .upsert_season(Season::new(
                "2026".to_string(),
                chrono::NaiveDate::from_ymd_opt(2026, 4, 18).unwrap(),
                chrono::NaiveDate::from_ymd_opt(2026, 9, 13).unwrap(),
            ))
            .unwrap();
        let team = store.upsert_team(Team::new("1st XI".to_string())).unwrap();

        assert!(store.season_by_id(&season.id).unwrap().is_some());
        assert!(store.team_by_id(&team.id).unwrap().is_some());

        assert!(store.soft_delete_season(&season.id).unwrap());
        assert!(store.soft_delete_team(&team.id).unwrap());
        assert!(!store.season_by_id(&season.id).unwrap().unwrap().is_active);
        assert!(!store.team_by_id(&team.id).unwrap().unwrap().is_active);
    }
}
