use rstreaks::clock::FixedClock;
use rstreaks::core::create::CreateLogic;
use rstreaks::core::del::DeleteLogic;
use rstreaks::core::list::ListLogic;
use rstreaks::core::reset::ResetLogic;
use rstreaks::db::pool::DbPool;
use rstreaks::db::{audit, streaks};
use rstreaks::errors::AppError;
use rstreaks::models::{Action, Streak};

mod common;
use common::{at, memory_pool};

const JAN_1: &str = "2025-01-01T00:00:00+00:00";

fn create_gym(pool: &mut DbPool) -> Streak {
    let clock = FixedClock(at("2025-01-01T08:00:00+00:00"));
    CreateLogic::apply(pool, &clock, "Gym", at(JAN_1), at(JAN_1)).expect("create Gym")
}

fn log_count(pool: &DbPool) -> usize {
    audit::list_all(&pool.conn).unwrap().len()
}

/// Installs a trigger that makes every INSERT into `logs` fail.
fn break_log_inserts(pool: &DbPool) {
    pool.conn
        .execute_batch(
            "CREATE TRIGGER fail_log_insert BEFORE INSERT ON logs
             BEGIN SELECT RAISE(ABORT, 'injected fault'); END;",
        )
        .unwrap();
}

#[test]
fn test_gym_scenario_create_reset_delete() {
    let mut pool = memory_pool();

    // create
    let streak = create_gym(&mut pool);
    assert_eq!(streak.title, "Gym");
    assert_eq!(streak.start_date, at(JAN_1));
    assert_eq!(streak.last_reset, at(JAN_1));

    let log = audit::list_for(&pool.conn, streak.id).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].action, Action::Create);
    assert_eq!(log[0].reason, "Gym");

    // reset
    let reset_at = at("2025-02-10T19:30:00+01:00");
    let after = ResetLogic::apply(&mut pool, &FixedClock(reset_at), streak.id, "Missed gym")
        .expect("reset");
    assert_eq!(after.last_reset, reset_at);
    assert_eq!(streaks::get(&pool.conn, streak.id).unwrap().last_reset, reset_at);

    let log = audit::list_for(&pool.conn, streak.id).unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].action, Action::Reset);
    assert_eq!(log[1].reason, "Missed gym");
    assert_eq!(log[1].timestamp, reset_at);

    // delete without an explicit reason
    let deleted = DeleteLogic::apply(
        &mut pool,
        &FixedClock(at("2025-03-01T09:00:00+00:00")),
        streak.id,
        None,
    )
    .expect("delete");
    assert_eq!(deleted.streak.id, streak.id);

    assert!(ListLogic::streaks(&pool).unwrap().is_empty());

    let log = audit::list_for(&pool.conn, streak.id).unwrap();
    let actions: Vec<Action> = log.iter().map(|e| e.action).collect();
    assert_eq!(actions, vec![Action::Create, Action::Reset, Action::Delete]);
    assert_eq!(log[2].reason, "Gym");
    assert_eq!(deleted.log, log);
}

#[test]
fn test_create_writes_exactly_one_row_and_one_entry() {
    let mut pool = memory_pool();
    let a = create_gym(&mut pool);
    let b = CreateLogic::apply(
        &mut pool,
        &FixedClock(at(JAN_1)),
        "  No smoking  ",
        at(JAN_1),
        at("2025-01-05T00:00:00+00:00"),
    )
    .unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(b.title, "No smoking");

    let listed = ListLogic::streaks(&pool).unwrap();
    assert_eq!(listed, vec![a.clone(), b.clone()]);

    for s in [&a, &b] {
        let log = audit::list_for(&pool.conn, s.id).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].action, Action::Create);
        assert_eq!(log[0].reason, s.title);
    }
}

#[test]
fn test_create_with_empty_title_changes_nothing() {
    let mut pool = memory_pool();

    for title in ["", "   "] {
        let err = CreateLogic::apply(&mut pool, &FixedClock(at(JAN_1)), title, at(JAN_1), at(JAN_1))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    assert_eq!(streaks::count(&pool.conn).unwrap(), 0);
    assert_eq!(log_count(&pool), 0);
}

#[test]
fn test_create_rejects_last_reset_before_start() {
    let mut pool = memory_pool();
    let err = CreateLogic::apply(
        &mut pool,
        &FixedClock(at(JAN_1)),
        "Gym",
        at("2025-01-10T00:00:00+00:00"),
        at(JAN_1),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(streaks::count(&pool.conn).unwrap(), 0);
    assert_eq!(log_count(&pool), 0);
}

#[test]
fn test_reset_requires_reason() {
    let mut pool = memory_pool();
    let streak = create_gym(&mut pool);

    let err = ResetLogic::apply(&mut pool, &FixedClock(at("2025-02-01T00:00:00Z")), streak.id, " ")
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(streaks::get(&pool.conn, streak.id).unwrap().last_reset, at(JAN_1));
    assert_eq!(log_count(&pool), 1);
}

#[test]
fn test_reset_unknown_id_is_not_found_and_logs_nothing() {
    let mut pool = memory_pool();
    create_gym(&mut pool);

    let err = ResetLogic::apply(&mut pool, &FixedClock(at(JAN_1)), 999, "whatever").unwrap_err();
    assert!(matches!(err, AppError::NotFound(999)));

    // unknown id wins over a blank reason
    let err = ResetLogic::apply(&mut pool, &FixedClock(at(JAN_1)), 999, "").unwrap_err();
    assert!(matches!(err, AppError::NotFound(999)));

    assert_eq!(log_count(&pool), 1);
}

#[test]
fn test_reset_never_moves_last_reset_backwards() {
    let mut pool = memory_pool();
    let future = at("2030-06-01T00:00:00+00:00");
    let streak = CreateLogic::apply(&mut pool, &FixedClock(at(JAN_1)), "Future", future, future)
        .unwrap();

    let after = ResetLogic::apply(&mut pool, &FixedClock(at(JAN_1)), streak.id, "clock behind")
        .unwrap();

    assert_eq!(after.last_reset, future);
    assert!(after.last_reset >= after.start_date);

    let log = audit::list_for(&pool.conn, streak.id).unwrap();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].action, Action::Reset);
    assert_eq!(log[1].reason, "clock behind");
}

#[test]
fn test_repeated_resets_append_one_entry_each() {
    let mut pool = memory_pool();
    let streak = create_gym(&mut pool);

    let times = [
        "2025-01-05T10:00:00+00:00",
        "2025-01-05T10:00:00+00:00",
        "2025-01-09T07:15:00+00:00",
    ];
    let mut previous = streak.last_reset;
    for (i, t) in times.iter().enumerate() {
        let s = ResetLogic::apply(&mut pool, &FixedClock(at(t)), streak.id, &format!("slip {i}"))
            .unwrap();
        assert!(s.last_reset >= previous);
        previous = s.last_reset;
    }

    let resets: Vec<_> = audit::list_for(&pool.conn, streak.id)
        .unwrap()
        .into_iter()
        .filter(|e| e.action == Action::Reset)
        .collect();
    assert_eq!(resets.len(), 3);
    assert_eq!(resets[2].reason, "slip 2");
}

#[test]
fn test_delete_with_explicit_reason() {
    let mut pool = memory_pool();
    let streak = create_gym(&mut pool);

    let deleted = DeleteLogic::apply(
        &mut pool,
        &FixedClock(at("2025-04-01T00:00:00Z")),
        streak.id,
        Some("Moved to running"),
    )
    .unwrap();

    let last = deleted.log.last().unwrap();
    assert_eq!(last.action, Action::Delete);
    assert_eq!(last.reason, "Moved to running");
}

#[test]
fn test_delete_blank_reason_falls_back_to_title() {
    let mut pool = memory_pool();
    let streak = create_gym(&mut pool);

    let deleted =
        DeleteLogic::apply(&mut pool, &FixedClock(at(JAN_1)), streak.id, Some("  ")).unwrap();
    assert_eq!(deleted.log.last().unwrap().reason, "Gym");
}

#[test]
fn test_deleted_streak_is_terminal() {
    let mut pool = memory_pool();
    let streak = create_gym(&mut pool);
    let clock = FixedClock(at("2025-05-01T00:00:00Z"));

    DeleteLogic::apply(&mut pool, &clock, streak.id, None).unwrap();
    let before = log_count(&pool);

    let err = DeleteLogic::apply(&mut pool, &clock, streak.id, None).unwrap_err();
    assert!(matches!(err, AppError::NotFound(id) if id == streak.id));

    let err = ResetLogic::apply(&mut pool, &clock, streak.id, "too late").unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert_eq!(log_count(&pool), before);
    assert_eq!(audit::list_for(&pool.conn, streak.id).unwrap().len(), 2);
}

#[test]
fn test_create_rolls_back_when_log_append_fails() {
    let mut pool = memory_pool();
    break_log_inserts(&pool);

    let err = CreateLogic::apply(&mut pool, &FixedClock(at(JAN_1)), "Gym", at(JAN_1), at(JAN_1))
        .unwrap_err();

    assert!(matches!(err, AppError::Db(_)), "got {err:?}");
    assert_eq!(streaks::count(&pool.conn).unwrap(), 0);
    assert_eq!(log_count(&pool), 0);
}

#[test]
fn test_reset_rolls_back_when_log_append_fails() {
    let mut pool = memory_pool();
    let streak = create_gym(&mut pool);
    break_log_inserts(&pool);

    let err = ResetLogic::apply(&mut pool, &FixedClock(at("2025-02-01T00:00:00Z")), streak.id, "x")
        .unwrap_err();

    assert!(matches!(err, AppError::Db(_)));
    assert_eq!(streaks::get(&pool.conn, streak.id).unwrap().last_reset, at(JAN_1));
    assert_eq!(log_count(&pool), 1);
}

#[test]
fn test_delete_rolls_back_log_entry_when_row_removal_fails() {
    let mut pool = memory_pool();
    let streak = create_gym(&mut pool);
    pool.conn
        .execute_batch(
            "CREATE TRIGGER fail_streak_delete BEFORE DELETE ON streaks
             BEGIN SELECT RAISE(ABORT, 'injected fault'); END;",
        )
        .unwrap();

    let err = DeleteLogic::apply(&mut pool, &FixedClock(at(JAN_1)), streak.id, None).unwrap_err();

    assert!(matches!(err, AppError::Db(_)));
    assert!(streaks::find(&pool.conn, streak.id).unwrap().is_some());
    let log = audit::list_for(&pool.conn, streak.id).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].action, Action::Create);
}

#[test]
fn test_store_reports_missing_rows() {
    let pool = memory_pool();

    assert!(matches!(
        streaks::get(&pool.conn, 7),
        Err(AppError::NotFound(7))
    ));
    assert!(matches!(
        streaks::update_last_reset(&pool.conn, 7, at(JAN_1)),
        Err(AppError::NotFound(7))
    ));
    assert!(matches!(
        streaks::delete(&pool.conn, 7),
        Err(AppError::NotFound(7))
    ));
}

#[test]
fn test_update_last_reset_leaves_other_fields() {
    let mut pool = memory_pool();
    let streak = create_gym(&mut pool);
    let later = at("2025-06-01T12:00:00+02:00");

    streaks::update_last_reset(&pool.conn, streak.id, later).unwrap();

    let stored = streaks::get(&pool.conn, streak.id).unwrap();
    assert_eq!(stored.title, streak.title);
    assert_eq!(stored.start_date, streak.start_date);
    assert_eq!(stored.last_reset, later);
}

#[test]
fn test_logs_are_append_only() {
    let mut pool = memory_pool();
    create_gym(&mut pool);

    assert!(pool.conn.execute("DELETE FROM logs", []).is_err());
    assert!(
        pool.conn
            .execute("UPDATE logs SET reason = 'rewritten'", [])
            .is_err()
    );

    let log = audit::list_all(&pool.conn).unwrap();
    assert_eq!(log.len(), 1);
    assert_eq!(log[0].reason, "Gym");
}

#[test]
fn test_log_listing_is_oldest_first_across_streaks() {
    let mut pool = memory_pool();
    let a = create_gym(&mut pool);
    let clock = FixedClock(at("2025-01-02T00:00:00Z"));
    let b = CreateLogic::apply(&mut pool, &clock, "Reading", at(JAN_1), at(JAN_1)).unwrap();
    ResetLogic::apply(&mut pool, &clock, a.id, "skipped").unwrap();

    let all = ListLogic::log(&pool, None).unwrap();
    let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(all.len(), 3);

    let only_b = ListLogic::log(&pool, Some(b.id)).unwrap();
    assert_eq!(only_b.len(), 1);
    assert!(only_b.iter().all(|e| e.streak_id == b.id));
}
