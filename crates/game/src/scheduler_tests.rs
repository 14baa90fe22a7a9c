use super::*;

const MS: Duration = Duration::from_millis(1);

#[test]
fn test_nothing_due_before_delay() {
    let mut s = Scheduler::new();
    s.schedule(1000 * MS, 0, Task::OpponentMove);

    assert!(s.advance(999 * MS).is_empty());
    assert_eq!(s.pending(), 1);

    let due = s.advance(MS);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].task, Task::OpponentMove);
    assert_eq!(due[0].due, 1000 * MS);
    assert_eq!(s.pending(), 0);
}

#[test]
fn test_due_tasks_come_back_in_time_order() {
    let mut s = Scheduler::new();
    s.schedule(300 * MS, 1, Task::ClearHint { token: 3 });
    s.schedule(100 * MS, 1, Task::ClearHint { token: 1 });
    s.schedule(100 * MS, 2, Task::OpponentMove);
    s.schedule(200 * MS, 1, Task::ClearHint { token: 2 });

    let tasks: Vec<Task> = s.advance(300 * MS).into_iter().map(|t| t.task).collect();
    assert_eq!(
        tasks,
        vec![
            Task::ClearHint { token: 1 },
            Task::OpponentMove,
            Task::ClearHint { token: 2 },
            Task::ClearHint { token: 3 },
        ]
    );
}

#[test]
fn test_delay_is_relative_to_current_time() {
    let mut s = Scheduler::new();
    s.advance(500 * MS);
    let due = s.schedule(250 * MS, 0, Task::OpponentMove);
    assert_eq!(due, 750 * MS);
    assert_eq!(s.next_due(), Some(750 * MS));
    assert_eq!(s.now(), 500 * MS);
}

#[test]
fn test_epoch_is_carried_through() {
    let mut s = Scheduler::new();
    s.schedule(Duration::ZERO, 7, Task::OpponentMove);
    let due = s.advance(Duration::ZERO);
    assert_eq!(due[0].epoch, 7);
}
