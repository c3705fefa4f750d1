use super::Semaphore;
cfg_not_loom! {
use std::sync::atomic::{AtomicUsize, Ordering::SeqCst};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn initial_count() {
    let sem = Semaphore::new(2);
    sem.wait();
    sem.wait();
    assert!(!sem.try_wait());
}

#[test]
fn signal_then_wait() {
    let sem = Semaphore::default();
    assert!(!sem.try_wait());
    sem.signal();
    assert!(sem.try_wait());
    assert!(!sem.try_wait());
}

#[test]
fn two_threads() {
    static SEM: Semaphore = Semaphore::new(0);
    thread::spawn(|| SEM.signal());
    SEM.wait();
}

#[test]
fn wait_blocks_until_signal() {
    let sem = Arc::new(Semaphore::new(0));
    let released = Arc::new(AtomicUsize::new(0));
    let handle = {
        let sem = sem.clone();
        let released = released.clone();
        thread::spawn(move || {
            sem.wait();
            released.fetch_add(1, SeqCst);
        })
    };

    thread::sleep(Duration::from_millis(50));
    assert_eq!(released.load(SeqCst), 0, "wait returned without a signal");
    sem.signal();
    handle.join().unwrap();
    assert_eq!(released.load(SeqCst), 1);
}

#[test]
fn no_lost_wakeups() {
    const WAITERS: usize = 8;
    const SIGNALLERS: usize = 4;
    const PER_WAITER: usize = 500;
    const TOTAL: usize = WAITERS * PER_WAITER;

    let sem = Arc::new(Semaphore::new(0));
    let completed = Arc::new(AtomicUsize::new(0));

    let waiters: Vec<_> = (0..WAITERS)
        .map(|_| {
            let sem = sem.clone();
            let completed = completed.clone();
            thread::spawn(move || {
                for _ in 0..PER_WAITER {
                    sem.wait();
                    completed.fetch_add(1, SeqCst);
                }
            })
        })
        .collect();

    let signallers: Vec<_> = (0..SIGNALLERS)
        .map(|_| {
            let sem = sem.clone();
            thread::spawn(move || {
                for _ in 0..TOTAL / SIGNALLERS {
                    sem.signal();
                }
            })
        })
        .collect();

    for h in signallers.into_iter().chain(waiters) {
        h.join().unwrap();
    }
    assert_eq!(completed.load(SeqCst), TOTAL);
    // every signal was consumed by exactly one wait
    assert!(!sem.try_wait());
}

}

cfg_loom! {
use loom::sync::Arc;
use loom::thread;

#[test]
fn two_threads() {
    loom::model(|| {
        let sem = Arc::new(Semaphore::new(0));
        let cloned = sem.clone();
        thread::spawn(move || cloned.signal());
        sem.wait();
    });
}

#[test]
fn signals_match_waits() {
    loom::model(|| {
        let sem = Arc::new(Semaphore::new(0));
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let sem = sem.clone();
                thread::spawn(move || sem.signal())
            })
            .collect();
        sem.wait();
        sem.wait();
        for h in handles {
            h.join().unwrap();
        }
        assert!(!sem.try_wait());
    });
}

}
