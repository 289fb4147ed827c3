use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use services::RoundTimer;

#[tokio::test]
async fn expiry_fires_exactly_once_and_not_early() {
    let duration = Duration::from_millis(80);
    let timer = RoundTimer::new(duration).unwrap();
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_in = Arc::clone(&fired);
    let last_remaining = Arc::new(Mutex::new(None));
    let last_in = Arc::clone(&last_remaining);

    let started = Instant::now();
    timer
        .run(
            move |remaining| {
                *last_in.lock().unwrap() = Some(remaining);
            },
            move || {
                fired_in.fetch_add(1, Ordering::SeqCst);
            },
        )
        .await;

    assert!(started.elapsed() >= duration);
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    // The final publish is the terminal zero.
    assert_eq!(*last_remaining.lock().unwrap(), Some(Duration::ZERO));
}

#[tokio::test]
async fn first_tick_publishes_the_full_duration() {
    let duration = Duration::from_millis(60);
    let timer = RoundTimer::new(duration).unwrap();
    let first = Arc::new(Mutex::new(None));
    let first_in = Arc::clone(&first);

    timer
        .run(
            move |remaining| {
                let mut slot = first_in.lock().unwrap();
                if slot.is_none() {
                    *slot = Some(remaining);
                }
            },
            || {},
        )
        .await;

    assert_eq!(*first.lock().unwrap(), Some(duration));
}

#[tokio::test]
async fn cancel_before_expiry_suppresses_the_callback() {
    let timer = RoundTimer::new(Duration::from_millis(200)).unwrap();
    let handle = timer.handle();
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_in = Arc::clone(&fired);

    let task = tokio::spawn(timer.run(
        |_| {},
        move || {
            fired_in.fetch_add(1, Ordering::SeqCst);
        },
    ));

    tokio::time::sleep(Duration::from_millis(30)).await;
    handle.cancel();
    task.await.unwrap();

    assert!(handle.is_cancelled());
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn cancel_before_the_first_tick_publishes_nothing() {
    let timer = RoundTimer::new(Duration::from_millis(50)).unwrap();
    let handle = timer.handle();
    handle.cancel();

    let ticks = Arc::new(AtomicUsize::new(0));
    let ticks_in = Arc::clone(&ticks);
    let fired = Arc::new(AtomicUsize::new(0));
    let fired_in = Arc::clone(&fired);

    timer
        .run(
            move |_| {
                ticks_in.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                fired_in.fetch_add(1, Ordering::SeqCst);
            },
        )
        .await;

    assert_eq!(ticks.load(Ordering::SeqCst), 0);
    assert_eq!(fired.load(Ordering::SeqCst), 0);
}

#[test]
fn zero_duration_is_rejected() {
    assert!(RoundTimer::new(Duration::ZERO).is_err());
}
