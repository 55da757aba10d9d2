//! Tests for the invoked signal and its deferred reset.

use std::time::Duration;

use floatfield::form::{Form, FormConfig, Invocation};
use tokio::time::sleep;

const DELAY: Duration = Duration::from_secs(1);

#[tokio::test(start_paused = true)]
async fn test_signal_raises_then_resets() {
    let form = Form::new();
    assert!(!form.is_invoked());

    form.trigger_validate_all();
    assert!(form.is_invoked());

    sleep(DELAY - Duration::from_millis(1)).await;
    assert!(form.is_invoked());

    sleep(Duration::from_millis(2)).await;
    assert!(!form.is_invoked());
    assert_eq!(
        form.invocation(),
        Invocation {
            active: false,
            generation: 1
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_retrigger_extends_window() {
    let form = Form::new();

    form.trigger_validate_all();
    sleep(Duration::from_millis(600)).await;
    form.trigger_validate_all();

    // The first trigger's reset would have fired at 1000ms.
    sleep(Duration::from_millis(600)).await;
    assert!(form.is_invoked());

    sleep(Duration::from_millis(500)).await;
    assert!(!form.is_invoked());
    assert_eq!(form.invocation().generation, 2);
}

#[tokio::test(start_paused = true)]
async fn test_each_trigger_is_an_edge() {
    let form = Form::new();
    let mut watcher = form.subscribe();
    assert_eq!(watcher.poll(), None);

    for generation in 1..=3 {
        form.trigger_validate_all();
        let seen = watcher.poll().expect("trigger should be observed");
        assert!(seen.active);
        assert_eq!(seen.generation, generation);

        sleep(DELAY + Duration::from_millis(1)).await;
        assert!(!watcher.current().active);
        assert_eq!(watcher.poll(), None);
    }
}

#[tokio::test(start_paused = true)]
async fn test_watcher_next_waits_for_trigger() {
    let form = Form::new();
    let mut watcher = form.subscribe();

    let trigger = form.clone();
    tokio::spawn(async move {
        sleep(Duration::from_millis(100)).await;
        trigger.trigger_validate_all();
    });

    let seen = watcher.next().await.expect("form is alive");
    assert!(seen.active);
    assert_eq!(seen.generation, 1);
}

#[tokio::test(start_paused = true)]
async fn test_custom_reset_delay() {
    let form = Form::with_config(FormConfig::new("quick").reset_delay(Duration::from_millis(50)));
    form.trigger_validate_all();
    sleep(Duration::from_millis(51)).await;
    assert!(!form.is_invoked());
}

#[test]
fn test_without_runtime_still_counts_trigger() {
    let form = Form::new();
    let mut watcher = form.subscribe();

    form.trigger_validate_all();
    assert!(!form.is_invoked());

    let seen = watcher.poll().expect("trigger should be observed");
    assert_eq!(seen.generation, 1);
}

#[tokio::test]
async fn test_watcher_ends_with_form() {
    let form = Form::new();
    let mut watcher = form.subscribe();
    drop(form);
    assert_eq!(watcher.next().await, None);
}
