//! Tests for the guild → subscription registry.

mod common;

use std::sync::Arc;
use std::time::Duration;

use pretty_assertions::assert_eq;
use serenity::model::id::GuildId;

use common::FakeOutput;
use jukebox::player::SubscriptionRegistry;

// Long enough that idle countdowns never fire inside these tests.
const IDLE_TIMEOUT: Duration = Duration::from_secs(60);

fn guild(n: u64) -> GuildId {
    GuildId::new(n)
}

#[tokio::test]
async fn at_most_one_subscription_per_guild() {
    let registry = SubscriptionRegistry::new(IDLE_TIMEOUT);

    let first = registry.get_or_create(guild(1), FakeOutput::new());
    let second = registry.get_or_create(guild(1), FakeOutput::new());

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 1);
}

#[tokio::test]
async fn distinct_guilds_get_distinct_subscriptions() {
    let registry = SubscriptionRegistry::new(IDLE_TIMEOUT);

    let first = registry.get_or_create(guild(2), FakeOutput::new());
    let second = registry.get_or_create(guild(3), FakeOutput::new());

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(registry.len(), 2);
}

#[tokio::test]
async fn remove_is_safe_to_call_twice() {
    let registry = SubscriptionRegistry::new(IDLE_TIMEOUT);
    let _subscription = registry.get_or_create(guild(4), FakeOutput::new());

    registry.remove(guild(4));
    registry.remove(guild(4));

    assert!(registry.get(guild(4)).is_none());
    assert!(registry.is_empty());
}

#[tokio::test]
async fn stop_removes_the_registry_entry() {
    let registry = SubscriptionRegistry::new(IDLE_TIMEOUT);
    let subscription = registry.get_or_create(guild(5), FakeOutput::new());

    subscription.stop().await;

    assert!(registry.get(guild(5)).is_none());

    // A later request starts a fresh session.
    let recreated = registry.get_or_create(guild(5), FakeOutput::new());
    assert!(!Arc::ptr_eq(&subscription, &recreated));
    assert!(!recreated.is_stopped().await);
}
