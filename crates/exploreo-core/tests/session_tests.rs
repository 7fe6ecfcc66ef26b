mod common;

use std::sync::Arc;

use exploreo_core::{
    auth::AuthGate, store::ItineraryStore, ItineraryItem, ItinerarySession, LoadOutcome,
    SaveOutcome,
};
use jiff::tz::TimeZone;

use common::{create_test_store, sign_up};

#[tokio::test]
async fn test_save_and_reload_in_new_session() {
    let (_dir, store, auth) = create_test_store().await;
    auth.sign_up(&sign_up("lindiwe@example.com"))
        .await
        .expect("Failed to sign up");

    let mut session = ItinerarySession::new(Arc::new(store.clone()), auth.clone());
    session.add_item(
        ItineraryItem::new("Boulders Beach")
            .with_time("10:00")
            .with_coordinates(-34.1975, 18.4512),
    );
    session.add_item(ItineraryItem::new("Cape Point").with_note("lighthouse walk"));

    let SaveOutcome::Saved(id) = session.save().await.expect("Failed to save") else {
        panic!("expected a new itinerary");
    };

    let mut fresh = ItinerarySession::new(Arc::new(store.clone()), auth.clone())
        .with_time_zone(TimeZone::UTC);
    assert_eq!(fresh.load_latest().await.unwrap(), LoadOutcome::Loaded(2));
    assert_eq!(fresh.items(), session.items());
    assert_eq!(
        fresh.share_text().body(),
        "1. Boulders Beach (10:00)\n2. Cape Point: lighthouse walk\n"
    );

    let all = store.list_all(&auth.current_user_id().unwrap()).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, id);
}

#[tokio::test]
async fn test_latest_is_most_recent_save() {
    let (_dir, store, auth) = create_test_store().await;
    auth.sign_up(&sign_up("sipho@example.com")).await.unwrap();

    let mut session = ItinerarySession::new(Arc::new(store.clone()), auth.clone());
    for title in ["First", "Second", "Third"] {
        session.add_item(ItineraryItem::new(title));
        session.save().await.unwrap();
    }

    let mut fresh = ItinerarySession::new(Arc::new(store.clone()), auth.clone());
    fresh.load_latest().await.unwrap();
    let titles: Vec<&str> = fresh.items().iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    let uid = auth.current_user_id().unwrap();
    let all = store.list_all(&uid).await.unwrap();
    let sizes: Vec<usize> = all.iter().map(|it| it.items.len()).collect();
    assert_eq!(sizes, vec![3, 2, 1]);
}

#[tokio::test]
async fn test_itineraries_are_per_user() {
    let (_dir, store, auth) = create_test_store().await;
    auth.sign_up(&sign_up("first@example.com")).await.unwrap();

    let mut session = ItinerarySession::new(Arc::new(store.clone()), auth.clone());
    session.add_item(ItineraryItem::new("Kruger gate"));
    session.save().await.unwrap();

    auth.sign_out().await.unwrap();
    auth.sign_up(&sign_up("second@example.com")).await.unwrap();

    let mut other = ItinerarySession::new(Arc::new(store.clone()), auth.clone());
    assert_eq!(other.load_latest().await.unwrap(), LoadOutcome::NoneSaved);
    assert!(other.is_empty());
}

#[tokio::test]
async fn test_signed_out_session() {
    let (_dir, store, auth) = create_test_store().await;

    let mut session = ItinerarySession::new(Arc::new(store.clone()), auth.clone());
    assert_eq!(session.save().await.unwrap(), SaveOutcome::NothingToSave);

    session.add_item(ItineraryItem::new("Drakensberg"));
    assert_eq!(session.save().await.unwrap(), SaveOutcome::Unauthenticated);
    assert_eq!(
        session.load_latest().await.unwrap(),
        LoadOutcome::Unauthenticated
    );
    assert_eq!(session.len(), 1);
    assert!(store.list_all("").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_save_after_switching_user_creates_new_itinerary() {
    let (_dir, store, auth) = create_test_store().await;
    let first_uid = auth.sign_up(&sign_up("thabo@example.com")).await.unwrap();

    let mut session = ItinerarySession::new(Arc::new(store.clone()), auth.clone());
    session.add_item(ItineraryItem::new("Soweto"));
    let SaveOutcome::Saved(first_id) = session.save().await.unwrap() else {
        panic!("expected a new itinerary");
    };

    auth.sign_out().await.unwrap();
    assert_eq!(session.save().await.unwrap(), SaveOutcome::Unauthenticated);

    let second_uid = auth.sign_up(&sign_up("naledi@example.com")).await.unwrap();
    let SaveOutcome::Saved(second_id) = session.save().await.unwrap() else {
        panic!("expected a save for the new user");
    };
    assert_ne!(first_id, second_id);
    assert_eq!(
        session.save().await.unwrap(),
        SaveOutcome::AlreadySaved(second_id.clone())
    );

    let first = store.list_all(&first_uid).await.unwrap();
    let second = store.list_all(&second_uid).await.unwrap();
    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].id, second_id);
    assert_eq!(second[0].owner_id, second_uid);
}
