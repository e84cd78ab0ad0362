#![cfg(feature = "async")]

/// AsyncInjector behavior: same semantics as the blocking injector, with every
/// operation running as one uninterrupted turn.

use ferrous_inject::{AsyncInjector, InjectorError, Mode, Resolver};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, PartialEq)]
struct Ticket(usize);

#[tokio::test]
async fn test_singleton_factory_and_both() {
    let issued = Arc::new(AtomicUsize::new(0));
    let counter = issued.clone();
    let injector = AsyncInjector::new();

    injector
        .inject(Mode::Both, move |_| Ticket(counter.fetch_add(1, Ordering::SeqCst)))
        .await;
    assert_eq!(issued.load(Ordering::SeqCst), 1);

    let s1 = injector.extract::<Ticket>(Mode::Singleton).await;
    let s2 = injector.extract::<Ticket>(Mode::default()).await;
    assert!(Arc::ptr_eq(&s1, &s2));

    assert_eq!(*injector.extract::<Ticket>(Mode::Factory).await, Ticket(1));
    assert_eq!(*injector.extract::<Ticket>(Mode::Factory).await, Ticket(2));
}

#[tokio::test]
async fn test_eject_is_per_store() {
    let injector = AsyncInjector::new();
    injector.inject(Mode::Both, |_| Ticket(0)).await;

    injector.eject::<Ticket>(Mode::Singleton).await;
    assert!(injector.try_extract::<Ticket>(Mode::Singleton).await.is_err());
    assert!(injector.try_extract::<Ticket>(Mode::Factory).await.is_ok());

    injector.inject(Mode::Singleton, |_| Ticket(5)).await;
    injector.eject::<Ticket>(Mode::Factory).await;
    assert!(injector.try_extract::<Ticket>(Mode::Factory).await.is_err());
    assert_eq!(*injector.extract::<Ticket>(Mode::Both).await, Ticket(5));

    // Ejecting something absent is fine
    injector.eject::<String>(Mode::Both).await;
}

#[tokio::test]
async fn test_miss_policies() {
    let injector = AsyncInjector::new();

    assert_eq!(
        injector.try_extract::<Ticket>(Mode::Both).await.unwrap_err(),
        InjectorError::TypeNotFound {
            type_name: std::any::type_name::<Ticket>(),
            mode: Mode::Both,
        }
    );
    assert!(injector.extract_optional::<Ticket>(Mode::Both).await.is_none());
    assert!(!injector.contains::<Ticket>(Mode::Both).await);
}

#[tokio::test]
#[should_panic(expected = "type not found")]
async fn test_extract_panics_on_miss() {
    let injector = AsyncInjector::new();
    injector.extract::<Ticket>(Mode::Factory).await;
}

#[tokio::test]
async fn test_optional_target_uses_underlying_key() {
    let injector = AsyncInjector::new();
    injector.inject_instance(Ticket(4)).await;

    assert!(!injector.contains::<Option<Ticket>>(Mode::Both).await);
    let found = injector.extract_optional::<Ticket>(Mode::Both).await;
    assert_eq!(found.as_deref(), Some(&Ticket(4)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_operations_never_overlap() {
    // Tracks how many builders are running at once across all tasks
    let active = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));

    let injector = Arc::new(AsyncInjector::new());
    {
        let active = active.clone();
        let peak = peak.clone();
        injector
            .inject(Mode::Factory, move |_| {
                let now = active.fetch_add(1, Ordering::SeqCst) + 1;
                peak.fetch_max(now, Ordering::SeqCst);
                std::thread::sleep(Duration::from_millis(1));
                active.fetch_sub(1, Ordering::SeqCst);
                Ticket(now)
            })
            .await;
    }

    let tasks: Vec<_> = (0..32)
        .map(|i| {
            let injector = injector.clone();
            tokio::spawn(async move {
                for _ in 0..5 {
                    let ticket = injector.extract::<Ticket>(Mode::Factory).await;
                    assert_eq!(*ticket, Ticket(1));
                    if i % 4 == 0 {
                        injector.inject_instance(i as u64).await;
                        injector.eject::<u64>(Mode::Singleton).await;
                    }
                }
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(peak.load(Ordering::SeqCst), 1);
    assert!(!injector.contains::<u64>(Mode::Both).await);
}

/// One distinct type per `N`.
#[derive(Debug)]
struct Slot<const N: usize>(usize);

const ROUNDS: usize = 250;

async fn churn<const N: usize>(injector: Arc<AsyncInjector>) {
    for round in 0..ROUNDS {
        injector.inject(Mode::Both, move |_| Slot::<N>(round)).await;
        let _ = injector.extract_optional::<Slot<N>>(Mode::Both).await;
    }
}

async fn last_round<const N: usize>(injector: &AsyncInjector) -> (usize, usize) {
    let singleton = injector.extract::<Slot<N>>(Mode::Singleton).await;
    let fresh = injector.extract::<Slot<N>>(Mode::Factory).await;
    (singleton.0, fresh.0)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_registration_loses_no_updates() {
    let injector = Arc::new(AsyncInjector::new());
    let tasks = vec![
        tokio::spawn(churn::<0>(injector.clone())),
        tokio::spawn(churn::<1>(injector.clone())),
        tokio::spawn(churn::<2>(injector.clone())),
        tokio::spawn(churn::<3>(injector.clone())),
        tokio::spawn(churn::<4>(injector.clone())),
        tokio::spawn(churn::<5>(injector.clone())),
        tokio::spawn(churn::<6>(injector.clone())),
        tokio::spawn(churn::<7>(injector.clone())),
    ];

    for task in tasks {
        task.await.unwrap();
    }

    let last = ROUNDS - 1;
    assert_eq!(injector.len().await, 8);
    assert_eq!(last_round::<0>(&injector).await, (last, last));
    assert_eq!(last_round::<1>(&injector).await, (last, last));
    assert_eq!(last_round::<2>(&injector).await, (last, last));
    assert_eq!(last_round::<3>(&injector).await, (last, last));
    assert_eq!(last_round::<4>(&injector).await, (last, last));
    assert_eq!(last_round::<5>(&injector).await, (last, last));
    assert_eq!(last_round::<6>(&injector).await, (last, last));
    assert_eq!(last_round::<7>(&injector).await, (last, last));
}

#[tokio::test]
async fn test_builder_sees_injector_through_context() {
    struct Config {
        url: String,
    }
    struct Client {
        config: Arc<Config>,
    }

    let injector = AsyncInjector::new();
    injector
        .inject(Mode::Singleton, |_| Config {
            url: "http://localhost".to_string(),
        })
        .await;
    injector
        .inject(Mode::Both, |r| Client {
            config: r.extract::<Config>(Mode::Singleton),
        })
        .await;

    let cached = injector.extract::<Client>(Mode::Both).await;
    let fresh = injector.extract::<Client>(Mode::Factory).await;
    assert!(!Arc::ptr_eq(&cached, &fresh));
    assert!(Arc::ptr_eq(&cached.config, &fresh.config));
    assert_eq!(fresh.config.url, "http://localhost");
}
