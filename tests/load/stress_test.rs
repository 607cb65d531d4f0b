#![cfg(test)]
//! Load Testing Suite for the inventory service
//!
//! These tests bind a real listener and drive it over HTTP:
//! - Many concurrent lookup clients
//! - CPU burns stalling a single-worker server
//! - CPU burns isolated to one worker on a multi-worker server
//!
//! Key behaviours:
//! - A burn occupies the worker running it and never yields
//! - With one worker, every other request waits for the burn
//! - With several workers, other requests keep being served

use std::net::SocketAddr;
use std::sync::mpsc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

use inventory_service::{api, catalog::Catalog, config::Config, state::AppState};

/// Start a server on its own runtime with `worker_threads` workers.
fn spawn_server(worker_threads: usize) -> SocketAddr {
    let (tx, rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = if worker_threads == 1 {
            tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap()
        } else {
            tokio::runtime::Builder::new_multi_thread()
                .worker_threads(worker_threads)
                .enable_all()
                .build()
                .unwrap()
        };

        runtime.block_on(async move {
            let cfg = Config::default();
            let app = api::router(AppState::from_config(Catalog::seeded(), &cfg), &cfg);
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, app).await.unwrap();
        });
    });

    rx.recv_timeout(Duration::from_secs(5)).expect("server start")
}

async fn timed_get(
    client: &reqwest::Client,
    url: String,
    compute: bool,
) -> (reqwest::StatusCode, Duration) {
    let start = Instant::now();
    let mut request = client.get(url);
    if compute {
        request = request.header("x-compute", "true");
    }
    let response = request.send().await.expect("request sent");
    let status = response.status();
    let _ = response.bytes().await;
    (status, start.elapsed())
}

/// Test: Many concurrent lookup clients
///
/// 50 clients each issue 10 lookups; every lookup must succeed or miss
/// cleanly, and none should take long without a compute header.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore] // Ignore by default as this is a slow test
async fn test_concurrent_lookups() {
    let addr = spawn_server(4);
    let client = reqwest::Client::new();

    let mut tasks = JoinSet::new();
    for i in 0..50u32 {
        let client = client.clone();
        tasks.spawn(async move {
            for j in 0..10u32 {
                let id = (i + j) % 12 + 1;
                let (status, elapsed) =
                    timed_get(&client, format!("http://{}/inventory/{}", addr, id), false).await;
                if id <= 10 {
                    assert_eq!(status, reqwest::StatusCode::OK);
                } else {
                    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                }
                assert!(elapsed < Duration::from_millis(500), "lookup took {:?}", elapsed);
            }
        });
    }

    while let Some(result) = tasks.join_next().await {
        result.expect("client task should complete");
    }
}

/// Test: A burn stalls a single-worker server
///
/// A status check sent while a one-second burn is running cannot be served
/// until the burn finishes.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore] // Ignore by default as this is a slow test
async fn test_burn_blocks_single_worker() {
    let addr = spawn_server(1);
    let client = reqwest::Client::new();

    let burner = {
        let client = client.clone();
        tokio::spawn(async move {
            timed_get(&client, format!("http://{}/inventory/1", addr), true).await
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    let (status, check_elapsed) =
        timed_get(&client, format!("http://{}/status", addr), false).await;
    assert_eq!(status, reqwest::StatusCode::OK);

    let (burn_status, burn_elapsed) = burner.await.unwrap();
    assert_eq!(burn_status, reqwest::StatusCode::OK);
    assert!(burn_elapsed >= Duration::from_millis(1000));

    println!(
        "Single worker - burn: {:?}, status check: {:?}",
        burn_elapsed, check_elapsed
    );

    assert!(
        check_elapsed >= Duration::from_millis(700),
        "status check should wait for the burn, took {:?}",
        check_elapsed
    );
}

/// Test: A burn holds only its own worker
///
/// With several workers a status check is answered while a burn runs.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
#[ignore] // Ignore by default as this is a slow test
async fn test_burn_isolated_on_multi_worker() {
    let addr = spawn_server(4);
    let client = reqwest::Client::new();

    let burner = {
        let client = client.clone();
        tokio::spawn(async move {
            timed_get(&client, format!("http://{}/inventory/2", addr), true).await
        })
    };

    tokio::time::sleep(Duration::from_millis(100)).await;
    let (status, check_elapsed) =
        timed_get(&client, format!("http://{}/status", addr), false).await;
    assert_eq!(status, reqwest::StatusCode::OK);
    assert!(
        check_elapsed < Duration::from_millis(500),
        "status check should not wait for the burn, took {:?}",
        check_elapsed
    );

    let (burn_status, burn_elapsed) = burner.await.unwrap();
    assert_eq!(burn_status, reqwest::StatusCode::OK);
    assert!(burn_elapsed >= Duration::from_millis(2000));
}

/// Test: Concurrent burns
///
/// Each concurrent compute request lasts at least its own requested time.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore] // Ignore by default as this is a slow test
async fn test_concurrent_burns() {
    let addr = spawn_server(4);
    let client = reqwest::Client::new();

    let mut tasks = JoinSet::new();
    for _ in 0..4 {
        let client = client.clone();
        tasks.spawn(async move {
            // 0.3 × 1000 ms; misses the catalog but still burns first
            timed_get(&client, format!("http://{}/inventory/0.3", addr), true).await
        });
    }

    while let Some(result) = tasks.join_next().await {
        let (status, elapsed) = result.expect("burn task should complete");
        assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
        assert!(elapsed >= Duration::from_millis(300), "burn took {:?}", elapsed);
    }
}
