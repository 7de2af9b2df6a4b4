use agify_rs::api::BATCH_SIZE;
use agify_rs::{Client, Error};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

fn names(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("name{i}")).collect()
}

#[test]
fn batch_count_is_ceil_of_n_over_batch_size() {
    let client = Client::default();
    for (n, batches) in [(0, 0), (1, 1), (9, 1), (10, 1), (11, 2), (21, 3)] {
        let urls = client.batch_urls(&names(n), None);
        assert_eq!(urls.len(), batches, "n = {n}");
    }
}

#[test]
fn eleven_names_split_ten_plus_one() {
    let client = Client::default();
    let urls = client.batch_urls(&names(11), None);
    assert_eq!(urls.len(), 2);
    assert_eq!(urls[0].matches("name[]=").count(), BATCH_SIZE);
    assert_eq!(urls[1].matches("name[]=").count(), 1);
    // Boundaries are positional: the 11th name alone starts the second batch.
    assert!(urls[1].ends_with("?name[]=name10"));
    // No country filter requested, none appended.
    assert!(urls.iter().all(|u| !u.contains("country_id")));
}

#[test]
fn single_name_query_shape() {
    let client = Client::default();
    let urls = client.batch_urls(&["alice".to_string()], None);
    assert_eq!(urls, vec!["https://api.agify.io/?name[]=alice".to_string()]);
}

#[test]
fn country_filter_is_appended_once_per_query() {
    let client = Client::default();
    let urls = client.batch_urls(&names(15), Some("US"));
    assert_eq!(urls.len(), 2);
    for url in &urls {
        assert_eq!(url.matches("country_id=").count(), 1);
        assert!(url.ends_with("&country_id=US"));
    }
}

#[test]
fn names_are_percent_encoded() {
    let client = Client::default();
    let urls = client.batch_urls(&["éloise".to_string(), "mary ann".to_string()], None);
    assert_eq!(urls.len(), 1);
    assert!(urls[0].contains("name[]=%C3%A9loise"));
    assert!(urls[0].contains("name[]=mary%20ann"));
}

#[test]
fn failed_batch_aborts_before_further_batches_are_issued() {
    // Local server that answers every request with 429.
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let hits = Arc::new(AtomicUsize::new(0));
    let server_hits = Arc::clone(&hits);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { break };
            server_hits.fetch_add(1, Ordering::SeqCst);
            let mut buf = [0u8; 4096];
            let _ = stream.read(&mut buf);
            let _ = stream.write_all(
                b"HTTP/1.1 429 Too Many Requests\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
            );
        }
    });

    let mut client = Client::default();
    client.base_url = format!("http://{}", addr);

    // 25 names would be 3 batches; the first failure must end the fetch.
    let err = client.fetch(&names(25), None).unwrap_err();
    assert!(matches!(err, Error::RequestFailed(status) if status.as_u16() == 429));
    assert_eq!(hits.load(Ordering::SeqCst), 1, "later batches were still issued");
}

#[test]
fn input_order_is_preserved_within_a_batch() {
    let client = Client::default();
    let urls = client.batch_urls(&names(3), None);
    assert_eq!(
        urls[0],
        "https://api.agify.io/?name[]=name0&name[]=name1&name[]=name2"
    );
}
