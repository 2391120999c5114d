//! Paging Example
//!
//! Walks every page of a search against a running usersearch-server.
//!
//! Run with either a client config file or a URL and token:
//!   cargo run --example paginate -- client.json "query"
//!   cargo run --example paginate -- http://localhost:8080 test_token "query"

use usersearch_rs::{ClientConfig, OrderBy, SearchClient, SearchRequest};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let target = args.next().unwrap_or_else(|| "http://localhost:8080".to_string());

    let config = if target.ends_with(".json") {
        ClientConfig::load(&target)?
    } else {
        ClientConfig {
            url: target,
            access_token: args.next().unwrap_or_default(),
            ..Default::default()
        }
    };
    let query = args.next().unwrap_or_default();

    let client = SearchClient::from_config(&config)?;
    println!("Searching {} for {:?}\n", client.url(), query);

    let mut request = SearchRequest {
        limit: 10,
        offset: 0,
        query,
        order_field: "Name".to_string(),
        order_by: OrderBy::Asc,
    };

    let mut page_no = 1;
    loop {
        let page = client.find_users(&request)?;
        println!("📄 Page {} ({} users)", page_no, page.users.len());
        for user in &page.users {
            println!("   {:>3}  {:<24} age {}", user.id, user.name, user.age);
        }

        if !page.next_page {
            break;
        }
        request.offset += request.limit;
        page_no += 1;
    }

    println!("\n✅ Done");
    Ok(())
}
