#![allow(dead_code)]

pub mod mock_catalog;

use shopdesk::api::{CatalogClient, Category, Product};
use shopdesk::config::ApiConfig;

pub fn client_for(base_url: &str) -> CatalogClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    };
    CatalogClient::new(&config).expect("client builds")
}

pub fn product(id: u64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: None,
        category: None,
        images: Vec::new(),
    }
}

pub fn full_product(id: u64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: Some(format!("{} description", title)),
        category: Some(Category {
            id: 1,
            name: "General".to_string(),
        }),
        images: vec![
            format!("https://img.example/{}-front.png", id),
            format!("https://img.example/{}-back.png", id),
        ],
    }
}
