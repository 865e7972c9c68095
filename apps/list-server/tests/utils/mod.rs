use std::sync::OnceLock;

pub mod context;

pub fn client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}
