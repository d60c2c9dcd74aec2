mod client;

pub use client::ApiDictionary;
