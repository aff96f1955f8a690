// file: src/wordbook/mod.rs
// description: word-list acquisition and record normalization
// reference: internal module structure

pub mod fetcher;
pub mod normalizer;

pub use fetcher::{FetchedWordList, WordListFetcher};
pub use normalizer::normalize;
