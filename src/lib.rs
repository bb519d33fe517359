//! Word frequency counting as an in-process map / shuffle / reduce pipeline
//! running on a fixed pool of worker threads.

pub mod chart;
pub mod compute;
pub mod config;
pub mod error;
pub mod io;
pub mod pipeline;

pub use crate::compute::WorkerPool;
pub use crate::config::Config;
pub use crate::error::{Result, WordFreqError};
pub use crate::pipeline::tokenizer::{tokenize, WordsOfInterest};
pub use crate::pipeline::word_count::{count_words, WordFrequencies};
