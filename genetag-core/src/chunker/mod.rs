//! Span detection collaborators
//!
//! The reconciler only depends on the [`Chunker`] trait. Two implementations
//! ship with the crate: a lexicon-driven [`DictionaryChunker`] and a
//! [`StaticChunker`] that replays fixed spans.

mod dictionary;
mod fixed;

pub use dictionary::DictionaryChunker;
pub use fixed::StaticChunker;

use crate::annotation::Span;

/// Something that finds entity mentions in a single sentence
///
/// Spans are character offsets into exactly the string that was passed in.
/// Order is irrelevant and overlapping or empty spans are allowed.
pub trait Chunker {
    /// Find the mentions in `text`
    fn chunk(&self, text: &str) -> Vec<Span>;
}

impl<C: Chunker + ?Sized> Chunker for Box<C> {
    fn chunk(&self, text: &str) -> Vec<Span> {
        (**self).chunk(text)
    }
}

impl<C: Chunker + ?Sized> Chunker for &C {
    fn chunk(&self, text: &str) -> Vec<Span> {
        (**self).chunk(text)
    }
}
