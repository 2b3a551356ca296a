pub mod answer_normalizer;

pub use answer_normalizer::AnswerNormalizer;
