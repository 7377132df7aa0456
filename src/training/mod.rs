//! Text formats exchanged with the external classifier.

mod predictions;
mod serializer;

pub use predictions::{
    evaluate, parse_scores, scores_to_labels, ConfusionCounts, Evaluation, Percentages,
};
pub use serializer::TrainingRecordSerializer;
