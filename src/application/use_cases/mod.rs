/// Use cases module containing application business logic orchestration
mod summarize_diff;

pub use summarize_diff::SummarizeDiffUseCase;
