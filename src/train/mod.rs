pub mod trainer;
pub mod record;
pub mod loop_fn;

pub use trainer::train_example;
pub use record::TrainingRecord;
pub use loop_fn::train_loop;
