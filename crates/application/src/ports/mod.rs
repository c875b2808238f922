mod answer_generator;

pub use answer_generator::AnswerGenerator;
