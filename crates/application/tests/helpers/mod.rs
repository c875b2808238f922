mod mock_answers;

pub use mock_answers::MockAnswerGenerator;
