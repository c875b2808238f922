use ferrous_wire_application::ports::AnswerGenerator;
use ferrous_wire_application::use_cases::BuildReplyUseCase;
use ferrous_wire_domain::Config;
use ferrous_wire_infrastructure::dns::FixedAddressAnswer;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub build_reply: Arc<BuildReplyUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let answers = FixedAddressAnswer::from_config(config)?;
        info!(
            address = %answers.address(),
            ttl = answers.ttl(),
            "Answering every question with a fixed A record"
        );

        let answers: Arc<dyn AnswerGenerator> = Arc::new(answers);
        Ok(Self {
            build_reply: Arc::new(BuildReplyUseCase::new(answers)),
        })
    }
}
