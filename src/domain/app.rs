use crate::ports::outbound::answer_service::AnswerService;

pub struct App<A> {
    pub answer_service: A,
}

impl<A> App<A>
where
    A: AnswerService + Send + Sync,
{
    pub fn new(answer_service: A) -> Self {
        Self { answer_service }
    }
}
