use crate::domain::app::App;
use crate::domain::command::AskOptions;
use crate::ports::inbound::client::AskInteraction;
use crate::ports::outbound::answer_service::AnswerService;

impl<A> App<A>
where
    A: AnswerService + Send + Sync,
{
    pub async fn ask_command<I: AskInteraction + Sync>(&self, interaction: &I, options: AskOptions) {
        if let Err(why) = interaction.defer().await {
            log::warn!("couldn't defer ask response: {why}");
            return;
        }

        let content = match self.answer_service.ask(options.query()).await {
            Ok(answer) => answer,
            Err(why) => {
                log::warn!("answering service failed for {:?}: {why}", options.query());
                format!("Error: {why}")
            }
        };

        if let Err(why) = interaction.reply(content).await {
            log::error!("couldn't send ask response: {why}");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::app::App;
    use crate::domain::command::AskOptions;
    use crate::ports::inbound::client::{MessageInteractionError, MockAskInteraction};
    use crate::ports::outbound::answer_service::{AnswerError, MockAnswerService};
    use mockall::predicate::*;
    use mockall::Sequence;

    fn options(query: &str) -> AskOptions {
        AskOptions::new(query.to_string())
    }

    #[tokio::test]
    async fn test_ask_defers_before_calling_answer_service() {
        let mut seq = Sequence::new();

        let mut interaction = MockAskInteraction::new();
        let mut answer_service = MockAnswerService::new();

        interaction
            .expect_defer()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(()));
        answer_service
            .expect_ask()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(String::from("Building 14 is Frank E. Pilling")));
        interaction
            .expect_reply()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let app = App::new(answer_service);

        app.ask_command(&interaction, options("What building is building 14?"))
            .await;
    }

    #[tokio::test]
    async fn test_ask_replies_with_exact_answer() {
        let mut answer_service = MockAnswerService::new();
        answer_service
            .expect_ask()
            .times(1)
            .withf(|query: &str| query == "Where is Foaad's office?")
            .returning(|_| Ok(String::from("14-210")));

        let mut interaction = MockAskInteraction::new();
        interaction.expect_defer().times(1).returning(|| Ok(()));
        interaction
            .expect_reply()
            .times(1)
            .with(eq(String::from("14-210")))
            .returning(|_| Ok(()));

        let app = App::new(answer_service);

        app.ask_command(&interaction, options("Where is Foaad's office?"))
            .await;
    }

    #[tokio::test]
    async fn test_ask_replies_with_error_when_service_unavailable() {
        let mut answer_service = MockAnswerService::new();
        answer_service.expect_ask().times(1).returning(|_| {
            Err(AnswerError::Unavailable(String::from(
                "error sending request: Connection refused",
            )))
        });

        let mut interaction = MockAskInteraction::new();
        interaction.expect_defer().times(1).returning(|| Ok(()));
        interaction
            .expect_reply()
            .times(1)
            .with(eq(String::from(
                "Error: error sending request: Connection refused",
            )))
            .returning(|_| Ok(()));

        let app = App::new(answer_service);

        app.ask_command(&interaction, options("Who is foaad?")).await;
    }

    #[tokio::test]
    async fn test_ask_replies_with_error_when_answer_is_empty() {
        let mut answer_service = MockAnswerService::new();
        answer_service
            .expect_ask()
            .times(1)
            .returning(|_| Err(AnswerError::Empty));

        let mut interaction = MockAskInteraction::new();
        interaction.expect_defer().times(1).returning(|| Ok(()));
        interaction
            .expect_reply()
            .times(1)
            .withf(|message: &String| {
                message == "Error: the answering service returned an empty answer"
            })
            .returning(|_| Ok(()));

        let app = App::new(answer_service);

        app.ask_command(&interaction, options("?")).await;
    }

    #[tokio::test]
    async fn test_ask_stops_when_defer_fails() {
        // The answering service must not be called when the interaction can't be acknowledged
        let answer_service = MockAnswerService::new();

        let mut interaction = MockAskInteraction::new();
        interaction.expect_defer().times(1).returning(|| {
            Err(MessageInteractionError::new(String::from(
                "Unknown interaction",
            )))
        });

        let app = App::new(answer_service);

        app.ask_command(&interaction, options("What prereqs do I need for CSC349?"))
            .await;
    }

    #[tokio::test]
    async fn test_ask_survives_failed_reply() {
        let mut answer_service = MockAnswerService::new();
        answer_service
            .expect_ask()
            .times(1)
            .returning(|_| Ok(String::from("CSC 202 and CSC 203")));

        let mut interaction = MockAskInteraction::new();
        interaction.expect_defer().times(1).returning(|| Ok(()));
        interaction.expect_reply().times(1).returning(|_| {
            Err(MessageInteractionError::new(String::from(
                "Missing Access",
            )))
        });

        let app = App::new(answer_service);

        app.ask_command(&interaction, options("What prereqs do I need for CSC349?"))
            .await;
    }

    #[tokio::test]
    async fn test_concurrent_asks_get_their_own_answers() {
        let mut answer_service = MockAnswerService::new();
        answer_service
            .expect_ask()
            .times(2)
            .returning(|query| Ok(query.to_string()));

        let mut first = MockAskInteraction::new();
        first.expect_defer().times(1).returning(|| Ok(()));
        first
            .expect_reply()
            .times(1)
            .with(eq(String::from("When is CSC101 available next?")))
            .returning(|_| Ok(()));

        let mut second = MockAskInteraction::new();
        second.expect_defer().times(1).returning(|| Ok(()));
        second
            .expect_reply()
            .times(1)
            .with(eq(String::from("Who teaches CSC 357?")))
            .returning(|_| Ok(()));

        let app = App::new(answer_service);

        tokio::join!(
            app.ask_command(&first, options("When is CSC101 available next?")),
            app.ask_command(&second, options("Who teaches CSC 357?")),
        );
    }
}
