use super::assistant::{AssistantEvent, Job, Notifier, ShopAssistant, TypingDelay};
use super::conversation::Conversation;
use crate::ai::ResponseSelector;
use crate::config::Config;
use std::sync::mpsc as std_mpsc;
use std::time::Duration;

/// Пустой ввод и ввод из одних пробелов не отправляются
pub fn is_submittable(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Где сейчас приветствие: ждёт паузы, "печатается" или уже показано
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Welcome {
    Waiting,
    Typing,
    Shown,
}

/// Сессия чата: переписка, очередь ассистента и счётчик ответов "в наборе".
/// Поле ввода, кнопка Send и кнопки-подсказки идут через один и тот же `submit`.
pub struct ChatSession {
    conversation: Conversation,
    assistant: ShopAssistant,
    events: std_mpsc::Receiver<AssistantEvent>,
    pending: usize,
    welcome: Welcome,
}

impl ChatSession {
    /// Создаёт сессию и ставит в очередь приветствие
    pub fn start(config: &Config, selector: ResponseSelector, notify: Notifier) -> Self {
        let (min, max) = config.typing_delay();
        Self::with_delays(selector, TypingDelay::new(min, max), config.welcome_delay(), notify)
    }

    pub fn with_delays(
        selector: ResponseSelector,
        typing: TypingDelay,
        welcome_delay: Duration,
        notify: Notifier,
    ) -> Self {
        log::debug!(
            "⌨️ Задержка набора: {}-{} мс",
            typing.min().as_millis(),
            typing.max().as_millis()
        );

        let (sender, receiver) = std_mpsc::channel();
        let assistant = ShopAssistant::spawn(selector, typing, welcome_delay, sender, notify);

        let mut session = Self {
            conversation: Conversation::new(),
            assistant,
            events: receiver,
            pending: 0,
            welcome: Welcome::Shown,
        };
        if session.enqueue(Job::Welcome) {
            session.welcome = Welcome::Waiting;
        }
        session
    }

    fn enqueue(&mut self, job: Job) -> bool {
        match self.assistant.enqueue(job) {
            Ok(()) => {
                self.pending += 1;
                true
            }
            Err(e) => {
                log::error!("{:#}", e);
                false
            }
        }
    }

    /// Отправляет сообщение пользователя. Возвращает `false`, если отправлять нечего
    pub fn submit(&mut self, text: &str) -> bool {
        if !is_submittable(text) {
            return false;
        }

        self.conversation.push_user(text);
        self.enqueue(Job::Respond(text.to_string()));
        log::debug!("✉️ Сообщение отправлено, ожидается ответов: {}", self.pending);
        true
    }

    /// Переносит пришедшие ответы в переписку. Возвращает число новых сообщений
    pub fn poll(&mut self) -> usize {
        let mut received = 0;
        while let Ok(event) = self.events.try_recv() {
            match event {
                AssistantEvent::WelcomeTyping => self.welcome = Welcome::Typing,
                AssistantEvent::Reply(reply) => {
                    // Приветствие всегда первое в очереди
                    if self.welcome == Welcome::Typing {
                        self.welcome = Welcome::Shown;
                    }
                    self.conversation.push_reply(reply);
                    self.pending = self.pending.saturating_sub(1);
                    received += 1;
                }
            }
        }
        received
    }

    /// Индикатор набора. Приветствие, ждущее своей паузы, не считается
    pub fn is_typing(&self) -> bool {
        let waiting = usize::from(self.welcome == Welcome::Waiting);
        self.pending > waiting
    }

    #[cfg(test)]
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }
}
